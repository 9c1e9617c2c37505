//! Document model types.
//!
//! This module defines the flat, already-parsed representation that document
//! sources produce and the analysis stages consume, plus the chapter tree the
//! analysis builds on top of it.

mod chapter;
mod document;
mod heading;
mod paragraph;
mod table;

pub use chapter::{Chapter, Subsection};
pub use document::{DocumentModel, Metadata};
pub use heading::{headings_from_paragraphs, Heading};
pub use paragraph::{BlockKind, Paragraph, TextFormat};
pub use table::Table;
