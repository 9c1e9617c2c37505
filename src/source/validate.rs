//! File validation and fingerprinting.

use super::options::LoadOptions;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Information about a validated input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Path as given
    pub path: String,

    /// File name without directories
    pub name: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Human-readable size, e.g. "1.5 KB"
    pub size_formatted: String,

    /// Lowercase extension without the dot
    pub extension: String,

    /// MD5 of the file contents, lowercase hex
    pub hash: String,

    /// When the file was validated
    pub loaded_at: DateTime<Utc>,
}

/// Validate a file and collect its [`FileInfo`].
///
/// Checks, in order: the path is an existing regular file, its extension is
/// accepted by `options`, and its size is within the configured limit.
pub fn validate_file<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<FileInfo> {
    let path = path.as_ref();
    let display = path.display().to_string();
    log::debug!("Validating file: {}", display);

    let metadata = match std::fs::metadata(path) {
        Ok(m) if m.is_file() => m,
        _ => {
            return Err(Error::Validation {
                path: display,
                reason: "File does not exist or is not readable".to_string(),
            })
        }
    };

    let extension = extension_of(path);
    if !options.accepts(&extension) {
        return Err(Error::UnsupportedFormat {
            path: display,
            extension,
            supported: options.supported_extensions.clone(),
        });
    }

    let size_bytes = metadata.len();
    let size_mb = size_bytes as f64 / BYTES_PER_MB;
    if size_mb > options.max_file_size_mb as f64 {
        return Err(Error::FileTooLarge {
            path: display,
            size_mb,
            max_mb: options.max_file_size_mb,
        });
    }

    let hash = file_hash(path).map_err(|e| Error::Validation {
        path: display.clone(),
        reason: format!("Permission denied: {}", e),
    })?;

    log::debug!("File validation passed for: {}", display);

    Ok(FileInfo {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: display,
        size_bytes,
        size_formatted: format_bytes(size_bytes),
        extension,
        hash,
        loaded_at: Utc::now(),
    })
}

/// Lowercase extension of `path` without the dot (empty when there is none).
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// MD5 of a file's contents as lowercase hex.
pub fn file_hash<P: AsRef<Path>>(path: P) -> std::io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Md5::new();
    let mut buffer = [0u8; 4096];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Format a byte count with binary units, e.g. `1536` → `"1.5 KB"`.
pub fn format_bytes(size_bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if size_bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = size_bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.1} {}", rounded, UNITS[unit])
    } else {
        format!("{} {}", rounded, UNITS[unit])
    }
}
