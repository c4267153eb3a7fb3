//! Validation for the buffer load surface
//!
//! Files are validated before they are read into a buffer, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary file detection
//!
//! Decoding failures of byte streams are reported through the same error type.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur when loading text into a buffer
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// File does not exist
    NotFound,
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    BinaryFile,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Byte stream is not valid UTF-8
    InvalidUtf8 { valid_up_to: usize },
    /// Other I/O error
    Io(String),
}

impl LoadError {
    /// Get a user-friendly error message
    pub fn user_message(&self, source_name: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", source_name),
            Self::PermissionDenied => format!("Permission denied: {}", source_name),
            Self::IsDirectory => format!("Cannot open directory: {}", source_name),
            Self::BinaryFile => format!("Cannot open binary file: {}", source_name),
            Self::TooLarge { size_mb } => {
                format!(
                    "{} is too large ({:.1} MB, max {} MB)",
                    source_name,
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                )
            }
            Self::InvalidUtf8 { valid_up_to } => format!(
                "{} is not valid UTF-8 (first bad byte at offset {})",
                source_name, valid_up_to
            ),
            Self::Io(msg) => format!("Error reading {}: {}", source_name, msg),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "invalid UTF-8 at byte offset {}", valid_up_to)
            }
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound,
            std::io::ErrorKind::PermissionDenied => LoadError::PermissionDenied,
            _ => LoadError::Io(e.to_string()),
        }
    }
}

/// Validate a file before attempting to load it
///
/// Checks:
/// - File exists
/// - Is not a directory
/// - Has read permissions
/// - Does not exceed size limit
///
/// Does NOT check for binary content (use `is_likely_binary` separately after this passes)
pub fn validate_file_for_loading(path: &Path) -> Result<(), LoadError> {
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(LoadError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(LoadError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning for null bytes
///
/// Reads the first 8KB of the file and checks for null bytes,
/// which are common in binary files but rare in text files.
///
/// Returns `false` on any read error (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_nonexistent_file() {
        let result = validate_file_for_loading(Path::new("/nonexistent/path/file.txt"));
        assert!(matches!(result, Err(LoadError::NotFound)));
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_file_for_loading(dir.path());
        assert!(matches!(result, Err(LoadError::IsDirectory)));
    }

    #[test]
    fn test_validate_valid_file() {
        let temp = NamedTempFile::new().unwrap();
        assert!(validate_file_for_loading(temp.path()).is_ok());
    }

    #[test]
    fn test_is_binary_text_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "Hello, world!").unwrap();
        writeln!(temp, "This is a text file.").unwrap();
        temp.flush().unwrap();

        assert!(!is_likely_binary(temp.path()));
    }

    #[test]
    fn test_is_binary_with_null_bytes() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"Hello\x00World").unwrap();
        temp.flush().unwrap();

        assert!(is_likely_binary(temp.path()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LoadError::NotFound.user_message("notes.txt"),
            "File not found: notes.txt"
        );
        assert_eq!(
            LoadError::IsDirectory.user_message("mydir"),
            "Cannot open directory: mydir"
        );
        assert_eq!(
            LoadError::InvalidUtf8 { valid_up_to: 3 }.to_string(),
            "invalid UTF-8 at byte offset 3"
        );
    }
}
