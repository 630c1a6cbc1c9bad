//! Destination handling, auto filenames, and image persistence.

use std::io::Write;
use std::path::PathBuf;

use crate::error::AvatarError;

/// Where fetched image bytes should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Raw bytes to standard output.
    Stdout,
    /// A file path.
    Path(PathBuf),
}

impl Destination {
    /// Interpret a CLI destination argument; `-` is the stdout sentinel.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

/// Write fetched image bytes to a destination.
///
/// With `overwrite` unset, an existing file at the destination path is
/// detected before any write and reported as
/// [`AvatarError::DestinationExists`]; with it set, existing content is
/// truncated. Stdout gets the raw bytes and nothing else.
///
/// # Errors
///
/// Returns an error for an existing destination (when `overwrite` is unset)
/// or any underlying filesystem failure.
pub fn save(bytes: &[u8], destination: &Destination, overwrite: bool) -> Result<(), AvatarError> {
    match destination {
        Destination::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(bytes)?;
            handle.flush()?;
            Ok(())
        }
        Destination::Path(path) => {
            if !overwrite && path.exists() {
                return Err(AvatarError::DestinationExists(path.clone()));
            }
            std::fs::write(path, bytes)?;
            Ok(())
        }
    }
}

/// Generate the fallback output filename for an identity.
///
/// The uniqueness token is injected by the caller (the CLI passes the
/// process id) so the naming scheme stays testable. The identity is
/// sanitized to filename-safe kebab-case.
#[must_use]
pub fn auto_filename(token: &str, identity: &str) -> String {
    format!("avatar-{token}-{}.png", sanitize_for_filename(identity, 50))
}

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true; // Prevents leading hyphen

    for ch in input.chars().take(max_len * 2) {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    // Trim trailing hyphen
    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "avatar".to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_stdout_sentinel() {
        assert_eq!(Destination::from_arg("-"), Destination::Stdout);
        assert_eq!(Destination::from_arg("out.png"), Destination::Path(PathBuf::from("out.png")));
    }

    #[test]
    fn sanitize_email() {
        assert_eq!(sanitize_for_filename("Foo.Bar@Example.com", 50), "foo-bar-example-com");
    }

    #[test]
    fn sanitize_truncates() {
        let long = "a".repeat(100);
        assert!(sanitize_for_filename(&long, 10).len() <= 10);
    }

    #[test]
    fn sanitize_empty() {
        assert_eq!(sanitize_for_filename("", 50), "avatar");
        assert_eq!(sanitize_for_filename("@@@", 50), "avatar");
    }

    #[test]
    fn auto_filename_shape() {
        assert_eq!(auto_filename("1234", "foo@example.com"), "avatar-1234-foo-example-com.png");
    }

    #[test]
    fn save_refuses_existing_without_overwrite() {
        let dir = std::env::temp_dir().join("avaget_save_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("existing.png");
        std::fs::write(&path, b"old").unwrap();

        let dest = Destination::Path(path.clone());
        let err = save(b"new", &dest, false).unwrap_err();
        assert!(matches!(err, AvatarError::DestinationExists(_)));
        // Untouched by the failed save.
        assert_eq!(std::fs::read(&path).unwrap(), b"old");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_overwrite_truncates() {
        let dir = std::env::temp_dir().join("avaget_overwrite_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("existing.png");
        std::fs::write(&path, b"much longer old content").unwrap();

        let dest = Destination::Path(path.clone());
        save(b"new", &dest, true).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_new_file() {
        let dir = std::env::temp_dir().join("avaget_new_file_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fresh.png");

        save(b"\x89PNG", &Destination::Path(path.clone()), false).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_missing_directory_is_io_error() {
        let dest = Destination::Path(PathBuf::from("/nonexistent-dir-avaget/out.png"));
        assert!(matches!(save(b"x", &dest, false), Err(AvatarError::Io(_))));
    }
}
