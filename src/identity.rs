//! Identity generation for requests that supply no email address.

use std::process::Command;

use crate::error::AvatarError;

/// Produces a unique identity string when the caller supplies none.
///
/// The production implementation shells out to the OS `uuidgen` utility;
/// tests substitute a deterministic source.
pub trait IdentitySource {
    /// Generate a fresh identity string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying generator is unavailable or
    /// produces no usable output.
    fn generate(&self) -> Result<String, AvatarError>;
}

/// Identity source backed by an external unique-identifier utility.
pub struct ExternalGenerator {
    program: String,
}

impl ExternalGenerator {
    /// Create a source that invokes the given program with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for ExternalGenerator {
    fn default() -> Self {
        Self::new("uuidgen")
    }
}

impl IdentitySource for ExternalGenerator {
    fn generate(&self) -> Result<String, AvatarError> {
        let output = Command::new(&self.program).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AvatarError::Config(format!(
                    "required external generator '{}' not found",
                    self.program
                ))
            } else {
                AvatarError::Io(e)
            }
        })?;

        if !output.status.success() {
            return Err(AvatarError::Config(format!(
                "external generator '{}' exited with {}",
                self.program, output.status
            )));
        }

        let identity = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if identity.is_empty() {
            return Err(AvatarError::Config(format!(
                "external generator '{}' produced no output",
                self.program
            )));
        }
        Ok(identity)
    }
}
