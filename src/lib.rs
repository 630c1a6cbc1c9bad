//! Gravatar-compatible avatar retrieval.
//!
//! Builds a validated [`AvatarRequest`] from an identity (an email address
//! or a generated token), derives its MD5 lookup hash, fetches the image
//! from a gravatar-compatible service with a single blocking GET, and
//! writes the bytes to a file or stdout.
//!
//! ```no_run
//! use avaget::{AvatarRequest, ExternalGenerator, Style, DEFAULT_SIZE};
//!
//! let mut request = AvatarRequest::new(
//!     Some("foo@example.com"),
//!     Style::Identicon,
//!     DEFAULT_SIZE,
//!     &ExternalGenerator::default(),
//! )?;
//! let bytes = request.fetch()?;
//! std::fs::write("avatar.png", bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod error;
pub mod hash;
pub mod identity;
pub mod output;
pub mod request;

pub use error::AvatarError;
pub use hash::identity_hash;
pub use identity::{ExternalGenerator, IdentitySource};
pub use output::{auto_filename, save, Destination};
pub use request::{
    parse_size, AvatarRequest, Style, DEFAULT_SIZE, GRAVATAR_URL, MAX_SIZE, MIN_SIZE,
};
