//! The avatar request model: validated construction and remote fetch.

use std::fmt;
use std::str::FromStr;

use crate::error::AvatarError;
use crate::hash::identity_hash;
use crate::identity::IdentitySource;

/// Base URL of the remote avatar service.
pub const GRAVATAR_URL: &str = "https://www.gravatar.com/avatar";

/// Smallest accepted square image dimension, in pixels.
pub const MIN_SIZE: u32 = 1;
/// Largest accepted square image dimension, in pixels.
pub const MAX_SIZE: u32 = 512;
/// Dimension used when the caller does not specify one.
pub const DEFAULT_SIZE: u32 = 80;

/// Fallback-generation algorithm the service applies when no custom image is
/// registered for a hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Geometric pattern derived from the hash.
    #[default]
    Identicon,
    /// Generated monster face.
    Monsterid,
    /// Generated human-ish face.
    Wavatar,
    /// 8-bit arcade-style face.
    Retro,
}

impl Style {
    /// The wire name used in the request URL's `d` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identicon => "identicon",
            Self::Monsterid => "monsterid",
            Self::Wavatar => "wavatar",
            Self::Retro => "retro",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identicon" => Ok(Self::Identicon),
            "monsterid" => Ok(Self::Monsterid),
            "wavatar" => Ok(Self::Wavatar),
            "retro" => Ok(Self::Retro),
            other => Err(AvatarError::InvalidStyle(other.to_string())),
        }
    }
}

/// Parse a size argument, distinguishing non-numeric input from an integer
/// outside [`MIN_SIZE`]..=[`MAX_SIZE`].
///
/// Negative values are integers, so they report as out of range rather than
/// as a type error.
///
/// # Errors
///
/// Returns [`AvatarError::SizeNotInteger`] or [`AvatarError::SizeOutOfRange`].
pub fn parse_size(s: &str) -> Result<u32, AvatarError> {
    let size: i64 = s.parse().map_err(|_| AvatarError::SizeNotInteger(s.to_string()))?;
    match u32::try_from(size) {
        Ok(v) if (MIN_SIZE..=MAX_SIZE).contains(&v) => Ok(v),
        _ => Err(AvatarError::SizeOutOfRange(size)),
    }
}

fn check_size(size: u32) -> Result<(), AvatarError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(AvatarError::SizeOutOfRange(i64::from(size)))
    }
}

/// A validated request for one avatar image.
///
/// Constructed once per invocation; the content hash is computed eagerly and
/// never changes. No network activity happens until [`AvatarRequest::fetch`].
#[derive(Debug)]
pub struct AvatarRequest {
    identity: String,
    hash: String,
    style: Style,
    size_px: u32,
    image: Option<Vec<u8>>,
}

impl AvatarRequest {
    /// Build a validated request.
    ///
    /// When `identity` is `None`, one is generated via `source`; the
    /// generator is consulted only on that path.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range size, or a config
    /// error if identity generation was needed and failed.
    pub fn new(
        identity: Option<&str>,
        style: Style,
        size_px: u32,
        source: &dyn IdentitySource,
    ) -> Result<Self, AvatarError> {
        check_size(size_px)?;
        let identity = match identity {
            Some(id) => id.to_string(),
            None => source.generate()?,
        };
        let hash = identity_hash(&identity);
        Ok(Self { identity, hash, style, size_px, image: None })
    }

    /// The identity this request was built from.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The 32-character lowercase hex lookup hash.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The fallback-generation style.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// The requested square dimension in pixels.
    #[must_use]
    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    /// The fetched image bytes, if a fetch has succeeded.
    #[must_use]
    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    /// The request URL against the given service base.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{base}/{}?d={}&s={}", self.hash, self.style, self.size_px)
    }

    /// Fetch the avatar from gravatar.
    ///
    /// # Errors
    ///
    /// See [`AvatarRequest::fetch_from`].
    pub fn fetch(&mut self) -> Result<&[u8], AvatarError> {
        self.fetch_from(GRAVATAR_URL)
    }

    /// Fetch the avatar from a gravatar-compatible service at `base`.
    ///
    /// One blocking GET, no retries, no caching; calling again always
    /// re-issues the request. On success the bytes are stored on the request
    /// and returned. On failure the request is left without image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AvatarError::Api`] for a non-success status, or
    /// [`AvatarError::Network`] for a transport failure.
    pub fn fetch_from(&mut self, base: &str) -> Result<&[u8], AvatarError> {
        let response = reqwest::blocking::get(self.url(base))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AvatarError::Api { status: status.as_u16() });
        }
        let bytes = response.bytes()?;
        Ok(self.image.insert(bytes.to_vec()).as_slice())
    }
}

impl fmt::Display for AvatarRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Identity: {}", self.identity)?;
        writeln!(f, "Hash:     {}", self.hash)?;
        writeln!(f, "Style:    {}", self.style)?;
        write!(f, "Size:     {}px", self.size_px)
    }
}
