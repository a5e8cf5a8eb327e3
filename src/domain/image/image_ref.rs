use std::fmt::{self, Display, Formatter};
use std::fs;

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose};
use serde::{Serialize, Serializer};

use crate::error_chain_fmt;
use crate::literal::QuoteLiteral;

use super::patterns::{ENCODING_PREFIX, VALID_IMAGE, VALID_URL};

/// A validated reference to an image: a local file path, a remote URL, or an
/// already-inlined `data:` payload.
///
/// Validation is syntactic and runs once, at construction. It is necessary
/// but not sufficient: a reference can parse cleanly and still point at a
/// URL that 404s or a file that is not really an image. The filesystem is
/// never touched before [`render`](ImageRef::render).
#[derive(Debug)]
pub struct ImageRef {
    reference: String,
    is_local: bool,
}

#[derive(thiserror::Error)]
pub enum ImageError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl fmt::Debug for ImageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ImageRef {
    /// Returns an `ImageRef` if the string plausibly names an image.
    ///
    /// Accepted forms: a path ending in a recognized raster extension, a
    /// web URL, or a string already carrying the inline-image prefix.
    pub fn parse(s: String) -> Result<Self, ImageError> {
        if !Self::validate(&s) {
            return Err(ImageError::ValidationError(format!(
                "Invalid image reference: '{s}' is not an image path, URL, or inlined image."
            )));
        }

        // URLs and pre-encoded payloads go into the config as-is; everything
        // else is treated as a file on local storage.
        let is_local = !VALID_URL.is_match(&s) && !s.starts_with(ENCODING_PREFIX);

        Ok(Self {
            reference: s,
            is_local,
        })
    }

    fn validate(s: &str) -> bool {
        VALID_IMAGE.is_match(s) || VALID_URL.is_match(s) || s.starts_with(ENCODING_PREFIX)
    }

    pub fn is_local(&self) -> bool {
        self.is_local
    }

    /// Produces the string that goes into the renderer's config.
    ///
    /// A local reference is read from disk here, not at construction, and
    /// inlined as a base64 `data:` URI; the file handle is held only for the
    /// read. Remote URLs and pre-encoded payloads pass through untouched —
    /// no network round-trip, no reachability check.
    #[tracing::instrument(skip(self), fields(reference = %self.reference, is_local = self.is_local))]
    pub fn render(&self) -> Result<String, ImageError> {
        if !self.is_local {
            return Ok(self.reference.clone());
        }

        let bytes = fs::read(&self.reference)
            .with_context(|| format!("Failed to read image file at '{}'", self.reference))?;

        Ok(format!(
            "{ENCODING_PREFIX}{}",
            general_purpose::STANDARD.encode(bytes)
        ))
    }

    /// Renders, then quotes the result as a source literal for the embedding
    /// document.
    pub fn to_literal<Q: QuoteLiteral>(&self, quoting: &Q) -> Result<String, ImageError> {
        Ok(quoting.quote(&self.render()?))
    }
}

/// Equality compares rendered output, not the stored string: two references
/// whose files hold the same bytes are equal even when their paths differ.
/// A reference that fails to render is equal to nothing, itself included.
impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        match (self.render(), other.render()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.reference
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The raw reference, without touching the filesystem.
        self.reference.fmt(f)
    }
}

/// Serializes as the rendered string, so a reference dropped into any
/// serde-built config inlines local files automatically.
impl Serialize for ImageRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rendered = self.render().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&rendered)
    }
}
