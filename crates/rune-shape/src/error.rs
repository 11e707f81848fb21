use std::fmt;

/// Errors produced while building or shaping a layout.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout builder requires at least one font")]
    EmptyFontList,
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid font data")]
    InvalidFont,
    #[error("text segmentation failed: {0}")]
    Segmentation(String),
    #[error("shaping failed: {0}")]
    Shaping(String),
    #[error("outline of glyph {glyph_id} is malformed")]
    MalformedOutline { glyph_id: u32 },
}

impl Error {
    pub(crate) fn shaping(err: impl fmt::Display) -> Self {
        Error::Shaping(err.to_string())
    }
}

/// Convenient result alias for layout and shaping operations.
pub type Result<T> = std::result::Result<T, Error>;
