//! Error types for logo rendering and persistence.

use std::path::PathBuf;

/// Convenience result type used across logoforge.
pub type Result<T> = std::result::Result<T, LogoError>;

/// Errors surfaced by rendering, saving and loading.
///
/// Unknown config keys and unknown template/pattern/effect names are never
/// errors; they fall back to documented defaults instead.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    /// A file or directory could not be read, written or created.
    #[error("i/o error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A serialized config could not be parsed or produced.
    #[error("config format error: {0}")]
    Format(#[from] serde_json::Error),

    /// The raster image could not be encoded.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The canvas could not be allocated with the requested dimensions.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },
}

impl LogoError {
    /// Build a [`LogoError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = LogoError::io(
            "/nowhere/logo.png",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/logo.png"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn format_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LogoError = serde_err.into();
        assert!(matches!(err, LogoError::Format(_)));
    }

    #[test]
    fn canvas_size_error_display() {
        let err = LogoError::InvalidCanvasSize {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "invalid canvas size 0x10");
    }
}
