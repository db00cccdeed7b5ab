//! Error types for the dotfield core.

use thiserror::Error;

/// Errors produced by engine construction and I/O.
///
/// Per-frame kinematic updates are total functions over floats and never
/// fail; every variant here is raised at construction or snapshot time.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero (or overflowed) when creating a viewport or pixel grid.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A sampling stride of zero was requested.
    #[error("invalid stride: sampling strides must be at least 1")]
    InvalidStride,

    /// The source image was missing, unreadable, or in an unsupported format.
    ///
    /// Recovery is the caller's choice: substitute a uniform default-colored
    /// grid, or fail the construction outright.
    #[error("image unavailable: {0}")]
    ImageUnavailable(String),

    /// A requested engine name was not found in the registry.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = EngineError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_stride_mentions_stride() {
        let err = EngineError::InvalidStride;
        let msg = format!("{err}");
        assert!(msg.contains("stride"), "missing 'stride' in: {msg}");
    }

    #[test]
    fn image_unavailable_includes_detail() {
        let err = EngineError::ImageUnavailable("portrait.png: no such file".into());
        let msg = format!("{err}");
        assert!(msg.contains("portrait.png"), "missing path in: {msg}");
    }

    #[test]
    fn unknown_engine_includes_name() {
        let err = EngineError::UnknownEngine("vortex".into());
        let msg = format!("{err}");
        assert!(msg.contains("vortex"), "missing engine name in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = EngineError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn io_includes_message() {
        let err = EngineError::Io("disk full".into());
        let msg = format!("{err}");
        assert!(msg.contains("disk full"), "missing message in: {msg}");
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }

    #[test]
    fn engine_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<EngineError>();
    }
}
