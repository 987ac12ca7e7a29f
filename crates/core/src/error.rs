//! Error types for the tri-pattern core.

use thiserror::Error;

/// Errors produced while building or exporting a triangle pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Width or height was missing (zero) when constructing a pattern.
    #[error("missing dimension: {0} is required and must be non-zero")]
    MissingDimension(&'static str),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be used to build a color scale.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A named lookup (palette, style, color mode) did not match anything.
    #[error("unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dimension_names_the_axis() {
        let err = PatternError::MissingDimension("width");
        let msg = format!("{err}");
        assert!(
            msg.contains("width"),
            "expected message naming the axis, got: {msg}"
        );
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = PatternError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing detail in: {msg}");
    }

    #[test]
    fn invalid_palette_includes_message() {
        let err = PatternError::InvalidPalette("empty".into());
        let msg = format!("{err}");
        assert!(msg.contains("empty"), "missing detail in: {msg}");
    }

    #[test]
    fn unknown_name_includes_kind_and_name() {
        let err = PatternError::UnknownName {
            kind: "palette",
            name: "Mauve".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("palette"), "missing kind in: {msg}");
        assert!(msg.contains("Mauve"), "missing name in: {msg}");
    }

    #[test]
    fn io_includes_message() {
        let err = PatternError::Io("disk full".into());
        let msg = format!("{err}");
        assert!(msg.contains("disk full"), "missing detail in: {msg}");
    }

    #[test]
    fn pattern_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternError>();
    }

    #[test]
    fn pattern_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PatternError>();
    }
}
