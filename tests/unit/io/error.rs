//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use autostereogram::StereogramError;
    use autostereogram::io::error::{degenerate_geometry, invalid_parameter, invalid_source};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = StereogramError::FileSystem {
            path: "/tmp/out".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create directory"));
    }

    // Tests ShiftOutOfRange carries its position and window
    #[test]
    fn test_shift_out_of_range_error() {
        let error = StereogramError::ShiftOutOfRange {
            row: 12,
            col: 40,
            shift: 9.0,
            tile_width: 8,
        };

        let message = error.to_string();
        assert!(message.contains("row 12"));
        assert!(message.contains("column 40"));
        assert!(message.contains("[0, 8)"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("shift_amplitude", &1.5, &"must be within [0, 1)");

        let message = error.to_string();
        assert!(message.contains("shift_amplitude"));
        assert!(message.contains("1.5"));
        assert!(message.contains("must be within [0, 1)"));
    }

    // Tests ImageLoad error includes path and source details
    #[test]
    fn test_image_load_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = StereogramError::ImageLoad {
            path: PathBuf::from("/restricted/depth.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/depth.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests helper constructors pick the matching variants
    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            degenerate_geometry(&"zero columns"),
            StereogramError::DegenerateGeometry { reason } if reason == "zero columns"
        ));
        assert!(matches!(
            invalid_source(&"empty"),
            StereogramError::InvalidSourceData { reason } if reason == "empty"
        ));
    }
}
