use thiserror::Error;

/// Main error type for kripke-frames
#[derive(Error, Debug)]
pub enum FrameError {
    /// The model cannot provide a required capability (world enumeration
    /// or successor lookup). Never interpreted as an empty model.
    #[error("Model contract violation: {0}")]
    ContractViolation(String),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient Result type using FrameError
pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrameError::Config("Test error".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Test error"));
    }

    #[test]
    fn test_contract_violation_display() {
        let err = FrameError::ContractViolation("no world enumeration".to_string());
        assert_eq!(
            err.to_string(),
            "Model contract violation: no world enumeration"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let frame_err: FrameError = io_err.into();
        assert!(matches!(frame_err, FrameError::Io(_)));
    }
}
