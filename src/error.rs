use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnigmaError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Position {0} is out of range. Must be between 0 and 25")]
    OutOfRange(usize),

    #[error("Malformed configuration line: {0}")]
    MalformedConfiguration(String),

    #[error("Rotor {0} is used in more than one slot")]
    DuplicateRotor(String),

    #[error("Invalid message character: {0:?}")]
    InvalidMessage(char),

    #[error("Machine has not been configured")]
    NotConfigured,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnigmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = EnigmaError::OutOfRange(26);
        assert_eq!(
            err.to_string(),
            "Position 26 is out of range. Must be between 0 and 25"
        );
    }

    #[test]
    fn test_display_invalid_message() {
        let err = EnigmaError::InvalidMessage('3');
        assert_eq!(err.to_string(), "Invalid message character: '3'");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: EnigmaError = io.into();
        assert!(matches!(err, EnigmaError::Io(_)));
    }
}
