//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use rummisolve::SolverError;
    use rummisolve::io::error::{invalid_parameter, invalid_token};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SolverError::FileSystem {
            path: "/tmp/puzzle.txt".into(),
            operation: "read puzzle",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read puzzle"));
        assert!(message.contains("/tmp/puzzle.txt"));
        assert!(message.contains("file not found"));
    }

    // Tests token errors name the token and reason
    // Verified by omitting the token from the message
    #[test]
    fn test_invalid_token_error() {
        let error = invalid_token(&"X5", "unknown color");
        assert_eq!(error.to_string(), "Invalid tile token 'X5': unknown color");
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("max_batch_size", &0, &"must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'max_batch_size' = '0': must be positive"
        );
    }

    // Tests malformed input reports its line
    // Verified by printing a 0-based line number
    #[test]
    fn test_malformed_input_error() {
        let error = SolverError::MalformedInput {
            line: 3,
            reason: "unknown directive 'hand'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed input on line 3: unknown directive 'hand'"
        );
    }

    // Tests io::Error conversion preserves the source
    // Verified by dropping the source in From
    #[test]
    fn test_from_io_error() {
        let error: SolverError = std::io::Error::other("disk gone").into();
        assert!(matches!(error, SolverError::FileSystem { .. }));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("disk gone"));
    }
}
