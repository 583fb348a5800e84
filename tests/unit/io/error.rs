//! Tests for error messages, classification and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;

    use minecluster::SimulationError;
    use minecluster::io::error::invalid_parameter;

    // Tests the capacity error names both numbers
    // Verified by swapping the fields in Display
    #[test]
    fn test_capacity_error_message() {
        let err = SimulationError::MineCountExceedsCapacity {
            mine_count: 10,
            capacity: 9,
        };
        let message = err.to_string();

        assert!(message.starts_with("Configuration error"));
        assert!(message.contains("10 mines"));
        assert!(message.contains("9 cells"));
        assert!(err.is_configuration_error());
    }

    // Tests the invalid parameter helper fills every field
    // Verified by dropping the value from the message
    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("trials", &0, &"must be positive");

        assert_eq!(
            err.to_string(),
            "Invalid parameter 'trials' = '0': must be positive"
        );
        assert!(err.is_configuration_error());
    }

    // Tests the stall error reports progress and is not a configuration error
    // Verified by classifying every variant as configuration
    #[test]
    fn test_stall_error() {
        let err = SimulationError::GenerationStalled {
            mine_count: 4,
            placed: 3,
            attempts: 1024,
        };

        assert!(err.to_string().contains("1024 draws"));
        assert!(err.to_string().contains("3 of 4"));
        assert!(!err.is_configuration_error());
        assert!(err.source().is_none());
    }

    // Tests file system errors expose the I/O cause
    // Verified by returning None from source for every variant
    #[test]
    fn test_file_system_error_source() {
        let err = SimulationError::FileSystem {
            path: PathBuf::from("out/report.txt"),
            operation: "report write",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert!(err.source().is_some());
        assert!(err.to_string().contains("report write"));
        assert!(err.to_string().contains("out/report.txt"));
    }
}
