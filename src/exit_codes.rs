//! Exit code constants for the review-inputs CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown field, unreadable input)
//! - 2: Parse failure (malformed context file)
//! - 3: I/O failure (output could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown field name, or unreadable input file.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the context file is not valid YAML or JSON.
pub const PARSE_FAILURE: i32 = 2;

/// I/O failure: rendered output could not be written.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARSE_FAILURE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(PARSE_FAILURE, 2);
        assert_eq!(IO_FAILURE, 3);
    }
}
