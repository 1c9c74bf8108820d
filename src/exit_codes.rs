//! Exit code constants for the portray CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown field key, bad value)
//! - 2: Schema error (invalid field registry)
//! - 3: I/O failure (values file or output file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown field key, or an un-coercible value.
pub const USER_ERROR: i32 = 1;

/// Schema error: the field registry is internally inconsistent.
pub const SCHEMA_ERROR: i32 = 2;

/// I/O failure: a values file could not be read or an output file written.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, SCHEMA_ERROR, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
