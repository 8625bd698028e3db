use thiserror::Error;

/// Failures the scan service surfaces to callers. Provider failures are
/// absent on purpose: they are recovered locally by the mock fallback and
/// never become a response.
#[derive(Error, Debug)]
pub enum PatrolError {
    /// Request input was malformed or incomplete. Maps to a client error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request-scoped upload could not be stored. Maps to a server
    /// error; no retry.
    #[error("Upload error: {0}")]
    Upload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_their_category() {
        let err = PatrolError::Validation("Missing required field: file".into());
        assert_eq!(err.to_string(), "Validation error: Missing required field: file");

        let err = PatrolError::Upload("disk full".into());
        assert_eq!(err.to_string(), "Upload error: disk full");
    }
}
