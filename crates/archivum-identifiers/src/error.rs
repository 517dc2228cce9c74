//! Error types for identifier lookups

use thiserror::Error;

/// Hard failure while resolving an identifier
///
/// A candidate that simply does not match a scheme is not an error; it is
/// reported as `Ok(None)` by classifiers and strategies.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The object or identifier store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with an error
    #[error("Store error: {0}")]
    Store(String),

    /// The scheme classifier failed for a reason other than a non-match
    #[error("Classifier error: {0}")]
    Classifier(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_error_display() {
        let err = LookupError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "Store unavailable: connection refused");

        let err = LookupError::Classifier("resolver timed out".into());
        assert_eq!(err.to_string(), "Classifier error: resolver timed out");
    }
}
