//! Fetch error taxonomy
//!
//! Errors cross the network/app channel by value, so both variants carry
//! pre-formatted messages and stay `Clone`.

use thiserror::Error;

/// Failure of a single breed fetch
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connectivity, timeout, or non-2xx status
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}

/// Coarse error classification, used in log fields and tests
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Decode(_) => FetchErrorKind::Decode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(FetchError::Network("timeout".into()).kind(), FetchErrorKind::Network);
        assert_eq!(FetchError::Decode("bad shape".into()).kind(), FetchErrorKind::Decode);
    }
}
