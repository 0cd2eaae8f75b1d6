// src/application/resolution/outcome.rs
use crate::domain::errors::DomainResult;

/// Internal result of a resolution attempt. Unlike `Option`, it keeps a
/// failed upstream call apart from a legitimate miss.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Found(T),
    NotFound,
    UpstreamError(String),
}

impl<T> Resolution<T> {
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub const fn is_upstream_error(&self) -> bool {
        matches!(self, Self::UpstreamError(_))
    }

    /// Narrows to the public contract: upstream failures read as a miss.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::UpstreamError(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Self::Found(value) => Resolution::Found(f(value)),
            Self::NotFound => Resolution::NotFound,
            Self::UpstreamError(msg) => Resolution::UpstreamError(msg),
        }
    }

    /// Combines the outcome of an exhausted chain: any upstream failure wins
    /// over a plain miss so the failure stays diagnosable.
    pub(super) fn or_miss(self, other: Self) -> Self {
        match (self, other) {
            (Self::Found(value), _) | (_, Self::Found(value)) => Self::Found(value),
            (Self::UpstreamError(msg), _) | (_, Self::UpstreamError(msg)) => {
                Self::UpstreamError(msg)
            }
            (Self::NotFound, Self::NotFound) => Self::NotFound,
        }
    }
}

impl<T> From<DomainResult<Option<T>>> for Resolution<T> {
    fn from(value: DomainResult<Option<T>>) -> Self {
        match value {
            Ok(Some(found)) => Self::Found(found),
            Ok(None) => Self::NotFound,
            Err(err) => Self::UpstreamError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn upstream_error_narrows_to_none() {
        let outcome: Resolution<u8> =
            Err(DomainError::Persistence("connection refused".into())).into();
        assert!(outcome.is_upstream_error());
        assert_eq!(outcome.into_option(), None);
    }

    #[test]
    fn error_outranks_miss_when_combining() {
        let combined = Resolution::<u8>::NotFound.or_miss(Resolution::UpstreamError("x".into()));
        assert_eq!(combined, Resolution::UpstreamError("x".into()));
        assert_eq!(
            Resolution::UpstreamError("x".into()).or_miss(Resolution::Found(1)),
            Resolution::Found(1)
        );
    }
}
