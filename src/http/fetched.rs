use nexis_api::CustomError;

use crate::error::ClientError;

/// Value/error-list pair handed to the UI layer.
///
/// Exactly one side is populated when built from an adapter result.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub value: Option<T>,
    pub errors: Vec<CustomError>,
}

impl<T> Fetched<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value: Some(value),
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<CustomError>) -> Self {
        Self {
            value: None,
            errors,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            value: self.value.map(f),
            errors: self.errors,
        }
    }
}

impl<T> From<Result<T, ClientError>> for Fetched<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::failed(err.into_error_list()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_result_has_no_value() {
        let fetched: Fetched<u8> = Err(ClientError::InvalidEmail).into();
        assert!(fetched.value.is_none());
        assert_eq!(
            fetched.errors,
            vec![CustomError::new("Invalid email format", 0)]
        );
        assert!(!fetched.is_ok());
    }

    #[test]
    fn map_keeps_errors() {
        let fetched = Fetched::<u8>::failed(CustomError::list(["boom"])).map(u16::from);
        assert_eq!(fetched.errors.len(), 1);

        let doubled = Fetched::ok(2u8).map(|n| n * 2);
        assert_eq!(doubled.value, Some(4));
        assert!(doubled.is_ok());
    }
}
