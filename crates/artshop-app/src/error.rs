use artshop_types::ValidationError;
use std::fmt;

/// Application-layer failure: either the form rejected the input before
/// any request was made, or the API call itself failed.
#[derive(Debug)]
pub enum Error {
    Validation(ValidationError),
    Api(artshop_client::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(err) => write!(f, "{}", err),
            Error::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(err) => Some(err),
            Error::Api(err) => Some(err),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<artshop_client::Error> for Error {
    fn from(err: artshop_client::Error) -> Self {
        Error::Api(err)
    }
}
