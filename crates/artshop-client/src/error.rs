use reqwest::StatusCode;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Client-layer failures. Both variants collapse to the same handling path
/// in the UI: show the server's `message` when present, otherwise a
/// localized fallback. No status-code-specific branching happens anywhere.
#[derive(Debug)]
pub enum Error {
    /// The request never produced a response (connect, DNS, body read).
    Transport(reqwest::Error),
    /// Non-2xx response; `message` comes from the optional error body.
    Api {
        status: StatusCode,
        message: Option<String>,
    },
}

impl Error {
    /// The string the UI shows for this failure.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "transport error: {}", err),
            Error::Api { status, message } => match message {
                Some(message) => write!(f, "API error {}: {}", status, message),
                None => write!(f, "API error {}", status),
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = Error::Api {
            status: StatusCode::NOT_FOUND,
            message: Some("Ресурс не найден".into()),
        };
        assert_eq!(err.user_message("запасной текст"), "Ресурс не найден");

        let err = Error::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.user_message("запасной текст"), "запасной текст");
    }
}
