use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the rewards API.
///
/// Every variant carries the action that was being attempted (in Portuguese,
/// e.g. `"consultar missões"`), so the displayed message is always
/// `"Ocorreu um erro ao <action>."` regardless of what went wrong underneath.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, server error or an unreadable response body.
    #[error("Ocorreu um erro ao {action}.")]
    Network { action: &'static str, detail: String },

    /// The requested record does not exist (HTTP 404).
    #[error("Ocorreu um erro ao {action}.")]
    NotFound { action: &'static str },

    /// The server rejected the request (any other 4xx).
    #[error("Ocorreu um erro ao {action}.")]
    Validation {
        action: &'static str,
        status: u16,
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn network(action: &'static str, err: impl std::fmt::Display) -> Self {
        ApiError::Network {
            action,
            detail: err.to_string(),
        }
    }

    /// Map a non-success status to the matching variant.
    pub fn from_status(action: &'static str, status: StatusCode, body: String) -> Self {
        if status == StatusCode::NOT_FOUND {
            ApiError::NotFound { action }
        } else if status.is_client_error() {
            ApiError::Validation {
                action,
                status: status.as_u16(),
                detail: body,
            }
        } else {
            ApiError::Network {
                action,
                detail: format!("HTTP {}: {}", status.as_u16(), body),
            }
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            ApiError::Network { action, .. }
            | ApiError::NotFound { action }
            | ApiError::Validation { action, .. } => action,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_localized() {
        let err = ApiError::network("consultar missões", "connection refused");
        assert_eq!(err.to_string(), "Ocorreu um erro ao consultar missões.");
    }

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from_status("consultar missão", StatusCode::NOT_FOUND, String::new());
        assert_eq!(err, ApiError::NotFound { action: "consultar missão" });
        assert!(err.is_not_found());

        let err = ApiError::from_status(
            "criar o usuário",
            StatusCode::UNPROCESSABLE_ENTITY,
            "email taken".to_string(),
        );
        assert!(matches!(err, ApiError::Validation { status: 422, .. }));
        assert_eq!(err.to_string(), "Ocorreu um erro ao criar o usuário.");

        let err = ApiError::from_status(
            "consultar usuários",
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
        );
        match err {
            ApiError::Network { detail, .. } => assert_eq!(detail, "HTTP 500: boom"),
            other => panic!("expected Network, got {other:?}"),
        }
    }

    #[test]
    fn test_action_accessor() {
        let err = ApiError::from_status("tentar fazer login", StatusCode::UNAUTHORIZED, String::new());
        assert_eq!(err.action(), "tentar fazer login");
    }
}
