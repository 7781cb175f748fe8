use cwlogs_client::RemoteError;
use cwlogs_core::{HandlerErrorCode, PrimaryIdentifier};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{type_name} [{identifier}] not found")]
    NotFound {
        type_name: &'static str,
        identifier: PrimaryIdentifier,
    },

    #[error("{type_name} [{identifier}] already exists")]
    AlreadyExists {
        type_name: &'static str,
        identifier: PrimaryIdentifier,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("throttled: {0}")]
    Throttling(String),

    #[error("service limit exceeded: {0}")]
    ServiceLimitExceeded(String),

    #[error("remote failure: {0}")]
    RemoteFailure(String),
}

impl HandlerError {
    /// Map a remote error raised while working on `identifier`.
    pub fn from_remote(
        err: RemoteError,
        type_name: &'static str,
        identifier: &PrimaryIdentifier,
    ) -> Self {
        match err {
            RemoteError::ResourceNotFound { .. } => Self::NotFound {
                type_name,
                identifier: identifier.clone(),
            },
            RemoteError::ResourceAlreadyExists { .. } => Self::AlreadyExists {
                type_name,
                identifier: identifier.clone(),
            },
            RemoteError::InvalidParameter { .. } => Self::InvalidRequest(err.to_string()),
            RemoteError::LimitExceeded { .. } => Self::ServiceLimitExceeded(err.to_string()),
            RemoteError::Throttling { .. } => Self::Throttling(err.to_string()),
            RemoteError::OperationAborted { .. }
            | RemoteError::ServiceUnavailable { .. }
            | RemoteError::Other { .. } => Self::RemoteFailure(err.to_string()),
        }
    }

    pub fn code(&self) -> HandlerErrorCode {
        match self {
            Self::NotFound { .. } => HandlerErrorCode::NotFound,
            Self::AlreadyExists { .. } => HandlerErrorCode::AlreadyExists,
            Self::InvalidRequest(_) => HandlerErrorCode::InvalidRequest,
            Self::Throttling(_) => HandlerErrorCode::Throttling,
            Self::ServiceLimitExceeded(_) => HandlerErrorCode::ServiceLimitExceeded,
            Self::RemoteFailure(_) => HandlerErrorCode::GeneralServiceException,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn identifier(&self) -> Option<&PrimaryIdentifier> {
        match self {
            Self::NotFound { identifier, .. } | Self::AlreadyExists { identifier, .. } => {
                Some(identifier)
            }
            _ => None,
        }
    }
}
