use serde::{Deserialize, Serialize};

use crate::identifier::PrimaryIdentifier;
use crate::request::CallbackContext;

/// Failure taxonomy reported to the orchestrating host.
///
/// The host decides retry/rollback from this code alone and never needs to
/// know remote-API error names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    NotFound,
    AlreadyExists,
    InvalidRequest,
    Throttling,
    ServiceLimitExceeded,
    /// Any other remote failure.
    GeneralServiceException,
}

/// Outcome of one handler invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "status",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ProgressEvent<M> {
    Success {
        /// `None` after a delete.
        model: Option<M>,
    },
    SuccessList {
        models: Vec<M>,
        next_token: Option<String>,
    },
    InProgress {
        model: M,
        callback_context: CallbackContext,
        callback_delay_seconds: u32,
    },
    Failed {
        error_code: HandlerErrorCode,
        message: String,
        identifier: Option<PrimaryIdentifier>,
    },
}

impl<M> ProgressEvent<M> {
    pub fn success(model: M) -> Self {
        Self::Success { model: Some(model) }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::SuccessList { .. })
    }

    pub fn model(&self) -> Option<&M> {
        match self {
            Self::Success { model } => model.as_ref(),
            Self::InProgress { model, .. } => Some(model),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<HandlerErrorCode> {
        match self {
            Self::Failed { error_code, .. } => Some(*error_code),
            _ => None,
        }
    }
}
