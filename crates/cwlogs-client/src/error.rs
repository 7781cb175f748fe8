use thiserror::Error;

/// An error reported by the remote service, classified by its error code.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{operation}: resource not found: {message}")]
    ResourceNotFound {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: resource already exists: {message}")]
    ResourceAlreadyExists {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: invalid parameter: {message}")]
    InvalidParameter {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: limit exceeded: {message}")]
    LimitExceeded {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: throttled: {message}")]
    Throttling {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: operation aborted: {message}")]
    OperationAborted {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: service unavailable: {message}")]
    ServiceUnavailable {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: {code}: {message}")]
    Other {
        operation: &'static str,
        code: String,
        message: String,
    },
}

impl RemoteError {
    /// Classify a service error code (e.g. `ResourceNotFoundException`).
    pub fn from_code(operation: &'static str, code: Option<&str>, message: String) -> Self {
        match code {
            Some("ResourceNotFoundException") => Self::ResourceNotFound { operation, message },
            Some("ResourceAlreadyExistsException") => {
                Self::ResourceAlreadyExists { operation, message }
            }
            Some("InvalidParameterException") => Self::InvalidParameter { operation, message },
            Some("LimitExceededException") => Self::LimitExceeded { operation, message },
            Some("ThrottlingException") => Self::Throttling { operation, message },
            Some("OperationAbortedException") => Self::OperationAborted { operation, message },
            Some("ServiceUnavailableException") => {
                Self::ServiceUnavailable { operation, message }
            }
            other => Self::Other {
                operation,
                code: other.unwrap_or("Unknown").to_string(),
                message,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    pub fn operation(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { operation, .. }
            | Self::ResourceAlreadyExists { operation, .. }
            | Self::InvalidParameter { operation, .. }
            | Self::LimitExceeded { operation, .. }
            | Self::Throttling { operation, .. }
            | Self::OperationAborted { operation, .. }
            | Self::ServiceUnavailable { operation, .. }
            | Self::Other { operation, .. } => operation,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },

    #[error("page size must be between 1 and 50, got {0}")]
    PageSize(i32),
}

/// Walk the full error chain and join all causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "service error")
/// but useful detail in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
