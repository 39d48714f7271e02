use thiserror::Error;

#[derive(Debug, Error)]
pub enum AwsError {
    #[error("unknown AWS region: {0}")]
    UnknownRegion(String),

    #[error("invalid PROXY_PORT value {value:?}: {source}")]
    InvalidProxyPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("STS AssumeRole failed: {message}")]
    AssumeRole {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("STS GetCallerIdentity failed: {message}")]
    CallerIdentity {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AwsError {
    pub(crate) fn assume_role(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::AssumeRole {
            message: error_chain(&err),
            source: Some(Box::new(err)),
        }
    }

    pub(crate) fn caller_identity(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::CallerIdentity {
            message: error_chain(&err),
            source: Some(Box::new(err)),
        }
    }
}

/// Flatten an error and all of its causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "service error")
/// with the useful detail buried in the source chain.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(err) = cause {
        message.push_str(": ");
        message.push_str(&err.to_string());
        cause = err.source();
    }
    message
}
