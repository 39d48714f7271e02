//! Credentialed AWS client construction.
//!
//! An [`AwsClients`] value pins a region, an optional set of static
//! credentials, and the network configuration, and hands out CloudFormation
//! and STS clients bound to all three. With no explicit credentials the
//! SDK's default credential chain applies.

use aws_config::{AppName, BehaviorVersion, Region, SdkConfig};
use aws_sdk_sts::config::Credentials;
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfiguration;
use crate::error::AwsError;
use crate::region;
use crate::session::{SessionCredentials, sanitize_session_name};

const PROVIDER_NAME: &str = "quarry-config";

#[derive(Debug, Clone)]
pub struct AwsClients {
    credentials: Option<Credentials>,
    region: Region,
    network: NetworkConfiguration,
}

/// Identity of the caller as reported by STS GetCallerIdentity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub account_id: String,
    pub arn: String,
    pub user_id: String,
}

impl AwsClients {
    /// Resolve clients through the SDK's default credential chain.
    pub fn from_default_credential_chain(region: &str) -> Result<Self, AwsError> {
        Self::new(None, region)
    }

    /// Use an explicit set of credentials.
    pub fn from_existing_credentials(
        credentials: Credentials,
        region: &str,
    ) -> Result<Self, AwsError> {
        Self::new(Some(credentials), region)
    }

    /// Use an explicit access key pair. The pair is stored as-is; validity
    /// is only checked by the first remote call.
    pub fn from_basic_credentials(
        access_key_id: &str,
        secret_access_key: &str,
        region: &str,
    ) -> Result<Self, AwsError> {
        Self::from_existing_credentials(
            Credentials::new(access_key_id, secret_access_key, None, None, PROVIDER_NAME),
            region,
        )
    }

    fn new(credentials: Option<Credentials>, region: &str) -> Result<Self, AwsError> {
        Ok(Self {
            credentials,
            region: region::resolve(region)?,
            network: NetworkConfiguration::from_env()?,
        })
    }

    /// Replace the environment-derived network configuration, e.g. with a
    /// fake one in tests.
    pub fn with_network_configuration(mut self, network: NetworkConfiguration) -> Self {
        self.network = network;
        self
    }

    pub fn region(&self) -> &str {
        self.region.as_ref()
    }

    /// Assemble the `SdkConfig` shared by every client this context hands
    /// out: region, app name, explicit credentials when present, and the
    /// proxy-aware HTTP client when a proxy is configured.
    pub async fn sdk_config(&self) -> Result<SdkConfig, AwsError> {
        let app_name = AppName::new(self.network.user_agent().to_string()).map_err(|e| {
            AwsError::Config(format!(
                "invalid user agent {:?}: {e}",
                self.network.user_agent()
            ))
        })?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(self.region.clone())
            .app_name(app_name);
        if let Some(credentials) = &self.credentials {
            loader = loader.credentials_provider(credentials.clone());
        }
        if let Some(proxy) = self.network.proxy() {
            loader = loader.http_client(proxy.https_client()?);
        }
        Ok(loader.load().await)
    }

    pub async fn cloudformation_client(&self) -> Result<aws_sdk_cloudformation::Client, AwsError> {
        let config = self.sdk_config().await?;
        Ok(aws_sdk_cloudformation::Client::new(&config))
    }

    pub async fn sts_client(&self) -> Result<aws_sdk_sts::Client, AwsError> {
        let config = self.sdk_config().await?;
        Ok(aws_sdk_sts::Client::new(&config))
    }

    /// Assume an IAM role and return its temporary session credentials.
    pub async fn assume_role(
        &self,
        role_arn: &str,
        external_id: Option<&str>,
        session_name: &str,
        duration_seconds: i32,
    ) -> Result<SessionCredentials, AwsError> {
        let sts = self.sts_client().await?;
        assume_role(&sts, role_arn, external_id, session_name, duration_seconds).await
    }

    /// Call STS GetCallerIdentity to check that the context's credentials
    /// are recognized at all. Does not check any specific permission.
    pub async fn validate_credentials(&self) -> Result<CallerIdentity, AwsError> {
        let sts = self.sts_client().await?;
        let response = sts
            .get_caller_identity()
            .send()
            .await
            .map_err(AwsError::caller_identity)?;

        Ok(CallerIdentity {
            account_id: response.account().unwrap_or_default().to_string(),
            arn: response.arn().unwrap_or_default().to_string(),
            user_id: response.user_id().unwrap_or_default().to_string(),
        })
    }
}

/// Assume an IAM role via the given STS client.
///
/// The session name is sanitized before it goes on the wire. An external id
/// is forwarded only when present and non-empty; an empty string leaves the
/// field off the request entirely. Any failure of the remote call comes
/// back as a single [`AwsError::AssumeRole`] carrying the original cause.
pub async fn assume_role(
    sts: &aws_sdk_sts::Client,
    role_arn: &str,
    external_id: Option<&str>,
    session_name: &str,
    duration_seconds: i32,
) -> Result<SessionCredentials, AwsError> {
    let session_name = sanitize_session_name(session_name);
    tracing::debug!(
        role_arn = %role_arn,
        session_name = %session_name,
        duration_seconds,
        "assuming IAM role"
    );

    let mut request = sts
        .assume_role()
        .role_arn(role_arn)
        .role_session_name(&session_name)
        .duration_seconds(duration_seconds);
    if let Some(external_id) = external_id.filter(|id| !id.is_empty()) {
        request = request.external_id(external_id);
    }

    let response = request.send().await.map_err(AwsError::assume_role)?;
    let credentials = response.credentials().ok_or_else(|| AwsError::AssumeRole {
        message: "response carried no credentials".to_string(),
        source: None,
    })?;

    tracing::info!(role_arn = %role_arn, session_name = %session_name, "assumed IAM role");
    Ok(SessionCredentials {
        access_key_id: credentials.access_key_id().to_string(),
        secret_access_key: credentials.secret_access_key().to_string(),
        session_token: credentials.session_token().to_string(),
        expiration: *credentials.expiration(),
    })
}
