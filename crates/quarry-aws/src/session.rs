//! Session credentials and session-name handling.

use aws_sdk_sts::config::Credentials;
use aws_smithy_types::DateTime;

/// STS caps role session names at 64 characters.
pub const MAX_SESSION_NAME_LENGTH: usize = 64;

/// Temporary credentials obtained by assuming an IAM role. Valid until
/// `expiration`, as decided by STS.
#[derive(Debug, Clone)]
pub struct SessionCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: DateTime,
}

impl SessionCredentials {
    /// Convert into an SDK credentials value, e.g. to seed a new
    /// [`AwsClients`](crate::client::AwsClients) with the assumed role.
    pub fn into_credentials(self) -> Credentials {
        let expiry = std::time::SystemTime::try_from(self.expiration).ok();
        Credentials::new(
            self.access_key_id,
            self.secret_access_key,
            Some(self.session_token),
            expiry,
            "quarry-session",
        )
    }
}

/// Rewrite a session name into the form STS accepts: every character
/// outside `[A-Za-z0-9_+=,.@-]` becomes `_`, truncated to
/// [`MAX_SESSION_NAME_LENGTH`]. Idempotent on already-valid names.
pub fn sanitize_session_name(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '=' | ',' | '.' | '@' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    // All characters are ASCII at this point, so the byte index is a char
    // boundary.
    sanitized.truncate(MAX_SESSION_NAME_LENGTH);
    sanitized
}
