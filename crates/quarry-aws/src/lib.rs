//! quarry-aws
//!
//! AWS client construction for Quarry deployments. Thin wrapper around the
//! AWS SDK: region resolution, credential handling, proxy-aware transport,
//! and STS role assumption. Signing, retries, and endpoint resolution all
//! stay inside the SDK.

pub mod client;
pub mod config;
pub mod error;
pub mod region;
pub mod session;

pub use client::{AwsClients, CallerIdentity};
pub use error::AwsError;
pub use session::{SessionCredentials, sanitize_session_name};
