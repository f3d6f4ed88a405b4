//! AWS SSM parameter store backend.
//!
//! Stores parameters in AWS Systems Manager Parameter Store as
//! SecureString values. Enable with `--features aws`.
//!
//! ## Usage
//!
//! Configure your project with:
//! ```toml
//! [gantry]
//! store = "ssm"
//! ```
//!
//! The SSM backend uses AWS credentials from the environment
//! (AWS_ACCESS_KEY_ID, etc.) or from the default credential provider
//! chain.

use tracing::trace;
use zeroize::Zeroizing;

use super::ParameterStore;
use crate::core::naming::ParameterName;
use crate::error::{Result, StoreError};

/// Parameter store backed by AWS SSM.
///
/// Values are written as SecureString so they are encrypted at rest
/// with the account's default KMS key.
#[derive(Debug, Default)]
pub struct SsmStore;

impl SsmStore {
    pub fn new() -> Self {
        Self
    }
}

// The AWS SDK is async; commands run on a throwaway current-thread
// runtime the same way other one-shot CLI calls do.
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| StoreError::Unavailable(format!("failed to create runtime: {e}")).into())
}

impl ParameterStore for SsmStore {
    fn get(&self, name: &ParameterName) -> Result<Zeroizing<String>> {
        trace!(parameter = %name, "reading from SSM");

        let rt = runtime()?;
        rt.block_on(async {
            let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_ssm::Client::new(&config);

            let result = client
                .get_parameter()
                .name(name.as_str())
                .with_decryption(true)
                .send()
                .await
                .map_err(|e| {
                    let service_error = e.into_service_error();
                    if service_error.is_parameter_not_found() {
                        StoreError::NotFound(name.to_string())
                    } else {
                        StoreError::ReadFailed(format!("SSM get failed: {service_error}"))
                    }
                })?;

            let value = result
                .parameter()
                .and_then(|p| p.value())
                .ok_or_else(|| StoreError::ReadFailed("no value returned".to_string()))?;

            trace!(parameter = %name, "read from SSM");
            Ok(Zeroizing::new(value.to_string()))
        })
    }

    fn set(&self, name: &ParameterName, value: &str) -> Result<()> {
        trace!(parameter = %name, "writing to SSM");

        let rt = runtime()?;
        rt.block_on(async {
            let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_ssm::Client::new(&config);

            client
                .put_parameter()
                .name(name.as_str())
                .value(value)
                .r#type(aws_sdk_ssm::types::ParameterType::SecureString)
                .overwrite(true)
                .send()
                .await
                .map_err(|e| {
                    StoreError::WriteFailed(format!(
                        "SSM put failed: {}",
                        e.into_service_error()
                    ))
                })?;

            trace!(parameter = %name, "wrote to SSM");
            Ok(())
        })
    }
}
