//! Backend selection logic for parameter storage
//!
//! This module determines which parameter store backend to use (local
//! file vs AWS SSM) based on explicit project configuration.

use tracing::debug;

use super::{LocalStore, ParameterStore};
use crate::core::config::GantryConfig;
use crate::core::constants::{STORE_LOCAL, STORE_SSM};
use crate::error::{ConfigError, Result};

/// Open the parameter store named by the project configuration.
///
/// "local" opens the file-backed store under the home directory;
/// "ssm" opens AWS Systems Manager Parameter Store when the binary was
/// built with the `aws` feature.
///
/// # Errors
///
/// Returns `ConfigError::StoreNotCompiled` when the configured backend
/// was not compiled in, and `ConfigError::UnsupportedStore` for a
/// backend token this version doesn't know.
pub fn open_default(config: &GantryConfig) -> Result<Box<dyn ParameterStore>> {
    match config.store_backend() {
        STORE_LOCAL => {
            debug!("using local parameter store");
            Ok(Box::new(LocalStore::open_default()?))
        }
        STORE_SSM => {
            #[cfg(feature = "aws")]
            {
                debug!("using AWS SSM parameter store");
                Ok(Box::new(super::SsmStore::new()))
            }
            #[cfg(not(feature = "aws"))]
            {
                Err(ConfigError::StoreNotCompiled("ssm").into())
            }
        }
        other => Err(ConfigError::UnsupportedStore(other.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_local_backend_opens() {
        let config = GantryConfig::new("acme");
        assert!(open_default(&config).is_ok());
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let mut config = GantryConfig::new("acme");
        config.gantry.store = Some("etcd".to_string());

        let result = open_default(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::UnsupportedStore(_)))
        ));
    }

    #[cfg(not(feature = "aws"))]
    #[test]
    fn test_ssm_requires_aws_feature() {
        let mut config = GantryConfig::new("acme");
        config.gantry.store = Some("ssm".to_string());

        let result = open_default(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::StoreNotCompiled(_)))
        ));
    }
}
