//! # Engine Configuration
//!
//! Limits applied by the royalty service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for `max_beneficiaries`. Past this, some share must be zero.
pub const MAX_BENEFICIARIES_LIMIT: usize = 10_000;

/// Royalty service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum beneficiaries per split.
    pub max_beneficiaries: usize,
    /// Accept the zero address as a node owner.
    pub allow_zero_address_owner: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_beneficiaries: 64,
            allow_zero_address_owner: false,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_beneficiaries == 0 {
            return Err(ConfigError::ZeroMaxBeneficiaries);
        }
        if self.max_beneficiaries > MAX_BENEFICIARIES_LIMIT {
            return Err(ConfigError::MaxBeneficiariesTooLarge {
                value: self.max_beneficiaries,
                limit: MAX_BENEFICIARIES_LIMIT,
            });
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_beneficiaries` is zero.
    #[error("max_beneficiaries must be at least 1")]
    ZeroMaxBeneficiaries,

    /// `max_beneficiaries` exceeds the hard limit.
    #[error("max_beneficiaries {value} exceeds limit {limit}")]
    MaxBeneficiariesTooLarge {
        /// Configured value.
        value: usize,
        /// Hard limit.
        limit: usize,
    },
}
