//! Ledger Configuration
//!
//! Transfer floor, commission rate and display decimals.

use serde::{Deserialize, Serialize};
use std::path::Path;

use lib_fees::CommissionSchedule;
use lib_types::{Amount, MAX_BPS};

use crate::errors::ConfigError;

/// Default decimal places (amounts are scaled by 10^8)
pub const DEFAULT_DECIMALS: u8 = 8;

/// Default minimum transfer amount for non-owners, in base units
pub const DEFAULT_MIN_TX_AMOUNT: Amount = 100;

/// Largest power of ten an `Amount` can hold
const MAX_DECIMALS: u8 = 38;

/// Configuration for a governed token ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Smallest transfer a non-owner may send, in base units
    #[serde(with = "amount_serde")]
    pub min_tx_amount: Amount,
    /// Commission charged on non-owner transfers
    pub commission: CommissionSchedule,
    /// Decimal places used to scale whole-token amounts
    pub decimals: u8,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            min_tx_amount: DEFAULT_MIN_TX_AMOUNT,
            commission: CommissionSchedule::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl TokenConfig {
    /// Create a permissive config for testing: no floor, default commission
    pub fn for_testing() -> Self {
        Self {
            min_tx_amount: 0,
            ..Self::default()
        }
    }

    /// Parse from TOML; missing keys take their defaults
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&input)?;
        tracing::info!(
            "Loaded token config from {}: min_tx_amount={}, commission={}bps",
            path.display(),
            config.min_tx_amount,
            config.commission.fee_bps
        );
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.commission.is_valid() {
            return Err(ConfigError::InvalidCommission(self.commission.fee_bps));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(self.decimals));
        }
        if self.commission.fee_bps == MAX_BPS {
            tracing::warn!("Commission is 100%: non-owner recipients receive nothing");
        }
        Ok(())
    }

    /// Convert whole tokens to base units, `None` on overflow
    pub fn scaled(&self, whole: Amount) -> Option<Amount> {
        10u128
            .checked_pow(self.decimals as u32)
            .and_then(|unit| whole.checked_mul(unit))
    }
}

/// TOML integers are 64-bit; amounts in config files go through `u64`
mod amount_serde {
    use lib_types::Amount;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = u64::try_from(*amount).map_err(|_| {
            serde::ser::Error::custom(format!("amount {} does not fit in 64 bits", amount))
        })?;
        serializer.serialize_u64(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Amount::from)
    }
}
