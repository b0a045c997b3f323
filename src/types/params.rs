// Params - Governance-tunable economic parameters (singleton record)
use serde::{Deserialize, Serialize};

use super::genesis::GenesisError;

/// Default network fee: 3 bps = 0.03%
pub const DEFAULT_NETWORK_FEE_BPS: u32 = 3;

/// Default network fee cap, in base units
pub const DEFAULT_NETWORK_FEE_CAP: &str = "1000000000";

/// Numeric value of [`DEFAULT_NETWORK_FEE_CAP`], used as the fallback cap
/// when a stored cap string fails to parse at fee-calculation time
pub const DEFAULT_NETWORK_FEE_CAP_UNITS: u128 = 1_000_000_000;

/// Default annual tax rate: 1000 bps = 10%
pub const DEFAULT_TAX_RATE_BPS: u32 = 1000;

/// Upper bound on the network fee: 100 bps = 1%
pub const MAX_NETWORK_FEE_BPS: u32 = 100;

/// Upper bound on the annual tax rate: 5000 bps = 50%
pub const MAX_TAX_RATE_BPS: u32 = 5000;

/// The singleton economic parameter record.
///
/// Initialized to defaults at genesis; mutated only through the external
/// authority path, which validates before writing. Read on every fee
/// computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Network fee in basis points (1 bp = 0.01%), applied to transfers
    pub network_fee_bps: u32,
    /// Maximum absolute fee, as a base-10 integer string.
    /// A string rather than a fixed-width integer so the cap survives any
    /// token-supply magnitude without overflow or float rounding.
    pub network_fee_cap: String,
    /// Annual tax rate in basis points
    pub tax_rate_bps: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            network_fee_bps: DEFAULT_NETWORK_FEE_BPS,
            network_fee_cap: DEFAULT_NETWORK_FEE_CAP.to_string(),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
        }
    }
}

impl Params {
    /// Check the parameter invariants.
    ///
    /// Strict by design: genesis must refuse to load out-of-range values
    /// rather than clamp them. The fee-cap string must parse here even
    /// though the fee calculator itself degrades gracefully on a bad cap.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.network_fee_bps > MAX_NETWORK_FEE_BPS {
            return Err(GenesisError::NetworkFeeTooHigh {
                bps: self.network_fee_bps,
                max: MAX_NETWORK_FEE_BPS,
            });
        }

        if self.tax_rate_bps > MAX_TAX_RATE_BPS {
            return Err(GenesisError::TaxRateTooHigh {
                bps: self.tax_rate_bps,
                max: MAX_TAX_RATE_BPS,
            });
        }

        // Base-10 integer parse only, never locale-dependent or float parsing
        if self.network_fee_cap.parse::<u128>().is_err() {
            return Err(GenesisError::InvalidFeeCap {
                value: self.network_fee_cap.clone(),
            });
        }

        Ok(())
    }
}
