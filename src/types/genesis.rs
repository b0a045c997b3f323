// Genesis - Bootstrap/export envelope for the corelaw module
use serde::{Deserialize, Serialize};

use super::article::Article;
use super::corpus;
use super::params::Params;

/// The canonical constitution has exactly 37 articles, no more, no less
pub const GENESIS_ARTICLE_COUNT: usize = 37;

/// Bootstrap/export envelope: the full corelaw state in one document.
///
/// This is the only object whose well-formedness is checked before being
/// trusted; every later state transition assumes already-validated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    /// Ordered article sequence, ascending by number in the canonical file
    pub articles: Vec<Article>,
}

impl Default for GenesisState {
    /// Default genesis: default parameters plus the built-in 37-article corpus
    fn default() -> Self {
        Self {
            params: Params::default(),
            articles: corpus::default_articles(),
        }
    }
}

impl GenesisState {
    /// Validate the envelope before it is trusted by `init_genesis`.
    ///
    /// The article count is exact: 36 or 38 articles are both rejected.
    /// Ordering and enforcement of this gate is a caller contract; the
    /// keeper does not re-validate.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.articles.len() != GENESIS_ARTICLE_COUNT {
            return Err(GenesisError::ArticleCount {
                got: self.articles.len(),
                expected: GENESIS_ARTICLE_COUNT,
            });
        }

        self.params.validate()
    }

    /// Charge depuis un fichier JSON
    pub fn from_json_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Sauvegarde vers un fichier JSON
    pub fn to_json_file(&self, path: &str) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

/// Genesis validation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenesisError {
    #[error("constitution must contain exactly {expected} articles, got {got}")]
    ArticleCount { got: usize, expected: usize },

    #[error("network_fee_bps {bps} exceeds maximum {max}")]
    NetworkFeeTooHigh { bps: u32, max: u32 },

    #[error("tax_rate_bps {bps} exceeds maximum {max}")]
    TaxRateTooHigh { bps: u32, max: u32 },

    #[error("network_fee_cap {value:?} is not a non-negative base-10 integer")]
    InvalidFeeCap { value: String },
}
