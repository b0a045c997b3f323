// Keeper - Corelaw state access (articles, parameters, fees, genesis)
use crate::storage::db::{Database, DatabaseError};
use crate::types::article::{Article, ArticleCategory};
use crate::types::genesis::GenesisState;
use crate::types::params::{Params, DEFAULT_NETWORK_FEE_CAP_UNITS};

/// Storage key prefixes
/// INVARIANT: this layout is consensus state. It must stay bit-exact so any
/// previously persisted corelaw store remains readable.
const ARTICLE_KEY_PREFIX: &[u8] = &[0x01];
const PARAMS_KEY: &[u8] = &[0x02];

/// Reserved for a future "core-law state" record. Declared so the byte is
/// never reused; nothing reads or writes it today.
pub const CORE_LAW_STATE_KEY: &[u8] = &[0x03];

/// Basis-point denominator: 10000 bps = 100%
const BPS_DENOMINATOR: u128 = 10_000;

/// Corelaw keeper - all reads and writes of the module's key space.
///
/// The database handle and the authority string are injected once at
/// construction and held for the keeper's lifetime; there is no ambient
/// or global state. The host runtime serializes access (one logical
/// execution per consensus height), so the keeper takes `&self` everywhere
/// and performs no internal locking.
pub struct Keeper {
    db: Database,
    /// Opaque authority allowed to update parameters. The keeper stores and
    /// exposes it; the out-of-scope message path is what checks it.
    authority: String,
}

impl Keeper {
    pub fn new(db: Database, authority: String) -> Self {
        Self { db, authority }
    }

    /// The authority string held for the parameter-update path
    pub fn authority(&self) -> &str {
        &self.authority
    }

    // ===== Article Storage =====

    /// Point lookup by article number. Absence is a valid state (pre-genesis
    /// the store is empty), so a miss is `Ok(None)`, never an error.
    pub fn get_article(&self, number: u32) -> Result<Option<Article>, KeeperError> {
        let key = Self::article_key(number);
        if let Some(data) = self.db.get(&key)? {
            let article: Article = bincode::deserialize(&data)
                .map_err(|e| KeeperError::Corruption(e.to_string()))?;
            Ok(Some(article))
        } else {
            Ok(None)
        }
    }

    /// Unconditional upsert keyed by `article.number`.
    ///
    /// Deliberately a dumb persistence primitive: no validation happens here,
    /// that is the genesis envelope's job before anything is written.
    pub fn set_article(&self, article: &Article) -> Result<(), KeeperError> {
        let key = Self::article_key(article.number);
        let value = bincode::serialize(article)
            .map_err(|e| KeeperError::SerializationFailed(e.to_string()))?;
        self.db.put(&key, &value)?;
        Ok(())
    }

    /// Full forward scan of the article key space, ascending by number.
    ///
    /// Keys are big-endian encodings of the number, so lexicographic key
    /// order IS numeric order. Returns an empty vec when no articles exist.
    pub fn get_all_articles(&self) -> Result<Vec<Article>, KeeperError> {
        let mut articles = Vec::new();

        for entry in self.db.prefix_iterator(ARTICLE_KEY_PREFIX) {
            let (_key, value) = entry?;
            let article: Article = bincode::deserialize(&value)
                .map_err(|e| KeeperError::Corruption(e.to_string()))?;
            articles.push(article);
        }

        Ok(articles)
    }

    /// Articles matching `category`, in ascending number order.
    ///
    /// `Unspecified` is the "no filter" sentinel and returns the full
    /// sequence. The filter runs in memory over the full scan; the corpus is
    /// fixed at 37 records and never grows at runtime, so no secondary index.
    pub fn get_articles_by_category(
        &self,
        category: ArticleCategory,
    ) -> Result<Vec<Article>, KeeperError> {
        let articles = self.get_all_articles()?;

        if category == ArticleCategory::Unspecified {
            return Ok(articles);
        }

        Ok(articles
            .into_iter()
            .filter(|a| a.category == category)
            .collect())
    }

    // ===== Parameter Storage =====

    /// Current parameters, or the hardcoded defaults when the key is absent.
    /// Lazy default: nothing is written back on a miss.
    pub fn get_params(&self) -> Result<Params, KeeperError> {
        if let Some(data) = self.db.get(PARAMS_KEY)? {
            let params: Params = bincode::deserialize(&data)
                .map_err(|e| KeeperError::Corruption(e.to_string()))?;
            Ok(params)
        } else {
            Ok(Params::default())
        }
    }

    /// Unconditional overwrite of the parameter singleton.
    /// The caller (genesis load or the authority path) validates beforehand.
    pub fn set_params(&self, params: &Params) -> Result<(), KeeperError> {
        let value = bincode::serialize(params)
            .map_err(|e| KeeperError::SerializationFailed(e.to_string()))?;
        self.db.put(PARAMS_KEY, &value)?;
        Ok(())
    }

    /// Current network fee in basis points
    pub fn network_fee_bps(&self) -> Result<u32, KeeperError> {
        Ok(self.get_params()?.network_fee_bps)
    }

    /// Current annual tax rate in basis points
    pub fn tax_rate_bps(&self) -> Result<u32, KeeperError> {
        Ok(self.get_params()?.tax_rate_bps)
    }

    // ===== Fee Calculation =====

    /// Compute the network fee for a transfer of `amount` base units.
    ///
    /// Returns `(fee, capped_fee)`: the raw `floor(amount * bps / 10000)`
    /// for observability, and the cap-bounded value actually chargeable.
    ///
    /// INVARIANT: consensus-critical. Pure integer arithmetic only; every
    /// node must produce the identical result for identical inputs. The
    /// multiply is split around the divisor so it cannot wrap for any
    /// realistic amount.
    ///
    /// A fee-cap string that fails to parse does NOT abort the calculation:
    /// the default cap is substituted and a warning logged. Strict cap
    /// validation belongs to genesis and the parameter-update path, not here.
    pub fn calculate_network_fee(&self, amount: u128) -> Result<(u128, u128), KeeperError> {
        let params = self.get_params()?;
        let bps = u128::from(params.network_fee_bps);

        // floor(amount * bps / 10000), split as q*bps + r*bps/10000 with
        // amount = q*10000 + r. Exact, and r*bps always fits in u128.
        let fee = (amount / BPS_DENOMINATOR)
            .saturating_mul(bps)
            .saturating_add(amount % BPS_DENOMINATOR * bps / BPS_DENOMINATOR);

        let cap = match params.network_fee_cap.parse::<u128>() {
            Ok(cap) => cap,
            Err(_) => {
                tracing::warn!(
                    cap = %params.network_fee_cap,
                    "malformed network_fee_cap, falling back to default cap"
                );
                DEFAULT_NETWORK_FEE_CAP_UNITS
            }
        };

        Ok((fee, fee.min(cap)))
    }

    // ===== Genesis =====

    /// Seed the store from a genesis envelope: parameters first, then each
    /// article in sequence order.
    ///
    /// Assumes `state` already passed `GenesisState::validate()`; no
    /// re-validation here. Re-running simply overwrites, which is idempotent
    /// only for an identical payload.
    pub fn init_genesis(&self, state: &GenesisState) -> Result<(), KeeperError> {
        self.set_params(&state.params)?;

        for article in &state.articles {
            self.set_article(article)?;
        }

        tracing::info!(
            articles = state.articles.len(),
            "corelaw genesis initialized"
        );

        Ok(())
    }

    /// Package the current parameters and full article enumeration
    /// (ascending order) into a genesis envelope for export.
    pub fn export_genesis(&self) -> Result<GenesisState, KeeperError> {
        Ok(GenesisState {
            params: self.get_params()?,
            articles: self.get_all_articles()?,
        })
    }

    // Key helpers

    /// Article key: prefix 0x01 ++ big-endian u64 of the number.
    /// Big-endian so that byte order sorts the same as numeric order.
    fn article_key(number: u32) -> Vec<u8> {
        let mut key = ARTICLE_KEY_PREFIX.to_vec();
        key.extend_from_slice(&u64::from(number).to_be_bytes());
        key
    }
}

/// Keeper errors
///
/// `Corruption` means previously persisted bytes no longer unmarshal against
/// the schema. That is an unrecoverable artifact of the substrate; callers
/// must propagate it, never catch and substitute a default.
#[derive(Debug, thiserror::Error)]
pub enum KeeperError {
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("serialization failed: {0}")]
    SerializationFailed(String),

    #[error("stored corelaw state is corrupt: {0}")]
    Corruption(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::genesis::GENESIS_ARTICLE_COUNT;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn test_keeper() -> (TempDir, Keeper) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open(temp_dir.path()).unwrap();
        (temp_dir, Keeper::new(db, "altan1authority".to_string()))
    }

    fn article(number: u32, category: ArticleCategory) -> Article {
        Article {
            number,
            title: format!("Article {}", number),
            category,
            text: "text".to_string(),
            enacted_at: "2024-07-11".to_string(),
        }
    }

    #[test]
    fn test_article_set_get() {
        let (_dir, keeper) = test_keeper();

        let a = article(5, ArticleCategory::Rights);
        keeper.set_article(&a).unwrap();

        let retrieved = keeper.get_article(5).unwrap();
        assert_eq!(retrieved, Some(a));
    }

    #[test]
    fn test_article_absence_is_not_an_error() {
        let (_dir, keeper) = test_keeper();

        // Never written: explicit None, not a zero-valued article
        assert_eq!(keeper.get_article(12).unwrap(), None);
    }

    #[test]
    fn test_article_upsert_overwrites() {
        let (_dir, keeper) = test_keeper();

        keeper.set_article(&article(1, ArticleCategory::Rights)).unwrap();
        let mut replacement = article(1, ArticleCategory::Economy);
        replacement.title = "Replaced".to_string();
        keeper.set_article(&replacement).unwrap();

        assert_eq!(keeper.get_article(1).unwrap(), Some(replacement));
    }

    #[test]
    fn test_get_all_articles_ascending_order() {
        let (_dir, keeper) = test_keeper();

        // Insert out of order; the scan must come back ascending
        for number in [30, 2, 17, 1, 37] {
            keeper.set_article(&article(number, ArticleCategory::Governance)).unwrap();
        }

        let all = keeper.get_all_articles().unwrap();
        let numbers: Vec<u32> = all.iter().map(|a| a.number).collect();
        assert_eq!(numbers, vec![1, 2, 17, 30, 37]);
    }

    #[test]
    fn test_get_all_articles_empty_store() {
        let (_dir, keeper) = test_keeper();
        assert_eq!(keeper.get_all_articles().unwrap(), vec![]);
    }

    #[test]
    fn test_category_filter() {
        let (_dir, keeper) = test_keeper();

        keeper.set_article(&article(1, ArticleCategory::Foundations)).unwrap();
        keeper.set_article(&article(2, ArticleCategory::Economy)).unwrap();
        keeper.set_article(&article(3, ArticleCategory::Economy)).unwrap();

        let economy = keeper
            .get_articles_by_category(ArticleCategory::Economy)
            .unwrap();
        assert_eq!(economy.len(), 2);
        assert!(economy.iter().all(|a| a.category == ArticleCategory::Economy));

        let judiciary = keeper
            .get_articles_by_category(ArticleCategory::Judiciary)
            .unwrap();
        assert!(judiciary.is_empty());
    }

    #[test]
    fn test_category_unspecified_returns_everything() {
        let (_dir, keeper) = test_keeper();
        keeper.init_genesis(&GenesisState::default()).unwrap();

        let all = keeper.get_all_articles().unwrap();
        let unfiltered = keeper
            .get_articles_by_category(ArticleCategory::Unspecified)
            .unwrap();
        assert_eq!(unfiltered, all);
    }

    #[test]
    fn test_params_default_when_absent() {
        let (_dir, keeper) = test_keeper();

        // Lazy default: no write-back, the key stays absent
        assert_eq!(keeper.get_params().unwrap(), Params::default());
        assert_eq!(keeper.get_params().unwrap(), Params::default());
    }

    #[test]
    fn test_params_set_get_and_projections() {
        let (_dir, keeper) = test_keeper();

        let params = Params {
            network_fee_bps: 42,
            network_fee_cap: "777".to_string(),
            tax_rate_bps: 2500,
        };
        keeper.set_params(&params).unwrap();

        assert_eq!(keeper.get_params().unwrap(), params);
        assert_eq!(keeper.network_fee_bps().unwrap(), 42);
        assert_eq!(keeper.tax_rate_bps().unwrap(), 2500);
    }

    #[test]
    fn test_fee_cap_enforcement() {
        let (_dir, keeper) = test_keeper();

        keeper
            .set_params(&Params {
                network_fee_bps: 100,
                network_fee_cap: "500".to_string(),
                tax_rate_bps: 1000,
            })
            .unwrap();

        let (fee, capped) = keeper.calculate_network_fee(1_000_000).unwrap();
        assert_eq!(fee, 10_000);
        assert_eq!(capped, 500);
    }

    #[test]
    fn test_fee_zero_amount_and_zero_bps() {
        let (_dir, keeper) = test_keeper();

        // Defaults: 3 bps
        assert_eq!(keeper.calculate_network_fee(0).unwrap(), (0, 0));

        keeper
            .set_params(&Params {
                network_fee_bps: 0,
                network_fee_cap: "500".to_string(),
                tax_rate_bps: 1000,
            })
            .unwrap();
        assert_eq!(keeper.calculate_network_fee(u128::MAX).unwrap(), (0, 0));
    }

    #[test]
    fn test_fee_floor_division() {
        let (_dir, keeper) = test_keeper();

        // 9999 * 3 / 10000 = 2.9997 -> floor 2
        let (fee, _) = keeper.calculate_network_fee(9_999).unwrap();
        assert_eq!(fee, 2);

        // Below one fee unit: floor to zero
        let (fee, _) = keeper.calculate_network_fee(1).unwrap();
        assert_eq!(fee, 0);
    }

    #[test]
    fn test_fee_cap_fallback_on_malformed_cap() {
        let (_dir, keeper) = test_keeper();

        keeper
            .set_params(&Params {
                network_fee_bps: 100,
                network_fee_cap: "not-a-number".to_string(),
                tax_rate_bps: 1000,
            })
            .unwrap();

        // Never an error; capped against the default cap instead
        let amount = 2_000_000_000_000u128;
        let (fee, capped) = keeper.calculate_network_fee(amount).unwrap();
        assert_eq!(fee, 20_000_000_000);
        assert_eq!(capped, fee.min(DEFAULT_NETWORK_FEE_CAP_UNITS));
        assert_eq!(capped, 1_000_000_000);
    }

    #[test]
    fn test_genesis_init_and_export_round_trip() {
        let (_dir, keeper) = test_keeper();

        let genesis = GenesisState::default();
        genesis.validate().unwrap();
        keeper.init_genesis(&genesis).unwrap();

        let exported = keeper.export_genesis().unwrap();
        assert_eq!(exported.articles.len(), GENESIS_ARTICLE_COUNT);
        assert_eq!(exported, genesis);

        // Ascending number order in the export
        let numbers: Vec<u32> = exported.articles.iter().map(|a| a.number).collect();
        assert_eq!(numbers, (1..=37).collect::<Vec<u32>>());
    }

    #[test]
    fn test_genesis_reinit_is_idempotent_for_same_payload() {
        let (_dir, keeper) = test_keeper();

        let genesis = GenesisState::default();
        keeper.init_genesis(&genesis).unwrap();
        keeper.init_genesis(&genesis).unwrap();

        assert_eq!(keeper.export_genesis().unwrap(), genesis);
    }

    #[test]
    fn test_export_of_uninitialized_store() {
        let (_dir, keeper) = test_keeper();

        // Uninitialized: default params, empty article sequence (not null)
        let exported = keeper.export_genesis().unwrap();
        assert_eq!(exported.params, Params::default());
        assert!(exported.articles.is_empty());
    }

    #[test]
    fn test_authority_is_held_verbatim() {
        let (_dir, keeper) = test_keeper();
        assert_eq!(keeper.authority(), "altan1authority");
    }

    proptest! {
        /// Fee determinism: exact floor(amount * bps / 10000) with no
        /// rounding drift, checked via fee*10000 <= amount*bps < (fee+1)*10000.
        #[test]
        fn prop_fee_is_exact_floor(amount in 0u128..=1_000_000_000_000_000_000, bps in 0u32..=100) {
            let (_dir, keeper) = test_keeper();
            keeper.set_params(&Params {
                network_fee_bps: bps,
                network_fee_cap: "340282366920938463463374607431768211455".to_string(),
                tax_rate_bps: 1000,
            }).unwrap();

            let (fee, capped) = keeper.calculate_network_fee(amount).unwrap();
            let product = amount * u128::from(bps);
            prop_assert!(fee * 10_000 <= product);
            prop_assert!(product < (fee + 1) * 10_000);
            // Cap is u128::MAX here, so the capped fee equals the raw fee
            prop_assert_eq!(capped, fee);
        }
    }
}
