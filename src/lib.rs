// Corelaw - Constitutional articles and network economic parameters
// Principe: the constitution is seeded once at genesis and never mutated on-chain

pub mod keeper;
pub mod storage;
pub mod types;

pub use keeper::{Keeper, KeeperError};
pub use types::{Article, ArticleCategory, GenesisState, GenesisError, Params};

/// Module name, used for routing and store scoping by the host runtime
pub const MODULE_NAME: &str = "corelaw";

/// Querier route (same as the module name)
pub const QUERIER_ROUTE: &str = MODULE_NAME;
