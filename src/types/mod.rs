// Types - Corelaw data model (articles, parameters, genesis envelope)
pub mod article;
pub mod corpus;
pub mod genesis;
pub mod params;

pub use article::{Article, ArticleCategory};
pub use genesis::{GenesisError, GenesisState};
pub use params::Params;
