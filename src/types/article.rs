// Article - An immutable constitutional clause
use serde::{Deserialize, Serialize};

/// A numbered clause of the Altan constitution.
///
/// Articles are written in bulk at genesis from the built-in corpus and are
/// never updated or deleted afterwards; the module offers no mutation path.
/// Callers always receive owned copies, never references into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier and sort key; 1..=37 in the canonical deployment
    pub number: u32,
    pub title: String,
    pub category: ArticleCategory,
    pub text: String,
    /// Opaque date/version stamp, carried as-is
    pub enacted_at: String,
}

/// Category tag of a constitutional article.
///
/// `Unspecified` is a query sentinel meaning "no filter"; no stored article
/// carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    Unspecified,
    Foundations,
    Rights,
    Governance,
    Economy,
    Judiciary,
    Amendments,
}
