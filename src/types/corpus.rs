// Corpus - The built-in constitution of Altan (37 articles)
//
// This table is the compiled-in source of the default genesis. It is data,
// not logic: the keeper never reads it after genesis, and the module offers
// no path to change an article once written.
use super::article::{Article, ArticleCategory};

/// Adoption stamp carried by every article of the founding corpus
const ENACTED_AT: &str = "2024-07-11";

struct Seed {
    number: u32,
    title: &'static str,
    category: ArticleCategory,
    text: &'static str,
}

const SEEDS: &[Seed] = &[
    // Foundations
    Seed {
        number: 1,
        title: "The State",
        category: ArticleCategory::Foundations,
        text: "Altan is a sovereign digital state. Its constitution is recorded on the ledger and binds every organ of the state.",
    },
    Seed {
        number: 2,
        title: "Supremacy of the Constitution",
        category: ArticleCategory::Foundations,
        text: "No decree, contract, or module parameter may contradict this constitution. Conflicting acts are void from inception.",
    },
    Seed {
        number: 3,
        title: "The Ledger",
        category: ArticleCategory::Foundations,
        text: "The ledger is the single source of truth for law, identity, and value. State recorded at genesis is immutable.",
    },
    Seed {
        number: 4,
        title: "Decimal Order",
        category: ArticleCategory::Foundations,
        text: "The people organize in arbans of ten households, zuuns of one hundred, myangans of one thousand, and tumens of ten thousand.",
    },
    Seed {
        number: 5,
        title: "Official Symbols",
        category: ArticleCategory::Foundations,
        text: "The seal, banner, and anthem of Altan are fixed by the founding khural and registered on the ledger.",
    },
    // Rights
    Seed {
        number: 6,
        title: "Equality",
        category: ArticleCategory::Rights,
        text: "All citizens are equal before the law regardless of origin, belief, or arban affiliation.",
    },
    Seed {
        number: 7,
        title: "Citizenship",
        category: ArticleCategory::Rights,
        text: "Citizenship of Altan is acquired by oath before an arban and attested by a digital seal on the ledger.",
    },
    Seed {
        number: 8,
        title: "Identity",
        category: ArticleCategory::Rights,
        text: "Every citizen holds exactly one sovereign identity. No organ may issue a second identity to the same person.",
    },
    Seed {
        number: 9,
        title: "Property",
        category: ArticleCategory::Rights,
        text: "Property lawfully registered on the ledger is inviolable. Expropriation requires judicial order and full compensation.",
    },
    Seed {
        number: 10,
        title: "Expression",
        category: ArticleCategory::Rights,
        text: "Citizens may speak, publish, and petition freely. Prior restraint is prohibited.",
    },
    Seed {
        number: 11,
        title: "Association",
        category: ArticleCategory::Rights,
        text: "Citizens may form and dissolve associations, guilds, and arbans without permission of any organ.",
    },
    Seed {
        number: 12,
        title: "Due Process",
        category: ArticleCategory::Rights,
        text: "No citizen may be penalized except by judgment of a court constituted under this constitution.",
    },
    // Governance
    Seed {
        number: 13,
        title: "The Khural",
        category: ArticleCategory::Governance,
        text: "Legislative power vests in the Khural, assembled from delegates elected by the arbans.",
    },
    Seed {
        number: 14,
        title: "Elections",
        category: ArticleCategory::Governance,
        text: "Delegates are elected by secret ballot recorded on the ledger. Terms last four years.",
    },
    Seed {
        number: 15,
        title: "The Chancellery",
        category: ArticleCategory::Governance,
        text: "Executive power vests in the Chancellery, answerable to the Khural and bound by its acts.",
    },
    Seed {
        number: 16,
        title: "Lawmaking",
        category: ArticleCategory::Governance,
        text: "A bill becomes law upon majority of the Khural and promulgation by the Chancellery on the ledger.",
    },
    Seed {
        number: 17,
        title: "Referendum",
        category: ArticleCategory::Governance,
        text: "One tenth of citizens may demand a referendum. Its result binds the Khural.",
    },
    Seed {
        number: 18,
        title: "Arban Self-Rule",
        category: ArticleCategory::Governance,
        text: "Each arban governs its internal affairs and elects its leader. Higher organs intervene only where this constitution permits.",
    },
    Seed {
        number: 19,
        title: "Appointments",
        category: ArticleCategory::Governance,
        text: "Leaders of zuuns, myangans, and tumens are appointed from below, by the assembled leaders of the constituent units.",
    },
    Seed {
        number: 20,
        title: "Transparency",
        category: ArticleCategory::Governance,
        text: "Acts, budgets, and votes of every organ are public records on the ledger.",
    },
    Seed {
        number: 21,
        title: "Incompatibility",
        category: ArticleCategory::Governance,
        text: "No person may hold legislative, executive, and judicial office at once.",
    },
    // Economy
    Seed {
        number: 22,
        title: "The Currency",
        category: ArticleCategory::Economy,
        text: "The altan is the sole legal tender of the state. Its issuance is governed by the Central Bank under law.",
    },
    Seed {
        number: 23,
        title: "The Central Bank",
        category: ArticleCategory::Economy,
        text: "The Central Bank safeguards the currency. Its governors are appointed by the Khural for staggered terms.",
    },
    Seed {
        number: 24,
        title: "Network Fee",
        category: ArticleCategory::Economy,
        text: "Each transfer bears a network fee set in basis points by law, never exceeding one hundred basis points, and bounded by an absolute cap.",
    },
    Seed {
        number: 25,
        title: "Taxation",
        category: ArticleCategory::Economy,
        text: "The annual tax rate is set in basis points by the Khural and may not exceed five thousand basis points.",
    },
    Seed {
        number: 26,
        title: "The Treasury",
        category: ArticleCategory::Economy,
        text: "Fees and taxes flow to the treasury. Disbursement requires an appropriation of the Khural.",
    },
    Seed {
        number: 27,
        title: "Sound Accounts",
        category: ArticleCategory::Economy,
        text: "All monetary amounts are integers in base units. No organ may keep accounts in fractional or floating representation.",
    },
    Seed {
        number: 28,
        title: "Markets",
        category: ArticleCategory::Economy,
        text: "Trade within Altan is free. Monopoly grants require law and expire within ten years.",
    },
    // Judiciary
    Seed {
        number: 29,
        title: "The Courts",
        category: ArticleCategory::Judiciary,
        text: "Judicial power vests in independent courts. Judges are appointed for life and removable only for cause.",
    },
    Seed {
        number: 30,
        title: "Open Justice",
        category: ArticleCategory::Judiciary,
        text: "Hearings are public and judgments are recorded on the ledger with their reasons.",
    },
    Seed {
        number: 31,
        title: "Disputes",
        category: ArticleCategory::Judiciary,
        text: "Disputes between citizens are heard first within the arban, then on appeal before the courts.",
    },
    Seed {
        number: 32,
        title: "Constitutional Review",
        category: ArticleCategory::Judiciary,
        text: "The High Court strikes down any act inconsistent with this constitution.",
    },
    Seed {
        number: 33,
        title: "Restitution",
        category: ArticleCategory::Judiciary,
        text: "Remedies favor restitution over punishment. Penal sanction requires an act of the Khural.",
    },
    // Amendments
    Seed {
        number: 34,
        title: "Amendment Procedure",
        category: ArticleCategory::Amendments,
        text: "Amendment requires two thirds of the Khural and confirmation by referendum.",
    },
    Seed {
        number: 35,
        title: "Eternal Clauses",
        category: ArticleCategory::Amendments,
        text: "Articles one through three and this article may not be amended.",
    },
    Seed {
        number: 36,
        title: "Transitional Provisions",
        category: ArticleCategory::Amendments,
        text: "The founding khural exercises all powers until the first elected Khural is seated.",
    },
    Seed {
        number: 37,
        title: "Entry into Force",
        category: ArticleCategory::Amendments,
        text: "This constitution enters into force at genesis of the Altan ledger.",
    },
];

/// Materialize the built-in corpus as owned articles, ascending by number.
pub fn default_articles() -> Vec<Article> {
    SEEDS
        .iter()
        .map(|seed| Article {
            number: seed.number,
            title: seed.title.to_string(),
            category: seed.category,
            text: seed.text.to_string(),
            enacted_at: ENACTED_AT.to_string(),
        })
        .collect()
}
