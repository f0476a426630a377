use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

// ---------------------------------------------------------------------------
// FieldValue – a single cell in a dataset column
// ---------------------------------------------------------------------------

/// A dynamically-typed field value guessed from CSV text.
/// Serialized untagged so responses carry native JSON types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// ---------------------------------------------------------------------------
// Champion – one row of the dataset
// ---------------------------------------------------------------------------

/// A single champion (one row of the source CSV).
///
/// Only the raw column map is serialized; the lookup keys below are
/// derived from it at load time and would be redundant in responses.
#[derive(Debug, Clone, Serialize)]
pub struct Champion {
    /// Every column of the row: column_name → value, pass-through.
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
    /// Identity field, original casing.
    #[serde(skip)]
    pub name: String,
    /// Lowercase copy of `name` for case-insensitive lookups.
    #[serde(skip)]
    pub name_lower: String,
    /// Normalized category values (lowercased, whitespace-trimmed).
    #[serde(skip)]
    pub roles: Vec<String>,
}

impl Champion {
    /// Whether this champion carries the given role.
    /// The input must already be normalized (trimmed, lowercased).
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

// ---------------------------------------------------------------------------
// ChampionDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable after load.
#[derive(Debug, Clone)]
pub struct ChampionDataset {
    /// All champions in file order.
    pub champions: Vec<Champion>,
    /// Sorted set of distinct normalized role values across all champions.
    pub roles: Vec<String>,
}

impl ChampionDataset {
    /// Build the role index from the loaded champions.
    pub fn from_champions(champions: Vec<Champion>) -> Self {
        let mut role_set: BTreeSet<String> = BTreeSet::new();
        for champ in &champions {
            for role in &champ.roles {
                role_set.insert(role.clone());
            }
        }
        let roles: Vec<String> = role_set.into_iter().collect();
        ChampionDataset { champions, roles }
    }

    /// Number of champions.
    pub fn len(&self) -> usize {
        self.champions.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}
