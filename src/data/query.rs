use rand::seq::SliceRandom;

use super::model::{Champion, ChampionDataset};

// ---------------------------------------------------------------------------
// Read-only queries over the loaded dataset
// ---------------------------------------------------------------------------
//
// Every query is a case-insensitive linear scan. The dataset is small and
// static, so no index structure is warranted.

/// Champions whose role list contains the given value.
pub fn by_role<'a>(dataset: &'a ChampionDataset, role: &str) -> Vec<&'a Champion> {
    // Normalize the needle once, not per champion.
    let wanted = role.trim().to_lowercase();
    dataset
        .champions
        .iter()
        .filter(|champ| champ.has_role(&wanted))
        .collect()
}

/// First champion whose name equals the given value, in file order.
pub fn by_name<'a>(dataset: &'a ChampionDataset, name: &str) -> Option<&'a Champion> {
    let wanted = name.to_lowercase();
    dataset
        .champions
        .iter()
        .find(|champ| champ.name_lower == wanted)
}

/// Champions whose name contains the query as a substring.
pub fn search_name<'a>(dataset: &'a ChampionDataset, query: &str) -> Vec<&'a Champion> {
    let needle = query.to_lowercase();
    dataset
        .champions
        .iter()
        .filter(|champ| champ.name_lower.contains(&needle))
        .collect()
}

/// One uniformly random champion, or `None` on an empty dataset.
pub fn random_pick(dataset: &ChampionDataset) -> Option<&Champion> {
    dataset.champions.choose(&mut rand::thread_rng())
}
