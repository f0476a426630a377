use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::data::model::{Champion, ChampionDataset};
use crate::data::query;

/// Query parameters for the champion listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub role: Option<String>,
}

/// GET /champions — all champions in file order, optionally filtered by
/// `?role=`. Filtering to zero matches is an empty 200, unlike the
/// dedicated role endpoint which 404s.
pub async fn list_champions(
    State(dataset): State<Arc<ChampionDataset>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Champion>> {
    let champions = match params.role {
        Some(ref role) => query::by_role(&dataset, role)
            .into_iter()
            .cloned()
            .collect(),
        None => dataset.champions.clone(),
    };
    Json(champions)
}

/// GET /roles — sorted distinct role values.
pub async fn list_roles(State(dataset): State<Arc<ChampionDataset>>) -> Json<Vec<String>> {
    Json(dataset.roles.clone())
}

/// GET /champions/role/{role}
pub async fn champions_by_role(
    State(dataset): State<Arc<ChampionDataset>>,
    Path(role): Path<String>,
) -> Result<Json<Vec<Champion>>, ApiError> {
    let matches: Vec<Champion> = query::by_role(&dataset, &role)
        .into_iter()
        .cloned()
        .collect();
    if matches.is_empty() {
        return Err(ApiError::not_found("No champions found for this role"));
    }
    Ok(Json(matches))
}

/// GET /champions/random
pub async fn random_champion(
    State(dataset): State<Arc<ChampionDataset>>,
) -> Result<Json<Champion>, ApiError> {
    query::random_pick(&dataset)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No champions available"))
}

/// GET /champions/search/{query}
pub async fn search_champions(
    State(dataset): State<Arc<ChampionDataset>>,
    Path(needle): Path<String>,
) -> Result<Json<Vec<Champion>>, ApiError> {
    let matches: Vec<Champion> = query::search_name(&dataset, &needle)
        .into_iter()
        .cloned()
        .collect();
    if matches.is_empty() {
        return Err(ApiError::not_found("No champions match this search"));
    }
    Ok(Json(matches))
}

/// GET /champions/{name}
pub async fn champion_by_name(
    State(dataset): State<Arc<ChampionDataset>>,
    Path(name): Path<String>,
) -> Result<Json<Champion>, ApiError> {
    query::by_name(&dataset, &name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Champion not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FieldValue;
    use std::collections::BTreeMap;

    fn champ(name: &str, roles: &[&str]) -> Champion {
        let mut fields = BTreeMap::new();
        fields.insert("Name".to_string(), FieldValue::String(name.to_string()));
        Champion {
            fields,
            name: name.to_string(),
            name_lower: name.to_lowercase(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn sample() -> Arc<ChampionDataset> {
        Arc::new(ChampionDataset::from_champions(vec![
            champ("Ahri", &["mage"]),
            champ("Garen", &["fighter"]),
        ]))
    }

    fn empty() -> Arc<ChampionDataset> {
        Arc::new(ChampionDataset::from_champions(Vec::new()))
    }

    #[tokio::test]
    async fn list_returns_all_in_order() {
        let Json(champions) =
            list_champions(State(sample()), Query(ListParams { role: None })).await;
        let names: Vec<&str> = champions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ahri", "Garen"]);
    }

    #[tokio::test]
    async fn list_filter_to_zero_matches_is_empty_success() {
        let Json(champions) = list_champions(
            State(sample()),
            Query(ListParams {
                role: Some("support".to_string()),
            }),
        )
        .await;
        assert!(champions.is_empty());
    }

    #[tokio::test]
    async fn list_filter_matches_case_insensitively() {
        let Json(champions) = list_champions(
            State(sample()),
            Query(ListParams {
                role: Some("MAGE".to_string()),
            }),
        )
        .await;
        assert_eq!(champions.len(), 1);
        assert_eq!(champions[0].name, "Ahri");
    }

    #[tokio::test]
    async fn roles_are_sorted() {
        let Json(roles) = list_roles(State(sample())).await;
        assert_eq!(roles, ["fighter", "mage"]);
    }

    #[tokio::test]
    async fn role_endpoint_404s_on_unknown_role() {
        let err = champions_by_role(State(sample()), Path("support".to_string()))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::not_found("No champions found for this role")
        );
    }

    #[tokio::test]
    async fn role_endpoint_returns_matches() {
        let Json(champions) = champions_by_role(State(sample()), Path("Mage".to_string()))
            .await
            .unwrap();
        assert_eq!(champions.len(), 1);
        assert_eq!(champions[0].name, "Ahri");
    }

    #[tokio::test]
    async fn random_404s_on_empty_dataset() {
        let err = random_champion(State(empty())).await.unwrap_err();
        assert_eq!(err, ApiError::not_found("No champions available"));
    }

    #[tokio::test]
    async fn random_returns_a_dataset_member() {
        let Json(champ) = random_champion(State(sample())).await.unwrap();
        assert!(["Ahri", "Garen"].contains(&champ.name.as_str()));
    }

    #[tokio::test]
    async fn search_404s_on_no_match() {
        let err = search_champions(State(sample()), Path("zilean".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::not_found("No champions match this search"));
    }

    #[tokio::test]
    async fn search_matches_substring() {
        let Json(champions) = search_champions(State(sample()), Path("AR".to_string()))
            .await
            .unwrap();
        let names: Vec<&str> = champions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Garen"]);
    }

    #[tokio::test]
    async fn name_lookup_is_case_insensitive() {
        for spelling in ["Garen", "garen", "GAREN"] {
            let Json(champ) = champion_by_name(State(sample()), Path(spelling.to_string()))
                .await
                .unwrap();
            assert_eq!(champ.name, "Garen");
        }
    }

    #[tokio::test]
    async fn name_lookup_404s_on_no_match() {
        let err = champion_by_name(State(sample()), Path("Teemo".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::not_found("Champion not found"));
    }
}
