//! API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<ServerState>`; the
//! analyzer is read-only after construction so handlers need no locking.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analyzer::AcquisitionAnalyzer;
use crate::types::{AnalysisResult, AnalyzerError, PriceTable, Recipe};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct ServerState {
    pub analyzer: AcquisitionAnalyzer,
}

impl ServerState {
    pub fn new(analyzer: AcquisitionAnalyzer) -> Self {
        Self { analyzer }
    }
}

pub type AppState = Arc<ServerState>;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub prices: Option<PriceTable>,
    #[serde(default)]
    pub budget: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub result: AnalysisResult,
    pub report: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeListResponse {
    pub count: usize,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeResponse {
    pub item: String,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map an analyzer error to an HTTP status plus JSON body.
fn error_response(e: AnalyzerError) -> (StatusCode, Json<ErrorBody>) {
    let status = match &e {
        AnalyzerError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        AnalyzerError::NotFound { .. } => StatusCode::NOT_FOUND,
        AnalyzerError::InsufficientData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(ErrorBody { error: e.to_string() }))
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// POST /api/compare
pub async fn compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, (StatusCode, Json<ErrorBody>)> {
    let result = state
        .analyzer
        .compare_methods(req.item.as_deref(), req.prices.as_ref(), req.budget)
        .map_err(error_response)?;
    let report = state.analyzer.render_report(&result);
    Ok(Json(CompareResponse { result, report }))
}

/// GET /api/recipes
pub async fn get_recipes(State(state): State<AppState>) -> Json<RecipeListResponse> {
    let items = state.analyzer.catalog().known_items();
    Json(RecipeListResponse {
        count: items.len(),
        items,
    })
}

/// GET /api/recipes/:name
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RecipeResponse>, (StatusCode, Json<ErrorBody>)> {
    let recipe = state.analyzer.lookup_recipe(&name).map_err(error_response)?;
    Ok(Json(RecipeResponse {
        item: crate::catalog::normalize_item_name(&name),
        recipe: recipe.clone(),
    }))
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecipeCatalog;
    use crate::config::AnalyzerConfig;

    fn test_state() -> AppState {
        Arc::new(ServerState::new(AcquisitionAnalyzer::new(
            RecipeCatalog::builtin(),
            AnalyzerConfig::default(),
        )))
    }

    #[tokio::test]
    async fn test_compare_handler_baseline() {
        let req = CompareRequest {
            item: None,
            prices: None,
            budget: None,
        };
        let Json(resp) = compare(State(test_state()), Json(req)).await.unwrap();
        assert_eq!(resp.result.unboxing.trials_for_50_pct, 267);
        assert!(resp.report.contains("CASE UNBOXING PROBABILITIES"));
    }

    #[tokio::test]
    async fn test_compare_handler_bad_budget() {
        let req = CompareRequest {
            item: None,
            prices: None,
            budget: Some(-10.0),
        };
        let (status, Json(body)) = compare(State(test_state()), Json(req)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("Budget"));
    }

    #[tokio::test]
    async fn test_recipes_handler() {
        let Json(resp) = get_recipes(State(test_state())).await;
        assert_eq!(resp.count, 5);
        assert!(resp.items.contains(&"Flip Knife".to_string()));
    }

    #[tokio::test]
    async fn test_recipe_handler_found() {
        let Json(resp) = get_recipe(State(test_state()), Path("gut knife".into()))
            .await
            .unwrap();
        assert_eq!(resp.item, "Gut Knife");
        assert_eq!(resp.recipe.required_inputs.len(), 5);
    }

    #[tokio::test]
    async fn test_recipe_handler_not_found() {
        let (status, Json(body)) = get_recipe(State(test_state()), Path("Bowie Knife".into()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.error.contains("Known items"));
    }

    #[test]
    fn test_compare_request_deserializes_partial_json() {
        let req: CompareRequest = serde_json::from_str(r#"{"item": "Karambit"}"#).unwrap();
        assert_eq!(req.item.as_deref(), Some("Karambit"));
        assert!(req.prices.is_none());
        assert!(req.budget.is_none());
    }

    #[test]
    fn test_error_body_serializes() {
        let (status, Json(body)) = error_response(AnalyzerError::InsufficientData {
            found: 3,
            required: 5,
        });
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("found 3"));
    }
}
