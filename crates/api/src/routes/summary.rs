//! Project summary endpoint.

use axum::{Json, Router, extract::rejection::JsonRejection, routing::post};
use rust_decimal::Decimal;
use serde::Deserialize;
use sitebook_core::expense::{Category, Expense};
use sitebook_core::summary::{ProjectSummary, SummaryService};
use sitebook_shared::types::ProjectId;
use tracing::debug;

use super::validate_expenses;
use crate::{AppState, ApiError};

/// Creates the summary routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/summary", post(summarize))
}

/// Request body for a project summary.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Project the snapshot belongs to, for logging.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Project budget; absent means no budget tracking.
    #[serde(default)]
    pub budget: Option<Decimal>,
    /// Full expense snapshot of the project.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Project categories, used for display names.
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// POST /summary
#[axum::debug_handler]
async fn summarize(
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<ProjectSummary>, ApiError> {
    let Json(request) = payload?;
    validate_expenses(&request.expenses)?;

    let summary =
        SummaryService::summarize(&request.expenses, request.budget, &request.categories);

    debug!(
        project_id = ?request.project_id,
        expenses = request.expenses.len(),
        categories = summary.by_category.len(),
        "Computed project summary"
    );

    Ok(Json(summary))
}
