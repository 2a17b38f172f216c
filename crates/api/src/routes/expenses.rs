//! Expense filter endpoint.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use sitebook_core::expense::Expense;
use sitebook_core::filter::ExpenseFilter;
use tracing::debug;

use crate::{AppState, ApiError};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/expenses/filter", post(filter_expenses))
}

/// Request body for filtering an expense list.
#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    /// Expense snapshot.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Filter to apply; omitted means match everything.
    #[serde(default)]
    pub filter: ExpenseFilter,
}

/// Response for a filtered list.
#[derive(Debug, Serialize)]
pub struct FilterResponse<'a> {
    /// Number of matching expenses.
    pub count: usize,
    /// Matching expenses in input order.
    pub expenses: Vec<&'a Expense>,
}

/// POST /expenses/filter
#[axum::debug_handler]
async fn filter_expenses(
    payload: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;

    let matched = request.filter.apply(&request.expenses);

    debug!(
        total = request.expenses.len(),
        matched = matched.len(),
        unfiltered = request.filter.is_empty(),
        "Filtered expenses"
    );

    Ok(Json(FilterResponse {
        count: matched.len(),
        expenses: matched,
    })
    .into_response())
}
