//! Project list endpoint.

use axum::{Json, Router, extract::rejection::JsonRejection, routing::post};
use serde::{Deserialize, Serialize};
use sitebook_core::listing::{ListingService, PortfolioTotals, ProjectLedger, ProjectListEntry};
use tracing::debug;

use super::validate_expenses;
use crate::{AppState, ApiError};

/// Creates the project list routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/projects/list", post(list_projects))
}

/// Request body for the project list.
#[derive(Debug, Deserialize)]
pub struct ProjectListRequest {
    /// Projects with their expense snapshots.
    #[serde(default)]
    pub projects: Vec<ProjectLedger>,
}

/// Response for the project list.
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    /// Project cards in display order.
    pub projects: Vec<ProjectListEntry>,
    /// Totals across all projects.
    pub portfolio: PortfolioTotals,
}

/// POST /projects/list
#[axum::debug_handler]
async fn list_projects(
    payload: Result<Json<ProjectListRequest>, JsonRejection>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let Json(request) = payload?;
    for ledger in &request.projects {
        validate_expenses(&ledger.expenses)?;
    }

    let projects = ListingService::build_entries(&request.projects);
    let portfolio = ListingService::portfolio_totals(&projects);

    debug!(
        projects = portfolio.project_count,
        expenses = portfolio.totals.expense_count,
        "Computed project list"
    );

    Ok(Json(ProjectListResponse {
        projects,
        portfolio,
    }))
}
