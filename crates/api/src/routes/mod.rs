//! API route definitions.

use axum::Router;
use rust_decimal::Decimal;
use sitebook_core::expense::Expense;
use sitebook_shared::AppError;

use crate::{AppState, ApiError};

pub mod calendar;
pub mod expenses;
pub mod health;
pub mod projects;
pub mod summary;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(summary::routes())
        .merge(projects::routes())
        .merge(calendar::routes())
        .merge(expenses::routes())
}

/// Rejects snapshots the engine must never see.
fn validate_expenses(expenses: &[Expense]) -> Result<(), ApiError> {
    match expenses.iter().find(|e| e.amount < Decimal::ZERO) {
        Some(expense) => Err(AppError::Validation(format!(
            "Expense {} has a negative amount",
            expense.id
        ))
        .into()),
        None => Ok(()),
    }
}
