//! Calendar endpoint.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use sitebook_core::calendar::{CalendarService, month_start_from_key};
use sitebook_core::expense::Expense;
use tracing::debug;

use super::validate_expenses;
use crate::{AppState, ApiError};

/// Creates the calendar routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/calendar", post(month_view))
}

/// Request body for a calendar month.
#[derive(Debug, Deserialize)]
pub struct CalendarRequest {
    /// Month to display, `YYYY-MM`.
    pub month: String,
    /// Expense snapshot to place on the grid.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// POST /calendar
#[axum::debug_handler]
async fn month_view(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    validate_expenses(&request.expenses)?;

    let month_start = month_start_from_key(&request.month)?;
    let view = CalendarService::build_month_view(month_start, state.clock.today(), &request.expenses);

    debug!(
        month = %view.month,
        expenses = view.month_totals.count,
        "Built calendar month"
    );

    Ok(Json(view).into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::routes::test_support::{app, post_json};

    #[tokio::test]
    async fn test_month_view() {
        let body = json!({
            "month": "2024-03",
            "expenses": [
                {"id": "0190a5c4-0000-7000-8000-000000000001", "type": "MATERIAL", "amount": "80", "date": "2024-03-01T18:00:00"},
                {"id": "0190a5c4-0000-7000-8000-000000000002", "type": "LABOR", "amount": "40", "planned": true, "date": "2024-03-01T07:30:00"}
            ]
        });
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let (status, view) = post_json(app(today), "/api/v1/calendar", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["month"], "2024-03");
        let cells = view["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 42);

        // March 2024 starts on a Friday: four leading February days.
        assert_eq!(cells[0]["date_key"], "2024-02-26");
        assert_eq!(cells[4]["date_key"], "2024-03-01");
        assert_eq!(cells[4]["is_today"], true);
        assert_eq!(cells[4]["is_current_month"], true);
        assert_eq!(cells[4]["totals"]["actual"], "80");
        assert_eq!(cells[4]["totals"]["planned"], "40");
        assert_eq!(cells[4]["expenses"].as_array().unwrap().len(), 2);
        assert_eq!(view["month_totals"]["count"], 2);
    }

    #[tokio::test]
    async fn test_invalid_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (status, error) =
            post_json(app(today), "/api/v1/calendar", &json!({"month": "2024-13"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"], "VALIDATION_ERROR");
    }
}
