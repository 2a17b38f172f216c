//! Proptest strategies shared by the property tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use sitebook_shared::types::CategoryId;
use uuid::Uuid;

use crate::expense::{Expense, ExpenseType};

/// Fixed pool of category IDs so generated expenses share categories.
pub(crate) fn category_pool() -> [CategoryId; 4] {
    [1u128, 2, 3, 4].map(|n| CategoryId::from_uuid(Uuid::from_u128(n)))
}

pub(crate) fn expense_type() -> impl Strategy<Value = ExpenseType> {
    prop_oneof![
        Just(ExpenseType::Material),
        Just(ExpenseType::Labor),
        Just(ExpenseType::Delivery),
    ]
}

/// Timestamps spread over roughly four months around a year boundary.
pub(crate) fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..120, 0i64..86_400).prop_map(|(day, second)| {
        NaiveDate::from_ymd_opt(2023, 11, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::days(day)
            + Duration::seconds(second)
    })
}

pub(crate) fn expense() -> impl Strategy<Value = Expense> {
    (
        expense_type(),
        0i64..100_000_000,
        any::<bool>(),
        proptest::option::of(0usize..4),
        timestamp(),
    )
        .prop_map(|(expense_type, cents, planned, category, date)| {
            let mut expense =
                Expense::new(expense_type, Decimal::new(cents, 2), date).planned(planned);
            expense.category_id = category.map(|i| category_pool()[i]);
            expense
        })
}

pub(crate) fn expenses() -> impl Strategy<Value = Vec<Expense>> {
    proptest::collection::vec(expense(), 0..40)
}
