//! Expense and category data types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitebook_shared::types::{CategoryId, ExpenseId, ProjectId};

/// Kind of cost an expense line records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpenseType {
    /// Purchased materials (quantity x unit price).
    Material,
    /// Labor (hours worked x hourly rate).
    Labor,
    /// Delivery and haulage.
    Delivery,
}

impl ExpenseType {
    /// All expense types in display order.
    pub const ALL: [Self; 3] = [Self::Material, Self::Labor, Self::Delivery];
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Material => write!(f, "MATERIAL"),
            Self::Labor => write!(f, "LABOR"),
            Self::Delivery => write!(f, "DELIVERY"),
        }
    }
}

impl std::str::FromStr for ExpenseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MATERIAL" => Ok(Self::Material),
            "LABOR" => Ok(Self::Labor),
            "DELIVERY" => Ok(Self::Delivery),
            _ => Err(format!("Unknown expense type: {s}")),
        }
    }
}

/// A single expense line of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Expense type.
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    /// Short title shown in lists.
    #[serde(default)]
    pub title: String,
    /// Amount, never negative.
    pub amount: Decimal,
    /// `true` for a forecast line, `false` for money actually spent.
    #[serde(default)]
    pub planned: bool,
    /// Local date and time the expense is attributed to.
    pub date: NaiveDateTime,
    /// Category, if the expense is tagged.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Supplier name (materials).
    #[serde(default)]
    pub supplier_name: Option<String>,
    /// Carrier name (deliveries).
    #[serde(default)]
    pub carrier_name: Option<String>,
    /// Worker name (labor).
    #[serde(default)]
    pub worker_name: Option<String>,
    /// Material quantity.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Material unit (e.g. "m3", "bag").
    #[serde(default)]
    pub unit: Option<String>,
    /// Material unit price.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    /// Labor hours.
    #[serde(default)]
    pub hours_worked: Option<Decimal>,
    /// Labor hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Expense {
    /// Creates an actual, uncategorized expense with no optional details.
    #[must_use]
    pub fn new(expense_type: ExpenseType, amount: Decimal, date: NaiveDateTime) -> Self {
        Self {
            id: ExpenseId::new(),
            expense_type,
            title: String::new(),
            amount,
            planned: false,
            date,
            category_id: None,
            supplier_name: None,
            carrier_name: None,
            worker_name: None,
            quantity: None,
            unit: None,
            unit_price: None,
            hours_worked: None,
            hourly_rate: None,
            notes: None,
        }
    }

    /// Marks the expense as planned (or actual).
    #[must_use]
    pub const fn planned(mut self, planned: bool) -> Self {
        self.planned = planned;
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Tags the expense with a category.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the supplier name.
    #[must_use]
    pub fn with_supplier(mut self, name: impl Into<String>) -> Self {
        self.supplier_name = Some(name.into());
        self
    }

    /// Sets the carrier name.
    #[must_use]
    pub fn with_carrier(mut self, name: impl Into<String>) -> Self {
        self.carrier_name = Some(name.into());
        self
    }

    /// Sets the worker name.
    #[must_use]
    pub fn with_worker(mut self, name: impl Into<String>) -> Self {
        self.worker_name = Some(name.into());
        self
    }

    /// Returns true if this is money actually spent.
    #[must_use]
    pub const fn is_actual(&self) -> bool {
        !self.planned
    }
}

/// A named, type-scoped bucket that expenses of one project can be tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Display name.
    pub name: String,
    /// Expense type every tagged expense shares.
    #[serde(rename = "type")]
    pub category_type: ExpenseType,
}
