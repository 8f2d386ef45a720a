//! Frontend Models
//!
//! Records as returned by the backend. The list core treats them as opaque
//! rows; only the views read their fields.

use serde::{Deserialize, Serialize};

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }

    /// No further transitions; "complete" is disabled for these
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Computed by the backend
    #[serde(default)]
    pub days_overdue: Option<i64>,
    #[serde(default)]
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: Option<String>,
    pub stock: i64,
    pub min_stock: i64,
    pub purchase_price: f64,
    pub sale_price: f64,
    /// Margin as a fraction of the sale price, computed by the backend
    #[serde(default)]
    pub margin: Option<f64>,
}

impl Product {
    pub fn shortfall(&self) -> i64 {
        (self.min_stock - self.stock).max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: u64,
    pub name: String,
    /// Taxpayer identification number, unique per supplier
    pub tin: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: u64,
    pub supplier_name: String,
    pub date: String,
    pub total: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: u64,
    pub customer_name: String,
    pub date: String,
    pub total: f64,
    pub status: String,
}

/// Money with two decimals, as shown in tables
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_decodes_backend_shape() {
        let json = r#"{"id":7,"title":"Count shelf B","status":"IN_PROGRESS","dueDate":"2024-05-01","daysOverdue":3}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.days_overdue, Some(3));
        assert_eq!(task.assignee, None);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!TaskStatus::Pending.is_terminal());
        assert!(!TaskStatus::InProgress.is_terminal());
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_shortfall_never_negative() {
        let mut product = Product {
            id: 1,
            name: "Bolt M6".into(),
            sku: "B-M6".into(),
            category: None,
            stock: 4,
            min_stock: 10,
            purchase_price: 0.1,
            sale_price: 0.25,
            margin: None,
        };
        assert_eq!(product.shortfall(), 6);
        product.stock = 12;
        assert_eq!(product.shortfall(), 0);
    }
}
