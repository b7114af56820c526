//! Order items and code-keyed aggregation

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::catalog::describe;

/// One coded line of the hardware order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub code: String,
    pub description: String,
    pub quantity: f64,
}

/// What the order-submission client sends per line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionLine {
    pub code: String,
    pub quantity: f64,
}

impl OrderItem {
    pub fn submission_line(&self) -> SubmissionLine {
        SubmissionLine {
            code: self.code.clone(),
            quantity: self.quantity,
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Order lines in first-seen order, one per code
#[derive(Debug, Clone, Default)]
pub struct OrderList {
    items: Vec<OrderItem>,
    by_code: AHashMap<String, usize>,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `code`, merging into an existing line.
    ///
    /// Non-positive and non-finite quantities are ignored.
    pub fn push(&mut self, code: &str, quantity: f64) {
        if !quantity.is_finite() || quantity <= 0.0 {
            return;
        }
        match self.by_code.get(code) {
            Some(&index) => {
                let item = &mut self.items[index];
                item.quantity = round2(item.quantity + quantity);
            }
            None => {
                self.by_code.insert(code.to_string(), self.items.len());
                self.items.push(OrderItem {
                    code: code.to_string(),
                    description: describe(code),
                    quantity: round2(quantity),
                });
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&OrderItem> {
        self.by_code.get(code).map(|&index| &self.items[index])
    }

    pub fn quantity(&self, code: &str) -> f64 {
        self.get(code).map(|item| item.quantity).unwrap_or(0.0)
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<OrderItem> {
        self.items
    }
}
