//! Text bar chart of the spending share of each category.
//!
//! Every column is a category, in the given order. A row shows a marker when
//! the category percentage is greater than or equal to the row threshold:
//!
//! ```text
//! Percentage spent by category
//! 100|
//!  90|
//!  ...
//!  10| o        o
//!   0| o  o  o  o
//!     -------------
//!      F  C  A  B
//!      o  l  u  u
//! ```
use std::str::FromStr;

use serde::Deserialize;

use super::{Category, ResultEngine, error::EngineError};

const TITLE: &str = "Percentage spent by category";

/// What a category's spending is compared against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartBasis {
    /// Share of the total spent across all charted categories.
    #[default]
    TotalSpent,
    /// Share of the category's own current balance.
    Balance,
}

impl ChartBasis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TotalSpent => "total_spent",
            Self::Balance => "balance",
        }
    }
}

impl FromStr for ChartBasis {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "total_spent" | "total" => Ok(Self::TotalSpent),
            "balance" => Ok(Self::Balance),
            other => Err(EngineError::InvalidChartBasis(other.to_string())),
        }
    }
}

/// Spent amount and reference amount of one column, in cents.
///
/// Percentages are never materialized: `spent / reference * 100 >= threshold`
/// is evaluated as `spent * 100 >= threshold * reference` so that values
/// exactly on a threshold get their marker. A zero reference means 0%.
#[derive(Clone, Copy, Debug)]
struct Share {
    spent: i128,
    reference: i128,
}

impl Share {
    fn reaches(self, threshold: i128) -> bool {
        if self.reference == 0 {
            return threshold == 0;
        }
        self.spent * 100 >= threshold * self.reference
    }
}

/// Sum of the absolute value of every withdrawal, widened so that a long
/// ledger cannot overflow it.
fn spent(category: &Category) -> i128 {
    category
        .ledger()
        .iter()
        .map(|tx| i128::from(tx.amount().cents()))
        .filter(|cents| *cents < 0)
        .map(i128::abs)
        .sum()
}

fn shares(categories: &[Category], basis: ChartBasis) -> Vec<Share> {
    let spent: Vec<i128> = categories.iter().map(spent).collect();
    let total: i128 = spent.iter().sum();

    categories
        .iter()
        .zip(spent)
        .map(|(category, spent)| Share {
            spent,
            reference: match basis {
                ChartBasis::TotalSpent => total,
                ChartBasis::Balance => i128::from(category.balance().cents()),
            },
        })
        .collect()
}

/// Renders the spend chart for `categories`.
///
/// Returns [`EngineError::NoCategories`] for an empty slice.
pub fn render_spend_chart(categories: &[Category], basis: ChartBasis) -> ResultEngine<String> {
    if categories.is_empty() {
        return Err(EngineError::NoCategories);
    }

    let shares = shares(categories, basis);
    let mut rows = vec![TITLE.to_string()];

    for threshold in (0..=100).rev().step_by(10) {
        let mut row = format!("{threshold:>3}| ");
        for share in &shares {
            row.push_str(if share.reaches(threshold) { "o  " } else { "   " });
        }
        rows.push(row);
    }

    rows.push(format!("    {}", "-".repeat(categories.len() * 3 + 1)));

    let names: Vec<Vec<char>> = categories
        .iter()
        .map(|category| category.name().chars().collect())
        .collect();
    let longest = names.iter().map(Vec::len).max().unwrap_or(0);
    for index in 0..longest {
        let mut row = String::from("     ");
        for name in &names {
            match name.get(index) {
                Some(ch) => {
                    row.push(*ch);
                    row.push_str("  ");
                }
                None => row.push_str("   "),
            }
        }
        rows.push(row);
    }

    Ok(rows.join("\n").trim_end_matches('\n').to_string())
}
