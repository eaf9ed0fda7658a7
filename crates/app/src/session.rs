//! The categories of one run of the program.
use engine::{Category, ChartBasis, DEPOSIT_DESCRIPTION, MoneyCents, render_spend_chart};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::error::{AppError, Result};

/// Owns the ordered category collection and resolves categories by name.
///
/// Names are compared through [`name_key`], so `Café` and `cafe ` are the
/// same category.
#[derive(Debug, Default)]
pub struct Session {
    categories: Vec<Category>,
    chart_basis: ChartBasis,
}

impl Session {
    pub fn new(chart_basis: ChartBasis) -> Self {
        Self {
            categories: Vec::new(),
            chart_basis,
        }
    }

    /// Categories in creation order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn create_category(&mut self, name: &str) -> Result<&Category> {
        let name = normalize_display(name)
            .ok_or_else(|| AppError::InvalidName("category name must not be empty".to_string()))?;
        if name_key(&name).is_none() {
            return Err(AppError::InvalidName(format!(
                "\"{name}\" has no letters or digits"
            )));
        }
        if self.position(&name).is_some() {
            return Err(AppError::ExistingCategory(name));
        }

        tracing::info!(category = %name, "category created");
        self.categories.push(Category::new(name));
        Ok(&self.categories[self.categories.len() - 1])
    }

    pub fn category(&self, name: &str) -> Result<&Category> {
        let index = self.index_of(name)?;
        Ok(&self.categories[index])
    }

    /// Deposits into `name`; a blank description becomes `deposit`.
    pub fn deposit(&mut self, name: &str, amount: MoneyCents, description: &str) -> Result<()> {
        let index = self.index_of(name)?;
        let description = match description.trim() {
            "" => DEPOSIT_DESCRIPTION,
            other => other,
        };
        let category = &mut self.categories[index];
        category.deposit(amount, description)?;
        tracing::debug!(category = category.name(), %amount, "deposit recorded");
        Ok(())
    }

    pub fn withdraw(&mut self, name: &str, amount: MoneyCents, description: &str) -> Result<()> {
        let index = self.index_of(name)?;
        let category = &mut self.categories[index];
        category.withdraw(amount, description.trim())?;
        tracing::debug!(category = category.name(), %amount, "withdrawal recorded");
        Ok(())
    }

    pub fn transfer(&mut self, from: &str, to: &str, amount: MoneyCents) -> Result<()> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        if source == target {
            return Err(AppError::InvalidName(format!(
                "cannot transfer from \"{from}\" to itself"
            )));
        }

        let [source, target] = self
            .categories
            .get_disjoint_mut([source, target])
            .map_err(|_| AppError::InvalidName("invalid transfer categories".to_string()))?;
        source.transfer(amount, target)?;
        tracing::debug!(
            from = source.name(),
            to = target.name(),
            %amount,
            "transfer recorded"
        );
        Ok(())
    }

    pub fn report(&self, name: &str) -> Result<String> {
        Ok(self.category(name)?.report())
    }

    /// Every report, separated by a blank line.
    pub fn reports(&self) -> String {
        self.categories
            .iter()
            .map(Category::report)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn chart(&self) -> Result<String> {
        Ok(render_spend_chart(&self.categories, self.chart_basis)?)
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name_key(name)?;
        self.categories
            .iter()
            .position(|category| name_key(category.name()).as_deref() == Some(key.as_str()))
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| AppError::UnknownCategory(name.trim().to_string()))
    }
}

/// Trims and collapses inner whitespace. `None` for blank input.
fn normalize_display(input: &str) -> Option<String> {
    let out = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if out.is_empty() { None } else { Some(out) }
}

/// Comparison key: accents stripped, lowercased, punctuation and whitespace
/// runs folded into single spaces.
fn name_key(input: &str) -> Option<String> {
    let mut out = String::new();
    let mut prev_space = false;
    for ch in input.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    let normalized = out.trim();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}
