//! The module contains the representation of a spending category.
use core::fmt;

use super::{MoneyCents, ResultEngine, error::EngineError};

/// Description used by the shell when a deposit is recorded without one.
pub const DEPOSIT_DESCRIPTION: &str = "deposit";

/// Width of the title line of a report.
const REPORT_WIDTH: usize = 30;
/// Max characters of a description shown in a report line.
const DESCRIPTION_WIDTH: usize = 23;
/// Width of the amount column in a report line.
const AMOUNT_WIDTH: usize = 7;

/// A movement in a category ledger.
///
/// Positive amounts are deposits, negative amounts are withdrawals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    amount: MoneyCents,
    description: String,
}

impl Transaction {
    fn new(amount: MoneyCents, description: String) -> Self {
        Self {
            amount,
            description,
        }
    }

    pub fn amount(&self) -> MoneyCents {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A named spending category with its ordered ledger.
///
/// The balance is the sum of every amount in the ledger and is never brought
/// below zero by [`withdraw`] or [`transfer`]: both check funds before
/// appending the negative transaction.
///
/// ** Examples
///
/// ```rust
/// use engine::{Category, MoneyCents};
///
/// let mut food = Category::new("Food");
/// food.deposit(MoneyCents::from_units(1000), "deposit").unwrap();
/// food.withdraw(MoneyCents::new(100_15), "groceries").unwrap();
/// assert_eq!(food.balance(), MoneyCents::new(899_85));
/// assert!(food.withdraw(MoneyCents::from_units(5000), "").is_err());
/// ```
///
/// [`withdraw`]: Category::withdraw
/// [`transfer`]: Category::transfer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    name: String,
    ledger: Vec<Transaction>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transactions in the order they were recorded.
    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    /// Sum of all transaction amounts.
    pub fn balance(&self) -> MoneyCents {
        self.ledger.iter().map(Transaction::amount).sum()
    }

    /// Returns `true` if the balance covers `amount`. The comparison is exact.
    pub fn check_funds(&self, amount: MoneyCents) -> bool {
        self.balance() >= amount
    }

    pub fn deposit(
        &mut self,
        amount: MoneyCents,
        description: impl Into<String>,
    ) -> ResultEngine<&Transaction> {
        ensure_not_negative(amount)?;
        self.ensure_room(amount)?;
        Ok(self.push(amount, description.into()))
    }

    /// Records a withdrawal of `amount`, stored as a negative transaction.
    ///
    /// Fails with [`EngineError::InsufficientFunds`] and leaves the ledger
    /// untouched when the balance is lower than `amount`.
    pub fn withdraw(
        &mut self,
        amount: MoneyCents,
        description: impl Into<String>,
    ) -> ResultEngine<&Transaction> {
        ensure_not_negative(amount)?;
        self.ensure_funds(amount)?;
        Ok(self.push(-amount, description.into()))
    }

    /// Moves `amount` from `self` to `other`.
    ///
    /// Funds are checked once; on success each ledger gains exactly one
    /// transaction (`Transfer to ...` here, `Transfer from ...` on `other`),
    /// on failure neither ledger changes.
    pub fn transfer(&mut self, amount: MoneyCents, other: &mut Category) -> ResultEngine<()> {
        ensure_not_negative(amount)?;
        self.ensure_funds(amount)?;
        other.ensure_room(amount)?;

        let to = format!("Transfer to {}", other.name);
        let from = format!("Transfer from {}", self.name);
        self.push(-amount, to);
        other.push(amount, from);
        Ok(())
    }

    /// The textual ledger report.
    ///
    /// ```text
    /// *************Food*************
    /// deposit                1000.00
    /// groceries              -100.15
    /// Total: 899.85
    /// ```
    pub fn report(&self) -> String {
        self.to_string()
    }

    fn ensure_funds(&self, amount: MoneyCents) -> ResultEngine<()> {
        if !self.check_funds(amount) {
            return Err(EngineError::InsufficientFunds(format!(
                "{} has {}, requested {}",
                self.name,
                self.balance(),
                amount
            )));
        }
        Ok(())
    }

    /// Fails when crediting `amount` would overflow the balance.
    fn ensure_room(&self, amount: MoneyCents) -> ResultEngine<()> {
        if self.balance().checked_add(amount).is_none() {
            return Err(EngineError::InvalidAmount(format!(
                "{} cannot hold {} more",
                self.name, amount
            )));
        }
        Ok(())
    }

    fn push(&mut self, amount: MoneyCents, description: String) -> &Transaction {
        self.ledger.push(Transaction::new(amount, description));
        &self.ledger[self.ledger.len() - 1]
    }
}

fn ensure_not_negative(amount: MoneyCents) -> ResultEngine<()> {
    if amount.is_negative() {
        return Err(EngineError::InvalidAmount(format!(
            "amount must not be negative, got {amount}"
        )));
    }
    Ok(())
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:*^width$}", self.name, width = REPORT_WIDTH)?;
        for transaction in &self.ledger {
            let description: String = transaction
                .description
                .chars()
                .take(DESCRIPTION_WIDTH)
                .collect();
            writeln!(
                f,
                "{description:<DESCRIPTION_WIDTH$}{:>AMOUNT_WIDTH$}",
                transaction.amount
            )?;
        }
        write!(f, "Total: {}", self.balance())
    }
}
