//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InsufficientFunds`] thrown when a withdrawal or transfer exceeds the
//!   [`Category`] balance.
//! - [`InvalidAmount`] thrown when an amount cannot be parsed or has the wrong
//!   sign for the operation.
//! - [`InvalidChartBasis`] thrown when a chart basis name is not recognized.
//! - [`NoCategories`] thrown when a spend chart is requested for an empty
//!   collection.
//!
//!  [`InsufficientFunds`]: EngineError::InsufficientFunds
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidChartBasis`]: EngineError::InvalidChartBasis
//!  [`NoCategories`]: EngineError::NoCategories
//!  [`Category`]: super::category::Category
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid chart basis \"{0}\": expected total_spent or balance")]
    InvalidChartBasis(String),
    #[error("No categories to chart")]
    NoCategories,
}
