//! Category ledgers and the spend chart.
//!
//! The engine is pure: no I/O, no global state. A caller owns a collection of
//! [`Category`] values, mutates them through their methods and renders the
//! collection with [`render_spend_chart`].
pub use category::{Category, DEPOSIT_DESCRIPTION, Transaction};
pub use error::EngineError;
pub use money::MoneyCents;
pub use spend_chart::{ChartBasis, render_spend_chart};

mod category;
mod error;
mod money;
mod spend_chart;

pub type ResultEngine<T> = Result<T, EngineError>;
