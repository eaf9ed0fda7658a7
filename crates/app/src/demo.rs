//! Sample categories, recorded through the same session API the menu uses.
use std::io::Write;

use engine::{ChartBasis, MoneyCents};

use crate::{error::Result, session::Session};

const DEPOSITS: [(&str, i64); 4] = [
    ("Food", 1000_00),
    ("Clothing", 200_00),
    ("Auto", 1000_00),
    ("Business", 5000_00),
];

const WITHDRAWALS: [(&str, i64, &str); 8] = [
    ("Food", 100_15, "groceries"),
    ("Food", 15_89, "restaurant and more food for dessert"),
    ("Clothing", 75_00, "shirt and pants"),
    ("Auto", 150_00, "Brakes"),
    ("Auto", 80_00, "oil change"),
    ("Business", 300_00, "car rental"),
    ("Business", 200_00, "plane ticket"),
    ("Business", 600_00, "hotel"),
];

const TRANSFERS: [(&str, &str, i64); 2] = [("Food", "Clothing", 50_00), ("Food", "Auto", 100_00)];

pub fn scenario(chart_basis: ChartBasis) -> Result<Session> {
    let mut session = Session::new(chart_basis);
    for (name, cents) in DEPOSITS {
        session.create_category(name)?;
        session.deposit(name, MoneyCents::new(cents), "")?;
    }
    for (name, cents, description) in WITHDRAWALS {
        session.withdraw(name, MoneyCents::new(cents), description)?;
    }
    for (from, to, cents) in TRANSFERS {
        session.transfer(from, to, MoneyCents::new(cents))?;
    }
    Ok(session)
}

/// Prints every ledger followed by the spend chart.
pub fn run<W: Write>(chart_basis: ChartBasis, out: &mut W) -> Result<()> {
    let session = scenario(chart_basis)?;
    writeln!(out, "{}\n", session.reports())?;
    writeln!(out, "{}", session.chart()?)?;
    Ok(())
}
