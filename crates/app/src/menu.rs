//! Interactive menu loop.
//!
//! Each menu key maps to a [`MenuCommand`] through [`MENU`]; the command is
//! then handled against the [`Session`].
use std::io::{BufRead, Write};

use crate::{error::Result, prompt::Prompt, session::Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    CreateCategory,
    Deposit,
    Withdraw,
    Transfer,
    ShowLedger,
    ShowAllLedgers,
    SpendChart,
    ListCategories,
    Quit,
}

/// Menu keys in display order.
pub const MENU: [(&str, MenuCommand); 9] = [
    ("1", MenuCommand::CreateCategory),
    ("2", MenuCommand::Deposit),
    ("3", MenuCommand::Withdraw),
    ("4", MenuCommand::Transfer),
    ("5", MenuCommand::ShowLedger),
    ("6", MenuCommand::ShowAllLedgers),
    ("7", MenuCommand::SpendChart),
    ("8", MenuCommand::ListCategories),
    ("0", MenuCommand::Quit),
];

impl MenuCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        MENU.iter()
            .find(|(candidate, _)| *candidate == key.trim())
            .map(|(_, command)| *command)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateCategory => "Create category",
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Transfer => "Transfer",
            Self::ShowLedger => "Show ledger",
            Self::ShowAllLedgers => "Show all ledgers",
            Self::SpendChart => "Spend chart",
            Self::ListCategories => "List categories",
            Self::Quit => "Quit",
        }
    }
}

/// What happened to the input while handling a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Done,
    EndOfInput,
}

/// Runs the menu until the user quits or the input ends.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, output: W) -> Result<()> {
    let mut prompt = Prompt::new(input, output);

    loop {
        print_menu(prompt.output())?;
        let Some(choice) = prompt.line("Choose an option: ")? else {
            break;
        };
        let Some(command) = MenuCommand::from_key(&choice) else {
            writeln!(prompt.output(), "Unknown option \"{choice}\".")?;
            continue;
        };
        tracing::debug!(?command, "menu command");
        if command == MenuCommand::Quit {
            break;
        }

        match handle(command, session, &mut prompt) {
            Ok(Step::Done) => {}
            Ok(Step::EndOfInput) => break,
            Err(err) if err.is_user_error() => {
                tracing::warn!(?command, "{err}");
                writeln!(prompt.output(), "Error: {err}")?;
            }
            Err(err) => return Err(err),
        }
    }

    writeln!(prompt.output(), "Goodbye!")?;
    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    for (key, command) in MENU {
        writeln!(out, "{key}. {}", command.label())?;
    }
    Ok(())
}

macro_rules! ask {
    ($expr:expr) => {
        match $expr? {
            Some(value) => value,
            None => return Ok(Step::EndOfInput),
        }
    };
}

fn handle<R: BufRead, W: Write>(
    command: MenuCommand,
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> Result<Step> {
    match command {
        MenuCommand::CreateCategory => {
            let name = ask!(prompt.required("Category name: "));
            let category = session.create_category(&name)?;
            writeln!(prompt.output(), "Created category \"{}\".", category.name())?;
        }
        MenuCommand::Deposit => {
            let name = ask!(prompt.required("Category: "));
            session.category(&name)?;
            let amount = ask!(prompt.amount("Amount: "));
            let description = ask!(prompt.line("Description (default \"deposit\"): "));
            session.deposit(&name, amount, &description)?;
            let balance = session.category(&name)?.balance();
            writeln!(prompt.output(), "Deposited {amount}. Balance: {balance}")?;
        }
        MenuCommand::Withdraw => {
            let name = ask!(prompt.required("Category: "));
            session.category(&name)?;
            let amount = ask!(prompt.amount("Amount: "));
            let description = ask!(prompt.line("Description: "));
            session.withdraw(&name, amount, &description)?;
            let balance = session.category(&name)?.balance();
            writeln!(prompt.output(), "Withdrew {amount}. Balance: {balance}")?;
        }
        MenuCommand::Transfer => {
            let from = ask!(prompt.required("From category: "));
            session.category(&from)?;
            let to = ask!(prompt.required("To category: "));
            session.category(&to)?;
            let amount = ask!(prompt.amount("Amount: "));
            session.transfer(&from, &to, amount)?;
            writeln!(prompt.output(), "Transferred {amount}.")?;
        }
        MenuCommand::ShowLedger => {
            let name = ask!(prompt.required("Category: "));
            let report = session.report(&name)?;
            writeln!(prompt.output(), "{report}")?;
        }
        MenuCommand::ShowAllLedgers => {
            if session.categories().is_empty() {
                writeln!(prompt.output(), "No categories yet.")?;
            } else {
                let reports = session.reports();
                writeln!(prompt.output(), "{reports}")?;
            }
        }
        MenuCommand::SpendChart => {
            let chart = session.chart()?;
            writeln!(prompt.output(), "{chart}")?;
        }
        MenuCommand::ListCategories => {
            if session.categories().is_empty() {
                writeln!(prompt.output(), "No categories yet.")?;
            }
            for category in session.categories() {
                writeln!(prompt.output(), "{:<20}{:>12}", category.name(), category.balance())?;
            }
        }
        MenuCommand::Quit => {}
    }
    Ok(Step::Done)
}
