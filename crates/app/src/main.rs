use clap::Parser;

use crate::{
    error::Result,
    session::Session,
    settings::{Args, Command},
};

mod demo;
mod error;
mod menu;
mod prompt;
mod session;
mod settings;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = settings::load(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "budget={level},engine={level}",
            level = settings.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    let command = args.command.unwrap_or_default();
    tracing::info!(
        ?command,
        chart_basis = settings.chart_basis.as_str(),
        "starting budget"
    );

    let stdout = std::io::stdout();
    match command {
        Command::Menu => {
            let mut session = Session::new(settings.chart_basis);
            menu::run(&mut session, std::io::stdin().lock(), stdout.lock())
        }
        Command::Demo => demo::run(settings.chart_basis, &mut stdout.lock()),
    }
}
