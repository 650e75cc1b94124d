use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        json,
        verbose: _,
        data_dir,
        command,
    } = cli;

    let mut ctx = AppContext::bootstrap(data_dir, json)?;

    match command {
        Command::Save(args) => commands::save::run(&mut ctx, args),
        Command::List => commands::list::run(&ctx),
        Command::Show(args) => commands::show::run(&mut ctx, args),
        Command::Rm(args) => commands::rm::run(&mut ctx, args),
        Command::Clear => commands::clear::run(&mut ctx),
        Command::Prefs => commands::prefs::run(&ctx),
        Command::Config(args) => commands::config::run(&mut ctx, args.command),
    }
}
