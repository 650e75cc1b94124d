use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tourmate", version, about = "Travel preference profiles")]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Override the profile data directory")]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Save(SaveArgs),
    List,
    Show(ShowArgs),
    Rm(RmArgs),
    Clear,
    Prefs,
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[arg(help = "Username (3-20 chars: letters, digits, _ .)")]
    pub username: String,
    #[arg(
        long = "pref",
        value_delimiter = ',',
        num_args = 1..,
        help = "Travel preferences"
    )]
    pub prefs: Vec<String>,
    #[arg(long, help = "Replace the existing profile with this username")]
    pub update: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Username to load")]
    pub username: String,
}

#[derive(Debug, Args)]
pub struct RmArgs {
    #[arg(help = "Username to delete")]
    pub username: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(long, help = "Storage slot name")]
    pub storage_key: Option<String>,
    #[arg(long, help = "chrono format for createdAt")]
    pub timestamp_format: Option<String>,
}
