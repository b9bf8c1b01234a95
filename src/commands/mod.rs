pub mod breaks;
pub mod clock;
pub mod export;
pub mod init;
pub mod log;
pub mod shift;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Set the display time zone and first day of the week")]
    Init(init::InitArgs),
    #[command(about = "Clock in and start a shift")]
    In,
    #[command(about = "Clock out and record the shift")]
    Out,
    #[command(about = "Start or end a break")]
    Break,
    #[command(about = "Show the running shift and break counters")]
    Status(status::StatusArgs),
    #[command(about = "Browse recorded shifts by week, month or year")]
    Log(log::LogArgs),
    #[command(about = "Record a shift by hand")]
    Add(shift::AddArgs),
    #[command(about = "Change a recorded shift")]
    Edit(shift::EditArgs),
    #[command(about = "Delete a recorded shift")]
    Delete(shift::DeleteArgs),
    #[command(about = "Export every recorded shift")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::In => clock::clock_in(),
            Commands::Out => clock::clock_out(),
            Commands::Break => breaks::cmd(),
            Commands::Status(args) => status::cmd(args).await,
            Commands::Log(args) => log::cmd(args),
            Commands::Add(args) => shift::add(args),
            Commands::Edit(args) => shift::edit(args),
            Commands::Delete(args) => shift::delete(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
