use crate::{
    db::shifts::Shifts,
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let shifts = Shifts::new()?.list_all()?;

    msg_info!(Message::ExportingShifts(shifts.len(), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(&shifts)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
