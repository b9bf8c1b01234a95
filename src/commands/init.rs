use crate::{
    libs::{
        config::{parse_weekday, parse_zone, weekday_name, Config},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// IANA zone name, e.g. America/Chicago
    #[arg(short, long)]
    time_zone: Option<String>,

    /// First day of the week, e.g. sun or monday
    #[arg(short, long)]
    week_start: Option<String>,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.time_zone.is_none() && init_args.week_start.is_none() {
        Config::init()?
    } else {
        let mut config = Config::read()?;
        if let Some(zone) = init_args.time_zone {
            parse_zone(&zone)?;
            config.time_zone = zone;
        }
        if let Some(day) = init_args.week_start {
            config.start_of_week = parse_weekday(&day)?;
        }
        config
    };

    config.save()?;

    msg_success!(Message::ConfigSaved(
        config.time_zone.clone(),
        weekday_name(config.start_of_week).to_string()
    ));
    Ok(())
}
