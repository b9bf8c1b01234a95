use crate::db::shifts::Shifts;
use crate::libs::config::Config;
use crate::libs::draft::{DraftChanges, ShiftDraft};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DraftArgs {
    #[arg(long, help = "Start date (YYYY-MM-DD or 'today')")]
    start_date: Option<String>,

    #[arg(long, help = "Start time (HH:MM or h:mm AM)")]
    start_time: Option<String>,

    #[arg(long, help = "End date (YYYY-MM-DD or 'today'), moves with the start date when omitted")]
    end_date: Option<String>,

    #[arg(long, help = "End time (HH:MM or h:mm AM)")]
    end_time: Option<String>,

    #[arg(long = "break", help = "Break in whole minutes, or --- for none")]
    break_minutes: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    draft: DraftArgs,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    id: i64,

    #[command(flatten)]
    draft: DraftArgs,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    force: bool,
}

pub fn add(args: AddArgs) -> Result<()> {
    let zone = Config::read()?.zone()?;
    let now = Utc::now().with_timezone(&zone);

    let mut draft = ShiftDraft::new_at(&now);
    draft.apply(&changes(&args.draft, now.date_naive())?)?;

    warn_if_negative(&draft);
    let stored = Shifts::new()?.insert(&draft.into_shift(zone)?)?;
    msg_success!(Message::ShiftAdded(stored.id.unwrap_or(0), draft.total().humanize()));
    Ok(())
}

pub fn edit(args: EditArgs) -> Result<()> {
    let zone = Config::read()?.zone()?;
    let shifts = Shifts::new()?;

    let shift = shifts
        .get(args.id)?
        .ok_or_else(|| msg_error_anyhow!(Message::ShiftNotFound(args.id)))?;

    let mut draft = ShiftDraft::from_shift(&shift, zone)?;
    draft.apply(&changes(&args.draft, Utc::now().with_timezone(&zone).date_naive())?)?;

    warn_if_negative(&draft);
    shifts.update(&draft.into_shift(zone)?)?;
    msg_success!(Message::ShiftUpdated(args.id, draft.total().humanize()));
    Ok(())
}

pub fn delete(args: DeleteArgs) -> Result<()> {
    let shifts = Shifts::new()?;
    if shifts.get(args.id)?.is_none() {
        msg_bail_anyhow!(Message::ShiftNotFound(args.id));
    }

    let confirmed = args.force
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteShift(args.id).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        shifts.delete(args.id)?;
        msg_success!(Message::ShiftDeleted(args.id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn warn_if_negative(draft: &ShiftDraft) {
    if draft.total().is_negative() {
        msg_warning!(Message::NegativeShiftTotal(draft.total().to_string()));
    }
}

/// Parses the given flags into draft changes.
fn changes(args: &DraftArgs, today: NaiveDate) -> Result<DraftChanges> {
    Ok(DraftChanges {
        start_date: args.start_date.as_deref().map(|d| parse_date(d, today)).transpose()?,
        start_time: args.start_time.as_deref().map(parse_time).transpose()?,
        end_date: args.end_date.as_deref().map(|d| parse_date(d, today)).transpose()?,
        end_time: args.end_time.as_deref().map(parse_time).transpose()?,
        break_input: args.break_minutes.clone(),
    })
}

fn parse_date(date_str: &str, today: NaiveDate) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(today)
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}

fn parse_time(time_str: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time_str, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&time_str.to_uppercase(), "%I:%M %p"))
        .map_err(|_| msg_error_anyhow!(Message::InvalidTime(time_str.to_string())))
}
