//! Records or clears the shift for one date.
//!
//! ```text
//! shiftlog shift today night        # record a night shift for today
//! shiftlog shift 2024-03-01 none    # clear the date
//! shiftlog shift today               # pick the kind from a list
//! shiftlog shift today night -t     # clear it again if already a night shift
//! ```

use super::{now, resolve_date};
use crate::{
    db::{error::StoreError, shifts::Shifts},
    libs::{
        calendar::CalendarWeek,
        messages::Message,
        shift::{ShiftKind, DATE_FORMAT},
        view::View,
    },
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct ShiftArgs {
    /// Date as YYYY-MM-DD or `today`
    date: String,

    /// morning, afternoon, night, day_off, leave, or `none` to clear.
    /// Asked interactively when omitted.
    kind: Option<String>,

    /// Clear the date when it already holds this kind
    #[arg(short, long)]
    toggle: bool,
}

pub fn cmd(args: ShiftArgs) -> Result<()> {
    let today = now().date();
    let date = resolve_date(&args.date, today)?;
    let choice = match &args.kind {
        Some(kind) => parse_choice(kind)?,
        None => prompt_choice(date)?,
    };

    let mut shifts = Shifts::new()?;
    let updated = match (choice, args.toggle) {
        (Some(kind), true) => shifts.toggle(date, kind),
        _ => shifts.set(date, choice),
    }
    .map_err(|e| msg_error_anyhow!(failure_message(e)))?;

    let date_text = date.format(DATE_FORMAT).to_string();
    match updated.iter().find(|record| record.date == date) {
        Some(record) => msg_success!(Message::ShiftRecorded(date_text, record.kind.label().to_string())),
        None => msg_success!(Message::ShiftCleared(date_text)),
    }

    View::week(&[CalendarWeek::build(date, &updated)], today);
    Ok(())
}

/// Load failures and save failures are reported differently.
fn failure_message(error: StoreError) -> Message {
    match error {
        StoreError::Read(_) | StoreError::MalformedRecord(_) => Message::ShiftsLoadFailed(error.to_string()),
        _ => Message::ShiftsSaveFailed(error.to_string()),
    }
}

fn parse_choice(value: &str) -> Result<Option<ShiftKind>> {
    if value.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

/// Lists every kind plus a clear entry.
fn prompt_choice(date: NaiveDate) -> Result<Option<ShiftKind>> {
    let mut items: Vec<String> = ShiftKind::ALL
        .iter()
        .map(|kind| format!("{} {}", kind.emoji(), kind.label()))
        .collect();
    items.push("Clear".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ShiftKindPrompt(date.format(DATE_FORMAT).to_string()).to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(ShiftKind::ALL.get(selection).copied())
}
