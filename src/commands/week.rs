use super::{load_shifts_or_empty, now, resolve_date};
use crate::{
    db::shifts::Shifts,
    libs::{calendar::CalendarWeek, messages::Message, shift::find_by_date, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Any date inside the week to show
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Move by this many weeks
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i64,
}

pub fn cmd(args: WeekArgs) -> Result<()> {
    let today = now().date();
    let date = resolve_date(&args.date, today)?;
    let records = load_shifts_or_empty(&Shifts::new()?);

    match find_by_date(&records, today) {
        Some(record) => msg_print!(Message::TodayShift(record.kind.emoji().to_string(), record.kind.label().to_string())),
        None => msg_info!(Message::NoShiftToday),
    }

    let current = CalendarWeek::build(date, &records).offset(args.offset, &records);
    let weeks = [current.previous(&records), current.clone(), current.next(&records)];

    msg_print!(Message::WeekHeader(current.start.format("%B %Y").to_string()), true);
    msg_print!(Message::WeekRange(
        current.start.format("%d %b").to_string(),
        current.end().format("%d %b").to_string()
    ));
    View::week(&weeks, today);

    Ok(())
}
