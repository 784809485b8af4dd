//! Selector option tables for input surfaces.
//!
//! Pure static data: each schedule field (and the action kind list) exposes
//! the fixed set of value/label pairs an input widget would offer. The
//! translation core never reads these.

use crate::action::ActionKind;
use crate::schedule::{ordinal_suffix, ScheduleField, MONTH_NAMES, WEEKDAY_NAMES, WILDCARD};

/// One selectable value with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl ScheduleField {
    /// The fixed option catalog for this field
    pub fn options(&self) -> Vec<FieldOption> {
        match self {
            ScheduleField::Minute => minute_options(),
            ScheduleField::Hour => hour_options(),
            ScheduleField::Day => day_options(),
            ScheduleField::Month => month_options(),
            ScheduleField::Weekday => weekday_options(),
        }
    }
}

impl ActionKind {
    /// The seven action kinds with their display labels
    pub fn options() -> Vec<FieldOption> {
        vec![
            FieldOption::new(ActionKind::Shell.as_str(), "RUN SHELL SCRIPT"),
            FieldOption::new(ActionKind::Python.as_str(), "RUN PYTHON SCRIPT"),
            FieldOption::new(ActionKind::Node.as_str(), "RUN NODE.JS SCRIPT"),
            FieldOption::new(ActionKind::Http.as_str(), "SEND HTTP REQUEST (CURL)"),
            FieldOption::new(ActionKind::Webhook.as_str(), "TRIGGER WEBHOOK"),
            FieldOption::new(ActionKind::Docker.as_str(), "RUN DOCKER CONTAINER"),
            FieldOption::new(ActionKind::Custom.as_str(), "CUSTOM COMMAND"),
        ]
    }
}

fn minute_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new(WILDCARD, "Every minute"),
        FieldOption::new("0", "0 (top of hour)"),
        FieldOption::new("15", "15"),
        FieldOption::new("30", "30"),
        FieldOption::new("45", "45"),
        FieldOption::new("*/5", "Every 5 minutes"),
        FieldOption::new("*/10", "Every 10 minutes"),
        FieldOption::new("*/15", "Every 15 minutes"),
        FieldOption::new("*/30", "Every 30 minutes"),
    ]
}

fn hour_options() -> Vec<FieldOption> {
    let mut options = vec![FieldOption::new(WILDCARD, "Every hour")];
    for hour in 0..24u32 {
        let twelve = match hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        let suffix = if hour < 12 { "AM" } else { "PM" };
        options.push(FieldOption::new(
            hour.to_string(),
            format!("{}:00 ({}{})", hour, twelve, suffix),
        ));
    }
    options.push(FieldOption::new("*/2", "Every 2 hours"));
    options.push(FieldOption::new("*/6", "Every 6 hours"));
    options.push(FieldOption::new("*/12", "Every 12 hours"));
    options
}

fn day_options() -> Vec<FieldOption> {
    let mut options = vec![FieldOption::new(WILDCARD, "Every day")];
    for day in 1..=31u32 {
        options.push(FieldOption::new(
            day.to_string(),
            format!("{}{}", day, ordinal_suffix(day)),
        ));
    }
    options.push(FieldOption::new("*/7", "Every 7 days"));
    options.push(FieldOption::new("1,15", "1st and 15th"));
    options
}

fn month_options() -> Vec<FieldOption> {
    let mut options = vec![FieldOption::new(WILDCARD, "Every month")];
    for (index, name) in MONTH_NAMES.iter().enumerate() {
        options.push(FieldOption::new((index + 1).to_string(), *name));
    }
    options.push(FieldOption::new("*/3", "Every 3 months"));
    options.push(FieldOption::new("*/6", "Every 6 months"));
    options
}

fn weekday_options() -> Vec<FieldOption> {
    let mut options = vec![FieldOption::new(WILDCARD, "Every day")];
    for (index, name) in WEEKDAY_NAMES.iter().enumerate() {
        options.push(FieldOption::new(index.to_string(), *name));
    }
    options.push(FieldOption::new("1-5", "Weekdays (Mon-Fri)"));
    options.push(FieldOption::new("0,6", "Weekends (Sat-Sun)"));
    options
}
