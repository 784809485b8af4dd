use serde::{Deserialize, Serialize};

/// Field value meaning "every unit" (no constraint)
pub const WILDCARD: &str = "*";

pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Selector for one of the five schedule fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    Minute,
    Hour,
    Day,
    Month,
    Weekday,
}

impl std::str::FromStr for ScheduleField {
    type Err = String;

    /// Parse a field selector from its name.
    /// Accepts the crontab column names plus the common long forms
    /// ("day_of_month", "day_of_week").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minute" => Ok(ScheduleField::Minute),
            "hour" => Ok(ScheduleField::Hour),
            "day" | "dayofmonth" | "day_of_month" => Ok(ScheduleField::Day),
            "month" => Ok(ScheduleField::Month),
            "weekday" | "dayofweek" | "day_of_week" => Ok(ScheduleField::Weekday),
            _ => Err(format!("Invalid schedule field: {}", s)),
        }
    }
}

impl std::fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScheduleField::Minute => "minute",
            ScheduleField::Hour => "hour",
            ScheduleField::Day => "day",
            ScheduleField::Month => "month",
            ScheduleField::Weekday => "weekday",
        };
        f.write_str(name)
    }
}

/// Five-field crontab schedule
///
/// Every field is a plain string in the conventional crontab grammar: the
/// wildcard `*`, a single value, a comma list, a step expression `*/N`, or a
/// range like `1-5`. A field is never empty; "no constraint" is always the
/// wildcard, so a missing field deserializes to `*` rather than `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default = "wildcard")]
    pub minute: String,
    #[serde(default = "wildcard")]
    pub hour: String,
    #[serde(default = "wildcard")]
    pub day: String,
    #[serde(default = "wildcard")]
    pub month: String,
    #[serde(default = "wildcard")]
    pub weekday: String,
}

fn wildcard() -> String {
    WILDCARD.to_string()
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(WILDCARD, WILDCARD, WILDCARD, WILDCARD, WILDCARD)
    }
}

impl Schedule {
    pub fn new(
        minute: impl Into<String>,
        hour: impl Into<String>,
        day: impl Into<String>,
        month: impl Into<String>,
        weekday: impl Into<String>,
    ) -> Self {
        Self {
            minute: minute.into(),
            hour: hour.into(),
            day: day.into(),
            month: month.into(),
            weekday: weekday.into(),
        }
    }

    /// Set a single field by name
    pub fn set(&mut self, field: ScheduleField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ScheduleField::Minute => self.minute = value,
            ScheduleField::Hour => self.hour = value,
            ScheduleField::Day => self.day = value,
            ScheduleField::Month => self.month = value,
            ScheduleField::Weekday => self.weekday = value,
        }
    }

    /// Get a single field by name
    pub fn get(&self, field: ScheduleField) -> &str {
        match field {
            ScheduleField::Minute => &self.minute,
            ScheduleField::Hour => &self.hour,
            ScheduleField::Day => &self.day,
            ScheduleField::Month => &self.month,
            ScheduleField::Weekday => &self.weekday,
        }
    }

    /// True when every field is the wildcard
    pub fn is_wildcard(&self) -> bool {
        self.minute == WILDCARD
            && self.hour == WILDCARD
            && self.day == WILDCARD
            && self.month == WILDCARD
            && self.weekday == WILDCARD
    }

    /// Canonical crontab expression: the five fields joined with single
    /// spaces in `minute hour day month weekday` order. Field contents are
    /// passed through verbatim, no validation.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.minute, self.hour, self.day, self.month, self.weekday
        )
    }

    /// English phrase describing the schedule, e.g. "Every weekdays at 9:00 AM".
    ///
    /// Clause order is weekday, hour, minute, day, month. A constrained
    /// minute is spoken only while the hour is unconstrained: once an hour is
    /// set, its "at H:00" clause stands in for the minute and the minute
    /// clause is dropped from the phrase (the expression still carries it).
    pub fn describe(&self) -> String {
        if self.is_wildcard() {
            return "Every minute".to_string();
        }

        let mut parts: Vec<String> = Vec::new();

        if self.weekday != WILDCARD {
            if self.weekday == "1-5" {
                parts.push("weekdays".to_string());
            } else if self.weekday == "0,6" {
                parts.push("weekends".to_string());
            } else if self.weekday.contains(',') {
                let days: Vec<&str> = self.weekday.split(',').map(weekday_name).collect();
                parts.push(days.join(" and "));
            } else {
                parts.push(format!("{}s", weekday_name(&self.weekday)));
            }
        }

        if self.hour != WILDCARD {
            if let Some(step) = self.hour.strip_prefix("*/") {
                parts.push(format!("every {} hours", step));
            } else {
                parts.push(format!("at {}", clock_time(&self.hour)));
            }
        }

        if self.minute != WILDCARD && self.hour == WILDCARD {
            if let Some(step) = self.minute.strip_prefix("*/") {
                parts.push(format!("every {} minutes", step));
            } else {
                parts.push(format!("at minute {}", self.minute));
            }
        }

        if self.day != WILDCARD {
            if let Some(step) = self.day.strip_prefix("*/") {
                parts.push(format!("every {} days", step));
            } else if self.day == "1,15" {
                parts.push("on the 1st and 15th".to_string());
            } else {
                let suffix = leading_number(&self.day).map_or("th", ordinal_suffix);
                parts.push(format!("on the {}{}", self.day, suffix));
            }
        }

        if self.month != WILDCARD {
            if let Some(step) = self.month.strip_prefix("*/") {
                parts.push(format!("every {} months", step));
            } else {
                parts.push(format!("in {}", month_name(&self.month)));
            }
        }

        if parts.is_empty() {
            "Custom schedule".to_string()
        } else {
            format!("Every {}", parts.join(" "))
        }
    }
}

/// Parse the leading run of ascii digits, ignoring whatever follows.
/// "1,15" -> Some(1), "7" -> Some(7), "abc" -> None
pub(crate) fn leading_number(s: &str) -> Option<u32> {
    let s = s.trim();
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().ok()
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, ... 11th-13th, ... 21st, 22nd
pub(crate) fn ordinal_suffix(num: u32) -> &'static str {
    if num > 3 && num < 21 {
        return "th";
    }
    match num % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Weekday index 0-6 to its name, falling back to the raw text out of range
fn weekday_name(value: &str) -> &str {
    match leading_number(value) {
        Some(i) => WEEKDAY_NAMES.get(i as usize).copied().unwrap_or(value),
        None => value,
    }
}

/// Month index 1-12 to its name, falling back to the raw text out of range
fn month_name(value: &str) -> &str {
    match leading_number(value) {
        Some(i) if i >= 1 => MONTH_NAMES.get(i as usize - 1).copied().unwrap_or(value),
        _ => value,
    }
}

/// 12-hour clock string for a 24-hour field value
fn clock_time(hour: &str) -> String {
    match leading_number(hour) {
        Some(0) => "12:00 AM".to_string(),
        Some(12) => "12:00 PM".to_string(),
        Some(h) if h > 12 => format!("{}:00 PM", h - 12),
        Some(h) => format!("{}:00 AM", h),
        None => format!("{}:00", hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_join_order() {
        let schedule = Schedule::new("0", "2", "1", "6", "5");
        assert_eq!(schedule.expression(), "0 2 1 6 5");

        let expression = schedule.expression();
        let tokens: Vec<&str> = expression.split(' ').collect();
        assert_eq!(tokens, vec!["0", "2", "1", "6", "5"]);
    }

    #[test]
    fn test_expression_passes_fields_verbatim() {
        let schedule = Schedule::new("*/5", "9-17", "1,15", "*", "1-5");
        assert_eq!(schedule.expression(), "*/5 9-17 1,15 * 1-5");
    }

    #[test]
    fn test_all_wildcards_is_every_minute() {
        assert_eq!(Schedule::default().describe(), "Every minute");
    }

    #[test]
    fn test_hour_clause() {
        let mut schedule = Schedule::default();
        schedule.set(ScheduleField::Hour, "0");
        assert_eq!(schedule.describe(), "Every at 12:00 AM");
        schedule.set(ScheduleField::Hour, "2");
        assert_eq!(schedule.describe(), "Every at 2:00 AM");
        schedule.set(ScheduleField::Hour, "12");
        assert_eq!(schedule.describe(), "Every at 12:00 PM");
        schedule.set(ScheduleField::Hour, "15");
        assert_eq!(schedule.describe(), "Every at 3:00 PM");
        schedule.set(ScheduleField::Hour, "*/6");
        assert_eq!(schedule.describe(), "Every every 6 hours");
    }

    #[test]
    fn test_minute_clause_only_without_hour() {
        let mut schedule = Schedule::default();
        schedule.set(ScheduleField::Minute, "30");
        assert_eq!(schedule.describe(), "Every at minute 30");
        schedule.set(ScheduleField::Minute, "*/5");
        assert_eq!(schedule.describe(), "Every every 5 minutes");
    }

    #[test]
    fn test_minute_suppressed_once_hour_is_set() {
        let mut schedule = Schedule::default();
        schedule.set(ScheduleField::Hour, "2");
        schedule.set(ScheduleField::Minute, "30");
        let phrase = schedule.describe();
        assert_eq!(phrase, "Every at 2:00 AM");

        // The phrase never mentions the minute, no matter its value...
        schedule.set(ScheduleField::Minute, "45");
        assert_eq!(schedule.describe(), phrase);

        // ...but the expression still carries it.
        assert_eq!(schedule.expression(), "45 2 * * *");
    }

    #[test]
    fn test_weekday_clauses() {
        let mut schedule = Schedule::default();
        schedule.set(ScheduleField::Weekday, "1-5");
        assert_eq!(schedule.describe(), "Every weekdays");
        schedule.set(ScheduleField::Weekday, "0,6");
        assert_eq!(schedule.describe(), "Every weekends");
        schedule.set(ScheduleField::Weekday, "1");
        assert_eq!(schedule.describe(), "Every Mondays");
        schedule.set(ScheduleField::Weekday, "1,3,5");
        assert_eq!(schedule.describe(), "Every Monday and Wednesday and Friday");
    }

    #[test]
    fn test_day_clauses() {
        let mut schedule = Schedule::default();
        schedule.set(ScheduleField::Day, "1");
        assert_eq!(schedule.describe(), "Every on the 1st");
        schedule.set(ScheduleField::Day, "22");
        assert_eq!(schedule.describe(), "Every on the 22nd");
        schedule.set(ScheduleField::Day, "1,15");
        assert_eq!(schedule.describe(), "Every on the 1st and 15th");
        schedule.set(ScheduleField::Day, "*/7");
        assert_eq!(schedule.describe(), "Every every 7 days");
    }

    #[test]
    fn test_month_clauses() {
        let mut schedule = Schedule::default();
        schedule.set(ScheduleField::Month, "1");
        assert_eq!(schedule.describe(), "Every in January");
        schedule.set(ScheduleField::Month, "12");
        assert_eq!(schedule.describe(), "Every in December");
        schedule.set(ScheduleField::Month, "*/3");
        assert_eq!(schedule.describe(), "Every every 3 months");
    }

    #[test]
    fn test_clause_ordering() {
        let schedule = Schedule::new("*", "9", "1", "6", "1-5");
        assert_eq!(
            schedule.describe(),
            "Every weekdays at 9:00 AM on the 1st in June"
        );
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(30), "th");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn test_field_selector_round_trip() {
        for field in [
            ScheduleField::Minute,
            ScheduleField::Hour,
            ScheduleField::Day,
            ScheduleField::Month,
            ScheduleField::Weekday,
        ] {
            assert_eq!(field.to_string().parse::<ScheduleField>(), Ok(field));
        }
        assert_eq!("day_of_week".parse::<ScheduleField>(), Ok(ScheduleField::Weekday));
        assert!("century".parse::<ScheduleField>().is_err());
    }

    #[test]
    fn test_missing_fields_deserialize_to_wildcard() {
        let schedule: Schedule = serde_json::from_str(r#"{"minute":"0","hour":"2"}"#).unwrap();
        assert_eq!(schedule, Schedule::new("0", "2", "*", "*", "*"));
    }
}
