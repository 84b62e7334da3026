//! Calendar names used by filters and reports.

use chrono::{Month, Weekday};

/// Months offered by the month filter (the datasets cover January to June).
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Monday first, matching the 0=Monday day-of-week index.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// 0=Monday .. 6=Sunday
pub fn weekday_from_index(idx: u32) -> Option<Weekday> {
    WEEKDAYS.get(idx as usize).copied()
}

/// 1=January .. 12=December
pub fn month_name(number: u32) -> &'static str {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

pub fn filter_month_from_input(s: &str) -> Option<Month> {
    let s = s.trim();
    FILTER_MONTHS
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(s))
}

pub fn weekday_from_input(s: &str) -> Option<Weekday> {
    let s = s.trim();
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(s))
}

/// "January / February / ..." for prompts
pub fn month_choices() -> String {
    FILTER_MONTHS
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(" / ")
}

pub fn weekday_choices() -> String {
    WEEKDAYS
        .iter()
        .map(|d| weekday_name(*d))
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_half_of_year_is_filterable() {
        assert_eq!(filter_month_from_input("March"), Some(Month::March));
        assert_eq!(filter_month_from_input("june"), Some(Month::June));
        assert_eq!(filter_month_from_input("july"), None);
        assert_eq!(filter_month_from_input("mar"), None);
    }

    #[test]
    fn weekday_index_is_monday_based() {
        assert_eq!(weekday_from_index(0), Some(Weekday::Mon));
        assert_eq!(weekday_from_index(4), Some(Weekday::Fri));
        assert_eq!(weekday_from_index(6), Some(Weekday::Sun));
        assert_eq!(weekday_from_index(7), None);
        assert_eq!(weekday_from_input("FRIDAY"), Some(Weekday::Fri));
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}
