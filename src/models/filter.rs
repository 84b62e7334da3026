use crate::models::city::City;
use crate::utils::date::{filter_month_from_input, month_name, weekday_from_input, weekday_name};
use chrono::{Month, Weekday};

/// Which single filter dimension the user wants for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    None,
    Month,
    Day,
}

impl FilterMode {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::None => "none",
            FilterMode::Month => "month",
            FilterMode::Day => "day",
        }
    }
}

/// Validated (city, month-or-all, day-or-all) triple.
///
/// At most one of `month` and `day` is set; `None` means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    pub fn all(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub fn by_month(city: City, month: Month) -> Self {
        Self {
            city,
            month: Some(month),
            day: None,
        }
    }

    pub fn by_day(city: City, day: Weekday) -> Self {
        Self {
            city,
            month: None,
            day: Some(day),
        }
    }

    /// Build a selection from raw names, "all" meaning no filter.
    pub fn from_names(city: &str, month: &str, day: &str) -> Option<Self> {
        let city = City::from_input(city)?;
        let month = match month.trim().to_lowercase().as_str() {
            "all" => None,
            other => Some(filter_month_from_input(other)?),
        };
        let day = match day.trim().to_lowercase().as_str() {
            "all" => None,
            other => Some(weekday_from_input(other)?),
        };
        if month.is_some() && day.is_some() {
            return None;
        }
        Some(Self { city, month, day })
    }

    pub fn month_label(&self) -> &'static str {
        self.month.map(|m| month_name(m.number_from_month())).unwrap_or("all")
    }

    pub fn day_label(&self) -> &'static str {
        self.day.map(weekday_name).unwrap_or("all")
    }
}
