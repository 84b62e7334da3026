use chrono::{Datelike, NaiveDateTime, Timelike};

/// Category label used when user type or gender is missing.
pub const NOT_DEFINED: &str = "Not defined";

/// One row of a city dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_secs: Option<i64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    pub fn new(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time: None,
            duration_secs: None,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_stations(mut self, start: &str, end: &str) -> Self {
        self.start_station = Some(start.to_string());
        self.end_station = Some(end.to_string());
        self
    }

    pub fn with_duration(mut self, secs: i64) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    pub fn with_user(
        mut self,
        user_type: Option<&str>,
        gender: Option<&str>,
        birth_year: Option<i32>,
    ) -> Self {
        self.user_type = user_type.map(str::to_string);
        self.gender = gender.map(str::to_string);
        self.birth_year = birth_year;
        self
    }

    /// 1=January .. 12=December
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// 0=Monday .. 6=Sunday
    pub fn day_of_week(&self) -> u32 {
        self.start_time.weekday().num_days_from_monday()
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn user_type_label(&self) -> &str {
        self.user_type.as_deref().unwrap_or(NOT_DEFINED)
    }

    pub fn gender_label(&self) -> &str {
        self.gender.as_deref().unwrap_or(NOT_DEFINED)
    }
}
