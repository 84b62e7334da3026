//! Most frequent times of travel.

use super::Tally;
use crate::dataset::Dataset;
use crate::utils::date::{month_name, weekday_from_index, weekday_name};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// (month 1-12, rentals)
    pub month: (u32, usize),
    /// (day 0=Monday..6, rentals)
    pub day: (u32, usize),
    /// (hour 0-23, rentals)
    pub hour: (u32, usize),
}

impl TimeStats {
    /// `None` for an empty table.
    pub fn compute(ds: &Dataset) -> Option<Self> {
        let months: Tally<u32> = ds.trips.iter().map(|t| t.month()).collect();
        let days: Tally<u32> = ds.trips.iter().map(|t| t.day_of_week()).collect();
        let hours: Tally<u32> = ds.trips.iter().map(|t| t.hour()).collect();

        let (&m, mc) = months.mode()?;
        let (&d, dc) = days.mode()?;
        let (&h, hc) = hours.mode()?;

        Some(Self {
            month: (m, mc),
            day: (d, dc),
            hour: (h, hc),
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let day = weekday_from_index(self.day.0)
            .map(weekday_name)
            .unwrap_or("Unknown");

        writeln!(
            out,
            "The most common month for bike rental is {}",
            month_name(self.month.0)
        )?;
        writeln!(out, "With a total of {} rentals", self.month.1)?;
        writeln!(out, "The most common day for bike rental is {}", day)?;
        writeln!(out, "With a total of {} rentals", self.day.1)?;
        writeln!(
            out,
            "The most common start hour for bike rental is {}",
            self.hour.0
        )?;
        writeln!(out, "With a total of {} rentals", self.hour.1)?;
        Ok(())
    }
}
