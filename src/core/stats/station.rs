//! Most popular stations and route.

use super::Tally;
use crate::dataset::Dataset;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: Option<(String, usize)>,
    pub end: Option<(String, usize)>,
    /// ((start, end), trips)
    pub route: Option<((String, String), usize)>,
}

impl StationStats {
    /// Trips without a station name are left out of the counts.
    pub fn compute(ds: &Dataset) -> Self {
        let starts: Tally<&str> = ds
            .trips
            .iter()
            .filter_map(|t| t.start_station.as_deref())
            .collect();
        let ends: Tally<&str> = ds
            .trips
            .iter()
            .filter_map(|t| t.end_station.as_deref())
            .collect();
        let routes: Tally<(&str, &str)> = ds
            .trips
            .iter()
            .filter_map(|t| Some((t.start_station.as_deref()?, t.end_station.as_deref()?)))
            .collect();

        Self {
            start: starts.mode().map(|(s, n)| (s.to_string(), n)),
            end: ends.mode().map(|(s, n)| (s.to_string(), n)),
            route: routes
                .mode()
                .map(|((s, e), n)| ((s.to_string(), e.to_string()), n)),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.start {
            Some((name, n)) => {
                writeln!(out, "The most common start station is {}", name)?;
                writeln!(out, "With a total number of {} trips started here", n)?;
            }
            None => writeln!(out, "No start station data available")?,
        }

        match &self.end {
            Some((name, n)) => {
                writeln!(out, "The most common end station is {}", name)?;
                writeln!(out, "With a total number of {} trips ended here", n)?;
            }
            None => writeln!(out, "No end station data available")?,
        }

        if let Some(((s, e), n)) = &self.route {
            writeln!(
                out,
                "\nThe most common route starts at {} and ends at {} with a total of {} trips",
                s, e, n
            )?;
        }
        Ok(())
    }
}
