//! Total and average trip duration.

use crate::dataset::Dataset;
use crate::utils::formatting::secs2readable;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_secs: i64,
    /// `None` when no trip has a duration.
    pub mean_secs: Option<f64>,
    pub counted: usize,
}

impl DurationStats {
    /// Trips without a duration are skipped by both the sum and the mean.
    pub fn compute(ds: &Dataset) -> Self {
        let (total_secs, counted) = ds
            .trips
            .iter()
            .filter_map(|t| t.duration_secs)
            .fold((0i64, 0usize), |(sum, n), d| (sum + d, n + 1));

        let mean_secs = (counted > 0).then(|| total_secs as f64 / counted as f64);

        Self {
            total_secs,
            mean_secs,
            counted,
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "The total trip duration is {}",
            secs2readable(self.total_secs)
        )?;
        match self.mean_secs {
            // truncate toward zero like the hour/minute split
            Some(mean) => writeln!(
                out,
                "The average trip duration is {}",
                secs2readable(mean as i64)
            ),
            None => writeln!(out, "No trip durations available to average"),
        }
    }
}
