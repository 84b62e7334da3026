//! User type, gender and birth year statistics.

use super::Tally;
use crate::dataset::Dataset;
use crate::utils::colors::{RESET, color_for_category};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: (i32, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Sorted by descending count; missing values under "Not defined".
    pub user_types: Vec<(String, usize)>,
    pub genders: Vec<(String, usize)>,
    /// `None` when no trip carries a birth year.
    pub birth: Option<BirthYearStats>,
}

fn counts_desc<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let tally: Tally<&str> = labels.collect();
    tally
        .sorted_desc()
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect()
}

impl UserStats {
    pub fn compute(ds: &Dataset) -> Self {
        let user_types = counts_desc(ds.trips.iter().map(|t| t.user_type_label()));
        let genders = counts_desc(ds.trips.iter().map(|t| t.gender_label()));

        let years: Tally<i32> = ds.trips.iter().filter_map(|t| t.birth_year).collect();
        let birth = match (years.first_key(), years.last_key(), years.mode()) {
            (Some(&earliest), Some(&latest), Some((&common, n))) => Some(BirthYearStats {
                earliest,
                latest,
                most_common: (common, n),
            }),
            _ => None,
        };

        Self {
            user_types,
            genders,
            birth,
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n - Counts of user types:")?;
        render_counts(out, &self.user_types)?;

        writeln!(out, "\n - Counts of gender:")?;
        render_counts(out, &self.genders)?;

        match &self.birth {
            Some(b) => {
                writeln!(
                    out,
                    "\nThe earliest birth year a customer has is {}",
                    b.earliest
                )?;
                writeln!(out, "The most recent birth year is {}", b.latest)?;
                writeln!(
                    out,
                    "\nThe most common birth year is {} with a count of {}",
                    b.most_common.0, b.most_common.1
                )?;
            }
            None => writeln!(out, "\nNo birth year data available")?,
        }
        Ok(())
    }
}

fn render_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    let width = counts.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (label, n) in counts {
        writeln!(
            out,
            "{}{:<width$}{}  {}",
            color_for_category(label),
            label,
            RESET,
            n,
            width = width
        )?;
    }
    Ok(())
}
