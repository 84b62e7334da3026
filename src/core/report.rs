use crate::config::Config;
use crate::core::stats::duration::DurationStats;
use crate::core::stats::station::StationStats;
use crate::core::stats::time::TimeStats;
use crate::core::stats::user::UserStats;
use crate::dataset::Dataset;
use crate::ui::messages::{header, warning};
use crate::utils::colors::grey;
use crate::utils::formatting::separator;
use std::io::{self, Write};
use std::time::Instant;

/// Print every report that applies to `ds`.
///
/// Demographic stats only run when the dataset carries those columns.
/// An empty table prints a single notice instead of any report.
pub fn run_all<W: Write>(out: &mut W, ds: &Dataset, cfg: &Config) -> io::Result<()> {
    if ds.is_empty() {
        warning(out, "No trips match the selected filters. Nothing to report.")?;
        return Ok(());
    }

    section(out, cfg, "Calculating The Most Frequent Times of Travel...", |o| {
        match TimeStats::compute(ds) {
            Some(stats) => stats.render(o),
            None => Ok(()),
        }
    })?;

    section(out, cfg, "Calculating The Most Popular Stations and Trip...", |o| {
        StationStats::compute(ds).render(o)
    })?;

    section(out, cfg, "Calculating Trip Duration...", |o| {
        DurationStats::compute(ds).render(o)
    })?;

    if ds.has_demographics {
        section(out, cfg, "Calculating User Stats...", |o| {
            UserStats::compute(ds).render(o)
        })?;
    } else {
        log::info!("{}: no demographic columns, skipping user stats", ds.city.key());
    }

    Ok(())
}

fn section<W, F>(out: &mut W, cfg: &Config, title: &str, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    header(out, title)?;
    let started = Instant::now();
    body(out)?;
    let elapsed = started.elapsed().as_secs_f64();
    log::debug!("{title} took {elapsed:.6}s");

    if cfg.show_timing {
        writeln!(out, "\nThis took {elapsed:.6} seconds.")?;
    }
    writeln!(
        out,
        "{}",
        grey(&separator(&cfg.separator_char, cfg.separator_width))
    )
}
