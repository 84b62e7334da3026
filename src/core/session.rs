use crate::config::Config;
use crate::core::{filters, report, viewer};
use crate::dataset;
use crate::errors::AppResult;
use crate::ui::Prompter;
use std::io::{BufRead, Write};

/// Collect filters, load, report, browse, and offer a restart.
///
/// Each iteration starts from scratch; a load error ends the session.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>, cfg: &Config) -> AppResult<()> {
    let mut iteration = 0;
    loop {
        iteration += 1;
        log::debug!("session iteration {iteration}");

        let selection = filters::collect(p)?;
        let ds = dataset::load(cfg, &selection)?;

        report::run_all(p.out(), &ds, cfg)?;
        if !ds.is_empty() {
            viewer::display(p, &ds, cfg.page_size)?;
        }

        if !p.confirm("\nWould you like to restart? Enter yes or no.")? {
            break;
        }
    }
    Ok(())
}
