use crate::config::Config;
use crate::errors::AppResult;
use crate::models::City;
use crate::utils::colors::{GREEN, RESET, YELLOW};
use crate::utils::table::Table;

/// Handle the `cities` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(["City", "File", "Status"]);

    for city in City::ALL {
        let path = cfg.dataset_path(city);
        let status = if path.exists() { "found" } else { "missing" };
        table.add_row(vec![
            city.title().to_string(),
            path.display().to_string(),
            status.to_string(),
        ]);
    }

    // color after layout so escape codes do not skew the widths
    let rendered = table
        .render()
        .replace(" found ", &format!(" {GREEN}found{RESET} "))
        .replace(" missing ", &format!(" {YELLOW}missing{RESET} "));
    print!("{rendered}");
    Ok(())
}
