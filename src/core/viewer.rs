use crate::dataset::Dataset;
use crate::errors::AppResult;
use crate::models::Trip;
use crate::ui::Prompter;
use crate::ui::messages::info;
use crate::utils::table::Table;
use std::io::{BufRead, Write};

const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Show raw rows `page_size` at a time for as long as the user answers "yes".
///
/// Returns the number of rows shown.
pub fn display<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    ds: &Dataset,
    page_size: usize,
) -> AppResult<usize> {
    let page_size = page_size.max(1);
    let mut offset = 0;

    while p.confirm(&format!(
        "\nDo you want to display {page_size} rows of data? (yes / no)"
    ))? {
        if offset >= ds.len() {
            info(p.out(), "No more rows to display.")?;
            break;
        }

        let rows = ds.page(offset, page_size);
        write!(p.out(), "{}", render_page(rows, offset, ds.has_demographics))?;
        offset += rows.len();
    }

    log::debug!("raw viewer showed {offset} of {} rows", ds.len());
    Ok(offset)
}

fn render_page(rows: &[Trip], first_index: usize, demographics: bool) -> String {
    let mut headers = vec![
        "#",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
    ];
    if demographics {
        headers.extend(["User Type", "Gender", "Birth Year"]);
    }

    let mut table = Table::new(headers);
    for (i, t) in rows.iter().enumerate() {
        let mut row = vec![
            (first_index + i).to_string(),
            t.start_time.format(TIME_FMT).to_string(),
            opt(t.end_time.map(|e| e.format(TIME_FMT).to_string())),
            opt(t.duration_secs.map(|d| d.to_string())),
            opt(t.start_station.clone()),
            opt(t.end_station.clone()),
        ];
        if demographics {
            row.push(opt(t.user_type.clone()));
            row.push(opt(t.gender.clone()));
            row.push(opt(t.birth_year.map(|y| y.to_string())));
        }
        table.add_row(row);
    }
    table.render()
}

fn opt(v: Option<String>) -> String {
    v.unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;
    use crate::utils::time::parse_timestamp;
    use std::io::Cursor;

    fn dataset(n: usize) -> Dataset {
        let start = parse_timestamp("2017-01-02 10:00:00").unwrap();
        let trips = (0..n)
            .map(|i| Trip::new(start).with_stations(&format!("Station {i:02}"), "Depot"))
            .collect();
        Dataset::new(City::Washington, trips, false)
    }

    fn view(ds: &Dataset, input: &str) -> (usize, String) {
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let shown = display(&mut p, ds, 5).unwrap();
        (shown, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn pages_advance_by_five() {
        let ds = dataset(20);
        let (shown, out) = view(&ds, "yes\nyes\nyes\nno\n");
        assert_eq!(shown, 15);

        for i in 0..15 {
            assert!(out.contains(&format!("Station {i:02}")), "row {i} missing");
        }
        for i in 15..20 {
            assert!(!out.contains(&format!("Station {i:02}")), "row {i} shown");
        }

        let p0 = out.find("Station 04").unwrap();
        let p1 = out.find("Station 05").unwrap();
        let p2 = out.find("Station 10").unwrap();
        assert!(p0 < p1 && p1 < p2);
        assert_eq!(out.matches("Do you want to display 5 rows").count(), 4);
    }

    #[test]
    fn anything_but_yes_stops() {
        let ds = dataset(20);
        let (shown, out) = view(&ds, "sure\nyes\n");
        assert_eq!(shown, 0);
        assert!(!out.contains("Station 00"));
    }

    #[test]
    fn stops_at_end_of_table() {
        let ds = dataset(7);
        let (shown, out) = view(&ds, "yes\nyes\nyes\n");
        assert_eq!(shown, 7);
        assert!(out.contains("Station 06"));
        assert!(out.contains("No more rows to display."));
    }

    #[test]
    fn demographic_columns_only_when_present() {
        let rows = dataset(1).trips;
        assert!(!render_page(&rows, 0, false).contains("Birth Year"));
        assert!(render_page(&rows, 0, true).contains("Birth Year"));
    }
}
