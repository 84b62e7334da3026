//! Interactive collection of the (city, month, day) selection.

use crate::errors::AppResult;
use crate::models::{City, FilterMode, FilterSelection};
use crate::ui::Prompter;
use crate::ui::messages::success;
use crate::utils::date::{
    filter_month_from_input, month_choices, weekday_choices, weekday_from_input, weekday_name,
};
use crate::utils::title_case;
use std::io::{BufRead, Write};

pub fn collect<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<FilterSelection> {
    writeln!(p.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city = p.ask_until(
        &format!(
            "\nWhich city are you interested in exploring the bike data for?\n ({})",
            City::choices()
        ),
        "We don't have data for this city. Please enter a valid city",
        City::from_input,
    )?;
    success(p.out(), format!("City selected: {}", city.title()))?;

    let mode = p.ask_until(
        "\nWould you like to filter the data by 'month', 'day' or 'none' at all?",
        "Filter option does not exist. Please enter a valid option",
        FilterMode::from_input,
    )?;
    match mode {
        FilterMode::None => success(p.out(), "You've chosen not to filter the data")?,
        other => success(
            p.out(),
            format!("You've chosen to filter the data by {}", title_case(other.as_str())),
        )?,
    }

    let selection = match mode {
        FilterMode::None => FilterSelection::all(city),
        FilterMode::Month => {
            let month = p.ask_until(
                &format!(
                    "\nWhich month are you interested in exploring the bike data for?\n ({})",
                    month_choices()
                ),
                "Month does not exist. Please enter a valid month",
                filter_month_from_input,
            )?;
            success(p.out(), format!("Month selected: {}", month.name()))?;
            FilterSelection::by_month(city, month)
        }
        FilterMode::Day => {
            let day = p.ask_until(
                &format!(
                    "\nWhich day are you interested in exploring the bike data for?\n ({})",
                    weekday_choices()
                ),
                "Day does not exist. Please enter a valid day",
                weekday_from_input,
            )?;
            success(p.out(), format!("Day selected: {}", weekday_name(day)))?;
            FilterSelection::by_day(city, day)
        }
    };

    log::debug!(
        "selection: city={} month={} day={}",
        selection.city.key(),
        selection.month_label(),
        selection.day_label()
    );
    Ok(selection)
}
