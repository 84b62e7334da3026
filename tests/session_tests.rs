use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{empty_dir, explore, setup_data_dir};

#[test]
fn test_chicago_full_report() {
    let data = setup_data_dir("chicago_full");

    explore("chicago_full", &data, "chicago\nnone\nno\nno\n")
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("City selected: Chicago"))
        .stdout(contains("You've chosen not to filter the data"))
        .stdout(contains("The most common month for bike rental is March"))
        .stdout(contains("The most common day for bike rental is Friday"))
        .stdout(contains("The most common start hour for bike rental is 8"))
        .stdout(contains("With a total of 3 rentals"))
        .stdout(contains("The most common start station is Clark St"))
        .stdout(contains("With a total number of 3 trips started here"))
        .stdout(contains("The most common end station is Canal St"))
        .stdout(contains(
            "starts at Clark St and ends at Canal St with a total of 2 trips",
        ))
        .stdout(contains(
            "The total trip duration is 1 hours, 18 minutes and 45 seconds",
        ))
        .stdout(contains(
            "The average trip duration is 0 hours, 13 minutes and 7 seconds",
        ))
        .stdout(contains("Calculating User Stats..."))
        .stdout(contains("Not defined"))
        .stdout(contains("The earliest birth year a customer has is 1970"))
        .stdout(contains("The most recent birth year is 2001"))
        .stdout(contains("The most common birth year is 1990 with a count of 2"));
}

#[test]
fn test_washington_skips_user_stats() {
    let data = setup_data_dir("washington_no_users");

    explore("washington_no_users", &data, "Washington\nnone\nno\nno\n")
        .success()
        .stdout(contains("City selected: Washington"))
        .stdout(contains("Calculating Trip Duration..."))
        .stdout(contains("The most common start station is 14th & Belmont St NW"))
        .stdout(contains("Calculating User Stats...").not());
}

#[test]
fn test_month_filter() {
    let data = setup_data_dir("month_filter");

    explore("month_filter", &data, "chicago\nmonth\nMARCH\nno\nno\n")
        .success()
        .stdout(contains("You've chosen to filter the data by Month"))
        .stdout(contains("Month selected: March"))
        .stdout(contains("With a total number of 2 trips started here"))
        .stdout(contains("The most common day for bike rental is Friday"));
}

#[test]
fn test_invalid_answers_reprompt() {
    let data = setup_data_dir("reprompt");

    explore(
        "reprompt",
        &data,
        "boston\nChicago\nyear\nday\nfunday\nfriday\nno\nno\n",
    )
    .success()
    .stdout(contains("We don't have data for this city"))
    .stdout(contains("Filter option does not exist"))
    .stdout(contains("Day does not exist"))
    .stdout(contains("Day selected: Friday"))
    .stdout(contains("The most common day for bike rental is Friday"))
    .stdout(contains("With a total number of 3 trips started here"));
}

#[test]
fn test_empty_selection_reports_no_data() {
    let data = setup_data_dir("empty_selection");

    // no trips in April: no reports and no raw-data prompt
    explore("empty_selection", &data, "chicago\nmonth\napril\nno\n")
        .success()
        .stdout(contains("No trips match the selected filters"))
        .stdout(contains("Calculating").not())
        .stdout(contains("Do you want to display").not());
}

#[test]
fn test_raw_data_pages() {
    let data = setup_data_dir("raw_pages");

    explore("raw_pages", &data, "new york city\nnone\nyes\nyes\nno\nno\n")
        .success()
        .stdout(contains("NYC Station 04"))
        .stdout(contains("NYC Station 09"))
        .stdout(contains("NYC Station 10").not())
        .stdout(contains("Birth Year"));
}

#[test]
fn test_restart_runs_a_fresh_session() {
    let data = setup_data_dir("restart");

    explore(
        "restart",
        &data,
        "washington\nnone\nno\nYes\nchicago\nday\nmonday\nno\nno\n",
    )
    .success()
    .stdout(contains("City selected: Washington"))
    .stdout(contains("City selected: Chicago"))
    .stdout(contains("The most common start station is Wabash Ave"));
}

#[test]
fn test_missing_dataset_is_fatal() {
    let data = empty_dir("missing_dataset");

    explore(
        "missing_dataset",
        &data.to_string_lossy(),
        "chicago\nnone\n",
    )
    .failure()
    .stderr(contains("Dataset file not found"));
}

#[test]
fn test_closed_stdin_ends_the_program() {
    let data = setup_data_dir("closed_stdin");

    explore("closed_stdin", &data, "boston\n")
        .failure()
        .stderr(contains("Standard input was closed"));
}

#[test]
fn test_bad_timestamp_is_fatal() {
    let dir = empty_dir("bad_timestamp");
    std::fs::write(
        dir.join("chicago.csv"),
        "Start Time,Trip Duration,Start Station,End Station\nsoon,10,A,B\n",
    )
    .unwrap();

    explore("bad_timestamp", &dir.to_string_lossy(), "chicago\nnone\n")
        .failure()
        .stderr(contains("Invalid timestamp 'soon' at row 1"));
}
