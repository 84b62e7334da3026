use crate::dataset::Dataset;
use crate::models::FilterSelection;

/// Keep only trips matching the selected month (1-based) and weekday
/// (0=Monday). A `None` filter keeps everything.
pub fn apply(mut dataset: Dataset, selection: &FilterSelection) -> Dataset {
    if let Some(month) = selection.month {
        let wanted = month.number_from_month();
        dataset.trips.retain(|t| t.month() == wanted);
    }

    if let Some(day) = selection.day {
        let wanted = day.num_days_from_monday();
        dataset.trips.retain(|t| t.day_of_week() == wanted);
    }

    dataset
}
