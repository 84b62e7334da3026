use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase key typed by the user and used in the config `files` map.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    pub fn default_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Helper: convert user input (any case, surrounding blanks) to a city
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        City::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s))
    }

    /// "Chicago / New York City / Washington"
    pub fn choices() -> String {
        City::ALL
            .iter()
            .map(|c| c.title())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
