//! Data layer: the in-memory trip table, CSV loading and filtering.
//!
//! ```text
//!  <city>.csv
//!      │
//!      ▼
//!  ┌──────────┐
//!  │  loader  │  parse rows → Dataset (+ demographics flag)
//!  └──────────┘
//!      │
//!      ▼
//!  ┌──────────┐
//!  │  filter  │  keep rows matching month / weekday
//!  └──────────┘
//! ```
pub mod filter;
pub mod loader;

use crate::models::{City, Trip};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub city: City,
    pub trips: Vec<Trip>,
    /// True when the source file carries user type, gender and birth year.
    pub has_demographics: bool,
}

impl Dataset {
    pub fn new(city: City, trips: Vec<Trip>, has_demographics: bool) -> Self {
        Self {
            city,
            trips,
            has_demographics,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Rows `[offset, offset + size)`, clipped to the table end.
    pub fn page(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}

pub use loader::load;
