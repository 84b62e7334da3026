pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::{FilterMode, FilterSelection};
pub use trip::Trip;
