pub mod config;
pub mod filters;
pub mod report;
pub mod session;
pub mod stats;
pub mod viewer;
