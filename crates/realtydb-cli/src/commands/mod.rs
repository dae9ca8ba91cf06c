pub mod browse;
pub mod report;
pub mod setup;
pub mod tables;
