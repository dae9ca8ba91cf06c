//! One-shot schema bootstrap
//!
//! Creates the five agency tables and inserts the sample rows in a single
//! transaction. There is no existence check: a second run against the same
//! file fails and commits nothing.

mod embedded;
mod runner;

pub use embedded::{get_scripts, SetupScript};
pub use runner::{initialize, SetupSummary};
