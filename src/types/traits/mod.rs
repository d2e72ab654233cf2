pub mod into_date_interval;
pub mod types;
pub(crate) mod utils;
