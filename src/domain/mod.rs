pub mod errors;
pub mod order;
pub mod ports;
pub mod query;
pub mod row;
pub mod units;
