//! Port traits at the seams of the domain.

pub mod market_data_port;
pub mod config_port;
pub mod report_port;
