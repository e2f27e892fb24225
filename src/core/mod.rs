pub mod chart;
pub mod ranking;
pub mod stats;
