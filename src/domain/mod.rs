// Domain layer - Monitor records, derived statistics and chart models
pub mod chart;
pub mod dashboard;
pub mod monitor;
