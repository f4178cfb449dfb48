// Application layer - Transformation logic and the fetch use case
pub mod chart_builder;
pub mod dashboard_service;
pub mod monitor_repository;
pub mod processor;
pub mod time_range;
