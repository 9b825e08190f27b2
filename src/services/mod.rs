pub mod chart_service;
pub mod dashboard_service;
pub mod filter_service;
pub mod modal_service;
pub mod screen_service;
pub mod statistics_service;
pub mod table_service;
