pub mod app_config;
pub mod backend_config;
pub mod session_config;
