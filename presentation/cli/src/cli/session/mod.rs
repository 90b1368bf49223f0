pub mod args;
pub mod error_mapper;
pub mod handlers;
