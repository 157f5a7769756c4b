pub mod config;
pub mod form_interceptor;
