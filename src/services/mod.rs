pub mod log_dirs;
pub mod time_source;
pub mod tracing_setup;
