//! Config library - cấu hình đọc từ environment variables

pub mod config;

pub use config::*;
