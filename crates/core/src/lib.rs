//! Core library - Account model, store abstraction và directory service
//!
//! Crate này chứa các models, trait `AccountStore` và `AccountDirectory`
//! mà HTTP layer và CLI dùng chung.

pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use models::*;
pub use services::*;
pub use store::*;
