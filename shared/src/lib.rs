pub mod adapters;
pub mod cart;
pub mod catalog;
pub mod codec;
pub mod configuration;
pub mod core;
pub mod dispatch;
pub mod error;
#[cfg(any(test, feature = "mocks"))]
pub mod in_memory;
pub mod policy;
pub mod utils;
