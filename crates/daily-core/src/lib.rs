pub mod config;
pub mod hash;
pub mod identity;
pub mod selector;
pub mod store;
