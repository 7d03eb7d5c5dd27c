//! Registration token module
//!
//! This module holds the single admission token gating registration:
//! - Minting a fresh token (overwrites the previous one)
//! - Validating a presented bearer credential
//! - Consuming the token atomically once it admits a registration

mod config;
mod memory;
mod traits;


pub use config::TokenStoreConfig;
pub use memory::InMemoryTokenStore;
pub use traits::TokenStore;
