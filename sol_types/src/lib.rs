//! Solidity Generator Type Definitions
//!
//! This crate contains the data model shared by the Solidity helper
//! generators: the type specs fed to the array-builder generator, the struct
//! definitions recovered from Solidity sources, and the generator
//! configuration. It holds pure data structures without any file I/O or
//! rendering logic.

pub mod config;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::*;
pub use types::*;
