//! Solidity helper generators
//!
//! Two independent text generators:
//! - [`solarray`] emits a library of array-builder helpers
//!   (`Orders(Order memory a, Order memory b)` and friends).
//! - [`struct_mirror`] scans struct definitions out of a Solidity source and
//!   emits `<Name>Json` twins with alphabetically sorted fields plus a
//!   `toStandard` conversion library.
//!
//! Both build values from [`ir`] and render them with [`render::Renderer`].

pub mod config;
pub mod error;
pub mod ir;
pub mod render;
pub mod scanner;
pub mod solarray;
pub mod struct_mirror;

pub use error::{GenError, GenResult};
pub use sol_types;
