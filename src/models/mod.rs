//! Domain models
//!
//! Ship records, the catalog they are loaded into, shared constants and
//! the error type. Models are plain data with minimal logic.

pub mod constants;
pub mod errors;
pub mod ship;
