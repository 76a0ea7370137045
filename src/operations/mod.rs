//! Operations module
//!
//! Coordinates the two top-level operations: content download and
//! submodule removal

pub mod copy;
pub mod download;
pub mod submodule;

pub use copy::*;
pub use download::*;
pub use submodule::*;
