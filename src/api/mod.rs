//! Remote Service Bindings
//!
//! Frontend bindings to the external analysis service.

mod analysis;

pub use analysis::*;
