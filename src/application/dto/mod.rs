//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize request and response shapes independently of the
//! aggregate's internal layout.

pub mod character;
pub mod dice;
pub mod wealth;

pub use character::*;
pub use dice::*;
pub use wealth::*;
