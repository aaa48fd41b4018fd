//! V1 API handlers.

mod movies;
mod system;


pub use movies::*;
pub use system::*;
