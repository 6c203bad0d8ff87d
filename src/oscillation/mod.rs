/// Oscillation sampling modules
pub mod frames;
pub mod params;
pub mod sweep;

pub use frames::*;
pub use params::*;
pub use sweep::*;
