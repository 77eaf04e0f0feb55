pub mod constants;
pub mod dial;
pub mod error;
pub mod geometry;
pub mod music;
pub mod selection;

pub use constants::*;
pub use dial::*;
pub use error::*;
pub use geometry::*;
pub use music::*;
pub use selection::*;
