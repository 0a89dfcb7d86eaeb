pub mod globe;
pub mod marker;
pub mod picking;

pub use globe::*;
pub use marker::*;
pub use picking::*;
