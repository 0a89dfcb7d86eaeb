pub mod approach;
pub mod wire;

pub use approach::*;
