pub mod flight;
pub mod readout;

pub use flight::*;
pub use readout::*;
