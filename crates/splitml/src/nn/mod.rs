mod complex_linear;

pub use complex_linear::*;
