mod base;
mod complex_net;
mod dual_real_net;
mod error;

pub use base::*;
pub use complex_net::*;
pub use dual_real_net::*;
pub use error::*;
