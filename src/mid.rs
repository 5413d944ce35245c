pub mod aegis128x2;
pub mod duplex;
mod util;

pub use aegis128x2::State128X2;
