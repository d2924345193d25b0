mod id;
mod managed;
#[cfg(feature = "serde")]
pub mod serde;
mod time;

pub use crate::id::*;
pub use crate::managed::*;
pub use crate::time::*;
