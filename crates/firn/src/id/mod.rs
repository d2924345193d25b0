mod kind;
mod snowflake;

pub use kind::*;
pub use snowflake::*;
