pub mod error;
pub mod explodes;

pub use error::ParseError;
pub use explodes::{explode, explode_all, explode_sub, try_explode, Scheme};
