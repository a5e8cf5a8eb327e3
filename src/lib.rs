pub mod domain;
pub mod literal;
mod utils;

pub use utils::error_chain_fmt;
