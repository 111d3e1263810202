#![forbid(unsafe_code)]

mod model;
mod query;
mod reducer;

pub use model::*;
pub use query::*;
pub use reducer::*;

#[cfg(test)]
mod tests;
