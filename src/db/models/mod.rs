//! Database entity models

pub mod cafe;

pub use cafe::{Cafe, CafeCreate};
