//! Map geometry helpers

mod polygon;

pub use polygon::*;
