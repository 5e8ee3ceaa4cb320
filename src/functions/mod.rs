//! The scientific function library behind [`Function`](crate::ast::Function).
//!
//! - trig.rs      : sin/cos/tan and their inverses, mode aware
//! - logarithm.rs : log (base 10) and ln
//! - other.rs     : sqrt

pub mod logarithm;
pub mod other;
pub mod trig;
