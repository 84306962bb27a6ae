//! Form elements module

mod element;
mod kind;
mod value;

pub use element::*;
pub use kind::*;
pub use value::*;
