//! Form orchestration module

mod clause;
mod error_manager;
#[allow(clippy::module_inception)]
mod form;
mod search;

pub use clause::*;
pub use error_manager::*;
pub use form::*;
