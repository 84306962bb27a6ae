//! Injected collaborators: session storage, hashing, challenge checks, data sinks

mod memory;
mod traits;

pub use memory::*;
pub use traits::*;
