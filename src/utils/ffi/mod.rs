pub mod bindings;

pub use bindings::*;
