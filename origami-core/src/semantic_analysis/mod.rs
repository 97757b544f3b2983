//! Type inference, name binding and declaration synthesis over a parsed source unit.

mod dispatch;
mod environment;
mod extension;
mod rules;

pub use dispatch::{Origami, TagRule};
pub use environment::Environment;
pub use extension::{Extension, ImportDescriptor};
