mod node;
mod tag;

pub use node::Node;
pub use tag::Tag;
