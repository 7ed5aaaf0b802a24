pub mod error;
pub mod graph;
pub mod heap;

pub use error::{Error, Result};
pub use graph::{minimum_spanning_tree, Edge, Graph};
pub use heap::Heap;
