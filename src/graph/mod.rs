pub mod traits;
pub mod adjacency;
pub mod io;
pub mod generators;

pub use traits::{VertexId, Weight};
pub use adjacency::Graph;
pub use generators::{random_graph, GeneratorConfig};
