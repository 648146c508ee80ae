pub mod traits;
pub mod weight_matrix;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use weight_matrix::{WeightMatrix, NO_EDGE};
