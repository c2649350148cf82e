pub mod adjacency_matrix;
pub mod vertex;
pub mod weight;
