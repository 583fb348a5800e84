/// Cluster extraction by orthogonal traversal
pub mod extraction;
/// Trial loop orchestration and batch merging
pub mod executor;
/// Random board generation with exact mine counts
pub mod generation;
