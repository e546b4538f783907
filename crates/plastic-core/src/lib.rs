// crates/plastic-core/src/lib.rs
pub mod value;
pub mod geometry;
pub mod description;

pub use value::*;
pub use geometry::*;
pub use description::*;

#[derive(Debug, thiserror::Error)]
pub enum PlasticError {
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Node {key} references unknown parent {parent}")]
    UnknownParent { key: String, parent: String },

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Parent chain of {0} forms a cycle")]
    ParentCycle(String),

    #[error("Invalid reference size: {width}x{height}")]
    InvalidReferenceSize { width: f32, height: f32 },

    #[error("Invalid target size: {width}x{height}")]
    InvalidTargetSize { width: f32, height: f32 },

    #[error("Invalid layout description: {0}")]
    Description(String),
}

pub type Result<T> = std::result::Result<T, PlasticError>;
