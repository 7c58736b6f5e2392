// plot-domain library entry point
pub mod config_tree;
pub mod error;
pub mod group;
pub mod path;
pub mod trace;
pub mod transform;

pub use config_tree::ConfigNode;
pub use error::DomainError;
pub use group::GroupKey;
pub use path::{EditTarget, StylePath};
pub use trace::{SourceTrace, TraceExtension, Visibility};
pub use transform::{GroupBySpec, TransformDescriptor, TransformSpec};
