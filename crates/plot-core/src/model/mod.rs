//! Modelos derivados del transform: partición de grupos y trace derivado.

pub mod derived;
pub mod partition;

pub use derived::DerivedTrace;
pub use partition::GroupPartition;
