//! Errores del motor de figuras.
//!
//! El ensamblador de derivados es total y nunca falla (toda combinación
//! degenerada tiene salida definida); los errores existen únicamente en la
//! superficie de edición, donde hacen explícitas las violaciones de contrato
//! del llamador.

use thiserror::Error;

use plot_domain::DomainError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("trace index {0} out of range")]
    InvalidTraceIndex(usize),
    #[error("extending a grouped trace requires a groups slice in the same extension")]
    GroupsNotExtended,
    #[error("extension carries groups but the trace has no grouping transform")]
    NoGroupingTransform,
    #[error("unknown data attribute `{0}`")]
    UnknownAttribute(String),
    #[error("extension must cover every data attribute; `{0}` not extended")]
    MissingAttribute(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
