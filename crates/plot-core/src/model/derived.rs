//! Trace derivado: una serie por grupo, completamente resuelta.
//!
//! Efímero por diseño: cada invocación del ensamblador regenera la colección
//! completa; nunca se parchea en sitio.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use plot_domain::{ConfigNode, GroupKey};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedTrace {
    /// Clave que originó el grupo; `None` para el passthrough sin transform.
    pub group_key: Option<GroupKey>,
    /// Índices fuente incluidos, en orden original. Los consume la capa
    /// externa para hit-testing y back-mapping.
    pub source_indices: Vec<usize>,
    /// Secuencias rebanadas por atributo; longitud = `source_indices.len()`.
    pub data: IndexMap<String, Vec<Value>>,
    /// Árbol de configuración ya resuelto (base + slice + override).
    pub style: ConfigNode,
}

impl DerivedTrace {
    /// Cantidad de puntos del derivado.
    pub fn len(&self) -> usize {
        self.source_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_indices.is_empty()
    }
}
