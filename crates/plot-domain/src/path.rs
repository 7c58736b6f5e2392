//! Paths tipados hacia atributos anidados de estilo.
//!
//! El motor externo direcciona ediciones ("cambia este campo dentro del estilo
//! del grupo b") mediante `StylePath` construido por API, nunca parseando
//! strings con puntos o corchetes: un path malformado no puede existir por
//! construcción.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::group::GroupKey;

/// Secuencia ordenada de claves dentro de un árbol de configuración.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StylePath(Vec<String>);

impl StylePath {
    /// Path vacío (la raíz del árbol). No es destino válido de escritura.
    pub fn root() -> Self {
        StylePath(Vec::new())
    }

    /// Extiende el path con un segmento más.
    pub fn key(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

/// Construye un `StylePath` a partir de sus segmentos:
/// `style_path!["marker", "line", "color"]`.
#[macro_export]
macro_rules! style_path {
    ($($segment:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut path = $crate::path::StylePath::root();
        $(path = path.key($segment);)*
        path
    }};
}

impl fmt::Display for StylePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Qué estilo direcciona una edición. Consumido por el log de eventos para
/// dejar trazabilidad de restyles (grupos y visibilidad tienen eventos
/// propios).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditTarget {
    /// Un campo del árbol de estilo base del trace.
    BaseStyle(StylePath),
    /// Un campo del override de estilo de un grupo concreto.
    GroupStyle(GroupKey, StylePath),
    /// El mapping completo de overrides por grupo.
    GroupStyles,
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTarget::BaseStyle(path) => write!(f, "base_style.{}", path),
            EditTarget::GroupStyle(key, path) => write!(f, "groupby.styles[{}].{}", key, path),
            EditTarget::GroupStyles => write!(f, "groupby.styles"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_builds_segments_in_order() {
        let path = style_path!["marker", "line", "width"];
        assert_eq!(path.segments(), ["marker", "line", "width"]);
        assert_eq!(path.to_string(), "marker.line.width");
    }

    #[test]
    fn root_is_empty() {
        assert!(StylePath::root().is_root());
        assert!(style_path![].is_root());
    }

    #[test]
    fn edit_target_display_names_the_address() {
        let t = EditTarget::GroupStyle(GroupKey::from("b"), style_path!["marker", "color"]);
        assert_eq!(t.to_string(), "groupby.styles[b].marker.color");
    }
}
