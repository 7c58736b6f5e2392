//! Trace fuente declarado por el usuario y bundle de extensión de datos.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config_tree::ConfigNode;
use crate::error::DomainError;
use crate::group::GroupKey;
use crate::transform::TransformSpec;

/// Flag de visibilidad. No afecta el cómputo de derivados: solo decide qué
/// dibuja la capa de render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    #[serde(rename = "shown")]
    Shown,
    /// Presente en la leyenda pero excluido del dibujo.
    #[serde(rename = "legendonly")]
    LegendOnly,
    #[serde(rename = "hidden")]
    Hidden,
}

/// Serie declarada por el usuario: secuencias de datos paralelas, estilo base
/// y lista de transforms (vacía = sin transform, cubre también los casos
/// "null" y "lista vacía" del sistema de referencia).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceTrace {
    /// Secuencias paralelas indexadas por posición ("x", "y", "ids", ...).
    /// Contrato del llamador: todas comparten la misma longitud `n`.
    #[serde(default)]
    pub data: IndexMap<String, Vec<Value>>,
    /// Árbol de configuración propio del trace (mode, marker, line, ...).
    /// Puede contener arrays de longitud `n` en cualquier profundidad; esos se
    /// rebanan por grupo al derivar.
    #[serde(default)]
    pub base_style: ConfigNode,
    #[serde(default)]
    pub transforms: Vec<TransformSpec>,
    #[serde(default)]
    pub visible: Visibility,
}

impl SourceTrace {
    pub fn new() -> Self {
        SourceTrace::default()
    }

    pub fn with_data(mut self, attr: impl Into<String>, values: Vec<Value>) -> Self {
        self.data.insert(attr.into(), values);
        self
    }

    /// Fija el árbol de estilo base desde un `Value` (objetos → árbol).
    pub fn with_style(mut self, style: Value) -> Self {
        self.base_style = ConfigNode::from(style);
        self
    }

    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn with_visibility(mut self, visible: Visibility) -> Self {
        self.visible = visible;
        self
    }

    /// Longitud de datos `n`: la de la primera secuencia declarada (todas
    /// deben coincidir por contrato; la inconsistencia es bug del llamador).
    pub fn data_len(&self) -> usize {
        self.data.values().next().map_or(0, Vec::len)
    }

    /// El transform activo, si hay alguno. Solo el primero de la lista cuenta.
    pub fn active_transform(&self) -> Option<&TransformSpec> {
        self.transforms.first()
    }

    pub fn active_transform_mut(&mut self) -> Option<&mut TransformSpec> {
        self.transforms.first_mut()
    }
}

/// Bundle de appensión en lockstep: todos los slices comparten una longitud,
/// validada en construcción. Así la invariante "datos y grupos crecen juntos"
/// queda garantizada estructuralmente y no por disciplina del llamador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceExtension {
    data: IndexMap<String, Vec<Value>>,
    groups: Option<Vec<GroupKey>>,
}

impl TraceExtension {
    /// Valida que cada slice de datos (y `groups`, si viene) tengan la misma
    /// longitud. La longitud de referencia es la del primer slice.
    pub fn new(
        data: IndexMap<String, Vec<Value>>,
        groups: Option<Vec<GroupKey>>,
    ) -> Result<Self, DomainError> {
        let expected = data
            .values()
            .next()
            .map(Vec::len)
            .or_else(|| groups.as_ref().map(Vec::len))
            .unwrap_or(0);
        for (attr, slice) in &data {
            if slice.len() != expected {
                return Err(DomainError::LengthMismatch {
                    attr: attr.clone(),
                    expected,
                    got: slice.len(),
                });
            }
        }
        if let Some(groups) = &groups {
            if groups.len() != expected {
                return Err(DomainError::LengthMismatch {
                    attr: "groups".to_string(),
                    expected,
                    got: groups.len(),
                });
            }
        }
        Ok(TraceExtension { data, groups })
    }

    /// Cantidad de puntos que agrega la extensión.
    pub fn added(&self) -> usize {
        self.data
            .values()
            .next()
            .map(Vec::len)
            .or_else(|| self.groups.as_ref().map(Vec::len))
            .unwrap_or(0)
    }

    pub fn data(&self) -> &IndexMap<String, Vec<Value>> {
        &self.data
    }

    pub fn groups(&self) -> Option<&[GroupKey]> {
        self.groups.as_deref()
    }

    pub fn into_parts(self) -> (IndexMap<String, Vec<Value>>, Option<Vec<GroupKey>>) {
        (self.data, self.groups)
    }
}
