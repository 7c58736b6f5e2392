//! Especificación declarativa de transforms y su tabla de registro.
//!
//! El conjunto de transforms es cerrado: un enum etiquetado en lugar de un
//! registro global mutable consultado por string en runtime. La tabla de
//! descriptores es inmutable y se construye una sola vez al arranque
//! (`once_cell`); sirve para exponer metadatos (tag, cardinalidad) sin abrir
//! la puerta a registros dinámicos.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config_tree::ConfigNode;
use crate::group::GroupKey;

/// Transform declarado por el usuario sobre un trace. A lo sumo el primero de
/// la lista está activo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransformSpec {
    #[serde(rename = "groupby")]
    GroupBy(GroupBySpec),
}

impl TransformSpec {
    pub fn tag(&self) -> &'static str {
        match self {
            TransformSpec::GroupBy(_) => GROUPBY_TAG,
        }
    }

    pub fn descriptor(&self) -> &'static TransformDescriptor {
        match self {
            TransformSpec::GroupBy(_) => &GROUPBY_DESCRIPTOR,
        }
    }
}

/// Configuración del transform de agrupamiento.
///
/// Ambos campos tienen default vacío: un groupby presente pero sin `groups`
/// es válido y produce cero traces derivados (comportamiento degenerado
/// preservado del sistema de referencia).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupBySpec {
    /// Clave de grupo por posición del dato (orden = orden de los datos).
    #[serde(default)]
    pub groups: Vec<GroupKey>,
    /// Override parcial de estilo por clave de grupo. La ausencia de una clave
    /// significa "sin override": vale el base/slice sin cambios.
    #[serde(default)]
    pub styles: IndexMap<GroupKey, ConfigNode>,
}

impl GroupBySpec {
    pub fn new(groups: Vec<GroupKey>) -> Self {
        GroupBySpec { groups, styles: IndexMap::new() }
    }

    pub fn with_style(mut self, key: impl Into<GroupKey>, style: ConfigNode) -> Self {
        self.styles.insert(key.into(), style);
        self
    }

    /// Normaliza una especificación parcial: los overrides que no son árboles
    /// se coercen a árbol vacío (equivalen a "sin override"). Los defaults de
    /// `groups`/`styles` ya los cubre serde.
    pub fn supply_defaults(&self) -> GroupBySpec {
        let styles = self
            .styles
            .iter()
            .map(|(k, node)| {
                let node = if node.is_tree() { node.clone() } else { ConfigNode::empty_tree() };
                (k.clone(), node)
            })
            .collect();
        GroupBySpec { groups: self.groups.clone(), styles }
    }
}

pub const GROUPBY_TAG: &str = "groupby";

/// Metadatos estáticos de un transform registrado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformDescriptor {
    pub tag: &'static str,
    /// `true` si un trace fuente puede producir varios derivados.
    pub one_to_many: bool,
}

const GROUPBY_DESCRIPTOR: TransformDescriptor =
    TransformDescriptor { tag: GROUPBY_TAG, one_to_many: true };

static REGISTRY: Lazy<IndexMap<&'static str, TransformDescriptor>> = Lazy::new(|| {
    let mut table = IndexMap::new();
    table.insert(GROUPBY_TAG, GROUPBY_DESCRIPTOR);
    table
});

/// Busca el descriptor de un tag. La tabla es fija: tags desconocidos no
/// existen como variantes del enum, así que `None` solo ocurre con strings
/// arbitrarios de llamadores externos.
pub fn descriptor(tag: &str) -> Option<&'static TransformDescriptor> {
    REGISTRY.get(tag)
}
