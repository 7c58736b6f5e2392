//! Árbol de configuración declarativa y merge estructural.
//!
//! Rol en el motor:
//! - `ConfigNode` es la representación explícita de un árbol de estilo
//!   (mode, marker, line, ...): `Tree` para objetos anidados, `Leaf` para
//!   todo lo demás (escalares y arrays incluidos).
//! - `merged` define el contrato estático de combinación con precedencia
//!   override > base. Los arrays son hojas: un override de array reemplaza
//!   completo, nunca se fusiona elemento a elemento.
//! - El orden de claves se preserva (IndexMap) para que la salida derivada
//!   sea determinista e igual por valor entre recomputaciones.

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;
use crate::path::StylePath;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    /// Valor plano: escalar o array JSON. Se reemplaza completo al hacer merge.
    Leaf(Value),
    /// Objeto anidado: se fusiona clave por clave.
    Tree(IndexMap<String, ConfigNode>),
}

impl ConfigNode {
    /// Árbol vacío, punto de partida de un `base_style` sin atributos.
    pub fn empty_tree() -> Self {
        ConfigNode::Tree(IndexMap::new())
    }

    pub fn leaf(value: impl Into<Value>) -> Self {
        ConfigNode::Leaf(value.into())
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, ConfigNode::Tree(_))
    }

    pub fn as_tree(&self) -> Option<&IndexMap<String, ConfigNode>> {
        match self {
            ConfigNode::Tree(map) => Some(map),
            ConfigNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            ConfigNode::Leaf(v) => Some(v),
            ConfigNode::Tree(_) => None,
        }
    }

    /// Conversión recursiva a `serde_json::Value` (objetos en orden de claves).
    pub fn to_value(&self) -> Value {
        match self {
            ConfigNode::Leaf(v) => v.clone(),
            ConfigNode::Tree(map) => {
                let mut out = serde_json::Map::new();
                for (k, node) in map {
                    out.insert(k.clone(), node.to_value());
                }
                Value::Object(out)
            }
        }
    }

    /// Lectura por path tipado. `None` si algún segmento no existe o cruza una hoja.
    pub fn get(&self, path: &StylePath) -> Option<&ConfigNode> {
        let mut node = self;
        for seg in path.segments() {
            node = node.as_tree()?.get(seg)?;
        }
        Some(node)
    }

    /// Escritura por path tipado: crea árboles intermedios según haga falta y
    /// reemplaza hojas intermedias por árboles (un restyle de `marker.opacity`
    /// sobre un `marker` escalar lo promueve a objeto).
    pub fn set(&mut self, path: &StylePath, value: ConfigNode) -> Result<(), DomainError> {
        let segments = path.segments();
        let last = segments.last().ok_or(DomainError::EmptyPath)?;
        let mut node = self;
        for seg in &segments[..segments.len() - 1] {
            if !node.is_tree() {
                *node = ConfigNode::empty_tree();
            }
            let ConfigNode::Tree(map) = node else { unreachable!() };
            node = map
                .entry(seg.clone())
                .or_insert_with(ConfigNode::empty_tree);
        }
        if !node.is_tree() {
            *node = ConfigNode::empty_tree();
        }
        let ConfigNode::Tree(map) = node else { unreachable!() };
        map.insert(last.clone(), value);
        Ok(())
    }

    /// Merge estructural no destructivo con precedencia override > base.
    ///
    /// - Tree vs Tree: recursión clave por clave; claves presentes en un solo
    ///   lado se conservan tal cual.
    /// - Cualquier otra combinación: el override reemplaza completo en ese path.
    ///
    /// El override puede introducir claves ausentes del base (mode por grupo,
    /// opacity nueva, symbol nuevo).
    pub fn merged(&self, over: &ConfigNode) -> ConfigNode {
        match (self, over) {
            (ConfigNode::Tree(base), ConfigNode::Tree(over)) => {
                let mut out = base.clone();
                for (k, over_node) in over {
                    let merged = match base.get(k) {
                        Some(base_node) => base_node.merged(over_node),
                        None => over_node.clone(),
                    };
                    out.insert(k.clone(), merged);
                }
                ConfigNode::Tree(out)
            }
            (_, other) => other.clone(),
        }
    }
}

impl From<Value> for ConfigNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                let mut out = IndexMap::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k, ConfigNode::from(v));
                }
                ConfigNode::Tree(out)
            }
            other => ConfigNode::Leaf(other),
        }
    }
}

impl Default for ConfigNode {
    fn default() -> Self {
        ConfigNode::empty_tree()
    }
}

impl Serialize for ConfigNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfigNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ConfigNode::from(Value::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_path;
    use serde_json::json;

    #[test]
    fn merge_recurses_trees_and_keeps_one_sided_keys() {
        let base = ConfigNode::from(json!({
            "mode": "markers",
            "marker": {"color": "darkred", "size": 10}
        }));
        let over = ConfigNode::from(json!({
            "marker": {"size": 30},
            "line": {"color": "purple"}
        }));

        let out = base.merged(&over);

        // claves fusionadas: el override gana donde ambos definen
        assert_eq!(out.get(&style_path!["marker", "size"]).unwrap().as_leaf(), Some(&json!(30)));
        // claves solo en base se conservan
        assert_eq!(out.get(&style_path!["marker", "color"]).unwrap().as_leaf(), Some(&json!("darkred")));
        assert_eq!(out.get(&style_path!["mode"]).unwrap().as_leaf(), Some(&json!("markers")));
        // claves nuevas del override aparecen
        assert_eq!(out.get(&style_path!["line", "color"]).unwrap().as_leaf(), Some(&json!("purple")));
    }

    #[test]
    fn merge_override_can_introduce_new_nested_keys() {
        let base = ConfigNode::from(json!({"marker": {"color": "red"}}));
        let over = ConfigNode::from(json!({
            "mode": "markers+lines",
            "marker": {"opacity": 0.5, "symbol": "triangle-up"}
        }));

        let out = base.merged(&over);

        assert_eq!(out.get(&style_path!["mode"]).unwrap().as_leaf(), Some(&json!("markers+lines")));
        assert_eq!(out.get(&style_path!["marker", "opacity"]).unwrap().as_leaf(), Some(&json!(0.5)));
        assert_eq!(out.get(&style_path!["marker", "symbol"]).unwrap().as_leaf(), Some(&json!("triangle-up")));
        assert_eq!(out.get(&style_path!["marker", "color"]).unwrap().as_leaf(), Some(&json!("red")));
    }

    #[test]
    fn merge_replaces_arrays_wholly() {
        let base = ConfigNode::from(json!({"marker": {"width": [1, 2, 3, 4]}}));
        let over = ConfigNode::from(json!({"marker": {"width": [9]}}));

        let out = base.merged(&over);

        assert_eq!(out.get(&style_path!["marker", "width"]).unwrap().as_leaf(), Some(&json!([9])));
    }

    #[test]
    fn merge_is_non_destructive() {
        let base = ConfigNode::from(json!({"a": 1}));
        let over = ConfigNode::from(json!({"a": 2}));
        let base_copy = base.clone();
        let over_copy = over.clone();

        let _ = base.merged(&over);

        assert_eq!(base, base_copy);
        assert_eq!(over, over_copy);
    }

    #[test]
    fn set_creates_intermediate_trees() {
        let mut node = ConfigNode::empty_tree();
        node.set(&style_path!["marker", "line", "color"], ConfigNode::leaf(json!("red")))
            .unwrap();

        assert_eq!(
            node.get(&style_path!["marker", "line", "color"]).unwrap().as_leaf(),
            Some(&json!("red"))
        );
    }

    #[test]
    fn set_promotes_leaf_to_tree() {
        let mut node = ConfigNode::from(json!({"marker": 5}));
        node.set(&style_path!["marker", "size"], ConfigNode::leaf(json!(20)))
            .unwrap();

        assert_eq!(node.get(&style_path!["marker", "size"]).unwrap().as_leaf(), Some(&json!(20)));
    }

    #[test]
    fn set_rejects_empty_path() {
        let mut node = ConfigNode::empty_tree();
        let err = node.set(&StylePath::root(), ConfigNode::leaf(json!(1))).unwrap_err();
        assert_eq!(err, DomainError::EmptyPath);
    }

    #[test]
    fn value_roundtrip_preserves_key_order() {
        let v = json!({"b": 1, "a": {"z": 2, "y": 3}});
        let node = ConfigNode::from(v.clone());
        assert_eq!(node.to_value(), v);
    }
}
