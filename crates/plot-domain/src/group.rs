//! Clave de grupo: valor opaco y comparable que particiona los puntos de un
//! trace. Dos posiciones pertenecen al mismo grupo sii sus claves son iguales.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn new(key: impl Into<String>) -> Self {
        GroupKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        GroupKey(s.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(s: String) -> Self {
        GroupKey(s)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
