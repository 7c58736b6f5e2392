//! Constantes del motor core.

/// Versión lógica del motor de derivación. Entra en el fingerprint de cada
/// recomputación: un cambio de versión invalida fingerprints aunque el trace
/// fuente no cambie. Mantener estable mientras no haya cambios incompatibles.
pub const ENGINE_VERSION: &str = "1.0";
