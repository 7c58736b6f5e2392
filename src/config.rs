//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`) con los parámetros del binario de demostración.
use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación (extensible para más secciones).
pub struct AppConfig {
    /// Parámetros del demo de `main.rs`.
    pub demo: DemoConfig,
}

/// Parámetros de la figura de demostración.
pub struct DemoConfig {
    /// Cantidad de puntos del trace de ejemplo.
    pub points: usize,
    /// Claves de grupo, asignadas cíclicamente a los puntos.
    pub group_cycle: Vec<String>,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    let points = env::var("PLOTFLOW_DEMO_POINTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7);
    let group_cycle = env::var("PLOTFLOW_DEMO_GROUPS")
        .map(|v| v.split(',').map(str::to_string).collect())
        .unwrap_or_else(|_| vec!["a".to_string(), "b".to_string()]);
    AppConfig { demo: DemoConfig { points, group_cycle } }
});
