//! Motor de figura: posee los traces fuente y sus colecciones derivadas.

pub mod core;

pub use core::{fingerprint_derived, FigureEngine, TraceSlot};
