//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//!
//! Variables reconocidas:
//! - `JOURNEY_STRICT_TARGETS`: overrides con slug desconocido fallan (`1/0`, `true/false`, `yes/no`).
//! - `JOURNEY_RECORD_EVENTS`: registra eventos de navegación.
//! - `JOURNEY_LOG`: filtro de logging para el binario demo (por defecto `info`).
use journey_core::JourneyConfig;
use log::warn;
use once_cell::sync::Lazy;
use std::env;

use crate::errors::AppError;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Configuración que se entrega al engine.
    pub journey: JourneyConfig,
    /// Directiva para `tracing_subscriber::EnvFilter`.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { journey: JourneyConfig::default(),
               log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl AppConfig {
    /// Construye la configuración a partir de una función de búsqueda de
    /// variables. Las ausentes toman su valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = JourneyConfig::default();
        let strict_targets = match lookup("JOURNEY_STRICT_TARGETS") {
            Some(raw) => parse_flag("JOURNEY_STRICT_TARGETS", &raw)?,
            None => defaults.strict_targets,
        };
        let record_events = match lookup("JOURNEY_RECORD_EVENTS") {
            Some(raw) => parse_flag("JOURNEY_RECORD_EVENTS", &raw)?,
            None => defaults.record_events,
        };
        let log_filter = lookup("JOURNEY_LOG").filter(|v| !v.trim().is_empty())
                                              .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Ok(Self { journey: JourneyConfig { strict_targets,
                                           record_events },
                  log_filter })
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("{name}: valor booleano inválido '{other}'"))),
    }
}

/// Lee `.env` (si existe) y el entorno del proceso.
pub fn load_config() -> Result<AppConfig, AppError> {
    // Un .env ausente no es un error.
    let _ = dotenvy::dotenv();
    AppConfig::from_lookup(|name| env::var(name).ok())
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
///
/// Una configuración inválida no aborta: se registra y se usan los valores
/// por defecto.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    load_config().unwrap_or_else(|err| {
                     warn!("{err}; using default configuration");
                     AppConfig::default()
                 })
});
