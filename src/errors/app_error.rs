use journey_core::JourneyError;
use thiserror::Error;

/// Errores de la aplicación: fallos del motor de journeys y de configuración.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error del journey: {0}")]
    Journey(#[from] JourneyError),
    #[error("Error de configuración: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_variant_from() {
        let err: AppError = JourneyError::EmptyJourney.into();
        assert!(matches!(err, AppError::Journey(JourneyError::EmptyJourney)));
        assert!(err.to_string().starts_with("Error del journey: "));
    }

    #[test]
    fn test_config_variant_format() {
        let err = AppError::Config("mala configuración".into());
        assert_eq!(err.to_string(), "Error de configuración: mala configuración");
    }
}
