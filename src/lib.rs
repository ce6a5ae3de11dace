//! JourneyFlow
//!
//! Crate raíz sobre `journey-core`:
//! - Expone `config` para cargar la configuración desde el entorno (.env).
//! - Expone `errors` con el error de aplicación.
//! - Expone `demo` con el journey de calibración que recorre el binario.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod demo;
pub mod errors;

pub use journey_core;

#[cfg(test)]
mod tests {
	use super::errors::AppError;
	use journey_core::JourneyError;

	#[test]
	fn app_error_wraps_journey_errors() {
		let e: AppError = JourneyError::InvalidCurrentStep { slug: "x".into() }.into();
		assert_eq!(e.to_string(), "Error del journey: invalid current step slug: x");
	}
}
