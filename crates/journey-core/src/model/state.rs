use serde_json::Value;

/// Clave del step actual cuando el estado es un objeto JSON.
pub const CURRENT_STEP_KEY: &str = "current_step";

/// Estado del journey, propiedad del caller.
///
/// El engine sólo lo lee; para navegar construye un valor nuevo con
/// `with_current_step` y lo entrega a la función `replace` del caller.
pub trait JourneyState: Clone {
    /// Slug del step actual.
    fn current_step(&self) -> &str;

    /// Copia del estado que sólo difiere en el step actual.
    fn with_current_step(&self, slug: &str) -> Self;
}

/// Estado dinámico: cualquier objeto JSON con un campo `current_step`.
///
/// Un valor sin ese campo (o que no sea objeto) reporta `""` como step actual,
/// lo que la proyección rechaza con `JourneyError::InvalidCurrentStep`.
impl JourneyState for Value {
    fn current_step(&self) -> &str {
        self.get(CURRENT_STEP_KEY).and_then(Value::as_str).unwrap_or_default()
    }

    fn with_current_step(&self, slug: &str) -> Self {
        let mut next = self.clone();
        if let Value::Object(map) = &mut next {
            map.insert(CURRENT_STEP_KEY.to_string(), Value::String(slug.to_string()));
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_state_only_changes_current_step() {
        let state = json!({"current_step": "start", "is_new": true});
        let next = state.with_current_step("finish");
        assert_eq!(next.current_step(), "finish");
        assert_eq!(next["is_new"], json!(true));
        assert_eq!(state.current_step(), "start");
    }

    #[test]
    fn json_state_without_field_has_empty_step() {
        assert_eq!(json!({}).current_step(), "");
        assert_eq!(json!(3).current_step(), "");
    }
}
