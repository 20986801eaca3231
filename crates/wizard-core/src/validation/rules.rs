use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use super::ValidationErrors;

/// Función de validación libre: devuelve el mensaje de error si falla.
pub type CustomRule = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Regla aplicada a un campo. Salvo `Presence`, las reglas ignoran valores
/// vacíos (ver `is_blank`).
#[derive(Clone)]
pub enum Rule {
    Presence,
    Length { min: Option<usize>, max: Option<usize> },
    Inclusion(Vec<Value>),
    Format(Regex),
    Numericality { only_integer: bool },
    Custom(CustomRule),
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Presence => f.write_str("Presence"),
            Rule::Length { min, max } => f.debug_struct("Length").field("min", min).field("max", max).finish(),
            Rule::Inclusion(values) => f.debug_tuple("Inclusion").field(values).finish(),
            Rule::Format(re) => f.debug_tuple("Format").field(&re.as_str()).finish(),
            Rule::Numericality { only_integer } => f.debug_struct("Numericality").field("only_integer", only_integer).finish(),
            Rule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Rule {
    fn check(&self, value: &Value) -> Option<String> {
        if !matches!(self, Rule::Presence) && is_blank(value) {
            return None;
        }
        match self {
            Rule::Presence => is_blank(value).then(|| "can't be blank".to_string()),
            Rule::Length { min, max } => {
                let len = match value {
                    Value::String(s) => s.chars().count(),
                    Value::Array(items) => items.len(),
                    other => other.to_string().chars().count(),
                };
                if let Some(min) = min.filter(|m| len < *m) {
                    return Some(format!("is too short (minimum is {min} characters)"));
                }
                max.filter(|m| len > *m).map(|max| format!("is too long (maximum is {max} characters)"))
            }
            Rule::Inclusion(allowed) => (!allowed.contains(value)).then(|| "is not included in the list".to_string()),
            Rule::Format(re) => {
                let ok = value.as_str().map(|s| re.is_match(s)).unwrap_or(false);
                (!ok).then(|| "is invalid".to_string())
            }
            Rule::Numericality { only_integer } => numericality(value, *only_integer),
            Rule::Custom(f) => f(value),
        }
    }
}

fn numericality(value: &Value, only_integer: bool) -> Option<String> {
    let number = match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => s.trim().parse::<serde_json::Number>().ok(),
        _ => None,
    };
    match number {
        None => Some("is not a number".to_string()),
        Some(n) if only_integer && !(n.is_i64() || n.is_u64()) => Some("must be an integer".to_string()),
        Some(_) => None,
    }
}

/// Semántica "blank": null, cadena vacía o sólo espacios, colección vacía o
/// `false`.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) => false,
    }
}

/// Conjunto ordenado de reglas por campo.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<(String, Rule)>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.rules.push((field.into(), rule));
        self
    }

    pub fn presence(self, field: impl Into<String>) -> Self {
        self.rule(field, Rule::Presence)
    }

    pub fn length(self, field: impl Into<String>, min: Option<usize>, max: Option<usize>) -> Self {
        self.rule(field, Rule::Length { min, max })
    }

    pub fn inclusion<I, V>(self, field: impl Into<String>, allowed: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<Value>
    {
        self.rule(field, Rule::Inclusion(allowed.into_iter().map(Into::into).collect()))
    }

    pub fn format(self, field: impl Into<String>, pattern: Regex) -> Self {
        self.rule(field, Rule::Format(pattern))
    }

    pub fn numericality(self, field: impl Into<String>, only_integer: bool) -> Self {
        self.rule(field, Rule::Numericality { only_integer })
    }

    pub fn custom<F>(self, field: impl Into<String>, check: F) -> Self
        where F: Fn(&Value) -> Option<String> + Send + Sync + 'static
    {
        self.rule(field, Rule::Custom(Arc::new(check)))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evalúa todas las reglas sobre `attributes` (objeto JSON del step).
    /// Un campo ausente se trata como `null`.
    pub fn validate(&self, attributes: &Value) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, rule) in &self.rules {
            let value = attributes.get(field).unwrap_or(&Value::Null);
            if let Some(message) = rule.check(value) {
                errors.add(field.clone(), message);
            }
        }
        errors
    }
}
