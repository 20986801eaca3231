use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use super::RouteResolver;
use crate::errors::RouteError;
use crate::path::PathArgs;

/// Tabla en memoria de rutas con nombre y plantillas `{argumento}`.
///
/// Los argumentos que no aparecen en la plantilla se añaden como query string
/// en el orden en que llegan.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: IndexMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(name, template);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.routes.insert(name.into(), template.into());
    }

    pub fn template(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}

fn encode(value: &Value) -> Option<String> {
    let raw = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(utf8_percent_encode(&raw, NON_ALPHANUMERIC).to_string())
}

impl RouteResolver for RouteTable {
    fn resolve(&self, route_name: &str, args: &PathArgs) -> Result<String, RouteError> {
        let template = self.template(route_name)
                           .ok_or_else(|| RouteError::UnknownRoute(route_name.to_string()))?;
        let mut path = String::with_capacity(template.len());
        let mut used: Vec<&str> = Vec::new();
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else { break };
            let name = &rest[start + 1..start + len];
            let value = args.get(name)
                            .and_then(encode)
                            .ok_or_else(|| RouteError::MissingArgument { route: route_name.to_string(),
                                                                         argument: name.to_string() })?;
            path.push_str(&rest[..start]);
            path.push_str(&value);
            used.push(name);
            rest = &rest[start + len + 1..];
        }
        path.push_str(rest);

        let query: Vec<String> = args.iter()
                                     .filter(|(k, _)| !used.contains(&k.as_str()))
                                     .filter_map(|(k, v)| encode(v).map(|v| format!("{}={v}", utf8_percent_encode(k, NON_ALPHANUMERIC))))
                                     .collect();
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query.join("&"));
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_args;

    fn table() -> RouteTable {
        RouteTable::new().route("provider", "/providers/{provider_code}/courses")
                         .route("start", "/start")
    }

    #[test]
    fn placeholders_are_replaced_and_encoded() {
        let path = table().resolve("provider", &path_args! { "provider_code" => "1 TZ" }).unwrap();
        assert_eq!(path, "/providers/1%20TZ/courses");
    }

    #[test]
    fn extra_arguments_become_query_string() {
        let path = table().resolve("start", &path_args! { "year" => 2025, "skip" => serde_json::Value::Null }).unwrap();
        assert_eq!(path, "/start?year=2025");
    }

    #[test]
    fn unknown_route_and_missing_argument_fail() {
        assert_eq!(table().resolve("nope", &PathArgs::new()),
                   Err(RouteError::UnknownRoute("nope".into())));
        assert_eq!(table().resolve("provider", &PathArgs::new()),
                   Err(RouteError::MissingArgument { route: "provider".into(),
                                                     argument: "provider_code".into() }));
    }
}
