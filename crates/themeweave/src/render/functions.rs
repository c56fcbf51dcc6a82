//! MiniJinja function and filter registration.

use minijinja::{Environment, Error, ErrorKind, Value};
use std::sync::Arc;

use crate::custom_property::Declaration;
use crate::error::ThemeError;
use crate::registry::ThemeRegistry;

fn template_error(err: ThemeError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}

/// Registers the registry-backed functions and filters on an environment.
pub(crate) fn register_functions(env: &mut Environment<'static>, registry: Arc<ThemeRegistry>) {
    let reg = Arc::clone(&registry);
    env.add_function("var", move |key: String| -> Result<String, Error> {
        reg.create_custom_property(&key, false)
            .map(|prop| prop.declaration_value())
            .map_err(template_error)
    });

    let reg = Arc::clone(&registry);
    env.add_function("resolve", move |key: String| -> Result<Value, Error> {
        let literal = reg.resolve(&key).map_err(template_error)?;
        Ok(literal.map(Value::from).unwrap_or_else(|| Value::from(())))
    });

    let reg = Arc::clone(&registry);
    env.add_function(
        "custom_properties",
        move |prefix: Option<String>| -> Result<String, Error> {
            let mut lines = Vec::new();
            for key in reg.keys(prefix.as_deref().unwrap_or("")) {
                let prop = reg
                    .create_custom_property(key, false)
                    .map_err(template_error)?;
                if let Some(declaration) = Declaration::custom(&prop) {
                    lines.push(declaration.to_string());
                }
            }
            Ok(lines.join("\n"))
        },
    );

    // Usage: {{ "button-color" | declare("background-color") }}
    let reg = registry;
    env.add_filter(
        "declare",
        move |key: String, property: String| -> Result<String, Error> {
            let declarations = reg
                .declare_property(&property, &key)
                .map_err(template_error)?;
            Ok(declarations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "))
        },
    );
}
