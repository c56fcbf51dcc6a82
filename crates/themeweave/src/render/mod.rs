//! Stylesheet template rendering.
//!
//! [`StylesheetRenderer`] renders minijinja templates with a registry
//! available to them:
//!
//! | Name | Kind | Output |
//! |------|------|--------|
//! | `var(key)` | function | `var(--key, ...)` built from the key's link chain |
//! | `resolve(key)` | function | the key's literal, or none |
//! | `custom_properties(prefix?)` | function | `--name: value;` lines for matching keys |
//! | `key \| declare(property)` | filter | `property: var(...);` declaration(s) |

mod functions;
mod renderer;

pub use renderer::StylesheetRenderer;
