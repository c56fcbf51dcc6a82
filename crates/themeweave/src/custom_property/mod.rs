//! Custom-property values and declarations.
//!
//! This module models a single `var(--name, fallback)` expression and the
//! declarations built from it:
//!
//! - [`CustomProperty`]: a varname with an optional [`Fallback`]
//! - [`Fallback`]: either a nested property or a literal, so chains nest
//!   one level per link
//! - [`Declaration`]: a `property: value;` line
//! - [`create_varname`]: builds escaped `--name` varnames
//!
//! Properties carry no registry state; the registry builds them and
//! component stylesheets consume them.

mod declaration;
mod property;

pub use declaration::{render_block, Declaration};
pub use property::{create_varname, CustomProperty, Fallback};
