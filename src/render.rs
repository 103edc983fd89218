//! Template rendering for the merged range list.
//!
//! Templates are minijinja source text. The merged range document is the
//! root context, so templates see `prefixes` (each with `ipv4Prefix` /
//! `ipv6Prefix`) and `creationTime`. `{%- ... %}` whitespace markers trim
//! the iteration scaffold so the rendered file has one line per set prefix
//! field and no stray blank lines.

use minijinja::value::Value;
use minijinja::{Environment, UndefinedBehavior};

use crate::error::{Error, Result};
use crate::ranges::IpRange;

/// Render `template_src` against the merged range. Deterministic: the same
/// inputs always produce byte-identical output.
pub fn render(template_src: &str, range: &IpRange) -> Result<String> {
    let mut env = Environment::new();
    // minijinja strips a template's final newline by default; the generated
    // file must end with exactly the newline the template carries
    env.set_keep_trailing_newline(true);
    // printing an undefined name is an execution error, but `if` guards on
    // absent prefix fields (null) stay legal
    env.set_undefined_behavior(UndefinedBehavior::SemiStrict);

    let tmpl = env
        .template_from_str(template_src)
        .map_err(Error::Template)?;
    tmpl.render(Value::from_serialize(range))
        .map_err(Error::Render)
}
