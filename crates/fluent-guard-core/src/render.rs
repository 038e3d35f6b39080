//! Message rendering.
//!
//! A rendered message is the base message followed, on a second line, by the
//! argument or object it concerns:
//!
//! ```
//! use fluent_guard_core::render::{render, RenderContext};
//!
//! let message = render("Value cannot be null.", &RenderContext::argument("arg"));
//! assert_eq!(message, "Value cannot be null.\nParameter name: arg");
//!
//! let message = render("Cannot access a disposed object.", &RenderContext::object("Db"));
//! assert_eq!(message, "Cannot access a disposed object.\nObject name: 'Db'.");
//! ```

/// Label preceding the argument name on the second line.
pub const PARAMETER_NAME_LABEL: &str = "Parameter name";

/// Label preceding the object name on the second line.
pub const OBJECT_NAME_LABEL: &str = "Object name";

/// Metadata attached to a single render call.
///
/// Borrowed for the duration of [`render`]; nothing here outlives the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext<'a> {
    /// Name of the offending argument.
    pub argument_name: Option<&'a str>,

    /// Name of the object the failure concerns (disposed checks).
    pub object_name: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    /// A context with no metadata; [`render`] returns the base unchanged.
    pub const fn none() -> Self {
        Self {
            argument_name: None,
            object_name: None,
        }
    }

    /// A context naming the offending argument.
    pub const fn argument(name: &'a str) -> Self {
        Self {
            argument_name: Some(name),
            object_name: None,
        }
    }

    /// A context naming the object the failure concerns.
    pub const fn object(name: &'a str) -> Self {
        Self {
            argument_name: None,
            object_name: Some(name),
        }
    }

    /// A context naming an explicit object, falling back to `type_name`.
    pub fn object_or_type(object_name: Option<&'a str>, type_name: &'a str) -> Self {
        Self::object(object_name.filter(|n| !n.is_empty()).unwrap_or(type_name))
    }
}

/// Renders `base` with the metadata in `context`.
///
/// The argument name takes precedence over the object name. Empty names are
/// treated as absent. Rendering is pure: equal inputs give equal output.
pub fn render(base: &str, context: &RenderContext<'_>) -> String {
    match (
        context.argument_name.filter(|n| !n.is_empty()),
        context.object_name.filter(|n| !n.is_empty()),
    ) {
        (Some(argument), _) => format!("{base}\n{PARAMETER_NAME_LABEL}: {argument}"),
        (None, Some(object)) => format!("{base}\n{OBJECT_NAME_LABEL}: '{object}'."),
        (None, None) => base.to_owned(),
    }
}

/// Substitutes the `{name}` and `{type}` placeholders of a template.
///
/// Substitution is a single pass over the template, so placeholder text
/// inside a substituted value is kept verbatim. Placeholders with no value
/// are left as they are.
pub fn fill(template: &str, name: Option<&str>, type_name: Option<&str>) -> String {
    let placeholders = [("{name}", name), ("{type}", type_name)];
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = placeholders.iter().find_map(|&(key, value)| match value {
            Some(value) if tail.starts_with(key) => Some((key, value)),
            _ => None,
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests;
