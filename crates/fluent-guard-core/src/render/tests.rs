//! Tests for message rendering.

use proptest::prelude::*;

use super::*;

#[test]
fn test_argument_annotation() {
    let message = render("This is a test", &RenderContext::argument("arg"));
    assert_eq!(message, "This is a test\nParameter name: arg");
}

#[test]
fn test_object_annotation() {
    let message = render(
        "Cannot access a disposed object.",
        &RenderContext::object("ObjectName"),
    );
    assert_eq!(
        message,
        "Cannot access a disposed object.\nObject name: 'ObjectName'."
    );
}

#[test]
fn test_no_context_is_identity() {
    assert_eq!(render("plain", &RenderContext::none()), "plain");
    assert_eq!(render("plain", &RenderContext::default()), "plain");
}

#[test]
fn test_argument_wins_over_object() {
    let context = RenderContext {
        argument_name: Some("arg"),
        object_name: Some("obj"),
    };
    assert_eq!(render("base", &context), "base\nParameter name: arg");
}

#[test]
fn test_empty_names_are_absent() {
    assert_eq!(render("base", &RenderContext::argument("")), "base");
    assert_eq!(render("base", &RenderContext::object("")), "base");
}

#[test]
fn test_object_falls_back_to_type() {
    let context = RenderContext::object_or_type(None, "app::Connection");
    assert_eq!(context.object_name, Some("app::Connection"));

    let context = RenderContext::object_or_type(Some(""), "app::Connection");
    assert_eq!(context.object_name, Some("app::Connection"));

    let context = RenderContext::object_or_type(Some("primary"), "app::Connection");
    assert_eq!(context.object_name, Some("primary"));
}

#[test]
fn test_fill_placeholders() {
    assert_eq!(
        fill(
            "'{name}' must be set to a value defined by the enum '{type}'.",
            Some("arg"),
            Some("Fruit"),
        ),
        "'arg' must be set to a value defined by the enum 'Fruit'."
    );
    assert_eq!(fill("'{name}' '{type}'", None, None), "'{name}' '{type}'");
    assert_eq!(fill("{ {name} }", Some("arg"), None), "{ arg }");
}

#[test]
fn test_fill_keeps_substituted_text_verbatim() {
    assert_eq!(
        fill(
            "'{name}' cannot be the default value defined by '{type}'.",
            Some("{type}"),
            Some("i32"),
        ),
        "'{type}' cannot be the default value defined by 'i32'."
    );
    assert_eq!(
        fill("'{type}' '{name}'", Some("x"), Some("{name}")),
        "'{name}' 'x'"
    );
}

proptest! {
    #[test]
    fn render_is_deterministic(base in ".+", name in "[a-z_]{0,12}", object in proptest::option::of("[A-Za-z:]{1,20}")) {
        let context = RenderContext { argument_name: Some(name.as_str()), object_name: object.as_deref() };
        prop_assert_eq!(render(&base, &context), render(&base, &context));
    }

    #[test]
    fn render_keeps_base_as_prefix(base in ".+", name in "[a-z_]{1,12}") {
        let rendered = render(&base, &RenderContext::argument(&name));
        prop_assert!(rendered.starts_with(&base));
        prop_assert!(rendered.ends_with(&name));
    }
}
