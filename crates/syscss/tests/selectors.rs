//! Integration tests for the selector compiler.
//!
//! One group per DSL role plus the cross-cutting behaviors:
//! - Multiple arguments expand into a cartesian product
//! - Pseudo-selectors are carried through
//! - Plain CSS selectors are returned unchanged

use syscss::{Settings, SettingsOverrides, compile_selector};

fn compile(selector: &str) -> String {
    compile_selector(selector, &Settings::default())
}

fn compile_with(selector: &str, overrides: &str) -> String {
    let overrides: SettingsOverrides = serde_json::from_str(overrides).unwrap();
    let settings = Settings::with_overrides(overrides).unwrap();
    compile_selector(selector, &settings)
}

// ============================================================================
// MULTIPLE ARGUMENTS
// ============================================================================

#[test]
fn test_multiple_arguments_form_cartesian_product() {
    assert_eq!(
        compile("component(one, two) has(part, element)"),
        ".one--part,\n.one--element,\n.two--part,\n.two--element"
    );
}

#[test]
fn test_multiple_arguments_keep_source_order() {
    assert_eq!(
        compile("component(a, b) has(c)"),
        ".a--c,\n.b--c"
    );
}

#[test]
fn test_multiple_arguments_without_space_after_comma() {
    assert_eq!(compile("when(big,small)"), ".\\+big,\n.\\+small");
}

#[test]
fn test_selector_list_of_calls() {
    assert_eq!(
        compile("component(a), component(b) has(c)"),
        ".a,\n.b--c"
    );
}

// ============================================================================
// PSEUDO-SELECTORS
// ============================================================================

#[test]
fn test_pseudo_class_on_block() {
    assert_eq!(compile("component(button):hover"), ".button:hover");
}

#[test]
fn test_pseudo_element_on_each_expanded_block() {
    assert_eq!(
        compile("component(a, b)::before"),
        ".a::before,\n.b::before"
    );
}

#[test]
fn test_pseudo_class_on_element() {
    assert_eq!(compile("component(a) has(b):focus"), ".a--b:focus");
}

// ============================================================================
// REGULAR CSS SELECTORS
// ============================================================================

#[test]
fn test_plain_selectors_are_untouched() {
    for selector in [
        ".test",
        "a",
        "ul > li + li",
        "a:not(.b, .c)",
        "input[type=\"text\"]",
        ".a,\n.b",
        "  spaced   out  ",
        "has",
        "component(card",
    ] {
        assert_eq!(compile(selector), selector);
    }
}

#[test]
fn test_literals_around_calls_are_preserved() {
    assert_eq!(compile(".foo > component(bar)"), ".foo > .bar");
    assert_eq!(compile("component(bar) span"), ".bar span");
    assert_eq!(compile("widget(x) component(a)"), "widget(x) .a");
}

// ============================================================================
// BLOCK
// ============================================================================

#[test]
fn test_block() {
    assert_eq!(compile("component(card)"), ".card");
}

#[test]
fn test_block_suffix() {
    assert_eq!(
        compile_with("component(card)", r#"{ "suffixes": { "block": "-v2" } }"#),
        ".card-v2"
    );
}

// ============================================================================
// ELEMENT
// ============================================================================

#[test]
fn test_element() {
    assert_eq!(compile("component(card) has(title)"), ".card--title");
}

#[test]
fn test_nested_elements() {
    assert_eq!(
        compile("component(card) has(header) has(title)"),
        ".card--header--title"
    );
}

#[test]
fn test_element_in_modified_parent() {
    assert_eq!(
        compile("component(card) when(active) has(title)"),
        r".card.\+active .card--title"
    );
}

#[test]
fn test_element_in_parent_with_state() {
    assert_eq!(
        compile("component(card) is(hovered) has(title)"),
        ".card:hover .card--title"
    );
}

#[test]
fn test_element_anchor_omits_block_pseudo() {
    assert_eq!(
        compile("component(card):hover when(active) has(title)"),
        r".card:hover .\+active .card--title"
    );
}

// ============================================================================
// MODIFIER
// ============================================================================

#[test]
fn test_modifier() {
    assert_eq!(compile("component(button) when(large)"), r".button.\+large");
}

#[test]
fn test_multiple_modifiers() {
    assert_eq!(
        compile("component(button) when(large, small)"),
        ".button.\\+large,\n.button.\\+small"
    );
}

// ============================================================================
// STATE
// ============================================================================

#[test]
fn test_state_is_normalized() {
    assert_eq!(compile("component(button) is(hovered)"), ".button:hover");
    assert_eq!(compile("component(button) is(focused)"), ".button:focus");
    assert_eq!(compile("component(button) is(active)"), ".button:active");
}

#[test]
fn test_protected_states() {
    for state in ["enabled", "disabled", "checked", "required", "visited"] {
        assert_eq!(
            compile(&format!("component(input) is({state})")),
            format!(".input:{state}")
        );
    }
}

#[test]
fn test_custom_protected_states() {
    assert_eq!(
        compile_with("component(a) is(pressed)", r#"{ "protectedStates": ["pressed"] }"#),
        ".a:pressed"
    );
}

#[test]
fn test_state_pseudo_is_kept() {
    assert_eq!(compile("component(a) is(hovered):focus"), ".a:hover:focus");
}

#[test]
fn test_state_suffix_is_not_normalized() {
    assert_eq!(
        compile_with("component(a) is(hovered)", r#"{ "suffixes": { "state": "ed" } }"#),
        ".a:hovered"
    );
}

// ============================================================================
// CONTEXT
// ============================================================================

#[test]
fn test_context_wraps_block() {
    assert_eq!(
        compile("component(nav) inside(header)"),
        r"#system .\@header .nav"
    );
}

#[test]
fn test_context_uses_configured_root() {
    assert_eq!(
        compile_with("component(nav) inside(header)", r##"{ "root": "#app" }"##),
        r"#app .\@header .nav"
    );
}

#[test]
fn test_context_with_pseudo_is_not_reordered() {
    assert_eq!(
        compile("component(nav) inside(header):hover"),
        r".nav#system .\@header:hover"
    );
}

// ============================================================================
// PARENT
// ============================================================================

#[test]
fn test_parent() {
    assert_eq!(
        compile("container(sidebar) component(card)"),
        r".\@sidebar.card"
    );
}

// ============================================================================
// UTIL
// ============================================================================

#[test]
fn test_util() {
    assert_eq!(compile("util(hidden)"), r"#system .\~hidden");
}

#[test]
fn test_util_scoping_a_block() {
    assert_eq!(
        compile("util(clearfix) component(card)"),
        r"#system .\~clearfix.card"
    );
}

// ============================================================================
// CUSTOM KEYWORDS
// ============================================================================

#[test]
fn test_custom_mixin_names() {
    let overrides = r#"{
        "mixins": {
            "block": "new",
            "element": "part",
            "modifier": "option",
            "state": "state",
            "context": "area",
            "util": "tweak"
        }
    }"#;
    assert_eq!(compile_with("new(card) part(title)", overrides), ".card--title");
    assert_eq!(
        compile_with("new(card) option(big) part(title)", overrides),
        r".card.\+big .card--title"
    );
    assert_eq!(compile_with("component(card)", overrides), "component(card)");
}
