//! End-to-end tests: bake a component, mount it, inspect the element.

use bake::{
    bake, make_bake, mount, props, render_to_string, BakeConfig, Element, ElementKind, InjectMap,
    Node, NodeRef, PropValue, Props, RecipeBuilder, RenderError, RuntimeRecipe, StyleSource,
};

fn basic() -> RuntimeRecipe {
    RecipeBuilder::new("recipes_basic")
        .base("recipes_basic")
        .variant("rounded", ["true", "false"])
        .variant("color", ["blue", "red"])
        .variant("disabled", ["true", "false"])
        .variant("spaceWithDefault", ["small", "large"])
        .default_variant("spaceWithDefault", "small")
        .build()
        .unwrap()
}

fn div_component() -> ElementKind {
    ElementKind::from_fn("DivComponent", |props, node_ref| {
        Node::create("div", props, node_ref)
    })
}

fn render(kind: impl Into<ElementKind>, props: Props) -> Element {
    mount(&Node::new(kind, props)).unwrap()
}

mod basic {
    use super::*;

    #[test]
    fn test_element_kind_only() {
        let component = bake("div", None, None).unwrap();
        let btn_component = bake("button", None, None).unwrap();

        let div = render(
            component,
            props! { "data-testid" => "bake-1-div", "children" => "test content" },
        );
        let btn = render(
            btn_component,
            props! { "data-testid" => "bake-1-btn", "children" => "test button" },
        );

        assert_eq!(div.tag, "div");
        assert_eq!(btn.tag, "button");
        assert_eq!(div.text_content(), "test content");
        assert_eq!(btn.text_content(), "test button");
        assert!(!div.has_attribute("className"));
    }

    #[test]
    fn test_string_style_adds_class() {
        let component = bake("div", Some("test-class".into()), None).unwrap();
        let element = render(component, props! { "data-testid" => "bake-2-div" });
        assert_eq!(element.class_list(), ["test-class"]);
    }

    #[test]
    fn test_caller_class_appends_after_baked_class() {
        let component = bake("div", Some("test-class".into()), None).unwrap();
        let element = render(component, props! { "className" => "extra-class" });
        assert_eq!(
            element.attribute("className"),
            Some(&PropValue::from("test-class extra-class"))
        );
    }

    #[test]
    fn test_class_list_style() {
        let component = bake("div", Some(["a", "b"].into()), None).unwrap();
        let element = render(component, Props::new());
        assert_eq!(
            element.attribute("className"),
            Some(&PropValue::from("a b"))
        );
    }

    #[test]
    fn test_extends_existing_component() {
        let style = StyleSource::from("test-class");
        let component = bake(div_component(), Some(style), None).unwrap();
        let element = render(
            component,
            props! {
                "data-testid" => "bake-3-div",
                "className" => "additional-class",
                "children" => "test content",
            },
        );
        assert_eq!(element.tag, "div");
        assert!(element.has_class("test-class"));
        assert!(element.has_class("additional-class"));
        assert_eq!(element.text_content(), "test content");
    }

    #[test]
    fn test_markup() {
        let component = bake("section", Some("card".into()), None).unwrap();
        let node = Node::new(component, props! { "id" => "main", "children" => "hi" });
        let html = render_to_string(&node).unwrap();
        insta::assert_snapshot!(html, @r#"<section class="card" id="main">hi</section>"#);
    }
}

mod recipes {
    use super::*;

    #[test]
    fn test_variants_become_props() {
        let component = bake("div", Some(basic().into()), None).unwrap();
        let element = render(
            component,
            props! { "data-testid" => "bake-4-div", "rounded" => true },
        );

        assert!(element.has_class("recipes_basic_rounded_true"));
        // Default variant applies too.
        assert!(element.has_class("recipes_basic_spaceWithDefault_small"));
        assert!(!element.has_attribute("rounded"));
    }

    #[test]
    fn test_required_variant_renders() {
        let config = BakeConfig::new().required(["color"]);
        let style = StyleSource::from(basic());
        let component = bake(div_component(), Some(style), Some(config)).unwrap();
        let element = render(component, props! { "color" => "blue" });
        assert!(element.has_class("recipes_basic_color_blue"));
    }

    #[test]
    fn test_missing_required_variant_still_renders() {
        let config = BakeConfig::new().required(["color"]);
        let component = bake("div", Some(basic().into()), Some(config)).unwrap();
        let element = render(component, Props::new());
        let classes = "recipes_basic recipes_basic_spaceWithDefault_small";
        assert!(element.has_class(classes));
    }

    #[test]
    fn test_invalid_variant_value_still_renders() {
        let component = bake("div", Some(basic().into()), None).unwrap();
        let element = render(component, props! { "color" => "chartreuse" });
        assert!(!element.class_list().iter().any(|c| c.contains("color")));
        assert!(!element.has_attribute("color"));
    }

    #[test]
    fn test_selected_variant_changes_class_and_is_consumed() {
        let component = bake("div", Some(basic().into()), None).unwrap();
        let element = render(component, props! { "spaceWithDefault" => "large" });
        assert!(element.has_class("recipes_basic_spaceWithDefault_large"));
        assert!(!element.has_class("recipes_basic_spaceWithDefault_small"));
        assert!(!element.has_attribute("spaceWithDefault"));
    }

    #[test]
    fn test_unknown_props_pass_through() {
        let component = bake("div", Some(basic().into()), None).unwrap();
        let element = render(
            component,
            props! { "data-testid" => "x", "aria-label" => "label" },
        );
        assert_eq!(
            element.attribute("data-testid"),
            Some(&PropValue::from("x"))
        );
        assert_eq!(
            element.attribute("aria-label"),
            Some(&PropValue::from("label"))
        );
    }

    #[test]
    fn test_recipe_from_json() {
        let recipe = RuntimeRecipe::from_json(
            r#"{
                "base": "chip",
                "variants": { "size": { "sm": "chip-sm", "lg": "chip-lg" } },
                "defaultVariants": { "size": "sm" }
            }"#,
        )
        .unwrap();
        let component = bake("span", Some(StyleSource::from(recipe)), None).unwrap();
        let element = render(component, props! { "size" => "lg", "className" => "mine" });
        assert_eq!(
            element.attribute("className"),
            Some(&PropValue::from("chip chip-lg mine"))
        );
    }
}

mod forwarding {
    use super::*;

    #[test]
    fn test_forwarded_variant_reaches_element() {
        let config = BakeConfig::new().forward(["disabled"]);
        let component = bake("button", Some(basic().into()), Some(config)).unwrap();
        let element = render(component, props! { "disabled" => true });

        assert_eq!(element.attribute("disabled"), Some(&PropValue::Bool(true)));
        assert!(element.has_class("recipes_basic_disabled_true"));
    }

    #[test]
    fn test_unforwarded_variant_is_stripped() {
        let component = bake("button", Some(basic().into()), None).unwrap();
        let element = render(component, props! { "disabled" => true });

        assert!(!element.has_attribute("disabled"));
        assert!(element.has_class("recipes_basic_disabled_true"));
    }

    #[test]
    fn test_forwarded_variant_reaches_wrapped_component() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(None));
        let seen_in = seen.clone();
        let inner = ElementKind::from_fn("Inner", move |props: Props, node_ref| {
            *seen_in.borrow_mut() = props.get("disabled").cloned();
            Node::create("button", props, node_ref)
        });

        let config = BakeConfig::new().forward(["disabled"]);
        let component = bake(inner, Some(basic().into()), Some(config)).unwrap();
        render(component, props! { "disabled" => true });

        assert_eq!(*seen.borrow(), Some(PropValue::Bool(true)));
    }

    #[test]
    fn test_forward_does_not_invent_props() {
        let config = BakeConfig::new().forward(["disabled"]);
        let component = bake("button", Some(basic().into()), Some(config)).unwrap();

        let (_, merged) = component.compose(props! { "id" => "x" });
        assert!(merged.get("disabled").is_some_and(PropValue::is_undefined));

        let element = render(component, props! { "id" => "x" });
        assert!(!element.has_attribute("disabled"));
        assert!(!element.has_class("recipes_basic_disabled_true"));
        assert!(!element.has_class("recipes_basic_disabled_false"));
    }

    #[test]
    fn test_inject_strips_forwarded_key() {
        let config = BakeConfig::new()
            .forward(["disabled"])
            .inject("disabled", |value| {
                props! { "aria-disabled" => value.clone() }
            });
        let component = bake("button", Some(basic().into()), Some(config)).unwrap();

        let (_, merged) = component.compose(props! { "disabled" => true });
        assert!(!merged.contains_key("disabled"));
        assert_eq!(merged.get("aria-disabled"), Some(&PropValue::Bool(true)));

        let element = render(component, props! { "disabled" => true });
        assert!(!element.has_attribute("disabled"));
        assert!(element.has_class("recipes_basic_disabled_true"));
    }
}

mod injection {
    use super::*;

    #[test]
    fn test_inject_transforms_prop() {
        let config = BakeConfig::new()
            .inject("css", |value| props! { "style" => value.clone() });
        let component = bake("div", None, Some(config)).unwrap();
        let (_, merged) = component.compose(props! { "css" => props! { "color" => "red" } });

        assert_eq!(
            merged.get("style"),
            Some(&PropValue::Map(props! { "color" => "red" }))
        );
        assert!(!merged.contains_key("css"));
    }

    #[test]
    fn test_inject_output_overrides_caller_props() {
        let config = BakeConfig::new()
            .inject("css", |value| props! { "style" => value.clone() });
        let component = bake("div", None, Some(config)).unwrap();
        let element = render(
            component,
            props! {
                "style" => props! { "margin" => 0 },
                "css" => props! { "color" => "red" },
            },
        );
        // Shallow override: the caller's style map is replaced, not combined.
        assert_eq!(
            element.attribute("style"),
            Some(&PropValue::Map(props! { "color" => "red" }))
        );
    }

    #[test]
    fn test_inject_class_concatenates() {
        let config = BakeConfig::new().inject("tone", |value| {
            props! { "className" => format!("tone-{}", value.as_str().unwrap_or("none")) }
        });
        let component = bake("div", Some("base".into()), Some(config)).unwrap();
        let element = render(
            component,
            props! { "className" => "mine", "tone" => "warm" },
        );
        assert_eq!(
            element.attribute("className"),
            Some(&PropValue::from("base mine tone-warm"))
        );
    }

    #[test]
    fn test_inject_sees_consumed_variant_value() {
        let config = BakeConfig::new()
            .inject("color", |value| props! { "data-color" => value.clone() });
        let component = bake("div", Some(basic().into()), Some(config)).unwrap();
        let element = render(component, props! { "color" => "red" });

        assert!(element.has_class("recipes_basic_color_red"));
        assert!(!element.has_attribute("color"));
        assert_eq!(
            element.attribute("data-color"),
            Some(&PropValue::from("red"))
        );
    }

    #[test]
    fn test_inject_output_wins_over_consumed_variant() {
        let config = BakeConfig::new()
            .inject("tint", |value| props! { "color" => value.clone() });
        let component = bake("div", Some(basic().into()), Some(config)).unwrap();
        let (_, merged) = component.compose(props! { "color" => "blue", "tint" => "teal" });

        assert_eq!(merged.get("color"), Some(&PropValue::from("teal")));
    }

    #[test]
    fn test_consumed_variant_not_resurrected() {
        let component = bake("div", Some(basic().into()), None).unwrap();
        let (_, merged) = component.compose(props! { "color" => "blue" });
        assert!(!merged.contains_key("color"));
    }

    #[test]
    fn test_inject_as_is_discarded() {
        let config = BakeConfig::new()
            .inject("link", |_| props! { "as" => "a", "href" => "#" });
        let component = bake("button", None, Some(config)).unwrap();
        let (kind, merged) = component.compose(props! { "link" => true });

        assert_eq!(kind, ElementKind::from("button"));
        assert!(!merged.contains_key("as"));
        assert_eq!(merged.get("href"), Some(&PropValue::from("#")));
    }

    #[test]
    fn test_injection_order_follows_declaration() {
        let config = BakeConfig::new()
            .inject("first", |_| props! { "slot" => "first" })
            .inject("second", |_| props! { "slot" => "second" });
        let component = bake("div", None, Some(config)).unwrap();
        let (_, merged) = component.compose(props! { "second" => true, "first" => true });
        assert_eq!(merged.get("slot"), Some(&PropValue::from("second")));
    }
}

mod element_override {
    use super::*;

    #[test]
    fn test_as_changes_rendered_tag() {
        let component = bake("div", Some(basic().into()), None).unwrap();
        let element = render(component, props! { "as" => "button", "rounded" => true });

        assert_eq!(element.tag, "button");
        assert!(!element.has_attribute("as"));
        assert!(element.has_class("recipes_basic_rounded_true"));
    }

    #[test]
    fn test_as_another_baked_component() {
        let link = bake("a", Some("link".into()), None).unwrap();
        let card = bake("div", Some("card".into()), None).unwrap();

        let element = render(card, props! { "as" => link, "href" => "/home" });
        assert_eq!(element.tag, "a");
        assert_eq!(
            element.attribute("className"),
            Some(&PropValue::from("link card"))
        );
        assert_eq!(element.attribute("href"), Some(&PropValue::from("/home")));
    }

    #[test]
    fn test_ref_reaches_rendered_element() {
        let component = bake(div_component(), Some("x".into()), None).unwrap();
        let node_ref = NodeRef::new();
        let node = Node::create(
            component,
            props! { "as" => "button" },
            Some(node_ref.clone()),
        );
        mount(&node).unwrap();
        assert_eq!(node_ref.current().as_deref(), Some("button"));
    }

    #[test]
    fn test_malformed_as_tag_does_not_render() {
        let component = bake("div", Some("box".into()), None).unwrap();
        let node = Node::new(component, props! { "as" => "div onclick=x" });

        let err = render_to_string(&node).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidTagName { ref tag } if tag == "div onclick=x"
        ));
    }
}

mod factories {
    use super::*;

    #[test]
    fn test_make_bake_call_site_override() {
        let baker = make_bake(InjectMap::new().with("a", |_| props! { "picked" => "fnA" }));
        let config = BakeConfig::new()
            .inject("a", |_| props! { "picked" => "fnB" });
        let component = baker.bake("div", None, Some(config)).unwrap();

        let element = render(component, props! { "a" => 1 });
        assert_eq!(element.attribute("picked"), Some(&PropValue::from("fnB")));
        assert!(!element.has_attribute("a"));
    }

    #[test]
    fn test_make_bake_with_recipe() {
        let inject = InjectMap::new()
            .with("css", |value| props! { "style" => value.clone() });
        let baker = make_bake(inject);
        let component = baker.bake("div", Some(basic().into()), None).unwrap();
        let element = render(
            component,
            props! { "rounded" => false, "css" => props! { "color" => "red" } },
        );

        assert!(element.has_class("recipes_basic_rounded_false"));
        assert_eq!(
            element.attribute("style"),
            Some(&PropValue::Map(props! { "color" => "red" }))
        );
    }

    #[test]
    fn test_props_from_json_fixture() {
        let props: Props = serde_json::from_str(
            r#"{ "rounded": true, "data-testid": "json", "children": "from json" }"#,
        )
        .unwrap();
        let component = bake("div", Some(basic().into()), None).unwrap();
        let element = render(component, props);

        assert!(element.has_class("recipes_basic_rounded_true"));
        assert_eq!(element.text_content(), "from json");
    }
}
