//! End-to-end tab selection behavior
//!
//! Drives the container/trigger/panel trio the way a host application does:
//! build the tree, click triggers, observe the dirty flag, rebuild, and
//! check which panel is visible.

use kiwi_cn::prelude::*;
use kiwi_core::State;

fn showcase(ctx: &TabsContext) -> TabsBuilder {
    cn::tabs(ctx)
        .child(
            cn::tab_list()
                .child(cn::tab(ctx, "preview").child(text("Preview")))
                .child(cn::tab(ctx, "html").child(text("HTML")))
                .child(cn::tab(ctx, "jsx").child(text("JSX"))),
        )
        .child(cn::tab_panel(ctx, "preview").child(text("Preview content")))
        .child(cn::tab_panel(ctx, "html").child(text("HTML content")))
        .child(cn::tab_panel(ctx, "jsx").child(text("JSX content")))
}

fn visible_panel_ids(tree: &DomTree) -> Vec<String> {
    tree.find_all_by_class("kiwi-tab-panel")
        .into_iter()
        .filter(|&id| tree.is_effectively_visible(id))
        .map(|id| tree.get(id).unwrap().dom_id.clone().unwrap())
        .collect()
}

#[test]
fn initial_render_shows_only_the_default_panel() {
    let ctx = TabsContext::new("preview");
    let tree = DomTree::from_element(&showcase(&ctx));

    assert_eq!(visible_panel_ids(&tree), ["panel-preview"]);

    // hidden panels are in the tree, content intact
    let html_panel = tree.find_by_dom_id("panel-html").unwrap();
    assert!(!tree.is_effectively_visible(html_panel));
    assert_eq!(tree.text_content(html_panel), "HTML content");
}

#[test]
fn clicking_a_trigger_switches_the_visible_panel() {
    let ctx = TabsContext::new("preview");
    let mut seen = vec![ctx.active()];

    let tree = DomTree::from_element(&showcase(&ctx));
    let html_trigger = tree.find_by_dom_id("tab-html").unwrap();
    assert!(tree.click(html_trigger));
    assert!(ctx.state().take_dirty());
    seen.push(ctx.active());

    let tree = DomTree::from_element(&showcase(&ctx));
    assert_eq!(visible_panel_ids(&tree), ["panel-html"]);
    assert_eq!(seen, ["preview", "html"]);

    // the old panel is hidden, not gone
    let preview = tree.find_by_dom_id("panel-preview").unwrap();
    assert!(!tree.is_effectively_visible(preview));
    assert_eq!(tree.text_content(preview), "Preview content");
}

#[test]
fn every_activation_leaves_exactly_one_panel_visible() {
    let ctx = TabsContext::new("preview");

    for id in ["html", "jsx", "html", "preview", "jsx"] {
        ctx.activate(id);
        assert!(ctx.state().take_dirty());
        let tree = DomTree::from_element(&showcase(&ctx));
        assert_eq!(visible_panel_ids(&tree), [format!("panel-{id}")]);
    }
}

#[test]
fn reactivating_the_current_tab_schedules_no_rebuild() {
    let ctx = TabsContext::new("preview");
    let tree = DomTree::from_element(&showcase(&ctx));

    let trigger = tree.find_by_dom_id("tab-preview").unwrap();
    assert!(tree.click(trigger));

    assert_eq!(ctx.state().version(), 0);
    assert!(!ctx.state().is_dirty());
    assert_eq!(visible_panel_ids(&tree), ["panel-preview"]);
}

#[test]
fn unknown_identifier_is_accepted_and_hides_every_panel() {
    let ctx = TabsContext::new("preview");
    ctx.activate("nope");

    let tree = DomTree::from_element(&showcase(&ctx));
    assert!(visible_panel_ids(&tree).is_empty());
    // panels are still mounted
    assert_eq!(tree.find_all_by_class("kiwi-tab-panel").len(), 3);
}

#[test]
fn panel_content_state_survives_switching_away_and_back() {
    let ctx = TabsContext::new("preview");
    let counter: State<i32> = State::new(1);

    let render = |ctx: &TabsContext, counter: &State<i32>| {
        cn::tabs(ctx)
            .child(cn::tab_panel(ctx, "preview").child(text(counter.get().to_string())))
            .child(cn::tab_panel(ctx, "html").child(text("static")))
    };

    let tree = DomTree::from_element(&render(&ctx, &counter));
    let preview = tree.find_by_dom_id("panel-preview").unwrap();
    assert_eq!(tree.text_content(preview), "1");

    // switch away; the panel stays mounted and its state handle keeps living
    ctx.activate("html");
    counter.update(|n| n + 1);
    let tree = DomTree::from_element(&render(&ctx, &counter));
    let preview = tree.find_by_dom_id("panel-preview").unwrap();
    assert!(!tree.is_effectively_visible(preview));
    assert_eq!(tree.text_content(preview), "2");

    // switch back; nothing was reset
    ctx.activate("preview");
    let tree = DomTree::from_element(&render(&ctx, &counter));
    let preview = tree.find_by_dom_id("panel-preview").unwrap();
    assert!(tree.is_effectively_visible(preview));
    assert_eq!(tree.text_content(preview), "2");
}

#[test]
fn trigger_and_panel_are_linked_for_assistive_technology() {
    let ctx = TabsContext::new("preview");
    let tree = DomTree::from_element(&showcase(&ctx));

    let trigger = tree.get(tree.find_by_dom_id("tab-preview").unwrap()).unwrap();
    assert_eq!(trigger.attrs.get("role").unwrap(), "tab");
    assert_eq!(trigger.attrs.get("aria-selected").unwrap(), "true");
    assert_eq!(trigger.attrs.get("aria-controls").unwrap(), "panel-preview");

    let panel = tree.get(tree.find_by_dom_id("panel-preview").unwrap()).unwrap();
    assert_eq!(panel.attrs.get("role").unwrap(), "tabpanel");
    assert_eq!(panel.attrs.get("aria-labelledby").unwrap(), "tab-preview");
}

#[test]
fn custom_theme_reaches_the_container_as_css_vars() {
    let theme: Theme = serde_json::from_str(
        r##"{"primary": "#8BC34A", "secondary": "#222222", "text": "#222222", "background": "#FFFFFF"}"##,
    )
    .unwrap();
    let ctx = TabsContext::with_theme("preview", theme);

    let tree = DomTree::from_element(&showcase(&ctx));
    let container = tree.get(tree.root().unwrap()).unwrap();
    assert_eq!(container.style_props.get("--secondary").unwrap(), "#222222");

    let html = to_html(&tree);
    assert!(html.contains("--secondary: #222222"));
    assert!(html.contains("role=\"tablist\""));
}
