use super::*;
use crate::content::{
    record::{SlideKind, SlideRecord, TextContent},
    slide::Slide,
};
use crate::layout::model::AnchorInfo;

fn slide(kind: &str, content: Option<TextContent>) -> Slide {
    Slide::from(SlideRecord {
        id: "s".to_string(),
        kind: SlideKind::from(kind.to_string()),
        title: "Title".to_string(),
        subtitle: None,
        content,
        emoji: Some("👋".to_string()),
        image: None,
        highlight: false,
        extra_data: None,
    })
}

fn names(anchors: &[AnchorInfo]) -> Vec<AnchorName> {
    anchors.iter().map(|a| a.name).collect()
}

fn list_items(layout: &SlideLayout) -> Vec<ListItem> {
    let LayoutNode::Stack { children, .. } = &layout.root else {
        panic!("list root must be a stack");
    };
    match &children[1] {
        LayoutNode::List { items, .. } => items.clone(),
        other => panic!("unexpected node {other:?}"),
    }
}

#[test]
fn background_pattern_alternates_on_odd_indices() {
    assert_eq!(BackgroundPattern::for_index(0), None);
    assert_eq!(BackgroundPattern::for_index(1), Some(BackgroundPattern::Stripes));
    assert_eq!(BackgroundPattern::for_index(2), None);
    assert_eq!(BackgroundPattern::for_index(3), Some(BackgroundPattern::Dots));
    assert_eq!(BackgroundPattern::for_index(5), Some(BackgroundPattern::Stripes));
    assert_eq!(BackgroundPattern::for_index(7), Some(BackgroundPattern::Dots));
    for even in (0..40).step_by(2) {
        assert_eq!(BackgroundPattern::for_index(even), None);
    }
    assert_eq!(BackgroundPattern::Stripes.tile_px(), 40);
    assert_eq!(BackgroundPattern::Dots.tile_px(), 20);
}

#[test]
fn layout_carries_background_for_its_index() {
    let s = slide("BIG_STATEMENT", None);
    assert_eq!(resolve_layout(&s, 0).background, None);
    assert_eq!(
        resolve_layout(&s, 3).background,
        Some(BackgroundPattern::Dots)
    );
}

#[test]
fn list_markers_select_emphasis() {
    let s = slide(
        "LIST",
        Some(TextContent::Many(vec![
            "Audio First ← AUJOURD'HUI".to_string(),
            "Other".to_string(),
        ])),
    );
    let items = list_items(&resolve_layout(&s, 0));
    assert_eq!(items[0].style, ItemStyle::Emphasized);
    assert_eq!(items[1].style, ItemStyle::Bulleted);
}

#[test]
fn secondary_marker_is_case_sensitive() {
    assert!(is_emphasized_item("❓ Audio... presque personne"));
    assert!(!is_emphasized_item("audio... lowercase"));
    assert!(is_emphasized_item("le sujet d'Aujourd'hui"));
    assert!(!is_emphasized_item("Audio First"));
}

#[test]
fn empty_list_keeps_an_empty_region() {
    let s = slide("LIST", Some(TextContent::Many(Vec::new())));
    let layout = resolve_layout(&s, 0);
    assert!(list_items(&layout).is_empty());
    assert_eq!(
        layout.anchor(AnchorName::ItemList),
        Some(AnchorInfo {
            name: AnchorName::ItemList,
            targets: 0
        })
    );
}

#[test]
fn list_subtitle_anchor_is_conditional() {
    let without = resolve_layout(&slide("LIST", None), 0);
    assert_eq!(
        names(&without.anchors()),
        vec![AnchorName::Media, AnchorName::Title, AnchorName::ItemList]
    );
}

#[test]
fn contact_has_title_box_and_accent() {
    let layout = resolve_layout(&slide("CONTACT", Some(TextContent::One("mail".into()))), 0);
    assert_eq!(
        names(&layout.anchors()),
        vec![AnchorName::Title, AnchorName::Media, AnchorName::Accent]
    );
}

#[test]
fn unknown_variant_falls_back_to_title_and_flattened_content() {
    let s = slide(
        "MYSTERY",
        Some(TextContent::Many(vec!["a".into(), "b".into()])),
    );
    let layout = resolve_layout(&s, 0);
    assert_eq!(
        layout.root,
        LayoutNode::Stack {
            anchor: None,
            children: vec![
                LayoutNode::Text {
                    role: TextRole::Heading,
                    text: "Title".to_string(),
                    anchor: Some(AnchorName::Title),
                },
                LayoutNode::Text {
                    role: TextRole::Body,
                    text: "a, b".to_string(),
                    anchor: Some(AnchorName::Media),
                },
            ],
        }
    );
}

#[test]
fn process_slides_draw_the_connector() {
    assert!(resolve_layout(&slide("PROCESS", None), 4).process_line);
    assert!(!resolve_layout(&slide("LIST", None), 4).process_line);
}

#[test]
fn resolution_is_deterministic() {
    let s = slide("TITLE", Some(TextContent::One("Leny".into())));
    assert_eq!(resolve_layout(&s, 2), resolve_layout(&s, 2));
}

#[test]
fn cards_without_items_have_no_grid_anchor() {
    let layout = resolve_layout(&slide("CARDS", None), 0);
    assert_eq!(layout.anchor(AnchorName::CardGrid), None);
}
