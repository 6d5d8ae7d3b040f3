use super::*;
use crate::content::record::ExtraItem;

fn record(kind: &str) -> SlideRecord {
    SlideRecord {
        id: "s".to_string(),
        kind: SlideKind::from(kind.to_string()),
        title: "Title".to_string(),
        subtitle: None,
        content: None,
        emoji: None,
        image: None,
        highlight: false,
        extra_data: None,
    }
}

#[test]
fn list_content_string_becomes_single_item() {
    let mut rec = record("LIST");
    rec.content = Some(TextContent::One("only".to_string()));
    let slide = Slide::from(rec);
    let SlideBody::List(list) = slide.body else {
        panic!("expected list body");
    };
    assert_eq!(list.items, vec!["only".to_string()]);
}

#[test]
fn statement_content_list_is_flattened() {
    let mut rec = record("BIG_STATEMENT");
    rec.content = Some(TextContent::Many(vec!["a".into(), "b".into()]));
    let slide = Slide::from(rec);
    assert_eq!(
        slide.body,
        SlideBody::BigStatement(BigStatementBody {
            statement: Some("a, b".to_string())
        })
    );
}

#[test]
fn image_cta_takes_link_from_first_extra_item() {
    let mut rec = record("IMAGE_CTA");
    rec.emoji = Some("https://img.example/hero.jpg".to_string());
    rec.extra_data = Some(ExtraData {
        label: Some("Join".to_string()),
        items: vec![ExtraItem {
            title: "https://club.example".to_string(),
            desc: None,
            icon: None,
            image: None,
        }],
    });
    let slide = Slide::from(rec);
    let SlideBody::ImageCta(cta) = slide.body else {
        panic!("expected image cta body");
    };
    assert_eq!(cta.hero_image.as_deref(), Some("https://img.example/hero.jpg"));
    let action = cta.call_to_action.unwrap();
    assert_eq!(action.label.as_deref(), Some("Join"));
    assert_eq!(action.href.as_deref(), Some("https://club.example"));
}

#[test]
fn cards_map_extra_items() {
    let mut rec = record("CARDS");
    rec.extra_data = Some(ExtraData {
        label: None,
        items: vec![ExtraItem {
            title: "$1.8M".to_string(),
            desc: Some("x4.5".to_string()),
            icon: Some("📈".to_string()),
            image: None,
        }],
    });
    let SlideBody::Cards(cards) = Slide::from(rec).body else {
        panic!("expected cards body");
    };
    assert_eq!(cards.cards.len(), 1);
    assert_eq!(cards.cards[0].description.as_deref(), Some("x4.5"));
}

#[test]
fn legacy_and_unknown_tags_fall_back() {
    let legacy = Slide::from(record("SPLIT"));
    assert!(matches!(legacy.body, SlideBody::Legacy(_)));
    assert_eq!(legacy.variant_name(), "SPLIT");

    let unknown = Slide::from(record("TIMELINE"));
    assert!(matches!(unknown.body, SlideBody::Generic(_)));
    assert_eq!(unknown.variant_name(), "TIMELINE");
}

#[test]
fn highlight_passes_through_as_emphasis() {
    let mut rec = record("CONTACT");
    rec.highlight = true;
    assert!(Slide::from(rec).emphasis);
}
