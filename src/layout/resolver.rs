use crate::{
    content::slide::{
        BigStatementBody, CardsBody, CenterEmojiBody, ContactBody, FallbackBody, ImageCtaBody,
        ListBody, ProcessBody, Slide, SlideBody, TitleBody,
    },
    layout::model::{
        AnchorName, BackgroundPattern, CardView, CardVisual, ItemStyle, LayoutNode, ListItem,
        SlideLayout, TextRole, Theme,
    },
};

/// Matched against the lowercased item text.
pub const PRIMARY_HIGHLIGHT_MARKER: &str = "aujourd'hui";
/// Matched against the item text as written.
pub const SECONDARY_HIGHLIGHT_MARKER: &str = "Audio...";

/// Whether a list item renders with emphasis instead of a bullet.
pub fn is_emphasized_item(text: &str) -> bool {
    text.to_lowercase().contains(PRIMARY_HIGHLIGHT_MARKER)
        || text.contains(SECONDARY_HIGHLIGHT_MARKER)
}

/// Resolves a slide at feed position `index` into its visual tree.
///
/// Pure: the same slide and index always produce the same layout.
#[tracing::instrument(level = "debug", skip(slide), fields(id = %slide.id))]
pub fn resolve_layout(slide: &Slide, index: usize) -> SlideLayout {
    let root = match &slide.body {
        SlideBody::Title(b) => title_layout(slide, b),
        SlideBody::List(b) => list_layout(slide, b),
        SlideBody::Cards(b) => cards_layout(slide, b),
        SlideBody::CenterEmoji(b) => center_emoji_layout(slide, b),
        SlideBody::Process(b) => process_layout(slide, b),
        SlideBody::BigStatement(b) => big_statement_layout(slide, b),
        SlideBody::ImageCta(b) => image_cta_layout(slide, b),
        SlideBody::Contact(b) => contact_layout(slide, b),
        SlideBody::Legacy(b) | SlideBody::Generic(b) => generic_layout(slide, b),
    };

    SlideLayout {
        id: slide.id.clone(),
        index,
        theme: if slide.emphasis {
            Theme::Highlight
        } else {
            Theme::Default
        },
        background: BackgroundPattern::for_index(index),
        process_line: matches!(slide.body, SlideBody::Process(_)),
        root,
    }
}

fn stack(children: Vec<LayoutNode>) -> LayoutNode {
    LayoutNode::Stack {
        anchor: None,
        children,
    }
}

fn text(role: TextRole, s: Option<&str>, anchor: Option<AnchorName>) -> LayoutNode {
    LayoutNode::Text {
        role,
        text: s.unwrap_or_default().to_string(),
        anchor,
    }
}

fn glyph(g: Option<&str>, anchor: Option<AnchorName>, bounce: bool) -> LayoutNode {
    LayoutNode::Glyph {
        glyph: g.unwrap_or_default().to_string(),
        anchor,
        bounce,
    }
}

fn heading(slide: &Slide) -> LayoutNode {
    text(TextRole::Heading, Some(&slide.title), Some(AnchorName::Title))
}

fn title_layout(slide: &Slide, b: &TitleBody) -> LayoutNode {
    let media = match &b.portrait {
        Some(src) => LayoutNode::Image {
            src: src.clone(),
            alt: slide.title.clone(),
            badge: b.emoji.clone(),
            anchor: Some(AnchorName::Media),
        },
        None => glyph(b.emoji.as_deref(), Some(AnchorName::Media), false),
    };

    let mut children = vec![
        media,
        heading(slide),
        text(
            TextRole::Subheading,
            b.subtitle.as_deref(),
            Some(AnchorName::Subtitle),
        ),
    ];
    if let Some(tagline) = &b.tagline {
        children.push(text(TextRole::Badge, Some(tagline), None));
    }
    stack(children)
}

fn list_layout(slide: &Slide, b: &ListBody) -> LayoutNode {
    let mut intro = vec![
        glyph(b.emoji.as_deref(), Some(AnchorName::Media), false),
        heading(slide),
    ];
    if let Some(subtitle) = &b.subtitle {
        intro.push(text(
            TextRole::Subheading,
            Some(subtitle),
            Some(AnchorName::Subtitle),
        ));
    }

    let items = b
        .items
        .iter()
        .map(|item| ListItem {
            text: item.clone(),
            style: if is_emphasized_item(item) {
                ItemStyle::Emphasized
            } else {
                ItemStyle::Bulleted
            },
        })
        .collect();

    stack(vec![
        stack(intro),
        LayoutNode::List {
            anchor: AnchorName::ItemList,
            items,
        },
    ])
}

fn cards_layout(slide: &Slide, b: &CardsBody) -> LayoutNode {
    let mut children = vec![
        heading(slide),
        text(
            TextRole::Subheading,
            b.subtitle.as_deref(),
            Some(AnchorName::Subtitle),
        ),
    ];
    if !b.cards.is_empty() {
        let cards = b
            .cards
            .iter()
            .map(|card| CardView {
                title: card.title.clone(),
                description: card.description.clone(),
                visual: card
                    .image
                    .clone()
                    .map(CardVisual::Image)
                    .or_else(|| card.icon.clone().map(CardVisual::Icon)),
            })
            .collect();
        children.push(LayoutNode::CardGrid {
            anchor: AnchorName::CardGrid,
            cards,
        });
    }
    stack(children)
}

fn center_emoji_layout(slide: &Slide, b: &CenterEmojiBody) -> LayoutNode {
    let mut body = vec![
        glyph(b.emoji.as_deref(), Some(AnchorName::Media), false),
        text(
            TextRole::Statement,
            b.statement.as_deref(),
            Some(AnchorName::Subtitle),
        ),
    ];
    if let Some(subtitle) = &b.subtitle {
        body.push(text(TextRole::Body, Some(subtitle), None));
    }
    stack(vec![
        text(TextRole::Kicker, Some(&slide.title), Some(AnchorName::Title)),
        stack(body),
    ])
}

fn process_layout(slide: &Slide, b: &ProcessBody) -> LayoutNode {
    stack(vec![
        glyph(b.emoji.as_deref(), Some(AnchorName::Media), false),
        heading(slide),
        text(
            TextRole::Subheading,
            b.subtitle.as_deref(),
            Some(AnchorName::Subtitle),
        ),
        text(TextRole::Body, b.detail.as_deref(), None),
    ])
}

fn big_statement_layout(slide: &Slide, b: &BigStatementBody) -> LayoutNode {
    stack(vec![
        heading(slide),
        text(
            TextRole::Statement,
            b.statement.as_deref(),
            Some(AnchorName::Media),
        ),
    ])
}

fn image_cta_layout(slide: &Slide, b: &ImageCtaBody) -> LayoutNode {
    let mut children = vec![
        heading(slide),
        LayoutNode::Image {
            src: b.hero_image.clone().unwrap_or_default(),
            alt: slide.title.clone(),
            badge: None,
            anchor: Some(AnchorName::Media),
        },
        text(TextRole::Body, b.caption.as_deref(), None),
    ];
    if let Some(cta) = &b.call_to_action {
        children.push(LayoutNode::Link {
            label: cta.label.clone().unwrap_or_default(),
            href: cta.href.clone().unwrap_or_default(),
            external: true,
        });
    }
    stack(children)
}

fn contact_layout(slide: &Slide, b: &ContactBody) -> LayoutNode {
    stack(vec![
        heading(slide),
        text(
            TextRole::Statement,
            b.contact.as_deref(),
            Some(AnchorName::Media),
        ),
        glyph(b.emoji.as_deref(), Some(AnchorName::Accent), true),
    ])
}

fn generic_layout(slide: &Slide, b: &FallbackBody) -> LayoutNode {
    stack(vec![
        heading(slide),
        text(TextRole::Body, b.content.as_deref(), Some(AnchorName::Media)),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolver.rs"]
mod tests;
