//! Visual tree handed to the rendering collaborator.
//!
//! The tree is static structure only: which regions exist, what they say, and which of them are
//! animation anchors. Styling beyond the theme and background choice belongs to the renderer.

/// Named region of a slide that reveal animations can target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AnchorName {
    Media,
    Title,
    Subtitle,
    ItemList,
    CardGrid,
    /// Trailing decorative glyph (contact slide).
    Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Default,
    Highlight,
}

/// Decorative background texture for odd-indexed slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundPattern {
    Stripes,
    Dots,
}

const STRIPES_SVG: &str = "data:image/svg+xml,%3Csvg width='40' height='40' viewBox='0 0 40 40' xmlns='http://www.w3.org/2000/svg'%3E%3Cpath d='M20 20.5V18H0v-2h20v-2H0v-2h20v-2H0V8h20V6H0V4h20V2H0V0h22v20h2V0h2v20h2V0h2v20h2V0h2v20h2V0h2v20h2V0h2v20h2v2H20v-1.5zM0 20h2v20H0V20zm4 0h2v20H4V20zm4 0h2v20H8V20zm4 0h2v20h-2V20zm4 0h2v20h-2V20zm4 0h2v20h-2V20zm4 0h2v20h-2V20zm4 0h2v20h-2V20zm4 0h2v20h-2V20zm4 0h2v20h-2V20zm4 0h2v20h-2V20z' fill='%23320133' fill-opacity='0.03' fill-rule='evenodd'/%3E%3C/svg%3E";
const DOTS_SVG: &str = "data:image/svg+xml,%3Csvg width='20' height='20' viewBox='0 0 20 20' xmlns='http://www.w3.org/2000/svg'%3E%3Ccircle cx='2' cy='2' r='2' fill='%23320133' fill-opacity='0.05'/%3E%3C/svg%3E";

impl BackgroundPattern {
    /// Even indices get no texture; odd ones alternate Stripes, Dots, Stripes, ...
    /// keyed on `floor((index - 1) / 2) mod 2`.
    pub fn for_index(index: usize) -> Option<Self> {
        if index % 2 == 0 {
            return None;
        }
        match ((index - 1) / 2) % 2 {
            0 => Some(Self::Stripes),
            _ => Some(Self::Dots),
        }
    }

    pub fn tile_px(self) -> u32 {
        match self {
            Self::Stripes => 40,
            Self::Dots => 20,
        }
    }

    pub fn svg_data_uri(self) -> &'static str {
        match self {
            Self::Stripes => STRIPES_SVG,
            Self::Dots => DOTS_SVG,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    Heading,
    Kicker,
    Subheading,
    Statement,
    Body,
    Badge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStyle {
    Bulleted,
    Emphasized,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListItem {
    pub text: String,
    pub style: ItemStyle,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CardView {
    pub title: String,
    pub description: Option<String>,
    /// Either an image or an icon glyph; the image wins when both are set.
    pub visual: Option<CardVisual>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVisual {
    Image(String),
    Icon(String),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum LayoutNode {
    Stack {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        anchor: Option<AnchorName>,
        children: Vec<LayoutNode>,
    },
    Text {
        role: TextRole,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        anchor: Option<AnchorName>,
    },
    Glyph {
        glyph: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        anchor: Option<AnchorName>,
        /// Continuous idle bounce, independent of the reveal timeline.
        bounce: bool,
    },
    Image {
        src: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        badge: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        anchor: Option<AnchorName>,
    },
    List {
        anchor: AnchorName,
        items: Vec<ListItem>,
    },
    CardGrid {
        anchor: AnchorName,
        cards: Vec<CardView>,
    },
    Link {
        label: String,
        href: String,
        /// Opens outside the presentation.
        external: bool,
    },
}

impl LayoutNode {
    pub fn anchor(&self) -> Option<AnchorName> {
        match self {
            Self::Stack { anchor, .. }
            | Self::Text { anchor, .. }
            | Self::Glyph { anchor, .. }
            | Self::Image { anchor, .. } => *anchor,
            Self::List { anchor, .. } | Self::CardGrid { anchor, .. } => Some(*anchor),
            Self::Link { .. } => None,
        }
    }

    /// Number of individually animated targets under this anchor.
    fn target_count(&self) -> usize {
        match self {
            Self::List { items, .. } => items.len(),
            Self::CardGrid { cards, .. } => cards.len(),
            _ => 1,
        }
    }

    fn collect_anchors(&self, out: &mut Vec<AnchorInfo>) {
        if let Some(name) = self.anchor() {
            out.push(AnchorInfo {
                name,
                targets: self.target_count(),
            });
        }
        if let Self::Stack { children, .. } = self {
            for child in children {
                child.collect_anchors(out);
            }
        }
    }
}

/// An anchor present in a resolved layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnchorInfo {
    pub name: AnchorName,
    pub targets: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlideLayout {
    pub id: String,
    pub index: usize,
    pub theme: Theme,
    pub background: Option<BackgroundPattern>,
    /// Vertical connector drawn behind process steps.
    pub process_line: bool,
    pub root: LayoutNode,
}

impl SlideLayout {
    /// Anchors in document order.
    pub fn anchors(&self) -> Vec<AnchorInfo> {
        let mut out = Vec::new();
        self.root.collect_anchors(&mut out);
        out
    }

    pub fn anchor(&self, name: AnchorName) -> Option<AnchorInfo> {
        self.anchors().into_iter().find(|a| a.name == name)
    }
}
