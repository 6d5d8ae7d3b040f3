//! Wire shape of the slide feed: the loose field union the content authors write.
//!
//! Records are converted into [`Slide`](crate::Slide) before anything else looks at them.

/// Layout variant tag as written in the feed (`"type"`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlideKind {
    Title,
    List,
    CenterEmoji,
    Process,
    BigStatement,
    Contact,
    ImageCta,
    Cards,
    /// Reserved, no current record uses it.
    Split,
    /// Reserved, no current record uses it.
    Intro,
    /// Any tag this crate does not know. Rendered with the generic layout.
    Unknown(String),
}

impl SlideKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Title => "TITLE",
            Self::List => "LIST",
            Self::CenterEmoji => "CENTER_EMOJI",
            Self::Process => "PROCESS",
            Self::BigStatement => "BIG_STATEMENT",
            Self::Contact => "CONTACT",
            Self::ImageCta => "IMAGE_CTA",
            Self::Cards => "CARDS",
            Self::Split => "SPLIT",
            Self::Intro => "INTRO",
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<String> for SlideKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "TITLE" => Self::Title,
            "LIST" => Self::List,
            "CENTER_EMOJI" => Self::CenterEmoji,
            "PROCESS" => Self::Process,
            "BIG_STATEMENT" => Self::BigStatement,
            "CONTACT" => Self::Contact,
            "IMAGE_CTA" => Self::ImageCta,
            "CARDS" => Self::Cards,
            "SPLIT" => Self::Split,
            "INTRO" => Self::Intro,
            _ => Self::Unknown(tag),
        }
    }
}

impl From<SlideKind> for String {
    fn from(kind: SlideKind) -> Self {
        match kind {
            SlideKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// `content` is either one display string or an ordered list of them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TextContent {
    One(String),
    Many(Vec<String>),
}

impl TextContent {
    /// Single-string view; lists are joined with `", "`.
    pub fn flatten(&self) -> String {
        match self {
            Self::One(s) => s.clone(),
            Self::Many(items) => items.join(", "),
        }
    }

    /// List view; a single string becomes a one-item list.
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s.clone()],
            Self::Many(items) => items.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SlideKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<ExtraData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtraData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ExtraItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtraItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
