use crate::content::record::{ExtraData, SlideKind, SlideRecord, TextContent};

/// One slide, with variant-specific fields moved into [`SlideBody`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    /// Switches the slide to the highlight theme. Nothing else reads it.
    pub emphasis: bool,
    pub body: SlideBody,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SlideBody {
    Title(TitleBody),
    List(ListBody),
    CenterEmoji(CenterEmojiBody),
    Process(ProcessBody),
    BigStatement(BigStatementBody),
    Contact(ContactBody),
    ImageCta(ImageCtaBody),
    Cards(CardsBody),
    Legacy(FallbackBody),
    Generic(FallbackBody),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TitleBody {
    pub subtitle: Option<String>,
    pub tagline: Option<String>,
    pub emoji: Option<String>,
    pub portrait: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListBody {
    pub subtitle: Option<String>,
    pub emoji: Option<String>,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CenterEmojiBody {
    pub emoji: Option<String>,
    pub statement: Option<String>,
    pub subtitle: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessBody {
    pub emoji: Option<String>,
    pub subtitle: Option<String>,
    pub detail: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BigStatementBody {
    pub statement: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactBody {
    pub contact: Option<String>,
    pub emoji: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageCtaBody {
    pub hero_image: Option<String>,
    pub caption: Option<String>,
    pub call_to_action: Option<CallToAction>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallToAction {
    pub label: Option<String>,
    pub href: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardsBody {
    pub subtitle: Option<String>,
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
}

/// Body for reserved and unrecognized variants: the original tag plus flattened content.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FallbackBody {
    pub tag: String,
    pub content: Option<String>,
}

impl Slide {
    /// Feed tag this slide was authored with.
    pub fn variant_name(&self) -> &str {
        match &self.body {
            SlideBody::Title(_) => "TITLE",
            SlideBody::List(_) => "LIST",
            SlideBody::CenterEmoji(_) => "CENTER_EMOJI",
            SlideBody::Process(_) => "PROCESS",
            SlideBody::BigStatement(_) => "BIG_STATEMENT",
            SlideBody::Contact(_) => "CONTACT",
            SlideBody::ImageCta(_) => "IMAGE_CTA",
            SlideBody::Cards(_) => "CARDS",
            SlideBody::Legacy(b) | SlideBody::Generic(b) => &b.tag,
        }
    }
}

impl From<SlideRecord> for Slide {
    fn from(rec: SlideRecord) -> Self {
        let SlideRecord {
            id,
            kind,
            title,
            subtitle,
            content,
            emoji,
            image,
            highlight,
            extra_data,
        } = rec;

        let single = content.as_ref().map(TextContent::flatten);
        let extra = extra_data.unwrap_or_default();

        let body = match kind {
            SlideKind::Title => SlideBody::Title(TitleBody {
                subtitle,
                tagline: single,
                emoji,
                portrait: image,
            }),
            SlideKind::List => SlideBody::List(ListBody {
                subtitle,
                emoji,
                items: content.map(|c| c.items()).unwrap_or_default(),
            }),
            SlideKind::CenterEmoji => SlideBody::CenterEmoji(CenterEmojiBody {
                emoji,
                statement: single,
                subtitle,
            }),
            SlideKind::Process => SlideBody::Process(ProcessBody {
                emoji,
                subtitle,
                detail: single,
            }),
            SlideKind::BigStatement => {
                SlideBody::BigStatement(BigStatementBody { statement: single })
            }
            SlideKind::Contact => SlideBody::Contact(ContactBody {
                contact: single,
                emoji,
            }),
            SlideKind::ImageCta => SlideBody::ImageCta(ImageCtaBody {
                hero_image: emoji,
                caption: single,
                call_to_action: call_to_action(&extra),
            }),
            SlideKind::Cards => SlideBody::Cards(CardsBody {
                subtitle,
                cards: extra
                    .items
                    .into_iter()
                    .map(|item| Card {
                        title: item.title,
                        description: item.desc,
                        icon: item.icon,
                        image: item.image,
                    })
                    .collect(),
            }),
            legacy @ (SlideKind::Split | SlideKind::Intro) => SlideBody::Legacy(FallbackBody {
                tag: legacy.as_str().to_string(),
                content: single,
            }),
            SlideKind::Unknown(tag) => SlideBody::Generic(FallbackBody {
                tag,
                content: single,
            }),
        };

        Self {
            id,
            title,
            emphasis: highlight,
            body,
        }
    }
}

// The CTA link travels in the first extra item's title.
fn call_to_action(extra: &ExtraData) -> Option<CallToAction> {
    let href = extra.items.first().map(|item| item.title.clone());
    if extra.label.is_none() && href.is_none() {
        return None;
    }
    Some(CallToAction {
        label: extra.label.clone(),
        href,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/content/slide.rs"]
mod tests;
