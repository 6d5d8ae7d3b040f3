use std::collections::BTreeSet;

use crate::{
    content::{
        record::SlideRecord,
        slide::{Slide, SlideBody},
    },
    foundation::error::{ScrollshowError, ScrollshowResult},
};

const BUILTIN_DECK: &str = include_str!("../../data/deck.json");

/// Ordered, read-only slide list. Order is render order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SlideFeed {
    slides: Vec<Slide>,
}

impl SlideFeed {
    #[tracing::instrument(skip(records), fields(count = records.len()))]
    pub fn from_records(records: Vec<SlideRecord>) -> ScrollshowResult<Self> {
        let mut seen = BTreeSet::new();
        for rec in &records {
            if rec.id.trim().is_empty() {
                return Err(ScrollshowError::validation(format!(
                    "slide '{}' has an empty id",
                    rec.title
                )));
            }
            if !seen.insert(rec.id.as_str()) {
                return Err(ScrollshowError::validation(format!(
                    "duplicate slide id '{}'",
                    rec.id
                )));
            }
        }

        let slides: Vec<Slide> = records.into_iter().map(Slide::from).collect();
        for slide in &slides {
            if let SlideBody::Generic(body) = &slide.body {
                tracing::warn!(
                    id = %slide.id,
                    tag = %body.tag,
                    "unrecognized slide variant, using generic layout"
                );
            }
        }
        Ok(Self { slides })
    }

    pub fn from_json_str(s: &str) -> ScrollshowResult<Self> {
        let records: Vec<SlideRecord> = serde_json::from_str(s)?;
        Self::from_records(records)
    }

    pub fn from_reader(r: impl std::io::Read) -> ScrollshowResult<Self> {
        let records: Vec<SlideRecord> = serde_json::from_reader(r)?;
        Self::from_records(records)
    }

    /// The presentation deck bundled with the crate.
    pub fn builtin() -> ScrollshowResult<Self> {
        Self::from_json_str(BUILTIN_DECK)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/feed.rs"]
mod tests;
