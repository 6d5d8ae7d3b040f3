use crate::{content::feed::SlideFeed, page::geometry::PageGeometry};

/// In-page link to one slide.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub target_id: String,
}

/// One link per slide, in feed order.
pub fn navigation_links(feed: &SlideFeed) -> Vec<NavLink> {
    feed.slides()
        .iter()
        .map(|s| NavLink {
            href: format!("#{}", s.id),
            label: format!("Go to slide {}", s.title),
            target_id: s.id.clone(),
        })
        .collect()
}

/// Scroll offset a link jumps to, or `None` for an href that names no slide.
pub fn resolve_href(feed: &SlideFeed, geometry: &PageGeometry, href: &str) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    geometry.scroll_to(feed.position(id)?)
}

#[cfg(test)]
#[path = "../../tests/unit/page/nav.rs"]
mod tests;
