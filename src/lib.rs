//! Scrollshow models a scroll-driven slide presentation.
//!
//! A deck of slide records is resolved into layout trees with named animation anchors. Each
//! slide gets a reveal timeline gated by its own scroll trigger, and two page-wide animations
//! (a progress bar and a waypoint "guide") follow the overall scroll position with damping.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON records -> [`SlideFeed`] of tagged [`Slide`]s
//! 2. **Resolve**: `Slide + index -> SlideLayout` with anchors ([`resolve_layout`])
//! 3. **Sequence**: `SlideLayout -> Timeline`, played by a [`SlideController`] per slide
//! 4. **Choreograph**: scroll fraction -> progress scale and guide state ([`Choreographer`])
//! 5. **Sample**: a mounted [`PageRuntime`] turns input events into [`FrameSnapshot`]s for a
//!    renderer
//!
//! Everything is single-threaded and deterministic for a given event sequence. Dropping a
//! [`MountedPage`] unsubscribes it from its [`InputHub`] and releases every animation.
#![forbid(unsafe_code)]

mod animation;
mod choreography;
mod content;
mod foundation;
mod layout;
mod page;
mod sequencer;

pub use animation::anim::{Keyframe, Keyframes, Lerp};
pub use animation::ease::Ease;
pub use animation::reveal::{REVEAL_ORDER, reveal_timeline};
pub use animation::smoothing::{SETTLE_EPSILON, Scrub};
pub use animation::state::ElementState;
pub use animation::timeline::{PlacedStep, TargetFrame, Timeline, TimelineStep};
pub use choreography::guide::{GUIDE_SEGMENTS, GuidePath, GuideState, default_waypoints};
pub use choreography::progress::ProgressIndicator;
pub use choreography::{Choreographer, ChoreographyFrame};
pub use content::feed::SlideFeed;
pub use content::record::{ExtraData, ExtraItem, SlideKind, SlideRecord, TextContent};
pub use content::slide::{
    BigStatementBody, CallToAction, Card, CardsBody, CenterEmojiBody, ContactBody, FallbackBody,
    ImageCtaBody, ListBody, ProcessBody, Slide, SlideBody, TitleBody,
};
pub use foundation::core::{Fps, Rgba8, Vec2, Viewport, scroll_fraction};
pub use foundation::error::{ScrollshowError, ScrollshowResult};
pub use layout::model::{
    AnchorInfo, AnchorName, BackgroundPattern, CardView, CardVisual, ItemStyle, LayoutNode,
    ListItem, SlideLayout, TextRole, Theme,
};
pub use layout::resolver::{
    PRIMARY_HIGHLIGHT_MARKER, SECONDARY_HIGHLIGHT_MARKER, is_emphasized_item, resolve_layout,
};
pub use page::config::PresentationConfig;
pub use page::cursor::CursorTracker;
pub use page::geometry::PageGeometry;
pub use page::hub::{InputEvent, InputHub, InputListener, Subscription};
pub use page::nav::{NavLink, navigation_links, resolve_href};
pub use page::runtime::{MountedPage, PageHandle, PageRuntime, mount};
pub use page::simulate::{SimulationTrace, simulate_scroll};
pub use page::snapshot::{FrameSnapshot, SlideFrame};
pub use sequencer::controller::{SlidePhase, SlideController};
pub use sequencer::trigger::{
    ToggleAction, ToggleActions, TriggerConfig, TriggerEvent, TriggerRegion, Zone,
};
