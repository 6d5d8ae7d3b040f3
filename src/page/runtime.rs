use std::{cell::RefCell, rc::Rc};

use crate::{
    choreography::Choreographer,
    content::{feed::SlideFeed, slide::Slide},
    foundation::error::{ScrollshowError, ScrollshowResult},
    layout::{model::SlideLayout, resolver::resolve_layout},
    page::{
        config::PresentationConfig,
        cursor::CursorTracker,
        geometry::PageGeometry,
        hub::{InputEvent, InputHub, InputListener, Subscription},
        snapshot::{FrameSnapshot, SlideFrame},
    },
    sequencer::controller::SlideController,
};

/// Animation context for one mounted page. Owns every per-slide controller, the choreographer
/// and the cursor; nothing animates outside of it.
#[derive(Debug)]
pub struct PageRuntime {
    config: PresentationConfig,
    geometry: PageGeometry,
    layouts: Vec<SlideLayout>,
    controllers: Vec<SlideController>,
    choreographer: Option<Choreographer>,
    cursor: CursorTracker,
    scroll_y: f64,
    frame: u64,
    time_secs: f64,
    frozen: Option<FrameSnapshot>,
}

impl PageRuntime {
    pub fn new(feed: &SlideFeed, config: PresentationConfig) -> ScrollshowResult<Self> {
        config.validate()?;
        let geometry = PageGeometry::uniform(feed.len(), &config);
        let layouts: Vec<SlideLayout> = feed
            .slides()
            .iter()
            .enumerate()
            .map(|(i, s)| resolve_layout(s, i))
            .collect();

        let mut controllers = Vec::with_capacity(layouts.len());
        for (i, layout) in layouts.iter().enumerate() {
            let region = geometry.trigger_region(i, &config).ok_or_else(|| {
                ScrollshowError::validation(format!("no geometry for slide {i}"))
            })?;
            controllers.push(SlideController::new(layout, region, config.trigger.actions));
        }

        let choreographer = Choreographer::new(
            config.progress_lag_secs,
            config.guide_lag_secs,
            config.guide_ease,
        )?;

        let mut runtime = Self {
            config,
            geometry,
            layouts,
            controllers,
            choreographer: Some(choreographer),
            cursor: CursorTracker::new(),
            scroll_y: 0.0,
            frame: 0,
            time_secs: 0.0,
            frozen: None,
        };
        // Slides already inside their region at the top of the page reveal immediately.
        runtime.scroll_to(0.0);
        Ok(runtime)
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    pub fn controllers(&self) -> &[SlideController] {
        &self.controllers
    }

    pub fn controller(&self, id: &str) -> Option<&SlideController> {
        self.controllers.iter().find(|c| c.id() == id)
    }

    pub fn choreographer(&self) -> Option<&Choreographer> {
        self.choreographer.as_ref()
    }

    pub fn cursor(&self) -> &CursorTracker {
        &self.cursor
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_torn_down(&self) -> bool {
        self.frozen.is_some()
    }

    fn scroll_to(&mut self, y: f64) {
        if !y.is_finite() {
            return;
        }
        self.scroll_y = self.geometry.clamp_scroll(y);
        for c in &mut self.controllers {
            c.on_scroll(self.scroll_y);
        }
        let fraction = self.geometry.fraction(self.scroll_y);
        if let Some(ch) = &mut self.choreographer {
            ch.on_scroll(fraction);
        }
    }

    fn tick(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.frame += 1;
        self.time_secs += dt;
        for c in &mut self.controllers {
            c.tick(dt);
        }
        if let Some(ch) = &mut self.choreographer {
            ch.advance(dt);
        }
        tracing::trace!(frame = self.frame, scroll_y = self.scroll_y, "frame");
    }

    /// Replaces one slide's content and rebuilds its timeline from scratch.
    pub fn update_slide(&mut self, slide: Slide) -> ScrollshowResult<()> {
        if self.is_torn_down() {
            return Err(ScrollshowError::validation("page is unmounted"));
        }
        let index = self
            .layouts
            .iter()
            .position(|l| l.id == slide.id)
            .ok_or_else(|| {
                ScrollshowError::validation(format!("unknown slide id '{}'", slide.id))
            })?;
        let region = self
            .geometry
            .trigger_region(index, &self.config)
            .ok_or_else(|| ScrollshowError::validation(format!("no geometry for slide {index}")))?;

        let layout = resolve_layout(&slide, index);
        self.controllers[index].rebuild(&layout, region);
        self.controllers[index].on_scroll(self.scroll_y);
        self.layouts[index] = layout;
        Ok(())
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        if let Some(frozen) = &self.frozen {
            return frozen.clone();
        }
        let (progress, guide, guide_segment) = match &self.choreographer {
            Some(ch) => {
                let f = ch.frame();
                (f.progress, f.guide, f.guide_segment)
            }
            None => (0.0, crate::choreography::guide::default_waypoints()[0], 0),
        };
        FrameSnapshot {
            frame: self.frame,
            time_secs: self.time_secs,
            scroll_y: self.scroll_y,
            scroll_fraction: self.geometry.fraction(self.scroll_y),
            progress,
            guide,
            guide_segment,
            cursor: self.cursor.position(),
            slides: self
                .controllers
                .iter()
                .map(|c| SlideFrame {
                    id: c.id().to_owned(),
                    phase: c.phase(),
                    playhead: c.playhead(),
                    targets: c.sample(),
                })
                .collect(),
        }
    }

    /// Freezes the last frame and releases every controller and the choreographer.
    /// Idempotent.
    pub fn teardown(&mut self) {
        if self.is_torn_down() {
            return;
        }
        let last = self.snapshot();
        tracing::debug!(slides = self.controllers.len(), frame = self.frame, "page teardown");
        self.controllers.clear();
        self.choreographer = None;
        self.frozen = Some(last);
    }
}

impl InputListener for PageRuntime {
    fn on_event(&mut self, event: &InputEvent) {
        if self.is_torn_down() {
            return;
        }
        match *event {
            InputEvent::Scroll { y } => self.scroll_to(y),
            InputEvent::PointerMove { position } => self.cursor.move_to(position),
            InputEvent::Frame { dt } => self.tick(dt),
        }
    }
}

/// Builds a runtime for `feed` and subscribes it to `hub`. The page stays live until the
/// returned guard is dropped.
#[tracing::instrument(skip(hub, feed, config), fields(slides = feed.len()))]
pub fn mount(
    hub: &InputHub,
    feed: &SlideFeed,
    config: PresentationConfig,
) -> ScrollshowResult<MountedPage> {
    let runtime = Rc::new(RefCell::new(PageRuntime::new(feed, config)?));
    let listener: Rc<RefCell<dyn InputListener>> = runtime.clone();
    let subscription = hub.listen(&listener);
    tracing::debug!("page mounted");
    Ok(MountedPage {
        runtime,
        subscription: Some(subscription),
    })
}

/// Live page. Dropping it, normally or while unwinding, unsubscribes from the hub and tears
/// the runtime down.
#[derive(Debug)]
pub struct MountedPage {
    runtime: Rc<RefCell<PageRuntime>>,
    subscription: Option<Subscription>,
}

impl MountedPage {
    pub fn handle(&self) -> PageHandle {
        PageHandle {
            runtime: Rc::clone(&self.runtime),
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.runtime.borrow().snapshot()
    }

    pub fn update_slide(&self, slide: Slide) -> ScrollshowResult<()> {
        self.runtime.borrow_mut().update_slide(slide)
    }

    /// Explicit unmount; same as dropping.
    pub fn unmount(self) {}
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        self.subscription.take();
        match self.runtime.try_borrow_mut() {
            Ok(mut runtime) => runtime.teardown(),
            Err(_) => tracing::warn!("page runtime busy during unmount; teardown skipped"),
        }
    }
}

/// Read-only view of a page that outlives the mount guard.
#[derive(Clone, Debug)]
pub struct PageHandle {
    runtime: Rc<RefCell<PageRuntime>>,
}

impl PageHandle {
    pub fn is_mounted(&self) -> bool {
        !self.runtime.borrow().is_torn_down()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.runtime.borrow().snapshot()
    }

    pub fn max_scroll(&self) -> f64 {
        self.runtime.borrow().geometry().max_scroll()
    }

    pub fn controller_count(&self) -> usize {
        self.runtime.borrow().controllers().len()
    }

    pub fn entries(&self, id: &str) -> Option<u32> {
        self.runtime.borrow().controller(id).map(SlideController::entries)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/runtime.rs"]
mod tests;
