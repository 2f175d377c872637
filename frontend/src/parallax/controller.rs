use super::geometry::{distance_ratio, parallax_offset, Rect, Translation};

/// What the controller needs from the page hosting it.
pub trait ScrollSurface {
    type Handle;

    fn viewport_width(&self) -> f64;
    fn bounding_rect(&self, handle: &Self::Handle) -> Rect;
    /// Adds `delta` to the host's horizontal scroll offset.
    fn scroll_by(&mut self, delta: f64);
    fn write_transform(&mut self, handle: &Self::Handle, translation: Translation);
}

/// Defers work to the next display frame.
pub trait FrameScheduler {
    type Token;

    /// `None` when the frame could not be scheduled.
    fn request(&mut self) -> Option<Self::Token>;
    fn cancel(&mut self, token: Self::Token);
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxElement<H> {
    pub handle: H,
    pub speed: f64,
}

impl<H> ParallaxElement<H> {
    pub fn new(handle: H, speed: f64) -> Self {
        Self { handle, speed }
    }

    fn is_moving(&self) -> bool {
        self.speed != 0.0 && self.speed.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Input was turned into horizontal motion; the native scroll must be blocked.
    PreventDefault,
    Ignored,
}

/// Turns vertical wheel input into horizontal scrolling of the host and keeps
/// every registered element's parallax transform in sync with it.
///
/// Recomputations are coalesced: at most one frame request is outstanding.
pub struct ParallaxScrollController<S: ScrollSurface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    elements: Vec<ParallaxElement<S::Handle>>,
    pending: Option<F::Token>,
    active: bool,
}

impl<S: ScrollSurface, F: FrameScheduler> ParallaxScrollController<S, F> {
    /// Returns `None` when there is no host, which simply leaves the page
    /// without the effect. Otherwise elements are positioned right away.
    pub fn activate(
        host: Option<S>,
        elements: Vec<ParallaxElement<S::Handle>>,
        scheduler: F,
    ) -> Option<Self> {
        let surface = host?;
        let mut controller = Self {
            surface,
            scheduler,
            elements,
            pending: None,
            active: true,
        };
        controller.recompute();
        Some(controller)
    }

    pub fn wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if !self.active {
            return WheelOutcome::Ignored;
        }
        if delta_y.is_finite() && delta_y != 0.0 {
            self.surface.scroll_by(delta_y);
        }
        self.request_frame();
        WheelOutcome::PreventDefault
    }

    pub fn scroll(&mut self) {
        self.request_frame();
    }

    pub fn resize(&mut self) {
        self.request_frame();
    }

    /// Entry point of the scheduled frame. Returns the number of transforms written.
    pub fn run_frame(&mut self) -> usize {
        self.pending = None;
        if !self.active {
            return 0;
        }
        self.recompute()
    }

    /// Cancels the outstanding frame; later events and stray frames are no-ops.
    pub fn deactivate(&mut self) {
        self.active = false;
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
    }

    fn request_frame(&mut self) {
        if !self.active || self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request();
    }

    fn recompute(&mut self) -> usize {
        let viewport_width = self.surface.viewport_width();
        let mut written = 0;
        for element in self.elements.iter().filter(|e| e.is_moving()) {
            let rect = self.surface.bounding_rect(&element.handle);
            let Some(ratio) = distance_ratio(viewport_width, rect) else {
                continue;
            };
            let translation = parallax_offset(ratio, element.speed);
            if !translation.is_finite() {
                continue;
            }
            self.surface.write_transform(&element.handle, translation);
            written += 1;
        }
        written
    }
}
