//! Tick-driven animation helpers for the shell
//!
//! Everything here is advanced by frame deltas the way the carousels are, so
//! behavior is testable without a window: feed time in, read values out.

use eframe::egui::{Pos2, Rect, Vec2};

/// Exponential ease-out used for programmatic scrolling
pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        (1.001 - 2f32.powf(-10.0 * t)).min(1.0)
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Duration of a programmatic scroll glide
pub const SCROLL_SECS: f32 = 1.2;

/// Eases the scroll offset toward a requested target. Any user wheel input
/// cancels the glide so the wheel always wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothScroll {
    from: f32,
    target: f32,
    clock: f32,
    animating: bool,
}

impl SmoothScroll {
    pub fn request(&mut self, from: f32, target: f32) {
        self.from = from;
        self.target = target.max(0.0);
        self.clock = 0.0;
        self.animating = true;
    }

    pub fn cancel(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Advance and return the absolute offset to apply this frame, or `None`
    /// once the glide has finished (or was never started).
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.animating {
            return None;
        }
        self.clock += dt;
        let t = (self.clock / SCROLL_SECS).min(1.0);
        if t >= 1.0 {
            self.animating = false;
            return Some(self.target);
        }
        Some(self.from + (self.target - self.from) * ease_out_expo(t))
    }
}

pub const REVEAL_SECS: f32 = 0.7;
pub const REVEAL_RISE: f32 = 40.0;

/// One-shot enter animation for a section: triggered the first time the
/// section scrolls into view, then fades/slides in over [`REVEAL_SECS`].
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    clock: f32,
    triggered: bool,
}

impl Reveal {
    pub fn hidden() -> Self {
        Self {
            clock: 0.0,
            triggered: false,
        }
    }

    /// Already fully visible; used when reduced motion is on
    pub fn shown() -> Self {
        Self {
            clock: REVEAL_SECS,
            triggered: true,
        }
    }

    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.triggered && self.clock < REVEAL_SECS {
            self.clock = (self.clock + dt).min(REVEAL_SECS);
        }
    }

    fn t(&self) -> f32 {
        if self.triggered {
            (self.clock / REVEAL_SECS).min(1.0)
        } else {
            0.0
        }
    }

    /// Opacity multiplier in `[0, 1]`
    pub fn alpha(&self) -> f32 {
        ease_out_cubic(self.t())
    }

    /// Downward offset that decays to zero as the section settles
    pub fn rise(&self) -> f32 {
        (1.0 - ease_out_cubic(self.t())) * REVEAL_RISE
    }

    pub fn is_settled(&self) -> bool {
        self.triggered && self.clock >= REVEAL_SECS
    }
}

/// Fraction of a section's reading window consumed at `offset`.
///
/// The window opens when the section top reaches 30% down the viewport and
/// closes when its bottom passes the midpoint; the navbar underline fills
/// across exactly that span.
pub fn section_progress(offset: f32, viewport_h: f32, top: f32, bottom: f32) -> f32 {
    let start = top - viewport_h * 0.3;
    let end = bottom - viewport_h * 0.5;
    if end <= start {
        return if offset >= start { 1.0 } else { 0.0 };
    }
    ((offset - start) / (end - start)).clamp(0.0, 1.0)
}

/// Index of the section whose reading window contains `offset`; when windows
/// overlap the later section wins, and before any window opens it is 0.
pub fn active_section(offset: f32, viewport_h: f32, spans: &[(f32, f32)]) -> usize {
    let mut active = 0;
    for (index, &(top, bottom)) in spans.iter().enumerate() {
        let start = top - viewport_h * 0.3;
        let end = bottom - viewport_h * 0.5;
        if offset >= start && offset < end {
            active = index;
        }
    }
    active
}

/// Drifting accent blob behind the hero. Seeded once at startup; position is
/// a pure function of elapsed time plus pointer parallax.
#[derive(Debug, Clone, Copy)]
pub struct Blob {
    /// Anchor as a fraction of the hero rect
    anchor: Vec2,
    /// Radius as a fraction of the hero height
    pub radius: f32,
    phase: Vec2,
    /// Cycles per second; periods land around 10-20 s
    freq: Vec2,
    amp: f32,
    /// Parallax multiplier; deeper blobs move more
    pub depth: f32,
}

pub fn scatter_blobs(count: usize) -> Vec<Blob> {
    (0..count)
        .map(|index| Blob {
            anchor: Vec2::new(
                0.12 + fastrand::f32() * 0.76,
                0.10 + fastrand::f32() * 0.70,
            ),
            radius: 0.22 + fastrand::f32() * 0.16,
            phase: Vec2::new(
                fastrand::f32() * std::f32::consts::TAU,
                fastrand::f32() * std::f32::consts::TAU,
            ),
            freq: Vec2::new(
                0.05 + fastrand::f32() * 0.05,
                0.05 + fastrand::f32() * 0.05,
            ),
            amp: 0.05 + fastrand::f32() * 0.04,
            depth: (index + 1) as f32,
        })
        .collect()
}

impl Blob {
    /// Center within `region` at time `t`, shifted by the normalized pointer
    /// offset (`parallax` in roughly -0.5..0.5 per axis).
    pub fn center(&self, region: Rect, t: f32, parallax: Vec2) -> Pos2 {
        let tau = std::f32::consts::TAU;
        let drift = Vec2::new(
            (t * tau * self.freq.x + self.phase.x).sin(),
            (t * tau * self.freq.y + self.phase.y).sin(),
        ) * self.amp
            * region.height();
        let shift = parallax * self.depth * 18.0;
        Pos2::new(
            region.min.x + self.anchor.x * region.width(),
            region.min.y + self.anchor.y * region.height(),
        ) + drift
            + shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert!(ease_out_expo(0.0) < 0.01);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Monotonic over a coarse sample
        let mut last = 0.0;
        for step in 1..=10 {
            let value = ease_out_expo(step as f32 / 10.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_smooth_scroll_reaches_target_and_stops() {
        let mut scroll = SmoothScroll::default();
        assert_eq!(scroll.tick(0.016), None);

        scroll.request(0.0, 900.0);
        let mut offset = 0.0;
        for _ in 0..200 {
            if let Some(next) = scroll.tick(0.016) {
                assert!(next >= offset, "glide never backtracks");
                offset = next;
            }
        }
        assert_eq!(offset, 900.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(0.016), None);
    }

    #[test]
    fn test_smooth_scroll_cancel_yields_nothing() {
        let mut scroll = SmoothScroll::default();
        scroll.request(100.0, 0.0);
        assert!(scroll.tick(0.016).is_some());
        scroll.cancel();
        assert_eq!(scroll.tick(0.016), None);
    }

    #[test]
    fn test_section_progress_window() {
        // Viewport 1000: window for a [1300, 2300] section is [1000, 1800)
        assert_eq!(section_progress(900.0, 1000.0, 1300.0, 2300.0), 0.0);
        assert_eq!(section_progress(1000.0, 1000.0, 1300.0, 2300.0), 0.0);
        assert!((section_progress(1400.0, 1000.0, 1300.0, 2300.0) - 0.5).abs() < 1e-6);
        assert_eq!(section_progress(1800.0, 1000.0, 1300.0, 2300.0), 1.0);
        assert_eq!(section_progress(5000.0, 1000.0, 1300.0, 2300.0), 1.0);
    }

    #[test]
    fn test_active_section_prefers_later_match() {
        let spans = [(0.0, 800.0), (800.0, 1600.0), (1600.0, 2400.0)];
        assert_eq!(active_section(0.0, 1000.0, &spans), 0);
        assert_eq!(active_section(600.0, 1000.0, &spans), 1);
        assert_eq!(active_section(1400.0, 1000.0, &spans), 2);
    }

    #[test]
    fn test_reveal_lifecycle() {
        let mut reveal = Reveal::hidden();
        reveal.tick(1.0);
        assert_eq!(reveal.alpha(), 0.0, "nothing moves before the trigger");

        reveal.trigger();
        reveal.tick(REVEAL_SECS / 2.0);
        assert!(reveal.alpha() > 0.0 && reveal.alpha() < 1.0);
        assert!(reveal.rise() > 0.0);

        reveal.tick(REVEAL_SECS);
        assert!(reveal.is_settled());
        assert_eq!(reveal.alpha(), 1.0);
        assert_eq!(reveal.rise(), 0.0);

        assert!(Reveal::shown().is_settled());
    }

    #[test]
    fn test_blob_scatter_ranges() {
        let blobs = scatter_blobs(3);
        assert_eq!(blobs.len(), 3);
        for blob in &blobs {
            assert!(blob.radius > 0.0 && blob.radius < 0.5);
            assert!(blob.depth >= 1.0);
        }
    }
}
