//! Auto-advancing slide carousel used by the Projects and Certificates sections
//!
//! The behavior lives in [`CarouselState`], a small state machine that knows
//! nothing about egui: time reaches it only as [`CarouselEvent::Tick`] events
//! delivered by the host each frame, so a dropped carousel can never advance
//! again. [`render_carousel`] draws the widget and funnels pointer, click and
//! keyboard input into the same reducer.

use std::time::Duration;

use eframe::egui::{
    self, Align, Align2, Color32, FontId, Layout, RichText, Sense, Stroke, StrokeKind, UiBuilder,
};
use egui_phosphor::regular as icons;

use crate::ui::theme;

/// Countdown toward the next auto-advance.
///
/// Owned by [`CarouselState`] and replaced wholesale whenever the schedule
/// restarts; the old value simply ceases to exist, so at most one timer is
/// live per carousel and a stale one can never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdvanceTimer {
    cycle: Duration,
    elapsed: Duration,
}

impl AdvanceTimer {
    fn fresh(cycle: Duration) -> Self {
        Self {
            cycle,
            elapsed: Duration::ZERO,
        }
    }

    /// Consume `dt` and return how many full cycles completed. Oversized
    /// deltas roll over, so splitting a time span into ticks of any size
    /// lands on the same elapsed remainder.
    fn advance(&mut self, dt: Duration) -> usize {
        self.elapsed += dt;
        let mut laps = 0;
        while self.elapsed >= self.cycle {
            self.elapsed -= self.cycle;
            laps += 1;
        }
        laps
    }

    fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / self.cycle.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// One user- or clock-originated carousel event.
///
/// Every mutation of [`CarouselState`] flows through [`CarouselState::apply`],
/// so an index change and a pause change restart the shared timer inside the
/// same transition instead of as two racing effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Frame time from the host; the only way time enters the machine.
    Tick(Duration),
    /// "Next" arrow: advance one slide and resume auto-play.
    Next,
    /// "Previous" arrow: step back one slide. Unlike Next, the sticky pause
    /// flag is left as-is.
    Previous,
    /// Dot or thumbnail click: jump to a slide and resume auto-play.
    Select(usize),
    /// ArrowRight with the region focused: step without touching the pause flag.
    StepForward,
    /// ArrowLeft with the region focused: step without touching the pause flag.
    StepBack,
    /// Container click or Space with the region focused: toggle the sticky pause.
    TogglePause,
    /// Pointer crossed the region boundary.
    HoverChanged(bool),
}

/// Derived mode, never stored: a function of the two independent booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Timer live, progress climbing toward the next auto-advance
    Running,
    /// Pointer over the region; timer held where it is, resumes on leave
    HoverPaused,
    /// User toggled pause; timer stopped until toggled again
    ManualPaused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    item_count: usize,
    active_index: usize,
    manual_paused: bool,
    hovering: bool,
    timer: AdvanceTimer,
}

impl CarouselState {
    /// Panics if `item_count` is zero or `cycle` is not positive. Both are
    /// caller contract violations, surfaced at construction rather than
    /// tolerated at runtime.
    pub fn new(item_count: usize, cycle: Duration) -> Self {
        assert!(item_count > 0, "carousel requires at least one item");
        assert!(!cycle.is_zero(), "carousel cycle must be positive");
        Self {
            item_count,
            active_index: 0,
            manual_paused: false,
            hovering: false,
            timer: AdvanceTimer::fresh(cycle),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Always a valid index into the item collection
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_manual_paused(&self) -> bool {
        self.manual_paused
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.manual_paused {
            CarouselPhase::ManualPaused
        } else if self.hovering {
            CarouselPhase::HoverPaused
        } else {
            CarouselPhase::Running
        }
    }

    /// Elapsed fraction of the current cycle in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// The single reducer. Applies one event and leaves the state consistent:
    /// the timer restarts exactly when the index or the pause flag changes,
    /// and only ticks advance it.
    pub fn apply(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Tick(dt) => {
                if self.phase() != CarouselPhase::Running {
                    return;
                }
                let laps = self.timer.advance(dt);
                if laps > 0 {
                    self.active_index = (self.active_index + laps) % self.item_count;
                }
            }
            CarouselEvent::Next => {
                self.active_index = (self.active_index + 1) % self.item_count;
                self.manual_paused = false;
                self.restart_timer();
            }
            CarouselEvent::Previous => {
                self.active_index = (self.active_index + self.item_count - 1) % self.item_count;
                self.restart_timer();
            }
            CarouselEvent::Select(index) => {
                self.active_index = index.min(self.item_count - 1);
                self.manual_paused = false;
                self.restart_timer();
            }
            CarouselEvent::StepForward => {
                self.active_index = (self.active_index + 1) % self.item_count;
                self.restart_timer();
            }
            CarouselEvent::StepBack => {
                self.active_index = (self.active_index + self.item_count - 1) % self.item_count;
                self.restart_timer();
            }
            CarouselEvent::TogglePause => {
                self.manual_paused = !self.manual_paused;
                self.restart_timer();
            }
            CarouselEvent::HoverChanged(hovering) => {
                self.hovering = hovering;
            }
        }
    }

    fn restart_timer(&mut self) {
        self.timer = AdvanceTimer::fresh(self.timer.cycle);
    }
}

/// Per-slide metadata the widget chrome needs; the slide body itself is drawn
/// by the caller's closure.
pub struct CarouselSlide<'a> {
    pub title: &'a str,
    pub accent: Color32,
}

/// Draw the carousel region: status line, slide content, previous/next
/// controls, one dot per slide and the linear progress indicator.
///
/// Interactions are translated into [`CarouselEvent`]s and applied before
/// returning. Clicks on nested controls never reach the container toggle
/// because inner widgets take precedence over the sensed scope. Returns the
/// container response so callers can inspect focus or position.
pub fn render_carousel(
    ui: &mut egui::Ui,
    id_salt: &str,
    state: &mut CarouselState,
    slides: &[CarouselSlide<'_>],
    draw_slide: impl FnOnce(&mut egui::Ui, usize),
) -> egui::Response {
    debug_assert_eq!(slides.len(), state.item_count());

    let accent = slides[state.active_index()].accent;
    let phase = state.phase();
    let status = format!(
        "Slide {} of {}: {}",
        state.active_index() + 1,
        slides.len(),
        slides[state.active_index()].title
    );

    let mut events: Vec<CarouselEvent> = Vec::new();

    let container_stroke = match phase {
        CarouselPhase::ManualPaused => Stroke::new(1.5, theme::ACCENT),
        _ => Stroke::new(1.0, theme::BG_HOVER),
    };

    let inner = theme::elevated_frame().stroke(container_stroke).show(ui, |ui| {
        let scope = ui.scope_builder(
            UiBuilder::new().id_salt(id_salt).sense(Sense::click()),
            |ui| {
                ui.set_width(ui.available_width());

                // Status line doubles as the screen-reader announcement below
                ui.horizontal(|ui| {
                    ui.label(RichText::new(status.as_str()).small().color(theme::TEXT_MUTED));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| match phase {
                        CarouselPhase::ManualPaused => {
                            ui.label(RichText::new(icons::PAUSE).color(theme::ACCENT));
                            ui.label(RichText::new("paused").small().color(theme::ACCENT));
                        }
                        CarouselPhase::HoverPaused => {
                            ui.label(RichText::new(icons::PLAY).color(theme::TEXT_MUTED));
                        }
                        CarouselPhase::Running => {}
                    });
                });
                ui.add_space(6.0);

                draw_slide(ui, state.active_index());

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let prev = ui
                        .add(
                            egui::Button::new(RichText::new(icons::CARET_LEFT).size(18.0))
                                .min_size(egui::vec2(36.0, 36.0))
                                .corner_radius(18.0),
                        )
                        .on_hover_text("Previous slide");
                    if prev.clicked() {
                        events.push(CarouselEvent::Previous);
                    }

                    ui.add_space(8.0);
                    for (index, slide) in slides.iter().enumerate() {
                        let active = index == state.active_index();
                        let (rect, dot) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::click());
                        if ui.is_rect_visible(rect) {
                            let radius = if active { 5.0 } else { 3.5 };
                            let fill = if active {
                                slide.accent
                            } else {
                                theme::TEXT_MUTED.gamma_multiply(0.6)
                            };
                            ui.painter().circle_filled(rect.center(), radius, fill);
                        }
                        let dot = dot.on_hover_text(slide.title);
                        dot.widget_info(|| {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::Button,
                                true,
                                format!("Go to slide {}: {}", index + 1, slide.title),
                            )
                        });
                        if dot.clicked() {
                            events.push(CarouselEvent::Select(index));
                        }
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let next = ui
                            .add(
                                egui::Button::new(RichText::new(icons::CARET_RIGHT).size(18.0))
                                    .min_size(egui::vec2(36.0, 36.0))
                                    .corner_radius(18.0),
                            )
                            .on_hover_text("Next slide");
                        if next.clicked() {
                            events.push(CarouselEvent::Next);
                        }
                    });
                });

                ui.add_space(8.0);
                draw_progress_bar(ui, state, accent);
            },
        );
        scope.response
    });
    let container = inner.inner;

    // Clicks on empty container space toggle pause; nested controls already
    // consumed theirs. Clicking also moves keyboard focus to the region.
    if container.clicked() {
        events.push(CarouselEvent::TogglePause);
        container.request_focus();
    }

    let focused = container.has_focus();
    if focused {
        ui.input_mut(|input| {
            if input.consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight) {
                events.push(CarouselEvent::StepForward);
            }
            if input.consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft) {
                events.push(CarouselEvent::StepBack);
            }
            if input.consume_key(egui::Modifiers::NONE, egui::Key::Space) {
                events.push(CarouselEvent::TogglePause);
            }
        });
        ui.painter().rect_stroke(
            container.rect.expand(4.0),
            12.0,
            theme::focus_stroke(),
            StrokeKind::Inside,
        );
    }

    let hovering = container.contains_pointer();
    if hovering != state.is_hovering() {
        events.push(CarouselEvent::HoverChanged(hovering));
    }

    container.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Other, true, status.as_str())
    });

    for event in events {
        state.apply(event);
    }

    container
}

/// Linear indicator under the slide. While manually paused the bar is pinned
/// full width in the warning accent instead of showing progress.
fn draw_progress_bar(ui: &mut egui::Ui, state: &CarouselState, accent: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 4.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(rect, 2.0, theme::BG_LIGHT);
    match state.phase() {
        CarouselPhase::ManualPaused => {
            painter.rect_filled(rect, 2.0, theme::ACCENT);
        }
        _ => {
            let width = rect.width() * state.progress();
            if width > 0.5 {
                let fill = egui::Rect::from_min_size(rect.min, egui::vec2(width, rect.height()));
                painter.rect_filled(fill, 2.0, accent);
            }
        }
    }
}

/// Thumbnail selector row shown under the projects carousel. Clicking a
/// thumbnail selects that slide and resumes auto-play, exactly like a dot.
pub fn render_thumbnail_strip(
    ui: &mut egui::Ui,
    state: &mut CarouselState,
    slides: &[CarouselSlide<'_>],
) {
    let mut selected = None;
    ui.horizontal_wrapped(|ui| {
        for (index, slide) in slides.iter().enumerate() {
            let active = index == state.active_index();
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(72.0, 44.0), Sense::click());
            if ui.is_rect_visible(rect) {
                let painter = ui.painter_at(rect);
                let fill_strength = if active { 0.45 } else { 0.15 };
                painter.rect_filled(rect, 6.0, slide.accent.gamma_multiply(fill_strength));
                let stroke = if active {
                    Stroke::new(2.0, slide.accent)
                } else {
                    Stroke::new(1.0, theme::BG_HOVER)
                };
                painter.rect_stroke(rect, 6.0, stroke, StrokeKind::Inside);
                let initial = slide.title.chars().next().unwrap_or('?');
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    initial,
                    FontId::proportional(16.0),
                    theme::TEXT_PRIMARY,
                );
            }
            let response = response.on_hover_text(slide.title);
            response.widget_info(|| {
                egui::WidgetInfo::labeled(
                    egui::WidgetType::Button,
                    true,
                    format!("Show {}", slide.title),
                )
            });
            if response.clicked() {
                selected = Some(index);
            }
        }
    });
    if let Some(index) = selected {
        state.apply(CarouselEvent::Select(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn carousel(items: usize, cycle_secs: f32) -> CarouselState {
        CarouselState::new(items, Duration::from_secs_f32(cycle_secs))
    }

    fn tick(state: &mut CarouselState, secs: f32) {
        state.apply(CarouselEvent::Tick(Duration::from_secs_f32(secs)));
    }

    #[test]
    fn test_starts_running_at_first_slide() {
        let state = carousel(5, 6.0);
        assert_eq!(state.active_index(), 0);
        assert!(!state.is_manual_paused());
        assert_eq!(state.phase(), CarouselPhase::Running);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn test_empty_collection_is_rejected() {
        let _ = carousel(0, 5.0);
    }

    #[test]
    fn test_full_cycle_advances_and_resets_progress() {
        // 5 slides, 6 second cycle, no interaction
        let mut state = carousel(5, 6.0);
        tick(&mut state, 6.0);
        assert_eq!(state.active_index(), 1);
        assert!(state.progress() < 1e-6);
    }

    #[test]
    fn test_partial_tick_accumulates_progress() {
        let mut state = carousel(5, 5.0);
        tick(&mut state, 2.0);
        assert_eq!(state.active_index(), 0);
        assert!((state.progress() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_oversized_tick_consumes_whole_cycles() {
        let mut state = carousel(5, 5.0);
        tick(&mut state, 12.0);
        assert_eq!(state.active_index(), 2);
        assert!((state.progress() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_auto_advance_wraps_to_first() {
        let mut state = carousel(3, 4.0);
        for _ in 0..3 {
            tick(&mut state, 4.0);
        }
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_container_toggle_is_idempotent_and_resets_progress() {
        let mut state = carousel(4, 5.0);
        tick(&mut state, 2.0);
        assert!(state.progress() > 0.3);

        state.apply(CarouselEvent::TogglePause);
        assert!(state.is_manual_paused());
        assert_eq!(state.phase(), CarouselPhase::ManualPaused);
        assert_eq!(state.progress(), 0.0);

        state.apply(CarouselEvent::TogglePause);
        assert!(!state.is_manual_paused());
        assert_eq!(state.phase(), CarouselPhase::Running);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_manual_pause_freezes_index_and_progress() {
        // Pause, then let ten seconds pass: nothing moves
        let mut state = carousel(5, 5.0);
        state.apply(CarouselEvent::TogglePause);
        tick(&mut state, 10.0);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.progress(), 0.0);
        assert!(state.is_manual_paused());
    }

    #[test]
    fn test_dot_click_while_paused_selects_and_resumes() {
        let mut state = carousel(5, 5.0);
        state.apply(CarouselEvent::TogglePause);
        state.apply(CarouselEvent::Select(3));
        assert_eq!(state.active_index(), 3);
        assert!(!state.is_manual_paused());
        assert_eq!(state.phase(), CarouselPhase::Running);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_arrow_steps_leave_pause_untouched() {
        let mut state = carousel(5, 5.0);
        for _ in 0..3 {
            state.apply(CarouselEvent::StepForward);
        }
        assert_eq!(state.active_index(), 3);
        assert!(!state.is_manual_paused());

        state.apply(CarouselEvent::TogglePause);
        state.apply(CarouselEvent::StepForward);
        state.apply(CarouselEvent::StepBack);
        assert!(state.is_manual_paused(), "arrows must not clear the pause");
    }

    #[test]
    fn test_next_clears_manual_pause_previous_does_not() {
        let mut state = carousel(5, 5.0);
        state.apply(CarouselEvent::TogglePause);

        state.apply(CarouselEvent::Previous);
        assert_eq!(state.active_index(), 4);
        assert!(state.is_manual_paused(), "previous keeps the pause");

        state.apply(CarouselEvent::Next);
        assert_eq!(state.active_index(), 0);
        assert!(!state.is_manual_paused(), "next resumes auto-play");
    }

    #[test]
    fn test_hover_suspends_without_losing_progress() {
        let mut state = carousel(5, 5.0);
        tick(&mut state, 2.0);
        assert!((state.progress() - 0.4).abs() < 1e-6);

        state.apply(CarouselEvent::HoverChanged(true));
        assert_eq!(state.phase(), CarouselPhase::HoverPaused);
        tick(&mut state, 2.0);
        assert!((state.progress() - 0.4).abs() < 1e-6, "held, not reset");
        assert_eq!(state.active_index(), 0);

        state.apply(CarouselEvent::HoverChanged(false));
        assert_eq!(state.phase(), CarouselPhase::Running);
        tick(&mut state, 0.5);
        assert!((state.progress() - 0.5).abs() < 1e-6, "resumed from 0.4");
    }

    #[test]
    fn test_hover_never_alters_manual_pause() {
        let mut state = carousel(5, 5.0);
        state.apply(CarouselEvent::TogglePause);
        state.apply(CarouselEvent::HoverChanged(true));
        state.apply(CarouselEvent::HoverChanged(false));
        assert!(state.is_manual_paused());
        assert_eq!(state.phase(), CarouselPhase::ManualPaused);
        tick(&mut state, 10.0);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_unpausing_under_the_pointer_stays_suspended() {
        // The timer runs only when unpaused AND unhovered; clearing the pause
        // with the pointer still over the region lands in HoverPaused.
        let mut state = carousel(5, 5.0);
        state.apply(CarouselEvent::TogglePause);
        state.apply(CarouselEvent::HoverChanged(true));
        state.apply(CarouselEvent::TogglePause);
        assert_eq!(state.phase(), CarouselPhase::HoverPaused);
        tick(&mut state, 3.0);
        assert_eq!(state.progress(), 0.0);

        state.apply(CarouselEvent::HoverChanged(false));
        assert_eq!(state.phase(), CarouselPhase::Running);
    }

    #[test]
    fn test_single_item_carousel_is_static() {
        let mut state = carousel(1, 5.0);
        tick(&mut state, 20.0);
        assert_eq!(state.active_index(), 0);
        state.apply(CarouselEvent::Next);
        state.apply(CarouselEvent::Previous);
        state.apply(CarouselEvent::StepForward);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_select_out_of_range_clamps_to_last() {
        let mut state = carousel(5, 5.0);
        state.apply(CarouselEvent::Select(99));
        assert_eq!(state.active_index(), 4);
    }

    #[test]
    fn test_state_is_inert_without_events() {
        // Time enters only through Tick: with no events applied, reads leave
        // the state bit-identical, which is what makes teardown safe.
        let state = carousel(5, 5.0);
        let snapshot = state.clone();
        let _ = state.progress();
        let _ = state.phase();
        let _ = state.active_index();
        assert_eq!(state, snapshot);
    }

    proptest! {
        #[test]
        fn prop_next_k_times_lands_on_k_mod_n(k in 0usize..100, n in 1usize..12) {
            let mut state = carousel(n, 5.0);
            for _ in 0..k {
                state.apply(CarouselEvent::Next);
            }
            prop_assert_eq!(state.active_index(), k % n);
        }

        #[test]
        fn prop_previous_k_times_lands_on_minus_k_mod_n(k in 0usize..100, n in 1usize..12) {
            let mut state = carousel(n, 5.0);
            for _ in 0..k {
                state.apply(CarouselEvent::Previous);
            }
            prop_assert_eq!(state.active_index(), (n - k % n) % n);
        }

        #[test]
        fn prop_index_stays_in_bounds(events in prop::collection::vec(0u8..6, 0..200), n in 1usize..9) {
            let mut state = carousel(n, 5.0);
            for code in events {
                let event = match code {
                    0 => CarouselEvent::Next,
                    1 => CarouselEvent::Previous,
                    2 => CarouselEvent::StepForward,
                    3 => CarouselEvent::StepBack,
                    4 => CarouselEvent::TogglePause,
                    _ => CarouselEvent::Tick(Duration::from_millis(700)),
                };
                state.apply(event);
                prop_assert!(state.active_index() < n);
            }
        }

        #[test]
        fn prop_tick_partition_independent(parts in prop::collection::vec(1u64..900, 1..60), n in 1usize..9) {
            let cycle = Duration::from_secs(5);
            let mut split = CarouselState::new(n, cycle);
            let mut whole = CarouselState::new(n, cycle);

            let mut total = Duration::ZERO;
            for ms in parts {
                let dt = Duration::from_millis(ms);
                total += dt;
                split.apply(CarouselEvent::Tick(dt));
            }
            whole.apply(CarouselEvent::Tick(total));

            prop_assert_eq!(split.active_index(), whole.active_index());
            prop_assert_eq!(split, whole);
        }
    }
}
