//! Drag state for the before/after comparison slider.
//!
//! Kept free of any DOM types so the clamping and gesture logic can be
//! unit tested on the host. The Yew component in
//! `components::before_after` feeds it coordinates extracted from mouse
//! and touch events.

/// A single horizontal pointer reading, regardless of input modality.
/// Mouse and touch events are reduced to this before they reach the
/// state machine; the vertical coordinate is intentionally discarded
/// (the slider only moves horizontally).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
}

/// The measured bounding box of the slider container, reduced to the
/// two values the position math needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

/// Position and gesture state of one comparison slider.
///
/// `position` is a percentage of container width in `[0, 100]`;
/// `dragging` is true strictly between a press and its matching
/// release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    position: f64,
    dragging: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            position: 50.0,
            dragging: false,
        }
    }
}

impl SliderState {
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Press on the handle or overlay. Always succeeds.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Release anywhere on the page. Idempotent; the position stays
    /// where the last move left it.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Applies a move event. No-op unless a drag is active and the
    /// container could actually be measured; a zero or negative width
    /// means the container is unmounted or collapsed and the sample is
    /// dropped rather than producing a garbage percentage.
    pub fn update(&mut self, sample: PointerSample, bounds: Option<ContainerBounds>) {
        if !self.dragging {
            return;
        }
        let Some(bounds) = bounds else { return };
        if bounds.width <= 0.0 {
            return;
        }
        let percentage = (sample.x - bounds.left) / bounds.width * 100.0;
        self.position = percentage.clamp(0.0, 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(left: f64, width: f64) -> Option<ContainerBounds> {
        Some(ContainerBounds { left, width })
    }

    fn dragging_at_default() -> SliderState {
        let mut s = SliderState::default();
        s.begin_drag();
        s
    }

    #[test]
    fn defaults_to_centered_and_idle() {
        let s = SliderState::default();
        assert_eq!(s.position(), 50.0);
        assert!(!s.dragging());
    }

    #[test]
    fn clamps_to_zero_left_of_container() {
        let mut s = dragging_at_default();
        for x in [99.9, 0.0, -500.0, -1e9] {
            s.update(PointerSample { x }, bounds(100.0, 200.0));
            assert_eq!(s.position(), 0.0, "x = {x}");
        }
    }

    #[test]
    fn clamps_to_hundred_right_of_container() {
        let mut s = dragging_at_default();
        for x in [300.1, 1000.0, 1e9] {
            s.update(PointerSample { x }, bounds(100.0, 200.0));
            assert_eq!(s.position(), 100.0, "x = {x}");
        }
    }

    #[test]
    fn midpoint_maps_to_fifty() {
        let mut s = dragging_at_default();
        s.update(PointerSample { x: 200.0 }, bounds(100.0, 200.0));
        assert!((s.position() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn position_stays_in_range_for_arbitrary_input() {
        let mut s = dragging_at_default();
        for x in [-1e12, -3.5, 0.0, 17.2, 250.0, 4e7] {
            for (left, width) in [(-50.0, 10.0), (0.0, 1.0), (100.0, 200.0)] {
                s.update(PointerSample { x }, bounds(left, width));
                assert!(
                    (0.0..=100.0).contains(&s.position()),
                    "x = {x}, left = {left}, width = {width}"
                );
            }
        }
    }

    #[test]
    fn updates_ignored_while_idle() {
        let mut s = SliderState::default();
        s.update(PointerSample { x: 300.0 }, bounds(100.0, 200.0));
        assert_eq!(s.position(), 50.0);
    }

    #[test]
    fn zero_width_container_is_a_no_op() {
        let mut s = dragging_at_default();
        s.update(PointerSample { x: 300.0 }, bounds(100.0, 0.0));
        assert_eq!(s.position(), 50.0);
    }

    #[test]
    fn missing_bounds_is_a_no_op() {
        let mut s = dragging_at_default();
        s.update(PointerSample { x: 300.0 }, None);
        assert_eq!(s.position(), 50.0);
    }

    #[test]
    fn press_then_immediate_release_keeps_position() {
        let mut s = SliderState::default();
        s.begin_drag();
        s.end_drag();
        assert_eq!(s.position(), 50.0);
        assert!(!s.dragging());
    }

    #[test]
    fn end_drag_is_idempotent() {
        let mut s = SliderState::default();
        s.end_drag();
        s.end_drag();
        assert!(!s.dragging());
        assert_eq!(s.position(), 50.0);
    }

    #[test]
    fn moves_after_release_have_no_effect() {
        let mut s = dragging_at_default();
        s.update(PointerSample { x: 250.0 }, bounds(100.0, 200.0));
        assert_eq!(s.position(), 75.0);
        s.end_drag();
        s.update(PointerSample { x: 100.0 }, bounds(100.0, 200.0));
        assert_eq!(s.position(), 75.0);
    }

    #[test]
    fn full_drag_gesture() {
        let b = bounds(100.0, 200.0);
        let mut s = SliderState::default();
        s.begin_drag();
        assert!(s.dragging());

        s.update(PointerSample { x: 100.0 }, b);
        assert_eq!(s.position(), 0.0);

        s.update(PointerSample { x: 200.0 }, b);
        assert_eq!(s.position(), 50.0);

        // Raw value would be 150%; saturates at the right edge.
        s.update(PointerSample { x: 400.0 }, b);
        assert_eq!(s.position(), 100.0);

        s.end_drag();
        assert!(!s.dragging());
        assert_eq!(s.position(), 100.0);
    }
}
