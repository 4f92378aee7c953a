//! Gesture Classification
//!
//! Pure functions that turn a press/release pair or a key into an intent.
//! No DOM access here, so everything is unit tested natively.

/// Direction a card leaves the screen in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Next card (swipe left / ArrowLeft)
    Forward,
    /// Previous card (swipe right / ArrowRight)
    Backward,
}

impl Direction {
    /// CSS class that plays the matching fly-out animation
    pub fn swipe_class(&self) -> &'static str {
        match self {
            Direction::Forward => "swipe-left",
            Direction::Backward => "swipe-right",
        }
    }
}

/// A classified user action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Flip,
    Navigate(Direction),
}

/// Position and timestamp of a pointer at press or release
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    /// Milliseconds, any monotonic origin
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self { x, y, time_ms }
    }
}

/// Thresholds for the gesture interpreter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Translate and tilt the card while it is dragged
    pub live_drag_feedback: bool,
    /// A tap must be released before this many ms
    pub tap_max_ms: f64,
    /// A tap must stay within this many px on both axes
    pub tap_max_move_px: f64,
    /// Horizontal distance (fraction of viewport width) that counts as a swipe
    pub swipe_width_fraction: f64,
    /// Horizontal speed in px/ms that counts as a swipe
    pub swipe_min_velocity: f64,
    /// Drag offset clamp (fraction of viewport width)
    pub max_drag_fraction: f64,
    /// Tilt at the clamped offset
    pub max_tilt_deg: f64,
    /// Mouse presses this soon after a touch release are the browser's
    /// emulated mouse events for the same tap
    pub emulated_mouse_window_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            live_drag_feedback: true,
            tap_max_ms: 250.0,
            tap_max_move_px: 20.0,
            swipe_width_fraction: 0.15,
            swipe_min_velocity: 0.5,
            max_drag_fraction: 0.4,
            max_tilt_deg: 15.0,
            emulated_mouse_window_ms: 800.0,
        }
    }
}

/// Visual offset applied to a card during a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTransform {
    pub offset_px: f64,
    pub tilt_deg: f64,
}

impl DragTransform {
    pub fn to_css(&self) -> String {
        format!("translateX({}px) rotate({}deg)", self.offset_px, self.tilt_deg)
    }
}

impl GestureConfig {
    /// Classify a completed press/release pair.
    ///
    /// Returns `None` for ambiguous gestures, which are discarded.
    pub fn classify(&self, press: PointerSample, release: PointerSample, viewport_width: f64) -> Option<Intent> {
        let elapsed = release.time_ms - press.time_ms;
        let dx = release.x - press.x;
        let move_x = dx.abs();
        let move_y = (release.y - press.y).abs();

        if elapsed < self.tap_max_ms && move_x < self.tap_max_move_px && move_y < self.tap_max_move_px {
            return Some(Intent::Flip);
        }

        let velocity = move_x / elapsed;
        let swipe_threshold = viewport_width * self.swipe_width_fraction;
        if move_x > swipe_threshold || velocity > self.swipe_min_velocity {
            let direction = if dx < 0.0 { Direction::Forward } else { Direction::Backward };
            return Some(Intent::Navigate(direction));
        }

        None
    }

    /// Whether a mouse press at `now_ms` should be ignored because a touch
    /// was released just before it
    pub fn is_emulated_mouse(&self, last_touch_release_ms: Option<f64>, now_ms: f64) -> bool {
        last_touch_release_ms.is_some_and(|released| {
            let since = now_ms - released;
            (0.0..self.emulated_mouse_window_ms).contains(&since)
        })
    }

    /// Offset and tilt for a card dragged `dx` px horizontally
    pub fn drag_transform(&self, dx: f64, viewport_width: f64) -> DragTransform {
        let max_drag = viewport_width * self.max_drag_fraction;
        if max_drag <= 0.0 {
            return DragTransform { offset_px: 0.0, tilt_deg: 0.0 };
        }
        let offset_px = dx.clamp(-max_drag, max_drag);
        DragTransform {
            offset_px,
            tilt_deg: offset_px / max_drag * self.max_tilt_deg,
        }
    }
}

/// Keys that map directly to intents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: &'static str,
    pub backward: &'static str,
    pub flip: &'static str,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "ArrowLeft",
            backward: "ArrowRight",
            flip: " ",
        }
    }
}

impl KeyBindings {
    pub fn intent_for(&self, key: &str) -> Option<Intent> {
        if key == self.forward {
            Some(Intent::Navigate(Direction::Forward))
        } else if key == self.backward {
            Some(Intent::Navigate(Direction::Backward))
        } else if key == self.flip {
            Some(Intent::Flip)
        } else {
            None
        }
    }
}

/// Whether a focused element with this tag name takes text input
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 1000.0;

    fn gesture(elapsed: f64, dx: f64, dy: f64) -> Option<Intent> {
        let press = PointerSample::new(500.0, 300.0, 1_000.0);
        let release = PointerSample::new(500.0 + dx, 300.0 + dy, 1_000.0 + elapsed);
        GestureConfig::default().classify(press, release, WIDTH)
    }

    #[test]
    fn test_short_tap_flips() {
        assert_eq!(gesture(100.0, 5.0, 3.0), Some(Intent::Flip));
    }

    #[test]
    fn test_long_press_without_movement_is_discarded() {
        assert_eq!(gesture(400.0, 10.0, 10.0), None);
    }

    #[test]
    fn test_distance_swipe_direction_follows_sign() {
        assert_eq!(gesture(400.0, -0.2 * WIDTH, 0.0), Some(Intent::Navigate(Direction::Forward)));
        assert_eq!(gesture(400.0, 0.2 * WIDTH, 0.0), Some(Intent::Navigate(Direction::Backward)));
    }

    #[test]
    fn test_fast_flick_navigates_below_distance_threshold() {
        // 60px in 100ms = 0.6 px/ms, under 15% of width
        assert_eq!(gesture(100.0, -60.0, 0.0), Some(Intent::Navigate(Direction::Forward)));
    }

    #[test]
    fn test_quick_vertical_move_is_not_a_tap() {
        assert_eq!(gesture(100.0, 0.0, 40.0), None);
    }

    #[test]
    fn test_drag_transform_clamps_and_tilts() {
        let config = GestureConfig::default();
        let t = config.drag_transform(1_000.0, WIDTH);
        assert_eq!(t.offset_px, 400.0);
        assert_eq!(t.tilt_deg, 15.0);

        let t = config.drag_transform(-200.0, WIDTH);
        assert_eq!(t.offset_px, -200.0);
        assert_eq!(t.tilt_deg, -7.5);
        assert_eq!(t.to_css(), "translateX(-200px) rotate(-7.5deg)");
    }

    #[test]
    fn test_mouse_press_right_after_touch_is_ignored() {
        let config = GestureConfig::default();
        // tap released at t=1000, emulated mousedown follows within the window
        assert!(config.is_emulated_mouse(Some(1_000.0), 1_010.0));
        assert!(config.is_emulated_mouse(Some(1_000.0), 1_000.0));
        assert!(!config.is_emulated_mouse(Some(1_000.0), 1_000.0 + config.emulated_mouse_window_ms));
        assert!(!config.is_emulated_mouse(None, 1_010.0));
    }

    #[test]
    fn test_tap_then_emulated_mouse_flips_once() {
        let config = GestureConfig::default();
        let mut flips = 0;

        // touch tap
        let press = PointerSample::new(200.0, 200.0, 1_000.0);
        let release = PointerSample::new(200.0, 200.0, 1_080.0);
        if config.classify(press, release, WIDTH) == Some(Intent::Flip) {
            flips += 1;
        }
        let last_touch_release = Some(release.time_ms);

        // emulated mousedown/mouseup at the same point
        let mouse_press = PointerSample::new(200.0, 200.0, 1_090.0);
        let mouse_release = PointerSample::new(200.0, 200.0, 1_095.0);
        if !config.is_emulated_mouse(last_touch_release, mouse_press.time_ms)
            && config.classify(mouse_press, mouse_release, WIDTH) == Some(Intent::Flip)
        {
            flips += 1;
        }
        assert_eq!(flips, 1);
    }

    #[test]
    fn test_key_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.intent_for("ArrowLeft"), Some(Intent::Navigate(Direction::Forward)));
        assert_eq!(keys.intent_for("ArrowRight"), Some(Intent::Navigate(Direction::Backward)));
        assert_eq!(keys.intent_for(" "), Some(Intent::Flip));
        assert_eq!(keys.intent_for("Enter"), None);
    }

    #[test]
    fn test_text_entry_tags() {
        assert!(is_text_entry("INPUT"));
        assert!(is_text_entry("TEXTAREA"));
        assert!(!is_text_entry("BODY"));
    }
}
