use log::debug;
use rand::Rng;
use studio_engine::paint::Color;

use crate::clipboard::{Clipboard, ClipboardError, Notifier};
use crate::color;
use crate::gradient::GradientDirection;

/// What the window background shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(String),
    Linear { direction: GradientDirection, stops: [String; 2] },
}

impl Background {
    /// CSS `background` value for this background.
    pub fn to_css(&self) -> String {
        match self {
            Background::Solid(c) => c.clone(),
            Background::Linear { direction, stops } => {
                format!("linear-gradient({}, {})", direction.as_css(), stops.join(", "))
            }
        }
    }
}

/// All state of the studio window.
///
/// Colors are kept as the strings they were set with; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStudio {
    color: String,
    gradient_enabled: bool,
    gradient_stops: [String; 2],
    gradient_direction: GradientDirection,
    favorites: Vec<String>,
    dark_mode: bool,
}

impl Default for ColorStudio {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            gradient_enabled: false,
            gradient_stops: ["#FF0000".to_string(), "#00FF00".to_string()],
            gradient_direction: GradientDirection::ToRight,
            favorites: Vec::new(),
            dark_mode: false,
        }
    }
}

impl ColorStudio {
    pub fn new() -> Self {
        Self::default()
    }

    // ── reads ─────────────────────────────────────────────────────────────

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn gradient_enabled(&self) -> bool {
        self.gradient_enabled
    }

    pub fn gradient_stops(&self) -> &[String; 2] {
        &self.gradient_stops
    }

    pub fn gradient_direction(&self) -> GradientDirection {
        self.gradient_direction
    }

    /// Saved colors in the order they were added.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn background(&self) -> Background {
        if self.gradient_enabled {
            Background::Linear { direction: self.gradient_direction, stops: self.gradient_stops.clone() }
        } else {
            Background::Solid(self.color.clone())
        }
    }

    pub fn background_css(&self) -> String {
        self.background().to_css()
    }

    /// Foreground color: white in dark mode, black otherwise.
    pub fn text_color(&self) -> Color {
        if self.dark_mode { Color::WHITE } else { Color::BLACK }
    }

    // ── operations ────────────────────────────────────────────────────────

    pub fn set_color(&mut self, value: impl Into<String>) {
        self.color = value.into();
        debug!("color set to {}", self.color);
    }

    /// Replaces the current color with a random one and returns it.
    pub fn randomize_color(&mut self, rng: &mut impl Rng) -> String {
        let value = color::random_hex(rng);
        self.set_color(value.clone());
        value
    }

    pub fn toggle_gradient(&mut self) {
        self.gradient_enabled = !self.gradient_enabled;
        debug!("gradient {}", if self.gradient_enabled { "enabled" } else { "disabled" });
    }

    /// Replaces stop `index` (0 or 1). Other indices are ignored.
    pub fn set_gradient_stop(&mut self, index: usize, value: impl Into<String>) {
        match self.gradient_stops.get_mut(index) {
            Some(stop) => {
                *stop = value.into();
                debug!("gradient stop {index} set to {stop}");
            }
            None => debug!("ignoring gradient stop index {index}"),
        }
    }

    pub fn set_gradient_direction(&mut self, direction: GradientDirection) {
        self.gradient_direction = direction;
        debug!("gradient direction set to {direction}");
    }

    /// Saves the current color unless it is already a favorite. Returns
    /// whether it was added.
    pub fn add_favorite(&mut self) -> bool {
        if self.favorites.contains(&self.color) {
            return false;
        }
        self.favorites.push(self.color.clone());
        debug!("favorite added: {}", self.color);
        true
    }

    /// Writes the current color to `clipboard`, then tells the user
    /// `Copied: <color>` whatever the outcome of the write.
    pub fn copy_color(
        &self,
        clipboard: &mut impl Clipboard,
        notifier: &mut impl Notifier,
    ) -> Result<String, ClipboardError> {
        let written = clipboard.set_text(&self.color);
        notifier.notify(&format!("Copied: {}", self.color));
        written.map(|()| self.color.clone())
    }

    pub fn select_favorite(&mut self, value: impl Into<String>) {
        self.set_color(value);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!("dark mode {}", if self.dark_mode { "on" } else { "off" });
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::clipboard::{MemoryClipboard, RecordingNotifier};

    #[test]
    fn defaults() {
        let s = ColorStudio::new();
        assert_eq!(s.color(), "#000000");
        assert!(!s.gradient_enabled());
        assert_eq!(s.gradient_stops(), &["#FF0000".to_string(), "#00FF00".to_string()]);
        assert_eq!(s.gradient_direction(), GradientDirection::ToRight);
        assert!(s.favorites().is_empty());
        assert!(!s.dark_mode());
        assert_eq!(s.background_css(), "#000000");
    }

    #[test]
    fn set_color_is_read_back_verbatim() {
        let mut s = ColorStudio::new();
        for v in ["#abcdef", "#ABCDEF", "#fff", "#0", "not a color"] {
            s.set_color(v);
            assert_eq!(s.color(), v);
        }
    }

    #[test]
    fn randomize_color_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut s = ColorStudio::new();
        for _ in 0..500 {
            let v = s.randomize_color(&mut rng);
            assert_eq!(s.color(), v);
            let digits = v.strip_prefix('#').expect("leading #");
            assert!((1..=6).contains(&digits.len()));
            assert!(digits.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn toggle_gradient_twice_restores() {
        let mut s = ColorStudio::new();
        s.toggle_gradient();
        assert!(s.gradient_enabled());
        s.toggle_gradient();
        assert!(!s.gradient_enabled());
    }

    #[test]
    fn set_gradient_stop_changes_only_that_index() {
        let mut s = ColorStudio::new();
        s.set_gradient_stop(0, "#111111");
        assert_eq!(s.gradient_stops(), &["#111111".to_string(), "#00FF00".to_string()]);
        s.set_gradient_stop(1, "#222222");
        assert_eq!(s.gradient_stops()[0], "#111111");
        assert_eq!(s.gradient_stops()[1], "#222222");
    }

    #[test]
    fn out_of_range_stop_is_ignored() {
        let mut s = ColorStudio::new();
        let before = s.clone();
        s.set_gradient_stop(2, "#333333");
        assert_eq!(s, before);
    }

    #[test]
    fn gradient_scenario() {
        let mut s = ColorStudio::new();
        s.toggle_gradient();
        assert_eq!(s.background_css(), "linear-gradient(to right, #FF0000, #00FF00)");
        s.set_gradient_direction(GradientDirection::ToBottom);
        assert_eq!(s.background_css(), "linear-gradient(to bottom, #FF0000, #00FF00)");
        assert_eq!(
            s.background(),
            Background::Linear {
                direction: GradientDirection::ToBottom,
                stops: ["#FF0000".to_string(), "#00FF00".to_string()],
            }
        );
    }

    #[test]
    fn parsed_direction_feeds_setter() {
        let mut s = ColorStudio::new();
        if let Some(d) = GradientDirection::parse("to top left") {
            s.set_gradient_direction(d);
        }
        assert_eq!(s.gradient_direction(), GradientDirection::ToTopLeft);
        assert_eq!(GradientDirection::parse("sideways"), None);
    }

    #[test]
    fn favorites_reject_duplicates() {
        let mut s = ColorStudio::new();
        s.set_color("#abcdef");
        assert!(s.add_favorite());
        assert_eq!(s.favorites(), ["#abcdef"]);
        assert!(!s.add_favorite());
        assert_eq!(s.favorites(), ["#abcdef"]);
    }

    #[test]
    fn favorites_keep_insertion_order_and_exact_match() {
        let mut s = ColorStudio::new();
        for c in ["#222222", "#111111", "#ABCDEF", "#abcdef"] {
            s.set_color(c);
            s.add_favorite();
        }
        assert_eq!(s.favorites(), ["#222222", "#111111", "#ABCDEF", "#abcdef"]);
    }

    #[test]
    fn select_favorite_sets_color_only() {
        let mut s = ColorStudio::new();
        s.set_color("#123456");
        s.add_favorite();
        s.set_color("#654321");
        s.select_favorite("#123456");
        assert_eq!(s.color(), "#123456");
        assert_eq!(s.favorites(), ["#123456"]);
    }

    #[test]
    fn copy_color_writes_then_notifies() {
        let mut s = ColorStudio::new();
        s.set_color("#abcdef");
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = RecordingNotifier::default();
        assert_eq!(s.copy_color(&mut clipboard, &mut notifier), Ok("#abcdef".to_string()));
        assert_eq!(clipboard.text.as_deref(), Some("#abcdef"));
        assert_eq!(notifier.messages, ["Copied: #abcdef"]);
    }

    #[test]
    fn copy_color_notifies_even_when_write_fails() {
        let s = ColorStudio::new();
        let mut clipboard = MemoryClipboard { fail: true, ..Default::default() };
        let mut notifier = RecordingNotifier::default();
        assert!(s.copy_color(&mut clipboard, &mut notifier).is_err());
        assert_eq!(notifier.messages, ["Copied: #000000"]);
    }

    #[test]
    fn dark_mode_switches_text_color() {
        let mut s = ColorStudio::new();
        assert_eq!(s.text_color(), Color::BLACK);
        s.toggle_dark_mode();
        assert_eq!(s.text_color(), Color::WHITE);
        s.toggle_dark_mode();
        assert_eq!(s.text_color(), Color::BLACK);
    }
}
