use crate::config::REVEAL_TRANSITION;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// How an element enters once it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationStyle {
    #[default]
    FadeUp,
    /// Starts 40px to the right and travels left. Named for the direction of
    /// travel, not the side it starts on.
    FadeLeft,
    /// Starts 40px to the left and travels right.
    FadeRight,
    FadeIn,
    ScaleIn,
}

impl AnimationStyle {
    /// Transform applied while the element is still hidden.
    pub fn hidden_transform(self) -> &'static str {
        match self {
            AnimationStyle::FadeUp => "translateY(40px)",
            AnimationStyle::FadeLeft => "translateX(40px)",
            AnimationStyle::FadeRight => "translateX(-40px)",
            AnimationStyle::ScaleIn => "scale(0.9)",
            AnimationStyle::FadeIn => "none",
        }
    }
}

/// Per-attachment settings. Fixed once the controller is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub style: AnimationStyle,
    pub delay_ms: u32,
    threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            style: AnimationStyle::default(),
            delay_ms: 0,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RevealConfig {
    pub fn new(style: AnimationStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Visible fraction needed to trigger, clamped into `[0, 1]`. NaN keeps the default.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn visibility_threshold(&self) -> f64 {
        self.threshold
    }

    pub fn hidden_styles(&self) -> [(&'static str, String); 4] {
        [
            ("opacity", "0".to_string()),
            ("transform", self.style.hidden_transform().to_string()),
            ("transition", REVEAL_TRANSITION.to_string()),
            ("transition-delay", format!("{}ms", self.delay_ms)),
        ]
    }

    pub fn revealed_styles(&self) -> [(&'static str, String); 2] {
        [
            ("opacity", "1".to_string()),
            ("transform", "none".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.style, AnimationStyle::FadeUp);
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.visibility_threshold(), 0.1);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealConfig::default().threshold(1.5).visibility_threshold(), 1.0);
        assert_eq!(RevealConfig::default().threshold(-0.2).visibility_threshold(), 0.0);
        assert_eq!(RevealConfig::default().threshold(f64::NAN).visibility_threshold(), 0.1);
        assert_eq!(RevealConfig::default().threshold(0.25).visibility_threshold(), 0.25);
    }

    #[test]
    fn hidden_offsets_per_style() {
        let cases = [
            (AnimationStyle::FadeUp, "translateY(40px)"),
            (AnimationStyle::FadeLeft, "translateX(40px)"),
            (AnimationStyle::FadeRight, "translateX(-40px)"),
            (AnimationStyle::ScaleIn, "scale(0.9)"),
            (AnimationStyle::FadeIn, "none"),
        ];
        for (style, transform) in cases {
            let styles = RevealConfig::new(style).hidden_styles();
            assert_eq!(styles[0], ("opacity", "0".to_string()));
            assert_eq!(styles[1], ("transform", transform.to_string()));
        }
    }

    #[test]
    fn delay_applies_to_both_transitions() {
        let styles = RevealConfig::new(AnimationStyle::FadeIn).delay_ms(250).hidden_styles();
        assert_eq!(
            styles[2],
            ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out".to_string())
        );
        assert_eq!(styles[3], ("transition-delay", "250ms".to_string()));
    }
}
