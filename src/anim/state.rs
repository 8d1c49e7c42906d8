use std::f64::consts::PI;
use std::fmt::Write;

/// The animatable visual properties of a single element.
///
/// Offsets are in CSS pixels, `opacity` is clamped to `0..=1` when rendered and
/// `scale_y` is a plain factor (the timeline line grows from `0` to `1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale_y: f64,
}

impl VisualState {
    /// Fully visible, no offset. Every entrance ends here.
    pub const SETTLED: VisualState = VisualState {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
        scale_y: 1.0,
    };

    /// Invisible but otherwise in place.
    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::SETTLED
        }
    }

    pub const fn offset_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub const fn offset_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn scale_y(self, scale_y: f64) -> Self {
        Self { scale_y, ..self }
    }

    pub fn is_settled(&self) -> bool {
        *self == Self::SETTLED
    }

    /// Linear interpolation between two states at progress `t` (already eased).
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            opacity: mix(self.opacity, to.opacity),
            scale_y: mix(self.scale_y, to.scale_y),
        }
    }

    /// CSS `transform` value for this state.
    pub fn transform(&self) -> String {
        let mut out = format!("translate({}px, {}px)", self.x, self.y);
        if self.scale_y != 1.0 {
            let _ = write!(out, " scaleY({})", self.scale_y);
        }
        out
    }

    /// CSS `opacity` value for this state.
    pub fn opacity_css(&self) -> String {
        self.opacity.clamp(0.0, 1.0).to_string()
    }

    /// Inline `style` attribute, used to bake the pre-entry state into server markup.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: {};",
            self.opacity_css(),
            self.transform()
        )
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::SETTLED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Power2Out,
    Power3Out,
    SineInOut,
}

impl Easing {
    pub fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// CSS timing function approximating the curve.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)",
            Easing::SineInOut => "cubic-bezier(0.37, 0, 0.63, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Power2Out,
            Easing::Power3Out,
            Easing::SineInOut,
        ] {
            assert!(easing.ease(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.ease(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
            // out of range input is clamped
            assert!((easing.ease(2.0) - 1.0).abs() < 1e-9);
        }
        // ease-out curves run ahead of linear
        assert!(Easing::Power3Out.ease(0.5) > Easing::Power2Out.ease(0.5));
        assert!(Easing::Power2Out.ease(0.5) > 0.5);
    }

    #[test]
    fn test_state_css() {
        let state = VisualState::hidden().offset_y(50.0);
        assert_eq!(state.to_css(), "opacity: 0; transform: translate(0px, 50px);");

        let line = VisualState::SETTLED.scale_y(0.0);
        assert_eq!(line.transform(), "translate(0px, 0px) scaleY(0)");
        assert!(!line.is_settled());
        assert!(VisualState::default().is_settled());
    }

    #[test]
    fn test_lerp() {
        let from = VisualState::hidden().offset_x(-50.0);
        let mid = from.lerp(&VisualState::SETTLED, 0.5);
        assert_eq!(mid.x, -25.0);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(from.lerp(&VisualState::SETTLED, 1.0), VisualState::SETTLED);
    }
}
