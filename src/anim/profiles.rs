//! Entrance timelines for each section of the page.
//!
//! Selectors are class names the section components put on their elements, so
//! the same data drives both the server-rendered pre-entry styles and the
//! browser-side sequence.

use super::state::{Easing, VisualState};
use super::timeline::AnimationStep;
use super::visibility::ObserverOptions;

#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Fire as soon as the section mounts.
    Mount,
    /// Fire the first time the section becomes visible.
    Visible(ObserverOptions),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionProfile {
    pub name: &'static str,
    pub trigger: Trigger,
    pub steps: Vec<AnimationStep>,
}

impl SectionProfile {
    /// Inline style for elements of `selector` before the entrance runs.
    ///
    /// Falls back to the settled state for unknown selectors so nothing is hidden by mistake.
    pub fn pre_entry_style(&self, selector: &str) -> String {
        self.steps
            .iter()
            .find(|step| step.selector == selector)
            .map(|step| step.from)
            .unwrap_or(VisualState::SETTLED)
            .to_css()
    }
}

fn rise(y: f64) -> VisualState {
    VisualState::hidden().offset_y(y)
}

fn slide(x: f64) -> VisualState {
    VisualState::hidden().offset_x(x)
}

pub fn navbar() -> SectionProfile {
    SectionProfile {
        name: "navbar",
        trigger: Trigger::Mount,
        steps: vec![AnimationStep::new(".nav-item")
            .from(rise(-10.0))
            .duration(0.5)
            .stagger(0.05)],
    }
}

pub fn hero() -> SectionProfile {
    SectionProfile {
        name: "hero",
        trigger: Trigger::Mount,
        steps: vec![
            AnimationStep::new(".hero-title")
                .from(rise(50.0))
                .duration(0.8)
                .easing(Easing::Power3Out),
            AnimationStep::new(".hero-subtitle")
                .from(rise(30.0))
                .duration(0.6)
                .easing(Easing::Power3Out)
                .offset(-0.3),
            AnimationStep::new(".hero-description")
                .from(rise(20.0))
                .duration(0.6)
                .easing(Easing::Power3Out)
                .offset(-0.3),
            AnimationStep::new(".hero-button")
                .from(rise(20.0))
                .duration(0.4)
                .easing(Easing::Power3Out)
                .stagger(0.1)
                .offset(-0.3),
            AnimationStep::new(".hero-social")
                .from(slide(-10.0))
                .duration(0.4)
                .easing(Easing::Power3Out)
                .stagger(0.1)
                .offset(-0.2),
        ],
    }
}

pub fn about() -> SectionProfile {
    SectionProfile {
        name: "about",
        trigger: Trigger::Visible(ObserverOptions::default()),
        steps: vec![
            AnimationStep::new(".section-title")
                .from(rise(50.0))
                .duration(0.6),
            AnimationStep::new(".about-content")
                .from(rise(50.0))
                .duration(0.6)
                .at(0.2),
            AnimationStep::new(".about-image")
                .from(slide(50.0))
                .duration(0.6)
                .at(0.3),
        ],
    }
}

pub fn skills() -> SectionProfile {
    SectionProfile {
        name: "skills",
        trigger: Trigger::Visible(ObserverOptions::default()),
        steps: vec![
            AnimationStep::new(".skills-title")
                .from(rise(50.0))
                .duration(0.6),
            AnimationStep::new(".skill-card")
                .from(rise(50.0))
                .duration(0.5)
                .stagger(0.05)
                .at(0.2),
        ],
    }
}

pub fn projects() -> SectionProfile {
    SectionProfile {
        name: "projects",
        trigger: Trigger::Visible(ObserverOptions::default()),
        steps: vec![
            AnimationStep::new(".projects-title")
                .from(rise(50.0))
                .duration(0.6),
            AnimationStep::new(".project-card")
                .from(rise(50.0))
                .duration(0.5)
                .stagger(0.05)
                .at(0.2),
        ],
    }
}

pub fn timeline() -> SectionProfile {
    SectionProfile {
        name: "timeline",
        trigger: Trigger::Visible(ObserverOptions::default()),
        steps: vec![
            AnimationStep::new(".timeline-title")
                .from(rise(50.0))
                .duration(0.6),
            AnimationStep::new(".timeline-item")
                .from(rise(50.0))
                .duration(0.5)
                .stagger(0.1)
                .at(0.2),
            AnimationStep::new(".timeline-line")
                .from(VisualState::SETTLED.scale_y(0.0))
                .duration(1.0)
                .at(0.0),
        ],
    }
}

pub fn contact() -> SectionProfile {
    SectionProfile {
        name: "contact",
        trigger: Trigger::Visible(
            ObserverOptions::default()
                .threshold(0.0)
                .root_margin("0px 0px -20% 0px"),
        ),
        steps: vec![
            AnimationStep::new(".contact-title")
                .from(rise(50.0))
                .duration(0.8)
                .easing(Easing::Power3Out),
            AnimationStep::new(".contact-info")
                .from(slide(-50.0))
                .duration(0.8)
                .easing(Easing::Power3Out)
                .at(0.0),
            AnimationStep::new(".contact-form")
                .from(slide(50.0))
                .duration(0.8)
                .easing(Easing::Power3Out)
                .at(0.0),
        ],
    }
}

pub fn footer() -> SectionProfile {
    SectionProfile {
        name: "footer",
        trigger: Trigger::Mount,
        steps: vec![AnimationStep::new(".footer-content")
            .from(rise(20.0))
            .duration(0.8)
            .easing(Easing::Power3Out)],
    }
}

/// Every profile, in page order.
pub fn all() -> Vec<SectionProfile> {
    vec![
        navbar(),
        hero(),
        about(),
        skills(),
        projects(),
        timeline(),
        contact(),
        footer(),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_step_ends_settled_from_a_visible_change() {
        for profile in all() {
            assert!(!profile.steps.is_empty(), "{} has no steps", profile.name);
            for step in &profile.steps {
                assert!(step.to.is_settled(), "{} {}", profile.name, step.selector);
                assert!(!step.from.is_settled(), "{} {}", profile.name, step.selector);
                assert!(step.duration > 0.0);
            }
        }
    }

    #[test]
    fn test_selectors_unique_per_profile() {
        for profile in all() {
            let selectors = profile.steps.iter().map(|s| s.selector).collect::<HashSet<_>>();
            assert_eq!(selectors.len(), profile.steps.len(), "{}", profile.name);
        }
    }

    #[test]
    fn test_observed_sections() {
        let observed = all()
            .into_iter()
            .filter(|p| matches!(p.trigger, Trigger::Visible(_)))
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(observed, ["about", "skills", "projects", "timeline", "contact"]);
    }

    #[test]
    fn test_pre_entry_style() {
        let profile = skills();
        assert_eq!(
            profile.pre_entry_style(".skill-card"),
            "opacity: 0; transform: translate(0px, 50px);"
        );
        assert_eq!(
            timeline().pre_entry_style(".timeline-line"),
            "opacity: 1; transform: translate(0px, 0px) scaleY(0);"
        );
        assert_eq!(
            profile.pre_entry_style(".missing"),
            VisualState::SETTLED.to_css()
        );
    }

    #[test]
    fn test_hero_sequence_overlaps() {
        let timeline = crate::anim::Timeline::new(hero().steps);
        let counts = |s: &str| match s {
            ".hero-button" => 3,
            ".hero-social" => 3,
            _ => 1,
        };
        let tweens = timeline.schedule(counts);
        assert_eq!(tweens.len(), 9);
        for pair in tweens.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
        // title 0.8, then four steps each pulled back into the previous one
        let total = timeline.total_duration(counts);
        assert!((total - 2.1).abs() < 1e-9, "{total}");
    }
}
