use std::time::Duration;

use super::state::{Easing, VisualState};

/// Where a step starts on its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Relative to the current end of the timeline; negative values overlap the previous step.
    Offset(f64),
    /// Absolute, in seconds from the moment the sequence fires.
    At(f64),
}

impl Default for Position {
    fn default() -> Self {
        Position::Offset(0.0)
    }
}

/// One declared tween of a section's entrance: every element matching `selector`
/// goes from `from` to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStep {
    pub selector: &'static str,
    pub from: VisualState,
    pub to: VisualState,
    pub duration: f64,
    pub easing: Easing,
    pub position: Position,
    pub stagger: Option<f64>,
}

impl AnimationStep {
    pub fn new(selector: &'static str) -> Self {
        Self {
            selector,
            from: VisualState::hidden(),
            to: VisualState::SETTLED,
            duration: 0.5,
            easing: Easing::default(),
            position: Position::default(),
            stagger: None,
        }
    }

    pub fn from(mut self, state: VisualState) -> Self {
        self.from = state;
        self
    }

    pub fn to(mut self, state: VisualState) -> Self {
        self.to = state;
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start `secs` after (or, when negative, before) the end of the previous step.
    pub fn offset(mut self, secs: f64) -> Self {
        self.position = Position::Offset(secs);
        self
    }

    /// Start at an absolute delay from the moment the sequence fires.
    pub fn at(mut self, secs: f64) -> Self {
        self.position = Position::At(secs);
        self
    }

    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger = Some(secs);
        self
    }

    /// Total span of this step over `count` elements, stagger included.
    pub fn span(&self, count: usize) -> f64 {
        let stagger = self.stagger.unwrap_or(0.0);
        self.duration + stagger * count.saturating_sub(1) as f64
    }
}

/// Timing handed to an engine for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub to: VisualState,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    /// Time from hand-over until the element rests at `to`.
    pub fn finishes_after(&self) -> Duration {
        self.delay + self.duration
    }

    /// CSS `transition` value playing this tween on opacity and transform.
    pub fn transition_css(&self) -> String {
        let timing = format!(
            "{}ms {} {}ms",
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis()
        );
        format!("opacity {timing}, transform {timing}")
    }
}

/// A step resolved onto one matched element.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTween {
    pub step: usize,
    pub selector: &'static str,
    /// Position of the element among the step's matches.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub from: VisualState,
    pub to: VisualState,
    pub easing: Easing,
}

impl ScheduledTween {
    pub fn overlaps(&self, other: &ScheduledTween) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Interpolated state at `t` seconds after the sequence fired.
    pub fn sample(&self, t: f64) -> VisualState {
        let length = self.end - self.start;
        let progress = if length <= 0.0 {
            if t >= self.start {
                1.0
            } else {
                0.0
            }
        } else {
            (t - self.start) / length
        };
        self.from.lerp(&self.to, self.easing.ease(progress))
    }

    pub fn tween(&self) -> Tween {
        Tween {
            from: self.from,
            to: self.to,
            delay: Duration::from_secs_f64(self.start.max(0.0)),
            duration: Duration::from_secs_f64((self.end - self.start).max(0.0)),
            easing: self.easing,
        }
    }
}

/// An ordered list of steps laid out like a tween timeline: steps may overlap
/// through negative offsets and multi-element steps stagger their elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    steps: Vec<AnimationStep>,
}

impl Timeline {
    pub fn new(steps: Vec<AnimationStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }

    /// Lay every step out given how many elements each selector matches.
    ///
    /// Output is in declaration order, elements in match order within a step.
    pub fn schedule<F>(&self, count: F) -> Vec<ScheduledTween>
    where
        F: Fn(&str) -> usize,
    {
        let mut end = 0.0_f64;
        let mut out = Vec::new();
        for (step_index, step) in self.steps.iter().enumerate() {
            let start = match step.position {
                Position::Offset(offset) => (end + offset).max(0.0),
                Position::At(at) => at.max(0.0),
            };
            let stagger = step.stagger.unwrap_or(0.0);
            let matched = count(step.selector);
            for index in 0..matched {
                let element_start = start + index as f64 * stagger;
                out.push(ScheduledTween {
                    step: step_index,
                    selector: step.selector,
                    index,
                    start: element_start,
                    end: element_start + step.duration,
                    from: step.from,
                    to: step.to,
                    easing: step.easing,
                });
            }
            let step_end = if matched == 0 {
                start
            } else {
                start + step.span(matched)
            };
            end = end.max(step_end);
        }
        out
    }

    /// Seconds from fire until the last element settles.
    pub fn total_duration<F>(&self, count: F) -> f64
    where
        F: Fn(&str) -> usize,
    {
        self.schedule(count)
            .iter()
            .map(|t| t.end)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_like() -> Timeline {
        Timeline::new(vec![
            AnimationStep::new(".title")
                .from(VisualState::hidden().offset_y(50.0))
                .duration(0.8),
            AnimationStep::new(".subtitle")
                .from(VisualState::hidden().offset_y(30.0))
                .duration(0.6)
                .offset(-0.3),
            AnimationStep::new(".button")
                .duration(0.4)
                .stagger(0.1)
                .offset(-0.3),
        ])
    }

    fn counts(selector: &str) -> usize {
        match selector {
            ".button" => 3,
            _ => 1,
        }
    }

    #[test]
    fn test_negative_offset_overlaps_previous_step() {
        let tweens = hero_like().schedule(counts);
        assert_eq!(tweens.len(), 5);

        let title = &tweens[0];
        let subtitle = &tweens[1];
        assert_eq!(title.start, 0.0);
        assert_eq!(title.end, 0.8);
        assert!((subtitle.start - 0.5).abs() < 1e-9);
        assert!(subtitle.overlaps(title));

        // buttons start 0.3s before the subtitle ends
        let first_button = &tweens[2];
        assert!((first_button.start - (subtitle.end - 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_stagger_ordering() {
        let s = 0.05;
        let d = 0.5;
        let timeline = Timeline::new(vec![AnimationStep::new(".card").duration(d).stagger(s)]);
        let tweens = timeline.schedule(|_| 8);
        assert_eq!(tweens.len(), 8);
        for (i, tween) in tweens.iter().enumerate() {
            assert_eq!(tween.index, i);
            assert_eq!(tween.start, i as f64 * s);
            assert_eq!(tween.end, i as f64 * s + d);
        }
        // s < d so neighbours overlap
        assert!(tweens[0].overlaps(&tweens[1]));

        let sparse = Timeline::new(vec![AnimationStep::new(".card").duration(0.1).stagger(0.5)]);
        let tweens = sparse.schedule(|_| 2);
        assert!(!tweens[0].overlaps(&tweens[1]));
    }

    #[test]
    fn test_absolute_position_ignores_timeline_end() {
        let timeline = Timeline::new(vec![
            AnimationStep::new(".title").duration(0.6),
            AnimationStep::new(".content").duration(0.6).at(0.2),
            AnimationStep::new(".image").duration(0.6).at(0.3),
        ]);
        let tweens = timeline.schedule(|_| 1);
        assert_eq!(tweens[1].start, 0.2);
        assert_eq!(tweens[2].start, 0.3);
        assert!((timeline.total_duration(|_| 1) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_unmatched_selector_schedules_nothing() {
        let timeline = hero_like();
        let tweens = timeline.schedule(|s| if s == ".subtitle" { 0 } else { 1 });
        assert!(tweens.iter().all(|t| t.selector != ".subtitle"));
        // the missing step still occupies its start, so the button begins at 0.8 - 0.3 - 0.3
        let button = tweens.iter().find(|t| t.selector == ".button").unwrap();
        assert!((button.start - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_sample_and_tween() {
        let tweens = hero_like().schedule(counts);
        let title = &tweens[0];
        assert_eq!(title.sample(0.0), title.from);
        assert_eq!(title.sample(10.0), VisualState::SETTLED);

        let button = &tweens[4];
        let tween = button.tween();
        assert!((tween.duration.as_secs_f64() - 0.4).abs() < 1e-6);
        assert!(tween.delay > Duration::from_secs_f64(0.8));
    }

    #[test]
    fn test_tween_transition_and_finish() {
        let tween = Tween {
            from: VisualState::hidden(),
            to: VisualState::SETTLED,
            delay: Duration::from_millis(200),
            duration: Duration::from_millis(500),
            easing: Easing::Power2Out,
        };
        assert_eq!(tween.finishes_after(), Duration::from_millis(700));
        assert_eq!(
            tween.transition_css(),
            "opacity 500ms cubic-bezier(0.33, 1, 0.68, 1) 200ms, \
             transform 500ms cubic-bezier(0.33, 1, 0.68, 1) 200ms"
        );

        // the last staggered element finishes when the timeline does
        let tweens = hero_like().schedule(counts);
        let latest = tweens.iter().map(|t| t.tween().finishes_after()).max().unwrap();
        let total = hero_like().total_duration(counts);
        assert!((latest.as_secs_f64() - total).abs() < 1e-6);
    }
}
