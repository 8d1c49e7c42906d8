use std::collections::HashMap;

use super::profiles::{SectionProfile, Trigger};
use super::state::VisualState;
use super::timeline::{ScheduledTween, Timeline, Tween};
use super::visibility::{EntranceGuard, ObserverOptions, VisibilityHandle};
use super::AnimError;

/// Something whose visual state can be written, e.g. a DOM element.
pub trait StyleTarget {
    fn apply(&self, state: &VisualState);
}

/// Finds the elements of a section that a step's selector refers to.
pub trait TargetResolver {
    type Target: StyleTarget;

    fn resolve(&self, selector: &str) -> Vec<Self::Target>;
}

/// Supplies the interpolation between two states.
///
/// The sequencer commits `tween.to` onto the target right after `animate`
/// returns, whatever the result, so an engine only has to arrange for that
/// change to be shown gradually.
pub trait AnimationEngine<T> {
    fn animate(&self, target: &T, tween: &Tween) -> Result<(), AnimError>;
}

/// Stand-in for a missing engine: every request degrades to an instant change.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEngine;

impl<T> AnimationEngine<T> for NoEngine {
    fn animate(&self, _target: &T, _tween: &Tween) -> Result<(), AnimError> {
        Err(AnimError::EngineUnavailable)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntranceOutcome {
    Fired {
        tweens: Vec<ScheduledTween>,
        /// Tweens the engine could not animate; they were settled instantly.
        degraded: usize,
    },
    AlreadyFired,
}

impl EntranceOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, EntranceOutcome::Fired { .. })
    }
}

/// Runs a section's entrance timeline at most once per mount.
#[derive(Debug)]
pub struct ViewTriggeredSequencer {
    name: &'static str,
    trigger: Trigger,
    timeline: Timeline,
    guard: EntranceGuard,
}

impl ViewTriggeredSequencer {
    pub fn new(profile: SectionProfile) -> Self {
        Self {
            name: profile.name,
            trigger: profile.trigger,
            timeline: Timeline::new(profile.steps),
            guard: EntranceGuard::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn has_fired(&self) -> bool {
        self.guard.has_fired()
    }

    /// A handle configured from this section's trigger. Mount-triggered
    /// sections get the default options; they never need to observe.
    pub fn attach(&self) -> VisibilityHandle {
        let options = match &self.trigger {
            Trigger::Visible(options) => options.clone(),
            Trigger::Mount => ObserverOptions::default(),
        };
        VisibilityHandle::new(options)
    }

    /// Put every element into its pre-entry state. Returns how many were touched.
    ///
    /// Does nothing once the entrance has fired, so a late mount pass cannot hide content.
    pub fn mount<R: TargetResolver>(&self, resolver: &R) -> usize {
        if self.guard.has_fired() {
            return 0;
        }
        let mut touched = 0;
        for step in self.timeline.steps() {
            for target in resolver.resolve(step.selector) {
                target.apply(&step.from);
                touched += 1;
            }
        }
        touched
    }

    /// Run the entrance. Only the first call per sequencer does anything.
    pub fn enter<R, E>(&mut self, resolver: &R, engine: &E) -> EntranceOutcome
    where
        R: TargetResolver,
        E: AnimationEngine<R::Target> + ?Sized,
    {
        if !self.guard.try_fire() {
            return EntranceOutcome::AlreadyFired;
        }
        let targets = self.resolve_all(resolver);
        let tweens = self.schedule(&targets);
        let mut degraded = 0;
        for tween in &tweens {
            let Some(target) = targets[tween.step].get(tween.index) else {
                continue;
            };
            if let Err(err) = engine.animate(target, &tween.tween()) {
                degraded += 1;
                log::debug!("{}: {} settled without animation: {err}", self.name, tween.selector);
            }
            target.apply(&tween.to);
        }
        log::debug!(
            "{}: entrance fired, {} tweens ({} degraded)",
            self.name,
            tweens.len(),
            degraded
        );
        EntranceOutcome::Fired { tweens, degraded }
    }

    /// Skip the animation and show the settled state, e.g. when the browser
    /// cannot observe visibility at all. Counts as the entrance.
    pub fn settle<R: TargetResolver>(&mut self, resolver: &R) -> EntranceOutcome {
        self.enter(resolver, &NoEngine)
    }

    fn resolve_all<R: TargetResolver>(&self, resolver: &R) -> Vec<Vec<R::Target>> {
        self.timeline
            .steps()
            .iter()
            .map(|step| resolver.resolve(step.selector))
            .collect()
    }

    fn schedule<T>(&self, targets: &[Vec<T>]) -> Vec<ScheduledTween> {
        let counts = self
            .timeline
            .steps()
            .iter()
            .zip(targets)
            .map(|(step, found)| (step.selector, found.len()))
            .collect::<HashMap<_, _>>();
        self.timeline
            .schedule(|selector| counts.get(selector).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::profiles;
    use crate::anim::testing::{FakeSection, RecordingEngine};

    fn skills_section() -> FakeSection {
        FakeSection::new(&[(".skills-title", 1), (".skill-card", 8)])
    }

    #[test]
    fn test_mount_applies_pre_entry_state() {
        let section = skills_section();
        let sequencer = ViewTriggeredSequencer::new(profiles::skills());
        assert_eq!(sequencer.mount(&section), 9);
        for target in section.all() {
            let state = target.current().expect("pre-entry state applied");
            assert_eq!(state.opacity, 0.0);
            assert_ne!(state.y, 0.0);
        }
        assert!(!sequencer.has_fired());
    }

    #[test]
    fn test_enter_runs_exactly_once() {
        let section = skills_section();
        let engine = RecordingEngine::default();
        let mut sequencer = ViewTriggeredSequencer::new(profiles::skills());
        sequencer.mount(&section);

        let first = sequencer.enter(&section, &engine);
        assert!(first.fired());
        assert_eq!(engine.calls(), 9);

        let writes = section.total_writes();
        for _ in 0..3 {
            assert_eq!(sequencer.enter(&section, &engine), EntranceOutcome::AlreadyFired);
        }
        assert_eq!(engine.calls(), 9);
        assert_eq!(section.total_writes(), writes);
        assert!(sequencer.has_fired());

        // remounting after the entrance must not hide content again
        assert_eq!(sequencer.mount(&section), 0);
    }

    #[test]
    fn test_handle_and_sequencer_fire_once_across_reentry() {
        let section = skills_section();
        let engine = RecordingEngine::default();
        let mut sequencer = ViewTriggeredSequencer::new(profiles::skills());
        let mut handle = sequencer.attach();
        sequencer.mount(&section);

        let mut fired = 0;
        for (ratio, intersecting) in [(0.0, false), (0.3, true), (0.0, false), (0.8, true)] {
            if handle.observe(ratio, intersecting).is_some()
                && sequencer.enter(&section, &engine).fired()
            {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(engine.calls(), 9);
    }

    #[test]
    fn test_noop_engine_still_settles() {
        let section = skills_section();
        let engine = RecordingEngine::default();
        let mut sequencer = ViewTriggeredSequencer::new(profiles::skills());
        sequencer.mount(&section);
        sequencer.enter(&section, &engine);
        for target in section.all() {
            assert_eq!(target.current(), Some(VisualState::SETTLED));
        }
    }

    #[test]
    fn test_missing_engine_degrades_to_settled() {
        let section = FakeSection::new(&[
            (".timeline-title", 1),
            (".timeline-item", 3),
            (".timeline-line", 1),
        ]);
        let mut sequencer = ViewTriggeredSequencer::new(profiles::timeline());
        sequencer.mount(&section);
        let line = &section.targets(".timeline-line")[0];
        assert_eq!(line.current().map(|s| s.scale_y), Some(0.0));

        match sequencer.enter(&section, &NoEngine) {
            EntranceOutcome::Fired { tweens, degraded } => {
                assert_eq!(tweens.len(), 5);
                assert_eq!(degraded, 5);
            }
            EntranceOutcome::AlreadyFired => panic!("first entrance must fire"),
        }
        for target in section.all() {
            assert_eq!(target.current(), Some(VisualState::SETTLED));
        }
    }

    #[test]
    fn test_settle_counts_as_entrance() {
        let section = skills_section();
        let engine = RecordingEngine::default();
        let mut sequencer = ViewTriggeredSequencer::new(profiles::skills());
        sequencer.mount(&section);
        assert!(sequencer.settle(&section).fired());
        assert!(!sequencer.enter(&section, &engine).fired());
        assert_eq!(engine.calls(), 0);
    }

    #[test]
    fn test_engine_receives_staggered_timing() {
        let section = skills_section();
        let engine = RecordingEngine::default();
        let mut sequencer = ViewTriggeredSequencer::new(profiles::skills());
        sequencer.enter(&section, &engine);

        let cards = engine
            .tweens()
            .into_iter()
            .filter(|t| t.from.y == 50.0 && t.duration.as_secs_f64() < 0.55)
            .collect::<Vec<_>>();
        assert_eq!(cards.len(), 8);
        for pair in cards.windows(2) {
            assert!(pair[0].delay < pair[1].delay);
        }
    }

    #[test]
    fn test_attach_uses_trigger_options() {
        let sequencer = ViewTriggeredSequencer::new(profiles::contact());
        let handle = sequencer.attach();
        assert_eq!(handle.options().root_margin, "0px 0px -20% 0px");

        let hero = ViewTriggeredSequencer::new(profiles::hero());
        assert_eq!(hero.trigger(), &Trigger::Mount);
    }
}
