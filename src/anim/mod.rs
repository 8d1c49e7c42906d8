//! View-triggered entrance animations and the hero text scramble.
//!
//! Nothing in here knows about the DOM. Sections describe their entrance as
//! data ([`profiles`]), a [`ViewTriggeredSequencer`] applies it once per mount
//! through the [`StyleTarget`] / [`AnimationEngine`] seams, and the browser
//! bindings live in `app::dom`.

mod entrance;
pub mod profiles;
mod scramble;
mod sequencer;
mod state;
mod timeline;
mod visibility;

pub use entrance::SectionEntrance;
pub use profiles::{SectionProfile, Trigger};
pub use scramble::{
    run_scramble, RevealRate, ScrambleTask, TaskState, TextScramble, TextSink, TickGuard,
    TickHandle, Ticker, UPPERCASE,
};
pub use sequencer::{
    AnimationEngine, EntranceOutcome, NoEngine, StyleTarget, TargetResolver,
    ViewTriggeredSequencer,
};
pub use state::{Easing, VisualState};
pub use timeline::{AnimationStep, Position, ScheduledTween, Timeline, Tween};
pub use visibility::{Entered, EntranceGuard, ObserverOptions, VisibilityHandle};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimError {
    #[error("animation engine unavailable")]
    EngineUnavailable,
    #[error("target is no longer attached")]
    TargetDetached,
    #[error("couldn't schedule tick: {0}")]
    Scheduler(String),
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    /// Remembers every state written to it.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingTarget {
        writes: Rc<RefCell<Vec<VisualState>>>,
    }

    impl RecordingTarget {
        pub fn current(&self) -> Option<VisualState> {
            self.writes.borrow().last().copied()
        }

        pub fn writes(&self) -> usize {
            self.writes.borrow().len()
        }
    }

    impl StyleTarget for RecordingTarget {
        fn apply(&self, state: &VisualState) {
            self.writes.borrow_mut().push(*state);
        }
    }

    /// A section with a fixed number of elements per selector.
    pub struct FakeSection {
        targets: HashMap<&'static str, Vec<RecordingTarget>>,
    }

    impl FakeSection {
        pub fn new(layout: &[(&'static str, usize)]) -> Self {
            let targets = layout
                .iter()
                .map(|(selector, n)| (*selector, (0..*n).map(|_| RecordingTarget::default()).collect()))
                .collect();
            Self { targets }
        }

        pub fn targets(&self, selector: &str) -> Vec<RecordingTarget> {
            self.targets.get(selector).cloned().unwrap_or_default()
        }

        pub fn all(&self) -> Vec<RecordingTarget> {
            self.targets.values().flatten().cloned().collect()
        }

        pub fn total_writes(&self) -> usize {
            self.all().iter().map(RecordingTarget::writes).sum()
        }
    }

    impl TargetResolver for FakeSection {
        type Target = RecordingTarget;

        fn resolve(&self, selector: &str) -> Vec<RecordingTarget> {
            self.targets(selector)
        }
    }

    /// Accepts every tween and does nothing with it.
    #[derive(Default)]
    pub struct RecordingEngine {
        tweens: RefCell<Vec<Tween>>,
    }

    impl RecordingEngine {
        pub fn calls(&self) -> usize {
            self.tweens.borrow().len()
        }

        pub fn tweens(&self) -> Vec<Tween> {
            self.tweens.borrow().clone()
        }
    }

    impl<T> AnimationEngine<T> for RecordingEngine {
        fn animate(&self, _target: &T, tween: &Tween) -> Result<(), AnimError> {
            self.tweens.borrow_mut().push(*tween);
            Ok(())
        }
    }
}
