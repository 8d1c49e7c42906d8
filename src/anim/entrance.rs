use super::profiles::{SectionProfile, Trigger};
use super::sequencer::{AnimationEngine, EntranceOutcome, TargetResolver, ViewTriggeredSequencer};
use super::visibility::VisibilityHandle;

/// One mounted section's entrance: the sequencer plus, for sections that wait
/// to be seen, the handle filtering observer notifications.
#[derive(Debug)]
pub struct SectionEntrance {
    sequencer: ViewTriggeredSequencer,
    handle: Option<VisibilityHandle>,
}

impl SectionEntrance {
    pub fn new(profile: SectionProfile) -> Self {
        let sequencer = ViewTriggeredSequencer::new(profile);
        let handle = match sequencer.trigger() {
            Trigger::Visible(_) => Some(sequencer.attach()),
            Trigger::Mount => None,
        };
        Self { sequencer, handle }
    }

    pub fn observes(&self) -> bool {
        self.handle.is_some()
    }

    pub fn sequencer(&self) -> &ViewTriggeredSequencer {
        &self.sequencer
    }

    pub fn handle(&self) -> Option<&VisibilityHandle> {
        self.handle.as_ref()
    }

    /// Register the observer's teardown, run when the handle detaches.
    pub fn set_release<F>(&mut self, release: F)
    where
        F: FnOnce() + 'static,
    {
        match &mut self.handle {
            Some(handle) => handle.set_release(release),
            None => release(),
        }
    }

    /// Apply the pre-entry state, then fire right away if nothing needs observing:
    /// mount-triggered sections, and observed ones when `observer_supported` is
    /// false, which settle without animating and stop their observer.
    pub fn mount<R, E>(
        &mut self,
        resolver: &R,
        engine: &E,
        observer_supported: bool,
    ) -> Option<EntranceOutcome>
    where
        R: TargetResolver,
        E: AnimationEngine<R::Target> + ?Sized,
    {
        self.sequencer.mount(resolver);
        match &mut self.handle {
            None => Some(self.sequencer.enter(resolver, engine)),
            Some(handle) if !observer_supported => {
                handle.detach();
                Some(self.sequencer.settle(resolver))
            }
            Some(_) => None,
        }
    }

    /// Feed one batch of observer entries as `(ratio, is_intersecting)` pairs.
    /// Returns the outcome when this batch is the section's entrance.
    pub fn observe<I, R, E>(&mut self, entries: I, resolver: &R, engine: &E) -> Option<EntranceOutcome>
    where
        I: IntoIterator<Item = (f64, bool)>,
        R: TargetResolver,
        E: AnimationEngine<R::Target> + ?Sized,
    {
        let handle = self.handle.as_mut()?;
        let (ratio, intersecting) = entries
            .into_iter()
            .fold((0.0_f64, false), |(ratio, any), (r, hit)| (ratio.max(r), any || hit));
        handle.observe(ratio, intersecting)?;
        Some(self.sequencer.enter(resolver, engine))
    }
}
