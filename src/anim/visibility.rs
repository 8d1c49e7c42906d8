/// Options for observing when a section scrolls into view.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible, `0.1` = 10%.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"0px 0px -20% 0px"` to fire
    /// once the element's top passes 80% of the viewport height.
    pub root_margin: &'static str,
    /// Detach after the first entrance.
    pub once: bool,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px",
            once: true,
        }
    }
}

impl ObserverOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn root_margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }

    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Whether an observation counts as having entered the region.
    pub fn is_entry(&self, ratio: f64, intersecting: bool) -> bool {
        intersecting && (self.threshold <= 0.0 || ratio >= self.threshold)
    }
}

/// Emitted the first time an observed element enters its region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entered {
    pub ratio: f64,
}

/// The mount-scoped `has_fired` flag.
///
/// Only a fresh guard (a remount) can fire again; there is no reset.
#[derive(Debug, Default)]
pub struct EntranceGuard {
    has_fired: bool,
}

impl EntranceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and set in one step. Returns `true` only for the first call.
    pub fn try_fire(&mut self) -> bool {
        !std::mem::replace(&mut self.has_fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.has_fired
    }
}

/// Turns raw intersection notifications into a single `Entered` event.
///
/// The release callback is the real observer's teardown; it runs at most once,
/// when the handle detaches. Unmount teardown belongs to whoever created the
/// observer.
pub struct VisibilityHandle {
    options: ObserverOptions,
    release: Option<Box<dyn FnOnce()>>,
    detached: bool,
    emitted: usize,
}

impl VisibilityHandle {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            release: None,
            detached: false,
            emitted: 0,
        }
    }

    /// Register the teardown of the underlying observer.
    pub fn with_release<F>(mut self, release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.set_release(release);
        self
    }

    /// Register the teardown after construction, for observers that hand out
    /// their `stop` only once created. Runs immediately if already detached.
    pub fn set_release<F>(&mut self, release: F)
    where
        F: FnOnce() + 'static,
    {
        if self.detached {
            release();
        } else {
            self.release = Some(Box::new(release));
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Number of `Entered` events emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Feed one observation. After a fire-once handle has emitted, this is a no-op.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> Option<Entered> {
        if self.detached || !self.options.is_entry(ratio, intersecting) {
            return None;
        }
        self.emitted += 1;
        if self.options.once {
            self.detach();
        }
        Some(Entered { ratio })
    }

    /// Stop observing. Idempotent.
    pub fn detach(&mut self) {
        self.detached = true;
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for VisibilityHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityHandle")
            .field("options", &self.options)
            .field("detached", &self.detached)
            .field("emitted", &self.emitted)
            .finish()
    }
}
