use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

use rand::Rng;

use super::AnimError;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters revealed per tick, kept as an exact ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealRate {
    pub chars: usize,
    pub ticks: usize,
}

impl RevealRate {
    pub const ONE_THIRD: RevealRate = RevealRate { chars: 1, ticks: 3 };

    pub fn new(chars: usize, ticks: usize) -> Self {
        Self {
            chars: chars.max(1),
            ticks: ticks.max(1),
        }
    }

    /// Whole characters revealed after `tick` ticks.
    pub fn revealed_after(&self, tick: usize) -> usize {
        tick * self.chars / self.ticks
    }

    /// Ticks until `len` characters are revealed, rounded up.
    pub fn ticks_for(&self, len: usize) -> usize {
        (len * self.ticks).div_ceil(self.chars)
    }
}

/// Left-to-right reveal of a fixed string, unrevealed characters replaced by
/// random picks from an alphabet.
#[derive(Debug, Clone)]
pub struct TextScramble {
    source: Vec<char>,
    alphabet: Vec<char>,
    rate: RevealRate,
    tick: usize,
}

impl TextScramble {
    pub fn new(source: &str, alphabet: &str, rate: RevealRate) -> Self {
        Self {
            source: source.chars().collect(),
            alphabet: alphabet.chars().collect(),
            rate,
            tick: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn ticks(&self) -> usize {
        self.tick
    }

    pub fn revealed(&self) -> usize {
        self.rate.revealed_after(self.tick).min(self.source.len())
    }

    pub fn is_done(&self) -> bool {
        self.revealed() >= self.source.len()
    }

    pub fn ticks_to_reveal(&self) -> usize {
        self.rate.ticks_for(self.source.len())
    }

    pub fn source(&self) -> String {
        self.source.iter().collect()
    }

    /// Advance one tick and render the frame for it.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> String {
        if !self.is_done() {
            self.tick += 1;
        }
        self.frame(rng)
    }

    /// Render the current frame without advancing.
    pub fn frame<R: Rng>(&self, rng: &mut R) -> String {
        let revealed = self.revealed();
        self.source
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i < revealed || self.alphabet.is_empty() {
                    *c
                } else {
                    self.alphabet[rng.gen_range(0..self.alphabet.len())]
                }
            })
            .collect()
    }
}

/// Where scramble frames are written.
pub trait TextSink {
    fn write_text(&mut self, text: &str);
}

impl<F: FnMut(&str)> TextSink for F {
    fn write_text(&mut self, text: &str) {
        self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Running,
    Finished,
    Cancelled,
}

/// A scramble bound to its output, advanced by a repeating tick.
pub struct ScrambleTask<S, R> {
    scramble: TextScramble,
    sink: S,
    rng: R,
    state: TaskState,
}

impl<S: TextSink, R: Rng> ScrambleTask<S, R> {
    pub fn new(scramble: TextScramble, sink: S, rng: R) -> Self {
        Self {
            scramble,
            sink,
            rng,
            state: TaskState::Running,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn scramble(&self) -> &TextScramble {
        &self.scramble
    }

    /// One tick. Writes a frame unless cancelled; the last frame is the source text.
    pub fn tick(&mut self) -> TaskState {
        if self.state != TaskState::Running {
            return self.state;
        }
        let frame = self.scramble.advance(&mut self.rng);
        self.sink.write_text(&frame);
        if self.scramble.is_done() {
            self.state = TaskState::Finished;
        }
        self.state
    }

    /// Stop writing. Has no effect on a finished task.
    pub fn cancel(&mut self) {
        if self.state == TaskState::Running {
            self.state = TaskState::Cancelled;
        }
    }
}

/// Cancels a scheduled repeating callback.
pub trait TickHandle {
    fn clear(&self);
}

/// A source of repeating ticks, e.g. the browser's `setInterval`.
pub trait Ticker {
    type Handle: TickHandle + 'static;

    /// Call `tick` every `period` until it returns `Break`.
    fn every(
        &self,
        period: Duration,
        tick: Box<dyn FnMut() -> ControlFlow<()>>,
    ) -> Result<Self::Handle, AnimError>;
}

/// Owns a scheduled tick; clearing happens on `cancel` or drop.
pub struct TickGuard {
    clear: Option<Box<dyn FnOnce()>>,
}

impl TickGuard {
    pub fn new<H: TickHandle + 'static>(handle: H) -> Self {
        Self {
            clear: Some(Box::new(move || handle.clear())),
        }
    }

    pub fn is_active(&self) -> bool {
        self.clear.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(clear) = self.clear.take() {
            clear();
        }
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Drive `task` from `ticker` every `period`.
///
/// The returned guard belongs to the owning component; dropping it on unmount
/// clears the tick and cancels the task so nothing is written afterwards.
pub fn run_scramble<T, S, R>(
    ticker: &T,
    period: Duration,
    task: Rc<RefCell<ScrambleTask<S, R>>>,
) -> Result<TickGuard, AnimError>
where
    T: Ticker,
    S: TextSink + 'static,
    R: Rng + 'static,
{
    let ticking = task.clone();
    let handle = ticker.every(
        period,
        Box::new(move || match ticking.borrow_mut().tick() {
            TaskState::Running => ControlFlow::Continue(()),
            TaskState::Finished | TaskState::Cancelled => ControlFlow::Break(()),
        }),
    )?;
    Ok(TickGuard {
        clear: Some(Box::new(move || {
            handle.clear();
            task.borrow_mut().cancel();
        })),
    })
}
