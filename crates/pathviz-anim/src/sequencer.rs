//! Two-phase replay of a search run.
//!
//! An [`Animation`] holds one visit event per visited node followed by one
//! path event per path node, each scheduled at a fixed offset from the start
//! of the run. The caller owns the clock and advances the run; due events
//! are delivered in order to an [`AnimationSink`].

use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use pathviz_core::{Point, VisualizerConfig};
use pathviz_paths::SearchOutcome;

use crate::cancel::CancelToken;
use crate::events::EventQueue;

/// A single step of the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationEvent {
    /// The search finalized this node.
    Visit(Point),
    /// This node lies on the reconstructed path.
    Path(Point),
}

impl AnimationEvent {
    /// Coordinates carried by the event.
    pub fn point(self) -> Point {
        match self {
            Self::Visit(p) | Self::Path(p) => p,
        }
    }
}

/// Receiver of replay steps, owned by the rendering side.
pub trait AnimationSink {
    fn on_visit(&mut self, p: Point);
    fn on_path(&mut self, p: Point);
}

/// Adapts a pair of closures into an [`AnimationSink`].
pub struct Callbacks<V, P> {
    pub on_visit: V,
    pub on_path: P,
}

impl<V, P> AnimationSink for Callbacks<V, P>
where
    V: FnMut(Point),
    P: FnMut(Point),
{
    fn on_visit(&mut self, p: Point) {
        (self.on_visit)(p)
    }

    fn on_path(&mut self, p: Point) {
        (self.on_path)(p)
    }
}

/// Records every delivered event in order.
impl AnimationSink for Vec<AnimationEvent> {
    fn on_visit(&mut self, p: Point) {
        self.push(AnimationEvent::Visit(p));
    }

    fn on_path(&mut self, p: Point) {
        self.push(AnimationEvent::Path(p));
    }
}

/// Step intervals for the two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub visit_interval: Duration,
    pub path_interval: Duration,
}

impl Timing {
    pub fn new(visit_interval: Duration, path_interval: Duration) -> Self {
        Self {
            visit_interval,
            path_interval,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from(&VisualizerConfig::default())
    }
}

impl From<&VisualizerConfig> for Timing {
    fn from(cfg: &VisualizerConfig) -> Self {
        Self::new(cfg.visit_interval(), cfg.path_interval())
    }
}

/// One scheduled replay of a search run.
#[derive(Debug)]
pub struct Animation {
    queue: EventQueue<AnimationEvent>,
    elapsed: Duration,
    duration: Duration,
    delivered: usize,
    token: CancelToken,
}

impl Animation {
    /// Schedule `visited[i]` at `i * visit_interval`, then `path[j]` at
    /// `visited.len() * visit_interval + j * path_interval`.
    pub fn new(visited: &[Point], path: &[Point], timing: Timing) -> Self {
        let mut queue = EventQueue::new();
        let mut at = Duration::ZERO;
        let mut last = Duration::ZERO;
        for &p in visited {
            queue.push(AnimationEvent::Visit(p), at);
            last = at;
            at = at.saturating_add(timing.visit_interval);
        }
        // The path phase begins one visit interval after the last visit.
        for &p in path {
            queue.push(AnimationEvent::Path(p), at);
            last = at;
            at = at.saturating_add(timing.path_interval);
        }
        debug!(
            "scheduled {} visit and {} path events over {:?}",
            visited.len(),
            path.len(),
            last
        );
        Self {
            queue,
            elapsed: Duration::ZERO,
            duration: last,
            delivered: 0,
            token: CancelToken::new(),
        }
    }

    /// Schedule the replay of a search outcome.
    pub fn from_outcome(outcome: &SearchOutcome, timing: Timing) -> Self {
        Self::new(&outcome.visited, &outcome.path, timing)
    }

    /// A handle that invalidates this run's pending events when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Cancel the run; pending events are discarded on the next advance.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether nothing remains to be delivered.
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty() || self.token.is_cancelled()
    }

    /// Time since the start of the run.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Offset of the last scheduled event.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of events delivered so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Number of events still pending.
    pub fn pending(&self) -> usize {
        if self.token.is_cancelled() {
            0
        } else {
            self.queue.len()
        }
    }

    /// Time left until the next event is due, or `None` once finished.
    pub fn next_due(&self) -> Option<Duration> {
        if self.token.is_cancelled() {
            return None;
        }
        self.queue
            .peek_due()
            .map(|due| due.saturating_sub(self.elapsed))
    }

    /// Move the run's clock forward by `dt` and deliver every event that
    /// became due. Returns the number of events delivered.
    pub fn advance(&mut self, dt: Duration, sink: &mut impl AnimationSink) -> usize {
        self.advance_to(self.elapsed.saturating_add(dt), sink)
    }

    /// Move the run's clock to `now` (never backwards) and deliver every
    /// event due at or before it.
    pub fn advance_to(&mut self, now: Duration, sink: &mut impl AnimationSink) -> usize {
        if self.discard_if_cancelled() {
            return 0;
        }
        self.elapsed = self.elapsed.max(now);
        let mut n = 0;
        while let Some((event, due)) = self.queue.pop_due(self.elapsed) {
            trace!("{due:?}: {event:?}");
            match event {
                AnimationEvent::Visit(p) => sink.on_visit(p),
                AnimationEvent::Path(p) => sink.on_path(p),
            }
            n += 1;
            // A sink may cancel the run from inside a callback.
            if self.discard_if_cancelled() {
                break;
            }
        }
        self.delivered += n;
        n
    }

    /// Deliver everything that remains, ignoring the schedule.
    pub fn finish(&mut self, sink: &mut impl AnimationSink) -> usize {
        self.advance_to(self.duration, sink)
    }

    /// Play the run in real time on the current thread, sleeping between
    /// events. Returns the number of events delivered.
    pub fn run_blocking(&mut self, sink: &mut impl AnimationSink) -> usize {
        let Some(origin) = Instant::now().checked_sub(self.elapsed) else {
            // The run's clock lies beyond what `Instant` can represent;
            // there is nothing left to wait for.
            self.finish(sink);
            return self.delivered;
        };
        while let Some(wait) = self.next_due() {
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
            self.advance_to(origin.elapsed(), sink);
        }
        self.delivered
    }

    fn discard_if_cancelled(&mut self) -> bool {
        if !self.token.is_cancelled() {
            return false;
        }
        if !self.queue.is_empty() {
            warn!(
                "animation cancelled: discarding {} pending events",
                self.queue.len()
            );
            self.queue.clear();
        }
        true
    }
}
