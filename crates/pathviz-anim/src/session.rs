//! Live visualizer state: the editable grid plus the current animation run.

use std::time::Duration;

use log::debug;
use pathviz_core::{Grid, GridError, Point, VisualizerConfig};
use pathviz_paths::{SearchOutcome, find_path};
use rand::Rng;

use crate::sequencer::{Animation, AnimationSink, Timing};

/// Owns the grid being edited and at most one animation run.
///
/// Editing the grid cancels the run in flight. [`visualize`](Self::visualize)
/// searches a snapshot of the grid, so the live grid never carries search
/// state.
pub struct Session<R: Rng> {
    config: VisualizerConfig,
    timing: Timing,
    grid: Grid,
    rng: R,
    animation: Option<Animation>,
    /// Last cell toggled by the current paint stroke.
    stroke: Option<Point>,
    outcome: Option<SearchOutcome>,
    searched: Option<Grid>,
}

impl<R: Rng> Session<R> {
    /// Validate `config` and build a fresh grid from it.
    pub fn new(config: VisualizerConfig, rng: R) -> Result<Self, GridError> {
        config.validate()?;
        let grid = Grid::from_config(&config)?;
        Ok(Self {
            timing: Timing::from(&config),
            config,
            grid,
            rng,
            animation: None,
            stroke: None,
            outcome: None,
            searched: None,
        })
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The live, editable grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Outcome of the last [`visualize`](Self::visualize), cleared by edits.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    /// The grid snapshot the last search ran on, with its search state.
    pub fn searched_grid(&self) -> Option<&Grid> {
        self.searched.as_ref()
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Whether a run still has events to deliver.
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| !a.is_finished())
    }

    pub fn toggle_wall(&mut self, p: Point) -> Result<(), GridError> {
        let next = self.grid.clone().toggle_wall(p)?;
        self.replace_grid(next);
        Ok(())
    }

    pub fn reset_walls(&mut self) {
        let next = self.grid.clone().reset_walls();
        self.replace_grid(next);
    }

    /// Toggle walls at the configured number of random interior cells.
    pub fn randomize_walls(&mut self) {
        let count = self.config.random_walls;
        let next = self.grid.clone().randomize_walls(count, &mut self.rng);
        self.replace_grid(next);
    }

    /// Press: toggle `p` and start painting.
    pub fn begin_stroke(&mut self, p: Point) -> Result<(), GridError> {
        self.toggle_wall(p)?;
        self.stroke = Some(p);
        Ok(())
    }

    /// Drag: toggle `p` if a stroke is active and `p` is a new cell.
    ///
    /// Returns whether the grid changed.
    pub fn extend_stroke(&mut self, p: Point) -> Result<bool, GridError> {
        match self.stroke {
            Some(last) if last != p => {
                self.toggle_wall(p)?;
                self.stroke = Some(p);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Release: stop painting.
    pub fn end_stroke(&mut self) {
        self.stroke = None;
    }

    pub fn is_painting(&self) -> bool {
        self.stroke.is_some()
    }

    /// Search a snapshot of the grid from start to finish and schedule a
    /// new run, cancelling the previous one.
    pub fn visualize(&mut self) -> Result<&SearchOutcome, GridError> {
        self.cancel_animation();
        let mut snapshot = self.grid.clone();
        let outcome = find_path(&mut snapshot)?;
        debug!(
            "visualize: {} visited, {}",
            outcome.visited.len(),
            match outcome.hops() {
                Some(h) => format!("path of {h} hops"),
                None => "no path".to_string(),
            }
        );
        self.animation = Some(Animation::from_outcome(&outcome, self.timing));
        self.searched = Some(snapshot);
        Ok(self.outcome.insert(outcome))
    }

    /// Advance the current run by `dt`; returns the number of events
    /// delivered.
    pub fn advance(&mut self, dt: Duration, sink: &mut impl AnimationSink) -> usize {
        match self.animation.as_mut() {
            Some(anim) => anim.advance(dt, sink),
            None => 0,
        }
    }

    /// Deliver everything left in the current run.
    pub fn finish(&mut self, sink: &mut impl AnimationSink) -> usize {
        match self.animation.as_mut() {
            Some(anim) => anim.finish(sink),
            None => 0,
        }
    }

    /// Time until the current run's next event.
    pub fn next_due(&self) -> Option<Duration> {
        self.animation.as_ref().and_then(Animation::next_due)
    }

    pub fn cancel_animation(&mut self) {
        if let Some(anim) = self.animation.take() {
            anim.cancel();
        }
    }

    fn replace_grid(&mut self, next: Grid) {
        self.cancel_animation();
        self.outcome = None;
        self.searched = None;
        self.grid = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::AnimationEvent;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session<StdRng> {
        Session::new(VisualizerConfig::default(), StdRng::seed_from_u64(7)).unwrap()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = VisualizerConfig {
            finish: Point::new(10, 10),
            ..Default::default()
        };
        assert!(matches!(
            Session::new(cfg, StdRng::seed_from_u64(0)),
            Err(GridError::InvalidConfiguration(_))
        ));
        let cfg = VisualizerConfig {
            visit_interval_ms: 0,
            ..Default::default()
        };
        assert!(Session::new(cfg, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn open_grid_end_to_end() {
        let mut s = session();
        let out = s.visualize().unwrap().clone();
        assert_eq!(out.path.len(), 31);
        assert_eq!(out.visited.last(), Some(&Point::new(10, 40)));

        let mut events = Vec::new();
        let mut total = 0;
        while let Some(wait) = s.next_due() {
            total += s.advance(wait, &mut events);
        }
        assert_eq!(total, out.visited.len() + out.path.len());
        assert!(!s.is_animating());

        let (visits, paths) = events.split_at(out.visited.len());
        assert!(visits.iter().all(|e| matches!(e, AnimationEvent::Visit(_))));
        assert_eq!(
            paths.iter().map(|e| e.point()).collect::<Vec<_>>(),
            out.path
        );
    }

    #[test]
    fn live_grid_carries_no_search_state() {
        let mut s = session();
        s.visualize().unwrap();
        assert!(s.grid().iter().all(|n| !n.is_visited && n.previous.is_none()));
        let searched = s.searched_grid().unwrap();
        assert!(searched.node(Point::new(10, 40)).unwrap().is_visited);
    }

    #[test]
    fn blocked_finish_yields_visits_only() {
        let mut s = session();
        for r in 0..20 {
            s.toggle_wall(Point::new(r, 25)).unwrap();
        }
        let out = s.visualize().unwrap().clone();
        assert!(!out.found());

        let mut paths = 0;
        let mut visits = 0;
        let mut sink = crate::sequencer::Callbacks {
            on_visit: |_: Point| visits += 1,
            on_path: |_: Point| paths += 1,
        };
        s.advance(ms(60_000), &mut sink);
        assert_eq!(visits, out.visited.len());
        assert_eq!(paths, 0);
    }

    #[test]
    fn editing_cancels_the_run() {
        let mut s = session();
        s.visualize().unwrap();
        let token = s.animation().unwrap().cancel_token();
        let mut events = Vec::new();
        s.advance(ms(25), &mut events);
        assert_eq!(events.len(), 3);

        s.toggle_wall(Point::new(0, 0)).unwrap();
        assert!(token.is_cancelled());
        assert!(!s.is_animating());
        assert!(s.outcome().is_none());
        assert_eq!(s.advance(ms(1_000), &mut events), 0);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn visualize_again_replaces_the_run() {
        let mut s = session();
        s.visualize().unwrap();
        let first = s.animation().unwrap().cancel_token();
        s.visualize().unwrap();
        assert!(first.is_cancelled());
        assert!(s.is_animating());
    }

    #[test]
    fn start_and_finish_cannot_be_walled() {
        let mut s = session();
        s.toggle_wall(Point::new(10, 10)).unwrap();
        s.toggle_wall(Point::new(10, 40)).unwrap();
        assert_eq!(s.grid().wall_count(), 0);
        assert!(s.toggle_wall(Point::new(20, 0)).is_err());
    }

    #[test]
    fn randomize_then_reset() {
        let mut s = session();
        s.randomize_walls();
        let walls = s.grid().wall_count();
        assert!(walls > 0 && walls <= 250);
        assert!(s.grid().iter().all(|n| !(n.is_wall && (n.is_start || n.is_finish))));
        s.reset_walls();
        assert_eq!(s.grid().wall_count(), 0);
    }

    #[test]
    fn paint_stroke_toggles_each_entered_cell_once() {
        let mut s = session();
        assert!(!s.extend_stroke(Point::new(0, 0)).unwrap());

        s.begin_stroke(Point::new(0, 0)).unwrap();
        assert!(s.is_painting());
        assert!(!s.extend_stroke(Point::new(0, 0)).unwrap());
        assert!(s.extend_stroke(Point::new(0, 1)).unwrap());
        assert!(s.extend_stroke(Point::new(0, 2)).unwrap());
        s.end_stroke();
        assert!(!s.extend_stroke(Point::new(0, 3)).unwrap());

        assert_eq!(s.grid().wall_count(), 3);
        assert!(s.grid().is_wall(Point::new(0, 2)));
        assert!(!s.grid().is_wall(Point::new(0, 3)));

        // A second stroke over the same cells clears them.
        s.begin_stroke(Point::new(0, 2)).unwrap();
        s.extend_stroke(Point::new(0, 1)).unwrap();
        s.extend_stroke(Point::new(0, 0)).unwrap();
        s.end_stroke();
        assert_eq!(s.grid().wall_count(), 0);
    }
}
