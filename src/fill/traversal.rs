//! Boundary traversal: find a short way back to a freshly claimed cell
//!
//! Starting from the new claim, the tracer walks along same-faction cells in
//! one initial direction and tries to return to the start. Straight stretches
//! are walked in a single run; every turn or fork is a branch point whose
//! options are tried depth-first, options that get closer to the start
//! first. The first path that comes back wins.
//!
//! The search keeps its own stack of branch points instead of recursing, so
//! a long boundary costs heap, not call stack, and is cut off by the step
//! budget.

use ahash::AHashSet;
use tracing::{debug, trace};

use super::adjacency::Connections;
use crate::claims::ClaimStore;
use crate::core::error::{ClaimError, Result};
use crate::core::types::FactionId;
use crate::grid::{Corner, Direction, GridPoint};

/// How a traversal met back up with its start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureKind {
    /// The loop came back along the axis it left on; the interior is a
    /// cardinal neighbor of start.
    Parallel { along: Direction, corner: Corner },
    /// The loop bent around a corner; the interior is a diagonal of start.
    Perpendicular { corner: Corner },
}

/// Tie-break between equally ranked options at a branch point
///
/// A junction touches several loops, and with one fixed order some of them
/// are never the first choice. Tracing in both orders reaches every loop
/// next to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOrder {
    /// Index order: East, West, North, South
    Forward,
    /// South, North, West, East
    Reverse,
}

/// A closed loop through the start cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    pub kind: ClosureKind,
    /// Cells of the loop in walking order, ending at start
    pub path: Vec<GridPoint>,
}

/// Walks same-faction boundaries around one start cell
pub struct BoundaryTracer<'a> {
    store: &'a dyn ClaimStore,
    start: GridPoint,
    faction: FactionId,
    level: &'a str,
    max_steps: usize,
}

/// Where a straight run stopped
enum RunEnd {
    DeadEnd,
    Closed { previous: GridPoint },
    Branch { at: GridPoint, connections: Connections },
}

struct Run {
    cells: Vec<GridPoint>,
    end: RunEnd,
}

/// A branch point still holding untried options
struct Frame {
    /// Cells of the run that led here, branch point last
    cells: Vec<GridPoint>,
    at: GridPoint,
    /// Untried directions, best last
    pending: Vec<Direction>,
    main: Option<Direction>,
    outermost: bool,
}

struct Launch {
    from: GridPoint,
    dir: Direction,
    main: Option<Direction>,
    outermost: bool,
}

/// Visited cells and step count for one traversal
struct SearchState {
    visited: AHashSet<GridPoint>,
    steps: usize,
}

impl<'a> BoundaryTracer<'a> {
    pub fn new(
        store: &'a dyn ClaimStore,
        start: GridPoint,
        faction: FactionId,
        level: &'a str,
        max_steps: usize,
    ) -> Self {
        Self {
            store,
            start,
            faction,
            level,
            max_steps,
        }
    }

    fn connections(&self, point: GridPoint) -> Connections {
        Connections::of(self.store, point, self.faction, self.level)
    }

    /// Try to walk from start in `initial` and come back to start
    ///
    /// Returns `Ok(None)` when every way out of that direction dead-ends.
    pub fn trace(&self, initial: Direction) -> Result<Option<Closure>> {
        self.trace_ordered(initial, BranchOrder::Forward)
    }

    /// [`trace`](Self::trace) with an explicit tie-break order
    pub fn trace_ordered(
        &self,
        initial: Direction,
        order: BranchOrder,
    ) -> Result<Option<Closure>> {
        if !self.connections(self.start).has(initial) {
            return Ok(None);
        }

        let mut state = SearchState {
            visited: AHashSet::new(),
            steps: 0,
        };
        let mut frames: Vec<Frame> = Vec::new();
        let mut next = Some(Launch {
            from: self.start,
            dir: initial,
            main: None,
            outermost: true,
        });

        loop {
            if let Some(launch) = next.take() {
                let run = self.walk(launch.from, launch.dir, &mut state)?;
                match run.end {
                    RunEnd::DeadEnd => {
                        trace!("Dead end after {} going {:?}", launch.from, launch.dir);
                    }
                    RunEnd::Closed { previous } => {
                        let kind = self.classify(initial, previous, launch.main)?;
                        let mut path: Vec<GridPoint> =
                            frames.into_iter().flat_map(|frame| frame.cells).collect();
                        path.extend(run.cells);
                        debug!(
                            "Closed loop at {} ({} cells, {:?})",
                            self.start,
                            path.len(),
                            kind
                        );
                        return Ok(Some(Closure { kind, path }));
                    }
                    RunEnd::Branch { at, connections } => {
                        let pending = self.rank(
                            at,
                            launch.dir,
                            connections,
                            launch.outermost,
                            order,
                            &state.visited,
                        );
                        frames.push(Frame {
                            cells: run.cells,
                            at,
                            pending,
                            main: launch.main,
                            outermost: launch.outermost,
                        });
                    }
                }
            }

            let Some(frame) = frames.last_mut() else {
                return Ok(None);
            };
            match frame.pending.pop() {
                Some(dir) => {
                    // Only the outermost branch point picks the main direction
                    let main = if frame.outermost { Some(dir) } else { frame.main };
                    next = Some(Launch {
                        from: frame.at,
                        dir,
                        main,
                        outermost: false,
                    });
                }
                None => {
                    frames.pop();
                }
            }
        }
    }

    /// Step from `from` in `dir` until the line stops being straight
    fn walk(&self, from: GridPoint, dir: Direction, state: &mut SearchState) -> Result<Run> {
        let mut previous = from;
        let mut current = from.step(dir);
        self.enter(current, state)?;
        let mut cells = vec![current];
        let mut connections = self.connections(current);

        while connections.count() == 2 && connections.has(dir) && current != self.start {
            previous = current;
            current = current.step(dir);
            self.enter(current, state)?;
            cells.push(current);
            connections = self.connections(current);
        }

        let end = if current == self.start {
            RunEnd::Closed { previous }
        } else if connections.count() <= 1 {
            RunEnd::DeadEnd
        } else {
            RunEnd::Branch {
                at: current,
                connections,
            }
        };
        Ok(Run { cells, end })
    }

    fn enter(&self, cell: GridPoint, state: &mut SearchState) -> Result<()> {
        state.steps += 1;
        if state.steps > self.max_steps {
            return Err(ClaimError::TraversalExhausted {
                start: self.start,
                steps: state.steps,
            });
        }
        if cell != self.start {
            state.visited.insert(cell);
        }
        Ok(())
    }

    /// Order the ways out of a branch point, best last
    ///
    /// Options that get closer to start go before the rest. At the outermost
    /// branch point, carrying straight on counts as not getting closer.
    fn rank(
        &self,
        at: GridPoint,
        came: Direction,
        connections: Connections,
        outermost: bool,
        order: BranchOrder,
        visited: &AHashSet<GridPoint>,
    ) -> Vec<Direction> {
        let mut closer = Vec::new();
        let mut farther = Vec::new();

        let mut options: Vec<Direction> = connections.iter().collect();
        if order == BranchOrder::Reverse {
            options.reverse();
        }

        for dir in options {
            let next = at.step(dir);
            if dir == came.opposite() || visited.contains(&next) {
                continue;
            }
            if next.closer_to(&self.start, &at) && !(outermost && dir == came) {
                closer.push(dir);
            } else {
                farther.push(dir);
            }
        }

        closer.extend(farther);
        closer.reverse();
        closer
    }

    fn classify(
        &self,
        initial: Direction,
        previous: GridPoint,
        main: Option<Direction>,
    ) -> Result<ClosureKind> {
        let arrival = previous
            .direction_to(&self.start)
            .ok_or(ClaimError::Misaligned {
                from: previous,
                to: self.start,
            })?;

        if self.connections(self.start).is_straight_pair() || arrival == initial {
            let along = main.ok_or(ClaimError::MissingBranchDirection { start: self.start })?;
            return Ok(ClosureKind::Parallel {
                along,
                corner: Corner::for_parallel(along),
            });
        }

        Ok(ClosureKind::Perpendicular {
            corner: Corner::for_closure(initial, arrival.opposite()),
        })
    }
}
