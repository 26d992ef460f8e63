use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use gridstar_core::Point;
use log::{debug, trace};

use crate::config::{Relaxation, SearchConfig};
use crate::cost::Octile;
use crate::error::{EndpointKind, PathError};
use crate::node::{Node, NodeRef, NodeState};
use crate::traits::{CostModel, Pather};

/// A successful search result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cells from start to goal, both included.
    pub cells: Vec<Point>,
    /// Accumulated cost of the goal cell.
    pub cost: f64,
    /// Number of cells closed during the search.
    pub expanded: usize,
}

/// A* search engine.
///
/// A `PathFinder` holds only its cost model and configuration. All search
/// state lives inside a single [`find`](Self::find) call, so one finder can
/// be shared by reference across threads and reused for any number of
/// queries.
#[derive(Debug, Clone)]
pub struct PathFinder<C = Octile> {
    cost: C,
    config: SearchConfig,
}

impl Default for PathFinder<Octile> {
    fn default() -> Self {
        Self::new(Octile)
    }
}

impl<C: CostModel> PathFinder<C> {
    /// Create a finder using `cost` and the default configuration.
    pub fn new(cost: C) -> Self {
        Self {
            cost,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn cost_model(&self) -> &C {
        &self.cost
    }

    /// Compute a path from `start` to `goal`.
    ///
    /// Returns the cells from `start` to `goal` inclusive. See
    /// [`find_route`](Self::find_route) for the search details.
    pub fn find<P: Pather>(
        &self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, PathError> {
        self.find_route(pather, start, goal).map(|r| r.cells)
    }

    /// Compute a path from `start` to `goal`, along with its cost and the
    /// number of expanded cells.
    ///
    /// The open cell with the lowest `f` is expanded first; equal `f` values
    /// go to the cell discovered earliest. Start and goal are not checked
    /// unless [`SearchConfig::validate_endpoints`] is set: a blocked start
    /// is still expanded.
    pub fn find_route<P: Pather>(
        &self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Route, PathError> {
        if start == goal {
            return Ok(Route {
                cells: vec![start],
                cost: 0.0,
                expanded: 0,
            });
        }

        if self.config.validate_endpoints {
            if !pather.passable(start) {
                return Err(PathError::InvalidEndpoint {
                    cell: start,
                    kind: EndpointKind::Start,
                });
            }
            if !pather.passable(goal) {
                return Err(PathError::InvalidEndpoint {
                    cell: goal,
                    kind: EndpointKind::Goal,
                });
            }
        }

        debug!("astar: searching {start} -> {goal}");

        let mut nodes: HashMap<Point, Node> = HashMap::new();
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        let mut expanded: usize = 0;

        let start_f = self.cost.heuristic(start, goal);
        nodes.insert(
            start,
            Node {
                g: 0.0,
                f: start_f,
                parent: None,
                seq,
                state: NodeState::Open,
            },
        );
        open.push(NodeRef {
            cell: start,
            f: start_f,
            seq,
        });

        let mut nbuf: Vec<Point> = Vec::with_capacity(8);

        let found = 'search: loop {
            if self.config.max_expansions.is_some_and(|limit| expanded >= limit) {
                debug!("astar: aborted after {expanded} expansions");
                return Err(PathError::Aborted { expanded });
            }

            let Some(current) = open.pop() else {
                break 'search false;
            };
            let cp = current.cell;

            let Some(node) = nodes.get_mut(&cp) else {
                continue;
            };
            // Skip stale entries.
            if !current.is_current(node) {
                continue;
            }

            if cp == goal {
                break 'search true;
            }

            node.state = NodeState::Closed;
            let current_g = node.g;
            expanded += 1;
            trace!("astar: expand {cp} g={current_g:.3} f={:.3}", current.f);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let tentative_g = current_g + self.cost.step_cost(cp, np);

                match nodes.entry(np) {
                    Entry::Vacant(slot) => {
                        seq += 1;
                        let f = tentative_g + self.cost.heuristic(np, goal);
                        slot.insert(Node {
                            g: tentative_g,
                            f,
                            parent: Some(cp),
                            seq,
                            state: NodeState::Open,
                        });
                        open.push(NodeRef { cell: np, f, seq });
                    }
                    Entry::Occupied(mut slot) => {
                        let n = slot.get_mut();
                        let baseline = match n.state {
                            NodeState::Closed if !self.config.reopen_closed => continue,
                            NodeState::Closed => n.g,
                            NodeState::Open => match self.config.relaxation {
                                Relaxation::CurrentNode => current_g,
                                Relaxation::Neighbor => n.g,
                            },
                        };
                        if tentative_g >= baseline {
                            continue;
                        }

                        n.g = tentative_g;
                        n.f = tentative_g + self.cost.heuristic(np, goal);
                        n.parent = Some(cp);
                        n.state = NodeState::Open;
                        open.push(NodeRef {
                            cell: np,
                            f: n.f,
                            seq: n.seq,
                        });
                    }
                }
            }
        };

        if !found {
            debug!("astar: no path {start} -> {goal} ({expanded} expanded)");
            return Err(PathError::NotFound);
        }

        // Reconstruct path.
        let mut cells: Vec<Point> =
            std::iter::successors(Some(goal), |c| nodes.get(c).and_then(|n| n.parent)).collect();
        cells.reverse();

        let cost = nodes.get(&goal).map_or(0.0, |n| n.g);
        debug!(
            "astar: found {start} -> {goal}, {} cells, cost {cost:.3} ({expanded} expanded)",
            cells.len()
        );
        Ok(Route {
            cells,
            cost,
            expanded,
        })
    }

    /// Sum of step costs along `cells`. Zero for fewer than two cells.
    pub fn path_cost(&self, cells: &[Point]) -> f64 {
        cells
            .windows(2)
            .fold(0.0, |acc, w| acc + self.cost.step_cost(w[0], w[1]))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let route = Route {
            cells: vec![Point::new(1, 1), Point::new(2, 2)],
            cost: std::f64::consts::SQRT_2,
            expanded: 1,
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
