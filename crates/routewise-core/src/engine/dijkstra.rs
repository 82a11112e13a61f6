//! Dijkstra's single-source shortest path, restricted to one target.
//!
//! Each query copies the adjacency it needs into per-call scratch state, so
//! the engine holds nothing mutable between calls and can be shared across
//! threads.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};

use crate::config::{EngineConfig, SelectionStrategy};
use crate::error::{Error, Result};
use crate::graph::{is_valid_weight, GraphView, NodeId};

use super::cancel::CancelToken;
use super::result::PathResult;

/// Validated adjacency, ordered by node id.
pub(super) type Adjacency<N> = BTreeMap<N, Vec<(N, f64)>>;

/// Shortest-path engine.
///
/// Stateless apart from its configuration. Ties between equal tentative
/// distances are broken by the lowest node identifier, so results are
/// reproducible and identical across [`SelectionStrategy`] choices.
///
/// # Example
///
/// ```rust
/// use routewise_core::{Graph, ShortestPathEngine};
///
/// let mut graph = Graph::undirected();
/// for node in ["A", "B", "C"] {
///     graph.add_node(node).unwrap();
/// }
/// graph.add_edge("A", "B", 3.0).unwrap();
/// graph.add_edge("B", "C", 4.0).unwrap();
/// graph.add_edge("A", "C", 10.0).unwrap();
///
/// let result = ShortestPathEngine::default()
///     .find_shortest_path(&graph, &"A", &"C")
///     .unwrap();
/// assert_eq!(result.path, vec!["A", "B", "C"]);
/// assert_eq!(result.total_cost, 7.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine {
    config: EngineConfig,
}

impl ShortestPathEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Creates an engine using the given selection strategy.
    #[must_use]
    pub fn with_strategy(strategy: SelectionStrategy) -> Self {
        Self::new(EngineConfig { strategy })
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Finds a minimum-weight path from `source` to `target`.
    ///
    /// Returns a single-node path with cost 0 when `source == target`, and
    /// [`PathResult::unreachable`] when no path exists.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if `source` or `target` is not in the graph,
    ///   or if an edge points at a node outside the node set.
    /// - `Error::InvalidWeight` if any edge weight is negative, NaN or infinite.
    /// - `Error::CostOverflow` if the target is connected but every path to
    ///   it sums past `f64::MAX`.
    pub fn find_shortest_path<G: GraphView>(
        &self,
        graph: &G,
        source: &G::Node,
        target: &G::Node,
    ) -> Result<PathResult<G::Node>> {
        self.search(graph, source, target, None)
    }

    /// Same as [`find_shortest_path`](Self::find_shortest_path), checking
    /// `cancel` once per main-loop iteration.
    ///
    /// # Errors
    ///
    /// As `find_shortest_path`, plus `Error::Cancelled`.
    pub fn find_shortest_path_with_cancel<G: GraphView>(
        &self,
        graph: &G,
        source: &G::Node,
        target: &G::Node,
        cancel: &CancelToken,
    ) -> Result<PathResult<G::Node>> {
        self.search(graph, source, target, Some(cancel))
    }

    fn search<G: GraphView>(
        &self,
        graph: &G,
        source: &G::Node,
        target: &G::Node,
        cancel: Option<&CancelToken>,
    ) -> Result<PathResult<G::Node>> {
        if !graph.contains_node(source) {
            return Err(Error::NodeNotFound(source.to_string()));
        }
        if !graph.contains_node(target) {
            return Err(Error::NodeNotFound(target.to_string()));
        }
        let adjacency = validated_adjacency(graph)?;
        check_cancel(cancel)?;

        if source == target {
            return Ok(PathResult::single(source.clone()));
        }

        tracing::debug!(
            %source,
            %target,
            strategy = ?self.config.strategy,
            nodes = adjacency.len(),
            "shortest path query"
        );

        let checkpoint = || check_cancel(cancel);
        let state = match self.config.strategy {
            SelectionStrategy::BinaryHeap => heap_search(&adjacency, source, target, checkpoint)?,
            SelectionStrategy::LinearScan => scan_search(&adjacency, source, target, checkpoint)?,
        };
        let (settled, overflowed) = (state.settled, state.overflowed);
        let result = state.into_result(source, target);

        // An overflowed sum looks like +inf, i.e. like no path at all.
        if !result.is_reachable() && overflowed && connected(&adjacency, source, target) {
            tracing::warn!(%source, %target, "path cost overflows f64");
            return Err(Error::CostOverflow {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        if result.is_reachable() {
            tracing::debug!(
                cost = result.total_cost,
                hops = result.hop_count(),
                settled,
                "shortest path found"
            );
        } else {
            tracing::debug!(%source, %target, settled, "target unreachable");
        }
        Ok(result)
    }
}

/// Finds a minimum-weight path with the default engine configuration.
///
/// # Errors
///
/// See [`ShortestPathEngine::find_shortest_path`].
pub fn find_shortest_path<G: GraphView>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
) -> Result<PathResult<G::Node>> {
    ShortestPathEngine::default().find_shortest_path(graph, source, target)
}

/// Copies the adjacency out of `graph`, rejecting bad weights and edges that
/// leave the node set. Every edge is checked, reachable or not.
pub(super) fn validated_adjacency<G: GraphView>(graph: &G) -> Result<Adjacency<G::Node>> {
    let mut adjacency = BTreeMap::new();
    for node in graph.node_ids() {
        let neighbors = graph.neighbors(&node);
        for (next, weight) in &neighbors {
            if !is_valid_weight(*weight) {
                return Err(Error::InvalidWeight {
                    from: node.to_string(),
                    to: next.to_string(),
                    weight: *weight,
                });
            }
            if !graph.contains_node(next) {
                return Err(Error::NodeNotFound(next.to_string()));
            }
        }
        adjacency.insert(node, neighbors);
    }
    Ok(adjacency)
}

pub(super) fn check_cancel(cancel: Option<&CancelToken>) -> Result<()> {
    if cancel.is_some_and(CancelToken::is_cancelled) {
        tracing::warn!("shortest path search cancelled");
        return Err(Error::Cancelled);
    }
    Ok(())
}

/// Per-call scratch state: tentative distances and predecessor links.
pub(super) struct SearchState<N> {
    dist: HashMap<N, f64>,
    prev: HashMap<N, N>,
    pub(super) settled: usize,
    /// Some finite distance plus a finite weight exceeded `f64::MAX`.
    pub(super) overflowed: bool,
}

impl<N: NodeId> SearchState<N> {
    fn new(source: &N) -> Self {
        let mut dist = HashMap::new();
        dist.insert(source.clone(), 0.0);
        Self {
            dist,
            prev: HashMap::new(),
            settled: 0,
            overflowed: false,
        }
    }

    fn distance(&self, node: &N) -> f64 {
        self.dist.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Relaxes every edge leaving `node`, reporting each improvement.
    fn relax(
        &mut self,
        node: &N,
        cost: f64,
        adjacency: &Adjacency<N>,
        mut on_improve: impl FnMut(&N, f64),
    ) {
        let Some(neighbors) = adjacency.get(node) else {
            return;
        };
        for (next, weight) in neighbors {
            let alt = cost + weight;
            if alt.is_infinite() {
                self.overflowed = true;
                continue;
            }
            if alt < self.distance(next) {
                self.dist.insert(next.clone(), alt);
                self.prev.insert(next.clone(), node.clone());
                on_improve(next, alt);
            }
        }
    }

    /// Walks predecessor links back from `target`.
    fn into_result(self, source: &N, target: &N) -> PathResult<N> {
        let cost = self.distance(target);
        if !cost.is_finite() {
            return PathResult::unreachable();
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while current != source {
            match self.prev.get(current) {
                Some(p) => {
                    path.push(p.clone());
                    current = p;
                }
                None => return PathResult::unreachable(),
            }
        }
        path.reverse();
        PathResult::new(path, cost)
    }
}

/// Heap entry ordered for a min-heap on `(cost, node)`.
#[derive(Debug)]
struct Candidate<N> {
    cost: f64,
    node: N,
}

impl<N: Ord> Ord for Candidate<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both keys reversed: BinaryHeap pops the maximum.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for Candidate<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for Candidate<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for Candidate<N> {}

/// `O((V + E) log V)` search with lazy deletion of stale heap entries.
///
/// `checkpoint` runs once per main-loop iteration; an error from it aborts the
/// search.
pub(super) fn heap_search<N: NodeId>(
    adjacency: &Adjacency<N>,
    source: &N,
    target: &N,
    mut checkpoint: impl FnMut() -> Result<()>,
) -> Result<SearchState<N>> {
    let mut state = SearchState::new(source);
    let mut settled = HashSet::new();
    let mut heap = BinaryHeap::new();
    heap.push(Candidate {
        cost: 0.0,
        node: source.clone(),
    });

    while let Some(Candidate { cost, node }) = heap.pop() {
        checkpoint()?;

        // Stale entry: a cheaper one was pushed after this one.
        if cost > state.distance(&node) || settled.contains(&node) {
            continue;
        }
        settled.insert(node.clone());
        state.settled += 1;
        tracing::trace!(node = %node, cost, "settled");

        if node == *target {
            break;
        }
        state.relax(&node, cost, adjacency, |next, alt| {
            heap.push(Candidate {
                cost: alt,
                node: next.clone(),
            });
        });
    }

    Ok(state)
}

/// `O(V²)` search scanning the whole unvisited set on every step.
pub(super) fn scan_search<N: NodeId>(
    adjacency: &Adjacency<N>,
    source: &N,
    target: &N,
    mut checkpoint: impl FnMut() -> Result<()>,
) -> Result<SearchState<N>> {
    let mut state = SearchState::new(source);
    let mut unvisited: BTreeSet<&N> = adjacency.keys().collect();

    loop {
        checkpoint()?;

        // min_by keeps the first of equal minima, and the set iterates in
        // ascending id order: ties go to the lowest identifier.
        let Some(current) = unvisited
            .iter()
            .copied()
            .min_by(|a, b| state.distance(a).total_cmp(&state.distance(b)))
        else {
            break;
        };
        unvisited.remove(current);

        let cost = state.distance(current);
        if !cost.is_finite() {
            break;
        }
        state.settled += 1;
        tracing::trace!(node = %current, cost, "settled");

        if current == target {
            break;
        }
        state.relax(current, cost, adjacency, |_, _| {});
    }

    Ok(state)
}

/// Breadth-first reachability, ignoring weights.
fn connected<N: NodeId>(adjacency: &Adjacency<N>, source: &N, target: &N) -> bool {
    let mut seen = HashSet::from([source]);
    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        if node == target {
            return true;
        }
        for (next, _) in adjacency.get(node).into_iter().flatten() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}
