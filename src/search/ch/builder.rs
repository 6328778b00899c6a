use std::{cmp::Reverse, collections::BinaryHeap};

use indicatif::ProgressBar;
use log::{debug, info, trace};

use super::{
    contracted_graph::ContractedGraph,
    contraction::contract,
    importance::{estimator_from_config, ImportanceEstimator},
};
use crate::{
    config::{BuildConfig, OrderingStrategy},
    graphs::{graph::Graph, Level, Vertex, VertexKey},
    utility::get_optional_progressbar,
};

/// Drives the contraction of a graph into a hierarchy.
///
/// Every vertex is contracted exactly once. Its rank is the number of vertices
/// contracted before it, so after [`HierarchyBuilder::contract_all`] the ranks
/// are a permutation of `0..n`.
pub struct HierarchyBuilder<V: VertexKey> {
    graph: Graph<V>,
    config: BuildConfig,
    estimator: Box<dyn ImportanceEstimator<V>>,
    shortcuts_added: Vec<u32>,
    level_to_vertex: Vec<Vertex>,
    number_of_shortcuts: usize,
}

impl<V: VertexKey> HierarchyBuilder<V> {
    pub fn new(graph: Graph<V>, config: &BuildConfig) -> Self {
        let number_of_vertices = graph.number_of_vertices() as usize;
        HierarchyBuilder {
            graph,
            config: config.clone(),
            estimator: estimator_from_config(config.shortcut_estimate),
            shortcuts_added: vec![0; number_of_vertices],
            level_to_vertex: Vec::with_capacity(number_of_vertices),
            number_of_shortcuts: 0,
        }
    }

    /// Replaces the estimator selected by the config.
    pub fn with_estimator(mut self, estimator: Box<dyn ImportanceEstimator<V>>) -> Self {
        self.estimator = estimator;
        self
    }

    /// The graph including all shortcuts inserted so far.
    pub fn graph(&self) -> &Graph<V> {
        &self.graph
    }

    pub fn level_to_vertex(&self) -> &[Vertex] {
        &self.level_to_vertex
    }

    pub fn number_of_shortcuts(&self) -> usize {
        self.number_of_shortcuts
    }

    pub fn is_finished(&self) -> bool {
        self.level_to_vertex.len() == self.graph.number_of_vertices() as usize
    }

    pub fn importance(&self, vertex: Vertex) -> i64 {
        self.estimator
            .importance(&self.graph, vertex, self.shortcuts_added[vertex as usize])
    }

    /// The uncontracted vertex of minimal importance, ties broken by the
    /// smaller index.
    pub fn next_vertex(&self) -> Option<Vertex> {
        self.graph
            .vertices()
            .filter(|&vertex| !self.graph.is_contracted(vertex))
            .map(|vertex| (self.importance(vertex), vertex))
            .min()
            .map(|(_, vertex)| vertex)
    }

    /// Rescans all remaining vertices, contracts the least important one and
    /// returns it. Returns `None` once every vertex is contracted.
    pub fn contract_next(&mut self) -> Option<Vertex> {
        let vertex = self.next_vertex()?;
        self.contract_vertex(vertex);
        Some(vertex)
    }

    pub fn contract_all(&mut self) {
        info!(
            "Contracting {} vertices and {} edges",
            self.graph.number_of_vertices(),
            self.graph.number_of_edges()
        );

        let remaining = (self.graph.number_of_vertices() as usize - self.level_to_vertex.len()) as u64;
        let pb = get_optional_progressbar(self.config.progress, "Contracting", remaining);

        match self.config.ordering {
            OrderingStrategy::FullRescan => {
                while self.contract_next().is_some() {
                    pb.inc(1);
                }
            }
            OrderingStrategy::LazyUpdate => self.contract_lazily(&pb),
        }
        pb.finish_and_clear();

        info!(
            "Finished contracting, inserted {} shortcuts, graph has {} edges",
            self.number_of_shortcuts,
            self.graph.number_of_edges()
        );
    }

    /// Only the popped vertex is re-evaluated. If its importance got worse it
    /// is pushed back, otherwise it is contracted.
    fn contract_lazily(&mut self, pb: &ProgressBar) {
        let mut queue: BinaryHeap<Reverse<(i64, Vertex)>> = self
            .graph
            .vertices()
            .filter(|&vertex| !self.graph.is_contracted(vertex))
            .map(|vertex| Reverse((self.importance(vertex), vertex)))
            .collect();

        while let Some(Reverse((old_importance, vertex))) = queue.pop() {
            let new_importance = self.importance(vertex);
            if new_importance > old_importance {
                trace!(
                    "Importance of {} rose from {} to {}",
                    vertex,
                    old_importance,
                    new_importance
                );
                queue.push(Reverse((new_importance, vertex)));
                continue;
            }

            self.contract_vertex(vertex);
            pb.inc(1);
        }
    }

    fn contract_vertex(&mut self, vertex: Vertex) {
        let shortcuts = contract(&mut self.graph, vertex);
        for shortcut in shortcuts.iter() {
            self.shortcuts_added[shortcut.tail as usize] += 1;
            self.shortcuts_added[shortcut.head as usize] += 1;
        }
        self.number_of_shortcuts += shortcuts.len();

        let level = self.level_to_vertex.len() as Level;
        self.graph.set_rank(vertex, level);
        self.level_to_vertex.push(vertex);

        debug!(
            "Contracted {:?} at level {} adding {} shortcuts",
            self.graph.id_of(vertex),
            level,
            shortcuts.len()
        );
    }

    /// Contracts all remaining vertices and splits the augmented graph into
    /// the upward and downward graph.
    pub fn build(mut self) -> ContractedGraph<V> {
        if !self.is_finished() {
            self.contract_all();
        }
        ContractedGraph::new(&self.graph, self.level_to_vertex)
    }
}
