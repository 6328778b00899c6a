use itertools::Itertools;

use crate::graphs::{graph::Graph, Vertex, VertexKey, Weight, WeightedEdge};

/// Contracts `vertex`.
///
/// For every uncontracted in-neighbor `tail` and out-neighbor `head` with
/// `tail != head`, the path `tail -> vertex -> head` becomes a shortcut unless
/// a direct edge `tail -> head` of at most the same weight already exists.
/// An existing heavier edge is overwritten. No witness search is performed.
///
/// Returns the inserted shortcuts. The rank of `vertex` is not touched.
pub fn contract<V: VertexKey>(graph: &mut Graph<V>, vertex: Vertex) -> Vec<WeightedEdge> {
    let in_neighbors = uncontracted_in_neighbors(graph, vertex);
    let out_neighbors = uncontracted_out_neighbors(graph, vertex);

    let mut shortcuts = Vec::new();

    for (&(tail, in_weight), &(head, out_weight)) in
        in_neighbors.iter().cartesian_product(out_neighbors.iter())
    {
        if tail == head {
            continue;
        }

        let shortcut_weight = in_weight + out_weight;
        let needs_shortcut = graph
            .get_weight(tail, head)
            .map_or(true, |current_weight| current_weight > shortcut_weight);

        if needs_shortcut {
            let shortcut = WeightedEdge::new(tail, head, shortcut_weight);
            graph.set_shortcut(shortcut);
            shortcuts.push(shortcut);
        }
    }

    shortcuts
}

/// Uncontracted vertices with an edge into `vertex`, each with the lightest
/// such edge, sorted by index.
pub fn uncontracted_in_neighbors<V: VertexKey>(
    graph: &Graph<V>,
    vertex: Vertex,
) -> Vec<(Vertex, Weight)> {
    lightest_per_neighbor(
        graph,
        vertex,
        graph.in_edges(vertex).iter().map(|edge| (edge.tail, edge.weight)),
    )
}

/// Uncontracted vertices reached by an edge from `vertex`, each with the
/// lightest such edge, sorted by index.
pub fn uncontracted_out_neighbors<V: VertexKey>(
    graph: &Graph<V>,
    vertex: Vertex,
) -> Vec<(Vertex, Weight)> {
    lightest_per_neighbor(
        graph,
        vertex,
        graph.out_edges(vertex).iter().map(|edge| (edge.head, edge.weight)),
    )
}

fn lightest_per_neighbor<V: VertexKey>(
    graph: &Graph<V>,
    vertex: Vertex,
    edges: impl Iterator<Item = (Vertex, Weight)>,
) -> Vec<(Vertex, Weight)> {
    edges
        .filter(|&(neighbor, _)| neighbor != vertex && !graph.is_contracted(neighbor))
        .sorted_by_key(|&(neighbor, _)| neighbor)
        .coalesce(|a, b| {
            if a.0 == b.0 {
                Ok((a.0, a.1.min(b.1)))
            } else {
                Err((a, b))
            }
        })
        .collect()
}
