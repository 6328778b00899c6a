use std::io::Cursor;

use hierarchy_paths::{
    graphs::graph_factory::GraphFactory,
    search::{bidirectional::BidirectionalDijkstra, dijkstra::Dijkstra, path::distances_match},
    Error, Graph, PathFinding,
};

const FMI: &str = "\
# small example
4
4
0 100 48.0 9.0 0
1 101 48.1 9.1 0
2 102 48.2 9.2 0
3 103 48.3 9.3 0
0 1 2.0
1 2 2.0
0 2 5.0
2 3 1.0
";

#[test]
fn dijkstra_on_fmi_graph() {
    let graph = GraphFactory::from_fmi_reader(Cursor::new(FMI)).unwrap();
    let dijkstra = Dijkstra::new(&graph);

    assert_eq!(dijkstra.shortest_path_distance(&0, &3).unwrap(), Some(5.0));
    assert_eq!(dijkstra.shortest_path_distance(&3, &0).unwrap(), None);
    assert_eq!(
        dijkstra.one_to_all(&0).unwrap(),
        vec![Some(0.0), Some(2.0), Some(4.0), Some(5.0)]
    );
}

#[test]
fn oracles_agree_on_random_graphs() {
    for seed in 0..5 {
        let graph = GraphFactory::random(30, 90, seed);
        let dijkstra = Dijkstra::new(&graph);
        let bidirectional = BidirectionalDijkstra::new(&graph);

        for source in 0..30 {
            for target in 0..30 {
                assert!(distances_match(
                    dijkstra.shortest_path_distance(&source, &target).unwrap(),
                    bidirectional.shortest_path_distance(&source, &target).unwrap()
                ));
            }
        }
    }
}

#[test]
fn oracles_reject_unknown_vertices() {
    let mut graph = Graph::new();
    graph.add_vertex("a");

    let dijkstra = Dijkstra::new(&graph);
    let bidirectional = BidirectionalDijkstra::new(&graph);
    assert!(matches!(
        dijkstra.shortest_path_distance(&"a", &"b"),
        Err(Error::UnknownVertex(_))
    ));
    assert!(matches!(
        bidirectional.shortest_path_distance(&"b", &"a"),
        Err(Error::UnknownVertex(_))
    ));
}
