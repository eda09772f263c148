use std::path::PathBuf;

use waypath::{Dijkstra, Error, Graph, MultiPathFinder, PathFinder, Spfa};

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn test_parse_directed_graph() {
    let graph = Graph::parse("directed\n1 2 3 isolated\n1 2 5\n2 3 -1\n").unwrap();

    assert!(graph.is_directed());
    assert_eq!(graph.vertices(), &["1", "2", "3", "isolated"]);
    assert_eq!(graph.get_adjacent(&s("1")).unwrap(), &[(s("2"), 5)]);
    assert_eq!(graph.get_adjacent(&s("2")).unwrap(), &[(s("3"), -1)]);
    assert!(graph.get_adjacent(&s("isolated")).unwrap().is_empty());
}

#[test]
fn test_header_must_match_exactly() {
    for header in ["undirected", "Directed", "directed ", "digraph"] {
        let graph = Graph::parse(&format!("{}\na b\na b 1\n", header)).unwrap();
        assert!(!graph.is_directed(), "header {:?}", header);
        assert_eq!(graph.get_adjacent(&s("b")).unwrap(), &[(s("a"), 1)]);
    }

    let graph = Graph::parse("directed\r\na b\r\na b 1\r\n").unwrap();
    assert!(graph.is_directed());
}

#[test]
fn test_edge_endpoints_are_declared() {
    let graph = Graph::parse("undirected\n1\n\n2 3 7\n").unwrap();
    assert_eq!(graph.vertices(), &["1", "2", "3"]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_missing_vertex_line_gives_empty_graph() {
    let graph = Graph::parse("directed\n").unwrap();
    assert!(graph.is_empty());
}

#[test]
fn test_parse_errors() {
    assert!(matches!(Graph::parse(""), Err(Error::Parse { line: 1, .. })));
    assert!(matches!(
        Graph::parse("directed\n1 2\n1 2\n"),
        Err(Error::Parse { line: 3, .. })
    ));
    assert!(matches!(
        Graph::parse("directed\n1 2\n1 2 3\n2 1 heavy\n"),
        Err(Error::Parse { line: 4, .. })
    ));
    assert!(matches!(
        Graph::parse("directed\n1 2\n1 2 3 4\n"),
        Err(Error::Parse { line: 3, .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        Graph::from_file(data_file("does_not_exist.graph")),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_directed_text_reproduces_graph() {
    // Edges grouped by source vertex, as they are written back
    let text = "directed\n1 2 3 4\n1 2 1\n1 3 5\n2 4 1\n2 3 1\n3 4 1\n";
    let graph = Graph::parse(text).unwrap();

    assert_eq!(graph.to_string(), text);
}

#[test]
fn test_undirected_edges_written_once() {
    let mut graph: Graph<String, i64> = Graph::undirected();
    graph.add_edge(s("2"), s("3"), 4);
    graph.add_edge(s("1"), s("2"), 1);
    graph.add_edge(s("1"), s("2"), 1);
    graph.add_edge(s("3"), s("3"), 2);

    let mut out = Vec::new();
    graph.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "undirected");
    assert_eq!(lines[1], "2 3 1");
    assert_eq!(lines.len(), 2 + 4);

    let reparsed = Graph::parse(&text).unwrap();
    for v in graph.vertices() {
        let mut expected = graph.get_adjacent(v).unwrap().to_vec();
        let mut actual = reparsed.get_adjacent(v).unwrap().to_vec();
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual, "adjacency of {}", v);
    }
}

#[test]
fn test_sample_files() {
    let graph = Graph::from_file(data_file("sample_undirected.graph")).unwrap();
    let finder = PathFinder::new(&graph, Dijkstra).unwrap();
    let result = finder.get_path(&s("1"), &s("4")).unwrap().unwrap();
    assert_eq!(result.vertices, vec![s("1"), s("3"), s("2"), s("4")]);
    assert_eq!(result.cost, 3);

    let mut graph = Graph::from_file(data_file("waypoints.graph")).unwrap();
    let mut finder = MultiPathFinder::dijkstra(&mut graph).unwrap();
    let result = finder.get_path(&[s("1"), s("3"), s("4")]).unwrap().unwrap();
    assert_eq!(result.vertices, vec![s("1"), s("2"), s("3"), s("4")]);
    assert_eq!(result.cost, 3);

    let graph = Graph::from_file(data_file("negative_cycle.graph")).unwrap();
    assert!(matches!(
        PathFinder::new(&graph, Spfa),
        Err(Error::NegativeCycle { .. })
    ));
}
