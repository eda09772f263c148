use colored::*;
use waypath::algorithm::AlgorithmKind;
use waypath::{Graph, MultiPathFinder, PathFinder};

const CITY: &str = "\
undirected
depot market harbor mill school tower
depot market 4
depot harbor 1
harbor market 1
market mill 1
harbor mill 5
mill school 2
school tower 3
harbor tower 9
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = Graph::parse(CITY)?;
    println!("{}", "Shortest routes in a small town".bright_green());
    println!("Graph has {} places and {} adjacency entries\n", graph.len(), graph.edge_count());

    let start = "depot".to_string();
    let goal = "tower".to_string();
    for kind in AlgorithmKind::ALL {
        let finder = PathFinder::new(&graph, kind)?;
        match finder.get_path(&start, &goal)? {
            Some(path) => println!(
                "{:>9}: {} (cost {})",
                kind.to_string().bright_yellow(),
                path.vertices.join(" -> "),
                path.cost
            ),
            None => println!("{:>9}: {}", kind.to_string().bright_yellow(), "unreachable".red()),
        }
    }

    let before = graph.clone();
    let tour = ["depot", "school", "market", "tower"].map(String::from);
    let mut router = MultiPathFinder::dijkstra(&mut graph)?;
    println!("\n{}", "Errand run depot -> school -> market -> tower".bright_cyan());
    match router.get_path(&tour)? {
        Some(path) => println!("  {} (cost {})", path.vertices.join(" -> "), path.cost),
        None => println!("  {}", "no route keeps the errand order".red()),
    }
    assert_eq!(before, graph, "routing must leave the graph untouched");
    println!("{}", "Graph restored after routing".green());

    Ok(())
}
