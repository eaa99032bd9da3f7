//! CLI entry point for the `dskit` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use dskit::collection::Collection;
use dskit::graph::Graph;
use dskit::key::Key;
use dskit::linked_list::LinkedList;
use dskit::queue::Queue;
use dskit::stack::Stack;
use dskit::tree::Tree;

#[derive(Parser)]
#[command(name = "dskit", about = "Build and inspect classic data structures")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert keys into a binary search tree and print them in order
    Tree {
        /// Keys to insert; integers, floats, true/false or text
        keys: Vec<String>,
        /// Report whether this key is in the tree
        #[arg(long)]
        find: Option<String>,
    },
    /// Build an undirected graph and traverse it breadth-first
    Graph {
        /// An edge written as `u-v`; repeat for more edges
        #[arg(long = "edge", value_parser = parse_edge)]
        edges: Vec<(String, String)>,
        /// Vertex to start the breadth-first traversal from
        #[arg(long)]
        bfs: Option<String>,
    },
    /// Walk through every data structure with small fixed inputs
    Demo,
}

fn parse_edge(s: &str) -> Result<(String, String), String> {
    match s.split_once('-') {
        Some((u, v)) if !u.is_empty() && !v.is_empty() => Ok((u.to_string(), v.to_string())),
        _ => Err(format!("expected an edge like `a-b`, got `{}`", s)),
    }
}

fn cmd_tree(keys: &[String], find: Option<&str>) -> dskit::Result<()> {
    let tree = Tree::try_from_keys(keys.iter().map(|k| Key::parse(k)))?;

    println!("{}", tree);
    println!("keys: {}, height: {}", tree.len(), tree.height());
    if let Some(find) = find {
        println!("contains {}: {}", find, tree.contains(&Key::parse(find)));
    }

    Ok(())
}

fn cmd_graph(edges: Vec<(String, String)>, bfs: Option<&str>) {
    let mut graph = Graph::new();
    for (u, v) in edges {
        graph.add_edge(u, v);
    }

    print!("{}", graph);
    if let Some(start) = bfs {
        let start = start.to_string();
        let order: Vec<&str> = graph.bfs(&start).map(String::as_str).collect();
        println!("bfs: {}", order.join(" "));
    }
}

fn cmd_demo() -> dskit::Result<()> {
    let mut list = LinkedList::new();
    for x in 1..=5 {
        list.insert_at_end(x);
    }
    println!("{}", list);

    let mut queue: Queue<_> = (1..=5).collect();
    let mut dequeued = Vec::new();
    while !queue.is_empty() {
        dequeued.push(queue.dequeue()?);
    }
    println!("dequeued: {:?}", dequeued);

    let mut stack = Stack::with_max_size(5);
    for x in 1..=5 {
        stack.push(x)?;
    }
    let full = stack.push(6).is_err();
    println!("{} (full: {})", stack, full);
    let mut popped = Vec::new();
    while let Ok(x) = Collection::remove(&mut stack) {
        popped.push(x);
    }
    println!("popped: {:?}", popped);

    let tree = Tree::try_from_keys([5, 3, 7, 1, 4])?;
    println!("tree: {} | contains 4: {}", tree, tree.contains(&4));

    let mut graph = Graph::new();
    for v in 1..=5 {
        graph.add_vertex(v);
    }
    for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)] {
        graph.add_edge(u, v);
    }
    print!("{}", graph);
    let order: Vec<_> = graph.bfs(&1).collect();
    println!("bfs from 1: {:?}", order);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Tree { keys, find } => cmd_tree(&keys, find.as_deref()),
        Commands::Graph { edges, bfs } => {
            cmd_graph(edges, bfs.as_deref());
            Ok(())
        }
        Commands::Demo => cmd_demo(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(2);
    }
}
