//! Walkthrough of the hash table and graph APIs against small fixtures.

use std::error::Error;
use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use classic_dsa::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    hash_table_demo()?;
    graph_demo()?;

    Ok(())
}

fn hash_table_demo() -> Result<(), Box<dyn Error>> {
    let mut table = HashTable::new();

    for (key, value) in [("key1", 100), ("key2", 200), ("key3", 300)] {
        table.insert(key, value)?;
        info!(key, value, index = table.hash(key), "inserted");
    }

    info!(value = ?table.get("key2"), "lookup key2");
    info!(removed = ?table.remove("key1"), "remove key1");
    info!(value = ?table.get("key1"), "lookup key1 after removal");

    // "xyz" and "zyx" collide under the polynomial hash; linear probing
    // keeps both reachable.
    let mut collisions = HashTable::new();
    collisions.insert("xyz", 1)?;
    collisions.insert("zyx", 2)?;
    info!(
        xyz = collisions.hash("xyz"),
        zyx = collisions.hash("zyx"),
        "colliding keys probe to adjacent slots"
    );

    table.display(&mut io::stdout())?;

    Ok(())
}

fn graph_demo() -> Result<(), Box<dyn Error>> {
    let mut graph = Graph::new();

    for (a, b, weight) in [
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "D", 2),
        ("C", "D", 3),
        ("C", "E", 2),
        ("D", "E", 1),
    ] {
        graph.add_edge(a, b, weight);
    }

    info!(order = graph.order(), "graph built");
    info!(traversal = ?graph.dfs("A")?, "depth-first from A");
    info!(traversal = ?graph.bfs("A")?, "breadth-first from A");

    info!(path = ?bfs_shortest_path(&graph, "A", "E")?, "fewest hops A to E");
    info!(path = ?dijkstra(&graph, "A", "E")?, "lightest path A to E");

    Ok(())
}
