//! Basic build -> mutate -> traverse flow.

use graphwalk::*;

fn main() -> GraphResult<()> {
    // Create the vertices
    let a = Vertex::new("A");
    let b = Vertex::new("B");
    let c = Vertex::new("C");
    let d = Vertex::new("D");
    let e = Vertex::new("E");
    let f = Vertex::new("F");

    // Edges add their endpoints implicitly
    let mut graph = Graph::new();
    graph.add_edge(&a, &b);
    graph.add_edge(&a, &c);
    graph.add_edge(&b, &d);
    graph.add_edge(&c, &e);
    graph.add_edge(&d, &e);
    graph.add_edge(&d, &f);

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    println!("Depth-first from A:   {:?}", graph.depth_first_search(&a));
    println!("Breadth-first from A: {:?}", graph.breadth_first_search(&a));

    // Bounded traversal with depths
    let params = TraversalParams {
        order: TraversalOrder::BreadthFirst,
        max_depth: 2,
        ..TraversalParams::default()
    };
    let walk = graph.traverse(&a, &params)?;
    for id in &walk.visited {
        if let Some(v) = graph.vertex(*id) {
            println!("  [depth {}] {}", walk.depths[id], v.value());
        }
    }

    // Cut D out; F becomes unreachable
    graph.remove_vertex(&d);
    println!("After removing D:     {:?}", graph.breadth_first_search(&a));
    graph.check_invariants()?;

    Ok(())
}
