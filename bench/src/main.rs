use std::time::Instant;

use campus_paths_core::{dijkstra, shortest_path_tree, AdjacencyView};
use clap::{Parser, ValueEnum};

type Generator = fn(u64) -> campus_paths_core::Result<AdjacencyView<u64>>;

#[derive(Parser)]
#[command(name = "campus-paths-bench")]
#[command(about = "Time view construction and Dijkstra queries on synthetic weighted graphs")]
struct Cli {
    /// Which generator to run
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Target node count per generator
    #[arg(default_value_t = 100_000)]
    node_count: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Run all generators and benchmark each
    All,
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Two dense cliques connected by a thin bridge
    Barbell,
    /// Square lattice, like a street grid
    Grid,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("campus-paths-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, Generator)> = match cli.mode {
        Mode::Lsystem => vec![("L-system tree", gen_lsystem)],
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Barbell => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        Mode::Grid => vec![("Grid lattice", gen_grid)],
        Mode::All => vec![
            ("L-system tree", gen_lsystem as Generator),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("Grid lattice", gen_grid),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, cli.node_count)?;
    }
    Ok(())
}

fn run_benchmark(name: &str, generator: Generator, node_count: u64) -> anyhow::Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let view = generator(node_count)?;
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} nodes, {} directed edges",
        gen_time.as_secs_f64(),
        view.node_count(),
        view.edge_count()
    );

    // Single query: node 0 to the last node
    let far_node = node_count.saturating_sub(1);
    let t = Instant::now();
    let result = dijkstra(&view, &0, &far_node);
    let elapsed = t.elapsed();
    match &result.path {
        Some(p) => println!(
            "Dijkstra 0 -> {}: cost {:.0}, {} hops in {:.1}ms",
            far_node,
            p.cost(),
            p.len(),
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!(
            "Dijkstra 0 -> {}: no path ({:.1}ms)",
            far_node,
            elapsed.as_secs_f64() * 1000.0
        ),
    }
    println!(
        "{:>8} settled, {:>8} pushed",
        result.nodes_settled, result.paths_pushed
    );

    let t = Instant::now();
    let tree = shortest_path_tree(&view, &0);
    let elapsed = t.elapsed();
    let deepest = tree.nodes().filter_map(|n| tree.depth(n)).max().unwrap_or(0);
    println!(
        "Shortest-path tree from 0: {} reached, deepest {} hops in {:.1}ms",
        tree.len(),
        deepest,
        elapsed.as_secs_f64() * 1000.0
    );
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: deterministic, undirected, weights in 1..=100
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    fn weight(&mut self) -> f64 {
        (self.next(100) + 1) as f64
    }
}

/// L-system fractal tree: each node spawns three children.
///
/// Produces log-depth paths with exponential width. Exactly one route to
/// every node, so the heap never holds a stale entry.
fn gen_lsystem(node_count: u64) -> campus_paths_core::Result<AdjacencyView<u64>> {
    let mut view = AdjacencyView::with_capacity(node_count as usize);
    let mut rng = FastRng::new(42);

    let branching = 3u64;
    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                view.insert_undirected(parent, child, rng.weight())?;
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    Ok(view)
}

/// Small-world (Watts-Strogatz): ring lattice with random rewiring.
///
/// High clustering with short hop counts; many equal-length alternatives.
fn gen_small_world(node_count: u64) -> campus_paths_core::Result<AdjacencyView<u64>> {
    let k = 5u64; // neighbors on each side
    let p = 0.05f64; // rewire probability
    let mut view = AdjacencyView::with_capacity(node_count as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let mut neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    neighbor = rewired;
                }
            }
            view.insert_undirected(i, neighbor, rng.weight())?;
        }
    }

    Ok(view)
}

/// Erdos-Renyi: about five uniform random edges per node, no structure.
fn gen_random(node_count: u64) -> campus_paths_core::Result<AdjacencyView<u64>> {
    let target_edges = node_count * 5;
    let mut view = AdjacencyView::with_capacity(node_count as usize);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            view.insert_undirected(from, to, rng.weight())?;
        }
    }

    Ok(view)
}

/// Barbell: two dense cliques joined by a chain of ten bridge nodes.
///
/// Every route between the halves is forced through the bottleneck.
fn gen_barbell(node_count: u64) -> campus_paths_core::Result<AdjacencyView<u64>> {
    let bridge_len = 10u64;
    let clique_size = node_count.saturating_sub(bridge_len) / 2;
    let mut view = AdjacencyView::with_capacity(node_count as usize);
    let mut rng = FastRng::new(99999);

    if clique_size < 2 {
        return Ok(view);
    }

    let b_start = clique_size + bridge_len;
    for base in [0, b_start] {
        for i in 0..clique_size {
            for _ in 0..10u64.min(clique_size - 1) {
                let target = rng.next(clique_size);
                if target != i {
                    view.insert_undirected(base + i, base + target, rng.weight())?;
                }
            }
        }
    }

    // Bridge: chain from the last node of A to the first node of B
    for id in clique_size..=b_start {
        view.insert_undirected(id - 1, id, rng.weight())?;
    }

    // Odd counts leave one node past clique B; tie it on so 0 -> last resolves.
    for id in (b_start + clique_size)..node_count {
        view.insert_undirected(id - 1, id, rng.weight())?;
    }

    Ok(view)
}

/// Square lattice with right and down streets, like a city grid.
fn gen_grid(node_count: u64) -> campus_paths_core::Result<AdjacencyView<u64>> {
    let side = ((node_count as f64).sqrt() as u64).max(1);
    let mut view = AdjacencyView::with_capacity(node_count as usize);
    let mut rng = FastRng::new(31337);

    for id in 0..node_count {
        if id % side + 1 < side && id + 1 < node_count {
            view.insert_undirected(id, id + 1, rng.weight())?;
        }
        if id + side < node_count {
            view.insert_undirected(id, id + side, rng.weight())?;
        }
    }

    Ok(view)
}
