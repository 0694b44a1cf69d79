//! campus-paths-core: labeled graph and shortest-path engine.
//!
//! A mutable directed labeled multigraph, immutable cost-carrying paths, and
//! a lazy-deletion Dijkstra that works over any node type. The campus layer
//! turns building and path-segment records into a symmetric adjacency view
//! and answers "cheapest walk between two buildings".
//!
//! Pure library: no I/O beyond reading record files. The HTTP server, CLI and
//! bench crates sit on top of it.

mod adjacency;
mod campus;
mod dijkstra;
mod error;
mod graph;
mod path;
pub mod records;

pub use adjacency::AdjacencyView;
pub use campus::{CampusMap, Point};
pub use dijkstra::{dijkstra, shortest_path, shortest_path_tree, SearchResult, ShortestPathTree};
pub use error::{Error, Result};
pub use graph::{Edge, LabeledGraph, Node, Weight};
pub use path::{Path, Segment};
pub use records::{Building, CampusPath};
