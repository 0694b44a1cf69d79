//! Line-oriented command driver for exercising graphs from script files.
//!
//! Each non-blank, non-comment line is a command followed by
//! whitespace-separated arguments. Output is deterministic: node and child
//! listings are sorted and weights always print with three decimals. A
//! failing command is reported in place and the script keeps going.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use campus_paths_core::{shortest_path, AdjacencyView, LabeledGraph};
use thiserror::Error;
use tracing::debug;

/// Why a single script command could not run.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Bad arguments to {command}: {args:?}")]
    BadArguments {
        command: &'static str,
        args: Vec<String>,
    },

    #[error("no graph named {0}")]
    UnknownGraph(String),

    #[error("invalid edge weight: {0}")]
    BadWeight(String),

    #[error(transparent)]
    Graph(#[from] campus_paths_core::Error),
}

type CommandResult = Result<String, CommandError>;

/// Named graphs keyed by the script's graph names, with string nodes and
/// numeric edge labels.
pub struct ScriptDriver<W> {
    graphs: HashMap<String, LabeledGraph<String, f64>>,
    output: W,
}

impl<W: Write> ScriptDriver<W> {
    pub fn new(output: W) -> Self {
        Self {
            graphs: HashMap::new(),
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Execute every line of `input`. Only I/O failures abort the run.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                writeln!(self.output, "{line}")?;
            } else {
                let mut tokens = line.split_whitespace();
                if let Some(command) = tokens.next() {
                    let args: Vec<&str> = tokens.collect();
                    self.execute(command, &args)?;
                }
            }
            self.output.flush()?;
        }
        Ok(())
    }

    fn execute(&mut self, command: &str, args: &[&str]) -> io::Result<()> {
        let result = match command {
            "CreateGraph" => self.create_graph(args),
            "AddNode" => self.add_node(args),
            "AddEdge" => self.add_edge(args),
            "ListNodes" => self.list_nodes(args),
            "ListChildren" => self.list_children(args),
            "FindPath" => self.find_path(args),
            _ => Ok(format!("Unrecognized command: {command}")),
        };

        match result {
            Ok(text) => writeln!(self.output, "{text}"),
            Err(e) => {
                debug!(command, ?args, error = %e, "script command failed");
                let formatted: String = args.iter().map(|a| format!(" {a}")).collect();
                writeln!(self.output, "Exception while running command: {command}{formatted}")?;
                writeln!(self.output, "{e}")
            }
        }
    }

    fn graph(&self, name: &str) -> Result<&LabeledGraph<String, f64>, CommandError> {
        self.graphs
            .get(name)
            .ok_or_else(|| CommandError::UnknownGraph(name.to_string()))
    }

    fn graph_mut(&mut self, name: &str) -> Result<&mut LabeledGraph<String, f64>, CommandError> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| CommandError::UnknownGraph(name.to_string()))
    }

    fn create_graph(&mut self, args: &[&str]) -> CommandResult {
        let &[name] = args else {
            return Err(bad_arguments("CreateGraph", args));
        };
        self.graphs.insert(name.to_string(), LabeledGraph::new());
        Ok(format!("created graph {name}"))
    }

    fn add_node(&mut self, args: &[&str]) -> CommandResult {
        let &[graph, node] = args else {
            return Err(bad_arguments("AddNode", args));
        };
        self.graph_mut(graph)?.add_node(node.to_string());
        Ok(format!("added node {node} to {graph}"))
    }

    fn add_edge(&mut self, args: &[&str]) -> CommandResult {
        let &[graph, parent, child, weight] = args else {
            return Err(bad_arguments("AddEdge", args));
        };
        let weight = weight
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| CommandError::BadWeight(weight.to_string()))?;
        self.graph_mut(graph)?
            .add_edge(parent.to_string(), child.to_string(), weight);
        Ok(format!(
            "added edge {weight:.3} from {parent} to {child} in {graph}"
        ))
    }

    fn list_nodes(&mut self, args: &[&str]) -> CommandResult {
        let &[graph] = args else {
            return Err(bad_arguments("ListNodes", args));
        };
        let mut nodes: Vec<&String> = self.graph(graph)?.nodes().collect();
        nodes.sort();
        let listed: String = nodes.iter().map(|n| format!(" {n}")).collect();
        Ok(format!("{graph} contains:{listed}"))
    }

    fn list_children(&mut self, args: &[&str]) -> CommandResult {
        let &[graph, parent] = args else {
            return Err(bad_arguments("ListChildren", args));
        };
        let mut edges: Vec<(&String, f64)> = self
            .graph(graph)?
            .edges(&parent.to_string())?
            .iter()
            .map(|e| (e.child(), *e.label()))
            .collect();
        edges.sort_by(|a, b| a.0.cmp(b.0).then(a.1.total_cmp(&b.1)));
        let listed: String = edges
            .iter()
            .map(|(child, w)| format!(" {child}({w:.3})"))
            .collect();
        Ok(format!("the children of {parent} in {graph} are:{listed}"))
    }

    fn find_path(&mut self, args: &[&str]) -> CommandResult {
        let &[graph, start, dest] = args else {
            return Err(bad_arguments("FindPath", args));
        };
        let g = self.graph(graph)?;
        let (from, to) = (start.to_string(), dest.to_string());

        let mut lines = vec![format!("path from {start} to {dest}:")];
        if !g.has_node(&from) || !g.has_node(&to) {
            if !g.has_node(&from) {
                lines.push(format!("unknown: {start}"));
            }
            if !g.has_node(&to) {
                lines.push(format!("unknown: {dest}"));
            }
            return Ok(lines.join("\n"));
        }

        let view = AdjacencyView::from_graph(g)?;
        match shortest_path(&view, &from, &to) {
            None => lines.push("no path found".to_string()),
            Some(path) => {
                for segment in &path {
                    lines.push(format!(
                        "{} to {} with weight {:.3}",
                        segment.start, segment.end, segment.cost
                    ));
                }
                lines.push(format!("total cost: {:.3}", path.cost()));
            }
        }
        Ok(lines.join("\n"))
    }
}

fn bad_arguments(command: &'static str, args: &[&str]) -> CommandError {
    CommandError::BadArguments {
        command,
        args: args.iter().map(|a| a.to_string()).collect(),
    }
}

/// Run a whole script held in memory and return its output.
pub fn run_script(script: &str) -> io::Result<String> {
    let mut driver = ScriptDriver::new(Vec::new());
    driver.run(script.as_bytes())?;
    Ok(String::from_utf8_lossy(&driver.into_output()).into_owned())
}
