//! Command implementations

use crate::cli::format::{format_cut, format_graph_info, format_info};
use anyhow::{anyhow, Context, Result};
use ruvector_globalcut::{parse_adjacency_list, MinCutBuilder, NamedGraph, Weight};
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Options for the `solve` command after merging flags with the config file
#[derive(Debug, Clone)]
pub struct SolveOptions<'a> {
    /// Input format (adjacency, matrix)
    pub input_format: &'a str,
    /// Output format (text, json)
    pub output_format: &'a str,
    /// Vertex name that seeds every phase
    pub start_vertex: Option<&'a str>,
    /// Stop after the first zero-weight phase
    pub stop_at_zero: bool,
}

/// Read and parse a graph file (`-` reads stdin)
pub fn load_graph(input: &Path, input_format: &str) -> Result<NamedGraph> {
    let text = if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read graph from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read graph file {}", input.display()))?
    };

    let named = match input_format {
        "adjacency" => parse_adjacency_list(&text)?,
        "matrix" => {
            let rows: Vec<Vec<Weight>> = serde_json::from_str(&text)
                .map_err(|e| anyhow!("Failed to parse weight matrix as JSON: {}", e))?;
            NamedGraph::from_matrix(&rows)?
        }
        _ => return Err(anyhow!("Unsupported input format: {}", input_format)),
    };

    tracing::debug!(
        vertices = named.len(),
        edges = named.graph().num_edges(),
        format = input_format,
        "graph loaded"
    );
    Ok(named)
}

/// Compute and print the global minimum cut
pub fn solve(input: &Path, options: &SolveOptions<'_>) -> Result<()> {
    if !matches!(options.output_format, "text" | "json") {
        return Err(anyhow!("Unsupported output format: {}", options.output_format));
    }

    let named = load_graph(input, options.input_format)?;

    let mut builder = MinCutBuilder::new().stop_at_zero(options.stop_at_zero);
    if let Some(name) = options.start_vertex {
        builder = builder.start_vertex(named.require_id(name)?);
        eprintln!("{}", format_info(&format!("Seeding every phase from `{}`", name)));
    }

    let start = Instant::now();
    let cut = named.solve(&builder.build())?;
    tracing::debug!(elapsed_ms = start.elapsed().as_millis() as u64, "solve finished");

    match options.output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&cut)?),
        _ => print!("{}", format_cut(&cut)),
    }

    Ok(())
}

/// Print graph statistics
pub fn show_info(input: &Path, input_format: &str, detailed: bool) -> Result<()> {
    let named = load_graph(input, input_format)?;
    print!("{}", format_graph_info(&named, detailed));
    Ok(())
}
