//! Output formatting utilities

use colored::*;
use ruvector_globalcut::{NamedCut, NamedGraph};

/// Format a named minimum cut for display
pub fn format_cut(cut: &NamedCut) -> String {
    let mut output = format!("\n{}\n", "Minimum Cut".bold().green());
    output.push_str(&format!("  Weight: {}\n", cut.value.to_string().cyan()));
    output.push_str(&format!("  Phases: {}\n", cut.phases.to_string().cyan()));
    output.push_str(&format!(
        "  Left ({}): {}\n",
        cut.left.len(),
        cut.left.join(" ")
    ));
    output.push_str(&format!(
        "  Right ({}): {}\n",
        cut.right.len(),
        cut.right.join(" ")
    ));
    output.push_str(&format!(
        "  Partition product: {}\n",
        cut.size_product().to_string().cyan()
    ));

    output.push_str(&format!("\n{}\n", "Crossing edges:".bold().cyan()));
    if cut.crossing_edges.is_empty() {
        output.push_str(&format!("  {}\n", "(none)".dimmed()));
    }
    for (from, to, weight) in &cut.crossing_edges {
        if *weight == 1 {
            output.push_str(&format!("  {} / {}\n", from, to));
        } else {
            output.push_str(&format!("  {} / {} (weight {})\n", from, to, weight));
        }
    }

    output
}

/// Format graph statistics, optionally with every vertex's neighbours
pub fn format_graph_info(named: &NamedGraph, detailed: bool) -> String {
    let graph = named.graph();
    let stats = graph.stats();
    let components = graph.connected_components();

    let mut output = format!("\n{}\n", "Graph Statistics".bold().green());
    output.push_str(&format!("  Vertices: {}\n", stats.num_vertices.to_string().cyan()));
    output.push_str(&format!("  Edges: {}\n", stats.num_edges.to_string().cyan()));
    output.push_str(&format!("  Total weight: {}\n", stats.total_weight.to_string().cyan()));
    output.push_str(&format!(
        "  Degree: min {} / max {} / avg {:.2}\n",
        stats.min_degree, stats.max_degree, stats.avg_degree
    ));
    output.push_str(&format!("  Isolated vertices: {}\n", stats.isolated_vertices));
    output.push_str(&format!(
        "  Connected: {} ({} components)\n",
        if components.len() <= 1 { "yes".green() } else { "no".yellow() },
        components.len()
    ));

    if detailed {
        output.push_str(&format!("\n{}\n", "Adjacency:".bold().cyan()));
        for v in graph.vertices() {
            let neighbors: Vec<String> = graph
                .neighbors(v)
                .map(|(n, w)| {
                    let name = named.name(n).unwrap_or("?");
                    if w == 1 {
                        name.to_string()
                    } else {
                        format!("{}*{}", name, w)
                    }
                })
                .collect();
            output.push_str(&format!(
                "  {}: {}\n",
                named.name(v).unwrap_or("?").bold(),
                neighbors.join(" ")
            ));
        }
    }

    output
}

/// Format error message
pub fn format_error(msg: &str) -> String {
    format!("{} {}", "Error:".red().bold(), msg)
}

/// Format info message
pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}
