use anyhow::{Context, Result};

use wayfinder_lib::{Edge, World};

use wayfinder_cli::output::OutputFormat;

/// Handle the neighbours subcommand: list outgoing connections, newest first.
pub fn handle_neighbours_command(world: &World, format: OutputFormat, location: &str) -> Result<()> {
    let id = world.resolve(location)?;
    let graph = world
        .build_graph()
        .context("failed to build the location graph")?;

    let edges: Vec<&Edge> = graph.edges(id).collect();
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&edges)?);
        return Ok(());
    }

    let name = world.location_name(id).unwrap_or("<unknown>");
    if edges.is_empty() {
        println!("{} ({}) has no outgoing connections", name, id);
        return Ok(());
    }

    println!("Connections from {} ({}):", name, id);
    for edge in edges {
        let target = world.location_name(edge.to).unwrap_or("<unknown>");
        let lock = edge
            .unlock_requirement
            .as_deref()
            .map(|requirement| format!(" [requires {requirement}]"))
            .unwrap_or_default();
        println!(
            "- {} ({}): {}h, danger {}{}",
            target, edge.to, edge.travel_time_hours, edge.danger_level, lock
        );
    }
    Ok(())
}
