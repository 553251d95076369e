use anyhow::{Context, Result};
use serde::Serialize;

use wayfinder_lib::World;

use wayfinder_cli::output::OutputFormat;

#[derive(Debug, Serialize)]
struct LocationRow<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    connections: usize,
}

/// Handle the locations subcommand: list graph locations in registration order.
pub fn handle_locations_command(world: &World, format: OutputFormat) -> Result<()> {
    let graph = world
        .build_graph()
        .context("failed to build the location graph")?;

    let rows: Vec<LocationRow<'_>> = graph
        .all_locations()
        .into_iter()
        .map(|id| LocationRow {
            id,
            name: world.location_name(id),
            connections: graph.edges(id).len(),
        })
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} locations, {} connections",
        rows.len(),
        graph.edge_count()
    );
    for row in rows {
        println!(
            "{:>5}  {} ({} outgoing)",
            row.id,
            row.name.unwrap_or("<unknown>"),
            row.connections
        );
    }
    Ok(())
}
