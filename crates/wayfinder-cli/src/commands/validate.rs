use anyhow::{anyhow, bail, Context, Result};

use wayfinder_lib::World;

use wayfinder_cli::output::{render_connectivity, OutputFormat};

/// Handle the validate subcommand.
///
/// Uses the world's declared start when `start` is omitted. Fails when any
/// declared location cannot be reached, including ones with no connections.
pub fn handle_validate_command(
    world: &World,
    format: OutputFormat,
    start: Option<&str>,
) -> Result<()> {
    let start = match start {
        Some(query) => world.resolve(query)?,
        None => world
            .start
            .ok_or_else(|| anyhow!("world data declares no start location; pass --start"))?,
    };
    let graph = world
        .build_graph()
        .context("failed to build the location graph")?;

    let report = world.check_connectivity(&graph, start)?;
    print!("{}", render_connectivity(&report, world, format)?);
    if format == OutputFormat::Json {
        println!();
    }

    if !report.is_connected() {
        bail!(
            "{} location(s) unreachable from {}",
            report.unreachable.len(),
            start
        );
    }
    Ok(())
}
