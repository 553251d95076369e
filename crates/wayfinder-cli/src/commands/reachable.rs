use anyhow::{Context, Result};
use serde::Serialize;

use wayfinder_lib::{is_reachable, World};

use wayfinder_cli::output::OutputFormat;

#[derive(Debug, Serialize)]
struct Reachability {
    from: u32,
    to: u32,
    reachable: bool,
}

/// Handle the reachable subcommand. Lock state is ignored.
pub fn handle_reachable_command(
    world: &World,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let start = world.resolve(from)?;
    let goal = world.resolve(to)?;
    let graph = world
        .build_graph()
        .context("failed to build the location graph")?;

    let reachable = is_reachable(&graph, start, goal);
    match format {
        OutputFormat::Json => {
            let verdict = Reachability {
                from: start,
                to: goal,
                reachable,
            };
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        _ => println!("{}", if reachable { "reachable" } else { "unreachable" }),
    }
    Ok(())
}
