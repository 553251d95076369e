//! Route command handler for computing paths between locations.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use tracing::debug;

use wayfinder_lib::{find_path, RouteSummary, World};

use wayfinder_cli::output::{render_route, OutputFormat};
use wayfinder_cli::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Starting location name or id.
    pub from: String,
    /// Destination location name or id.
    pub to: String,
    /// Skip connections whose unlock requirement is not listed in `unlocked`.
    pub respect_locks: bool,
    /// Unlock requirements the traveller has satisfied.
    pub unlocked: Vec<String>,
}

/// Handle the route subcommand.
pub fn handle_route_command(
    world: &World,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let start = world.resolve(&args.from)?;
    let goal = world.resolve(&args.to)?;
    if start == goal {
        bail!(
            "You are already at {}",
            world.location_name(start).unwrap_or(&args.from)
        );
    }

    let built = if args.respect_locks {
        let unlocked: HashSet<&str> = args.unlocked.iter().map(String::as_str).collect();
        world.build_graph_where(|connection| match connection.unlock_requirement.as_deref() {
            Some(requirement) => unlocked.contains(requirement),
            None => true,
        })
    } else {
        world.build_graph()
    };
    let graph = built.context("failed to build the location graph")?;
    debug!(respect_locks = args.respect_locks, "graph ready for routing");

    let result = find_path(&graph, start, goal)?;
    if !result.found {
        bail!(
            "No route found between {} and {}. Locations may require discovering connecting paths{}.",
            world.location_name(start).unwrap_or(&args.from),
            world.location_name(goal).unwrap_or(&args.to),
            if args.respect_locks { " or unlocking connections" } else { "" }
        );
    }

    let summary = RouteSummary::from_path(world, &graph, &result)?;
    let rendered = render_route(&summary, format, &ColorPalette::detect())?;
    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
