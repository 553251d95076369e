mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::output::OutputFormat;
use wayfinder_lib::{resolve_world_path, World};

use commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Location graph routing and world validation")]
struct Cli {
    /// Override the world data file or directory (falls back to WAYFINDER_WORLD).
    #[arg(long, global = true)]
    world: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the quickest route between two locations.
    Route {
        /// Starting location name or id.
        #[arg(long = "from")]
        from: String,
        /// Destination location name or id.
        #[arg(long = "to")]
        to: String,
        /// Only travel over connections that are unlocked.
        #[arg(long)]
        respect_locks: bool,
        /// Unlock requirement already satisfied (repeatable).
        #[arg(long = "unlocked", requires = "respect_locks")]
        unlocked: Vec<String>,
    },
    /// Report whether one location can be reached from another.
    Reachable {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// List the direct connections leaving a location.
    Neighbours {
        /// Location name or id.
        location: String,
    },
    /// List every location in the graph.
    Locations,
    /// Check that every location is reachable from a start location.
    Validate {
        /// Start location name or id; defaults to the world's declared start.
        #[arg(long)]
        start: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let world = load_world(cli.world.as_deref())?;

    match cli.command {
        Command::Route {
            from,
            to,
            respect_locks,
            unlocked,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                respect_locks,
                unlocked,
            };
            commands::route::handle_route_command(&world, cli.format, &args)
        }
        Command::Reachable { from, to } => {
            commands::reachable::handle_reachable_command(&world, cli.format, &from, &to)
        }
        Command::Neighbours { location } => {
            commands::neighbours::handle_neighbours_command(&world, cli.format, &location)
        }
        Command::Locations => commands::locations::handle_locations_command(&world, cli.format),
        Command::Validate { start } => {
            commands::validate::handle_validate_command(&world, cli.format, start.as_deref())
        }
    }
}

fn load_world(target: Option<&Path>) -> Result<World> {
    let path = resolve_world_path(target).context("failed to locate world data")?;
    World::from_path(&path)
        .with_context(|| format!("failed to load world data from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
