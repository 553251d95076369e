// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// loads the world once and dispatches to these handlers.

pub mod locations;
pub mod neighbours;
pub mod reachable;
pub mod route;
pub mod validate;
