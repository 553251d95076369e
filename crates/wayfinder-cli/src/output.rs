//! Output formatting for CLI commands.

use std::fmt::Write;

use clap::ValueEnum;
use wayfinder_lib::{ConnectivityReport, DangerRating, RouteRenderMode, RouteSummary, World};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text listing.
    #[default]
    Text,
    /// Coloured terminal report.
    Rich,
    /// Markdown suitable for notes and chat.
    Markdown,
    /// Machine-readable JSON.
    Json,
}

/// Render a route summary in the requested format.
pub fn render_route(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: &ColorPalette,
) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Text => summary.render(RouteRenderMode::PlainText),
        OutputFormat::Markdown => summary.render(RouteRenderMode::Markdown),
        OutputFormat::Rich => render_route_rich(summary, palette),
        OutputFormat::Json => serde_json::to_string_pretty(summary)?,
    })
}

/// Coloured route report with per-hop figures and a travel hint.
pub fn render_route_rich(summary: &RouteSummary, p: &ColorPalette) -> String {
    let mut buffer = String::new();
    let goal = summary.goal.name.as_deref().unwrap_or("destination");
    let danger_color = match summary.danger_rating {
        DangerRating::High => p.red,
        DangerRating::Low => p.yellow,
    };

    let _ = writeln!(buffer, "{}=== Route to {} ==={}", p.cyan, goal, p.reset);
    let _ = writeln!(
        buffer,
        "{}Distance:{} {} location{}",
        p.green,
        p.reset,
        summary.hops,
        if summary.hops == 1 { "" } else { "s" }
    );
    let _ = writeln!(
        buffer,
        "{}Travel Time:{} {} hour{}",
        p.green,
        p.reset,
        summary.total_time,
        if summary.total_time == 1 { "" } else { "s" }
    );
    let _ = writeln!(
        buffer,
        "{}Danger Level:{} {}",
        danger_color, p.reset, summary.total_danger
    );
    let _ = writeln!(buffer, "\n{}Path:{}", p.cyan, p.reset);

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let _ = write!(
            buffer,
            "  {}{}{} {}{}{}",
            p.gray,
            step.marker(last),
            p.reset,
            p.white_bold,
            step.display_name(),
            p.reset
        );
        if let (Some(time), Some(danger)) = (step.travel_time, step.danger) {
            let _ = write!(
                buffer,
                " ({} hour{}, danger: {})",
                time,
                if time == 1 { "" } else { "s" },
                danger
            );
        }
        if let Some(requirement) = &step.locked_by {
            let _ = write!(buffer, " {}[requires {}]{}", p.red, requirement, p.reset);
        }
        let _ = writeln!(buffer);
    }

    if let Some(next) = summary.steps.get(1) {
        let _ = writeln!(
            buffer,
            "\n{}Hint:{} travel to {} first",
            p.gray,
            p.reset,
            next.display_name()
        );
    }
    buffer
}

/// Render a connectivity report, naming each unreachable location.
pub fn render_connectivity(
    report: &ConnectivityReport,
    world: &World,
    format: OutputFormat,
) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(report);
    }

    let start = world.location_name(report.start).unwrap_or("<unknown>");
    let mut buffer = String::new();
    if report.is_connected() {
        let _ = writeln!(
            buffer,
            "All {} locations reachable from {} ({})",
            report.locations, start, report.start
        );
        return Ok(buffer);
    }

    let _ = writeln!(
        buffer,
        "{} of {} locations unreachable from {} ({}):",
        report.unreachable.len(),
        report.locations,
        start,
        report.start
    );
    for id in &report.unreachable {
        let name = world.location_name(*id).unwrap_or("<unknown>");
        let _ = writeln!(buffer, "- {} ({})", name, id);
    }
    Ok(buffer)
}
