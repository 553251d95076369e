use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{LocationGraph, LocationId};
use crate::path::PathResult;
use crate::world::World;

/// Total danger above which a route is flagged as high danger.
pub const HIGH_DANGER_THRESHOLD: u64 = 50;

/// Coarse danger classification for a whole route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerRating {
    Low,
    High,
}

impl DangerRating {
    pub fn from_total(total_danger: u64) -> Self {
        if total_danger > HIGH_DANGER_THRESHOLD {
            DangerRating::High
        } else {
            DangerRating::Low
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Markdown,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// A stop on the route, with the figures of the hop leaving it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Travel time of the hop to the next stop; absent on the final step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger: Option<u8>,
    /// Unlock requirement on the hop to the next stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_by: Option<String>,
}

impl RouteStep {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }

    /// Marker used in listings: `@` for the start, `*` for the goal, `->` between.
    pub fn marker(&self, last_index: usize) -> &'static str {
        if self.index == 0 {
            "@"
        } else if self.index == last_index {
            "*"
        } else {
            "->"
        }
    }
}

/// Structured representation of a found path that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub hops: usize,
    pub total_time: u64,
    pub total_danger: u64,
    pub danger_rating: DangerRating,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a found [`PathResult`] into a summary with resolved names and
    /// per-hop figures.
    pub fn from_path(world: &World, graph: &LocationGraph, result: &PathResult) -> Result<Self> {
        let (Some(&first), Some(&last)) = (result.path.first(), result.path.last()) else {
            return Err(Error::EmptyPath);
        };

        let name_of = |id: LocationId| world.location_name(id).map(str::to_string);
        let steps = result
            .path
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let hop = result
                    .path
                    .get(index + 1)
                    .and_then(|&next| graph.get_edge(id, next));
                RouteStep {
                    index,
                    id,
                    name: name_of(id),
                    travel_time: hop.as_ref().map(|edge| edge.travel_time_hours),
                    danger: hop.as_ref().map(|edge| edge.danger_level),
                    locked_by: hop.and_then(|edge| edge.unlock_requirement),
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            hops: result.hop_count(),
            total_time: result.total_time,
            total_danger: result.total_danger,
            danger_rating: DangerRating::from_total(result.total_danger),
            start: RouteEndpoint {
                id: first,
                name: name_of(first),
            },
            goal: RouteEndpoint {
                id: last,
                name: name_of(last),
            },
            steps,
        })
    }

    /// Whether any hop on the route carries an unlock requirement.
    pub fn has_locked_hops(&self) -> bool {
        self.steps.iter().any(|step| step.locked_by.is_some())
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Markdown => self.render_markdown(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} {}, {} {}, danger {})",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            plural(self.hops as u64, "hop", "hops"),
            self.total_time,
            plural(self.total_time, "hour", "hours"),
            self.total_danger
        );
        let last = self.steps.len().saturating_sub(1);
        for step in &self.steps {
            let _ = write!(buffer, "  {} {}", step.marker(last), step.display_name());
            if let (Some(time), Some(danger)) = (step.travel_time, step.danger) {
                let _ = write!(
                    buffer,
                    " ({} {}, danger: {})",
                    time,
                    plural(u64::from(time), "hour", "hours"),
                    danger
                );
            }
            if let Some(requirement) = &step.locked_by {
                let _ = write!(buffer, " [requires {requirement}]");
            }
            let _ = writeln!(buffer);
        }
        buffer
    }

    fn render_markdown(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} {}, {}h, danger {})",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            plural(self.hops as u64, "hop", "hops"),
            self.total_time,
            self.total_danger
        );
        for step in &self.steps {
            let _ = write!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index,
                step.display_name(),
                step.id
            );
            if let (Some(time), Some(danger)) = (step.travel_time, step.danger) {
                let _ = write!(buffer, ": {time}h, danger {danger}");
            }
            if let Some(requirement) = &step.locked_by {
                let _ = write!(buffer, " 🔒 `{requirement}`");
            }
            let _ = writeln!(buffer);
        }
        buffer
    }
}

fn plural(count: u64, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
