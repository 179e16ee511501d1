//! Deterministic replay of host scroll scenarios.
//!
//! A scenario describes a grid and a sequence of host events. Replaying it
//! against a [`SimulatedHost`] yields the engine's state after every event,
//! including any host corrections and their echoes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrollError};
use crate::mapping::ItemOffsetMapping;
use crate::types::{GridWindow, ScrollConfig, ScrollMode, ScrollSnapshot, Span};
use crate::viewer::{apply_host_scroll, dispatch_pending, ScrollHost, SimulatedHost, VirtualGrid};

/// Upper bound on host events delivered per scenario step.
const MAX_EVENTS_PER_STEP: usize = 16;

/// Items along one axis.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    pub count: usize,
    pub mapping: ItemOffsetMapping,
}

/// Visible size of the host container.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewportSpec {
    pub width: f64,
    pub height: f64,
}

/// One scripted input.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReplayEvent {
    /// User scroll to a host position
    Scroll { left: f64, top: f64 },
    /// Programmatic scroll to logical offsets
    #[serde(rename_all = "camelCase")]
    ScrollTo {
        row_offset: Option<f64>,
        column_offset: Option<f64>,
    },
    /// Programmatic scroll to a cell
    ScrollToItem {
        row: Option<usize>,
        column: Option<usize>,
        #[serde(default)]
        mode: ScrollMode,
    },
    /// Programmatic scroll to a logical area
    ScrollToArea {
        row: Option<Span>,
        column: Option<Span>,
        #[serde(default)]
        mode: ScrollMode,
    },
    /// Container resize
    Resize { width: f64, height: f64 },
}

/// A grid plus the events to feed it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub config: ScrollConfig,
    pub rows: AxisSpec,
    pub columns: AxisSpec,
    pub viewport: ViewportSpec,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

/// Engine state after one scenario event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    /// Index of the event in the scenario
    pub event: usize,
    /// Host `(scrollLeft, scrollTop)` after the event settled
    pub host_position: (f64, f64),
    /// Host scroll events the engine handled for this step
    pub host_events: usize,
    /// Corrections and programmatic scrolls written to the host
    pub host_writes: usize,
    pub snapshot: ScrollSnapshot,
    pub window: GridWindow,
}

impl Scenario {
    /// Parse a scenario from JSON.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a mapping is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        if scenario.viewport.width < 0.0 || scenario.viewport.height < 0.0 {
            return Err(ScrollError::Scenario(format!(
                "viewport must be non-negative, got {}x{}",
                scenario.viewport.width, scenario.viewport.height
            )));
        }
        Ok(scenario)
    }

    /// Replay every event and collect the resulting steps.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or a step leaves
    /// host events undelivered (a correction feedback loop).
    pub fn run(&self) -> Result<Vec<ReplayStep>> {
        let mut grid = VirtualGrid::new(
            self.rows.count,
            self.rows.mapping.clone(),
            self.columns.count,
            self.columns.mapping.clone(),
            self.config,
        )?;
        grid.set_viewport_size(self.viewport.width, self.viewport.height);
        let mut host = SimulatedHost::for_grid(&grid, self.viewport.width, self.viewport.height);

        let mut steps = Vec::with_capacity(self.events.len());
        for (index, event) in self.events.iter().enumerate() {
            let writes_before = host.programmatic_scrolls();
            match event {
                ReplayEvent::Scroll { left, top } => host.user_scroll(*left, *top),
                ReplayEvent::ScrollTo {
                    row_offset,
                    column_offset,
                } => {
                    let scroll = grid.scroll_to(*row_offset, *column_offset);
                    apply_host_scroll(&mut host, scroll);
                }
                ReplayEvent::ScrollToItem { row, column, mode } => {
                    let scroll = grid.scroll_to_item(*row, *column, *mode);
                    apply_host_scroll(&mut host, scroll);
                }
                ReplayEvent::ScrollToArea { row, column, mode } => {
                    let scroll = grid.scroll_to_area(*row, *column, *mode);
                    apply_host_scroll(&mut host, scroll);
                }
                ReplayEvent::Resize { width, height } => {
                    host.resize(*width, *height);
                    grid.set_viewport_size(*width, *height);
                }
            }

            let handled = dispatch_pending(&mut grid, &mut host, MAX_EVENTS_PER_STEP);
            if host.pending_events() > 0 {
                return Err(ScrollError::Scenario(format!(
                    "event {index} did not settle after {MAX_EVENTS_PER_STEP} host events"
                )));
            }

            steps.push(ReplayStep {
                event: index,
                host_position: host.scroll_position(),
                host_events: handled.len(),
                host_writes: host.programmatic_scrolls() - writes_before,
                snapshot: grid.snapshot(),
                window: grid.window(),
            });
        }
        log::debug!("replay: {} events, {} steps", self.events.len(), steps.len());
        Ok(steps)
    }
}
