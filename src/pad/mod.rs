//! Virtual direction pad
//!
//! Turns a stream of pointer drag events into direction callbacks and an
//! indicator position the host can draw.
//!
//! Each start/move event goes through the same steps:
//! 1. normalize the container-local point to pad-centered space
//! 2. classify its angle and fire the direction's callback
//! 3. clamp the point to the travel circle and store it as the indicator
//!
//! End fires the release callback and resets the indicator to the center.

pub mod boundary;
pub mod callbacks;
pub mod direction;
pub mod geometry;


use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::PadConfig;

pub use boundary::{clamp_to_boundary, indicator_point, is_inside, project_onto_boundary, usable_radius};
pub use callbacks::{CallbackSet, PadAction};
pub use direction::{angle_of, classify, classify_point, Direction, DirectionScheme, Sector};
pub use geometry::{denormalize, normalize, PadGeometry, Point};

/// Event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PadEvent {
    /// Container was (re)measured
    Measured(PadGeometry),
    /// Pointer went down and started dragging, container-local
    DragStart(Point),
    /// Pointer moved while dragging, container-local
    DragMove(Point),
    /// Pointer lifted
    DragEnd,
}

/// Transient drag state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadState {
    /// Where the indicator sits, container-local
    pub indicator: Point,
    pub is_dragging: bool,
}

impl PadState {
    fn at_rest(geometry: &PadGeometry) -> Self {
        Self {
            indicator: geometry.center(),
            is_dragging: false,
        }
    }
}

/// A configured direction pad
#[derive(Debug)]
pub struct DirectionPad {
    scheme: DirectionScheme,
    interaction_size: f32,
    callbacks: CallbackSet,
    geometry: PadGeometry,
    state: PadState,
    /// Raw container-local position of the active drag
    touch: Option<Point>,
}

impl DirectionPad {
    /// Build a pad from a validated config
    pub fn new(config: &PadConfig, callbacks: CallbackSet) -> Self {
        Self::with_scheme(config.scheme, config.interaction_size_px(), callbacks)
    }

    /// Build a pad from raw parameters. `interaction_size` is in pixels.
    pub fn with_scheme(
        scheme: DirectionScheme,
        interaction_size: f32,
        callbacks: CallbackSet,
    ) -> Self {
        let geometry = PadGeometry::default();
        Self {
            scheme,
            interaction_size,
            callbacks,
            geometry,
            state: PadState::at_rest(&geometry),
            touch: None,
        }
    }

    pub fn scheme(&self) -> DirectionScheme {
        self.scheme
    }

    pub fn interaction_size(&self) -> f32 {
        self.interaction_size
    }

    pub fn geometry(&self) -> PadGeometry {
        self.geometry
    }

    pub fn state(&self) -> PadState {
        self.state
    }

    /// Indicator position while dragging, `None` otherwise
    pub fn indicator(&self) -> Option<Point> {
        self.state.is_dragging.then_some(self.state.indicator)
    }

    pub fn usable_radius(&self) -> f32 {
        usable_radius(&self.geometry, self.interaction_size)
    }

    /// No room to travel: unmeasured, or the inset eats the whole pad
    pub fn is_degenerate(&self) -> bool {
        self.geometry.is_unmeasured() || self.usable_radius() <= 0.0
    }

    /// Record a new container measurement (last write wins).
    ///
    /// A resting indicator follows the new center. During a drag the
    /// indicator is re-clamped against the new radius; no callback fires.
    pub fn set_geometry(&mut self, geometry: PadGeometry) {
        trace!(width = geometry.width, height = geometry.height, "Pad measured");
        self.geometry = geometry;
        match self.touch {
            Some(touch) if self.state.is_dragging => {
                self.state.indicator = self.place_indicator(touch);
            }
            _ => self.state = PadState::at_rest(&geometry),
        }
    }

    /// Pointer down. Returns the direction fired, if any.
    pub fn drag_start(&mut self, point: Point) -> Option<Direction> {
        self.track(point)
    }

    /// Pointer moved. Fires again even if the direction did not change.
    pub fn drag_move(&mut self, point: Point) -> Option<Direction> {
        self.track(point)
    }

    /// Pointer up: fire release and reset the indicator
    pub fn drag_end(&mut self) {
        self.state = PadState::at_rest(&self.geometry);
        self.touch = None;
        debug!("Pad released");
        self.callbacks.invoke(PadAction::Release);
    }

    /// Dispatch one host event
    pub fn handle(&mut self, event: PadEvent) -> Option<Direction> {
        match event {
            PadEvent::Measured(geometry) => {
                self.set_geometry(geometry);
                None
            }
            PadEvent::DragStart(point) => self.drag_start(point),
            PadEvent::DragMove(point) => self.drag_move(point),
            PadEvent::DragEnd => {
                self.drag_end();
                None
            }
        }
    }

    fn track(&mut self, point: Point) -> Option<Direction> {
        self.state.is_dragging = true;
        self.touch = Some(point);

        if self.is_degenerate() {
            debug!(
                radius = self.usable_radius(),
                "Pad has no usable radius, ignoring drag at ({}, {})", point.x, point.y
            );
            self.state.indicator = self.geometry.center();
            return None;
        }

        let angle = angle_of(normalize(point, &self.geometry));
        let direction = classify(angle, self.scheme);

        if let Some(direction) = direction {
            debug!(angle, %direction, "Pad direction");
            self.callbacks.invoke(PadAction::Move(direction));
        }

        self.state.indicator = self.place_indicator(point);
        direction
    }

    /// Indicator for a raw touch under the current geometry
    fn place_indicator(&self, touch: Point) -> Point {
        if self.is_degenerate() {
            return self.geometry.center();
        }
        let normalized = normalize(touch, &self.geometry);
        indicator_point(touch, normalized, self.usable_radius(), &self.geometry)
    }
}
