//! compad - virtual direction pad
//!
//! Library crate exposing the pad core (geometry, boundary clamping,
//! direction classification), its configuration and gesture traces.

pub mod cli;
pub mod config;
pub mod error;
pub mod pad;
pub mod trace;

pub use config::PadConfig;
pub use error::{Error, Result};
pub use pad::{
    CallbackSet, Direction, DirectionPad, DirectionScheme, PadAction, PadEvent, PadGeometry,
    PadState, Point,
};
