//! Host callbacks fired by the pad
//!
//! One map keyed by [`PadAction`]. A missing entry is a no-op, so hosts only
//! register what they care about.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::direction::Direction;

/// Something the pad reports to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadAction {
    /// Pointer held in a direction (fired on every start/move)
    Move(Direction),
    /// Pointer lifted
    Release,
}

impl PadAction {
    /// Every action a pad can fire, across both schemes
    pub fn all() -> impl Iterator<Item = PadAction> {
        Direction::ALL
            .into_iter()
            .map(PadAction::Move)
            .chain(std::iter::once(PadAction::Release))
    }
}

impl fmt::Display for PadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadAction::Move(direction) => write!(f, "move_{}", direction),
            PadAction::Release => f.write_str("release"),
        }
    }
}

type Action = Box<dyn FnMut()>;

/// Mapping from [`PadAction`] to an optional zero-argument action
#[derive(Default)]
pub struct CallbackSet {
    actions: HashMap<PadAction, Action>,
}

impl CallbackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the action for a direction
    pub fn on_move<F>(mut self, direction: Direction, f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.actions.insert(PadAction::Move(direction), Box::new(f));
        self
    }

    /// Register (or replace) the release action
    pub fn on_release<F>(mut self, f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.actions.insert(PadAction::Release, Box::new(f));
        self
    }

    /// Route every action to one handler that receives the action itself
    pub fn observe_all<F>(handler: F) -> Self
    where
        F: FnMut(PadAction) + 'static,
    {
        let handler = Rc::new(RefCell::new(handler));
        let mut set = Self::new();

        for action in PadAction::all() {
            let handler = Rc::clone(&handler);
            set.actions
                .insert(action, Box::new(move || (&mut *handler.borrow_mut())(action)));
        }

        set
    }

    pub fn contains(&self, action: PadAction) -> bool {
        self.actions.contains_key(&action)
    }

    /// Run the action if one is registered. Returns whether anything ran.
    ///
    /// Panics inside the action are not caught.
    pub fn invoke(&mut self, action: PadAction) -> bool {
        match self.actions.get_mut(&action) {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for CallbackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<String> = self.actions.keys().map(|a| a.to_string()).collect();
        registered.sort();
        f.debug_struct("CallbackSet")
            .field("registered", &registered)
            .finish()
    }
}
