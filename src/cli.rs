//! Command-line interface and REPL
//!
//! The REPL drives a pad by hand, one host event per line:
//!
//! ```text
//! compad> measure 200 200
//! compad> start 150 100
//! compad> move 250 100
//! compad> end
//! ```

use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::config::PadConfig;
use crate::error::Error;
use crate::pad::{CallbackSet, Direction, DirectionPad, PadAction, PadEvent, PadGeometry, Point};
use crate::trace::ReplayStep;

const HELP: &str = "\
Commands:
  measure <width> <height>   set the pad size
  start <x> <y>              pointer down at a container-local point
  move <x> <y>               pointer moved
  end                        pointer up
  state                      show geometry, radius and indicator
  help                       this text
  exit | quit                leave";

/// One parsed REPL line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplCommand {
    Event(PadEvent),
    State,
    Help,
    Exit,
}

/// Parse one REPL line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> crate::Result<Option<ReplCommand>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "measure" | "m" => {
            let (width, height) = two_numbers(verb, &args)?;
            ReplCommand::Event(PadEvent::Measured(PadGeometry::new(width, height)))
        }
        "start" | "s" => {
            let (x, y) = two_numbers(verb, &args)?;
            ReplCommand::Event(PadEvent::DragStart(Point::new(x, y)))
        }
        "move" | "mv" => {
            let (x, y) = two_numbers(verb, &args)?;
            ReplCommand::Event(PadEvent::DragMove(Point::new(x, y)))
        }
        "end" | "e" => {
            no_arguments(verb, &args)?;
            ReplCommand::Event(PadEvent::DragEnd)
        }
        "state" => ReplCommand::State,
        "help" | "?" => ReplCommand::Help,
        "exit" | "quit" => ReplCommand::Exit,
        other => {
            return Err(Error::InvalidCommand(format!(
                "unknown command '{}' (try 'help')",
                other
            )))
        }
    };

    Ok(Some(command))
}

fn two_numbers(verb: &str, args: &[&str]) -> crate::Result<(f32, f32)> {
    let [a, b] = args else {
        return Err(Error::InvalidCommand(format!(
            "'{}' takes two numbers, got {} argument(s)",
            verb,
            args.len()
        )));
    };
    Ok((number(verb, a)?, number(verb, b)?))
}

fn number(verb: &str, raw: &str) -> crate::Result<f32> {
    raw.parse::<f32>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| Error::InvalidCommand(format!("'{}': '{}' is not a number", verb, raw)))
}

fn no_arguments(verb: &str, args: &[&str]) -> crate::Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidCommand(format!("'{}' takes no arguments", verb)))
    }
}

/// Display-side dedupe: lets a direction through only when it changes.
///
/// The pad itself fires on every move; this only affects what gets printed.
#[derive(Debug, Default)]
pub struct DirectionFilter {
    last: Option<Direction>,
}

impl DirectionFilter {
    pub fn admit(&mut self, action: PadAction) -> bool {
        match action {
            PadAction::Move(direction) => {
                let changed = self.last != Some(direction);
                self.last = Some(direction);
                changed
            }
            PadAction::Release => {
                self.last = None;
                true
            }
        }
    }
}

/// Colored one-line description of an action
pub fn format_action(action: PadAction) -> ColoredString {
    match action {
        PadAction::Move(direction) => format!("--> {}", direction).green().bold(),
        PadAction::Release => "<-- release".yellow(),
    }
}

/// Colored description of a replayed event and its effects
pub fn format_step(step: &ReplayStep, filter: Option<&mut DirectionFilter>) -> String {
    let event = match step.event {
        PadEvent::Measured(g) => format!("measured {}x{}", g.width, g.height),
        PadEvent::DragStart(p) => format!("start ({}, {})", p.x, p.y),
        PadEvent::DragMove(p) => format!("move ({}, {})", p.x, p.y),
        PadEvent::DragEnd => "end".to_string(),
    };

    let fired: Vec<PadAction> = match filter {
        Some(filter) => step.fired.iter().copied().filter(|a| filter.admit(*a)).collect(),
        None => step.fired.clone(),
    };
    let fired: Vec<String> = fired.into_iter().map(|a| format_action(a).to_string()).collect();

    let indicator = if step.state.is_dragging {
        format!("indicator ({:.1}, {:.1})", step.state.indicator.x, step.state.indicator.y)
    } else {
        "indicator hidden".to_string()
    };

    format!(
        "{} {:<24} {} {}",
        format!("#{:<3}", step.index).dimmed(),
        event,
        fired.join(" "),
        indicator.dimmed()
    )
}

fn describe_pad(pad: &DirectionPad) -> String {
    let geometry = pad.geometry();
    let state = pad.state();
    format!(
        "scheme={} size={}x{} inset={} radius={} dragging={} indicator=({:.1}, {:.1}){}",
        pad.scheme(),
        geometry.width,
        geometry.height,
        pad.interaction_size(),
        pad.usable_radius(),
        state.is_dragging,
        state.indicator.x,
        state.indicator.y,
        if pad.is_degenerate() { " [no usable radius]" } else { "" }
    )
}

/// Interactive pad session
pub fn run_repl(config: &PadConfig, dedupe: bool) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let fired = Rc::new(RefCell::new(Vec::new()));
    let callbacks = CallbackSet::observe_all({
        let fired = Rc::clone(&fired);
        move |action| fired.borrow_mut().push(action)
    });
    let mut pad = DirectionPad::new(config, callbacks);
    let mut filter = DirectionFilter::default();

    println!("{}", "compad REPL - type 'help' for commands".bold().cyan());
    println!("{}", describe_pad(&pad).dimmed());

    loop {
        let line = match rl.readline("compad> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        rl.add_history_entry(line.as_str())?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        match command {
            ReplCommand::Exit => break,
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::State => println!("{}", describe_pad(&pad)),
            ReplCommand::Event(event) => {
                debug!(?event, "REPL event");
                pad.handle(event);
                for action in fired.borrow_mut().drain(..) {
                    if !dedupe || filter.admit(action) {
                        println!("{}", format_action(action));
                    }
                }
                if let Some(indicator) = pad.indicator() {
                    println!("{}", format!("indicator ({:.1}, {:.1})", indicator.x, indicator.y).dimmed());
                }
            }
        }
    }

    Ok(())
}
