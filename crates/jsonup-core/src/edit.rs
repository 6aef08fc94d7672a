//! Recursive tree editor.
//!
//! Walks every leaf of a document depth-first, in object insertion order and
//! array index order, prompting for a replacement at each one. Early exit is
//! carried by the [`Flow`] returned from every visit: a container stops
//! iterating as soon as a child reports `Stop`, so no frame resumes after the
//! operator has aborted.
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::console::{Console, Input, read_input};
use crate::error::{Error, Result};
use crate::input::{Command, InputError, parse_leaf};
use crate::node::{LeafKind, child_label, element_label, kind_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Operator ended the pass. `save` is false for `-x`, true for `-s`.
    Stop { save: bool },
}

impl Flow {
    pub fn is_stop(self) -> bool {
        matches!(self, Flow::Stop { .. })
    }

    pub fn should_persist(self) -> bool {
        !matches!(self, Flow::Stop { save: false })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub should_persist: bool,
    pub stopped_early: bool,
    /// Leaves replaced with a new value.
    pub edited: usize,
    /// Leaves prompted.
    pub visited: usize,
}

pub struct TreeEditor<'c, C: Console + ?Sized> {
    console: &'c mut C,
    edited: usize,
    visited: usize,
}

impl<'c, C: Console + ?Sized> TreeEditor<'c, C> {
    pub fn new(console: &'c mut C) -> Self {
        Self {
            console,
            edited: 0,
            visited: 0,
        }
    }

    /// Runs one pass over `root`, mutating it in place. The root must be an
    /// object; anything else is rejected before the first prompt.
    pub fn edit_document(&mut self, root: &mut Value) -> Result<Outcome> {
        let Value::Object(map) = root else {
            return Err(Error::RootNotMapping(kind_name(root)));
        };
        self.edited = 0;
        self.visited = 0;
        let flow = self.edit_mapping(map, "")?;
        debug!(?flow, edited = self.edited, visited = self.visited, "pass finished");
        Ok(Outcome {
            should_persist: flow.should_persist(),
            stopped_early: flow.is_stop(),
            edited: self.edited,
            visited: self.visited,
        })
    }

    pub fn edit_mapping(&mut self, map: &mut Map<String, Value>, path: &str) -> Result<Flow> {
        self.visit_children(map.iter_mut().map(|(k, v)| (child_label(path, k), v)))
    }

    pub fn edit_sequence(&mut self, items: &mut [Value], path: &str) -> Result<Flow> {
        self.visit_children(
            items
                .iter_mut()
                .enumerate()
                .map(|(i, v)| (element_label(path, i), v)),
        )
    }

    fn visit_children<'v, I>(&mut self, children: I) -> Result<Flow>
    where
        I: Iterator<Item = (String, &'v mut Value)>,
    {
        for (label, child) in children {
            let flow = self.visit(child, &label)?;
            if flow.is_stop() {
                return Ok(flow);
            }
        }
        Ok(Flow::Continue)
    }

    fn visit(&mut self, node: &mut Value, label: &str) -> Result<Flow> {
        match node {
            Value::Object(map) => self.edit_mapping(map, label),
            Value::Array(items) => self.edit_sequence(items, label),
            Value::Null => Ok(Flow::Continue),
            leaf => match LeafKind::of(leaf) {
                Some(kind) => self.edit_leaf(leaf, kind, label),
                None => Ok(Flow::Continue),
            },
        }
    }

    // Prompt -> Validate -> {Accept, Reject and re-prompt, Skip, Stop}
    fn edit_leaf(&mut self, slot: &mut Value, kind: LeafKind, path: &str) -> Result<Flow> {
        self.visited += 1;
        self.console.write_line(&format!("{path} ({kind}) = {slot}"))?;
        self.console.write("Enter new value: ")?;
        loop {
            let line = match read_input(self.console)? {
                Input::Line(line) => line,
                Input::Unreadable => {
                    self.console.write(&format!("{} Try again: ", InputError { kind }))?;
                    continue;
                }
                Input::End => {
                    warn!(path, "end of input at prompt; discarding edits");
                    return Ok(Flow::Stop { save: false });
                }
            };
            match Command::parse(&line) {
                Command::Skip => {
                    debug!(path, "skipped");
                    return Ok(Flow::Continue);
                }
                Command::Abort => return Ok(Flow::Stop { save: false }),
                Command::SaveAndStop => return Ok(Flow::Stop { save: true }),
                Command::Value(raw) => match parse_leaf(kind, &raw) {
                    Ok(v) => {
                        debug!(path, new = %v, "updated");
                        *slot = v;
                        self.edited += 1;
                        return Ok(Flow::Continue);
                    }
                    Err(e) => self.console.write(&format!("{e} Try again: "))?,
                },
            }
        }
    }
}

/// Convenience wrapper for a single pass.
pub fn edit_document<C: Console + ?Sized>(console: &mut C, root: &mut Value) -> Result<Outcome> {
    TreeEditor::new(console).edit_document(root)
}
