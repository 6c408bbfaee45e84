//! Lexically scoped environments for the evaluator.
//!
//! An [`Environment`] is a stack of frames, each mapping names to values.
//! The globals frame sits at the bottom and is never popped; `for` loops
//! and function calls push and pop frames around their bodies.

use std::collections::HashMap;

use crate::runtime::Value;

/// A single scope frame: a mapping from identifier to value.
///
/// Names within one frame are unique (inserting twice overwrites).
pub(crate) type Frame = HashMap<String, Value>;

/// The environment stack.
///
/// # Invariants
///
/// - The stack is never empty; the globals frame is at position 0.
/// - Lookup scans frames innermost to outermost; the first hit wins.
/// - Assignment mutates the frame in which the name first resolves.
/// - Every push is paired with a pop on all exit paths, so the depth
///   before and after a function call is identical.
pub(crate) struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    /// Creates an environment containing only an empty globals frame.
    pub(crate) fn new() -> Self {
        Environment {
            frames: vec![Frame::new()],
        }
    }

    /// Returns the current number of frames, globals included.
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Pushes a fresh empty frame.
    pub(crate) fn push_frame(&mut self) {
        self.frames.push(Frame::new());
    }

    /// Pushes a pre-populated frame (used for call argument binding).
    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pops the innermost frame.
    ///
    /// The globals frame is never popped; push/pop sites are always paired.
    pub(crate) fn pop_frame(&mut self) {
        debug_assert!(self.frames.len() > 1, "attempted to pop the globals frame");
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Declares a name in the innermost frame, overwriting any same-named
    /// entry in that frame.
    pub(crate) fn define(&mut self, name: &str, value: Value) {
        // frames is never empty
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), value);
        }
    }

    /// Declares a name directly in the globals frame.
    ///
    /// Function definitions install themselves here regardless of where
    /// they execute.
    pub(crate) fn define_global(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.first_mut() {
            frame.insert(name.to_string(), value);
        }
    }

    /// Looks a name up, scanning frames innermost to outermost.
    pub(crate) fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Assigns to an existing name, mutating the innermost frame that
    /// contains it.
    ///
    /// Returns `false` when the name is not declared anywhere.
    pub(crate) fn assign(&mut self, name: &str, value: Value) -> bool {
        for frame in self.frames.iter_mut().rev() {
            if let Some(slot) = frame.get_mut(name) {
                *slot = value;
                return true;
            }
        }
        false
    }
}
