//! Indentation tracking for block structure.
//!
//! Lilt delimits blocks by indentation. The tracker keeps a stack of
//! active indentation widths (a permanent `0` entry at the bottom for the
//! top level) and measures the leading whitespace of each new line: spaces
//! count 1 column, tabs count [`TAB_WIDTH`]. When real content is reached
//! at the start of a line, [`IndentTracker::decide`] compares the measured
//! width against the stack top and tells the lexer whether to emit an
//! `Indent` or `Dedent` token.
//!
//! Dedents unwind one level per decision. A line that drops several
//! levels therefore yields one `Dedent` per lexer call until the widths
//! match, which keeps the one-token-per-call contract intact.

use smallvec::{smallvec, SmallVec};

/// Column width of a tab character in indentation.
pub const TAB_WIDTH: u32 = 4;

/// Deeper than this nests inline storage; the stack spills to the heap.
const INLINE_DEPTH: usize = 16;

/// Outcome of an indentation decision at the start of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IndentStep {
    /// The line is deeper than the enclosing block.
    Indent,
    /// The line closed one enclosing block. The decision stays pending,
    /// so the next call re-compares against the new stack top.
    Dedent,
}

/// Stack of active indentation widths plus the pending measurement for
/// the line being started.
#[derive(Clone, Debug)]
pub(crate) struct IndentTracker {
    /// Active widths, innermost last. `stack[0]` is always `0`.
    stack: SmallVec<[u32; INLINE_DEPTH]>,
    /// True between a newline and the first content on the next line.
    at_line_start: bool,
    /// Leading whitespace measured so far on the current line, in columns.
    pending: u32,
}

impl IndentTracker {
    /// Tracker positioned at the start of the first line.
    pub(crate) fn new() -> Self {
        Self {
            stack: smallvec![0],
            at_line_start: true,
            pending: 0,
        }
    }

    /// True if the lexer is still measuring leading whitespace.
    pub(crate) fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Number of entries on the stack, including the permanent `0`.
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The innermost active indentation width.
    pub(crate) fn top(&self) -> u32 {
        self.stack.last().copied().unwrap_or(0)
    }

    /// Count one leading space.
    pub(crate) fn add_space(&mut self) {
        self.pending += 1;
    }

    /// Count one leading tab.
    pub(crate) fn add_tab(&mut self) {
        self.pending += TAB_WIDTH;
    }

    /// Note a line break: restart measurement for the next line.
    pub(crate) fn note_newline(&mut self) {
        self.at_line_start = true;
        self.pending = 0;
    }

    /// Compare the measured width against the stack top at the first
    /// content of a line.
    ///
    /// Returns `None` when the decision is already settled for this line
    /// or the width matches the enclosing block. A `Dedent` pops one level
    /// and leaves the decision open; `Indent` and the match case settle it.
    pub(crate) fn decide(&mut self) -> Option<IndentStep> {
        if !self.at_line_start {
            return None;
        }
        let top = self.top();
        if self.pending > top {
            self.stack.push(self.pending);
            self.at_line_start = false;
            Some(IndentStep::Indent)
        } else if self.pending < top {
            self.stack.pop();
            Some(IndentStep::Dedent)
        } else {
            self.at_line_start = false;
            None
        }
    }

    /// Pop one level at end of input. Returns `false` once only the
    /// permanent `0` entry remains.
    pub(crate) fn unwind(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}
