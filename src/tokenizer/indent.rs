//! Indentation stack driving the synthetic `INDENT` / `DEDENT` tokens.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Level {
    width: usize,
    // Pushed to recover from an inconsistent dedent; never opened by an INDENT.
    resync: bool,
}

/// Outcome of measuring a new line against the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Same,
    Indent,
    Dedent(usize),
    /// The new width matched no enclosing level. `dedents` blocks were closed before the
    /// stack was resynchronized on the new width.
    Inconsistent { dedents: usize, enclosing: usize },
}

/// Stack of open indentation widths, based at width 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStack {
    levels: Vec<Level>,
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentStack {
    pub fn new() -> Self {
        Self {
            levels: vec![Level {
                width: 0,
                resync: false,
            }],
        }
    }

    /// Width of the innermost level.
    pub fn current(&self) -> usize {
        self.levels.last().map_or(0, |level| level.width)
    }

    /// Number of levels above the base, resynchronization levels included.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn transition(&mut self, width: usize) -> Transition {
        let top = self.current();
        if width == top {
            return Transition::Same;
        }
        if width > top {
            self.levels.push(Level {
                width,
                resync: false,
            });
            tracing::trace!(width, depth = self.depth(), "indent");
            return Transition::Indent;
        }

        let mut dedents = 0;
        while self.levels.len() > 1 && self.current() > width {
            if let Some(level) = self.levels.pop() {
                if !level.resync {
                    dedents += 1;
                }
            }
        }

        let enclosing = self.current();
        if enclosing == width {
            tracing::trace!(width, dedents, "dedent");
            return Transition::Dedent(dedents);
        }

        self.levels.push(Level {
            width,
            resync: true,
        });
        tracing::debug!(width, enclosing, dedents, "inconsistent dedent, resynchronized");
        Transition::Inconsistent { dedents, enclosing }
    }

    /// Pops every level above the base and returns how many `DEDENT` tokens that closes.
    pub fn close(&mut self) -> usize {
        let dedents = self.levels[1..].iter().filter(|level| !level.resync).count();
        self.levels.truncate(1);
        dedents
    }
}
