use serde::{Deserialize, Serialize};

use crate::error::{AxisSpacingError, AxisSpacingResult};

/// A labelled tick at a zero-based label position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    pub position: usize,
    pub text: String,
}

/// Ordered ticks with strictly increasing, unique positions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickSet {
    ticks: Vec<Tick>,
}

impl TickSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tick, rejecting positions that do not advance.
    pub fn push(&mut self, position: usize, text: impl Into<String>) -> AxisSpacingResult<()> {
        if let Some(last) = self.ticks.last() {
            if position <= last.position {
                return Err(AxisSpacingError::InvalidTickOrder {
                    previous: last.position,
                    next: position,
                });
            }
        }
        self.ticks.push(Tick {
            position,
            text: text.into(),
        });
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Tick> {
        self.ticks.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Tick> {
        self.ticks.last()
    }

    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.ticks.iter().map(|tick| tick.position)
    }

    /// Splits into index-aligned `(positions, texts)` vectors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<String>) {
        self.ticks
            .into_iter()
            .map(|tick| (tick.position, tick.text))
            .unzip()
    }
}
