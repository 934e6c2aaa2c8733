use crate::{Vec2, VisibleWindow};

/// A lightweight, serializable snapshot of the tracker's bookkeeping.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerState {
    pub window: VisibleWindow,
    /// The scroll offset observed by the previous scan pass.
    pub last_offset: Vec2,
}

impl TrackerState {
    /// The state right after (re)initialization with `len` children.
    pub fn reset(len: usize) -> Self {
        Self {
            window: VisibleWindow::full(len),
            last_offset: Vec2::ZERO,
        }
    }

    /// Checks that the window can describe a container holding `len` children.
    pub fn validate(&self, len: usize) -> Result<(), StateError> {
        let VisibleWindow {
            min_index,
            max_index,
        } = self.window;
        if min_index > max_index {
            return Err(StateError::InvertedWindow {
                min: min_index,
                max: max_index,
            });
        }
        if max_index > len {
            return Err(StateError::OutOfBounds {
                max: max_index,
                len,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("visible window is inverted (min {min} > max {max})")]
    InvertedWindow { min: usize, max: usize },
    #[error("visible window max {max} is past the end of {len} children")]
    OutOfBounds { max: usize, len: usize },
}
