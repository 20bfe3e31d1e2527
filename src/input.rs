//! Head-motion input abstraction
//!
//! The real input source is a head-tracking sensor living outside this
//! crate. The simulation only ever sees the discrete [`Direction`] it
//! resolves to, polled once per tick through [`DirectionSource`].

/// Discrete head direction for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Head tilted up - climb
    Ascend,
    /// Head tilted down - dive
    Descend,
    /// No readable movement - mild downward drift
    #[default]
    Neutral,
}

impl Direction {
    /// Map a raw sensor label to a direction.
    ///
    /// Sensors report free-form labels; anything unrecognized falls back
    /// to [`Direction::Neutral`] instead of being an error.
    pub fn from_signal(raw: &str) -> Self {
        match raw {
            "up" => Direction::Ascend,
            "down" => Direction::Descend,
            _ => Direction::Neutral,
        }
    }
}

/// Non-blocking source of the latest head direction.
///
/// Polled exactly once per tick while Playing. Implementations must
/// return the latest known value immediately; a source with nothing to
/// report returns [`Direction::Neutral`].
pub trait DirectionSource {
    fn poll(&mut self) -> Direction;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signal_known_labels() {
        assert_eq!(Direction::from_signal("up"), Direction::Ascend);
        assert_eq!(Direction::from_signal("down"), Direction::Descend);
    }

    #[test]
    fn test_from_signal_unknown_is_neutral() {
        assert_eq!(Direction::from_signal(""), Direction::Neutral);
        assert_eq!(Direction::from_signal("left"), Direction::Neutral);
        assert_eq!(Direction::from_signal("UP"), Direction::Neutral);
    }
}
