//! Operator modes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the encoder adjusts in level-set phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperatorMode {
    /// DMX start address
    #[default]
    Program,
    /// Red level
    Red,
    /// Green level
    Green,
    /// Blue level
    Blue,
    /// All three levels together, written as one intensity channel
    Intensity,
    /// All three levels together, broadcast to every channel
    All,
    /// Color wheel runs on its own
    Wheel,
}

impl OperatorMode {
    /// Every mode in encoder order
    pub const ALL: [OperatorMode; 7] = [
        OperatorMode::Program,
        OperatorMode::Red,
        OperatorMode::Green,
        OperatorMode::Blue,
        OperatorMode::Intensity,
        OperatorMode::All,
        OperatorMode::Wheel,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&m| m == self).unwrap_or(0)
    }

    /// Next mode, wrapping from the last back to `Program`
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous mode, wrapping from `Program` to the last
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short label for the 4-digit display
    pub fn label(&self) -> &'static str {
        match self {
            OperatorMode::Program => "Prog",
            OperatorMode::Red => "rEd",
            OperatorMode::Green => "Grn",
            OperatorMode::Blue => "Blu",
            OperatorMode::Intensity => "Int",
            OperatorMode::All => "All",
            OperatorMode::Wheel => "XXX",
        }
    }

    /// Parse a lowercase config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "program" => Some(OperatorMode::Program),
            "red" => Some(OperatorMode::Red),
            "green" => Some(OperatorMode::Green),
            "blue" => Some(OperatorMode::Blue),
            "intensity" => Some(OperatorMode::Intensity),
            "all" => Some(OperatorMode::All),
            "wheel" => Some(OperatorMode::Wheel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(OperatorMode::Program.next(), OperatorMode::Red);
        assert_eq!(OperatorMode::Wheel.next(), OperatorMode::Program);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(OperatorMode::Red.prev(), OperatorMode::Program);
        assert_eq!(OperatorMode::Program.prev(), OperatorMode::Wheel);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut mode = OperatorMode::Program;
        for _ in 0..OperatorMode::ALL.len() {
            mode = mode.next();
        }
        assert_eq!(mode, OperatorMode::Program);
    }

    #[test]
    fn test_labels_fit_display() {
        for mode in OperatorMode::ALL {
            assert!(mode.label().len() <= 4);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(OperatorMode::from_name("wheel"), Some(OperatorMode::Wheel));
        assert_eq!(OperatorMode::from_name("intensity"), Some(OperatorMode::Intensity));
        assert_eq!(OperatorMode::from_name("Wheel"), None);
    }
}
