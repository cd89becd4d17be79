//! Error types for the conformance harness.
//!
//! Harness failures (bad configuration, unknown instruction names, memory
//! layout problems) are reported through [`HarnessError`]. A lane that does
//! not match its reference is not an error of the harness itself; it is a
//! verdict, carried by [`LaneMismatch`] inside a failing outcome.

use std::fmt;

/// Errors that can occur while setting up or driving a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// Invalid layout parameters were provided.
    LayoutError {
        /// The size parameter that caused the error.
        size: usize,
        /// The alignment parameter that caused the error.
        alignment: usize,
        /// Human-readable error message.
        message: String,
    },
    /// No catalogue entry carries this name.
    UnknownInstruction {
        /// The name as it was given.
        name: String,
    },
    /// A run configuration value is out of range.
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::LayoutError {
                size,
                alignment,
                message,
            } => write!(
                f,
                "Invalid memory layout: {} (size: {}, alignment: {})",
                message, size, alignment
            ),
            HarnessError::UnknownInstruction { name } => {
                write!(f, "Unknown instruction: `{}`", name)
            }
            HarnessError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for HarnessError {}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Creates a layout error.
pub fn layout_error(size: usize, alignment: usize, message: impl Into<String>) -> HarnessError {
    HarnessError::LayoutError {
        size,
        alignment,
        message: message.into(),
    }
}

/// Creates an unknown-instruction error.
pub fn unknown_instruction(name: impl Into<String>) -> HarnessError {
    HarnessError::UnknownInstruction { name: name.into() }
}

/// Creates a configuration error.
pub fn invalid_config(message: impl Into<String>) -> HarnessError {
    HarnessError::InvalidConfig {
        message: message.into(),
    }
}

/// First lane at which a produced register differs from its reference.
///
/// Lanes are compared through their bit patterns, so a float lane holding
/// `-0.0` differs from `+0.0` and two NaNs only match when their payloads do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneMismatch {
    /// Index of the first differing lane (a byte index in raw-bit mode).
    pub lane: usize,
    /// Width of the compared lane in bytes.
    pub width: usize,
    /// Bit pattern the reference expected.
    pub expected: u64,
    /// Bit pattern the unit under test produced.
    pub actual: u64,
}

impl fmt::Display for LaneMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.width * 2;
        write!(
            f,
            "lane {} ({}-bit): expected {:#0w$x}, got {:#0w$x}",
            self.lane,
            self.width * 8,
            self.expected,
            self.actual,
            w = digits + 2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let error = layout_error(32, 12, "alignment must be power of two");
        let display = format!("{}", error);
        assert!(display.contains("Invalid memory layout"));
        assert!(display.contains("size: 32"));
        assert!(display.contains("alignment: 12"));
    }

    #[test]
    fn test_unknown_instruction_display() {
        let display = unknown_instruction("vfoo_s8").to_string();
        assert_eq!(display, "Unknown instruction: `vfoo_s8`");
    }

    #[test]
    fn test_invalid_config_display() {
        let display = invalid_config("iterations must be at least 1").to_string();
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("iterations must be at least 1"));
    }

    #[test]
    fn test_lane_mismatch_display_pads_to_lane_width() {
        let mismatch = LaneMismatch {
            lane: 3,
            width: 1,
            expected: 0x7f,
            actual: 0x80,
        };
        assert_eq!(mismatch.to_string(), "lane 3 (8-bit): expected 0x7f, got 0x80");

        let mismatch = LaneMismatch {
            lane: 0,
            width: 4,
            expected: 0x3f80_0000,
            actual: 0x8000_0000,
        };
        assert_eq!(
            mismatch.to_string(),
            "lane 0 (32-bit): expected 0x3f800000, got 0x80000000"
        );
    }

    #[test]
    fn test_every_variant_has_a_constructor() {
        let errors = [
            layout_error(8, 3, "bad"),
            unknown_instruction("vbaz_u8"),
            invalid_config("jobs must be at least 1"),
        ];
        let mut seen = [false; 3];
        for error in &errors {
            let slot = match error {
                HarnessError::LayoutError { .. } => 0,
                HarnessError::UnknownInstruction { .. } => 1,
                HarnessError::InvalidConfig { .. } => 2,
            };
            seen[slot] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = unknown_instruction("vbar");
        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
