//! Mapping from the volume register to the volume-select lines.
//!
//! The board routes the tone signal through one of four gain paths, each
//! enabled by its own volume-select line. The lines share the one tone
//! signal, so at most one may ever be asserted; asserting several at once
//! would put multiple gain stages in parallel, an electrically unintended
//! state. The [`controller`](crate::controller) enforces the exclusivity;
//! this module only decides which line, if any, a register value selects.

/// A decoded volume setting.
///
/// Register value 1 is the quietest audible setting, 4 the loudest. Zero
/// and every out-of-domain value decode to [`Muted`](VolumeLevel::Muted):
/// a bad volume byte produces silence, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    /// No volume-select line asserted.
    Muted,
    /// Setting 1, the lowest-current-drive gain path.
    Quietest,
    /// Setting 2.
    MidLow,
    /// Setting 3.
    MidHigh,
    /// Setting 4, the highest-current-drive gain path.
    Loudest,
}

impl VolumeLevel {
    /// Decodes the volume register byte.
    pub fn from_register(value: u8) -> Self {
        match value {
            1 => VolumeLevel::Quietest,
            2 => VolumeLevel::MidLow,
            3 => VolumeLevel::MidHigh,
            4 => VolumeLevel::Loudest,
            _ => VolumeLevel::Muted,
        }
    }

    /// Index of the volume-select line to assert, counting from the
    /// quietest line (0) to the loudest (3). `None` means no line.
    pub fn select_index(self) -> Option<usize> {
        match self {
            VolumeLevel::Muted => None,
            VolumeLevel::Quietest => Some(0),
            VolumeLevel::MidLow => Some(1),
            VolumeLevel::MidHigh => Some(2),
            VolumeLevel::Loudest => Some(3),
        }
    }
}
