use std::fmt;

use serde::{Serialize, Serializer};

/// Identifier handed out to each island by the labeling pass, starting at 1.
pub type IslandId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Sea,
    Land,
    /// Land already attributed to an island by `label_all`.
    Discovered,
}

impl CellState {
    pub fn is_land(self) -> bool {
        !matches!(self, CellState::Sea)
    }
}

/// 24-bit RGB display value. Only equality is meaningful.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

pub const SEA_COLOR: Color = Color(0xCB_E1_FF);
pub const LAND_COLOR: Color = Color(0xBB_BB_BB);

impl Color {
    pub const MAX: u32 = 0xFF_FF_FF;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Keeps the low 24 bits.
    pub const fn from_u32(value: u32) -> Self {
        Self(value & Self::MAX)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
