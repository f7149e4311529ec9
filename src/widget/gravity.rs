//! Gravity directions and the arrow asset each one uses.

use super::Size;
use phf::phf_map;
use serde::Serialize;
use std::fmt;

/// Direction the tooltip sits relative to its target.
///
/// `N` places the tooltip below the target with its arrow pointing north at
/// it; compound values keep the primary direction's arrow and shift the box
/// sideways so the arrow lands near a corner of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    #[default]
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
    EN,
    ES,
    WN,
    WS,
}

static GRAVITY_NAMES: phf::Map<&'static str, Gravity> = phf_map! {
    "n" => Gravity::N,
    "s" => Gravity::S,
    "e" => Gravity::E,
    "w" => Gravity::W,
    "ne" => Gravity::NE,
    "nw" => Gravity::NW,
    "se" => Gravity::SE,
    "sw" => Gravity::SW,
    "en" => Gravity::EN,
    "es" => Gravity::ES,
    "wn" => Gravity::WN,
    "ws" => Gravity::WS,
};

impl Gravity {
    pub const ALL: [Gravity; 12] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::NE,
        Self::NW,
        Self::SE,
        Self::SW,
        Self::EN,
        Self::ES,
        Self::WN,
        Self::WS,
    ];

    /// Look up an exact lowercase gravity name (`"n"`, `"ws"`, ...).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        GRAVITY_NAMES.get(s).copied()
    }

    /// Parse a gravity name, falling back to `N` for anything unrecognized.
    pub fn normalize(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            tracing::debug!("Unrecognized gravity {:?}, using 'n'", s);
            Self::N
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
            Self::EN => "en",
            Self::ES => "es",
            Self::WN => "wn",
            Self::WS => "ws",
        }
    }

    pub fn arrow(&self) -> &'static ArrowSpec {
        match self {
            Self::N | Self::NE | Self::NW => &TOP_ARROW,
            Self::S | Self::SE | Self::SW => &BOTTOM_ARROW,
            Self::W | Self::WS => &LEFT_ARROW,
            Self::WN => &LEFT_ARROW_ALT,
            Self::E | Self::ES => &RIGHT_ARROW,
            Self::EN => &RIGHT_ARROW_ALT,
        }
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way the arrow image points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

/// Inline style that pulls the arrow container outside the tooltip box by
/// the arrow's own thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowShift {
    pub property: &'static str,
    pub pixels: f32,
}

impl ArrowShift {
    pub fn css_value(&self) -> String {
        format!("-{}px", self.pixels)
    }
}

/// Arrow asset and placement for one group of gravities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowSpec {
    pub orientation: ArrowOrientation,
    pub file_name: &'static str,
    pub size: Size,
    /// `None` for bottom arrows, which sit in normal flow below the content.
    pub shift: Option<ArrowShift>,
}

impl ArrowSpec {
    /// Resolve the asset path under a caller-supplied image directory.
    pub fn src(&self, image_base: &str) -> String {
        format!("{}/{}", image_base, self.file_name)
    }
}

const VERTICAL: Size = Size { width: 16.0, height: 14.0 };
const HORIZONTAL: Size = Size { width: 14.0, height: 16.0 };

static TOP_ARROW: ArrowSpec = ArrowSpec {
    orientation: ArrowOrientation::Top,
    file_name: "tooltip-top-point-16x14px.png",
    size: VERTICAL,
    shift: Some(ArrowShift { property: "top", pixels: 14.0 }),
};

static BOTTOM_ARROW: ArrowSpec = ArrowSpec {
    orientation: ArrowOrientation::Bottom,
    file_name: "tooltip-bottom-point-16x14px.png",
    size: VERTICAL,
    shift: None,
};

static LEFT_ARROW: ArrowSpec = ArrowSpec {
    orientation: ArrowOrientation::Left,
    file_name: "tooltip-left-point-14x16px.png",
    size: HORIZONTAL,
    shift: Some(ArrowShift { property: "left", pixels: 14.0 }),
};

static LEFT_ARROW_ALT: ArrowSpec = ArrowSpec {
    orientation: ArrowOrientation::Left,
    file_name: "tooltip-left-point-dark-green-14x16px.png",
    size: HORIZONTAL,
    shift: Some(ArrowShift { property: "left", pixels: 14.0 }),
};

static RIGHT_ARROW: ArrowSpec = ArrowSpec {
    orientation: ArrowOrientation::Right,
    file_name: "tooltip-right-point-14x16px.png",
    size: HORIZONTAL,
    shift: Some(ArrowShift { property: "right", pixels: 14.0 }),
};

static RIGHT_ARROW_ALT: ArrowSpec = ArrowSpec {
    orientation: ArrowOrientation::Right,
    file_name: "tooltip-right-point-dark-green-14x16px.png",
    size: HORIZONTAL,
    shift: Some(ArrowShift { property: "right", pixels: 14.0 }),
};
