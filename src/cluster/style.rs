use serde::Serialize;

/// Color of a cluster badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Green,
    Blue,
    Purple,
    Red,
}

impl ColorTier {
    /// Tier name, as written in both output formats
    pub fn name(self) -> &'static str {
        match self {
            ColorTier::Green => "green",
            ColorTier::Blue => "blue",
            ColorTier::Purple => "purple",
            ColorTier::Red => "red",
        }
    }

    /// Badge fill color
    pub fn hex(self) -> &'static str {
        match self {
            ColorTier::Green => "#22c55e",
            ColorTier::Blue => "#3b82f6",
            ColorTier::Purple => "#a855f7",
            ColorTier::Red => "#ef4444",
        }
    }
}

/// Presentation of a cluster badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterStyle {
    pub size_px: u32,
    pub color_tier: ColorTier,
}

/// Picks the badge style for a cluster with `count` members
pub fn style_for(count: usize) -> ClusterStyle {
    let (size_px, color_tier) = match count {
        0..5 => (36, ColorTier::Green),
        5..10 => (44, ColorTier::Blue),
        10..20 => (52, ColorTier::Purple),
        _ => (60, ColorTier::Red),
    };
    ClusterStyle {
        size_px,
        color_tier,
    }
}
