//! Small style enums shared by several structures.

/// What Plotly shows on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverInfo {
    /// No hover label.
    #[default]
    None,
    /// The trace name.
    Name,
}

impl HoverInfo {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            HoverInfo::None => "none",
            HoverInfo::Name => "name",
        }
    }
}

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDash {
    #[default]
    Solid,
    Dash,
}

impl LineDash {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LineDash::Solid => "solid",
            LineDash::Dash => "dash",
        }
    }
}

/// Anchor of a text label relative to its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPosition {
    #[default]
    MiddleCenter,
    MiddleRight,
}

impl TextPosition {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TextPosition::MiddleCenter => "middle center",
            TextPosition::MiddleRight => "middle right",
        }
    }
}
