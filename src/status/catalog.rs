use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::{
        color::Rgba8,
        error::{BadgeError, BadgeResult},
    },
    text::metrics::TextMeasurer,
};

/// Quality-gate outcome rendered by a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeStatus {
    /// No gate is configured for the project.
    None,
    /// The project passes its gate.
    Ok,
    /// The gate reports warnings.
    Warn,
    /// The gate reports errors.
    Error,
    /// The project is unknown to the quality server.
    NotFound,
    /// Access to the project is restricted.
    Forbidden,
}

/// Display attributes of one status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusStyle {
    /// Text drawn in the status block.
    pub text: &'static str,
    /// Status block background.
    pub background: Rgba8,
}

const STATUS_STYLES: [StatusStyle; BadgeStatus::COUNT] = [
    StatusStyle {
        text: "not set",
        background: Rgba8::GRAY,
    },
    StatusStyle {
        text: "passing",
        background: Rgba8::GREEN,
    },
    StatusStyle {
        text: "warning",
        background: Rgba8::ORANGE,
    },
    StatusStyle {
        text: "failing",
        background: Rgba8::RED,
    },
    StatusStyle {
        text: "not found",
        background: Rgba8::RED,
    },
    StatusStyle {
        text: "forbidden",
        background: Rgba8::RED,
    },
];

impl BadgeStatus {
    /// Number of statuses.
    pub const COUNT: usize = 6;

    /// Every status, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::None,
        Self::Ok,
        Self::Warn,
        Self::Error,
        Self::NotFound,
        Self::Forbidden,
    ];

    /// Position in [`BadgeStatus::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical upper-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
        }
    }

    /// Text and color for this status.
    pub const fn style(self) -> StatusStyle {
        STATUS_STYLES[self.index()]
    }

    /// Text drawn in the status block.
    pub const fn display_text(self) -> &'static str {
        self.style().text
    }

    /// Background of the status block.
    pub const fn display_background_color(self) -> Rgba8 {
        self.style().background
    }
}

impl fmt::Display for BadgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BadgeStatus {
    type Err = BadgeError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> BadgeResult<Self> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| BadgeError::validation(format!("unknown badge status '{s}'")))
    }
}

/// Per-process table of status display widths.
///
/// Widths are measured once, when the catalog is built, so the renderer and every caller agree
/// on the size of each status block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusCatalog {
    widths: [u32; BadgeStatus::COUNT],
}

impl StatusCatalog {
    /// Measure every status text with `measurer` and pad it by `x_margin` on both sides.
    pub fn new(measurer: &mut TextMeasurer, x_margin: u32) -> Self {
        let widths = BadgeStatus::ALL.map(|status| {
            let advance = measurer.measure(status.display_text());
            (advance.max(0.0).ceil() as u32).saturating_add(x_margin.saturating_mul(2))
        });
        Self { widths }
    }

    /// See [`BadgeStatus::display_text`].
    pub fn display_text(&self, status: BadgeStatus) -> &'static str {
        status.display_text()
    }

    /// See [`BadgeStatus::display_background_color`].
    pub fn display_background_color(&self, status: BadgeStatus) -> Rgba8 {
        status.display_background_color()
    }

    /// Width in pixels of the status block for `status`.
    pub fn display_width(&self, status: BadgeStatus) -> u32 {
        self.widths[status.index()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/status/catalog.rs"]
mod tests;
