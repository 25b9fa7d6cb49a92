//! Visual theming for the affinity graph.
//!
//! Node radii, two-stop gradients, and edge weights / opacities. The renderer
//! draws whatever it is given; every visual constant lives here.

use serde::Serialize;

use crate::graph::matcher::AttributeKind;

/// RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
    pub fn lighten(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
            g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
            b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
        }
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Two-stop gradient, serialized as CSS hex strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

impl Gradient {
    /// Gradient from `base` to a lighter tint of itself.
    fn from_base(base: Color) -> Self {
        Self {
            from: base.to_css(),
            to: base.lighten(0.35).to_css(),
        }
    }
}

const ROOT_COLOR: Color = Color::rgb(0x45, 0x5a, 0x64);
const COURSE_COLOR: Color = Color::rgb(0x19, 0x76, 0xd2);
const SKILL_COLOR: Color = Color::rgb(0x2e, 0x7d, 0x32);
const INTEREST_COLOR: Color = Color::rgb(0x7b, 0x1f, 0xa2);
const CAREER_COLOR: Color = Color::rgb(0xe6, 0x51, 0x00);

pub const ROOT_RADIUS: f64 = 40.0;
pub const ATTRIBUTE_RADIUS: f64 = 28.0;
pub const CAREER_RADIUS: f64 = 34.0;

/// Root → attribute edges.
pub const ROOT_EDGE_WEIGHT: f64 = 2.0;
/// Attribute → career edges backed by a lexical match.
pub const MATCH_EDGE_WEIGHT: f64 = 1.5;
/// Attribute → career edges added only to keep a career connected.
pub const FALLBACK_EDGE_WEIGHT: f64 = 0.5;

pub const STRONG_EDGE_OPACITY: f64 = 0.85;
pub const FALLBACK_EDGE_OPACITY: f64 = 0.25;

pub fn root_gradient() -> Gradient {
    Gradient::from_base(ROOT_COLOR)
}

pub fn attribute_gradient(kind: AttributeKind) -> Gradient {
    Gradient::from_base(match kind {
        AttributeKind::Course => COURSE_COLOR,
        AttributeKind::Skill => SKILL_COLOR,
        AttributeKind::Interest => INTEREST_COLOR,
    })
}

pub fn career_gradient() -> Gradient {
    Gradient::from_base(CAREER_COLOR)
}
