//! Department color-handle registry and shade helpers.
//!
//! # Responsibility
//! - Hand out one stable color handle per department within a session.
//! - Provide the shade derivations (stroke, lighten, darken, text color)
//!   renderers apply on top of the handle.
//!
//! # Invariants
//! - The same department name always resolves to the same handle until the
//!   registry is reset.
//! - Handle assignment is deterministic: named defaults, then the fixed
//!   fallback palette in first-request order, then a name-hash HSL value.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static HSL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hsl\((\d+),\s*(\d+)%,\s*(\d+)%\)").expect("valid hsl regex"));

/// Well-known departments keep their historical colors.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("경영진", "#667eea"),
    ("개발팀", "#48bb78"),
    ("마케팅팀", "#ed8936"),
    ("영업팀", "#38b2ac"),
    ("인사팀", "#9f7aea"),
    ("재무팀", "#f56565"),
];

/// Stroke companions for the named colors.
const NAMED_STROKES: &[(&str, &str)] = &[
    ("#667eea", "#4c51bf"),
    ("#48bb78", "#38a169"),
    ("#ed8936", "#c05621"),
    ("#38b2ac", "#2c7a7b"),
    ("#9f7aea", "#805ad5"),
    ("#f56565", "#e53e3e"),
];

/// Mid-to-dark fallback pool for departments without a named color.
const FALLBACK_COLORS: &[&str] = &[
    "#667eea", "#48bb78", "#ed8936", "#38b2ac", "#9f7aea", "#f56565",
    "#4299e1", "#38a169", "#d69e2e", "#00b5d8", "#805ad5", "#e53e3e",
    "#3182ce", "#319795", "#dd6b20", "#0987a0", "#7c3aed", "#dc2626",
    "#2b6cb0", "#2c7a7b", "#c05621", "#0891b2", "#6b46c1", "#b91c1c",
    "#1e40af", "#065f46", "#92400e", "#155e75", "#581c87", "#991b1b",
    "#1d4ed8", "#047857", "#a16207", "#0e7490", "#6d28d9", "#7f1d1d",
    "#2563eb", "#059669", "#ca8a04", "#7c2d12", "#8b5cf6",
    "#3b82f6", "#10b981", "#06b6d4", "#a855f7", "#ef4444",
    "#60a5fa", "#34d399", "#67e8f9", "#c084fc", "#f87171",
];

/// Session-scoped department color cache.
#[derive(Debug, Clone, Default)]
pub struct TeamPalette {
    assigned: Vec<(String, String)>,
    used: HashSet<String>,
}

impl TeamPalette {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the stable handle for `department`, assigning one on first
    /// request.
    pub fn color_for(&mut self, department: &str) -> String {
        if let Some((_, color)) = self
            .assigned
            .iter()
            .find(|(assigned_department, _)| assigned_department.as_str() == department)
        {
            return color.clone();
        }

        let color = self.pick_color(department);
        self.used.insert(color.clone());
        self.assigned
            .push((department.to_string(), color.clone()));
        color
    }

    /// Drops every assignment. Called when the roster is replaced wholesale.
    pub fn reset(&mut self) {
        self.assigned.clear();
        self.used.clear();
    }

    fn pick_color(&self, department: &str) -> String {
        if let Some((_, named)) = NAMED_COLORS
            .iter()
            .find(|(known_department, _)| *known_department == department)
        {
            if !self.used.contains(*named) {
                return (*named).to_string();
            }
        }

        if let Some(free) = FALLBACK_COLORS
            .iter()
            .find(|candidate| !self.used.contains(**candidate))
        {
            return (*free).to_string();
        }

        derived_hsl(department)
    }
}

/// Returns the stroke companion for a base handle.
pub fn stroke_for(base: &str) -> String {
    if let Some((_, stroke)) = NAMED_STROKES.iter().find(|(named, _)| *named == base) {
        return (*stroke).to_string();
    }
    if let Some((hue, saturation, lightness)) = parse_hsl(base) {
        let darker = lightness.saturating_sub(20).max(20);
        return format!("hsl({hue}, {saturation}%, {darker}%)");
    }
    darken(base)
}

/// Lightens a `#rrggbb` or `hsl(...)` handle by `amount`.
pub fn lighten(color: &str, amount: u8) -> String {
    if let Some((hue, saturation, lightness)) = parse_hsl(color) {
        let lighter = (lightness + u32::from(amount)).min(90);
        let softer = saturation.saturating_sub(20).max(30);
        return format!("hsl({hue}, {softer}%, {lighter}%)");
    }
    match hex_channels(color) {
        Some((r, g, b)) => format!(
            "#{:02x}{:02x}{:02x}",
            r.saturating_add(amount),
            g.saturating_add(amount),
            b.saturating_add(amount)
        ),
        None => color.to_string(),
    }
}

/// Darkens a `#rrggbb` handle one visual step.
pub fn darken(color: &str) -> String {
    match hex_channels(color) {
        Some((r, g, b)) => format!(
            "#{:02x}{:02x}{:02x}",
            r.saturating_sub(30),
            g.saturating_sub(30),
            b.saturating_sub(30)
        ),
        None => color.to_string(),
    }
}

/// Relative luminance in `0.0..=1.0` for contrast decisions.
pub fn luminance(color: &str) -> f64 {
    if let Some((_, _, lightness)) = parse_hsl(color) {
        return f64::from(lightness) / 100.0;
    }
    match hex_channels(color) {
        Some((r, g, b)) => {
            let linear = |channel: u8| {
                let value = f64::from(channel) / 255.0;
                if value <= 0.039_28 {
                    value / 12.92
                } else {
                    ((value + 0.055) / 1.055).powf(2.4)
                }
            };
            0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
        }
        None => 0.0,
    }
}

/// Picks black or white label text for a background handle.
pub fn text_color(background: &str) -> &'static str {
    if luminance(background) > 0.5 {
        "#000000"
    } else {
        "#ffffff"
    }
}

/// Deterministic HSL handle for departments past the fallback pool.
///
/// Replaces random generation so repeated sessions and repeated builds agree
/// on the handle for a given department name.
fn derived_hsl(department: &str) -> String {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in department.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    let hue = hash % 360;
    let saturation = 60 + (hash >> 9) % 40;
    let lightness = 35 + (hash >> 17) % 25;
    format!("hsl({hue}, {saturation}%, {lightness}%)")
}

fn parse_hsl(color: &str) -> Option<(u32, u32, u32)> {
    let captures = HSL_RE.captures(color)?;
    let hue = captures.get(1)?.as_str().parse().ok()?;
    let saturation = captures.get(2)?.as_str().parse().ok()?;
    let lightness = captures.get(3)?.as_str().parse().ok()?;
    Some((hue, saturation, lightness))
}

fn hex_channels(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::{
        darken, derived_hsl, lighten, luminance, stroke_for, text_color, TeamPalette,
    };

    #[test]
    fn named_departments_keep_their_colors() {
        let mut palette = TeamPalette::new();
        assert_eq!(palette.color_for("개발팀"), "#48bb78");
        assert_eq!(palette.color_for("경영진"), "#667eea");
    }

    #[test]
    fn handles_are_stable_until_reset() {
        let mut palette = TeamPalette::new();
        let first = palette.color_for("물류팀");
        assert_eq!(palette.color_for("물류팀"), first);
        assert_ne!(palette.color_for("보안팀"), first);

        palette.reset();
        assert_eq!(palette.color_for("물류팀"), first);
    }

    #[test]
    fn exhausted_pool_falls_back_to_name_hash() {
        let mut palette = TeamPalette::new();
        for index in 0..super::FALLBACK_COLORS.len() {
            palette.color_for(&format!("부서{index}"));
        }
        let overflow = palette.color_for("초과부서");
        assert!(overflow.starts_with("hsl("));
        assert_eq!(overflow, derived_hsl("초과부서"));
    }

    #[test]
    fn stroke_maps_named_bases_and_darkens_the_rest() {
        assert_eq!(stroke_for("#667eea"), "#4c51bf");
        assert_eq!(stroke_for("#102030"), darken("#102030"));
        assert_eq!(stroke_for("hsl(200, 80%, 50%)"), "hsl(200, 80%, 30%)");
    }

    #[test]
    fn lighten_raises_hsl_lightness() {
        assert_eq!(lighten("hsl(120, 80%, 40%)", 40), "hsl(120, 60%, 80%)");
        assert_eq!(lighten("#000000", 16), "#101010");
    }

    #[test]
    fn text_color_follows_luminance() {
        assert_eq!(text_color("#ffffff"), "#000000");
        assert_eq!(text_color("#1a202c"), "#ffffff");
        assert!(luminance("#ffffff") > luminance("#000000"));
    }
}
