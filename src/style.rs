use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    #[default]
    Circle,
    Square,
    Triangle,
    Cross,
    Plus,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Colours handed out to layers that don't pick their own
    pub const CYCLE: [Rgb; 6] = [
        Rgb(31, 119, 180),
        Rgb(255, 127, 14),
        Rgb(44, 160, 44),
        Rgb(214, 39, 40),
        Rgb(148, 103, 189),
        Rgb(140, 86, 75),
    ];

    pub fn cycle(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }
}

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

/// Per-call drawing style. Unset fields fall back to defaults when the
/// points are drawn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleOptions {
    pub marker: Option<Marker>,
    pub label: Option<String>,
    pub color: Option<Rgb>,
    /// Marker size in pixels
    pub size: Option<u32>,
    pub alpha: Option<f64>,
}

impl StyleOptions {
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Fills in the two defaults every scatter gets: a circle marker and the
    /// target's name as the label. Values the caller set always win.
    pub fn with_defaults(&self, target_name: &str) -> Self {
        let mut style = self.clone();
        style.marker.get_or_insert(Marker::Circle);
        style.label.get_or_insert_with(|| target_name.to_string());
        style
    }

    /// `layer` picks the colour when none was set
    pub fn resolve(&self, layer: usize) -> ResolvedStyle {
        ResolvedStyle {
            marker: self.marker.unwrap_or_default(),
            label: self.label.clone().unwrap_or_default(),
            color: self.color.unwrap_or_else(|| Rgb::cycle(layer)),
            size: self.size.unwrap_or(ResolvedStyle::DEFAULT_SIZE),
            alpha: self.alpha.unwrap_or(1.).clamp(0., 1.),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub marker: Marker,
    pub label: String,
    pub color: Rgb,
    pub size: u32,
    pub alpha: f64,
}

impl ResolvedStyle {
    pub const DEFAULT_SIZE: u32 = 5;
}
