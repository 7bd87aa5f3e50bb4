use glint_core::Color;

use crate::interpolate::{lerp_f64, Lerp};

/// One slice of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSection {
    /// Relative weight; the sweep angle is derived from the share of the
    /// total across all sections.
    pub value: f64,
    pub radius: f64,
    pub color: Color,
    pub title: Option<String>,
}

impl PieSection {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            radius: 40.0,
            color: Color::rgba(0.35, 0.65, 1.0, 1.0),
            title: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Lerp for PieSection {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        PieSection {
            value: lerp_f64(a.value, b.value, t),
            radius: lerp_f64(a.radius, b.radius, t),
            color: Lerp::lerp(&a.color, &b.color, t),
            title: b.title.clone(),
        }
    }
}

/// Full pie-chart configuration snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartData {
    pub sections: Vec<PieSection>,
    /// Radius of the empty center (donut hole); 0 for a full pie.
    pub center_space_radius: f64,
    /// Angular padding between sections, degrees.
    pub section_space: f64,
    /// Rotation of the first section's start edge, degrees.
    pub start_angle: f64,
}

impl PieChartData {
    pub fn new(sections: Vec<PieSection>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            sections.iter().all(|s| s.value.is_finite() && s.value >= 0.0),
            "PieChartData section values must be finite and non-negative"
        );
        Ok(Self {
            sections,
            center_space_radius: 0.0,
            section_space: 2.0,
            start_angle: 0.0,
        })
    }

    /// Sweep angle of each section, degrees, summing to 360.
    ///
    /// When every value is zero the circle is split evenly so the chart still
    /// renders something.
    pub fn section_angles(&self) -> Vec<f64> {
        if self.sections.is_empty() {
            return Vec::new();
        }
        let total: f64 = self.sections.iter().map(|s| s.value).sum();
        if total <= 0.0 {
            tracing::trace!("pie sections sum to zero, splitting evenly");
            let each = 360.0 / self.sections.len() as f64;
            return vec![each; self.sections.len()];
        }
        self.sections
            .iter()
            .map(|s| s.value / total * 360.0)
            .collect()
    }
}

impl Default for PieChartData {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            center_space_radius: 0.0,
            section_space: 2.0,
            start_angle: 0.0,
        }
    }
}

impl Lerp for PieChartData {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.sections.len(),
            b.sections.len(),
            "cannot interpolate pie charts with differing section counts ({} vs {})",
            a.sections.len(),
            b.sections.len()
        );
        PieChartData {
            sections: Lerp::lerp(&a.sections, &b.sections, t),
            center_space_radius: lerp_f64(a.center_space_radius, b.center_space_radius, t),
            section_space: lerp_f64(a.section_space, b.section_space, t),
            start_angle: lerp_f64(a.start_angle, b.start_angle, t),
        }
    }
}
