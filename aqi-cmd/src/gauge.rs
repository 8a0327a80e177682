//! Gauge visualization of a predicted AQI.
//!
//! [`GaugeSpec`] serializes to JSON for chart front ends and also renders
//! itself as a fixed-width text bar for the terminal.

use serde::Serialize;

pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 500.0;

/// A translucent background band on the gauge axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

pub const GAUGE_STEPS: [GaugeStep; 6] = [
    GaugeStep { from: 0.0, to: 50.0, color: "rgba(0, 228, 0, 0.3)" },
    GaugeStep { from: 50.0, to: 100.0, color: "rgba(255, 255, 0, 0.3)" },
    GaugeStep { from: 100.0, to: 200.0, color: "rgba(255, 126, 0, 0.3)" },
    GaugeStep { from: 200.0, to: 300.0, color: "rgba(255, 0, 0, 0.3)" },
    GaugeStep { from: 300.0, to: 400.0, color: "rgba(143, 63, 151, 0.3)" },
    GaugeStep { from: 400.0, to: 500.0, color: "rgba(126, 0, 35, 0.3)" },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub title: String,
    /// Value shown as the gauge number. The bar itself is clamped to `range`.
    pub value: f64,
    /// Bar color (hex).
    pub color: String,
    pub range: [f64; 2],
    pub steps: Vec<GaugeStep>,
}

impl GaugeSpec {
    pub fn new(value: f64, title: impl Into<String>, color: impl Into<String>) -> Self {
        GaugeSpec {
            title: title.into(),
            value,
            color: color.into(),
            range: [GAUGE_MIN, GAUGE_MAX],
            steps: GAUGE_STEPS.to_vec(),
        }
    }

    /// Bar position within the axis, as a fraction in [0, 1].
    pub fn fill_fraction(&self) -> f64 {
        let [min, max] = self.range;
        if self.value.is_nan() || max <= min {
            return 0.0;
        }
        ((self.value - min) / (max - min)).clamp(0.0, 1.0)
    }

    /// Render as a title line plus a `width`-cell bar.
    ///
    /// ```text
    /// Predicted AQI for Mumbai
    /// [###############-------------------------------] 155 / 500  #FF7E00
    /// ```
    pub fn render(&self, width: usize) -> String {
        let filled = (self.fill_fraction() * width as f64).round() as usize;
        let bar: String = "#".repeat(filled) + &"-".repeat(width - filled.min(width));
        format!(
            "{}\n[{}] {} / {}  {}",
            self.title, bar, self.value, self.range[1], self.color
        )
    }
}
