//! Salary comparison chart model and its owning slot.
//!
//! DESIGN
//! ======
//! `ChartSlot` is the only owner of a `SalaryChart`. Rebuilding takes the old
//! instance out and destroys it before the replacement is created, so two
//! instances never coexist. Theme changes restyle the live instance in place
//! without touching its data.

use crate::util::format::format_whole_dollars;
use crate::util::theme::Theme;

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

pub const CHART_TITLE: &str = "Salary Comparison";
pub const PREDICTED_LABEL: &str = "Your Predicted Salary";
pub const AVERAGE_LABEL: &str = "Average Salary";

const TARGET_TICKS: f64 = 5.0;
const MAX_TICKS: usize = 10;

/// One bar of the comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
    pub fill: &'static str,
    pub border: &'static str,
}

/// Theme-dependent colors. Bars keep their own colors across themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartPalette {
    pub text: &'static str,
    pub grid: &'static str,
}

impl From<Theme> for ChartPalette {
    fn from(theme: Theme) -> Self {
        Self { text: theme.text_color(), grid: theme.grid_color() }
    }
}

/// A y-axis tick: value plus its `$` label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Two-bar predicted-vs-average chart.
#[derive(Clone, Debug, PartialEq)]
pub struct SalaryChart {
    id: u64,
    bars: [ChartBar; 2],
    palette: ChartPalette,
    axis_max: f64,
    ticks: Vec<AxisTick>,
}

impl SalaryChart {
    fn new(id: u64, predicted: f64, average: f64, theme: Theme) -> Self {
        let bars = [
            ChartBar {
                label: PREDICTED_LABEL,
                value: predicted,
                fill: "rgba(102, 126, 234, 0.8)",
                border: "rgba(102, 126, 234, 1)",
            },
            ChartBar {
                label: AVERAGE_LABEL,
                value: average,
                fill: "rgba(118, 75, 162, 0.8)",
                border: "rgba(118, 75, 162, 1)",
            },
        ];
        let (axis_max, step) = nice_axis(predicted.max(average));
        let ticks = tick_values(axis_max, step)
            .into_iter()
            .map(|value| AxisTick { value, label: format_whole_dollars(value) })
            .collect();
        Self { id, bars, palette: theme.into(), axis_max, ticks }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn bars(&self) -> &[ChartBar; 2] {
        &self.bars
    }

    pub fn palette(&self) -> ChartPalette {
        self.palette
    }

    pub fn axis_max(&self) -> f64 {
        self.axis_max
    }

    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    /// Fraction of the plot height a value occupies, clamped to `0..=1`.
    pub fn height_ratio(&self, value: f64) -> f64 {
        if self.axis_max <= 0.0 {
            return 0.0;
        }
        (value / self.axis_max).clamp(0.0, 1.0)
    }

    fn restyle(&mut self, theme: Theme) {
        self.palette = theme.into();
    }

    fn destroy(self) {
        #[cfg(feature = "hydrate")]
        log::debug!("destroying salary chart #{}", self.id);
    }
}

/// Owner of the at-most-one live chart.
#[derive(Clone, Debug, Default)]
pub struct ChartSlot {
    current: Option<SalaryChart>,
    created: u64,
    destroyed: u64,
}

impl ChartSlot {
    /// Destroy the live chart, if any, then build a new one.
    pub fn rebuild(&mut self, predicted: f64, average: f64, theme: Theme) -> &SalaryChart {
        if let Some(old) = self.current.take() {
            old.destroy();
            self.destroyed += 1;
        }
        self.created += 1;
        self.current.insert(SalaryChart::new(self.created, predicted, average, theme))
    }

    /// Recolor the live chart. Returns `false` when there is none.
    pub fn restyle(&mut self, theme: Theme) -> bool {
        match self.current.as_mut() {
            Some(chart) => {
                chart.restyle(theme);
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&SalaryChart> {
        self.current.as_ref()
    }

    /// Charts created minus charts destroyed; never exceeds one.
    pub fn live_instances(&self) -> u64 {
        self.created - self.destroyed
    }
}

/// Round `max` up to a 1/2/5 x 10^n step grid with roughly five intervals.
/// Returns `(axis_max, step)`.
fn nice_axis(max: f64) -> (f64, f64) {
    if !max.is_finite() || max <= 0.0 {
        return (1.0, 0.2);
    }
    let raw_step = max / TARGET_TICKS;
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    let axis_max = (max / step).ceil() * step;
    if !axis_max.is_finite() || !step.is_finite() || step <= 0.0 {
        return (max, max / TARGET_TICKS);
    }
    (axis_max, step)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn tick_values(axis_max: f64, step: f64) -> Vec<f64> {
    let count = ((axis_max / step).round() as usize).min(MAX_TICKS);
    (0..=count).map(|i| i as f64 * step).collect()
}
