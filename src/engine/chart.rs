//! Ring (donut) chart geometry
//!
//! Turns a spending breakdown into annular segments ready to draw. Angles are
//! in radians, 0 at twelve o'clock and increasing clockwise. Coordinates are
//! relative to the ring center with y pointing down, so a point at angle `a`
//! and radius `r` is `(r·sin a, −r·cos a)`.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Category, Money};

use super::aggregation::CategoryBreakdown;

/// Side length of the square canvas the default layout is sized for
pub const CANVAS_SIZE: f64 = 400.0;

/// Color scheme for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Fill of the placeholder ring shown when nothing has been spent
    pub const fn neutral_color(&self) -> &'static str {
        match self {
            Self::Light => "#f3f4f6",
            Self::Dark => "#2C2C2E",
        }
    }

    pub const fn primary_text_color(&self) -> &'static str {
        match self {
            Self::Light => "#1C1C1E",
            Self::Dark => "#FFFFFF",
        }
    }

    pub const fn secondary_text_color(&self) -> &'static str {
        "#8E8E93"
    }

    /// Fill of the disc behind the center labels
    pub const fn center_color(&self) -> &'static str {
        match self {
            Self::Light => "#FFFFFF",
            Self::Dark => "#1C1C1E",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme '{}', expected light or dark", other)),
        }
    }
}

/// Presentation inputs that do not affect geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    pub theme: Theme,
    pub currency_symbol: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            currency_symbol: "$".to_string(),
        }
    }
}

/// Ring dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Gap between adjacent segments, in radians
    pub pad_angle: f64,
    /// Segments at or below this percentage get no label
    pub label_threshold: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        let outer_radius = CANVAS_SIZE / 2.05;
        Self {
            outer_radius,
            inner_radius: outer_radius * 0.58,
            pad_angle: 0.02,
            label_threshold: 8.0,
        }
    }
}

impl RingLayout {
    pub fn validate(&self) -> SpendwiseResult<()> {
        let finite = [
            self.outer_radius,
            self.inner_radius,
            self.pad_angle,
            self.label_threshold,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(SpendwiseError::Validation(
                "Ring layout values must be finite".into(),
            ));
        }

        if self.inner_radius < 0.0 || self.outer_radius <= self.inner_radius {
            return Err(SpendwiseError::Validation(format!(
                "Ring radii must satisfy outer > inner >= 0 (outer {}, inner {})",
                self.outer_radius, self.inner_radius
            )));
        }

        if self.pad_angle < 0.0 {
            return Err(SpendwiseError::Validation(
                "Pad angle cannot be negative".into(),
            ));
        }

        Ok(())
    }

    /// Radius halfway through the band, where labels sit
    pub fn label_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }
}

/// Percentage label inside a segment
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// One drawn category slice
#[derive(Debug, Clone, PartialEq)]
pub struct RingSegment {
    pub category: Category,
    pub amount: Money,
    pub percentage: f64,
    pub color: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Middle of the category's slot; labels are placed here
    pub mid_angle: f64,
    /// SVG path data for the annular sector (empty when collapsed)
    pub path: String,
    pub label: Option<SegmentLabel>,
}

impl RingSegment {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Text stacked in the middle of the ring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterLabel {
    pub title: String,
    pub value: Option<String>,
    pub caption: Option<String>,
}

/// Full-circle band drawn when there is nothing to show
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderRing {
    pub color: &'static str,
    pub path: String,
}

/// Everything needed to draw the chart
#[derive(Debug, Clone, PartialEq)]
pub struct RingChart {
    pub layout: RingLayout,
    pub theme: Theme,
    pub segments: Vec<RingSegment>,
    pub placeholder: Option<PlaceholderRing>,
    pub center: CenterLabel,
}

impl RingChart {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Lay out a spending breakdown as a ring
///
/// Slices follow the order of `breakdown`. `total` is only used for the
/// center label; slot sizes come from the breakdown amounts themselves so the
/// ring always closes.
pub fn build(
    breakdown: &[CategoryBreakdown],
    total: Money,
    layout: &RingLayout,
    style: &ChartStyle,
) -> SpendwiseResult<RingChart> {
    layout.validate()?;

    let slot_total: i64 = breakdown
        .iter()
        .map(|row| row.amount.cents())
        .filter(|cents| *cents > 0)
        .fold(0, i64::saturating_add);

    if slot_total == 0 {
        return Ok(RingChart {
            layout: *layout,
            theme: style.theme,
            segments: Vec::new(),
            placeholder: Some(PlaceholderRing {
                color: style.theme.neutral_color(),
                path: full_ring_path(layout.outer_radius, layout.inner_radius),
            }),
            center: CenterLabel {
                title: "No activity yet".to_string(),
                value: None,
                caption: None,
            },
        });
    }

    let half_pad = layout.pad_angle / 2.0;
    let label_radius = layout.label_radius();
    let mut cumulative: i64 = 0;
    let mut segments = Vec::with_capacity(breakdown.len());

    for row in breakdown.iter().filter(|row| row.amount.is_positive()) {
        let slot_start = TAU * (cumulative as f64 / slot_total as f64);
        cumulative = cumulative.saturating_add(row.amount.cents());
        let slot_end = TAU * (cumulative as f64 / slot_total as f64);
        let mid_angle = (slot_start + slot_end) / 2.0;

        let (start_angle, end_angle) = if slot_end - slot_start > layout.pad_angle {
            (slot_start + half_pad, slot_end - half_pad)
        } else {
            (mid_angle, mid_angle)
        };

        let label = (row.percentage > layout.label_threshold).then(|| {
            let (x, y) = polar(label_radius, mid_angle);
            SegmentLabel {
                text: format!("{}%", row.percentage.round() as i64),
                x,
                y,
            }
        });

        segments.push(RingSegment {
            category: row.category,
            amount: row.amount,
            percentage: row.percentage,
            color: row.color,
            start_angle,
            end_angle,
            mid_angle,
            path: sector_path(layout.outer_radius, layout.inner_radius, start_angle, end_angle),
            label,
        });
    }

    let active = segments.len();

    Ok(RingChart {
        layout: *layout,
        theme: style.theme,
        segments,
        placeholder: None,
        center: CenterLabel {
            title: "Total Spent".to_string(),
            value: Some(total.format_whole(&style.currency_symbol)),
            caption: Some(format!("{} categories active", active)),
        },
    })
}

/// Point at `angle` on a circle of `radius`
pub fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

fn coord(value: f64) -> String {
    // Avoid "-0.000"
    if value.abs() < 0.0005 {
        "0.000".to_string()
    } else {
        format!("{:.3}", value)
    }
}

fn point(radius: f64, angle: f64) -> String {
    let (x, y) = polar(radius, angle);
    format!("{},{}", coord(x), coord(y))
}

fn sector_path(outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= TAU - 1e-9 {
        return full_ring_path(outer, inner);
    }

    let large_arc = if sweep > PI { 1 } else { 0 };
    let r_out = coord(outer);
    let r_in = coord(inner);

    if inner > 0.0 {
        format!(
            "M{}A{},{} 0 {} 1 {}L{}A{},{} 0 {} 0 {}Z",
            point(outer, start),
            r_out,
            r_out,
            large_arc,
            point(outer, end),
            point(inner, end),
            r_in,
            r_in,
            large_arc,
            point(inner, start),
        )
    } else {
        format!(
            "M{}A{},{} 0 {} 1 {}L0.000,0.000Z",
            point(outer, start),
            r_out,
            r_out,
            large_arc,
            point(outer, end),
        )
    }
}

/// Closed band between two circles, drawn as two half-arcs per circle with
/// opposite winding so the hole stays empty
fn full_ring_path(outer: f64, inner: f64) -> String {
    let r_out = coord(outer);
    let mut path = format!(
        "M{}A{},{} 0 1 1 {}A{},{} 0 1 1 {}Z",
        point(outer, 0.0),
        r_out,
        r_out,
        point(outer, PI),
        r_out,
        r_out,
        point(outer, 0.0),
    );

    if inner > 0.0 {
        let r_in = coord(inner);
        path.push_str(&format!(
            "M{}A{},{} 0 1 0 {}A{},{} 0 1 0 {}Z",
            point(inner, 0.0),
            r_in,
            r_in,
            point(inner, PI),
            r_in,
            r_in,
            point(inner, 0.0),
        ));
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregation::summarize;
    use crate::models::Transaction;

    fn chart_for(rows: &[(Category, i64)]) -> RingChart {
        let txns: Vec<Transaction> = rows
            .iter()
            .map(|(category, cents)| Transaction::expense(Money::from_cents(*cents), *category))
            .collect();
        let summary = summarize(&txns);
        build(
            &summary.breakdown,
            summary.total_expense,
            &RingLayout::default(),
            &ChartStyle::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_default_layout() {
        let layout = RingLayout::default();
        assert!((layout.outer_radius - 195.121_951).abs() < 1e-5);
        assert!((layout.inner_radius - 113.170_731).abs() < 1e-5);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_validation() {
        let inverted = RingLayout {
            inner_radius: 200.0,
            ..RingLayout::default()
        };
        assert!(inverted.validate().unwrap_err().is_validation());

        let negative_pad = RingLayout {
            pad_angle: -0.1,
            ..RingLayout::default()
        };
        assert!(negative_pad.validate().is_err());

        let pie = RingLayout {
            inner_radius: 0.0,
            ..RingLayout::default()
        };
        assert!(pie.validate().is_ok());
    }

    #[test]
    fn test_two_slices() {
        let chart = chart_for(&[(Category::Food, 10000), (Category::Housing, 30000)]);
        assert_eq!(chart.segments.len(), 2);

        let housing = &chart.segments[0];
        let food = &chart.segments[1];
        assert_eq!(housing.category, Category::Housing);
        assert!((housing.start_angle - 0.01).abs() < 1e-12);
        assert!((housing.end_angle - (1.5 * PI - 0.01)).abs() < 1e-12);
        assert!((food.start_angle - (1.5 * PI + 0.01)).abs() < 1e-12);
        assert!((food.end_angle - (TAU - 0.01)).abs() < 1e-12);

        assert_eq!(housing.label.as_ref().unwrap().text, "75%");
        assert_eq!(food.label.as_ref().unwrap().text, "25%");

        assert_eq!(chart.center.title, "Total Spent");
        assert_eq!(chart.center.value.as_deref(), Some("$400"));
        assert_eq!(chart.center.caption.as_deref(), Some("2 categories active"));
        assert!(chart.placeholder.is_none());
    }

    #[test]
    fn test_label_sits_on_band_midline() {
        let chart = chart_for(&[(Category::Food, 10000), (Category::Housing, 30000)]);
        let layout = RingLayout::default();
        let label = chart.segments[1].label.as_ref().unwrap();

        // Food occupies 270..360 degrees, centered at 315
        let (x, y) = polar(layout.label_radius(), 1.75 * PI);
        assert!((label.x - x).abs() < 1e-9);
        assert!((label.y - y).abs() < 1e-9);
        assert!(label.x < 0.0 && label.y < 0.0);
    }

    #[test]
    fn test_small_slices_have_no_label() {
        let chart = chart_for(&[(Category::Food, 9500), (Category::Health, 500)]);
        assert!(chart.segments[0].label.is_some());
        assert!(chart.segments[1].label.is_none());
    }

    #[test]
    fn test_exactly_threshold_is_unlabeled() {
        let chart = chart_for(&[(Category::Food, 9200), (Category::Health, 800)]);
        assert_eq!(chart.segments[1].percentage, 8.0);
        assert!(chart.segments[1].label.is_none());
    }

    #[test]
    fn test_single_category() {
        let chart = chart_for(&[(Category::Travel, 5000)]);
        let seg = &chart.segments[0];
        assert!((seg.sweep() - (TAU - 0.02)).abs() < 1e-12);
        assert_eq!(seg.label.as_ref().unwrap().text, "100%");
        assert_eq!(chart.center.caption.as_deref(), Some("1 categories active"));
        assert!(seg.path.starts_with('M'));
    }

    #[test]
    fn test_tiny_slot_collapses_to_midpoint() {
        let chart = chart_for(&[(Category::Food, 1_000_000), (Category::Health, 1)]);
        let tiny = &chart.segments[1];
        assert_eq!(tiny.start_angle, tiny.end_angle);
        assert_eq!(tiny.start_angle, tiny.mid_angle);
        assert!(tiny.path.is_empty());
    }

    #[test]
    fn test_empty_breakdown_shows_placeholder() {
        let summary = summarize(&[]);
        let style = ChartStyle {
            theme: Theme::Dark,
            currency_symbol: "€".into(),
        };
        let chart = build(
            &summary.breakdown,
            summary.total_expense,
            &RingLayout::default(),
            &style,
        )
        .unwrap();

        assert!(chart.is_empty());
        assert_eq!(chart.center.title, "No activity yet");
        assert!(chart.center.value.is_none());
        assert_eq!(chart.placeholder.as_ref().unwrap().color, "#2C2C2E");
    }

    #[test]
    fn test_output_is_deterministic() {
        let rows = [
            (Category::Food, 62000),
            (Category::Housing, 85000),
            (Category::Transport, 19000),
        ];
        assert_eq!(chart_for(&rows), chart_for(&rows));
    }

    #[test]
    fn test_sector_path_format() {
        let path = sector_path(100.0, 50.0, 0.0, PI / 2.0);
        assert_eq!(
            path,
            "M0.000,-100.000A100.000,100.000 0 0 1 100.000,0.000\
             L50.000,0.000A50.000,50.000 0 0 0 0.000,-50.000Z"
        );
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.neutral_color(), "#f3f4f6");
    }
}
