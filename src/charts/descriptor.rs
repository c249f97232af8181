//! Visualization descriptors
//!
//! A [`VisualizationDescriptor`] is the complete, immutable configuration of
//! one chart. It serializes to the configuration object Chart.js expects.
//! Options that Chart.js takes as JS callbacks are kept in [`Callbacks`] as
//! plain data and wired up by the browser backend.

use serde::Serialize;
use std::collections::BTreeMap;

/// Chart.js chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Bubble,
    Radar,
}

/// Full chart configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationDescriptor {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
    #[serde(skip)]
    pub callbacks: Callbacks,
}

/// Labels plus series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Values of one series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Bubbles(Vec<BubblePoint>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Values(values) => values.len(),
            SeriesData::Bubbles(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// One colour for the whole series, or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

/// One series and its styling
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: SeriesData,
    pub background_color: ColorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

impl Dataset {
    /// A series with only the required fields set
    pub fn new(label: impl Into<String>, data: SeriesData, background: ColorSpec) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: background,
            border_color: None,
            border_width: None,
            fill: None,
            tension: None,
            point_background_color: None,
            point_border_color: None,
            point_border_width: None,
            point_radius: None,
            y_axis_id: None,
        }
    }

    pub fn border(mut self, color: impl Into<String>, width: f64) -> Self {
        self.border_color = Some(color.into());
        self.border_width = Some(width);
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    /// Smoothed line, optionally filled to the axis
    pub fn curve(mut self, fill: bool, tension: f64) -> Self {
        self.fill = Some(fill);
        self.tension = Some(tension);
        self
    }

    pub fn points(
        mut self,
        background: impl Into<String>,
        border: impl Into<String>,
        border_width: f64,
    ) -> Self {
        self.point_background_color = Some(background.into());
        self.point_border_color = Some(border.into());
        self.point_border_width = Some(border_width);
        self
    }

    pub fn point_radius(mut self, radius: f64) -> Self {
        self.point_radius = Some(radius);
        self
    }

    pub fn y_axis(mut self, axis: impl Into<String>) -> Self {
        self.y_axis_id = Some(axis.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    pub plugins: Plugins,
    pub scales: BTreeMap<String, Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: None,
            plugins: Plugins::default(),
            scales: BTreeMap::new(),
            animation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: InteractionMode,
}

impl Interaction {
    /// Hover anywhere in a column to see all series at that index
    pub fn by_index() -> Self {
        Self {
            intersect: false,
            mode: InteractionMode::Index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Index,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

impl Default for Legend {
    fn default() -> Self {
        Self::top()
    }
}

impl Legend {
    pub fn top() -> Self {
        Self {
            display: true,
            position: Some(Position::Top),
            labels: None,
        }
    }

    pub fn hidden() -> Self {
        Self {
            display: false,
            position: None,
            labels: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub padding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub corner_radius: f64,
    pub display_colors: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_labels: Option<PointLabels>,
}

impl Scale {
    /// An axis with a visible title
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Some(AxisTitle {
                display: true,
                text: text.into(),
            }),
            ..Self::default()
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// A visible linear axis on one side of the plot
    pub fn linear(mut self, position: Position) -> Self {
        self.scale_type = Some(ScaleType::Linear);
        self.display = Some(true);
        self.position = Some(position);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLabels {
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: String,
}

/// Formatting behaviour Chart.js expects as JS functions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callbacks {
    pub tooltip_label: Option<TooltipLabel>,
    pub tooltip_title: Option<TooltipTitle>,
    /// Replacement text for each x-axis tick, by index
    pub tick_labels: Option<Vec<String>>,
}

impl Callbacks {
    pub fn is_empty(&self) -> bool {
        self.tooltip_label.is_none() && self.tooltip_title.is_none() && self.tick_labels.is_none()
    }
}

/// Tooltip body line for a hovered point
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipLabel {
    /// `"<prefix>: <y>"`
    YValue { prefix: String },
    /// Bubble chart: both coordinates with their own captions
    XY {
        x_caption: String,
        x_suffix: String,
        y_caption: String,
    },
}

impl TooltipLabel {
    pub fn format(&self, x: f64, y: f64) -> String {
        match self {
            TooltipLabel::YValue { prefix } => format!("{}: {}", prefix, y),
            TooltipLabel::XY {
                x_caption,
                x_suffix,
                y_caption,
            } => format!("{}: {}{}, {}: {}", x_caption, x, x_suffix, y_caption, y),
        }
    }
}

/// Tooltip title for a hovered point
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipTitle {
    /// The point at `index` gets `title`; every other point shows its label
    Highlight { index: usize, title: String },
}

impl TooltipTitle {
    pub fn format(&self, index: usize, label: &str) -> String {
        match self {
            TooltipTitle::Highlight { index: highlighted, title } if *highlighted == index => {
                title.clone()
            }
            TooltipTitle::Highlight { .. } => label.to_string(),
        }
    }
}

impl VisualizationDescriptor {
    /// Chart.js configuration object
    pub fn to_config_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Compact layout for narrow viewports: legend at the bottom, no axis
    /// titles on the x and y axes.
    pub fn for_viewport(mut self, viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width >= breakpoint {
            return self;
        }

        if self.options.plugins.legend.display {
            self.options.plugins.legend.position = Some(Position::Bottom);
        }
        for axis in ["x", "y"] {
            if let Some(title) = self
                .options
                .scales
                .get_mut(axis)
                .and_then(|scale| scale.title.as_mut())
            {
                title.display = false;
            }
        }
        self
    }

    pub fn series_count(&self) -> usize {
        self.data.datasets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> VisualizationDescriptor {
        let mut scales = BTreeMap::new();
        scales.insert("x".to_string(), Scale::titled("Quarter"));
        scales.insert(
            "y1".to_string(),
            Scale::titled("ROI Increase (%)").linear(Position::Right),
        );

        VisualizationDescriptor {
            chart_type: ChartType::Line,
            data: ChartData {
                labels: vec!["Q1".to_string(), "Q2".to_string()],
                datasets: vec![Dataset::new(
                    "ROI",
                    SeriesData::Values(vec![8.0, 10.0]),
                    ColorSpec::Single("rgba(34, 197, 94, 0.2)".to_string()),
                )
                .border("#22c55e", 3.0)
                .curve(false, 0.4)
                .y_axis("y1")],
            },
            options: ChartOptions {
                scales,
                ..ChartOptions::default()
            },
            callbacks: Callbacks::default(),
        }
    }

    #[test]
    fn test_serializes_chartjs_shape() {
        let config = sample().to_config_json().unwrap();

        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"], json!(["Q1", "Q2"]));

        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["data"], json!([8.0, 10.0]));
        assert_eq!(dataset["backgroundColor"], "rgba(34, 197, 94, 0.2)");
        assert_eq!(dataset["borderWidth"], 3.0);
        assert_eq!(dataset["yAxisID"], "y1");
        assert!(dataset.get("pointRadius").is_none());

        assert_eq!(config["options"]["maintainAspectRatio"], false);
        assert_eq!(config["options"]["scales"]["y1"]["type"], "linear");
        assert_eq!(config["options"]["scales"]["y1"]["position"], "right");
        assert!(config.get("callbacks").is_none());
    }

    #[test]
    fn test_bubbles_and_per_point_colors() {
        let dataset = Dataset::new(
            "System Performance",
            SeriesData::Bubbles(vec![BubblePoint { x: 99.9, y: 1247.0, r: 15.0 }]),
            ColorSpec::PerPoint(vec!["#22c55e".to_string()]),
        );
        let value = serde_json::to_value(&dataset).unwrap();

        assert_eq!(value["data"], json!([{ "x": 99.9, "y": 1247.0, "r": 15.0 }]));
        assert_eq!(value["backgroundColor"], json!(["#22c55e"]));
        assert!(value.get("labels").is_none());
    }

    #[test]
    fn test_compact_layout_below_breakpoint() {
        let compact = sample().for_viewport(500.0, 768.0);
        assert_eq!(compact.options.plugins.legend.position, Some(Position::Bottom));
        assert!(!compact.options.scales["x"].title.as_ref().unwrap().display);
        // Secondary axes keep their titles
        assert!(compact.options.scales["y1"].title.as_ref().unwrap().display);

        let wide = sample().for_viewport(1280.0, 768.0);
        assert_eq!(wide, sample());
    }

    #[test]
    fn test_tooltip_formatting() {
        let label = TooltipLabel::YValue {
            prefix: "Patients".to_string(),
        };
        assert_eq!(label.format(0.0, 425.0), "Patients: 425");

        let label = TooltipLabel::XY {
            x_caption: "Uptime".to_string(),
            x_suffix: "%".to_string(),
            y_caption: "API Calls".to_string(),
        };
        assert_eq!(label.format(99.9, 1247.0), "Uptime: 99.9%, API Calls: 1247");

        let title = TooltipTitle::Highlight {
            index: 0,
            title: "Your Performance".to_string(),
        };
        assert_eq!(title.format(0, "Surgeon 1"), "Your Performance");
        assert_eq!(title.format(3, "Surgeon 4"), "Surgeon 4");
    }
}
