//! Chart catalog
//!
//! The literal sample datasets behind every chart on the site, built by one
//! parameterized builder per [`VisualizationKind`].

use chrono::Month;
use std::collections::BTreeMap;

use super::descriptor::*;
use super::palette::Palette;

/// Every visualization the site knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisualizationKind {
    /// Hero section benchmark lines
    Benchmark,
    PercentileComparison,
    OutcomeAnalytics,
    IntegrationMetrics,
    SurgeonPerformance,
    SurgeonComparison,
}

impl VisualizationKind {
    pub fn all() -> &'static [VisualizationKind] {
        &[
            VisualizationKind::Benchmark,
            VisualizationKind::PercentileComparison,
            VisualizationKind::OutcomeAnalytics,
            VisualizationKind::IntegrationMetrics,
            VisualizationKind::SurgeonPerformance,
            VisualizationKind::SurgeonComparison,
        ]
    }

    /// Chart-type name
    pub fn name(&self) -> &'static str {
        match self {
            VisualizationKind::Benchmark => "benchmark",
            VisualizationKind::PercentileComparison => "percentileComparison",
            VisualizationKind::OutcomeAnalytics => "outcomeAnalytics",
            VisualizationKind::IntegrationMetrics => "integrationMetrics",
            VisualizationKind::SurgeonPerformance => "surgeonPerformance",
            VisualizationKind::SurgeonComparison => "surgeonComparison",
        }
    }

    /// Id of the canvas this visualization is drawn into. Doubles as the
    /// registry key.
    pub fn mount_id(&self) -> String {
        match self {
            VisualizationKind::Benchmark => "benchmarkChart".to_string(),
            other => format!("demo-{}", other.name()),
        }
    }
}

impl std::fmt::Display for VisualizationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds descriptors for a palette
#[derive(Debug, Clone)]
pub struct ChartCatalog {
    palette: Palette,
    animation_ms: u32,
    mobile_breakpoint: f64,
}

impl ChartCatalog {
    pub fn new(palette: Palette, animation_ms: u32) -> Self {
        Self {
            palette,
            animation_ms,
            mobile_breakpoint: 768.0,
        }
    }

    /// Viewport width below which the compact layout is used
    pub fn with_mobile_breakpoint(mut self, breakpoint: f64) -> Self {
        self.mobile_breakpoint = breakpoint;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn descriptor(&self, kind: VisualizationKind) -> VisualizationDescriptor {
        match kind {
            VisualizationKind::Benchmark => self.benchmark(),
            VisualizationKind::PercentileComparison => self.percentile_comparison(),
            VisualizationKind::OutcomeAnalytics => self.outcome_analytics(),
            VisualizationKind::IntegrationMetrics => self.integration_metrics(),
            VisualizationKind::SurgeonPerformance => self.surgeon_performance(),
            VisualizationKind::SurgeonComparison => self.surgeon_comparison(),
        }
    }

    /// Descriptor adapted to the current viewport width
    pub fn descriptor_for(
        &self,
        kind: VisualizationKind,
        viewport_width: f64,
    ) -> VisualizationDescriptor {
        self.descriptor(kind).for_viewport(viewport_width, self.mobile_breakpoint)
    }

    /// Sector average vs top decile vs own score over a year
    fn benchmark(&self) -> VisualizationDescriptor {
        let p = &self.palette;

        let sector_average = [45.0, 47.0, 46.0, 48.0, 49.0, 48.0, 50.0, 51.0, 50.0, 52.0, 51.0, 50.0];
        let top_decile = [85.0, 87.0, 86.0, 88.0, 90.0, 89.0, 91.0, 92.0, 90.0, 93.0, 92.0, 91.0];
        // Ends on the 52nd percentile shown in the patient demo
        let own = [42.0, 45.0, 48.0, 50.0, 52.0, 54.0, 56.0, 58.0, 55.0, 57.0, 59.0, 52.0];

        let mut scales = BTreeMap::new();
        scales.insert(
            "x".to_string(),
            Scale::titled("Time Period").grid(Grid {
                display: Some(false),
                ..Grid::default()
            }),
        );
        scales.insert(
            "y".to_string(),
            Scale::titled("Performance Score")
                .grid(Grid {
                    color: Some(p.ink.alpha(0.05)),
                    ..Grid::default()
                })
                .range(0.0, 100.0),
        );

        VisualizationDescriptor {
            chart_type: ChartType::Line,
            data: ChartData {
                labels: month_labels(),
                datasets: vec![
                    Dataset::new(
                        "Sector Average",
                        SeriesData::Values(sector_average.to_vec()),
                        ColorSpec::Single(p.baseline.alpha(0.1)),
                    )
                    .border(p.baseline.hex(), 2.0)
                    .curve(true, 0.4),
                    Dataset::new(
                        "Top 10%",
                        SeriesData::Values(top_decile.to_vec()),
                        ColorSpec::Single(p.leader.alpha(0.1)),
                    )
                    .border(p.leader.hex(), 2.0)
                    .curve(false, 0.4),
                    Dataset::new(
                        "Your Performance",
                        SeriesData::Values(own.to_vec()),
                        ColorSpec::Single(p.primary.alpha(0.2)),
                    )
                    .border(p.primary.hex(), 3.0)
                    .curve(false, 0.4)
                    .points(p.primary.hex(), p.surface.hex(), 2.0)
                    .point_radius(6.0),
                ],
            },
            options: ChartOptions {
                interaction: Some(Interaction::by_index()),
                plugins: Plugins {
                    legend: Legend {
                        labels: Some(LegendLabels {
                            use_point_style: true,
                            padding: 20.0,
                        }),
                        ..Legend::top()
                    },
                    tooltip: Some(TooltipStyle {
                        background_color: p.ink.alpha(0.8),
                        title_color: p.surface.hex(),
                        body_color: p.surface.hex(),
                        corner_radius: 8.0,
                        display_colors: true,
                    }),
                },
                scales,
                animation: Some(Animation {
                    duration: self.animation_ms,
                    easing: "easeInOutQuart".to_string(),
                }),
                ..ChartOptions::default()
            },
            callbacks: Callbacks::default(),
        }
    }

    /// Patient count per performance percentile band
    fn percentile_comparison(&self) -> VisualizationDescriptor {
        let p = &self.palette;

        let mut scales = BTreeMap::new();
        scales.insert("x".to_string(), Scale::titled("Performance Percentile"));
        scales.insert("y".to_string(), Scale::titled("Number of Patients"));

        VisualizationDescriptor {
            chart_type: ChartType::Bar,
            data: ChartData {
                labels: labels(&["0-10th", "10-25th", "25-50th", "50-75th", "75-90th", "90-100th"]),
                datasets: vec![Dataset::new(
                    "Patient Distribution",
                    SeriesData::Values(vec![156.0, 425.0, 687.0, 892.0, 456.0, 172.0]),
                    ColorSpec::PerPoint(p.heat.iter().map(|c| c.hex()).collect()),
                )
                .border(p.heat_peak().hex(), 1.0)],
            },
            options: ChartOptions {
                plugins: Plugins {
                    legend: Legend::hidden(),
                    tooltip: None,
                },
                scales,
                ..ChartOptions::default()
            },
            callbacks: Callbacks {
                tooltip_label: Some(TooltipLabel::YValue {
                    prefix: "Patients".to_string(),
                }),
                ..Callbacks::default()
            },
        }
    }

    /// Falling claims cost against rising ROI, on two y axes
    fn outcome_analytics(&self) -> VisualizationDescriptor {
        let p = &self.palette;

        let mut scales = BTreeMap::new();
        scales.insert(
            "x".to_string(),
            Scale {
                display: Some(true),
                ..Scale::titled("Quarter")
            },
        );
        scales.insert(
            "y".to_string(),
            Scale::titled("Claims Cost ($M)").linear(Position::Left),
        );
        scales.insert(
            "y1".to_string(),
            Scale::titled("ROI Increase (%)")
                .linear(Position::Right)
                .grid(Grid {
                    draw_on_chart_area: Some(false),
                    ..Grid::default()
                }),
        );

        VisualizationDescriptor {
            chart_type: ChartType::Line,
            data: ChartData {
                labels: labels(&["Q1 2023", "Q2 2023", "Q3 2023", "Q4 2023", "Q1 2024", "Q2 2024"]),
                datasets: vec![
                    Dataset::new(
                        "Claims Cost ($M)",
                        SeriesData::Values(vec![2.8, 2.6, 2.4, 2.2, 2.0, 1.9]),
                        ColorSpec::Single(p.cost.alpha(0.2)),
                    )
                    .border(p.cost.hex(), 3.0)
                    .curve(true, 0.4),
                    Dataset::new(
                        "ROI Increase (%)",
                        SeriesData::Values(vec![8.0, 10.0, 12.0, 13.0, 14.0, 15.0]),
                        ColorSpec::Single(p.success.alpha(0.2)),
                    )
                    .border(p.success.hex(), 3.0)
                    .curve(false, 0.4)
                    .y_axis("y1"),
                ],
            },
            options: ChartOptions {
                interaction: Some(Interaction::by_index()),
                plugins: Plugins {
                    legend: Legend::top(),
                    tooltip: None,
                },
                scales,
                ..ChartOptions::default()
            },
            callbacks: Callbacks::default(),
        }
    }

    /// Uptime vs daily API calls per integration node
    fn integration_metrics(&self) -> VisualizationDescriptor {
        let p = &self.palette;

        let nodes = [
            (99.9, 1247.0, 15.0),
            (98.5, 956.0, 12.0),
            (99.2, 1156.0, 14.0),
            (99.7, 1389.0, 16.0),
            (99.1, 1098.0, 13.0),
        ];

        let mut scales = BTreeMap::new();
        scales.insert(
            "x".to_string(),
            Scale::titled("System Uptime (%)").range(98.0, 100.0),
        );
        scales.insert("y".to_string(), Scale::titled("API Requests per Day"));

        VisualizationDescriptor {
            chart_type: ChartType::Bubble,
            data: ChartData {
                labels: Vec::new(),
                datasets: vec![Dataset::new(
                    "System Performance",
                    SeriesData::Bubbles(
                        nodes
                            .iter()
                            .map(|&(x, y, r)| BubblePoint { x, y, r })
                            .collect(),
                    ),
                    ColorSpec::Single(p.primary.alpha(0.6)),
                )
                .border_color(p.primary.hex())],
            },
            options: ChartOptions {
                plugins: Plugins {
                    legend: Legend::hidden(),
                    tooltip: None,
                },
                scales,
                ..ChartOptions::default()
            },
            callbacks: Callbacks {
                tooltip_label: Some(TooltipLabel::XY {
                    x_caption: "Uptime".to_string(),
                    x_suffix: "%".to_string(),
                    y_caption: "API Calls".to_string(),
                }),
                ..Callbacks::default()
            },
        }
    }

    /// Own scores vs top-quartile average across six dimensions
    fn surgeon_performance(&self) -> VisualizationDescriptor {
        let p = &self.palette;

        let mut scales = BTreeMap::new();
        scales.insert(
            "r".to_string(),
            Scale {
                begin_at_zero: Some(true),
                max: Some(100.0),
                grid: Some(Grid {
                    color: Some(p.ink.alpha(0.1)),
                    ..Grid::default()
                }),
                point_labels: Some(PointLabels {
                    font: Font { size: 12.0 },
                }),
                ..Scale::default()
            },
        );

        VisualizationDescriptor {
            chart_type: ChartType::Radar,
            data: ChartData {
                labels: labels(&[
                    "Technical Skill",
                    "Patient Outcomes",
                    "Efficiency",
                    "Innovation",
                    "Peer Recognition",
                    "Patient Satisfaction",
                ]),
                datasets: vec![
                    Dataset::new(
                        "Your Performance",
                        SeriesData::Values(vec![85.0, 92.0, 88.0, 78.0, 90.0, 95.0]),
                        ColorSpec::Single(p.success.alpha(0.2)),
                    )
                    .border(p.success.hex(), 2.0)
                    .points(p.success.hex(), p.surface.hex(), 2.0),
                    Dataset::new(
                        "Top 25% Average",
                        SeriesData::Values(vec![80.0, 85.0, 82.0, 75.0, 83.0, 87.0]),
                        ColorSpec::Single(p.peer.alpha(0.1)),
                    )
                    .border(p.peer.hex(), 2.0)
                    .points(p.peer.hex(), p.surface.hex(), 1.0),
                ],
            },
            options: ChartOptions {
                plugins: Plugins {
                    legend: Legend::top(),
                    tooltip: None,
                },
                scales,
                ..ChartOptions::default()
            },
            callbacks: Callbacks::default(),
        }
    }

    /// Success rate of the first twenty surgeons in the pooled cohort
    fn surgeon_comparison(&self) -> VisualizationDescriptor {
        let p = &self.palette;

        let success_rates = vec![
            96.2, 95.8, 95.5, 94.9, 94.7, 94.3, 93.8, 93.5, 93.1, 92.8, 92.4, 92.0, 91.6, 91.2,
            90.8, 90.4, 90.0, 89.6, 89.2, 88.8,
        ];
        let count = success_rates.len();

        // Own bar, then top performers, above average, everyone else
        let colors = (0..count)
            .map(|i| match i {
                0 => p.success.hex(),
                1..=4 => p.primary.hex(),
                5..=9 => p.accent.hex(),
                _ => p.baseline.hex(),
            })
            .collect();

        let tick_labels = (0..count)
            .map(|i| match i {
                0 => "YOU".to_string(),
                i if i % 5 == 0 => format!("#{}", i + 1),
                _ => String::new(),
            })
            .collect();

        let mut scales = BTreeMap::new();
        scales.insert("x".to_string(), Scale::titled("Surgeon Ranking (247 Total)"));
        scales.insert(
            "y".to_string(),
            Scale::titled("Success Rate (%)").range(85.0, 100.0),
        );

        VisualizationDescriptor {
            chart_type: ChartType::Bar,
            data: ChartData {
                labels: (1..=count).map(|i| format!("Surgeon {}", i)).collect(),
                datasets: vec![Dataset::new(
                    "Success Rate (%)",
                    SeriesData::Values(success_rates),
                    ColorSpec::PerPoint(colors),
                )
                .border(p.surface.hex(), 1.0)],
            },
            options: ChartOptions {
                plugins: Plugins {
                    legend: Legend::hidden(),
                    tooltip: None,
                },
                scales,
                ..ChartOptions::default()
            },
            callbacks: Callbacks {
                tooltip_title: Some(TooltipTitle::Highlight {
                    index: 0,
                    title: "Your Performance".to_string(),
                }),
                tick_labels: Some(tick_labels),
                ..Callbacks::default()
            },
        }
    }
}

impl Default for ChartCatalog {
    fn default() -> Self {
        Self::new(Palette::standard(), 2000)
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// "Jan" through "Dec"
fn month_labels() -> Vec<String> {
    let mut month = Month::January;
    let mut out = Vec::with_capacity(12);
    for _ in 0..12 {
        out.push(month.name()[..3].to_string());
        month = month.succ();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mount_ids() {
        assert_eq!(VisualizationKind::Benchmark.mount_id(), "benchmarkChart");
        assert_eq!(
            VisualizationKind::PercentileComparison.mount_id(),
            "demo-percentileComparison"
        );
        assert_eq!(
            VisualizationKind::SurgeonComparison.mount_id(),
            "demo-surgeonComparison"
        );
    }

    #[test]
    fn test_benchmark_descriptor() {
        let descriptor = ChartCatalog::default().descriptor(VisualizationKind::Benchmark);

        assert_eq!(descriptor.chart_type, ChartType::Line);
        assert_eq!(descriptor.data.labels.len(), 12);
        assert_eq!(descriptor.data.labels[0], "Jan");
        assert_eq!(descriptor.data.labels[11], "Dec");
        assert_eq!(descriptor.series_count(), 3);

        let names: Vec<_> = descriptor.data.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(names, vec!["Sector Average", "Top 10%", "Your Performance"]);
        assert!(descriptor.data.datasets.iter().all(|d| d.data.len() == 12));

        let config = descriptor.to_config_json().unwrap();
        assert_eq!(config["options"]["scales"]["y"]["min"], 0.0);
        assert_eq!(config["options"]["scales"]["y"]["max"], 100.0);
        assert_eq!(config["options"]["animation"]["duration"], 2000);
        assert_eq!(config["data"]["datasets"][0]["borderColor"], "#e5e7eb");
        assert_eq!(
            config["data"]["datasets"][0]["backgroundColor"],
            "rgba(229, 231, 235, 0.1)"
        );
        assert_eq!(config["data"]["datasets"][2]["pointRadius"], 6.0);
    }

    #[test]
    fn test_surgeon_comparison_tiers() {
        let descriptor = ChartCatalog::default().descriptor(VisualizationKind::SurgeonComparison);
        let dataset = &descriptor.data.datasets[0];

        let ColorSpec::PerPoint(colors) = &dataset.background_color else {
            panic!("expected per-bar colours");
        };
        assert_eq!(colors.len(), 20);
        assert_eq!(colors[0], "#22c55e");
        assert_eq!(colors[4], "#3b82f6");
        assert_eq!(colors[5], "#8b5cf6");
        assert_eq!(colors[10], "#e5e7eb");

        let ticks = descriptor.callbacks.tick_labels.as_ref().unwrap();
        assert_eq!(ticks[0], "YOU");
        assert_eq!(ticks[1], "");
        assert_eq!(ticks[5], "#6");
        assert_eq!(ticks[15], "#16");
        assert_eq!(descriptor.data.labels[19], "Surgeon 20");
    }

    #[test]
    fn test_outcome_analytics_dual_axis() {
        let config = ChartCatalog::default()
            .descriptor(VisualizationKind::OutcomeAnalytics)
            .to_config_json()
            .unwrap();

        assert_eq!(config["data"]["datasets"][1]["yAxisID"], "y1");
        assert_eq!(config["options"]["scales"]["y"]["position"], "left");
        assert_eq!(
            config["options"]["scales"]["y1"]["grid"],
            json!({ "drawOnChartArea": false })
        );
        assert_eq!(config["options"]["interaction"]["mode"], "index");
    }

    #[test]
    fn test_palette_changes_colours_not_shape() {
        let standard = ChartCatalog::new(Palette::standard(), 2000);
        let slate = ChartCatalog::new(Palette::slate(), 2000);

        for &kind in VisualizationKind::all() {
            let a = standard.descriptor(kind);
            let b = slate.descriptor(kind);
            assert_eq!(a.chart_type, b.chart_type, "{}", kind);
            assert_eq!(a.data.labels, b.data.labels, "{}", kind);
            assert_eq!(a.callbacks, b.callbacks, "{}", kind);
            for (x, y) in a.data.datasets.iter().zip(&b.data.datasets) {
                assert_eq!(x.data, y.data);
                assert_eq!(x.label, y.label);
            }
            assert_ne!(a, b, "{} should pick up palette colours", kind);
        }
    }

    #[test]
    fn test_descriptor_for_narrow_viewport() {
        let catalog = ChartCatalog::default().with_mobile_breakpoint(600.0);

        let wide = catalog.descriptor_for(VisualizationKind::Benchmark, 700.0);
        assert_eq!(wide, catalog.descriptor(VisualizationKind::Benchmark));

        let narrow = catalog.descriptor_for(VisualizationKind::Benchmark, 375.0);
        let config = narrow.to_config_json().unwrap();
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "bottom");
        assert_eq!(config["options"]["scales"]["y"]["title"]["display"], false);
    }

    #[test]
    fn test_every_kind_serializes() {
        let catalog = ChartCatalog::default();
        for &kind in VisualizationKind::all() {
            let config = catalog.descriptor(kind).to_config_json().unwrap();
            assert!(config["data"]["datasets"].as_array().is_some_and(|d| !d.is_empty()));
        }
    }
}
