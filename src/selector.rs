//! Demo Selector
//!
//! Resolves a demo id to its panel content and, once the panel's canvas is
//! in the render tree, builds the demo's chart. Chart construction is keyed
//! to a [`MountTicket`]; tickets from superseded selections are ignored, so
//! a slow mount can never draw a chart for a panel that was replaced.

use crate::charts::{ChartBackend, ChartCatalog, VisualizationKind, VisualizationRegistry};
use crate::content::{DemoDescriptor, DemoKind};
use crate::error::VizResult;

/// Proof that a panel was produced by a particular selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountTicket {
    generation: u64,
    kind: DemoKind,
}

impl MountTicket {
    pub fn kind(&self) -> DemoKind {
        self.kind
    }
}

/// Content for a selected demo
#[derive(Debug, Clone, PartialEq)]
pub struct DemoPanel {
    pub descriptor: &'static DemoDescriptor,
    /// Id the panel's canvas must carry
    pub mount_id: String,
    pub ticket: MountTicket,
}

impl DemoPanel {
    pub fn kind(&self) -> DemoKind {
        self.descriptor.kind
    }

    pub fn visualization(&self) -> VisualizationKind {
        self.descriptor.visualization
    }
}

/// What the demo display area should show
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Panel(DemoPanel),
    /// "Demo Not Available" placeholder
    Unavailable { requested: String },
}

#[derive(Debug, Default)]
pub struct DemoSelector {
    active: Option<DemoKind>,
    generation: u64,
}

impl DemoSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a demo by its markup id
    ///
    /// Unknown ids produce the placeholder and leave the active demo as it
    /// was. Either way any pending mount is cancelled, since the panel it
    /// belonged to is gone.
    pub fn select(&mut self, demo_id: &str) -> Selection {
        match demo_id.parse::<DemoKind>() {
            Ok(kind) => Selection::Panel(self.select_kind(kind)),
            Err(err) => {
                self.generation += 1;
                tracing::debug!(error = %err, "Demo not available");
                Selection::Unavailable {
                    requested: demo_id.to_string(),
                }
            }
        }
    }

    pub fn select_kind(&mut self, kind: DemoKind) -> DemoPanel {
        self.generation += 1;
        self.active = Some(kind);

        let descriptor = kind.descriptor();
        DemoPanel {
            descriptor,
            mount_id: descriptor.visualization.mount_id(),
            ticket: MountTicket {
                generation: self.generation,
                kind,
            },
        }
    }

    /// Whether `ticket` belongs to the latest selection
    pub fn is_current(&self, ticket: &MountTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Build the chart for a panel whose canvas now exists
    ///
    /// Returns `Ok(false)` without touching the registry when the ticket is
    /// stale.
    pub fn mount_ready<B: ChartBackend>(
        &self,
        ticket: MountTicket,
        registry: &mut VisualizationRegistry<B>,
        catalog: &ChartCatalog,
        viewport_width: f64,
    ) -> VizResult<bool> {
        if !self.is_current(&ticket) {
            tracing::debug!(demo = %ticket.kind, "Skipping chart for superseded demo");
            return Ok(false);
        }

        let kind = ticket.kind.visualization();
        let id = kind.mount_id();
        let descriptor = catalog.descriptor_for(kind, viewport_width);
        registry.upsert(&id, &descriptor, &id)?;
        Ok(true)
    }

    pub fn active(&self) -> Option<DemoKind> {
        self.active
    }

    pub fn is_active(&self, kind: DemoKind) -> bool {
        self.active == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::testing::RecordingBackend;
    use crate::error::VizError;

    #[test]
    fn test_patient_context_scenario() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);
        let catalog = ChartCatalog::default();
        let mut selector = DemoSelector::new();

        let Selection::Panel(panel) = selector.select("patient-context") else {
            panic!("expected a panel");
        };

        let values: Vec<_> = panel.descriptor.metrics.iter().map(|m| m.value).collect();
        assert_eq!(values, vec!["52nd", "2,788", "94%", "14.2"]);
        assert_eq!(panel.mount_id, "demo-percentileComparison");
        assert!(log.renders().is_empty());

        assert!(selector.mount_ready(panel.ticket, &mut registry, &catalog, 1280.0).unwrap());
        assert_eq!(log.renders(), vec!["demo-percentileComparison"]);
        assert!(selector.is_active(DemoKind::PatientContext));
    }

    #[test]
    fn test_unknown_demo_renders_placeholder() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let registry = VisualizationRegistry::new(backend);
        let mut selector = DemoSelector::new();

        let selection = selector.select("unknown-demo");
        assert_eq!(
            selection,
            Selection::Unavailable {
                requested: "unknown-demo".to_string()
            }
        );
        assert_eq!(selector.active(), None);
        assert!(registry.is_empty());
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_unknown_demo_keeps_active_state() {
        let mut selector = DemoSelector::new();
        selector.select_kind(DemoKind::SurgeonValue);
        selector.select("retired-demo");
        assert_eq!(selector.active(), Some(DemoKind::SurgeonValue));
    }

    #[test]
    fn test_superseded_ticket_is_skipped() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);
        let catalog = ChartCatalog::default();
        let mut selector = DemoSelector::new();

        let first = selector.select_kind(DemoKind::InsuranceOutcome);
        let second = selector.select_kind(DemoKind::SurgeonContext);

        assert!(!selector.mount_ready(first.ticket, &mut registry, &catalog, 1280.0).unwrap());
        assert!(selector.mount_ready(second.ticket, &mut registry, &catalog, 1280.0).unwrap());

        assert_eq!(log.renders(), vec!["demo-surgeonComparison"]);
        assert_eq!(selector.active(), Some(DemoKind::SurgeonContext));
    }

    #[test]
    fn test_placeholder_cancels_pending_mount() {
        let mut registry = VisualizationRegistry::new(RecordingBackend::new());
        let catalog = ChartCatalog::default();
        let mut selector = DemoSelector::new();

        let panel = selector.select_kind(DemoKind::SsraaIntegration);
        selector.select("unknown-demo");

        assert!(!selector.mount_ready(panel.ticket, &mut registry, &catalog, 1280.0).unwrap());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_canvas_surfaces_as_error() {
        let backend = RecordingBackend::new().without_mount("demo-integrationMetrics");
        let mut registry = VisualizationRegistry::new(backend);
        let catalog = ChartCatalog::default();
        let mut selector = DemoSelector::new();

        let panel = selector.select_kind(DemoKind::SsraaIntegration);
        let err = selector
            .mount_ready(panel.ticket, &mut registry, &catalog, 1280.0)
            .unwrap_err();
        assert!(matches!(err, VizError::RenderTargetMissing { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reselecting_same_demo_replaces_chart() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);
        let catalog = ChartCatalog::default();
        let mut selector = DemoSelector::new();

        for _ in 0..3 {
            let panel = selector.select_kind(DemoKind::PatientContext);
            selector.mount_ready(panel.ticket, &mut registry, &catalog, 1280.0).unwrap();
        }

        assert_eq!(registry.len(), 1);
        assert_eq!(log.live(), 1);
        assert_eq!(log.destroys(), 2);
    }
}
