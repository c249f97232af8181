//! Visualization Registry
//!
//! Owns every live chart instance, keyed by id. At most one instance exists
//! per id: a replacement is only created after the previous instance has
//! been destroyed.

use std::collections::HashMap;

use crate::error::{VizError, VizResult};

use super::backend::{ChartBackend, ChartInstance, ImageDownloader};
use super::descriptor::{ChartData, VisualizationDescriptor};

/// Id -> live instance map over a charting backend
pub struct VisualizationRegistry<B: ChartBackend> {
    backend: B,
    instances: HashMap<String, B::Instance>,
}

impl<B: ChartBackend> VisualizationRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            instances: HashMap::new(),
        }
    }

    /// Create or replace the instance stored under `id`
    ///
    /// The mount point is resolved first; if it is missing nothing changes
    /// and `RenderTargetMissing` is returned. Otherwise the previous
    /// instance (if any) is destroyed before the new one is rendered. A
    /// library fault leaves `id` unregistered.
    pub fn upsert(
        &mut self,
        id: &str,
        descriptor: &VisualizationDescriptor,
        mount_id: &str,
    ) -> VizResult<&B::Instance> {
        let Some(container) = self.backend.resolve(mount_id) else {
            tracing::debug!(id = %id, mount = %mount_id, "Mount point not found, skipping chart");
            return Err(VizError::RenderTargetMissing {
                id: mount_id.to_string(),
            });
        };

        if let Some(previous) = self.instances.remove(id) {
            previous.destroy();
            tracing::debug!(id = %id, "Released previous chart instance");
        }

        let instance = self.backend.render(&container, descriptor).map_err(|fault| {
            tracing::error!(id = %id, error = %fault, "Error initializing chart");
            VizError::library(id, fault)
        })?;

        tracing::debug!(id = %id, chart_type = ?descriptor.chart_type, "Chart created");
        Ok(self.instances.entry(id.to_string()).or_insert(instance))
    }

    /// Replace the data of a live chart; false if `id` is not registered
    pub fn update(&mut self, id: &str, data: &ChartData) -> bool {
        let Some(instance) = self.instances.get_mut(id) else {
            return false;
        };

        match instance.update(data) {
            Ok(()) => true,
            Err(fault) => {
                tracing::warn!(id = %id, error = %fault, "Chart update failed");
                false
            }
        }
    }

    /// Resize every chart, skipping (but keeping) any that fault
    ///
    /// Returns the number of charts resized.
    pub fn resize_all(&mut self) -> usize {
        let mut resized = 0;
        for (id, instance) in self.instances.iter_mut() {
            match instance.resize() {
                Ok(()) => resized += 1,
                Err(fault) => {
                    tracing::warn!(id = %id, error = %fault, "Chart resize failed, skipping");
                }
            }
        }
        resized
    }

    /// Destroy a single chart; false if `id` was not registered
    pub fn release(&mut self, id: &str) -> bool {
        match self.instances.remove(id) {
            Some(instance) => {
                instance.destroy();
                tracing::debug!(id = %id, "Chart released");
                true
            }
            None => false,
        }
    }

    /// Destroy every chart and empty the registry
    ///
    /// Returns the number of charts destroyed.
    pub fn destroy_all(&mut self) -> usize {
        let count = self.instances.len();
        for (_, instance) in self.instances.drain() {
            instance.destroy();
        }
        if count > 0 {
            tracing::debug!(count, "Destroyed all charts");
        }
        count
    }

    /// Rasterize a chart and hand it to `downloader`
    ///
    /// Silently does nothing for unknown ids or if the chart cannot be
    /// rasterized. Returns whether a download was triggered.
    pub fn export_as_image(
        &self,
        id: &str,
        filename: &str,
        downloader: &mut dyn ImageDownloader,
    ) -> bool {
        let Some(instance) = self.instances.get(id) else {
            return false;
        };

        match instance.to_image() {
            Ok(image) => {
                downloader.download(filename, &image);
                tracing::info!(id = %id, filename = %filename, "Chart exported");
                true
            }
            Err(fault) => {
                tracing::warn!(id = %id, error = %fault, "Chart export failed");
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&B::Instance> {
        self.instances.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.instances.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.instances.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::testing::{Event, RecordingBackend, RecordingDownloader};
    use crate::charts::{ChartCatalog, ChartType, VisualizationKind};

    fn descriptor(kind: VisualizationKind) -> VisualizationDescriptor {
        ChartCatalog::default().descriptor(kind)
    }

    #[test]
    fn test_upsert_registers_instance() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);

        let d = descriptor(VisualizationKind::Benchmark);
        let serial = registry.upsert("benchmarkChart", &d, "benchmarkChart").unwrap().serial;

        assert_eq!(serial, 1);
        assert!(registry.contains("benchmarkChart"));
        assert_eq!(registry.len(), 1);
        assert_eq!(log.renders(), vec!["benchmarkChart"]);
    }

    #[test]
    fn test_upsert_replaces_and_releases_first() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);

        let d1 = descriptor(VisualizationKind::PercentileComparison);
        let d2 = descriptor(VisualizationKind::OutcomeAnalytics);
        registry.upsert("chart", &d1, "chart").unwrap();
        registry.upsert("chart", &d2, "chart").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("chart").unwrap().serial, 2);
        assert_eq!(log.live(), 1);
        assert_eq!(
            log.events(),
            vec![
                Event::Render {
                    serial: 1,
                    mount: "chart".to_string(),
                    chart_type: ChartType::Bar,
                },
                Event::Destroy { serial: 1 },
                Event::Render {
                    serial: 2,
                    mount: "chart".to_string(),
                    chart_type: ChartType::Line,
                },
            ]
        );
    }

    #[test]
    fn test_at_most_one_instance_per_id() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);

        for _ in 0..5 {
            for &kind in VisualizationKind::all() {
                let id = kind.mount_id();
                registry.upsert(&id, &descriptor(kind), &id).unwrap();
            }
        }

        assert_eq!(registry.len(), VisualizationKind::all().len());
        assert_eq!(log.live(), registry.len());
    }

    #[test]
    fn test_missing_mount_is_noop() {
        let backend = RecordingBackend::new().without_mount("demo-outcomeAnalytics");
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);

        let d = descriptor(VisualizationKind::OutcomeAnalytics);
        registry.upsert("outcome", &d, "demo-percentileComparison").unwrap();

        let err = registry.upsert("outcome", &d, "demo-outcomeAnalytics").unwrap_err();
        assert_eq!(
            err,
            VizError::RenderTargetMissing {
                id: "demo-outcomeAnalytics".to_string()
            }
        );
        // The existing instance is untouched
        assert!(registry.contains("outcome"));
        assert_eq!(log.destroys(), 0);
        assert_eq!(log.renders().len(), 1);
    }

    #[test]
    fn test_library_fault_is_isolated() {
        let backend = RecordingBackend::new().with_render_fault("broken");
        let mut registry = VisualizationRegistry::new(backend);

        let d = descriptor(VisualizationKind::SurgeonPerformance);
        registry.upsert("ok", &d, "ok").unwrap();

        let err = registry.upsert("broken", &d, "broken").unwrap_err();
        assert!(matches!(err, VizError::LibraryFault { ref id, .. } if id == "broken"));
        assert!(!registry.contains("broken"));
        assert!(registry.contains("ok"));
    }

    #[test]
    fn test_resize_all_skips_faulty_instances() {
        let backend = RecordingBackend::new().with_resize_fault("flaky");
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);

        let d = descriptor(VisualizationKind::Benchmark);
        registry.upsert("a", &d, "a").unwrap();
        registry.upsert("flaky", &d, "flaky").unwrap();
        registry.upsert("b", &d, "b").unwrap();

        assert_eq!(registry.resize_all(), 2);
        assert_eq!(log.resizes(), 2);
        assert!(registry.contains("flaky"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_destroy_all_then_resize_all() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);

        let d = descriptor(VisualizationKind::Benchmark);
        registry.upsert("a", &d, "a").unwrap();
        registry.upsert("b", &d, "b").unwrap();

        assert_eq!(registry.destroy_all(), 2);
        assert_eq!(registry.resize_all(), 0);
        assert_eq!(log.resizes(), 0);
        assert_eq!(log.live(), 0);
    }

    #[test]
    fn test_destroy_all_is_idempotent() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);

        let d = descriptor(VisualizationKind::Benchmark);
        registry.upsert("a", &d, "a").unwrap();

        assert_eq!(registry.destroy_all(), 1);
        let events_after_first = log.events();

        assert_eq!(registry.destroy_all(), 0);
        assert!(registry.is_empty());
        assert_eq!(log.events(), events_after_first);
    }

    #[test]
    fn test_export_missing_id_is_noop() {
        let mut registry = VisualizationRegistry::new(RecordingBackend::new());
        let mut downloader = RecordingDownloader::default();

        assert!(!registry.export_as_image("missing-id", "x.png", &mut downloader));
        assert!(downloader.downloads.is_empty());

        let d = descriptor(VisualizationKind::Benchmark);
        registry.upsert("benchmarkChart", &d, "benchmarkChart").unwrap();
        assert!(registry.export_as_image("benchmarkChart", "benchmark.png", &mut downloader));
        assert_eq!(
            downloader.downloads,
            vec![(
                "benchmark.png".to_string(),
                "data:image/png;base64,benchmarkChart".to_string()
            )]
        );
    }

    #[test]
    fn test_update_and_release() {
        let backend = RecordingBackend::new();
        let log = backend.log();
        let mut registry = VisualizationRegistry::new(backend);

        let d = descriptor(VisualizationKind::OutcomeAnalytics);
        assert!(!registry.update("outcome", &d.data));

        registry.upsert("outcome", &d, "outcome").unwrap();
        assert!(registry.update("outcome", &d.data));
        assert_eq!(log.updates(), 1);

        assert!(registry.release("outcome"));
        assert!(!registry.release("outcome"));
        assert_eq!(log.live(), 0);
        assert!(registry.ids().is_empty());
    }
}
