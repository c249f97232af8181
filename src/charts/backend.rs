//! Charting library boundary
//!
//! The registry only talks to a charting library through these traits. The
//! browser shell implements them over Chart.js; [`HeadlessBackend`] is a
//! no-op implementation for native builds and benchmarks.

use crate::error::ChartFault;

use super::descriptor::{ChartData, VisualizationDescriptor};

/// A rasterized chart, addressable by a link
#[derive(Debug, Clone, PartialEq)]
pub struct ImageExport {
    /// URL a download link can point at (usually a `data:image/png` URL)
    pub href: String,
}

/// A charting library able to draw descriptors into containers
pub trait ChartBackend {
    type Container;
    type Instance: ChartInstance;

    /// Find the mount point with this id, if it is in the render tree
    fn resolve(&self, mount_id: &str) -> Option<Self::Container>;

    /// Draw a descriptor into a container
    fn render(
        &mut self,
        container: &Self::Container,
        descriptor: &VisualizationDescriptor,
    ) -> Result<Self::Instance, ChartFault>;
}

/// A live chart
pub trait ChartInstance {
    fn resize(&mut self) -> Result<(), ChartFault>;

    /// Replace the chart's data and redraw
    fn update(&mut self, data: &ChartData) -> Result<(), ChartFault>;

    fn to_image(&self) -> Result<ImageExport, ChartFault>;

    /// Release every resource held by the chart
    fn destroy(self);
}

/// Something that can hand an image to the user as a file
pub trait ImageDownloader {
    fn download(&mut self, filename: &str, image: &ImageExport);
}

/// Backend that accepts every mount id and draws nothing
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    rendered: usize,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instances created so far
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

#[derive(Debug)]
pub struct HeadlessInstance {
    pub mount_id: String,
    pub series: usize,
}

impl ChartBackend for HeadlessBackend {
    type Container = String;
    type Instance = HeadlessInstance;

    fn resolve(&self, mount_id: &str) -> Option<String> {
        Some(mount_id.to_string())
    }

    fn render(
        &mut self,
        container: &String,
        descriptor: &VisualizationDescriptor,
    ) -> Result<HeadlessInstance, ChartFault> {
        self.rendered += 1;
        Ok(HeadlessInstance {
            mount_id: container.clone(),
            series: descriptor.series_count(),
        })
    }
}

impl ChartInstance for HeadlessInstance {
    fn resize(&mut self) -> Result<(), ChartFault> {
        Ok(())
    }

    fn update(&mut self, data: &ChartData) -> Result<(), ChartFault> {
        self.series = data.datasets.len();
        Ok(())
    }

    fn to_image(&self) -> Result<ImageExport, ChartFault> {
        Err(ChartFault::new("headless charts cannot be rasterized"))
    }

    fn destroy(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartCatalog, VisualizationKind};

    #[test]
    fn test_headless_render() {
        let mut backend = HeadlessBackend::new();
        let container = backend.resolve("benchmarkChart").unwrap();
        let descriptor = ChartCatalog::default().descriptor(VisualizationKind::Benchmark);

        let instance = backend.render(&container, &descriptor).unwrap();
        assert_eq!(instance.mount_id, "benchmarkChart");
        assert_eq!(instance.series, 3);
        assert_eq!(backend.rendered(), 1);
        assert!(instance.to_image().is_err());
    }
}
