//! Recording chart backend for unit tests

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::ChartFault;

use super::backend::{ChartBackend, ChartInstance, ImageDownloader, ImageExport};
use super::descriptor::{ChartData, ChartType, VisualizationDescriptor};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Render {
        serial: usize,
        mount: String,
        chart_type: ChartType,
    },
    Destroy {
        serial: usize,
    },
    Resize {
        serial: usize,
    },
    Update {
        serial: usize,
    },
}

/// Shared view of everything the backend was asked to do
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Mount ids rendered into, in order
    pub fn renders(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Render { mount, .. } => Some(mount.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn destroys(&self) -> usize {
        self.count(|e| matches!(e, Event::Destroy { .. }))
    }

    pub fn resizes(&self) -> usize {
        self.count(|e| matches!(e, Event::Resize { .. }))
    }

    pub fn updates(&self) -> usize {
        self.count(|e| matches!(e, Event::Update { .. }))
    }

    /// Instances rendered and not yet destroyed
    pub fn live(&self) -> usize {
        self.renders().len() - self.destroys()
    }

    fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|e| pred(e)).count()
    }
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    log: EventLog,
    missing: HashSet<String>,
    render_faults: HashSet<String>,
    resize_faults: HashSet<String>,
    next_serial: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> EventLog {
        self.log.clone()
    }

    /// This mount id never resolves
    pub fn without_mount(mut self, mount: &str) -> Self {
        self.missing.insert(mount.to_string());
        self
    }

    /// Rendering into this mount id fails
    pub fn with_render_fault(mut self, mount: &str) -> Self {
        self.render_faults.insert(mount.to_string());
        self
    }

    /// Instances rendered into this mount id fail to resize
    pub fn with_resize_fault(mut self, mount: &str) -> Self {
        self.resize_faults.insert(mount.to_string());
        self
    }
}

#[derive(Debug)]
pub struct RecordingInstance {
    pub serial: usize,
    pub mount: String,
    log: EventLog,
    resize_fault: bool,
}

impl ChartBackend for RecordingBackend {
    type Container = String;
    type Instance = RecordingInstance;

    fn resolve(&self, mount_id: &str) -> Option<String> {
        if self.missing.contains(mount_id) {
            None
        } else {
            Some(mount_id.to_string())
        }
    }

    fn render(
        &mut self,
        container: &String,
        descriptor: &VisualizationDescriptor,
    ) -> Result<RecordingInstance, ChartFault> {
        if self.render_faults.contains(container) {
            return Err(ChartFault::new("canvas context unavailable"));
        }

        self.next_serial += 1;
        let serial = self.next_serial;
        self.log.push(Event::Render {
            serial,
            mount: container.clone(),
            chart_type: descriptor.chart_type,
        });

        Ok(RecordingInstance {
            serial,
            mount: container.clone(),
            log: self.log.clone(),
            resize_fault: self.resize_faults.contains(container),
        })
    }
}

impl ChartInstance for RecordingInstance {
    fn resize(&mut self) -> Result<(), ChartFault> {
        if self.resize_fault {
            return Err(ChartFault::new("resize failed"));
        }
        self.log.push(Event::Resize { serial: self.serial });
        Ok(())
    }

    fn update(&mut self, _data: &ChartData) -> Result<(), ChartFault> {
        self.log.push(Event::Update { serial: self.serial });
        Ok(())
    }

    fn to_image(&self) -> Result<ImageExport, ChartFault> {
        Ok(ImageExport {
            href: format!("data:image/png;base64,{}", self.mount),
        })
    }

    fn destroy(self) {
        self.log.push(Event::Destroy { serial: self.serial });
    }
}

/// Collects downloads instead of performing them
#[derive(Debug, Default)]
pub struct RecordingDownloader {
    pub downloads: Vec<(String, String)>,
}

impl ImageDownloader for RecordingDownloader {
    fn download(&mut self, filename: &str, image: &ImageExport) {
        self.downloads.push((filename.to_string(), image.href.clone()));
    }
}
