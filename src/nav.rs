//! Scroll spy
//!
//! Works out which page section the nav bar should highlight. Scroll events
//! are throttled before any section geometry is read. [`SectionReveal`]
//! tracks which sections have played their fade-in.

use std::collections::HashSet;

use crate::timing::Throttler;

/// A page section and its distance from the top of the document
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Result of feeding a scroll event to the spy
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollUpdate {
    /// Dropped by the throttle
    Throttled,
    /// Evaluated; the highlight did not change
    Unchanged,
    /// Evaluated; the highlight moved (`None` clears it)
    Changed(Option<String>),
}

#[derive(Debug)]
pub struct ScrollSpy {
    throttle: Throttler,
    offset: f64,
    current: Option<String>,
}

impl ScrollSpy {
    pub fn new(throttle_ms: u64, offset: f64) -> Self {
        Self {
            throttle: Throttler::new(throttle_ms),
            offset,
            current: None,
        }
    }

    /// Handle a scroll to `scroll_y` at `now`
    ///
    /// `sections` is only called when the throttle admits the event.
    pub fn observe<F>(&mut self, now: u64, scroll_y: f64, sections: F) -> ScrollUpdate
    where
        F: FnOnce() -> Vec<SectionOffset>,
    {
        if !self.throttle.admit(now) {
            return ScrollUpdate::Throttled;
        }

        let next = active_section(scroll_y, &sections(), self.offset).map(str::to_string);
        if next == self.current {
            ScrollUpdate::Unchanged
        } else {
            self.current = next.clone();
            ScrollUpdate::Changed(next)
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Last section (in document order) whose top, less `offset`, has been
/// scrolled past
pub fn active_section(scroll_y: f64, sections: &[SectionOffset], offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .map(|section| section.id.as_str())
}

/// Sections whose reveal animation has been triggered
///
/// A section is revealed the first time it intersects the viewport and
/// stays revealed; later visibility changes are ignored.
#[derive(Debug, Default)]
pub struct SectionReveal {
    revealed: HashSet<String>,
}

impl SectionReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `id` should get the reveal class now
    pub fn observe(&mut self, id: &str, intersecting: bool) -> bool {
        if !intersecting || self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
