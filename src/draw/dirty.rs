//! Repaint request tracking.
//!
//! Collects the layers that need repainting between frames. Requests are
//! coalesced: asking for the same layer twice before a drain yields a single
//! repaint.

use super::layer::Layer;
use std::collections::BTreeSet;

/// Tracks dirty layers accumulated between renders.
#[derive(Debug, Default)]
pub struct RepaintTracker {
    layers: BTreeSet<Layer>,
}

impl RepaintTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a repaint for `layer`.
    pub fn mark_layer(&mut self, layer: Layer) {
        self.layers.insert(layer);
    }

    pub fn is_dirty(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }

    /// Drains the layers gathered so far, in layer order.
    pub fn take_layers(&mut self) -> Vec<Layer> {
        std::mem::take(&mut self.layers).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_requests_coalesce() {
        let mut tracker = RepaintTracker::new();
        tracker.mark_layer(Layer::Temporary);
        tracker.mark_layer(Layer::Temporary);
        tracker.mark_layer(Layer::Drawing);

        assert!(tracker.is_dirty(Layer::Drawing));
        assert_eq!(tracker.take_layers(), vec![Layer::Drawing, Layer::Temporary]);
        assert!(!tracker.is_dirty(Layer::Temporary));
        assert!(tracker.take_layers().is_empty());
    }
}
