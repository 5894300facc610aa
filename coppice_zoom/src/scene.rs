// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-side scene query surface.

use kurbo::{Point, Size};

/// Read access to the host's scene graph, as seen by [`ZoomView`].
///
/// The engine never owns nodes; it asks the host about them through this
/// trait when a fit is requested and notifies interested nodes when an
/// animated fit begins and ends. Nodes are identified by a caller-chosen
/// copyable id.
///
/// Optional abilities are modeled as presence-checked queries, not type
/// inspection: a node is nested-zoomable iff [`ZoomScene::nesting_level`]
/// returns `Some`, and receives zoom lifecycle callbacks iff
/// [`ZoomScene::wants_zoom_notifications`] returns `true`. The defaults
/// opt out of both, so a minimal scene only implements the three geometry
/// queries.
///
/// [`ZoomView`]: crate::ZoomView
pub trait ZoomScene {
    /// Node identifier.
    type NodeId: Copy;

    /// The node's local origin mapped into root content coordinates,
    /// before any viewport transform.
    ///
    /// `None` when the node is unknown or not yet placed.
    fn origin_in_root(&self, node: Self::NodeId) -> Option<Point>;

    /// The node's configured size.
    fn node_size(&self, node: Self::NodeId) -> Option<Size>;

    /// The node's rendered size.
    fn node_actual_size(&self, node: Self::NodeId) -> Option<Size>;

    /// The node's own scale transform, `1.0` when it has none.
    fn node_local_scale(&self, node: Self::NodeId) -> f64 {
        let _ = node;
        1.0
    }

    /// Nesting depth for nodes that host a zoom viewport of their own.
    ///
    /// `Some` marks the node as nested-zoomable; the level feeds the
    /// compensating inverse scale an animated fit applies to its size.
    fn nesting_level(&self, node: Self::NodeId) -> Option<u32> {
        let _ = node;
        None
    }

    /// Whether the node should receive the lifecycle callbacks below.
    fn wants_zoom_notifications(&self, node: Self::NodeId) -> bool {
        let _ = node;
        false
    }

    /// An animated fit targeting `node` has begun.
    fn notify_zoom_started(&mut self, node: Self::NodeId) {
        let _ = node;
    }

    /// The animated fit targeting `node` has run its full duration.
    fn notify_zoom_completed(&mut self, node: Self::NodeId) {
        let _ = node;
    }
}
