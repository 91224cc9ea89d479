use log::debug;

use crate::core::{Body, Bounds};
use crate::dynamics::forces::ForceModel;

/// Edges of the play area a body can strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Edges resolved during a single frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub edges: Vec<Edge>,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn hit(&self, edge: Edge) -> bool {
        self.edges.contains(&edge)
    }
}

/// Keeps the body's bounding square inside the play area.
///
/// Velocity is scaled by the restitution coefficient on impact. That is a
/// simplification of impulse-momentum response, not an exact model.
#[derive(Debug, Clone, Copy)]
pub struct BoundsCollider {
    bounds: Bounds,
}

impl BoundsCollider {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Detects and resolves penetration on both axes.
    ///
    /// An edge is only resolved while the body is still moving into it, so a
    /// body already reflected on a previous frame is left alone.
    pub fn resolve(&self, body: &mut Body, forces: &ForceModel) -> CollisionReport {
        let size = body.size();
        let extent = self.bounds.extent();
        let restitution = forces.restitution;
        let mut report = CollisionReport::default();

        let axes = [
            (0usize, extent.x, Edge::Left, Edge::Right),
            (1, extent.y, Edge::Top, Edge::Bottom),
        ];

        for (axis, limit, min_edge, max_edge) in axes {
            let position = body.position[axis];
            let velocity = body.velocity[axis];

            if position < 0.0 && velocity < 0.0 {
                body.velocity[axis] = velocity * restitution;
                body.position[axis] = 0.0;
                report.edges.push(min_edge);
            } else if position + size > limit && velocity > 0.0 {
                body.velocity[axis] = velocity * restitution;
                body.position[axis] = limit - size;
                report.edges.push(max_edge);
            }
        }

        if !report.is_empty() {
            debug!(
                "Resolved {:?} collision; velocity now ({:.3}, {:.3})",
                report.edges, body.velocity.x, body.velocity.y
            );
        }
        report
    }
}
