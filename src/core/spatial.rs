//! Spatial-Index (KD-Tree) für Punkt-Hit-Tests im Edit-Buffer.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::point::TrackPoint;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// uid des gefundenen Punkts
    pub uid: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über der Punktliste eines Layers.
///
/// Wird pro Hit-Test aus dem aktuellen Buffer gebaut; die Punktlisten
/// sind klein genug, dass der Aufbau billig bleibt, und der Index kann
/// so nie gegen einen laufenden Drag veralten.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    uids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            uids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus der übergebenen Punktliste.
    pub fn from_points(points: &[TrackPoint]) -> Self {
        let entries: Vec<[f64; 2]> = points
            .iter()
            .map(|p| [p.pos.x as f64, p.pos.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&entries).into();
        let uids = points.iter().map(|p| p.uid).collect();

        Self { tree, uids }
    }

    /// Gibt die Anzahl indexierter Punkte zurück.
    pub fn len(&self) -> usize {
        self.uids.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.uids.is_empty()
    }

    /// Findet den nächsten Punkt zur Query-Position.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let uid = *self.uids.get(result.item as usize)?;

        Some(SpatialMatch {
            uid,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet den nächsten Punkt innerhalb des Pick-Radius.
    pub fn nearest_within(&self, query: Vec2, radius: f32) -> Option<SpatialMatch> {
        self.nearest(query).filter(|m| m.distance <= radius)
    }
}
