//! Kontrollpunkte eines Layers mit sitzungsstabilen IDs.

use glam::Vec2;

use crate::shared::{SCALE_MAX, SCALE_MIN};

/// Einzelner Kontrollpunkt eines Layers.
///
/// Die `uid` ist ein monoton vergebenes, sitzungsweites Handle: sie wird
/// genau einmal vergeben und nie wiederverwendet. Alle Referenzen über
/// Mutationen hinweg (Insert/Delete/Reorder) laufen über die `uid`,
/// nie über den Array-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    /// Position in Canvas-Koordinaten (normalisiert erst beim Persistieren)
    pub pos: Vec2,
    /// Ob der Punkt aktuell unter dem Pointer liegt
    pub highlighted: bool,
    /// Allgemeine Punkt-Skalierung
    pub scale: f32,
    /// Skalierung der Box (nur für Box-Layer relevant)
    pub box_scale: f32,
    /// Individuelle Handle-Skalierung
    pub point_scale: f32,
    /// Sitzungsstabiles Handle
    pub uid: u64,
}

impl TrackPoint {
    /// Erstellt einen Punkt mit Standard-Skalierungen.
    pub fn new(pos: Vec2, uid: u64) -> Self {
        Self {
            pos,
            highlighted: false,
            scale: 1.0,
            box_scale: 1.0,
            point_scale: 1.0,
            uid,
        }
    }

    /// Klemmt alle drei Skalierungskanäle auf den gültigen Bereich.
    pub fn clamp_scales(&mut self) {
        self.scale = clamp_scale(self.scale);
        self.box_scale = clamp_scale(self.box_scale);
        self.point_scale = clamp_scale(self.point_scale);
    }
}

/// Klemmt einen Skalierungswert auf `[SCALE_MIN, SCALE_MAX]`.
pub fn clamp_scale(value: f32) -> f32 {
    value.clamp(SCALE_MIN, SCALE_MAX)
}

/// Findet den Index eines Punkts über seine `uid`.
pub fn index_of_uid(points: &[TrackPoint], uid: u64) -> Option<usize> {
    points.iter().position(|p| p.uid == uid)
}

/// Findet einen Punkt über seine `uid` (read-only).
pub fn find_by_uid(points: &[TrackPoint], uid: u64) -> Option<&TrackPoint> {
    points.iter().find(|p| p.uid == uid)
}

/// Findet einen Punkt über seine `uid` (mutable).
pub fn find_by_uid_mut(points: &mut [TrackPoint], uid: u64) -> Option<&mut TrackPoint> {
    points.iter_mut().find(|p| p.uid == uid)
}
