//! Umrechnung zwischen Canvas-Koordinaten und normalisierten
//! Quellbild-Koordinaten.
//!
//! Punkte werden relativ zum *ursprünglichen* Quellbild gespeichert,
//! nicht relativ zum Canvas. Canvas-Resize oder Bildwechsel verschieben
//! dadurch keine bestehende Geometrie.

use glam::Vec2;

use super::point::TrackPoint;
use crate::shared::LEGACY_NORMALIZED_BOUND;

/// Zustandsloser Koordinaten-Transformator.
///
/// Canvas-Koordinate `c = bild * scale + offset`; normalisiert
/// `n = (c - offset) / scale / bildgröße`. Ohne geladenes Hintergrundbild
/// wird direkt durch die Canvas-Größe geteilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpace {
    /// Aktuelle Canvas-Größe in Pixeln
    pub canvas_size: Vec2,
    /// Natürliche Größe des Quellbilds (None = kein Bild geladen)
    pub image_size: Option<Vec2>,
    /// Darstellungs-Skalierung des Bilds auf dem Canvas
    pub scale: f32,
    /// Verschiebung des Bilds auf dem Canvas
    pub offset: Vec2,
}

impl CanvasSpace {
    /// Erstellt einen Transformator ohne Hintergrundbild.
    pub fn new(canvas_size: Vec2) -> Self {
        Self {
            canvas_size,
            image_size: None,
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Normalisiert eine einzelne Canvas-Koordinate.
    pub fn normalize_pos(&self, canvas: Vec2) -> Vec2 {
        match self.image_size {
            Some(image) => {
                let scale = safe_scale(self.scale);
                (canvas - self.offset) / scale / safe_size(image)
            }
            None => canvas / safe_size(self.canvas_size),
        }
    }

    /// Rechnet eine normalisierte Koordinate zurück in Canvas-Koordinaten.
    pub fn denormalize_pos(&self, normalized: Vec2) -> Vec2 {
        match self.image_size {
            Some(image) => normalized * safe_size(image) * safe_scale(self.scale) + self.offset,
            None => normalized * safe_size(self.canvas_size),
        }
    }

    /// Normalisiert eine Punktliste (Positionen; alle übrigen Felder bleiben).
    pub fn normalize_points(&self, points: &[TrackPoint]) -> Vec<TrackPoint> {
        points
            .iter()
            .map(|p| TrackPoint {
                pos: self.normalize_pos(p.pos),
                ..*p
            })
            .collect()
    }

    /// Rechnet eine normalisierte Punktliste zurück in Canvas-Koordinaten.
    ///
    /// Legacy-Schutz: eine Liste, die laut Heuristik bereits absolute
    /// Pixelwerte enthält, wird unverändert zurückgegeben.
    pub fn denormalize_points(&self, points: &[TrackPoint]) -> Vec<TrackPoint> {
        if !is_normalized(points) {
            return points.to_vec();
        }
        points
            .iter()
            .map(|p| TrackPoint {
                pos: self.denormalize_pos(p.pos),
                ..*p
            })
            .collect()
    }
}

/// Heuristik für ungetaggte Legacy-Stores: eine Liste gilt als
/// normalisiert, wenn *jede* Koordinate betragsmäßig unter der Grenze
/// liegt. Absolute Pixelwerte liegen typischerweise bei Hunderten.
///
/// Bewusst nur Fallback: neue Stores tragen einen expliziten Format-Tag,
/// die Heuristik greift nur für Bestandsdaten ohne Tag.
pub fn is_normalized(points: &[TrackPoint]) -> bool {
    points.iter().all(|p| {
        p.pos.x.abs() < LEGACY_NORMALIZED_BOUND && p.pos.y.abs() < LEGACY_NORMALIZED_BOUND
    })
}

/// Schützt Divisionen gegen eine Null-Skalierung.
fn safe_scale(scale: f32) -> f32 {
    if scale.abs() <= f32::EPSILON {
        1.0
    } else {
        scale
    }
}

/// Schützt Divisionen gegen Null-Dimensionen.
fn safe_size(size: Vec2) -> Vec2 {
    Vec2::new(size.x.max(1.0), size.y.max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn punkte(coords: &[(f32, f32)]) -> Vec<TrackPoint> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| TrackPoint::new(Vec2::new(x, y), i as u64))
            .collect()
    }

    #[test]
    fn roundtrip_mit_hintergrundbild() {
        let space = CanvasSpace {
            canvas_size: Vec2::new(800.0, 600.0),
            image_size: Some(Vec2::new(1920.0, 1080.0)),
            scale: 0.4,
            offset: Vec2::new(15.0, -20.0),
        };
        let original = punkte(&[(0.1, 0.2), (0.85, 0.5), (0.0, 1.0)]);
        let canvas = space.denormalize_points(&original);
        let wieder = space.normalize_points(&canvas);
        for (a, b) in original.iter().zip(wieder.iter()) {
            assert_relative_eq!(a.pos.x, b.pos.x, epsilon = 1e-5);
            assert_relative_eq!(a.pos.y, b.pos.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn roundtrip_ohne_hintergrundbild() {
        let space = CanvasSpace::new(Vec2::new(640.0, 480.0));
        let original = punkte(&[(0.25, 0.75), (0.5, 0.5)]);
        let canvas = space.denormalize_points(&original);
        assert_relative_eq!(canvas[0].pos.x, 160.0);
        assert_relative_eq!(canvas[0].pos.y, 360.0);
        let wieder = space.normalize_points(&canvas);
        for (a, b) in original.iter().zip(wieder.iter()) {
            assert_relative_eq!(a.pos.x, b.pos.x, epsilon = 1e-6);
            assert_relative_eq!(a.pos.y, b.pos.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn denormalize_laesst_absolute_listen_unveraendert() {
        let space = CanvasSpace::new(Vec2::new(640.0, 480.0));
        // Legacy-Daten: absolute Pixelwerte weit über der Heuristik-Grenze
        let absolut = punkte(&[(320.0, 240.0), (12.0, 3.0)]);
        let ergebnis = space.denormalize_points(&absolut);
        assert_eq!(ergebnis, absolut);
    }

    #[test]
    fn heuristik_erkennt_normalisierte_listen() {
        assert!(is_normalized(&punkte(&[(0.5, 0.5), (-0.2, 9.9)])));
        assert!(!is_normalized(&punkte(&[(0.5, 0.5), (10.0, 0.1)])));
        assert!(is_normalized(&[]));
    }

    #[test]
    fn null_skalierung_fuehrt_nicht_zu_unendlich() {
        let space = CanvasSpace {
            canvas_size: Vec2::new(800.0, 600.0),
            image_size: Some(Vec2::new(100.0, 100.0)),
            scale: 0.0,
            offset: Vec2::ZERO,
        };
        let n = space.normalize_pos(Vec2::new(50.0, 50.0));
        assert!(n.x.is_finite() && n.y.is_finite());
    }
}
