//! Use-Case: Punkte der aktiven Punktliste einfügen und löschen.

use glam::Vec2;

use crate::core::{index_of_uid, TrackPoint};
use crate::shared::spline_geometry::closest_segment;

/// Fügt einen neuen Punkt an `pos` ein.
///
/// Der Punkt landet zwischen den beiden nächstgelegenen bestehenden
/// Punkten (dem Segment mit dem kleinsten Abstand zur Klickposition),
/// damit der Pfad seine Reihenfolge behält. Mit weniger als 2 Punkten
/// gibt es kein Segment — dann wird angehängt.
pub fn insert_point(points: &mut Vec<TrackPoint>, pos: Vec2, uid: u64) -> u64 {
    let point = TrackPoint::new(pos, uid);
    let positions: Vec<Vec2> = points.iter().map(|p| p.pos).collect();

    match closest_segment(&positions, pos) {
        Some((_, after)) => points.insert(after, point),
        None => points.push(point),
    }
    uid
}

/// Entfernt einen Punkt über seine uid.
/// Gibt `true` zurück, falls einer entfernt wurde.
pub fn remove_point(points: &mut Vec<TrackPoint>, uid: u64) -> bool {
    match index_of_uid(points, uid) {
        Some(idx) => {
            points.remove(idx);
            true
        }
        None => false,
    }
}

/// Gibt `true` zurück, wenn die uid einen inneren Punkt bezeichnet
/// (weder erster noch letzter des Pfads).
///
/// Die Sofort-Löschung per Sekundärklick ist auf innere Punkte begrenzt;
/// Endpunkte gehen nur über das explizite Lösch-Kommando.
pub fn is_interior_point(points: &[TrackPoint], uid: u64) -> bool {
    match index_of_uid(points, uid) {
        Some(idx) => idx > 0 && idx + 1 < points.len(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linie() -> Vec<TrackPoint> {
        vec![
            TrackPoint::new(Vec2::new(0.0, 0.0), 1),
            TrackPoint::new(Vec2::new(100.0, 0.0), 2),
            TrackPoint::new(Vec2::new(200.0, 0.0), 3),
        ]
    }

    #[test]
    fn insert_landet_im_naechsten_segment() {
        let mut points = linie();
        insert_point(&mut points, Vec2::new(150.0, 5.0), 9);

        let uids: Vec<u64> = points.iter().map(|p| p.uid).collect();
        assert_eq!(uids, vec![1, 2, 9, 3]);
    }

    #[test]
    fn insert_haengt_bei_weniger_als_zwei_punkten_an() {
        let mut points = vec![TrackPoint::new(Vec2::new(0.0, 0.0), 1)];
        insert_point(&mut points, Vec2::new(50.0, 0.0), 2);
        let uids: Vec<u64> = points.iter().map(|p| p.uid).collect();
        assert_eq!(uids, vec![1, 2]);

        let mut leer: Vec<TrackPoint> = Vec::new();
        insert_point(&mut leer, Vec2::new(1.0, 1.0), 7);
        assert_eq!(leer.len(), 1);
    }

    #[test]
    fn remove_miss_ist_kein_fehler() {
        let mut points = linie();
        assert!(!remove_point(&mut points, 42));
        assert_eq!(points.len(), 3);
        assert!(remove_point(&mut points, 2));
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn endpunkte_sind_keine_inneren_punkte() {
        let points = linie();
        assert!(!is_interior_point(&points, 1));
        assert!(is_interior_point(&points, 2));
        assert!(!is_interior_point(&points, 3));
        assert!(!is_interior_point(&points, 42));
    }
}
