//! Reine Geometrie-Funktionen für Pfad-Abtastung.
//!
//! Layer-neutral: kann von `app` und `shared::output_scene` importiert
//! werden ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

use crate::core::interpolate::basis_weights;

/// Tastet eine uniforme kubische B-Spline über `points` dicht ab.
///
/// Für Rand-Segmente werden die Nachbar-Kontrollpunkte auf den ersten
/// bzw. letzten Punkt geklemmt — dieselbe Konvention wie die
/// Keyframe-Interpolation. Die Kurve läuft nicht exakt durch innere
/// Kontrollpunkte (B-Spline-Verhalten).
///
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment
/// (ohne Endpunkt); das letzte Segment schließt den Endwert mit ein.
pub fn bspline_chain(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    if points.len() < 3 {
        // Zu wenig Kontrollpunkte für eine Basis-Kurve — lineare Kette
        return lerp_chain(points, samples_per_segment);
    }

    let n = points.len();
    let samples = samples_per_segment.max(1);
    let mut result = Vec::with_capacity((n - 1) * samples + 1);

    for seg in 0..(n - 1) {
        let c0 = points[seg.saturating_sub(1)];
        let c1 = points[seg];
        let c2 = points[seg + 1];
        let c3 = points[(seg + 2).min(n - 1)];

        let steps = if seg == n - 2 { samples + 1 } else { samples };
        for i in 0..steps {
            let t = i as f32 / samples as f32;
            let [b0, b1, b2, b3] = basis_weights(t);
            result.push(c0 * b0 + c1 * b1 + c2 * b2 + c3 * b3);
        }
    }

    result
}

/// Lineare Kette: tastet jedes Segment gleichmäßig per Lerp ab.
pub fn lerp_chain(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let samples = samples_per_segment.max(1);
    let mut result = Vec::with_capacity((points.len() - 1) * samples + 1);
    for seg in 0..points.len() - 1 {
        let steps = if seg == points.len() - 2 {
            samples + 1
        } else {
            samples
        };
        for i in 0..steps {
            let t = i as f32 / samples as f32;
            result.push(points[seg].lerp(points[seg + 1], t));
        }
    }
    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Verteilt Punkte gleichmäßig (Arc-Length) entlang einer Polyline.
pub fn resample_by_distance(polyline: &[Vec2], max_segment_length: f32) -> Vec<Vec2> {
    if polyline.len() < 2 {
        return polyline.to_vec();
    }

    let total = polyline_length(polyline);
    if total < f32::EPSILON {
        return vec![polyline[0]];
    }

    let segment_count = (total / max_segment_length).ceil().max(1.0) as usize;
    let spacing = total / segment_count as f32;

    let mut result = Vec::with_capacity(segment_count + 1);
    result.push(polyline[0]);

    let mut poly_idx = 0;
    let mut remainder = 0.0f32; // Rest-Distanz im aktuellen Polyline-Segment

    for _ in 1..segment_count {
        let mut needed = spacing;

        loop {
            if poly_idx + 1 >= polyline.len() {
                break;
            }
            let seg_len = polyline[poly_idx].distance(polyline[poly_idx + 1]);
            let available = seg_len - remainder;

            if available >= needed {
                remainder += needed;
                let t = remainder / seg_len;
                result.push(polyline[poly_idx].lerp(polyline[poly_idx + 1], t));
                break;
            } else {
                needed -= available;
                remainder = 0.0;
                poly_idx += 1;
            }
        }
    }

    // Endpunkt immer exakt übernehmen
    result.push(*polyline.last().unwrap());
    result
}

/// Findet das Segment (Indexpaar benachbarter Punkte), dessen Strecke dem
/// Query-Punkt am nächsten liegt.
///
/// Gibt `None` zurück, wenn weniger als 2 Punkte vorhanden sind — der
/// Aufrufer fällt dann auf Anhängen zurück.
pub fn closest_segment(points: &[Vec2], query: Vec2) -> Option<(usize, usize)> {
    if points.len() < 2 {
        return None;
    }

    let mut best: Option<((usize, usize), f32)> = None;
    for i in 0..points.len() - 1 {
        let dist = distance_to_segment(query, points[i], points[i + 1]);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some(((i, i + 1), dist));
        }
    }
    best.map(|(pair, _)| pair)
}

/// Abstand eines Punkts zur Strecke `a`–`b`.
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_chain_beginnt_und_endet_exakt() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        let chain = lerp_chain(&points, 4);
        assert_eq!(chain.len(), 5);
        assert_eq!(chain[0], points[0]);
        assert_eq!(*chain.last().unwrap(), points[1]);
    }

    #[test]
    fn bspline_chain_glaettet_zickzack() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(10.0, 0.0),
        ];
        let chain = bspline_chain(&points, 8);
        // Die Kurve bleibt unter dem inneren Kontrollpunkt
        let max_y = chain.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!(max_y < 10.0);
        assert!(max_y > 0.0);
    }

    #[test]
    fn bspline_chain_faellt_bei_zwei_punkten_auf_linear_zurueck() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)];
        let chain = bspline_chain(&points, 2);
        assert_eq!(chain, lerp_chain(&points, 2));
    }

    #[test]
    fn resample_erzeugt_gleichmaessige_abstaende() {
        let polyline = vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        let resampled = resample_by_distance(&polyline, 2.5);
        assert_eq!(resampled.len(), 5);
        for w in resampled.windows(2) {
            assert_relative_eq!(w[0].distance(w[1]), 2.5, epsilon = 1e-4);
        }
    }

    #[test]
    fn closest_segment_findet_naechste_strecke() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        assert_eq!(closest_segment(&points, Vec2::new(5.0, 1.0)), Some((0, 1)));
        assert_eq!(closest_segment(&points, Vec2::new(9.0, 5.0)), Some((1, 2)));
        assert_eq!(closest_segment(&points[..1], Vec2::ZERO), None);
    }
}
