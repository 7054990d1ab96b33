//! Reine Interpolationsfunktionen über sortierten Keyframe-Folgen.
//!
//! Layer-neutral: arbeitet nur auf `BoxKeyframe`-Slices, ohne Kenntnis
//! von Layern oder App-State.

use super::box_keyframe::{BoxKeyframe, BoxPose};
use super::layer::InterpolationMode;

/// Berechnet die Pose an einem (fraktionalen) Frame.
///
/// - `Linear`/`Points`: geklemmte lineare Interpolation zwischen den
///   umschließenden Keyframes.
/// - `Basis`: kubische B-Spline-Basis über vier Kontroll-Keyframes;
///   benötigt mindestens 3 Keyframes, sonst Degradation auf linear.
///
/// Rotation wird in allen Modi direkt interpoliert — kein Wickeln auf
/// `[0, 2π)`, kein Shortest-Path — damit Mehrfachumdrehungen monoton
/// bleiben.
///
/// Randfälle: ein einzelner Keyframe liefert dessen Werte für jeden
/// Frame, eine leere Folge liefert `fallback`.
pub fn pose_at(
    keys: &[BoxKeyframe],
    frame: f32,
    mode: InterpolationMode,
    fallback: BoxPose,
) -> BoxPose {
    match keys.len() {
        0 => fallback,
        1 => keys[0].pose(),
        _ => match mode {
            InterpolationMode::Basis if keys.len() >= 3 => basis_pose(keys, frame),
            _ => linear_pose(keys, frame),
        },
    }
}

/// Geklemmte lineare Interpolation aller vier Kanäle.
fn linear_pose(keys: &[BoxKeyframe], frame: f32) -> BoxPose {
    let first = &keys[0];
    let last = &keys[keys.len() - 1];

    if frame <= first.frame as f32 {
        return first.pose();
    }
    if frame >= last.frame as f32 {
        return last.pose();
    }

    let (i, t) = bracketing_segment(keys, frame);
    let a = &keys[i];
    let b = &keys[i + 1];
    BoxPose {
        x: lerp(a.x, b.x, t),
        y: lerp(a.y, b.y, t),
        scale: lerp(a.scale, b.scale, t),
        rotation: lerp(a.rotation, b.rotation, t),
    }
}

/// Kubische B-Spline-Basis über vier Kontroll-Keyframes.
///
/// Für das Segment zwischen Keyframe `i` und `i+1` gehen `i-1` (auf 0
/// geklemmt), `i`, `i+1` und `i+2` (auf das Ende geklemmt) ein. Die Kurve
/// läuft dadurch nicht exakt durch innere Keyframes — echtes
/// B-Spline-Verhalten, kein Fehler.
fn basis_pose(keys: &[BoxKeyframe], frame: f32) -> BoxPose {
    let first = keys[0].frame as f32;
    let last = keys[keys.len() - 1].frame as f32;
    let frame = frame.clamp(first, last);

    let (i, t) = bracketing_segment(keys, frame);
    let c0 = &keys[i.saturating_sub(1)];
    let c1 = &keys[i];
    let c2 = &keys[i + 1];
    let c3 = &keys[(i + 2).min(keys.len() - 1)];
    let [b0, b1, b2, b3] = basis_weights(t);

    BoxPose {
        x: b0 * c0.x + b1 * c1.x + b2 * c2.x + b3 * c3.x,
        y: b0 * c0.y + b1 * c1.y + b2 * c2.y + b3 * c3.y,
        scale: b0 * c0.scale + b1 * c1.scale + b2 * c2.scale + b3 * c3.scale,
        rotation: b0 * c0.rotation + b1 * c1.rotation + b2 * c2.rotation + b3 * c3.rotation,
    }
}

/// Gewichte der uniformen kubischen B-Spline-Basis bei lokalem `t ∈ [0, 1]`.
pub fn basis_weights(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        (1.0 - t3 + 3.0 * t2 - 3.0 * t) / 6.0,
        (4.0 - 6.0 * t2 + 3.0 * t3) / 6.0,
        (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) / 6.0,
        t3 / 6.0,
    ]
}

/// Findet das umschließende Segment `i` (zwischen `keys[i]` und
/// `keys[i+1]`) und das lokale `t ∈ [0, 1]` darin.
///
/// Erwartet `frame` innerhalb `[first, last]` und mindestens 2 Keyframes.
fn bracketing_segment(keys: &[BoxKeyframe], frame: f32) -> (usize, f32) {
    for i in 0..keys.len() - 1 {
        let f0 = keys[i].frame as f32;
        let f1 = keys[i + 1].frame as f32;
        if frame <= f1 {
            // Frame-Eindeutigkeit garantiert f1 > f0
            let t = ((frame - f0) / (f1 - f0)).clamp(0.0, 1.0);
            return (i, t);
        }
    }
    (keys.len() - 2, 1.0)
}

/// Lineare Interpolation eines Kanals.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn key(frame: u32, x: f32, y: f32, scale: f32, rotation: f32) -> BoxKeyframe {
        BoxKeyframe {
            frame,
            x,
            y,
            scale,
            rotation,
        }
    }

    #[test]
    fn linear_trifft_exakten_mittelwert() {
        let keys = vec![key(1, 0.0, 0.2, 1.0, 0.0), key(3, 1.0, 0.6, 3.0, 2.0)];
        let pose = pose_at(&keys, 2.0, InterpolationMode::Linear, BoxPose::default());
        assert_relative_eq!(pose.x, 0.5);
        assert_relative_eq!(pose.y, 0.4);
        assert_relative_eq!(pose.scale, 2.0);
        assert_relative_eq!(pose.rotation, 1.0);
    }

    #[test]
    fn linear_klemmt_vor_und_hinter_dem_track() {
        let keys = vec![key(5, 0.1, 0.1, 1.0, 0.0), key(10, 0.9, 0.9, 2.0, 1.0)];
        let vorher = pose_at(&keys, 1.0, InterpolationMode::Linear, BoxPose::default());
        assert_eq!(vorher, keys[0].pose());
        let nachher = pose_at(&keys, 99.0, InterpolationMode::Linear, BoxPose::default());
        assert_eq!(nachher, keys[1].pose());
    }

    #[test]
    fn basis_degradiert_bei_zwei_keyframes_auf_linear() {
        let keys = vec![key(1, 0.0, 0.0, 1.0, 0.0), key(5, 1.0, 1.0, 2.0, PI)];
        for frame in [1.0, 2.0, 3.5, 5.0] {
            let basis = pose_at(&keys, frame, InterpolationMode::Basis, BoxPose::default());
            let linear = pose_at(&keys, frame, InterpolationMode::Linear, BoxPose::default());
            assert_eq!(basis, linear);
        }
    }

    #[test]
    fn basis_laeuft_nicht_durch_innere_keyframes() {
        // Symmetrischer Zick-Zack: die B-Spline glättet den inneren Punkt weg
        let keys = vec![
            key(1, 0.0, 0.0, 1.0, 0.0),
            key(2, 1.0, 1.0, 1.0, 0.0),
            key(3, 0.0, 0.0, 1.0, 0.0),
        ];
        let pose = pose_at(&keys, 2.0, InterpolationMode::Basis, BoxPose::default());
        // Am inneren Keyframe gilt (p0 + 4*p1 + p2) / 6 = (0 + 4 + 0) / 6
        assert_relative_eq!(pose.x, 4.0 / 6.0, epsilon = 1e-6);
        assert!(pose.x < 1.0);
    }

    #[test]
    fn rotation_wickelt_nie() {
        let keys = vec![
            key(1, 0.0, 0.0, 1.0, 0.0),
            key(2, 0.0, 0.0, 1.0, 2.0 * PI),
            key(3, 0.0, 0.0, 1.0, 4.0 * PI),
        ];
        let a = pose_at(&keys, 1.5, InterpolationMode::Linear, BoxPose::default());
        assert_relative_eq!(a.rotation, PI, epsilon = 1e-5);
        let b = pose_at(&keys, 2.5, InterpolationMode::Linear, BoxPose::default());
        assert_relative_eq!(b.rotation, 3.0 * PI, epsilon = 1e-5);
    }

    #[test]
    fn einzelner_keyframe_gilt_fuer_jeden_frame() {
        let keys = vec![key(7, 0.4, 0.6, 1.5, 0.3)];
        for frame in [1.0, 7.0, 120.0] {
            let pose = pose_at(&keys, frame, InterpolationMode::Basis, BoxPose::default());
            assert_eq!(pose, keys[0].pose());
        }
    }

    #[test]
    fn leere_folge_liefert_fallback() {
        let fallback = BoxPose::new(0.1, 0.2, 0.5, 9.0);
        let pose = pose_at(&[], 10.0, InterpolationMode::Linear, fallback);
        assert_eq!(pose, fallback);
    }

    #[test]
    fn basis_gewichte_summieren_zu_eins() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let [b0, b1, b2, b3] = basis_weights(t);
            assert_relative_eq!(b0 + b1 + b2 + b3, 1.0, epsilon = 1e-6);
        }
    }
}
