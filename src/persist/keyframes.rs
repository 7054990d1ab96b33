//! Reader/Writer für das Keyframe-Array eines Box-Layers.

use serde::{Deserialize, Serialize};

use crate::core::{BoxKeyframe, BoxKeyframeTrack};

/// Wire-Format eines Keyframes.
///
/// Fehlende Felder heilen zu Defaults (Skalierung 1, Rotation 0,
/// Bildmitte) statt den Parse scheitern zu lassen.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredKeyframe {
    #[serde(default = "default_frame")]
    frame: u32,
    #[serde(default = "default_center")]
    x: f32,
    #[serde(default = "default_center")]
    y: f32,
    #[serde(default = "default_scale")]
    scale: f32,
    #[serde(default)]
    rotation: f32,
}

fn default_frame() -> u32 {
    1
}

fn default_center() -> f32 {
    0.5
}

fn default_scale() -> f32 {
    1.0
}

/// Parst ein Keyframe-Array in einen Track.
///
/// Der Aufbau läuft über `add_or_replace`, wodurch Sortierung,
/// Frame-Eindeutigkeit und Klemmen auch für unsaubere Bestandsdaten
/// gelten. Unparsebare Daten → leerer Track plus Warnung.
pub fn parse_keyframes(raw: &str, max_frames: u32) -> BoxKeyframeTrack {
    let mut track = BoxKeyframeTrack::new();
    if raw.trim().is_empty() {
        return track;
    }

    let stored: Vec<StoredKeyframe> = match serde_json::from_str(raw) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Keyframe-Array unlesbar, verwende leeren Track: {}", e);
            return track;
        }
    };

    for s in stored {
        track.add_or_replace(
            BoxKeyframe {
                frame: s.frame,
                x: s.x,
                y: s.y,
                scale: s.scale,
                rotation: s.rotation,
            },
            max_frames,
        );
    }
    track
}

/// Serialisiert einen Track als Keyframe-Array.
pub fn write_keyframes(track: &BoxKeyframeTrack) -> String {
    let stored: Vec<StoredKeyframe> = track
        .keys()
        .iter()
        .map(|k| StoredKeyframe {
            frame: k.frame,
            x: k.x,
            y: k.y,
            scale: k.scale,
            rotation: k.rotation,
        })
        .collect();
    match serde_json::to_string(&stored) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Keyframe-Array nicht serialisierbar: {}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn roundtrip_erhaelt_keyframes() {
        let mut track = BoxKeyframeTrack::new();
        track.add_or_replace(
            BoxKeyframe {
                frame: 3,
                x: 0.2,
                y: 0.8,
                scale: 1.5,
                rotation: 2.0,
            },
            120,
        );
        let raw = write_keyframes(&track);
        let wieder = parse_keyframes(&raw, 120);
        assert_eq!(wieder, track);
    }

    #[test]
    fn fehlende_felder_heilen_zu_defaults() {
        let raw = r#"[{"frame": 4, "x": 0.3, "y": 0.3}]"#;
        let track = parse_keyframes(raw, 120);
        assert_eq!(track.len(), 1);
        assert_relative_eq!(track.keys()[0].scale, 1.0);
        assert_relative_eq!(track.keys()[0].rotation, 0.0);
    }

    #[test]
    fn doppelte_frames_in_bestandsdaten_werden_dedupliziert() {
        let raw = r#"[{"frame": 2, "x": 0.1, "y": 0.1}, {"frame": 2, "x": 0.9, "y": 0.9}]"#;
        let track = parse_keyframes(raw, 120);
        assert_eq!(track.len(), 1);
        assert_relative_eq!(track.keys()[0].x, 0.9);
    }

    #[test]
    fn unlesbares_array_ergibt_leeren_track() {
        let track = parse_keyframes("nicht json", 120);
        assert!(track.is_empty());
    }
}
