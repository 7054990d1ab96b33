//! Keyframe-Track für Box-Layer: Position, Skalierung und Rotation
//! als dünn besetzte Samples über der Timeline.

use serde::{Deserialize, Serialize};

use super::interpolate;
use super::layer::InterpolationMode;
use super::point::clamp_scale;

/// Pose eines Box-Layers zu einem Zeitpunkt.
///
/// `x`/`y` sind normalisierte Koordinaten relativ zum Quellbild,
/// `rotation` ist unbegrenzt in Radiant (wird nie modulo 2π gewickelt,
/// damit Mehrfachumdrehungen monoton interpolieren).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxPose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl BoxPose {
    /// Erstellt eine Pose mit expliziten Werten.
    pub fn new(x: f32, y: f32, scale: f32, rotation: f32) -> Self {
        Self {
            x,
            y,
            scale,
            rotation,
        }
    }
}

impl Default for BoxPose {
    /// Bildmitte, Originalgröße, keine Rotation.
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// Keyframe eines Box-Layers an einem ganzzahligen Frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxKeyframe {
    /// Frame-Index (1-basiert, auf die Timeline-Länge geklemmt)
    pub frame: u32,
    /// Normalisierte X-Position
    pub x: f32,
    /// Normalisierte Y-Position
    pub y: f32,
    /// Box-Skalierung (geklemmt auf den gültigen Bereich)
    pub scale: f32,
    /// Rotation in Radiant (unbegrenzt)
    pub rotation: f32,
}

impl BoxKeyframe {
    /// Erstellt einen Keyframe aus einer Pose.
    pub fn from_pose(frame: u32, pose: BoxPose) -> Self {
        Self {
            frame,
            x: pose.x,
            y: pose.y,
            scale: pose.scale,
            rotation: pose.rotation,
        }
    }

    /// Gibt die Pose dieses Keyframes zurück.
    pub fn pose(&self) -> BoxPose {
        BoxPose::new(self.x, self.y, self.scale, self.rotation)
    }
}

/// Nach Frame sortierter, frame-eindeutiger Keyframe-Track.
///
/// Die Invarianten (Sortierung, Eindeutigkeit pro Frame, geklemmte
/// Skalierung) werden ausschließlich über die Methoden hier gewahrt;
/// der Vektor selbst ist deshalb privat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxKeyframeTrack {
    keys: Vec<BoxKeyframe>,
}

impl BoxKeyframeTrack {
    /// Erstellt einen leeren Track.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Read-only Sicht auf die sortierten Keyframes.
    pub fn keys(&self) -> &[BoxKeyframe] {
        &self.keys
    }

    /// Anzahl der Keyframes.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Gibt `true` zurück, wenn der Track keine Keyframes enthält.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Fügt einen Keyframe ein oder ersetzt den bestehenden am selben Frame.
    ///
    /// Frame wird auf `[1, max_frames]` geklemmt, die Skalierung auf den
    /// gültigen Bereich. Der Track bleibt nach Frame sortiert.
    pub fn add_or_replace(&mut self, mut key: BoxKeyframe, max_frames: u32) {
        key.frame = clamp_frame(key.frame, max_frames);
        key.scale = clamp_scale(key.scale);

        match self.keys.binary_search_by_key(&key.frame, |k| k.frame) {
            Ok(idx) => self.keys[idx] = key,
            Err(idx) => self.keys.insert(idx, key),
        }
    }

    /// Entfernt den Keyframe am (geklemmten) Frame.
    /// Gibt `true` zurück, falls einer entfernt wurde; ein Miss ist kein Fehler.
    pub fn delete(&mut self, frame: u32, max_frames: u32) -> bool {
        let frame = clamp_frame(frame, max_frames);
        match self.keys.binary_search_by_key(&frame, |k| k.frame) {
            Ok(idx) => {
                self.keys.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Leert den Track.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Gibt den Keyframe an einem exakten Frame zurück.
    pub fn key_at(&self, frame: u32) -> Option<&BoxKeyframe> {
        self.keys
            .binary_search_by_key(&frame, |k| k.frame)
            .ok()
            .map(|idx| &self.keys[idx])
    }

    /// Berechnet die Pose an einem (fraktionalen) Frame.
    ///
    /// Leerer Track → `fallback` (die zuletzt explizit gesetzte Pose des
    /// Layers), damit ein Box-Layer ohne Keyframes stabil positioniert bleibt.
    pub fn pose_at(&self, frame: f32, mode: InterpolationMode, fallback: BoxPose) -> BoxPose {
        interpolate::pose_at(&self.keys, frame, mode, fallback)
    }
}

/// Klemmt einen Frame-Index auf `[1, max_frames]`.
pub fn clamp_frame(frame: u32, max_frames: u32) -> u32 {
    frame.clamp(1, max_frames.max(1))
}

/// Klemmt eine fraktionale Scrub-Position auf `[1.0, max_frames]`.
pub fn clamp_frame_f32(frame: f32, max_frames: u32) -> f32 {
    frame.clamp(1.0, max_frames.max(1) as f32)
}
