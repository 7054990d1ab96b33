//! Layer-Datenmodell: Spline-, Freihand- und Box-Layer.

use serde::{Deserialize, Serialize};

use super::box_keyframe::{BoxKeyframeTrack, BoxPose};
use crate::shared::{LAYER_SCALE_MAX, LAYER_SCALE_MIN};

/// Geometrie-Art eines Layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Punktliste, als Kurve interpretiert
    #[default]
    Spline,
    /// Punktliste aus einer Freihand-Geste
    Freehand,
    /// Einzelne Box, über Keyframes animiert
    Box,
}

/// Interpolationsmodus eines Layers.
///
/// Für Pfad-Layer steuert er die Ausgabe-Abtastung, für Box-Layer die
/// Keyframe-Interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Lineare Interpolation zwischen Kontrollpunkten/Keyframes
    #[default]
    Linear,
    /// Kubische B-Spline-Basis (glättet, läuft nicht durch innere Punkte)
    Basis,
    /// Rohe Kontrollpunkte ohne Abtastung
    Points,
}

/// Easing-Konfiguration eines Layers (vom Host interpretiert).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EasingConfig {
    /// Name der Easing-Kurve (z.B. "linear", "easeInOut")
    pub path: String,
    /// Stärke des Easings
    pub strength: f32,
}

impl Default for EasingConfig {
    fn default() -> Self {
        Self {
            path: "linear".to_string(),
            strength: 1.0,
        }
    }
}

/// Konfiguration eines extern getriebenen Layers (z.B. Audio-Input).
/// Der Kern reicht sie nur durch; die Auswertung passiert im Host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivenConfig {
    /// Name der treibenden Quelle
    pub source: String,
    /// Einflussstärke der Quelle
    pub amount: f32,
}

/// Ein Layer des Editors.
///
/// Der Layer besitzt seine Punktliste exklusiv; geteilt wird nie. Die
/// Punkte liegen als normalisierter, versionierter Store-String vor
/// (`points_store`) — die einzige persistente Form. Bearbeitet wird
/// ausschließlich über den Edit-Buffer des aktiven Layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Eindeutiger Name (zugleich ID im Layer-Store)
    pub name: String,
    /// Ob der Layer in der Ausgabe erscheint
    pub on: bool,
    /// Geometrie-Art
    pub kind: LayerKind,
    /// Interpolationsmodus
    pub interpolation: InterpolationMode,
    /// Persistierte Punktliste (normalisiert, versioniert, JSON)
    pub points_store: String,
    /// Wiederholungen des Pfads in der Ausgabe (>= 1)
    pub repeat: u32,
    /// Easing-Konfiguration
    pub easing: EasingConfig,
    /// Extern getrieben (None = nicht getrieben)
    pub driven: Option<DrivenConfig>,
    /// Layer-Gesamtskalierung
    pub scale: f32,
    /// Keyframe-Track (nur für Box-Layer gefüllt)
    pub box_keys: BoxKeyframeTrack,
    /// Aktuelle Scrub-Position auf der Box-Timeline
    pub box_timeline_point: f32,
    /// Zuletzt explizit gesetzte Box-Pose (Fallback bei leerem Track)
    pub box_pose: BoxPose,
}

impl Layer {
    /// Erstellt einen neuen, leeren Layer.
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            name: name.into(),
            on: true,
            kind,
            interpolation: InterpolationMode::Linear,
            points_store: String::new(),
            repeat: 1,
            easing: EasingConfig::default(),
            driven: None,
            scale: 1.0,
            box_keys: BoxKeyframeTrack::new(),
            box_timeline_point: 1.0,
            box_pose: BoxPose::default(),
        }
    }

    /// Gibt `true` zurück, wenn dieser Layer ein Box-Layer ist.
    pub fn is_box(&self) -> bool {
        self.kind == LayerKind::Box
    }

    /// Setzt die Wiederholungsanzahl (mindestens 1).
    pub fn set_repeat(&mut self, repeat: u32) {
        self.repeat = repeat.max(1);
    }

    /// Setzt die Layer-Gesamtskalierung (geklemmt).
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(LAYER_SCALE_MIN, LAYER_SCALE_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_faellt_nie_unter_eins() {
        let mut layer = Layer::new("a", LayerKind::Spline);
        layer.set_repeat(0);
        assert_eq!(layer.repeat, 1);
        layer.set_repeat(4);
        assert_eq!(layer.repeat, 4);
    }

    #[test]
    fn layer_skalierung_wird_geklemmt() {
        let mut layer = Layer::new("a", LayerKind::Box);
        layer.set_scale(100.0);
        assert_eq!(layer.scale, LAYER_SCALE_MAX);
        layer.set_scale(0.0);
        assert_eq!(layer.scale, LAYER_SCALE_MIN);
    }

    #[test]
    fn interpolation_serialisiert_kleingeschrieben() {
        let json = serde_json::to_string(&InterpolationMode::Basis).expect("serialisierbar");
        assert_eq!(json, "\"basis\"");
        let mode: InterpolationMode = serde_json::from_str("\"points\"").expect("parsebar");
        assert_eq!(mode, InterpolationMode::Points);
    }
}
