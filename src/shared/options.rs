//! Zentrale Konfiguration für den Spline-Layer-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Skalierung ──────────────────────────────────────────────────────

/// Untere Grenze für Punkt-, Box- und Keyframe-Skalierung.
pub const SCALE_MIN: f32 = 0.2;
/// Obere Grenze für Punkt-, Box- und Keyframe-Skalierung.
pub const SCALE_MAX: f32 = 3.0;
/// Untere Grenze für die Layer-Gesamtskalierung.
pub const LAYER_SCALE_MIN: f32 = 0.01;
/// Obere Grenze für die Layer-Gesamtskalierung.
pub const LAYER_SCALE_MAX: f32 = 8.0;
/// Dämpfungsfaktor für Drag-Skalierung: nur 10% der relativen
/// Pointer-Bewegung gehen in den Skalierungsfaktor ein.
pub const SCALE_DRAG_DAMPING: f32 = 0.1;
/// Mindestbetrag der Referenzdistanz beim Skalier-Drag (gegen Division nahe 0).
pub const SCALE_DRAG_MIN_REFERENCE: f32 = 10.0;

// ── Timeline ────────────────────────────────────────────────────────

/// Standard-Länge der Box-Timeline in Frames.
pub const DEFAULT_MAX_FRAMES: u32 = 120;
/// Standard-Abspielrate der Box-Timeline (Frames pro Sekunde).
pub const PLAYBACK_FPS: f32 = 24.0;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Pick-Radius in Canvas-Einheiten für Punkt-Hit-Tests.
pub const PICK_RADIUS: f32 = 12.0;

// ── Persistenz ──────────────────────────────────────────────────────

/// Formatversion neuer Points-Stores (Legacy-Stores tragen keinen Tag).
pub const POINTS_STORE_FORMAT: u32 = 2;
/// Betragsgrenze der Legacy-Heuristik: liegt jede Koordinate eines
/// ungetaggten Stores darunter, gilt er als bereits normalisiert.
pub const LEGACY_NORMALIZED_BOUND: f32 = 10.0;

// ── Ausgabe ─────────────────────────────────────────────────────────

/// Samples pro Kontrollpunkt-Segment beim Abtasten von Basis-Kurven.
pub const CURVE_SAMPLES_PER_SEGMENT: usize = 16;
/// Maximale Segmentlänge (normalisierte Einheiten) beim Resampling linearer Pfade.
pub const OUTPUT_MAX_SEGMENT_LENGTH: f32 = 0.01;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_layer_editor.toml` neben der Host-Anwendung gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Hit-Test ────────────────────────────────────────────────
    /// Pick-Radius für Punkt-Hit-Tests in Canvas-Einheiten
    pub pick_radius: f32,

    // ── Timeline ────────────────────────────────────────────────
    /// Abspielrate der Box-Timeline in Frames pro Sekunde
    pub playback_fps: f32,

    // ── Ausgabe ─────────────────────────────────────────────────
    /// Samples pro Segment beim Abtasten von Basis-Kurven
    pub curve_samples_per_segment: usize,
    /// Maximale Segmentlänge (normalisiert) beim Resampling linearer Pfade
    #[serde(default = "default_output_max_segment_length")]
    pub output_max_segment_length: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            playback_fps: PLAYBACK_FPS,
            curve_samples_per_segment: CURVE_SAMPLES_PER_SEGMENT,
            output_max_segment_length: OUTPUT_MAX_SEGMENT_LENGTH,
        }
    }
}

/// Serde-Default für `output_max_segment_length` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_output_max_segment_length() -> f32 {
    OUTPUT_MAX_SEGMENT_LENGTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Host-Anwendung.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_layer_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_layer_editor.toml")
    }

    /// Dauer eines Playback-Frames in Sekunden.
    pub fn playback_frame_interval(&self) -> f32 {
        1.0 / self.playback_fps.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_optionen_uebernehmen_konstanten() {
        let opts = EditorOptions::default();
        assert_eq!(opts.pick_radius, PICK_RADIUS);
        assert_eq!(opts.curve_samples_per_segment, CURVE_SAMPLES_PER_SEGMENT);
    }

    #[test]
    fn toml_roundtrip_erhaelt_werte() {
        let mut opts = EditorOptions::default();
        opts.playback_fps = 30.0;
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let wieder: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(wieder, opts);
    }
}
