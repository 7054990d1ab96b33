//! Serialisierte Ausgabe für den Host-Renderer.
//!
//! Für jeden eingeschalteten Layer wird `{name, interpolation, repeat,
//! points_store, coordinates}` emittiert. `coordinates` sind die rohen
//! Kontrollpunkte (Points-Modus und Box-Layer) oder ein dicht
//! abgetasteter Pfad (Kurvenmodi) — immer in normalisierter Form.

use glam::Vec2;
use serde::Serialize;

use crate::app::AppState;
use crate::core::{InterpolationMode, Layer};
use crate::persist;
use crate::shared::options::EditorOptions;
use crate::shared::spline_geometry;

/// Ausgabe eines einzelnen Layers.
#[derive(Debug, Clone, Serialize)]
pub struct OutputLayer {
    pub name: String,
    pub interpolation: InterpolationMode,
    pub repeat: u32,
    /// Persistierter Store-String (normalisiert, versioniert)
    pub points_store: String,
    /// Kontrollpunkte bzw. abgetasteter Pfad, normalisiert
    pub coordinates: Vec<[f32; 2]>,
}

/// Ausgabe aller eingeschalteten Layer in Autoren-Reihenfolge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OutputScene {
    pub layers: Vec<OutputLayer>,
}

impl OutputScene {
    /// Serialisiert die Szene als JSON-String.
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Output-Szene nicht serialisierbar: {}", e);
                String::new()
            }
        }
    }
}

/// Baut die Ausgabe-Szene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> OutputScene {
    let layers = state
        .layers
        .iter()
        .filter(|layer| layer.on)
        .map(|layer| build_layer(state, layer))
        .collect();
    OutputScene { layers }
}

fn build_layer(state: &AppState, layer: &Layer) -> OutputLayer {
    // Beim aktiven Layer ist der Buffer die aktuelle Wahrheit; sein
    // Store-String wird frisch aus der normalisierten Liste gebaut.
    let (control, points_store) = if state.is_active(&layer.name) {
        let normalized = state.canvas_space().normalize_points(&state.buffer.points);
        let store = persist::write_points_store(&normalized);
        (
            normalized.iter().map(|p| p.pos).collect::<Vec<Vec2>>(),
            store,
        )
    } else {
        let parsed = persist::parse_points_store(&layer.points_store);
        (
            parsed.points.iter().map(|p| p.pos).collect::<Vec<Vec2>>(),
            layer.points_store.clone(),
        )
    };

    OutputLayer {
        name: layer.name.clone(),
        interpolation: layer.interpolation,
        repeat: layer.repeat,
        points_store,
        coordinates: sample_coordinates(&control, layer, &state.options),
    }
}

/// Tastet den Pfad je nach Layer-Art und Modus ab.
fn sample_coordinates(control: &[Vec2], layer: &Layer, options: &EditorOptions) -> Vec<[f32; 2]> {
    let sampled: Vec<Vec2> = match layer.interpolation {
        // Box-Layer emittieren immer ihre rohen Kontrollpunkte
        _ if layer.is_box() => control.to_vec(),
        InterpolationMode::Points => control.to_vec(),
        InterpolationMode::Linear => {
            spline_geometry::resample_by_distance(control, options.output_max_segment_length)
        }
        InterpolationMode::Basis => {
            spline_geometry::bspline_chain(control, options.curve_samples_per_segment)
        }
    };
    sampled.iter().map(|p| [p.x, p.y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayerKind;
    use crate::persist::write_points_store;
    use crate::core::TrackPoint;

    fn store(coords: &[(f32, f32)]) -> String {
        let points: Vec<TrackPoint> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| TrackPoint::new(Vec2::new(x, y), i as u64 + 1))
            .collect();
        write_points_store(&points)
    }

    fn state_mit_layer(layer: Layer) -> AppState {
        let mut state = AppState::new();
        state.layers.add(layer);
        state
    }

    #[test]
    fn ausgeschaltete_layer_fehlen_in_der_ausgabe() {
        let mut layer = Layer::new("aus", LayerKind::Spline);
        layer.on = false;
        let state = state_mit_layer(layer);
        assert!(build(&state).layers.is_empty());
    }

    #[test]
    fn points_modus_emittiert_rohe_kontrollpunkte() {
        let mut layer = Layer::new("roh", LayerKind::Spline);
        layer.interpolation = InterpolationMode::Points;
        layer.points_store = store(&[(0.1, 0.1), (0.5, 0.5), (0.9, 0.9)]);
        let state = state_mit_layer(layer);

        let scene = build(&state);
        assert_eq!(scene.layers.len(), 1);
        assert_eq!(scene.layers[0].coordinates.len(), 3);
        assert_eq!(scene.layers[0].coordinates[1], [0.5, 0.5]);
    }

    #[test]
    fn kurvenmodus_tastet_dicht_ab() {
        let mut layer = Layer::new("kurve", LayerKind::Spline);
        layer.interpolation = InterpolationMode::Basis;
        layer.points_store = store(&[(0.0, 0.0), (0.5, 0.8), (1.0, 0.0)]);
        let state = state_mit_layer(layer);

        let scene = build(&state);
        assert!(scene.layers[0].coordinates.len() > 3);
    }

    #[test]
    fn linearer_modus_resampelt_nach_distanz() {
        let mut layer = Layer::new("linie", LayerKind::Spline);
        layer.interpolation = InterpolationMode::Linear;
        layer.points_store = store(&[(0.0, 0.0), (1.0, 0.0)]);
        let state = state_mit_layer(layer);

        let scene = build(&state);
        // 1.0 Länge bei 0.01 Segmentlänge → rund 100 Segmente
        assert!(scene.layers[0].coordinates.len() > 50);
    }
}
