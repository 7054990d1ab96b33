//! Application State — zentrale Datenhaltung.

use glam::Vec2;
use indexmap::IndexMap;

use super::command_log::CommandLog;
use super::use_cases::drag_transform::DragSession;
use crate::core::{BoxPose, CanvasSpace, InterpolationMode, Layer, TrackPoint};
use crate::shared::{EditorOptions, DEFAULT_MAX_FRAMES};

/// Geordnete Sammlung aller Layer plus aktive Auswahl.
///
/// Die Reihenfolge ist die Autoren-Reihenfolge (IndexMap), damit die
/// Ausgabe deterministisch bleibt. Höchstens ein Layer ist aktiv; nur
/// dessen Punktliste wird von Pointer-Eingaben mutiert.
#[derive(Default)]
pub struct LayerStore {
    layers: IndexMap<String, Layer>,
    active: Option<String>,
}

impl LayerStore {
    /// Erstellt einen leeren Layer-Store.
    pub fn new() -> Self {
        Self {
            layers: IndexMap::new(),
            active: None,
        }
    }

    /// Fügt einen Layer hinzu. Namenskollisionen werden abgewiesen.
    pub fn add(&mut self, layer: Layer) -> bool {
        if self.layers.contains_key(&layer.name) {
            log::warn!("Layer '{}' existiert bereits", layer.name);
            return false;
        }
        self.layers.insert(layer.name.clone(), layer);
        true
    }

    /// Entfernt einen Layer. Ist er aktiv, wird die Auswahl aufgehoben.
    pub fn remove(&mut self, name: &str) -> Option<Layer> {
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        self.layers.shift_remove(name)
    }

    /// Gibt einen Layer über seinen Namen zurück.
    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }

    /// Gibt einen Layer über seinen Namen zurück (mutable).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.get_mut(name)
    }

    /// Name des aktiven Layers.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Setzt den aktiven Layer (None = keiner). Unbekannte Namen heben
    /// die Auswahl auf.
    pub fn set_active(&mut self, name: Option<String>) {
        self.active = match name {
            Some(n) if self.layers.contains_key(&n) => Some(n),
            Some(n) => {
                log::warn!("Unbekannter Layer '{}' kann nicht aktiviert werden", n);
                None
            }
            None => None,
        };
    }

    /// Gibt den aktiven Layer zurück.
    pub fn active_layer(&self) -> Option<&Layer> {
        self.active.as_deref().and_then(|n| self.layers.get(n))
    }

    /// Gibt den aktiven Layer zurück (mutable).
    pub fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        let name = self.active.clone()?;
        self.layers.get_mut(&name)
    }

    /// Iterator über alle Layer in Autoren-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    /// Anzahl der Layer.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Gibt `true` zurück, wenn keine Layer existieren.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Mutable Arbeitskopie des aktiven Layers.
///
/// Es gibt genau einen Buffer; der persistierte `points_store` des
/// Layers ist der unveränderliche Snapshot. Zurückgeschrieben wird
/// ausschließlich über den expliziten Commit (`set_active_points` bzw.
/// Layer-Wechsel) — nie durch stilles Aliasing.
#[derive(Default)]
pub struct EditBuffer {
    /// Punktliste in Canvas-Koordinaten
    pub points: Vec<TrackPoint>,
    /// Interpolationsmodus des geladenen Layers
    pub interpolation: InterpolationMode,
}

impl EditBuffer {
    /// Erstellt einen leeren Buffer.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            interpolation: InterpolationMode::Linear,
        }
    }

    /// Leert den Buffer (kein Layer aktiv).
    pub fn clear(&mut self) {
        self.points.clear();
        self.interpolation = InterpolationMode::Linear;
    }
}

/// Nicht-persistierte Vorschau-Pose eines Box-Layers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPreview {
    /// Name des Layers, zu dem die Vorschau gehört
    pub layer: String,
    /// Vorgerechnete Pose für das Rendering
    pub pose: BoxPose,
}

/// Zustand der Pointer-Werkzeuge.
#[derive(Default)]
pub struct EditorToolState {
    /// Aktive Transform-Sitzung (None = Idle)
    pub drag: Option<DragSession>,
    /// Vorschau-Scrub (wird gerendert, aber nie persistiert)
    pub box_preview: Option<BoxPreview>,
    /// uid des aktuell hervorgehobenen Punkts
    pub highlighted: Option<u64>,
}

impl EditorToolState {
    /// Erstellt den Idle-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Zustand: Canvas-Größe und Hintergrundbild-Metadaten.
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixeln
    pub canvas_size: Vec2,
    /// Natürliche Größe des Hintergrundbilds (None = keins geladen)
    pub image_size: Option<Vec2>,
    /// Darstellungs-Skalierung des Bilds auf dem Canvas
    pub image_scale: f32,
    /// Verschiebung des Bilds auf dem Canvas
    pub image_offset: Vec2,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            canvas_size: Vec2::new(1.0, 1.0),
            image_size: None,
            image_scale: 1.0,
            image_offset: Vec2::ZERO,
        }
    }

    /// Baut den Koordinaten-Transformator aus dem aktuellen Zustand.
    pub fn canvas_space(&self) -> CanvasSpace {
        CanvasSpace {
            canvas_size: self.canvas_size,
            image_size: self.image_size,
            scale: self.image_scale,
            offset: self.image_offset,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Timeline-Konfiguration für Box-Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineState {
    /// Länge der Timeline in Frames (Frames sind 1-basiert)
    pub max_frames: u32,
}

impl TimelineState {
    /// Erstellt die Standard-Timeline.
    pub fn new() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new()
    }
}

/// Playback-Uhren, eine pro abspielendem Layer.
///
/// Kooperativ: der Host ruft `AdvancePlayback` mit der verstrichenen
/// Zeit; es gibt keine Hintergrund-Threads. Pro Layer existiert
/// höchstens eine Uhr — ein Neustart ersetzt die laufende.
#[derive(Default)]
pub struct PlaybackState {
    clocks: IndexMap<String, f32>,
}

impl PlaybackState {
    /// Erstellt den Zustand ohne laufendes Playback.
    pub fn new() -> Self {
        Self {
            clocks: IndexMap::new(),
        }
    }

    /// Startet (oder ersetzt) die Uhr eines Layers.
    pub fn start(&mut self, layer: &str) {
        if self.clocks.insert(layer.to_string(), 0.0).is_some() {
            log::debug!("Playback für '{}' neu gestartet", layer);
        }
    }

    /// Stoppt die Uhr eines Layers. Gibt `true` zurück, falls eine lief.
    pub fn stop(&mut self, layer: &str) -> bool {
        self.clocks.shift_remove(layer).is_some()
    }

    /// Gibt `true` zurück, wenn der Layer gerade abspielt.
    pub fn is_playing(&self, layer: &str) -> bool {
        self.clocks.contains_key(layer)
    }

    /// Namen aller abspielenden Layer.
    pub fn playing_layers(&self) -> Vec<String> {
        self.clocks.keys().cloned().collect()
    }

    /// Akkumulator eines Layers (mutable).
    pub fn accumulator_mut(&mut self, layer: &str) -> Option<&mut f32> {
        self.clocks.get_mut(layer)
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Alle Layer plus aktive Auswahl
    pub layers: LayerStore,
    /// Arbeitskopie des aktiven Layers
    pub buffer: EditBuffer,
    /// Canvas- und Hintergrundbild-Zustand
    pub view: ViewState,
    /// Timeline-Konfiguration
    pub timeline: TimelineState,
    /// Laufende Playback-Uhren
    pub playback: PlaybackState,
    /// Pointer-Werkzeug-Zustand
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Sitzungsweiter uid-Zähler (beginnt bei 1; 0 = "nicht vergeben")
    next_uid: u64,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            layers: LayerStore::new(),
            buffer: EditBuffer::new(),
            view: ViewState::new(),
            timeline: TimelineState::new(),
            playback: PlaybackState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            next_uid: 1,
        }
    }

    /// Vergibt die nächste uid (monoton, nie wiederverwendet).
    pub fn alloc_uid(&mut self) -> u64 {
        let uid = self.next_uid;
        self.next_uid += 1;
        uid
    }

    /// Repariert uids einer frisch geladenen Punktliste.
    ///
    /// Fehlende (0) oder doppelte uids bekommen frische Werte; gültige
    /// bleiben erhalten und der Zähler springt über sie hinweg, damit
    /// nichts doppelt vergeben wird.
    pub fn ensure_uids(&mut self, points: &mut [TrackPoint]) {
        let mut seen = std::collections::HashSet::new();
        for point in points.iter_mut() {
            if point.uid == 0 || !seen.insert(point.uid) {
                point.uid = self.alloc_uid();
                seen.insert(point.uid);
            } else if point.uid >= self.next_uid {
                self.next_uid = point.uid + 1;
            }
        }
    }

    /// Baut den Koordinaten-Transformator aus dem View-Zustand.
    pub fn canvas_space(&self) -> CanvasSpace {
        self.view.canvas_space()
    }

    /// Gibt `true` zurück, wenn `name` der aktive Layer ist.
    pub fn is_active(&self, name: &str) -> bool {
        self.layers.active_name() == Some(name)
    }

    /// Aktive Punktliste in Canvas-Koordinaten (bereits denormalisiert).
    ///
    /// Leer, wenn kein Layer aktiv ist oder dessen Store unlesbar war —
    /// der Lesefehler wurde dann beim Laden geloggt, nie weitergereicht.
    pub fn active_points(&self) -> &[TrackPoint] {
        &self.buffer.points
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
