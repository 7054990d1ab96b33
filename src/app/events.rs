//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;

use crate::core::{DrivenConfig, EasingConfig, InterpolationMode, LayerKind, TrackPoint};
use crate::shared::EditorOptions;

/// Pointer-Taste beim Drücken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primärtaste (links)
    Primary,
    /// Sekundärtaste (rechts)
    Secondary,
    /// Tertiärtaste (Mitte)
    Middle,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer gedrückt (Koordinaten bereits in logischem Canvas-Raum).
    /// `target` ist die vom Renderer gemeldete Punkt-uid unter dem
    /// Pointer; für Box-Layer löst der Kern stattdessen per Hit-Test auf.
    PointerPressed {
        pos: Vec2,
        button: PointerButton,
        /// Transform-Modifier (gedrückt = Ganz-Layer-/Skalier-Gesten)
        modifier: bool,
        target: Option<u64>,
    },
    /// Pointer bewegt
    PointerMoved { pos: Vec2 },
    /// Pointer losgelassen
    PointerReleased,
    /// Pointer hat den gültigen Bereich verlassen → Drag abbrechen
    PointerCancelled,

    /// Host hat den aktiven Layer gewechselt (None = keiner)
    ActiveLayerChanged { name: Option<String> },
    /// Host hat einen Layer angelegt
    LayerCreated { name: String, kind: LayerKind },
    /// Host hat einen Layer entfernt
    LayerRemoved { name: String },
    /// Layer ein-/ausgeschaltet
    LayerToggled { name: String, on: bool },
    /// Interpolationsmodus eines Layers geändert
    LayerInterpolationChanged {
        name: String,
        mode: InterpolationMode,
    },
    /// Wiederholungsanzahl eines Layers geändert
    LayerRepeatChanged { name: String, repeat: u32 },
    /// Gesamtskalierung eines Layers geändert
    LayerScaleChanged { name: String, scale: f32 },
    /// Easing-Konfiguration eines Layers geändert
    LayerEasingChanged { name: String, easing: EasingConfig },
    /// Driven-Konfiguration eines Layers geändert
    LayerDrivenChanged {
        name: String,
        driven: Option<DrivenConfig>,
    },

    /// Aktive Punktliste komplett ersetzen (Canvas-Koordinaten)
    ActivePointsReplaced { points: Vec<TrackPoint> },
    /// Neuen Punkt an Canvas-Position einfügen
    AddPointRequested { pos: Vec2 },
    /// Punkt über uid löschen (explizite Aktion, auch Endpunkte)
    DeletePointRequested { uid: u64 },

    /// Keyframe an der aktuellen Pose des Layers setzen
    AddBoxKeyRequested { layer: String, frame: u32 },
    /// Keyframe an einem Frame löschen
    DeleteBoxKeyRequested { layer: String, frame: u32 },
    /// Alle Keyframes eines Layers löschen
    ClearBoxKeysRequested { layer: String },
    /// Timeline-Scrub: `commit` schreibt die Pose in den Live-Buffer,
    /// sonst nur in den Vorschau-Slot
    BoxTimelineScrubbed {
        layer: String,
        frame: f32,
        commit: bool,
    },
    /// Vorschau-Pose eines Layers verwerfen
    BoxPreviewCleared { layer: String },

    /// Playback eines Box-Layers starten
    PlaybackStartRequested { layer: String },
    /// Playback eines Box-Layers stoppen
    PlaybackStopRequested { layer: String },
    /// Host-Tick: verstrichene Zeit an alle Playback-Uhren verteilen
    PlaybackTicked { delta_seconds: f32 },

    /// Canvas-Größe hat sich geändert
    CanvasResized { size: Vec2 },
    /// Hintergrundbild gewechselt (None = entfernt); nur Metadaten
    BackgroundImageChanged { size: Option<Vec2> },
    /// Darstellungs-Transform des Hintergrundbilds geändert
    ImageTransformChanged { scale: f32, offset: Vec2 },
    /// Timeline-Länge geändert
    MaxFramesChanged { max_frames: u32 },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Aktiven Layer wechseln (persistiert vorher den Buffer)
    SetActiveLayer { name: Option<String> },
    /// Layer anlegen
    AddLayer { name: String, kind: LayerKind },
    /// Layer entfernen
    RemoveLayer { name: String },
    /// Layer ein-/ausschalten
    SetLayerEnabled { name: String, on: bool },
    /// Interpolationsmodus setzen
    SetLayerInterpolation {
        name: String,
        mode: InterpolationMode,
    },
    /// Wiederholungsanzahl setzen
    SetLayerRepeat { name: String, repeat: u32 },
    /// Gesamtskalierung setzen
    SetLayerScale { name: String, scale: f32 },
    /// Easing-Konfiguration setzen
    SetLayerEasing { name: String, easing: EasingConfig },
    /// Driven-Konfiguration setzen
    SetLayerDriven {
        name: String,
        driven: Option<DrivenConfig>,
    },

    /// Aktive Punktliste ersetzen und sofort persistieren
    SetActivePoints { points: Vec<TrackPoint> },
    /// Buffer normalisieren und in den Store des aktiven Layers schreiben
    CommitActivePoints,
    /// Punkt an Canvas-Position in den Pfad einfügen
    AddPointAt { pos: Vec2 },
    /// Punkt über uid löschen
    DeletePoint { uid: u64 },
    /// Hervorhebung auf einen Punkt setzen (None = keine)
    SetHighlightedPoint { uid: Option<u64> },

    /// Einzelpunkt-Drag starten
    BeginPointDrag { uid: u64, pointer: Vec2 },
    /// Box-Punkt-Skalierung starten
    BeginBoxPointScale { uid: u64, pointer: Vec2 },
    /// Ganz-Layer-Rotation um den Anker starten
    BeginRotateAll { anchor_uid: u64, pointer: Vec2 },
    /// Ganz-Layer-Skalierung um den Anker starten
    BeginScaleAll { anchor_uid: u64, pointer: Vec2 },
    /// Ganz-Layer-Translation starten
    BeginTranslateAll { anchor_uid: u64, pointer: Vec2 },
    /// Laufenden Drag mit neuer Pointer-Position fortschreiben
    UpdateDrag { pointer: Vec2 },
    /// Drag beenden (persistiert bei Rotation/Skalierung genau einmal)
    EndDrag,
    /// Drag abbrechen und Drag-Start-Zustand wiederherstellen
    CancelDrag,

    /// Keyframe an der aktuellen Pose setzen/ersetzen
    AddBoxKey { layer: String, frame: u32 },
    /// Keyframe löschen
    DeleteBoxKey { layer: String, frame: u32 },
    /// Keyframe-Track leeren
    ClearBoxKeys { layer: String },
    /// Frame committen: Pose in Live-Buffer bzw. Store schreiben
    ApplyBoxFrame { layer: String, frame: f32 },
    /// Vorschau-Pose berechnen (wird nie persistiert)
    SetBoxPreview { layer: String, frame: f32 },
    /// Vorschau-Pose verwerfen
    ClearBoxPreview { layer: String },

    /// Playback-Uhr starten (ersetzt eine laufende)
    StartPlayback { layer: String },
    /// Playback-Uhr stoppen
    StopPlayback { layer: String },
    /// Alle Playback-Uhren um die verstrichene Zeit fortschreiben
    AdvancePlayback { delta_seconds: f32 },

    /// Canvas-Größe setzen
    SetCanvasSize { size: Vec2 },
    /// Hintergrundbild-Metadaten setzen (None = entfernt)
    SetBackgroundImage { size: Option<Vec2> },
    /// Darstellungs-Transform des Hintergrundbilds setzen
    SetImageTransform { scale: f32, offset: Vec2 },
    /// Timeline-Länge setzen
    SetMaxFrames { max_frames: u32 },
    /// Optionen anwenden
    ApplyOptions { options: EditorOptions },
}
