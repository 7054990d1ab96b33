//! Layer-neutrale Helfer: Optionen, Pfad-Geometrie, Ausgabe-Szene.

pub mod options;
pub mod output_scene;
pub mod spline_geometry;

pub use options::{
    EditorOptions, CURVE_SAMPLES_PER_SEGMENT, DEFAULT_MAX_FRAMES, LAYER_SCALE_MAX, LAYER_SCALE_MIN,
    LEGACY_NORMALIZED_BOUND, OUTPUT_MAX_SEGMENT_LENGTH, PICK_RADIUS, PLAYBACK_FPS,
    POINTS_STORE_FORMAT, SCALE_DRAG_DAMPING, SCALE_DRAG_MIN_REFERENCE, SCALE_MAX, SCALE_MIN,
};
pub use output_scene::{OutputLayer, OutputScene};
