//! Spline-Layer-Editor Library.
//! Keyframe- und Geometrie-Kern als Library exportiert für Host-Integration und Tests.

pub mod app;
pub mod core;
pub mod persist;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragSession, LayerStore, PointerButton,
};
pub use core::{
    BoxKeyframe, BoxKeyframeTrack, BoxPose, CanvasSpace, DrivenConfig, EasingConfig,
    InterpolationMode, Layer, LayerKind, SpatialIndex, SpatialMatch, TrackPoint,
};
pub use persist::{parse_keyframes, parse_points_store, write_keyframes, write_points_store};
pub use shared::{EditorOptions, OutputLayer, OutputScene};
