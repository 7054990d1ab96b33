//! Core-Domänentypen: Punkte, Layer, Box-Keyframes, Koordinaten-Transform,
//! Interpolation und Spatial-Index.

pub mod box_keyframe;
pub mod canvas_space;
pub mod interpolate;
pub mod layer;
pub mod point;
pub mod spatial;

pub use box_keyframe::{clamp_frame, clamp_frame_f32, BoxKeyframe, BoxKeyframeTrack, BoxPose};
pub use canvas_space::{is_normalized, CanvasSpace};
pub use layer::{DrivenConfig, EasingConfig, InterpolationMode, Layer, LayerKind};
pub use point::{clamp_scale, find_by_uid, find_by_uid_mut, index_of_uid, TrackPoint};
pub use spatial::{SpatialIndex, SpatialMatch};
