//! Feature-Handler: dünne Schicht zwischen Controller und Use-Cases.

pub mod keyframes;
pub mod layers;
pub mod playback;
pub mod pointer;
pub mod view;
