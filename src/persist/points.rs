//! Reader/Writer für den Points-Store eines Layers.
//!
//! Neue Stores sind getaggte JSON-Objekte (`{"format": 2, "points": [...]}`).
//! Bestandsdaten sind nackte Arrays ohne Tag; ob sie normalisiert oder
//! noch absolute Pixelwerte sind, entscheidet dort die Betrags-Heuristik
//! in `core::canvas_space`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::TrackPoint;
use crate::shared::POINTS_STORE_FORMAT;

/// Wire-Format eines Punkts im Store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPoint {
    x: f32,
    y: f32,
    #[serde(default)]
    highlighted: bool,
    #[serde(default = "default_scale")]
    scale: f32,
    #[serde(default = "default_scale")]
    box_scale: f32,
    #[serde(default = "default_scale")]
    point_scale: f32,
    /// uid ist sitzungsgebunden; fehlt sie, vergibt der Loader eine neue.
    #[serde(default)]
    uid: Option<u64>,
}

fn default_scale() -> f32 {
    1.0
}

/// Getaggtes Store-Objekt (Format >= 2) oder Legacy-Array ohne Tag.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoreWire {
    Tagged {
        format: u32,
        points: Vec<StoredPoint>,
    },
    Legacy(Vec<StoredPoint>),
}

#[derive(Debug, Serialize)]
struct TaggedStore<'a> {
    format: u32,
    points: &'a [StoredPoint],
}

/// Ergebnis des Store-Parsens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPoints {
    /// Geparste Punkte; uid 0 markiert "im Store nicht vergeben"
    pub points: Vec<TrackPoint>,
    /// Format-Tag des Stores (None = Legacy-Array ohne Tag)
    pub format: Option<u32>,
}

/// Parst einen Points-Store.
///
/// Leerer String → leere Liste. Unparsebare Daten → leere Liste plus
/// Warnung; der Fehler erreicht den Aufrufer nie (der Layer verhält sich
/// wie ein leerer).
pub fn parse_points_store(raw: &str) -> ParsedPoints {
    if raw.trim().is_empty() {
        return ParsedPoints::default();
    }

    match serde_json::from_str::<StoreWire>(raw) {
        Ok(StoreWire::Tagged { format, points }) => ParsedPoints {
            points: points.into_iter().map(to_track_point).collect(),
            format: Some(format),
        },
        Ok(StoreWire::Legacy(points)) => ParsedPoints {
            points: points.into_iter().map(to_track_point).collect(),
            format: None,
        },
        Err(e) => {
            log::warn!("Points-Store unlesbar, verwende leere Liste: {}", e);
            ParsedPoints::default()
        }
    }
}

/// Serialisiert eine (normalisierte) Punktliste als getaggten Store.
pub fn write_points_store(points: &[TrackPoint]) -> String {
    let stored: Vec<StoredPoint> = points.iter().map(from_track_point).collect();
    let wire = TaggedStore {
        format: POINTS_STORE_FORMAT,
        points: &stored,
    };
    match serde_json::to_string(&wire) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Points-Store nicht serialisierbar: {}", e);
            String::new()
        }
    }
}

fn to_track_point(s: StoredPoint) -> TrackPoint {
    let mut p = TrackPoint {
        pos: Vec2::new(s.x, s.y),
        highlighted: s.highlighted,
        scale: s.scale,
        box_scale: s.box_scale,
        point_scale: s.point_scale,
        uid: s.uid.unwrap_or(0),
    };
    p.clamp_scales();
    p
}

fn from_track_point(p: &TrackPoint) -> StoredPoint {
    StoredPoint {
        x: p.pos.x,
        y: p.pos.y,
        highlighted: p.highlighted,
        scale: p.scale,
        box_scale: p.box_scale,
        point_scale: p.point_scale,
        uid: Some(p.uid),
    }
}
