//! Use-Case: Pointer-getriebene Transformationen auf der aktiven Punktliste.
//!
//! Eine `DragSession` wird genau einmal beim Drag-Start konstruiert und
//! hält Anker, Positions-Snapshot und Referenzwerte als unveränderliche
//! Sitzungsdaten. Jede Pointer-Bewegung rechnet vollständig aus diesen
//! Daten — nie aus aufsummierten Frame-Deltas — damit nichts driftet.

use glam::Vec2;

use crate::core::{clamp_scale, find_by_uid, find_by_uid_mut, TrackPoint};
use crate::shared::{SCALE_DRAG_DAMPING, SCALE_DRAG_MIN_REFERENCE};

/// Position eines Punkts zum Drag-Start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSnapshot {
    pub uid: u64,
    pub pos: Vec2,
}

/// Aktive Transform-Sitzung (genau eine gleichzeitig; `None` = Idle).
#[derive(Debug, Clone, PartialEq)]
pub enum DragSession {
    /// Einzelpunkt folgt dem Pointer minus Grab-Offset, damit der Punkt
    /// beim Anfassen nicht unter den Pointer springt.
    Point { uid: u64, grab_offset: Vec2 },
    /// Gedämpfte Skalierung eines einzelnen Box-Punkts über die
    /// X-Distanz zum Anker.
    BoxPointScale {
        uid: u64,
        anchor_x: f32,
        initial_dx: f32,
        initial_scale: f32,
    },
    /// Starre Rotation aller Punkte um den Anker.
    RotateAll {
        anchor_uid: u64,
        anchor: Vec2,
        initial_angle: f32,
        snapshot: Vec<PointSnapshot>,
    },
    /// Starre Translation aller Punkte; der Anker bleibt exakt unter
    /// dem Pointer.
    TranslateAll {
        anchor_uid: u64,
        anchor: Vec2,
        grab_offset: Vec2,
        snapshot: Vec<PointSnapshot>,
    },
    /// Gedämpfte Skalierung aller Positionsvektoren relativ zum Anker.
    ScaleAll {
        anchor_uid: u64,
        anchor: Vec2,
        initial_dx: f32,
        snapshot: Vec<PointSnapshot>,
    },
}

impl DragSession {
    /// Gibt `true` zurück, wenn die Punktliste beim Pointer-Up persistiert
    /// werden muss (einmalig, nur Ganz-Layer-Rotation und -Skalierung).
    pub fn commits_on_release(&self) -> bool {
        matches!(self, Self::RotateAll { .. } | Self::ScaleAll { .. })
    }
}

/// Startet einen Einzelpunkt-Drag.
pub fn begin_point_drag(points: &[TrackPoint], uid: u64, pointer: Vec2) -> Option<DragSession> {
    let point = find_by_uid(points, uid)?;
    Some(DragSession::Point {
        uid,
        grab_offset: pointer - point.pos,
    })
}

/// Startet eine Box-Punkt-Skalierung.
pub fn begin_box_point_scale(
    points: &[TrackPoint],
    uid: u64,
    pointer: Vec2,
) -> Option<DragSession> {
    let point = find_by_uid(points, uid)?;
    Some(DragSession::BoxPointScale {
        uid,
        anchor_x: point.pos.x,
        initial_dx: floored_reference(pointer.x - point.pos.x),
        initial_scale: point.point_scale,
    })
}

/// Startet eine Ganz-Layer-Rotation um den Ankerpunkt.
pub fn begin_rotate_all(points: &[TrackPoint], anchor_uid: u64, pointer: Vec2) -> Option<DragSession> {
    let anchor = find_by_uid(points, anchor_uid)?.pos;
    let delta = pointer - anchor;
    Some(DragSession::RotateAll {
        anchor_uid,
        anchor,
        initial_angle: delta.y.atan2(delta.x),
        snapshot: snapshot_of(points),
    })
}

/// Startet eine Ganz-Layer-Translation.
pub fn begin_translate_all(
    points: &[TrackPoint],
    anchor_uid: u64,
    pointer: Vec2,
) -> Option<DragSession> {
    let anchor = find_by_uid(points, anchor_uid)?.pos;
    Some(DragSession::TranslateAll {
        anchor_uid,
        anchor,
        grab_offset: pointer - anchor,
        snapshot: snapshot_of(points),
    })
}

/// Startet eine Ganz-Layer-Skalierung um den Ankerpunkt.
pub fn begin_scale_all(points: &[TrackPoint], anchor_uid: u64, pointer: Vec2) -> Option<DragSession> {
    let anchor = find_by_uid(points, anchor_uid)?.pos;
    Some(DragSession::ScaleAll {
        anchor_uid,
        anchor,
        initial_dx: floored_reference(pointer.x - anchor.x),
        snapshot: snapshot_of(points),
    })
}

/// Wendet die aktuelle Pointer-Position auf die Punktliste an.
pub fn apply_pointer_move(session: &DragSession, points: &mut [TrackPoint], pointer: Vec2) {
    match session {
        DragSession::Point { uid, grab_offset } => {
            if let Some(point) = find_by_uid_mut(points, *uid) {
                point.pos = pointer - *grab_offset;
            }
        }
        DragSession::BoxPointScale {
            uid,
            anchor_x,
            initial_dx,
            initial_scale,
        } => {
            let factor = damped_scale_factor(pointer.x - anchor_x, *initial_dx);
            if let Some(point) = find_by_uid_mut(points, *uid) {
                point.point_scale = clamp_scale(initial_scale * factor);
            }
        }
        DragSession::RotateAll {
            anchor_uid,
            anchor,
            initial_angle,
            snapshot,
        } => {
            let delta = pointer - *anchor;
            let rotation = delta.y.atan2(delta.x) - initial_angle;
            let (sin, cos) = rotation.sin_cos();
            for snap in snapshot {
                let Some(point) = find_by_uid_mut(points, snap.uid) else {
                    continue;
                };
                if snap.uid == *anchor_uid {
                    // Anker bleibt bitgenau auf seiner Startposition
                    point.pos = snap.pos;
                    continue;
                }
                let rel = snap.pos - *anchor;
                point.pos = *anchor + Vec2::new(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos);
            }
        }
        DragSession::TranslateAll {
            anchor,
            grab_offset,
            snapshot,
            ..
        } => {
            // Delta rein aus Snapshot + aktuellem Pointer: der Anker sitzt
            // exakt auf `pointer - grab_offset`, ohne Drift über die Frames
            let delta = (pointer - *grab_offset) - *anchor;
            for snap in snapshot {
                if let Some(point) = find_by_uid_mut(points, snap.uid) {
                    point.pos = snap.pos + delta;
                }
            }
        }
        DragSession::ScaleAll {
            anchor_uid,
            anchor,
            initial_dx,
            snapshot,
        } => {
            let factor = damped_scale_factor(pointer.x - anchor.x, *initial_dx);
            for snap in snapshot {
                let Some(point) = find_by_uid_mut(points, snap.uid) else {
                    continue;
                };
                if snap.uid == *anchor_uid {
                    point.pos = snap.pos;
                    continue;
                }
                point.pos = *anchor + (snap.pos - *anchor) * factor;
            }
        }
    }
}

/// Stellt beim Abbruch die Drag-Start-Positionen wieder her.
pub fn restore_snapshot(session: &DragSession, points: &mut [TrackPoint]) {
    let snapshot = match session {
        DragSession::RotateAll { snapshot, .. }
        | DragSession::TranslateAll { snapshot, .. }
        | DragSession::ScaleAll { snapshot, .. } => snapshot.as_slice(),
        DragSession::Point { .. } | DragSession::BoxPointScale { .. } => return,
    };
    for snap in snapshot {
        if let Some(point) = find_by_uid_mut(points, snap.uid) {
            point.pos = snap.pos;
        }
    }
}

/// Gedämpfter Skalierungsfaktor aus aktueller und initialer X-Distanz.
fn damped_scale_factor(current_dx: f32, initial_dx: f32) -> f32 {
    1.0 + (current_dx / initial_dx - 1.0) * SCALE_DRAG_DAMPING
}

/// Klemmt die initiale Referenzdistanz vom Betrag her nach unten,
/// damit die Division beim Skalieren nicht explodiert.
fn floored_reference(dx: f32) -> f32 {
    if dx.abs() >= SCALE_DRAG_MIN_REFERENCE {
        dx
    } else if dx < 0.0 {
        -SCALE_DRAG_MIN_REFERENCE
    } else {
        SCALE_DRAG_MIN_REFERENCE
    }
}

fn snapshot_of(points: &[TrackPoint]) -> Vec<PointSnapshot> {
    points
        .iter()
        .map(|p| PointSnapshot {
            uid: p.uid,
            pos: p.pos,
        })
        .collect()
}
