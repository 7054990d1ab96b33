//! Integrationstests für die Drag-Transform-Flows:
//! - Einzelpunkt-Drag mit Grab-Offset
//! - Ganz-Layer-Rotation/-Skalierung/-Translation mit Anker-Invarianz
//! - Sofort-Löschung per Sekundärklick
//! - Abbruch-Semantik

use glam::Vec2;
use spline_layer_editor::{
    AppController, AppIntent, AppState, LayerKind, PointerButton, TrackPoint,
};

/// Baut einen State mit aktivem Spline-Layer und drei Punkten
/// bei (100,100), (200,100), (150,200).
fn state_mit_dreieck() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasResized {
                size: Vec2::new(800.0, 600.0),
            },
        )
        .expect("CanvasResized darf nicht fehlschlagen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerCreated {
                name: "strecke".to_string(),
                kind: LayerKind::Spline,
            },
        )
        .expect("LayerCreated darf nicht fehlschlagen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ActiveLayerChanged {
                name: Some("strecke".to_string()),
            },
        )
        .expect("ActiveLayerChanged darf nicht fehlschlagen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ActivePointsReplaced {
                points: vec![
                    TrackPoint::new(Vec2::new(100.0, 100.0), 0),
                    TrackPoint::new(Vec2::new(200.0, 100.0), 0),
                    TrackPoint::new(Vec2::new(150.0, 200.0), 0),
                ],
            },
        )
        .expect("ActivePointsReplaced darf nicht fehlschlagen");

    (controller, state)
}

fn uid_an(state: &AppState, index: usize) -> u64 {
    state.buffer.points[index].uid
}

fn pos_von(state: &AppState, uid: u64) -> Vec2 {
    state
        .buffer
        .points
        .iter()
        .find(|p| p.uid == uid)
        .expect("Punkt vorhanden")
        .pos
}

fn druecke(
    controller: &mut AppController,
    state: &mut AppState,
    pos: Vec2,
    button: PointerButton,
    modifier: bool,
    target: Option<u64>,
) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                pos,
                button,
                modifier,
                target,
            },
        )
        .expect("PointerPressed darf nicht fehlschlagen");
}

fn bewege(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerMoved { pos })
        .expect("PointerMoved darf nicht fehlschlagen");
}

fn lasse_los(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased darf nicht fehlschlagen");
}

// ─── Einzelpunkt-Drag ────────────────────────────────────────────────────────

#[test]
fn test_punkt_drag_folgt_pointer_mit_grab_offset() {
    let (mut controller, mut state) = state_mit_dreieck();
    let uid = uid_an(&state, 1);

    // Griff 5 Pixel neben dem Punkt: der Punkt darf nicht springen
    druecke(
        &mut controller,
        &mut state,
        Vec2::new(205.0, 103.0),
        PointerButton::Primary,
        false,
        Some(uid),
    );
    assert!(state.editor.drag.is_some(), "Drag-Sitzung muss laufen");

    bewege(&mut controller, &mut state, Vec2::new(255.0, 153.0));
    assert_eq!(pos_von(&state, uid), Vec2::new(250.0, 150.0));

    lasse_los(&mut controller, &mut state);
    assert!(state.editor.drag.is_none(), "Sitzung muss beendet sein");
}

#[test]
fn test_pointer_ohne_treffer_startet_keinen_drag() {
    let (mut controller, mut state) = state_mit_dreieck();

    druecke(
        &mut controller,
        &mut state,
        Vec2::new(500.0, 500.0),
        PointerButton::Primary,
        false,
        None,
    );
    assert!(state.editor.drag.is_none(), "Ohne Ziel darf kein Drag starten");
}

// ─── Anker-Invarianz ─────────────────────────────────────────────────────────

#[test]
fn test_rotation_haelt_anker_ueber_viele_moves_exakt() {
    let (mut controller, mut state) = state_mit_dreieck();
    let anker = uid_an(&state, 0);
    let anker_start = pos_von(&state, anker);

    druecke(
        &mut controller,
        &mut state,
        Vec2::new(130.0, 100.0),
        PointerButton::Primary,
        true,
        Some(anker),
    );

    for pointer in [
        Vec2::new(140.0, 130.0),
        Vec2::new(80.0, 150.0),
        Vec2::new(100.0, 60.0),
        Vec2::new(170.0, 110.0),
    ] {
        bewege(&mut controller, &mut state, pointer);
        assert_eq!(
            pos_von(&state, anker),
            anker_start,
            "Anker muss bitgenau stehen bleiben"
        );
    }
    lasse_los(&mut controller, &mut state);
    assert_eq!(pos_von(&state, anker), anker_start);
}

#[test]
fn test_skalierung_haelt_anker_und_daempft_mit_zehn_prozent() {
    let (mut controller, mut state) = state_mit_dreieck();
    let anker = uid_an(&state, 0);
    let p2 = uid_an(&state, 1);

    // Start bei dx=100 zum Anker, Ziehen auf dx=200 → Faktor 1.1
    druecke(
        &mut controller,
        &mut state,
        Vec2::new(200.0, 100.0),
        PointerButton::Secondary,
        true,
        Some(anker),
    );
    bewege(&mut controller, &mut state, Vec2::new(300.0, 100.0));

    assert_eq!(pos_von(&state, anker), Vec2::new(100.0, 100.0));
    let skaliert = pos_von(&state, p2);
    assert!((skaliert.x - 210.0).abs() < 1e-3, "erwartet 210, war {}", skaliert.x);
    assert!((skaliert.y - 100.0).abs() < 1e-3);
}

#[test]
fn test_translation_pinnt_anker_unter_den_pointer() {
    let (mut controller, mut state) = state_mit_dreieck();
    let anker = uid_an(&state, 0);
    let p3 = uid_an(&state, 2);

    let start_pointer = Vec2::new(103.0, 104.0);
    druecke(
        &mut controller,
        &mut state,
        start_pointer,
        PointerButton::Middle,
        true,
        Some(anker),
    );
    bewege(&mut controller, &mut state, Vec2::new(153.0, 154.0));
    assert_eq!(pos_von(&state, anker), Vec2::new(150.0, 150.0));
    assert_eq!(pos_von(&state, p3), Vec2::new(200.0, 250.0));

    // Zurück zum Start: bitgenau die Ausgangslage
    bewege(&mut controller, &mut state, start_pointer);
    assert_eq!(pos_von(&state, anker), Vec2::new(100.0, 100.0));
    assert_eq!(pos_von(&state, p3), Vec2::new(150.0, 200.0));
}

// ─── Persistenz beim Loslassen ───────────────────────────────────────────────

#[test]
fn test_skalierung_persistiert_beim_loslassen_genau_einmal() {
    let (mut controller, mut state) = state_mit_dreieck();
    let anker = uid_an(&state, 0);
    let store_vorher = state.layers.get("strecke").unwrap().points_store.clone();

    druecke(
        &mut controller,
        &mut state,
        Vec2::new(200.0, 100.0),
        PointerButton::Secondary,
        true,
        Some(anker),
    );
    bewege(&mut controller, &mut state, Vec2::new(320.0, 100.0));
    // Während des Drags bleibt der Store unangetastet
    assert_eq!(
        state.layers.get("strecke").unwrap().points_store,
        store_vorher
    );

    lasse_los(&mut controller, &mut state);
    let store_nachher = state.layers.get("strecke").unwrap().points_store.clone();
    assert_ne!(store_nachher, store_vorher, "Loslassen muss persistieren");
}

#[test]
fn test_punkt_drag_persistiert_nicht_beim_loslassen() {
    let (mut controller, mut state) = state_mit_dreieck();
    let uid = uid_an(&state, 1);
    let store_vorher = state.layers.get("strecke").unwrap().points_store.clone();

    druecke(
        &mut controller,
        &mut state,
        Vec2::new(200.0, 100.0),
        PointerButton::Primary,
        false,
        Some(uid),
    );
    bewege(&mut controller, &mut state, Vec2::new(260.0, 140.0));
    lasse_los(&mut controller, &mut state);

    assert_eq!(
        state.layers.get("strecke").unwrap().points_store,
        store_vorher,
        "Einzelpunkt-Drag schreibt erst beim nächsten expliziten Commit"
    );
}

// ─── Sofort-Löschung ─────────────────────────────────────────────────────────

#[test]
fn test_sekundaerklick_loescht_nur_innere_punkte() {
    let (mut controller, mut state) = state_mit_dreieck();
    let erster = uid_an(&state, 0);
    let mittlerer = uid_an(&state, 1);

    // Endpunkt: bleibt stehen
    druecke(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        PointerButton::Secondary,
        false,
        Some(erster),
    );
    assert_eq!(state.buffer.points.len(), 3);

    // Innerer Punkt: wird sofort gelöscht, keine Drag-Sitzung
    druecke(
        &mut controller,
        &mut state,
        Vec2::new(200.0, 100.0),
        PointerButton::Secondary,
        false,
        Some(mittlerer),
    );
    assert_eq!(state.buffer.points.len(), 2);
    assert!(state.editor.drag.is_none());
    assert!(state.buffer.points.iter().all(|p| p.uid != mittlerer));
}

// ─── Abbruch ─────────────────────────────────────────────────────────────────

#[test]
fn test_abbruch_stellt_positionen_wieder_her_und_leert_die_sitzung() {
    let (mut controller, mut state) = state_mit_dreieck();
    let anker = uid_an(&state, 0);
    let vorher: Vec<Vec2> = state.buffer.points.iter().map(|p| p.pos).collect();

    druecke(
        &mut controller,
        &mut state,
        Vec2::new(130.0, 100.0),
        PointerButton::Primary,
        true,
        Some(anker),
    );
    bewege(&mut controller, &mut state, Vec2::new(60.0, 180.0));

    controller
        .handle_intent(&mut state, AppIntent::PointerCancelled)
        .expect("PointerCancelled darf nicht fehlschlagen");

    let nachher: Vec<Vec2> = state.buffer.points.iter().map(|p| p.pos).collect();
    assert_eq!(nachher, vorher, "Abbruch muss den Drag-Start-Zustand liefern");
    assert!(state.editor.drag.is_none(), "Sitzungsdaten müssen geleert sein");
}

#[test]
fn test_zweiter_drag_start_waehrend_sitzung_wird_ignoriert() {
    let (mut controller, mut state) = state_mit_dreieck();
    let uid = uid_an(&state, 1);
    let anker = uid_an(&state, 0);

    druecke(
        &mut controller,
        &mut state,
        Vec2::new(200.0, 100.0),
        PointerButton::Primary,
        false,
        Some(uid),
    );
    let sitzung = state.editor.drag.clone();

    druecke(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        PointerButton::Primary,
        true,
        Some(anker),
    );
    assert_eq!(
        state.editor.drag, sitzung,
        "Laufende Sitzung darf nicht ersetzt werden"
    );
}

// ─── Hervorhebung ────────────────────────────────────────────────────────────

#[test]
fn test_hover_setzt_und_loescht_hervorhebung() {
    let (mut controller, mut state) = state_mit_dreieck();
    let uid = uid_an(&state, 1);

    bewege(&mut controller, &mut state, Vec2::new(203.0, 101.0));
    assert_eq!(state.editor.highlighted, Some(uid));
    assert!(pos_von(&state, uid) == Vec2::new(200.0, 100.0));
    assert!(state.buffer.points.iter().find(|p| p.uid == uid).unwrap().highlighted);

    bewege(&mut controller, &mut state, Vec2::new(500.0, 500.0));
    assert_eq!(state.editor.highlighted, None);
    assert!(state.buffer.points.iter().all(|p| !p.highlighted));
}
