// Host-side tests for the expression detector state machine.

use neuro_core::*;

fn ready() -> DetectorState {
    let mut d = DetectorState::default();
    for asset in ModelAsset::LOAD_ORDER {
        d.model_loaded(asset).unwrap();
    }
    d
}

fn detecting() -> DetectorState {
    let mut d = ready();
    d.stream_started().unwrap();
    d.playing().unwrap();
    d
}

#[test]
fn loads_models_in_order() {
    let mut d = DetectorState::default();
    assert_eq!(d.phase(), DetectorPhase::LoadingModels);
    assert_eq!(d.next_model(), Some(ModelAsset::TinyFaceDetector));
    assert!(d.model_loaded(ModelAsset::FaceExpression).is_err());
    for (i, asset) in ModelAsset::LOAD_ORDER.iter().enumerate() {
        let phase = d.model_loaded(*asset).unwrap();
        assert_eq!(d.models_loaded(), i + 1);
        if i < 3 {
            assert_eq!(phase, DetectorPhase::LoadingModels);
        } else {
            assert_eq!(phase, DetectorPhase::ModelsReady);
        }
    }
    assert_eq!(d.next_model(), None);
}

#[test]
fn model_failure_is_terminal() {
    let mut d = DetectorState::default();
    d.model_loaded(ModelAsset::TinyFaceDetector).unwrap();
    let err = d.model_failed(ModelAsset::FaceLandmark68, "404");
    assert_eq!(
        err.to_string(),
        "failed to load model face_landmark_68: 404"
    );
    assert_eq!(d.phase(), DetectorPhase::Inert(DetectorFault::ModelLoad));
    assert!(d.is_inert());
    assert!(d.stream_started().is_err());
    assert!(!d.begin_cycle());
}

#[test]
fn camera_denial_is_terminal() {
    let mut d = ready();
    let err = d.camera_failed("NotAllowedError");
    assert!(matches!(err, DetectorError::CameraAccess(_)));
    assert_eq!(d.phase(), DetectorPhase::Inert(DetectorFault::CameraAccess));
    assert!(d.playing().is_err());
    assert!(!d.begin_cycle());
}

#[test]
fn stream_requires_models() {
    let mut d = DetectorState::default();
    assert!(matches!(
        d.stream_started(),
        Err(DetectorError::InvalidTransition { .. })
    ));
}

#[test]
fn playing_is_idempotent() {
    let mut d = detecting();
    assert!(d.playing().is_ok());
    assert_eq!(d.phase(), DetectorPhase::Detecting);
}

#[test]
fn cycles_are_single_flight() {
    let mut d = detecting();
    assert!(d.begin_cycle());
    assert!(d.cycle_in_flight());
    assert!(!d.begin_cycle());
    assert_eq!(d.finish_cycle(None), None);
    assert!(!d.cycle_in_flight());
    assert!(d.begin_cycle());
}

#[test]
fn first_face_dominant_expression_wins() {
    let mut d = detecting();
    let faces = [
        ExpressionScores::from_pairs([(Emotion::Happy, 0.9), (Emotion::Neutral, 0.1)]),
        ExpressionScores::from_pairs([(Emotion::Angry, 0.99)]),
    ];
    assert!(d.begin_cycle());
    assert_eq!(d.finish_cycle(Some(&faces[..])), Some(Emotion::Happy));
}

#[test]
fn no_face_reports_nothing() {
    let mut d = detecting();
    assert!(d.begin_cycle());
    assert_eq!(d.finish_cycle(Some(&[] as &[ExpressionScores])), None);
}

#[test]
fn ties_go_to_later_expression() {
    let s = ExpressionScores::from_pairs([(Emotion::Sad, 0.5), (Emotion::Surprised, 0.5)]);
    assert_eq!(s.dominant(), Emotion::Surprised);
    assert_eq!(ExpressionScores::default().dominant(), Emotion::Surprised);
}

#[test]
fn non_finite_scores_ignored() {
    let s = ExpressionScores::from_pairs([(Emotion::Fearful, f32::NAN), (Emotion::Neutral, 0.2)]);
    assert_eq!(s.get(Emotion::Fearful), 0.0);
    assert_eq!(s.dominant(), Emotion::Neutral);
}

#[test]
fn default_config() {
    let c = DetectorConfig::default();
    assert_eq!(c.model_url, "/models");
    assert_eq!(c.interval_ms, 100);
    assert_eq!((c.video_width, c.video_height), (720, 560));
}
