//! End-to-end tests: controller, simulated media, notifications and replay


use gesture_media_control::{
    app::GestureController,
    config::{Config, FistPolicy, TwoFistAction},
    landmarks::{DetectionSnapshot, Hand, HandObservation, LandmarkPoint},
    manual::ManualTrigger,
    media::{CollectingNotifier, SimulatedMedia},
    source::{load_recording, JsonLinesSource, ReplaySource},
    Error,
};
use std::io::Cursor;
use test_helpers::{assert_close, fist, frame, open_hand, pinch, px};

type Controller = GestureController<SimulatedMedia, CollectingNotifier>;

fn controller(config: &Config, media: SimulatedMedia) -> Controller {
    GestureController::new(config, Some(media), CollectingNotifier::default())
}

fn media_at(current_time: f64, volume: f64) -> SimulatedMedia {
    SimulatedMedia {
        current_time,
        volume,
        ..SimulatedMedia::new(120.0)
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("gesture_media_control_{}_{}", std::process::id(), name))
}

#[test]
fn test_two_fists_play_once() {
    let mut controller = controller(&Config::default(), SimulatedMedia::default());
    let both = vec![fist(Hand::Left), fist(Hand::Right)];

    controller.on_frame(&frame(10_000, both.clone()));
    controller.on_frame(&frame(10_033, both));

    let media = controller.media().unwrap();
    assert_eq!(media.play_calls, 1);
    assert_eq!(media.pause_calls, 0);
    assert!(!media.paused);
    assert_eq!(
        controller.notifier().messages().collect::<Vec<_>>(),
        vec!["Both Fists → Play"]
    );
}

#[test]
fn test_two_fists_toggle_back_after_cooldown() {
    let mut controller = controller(&Config::default(), SimulatedMedia::default());
    let both = vec![fist(Hand::Left), fist(Hand::Right)];

    controller.on_frame(&frame(10_000, both.clone()));
    controller.on_frame(&frame(11_300, both));

    let media = controller.media().unwrap();
    assert_eq!((media.play_calls, media.pause_calls), (1, 1));
    assert!(media.paused);
}

#[test]
fn test_two_fists_fullscreen_binding() {
    let mut config = Config::default();
    config.gestures.two_fist_action = TwoFistAction::ToggleFullscreen;
    let mut controller = controller(&config, SimulatedMedia::default());

    controller.on_frame(&frame(10_000, vec![fist(Hand::Left), fist(Hand::Right)]));

    let media = controller.media().unwrap();
    assert!(media.fullscreen);
    assert!(media.paused);
    assert_eq!(
        controller.notifier().messages().collect::<Vec<_>>(),
        vec!["Fist → Fullscreen"]
    );
}

#[test]
fn test_open_hands_play_and_pause() {
    let mut controller = controller(&Config::default(), SimulatedMedia::default());

    controller.on_frame(&frame(10_000, vec![open_hand(Hand::Left)]));
    assert!(!controller.media().unwrap().paused);

    controller.on_frame(&frame(11_500, vec![open_hand(Hand::Right)]));
    assert!(controller.media().unwrap().paused);

    assert_eq!(
        controller.notifier().messages().collect::<Vec<_>>(),
        vec!["Left Open → Play", "Right Open → Pause"]
    );
}

#[test]
fn test_volume_drag_end_to_end() {
    let mut controller = controller(&Config::default(), media_at(30.0, 0.5));

    controller.on_frame(&frame(10_000, vec![pinch(Hand::Right, 0.5, true)]));
    controller.on_frame(&frame(10_200, vec![pinch(Hand::Right, 0.5 + px(10.0), true)]));
    assert_close(controller.media().unwrap().volume, 0.5);

    controller.on_frame(&frame(10_400, vec![pinch(Hand::Right, 0.5 + px(50.0), true)]));
    assert_close(controller.media().unwrap().volume, 0.6);

    // Offsets are measured from the anchor, not the previous frame
    controller.on_frame(&frame(10_450, vec![pinch(Hand::Right, 0.5 + px(50.0), true)]));
    assert_close(controller.media().unwrap().volume, 0.6);

    controller.on_frame(&frame(10_500, vec![pinch(Hand::Right, 0.5 - px(25.0), true)]));
    assert_close(controller.media().unwrap().volume, 0.45);

    assert_eq!(controller.notifier().messages().last(), Some("Volume 45%"));
}

#[test]
fn test_scrub_and_double_tap_end_to_end() {
    let mut controller = controller(&Config::default(), media_at(30.0, 0.5));

    controller.on_frame(&frame(10_000, vec![pinch(Hand::Left, 0.5, true)]));
    controller.on_frame(&frame(10_400, vec![pinch(Hand::Left, 0.5 + px(100.0), true)]));
    assert_close(controller.media().unwrap().current_time, 38.0);
    controller.on_frame(&frame(10_500, vec![pinch(Hand::Left, 0.5, false)]));

    for start in [11_000, 11_200] {
        controller.on_frame(&frame(start, vec![pinch(Hand::Right, 0.5, true)]));
        controller.on_frame(&frame(start + 100, vec![pinch(Hand::Right, 0.5, false)]));
    }
    assert_close(controller.media().unwrap().current_time, 48.0);
    assert_eq!(controller.notifier().messages().last(), Some("+10 Seconds"));
}

#[test]
fn test_no_media_bound_is_silent() {
    let mut controller: Controller =
        GestureController::new(&Config::default(), None, CollectingNotifier::default());

    let commands = controller.on_frame(&frame(10_000, vec![fist(Hand::Left), fist(Hand::Right)]));
    assert!(commands.is_empty());
    assert!(controller.notifier().shown.is_empty());

    // Binding later starts from an elapsed cooldown
    controller.attach_media(SimulatedMedia::default());
    let commands = controller.on_frame(&frame(10_033, vec![fist(Hand::Left), fist(Hand::Right)]));
    assert_eq!(commands.len(), 1);
}

#[test]
fn test_disable_mid_drag_drops_anchor() {
    let mut controller = controller(&Config::default(), media_at(30.0, 0.5));

    controller.on_frame(&frame(10_000, vec![pinch(Hand::Right, 0.5, true)]));
    controller.on_frame(&frame(10_400, vec![pinch(Hand::Right, 0.5 + px(50.0), true)]));
    assert_close(controller.media().unwrap().volume, 0.6);

    controller.toggle_gestures(false);
    assert!(!controller.is_enabled());
    assert!(!controller.engine().state().any_pinch_active());

    let commands = controller.on_frame(&frame(10_500, vec![pinch(Hand::Right, 0.5 + px(100.0), true)]));
    assert!(commands.is_empty());

    controller.toggle_gestures(true);
    // Same position re-engages instead of resuming against the old anchor
    let commands = controller.on_frame(&frame(10_600, vec![pinch(Hand::Right, 0.5 + px(100.0), true)]));
    assert!(commands.is_empty());
    assert_close(controller.media().unwrap().volume, 0.6);

    let messages: Vec<_> = controller.notifier().messages().collect();
    assert!(messages.contains(&"Gestures Disabled"));
    assert!(messages.contains(&"Gestures Enabled"));
}

#[test]
fn test_disabled_at_start_from_config() {
    let mut config = Config::default();
    config.controller.enabled = false;
    let mut controller = controller(&config, SimulatedMedia::default());

    assert!(!controller.is_enabled());
    assert!(controller.on_frame(&frame(10_000, vec![open_hand(Hand::Left)])).is_empty());
    assert!(controller.trigger_manual(ManualTrigger::TogglePlayback).is_none());
}

#[test]
fn test_fist_hold_policy_keeps_pinch() {
    let mut config = Config::default();
    config.gestures.fist_policy = FistPolicy::Hold;
    let mut controller = controller(&config, media_at(30.0, 0.5));

    controller.on_frame(&frame(10_000, vec![pinch(Hand::Right, 0.5, true)]));
    controller.on_frame(&frame(10_100, vec![fist(Hand::Right)]));
    assert!(controller.engine().state().tracker(Hand::Right).is_active());
}

#[test]
fn test_malformed_hand_is_ignored() {
    let mut controller = controller(&Config::default(), SimulatedMedia::default());

    let short = HandObservation::new(vec![LandmarkPoint::new(0.5, 0.5, 0.0); 20], Hand::Left);
    let mut nan = fist(Hand::Right);
    nan.landmarks[0].x = f64::NAN;

    // Two fists, one of them broken: not a two-fist toggle
    let commands = controller.on_frame(&frame(10_000, vec![fist(Hand::Left), nan]));
    assert!(commands.is_empty());

    // The broken hand leaves a single valid open hand
    let commands = controller.on_frame(&frame(10_100, vec![short, open_hand(Hand::Left)]));
    assert_eq!(commands.len(), 1);
    assert!(!controller.media().unwrap().paused);
}

#[test]
fn test_manual_triggers() {
    let mut controller = controller(&Config::default(), media_at(5.0, 0.5));

    for key in ["ArrowLeft", "ArrowUp", " ", "f"] {
        let trigger = ManualTrigger::from_key(key).unwrap();
        assert!(controller.trigger_manual(trigger).is_some());
    }

    let media = controller.media().unwrap();
    assert_eq!(media.current_time, 0.0);
    assert_close(media.volume, 0.6);
    assert!(!media.paused);
    assert!(media.fullscreen);
    assert_eq!(
        controller.notifier().messages().collect::<Vec<_>>(),
        vec!["-10 Seconds", "Volume 60%", "Play", "Fullscreen"]
    );
}

#[test]
fn test_replay_source_run() {
    let mut controller = controller(&Config::default(), SimulatedMedia::default());
    let mut source = ReplaySource::new(vec![
        frame(10_000, vec![open_hand(Hand::Left)]),
        frame(10_033, vec![open_hand(Hand::Left)]),
        frame(10_066, vec![]),
        frame(11_300, vec![open_hand(Hand::Right)]),
    ]);

    let summary = controller.run(&mut source);
    assert_eq!(summary.frames, 4);
    assert_eq!(summary.commands, 2);
    assert_eq!(source.remaining(), 0);
    assert!(controller.media().unwrap().paused);
}

#[test]
fn test_json_lines_replay() {
    let frames = vec![
        frame(10_000, vec![fist(Hand::Left), fist(Hand::Right)]),
        frame(10_033, vec![fist(Hand::Left), fist(Hand::Right)]),
        frame(10_066, vec![]),
    ];
    let text: String = frames
        .iter()
        .map(|f| serde_json::to_string(f).unwrap() + "\n")
        .collect();

    let mut controller = controller(&Config::default(), SimulatedMedia::default());
    let mut source = JsonLinesSource::new(Cursor::new(text));
    let summary = controller.run(&mut source);

    assert_eq!(summary.frames, 3);
    assert_eq!(summary.commands, 1);
    assert!(source.error().is_none());
    assert_eq!(controller.media().unwrap().play_calls, 1);
}

#[test]
fn test_load_recording_from_file() {
    let path = temp_path("recording.jsonl");
    let frames = vec![
        frame(0, vec![pinch(Hand::Right, 0.4, true)]),
        frame(33, vec![]),
    ];
    let text: String = frames
        .iter()
        .map(|f| serde_json::to_string(f).unwrap() + "\n")
        .collect();
    std::fs::write(&path, text).unwrap();

    let loaded = load_recording(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].snapshot.hands[0].handedness, Hand::Left);
    assert_eq!(loaded[1].snapshot, DetectionSnapshot::empty());
}

#[test]
fn test_load_recording_reports_bad_line() {
    let path = temp_path("broken.jsonl");
    std::fs::write(&path, "{\"timestamp_ms\": 0, \"snapshot\": {}}\n{\"timestamp_ms\": \"soon\"}\n").unwrap();

    let result = load_recording(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(Error::Recording { line: 2, .. })));
}

#[test]
fn test_config_file_round_trip() {
    let path = temp_path("config.yaml");
    let mut config = Config::default();
    config.gestures.discrete_cooldown_ms = 1000;
    config.gestures.two_fist_action = TwoFistAction::ToggleFullscreen;
    config.surface.width = 640;
    config.surface.height = 480;

    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = Config::from_file(temp_path("does_not_exist.yaml"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_manual_skip_uses_configured_step() {
    let mut config = Config::default();
    config.gestures.coarse_seek_seconds = 5.0;
    let mut controller = controller(&config, media_at(30.0, 0.5));

    controller.trigger_manual(ManualTrigger::SkipForward);
    assert_eq!(controller.media().unwrap().current_time, 35.0);

    controller.trigger_manual(ManualTrigger::SkipBack);
    controller.trigger_manual(ManualTrigger::SkipBack);
    assert_eq!(controller.media().unwrap().current_time, 25.0);
    assert_eq!(controller.notifier().messages().last(), Some("-5 Seconds"));
}

#[test]
fn test_same_frame_scrub_and_skip_both_land() {
    let mut controller = controller(&Config::default(), media_at(30.0, 0.5));
    let right_closed = pinch(Hand::Right, 0.5, true);
    let right_open = pinch(Hand::Right, 0.5, false);

    controller.on_frame(&frame(10_000, vec![pinch(Hand::Left, 0.5, true), right_closed.clone()]));
    controller.on_frame(&frame(10_100, vec![pinch(Hand::Left, 0.5, true), right_open.clone()]));
    controller.on_frame(&frame(10_200, vec![pinch(Hand::Left, 0.5, true), right_closed]));
    // Left drag passes its hold gate as the right hand completes a double tap
    controller.on_frame(&frame(10_400, vec![pinch(Hand::Left, 0.5 + px(100.0), true), right_open]));

    assert_close(controller.media().unwrap().current_time, 48.0);
    assert_eq!(controller.notifier().messages().last(), Some("+10 Seconds"));
}
