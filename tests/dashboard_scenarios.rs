// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios through the public store, editor and gesture APIs.

use powerswitch::application::port::{SimulatedDevice, SwitchCommand};
use powerswitch::application::{DeviceSync, EditorSession, SwitchStore};
use powerswitch::domain::{
    ColorTheme, GestureConfig, GesturePhase, GestureRecognizer, Icon, Intensity, Intent, Switch,
    SwitchId,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const WIDTH: f32 = 240.0;

fn id(raw: u32) -> SwitchId {
    SwitchId::new(raw)
}

/// Feeds one interaction and routes intents the way the dashboard does.
fn drive(
    store: &mut SwitchStore,
    recognizer: &mut GestureRecognizer,
    switch: SwitchId,
    steps: &[Step],
) -> Vec<Intent> {
    let t0 = Instant::now();
    let mut ticket = None;
    let mut intents = Vec::new();

    for step in steps {
        let intent = match *step {
            Step::Press(x) => {
                let base = store.get(switch).map(|s| s.intensity).unwrap_or_default();
                ticket = recognizer.press(x, t0, base);
                None
            }
            Step::Hold => ticket.and_then(|t| recognizer.hold_elapsed(t)),
            Step::Move(x) => recognizer.moved(x, WIDTH),
            Step::Release(ms) => recognizer.release(t0 + Duration::from_millis(ms)),
        };
        if let Some(intent) = intent {
            store.apply_intent(switch, intent);
            intents.push(intent);
        }
    }
    intents
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Press(f32),
    Hold,
    Move(f32),
    Release(u64),
}

#[test]
fn tap_toggles_and_hold_drag_dims() {
    let mut store = SwitchStore::default();
    let mut recognizer = GestureRecognizer::new(GestureConfig::default());

    let intents = drive(
        &mut store,
        &mut recognizer,
        id(1),
        &[Step::Press(100.0), Step::Move(104.0), Step::Release(200)],
    );
    assert_eq!(intents, vec![Intent::Tap]);
    assert_eq!(store.get(id(1)).map(|s| s.is_on), Some(true));

    let intents = drive(
        &mut store,
        &mut recognizer,
        id(1),
        &[
            Step::Press(120.0),
            Step::Hold,
            Step::Move(60.0),
            Step::Release(1200),
        ],
    );
    // dx = -60 over 240px is -25 points from 80
    assert_eq!(
        intents,
        vec![
            Intent::IntensityDragStart,
            Intent::IntensityDragUpdate(Intensity::new(55)),
            Intent::IntensityDragEnd(Intensity::new(55)),
        ]
    );
    let switch = store.get(id(1)).expect("seeded");
    assert!(switch.is_on);
    assert_eq!(switch.intensity.value(), 55);
    assert_eq!(recognizer.phase(), GesturePhase::Idle);
}

#[test]
fn moved_press_does_nothing() {
    let mut store = SwitchStore::default();
    let mut recognizer = GestureRecognizer::default();
    let intents = drive(
        &mut store,
        &mut recognizer,
        id(4),
        &[Step::Press(100.0), Step::Move(110.0), Step::Release(200)],
    );
    assert!(intents.is_empty());
    assert_eq!(store.revision(), 0);
}

#[test]
fn hold_in_place_asks_for_detail_without_writing() {
    let mut store = SwitchStore::default();
    let mut recognizer = GestureRecognizer::default();
    let intents = drive(
        &mut store,
        &mut recognizer,
        id(3),
        &[Step::Press(100.0), Step::Hold, Step::Move(103.0), Step::Release(900)],
    );
    assert_eq!(
        intents,
        vec![Intent::IntensityDragStart, Intent::LongPressOpenDetail]
    );
    assert_eq!(store.revision(), 0);
}

#[test]
fn power_and_intensity_scenario() {
    let mut store = SwitchStore::default();
    store.toggle(id(1));
    let switch = store.get(id(1)).expect("seeded");
    assert!(switch.is_on);
    assert_eq!(switch.intensity.value(), 80);

    store.set_intensity(id(1), 150);
    assert_eq!(store.get(id(1)).map(|s| s.intensity), Some(Intensity::MAX));
    store.set_intensity(id(1), -10);
    assert_eq!(store.get(id(1)).map(|s| s.intensity), Some(Intensity::MIN));

    let before = store.snapshot();
    assert!(!store.toggle(id(999)));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn editor_buffers_appearance_but_writes_intensity_through() {
    let mut store = SwitchStore::seeded(vec![Switch::new(
        id(2),
        "Fog",
        Icon::Cloud,
        ColorTheme::Blue,
        Intensity::new(60),
    )]);

    let mut editor = EditorSession::open(&store, id(2)).expect("seeded");
    editor.set_name("Fog Lights");
    editor.change_intensity(&mut store, 40);

    let live = store.get(id(2)).expect("seeded");
    assert_eq!(live.intensity.value(), 40);
    assert_eq!(live.name, "Fog");

    assert!(editor.close(&mut store, true));
    let saved = store.get(id(2)).expect("seeded");
    assert_eq!(saved.intensity.value(), 40);
    assert_eq!(saved.name, "Fog Lights");
}

#[test]
fn observers_see_every_applied_change() {
    let mut store = SwitchStore::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |change, _| sink.borrow_mut().push(change.id));

    store.toggle(id(5));
    store.set_power(id(6), true);
    store.toggle(id(77));

    assert_eq!(*seen.borrow(), vec![id(5), id(6)]);
}

#[test]
fn simulated_device_receives_commands() {
    let mut store = SwitchStore::default();
    let sync = DeviceSync::attach(&mut store, Box::new(SimulatedDevice::new()));
    store.toggle(id(2));
    assert_eq!(sync.poll(&mut store), 0);
    assert_eq!(store.get(id(2)).map(SwitchCommand::from).map(|c| c.is_on), Some(true));
}
