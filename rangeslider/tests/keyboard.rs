use std::sync::{Arc, Mutex};

use rangeslider::{
    Event, EventResult, Key, KeyAction, ListenerRegistry, Modifiers, Slider, SliderConfig,
};

fn focused(config: SliderConfig) -> Slider {
    let mut slider = Slider::new(config, &ListenerRegistry::new()).unwrap();
    assert!(slider.focus());
    slider
}

fn press(slider: &mut Slider, key: Key) -> EventResult {
    slider.on_key(key, Modifiers::new())
}

#[test]
fn test_arrows_step_value() {
    let mut slider = focused(SliderConfig::new().range(0.0, 10.0, 2.0).default_value(4.0));

    assert_eq!(press(&mut slider, Key::Right), EventResult::Consumed);
    assert_eq!(slider.value(), 6.0);
    press(&mut slider, Key::Up);
    assert_eq!(slider.value(), 8.0);
    press(&mut slider, Key::Left);
    assert_eq!(slider.value(), 6.0);
    press(&mut slider, Key::Down);
    assert_eq!(slider.value(), 4.0);
}

#[test]
fn test_arrows_stop_at_bounds() {
    let mut slider = focused(SliderConfig::new().range(0.0, 10.0, 2.0).default_value(10.0));

    assert_eq!(press(&mut slider, Key::Right), EventResult::Consumed);
    assert_eq!(slider.value(), 10.0);

    slider.set_value(0.0);
    assert_eq!(press(&mut slider, Key::Left), EventResult::Consumed);
    assert_eq!(slider.value(), 0.0);
}

#[test]
fn test_home_and_end() {
    let mut slider = focused(SliderConfig::new().range(-50.0, 50.0, 3.0).default_value(7.0));

    press(&mut slider, Key::End);
    assert_eq!(slider.value(), 50.0);
    press(&mut slider, Key::Home);
    assert_eq!(slider.value(), -50.0);
}

#[test]
fn test_unbound_keys_are_ignored() {
    let calls = Arc::new(Mutex::new(0));
    let sink = calls.clone();
    let mut slider = focused(
        SliderConfig::new()
            .default_value(30.0)
            .on_value_change(move |_| *sink.lock().unwrap() += 1),
    );

    for key in [Key::Char('x'), Key::Enter, Key::Tab, Key::PageUp, Key::Other] {
        assert_eq!(press(&mut slider, key), EventResult::Ignored);
    }
    assert_eq!(slider.value(), 30.0);
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_unfocused_slider_ignores_keys() {
    let mut slider = Slider::new(SliderConfig::new(), &ListenerRegistry::new()).unwrap();
    assert_eq!(press(&mut slider, Key::End), EventResult::Ignored);
    assert_eq!(slider.value(), 0.0);

    slider.focus();
    slider.blur();
    assert_eq!(press(&mut slider, Key::End), EventResult::Ignored);
}

#[test]
fn test_disabled_slider_ignores_keys_and_focus() {
    let mut slider = Slider::new(
        SliderConfig::new().default_value(40.0).disabled(true),
        &ListenerRegistry::new(),
    )
    .unwrap();

    assert!(!slider.focus());
    assert!(!slider.is_focusable());
    assert_eq!(press(&mut slider, Key::Home), EventResult::Ignored);
    assert_eq!(slider.value(), 40.0);
}

#[test]
fn test_disabling_drops_focus() {
    let mut slider = focused(SliderConfig::new());
    slider.set_disabled(true);
    assert!(!slider.is_focused());
}

#[test]
fn test_controlled_key_reports_without_mutating() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let mut slider = focused(
        SliderConfig::new()
            .value(10.0)
            .on_value_change(move |v| sink.lock().unwrap().push(v)),
    );

    press(&mut slider, Key::Right);
    press(&mut slider, Key::Right);
    assert_eq!(*calls.lock().unwrap(), vec![11.0, 11.0]);
    assert_eq!(slider.value(), 10.0);
}

#[test]
fn test_key_event_routing() {
    let mut slider = focused(SliderConfig::new().default_value(5.0));
    let event = Event::Key {
        key: Key::Up,
        modifiers: Modifiers::new(),
    };
    assert!(slider.handle_event(&event).is_handled());
    assert_eq!(slider.value(), 6.0);
}

#[test]
fn test_key_action_mapping() {
    assert_eq!(KeyAction::from_key(Key::Left), Some(KeyAction::Decrement));
    assert_eq!(KeyAction::from_key(Key::Down), Some(KeyAction::Decrement));
    assert_eq!(KeyAction::from_key(Key::Right), Some(KeyAction::Increment));
    assert_eq!(KeyAction::from_key(Key::Up), Some(KeyAction::Increment));
    assert_eq!(KeyAction::from_key(Key::Home), Some(KeyAction::ToMin));
    assert_eq!(KeyAction::from_key(Key::End), Some(KeyAction::ToMax));
}
