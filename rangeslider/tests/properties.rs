use proptest::prelude::*;

use rangeslider::{Key, ListenerRegistry, Modifiers, Range, Slider, SliderConfig, TrackBounds, value_at};

/// Valid ranges with a step anywhere from tiny to larger than the span.
fn arb_range() -> impl Strategy<Value = Range> {
    (-1000.0f64..1000.0, 0.5f64..500.0, 0.01f64..1.5).prop_map(|(min, span, step_ratio)| {
        Range::new(min, min + span, span * step_ratio).unwrap()
    })
}

fn arb_track() -> impl Strategy<Value = TrackBounds> {
    (-200.0f64..200.0, 1.0f64..400.0).prop_map(|(left, width)| TrackBounds::new(left, width))
}

proptest! {
    #[test]
    fn value_inside_track_is_in_range_and_on_grid(
        range in arb_range(),
        track in arb_track(),
        fraction in 0.0f64..=1.0,
    ) {
        let x = track.left + fraction * track.width;
        let value = value_at(x, track, &range);

        prop_assert!(value >= range.min() && value <= range.max());
        prop_assert!(range.is_allowed(value), "{value} not allowed in {range:?}");
    }

    #[test]
    fn pointer_left_of_track_yields_min(
        range in arb_range(),
        track in arb_track(),
        overshoot in 0.001f64..1000.0,
    ) {
        prop_assert_eq!(value_at(track.left - overshoot, track, &range), range.min());
    }

    #[test]
    fn pointer_right_of_track_yields_max(
        range in arb_range(),
        track in arb_track(),
        overshoot in 0.001f64..1000.0,
    ) {
        let x = track.left + track.width + overshoot;
        prop_assert_eq!(value_at(x, track, &range), range.max());
    }

    #[test]
    fn snap_is_idempotent(range in arb_range(), raw in -5000.0f64..5000.0) {
        let once = range.snap(raw);
        prop_assert_eq!(range.snap(once), once);
    }

    #[test]
    fn home_and_end_always_reach_bounds(range in arb_range(), start in -5000.0f64..5000.0) {
        let config = SliderConfig::new()
            .range(range.min(), range.max(), range.step())
            .default_value(start);
        let mut slider = Slider::new(config, &ListenerRegistry::new()).unwrap();
        slider.focus();

        slider.on_key(Key::End, Modifiers::new());
        prop_assert_eq!(slider.value(), range.max());
        slider.on_key(Key::Home, Modifiers::new());
        prop_assert_eq!(slider.value(), range.min());
    }

    #[test]
    fn keyboard_keeps_value_on_grid(
        range in arb_range(),
        keys in prop::collection::vec(
            prop::sample::select(vec![Key::Left, Key::Right, Key::Up, Key::Down]),
            1..40,
        ),
    ) {
        let config = SliderConfig::new().range(range.min(), range.max(), range.step());
        let mut slider = Slider::new(config, &ListenerRegistry::new()).unwrap();
        slider.focus();

        for key in keys {
            slider.on_key(key, Modifiers::new());
            let value = slider.value();
            prop_assert!(value >= range.min() && value <= range.max());
            prop_assert!(range.is_allowed(value));
        }
    }

    #[test]
    fn disabled_slider_never_changes(
        start in 0.0f64..100.0,
        x in -100.0f64..300.0,
        key in prop::sample::select(vec![Key::Left, Key::Right, Key::Home, Key::End]),
    ) {
        let registry = ListenerRegistry::new();
        let mut slider = Slider::new(
            SliderConfig::new().default_value(start).disabled(true),
            &registry,
        )
        .unwrap();
        slider.set_track(TrackBounds::new(0.0, 200.0));
        let before = slider.value();

        slider.on_pointer_down(x);
        slider.on_pointer_move(x);
        slider.on_pointer_up();
        slider.on_key(key, Modifiers::new());

        prop_assert_eq!(slider.value(), before);
        prop_assert!(registry.is_empty());
    }
}
