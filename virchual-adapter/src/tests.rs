use crate::*;

use virchual::{Direction, Host, IndexPolicy, PointerSample, Virchual, VirchualOptions};

fn slides(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("slide {i}")).collect()
}

fn player(n: usize, options: VirchualOptions) -> Player<MemoryHost> {
    let mut p = Player::new(MemoryHost::new(), options.with_slides(slides(n))).unwrap();
    p.mount();
    p
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn css_easing_keywords_hit_both_endpoints() {
    for keyword in ["linear", "ease", "ease-in", "ease-out", "ease-in-out"] {
        let easing = CssEasing::parse(keyword).unwrap();
        assert_eq!(easing.sample(0.0), 0.0, "{keyword}");
        assert_eq!(easing.sample(1.0), 1.0, "{keyword}");
        assert_eq!(easing.sample(-1.0), 0.0, "{keyword}");
        assert_eq!(easing.sample(2.0), 1.0, "{keyword}");
    }
    assert_eq!(CssEasing::default(), CssEasing::EASE);
}

#[test]
fn css_easing_curves_have_the_expected_shape() {
    assert!(approx(CssEasing::Linear.sample(0.25), 0.25));
    assert!(CssEasing::EASE_OUT.sample(0.5) > 0.6);
    assert!(CssEasing::EASE_IN.sample(0.5) < 0.4);
    assert!(approx(CssEasing::EASE_IN_OUT.sample(0.5), 0.5));

    let identity = CssEasing::parse("cubic-bezier(0.25, 0.25, 0.75, 0.75)").unwrap();
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!(approx(identity.sample(t), t), "t={t}");
    }

    for easing in [CssEasing::EASE, CssEasing::EASE_IN_OUT, CssEasing::EASE_OUT] {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = easing.sample(i as f32 / 100.0);
            assert!(v + 1e-4 >= last, "{easing:?} is not monotonic at {i}");
            last = v;
        }
    }
}

#[test]
fn css_easing_rejects_unsupported_functions() {
    assert_eq!(
        CssEasing::parse(" cubic-bezier(0.1,0.7,1.0,0.1) "),
        Some(CssEasing::CubicBezier {
            x1: 0.1,
            y1: 0.7,
            x2: 1.0,
            y2: 0.1
        })
    );
    assert_eq!(CssEasing::parse("cubic-bezier(1.5, 0, 0, 1)"), None);
    assert_eq!(CssEasing::parse("cubic-bezier(0, 0, 1)"), None);
    assert_eq!(CssEasing::parse("cubic-bezier(0, 0, 1, 1, 1)"), None);
    assert_eq!(CssEasing::parse("steps(4)"), None);
    assert_eq!(CssEasing::parse("bouncy"), None);
}

#[test]
fn transition_spec_parses_the_shorthand() {
    let spec = TransitionSpec::parse("transform 200ms ease-out").unwrap();
    assert_eq!(spec.property, "transform");
    assert_eq!(spec.duration_ms, 200.0);
    assert_eq!(spec.easing, CssEasing::EASE_OUT);

    let spec = TransitionSpec::parse("transform  0.3s").unwrap();
    assert_eq!(spec.duration_ms, 300.0);
    assert_eq!(spec.easing, CssEasing::EASE);

    let spec = TransitionSpec::parse("transform 150ms cubic-bezier(0, 0, 1, 1)").unwrap();
    assert!(approx(spec.easing.sample(0.3), 0.3));

    assert_eq!(TransitionSpec::parse(""), None);
    assert_eq!(TransitionSpec::parse("transform"), None);
    assert_eq!(TransitionSpec::parse("transform fast linear"), None);
    assert_eq!(TransitionSpec::parse("transform -5ms"), None);
    assert_eq!(TransitionSpec::parse("transform 200ms steps(2)"), None);
}

#[test]
fn transition_driver_ends_transitions_in_time() {
    let linear = |ms: f64| TransitionSpec {
        property: "transform".into(),
        duration_ms: ms,
        easing: CssEasing::Linear,
    };
    let mut d = TransitionDriver::new();
    d.start(1u32, linear(100.0), 0.0);
    d.start(2u32, linear(200.0), 0.0);
    assert_eq!(d.len(), 2);

    assert!(d.poll(50.0).is_empty());
    assert_eq!(d.progress(&1, 50.0), Some(0.5));
    assert_eq!(d.progress(&3, 50.0), None);

    assert_eq!(d.poll(100.0), vec![1]);
    assert!(!d.is_running(&1));

    // Restarting replaces the running transition.
    d.start(2, linear(200.0), 150.0);
    assert_eq!(d.len(), 1);
    assert!(d.poll(200.0).is_empty());
    assert_eq!(d.poll(350.0), vec![2]);
    assert!(d.is_empty());

    d.start(3, linear(0.0), 400.0);
    assert_eq!(d.progress(&3, 400.0), Some(1.0));
    assert!(d.cancel(&3));
    assert!(!d.cancel(&3));
}

#[test]
fn memory_host_keeps_a_consistent_tree() {
    let mut host = MemoryHost::new().with_slides(["a", "b"]);
    let frame = host.query_frame("virchual__frame").unwrap();
    assert_eq!(frame, host.frame());
    assert_eq!(host.frame_html(), vec!["a", "b"]);

    let c = host.create_element("virchual__slide", "c").unwrap();
    assert_eq!(host.element(c).unwrap().parent(), None);
    host.insert(&frame, &c, true);
    assert_eq!(host.frame_html(), vec!["c", "a", "b"]);
    host.insert(&frame, &c, false);
    assert_eq!(host.frame_html(), vec!["a", "b", "c"]);

    host.detach(&c);
    host.detach(&c);
    assert_eq!(host.frame_html(), vec!["a", "b"]);
    assert_eq!(host.element(c).unwrap().parent(), None);

    host.set_class(&c, "x", true);
    host.set_class(&c, "x", true);
    assert_eq!(host.element(c).unwrap().classes, vec!["virchual__slide", "x"]);
    host.set_class(&c, "x", false);
    assert!(!host.element(c).unwrap().has_class("x"));

    host.set_style(&c, "none", "");
    host.set_style(&c, "none", "transform 10ms linear");
    assert_eq!(
        host.take_started_transitions(),
        vec![(c, "transform 10ms linear".to_string())]
    );
    assert!(host.take_started_transitions().is_empty());

    assert!(MemoryHost::without_frame().query_frame("virchual__frame").is_none());
}

#[test]
fn mounted_carousel_renders_three_slots() {
    let p = player(3, VirchualOptions::new());
    assert_eq!(
        p.virchual().host().render(),
        "<div class=\"virchual__frame\">\
         <div class=\"virchual__slide\" style=\"transform: translate3d(calc(-100% + 0%), 0, 0)\">slide 2</div>\
         <div class=\"virchual__slide virchual__slide--active\" style=\"transform: translate3d(calc(0% + 0%), 0, 0)\">slide 0</div>\
         <div class=\"virchual__slide\" style=\"transform: translate3d(calc(100% + 0%), 0, 0)\">slide 1</div>\
         </div>"
    );
}

#[test]
fn hydrated_markup_is_reused_in_place() {
    let host = MemoryHost::new().with_slides(["a", "b", "c", "d"]);
    let elements = host.element_count();
    let mut v = Virchual::new(host, VirchualOptions::new()).unwrap();
    v.mount();
    assert_eq!(v.host().frame_html(), vec!["a", "b", "d"]);
    assert_eq!(v.host().element_count(), elements);
}

#[test]
fn player_completes_moves_on_the_clock() {
    let mut p = player(5, VirchualOptions::new());
    p.tick(0.0);
    assert!(p.next());
    assert!(!p.next());
    assert!(p.is_animating());

    assert!(p.tick(16.0).is_empty());
    assert_eq!(p.driver().len(), 3);
    let node = p.driver().running()[0].node;
    let half = p.driver().progress(&node, 116.0).unwrap();
    assert!(half > 0.5 && half < 1.0, "ease-out is past halfway: {half}");

    assert_eq!(p.tick(215.0).len(), 0);
    assert_eq!(p.tick(216.0).len(), 3);
    assert!(!p.is_animating());
    assert_eq!(p.virchual().current_index(), 1);
    assert_eq!(
        p.virchual().host().frame_html(),
        vec!["slide 0", "slide 1", "slide 2"]
    );

    assert!(p.prev());
    let now = p.settle(216.0, 16.0, 100);
    assert!(now >= 432.0);
    assert_eq!(p.virchual().current_index(), 0);
    assert_eq!(
        p.virchual().host().frame_html(),
        vec!["slide 4", "slide 0", "slide 1"]
    );
}

#[test]
fn player_wraps_around_many_times() {
    let mut p = player(3, VirchualOptions::new().with_window(2));
    let mut now = 0.0;
    for i in 1..=7 {
        assert!(p.next());
        now = p.settle(now, 16.0, 100);
        assert_eq!(p.virchual().current_index(), i % 3);
        assert_eq!(p.virchual().host().frame_children().len(), 5);
        assert_eq!(p.virchual().slides().len(), 5);
    }
}

#[test]
fn player_plays_a_move_requested_after_idle_frames() {
    let mut p = player(5, VirchualOptions::new());
    p.tick(0.0);
    assert!(p.next());
    assert!(p.tick(10_000.0).is_empty());
    assert!(p.virchual().is_busy());
    assert_eq!(p.virchual().current_index(), 0);

    assert_eq!(p.tick(10_100.0).len(), 0);
    assert_eq!(p.tick(10_200.0).len(), 3);
    assert!(!p.is_animating());
    assert_eq!(p.virchual().current_index(), 1);
}

#[test]
fn player_with_two_slides_keeps_one_clone() {
    let mut p = player(2, VirchualOptions::new());
    let mut now = 0.0;
    for i in 1..=6 {
        assert!(if i % 3 == 0 { p.prev() } else { p.next() });
        now = p.settle(now, 16.0, 100);
        assert!(!p.is_animating());
        assert_eq!(p.virchual().slides().len(), 3);
        assert_eq!(p.virchual().host().frame_children().len(), 3);
    }
}

#[test]
fn unparseable_transitions_end_immediately() {
    let mut p = player(5, VirchualOptions::new().with_easing("steps(4)"));
    p.tick(0.0);
    assert!(p.next());
    p.tick(16.0);
    assert!(!p.is_animating());
    assert_eq!(p.virchual().current_index(), 1);
}

#[test]
fn drag_release_plays_the_move() {
    let mut p = player(5, VirchualOptions::new());
    p.tick(0.0);
    let v = p.virchual_mut();
    v.pointer_down(PointerSample::new(200.0, 0.0, 0.0));
    assert!(v.pointer_move(PointerSample::new(140.0, 4.0, 12.0), true));
    p.tick(16.0);

    let active = p.virchual().active_slide().unwrap().node().copied().unwrap();
    assert_eq!(
        p.virchual().host().element(active).unwrap().transform,
        "translate3d(calc(0% + -60px), 0, 0)"
    );

    p.virchual_mut().pointer_up(20.0);
    p.settle(20.0, 16.0, 100);
    assert_eq!(p.virchual().current_index(), 1);
}

#[test]
fn control_values_map_to_directions() {
    assert_eq!(parse_control("prev"), Some(Direction::Prev));
    assert_eq!(parse_control("-1"), Some(Direction::Prev));
    assert_eq!(parse_control(" next "), Some(Direction::Next));
    assert_eq!(parse_control("1"), Some(Direction::Next));
    assert_eq!(parse_control("+1"), Some(Direction::Next));
    assert_eq!(parse_control("2"), None);
    assert_eq!(parse_control(""), None);
}

#[test]
fn controls_navigate_and_track_the_index() {
    let mut v = Virchual::new(
        MemoryHost::new(),
        VirchualOptions::new().with_speed_ms(0).with_slides(slides(4)),
    )
    .unwrap();
    v.mount();
    let controls: Controls = v.register(ControlsSettings::default());
    assert!(controls.is_enabled());
    assert!(controls.can_go(Direction::Prev));

    assert!(controls.press("next", &mut v));
    assert_eq!(controls.current_index(), 1);
    assert!(controls.press("-1", &mut v));
    assert!(controls.press("-1", &mut v));
    assert_eq!(controls.current_index(), 3);
    assert_eq!(v.current_index(), 3);
    assert!(!controls.press("sideways", &mut v));

    assert!(v.off(controls.subscription()));
}

#[test]
fn controls_respect_clamping_and_enabled_state() {
    let mut v = Virchual::new(
        MemoryHost::new(),
        VirchualOptions::new()
            .with_speed_ms(0)
            .with_index_policy(IndexPolicy::Clamp)
            .with_slides(slides(3)),
    )
    .unwrap();
    v.mount();
    let mut controls: Controls = v.register(ControlsSettings::default());

    assert!(!controls.can_go(Direction::Prev));
    assert!(!controls.press("prev", &mut v));
    assert!(controls.press("next", &mut v));
    assert!(controls.press("next", &mut v));
    assert!(!controls.can_go(Direction::Next));
    assert!(!controls.press("next", &mut v));
    assert_eq!(v.current_index(), 2);

    controls.set_enabled(false);
    assert!(!controls.press("prev", &mut v));
    assert_eq!(v.current_index(), 2);

    let disabled: Controls = v.register(ControlsSettings { is_enabled: false });
    assert!(!disabled.can_go(Direction::Prev));
}
