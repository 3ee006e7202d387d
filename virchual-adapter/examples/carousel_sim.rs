// Example: a headless carousel driven by a 60 Hz clock.
use virchual::{EventKind, PointerSample, VirchualOptions};
use virchual_adapter::{Controls, ControlsSettings, MemoryHost, Player};

fn main() {
    let options = VirchualOptions::new()
        .with_window(1)
        .with_speed_ms(300)
        .with_easing("ease-in-out")
        .with_slides((0..8).map(|i| format!("<img src=\"/photos/{i}.jpg\">")));
    let mut player = match Player::new(MemoryHost::new(), options) {
        Ok(player) => player,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    player.virchual().on(EventKind::Move, |e| println!("event: {e:?}"));
    player.mount();
    let controls: Controls = player.virchual().register(ControlsSettings::default());

    let frame_ms = 1000.0 / 60.0;
    let mut now = 0.0;
    for value in ["next", "next", "prev"] {
        controls.press(value, player.virchual_mut());
        now = player.settle(now, frame_ms, 120);
        println!("{value}: index={} dom={:?}", controls.current_index(), player.virchual().host().frame_html());
    }

    // A quick leftward flick.
    let v = player.virchual_mut();
    v.pointer_down(PointerSample::new(300.0, 100.0, now));
    v.pointer_move(PointerSample::new(250.0, 102.0, now + 16.0), true);
    v.pointer_move(PointerSample::new(180.0, 104.0, now + 32.0), true);
    v.pointer_up(now + 40.0);
    now = player.settle(now + 40.0, frame_ms, 120);
    println!("after flick at {now:.0}ms: index={}", player.virchual().current_index());

    if let Some(pagination) = player.virchual().pagination() {
        let strip: Vec<&str> = pagination
            .bullets()
            .iter()
            .map(|b| if b.is_active { "●" } else { "○" })
            .collect();
        println!("pagination: {}", strip.join(" "));
    }
    println!("{}", player.virchual().host().render());
}
