// Example: window math and reconciliation patches, without any host.
use virchual::{IndexPolicy, Pagination, Patch, Window, diff, rewind, sliding_window};

fn main() {
    let source = [0, 1, 2, 3, 4];
    for center in 0..source.len() {
        println!("center={center} window={:?}", sliding_window(&source, center, 1));
    }
    println!("two slides, radius 2: {:?}", sliding_window(&[0, 1], 0, 2));

    // Stepping 4 -> 0 wraps; relabel the old window so unchanged slots line up.
    let current = 4;
    let next = current as isize + 1;
    let target = rewind(next, source.len() - 1);
    let previous = Window::new(source.len(), current, 1, IndexPolicy::Wrap)
        .relabel(target as isize - next);
    let window = Window::new(source.len(), target, 1, IndexPolicy::Wrap);
    for patch in diff(&previous, &window) {
        match patch {
            Patch::Unmount {
                virtual_index,
                real_index,
            } => println!("unmount label={virtual_index} slide={real_index}"),
            Patch::Mount {
                virtual_index,
                real_index,
                center_distance,
            } => println!("mount   label={virtual_index} slide={real_index} d={center_distance}"),
        }
    }

    let mut pagination = Pagination::new(12, 5, 16);
    for _ in 0..7 {
        pagination.next();
    }
    let strip: Vec<String> = pagination
        .bullets()
        .iter()
        .map(|b| match (b.is_active, b.is_edge) {
            (true, _) => format!("[{}]", b.real_index),
            (false, true) => format!("({})", b.real_index),
            (false, false) => format!(" {} ", b.real_index),
        })
        .collect();
    println!("pagination: {}", strip.join(""));
}
