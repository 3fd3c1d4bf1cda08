// Example: the trailing-threshold pagination trigger against a paged data source.
//
// The engine never fetches anything itself. The data layer owns `has_next_page` and
// `is_fetching_next_page`; the engine only invokes the fetch callback when the rendered window
// gets within FETCH_MARGIN items of the loaded end.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use listwindow::{ListWindow, WindowOptions};

const PAGE_SIZE: usize = 50;
const PAGE_COUNT: usize = 4;

fn main() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let opts = WindowOptions::new(PAGE_SIZE, 40, 800).with_fetch_next_page(Some({
        let fetches = Arc::clone(&fetches);
        move || {
            fetches.fetch_add(1, Ordering::Relaxed);
            println!("  -> fetch_next_page()");
        }
    }));
    let mut w = ListWindow::new(opts).unwrap();

    let mut loaded_pages = 1usize;
    let mut in_flight = false;

    for step in 0..60u64 {
        // Simulated user scroll: 200px per step.
        w.apply_scroll_event(step * 200, step * 16);

        let has_next = loaded_pages < PAGE_COUNT;
        if w.request_next_page_if_needed(has_next, in_flight) {
            in_flight = true;
        }

        // The "network" responds two steps later.
        if in_flight && step % 2 == 0 {
            loaded_pages += 1;
            w.set_total_items(loaded_pages * PAGE_SIZE);
            in_flight = false;
        }

        let win = w.window();
        if step % 10 == 0 {
            println!(
                "step={step} loaded={} window={}..={} ",
                w.total_items(),
                win.start_index,
                win.end_index
            );
        }
    }

    println!(
        "done: items={} fetches={}",
        w.total_items(),
        fetches.load(Ordering::Relaxed)
    );
}
