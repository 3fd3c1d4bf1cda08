// Example: a controller mounted on a simulated scroll surface.
//
// A host adapter would:
// - attach() the real scrollable element once it exists
// - forward native scroll signals to on_scroll(now_ms)
// - call tick(now_ms) in a frame loop / timer
// - render only render_window().indices(), translated by offset_y
// - detach() on unmount
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use listwindow::WindowOptions;
use listwindow_adapter::{Easing, ScrollBehavior, ScrollSurface, SurfaceController};

#[derive(Clone)]
struct SimSurface {
    offset: Rc<Cell<u64>>,
    log: Rc<RefCell<Vec<String>>>,
}

impl ScrollSurface for SimSurface {
    fn scroll_top(&self) -> u64 {
        self.offset.get()
    }

    fn scroll_to(&mut self, offset: u64, behavior: ScrollBehavior) {
        self.offset.set(offset);
        self.log
            .borrow_mut()
            .push(format!("scroll_to({offset}, {behavior:?})"));
    }
}

fn main() {
    let offset = Rc::new(Cell::new(0));
    let surface = SimSurface {
        offset: Rc::clone(&offset),
        log: Rc::new(RefCell::new(Vec::new())),
    };

    let mut c = SurfaceController::new(WindowOptions::new(10_000, 40, 800)).unwrap();
    c.attach(surface.clone());

    // Native smooth scroll command, fire-and-forget.
    c.scroll_to_item(200);

    // Tick-driven glide for surfaces without native smooth scrolling.
    let target = c.glide_to_item(2_000, 0, 240, Easing::SmoothStep).unwrap();
    println!("glide target={target}");

    let mut now_ms = 0u64;
    while c.is_gliding() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} off={off} window={:?}", c.render_window());
            }
        }
    }

    println!(
        "done: scroll_top={} window={:?}",
        c.window().scroll_top(),
        c.render_window()
    );
    println!("surface commands: {}", surface.log.borrow().len());

    let _surface = c.detach().expect("was mounted");
}
