// Example: minimal window computation for a large catalog list.
use listwindow::{ListWindow, WindowOptions};

fn main() {
    let mut w = ListWindow::new(WindowOptions::new(1_000_000, 40, 800)).unwrap();
    w.set_scroll_top(123_456);

    let win = w.window();
    println!("total_height={}", win.total_height);
    println!("window={:?}", win);
    println!("first_rendered={:?}", win.indices().next());

    let off = w.scroll_to_index_offset(999_999);
    w.set_scroll_top_clamped(off);
    println!("after scroll_to_index: scroll_top={}", w.scroll_top());
}
