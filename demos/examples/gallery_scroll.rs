// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulates a fling over a 10,000-photo wall and prints what materializes.
//!
//! Run with: `cargo run -p lightwall_demos --example gallery_scroll`

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use lightwall_cache::MediaCache;
use lightwall_gallery::{GalleryCore, GalleryEvent};
use lightwall_layout::{DeviceClass, Viewport};
use lightwall_visibility::{VisibilityEvent, WatchMode};

const TOTAL_PHOTOS: usize = 10_000;

fn main() {
    let mut gallery: GalleryCore<u64> = GalleryCore::new(DeviceClass::Desktop);
    let visible: Rc<RefCell<Vec<u64>>> = Rc::default();

    let sink = Rc::clone(&visible);
    let _subscription = gallery.subscribe(move |event| match event {
        GalleryEvent::GeometryChanged(g) => {
            println!("geometry: {} columns, {}px rows, {}px gap", g.columns, g.row_height, g.gap);
        }
        GalleryEvent::WindowChanged(w) => {
            println!(
                "window: rows {:?} (offset_y {:.0}, total {:.0})",
                w.rows(),
                w.offset_y,
                w.total_height
            );
        }
        GalleryEvent::Visibility(VisibilityEvent::Enter(key)) => {
            sink.borrow_mut().push(*key);
        }
        GalleryEvent::Visibility(VisibilityEvent::Leave(_)) => {}
    });

    gallery.set_item_count(TOTAL_PHOTOS);
    gallery.set_viewport(Viewport::new(1280.0, 800.0));

    // A small decoded-image cache the host owns; evictions are explicit.
    let mut cache: MediaCache<u64, &'static str> =
        MediaCache::new(NonZeroUsize::new(48).unwrap());

    // Fling: exponentially decaying velocity sampled per frame.
    let mut offset = 0.0_f64;
    let mut velocity = 3_600.0; // px/s
    while velocity > 60.0 {
        offset += velocity * (16.0 / 1_000.0);
        velocity *= 0.93;
        gallery.set_scroll_offset(offset);

        // Watch the freshly materialized rows; retire the rest.
        let window = gallery.window();
        let columns = gallery.geometry().columns;
        for row in window.rows() {
            let span = gallery.row_span(row);
            let start = row * columns;
            let end = ((row + 1) * columns).min(TOTAL_PHOTOS);
            for item in start..end {
                gallery.watch_item(item as u64, span, WatchMode::OneShot);
            }
        }

        for key in visible.borrow_mut().drain(..) {
            if let Some((evicted, _)) = cache.insert(key, "decoded") {
                println!("decode {key:>6}  (evicted {evicted})");
            }
        }
    }

    println!(
        "fling finished at offset {:.0}; watchers alive: {}, cache {}/{} entries",
        offset,
        gallery.active_watchers(),
        cache.len(),
        cache.capacity()
    );
}
