//! Photo Gallery Component
//!
//! Two layouts over the same photos:
//! - Carousel: one photo at a time, arrow buttons and drag-to-swipe
//! - Timeline: every photo in date order along a vertical line
//!
//! A filter row recolours the photos, and any photo can be opened
//! fullscreen (arrow keys page, Escape closes).

use std::time::Instant;

use dioxus::prelude::*;
use keepsake_core::{timeline_order, Direction, Photo, PhotoFilter, ViewMode};
use keepsake_ui::{CloseButton, IconButton, PillGroup};

use crate::context::{use_content, use_session};

/// Pointer position at one moment of a drag
#[derive(Clone, Copy, Debug)]
struct DragSample {
    x: f64,
    at: Instant,
}

/// A carousel drag in progress: where it began and the two latest samples
#[derive(Clone, Copy, Debug)]
struct DragTrack {
    start_x: f64,
    prev: DragSample,
    last: DragSample,
}

impl DragTrack {
    fn begin(x: f64, at: Instant) -> Self {
        let sample = DragSample { x, at };
        Self {
            start_x: x,
            prev: sample,
            last: sample,
        }
    }

    fn record(&mut self, x: f64, at: Instant) {
        self.prev = self.last;
        self.last = DragSample { x, at };
    }

    fn offset(&self, x: f64) -> f64 {
        x - self.start_x
    }

    /// Pointer velocity at release in px/s.
    ///
    /// Measured from the sample before the latest move to the release point,
    /// so a drag that was held still before letting go releases at ~0.
    fn release_velocity(&self, x: f64, at: Instant) -> f64 {
        let elapsed = at.saturating_duration_since(self.prev.at).as_secs_f64();
        velocity(x - self.prev.x, elapsed)
    }
}

/// CSS `filter` value for a photo filter
pub fn filter_css(filter: PhotoFilter) -> &'static str {
    match filter {
        PhotoFilter::None => "none",
        PhotoFilter::Vintage => "sepia(0.6) contrast(1.1) brightness(0.95)",
        PhotoFilter::Warm => "sepia(0.25) saturate(1.4) hue-rotate(-10deg)",
        PhotoFilter::Cool => "saturate(0.9) hue-rotate(20deg) brightness(1.05)",
        PhotoFilter::Dramatic => "contrast(1.4) saturate(1.2) brightness(0.9)",
    }
}

/// Distance over time in px/s; elapsed time is floored at 1 ms
fn velocity(distance_px: f64, elapsed_secs: f64) -> f64 {
    distance_px / elapsed_secs.max(0.001)
}

#[component]
pub fn PhotoGallery() -> Element {
    let content = use_content();
    let mut session = use_session();

    let (current, filter, view, fullscreen) = {
        let s = session.read();
        let g = s.gallery();
        (g.current(), g.filter(), g.view(), g.is_fullscreen())
    };

    let photos = content.photos.clone();
    let filter_index = PhotoFilter::all()
        .iter()
        .position(|f| *f == filter)
        .unwrap_or(0);
    let view_index = usize::from(view == ViewMode::Timeline);

    rsx! {
        div { class: "photo-gallery",
            div { class: "gallery-controls",
                PillGroup {
                    labels: PhotoFilter::all().iter().map(|f| f.label().to_string()).collect(),
                    selected: filter_index,
                    on_select: move |i: usize| {
                        if let Some(f) = PhotoFilter::all().get(i) {
                            session.write().gallery_mut().set_filter(*f);
                        }
                    },
                    aria_label: "Photo filter".to_string(),
                }
                PillGroup {
                    labels: vec![
                        ViewMode::Carousel.label().to_string(),
                        ViewMode::Timeline.label().to_string(),
                    ],
                    selected: view_index,
                    on_select: move |i: usize| {
                        let view = if i == 1 { ViewMode::Timeline } else { ViewMode::Carousel };
                        session.write().gallery_mut().set_view(view);
                    },
                    aria_label: "Gallery layout".to_string(),
                }
            }

            if view == ViewMode::Carousel {
                Carousel { photos: photos.clone(), current: current, filter: filter }
            } else {
                Timeline { photos: photos.clone(), filter: filter }
            }

            if fullscreen {
                FullscreenPhoto { photos: photos.clone(), current: current, filter: filter }
            }
        }
    }
}

/// One photo at a time; drag left/right or use the arrows
#[component]
fn Carousel(photos: Vec<Photo>, current: usize, filter: PhotoFilter) -> Element {
    let mut session = use_session();
    let mut drag: Signal<Option<DragTrack>> = use_signal(|| None);
    let mut drag_offset = use_signal(|| 0.0f64);

    let Some(photo) = photos.get(current).cloned() else {
        return VNode::empty();
    };
    let total = photos.len();
    let position = current + 1;
    let date = photo.display_date();

    let mut finish_drag = move |x: f64| {
        if drag.peek().is_none() {
            return;
        }
        let Some(track) = drag.write().take() else {
            return;
        };
        drag_offset.set(0.0);

        let offset = track.offset(x);
        let velocity = track.release_velocity(x, Instant::now());
        match session.write().gallery_mut().swipe(offset, velocity) {
            Some(direction) => tracing::debug!(?direction, "Swipe accepted"),
            None => tracing::trace!(offset, velocity, "Swipe below threshold, snapping back"),
        }
    };

    let offset = drag_offset();
    let frame_class = if drag().is_some() {
        "carousel-frame dragging"
    } else {
        "carousel-frame"
    };

    rsx! {
        div { class: "carousel",
            IconButton {
                onclick: move |_| { session.write().gallery_mut().paginate(Direction::Backward); },
                aria_label: "Previous photo".to_string(),
                class: "carousel-arrow prev".to_string(),
                "\u{2039}"
            }

            div {
                class: "{frame_class}",
                style: "transform: translateX({offset}px);",
                onmousedown: move |evt: MouseEvent| {
                    drag.set(Some(DragTrack::begin(evt.client_coordinates().x, Instant::now())));
                },
                onmousemove: move |evt: MouseEvent| {
                    if drag.peek().is_none() {
                        return;
                    }
                    let x = evt.client_coordinates().x;
                    if let Some(track) = drag.write().as_mut() {
                        track.record(x, Instant::now());
                        drag_offset.set(track.offset(x));
                    }
                },
                onmouseup: move |evt: MouseEvent| finish_drag(evt.client_coordinates().x),
                onmouseleave: move |evt: MouseEvent| finish_drag(evt.client_coordinates().x),

                PhotoImage { key: "{photo.source}", photo: photo.clone(), filter: filter, class: "carousel-img".to_string() }
            }

            IconButton {
                onclick: move |_| { session.write().gallery_mut().paginate(Direction::Forward); },
                aria_label: "Next photo".to_string(),
                class: "carousel-arrow next".to_string(),
                "\u{203A}"
            }
        }

        div { class: "carousel-meta",
            h3 { class: "photo-caption", "{photo.caption}" }
            p { class: "photo-date", "{date}" }
            div { class: "carousel-footer",
                span { class: "photo-counter", "{position} / {total}" }
                IconButton {
                    onclick: move |_| { session.write().gallery_mut().toggle_fullscreen(); },
                    aria_label: "View fullscreen".to_string(),
                    class: "fullscreen-btn".to_string(),
                    "\u{2922}"
                }
            }
        }
    }
}

/// Every photo in date order; clicking one opens it fullscreen
#[component]
fn Timeline(photos: Vec<Photo>, filter: PhotoFilter) -> Element {
    let mut session = use_session();
    let dates: Vec<_> = photos.iter().map(|p| p.date).collect();
    let order = timeline_order(&dates);

    rsx! {
        div { class: "timeline",
            for (slot, index) in order.into_iter().enumerate() {
                {
                    let photo = photos[index].clone();
                    let side = if slot % 2 == 0 { "timeline-item left" } else { "timeline-item right" };
                    let delay_ms = slot * 200;
                    let date = photo.display_date();
                    rsx! {
                        div {
                            key: "{photo.source}",
                            class: "{side}",
                            style: "animation-delay: {delay_ms}ms;",
                            div {
                                class: "timeline-card",
                                onclick: move |_| session.write().gallery_mut().open_fullscreen_at(index),
                                PhotoImage { photo: photo.clone(), filter: filter, class: "timeline-img".to_string() }
                                h3 { class: "photo-caption", "{photo.caption}" }
                                p { class: "photo-date", "{date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fullscreen overlay with keyboard paging
#[component]
fn FullscreenPhoto(photos: Vec<Photo>, current: usize, filter: PhotoFilter) -> Element {
    let mut session = use_session();

    let Some(photo) = photos.get(current).cloned() else {
        return VNode::empty();
    };
    let date = photo.display_date();

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowLeft => {
            session.write().gallery_mut().paginate(Direction::Backward);
        }
        Key::ArrowRight => {
            session.write().gallery_mut().paginate(Direction::Forward);
        }
        Key::Escape => session.write().gallery_mut().close_fullscreen(),
        _ => {}
    };

    rsx! {
        div {
            class: "fullscreen-overlay",
            tabindex: "0",
            role: "dialog",
            "aria-label": "{photo.caption}",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: on_keydown,
            onclick: move |_| session.write().gallery_mut().close_fullscreen(),

            CloseButton {
                onclick: move |_| session.write().gallery_mut().close_fullscreen(),
            }

            IconButton {
                onclick: move |_| { session.write().gallery_mut().paginate(Direction::Backward); },
                aria_label: "Previous photo".to_string(),
                class: "fullscreen-arrow prev".to_string(),
                "\u{2039}"
            }

            figure {
                class: "fullscreen-figure",
                onclick: move |evt| evt.stop_propagation(),
                PhotoImage { key: "{photo.source}", photo: photo.clone(), filter: filter, class: "fullscreen-img".to_string() }
                figcaption {
                    span { class: "photo-caption", "{photo.caption}" }
                    span { class: "photo-date", "{date}" }
                }
            }

            IconButton {
                onclick: move |_| { session.write().gallery_mut().paginate(Direction::Forward); },
                aria_label: "Next photo".to_string(),
                class: "fullscreen-arrow next".to_string(),
                "\u{203A}"
            }
        }
    }
}

/// Photo with the active filter; a missing file shows a placeholder
#[component]
fn PhotoImage(photo: Photo, filter: PhotoFilter, class: String) -> Element {
    let mut failed = use_signal(|| false);
    let source = photo.source.clone();
    let filter_style = filter_css(filter);

    if failed() {
        return rsx! {
            div { class: "photo-placeholder {class}", "\u{2665}" }
        };
    }

    rsx! {
        img {
            class: "{class}",
            src: "{photo.source}",
            alt: "{photo.caption}",
            draggable: "false",
            style: "filter: {filter_style};",
            onerror: move |_| {
                tracing::warn!("Photo not found: {}", source);
                failed.set(true);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_css_covers_every_filter() {
        for filter in PhotoFilter::all() {
            assert!(!filter_css(*filter).is_empty());
        }
        assert_eq!(filter_css(PhotoFilter::None), "none");
    }

    use std::time::Duration;

    use keepsake_core::swipe_direction;

    fn ms(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn test_velocity_floors_elapsed() {
        assert_eq!(velocity(-150.0, 0.1), -1500.0);
        // an instant release does not divide by zero
        assert!(velocity(30.0, 0.0).is_finite());
    }

    #[test]
    fn test_quick_flick_turns_the_page() {
        let t0 = Instant::now();
        let mut track = DragTrack::begin(400.0, t0);
        track.record(360.0, ms(t0, 40));
        track.record(300.0, ms(t0, 80));

        let velocity = track.release_velocity(280.0, ms(t0, 90));
        assert_eq!(track.offset(280.0), -120.0);
        assert!(velocity < -1000.0);
        assert_eq!(
            swipe_direction(track.offset(280.0), velocity),
            Some(Direction::Forward)
        );
    }

    #[test]
    fn test_drag_held_still_before_release_snaps_back() {
        // 200 px to the left, then held for nearly three seconds
        let t0 = Instant::now();
        let mut track = DragTrack::begin(400.0, t0);
        track.record(300.0, ms(t0, 100));
        track.record(200.0, ms(t0, 200));

        let velocity = track.release_velocity(200.0, ms(t0, 3000));
        assert!(velocity.abs() < 50.0, "velocity {velocity}");
        assert_eq!(swipe_direction(track.offset(200.0), velocity), None);
    }

    #[test]
    fn test_release_without_moving() {
        let t0 = Instant::now();
        let track = DragTrack::begin(250.0, t0);
        assert_eq!(track.release_velocity(250.0, ms(t0, 500)), 0.0);
    }
}
