//! Gallery navigator: photo index, filter, view mode and fullscreen flag.
//!
//! Paging is circular in both directions. A drag gesture only turns the
//! page when it is confident enough, see [`Gallery::swipe`].

use chrono::NaiveDate;

use crate::error::{CardError, CardResult};

/// Minimum `|offset| * |velocity|` (px * px/s) for a drag to count as a swipe.
pub const SWIPE_CONFIDENCE_THRESHOLD: f64 = 10_000.0;

/// Paging direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn offset(&self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Visual filter applied to the displayed photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhotoFilter {
    #[default]
    None,
    Vintage,
    Warm,
    Cool,
    Dramatic,
}

impl PhotoFilter {
    pub fn label(&self) -> &'static str {
        match self {
            PhotoFilter::None => "Original",
            PhotoFilter::Vintage => "Vintage",
            PhotoFilter::Warm => "Warm",
            PhotoFilter::Cool => "Cool",
            PhotoFilter::Dramatic => "Dramatic",
        }
    }

    pub fn all() -> &'static [PhotoFilter] {
        &[
            PhotoFilter::None,
            PhotoFilter::Vintage,
            PhotoFilter::Warm,
            PhotoFilter::Cool,
            PhotoFilter::Dramatic,
        ]
    }
}

/// How the gallery lays out its photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One photo at a time with prev/next controls
    #[default]
    Carousel,
    /// Every photo in date order along a vertical line
    Timeline,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Carousel => "Carousel",
            ViewMode::Timeline => "Timeline",
        }
    }
}

/// Navigation state over `len` photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    current: usize,
    len: usize,
    filter: PhotoFilter,
    view: ViewMode,
    fullscreen: bool,
}

impl Gallery {
    /// Create a gallery showing the first photo in carousel mode.
    pub fn new(len: usize) -> CardResult<Self> {
        if len == 0 {
            return Err(CardError::EmptyGallery);
        }
        Ok(Self {
            current: 0,
            len,
            filter: PhotoFilter::default(),
            view: ViewMode::default(),
            fullscreen: false,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn photo_count(&self) -> usize {
        self.len
    }

    pub fn filter(&self) -> PhotoFilter {
        self.filter
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// 1-based position and total, for the "3 / 5" counter.
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.len)
    }

    /// Step one photo in `direction`, wrapping at either end.
    pub fn paginate(&mut self, direction: Direction) -> usize {
        self.current = wrap_index(self.current as i64 + direction.offset(), self.len);
        tracing::debug!(photo = self.current, ?direction, "Gallery paginated");
        self.current
    }

    /// Turn a released drag into a page turn.
    ///
    /// Dragging left (negative velocity) shows the next photo, dragging right
    /// the previous one. Returns the direction taken, or `None` when the drag
    /// was too weak and the card should snap back.
    pub fn swipe(&mut self, offset_px: f64, velocity_px_s: f64) -> Option<Direction> {
        let direction = swipe_direction(offset_px, velocity_px_s)?;
        self.paginate(direction);
        Some(direction)
    }

    pub fn set_filter(&mut self, filter: PhotoFilter) {
        if self.filter != filter {
            tracing::debug!(?filter, "Gallery filter set");
        }
        self.filter = filter;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        if self.view != view {
            tracing::debug!(?view, "Gallery view set");
        }
        self.view = view;
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Open fullscreen on a specific photo (timeline entries are clickable).
    pub fn open_fullscreen_at(&mut self, index: usize) {
        self.current = index % self.len;
        self.fullscreen = true;
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = false;
    }
}

/// Classify a released drag. `None` means below the confidence threshold.
pub fn swipe_direction(offset_px: f64, velocity_px_s: f64) -> Option<Direction> {
    let power = offset_px.abs() * velocity_px_s.abs();
    if !power.is_finite() || power <= SWIPE_CONFIDENCE_THRESHOLD {
        return None;
    }
    if velocity_px_s < 0.0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}

/// Photo indices in chronological order; equal dates keep their list order.
pub fn timeline_order(dates: &[NaiveDate]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..dates.len()).collect();
    order.sort_by_key(|&i| dates[i]);
    order
}

fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_gallery_rejected() {
        assert!(matches!(Gallery::new(0), Err(CardError::EmptyGallery)));
    }

    #[test]
    fn test_defaults() {
        let gallery = Gallery::new(3).unwrap();
        assert_eq!(gallery.current(), 0);
        assert_eq!(gallery.filter(), PhotoFilter::None);
        assert_eq!(gallery.view(), ViewMode::Carousel);
        assert!(!gallery.is_fullscreen());
    }

    #[test]
    fn test_paginate_wraps_forward() {
        let mut gallery = Gallery::new(3).unwrap();
        gallery.paginate(Direction::Forward);
        gallery.paginate(Direction::Forward);
        assert_eq!(gallery.paginate(Direction::Forward), 0);
    }

    #[test]
    fn test_single_photo_paginates_to_itself() {
        let mut gallery = Gallery::new(1).unwrap();
        assert_eq!(gallery.paginate(Direction::Backward), 0);
        assert_eq!(gallery.paginate(Direction::Forward), 0);
    }

    #[test]
    fn test_swipe_direction() {
        assert_eq!(swipe_direction(-200.0, -600.0), Some(Direction::Forward));
        assert_eq!(swipe_direction(200.0, 600.0), Some(Direction::Backward));
        // exactly at the threshold snaps back
        assert_eq!(swipe_direction(100.0, 100.0), None);
        assert_eq!(swipe_direction(5.0, 50.0), None);
        assert_eq!(swipe_direction(f64::NAN, 500.0), None);
    }

    #[test]
    fn test_weak_swipe_keeps_index() {
        let mut gallery = Gallery::new(5).unwrap();
        assert_eq!(gallery.swipe(-10.0, -20.0), None);
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn test_fullscreen() {
        let mut gallery = Gallery::new(5).unwrap();
        assert!(gallery.toggle_fullscreen());
        assert!(!gallery.toggle_fullscreen());

        gallery.open_fullscreen_at(7);
        assert!(gallery.is_fullscreen());
        assert_eq!(gallery.current(), 2);

        gallery.close_fullscreen();
        assert!(!gallery.is_fullscreen());
        assert_eq!(gallery.current(), 2);
    }

    #[test]
    fn test_position() {
        let mut gallery = Gallery::new(5).unwrap();
        gallery.paginate(Direction::Backward);
        assert_eq!(gallery.position(), (5, 5));
    }

    #[test]
    fn test_timeline_order_sorts_by_date() {
        let dates = [
            date(2021, 4, 1),
            date(2022, 7, 6),
            date(2022, 7, 7),
            date(2022, 3, 19),
            date(2023, 8, 11),
        ];
        assert_eq!(timeline_order(&dates), vec![0, 3, 1, 2, 4]);
    }

    #[test]
    fn test_timeline_order_is_stable() {
        let dates = [date(2022, 1, 1), date(2021, 1, 1), date(2022, 1, 1)];
        assert_eq!(timeline_order(&dates), vec![1, 0, 2]);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(PhotoFilter::all().len(), 5);
        assert_eq!(PhotoFilter::None.label(), "Original");
        assert_eq!(ViewMode::Timeline.label(), "Timeline");
    }
}
