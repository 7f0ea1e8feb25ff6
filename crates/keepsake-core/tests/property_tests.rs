//! Property-based tests for the walker, gallery and effect generators
//!
//! Uses proptest to verify index bounds and gesture invariants.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use keepsake_core::effects::{confetti, hearts, sparkles};
use keepsake_core::{
    swipe_direction, Direction, EndPolicy, Gallery, PhotoFilter, Step, ViewMode, Walker,
    SWIPE_CONFIDENCE_THRESHOLD,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Backward), Just(Direction::Forward)]
}

fn filter_strategy() -> impl Strategy<Value = PhotoFilter> {
    prop::sample::select(PhotoFilter::all().to_vec())
}

fn policy_strategy() -> impl Strategy<Value = EndPolicy> {
    prop_oneof![Just(EndPolicy::Halt), Just(EndPolicy::Wrap)]
}

/// User inputs the gallery can receive
#[derive(Debug, Clone)]
enum GalleryOp {
    Paginate(Direction),
    Swipe(f64, f64),
    Filter(PhotoFilter),
    ToggleView,
    ToggleFullscreen,
    OpenAt(usize),
}

fn gallery_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<GalleryOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => direction_strategy().prop_map(GalleryOp::Paginate),
            3 => (-800.0..800.0f64, -3000.0..3000.0f64).prop_map(|(o, v)| GalleryOp::Swipe(o, v)),
            1 => filter_strategy().prop_map(GalleryOp::Filter),
            1 => Just(GalleryOp::ToggleView),
            1 => Just(GalleryOp::ToggleFullscreen),
            1 => (0..100usize).prop_map(GalleryOp::OpenAt),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The walker never leaves [0, N), never moves backwards under Halt
    #[test]
    fn walker_stays_in_bounds(len in 1..20usize, presses in 0..60usize, policy in policy_strategy()) {
        let mut walker = Walker::new(len, policy).unwrap();
        let mut previous = walker.current();

        for _ in 0..presses {
            let step = walker.advance();
            prop_assert!(walker.current() < len);
            match (policy, step) {
                (_, Step::Wrapped) => {
                    prop_assert_eq!(policy, EndPolicy::Wrap);
                    prop_assert_eq!(walker.current(), 0);
                }
                _ => prop_assert!(walker.current() >= previous),
            }
            previous = walker.current();
        }
    }

    /// Under Halt the finale fires exactly once no matter how often next is pressed
    #[test]
    fn halt_finale_fires_once(len in 2..20usize, presses in 0..60usize) {
        let mut walker = Walker::new(len, EndPolicy::Halt).unwrap();
        let finales = (0..presses).filter(|_| walker.advance().is_finale()).count();
        prop_assert_eq!(finales, usize::from(presses >= len - 1));
    }

    /// Any sequence of gallery inputs keeps the photo index in [0, M)
    #[test]
    fn gallery_stays_in_bounds(len in 1..30usize, ops in gallery_ops_strategy(80)) {
        let mut gallery = Gallery::new(len).unwrap();

        for op in ops {
            match op {
                GalleryOp::Paginate(d) => { gallery.paginate(d); }
                GalleryOp::Swipe(o, v) => { gallery.swipe(o, v); }
                GalleryOp::Filter(f) => gallery.set_filter(f),
                GalleryOp::ToggleView => {
                    let next = match gallery.view() {
                        ViewMode::Carousel => ViewMode::Timeline,
                        ViewMode::Timeline => ViewMode::Carousel,
                    };
                    gallery.set_view(next);
                }
                GalleryOp::ToggleFullscreen => { gallery.toggle_fullscreen(); }
                GalleryOp::OpenAt(i) => gallery.open_fullscreen_at(i),
            }
            prop_assert!(gallery.current() < len);
        }
    }

    /// Forward then backward returns to the starting photo
    #[test]
    fn paginate_round_trip(len in 1..30usize, start_steps in 0..30usize) {
        let mut gallery = Gallery::new(len).unwrap();
        for _ in 0..start_steps {
            gallery.paginate(Direction::Forward);
        }
        let start = gallery.current();

        gallery.paginate(Direction::Forward);
        gallery.paginate(Direction::Backward);
        prop_assert_eq!(gallery.current(), start);

        gallery.paginate(Direction::Backward);
        gallery.paginate(Direction::Forward);
        prop_assert_eq!(gallery.current(), start);
    }

    /// Weak drags snap back; confident ones move exactly one step
    #[test]
    fn swipe_threshold(len in 2..30usize, offset in -800.0..800.0f64, velocity in -3000.0..3000.0f64) {
        let mut gallery = Gallery::new(len).unwrap();
        let before = gallery.current();
        let power = offset.abs() * velocity.abs();

        let taken = gallery.swipe(offset, velocity);

        if power <= SWIPE_CONFIDENCE_THRESHOLD {
            prop_assert_eq!(taken, None);
            prop_assert_eq!(gallery.current(), before);
        } else {
            let expected = if velocity < 0.0 { (before + 1) % len } else { (before + len - 1) % len };
            prop_assert_eq!(taken, swipe_direction(offset, velocity));
            prop_assert_eq!(gallery.current(), expected);
        }
    }

    /// Setting the same filter twice leaves the state as the first call did
    #[test]
    fn set_filter_is_idempotent(filter in filter_strategy(), len in 1..10usize) {
        let mut gallery = Gallery::new(len).unwrap();
        gallery.set_filter(filter);
        let once = gallery.clone();
        gallery.set_filter(filter);
        prop_assert_eq!(gallery, once);
    }

    /// Generated particles respect their count and placement bounds
    #[test]
    fn particles_within_bounds(seed in any::<u64>(), count in 0..200usize) {
        let mut rng = StdRng::seed_from_u64(seed);

        let pieces = confetti(&mut rng, count);
        prop_assert_eq!(pieces.len(), count);
        prop_assert!(pieces.iter().all(|p| (0.0..100.0).contains(&p.x)));

        let floating = hearts(&mut rng, count);
        prop_assert_eq!(floating.len(), count);
        prop_assert!(floating.iter().all(|h| (0.0..100.0).contains(&h.x)));

        let burst = sparkles(&mut rng, count);
        prop_assert_eq!(burst.len(), count);
        prop_assert!(burst.iter().all(|s| s.x.abs() < 141.0 && s.y.abs() < 141.0));
    }
}
