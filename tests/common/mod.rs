// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use move_highlight::test_util::FakeTarget;
use move_highlight::{HighlightConfig, Highlighter};


pub const SQUARE_SIZE: f64 = 50.0;

#[allow(dead_code)]
pub fn board_highlighter() -> Highlighter<FakeTarget> {
    board_highlighter_with_config(HighlightConfig::default())
}

#[allow(dead_code)]
pub fn board_highlighter_with_config(config: HighlightConfig) -> Highlighter<FakeTarget> {
    let target = FakeTarget::with_board(&config, SQUARE_SIZE);
    Highlighter::new(target, &config)
}

// The document never shows an overlay and markers at the same time, and never more than one
// overlay.
#[allow(dead_code)]
pub fn assert_single_representation(target: &FakeTarget) {
    assert!(target.overlay_count() <= 1, "{} overlays", target.overlay_count());
    assert!(
        !(target.overlay_count() > 0 && target.marked_count() > 0),
        "both an overlay and {} marked elements",
        target.marked_count()
    );
}

#[allow(dead_code)]
pub fn assert_cleared(target: &FakeTarget) {
    assert_eq!(target.overlay_count(), 0);
    assert_eq!(target.marked_count(), 0);
}
