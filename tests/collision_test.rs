//! Overlap symmetry and shrink edge cases

use proptest::prelude::*;

use tui_debris::core::collision::overlaps;
use tui_debris::core::{CollisionError, CollisionIndex};
use tui_debris::types::Rect;

fn rect() -> impl Strategy<Value = Rect> {
    (0.0f64..40.0, 0.0f64..80.0, 0.0f64..10.0, 0.0f64..10.0)
        .prop_map(|(top, left, height, width)| Rect::new(top, left, height, width))
}

proptest! {
    #[test]
    fn overlap_is_symmetric_without_shrink(a in rect(), b in rect()) {
        prop_assert_eq!(overlaps(&a, &b, 0.0), overlaps(&b, &a, 0.0));
    }

    #[test]
    fn shrinking_never_adds_overlaps(a in rect(), b in rect(), shrink in 0.0f64..5.0) {
        if overlaps(&a, &b, shrink) {
            prop_assert!(overlaps(&a, &b, 0.0));
        }
    }

    #[test]
    fn index_agrees_with_free_function(a in rect(), b in rect(), shrink in 0.0f64..3.0) {
        let mut index = CollisionIndex::new(Rect::new(0.0, 0.0, 60.0, 100.0));
        let id = index.insert(a);
        prop_assert_eq!(index.overlaps(id, &b, shrink).unwrap(), overlaps(&a, &b, shrink));
    }
}

#[test]
fn shared_edge_counts_only_without_shrink() {
    let a = Rect::new(0.0, 0.0, 2.0, 2.0);
    let b = Rect::new(0.0, 2.0, 2.0, 4.0);
    assert!(overlaps(&a, &b, 0.0));
    assert!(overlaps(&b, &a, 0.0));
    // Half the smaller dimension of `a`
    assert!(!overlaps(&a, &b, 1.0));
    assert!(!overlaps(&a, &b, 1.5));
}

#[test]
fn shared_corner_counts_only_without_shrink() {
    let a = Rect::new(0.0, 0.0, 3.0, 3.0);
    let b = Rect::new(3.0, 3.0, 1.0, 1.0);
    assert!(overlaps(&a, &b, 0.0));
    assert!(!overlaps(&a, &b, 0.5));
}

#[test]
fn point_inside_shrunk_obstacle_hits() {
    let obstacle = Rect::new(10.0, 10.0, 3.0, 5.0);
    assert!(overlaps(&obstacle, &Rect::point(11.5, 12.0), 1.0));
    assert!(!overlaps(&obstacle, &Rect::point(10.0, 12.0), 1.0));
    assert!(!overlaps(&obstacle, &Rect::point(11.5, 10.5), 1.0));
}

#[test]
fn stale_handles_are_reported() {
    let mut index = CollisionIndex::new(Rect::new(0.0, 0.0, 30.0, 80.0));
    let id = index.insert(Rect::new(0.0, 0.0, 1.0, 1.0));
    index.remove(id).unwrap();

    assert_eq!(index.remove(id), Err(CollisionError::StaleObstacle(id)));
    assert_eq!(index.mark_hit(id), Err(CollisionError::StaleObstacle(id)));
    assert_eq!(index.update_top(id, 3.0), Err(CollisionError::StaleObstacle(id)));

    // A reused slot gets a fresh identity.
    let reused = index.insert(Rect::new(5.0, 5.0, 1.0, 1.0));
    assert_eq!(reused.index(), id.index());
    assert_ne!(reused, id);
    assert!(index.get(id).is_err());
}
