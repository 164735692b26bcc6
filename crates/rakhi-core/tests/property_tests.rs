//! Property-based tests for collections and shape arrangement

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rakhi_core::notes::NoteSize;
use rakhi_core::todo::Priority;
use rakhi_core::{
    AchievementTracker, MemoryStore, Persistence, PhotoBoard, Shape, StickyNotes, TodoManager,
};

fn short_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{1,30}").expect("valid regex")
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop::sample::select(Shape::all().to_vec())
}

proptest! {
    /// Deleting one todo leaves every other todo in its original order
    #[test]
    fn delete_keeps_relative_order(
        texts in prop::collection::vec(short_text_strategy(), 1..20),
        victim in any::<prop::sample::Index>(),
    ) {
        let persistence = Persistence::new(MemoryStore::new());
        let mut achievements = AchievementTracker::mount(persistence.clone());
        let mut todos = TodoManager::basic(persistence.clone());

        let ids: Vec<_> = texts
            .iter()
            .map(|t| todos.add(t, Priority::Low, None, None, &mut achievements).unwrap())
            .collect();

        let victim = victim.index(ids.len());
        let removed = todos.delete(&ids[victim]).unwrap();
        prop_assert_eq!(&removed.id, &ids[victim]);

        let mut expected = ids.clone();
        expected.remove(victim);
        let remaining: Vec<_> = todos.items().iter().map(|t| t.id.clone()).collect();
        prop_assert_eq!(&remaining, &expected);

        // And the same after a reload
        let reloaded: Vec<_> = TodoManager::basic(persistence)
            .items()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        prop_assert_eq!(reloaded, expected);
    }

    /// N creations then a reload yields the same N notes
    #[test]
    fn notes_reload_unchanged(texts in prop::collection::vec(short_text_strategy(), 0..15), seed in any::<u64>()) {
        let persistence = Persistence::new(MemoryStore::new());
        let mut achievements = AchievementTracker::mount(persistence.clone());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut notes = StickyNotes::mount(persistence.clone());

        for text in &texts {
            notes.create(text, "yellow", NoteSize::Small, &mut rng, &mut achievements).unwrap();
        }

        let reloaded = StickyNotes::mount(persistence);
        let summary = |n: &StickyNotes| -> Vec<(String, String, NoteSize)> {
            n.notes().iter().map(|n| (n.id.to_string(), n.text.clone(), n.size)).collect()
        };
        prop_assert_eq!(reloaded.notes().len(), texts.len());
        prop_assert_eq!(summary(&reloaded), summary(&notes));
    }

    /// Photo i lands on point i mod K of the chosen shape
    #[test]
    fn arrangement_cycles_shape_points(shape in shape_strategy(), count in 1..40usize, seed in any::<u64>()) {
        let persistence = Persistence::new(MemoryStore::new());
        let mut achievements = AchievementTracker::mount(persistence);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = PhotoBoard::new();

        for i in 0..count {
            board.add(format!("photo-{i}"), String::new(), &mut rng, &mut achievements);
        }
        board.select_shape(shape);
        prop_assert!(board.arrange(false, &mut rng, &mut achievements));

        let points = shape.points();
        for (i, photo) in board.photos().iter().enumerate() {
            let expected = points[i % points.len()];
            prop_assert_eq!(photo.slot, Some(expected));
            prop_assert_eq!(photo.x, expected.x);
            prop_assert_eq!(photo.y, expected.y);
            prop_assert!((0.8..1.2).contains(&photo.scale));
        }
    }

    /// Shape points wrap around instead of running out
    #[test]
    fn shape_point_index_wraps(shape in shape_strategy(), i in 0..1000usize) {
        let k = shape.point_count();
        prop_assert_eq!(shape.point(i), shape.point(i % k));
    }
}
