//! Property-based tests for note loading and ordering.
//!
//! These tests use proptest to generate random note collections and verify
//! that ordering invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::filesystem::MemoryFS;
    use crate::note::Note;
    use crate::phases::{load, ordering};
    use proptest::prelude::*;

    fn notes_from(slugs: &[String]) -> Vec<Note> {
        slugs
            .iter()
            .map(|slug| Note {
                slug: slug.clone(),
                ..Note::default()
            })
            .collect()
    }

    /// Distinct slugs in an arbitrary order.
    fn shuffled_slugs(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set("[a-z0-9-]{1,12}", 0..max)
            .prop_map(|slugs| slugs.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|slugs| Just(slugs).prop_shuffle())
    }

    proptest! {
        /// Property: ordering output is sorted by slug
        #[test]
        fn ordering_is_sorted(input in shuffled_slugs(20)) {
            let ordered = ordering::execute(notes_from(&input)).unwrap();
            for pair in ordered.windows(2) {
                prop_assert!(pair[0].slug.as_bytes() <= pair[1].slug.as_bytes());
            }
        }

        /// Property: ordering output is a permutation of its input
        #[test]
        fn ordering_is_permutation(input in shuffled_slugs(20)) {
            let ordered = ordering::execute(notes_from(&input)).unwrap();
            prop_assert_eq!(ordered.len(), input.len());

            let mut output: Vec<String> = ordered.into_iter().map(|n| n.slug).collect();
            let mut expected = input.clone();
            output.sort();
            expected.sort();
            prop_assert_eq!(output, expected);
        }

        /// Property: any repeated slug is rejected
        #[test]
        fn ordering_rejects_repeats(
            slugs in prop::collection::vec("[a-z]{1,4}", 1..10),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut input = slugs.clone();
            input.push(pick.get(&slugs).clone());

            prop_assert!(ordering::execute(notes_from(&input)).is_err());
        }

        /// Property: loading then ordering yields the same order regardless
        /// of record file names
        #[test]
        fn load_then_order_ignores_file_names(slugs in shuffled_slugs(12)) {
            let mut content = MemoryFS::new();
            for (i, slug) in slugs.iter().enumerate() {
                content.add_file_string(format!("{:03}.yaml", i), &format!("slug: '{}'\n", slug));
            }

            let notes = ordering::execute(load::execute(&content).unwrap()).unwrap();
            let loaded: Vec<String> = notes.into_iter().map(|n| n.slug).collect();
            let mut expected = slugs.clone();
            expected.sort();
            prop_assert_eq!(loaded, expected);
        }
    }
}
