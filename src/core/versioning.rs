// src/core/versioning.rs
//! Collapse stored revisions to the latest one per logical record

use std::collections::HashMap;

/// A record stored server-side as a series of revisions sharing one identity
pub trait Versioned {
    fn identity(&self) -> i64;
    fn version(&self) -> i64;
}

/// Keep one record per identity: the one with the highest version.
///
/// On equal versions the item appearing later in `items` wins. The output
/// lists identities in the order they first appear in `items`. Never fails
/// and never touches the input.
pub fn latest_versions<T>(items: &[T]) -> Vec<T>
where
    T: Versioned + Clone,
{
    let mut slots: HashMap<i64, usize> = HashMap::with_capacity(items.len());
    let mut latest: Vec<T> = Vec::with_capacity(items.len());

    for item in items {
        match slots.get(&item.identity()) {
            Some(&slot) => {
                if item.version() >= latest[slot].version() {
                    latest[slot] = item.clone();
                }
            }
            None => {
                slots.insert(item.identity(), latest.len());
                latest.push(item.clone());
            }
        }
    }

    latest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Rev {
        id: i64,
        v: i64,
        label: &'static str,
    }

    impl Versioned for Rev {
        fn identity(&self) -> i64 {
            self.id
        }

        fn version(&self) -> i64 {
            self.v
        }
    }

    fn rev(id: i64, v: i64, label: &'static str) -> Rev {
        Rev { id, v, label }
    }

    #[test]
    fn test_keeps_highest_version_per_id() {
        let input = vec![rev(1, 1, "a"), rev(1, 2, "b"), rev(2, 1, "c")];
        let output = latest_versions(&input);

        assert_eq!(output.len(), 2);
        assert!(output.contains(&rev(1, 2, "b")));
        assert!(output.contains(&rev(2, 1, "c")));
    }

    #[test]
    fn test_empty_input() {
        let input: Vec<Rev> = Vec::new();
        assert!(latest_versions(&input).is_empty());
    }

    #[test]
    fn test_unique_ids_pass_through() {
        let input = vec![rev(3, 9, "x"), rev(1, 1, "y"), rev(2, 4, "z")];
        assert_eq!(latest_versions(&input), input);
    }

    #[test]
    fn test_older_revision_after_newer_is_ignored() {
        let input = vec![rev(1, 5, "new"), rev(1, 2, "old"), rev(1, 4, "older")];
        assert_eq!(latest_versions(&input), vec![rev(1, 5, "new")]);
    }

    #[test]
    fn test_equal_versions_later_item_wins() {
        let input = vec![rev(1, 3, "first"), rev(2, 1, "other"), rev(1, 3, "second")];
        let output = latest_versions(&input);

        assert_eq!(output, vec![rev(1, 3, "second"), rev(2, 1, "other")]);
    }

    #[test]
    fn test_output_follows_first_appearance_and_input_untouched() {
        let input = vec![rev(2, 1, "a"), rev(1, 1, "b"), rev(2, 7, "c"), rev(3, 1, "d")];
        let snapshot = input.clone();

        let output = latest_versions(&input);

        let ids: Vec<i64> = output.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(output[0].v, 7);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_every_identity_gets_its_maximum() {
        let input: Vec<Rev> = (0..60)
            .map(|n| rev(n % 6, (n * 7) % 11, "r"))
            .collect();
        let output = latest_versions(&input);

        assert_eq!(output.len(), 6);
        for kept in &output {
            let max = input
                .iter()
                .filter(|r| r.id == kept.id)
                .map(|r| r.v)
                .max()
                .unwrap();
            assert_eq!(kept.v, max);
        }
    }
}
