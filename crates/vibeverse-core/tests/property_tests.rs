//! Property checks for favorite identity and toggle symmetry.

mod common;
use common::{mem, prefs};
use proptest::prelude::*;
use vibeverse_core::{normalize_video_list, Catalog, Quote};

fn words() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{1,24}")
        .expect("valid regex")
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

fn quotes(max: usize) -> impl Strategy<Value = Vec<Quote>> {
    prop::collection::vec((words(), words()), 0..max).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter_map(|(t, s)| Quote::from_input(&t, &s))
            .collect()
    })
}

proptest! {
    #[test]
    fn identity_ignores_id_and_padding(text in words(), source in words(), pad in " {0,3}") {
        let a = Quote::from_input(&text, &source).unwrap();
        let b = Quote {
            id: "different".into(),
            text: format!("{pad}{}{pad}", a.text),
            source: format!("{pad}{}", a.source),
        };
        let mut cat = Catalog::load(prefs(&mem()), &[]);
        cat.toggle_favorite(&a);
        prop_assert!(cat.is_favorite(&b));
        cat.toggle_favorite(&b);
        prop_assert!(cat.favorites().is_empty());
    }

    #[test]
    fn double_toggle_restores_others(seed in quotes(12), pick in 0usize..12) {
        let mut cat = Catalog::load(prefs(&mem()), &[]);
        for q in &seed {
            if !cat.is_favorite(q) {
                cat.toggle_favorite(q);
            }
        }
        prop_assume!(!cat.favorites().is_empty());
        let target = cat.favorites()[pick % cat.favorites().len()].clone();
        let others: Vec<Quote> = cat
            .favorites()
            .iter()
            .filter(|q| !q.same_as(&target))
            .cloned()
            .collect();

        cat.toggle_favorite(&target);
        cat.toggle_favorite(&target);

        let after: Vec<Quote> = cat
            .favorites()
            .iter()
            .filter(|q| !q.same_as(&target))
            .cloned()
            .collect();
        prop_assert_eq!(after, others);
        prop_assert!(cat.is_favorite(&target));
    }

    #[test]
    fn favorites_never_hold_duplicates(ops in prop::collection::vec(quotes(3), 0..20)) {
        let mut cat = Catalog::load(prefs(&mem()), &[]);
        for batch in &ops {
            for q in batch {
                cat.toggle_favorite(q);
            }
        }
        let favs = cat.favorites();
        for (i, a) in favs.iter().enumerate() {
            for b in &favs[i + 1..] {
                prop_assert!(!a.same_as(b));
            }
        }
    }

    #[test]
    fn normalization_is_idempotent(names in prop::collection::vec("[a-c]( \\([0-9]\\))?\\.mp4", 0..10)) {
        let once = normalize_video_list(&names);
        let twice = normalize_video_list(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() <= 3);
    }
}
