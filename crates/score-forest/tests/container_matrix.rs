use std::collections::BTreeSet;

use score_forest::{MaxHeap, Record, ScoreContainer, SplayTree};
use score_forest_util::Fuzzer;

fn containers() -> Vec<(&'static str, Box<dyn ScoreContainer>)> {
    vec![
        ("splay", Box::new(SplayTree::new())),
        ("heap", Box::new(MaxHeap::new())),
    ]
}

fn drain(c: &mut dyn ScoreContainer) -> Vec<Record> {
    std::iter::from_fn(|| c.extract_max()).collect()
}

#[test]
fn walkthrough_matrix() {
    for (name, mut c) in containers() {
        c.insert(Record::new("A", 5));
        c.insert(Record::new("B", 3));
        c.insert(Record::new("C", 8));
        assert_eq!(c.extract_max(), Some(Record::new("C", 8)), "{name}");
        assert_eq!(c.size(), 2, "{name}");
        assert_eq!(c.search(3), Some(Record::new("B", 3)), "{name}");
        assert!(c.remove("B"), "{name}");
        assert_eq!(c.size(), 1, "{name}");
        assert_eq!(c.search(3), None, "{name}");
    }
}

#[test]
fn empty_matrix() {
    for (name, mut c) in containers() {
        assert_eq!(c.extract_max(), None, "{name}");
        assert_eq!(c.size(), 0, "{name}");
        assert!(c.is_empty(), "{name}");
        assert!(!c.remove("x"), "{name}");
    }
}

#[test]
fn build_then_drain_matrix() {
    for seed in 0..5 {
        let mut fuzzer = Fuzzer::new(Some(seed));
        let records = fuzzer.records(300, -50, 50);
        let ids: BTreeSet<String> = records.iter().map(|r| r.id.clone()).collect();

        for (name, mut c) in containers() {
            c.build(records.clone());
            assert_eq!(c.size(), records.len(), "{name}");

            let out = drain(c.as_mut());
            assert!(
                out.windows(2).all(|w| w[0].score >= w[1].score),
                "{name}: extraction not descending"
            );
            let got: BTreeSet<String> = out.into_iter().map(|r| r.id).collect();
            assert_eq!(got, ids, "{name}");
            assert!(c.is_empty(), "{name}");
        }
    }
}

#[test]
fn build_order_does_not_change_contents() {
    let mut fuzzer = Fuzzer::new(Some(11));
    let records = fuzzer.records(100, 0, 20);
    let mut shuffled = records.clone();
    fuzzer.shuffle(&mut shuffled);

    let mut a = SplayTree::new();
    let mut b = SplayTree::new();
    a.build(records);
    b.build(shuffled);

    let key = |t: &SplayTree| {
        let mut v: Vec<(i64, String)> = t.records().into_iter().map(|r| (r.score, r.id)).collect();
        v.sort();
        v
    };
    assert_eq!(key(&a), key(&b));
}

#[test]
fn repeated_ids_matrix() {
    for (name, mut c) in containers() {
        c.build(vec![
            Record::new("x", 1),
            Record::new("y", 2),
            Record::new("x", 9),
            Record::new("z", 3),
            Record::new("y", 0),
        ]);
        assert_eq!(c.size(), 3, "{name}");
        let scores: Vec<i64> = drain(c.as_mut()).iter().map(|r| r.score).collect();
        // the last score seen per id wins
        assert_eq!(scores, vec![9, 3, 0], "{name}");
    }
}

#[test]
fn search_all_removed_score_matrix() {
    for (name, mut c) in containers() {
        for i in 0..6 {
            c.insert(Record::new(format!("s{i}"), if i % 2 == 0 { 4 } else { 6 }));
        }
        assert_eq!(c.search(4).map(|r| r.score), Some(4), "{name}");
        for i in [0, 2, 4] {
            assert!(c.remove(&format!("s{i}")), "{name}");
        }
        assert_eq!(c.search(4), None, "{name}");
        assert_eq!(c.search(6).map(|r| r.score), Some(6), "{name}");
    }
}
