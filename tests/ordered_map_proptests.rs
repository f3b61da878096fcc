// OrderedHashMap property tests (consolidated).
//
// Property 1: op-sequence equivalence against an ordered model.
//  - Model: Vec<(key, value)> in insertion order.
//  - Operations: insert, remove by key, remove_at via a held position,
//    clear, point lookups.
//  - Invariant after each step: len() matches, iter() yields exactly the
//    model sequence, and every model key is reachable through get().
//
// Property 2: position stability across growth.
//  - Positions taken immediately after insertion still resolve to the same
//    key-value pair after the table has grown several times.
//
// Property 3: removal invalidates exactly one position.
//  - After remove_at, the removed position is rejected and every other
//    held position still resolves.
use proptest::prelude::*;

use lanyard_map::Error;
use lanyard_map::OrderedHashMap;
use lanyard_map::Position;

// Property 1: the map behaves like an insertion-ordered Vec of pairs.
proptest! {
    #[test]
    fn prop_matches_ordered_model(
        keys in 1usize..=8,
        ops in proptest::collection::vec((0u8..=4u8, 0usize..100usize), 1..200),
    ) {
        let mut map: OrderedHashMap<usize, usize> = OrderedHashMap::new();
        let mut model: Vec<(usize, usize)> = Vec::new();
        let mut step = 0usize;

        for (op, raw_k) in ops {
            let k = raw_k % keys;
            step += 1;
            match op {
                // Insert never overwrites and never reorders.
                0 | 1 => {
                    let (_, inserted) = map.insert(k, step);
                    let fresh = !model.iter().any(|(mk, _)| *mk == k);
                    prop_assert_eq!(inserted, fresh);
                    if fresh {
                        model.push((k, step));
                    }
                }
                // Remove by key.
                2 => {
                    let removed = map.remove(&k);
                    let idx = model.iter().position(|(mk, _)| *mk == k);
                    prop_assert_eq!(removed, idx.map(|i| model[i].1));
                    if let Some(i) = idx {
                        model.remove(i);
                    }
                }
                // Remove through a freshly resolved position.
                3 => {
                    if let Some(pos) = map.find(&k) {
                        let idx = model.iter().position(|(mk, _)| *mk == k);
                        let (rk, rv) = map.remove_at(pos).unwrap();
                        prop_assert_eq!(rk, k);
                        prop_assert_eq!(Some(rv), idx.map(|i| model[i].1));
                        model.remove(idx.unwrap());
                    } else {
                        prop_assert!(!model.iter().any(|(mk, _)| *mk == k));
                    }
                }
                // Clear, rarely.
                4 => {
                    if raw_k % 19 == 0 {
                        map.clear();
                        model.clear();
                    }
                }
                _ => unreachable!(),
            }

            // Invariants after each step.
            prop_assert_eq!(map.len(), model.len());
            prop_assert!(map.iter().map(|(k, v)| (*k, *v)).eq(model.iter().copied()));
            for (mk, mv) in &model {
                prop_assert_eq!(map.get(mk), Some(mv));
                prop_assert_eq!(map.at(mk), Ok(mv));
                prop_assert_eq!(map.count(mk), 1);
            }
        }

        // Final: reverse iteration mirrors the model too.
        prop_assert!(
            map.iter().rev().map(|(k, v)| (*k, *v)).eq(model.iter().rev().copied())
        );
    }
}

// Property 2: growth never disturbs held positions or insertion order.
proptest! {
    #[test]
    fn prop_positions_survive_growth(n in 1usize..400) {
        let mut map: OrderedHashMap<usize, usize> = OrderedHashMap::new();
        let mut held: Vec<(usize, Position)> = Vec::new();

        for k in 0..n {
            let (pos, inserted) = map.insert(k, k * 7);
            prop_assert!(inserted);
            held.push((k, pos));
        }

        for (k, pos) in &held {
            let cursor = map.cursor_at(*pos).unwrap();
            prop_assert_eq!(cursor.get(), Some((k, &(k * 7))));
        }
        prop_assert!(map.keys().copied().eq(0..n));
    }
}

// Property 3: remove_at invalidates the removed position and nothing else.
proptest! {
    #[test]
    fn prop_removal_invalidates_one_position(
        n in 2usize..64,
        victim in 0usize..64,
    ) {
        let victim = victim % n;
        let mut map: OrderedHashMap<usize, usize> = OrderedHashMap::new();
        let mut held = Vec::new();
        for k in 0..n {
            held.push(map.insert(k, k).0);
        }

        let (rk, rv) = map.remove_at(held[victim]).unwrap();
        prop_assert_eq!((rk, rv), (victim, victim));
        prop_assert_eq!(map.remove_at(held[victim]), Err(Error::InvalidPosition));

        for (k, pos) in held.iter().enumerate() {
            if k == victim {
                continue;
            }
            let cursor = map.cursor_at(*pos).unwrap();
            prop_assert_eq!(cursor.get(), Some((&k, &k)));
        }
        prop_assert_eq!(map.len(), n - 1);
    }
}
