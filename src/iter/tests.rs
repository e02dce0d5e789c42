#![cfg(test)]

use std::cell::Cell;

use proptest::prelude::*;

use super::*;

/// An iterator that starts yielding again after reporting exhaustion.
struct Flaky<'a> {
    calls: &'a Cell<usize>,
}

impl Iterator for Flaky<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        (call % 2 == 0).then_some(call)
    }
}

#[test]
fn test_sequence_stays_exhausted() {
    let calls = Cell::new(0);
    let mut seq = as_sequence(Flaky { calls: &calls });
    assert_eq!(seq.next(), Some(0));
    assert_eq!(seq.next(), None);
    assert_eq!(seq.next(), None, "A Sequence should never restart once exhausted.");
    assert_eq!(calls.get(), 2, "The source shouldn't be pulled from after it runs out.");
    assert!(seq.is_exhausted());
}

#[test]
fn test_sequence_empty_shortcut() {
    assert!(as_sequence(Vec::<u8>::new()).is_exhausted());
    assert!(as_sequence([0_u8; 0]).is_exhausted());
    assert!(as_sequence([1]).is_live());
    assert!(
        as_sequence((0..4).filter(|_| false)).is_live(),
        "Emptiness that isn't cheaply knowable should only show when pulled."
    );
    assert_eq!(Sequence::<std::vec::IntoIter<u8>>::empty().next(), None);
}

#[test]
fn test_range() {
    assert_eq!(range(5).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    assert_eq!(range(0).count(), 0);
    assert_eq!(range(-3).count(), 0, "A negative end with the default step yields nothing.");
    assert_eq!(range_from(5, 10).collect::<Vec<_>>(), [5, 6, 7, 8, 9]);
    assert_eq!(range_from(10, 5).count(), 0);

    let descending = range_step(0, -5, -1).expect("non-zero step");
    assert_eq!(descending.collect::<Vec<_>>(), [0, -1, -2, -3, -4]);

    let stepped = range_step(0, 10, 3).expect("non-zero step");
    assert_eq!(stepped.size_hint(), (4, Some(4)));
    assert_eq!(stepped.collect::<Vec<_>>(), [0, 3, 6, 9]);

    let stepped = range_step(10, -1, -4).expect("non-zero step");
    assert_eq!(stepped.len(), 3);
    assert_eq!(stepped.collect::<Vec<_>>(), [10, 6, 2]);

    for (begin, end) in [(0, 0), (-5, 5), (5, -5)] {
        assert_eq!(range_step(begin, end, 0), Err(error::ZeroStepError));
    }
}

#[test]
fn test_range_bounds() {
    let near_max: Vec<_> = range_step(i64::MAX - 2, i64::MAX, 5).expect("non-zero step").collect();
    assert_eq!(near_max, [i64::MAX - 2], "Stepping past i64::MAX should end the range.");

    let mut wide = range_step(i64::MIN, i64::MAX, i64::MAX).expect("non-zero step");
    assert_eq!(wide.len(), 3);
    assert_eq!(wide.next(), Some(i64::MIN));
    assert_eq!(wide.next(), Some(-1));
    assert_eq!(wide.next(), Some(i64::MAX - 1));
    assert_eq!(wide.next(), None);
}

#[test]
fn test_chain() {
    assert_eq!(chain([vec![0], vec![1]]).collect::<Vec<_>>(), [0, 1]);
    assert_eq!(chain(Vec::<Vec<u8>>::new()).next(), None, "No iterables should yield nothing.");
    assert_eq!(
        chain([vec![], vec![1, 2], vec![], vec![3]]).collect::<Vec<_>>(),
        [1, 2, 3],
        "Empty iterables should be skipped over."
    );

    let boxed: [Box<dyn Iterator<Item = i64>>; 2] =
        [Box::new(range(2)), Box::new([7, 8].into_iter())];
    let chained = chain(boxed);
    assert_eq!(chained.size_hint(), (4, Some(4)));
    assert_eq!(chained.collect::<Vec<_>>(), [0, 1, 7, 8]);
}

#[test]
fn test_cycle() {
    assert_eq!(cycle(Vec::<u8>::new()).next(), None, "Cycling nothing should terminate.");
    assert_eq!(cycle([1, 2]).take(5).collect::<Vec<_>>(), [1, 2, 1, 2, 1]);
    assert_eq!(cycle([1, 2]).size_hint(), (usize::MAX, None));

    let calls = Cell::new(0);
    let cycled: Vec<_> = cycle(Flaky { calls: &calls }).take(4).collect();
    assert_eq!(cycled, [0, 0, 0, 0], "Only the first pass of the source should be recorded.");
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_cycle_size_hint() {
    let mut maybe_empty = cycle((0..4).filter(|_| false));
    assert_eq!(
        maybe_empty.size_hint(),
        (0, None),
        "A source that might be empty shouldn't promise any items."
    );
    assert_eq!(maybe_empty.next(), None);
    assert_eq!(maybe_empty.size_hint(), (0, Some(0)));

    let mut cycled = cycle((0..4).filter(|n| n % 2 == 0));
    assert_eq!(cycled.size_hint(), (0, None));
    cycled.next();
    assert_eq!(cycled.size_hint(), (usize::MAX, None), "Once recorded, cycling is endless.");

    let never = || cycle((0..4).filter(|_| false));
    let zipped = zip([never(), never()]);
    assert_eq!(zipped.size_hint().0, 0, "The lower bound shouldn't overstate the items.");
    assert_eq!(zipped.count(), 0);
}

#[test]
fn test_repeat() {
    let mut repeated = repeat([1, 2, 3], 2).expect("positive count");
    assert_eq!(repeated.size_hint(), (6, Some(6)));
    repeated.next();
    assert_eq!(repeated.size_hint(), (5, Some(5)));
    assert_eq!(repeated.collect::<Vec<_>>(), [2, 3, 1, 2, 3]);

    assert_eq!(repeat([1, 2], 1).expect("positive count").collect::<Vec<_>>(), [1, 2]);
    assert_eq!(repeat(Vec::<u8>::new(), 5).expect("positive count").count(), 0);
    assert_eq!(repeat([1], 0).err(), Some(error::NonPositiveCountError { count: 0 }));

    let mut replaying = repeat(range(2), 3).expect("positive count");
    assert_eq!(replaying.by_ref().take(3).collect::<Vec<_>>(), [0, 1, 0]);
    assert_eq!(replaying.size_hint(), (3, Some(3)), "Mid-replay hints should be exact.");
    assert_eq!(replaying.by_ref().count(), 3);
    assert_eq!(replaying.next(), None);
}

#[test]
fn test_zip() {
    assert_eq!(zip([vec![1, 2, 3], vec![4, 5]]).collect::<Vec<_>>(), [[1, 4], [2, 5]]);
    assert_eq!(zip([vec![1, 2], vec![3, 4]]).collect::<Vec<_>>(), [[1, 3], [2, 4]]);
    assert_eq!(zip(Vec::<Vec<u8>>::new()).next(), None, "No iterables should yield nothing.");
    assert_eq!(zip([vec![1], vec![]]).count(), 0);
    assert_eq!(zip([range(3), range(8), range(5)]).size_hint(), (3, Some(3)));
}

#[test]
fn test_zip_strict() {
    let mut zipped = zip_strict([vec![1, 2, 3], vec![4, 5]]);
    assert_eq!(zipped.next(), Some(Ok(vec![1, 4])));
    assert_eq!(zipped.next(), Some(Ok(vec![2, 5])));
    assert_eq!(
        zipped.next(),
        Some(Err(MismatchedLengthsError { round: 2 })),
        "The error should name the round where the inputs diverged."
    );
    assert_eq!(zipped.next(), None, "Nothing should follow the error.");

    let mut zipped = zip_strict([vec![1], vec![2, 3], vec![4]]);
    assert_eq!(zipped.next(), Some(Ok(vec![1, 2, 4])));
    assert_eq!(zipped.next(), Some(Err(MismatchedLengthsError { round: 1 })));

    let equal: Result<Vec<_>, _> = zip_strict([range(3), range(3)]).collect();
    assert_eq!(equal, Ok(vec![vec![0, 0], vec![1, 1], vec![2, 2]]));
    assert_eq!(zip_strict(Vec::<Vec<u8>>::new()).next(), None);
    assert_eq!(zip_strict([Vec::<u8>::new(), Vec::new()]).next(), None);
}

#[test]
fn test_enumerate() {
    assert_eq!(
        enumerate([0, 1, 2], -3).collect::<Vec<_>>(),
        [(-3, 0), (-2, 1), (-1, 2)],
        "Negative starts should be accepted."
    );
    assert_eq!(enumerate("ab".chars(), 0).collect::<Vec<_>>(), [(0, 'a'), (1, 'b')]);
    assert_eq!(enumerate([1, 2], 10).len(), 2);

    let mut near_max = enumerate(['a', 'b', 'c'], i64::MAX - 1);
    assert_eq!(near_max.size_hint(), (2, Some(2)), "Indices past i64::MAX can't be counted.");
    assert_eq!(near_max.next(), Some((i64::MAX - 1, 'a')));
    assert_eq!(near_max.next(), Some((i64::MAX, 'b')));
    assert_eq!(near_max.next(), None, "The index should never wrap around to a negative.");
    assert_eq!(near_max.size_hint(), (0, Some(0)));
}

proptest! {
    #[test]
    fn range_matches_std(begin in -50_i64..50, end in -50_i64..50, step in 1_i64..7) {
        let ascending: Vec<_> = range_step(begin, end, step).expect("non-zero step").collect();
        prop_assert_eq!(ascending, (begin..end).step_by(step as usize).collect::<Vec<_>>());

        let descending: Vec<_> = range_step(end, begin, -step).expect("non-zero step").collect();
        let expected: Vec<_> = (begin + 1..=end).rev().step_by(step as usize).collect();
        prop_assert_eq!(descending, expected);
    }

    #[test]
    fn combinators_are_deterministic(items in prop::collection::vec(any::<u8>(), 0..8), n in 1_usize..4) {
        let collect_all = || {
            (
                chain([items.clone(), items.clone()]).collect::<Vec<_>>(),
                repeat(items.clone(), n).expect("positive count").collect::<Vec<_>>(),
                zip([items.clone(), items.clone()]).collect::<Vec<_>>(),
                product([items.clone(), items.clone()]).collect::<Vec<_>>(),
            )
        };
        prop_assert_eq!(collect_all(), collect_all());
        prop_assert_eq!(collect_all().1.len(), items.len() * n);
    }

    #[test]
    fn zip_stops_with_shortest(a in 0_i64..20, b in 0_i64..20) {
        prop_assert_eq!(zip([range(a), range(b)]).count() as i64, a.min(b));

        let strict: Vec<_> = zip_strict([range(a), range(b)]).collect();
        let oks = strict.iter().filter(|round| round.is_ok()).count() as i64;
        prop_assert_eq!(oks, a.min(b));
        prop_assert_eq!(strict.last().is_some_and(|round| round.is_err()), a != b);
    }
}
