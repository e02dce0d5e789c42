#![cfg(test)]

use super::*;

#[test]
fn test_pop_and_shift() {
    let mut vec = vec![1, 2, 3];
    assert_eq!(pop(&mut vec), Some(3));
    assert_eq!(shift(&mut vec), Some(1));
    assert_eq!(vec, [2]);
    assert_eq!(shift(&mut vec), Some(2));
    assert_eq!(shift(&mut vec), None, "Shifting an empty Vec should give None.");
    assert_eq!(pop(&mut vec), None);

    let mut deque = VecDeque::from([1, 2, 3]);
    assert_eq!(shift(&mut deque), Some(1));
    assert_eq!(pop(&mut deque), Some(3));
    assert_eq!(deque.peek_first(), deque.peek_last());
}

#[test]
fn test_conditional_removal() {
    let mut vec = vec![1, 2, 3];
    assert_eq!(pop_if(&mut vec, |last| *last == 2), None, "A rejected element should stay.");
    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(pop_if(&mut vec, |last| *last == 3), Some(3));
    assert_eq!(shift_if(&mut vec, |first| *first == 1), Some(1));
    assert_eq!(vec, [2]);

    let mut empty: VecDeque<u8> = VecDeque::new();
    let mut called = false;
    assert_eq!(
        shift_if(&mut empty, |_| {
            called = true;
            true
        }),
        None
    );
    assert!(!called, "The predicate shouldn't be called for an empty collection.");
}

#[test]
fn test_delete_if() {
    let mut map = HashMap::from([(String::from("a"), 1), (String::from("b"), 2)]);
    assert_eq!(delete_if(&mut map, |map| map.contains_key("c"), "a"), None);
    assert_eq!(map.len(), 2, "Nothing should be removed when the predicate fails.");
    assert_eq!(delete_if(&mut map, |map| map.contains_key("b"), "a"), Some(1));
    assert_eq!(delete_if(&mut map, |_| true, "a"), None, "A missing key should give None.");

    let mut tree = BTreeMap::from([(1, 'x'), (2, 'y')]);
    assert_eq!(delete_if(&mut tree, |tree| tree.len() == 2, &2), Some('y'));
    assert_eq!(tree.into_iter().collect::<Vec<_>>(), [(1, 'x')]);
}
