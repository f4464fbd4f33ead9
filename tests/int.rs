use bumpalo::Bump;
use expect_test::expect;
use slist::IntList;
use slist::List;
use slist::NOT_FOUND;

fn int_list(values: &[i64]) -> IntList {
  let mut x = IntList::new();
  for &v in values { x.add_at_tail(v); }
  x
}

#[test]
fn test_constructor() {
  let x = IntList::new();
  assert_eq!(x.len(), 0);
  assert!(x.is_empty());
  assert_eq!(x, IntList::default());
  expect!["IntList([])"].assert_eq(&format!("{:?}", x));
}

#[test]
fn test_get() {
  let cases: &[(&str, &[i64], isize, i64)] = &[
    ("out of range in empty list", &[], 1, NOT_FOUND),
    ("index zero in empty list", &[], 0, NOT_FOUND),
    ("negative index", &[4, 1], -1, NOT_FOUND),
    ("index zero with one element", &[4], 0, 4),
    ("out of range with elements", &[4, 1, 60], 4, NOT_FOUND),
    ("inner element", &[4, 1, 60, 5], 2, 60),
    ("last element", &[4, 1, 60, 5], 3, 5),
    ("index equal to length", &[4, 1, 60, 5], 4, NOT_FOUND),
  ];

  for &(name, init, index, want) in cases {
    assert_eq!(int_list(init).get(index), want, "{}", name);
  }
}

#[test]
fn test_add_at_head() {
  let cases: &[(&str, &[i64], &[i64], &[i64])] = &[
    ("empty list", &[], &[1], &[1]),
    ("list with one element", &[], &[1, 2], &[2, 1]),
    ("list with elements", &[1, 2, 3], &[-5], &[-5, 1, 2, 3]),
  ];

  for &(name, init, inserted, want) in cases {
    let mut x = int_list(init);
    for &v in inserted { x.add_at_head(v); }
    assert_eq!(x, int_list(want), "{}", name);
    assert_eq!(x.len(), want.len(), "{}", name);
  }
}

#[test]
fn test_add_at_tail() {
  let cases: &[(&str, &[i64], &[i64], &[i64])] = &[
    ("empty list", &[], &[1], &[1]),
    ("list with one element", &[1], &[2], &[1, 2]),
    ("list with elements", &[1, 2, 3], &[-5, 6], &[1, 2, 3, -5, 6]),
  ];

  for &(name, init, inserted, want) in cases {
    let mut x = int_list(init);
    for &v in inserted { x.add_at_tail(v); }
    assert_eq!(x, int_list(want), "{}", name);
  }
}

#[test]
fn test_add_at_index() {
  let cases: &[(&str, &[i64], isize, &[i64])] = &[
    ("head of empty list", &[], 0, &[-5]),
    ("out of range in empty list", &[], 1, &[]),
    ("negative index", &[1, 2], -1, &[1, 2]),
    ("head", &[1, 2, 3], 0, &[-5, 1, 2, 3]),
    ("middle", &[1, 2, 3], 2, &[1, 2, -5, 3]),
    ("index equal to length", &[1, 2, 3], 3, &[1, 2, 3, -5]),
    ("out of range", &[1, 2], 8, &[1, 2]),
  ];

  for &(name, init, index, want) in cases {
    let mut x = int_list(init);
    x.add_at_index(index, -5);
    assert_eq!(x, int_list(want), "{}", name);
    assert_eq!(x.len(), want.len(), "{}", name);
  }
}

#[test]
fn test_delete_at_index() {
  let cases: &[(&str, &[i64], isize, &[i64])] = &[
    ("empty list", &[], 0, &[]),
    ("negative index", &[1, 2], -1, &[1, 2]),
    ("only element", &[1], 0, &[]),
    ("head", &[-5, 1, 2, 3], 0, &[1, 2, 3]),
    ("middle", &[1, 2, -5, 3], 2, &[1, 2, 3]),
    ("tail", &[1, 2, 3, -5], 3, &[1, 2, 3]),
    ("index equal to length", &[1, 2, 3], 3, &[1, 2, 3]),
  ];

  for &(name, init, index, want) in cases {
    let mut x = int_list(init);
    x.delete_at_index(index);
    assert_eq!(x, int_list(want), "{}", name);
    assert_eq!(x.len(), want.len(), "{}", name);
  }
}

#[test]
fn test_as_list() {
  let x = int_list(&[4, 1, 60, 5]);
  assert_eq!(x.as_list().get(2), Some(&60));
  assert_eq!(x.as_list().get(4), None);
  expect!["IntList([4, 1, 60, 5])"].assert_eq(&format!("{:?}", x));
}

#[test]
fn test_from_list() {
  let mut y = List::new();
  y.add_at_tail(1);
  y.add_at_tail(-1);
  let x = IntList::from(y);
  assert_eq!(x.get(1), -1);
  assert_eq!(x.get(2), NOT_FOUND);
}

#[test]
fn test_bump_allocator() {
  let bump = Bump::new();
  let mut x = IntList::new_in(&bump);
  x.add_at_tail(4);
  x.add_at_tail(1);
  x.add_at_index(1, 60);
  x.delete_at_index(0);
  assert_eq!(x, int_list(&[60, 1]));
}
