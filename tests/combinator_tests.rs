use std::cell::Cell;
use std::cmp::Ordering;
use threeway::prelude::*;

#[test]
fn test_default_ordering_numbers() {
    let f = natural();
    assert_eq!(f.compare(&10, &10), Ordering::Equal);
    assert_eq!(f.compare(&20, &10), Ordering::Greater);
    assert_eq!(f.compare(&10, &20), Ordering::Less);
}

#[test]
fn test_default_ordering_strings() {
    let f = natural();
    assert_eq!(f.compare("a", "b"), Ordering::Less);
    assert_eq!(f.compare("a", "a"), Ordering::Equal);
    assert_eq!(f.compare("b", "a"), Ordering::Greater);
}

#[test]
fn test_default_ordering_incomparable_is_tie() {
    // partial_cmp returns None for NaN pairs; the default ordering maps
    // that to Equal instead of rejecting it.
    let f = natural();
    assert_eq!(f.compare(&f64::NAN, &1.0), Ordering::Equal);
    assert_eq!(f.compare(&1.0, &f64::NAN), Ordering::Equal);
    assert_eq!(f.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
}

#[test]
fn test_custom_comparator_closure() {
    struct Named {
        name: &'static str,
    }

    let by_name = |a: &Named, b: &Named| a.name.cmp(b.name);
    assert_eq!(
        by_name.compare(&Named { name: "Alice" }, &Named { name: "Bob" }),
        Ordering::Less
    );
}

#[test]
fn test_reverse() {
    let f = natural().reverse();
    assert_eq!(f.compare(&10, &20), Ordering::Greater);
    assert_eq!(f.compare(&10, &10), Ordering::Equal);
    assert_eq!(f.compare(&20, &10), Ordering::Less);
}

#[test]
fn test_reverse_is_exact_swap() {
    let forward = natural();
    let backward = natural().reverse();
    for a in -3..3 {
        for b in -3..3 {
            assert_eq!(backward.compare(&a, &b), forward.compare(&b, &a));
        }
    }
}

#[test]
fn test_double_reverse_restores_behavior() {
    let original = natural();
    let round_trip = natural().reverse().reverse();
    for a in -3..3 {
        for b in -3..3 {
            assert_eq!(round_trip.compare(&a, &b), original.compare(&a, &b));
        }
    }
}

#[test]
fn test_key_projection() {
    // Numbers compared by their decimal strings: "16" < "9" lexically.
    let f = natural().key(|x: &i32| x.to_string());
    assert_eq!(f.compare(&16, &9), Ordering::Less);
}

#[test]
fn test_key_agrees_with_projected_comparison() {
    let projection = |x: &i32| (x - 5).abs();
    let f = natural().key(projection);
    for a in 0..10 {
        for b in 0..10 {
            assert_eq!(
                f.compare(&a, &b),
                natural().compare(&projection(&a), &projection(&b))
            );
        }
    }
}

#[test]
fn test_key_transform_runs_once_per_argument() {
    let calls = Cell::new(0usize);
    let f = natural().key(|x: &i32| {
        calls.set(calls.get() + 1);
        *x
    });

    f.compare(&1, &2);
    assert_eq!(calls.get(), 2);

    f.compare(&3, &3);
    assert_eq!(calls.get(), 4);
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Field {
    Num(i32),
    Text(&'static str),
}

impl Field {
    fn is_text(&self) -> bool {
        matches!(self, Field::Text(_))
    }
}

fn by_num(a: &Field, b: &Field) -> Ordering {
    match (a, b) {
        (Field::Num(x), Field::Num(y)) => x.cmp(y),
        _ => unreachable!("partition comparator saw a text field"),
    }
}

fn by_text(a: &Field, b: &Field) -> Ordering {
    match (a, b) {
        (Field::Text(x), Field::Text(y)) => x.cmp(y),
        _ => unreachable!("matched comparator saw a numeric field"),
    }
}

#[test]
fn test_append_partitions_matched_values_last() {
    let f = by_num.append(Field::is_text, by_text);

    // Neither matched: the base comparator decides.
    assert_eq!(f.compare(&Field::Num(1), &Field::Num(1)), Ordering::Equal);
    assert_eq!(f.compare(&Field::Num(16), &Field::Num(9)), Ordering::Greater);

    // Mixed: text sorts after numbers.
    assert_eq!(f.compare(&Field::Num(1), &Field::Text("1")), Ordering::Less);
    assert_eq!(
        f.compare(&Field::Text("1"), &Field::Num(1)),
        Ordering::Greater
    );

    // Both matched: the matched comparator decides.
    assert_eq!(
        f.compare(&Field::Text("1"), &Field::Text("1")),
        Ordering::Equal
    );
    assert_eq!(
        f.compare(&Field::Text("16"), &Field::Text("9")),
        Ordering::Less
    );
}

#[test]
fn test_prepend_partitions_matched_values_first() {
    let f = by_num.prepend(Field::is_text, by_text);

    assert_eq!(f.compare(&Field::Num(16), &Field::Num(9)), Ordering::Greater);

    // Mixed: text sorts before numbers.
    assert_eq!(
        f.compare(&Field::Num(1), &Field::Text("1")),
        Ordering::Greater
    );
    assert_eq!(f.compare(&Field::Text("1"), &Field::Num(1)), Ordering::Less);

    assert_eq!(
        f.compare(&Field::Text("16"), &Field::Text("9")),
        Ordering::Less
    );
}

#[test]
fn test_append_with_plain_predicate() {
    let odds_last = natural().append(|n: &i32| n % 2 != 0, natural());
    let mut xs = vec![5, 2, 3, 8, 1];
    xs.sort_by(odds_last.as_fn());
    assert_eq!(xs, vec![2, 8, 1, 3, 5]);
}

#[test]
fn test_then_breaks_ties() {
    let records = [("alice", 30), ("alice", 25), ("bob", 25)];

    let f = on(|r: &(&str, u32)| r.0).then(on(|r: &(&str, u32)| r.1).reverse());

    // Same name: negated age comparison decides.
    assert_eq!(f.compare(&records[0], &records[1]), Ordering::Less);
    assert_eq!(f.compare(&records[1], &records[0]), Ordering::Greater);

    // Different names: the first stage alone decides, regardless of ages.
    assert_eq!(f.compare(&records[1], &records[2]), Ordering::Less);
}

#[test]
fn test_then_does_not_evaluate_tie_break_when_decisive() {
    let trap = |_: &(&str, u32), _: &(&str, u32)| -> Ordering {
        panic!("tie-break stage evaluated on a decisive comparison")
    };

    let f = on(|r: &(&str, u32)| r.0).then(trap);
    assert_eq!(f.compare(&("alice", 1), &("bob", 2)), Ordering::Less);
}

#[test]
fn test_then_chain_of_three_stages() {
    type Row = (u32, u32, u32);
    let f = on(|r: &Row| r.0)
        .then(on(|r: &Row| r.1))
        .then(on(|r: &Row| r.2).reverse());

    assert_eq!(f.compare(&(1, 1, 1), &(2, 0, 0)), Ordering::Less);
    assert_eq!(f.compare(&(1, 1, 1), &(1, 2, 0)), Ordering::Less);
    assert_eq!(f.compare(&(1, 1, 1), &(1, 1, 2)), Ordering::Greater);
    assert_eq!(f.compare(&(1, 1, 1), &(1, 1, 1)), Ordering::Equal);
}

#[test]
fn test_on_prefab() {
    let f = on(|s: &&str| s.to_lowercase());
    assert_eq!(f.compare(&"ZZZ", &"aaa"), Ordering::Greater);
    assert_eq!(f.compare(&"Aaa", &"aaa"), Ordering::Equal);
}

#[test]
fn test_polymorphic_comparators_infer_through_composition() {
    // natural() orders every PartialOrd type, so the compared type is only
    // known from the values themselves; the adapters must carry it through
    // the composition.
    assert_eq!(natural().reverse().compare(&1u8, &2u8), Ordering::Greater);
    assert_eq!(
        natural().then(natural().reverse()).compare("a", "b"),
        Ordering::Less
    );
    assert_eq!(
        natural()
            .reverse()
            .append(|s: &&str| s.is_empty(), natural())
            .compare(&"", &"x"),
        Ordering::Greater
    );
    assert_eq!(
        natural().prepend(|n: &i64| *n < 0, natural()).compare(&-1, &5),
        Ordering::Less
    );
}

#[test]
fn test_cloned_composition_behaves_identically() {
    let f = natural().key(|x: &i32| -x).reverse();
    let g = f.clone();
    for a in -3..3 {
        for b in -3..3 {
            assert_eq!(f.compare(&a, &b), g.compare(&a, &b));
        }
    }
}
