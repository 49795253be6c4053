use json_value_compare as jvc;
use jvc::{Operand, Operator};
use proptest::prelude::*;
use serde_json::json;

fn arb_scalar() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(json!(null)),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i32>().prop_map(|n| json!(n)),
        (-1.0e9f64..1.0e9).prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(|s| json!(s)),
    ]
}

proptest! {
    #[test]
    fn numeric_kinds_agree(a in any::<i16>(), b in any::<i16>()) {
        // the same magnitudes through different kinds
        let (fa, ub) = (a as f32, b as i64);
        prop_assert_eq!(jvc::equal(fa, ub), a == b);
        prop_assert_eq!(jvc::less_than(fa, ub), a < b);
        prop_assert_eq!(jvc::greater_equal(fa, ub), a >= b);
        prop_assert_eq!(jvc::not_equal(a, &json!(b)), a != b);
    }

    #[test]
    fn ordering_is_consistent(a in -1000i64..1000, c in -1000i64..1000) {
        prop_assume!(a < c);
        prop_assert!(jvc::less_than(a, c));
        prop_assert!(jvc::less_equal(a, c));
        prop_assert!(jvc::greater_than(c, a));
        prop_assert!(jvc::greater_equal(c, a));
        prop_assert!(jvc::not_equal(a, c));
        prop_assert!(!jvc::equal(a, c));
        prop_assert!(!jvc::less_than(c, a));
    }

    #[test]
    fn text_follows_string_ordering(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        prop_assert_eq!(jvc::less_than(a.as_str(), b.as_str()), a < b);
        prop_assert_eq!(jvc::equal(&a, &b), a == b);
        prop_assert_eq!(jvc::greater_equal(&a, &b), a >= b);
    }

    #[test]
    fn membership_matches_contains(items in prop::collection::vec(0u8..20, 0..10), x in 0u8..20) {
        let expected = items.contains(&x);
        prop_assert_eq!(jvc::is_in(x, items.clone()), expected);
        prop_assert_eq!(jvc::not_in(x, items.clone()), !expected);
        prop_assert_eq!(jvc::is_in(x, json!(items)), expected);
    }

    #[test]
    fn evaluation_is_pure(l in arb_scalar(), r in arb_scalar(), items in prop::collection::vec(arb_scalar(), 0..5)) {
        let seq = Operand::from(items);
        for op in Operator::ALL {
            prop_assert_eq!(jvc::compare(op, &l, &r), jvc::compare(op, &l, &r));
            prop_assert_eq!(jvc::compare(op, &l, &seq), jvc::compare(op, &l, &seq));
        }
    }

    #[test]
    fn absent_never_matches(r in arb_scalar()) {
        for op in Operator::ALL {
            let expected = op == Operator::Equal && r.is_null();
            prop_assert_eq!(jvc::compare(op, (), &r), expected);
        }
    }
}
