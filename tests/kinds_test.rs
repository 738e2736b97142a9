//! Ordering properties for every primitive kind.
//!
//! One set of tests per kind, stamped out with `paste`.

use lesser::{Lesser, OrderedValue, Primitive, wrap};
use paste::paste;

/// Irreflexivity, asymmetry (exactly one direction for distinct values),
/// transitivity, and agreement with the native `<` over all sample pairs.
fn check_strict_order<N: Primitive + PartialOrd + Copy>(samples: &[N]) {
    let wrapped: Vec<OrderedValue<N>> = samples.iter().copied().map(wrap).collect();

    for (i, a) in wrapped.iter().enumerate() {
        assert!(!a.less_than(a), "irreflexive at {i}");

        for (j, b) in wrapped.iter().enumerate() {
            assert_eq!(a.less_than(b), samples[i] < samples[j], "native `<` at ({i}, {j})");

            if samples[i] != samples[j] {
                assert!(a.less_than(b) ^ b.less_than(a), "exactly one direction at ({i}, {j})");
            }

            for c in &wrapped {
                if a.less_than(b) && b.less_than(c) {
                    assert!(a.less_than(c), "transitive at ({i}, {j})");
                }
            }
        }
    }
}

macro_rules! integer_kind_tests {
    ($($kind:ident),* $(,)?) => {
        paste! {
            $(
                #[test]
                fn [<test_ $kind _strict_order>]() {
                    check_strict_order::<$kind>(&[
                        $kind::MIN,
                        $kind::MIN + 1,
                        $kind::MAX / 3,
                        $kind::MAX - 1,
                        $kind::MAX,
                    ]);
                }

                #[test]
                fn [<test_ $kind _bounds>]() {
                    assert!(wrap($kind::MIN).less_than(&wrap($kind::MAX)));
                    assert!(!wrap($kind::MAX).less_than(&wrap($kind::MIN)));
                    assert!(!wrap($kind::MAX).less_than(&wrap($kind::MAX)));
                }
            )*
        }
    };
}

macro_rules! float_kind_tests {
    ($($kind:ident),* $(,)?) => {
        paste! {
            $(
                #[test]
                fn [<test_ $kind _strict_order>]() {
                    check_strict_order::<$kind>(&[
                        $kind::NEG_INFINITY,
                        $kind::MIN,
                        -1.5,
                        0.0,
                        $kind::EPSILON,
                        $kind::MAX,
                        $kind::INFINITY,
                    ]);
                }

                #[test]
                fn [<test_ $kind _nan_never_less>]() {
                    let nan = wrap($kind::NAN);
                    for other in [$kind::NEG_INFINITY, -1.0, 0.0, 1.0, $kind::INFINITY, $kind::NAN] {
                        assert!(!nan.less_than(&wrap(other)));
                        assert!(!wrap(other).less_than(&nan));
                    }
                }

                #[test]
                fn [<test_ $kind _signed_zero>]() {
                    // -0.0 and 0.0 are equal under IEEE-754.
                    assert!(!wrap(-0.0 as $kind).less_than(&wrap(0.0)));
                    assert!(!wrap(0.0 as $kind).less_than(&wrap(-0.0)));
                }
            )*
        }
    };
}

integer_kind_tests!(i8, i16, i32, i64, i128, isize);
integer_kind_tests!(u8, u16, u32, u64, u128, usize);
float_kind_tests!(f32, f64);
