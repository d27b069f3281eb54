//! Property-based invariants of parsing and derivation.
//!
//! Verifies:
//! 1. Ellipse: c² = a² - b² and a ≥ b after orientation resolution
//! 2. Hyperbola: c² = a² + b² and c > a
//! 3. Ellipse orientation is horizontal iff denom_x ≥ denom_y
//! 4. Written offsets invert into the center coordinates
//! 5. Derivation is deterministic
//! 6. Vertices and latus rectum points satisfy the equation
//! 7. Inputs with a zero denominator are rejected

use conic::gp::Orientation;
use conic::precision::ON_CURVE;
use conic::{derive, parse, ConicKind};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_offset_term(var: &'static str) -> impl Strategy<Value = (String, f64)> {
    prop_oneof![
        Just((var.to_string(), 0.0)),
        (0u32..50).prop_map(move |n| (format!("({}-{})", var, n), n as f64)),
        (0u32..50).prop_map(move |n| (format!("({}+{})", var, n), -(n as f64))),
    ]
}

fn arb_denominator() -> impl Strategy<Value = u32> {
    1u32..500
}

fn arb_ellipse() -> impl Strategy<Value = (String, f64, f64, u32, u32)> {
    (arb_offset_term("x"), arb_offset_term("y"), arb_denominator(), arb_denominator()).prop_map(
        |((xt, h), (yt, k), dx, dy)| (format!("{}^2/{} + {}^2/{} = 1", xt, dx, yt, dy), h, k, dx, dy),
    )
}

fn arb_hyperbola() -> impl Strategy<Value = (String, Orientation, u32, u32)> {
    (
        arb_offset_term("x"),
        arb_offset_term("y"),
        arb_denominator(),
        arb_denominator(),
        any::<bool>(),
    )
        .prop_map(|((xt, _), (yt, _), d1, d2, horizontal)| {
            if horizontal {
                (format!("{}^2/{}-{}^2/{}=1", xt, d1, yt, d2), Orientation::Horizontal, d1, d2)
            } else {
                (format!("{}^2/{}-{}^2/{}=1", yt, d1, xt, d2), Orientation::Vertical, d1, d2)
            }
        })
}

fn rel_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn ellipse_focal_relation((input, _, _, _, _) in arb_ellipse()) {
        let g = derive(parse(&input).unwrap());
        prop_assert_eq!(g.kind, ConicKind::Ellipse);
        prop_assert!(g.a >= g.b);
        prop_assert!(rel_close(g.c * g.c, g.a * g.a - g.b * g.b));
    }

    #[test]
    fn hyperbola_focal_relation((input, orientation, _, _) in arb_hyperbola()) {
        let g = derive(parse(&input).unwrap());
        prop_assert_eq!(g.kind, ConicKind::Hyperbola);
        prop_assert_eq!(g.orientation, orientation);
        prop_assert!(rel_close(g.c * g.c, g.a * g.a + g.b * g.b));
        prop_assert!(g.c > g.a);
    }

    #[test]
    fn ellipse_orientation_follows_denominators((input, _, _, dx, dy) in arb_ellipse()) {
        let g = derive(parse(&input).unwrap());
        let expected = if dx >= dy { Orientation::Horizontal } else { Orientation::Vertical };
        prop_assert_eq!(g.orientation, expected);
    }

    #[test]
    fn center_is_sign_inverted_offset((input, h, k, _, _) in arb_ellipse()) {
        let parsed = parse(&input).unwrap();
        prop_assert_eq!(parsed.center().coords(), (h + 0.0, k + 0.0));
    }

    #[test]
    fn derivation_is_deterministic((input, _, _, _, _) in arb_ellipse()) {
        let parsed = parse(&input).unwrap();
        prop_assert_eq!(derive(parsed), derive(parsed));
    }

    #[test]
    fn derived_points_on_curve(input in prop_oneof![
        arb_ellipse().prop_map(|t| t.0),
        arb_hyperbola().prop_map(|t| t.0),
    ]) {
        let g = derive(parse(&input).unwrap());
        let conic = g.implicit();
        for p in g.vertices.iter().chain(g.latus_rectum.points.iter()) {
            prop_assert!(conic.contains(*p, ON_CURVE), "{:?} off curve for {}", p, input);
        }
    }

    #[test]
    fn zero_denominator_rejected((xt, _) in arb_offset_term("x"), d in arb_denominator()) {
        let zero_first = format!("{}^2/0+y^2/{}=1", xt, d);
        let zero_second = format!("{}^2/{}-y^2/0=1", xt, d);
        prop_assert!(parse(&zero_first).is_err());
        prop_assert!(parse(&zero_second).is_err());
    }
}
