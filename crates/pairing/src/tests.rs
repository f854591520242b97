use std::rc::Rc;

use group::{prime::PrimeCurveAffine, Curve as _};
use halo2curves_axiom::{
    bn256::{multi_miller_loop, Fq12, Fq2, Fr, G1Affine, G2Affine, G2Prepared},
    ff::Field,
    pairing::MillerLoopResult,
};
use rand::{rngs::StdRng, SeedableRng};
use zircon_algebra::test_utils::{EvalContext, NativeFp2};
use zircon_ecc::AffinePoint;

use crate::{
    test_utils::{assert_gt_eq, gt_value, NativeG1, NativePairing},
    Curve, GadgetError, Pairing,
};

type TestPairing = Pairing<NativeFp2, NativePairing>;

fn setup() -> (Rc<EvalContext>, Curve<NativeG1>, TestPairing) {
    let ctx = EvalContext::new();
    let curve = Curve::new(NativeG1::new(ctx.clone()));
    let pairing = Pairing::new(NativeFp2::new(ctx.clone()), NativePairing::new(ctx.clone()));
    (ctx, curve, pairing)
}

fn g2_point(q: &G2Affine) -> AffinePoint<Fq2> {
    AffinePoint::new(q.x, q.y)
}

/// Reference pairing straight through halo2curves.
fn reference_pair(p: &G1Affine, q: &G2Affine) -> halo2curves_axiom::bn256::Gt {
    let prepared = G2Prepared::from(*q);
    multi_miller_loop(&[(p, &prepared)]).final_exponentiation()
}

#[test]
fn test_curve_ops() {
    let (_, curve, _) = setup();
    let mut rng = StdRng::seed_from_u64(1);
    let p = G1Affine::random(&mut rng);
    let q = G1Affine::random(&mut rng);
    let s = Fr::random(&mut rng);

    assert_eq!(curve.add(&p, &q), (p.to_curve() + q).to_affine());
    assert_eq!(curve.neg(&p), -p);
    assert_eq!(curve.scalar_mul(&p, &s), (p * s).to_affine());
    assert_eq!(
        curve.scalar_mul_base(&s),
        (G1Affine::generator() * s).to_affine()
    );
}

#[test]
fn test_curve_assert_equal() {
    let (ctx, curve, _) = setup();
    let mut rng = StdRng::seed_from_u64(2);
    let p = G1Affine::random(&mut rng);
    curve.assert_equal(&p, &p.clone());
    assert!(ctx.is_satisfied());
    curve.assert_equal(&p, &curve.neg(&p));
    assert!(!ctx.is_satisfied());
}

#[test]
fn test_msm() {
    let (_, curve, _) = setup();
    let mut rng = StdRng::seed_from_u64(4);
    let points = (0..3).map(|_| G1Affine::random(&mut rng)).collect::<Vec<_>>();
    let scalars = (0..3).map(|_| Fr::random(&mut rng)).collect::<Vec<_>>();

    let res = curve.msm(&points, &scalars).unwrap();

    let mut expected = points[0] * scalars[0];
    for (p, s) in points.iter().zip(&scalars).skip(1) {
        expected += p * s;
    }
    assert_eq!(res, expected.to_affine());
}

#[test]
fn test_msm_empty() {
    let (_, curve, _) = setup();
    // Documented sentinel: the all-zero point, which halo2curves happens to
    // use as its affine identity encoding.
    let res = curve.msm(&[], &[]).unwrap();
    assert_eq!(res, G1Affine::identity());
}

#[test]
fn test_msm_mismatched_lengths() {
    let (ctx, curve, _) = setup();
    let mut rng = StdRng::seed_from_u64(5);
    let points = vec![G1Affine::random(&mut rng), G1Affine::random(&mut rng)];
    let scalars = vec![Fr::random(&mut rng)];

    let before = ctx.gates();
    let err = curve.msm(&points, &scalars).unwrap_err();
    assert_eq!(err, GadgetError::MismatchedLengths(2, 1));
    assert_eq!(ctx.gates(), before);
}

#[test]
fn test_pair_matches_reference() {
    let (_, _, pr) = setup();
    let mut rng = StdRng::seed_from_u64(7);
    let p = G1Affine::random(&mut rng);
    let q = G2Affine::random(&mut rng);

    let res = pr.pair(&[p], &[g2_point(&q)]).unwrap();
    assert_gt_eq(&res, reference_pair(&p, &q));
}

#[test]
fn test_miller_loop_then_final_exponentiation() {
    let (_, _, pr) = setup();
    let mut rng = StdRng::seed_from_u64(8);
    let p = G1Affine::random(&mut rng);
    let q = G2Affine::random(&mut rng);

    let f = pr.miller_loop(&[p], &[g2_point(&q)]).unwrap();
    let f = pr.final_exponentiation(&f);
    let g = pr.pair(&[p], &[g2_point(&q)]).unwrap();
    assert_eq!(gt_value(&f), gt_value(&g));
}

#[test]
fn test_pairing_check_satisfied() {
    let (ctx, curve, pr) = setup();
    let mut rng = StdRng::seed_from_u64(11);
    let s = Fr::random(&mut rng);
    let p = (G1Affine::generator() * s).to_affine();
    let q = G2Affine::random(&mut rng);

    // e(P, Q) · e(-P, Q) = 1
    let neg_p = curve.neg(&p);
    pr.pairing_check(&[p, neg_p], &[g2_point(&q), g2_point(&q)])
        .unwrap();
    assert!(ctx.is_satisfied());
}

#[test]
fn test_pairing_check_corrupted() {
    let (ctx, _, pr) = setup();
    let mut rng = StdRng::seed_from_u64(12);
    let p = G1Affine::random(&mut rng);
    let other = G1Affine::random(&mut rng);
    let q = G2Affine::random(&mut rng);

    pr.pairing_check(&[p, other], &[g2_point(&q), g2_point(&q)])
        .unwrap();
    assert!(!ctx.is_satisfied());
}

#[test]
fn test_pairing_mismatched_lengths() {
    let (ctx, _, pr) = setup();
    let mut rng = StdRng::seed_from_u64(13);
    let p = G1Affine::random(&mut rng);

    let before = ctx.gates();
    let err = pr.pairing_check(&[p], &[]).unwrap_err();
    assert_eq!(err, GadgetError::MismatchedLengths(1, 0));
    let err = pr.miller_loop(&[p], &[]).unwrap_err();
    assert_eq!(err, GadgetError::MismatchedLengths(1, 0));
    let err = pr.pair(&[p], &[]).unwrap_err();
    assert_eq!(err, GadgetError::MismatchedLengths(1, 0));
    assert_eq!(ctx.gates(), before);
}

#[test]
fn test_gt_assert_equal() {
    let (ctx, _, pr) = setup();
    let mut rng = StdRng::seed_from_u64(14);
    let p = G1Affine::random(&mut rng);
    let q = G2Affine::random(&mut rng);

    let f = pr.pair(&[p], &[g2_point(&q)]).unwrap();
    pr.assert_equal(&f, &f.clone());
    assert!(ctx.is_satisfied());

    let g = pr.pair(&[curve_double(&p)], &[g2_point(&q)]).unwrap();
    pr.assert_equal(&f, &g);
    assert!(!ctx.is_satisfied());
}

fn curve_double(p: &G1Affine) -> G1Affine {
    (p.to_curve() + p).to_affine()
}

#[test]
fn test_new_gt() {
    let (_, _, pr) = setup();
    let mut rng = StdRng::seed_from_u64(15);
    let value = Fq12::random(&mut rng);
    assert_eq!(gt_value(&pr.new_gt(&value)), value);
}

#[test]
fn test_facade_does_not_mutate_inputs() {
    let (_, curve, pr) = setup();
    let mut rng = StdRng::seed_from_u64(16);
    let p = G1Affine::random(&mut rng);
    let p2 = G1Affine::random(&mut rng);
    let q = G2Affine::random(&mut rng);
    let s = Fr::random(&mut rng);
    let (px, py) = (p.x, p.y);
    let g2 = g2_point(&q);

    let _ = curve.add(&p, &p2);
    let _ = curve.neg(&p);
    let _ = curve.scalar_mul(&p, &s);
    let _ = curve.msm(&[p], &[s]).unwrap();
    let _ = pr.pair(&[p], &[g2.clone()]).unwrap();
    pr.pairing_check(&[p, curve.neg(&p)], &[g2.clone(), g2.clone()])
        .unwrap();

    assert_eq!(p.x, px);
    assert_eq!(p.y, py);
    assert_eq!(g2.x, q.x);
    assert_eq!(g2.y, q.y);
}
