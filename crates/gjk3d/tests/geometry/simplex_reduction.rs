use gjk3d::math::{Point, Real};
use gjk3d::query::gjk::{ClosestFeature, CsoPoint, Simplex, VertexSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_point(rng: &mut StdRng) -> Point<Real> {
    Point::new(
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
    )
}

#[test]
fn witness_reconstruction_round_trip() {
    // For a simplex where y[i] == p[i] - q[i] holds exactly, reducing with
    // the classified feature and reconstructing the witness points must give
    // back the closest point as p_a - p_b.
    let mut rng = StdRng::seed_from_u64(2024);

    for len in 1..=3 {
        for _ in 0..100 {
            let mut simplex = Simplex::new();
            for _ in 0..len {
                let pa = random_point(&mut rng);
                let pb = random_point(&mut rng);
                simplex.push(CsoPoint::new(pa, pb));
            }

            let (closest, feature) = simplex.closest_point(false);
            simplex.retain_ypq(feature.vertex_set());
            assert_eq!(simplex.len(), feature.vertex_set().len());

            let (pa, pb) = simplex.witness_points().unwrap();
            let reconstructed = pa - pb;
            let error = (reconstructed - closest.coords).norm();
            assert!(
                error <= 1.0e-5 * closest.coords.norm().max(1.0),
                "round-trip error {} for simplex of {} points",
                error,
                len
            );
        }
    }
}

#[test]
fn single_point_witnesses_are_the_stored_points() {
    let pa = Point::new(3.0, 0.0, 1.0);
    let pb = Point::new(1.0, 0.0, 1.0);

    let mut simplex = Simplex::new();
    simplex.push(CsoPoint::new(pa, pb));

    let (wa, wb) = simplex.witness_points().unwrap();
    assert_eq!(wa, pa);
    assert_eq!(wb, pb);
}

#[test]
fn reduction_keeps_the_classified_vertex() {
    // The origin is past the second endpoint of this segment, so the
    // classifier keeps only that vertex.
    let mut simplex = Simplex::new();
    simplex.push(CsoPoint::new(
        Point::new(4.0, 3.0, 0.0),
        Point::new(0.0, 0.0, 0.0),
    ));
    simplex.push(CsoPoint::new(
        Point::new(3.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
    ));

    let (closest, feature) = simplex.closest_point(true);
    assert_eq!(feature, ClosestFeature::Vertex(1));
    assert_eq!(closest, Point::new(2.0, 0.0, 0.0));

    simplex.retain_ypq(feature.vertex_set());
    assert_eq!(simplex.len(), 1);
    assert_eq!(simplex.point(0), &Point::new(2.0, 0.0, 0.0));
    assert_eq!(simplex.witness_a(0), &Point::new(3.0, 0.0, 0.0));
    assert_eq!(simplex.witness_b(0), &Point::new(1.0, 0.0, 0.0));

    // The arrays stay index-aligned after the reduction.
    let cso = simplex.cso_point(0);
    assert_eq!(cso.point.coords, cso.orig1 - cso.orig2);
}

#[test]
fn retain_y_leaves_witnesses_stale() {
    let mut simplex = Simplex::new();
    simplex.push(CsoPoint::new(
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ));
    simplex.push(CsoPoint::new(
        Point::new(0.0, 2.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ));

    simplex.retain_y(VertexSet::B);

    // Only the difference-space array was compacted.
    assert_eq!(simplex.len(), 1);
    assert_eq!(simplex.point(0), &Point::new(0.0, 2.0, -1.0));
    assert_eq!(simplex.witness_a(0), &Point::new(1.0, 0.0, 0.0));
}

#[test]
fn max_point_len_sqr_tracks_the_farthest_point() {
    let mut simplex = Simplex::new();
    assert_eq!(simplex.max_point_len_sqr(), 0.0);

    simplex.push(CsoPoint::new(
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 0.0),
    ));
    simplex.push(CsoPoint::new(
        Point::new(0.0, -3.0, 0.0),
        Point::new(0.0, 0.0, 0.0),
    ));

    assert_eq!(simplex.max_point_len_sqr(), 9.0);
}
