use gjk3d::math::{Point, Real};
use gjk3d::query::gjk::{
    closest_point_on_tetrahedron, closest_point_on_triangle, origin_outside_tetrahedron_planes,
    ClosestFeature,
};

fn random_point(rng: &mut oorandom::Rand32) -> Point<Real> {
    let mut coord = || rng.rand_float() as Real * 10.0 - 5.0;
    Point::new(coord(), coord(), coord())
}

#[test]
fn regular_tetrahedron_around_the_origin_is_interior() {
    let a = Point::new(1.0, 1.0, 1.0);
    let b = Point::new(-1.0, -1.0, 1.0);
    let c = Point::new(-1.0, 1.0, -1.0);
    let d = Point::new(1.0, -1.0, -1.0);

    assert_eq!(
        origin_outside_tetrahedron_planes(&a, &b, &c, &d),
        [false; 4]
    );

    let (point, feature) = closest_point_on_tetrahedron(&a, &b, &c, &d, false);
    assert_eq!(feature, ClosestFeature::Interior);
    assert_eq!(feature.vertex_set().len(), 4);
    assert_eq!(point, Point::origin());
}

#[test]
fn apex_vertex_region() {
    // The apex points toward the origin; everything else sits further below.
    let a = Point::new(0.0, 0.0, -1.0);
    let b = Point::new(1.0, 0.0, -2.0);
    let c = Point::new(0.0, 1.0, -2.0);
    let d = Point::new(-1.0, -1.0, -2.0);

    let (point, feature) = closest_point_on_tetrahedron(&a, &b, &c, &d, false);
    assert_eq!(feature, ClosestFeature::Vertex(0));
    assert_eq!(point, a);
}

#[test]
fn face_region_projects_on_the_face_plane() {
    // The base triangle lies in the plane z = 1 and contains the projection
    // of the origin; the apex is further away.
    let a = Point::new(-2.0, -2.0, 1.0);
    let b = Point::new(3.0, -1.0, 1.0);
    let c = Point::new(0.0, 3.0, 1.0);
    let d = Point::new(0.0, 0.0, 3.0);

    let (point, feature) = closest_point_on_tetrahedron(&a, &b, &c, &d, false);
    assert_eq!(feature, ClosestFeature::Face(0, 1, 2));
    assert!(relative_eq!(point, Point::new(0.0, 0.0, 1.0), epsilon = 1.0e-5));
}

#[test]
fn edge_region_involving_the_last_vertex() {
    // The segment ad is the closest feature: it runs parallel to the z-axis
    // at x = 1 while b and c sit at x = 3.
    let a = Point::new(1.0, 0.0, 1.0);
    let b = Point::new(3.0, 1.0, 0.0);
    let c = Point::new(3.0, -1.0, 0.0);
    let d = Point::new(1.0, 0.0, -1.0);

    let (point, feature) = closest_point_on_tetrahedron(&a, &b, &c, &d, false);
    assert_eq!(feature, ClosestFeature::Edge(0, 3));
    assert!(relative_eq!(point, Point::new(1.0, 0.0, 0.0), epsilon = 1.0e-5));

    // The closest feature contains d, so asking for d to be included must not
    // change the answer.
    let (point_incl, feature_incl) = closest_point_on_tetrahedron(&a, &b, &c, &d, true);
    assert_eq!(feature_incl, feature);
    assert!(relative_eq!(point_incl, point, epsilon = 1.0e-5));
}

#[test]
fn flat_tetrahedron_still_returns_a_finite_point() {
    // All four vertices lie in the plane z = 2. The four reference signs are
    // exact zeros here, so the plane tests stay on the consistent-sign path
    // and only the faces whose winding turns toward the origin report it
    // outside.
    let a = Point::new(1.0, 0.0, 2.0);
    let b = Point::new(-1.0, 0.0, 2.0);
    let c = Point::new(0.0, 1.0, 2.0);
    let d = Point::new(0.0, -1.0, 2.0);

    assert_eq!(
        origin_outside_tetrahedron_planes(&a, &b, &c, &d),
        [false, true, false, true]
    );

    // The driver must still return a finite point on the flat tetrahedron.
    let (point, feature) = closest_point_on_tetrahedron(&a, &b, &c, &d, false);
    assert!(point.coords.norm_squared().is_finite());
    assert!(feature.vertex_set().len() <= 3);
    assert!(relative_eq!(point.z, 2.0, epsilon = 1.0e-5));
}

#[test]
fn random_tetrahedra_match_brute_force_face_minimum() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..50 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let c = random_point(&mut rng);
        let d = random_point(&mut rng);

        let (point, feature) = closest_point_on_tetrahedron(&a, &b, &c, &d, false);
        let dist_sqr = point.coords.norm_squared();
        assert!(dist_sqr.is_finite());

        if feature == ClosestFeature::Interior {
            // The origin is enclosed: every plane test must agree.
            assert_eq!(point, Point::origin());
            continue;
        }

        // The reported distance cannot beat any sampled point of any face,
        // and must not be worse than the sampled minimum over all faces.
        let faces = [[&a, &b, &c], [&a, &c, &d], [&a, &b, &d], [&b, &c, &d]];
        let mut sampled_min = Real::INFINITY;
        let steps = 40;

        for face in faces {
            for i in 0..=steps {
                for j in 0..=(steps - i) {
                    let u = i as Real / steps as Real;
                    let v = j as Real / steps as Real;
                    let w = 1.0 - u - v;
                    let sample = face[0].coords * u + face[1].coords * v + face[2].coords * w;
                    sampled_min = sampled_min.min(sample.norm_squared());
                }
            }
        }

        assert!(
            dist_sqr <= sampled_min + 1.0e-2,
            "closest {} vs sampled {}",
            dist_sqr,
            sampled_min
        );
    }
}

#[test]
fn driver_agrees_with_the_face_classifier() {
    // When exactly one face is outside, the driver must return that face's
    // own closest point with its indices remapped.
    let a = Point::new(-2.0, -2.0, 1.0);
    let b = Point::new(3.0, -1.0, 1.0);
    let c = Point::new(0.0, 3.0, 1.0);
    let d = Point::new(0.0, 0.0, 3.0);

    assert_eq!(
        origin_outside_tetrahedron_planes(&a, &b, &c, &d),
        [true, false, false, false]
    );

    let (tet_point, _) = closest_point_on_tetrahedron(&a, &b, &c, &d, false);
    let (tri_point, _) = closest_point_on_triangle(&a, &b, &c, false);
    assert_eq!(tet_point, tri_point);
}
