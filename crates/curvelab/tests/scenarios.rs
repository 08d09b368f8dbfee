//! End-to-end checks on the reference lab setup.

use approx::assert_relative_eq;
use curvelab::curvelab_math::distance;
use curvelab::{
    geodesic_distance, measure_ray, shortest_path, CurvedSpaceScene, GeodesicTriangle, Grid,
    LabConfig, LabSession, LabTask, Point2,
};

fn reference_grid(bump_radius: f64) -> Grid {
    Grid::square(64, 3.5, bump_radius).unwrap()
}

#[test]
fn reference_triangle_has_finite_positive_edges() {
    let grid = reference_grid(1.0);
    let solution = GeodesicTriangle::default().solve(&grid);

    for length in solution.metrics.lengths {
        assert!(length.is_finite());
        assert!(length > 0.0);
    }
    for (k, path) in solution.paths.iter().enumerate() {
        assert_eq!(path.start(), Some(solution.cells[k]));
        assert_eq!(path.end(), Some(solution.cells[(k + 1) % 3]));
    }
}

#[test]
fn reference_triangle_is_stretched_by_the_bump() {
    let grid = reference_grid(1.0);
    let triangle = GeodesicTriangle::default();
    let solution = triangle.solve(&grid);

    let planar: Vec<Point2> = triangle
        .cells(&grid)
        .iter()
        .map(|&c| grid.planar(c))
        .collect();
    let planar_perimeter: f64 = (0..3)
        .map(|k| (planar[(k + 1) % 3] - planar[k]).norm())
        .sum();
    assert!(solution.metrics.perimeter() > planar_perimeter);

    // Vertex angles come from chords, which always close to 180°.
    assert_relative_eq!(solution.metrics.deficit_deg, 0.0, epsilon = 1e-6);
}

#[test]
fn flat_sheet_angle_sum_is_euclidean() {
    let grid = reference_grid(0.0);
    let p = Point2::new;
    let triangles = [
        GeodesicTriangle::default(),
        // obtuse at C
        GeodesicTriangle::new(p(-3.0, -1.0), p(3.0, -1.0), p(0.0, -0.5)),
        // long and thin
        GeodesicTriangle::new(p(-2.0, 2.0), p(2.5, 1.8), p(-3.0, -3.0)),
        // every vertex outside the domain, clamped onto the border
        GeodesicTriangle::new(p(-10.0, -10.0), p(10.0, -10.0), p(0.0, 9.0)),
    ];
    for triangle in triangles {
        let cells = triangle.cells(&grid);
        assert!(cells[0] != cells[1] && cells[1] != cells[2] && cells[2] != cells[0]);
        let metrics = triangle.solve(&grid).metrics;
        assert!(
            (metrics.angle_sum_deg - 180.0).abs() <= 0.5,
            "{:?}: angle sum {}",
            triangle.vertices,
            metrics.angle_sum_deg
        );
        assert!(metrics.lengths.iter().all(|l| l.is_finite() && *l > 0.0));
    }
}

#[test]
fn ray_through_bump_is_longer_on_surface() {
    let profile = measure_ray(&reference_grid(1.0), 0.0, 161).unwrap();
    assert_relative_eq!(profile.planar_length, 7.0);
    assert!(profile.surface_length > profile.planar_length);
    assert!(profile.excess > 0.0);
}

#[test]
fn geodesics_are_symmetric_and_bounded_by_chords() {
    let grid = reference_grid(1.0);
    let [a, b, c] = GeodesicTriangle::default().cells(&grid);
    for (s, t) in [(a, b), (b, c), (c, a)] {
        let forward = geodesic_distance(&grid, s, t).unwrap();
        let backward = geodesic_distance(&grid, t, s).unwrap();
        assert_relative_eq!(forward, backward, epsilon = 1e-9);
        assert!(forward + 1e-9 >= distance(&grid.point3d(s), &grid.point3d(t)));
    }
}

#[test]
fn same_cell_path_is_a_single_cell() {
    let grid = reference_grid(1.0);
    let cell = grid.cell_at(Point2::new(0.6, 1.6));
    let path = shortest_path(&grid, cell, cell);
    assert_eq!(path.cells, vec![cell]);
    assert_eq!(path.length(&grid), 0.0);
}

#[test]
fn scene_from_toml_matches_direct_solve() {
    let config = LabConfig::from_toml_str(
        r#"
        [surface]
        resolution = 48

        [triangle]
        c = [0.0, 2.0]
        "#,
    )
    .unwrap();
    let mut scene = CurvedSpaceScene::new(&config).unwrap();
    let grid = Grid::square(48, 3.5, 1.0).unwrap();
    let direct = config.triangle.triangle().solve(&grid);

    let report = scene.report().unwrap();
    assert_eq!(report.metrics, direct.metrics);
    assert_eq!(report.vertices[2], [0.0, 2.0]);
}

#[test]
fn default_lab_session_flips_simultaneity_after_slider_move() {
    let mut session = LabSession::default();
    assert!(!session.check().pass);
    session.set_velocity(0.7).unwrap();
    assert!(session.check().pass);

    session.select(LabTask::ProperTimeInvariance);
    session.set_velocity(0.2).unwrap();
    assert!(session.check().pass);
}
