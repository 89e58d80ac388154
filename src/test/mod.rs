//! Shared fixtures and brute-force oracles for tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{Point, Rect};

pub(crate) fn points() -> Vec<Point> {
    let coords: Vec<[i32; 2]> = vec![
        [54, 1],
        [97, 21],
        [65, 35],
        [33, 54],
        [95, 39],
        [54, 3],
        [53, 54],
        [84, 72],
        [33, 34],
        [43, 15],
        [52, 83],
        [81, 23],
        [1, 61],
        [38, 74],
        [11, 91],
        [24, 56],
        [90, 31],
        [25, 57],
        [46, 61],
        [29, 69],
        [49, 60],
        [4, 98],
        [71, 15],
        [60, 25],
        [38, 84],
        [52, 38],
        [94, 51],
        [13, 25],
        [77, 73],
        [88, 87],
        [6, 27],
        [58, 22],
        [53, 28],
        [27, 91],
        [96, 98],
        [93, 14],
        [22, 93],
        [45, 94],
        [18, 28],
        [35, 15],
        [19, 81],
        [20, 81],
        [67, 53],
        [43, 3],
        [47, 66],
        [48, 34],
        [46, 12],
        [32, 38],
        [43, 12],
        [39, 94],
        [88, 62],
        [66, 14],
        [84, 30],
        [72, 81],
        [41, 92],
        [26, 4],
        [6, 76],
        [47, 21],
        [57, 70],
        [71, 82],
        [50, 68],
        [96, 18],
        [40, 31],
        [78, 53],
        [71, 90],
        [32, 14],
        [55, 6],
        [32, 88],
        [62, 32],
        [21, 67],
        [73, 81],
        [44, 64],
        [29, 50],
        [70, 5],
        [6, 22],
        [68, 3],
        [11, 23],
        [20, 42],
        [21, 73],
        [63, 86],
        [9, 40],
        [99, 2],
        [99, 76],
        [56, 77],
        [83, 6],
        [21, 72],
        [78, 30],
        [75, 53],
        [41, 11],
        [95, 20],
        [30, 38],
        [96, 82],
        [65, 48],
        [33, 18],
        [87, 28],
        [10, 10],
        [40, 34],
        [10, 20],
        [47, 29],
        [46, 78],
    ];

    coords
        .into_iter()
        .map(|[x, y]| Point::new(x.into(), y.into()))
        .collect()
}

/// Random points on a coarse integer grid, so that coordinate ties and duplicates are common.
pub(crate) fn random_grid_points(seed: u64, n: usize, extent: i32) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                f64::from(rng.gen_range(0..extent)),
                f64::from(rng.gen_range(0..extent)),
            )
        })
        .collect()
}

pub(crate) fn random_rect(rng: &mut StdRng, extent: f64) -> Rect {
    let (x1, x2) = (rng.gen_range(-1.0..extent), rng.gen_range(-1.0..extent));
    let (y1, y2) = (rng.gen_range(-1.0..extent), rng.gen_range(-1.0..extent));
    Rect::from_bounds(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
}

/// Distinct points, ascending.
pub(crate) fn dedup(points: &[Point]) -> Vec<Point> {
    let mut points = points.to_vec();
    points.sort();
    points.dedup();
    points
}

pub(crate) fn brute_range(points: &[Point], rect: &Rect) -> Vec<Point> {
    dedup(points)
        .into_iter()
        .filter(|p| rect.contains(p))
        .collect()
}

/// The `k` closest distinct points, ties by point order, returned in point order.
pub(crate) fn brute_nearest(points: &[Point], key: &Point, k: usize) -> Vec<Point> {
    let mut by_distance = dedup(points);
    by_distance.sort_by(|a, b| {
        key.distance(a)
            .partial_cmp(&key.distance(b))
            .unwrap()
            .then_with(|| a.cmp(b))
    });
    by_distance.truncate(k);
    by_distance.sort();
    by_distance
}
