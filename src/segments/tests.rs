use super::*;
use crate::edges::EDGE;
use crate::image::GrayImage;

fn outline(edges: &mut GrayImage, x0: usize, y0: usize, x1: usize, y1: usize) {
    for x in x0..=x1 {
        edges.set(x, y0, EDGE);
        edges.set(x, y1, EDGE);
    }
    for y in y0..=y1 {
        edges.set(x0, y, EDGE);
        edges.set(x1, y, EDGE);
    }
}

fn run(edges: &mut GrayImage, options: SegmentOptions) -> (LabelMap, Segmentation) {
    let mut labels = LabelMap::default();
    let mut segmentation = Segmentation::default();
    RegionSegmenter::new(options).segment(edges, &mut labels, &mut segmentation);
    (labels, segmentation)
}

fn dense(n: usize) -> SegmentOptions {
    SegmentOptions {
        grid_divisions: n,
        ..Default::default()
    }
}

#[test]
fn disjoint_closed_curves_get_distinct_labels() {
    let mut edges = GrayImage::new(40, 40);
    outline(&mut edges, 4, 4, 15, 15);
    outline(&mut edges, 22, 20, 35, 34);
    let (labels, seg) = run(&mut edges, dense(40));

    let a = labels.get(9, 9);
    let b = labels.get(28, 27);
    let background = labels.get(38, 2);
    assert_ne!(a, UNLABELLED);
    assert_ne!(b, UNLABELLED);
    assert_ne!(background, UNLABELLED);
    assert_ne!(a, b);
    assert_ne!(a, background);
    assert_ne!(b, background);
    assert_eq!(seg.labels_allocated(), 3);
    assert!(!seg.label_space_exhausted);
}

#[test]
fn thickening_closes_diagonal_gaps() {
    // A one-pixel anti-diagonal only touches its neighbours at corners.
    let n = 24;
    let mut edges = GrayImage::new(n, n);
    for i in 0..n {
        edges.set(n - 1 - i, i, EDGE);
    }
    let (labels, seg) = run(&mut edges, dense(n));

    let upper_left = labels.get(3, 3);
    let lower_right = labels.get(n - 4, n - 4);
    assert_ne!(upper_left, UNLABELLED);
    assert_ne!(lower_right, UNLABELLED);
    assert_ne!(upper_left, lower_right);
    assert_eq!(seg.labels_allocated(), 2);
}

#[test]
fn seeds_on_existing_labels_add_samples() {
    let mut edges = GrayImage::new(10, 10);
    let (labels, seg) = run(&mut edges, dense(10));

    assert_eq!(seg.labels_allocated(), 1);
    let region = seg.region(1).expect("one region");
    assert_eq!(region.area_px, 100);
    // x and y sweep 9..=1; row and column 0 are never seeds.
    assert_eq!(region.sample_count(), 81);
    assert_eq!(seg.seeds_visited, 81);
    let b = region.bounds().expect("has samples");
    assert_eq!((b.x0, b.y0, b.x1, b.y1), (1, 1, 9, 9));
    assert!(labels.data.iter().all(|&l| l == 1));
}

#[test]
fn coarse_grid_steps_follow_divisions() {
    let mut edges = GrayImage::new(100, 50);
    let (_, seg) = run(&mut edges, dense(10));
    // Columns 99, 89, ..., 9 and rows 49, 44, ..., 4.
    assert_eq!(seg.seeds_visited, 10 * 10);
    let region = seg.region(1).expect("one region");
    assert_eq!(region.samples[0], SamplePoint { x: 99, y: 49 });
}

#[test]
fn label_exhaustion_degrades_gracefully() {
    // Vertical walls every fifth column leave six open strips after thickening.
    let mut edges = GrayImage::new(30, 8);
    for x in (4..30).step_by(5) {
        for y in 0..8 {
            edges.set(x, y, EDGE);
        }
    }
    let options = SegmentOptions {
        grid_divisions: 30,
        edge_threshold: 200,
        label_limit: 2,
    };
    let (labels, seg) = run(&mut edges, options);

    assert_eq!(seg.labels_allocated(), 2);
    assert!(seg.label_space_exhausted);
    assert!(seg.dropped_seeds > 0);
    assert!(labels.data.iter().all(|&l| l <= 2));
}

#[test]
fn edge_seeds_are_counted_not_labelled() {
    let mut edges = GrayImage::filled(6, 6, EDGE);
    let (labels, seg) = run(&mut edges, dense(6));
    assert_eq!(seg.labels_allocated(), 0);
    assert_eq!(seg.edge_seeds, seg.seeds_visited);
    assert!(labels.data.iter().all(|&l| l == UNLABELLED));
}
