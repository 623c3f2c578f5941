use std::collections::HashSet;
use ndarray::{array, Array1, Array2};
use bvr_nms::{nms, soft_nms, CoordOffset, SoftNmsMethod};


fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-4, "{a} != {b}");
}

#[test]
fn empty_input_returns_empty() {
    let b = Array2::<f32>::zeros((0, 4));
    let s = Array1::<f32>::zeros(0);
    let out = soft_nms(b.view(), s.view(), 0.3, 0.5, 1e-3, SoftNmsMethod::Gaussian, CoordOffset::Continuous);
    assert!(out.is_empty());
    assert_eq!(out.dets.shape(), &[0, 5]);
}

#[test]
fn linear_decay() {
    let b = array![[0., 0., 10., 10.], [1., 1., 11., 11.]];
    let s = array![0.9, 0.8];
    let out = soft_nms(b.view(), s.view(), 0.5, 0.5, 1e-3, SoftNmsMethod::Linear, CoordOffset::Continuous);
    assert_eq!(out.inds, vec![0, 1]);
    assert_close(out.dets[[0, 4]], 0.9);
    assert_close(out.dets[[1, 4]], 0.8 * (1.0 - 81.0 / 119.0));
    assert_eq!(out.dets.row(1).to_vec()[..4], [1f32, 1., 11., 11.]);
}

#[test]
fn linear_below_threshold_is_untouched() {
    let b = array![[0., 0., 10., 10.], [1., 1., 11., 11.]];
    let s = array![0.9, 0.8];
    let out = soft_nms(b.view(), s.view(), 0.9, 0.5, 1e-3, SoftNmsMethod::Linear, CoordOffset::Continuous);
    assert_eq!(out.scores(), vec![0.9f32, 0.8]);
}

#[test]
fn gaussian_decay_ignores_threshold() {
    let b = array![[0., 0., 10., 10.], [1., 1., 11., 11.]];
    let s = array![0.9, 0.8];
    let out = soft_nms(b.view(), s.view(), 0.99, 0.5, 1e-3, SoftNmsMethod::Gaussian, CoordOffset::Continuous);
    assert_eq!(out.inds, vec![0, 1]);
    assert_close(out.dets[[1, 4]], 0.316_708_6);
}

#[test]
fn hard_method_discards_overlaps() {
    let b = array![[0., 0., 10., 10.], [1., 1., 11., 11.]];
    let s = array![0.9, 0.8];
    let out = soft_nms(b.view(), s.view(), 0.5, 0.5, 1e-3, SoftNmsMethod::Hard, CoordOffset::Continuous);
    assert_eq!(out.inds, vec![0]);
    assert_eq!(out.dets.shape(), &[1, 5]);
}

#[test]
fn discarded_slot_is_retested() {
    // Box 1 is discarded and replaced by box 3, which must still be examined;
    // box 2 is then discarded from the last slot.
    let b = array![
        [0., 0., 10., 10.],
        [1., 1., 11., 11.],
        [0., 0., 10., 10.],
        [50., 50., 60., 60.],
    ];
    let s = array![0.9, 0.8, 0.7, 0.6];
    let out = soft_nms(b.view(), s.view(), 0.5, 0.5, 1e-3, SoftNmsMethod::Hard, CoordOffset::Continuous);
    assert_eq!(out.inds, vec![0, 3]);
    assert_eq!(out.scores(), vec![0.9f32, 0.6]);
}

#[test]
fn emitted_box_is_not_floor_tested() {
    let b = array![[0., 0., 10., 10.]];
    let s = array![0.0005];
    let out = soft_nms(b.view(), s.view(), 0.3, 0.5, 1e-3, SoftNmsMethod::Linear, CoordOffset::Continuous);
    assert_eq!(out.inds, vec![0]);
}

#[test]
fn hard_method_matches_hard_nms() {
    for seed in 0..20 {
        let (b, s) = boxes::random_boxes(seed, 60);
        for threshold in [0.3, 0.5, 0.7] {
            let keep = nms(b.view(), s.view(), threshold, CoordOffset::Continuous);
            let out = soft_nms(b.view(), s.view(), threshold, 0.5, 1e-3, SoftNmsMethod::Hard, CoordOffset::Continuous);
            assert_eq!(out.inds, keep, "seed {seed}, threshold {threshold}");
        }
    }
}

#[test]
fn gaussian_only_drops_through_min_score() {
    for seed in 0..10 {
        let (b, s) = boxes::random_boxes(seed, 40);
        let out = soft_nms(b.view(), s.view(), 0.0, 0.5, 0.0, SoftNmsMethod::Gaussian, CoordOffset::Continuous);
        assert_eq!(out.len(), 40, "seed {seed}");
    }
}

#[test]
fn output_is_ordered_and_consistent() {
    for seed in 0..10 {
        let (b, s) = boxes::random_boxes(seed, 50);
        for method in [SoftNmsMethod::Hard, SoftNmsMethod::Linear, SoftNmsMethod::Gaussian] {
            let out = soft_nms(b.view(), s.view(), 0.3, 0.5, 0.05, method, CoordOffset::Inclusive);
            assert!(out.len() <= 50);
            assert_eq!(out.dets.nrows(), out.len());

            let unique: HashSet<_> = out.inds.iter().collect();
            assert_eq!(unique.len(), out.len());

            let scores = out.scores();
            assert!(scores.windows(2).all(|w| w[0] >= w[1]), "seed {seed}: {scores:?}");

            for (row, &i) in out.inds.iter().enumerate() {
                for c in 0..4 {
                    assert_eq!(out.dets[[row, c]], b[[i, c]]);
                }
                assert!(out.dets[[row, 4]] <= s[i]);
            }
        }
    }
}
