use ndarray::{array, Array1, Array2};
use bvr_nms::suppression_runners::overlap::normalized_wasserstein;
use bvr_nms::{wasserstein_nms, BvrBox, CoordOffset};


#[test]
fn empty_input_returns_empty() {
    let b = Array2::<f32>::zeros((0, 4));
    let s = Array1::<f32>::zeros(0);
    assert!(wasserstein_nms(b.view(), s.view(), 0.5, CoordOffset::Continuous).is_empty());
}

#[test]
fn identical_square_boxes_are_suppressed() {
    let bx = BvrBox::new(0., 0., 10., 10.);
    assert_eq!(normalized_wasserstein(&bx, &bx, 0.0), 1.0);

    let b = array![[0., 0., 10., 10.], [0., 0., 10., 10.]];
    let s = array![0.8, 0.9];
    assert_eq!(wasserstein_nms(b.view(), s.view(), 1.0, CoordOffset::Continuous), vec![1]);
}

#[test]
fn extent_term_pairs_width_with_height() {
    // w = 20, h = 10 for both boxes: ((20 - 10)² + (20 - 10)²) / 4 = 50
    let bx = BvrBox::new(0., 0., 20., 10.);
    let sim = normalized_wasserstein(&bx, &bx, 0.0);
    assert!((sim - (-(50f32).sqrt() / 12.8).exp()).abs() < 1e-6);
    assert!((sim - 0.575_551).abs() < 1e-5);

    // So two identical non-square boxes survive a threshold of 0.6.
    let b = array![[0., 0., 20., 10.], [0., 0., 20., 10.]];
    let s = array![0.9, 0.8];
    assert_eq!(wasserstein_nms(b.view(), s.view(), 0.6, CoordOffset::Continuous), vec![0, 1]);
    assert_eq!(wasserstein_nms(b.view(), s.view(), 0.5, CoordOffset::Continuous), vec![0]);
}

#[test]
fn offset_shifts_centre_distance() {
    let bx = BvrBox::new(0., 0., 10., 10.);
    let sim = normalized_wasserstein(&bx, &bx, 1.0);
    assert!((sim - (-(2f32).sqrt() / 12.8).exp()).abs() < 1e-6);
}

#[test]
fn distant_boxes_survive() {
    let b = array![[0., 0., 10., 10.], [200., 200., 210., 210.], [2., 1., 12., 11.]];
    let s = array![0.9, 0.8, 0.7];
    // Box 2 is ~2.2 away from box 0: exp(-2.24 / 12.8) = 0.84
    assert_eq!(wasserstein_nms(b.view(), s.view(), 0.8, CoordOffset::Continuous), vec![0, 1]);
    assert_eq!(wasserstein_nms(b.view(), s.view(), 0.9, CoordOffset::Continuous), vec![0, 1, 2]);
}

#[test]
fn rerunning_on_kept_boxes_is_idempotent() {
    for seed in 0..10 {
        let (b, s) = boxes::random_boxes(seed, 50);
        let keep = wasserstein_nms(b.view(), s.view(), 0.2, CoordOffset::Continuous);
        assert!(!keep.is_empty());
        let (kb, ks) = boxes::select(&b, &s, &keep);
        let again = wasserstein_nms(kb.view(), ks.view(), 0.2, CoordOffset::Continuous);
        assert_eq!(again, (0..keep.len()).collect::<Vec<_>>(), "seed {seed}");
    }
}
