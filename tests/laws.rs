//! Property checks over random binary grids.

use pbmatrix::*;
use proptest::prelude::*;

/// Random binary grid up to 9x9.
fn binary_grid() -> impl Strategy<Value = Grid> {
    (1usize..=9, 1usize..=9).prop_flat_map(|(w, h)| {
        prop::collection::vec(0..=1 as Pixel, w * h)
            .prop_map(move |cells| Grid::from_vec(w, h, cells).unwrap())
    })
}

/// Two random binary grids of the same shape.
fn same_shape_pair() -> impl Strategy<Value = (Grid, Grid)> {
    (1usize..=9, 1usize..=9).prop_flat_map(|(w, h)| {
        let cells = prop::collection::vec(0..=1 as Pixel, w * h);
        (cells.clone(), cells).prop_map(move |(a, b)| {
            (
                Grid::from_vec(w, h, a).unwrap(),
                Grid::from_vec(w, h, b).unwrap(),
            )
        })
    })
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

proptest! {
    #[test]
    fn round_trip(g in binary_grid()) {
        let text = encode(&g);
        let back = decode(&text).unwrap();
        prop_assert_eq!(&back, &g);
        prop_assert_eq!(encode(&back), text);
    }

    #[test]
    fn rotate_90_has_period_four(g in binary_grid()) {
        let mut r = g.clone();
        for _ in 0..4 {
            r = rotate_90(&r);
        }
        prop_assert_eq!(r, g);
    }

    #[test]
    fn rotate_270_has_period_four(g in binary_grid()) {
        let mut r = g.clone();
        for _ in 0..4 {
            r = rotate_270(&r);
        }
        prop_assert_eq!(r, g);
    }

    #[test]
    fn involutions(g in binary_grid()) {
        prop_assert_eq!(&rotate_180(&rotate_180(&g)), &g);
        prop_assert_eq!(&mirror_horizontal(&mirror_horizontal(&g)), &g);
        prop_assert_eq!(&mirror_vertical(&mirror_vertical(&g)), &g);
        prop_assert_eq!(&transpose(&transpose(&g)), &g);
        prop_assert_eq!(&transverse(&transverse(&g)), &g);
    }

    #[test]
    fn rotate_270_inverts_rotate_90(g in binary_grid()) {
        prop_assert_eq!(&rotate_270(&rotate_90(&g)), &g);
        prop_assert_eq!(&rotate_90(&rotate_270(&g)), &g);
    }

    #[test]
    fn orientation_compose_matches_sequence(g in binary_grid(), a in orientation(), b in orientation()) {
        prop_assert_eq!(b.apply(&a.apply(&g)), a.compose(b).apply(&g));
    }

    #[test]
    fn transforms_preserve_population(g in binary_grid(), o in orientation()) {
        prop_assert_eq!(population_count(&o.apply(&g)), population_count(&g));
    }

    #[test]
    fn swap_involution(g in binary_grid(), i in 0usize..9, j in 0usize..9) {
        let (ri, rj) = (i % g.height(), j % g.height());
        let once = swap_rows(&g, ri, rj).unwrap();
        prop_assert_eq!(&swap_rows(&once, ri, rj).unwrap(), &g);

        let (ci, cj) = (i % g.width(), j % g.width());
        let once = swap_columns(&g, ci, cj).unwrap();
        prop_assert_eq!(&swap_columns(&once, ci, cj).unwrap(), &g);
    }

    #[test]
    fn add_commutes((a, b) in same_shape_pair()) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn add_population_is_additive((a, b) in same_shape_pair()) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(population_count(&sum), population_count(&a) + population_count(&b));
    }

    #[test]
    fn negate_is_involution(g in binary_grid()) {
        let n = negate(&g);
        prop_assert!(n.is_binary());
        prop_assert_eq!(population_count(&n) + population_count(&g), (g.width() * g.height()) as i64);
        prop_assert_eq!(negate(&n), g);
    }

    #[test]
    fn scale_multiplies_population(g in binary_grid(), k in 0u32..100) {
        prop_assert_eq!(population_count(&scale_by(&g, k)), population_count(&g) * i64::from(k));
    }

    #[test]
    fn pipeline_output_dimensions_agree(g in binary_grid(), ops in prop::collection::vec(0u8..6, 0..8)) {
        let pipeline: Pipeline = ops
            .into_iter()
            .map(|k| match k {
                0 => Operation::Transpose,
                1 => Operation::Rotate90,
                2 => Operation::Rotate180,
                3 => Operation::Rotate270,
                4 => Operation::MirrorHorizontal,
                _ => Operation::MirrorVertical,
            })
            .collect();
        let out = pipeline.run(&g).unwrap();
        prop_assert_eq!(out.dimensions(), pipeline.output_dimensions(g.width(), g.height()));
    }
}
