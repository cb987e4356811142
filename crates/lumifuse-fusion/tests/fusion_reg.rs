//! Exposure-fusion regression test
//!
//! Pins the normalization invariant (per-pixel weight sums equal one for
//! any non-empty stack, including pathological all-black/all-white
//! frames), the single-image identity, and the interchangeable-backend
//! contract.

use lumifuse_core::{ExposureStack, FloatImage, RgbImage, RgbPlanes};
use lumifuse_filter::guided_filter;
use lumifuse_fusion::weights::{base_weight, detail_weight};
use lumifuse_fusion::{FusionParams, fuse, fuse_with, merge_exposedness};
use lumifuse_test::{RegParams, noise_rgb, uniform_rgb};

/// Luminance of an exposure, normalized to [0, 1].
fn normalized_lum(img: &RgbImage) -> FloatImage {
    let mut planes = RgbPlanes::from_rgb(img);
    planes.mul_constant(1.0 / 255.0);
    planes.luminance()
}

#[test]
fn fusion_reg() {
    let mut rp = RegParams::new("fusion");
    let params = FusionParams::default();

    // --- Test 1: weight normalization across a hostile stack ---
    // All-black and all-white frames push the exposedness scores into
    // underflow territory; the additive floor must keep every per-pixel
    // weight sum positive so the normalized sums land on 1.
    let stack = vec![
        uniform_rgb(24, 16, (0, 0, 0)),
        uniform_rgb(24, 16, (255, 255, 255)),
        noise_rgb(24, 16, 3),
    ];

    let mut wb_maps = Vec::new();
    let mut wd_maps = Vec::new();
    for img in &stack {
        let lum = normalized_lum(img);
        let base = guided_filter(&lum, &lum, params.radius, params.eps).expect("base layer");
        wb_maps.push(base_weight(&base, lum.mean(), params.sigma_l));
        wd_maps.push(detail_weight(&lum, 3, params.sigma_d).expect("detail weight"));
    }

    for maps in [&wb_maps, &wd_maps] {
        let mut sum = maps[0].clone();
        for m in &maps[1..] {
            sum = sum.add(m).unwrap();
        }
        rp.check("weight sum positive", sum.min() > 0.0);

        let mut normalized_total = FloatImage::new(24, 16).unwrap();
        for m in maps.iter() {
            normalized_total = normalized_total.add(&m.div(&sum).unwrap()).unwrap();
        }
        let mut worst = 0.0f64;
        for &v in normalized_total.data() {
            worst = worst.max((v as f64 - 1.0).abs());
        }
        rp.compare_values(0.0, worst, 1e-4);
    }

    // --- Test 2: single-image fusion identity ---
    // One arbitrary image, identity smoothing, unit alpha: the blend is
    // base + detail and must reconstruct the input.
    let img = noise_rgb(20, 20, 9);
    let one = ExposureStack::from_images(vec![img.clone()]).unwrap();
    let unit = FusionParams {
        alpha: 1.0,
        ..Default::default()
    };
    let out = fuse_with(&one, &unit, |_, input, _, _| Ok(input.clone())).expect("identity fuse");
    let mut max_err = 0i64;
    for y in 0..20 {
        for x in 0..20 {
            let got = out.get_pixel(x, y).unwrap();
            let want = img.get_pixel(x, y).unwrap();
            for (g, w) in [(got.0, want.0), (got.1, want.1), (got.2, want.2)] {
                max_err = max_err.max((g as i64 - w as i64).abs());
            }
        }
    }
    rp.compare_values(0.0, max_err as f64, 1.0);

    // With the real smoother the base+detail split still reconstructs a
    // single image (the weights cancel in normalization).
    let out = fuse(&one, &unit).expect("single-image fuse");
    let mut max_err = 0i64;
    for y in 0..20 {
        for x in 0..20 {
            let got = out.get_pixel(x, y).unwrap();
            let want = img.get_pixel(x, y).unwrap();
            for (g, w) in [(got.0, want.0), (got.1, want.1), (got.2, want.2)] {
                max_err = max_err.max((g as i64 - w as i64).abs());
            }
        }
    }
    rp.compare_values(0.0, max_err as f64, 1.0);

    // --- Test 3: both backends honor the same output contract ---
    let bracket = ExposureStack::from_images(vec![
        uniform_rgb(30, 22, (15, 15, 15)),
        noise_rgb(30, 22, 5),
        uniform_rgb(30, 22, (240, 240, 240)),
    ])
    .unwrap();
    let engine_out = fuse(&bracket, &params).expect("engine");
    let merge_out = merge_exposedness(&bracket).expect("merge");
    rp.compare_values(30.0, engine_out.width() as f64, 0.0);
    rp.compare_values(22.0, engine_out.height() as f64, 0.0);
    rp.compare_values(30.0, merge_out.width() as f64, 0.0);
    rp.compare_values(22.0, merge_out.height() as f64, 0.0);

    // --- Test 4: empty stacks are rejected by both backends ---
    rp.check("engine rejects empty", fuse(&ExposureStack::new(), &params).is_err());
    rp.check(
        "merge rejects empty",
        merge_exposedness(&ExposureStack::new()).is_err(),
    );

    assert!(rp.cleanup(), "fusion regression test failed");
}
