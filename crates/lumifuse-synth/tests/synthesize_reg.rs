//! Exposure synthesis regression test
//!
//! Walks the two pinned scenarios end to end: the degenerate uniform
//! mid-gray image and the bimodal two-band image, checking gain ordering
//! and the per-region brightening behavior of the synthesized exposures.

use lumifuse_core::RgbImage;
use lumifuse_fusion::{FusionParams, fuse, merge_exposedness};
use lumifuse_synth::{SynthParams, synthesize_exposures};
use lumifuse_test::{RegParams, bimodal_rgb, uniform_rgb};

/// Mean luminance of the left or right half of an image.
fn half_mean_lum(img: &RgbImage, left: bool) -> f64 {
    let gray = img.to_gray();
    let (w, h) = gray.dimensions();
    let (x0, x1) = if left { (0, w / 2) } else { (w / 2, w) };
    let mut sum = 0u64;
    for y in 0..h {
        for x in x0..x1 {
            sum += gray.get_pixel_unchecked(x, y) as u64;
        }
    }
    sum as f64 / ((x1 - x0) as u64 * h as u64) as f64
}

#[test]
fn uniform_midgray_reg() {
    let mut rp = RegParams::new("uniform_midgray");

    // 100x100 flat (128,128,128), g = 2.2, 7 regions: segmentation
    // collapses to one band, the other six get the epsilon-floored gain,
    // and the synthesizer emits 8 stack elements.
    let img = uniform_rgb(100, 100, (128, 128, 128));
    let params = SynthParams::default();
    let stack = synthesize_exposures(&img, 2.2, &params).expect("synthesize");
    rp.compare_values(8.0, stack.len() as f64, 0.0);

    // The populated band's exposure brightens the mid-gray moderately;
    // the empty bands' epsilon gains blow out to white; the final element
    // is the gamma-inverted original, back at the input value.
    let first = stack.get(0).unwrap().get_pixel(50, 50).unwrap();
    rp.compare_values(148.0, first.0 as f64, 2.0);
    for i in 1..7 {
        let (r, g, b) = stack.get(i).unwrap().get_pixel(50, 50).unwrap();
        rp.compare_values(255.0, r as f64, 0.0);
        rp.compare_values(255.0, g as f64, 0.0);
        rp.compare_values(255.0, b as f64, 0.0);
    }
    let last = stack.get(7).unwrap().get_pixel(50, 50).unwrap();
    rp.compare_values(128.0, last.0 as f64, 2.0);

    // Layer fusion of the stack: flat frames carry no detail, so the
    // output is the weighted blend of the base layers. With the stock
    // weighting that lands at a uniform value near 200.
    let fused = fuse(&stack, &FusionParams::default()).expect("fuse");
    rp.compare_values(100.0, fused.width() as f64, 0.0);
    let (mut lo, mut hi) = (255u8, 0u8);
    for y in 0..100 {
        for x in 0..100 {
            let (r, g, b) = fused.get_pixel(x, y).unwrap();
            for v in [r, g, b] {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    rp.check("fused output is uniform", hi - lo <= 2);
    rp.compare_values(200.0, fused.get_pixel(50, 50).unwrap().0 as f64, 3.0);

    // The exposedness merge down-weights the blown frames harder and
    // lands closer to the input.
    let merged = merge_exposedness(&stack).expect("merge");
    rp.compare_values(152.0, merged.get_pixel(50, 50).unwrap().0 as f64, 3.0);

    assert!(rp.cleanup(), "uniform mid-gray regression test failed");
}

#[test]
fn bimodal_reg() {
    let mut rp = RegParams::new("bimodal");

    // Half the image at luminance 30, half at 220, two bands: each half
    // gets its own band and an independently estimated gain.
    let img = bimodal_rgb(100, 80, 30, 220);
    let params = SynthParams {
        regions: 2,
        ..Default::default()
    };
    let stack = synthesize_exposures(&img, 2.2, &params).expect("synthesize");
    rp.compare_values(3.0, stack.len() as f64, 0.0);

    // Stack order follows band order: element 0 carries the bright
    // band's gain, element 1 the dark band's.
    let bright_frame = stack.get(0).unwrap();
    let dark_frame = stack.get(1).unwrap();

    // The dark band's gain brightens the dark half relative to the
    // input.
    let dark_in = half_mean_lum(&img, true);
    let dark_out = half_mean_lum(dark_frame, true);
    rp.check("dark half brightened", dark_out > dark_in);

    // The bright band's gain does not brighten the bright half.
    let bright_in = half_mean_lum(&img, false);
    let bright_out = half_mean_lum(bright_frame, false);
    rp.check("bright half not brightened", bright_out <= bright_in);

    assert!(rp.cleanup(), "bimodal regression test failed");
}
