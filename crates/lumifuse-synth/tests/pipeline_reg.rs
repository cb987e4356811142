//! End-to-end pipeline regression test

use lumifuse_synth::{FusionBackend, PipelineParams, enhance_image, is_dark};
use lumifuse_test::{RegParams, bimodal_rgb, noise_rgb, uniform_rgb};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // --- Test 1: the brightness classifier picks the dark branch ---
    let dark = uniform_rgb(40, 40, (25, 30, 20));
    let bright = uniform_rgb(40, 40, (180, 170, 150));
    rp.check("dark scene classified dark", is_dark(&dark, 85));
    rp.check("bright scene classified bright", !is_dark(&bright, 85));

    // --- Test 2: a dark scene comes out brighter ---
    let out = enhance_image(&dark, &PipelineParams::default()).expect("enhance dark");
    rp.compare_values(40.0, out.width() as f64, 0.0);
    rp.compare_values(40.0, out.height() as f64, 0.0);
    let in_mean = dark.to_gray().mean();
    let out_mean = out.to_gray().mean();
    rp.check("dark scene brightened", out_mean > in_mean);

    // --- Test 3: both backends complete on mixed content ---
    let scene = bimodal_rgb(60, 40, 35, 210);
    for backend in [FusionBackend::LayerFusion, FusionBackend::Exposedness] {
        let params = PipelineParams {
            backend,
            ..Default::default()
        };
        let out = enhance_image(&scene, &params).expect("enhance bimodal");
        rp.compare_values(60.0, out.width() as f64, 0.0);
        rp.compare_values(40.0, out.height() as f64, 0.0);
    }

    // --- Test 4: output stays in range on arbitrary content ---
    let noisy = noise_rgb(50, 30, 21);
    let out = enhance_image(&noisy, &PipelineParams::default()).expect("enhance noise");
    rp.compare_values(50.0, out.width() as f64, 0.0);
    rp.compare_values(30.0, out.height() as f64, 0.0);

    assert!(rp.cleanup(), "pipeline regression test failed");
}
