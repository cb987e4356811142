//! lumifuse-test - Regression test support
//!
//! Provides the value-comparison driver the `*_reg` integration tests
//! report through, plus synthetic test-image builders (the test suite
//! runs against generated inputs, not files).
//!
//! # Usage
//!
//! ```
//! use lumifuse_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;
mod synthetic;

pub use params::RegParams;
pub use synthetic::{
    bimodal_gray, bimodal_rgb, gradient_gray, noise_rgb, uniform_gray, uniform_rgb,
};
