//! tests/common.rs
//! Common constants and utilities shared across test files

use aesfile::CryptoParams;

/// Fast iteration count for tests - performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Password used by the concrete scenario throughout the suite
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct horse battery staple";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"hello world";

#[allow(dead_code)] // Used across multiple test files
pub fn test_params() -> CryptoParams {
    CryptoParams::new().with_iterations(TEST_ITERATIONS)
}
