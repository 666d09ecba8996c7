// Re-export for easier use in tests
#[cfg(test)]
pub use self::test_helpers::*;
