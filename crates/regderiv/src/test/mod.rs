// Test module organization
pub mod test_builder;
pub mod test_display;
#[cfg(feature = "serde")]
pub mod test_serde;
