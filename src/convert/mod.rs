// Centerline-to-outline reconstruction and WCON document assembly

pub mod document;
pub mod outline;
pub mod types;
