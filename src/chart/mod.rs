pub mod frames;
pub mod layout;
#[cfg(feature = "plotting")]
pub mod render;
