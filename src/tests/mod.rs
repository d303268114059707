use super::*;

// Submodules (topic-based)
mod comments_ws;
mod vendor_types;

#[cfg(feature = "serde")]
mod decode;
