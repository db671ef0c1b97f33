//! Business logic
//!
//! Pure decision-making for toolchain resolution. All I/O is delegated to
//! the [`crate::infra`] layer or injected through traits.

pub mod global_config;
pub mod platform;
pub mod probe;
pub mod resolver;
