//! nnvk format registry
//!
//! Translates the guest GPU's native pixel/vertex format identifiers into the layout of the format,
//! the bit width of each of its channels, and the equivalent Vulkan format.
//!
//! The registry is a compile-time constant table, so lookups never lock or allocate, and can be done from any thread.
//! Raw identifiers decoded from a guest command stream need to go through [`Format::from_raw`] or [`try_get_format_info`],
//! which reject anything outside of the guest's format range.

extern crate static_assertions as sa;

mod format;
mod result;
mod vulkan;

pub use format::*;
pub use result::*;
pub use vulkan::*;

pub use nnvk_base::{EnumCountT, EnumFromIndexT, EnumFromNameT};
