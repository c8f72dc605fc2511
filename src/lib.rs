//! nnvk
//!
//! Guest GPU format handling for the nnvk graphics API layer.
//!
//! - [`format`]: registry translating guest format identifiers into their layout and the equivalent Vulkan format
//! - [`logging`]: process-wide logger used by the sub-crates

pub use nnvk_base as base;
pub use nnvk_format as format;
pub use nnvk_logging as logging;

pub use nnvk_format::{Format, FormatInfo, Error, Result, get_format_info, try_get_format_info};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::EnumCountT;

    #[test]
    fn facade_lookup() {
        assert_eq!(Format::COUNT, 157);
        assert_eq!(get_format_info(Format::RGBA8), format::get_format_info(Format::RGBA8));
        assert!(try_get_format_info(Format::COUNT as i32).is_err());
    }
}
