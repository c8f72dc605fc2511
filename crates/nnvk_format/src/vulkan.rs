use ash::vk;

use crate::{Format, FormatInfo, get_format_info};

/// Conversion to the equivalent Vulkan type
pub trait ToVulkan {
    type VkType;

    fn to_vulkan(&self) -> Self::VkType;
}

impl ToVulkan for FormatInfo {
    type VkType = vk::Format;

    fn to_vulkan(&self) -> Self::VkType {
        self.host_format
    }
}

impl ToVulkan for Format {
    type VkType = vk::Format;

    fn to_vulkan(&self) -> Self::VkType {
        get_format_info(*self).host_format
    }
}

impl FormatInfo {
    /// Get the image aspects a texture of this format has
    pub fn vk_aspect_mask(&self) -> vk::ImageAspectFlags {
        let mut flags = vk::ImageAspectFlags::empty();
        if self.is_color() {
            flags |= vk::ImageAspectFlags::COLOR;
        }
        if self.has_depth() {
            flags |= vk::ImageAspectFlags::DEPTH;
        }
        if self.has_stencil() {
            flags |= vk::ImageAspectFlags::STENCIL;
        }
        flags
    }
}
