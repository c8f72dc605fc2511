use core::str::FromStr;
use ash::vk;
use nnvk_base::{EnumCountT, EnumFromIndexT, EnumFromNameT};
use nnvk_common_macros::{EnumCount, EnumFromIndex, EnumDisplay, EnumFromName};
use nnvk_logging::{log_warning, LogCategory};

use crate::{Error, Result};

const LOG_CAT : LogCategory = LogCategory::new_with_sub("Graphics nnvk", "Format");

/// Guest pixel/vertex format
///
/// The discriminants are the guest's format identifiers, so the variant order must never change.
/// The guest's trailing size sentinel is not a variant, use [`Format::COUNT`] instead.
///
/// # Note
///
/// Underscores are kept in the names to make them more readable, and to match the guest's names.
#[allow(non_camel_case_types)]
#[repr(i32)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, EnumCount, EnumFromIndex, EnumDisplay, EnumFromName)]
pub enum Format {
    /// No format, maps to an all-zero record
    None,

    // 8, 16 and 32-bit component R
    R8,
    R8SN,
    R8UI,
    R8I,
    R16F,
    R16,
    R16SN,
    R16UI,
    R16I,
    R32F,
    R32UI,
    R32I,

    // 8, 16 and 32-bit component RG
    RG8,
    RG8SN,
    RG8UI,
    RG8I,
    RG16F,
    RG16,
    RG16SN,
    RG16UI,
    RG16I,
    RG32F,
    RG32UI,
    RG32I,

    // 8, 16 and 32-bit component RGB
    RGB8,
    RGB8SN,
    RGB8UI,
    RGB8I,
    RGB16F,
    RGB16,
    RGB16SN,
    RGB16UI,
    RGB16I,
    RGB32F,
    RGB32UI,
    RGB32I,

    // 8, 16 and 32-bit component RGBA
    RGBA8,
    RGBA8SN,
    RGBA8UI,
    RGBA8I,
    RGBA16F,
    RGBA16,
    RGBA16SN,
    RGBA16UI,
    RGBA16I,
    RGBA32F,
    RGBA32UI,
    RGBA32I,

    // Depth and stencil
    Stencil8,
    Depth16,
    Depth24,
    Depth32F,
    Depth24_Stencil8,
    Depth32F_Stencil8,

    // sRGB and packed formats
    RGBX8_SRGB,
    RGBA8_SRGB,
    RGBA4,
    RGB5,
    RGB5A1,
    RGB565,
    RGB10A2,
    RGB10A2UI,
    R11G11B10F,
    RGB9E5F,

    // DXT (BC1-3) block compression
    RGB_DXT1,
    RGBA_DXT1,
    RGBA_DXT3,
    RGBA_DXT5,
    RGB_DXT1_SRGB,
    RGBA_DXT1_SRGB,
    RGBA_DXT3_SRGB,
    RGBA_DXT5_SRGB,

    // RGTC (BC4-5) block compression
    RGTC1_Unorm,
    RGTC1_Snorm,
    RGTC2_Unorm,
    RGTC2_Snorm,

    // BPTC (BC6H, BC7) block compression
    BPTC_Unorm,
    BPTC_Unorm_SRGB,
    BPTC_SFLOAT,
    BPTC_UFLOAT,

    // Integer vertex data converted to float on fetch
    R8_UI2F,
    R8_I2F,
    R16_UI2F,
    R16_I2F,
    R32_UI2F,
    R32_I2F,
    RG8_UI2F,
    RG8_I2F,
    RG16_UI2F,
    RG16_I2F,
    RG32_UI2F,
    RG32_I2F,
    RGB8_UI2F,
    RGB8_I2F,
    RGB16_UI2F,
    RGB16_I2F,
    RGB32_UI2F,
    RGB32_I2F,
    RGBA8_UI2F,
    RGBA8_I2F,
    RGBA16_UI2F,
    RGBA16_I2F,
    RGBA32_UI2F,
    RGBA32_I2F,

    // Signed and scaled 10-bit component RGB with 2-bit A
    RGB10A2SN,
    RGB10A2I,
    RGB10A2_UI2F,
    RGB10A2_I2F,

    // RGB with an ignored 4th component
    RGBX8,
    RGBX8SN,
    RGBX8UI,
    RGBX8I,
    RGBX16F,
    RGBX16,
    RGBX16SN,
    RGBX16UI,
    RGBX16I,
    RGBX32F,
    RGBX32UI,
    RGBX32I,

    // ASTC block compression
    RGBA_ASTC_4x4,
    RGBA_ASTC_5x4,
    RGBA_ASTC_5x5,
    RGBA_ASTC_6x5,
    RGBA_ASTC_6x6,
    RGBA_ASTC_8x5,
    RGBA_ASTC_8x6,
    RGBA_ASTC_8x8,
    RGBA_ASTC_10x5,
    RGBA_ASTC_10x6,
    RGBA_ASTC_10x8,
    RGBA_ASTC_10x10,
    RGBA_ASTC_12x10,
    RGBA_ASTC_12x12,
    RGBA_ASTC_4x4_SRGB,
    RGBA_ASTC_5x4_SRGB,
    RGBA_ASTC_5x5_SRGB,
    RGBA_ASTC_6x5_SRGB,
    RGBA_ASTC_6x6_SRGB,
    RGBA_ASTC_8x5_SRGB,
    RGBA_ASTC_8x6_SRGB,
    RGBA_ASTC_8x8_SRGB,
    RGBA_ASTC_10x5_SRGB,
    RGBA_ASTC_10x6_SRGB,
    RGBA_ASTC_10x8_SRGB,
    RGBA_ASTC_10x10_SRGB,
    RGBA_ASTC_12x10_SRGB,
    RGBA_ASTC_12x12_SRGB,

    // BGR component order
    BGR565,
    BGR5,
    BGR5A1,
    A1BGR5,
    BGRX8,
    BGRA8,
    BGRX8_SRGB,
    BGRA8_SRGB,
}

impl Format {
    /// Decode a raw guest format identifier
    ///
    /// Negative values and values at or above [`Format::COUNT`] (including the guest's size sentinel) are rejected.
    pub fn from_raw(raw: i32) -> Result<Format> {
        usize::try_from(raw).ok()
            .and_then(Format::from_idx)
            .ok_or(Error::InvalidFormatIdentifier(raw))
    }

    /// Get the raw guest format identifier
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Get the format info for this format
    pub fn info(self) -> FormatInfo {
        get_format_info(self)
    }

    /// Is the format an sRGB format?
    pub fn is_srgb(self) -> bool {
        matches!(self,
            Self::RGBX8_SRGB |
            Self::RGBA8_SRGB |
            Self::RGB_DXT1_SRGB |
            Self::RGBA_DXT1_SRGB |
            Self::RGBA_DXT3_SRGB |
            Self::RGBA_DXT5_SRGB |
            Self::BPTC_Unorm_SRGB |
            Self::BGRX8_SRGB |
            Self::BGRA8_SRGB
        ) || (Self::RGBA_ASTC_4x4_SRGB..=Self::RGBA_ASTC_12x12_SRGB).contains(&self)
    }

    /// Is the format an integer vertex format that is converted to a float when fetched?
    pub fn is_integer_to_float(self) -> bool {
        matches!(self, Self::RGB10A2_UI2F | Self::RGB10A2_I2F) ||
        (Self::R8_UI2F..=Self::RGBA32_I2F).contains(&self)
    }

    /// Is the format an ASTC compressed format?
    pub fn is_astc(self) -> bool {
        (Self::RGBA_ASTC_4x4..=Self::RGBA_ASTC_12x12_SRGB).contains(&self)
    }

    /// Iterate over all formats, in guest identifier order
    pub fn iter() -> impl Iterator<Item = Format> {
        (0..Format::COUNT).filter_map(Format::from_idx)
    }

    /// Call a closure for each format.
    pub fn for_each<F>(mut f: F)
    where
        F : FnMut(Format)
    {
        for format in Self::iter() {
            f(format);
        }
    }
}

impl TryFrom<i32> for Format {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Format::from_raw(value)
    }
}

impl From<Format> for i32 {
    fn from(value: Format) -> Self {
        value.raw()
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::parse(s).ok_or_else(|| Error::UnknownFormatName(s.to_string()))
    }
}

/// Channel usage of a format
#[derive(Clone, Copy)]
struct Usage {
    texture: bool,
    vertex:  bool,
}

/// Format info
///
/// Describes the memory layout of a format and the bit width of each of its channels.
/// Uncompressed formats are described as 1x1 blocks, with `bytes_per_block` being the size of a single element.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct FormatInfo {
    /// Can the format be used for sampled or rendered textures
    pub texture:         bool,
    /// Can the format be used for vertex attributes
    pub vertex:          bool,
    /// Bytes per compression block, or per element for uncompressed formats
    pub bytes_per_block: u8,
    /// Width of a block in texels
    pub block_width:     u8,
    /// Height of a block in texels
    pub block_height:    u8,
    /// Bits in the red channel
    pub red_bits:        u8,
    /// Bits in the green channel
    pub green_bits:      u8,
    /// Bits in the blue channel
    pub blue_bits:       u8,
    /// Bits in the alpha channel
    pub alpha_bits:      u8,
    /// Bits in the depth component
    pub depth_bits:      u8,
    /// Bits in the stencil component
    pub stencil_bits:    u8,
    /// Equivalent host format, `vk::Format::UNDEFINED` if the host has no direct equivalent
    pub host_format:     vk::Format,
}

impl FormatInfo {
    /// Record for [`Format::None`]
    pub const NONE: FormatInfo = FormatInfo {
        texture: false,
        vertex: false,
        bytes_per_block: 0,
        block_width: 0,
        block_height: 0,
        red_bits: 0,
        green_bits: 0,
        blue_bits: 0,
        alpha_bits: 0,
        depth_bits: 0,
        stencil_bits: 0,
        host_format: vk::Format::UNDEFINED,
    };

    const fn new(
        usage: Usage,
        bytes_per_block: u8,
        block_size: (u8, u8),
        color_bits: [u8; 4],
        depth_stencil_bits: [u8; 2],
        host_format: vk::Format,
    ) -> Self {
        Self {
            texture: usage.texture,
            vertex: usage.vertex,
            bytes_per_block,
            block_width: block_size.0,
            block_height: block_size.1,
            red_bits: color_bits[0],
            green_bits: color_bits[1],
            blue_bits: color_bits[2],
            alpha_bits: color_bits[3],
            depth_bits: depth_stencil_bits[0],
            stencil_bits: depth_stencil_bits[1],
            host_format,
        }
    }

    /// Is the format a block compressed format?
    pub const fn is_compressed(&self) -> bool {
        self.block_width > 1 || self.block_height > 1
    }

    /// Does the format contain depth and/or stencil data?
    pub const fn is_depth_stencil(&self) -> bool {
        self.depth_bits > 0 || self.stencil_bits > 0
    }

    /// Does the format contain any color channels?
    pub const fn is_color(&self) -> bool {
        self.red_bits > 0 || self.green_bits > 0 || self.blue_bits > 0 || self.alpha_bits > 0
    }

    /// Does the format have a depth component?
    pub const fn has_depth(&self) -> bool {
        self.depth_bits > 0
    }

    /// Does the format have a stencil component?
    pub const fn has_stencil(&self) -> bool {
        self.stencil_bits > 0
    }

    /// Does the host have a direct equivalent of the format?
    pub const fn has_host_format(&self) -> bool {
        self.host_format.as_raw() != vk::Format::UNDEFINED.as_raw()
    }

    /// Get the number of bits in a single block
    pub const fn bits_per_block(&self) -> u16 {
        self.bytes_per_block as u16 * 8
    }

    /// Is this the record of [`Format::None`]?
    pub const fn is_none_record(&self) -> bool {
        !self.texture &&
        !self.vertex &&
        self.bytes_per_block == 0 &&
        self.block_width == 0 &&
        self.block_height == 0 &&
        !self.is_color() &&
        !self.is_depth_stencil() &&
        !self.has_host_format()
    }

    /// Check the structural invariants of a record
    ///
    /// A usable record has a non-zero size, a block of at least 1x1 texels, and either color channels or depth/stencil, never both.
    pub const fn is_consistent(&self) -> bool {
        if self.is_none_record() {
            return true;
        }

        let usable = self.texture || self.vertex;
        let sized = self.bytes_per_block >= 1 && self.block_width >= 1 && self.block_height >= 1;
        usable && sized && (self.is_color() != self.is_depth_stencil())
    }
}

/// Get the format info for a format
pub fn get_format_info(format: Format) -> FormatInfo {
    FORMAT_INFO[format as usize]
}

/// Get the format info for a raw guest format identifier
///
/// Fails with [`Error::InvalidFormatIdentifier`] when the identifier is not a valid format.
pub fn try_get_format_info(raw: i32) -> Result<FormatInfo> {
    match Format::from_raw(raw) {
        Ok(format) => Ok(get_format_info(format)),
        Err(err) => {
            if cfg!(feature = "validation") {
                log_warning!(LOG_CAT, "Rejected format lookup: {}", err);
            }
            Err(err)
        }
    }
}

//==============================================================================================================================
// LUTS
//==============================================================================================================================

const TEXTURE_AND_VERTEX : Usage = Usage { texture: true , vertex: true  };
const TEXTURE_ONLY       : Usage = Usage { texture: true , vertex: false };
const VERTEX_ONLY        : Usage = Usage { texture: false, vertex: true  };

const FORMAT_INFO: [FormatInfo; Format::COUNT] = [
    //                                         Usage,            Bytes, Block   , [  R,   G,   B,   A], [ D,  S], Host format
    /* None                 */ FormatInfo::NONE,
    /* R8                   */ FormatInfo::new(TEXTURE_AND_VERTEX,   1, ( 1,  1), [  8,   0,   0,   0], [ 0,  0], vk::Format::R8_UNORM),
    /* R8SN                 */ FormatInfo::new(TEXTURE_AND_VERTEX,   1, ( 1,  1), [  8,   0,   0,   0], [ 0,  0], vk::Format::R8_SNORM),
    /* R8UI                 */ FormatInfo::new(TEXTURE_AND_VERTEX,   1, ( 1,  1), [  8,   0,   0,   0], [ 0,  0], vk::Format::R8_UINT),
    /* R8I                  */ FormatInfo::new(TEXTURE_AND_VERTEX,   1, ( 1,  1), [  8,   0,   0,   0], [ 0,  0], vk::Format::R8_SINT),
    /* R16F                 */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [ 16,   0,   0,   0], [ 0,  0], vk::Format::R16_SFLOAT),
    /* R16                  */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [ 16,   0,   0,   0], [ 0,  0], vk::Format::R16_UNORM),
    /* R16SN                */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [ 16,   0,   0,   0], [ 0,  0], vk::Format::R16_SNORM),
    /* R16UI                */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [ 16,   0,   0,   0], [ 0,  0], vk::Format::R16_UINT),
    /* R16I                 */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [ 16,   0,   0,   0], [ 0,  0], vk::Format::R16_SINT),
    /* R32F                 */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 32,   0,   0,   0], [ 0,  0], vk::Format::R32_SFLOAT),
    /* R32UI                */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 32,   0,   0,   0], [ 0,  0], vk::Format::R32_UINT),
    /* R32I                 */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 32,   0,   0,   0], [ 0,  0], vk::Format::R32_SINT),
    /* RG8                  */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [  8,   8,   0,   0], [ 0,  0], vk::Format::R8G8_UNORM),
    /* RG8SN                */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [  8,   8,   0,   0], [ 0,  0], vk::Format::R8G8_SNORM),
    /* RG8UI                */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [  8,   8,   0,   0], [ 0,  0], vk::Format::R8G8_UINT),
    /* RG8I                 */ FormatInfo::new(TEXTURE_AND_VERTEX,   2, ( 1,  1), [  8,   8,   0,   0], [ 0,  0], vk::Format::R8G8_SINT),
    /* RG16F                */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 16,  16,   0,   0], [ 0,  0], vk::Format::R16G16_SFLOAT),
    /* RG16                 */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 16,  16,   0,   0], [ 0,  0], vk::Format::R16G16_UNORM),
    /* RG16SN               */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 16,  16,   0,   0], [ 0,  0], vk::Format::R16G16_SNORM),
    /* RG16UI               */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 16,  16,   0,   0], [ 0,  0], vk::Format::R16G16_UINT),
    /* RG16I                */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 16,  16,   0,   0], [ 0,  0], vk::Format::R16G16_SINT),
    /* RG32F                */ FormatInfo::new(TEXTURE_AND_VERTEX,   8, ( 1,  1), [ 32,  32,   0,   0], [ 0,  0], vk::Format::R32G32_SFLOAT),
    /* RG32UI               */ FormatInfo::new(TEXTURE_AND_VERTEX,   8, ( 1,  1), [ 32,  32,   0,   0], [ 0,  0], vk::Format::R32G32_UINT),
    /* RG32I                */ FormatInfo::new(TEXTURE_AND_VERTEX,   8, ( 1,  1), [ 32,  32,   0,   0], [ 0,  0], vk::Format::R32G32_SINT),
    /* RGB8                 */ FormatInfo::new(VERTEX_ONLY,          3, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8_UNORM),
    /* RGB8SN               */ FormatInfo::new(VERTEX_ONLY,          3, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8_SNORM),
    /* RGB8UI               */ FormatInfo::new(VERTEX_ONLY,          3, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8_UINT),
    /* RGB8I                */ FormatInfo::new(VERTEX_ONLY,          3, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8_SINT),
    /* RGB16F               */ FormatInfo::new(VERTEX_ONLY,          6, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16_SFLOAT),
    /* RGB16                */ FormatInfo::new(VERTEX_ONLY,          6, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16_UNORM),
    /* RGB16SN              */ FormatInfo::new(VERTEX_ONLY,          6, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16_SNORM),
    /* RGB16UI              */ FormatInfo::new(VERTEX_ONLY,          6, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16_UINT),
    /* RGB16I               */ FormatInfo::new(VERTEX_ONLY,          6, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16_SINT),
    /* RGB32F               */ FormatInfo::new(TEXTURE_AND_VERTEX,  12, ( 1,  1), [ 32,  32,  32,   0], [ 0,  0], vk::Format::R32G32B32_SFLOAT),
    /* RGB32UI              */ FormatInfo::new(TEXTURE_AND_VERTEX,  12, ( 1,  1), [ 32,  32,  32,   0], [ 0,  0], vk::Format::R32G32B32_UINT),
    /* RGB32I               */ FormatInfo::new(TEXTURE_AND_VERTEX,  12, ( 1,  1), [ 32,  32,  32,   0], [ 0,  0], vk::Format::R32G32B32_SINT),
    /* RGBA8                */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::R8G8B8A8_UNORM),
    /* RGBA8SN              */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::R8G8B8A8_SNORM),
    /* RGBA8UI              */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::R8G8B8A8_UINT),
    /* RGBA8I               */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::R8G8B8A8_SINT),
    /* RGBA16F              */ FormatInfo::new(TEXTURE_AND_VERTEX,   8, ( 1,  1), [ 16,  16,  16,  16], [ 0,  0], vk::Format::R16G16B16A16_SFLOAT),
    /* RGBA16               */ FormatInfo::new(TEXTURE_AND_VERTEX,   8, ( 1,  1), [ 16,  16,  16,  16], [ 0,  0], vk::Format::R16G16B16A16_UNORM),
    /* RGBA16SN             */ FormatInfo::new(TEXTURE_AND_VERTEX,   8, ( 1,  1), [ 16,  16,  16,  16], [ 0,  0], vk::Format::R16G16B16A16_SNORM),
    /* RGBA16UI             */ FormatInfo::new(TEXTURE_AND_VERTEX,   8, ( 1,  1), [ 16,  16,  16,  16], [ 0,  0], vk::Format::R16G16B16A16_UINT),
    /* RGBA16I              */ FormatInfo::new(TEXTURE_AND_VERTEX,   8, ( 1,  1), [ 16,  16,  16,  16], [ 0,  0], vk::Format::R16G16B16A16_SINT),
    /* RGBA32F              */ FormatInfo::new(TEXTURE_AND_VERTEX,  16, ( 1,  1), [ 32,  32,  32,  32], [ 0,  0], vk::Format::R32G32B32A32_SFLOAT),
    /* RGBA32UI             */ FormatInfo::new(TEXTURE_AND_VERTEX,  16, ( 1,  1), [ 32,  32,  32,  32], [ 0,  0], vk::Format::R32G32B32A32_UINT),
    /* RGBA32I              */ FormatInfo::new(TEXTURE_AND_VERTEX,  16, ( 1,  1), [ 32,  32,  32,  32], [ 0,  0], vk::Format::R32G32B32A32_SINT),
    /* Stencil8             */ FormatInfo::new(TEXTURE_ONLY,         1, ( 1,  1), [  0,   0,   0,   0], [ 0,  8], vk::Format::S8_UINT),
    /* Depth16              */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  0,   0,   0,   0], [16,  0], vk::Format::D16_UNORM),
    /* Depth24              */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  0,   0,   0,   0], [24,  0], vk::Format::X8_D24_UNORM_PACK32),
    /* Depth32F             */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  0,   0,   0,   0], [32,  0], vk::Format::D32_SFLOAT),
    /* Depth24_Stencil8     */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  0,   0,   0,   0], [24,  8], vk::Format::D24_UNORM_S8_UINT),
    /* Depth32F_Stencil8    */ FormatInfo::new(TEXTURE_ONLY,         8, ( 1,  1), [  0,   0,   0,   0], [32,  8], vk::Format::D32_SFLOAT_S8_UINT),
    /* RGBX8_SRGB           */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8A8_SRGB),
    /* RGBA8_SRGB           */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::R8G8B8A8_SRGB),
    /* RGBA4                */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  4,   4,   4,   4], [ 0,  0], vk::Format::R4G4B4A4_UNORM_PACK16),
    // Host format carries an alpha bit the guest lacks, alpha must be swizzled to one
    /* RGB5                 */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  5,   5,   5,   0], [ 0,  0], vk::Format::R5G5B5A1_UNORM_PACK16),
    /* RGB5A1               */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  5,   5,   5,   1], [ 0,  0], vk::Format::R5G5B5A1_UNORM_PACK16),
    /* RGB565               */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  5,   6,   5,   0], [ 0,  0], vk::Format::R5G6B5_UNORM_PACK16),
    /* RGB10A2              */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 10,  10,  10,   2], [ 0,  0], vk::Format::A2B10G10R10_UNORM_PACK32),
    /* RGB10A2UI            */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 10,  10,  10,   2], [ 0,  0], vk::Format::A2B10G10R10_UINT_PACK32),
    /* R11G11B10F           */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [ 11,  11,  10,   0], [ 0,  0], vk::Format::B10G11R11_UFLOAT_PACK32),
    /* RGB9E5F              */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  9,   9,   9,   0], [ 0,  0], vk::Format::E5B9G9R9_UFLOAT_PACK32),
    /* RGB_DXT1             */ FormatInfo::new(TEXTURE_ONLY,         8, ( 4,  4), [  5,   6,   5,   0], [ 0,  0], vk::Format::BC1_RGB_UNORM_BLOCK),
    /* RGBA_DXT1            */ FormatInfo::new(TEXTURE_ONLY,         8, ( 4,  4), [  5,   6,   5,   1], [ 0,  0], vk::Format::BC1_RGBA_UNORM_BLOCK),
    /* RGBA_DXT3            */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  5,   6,   5,   4], [ 0,  0], vk::Format::BC2_UNORM_BLOCK),
    /* RGBA_DXT5            */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  5,   6,   5,   8], [ 0,  0], vk::Format::BC3_UNORM_BLOCK),
    /* RGB_DXT1_SRGB        */ FormatInfo::new(TEXTURE_ONLY,         8, ( 4,  4), [  5,   6,   5,   0], [ 0,  0], vk::Format::BC1_RGB_SRGB_BLOCK),
    /* RGBA_DXT1_SRGB       */ FormatInfo::new(TEXTURE_ONLY,         8, ( 4,  4), [  5,   6,   5,   1], [ 0,  0], vk::Format::BC1_RGBA_SRGB_BLOCK),
    /* RGBA_DXT3_SRGB       */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  5,   6,   5,   4], [ 0,  0], vk::Format::BC2_SRGB_BLOCK),
    /* RGBA_DXT5_SRGB       */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  5,   6,   5,   8], [ 0,  0], vk::Format::BC3_SRGB_BLOCK),
    /* RGTC1_Unorm          */ FormatInfo::new(TEXTURE_ONLY,         8, ( 4,  4), [  8,   0,   0,   0], [ 0,  0], vk::Format::BC4_UNORM_BLOCK),
    /* RGTC1_Snorm          */ FormatInfo::new(TEXTURE_ONLY,         8, ( 4,  4), [  8,   0,   0,   0], [ 0,  0], vk::Format::BC4_SNORM_BLOCK),
    /* RGTC2_Unorm          */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  8,   8,   0,   0], [ 0,  0], vk::Format::BC5_UNORM_BLOCK),
    /* RGTC2_Snorm          */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  8,   8,   0,   0], [ 0,  0], vk::Format::BC5_SNORM_BLOCK),
    /* BPTC_Unorm           */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  8,   8,   8,   8], [ 0,  0], vk::Format::BC7_UNORM_BLOCK),
    /* BPTC_Unorm_SRGB      */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  8,   8,   8,   8], [ 0,  0], vk::Format::BC7_SRGB_BLOCK),
    /* BPTC_SFLOAT          */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [ 16,  16,  16,   0], [ 0,  0], vk::Format::BC6H_SFLOAT_BLOCK),
    /* BPTC_UFLOAT          */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [ 16,  16,  16,   0], [ 0,  0], vk::Format::BC6H_UFLOAT_BLOCK),
    /* R8_UI2F              */ FormatInfo::new(VERTEX_ONLY,          1, ( 1,  1), [  8,   0,   0,   0], [ 0,  0], vk::Format::R8_USCALED),
    /* R8_I2F               */ FormatInfo::new(VERTEX_ONLY,          1, ( 1,  1), [  8,   0,   0,   0], [ 0,  0], vk::Format::R8_SSCALED),
    /* R16_UI2F             */ FormatInfo::new(VERTEX_ONLY,          2, ( 1,  1), [ 16,   0,   0,   0], [ 0,  0], vk::Format::R16_USCALED),
    /* R16_I2F              */ FormatInfo::new(VERTEX_ONLY,          2, ( 1,  1), [ 16,   0,   0,   0], [ 0,  0], vk::Format::R16_SSCALED),
    /* R32_UI2F             */ FormatInfo::new(VERTEX_ONLY,          4, ( 1,  1), [ 32,   0,   0,   0], [ 0,  0], vk::Format::UNDEFINED),
    /* R32_I2F              */ FormatInfo::new(VERTEX_ONLY,          4, ( 1,  1), [ 32,   0,   0,   0], [ 0,  0], vk::Format::UNDEFINED),
    /* RG8_UI2F             */ FormatInfo::new(VERTEX_ONLY,          2, ( 1,  1), [  8,   8,   0,   0], [ 0,  0], vk::Format::R8G8_USCALED),
    /* RG8_I2F              */ FormatInfo::new(VERTEX_ONLY,          2, ( 1,  1), [  8,   8,   0,   0], [ 0,  0], vk::Format::R8G8_SSCALED),
    /* RG16_UI2F            */ FormatInfo::new(VERTEX_ONLY,          4, ( 1,  1), [ 16,  16,   0,   0], [ 0,  0], vk::Format::R16G16_USCALED),
    /* RG16_I2F             */ FormatInfo::new(VERTEX_ONLY,          4, ( 1,  1), [ 16,  16,   0,   0], [ 0,  0], vk::Format::R16G16_SSCALED),
    /* RG32_UI2F            */ FormatInfo::new(VERTEX_ONLY,          8, ( 1,  1), [ 32,  32,   0,   0], [ 0,  0], vk::Format::UNDEFINED),
    /* RG32_I2F             */ FormatInfo::new(VERTEX_ONLY,          8, ( 1,  1), [ 32,  32,   0,   0], [ 0,  0], vk::Format::UNDEFINED),
    /* RGB8_UI2F            */ FormatInfo::new(VERTEX_ONLY,          3, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8_USCALED),
    /* RGB8_I2F             */ FormatInfo::new(VERTEX_ONLY,          3, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8_SSCALED),
    /* RGB16_UI2F           */ FormatInfo::new(VERTEX_ONLY,          6, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16_USCALED),
    /* RGB16_I2F            */ FormatInfo::new(VERTEX_ONLY,          6, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16_SSCALED),
    /* RGB32_UI2F           */ FormatInfo::new(VERTEX_ONLY,         12, ( 1,  1), [ 32,  32,  32,   0], [ 0,  0], vk::Format::UNDEFINED),
    /* RGB32_I2F            */ FormatInfo::new(VERTEX_ONLY,         12, ( 1,  1), [ 32,  32,  32,   0], [ 0,  0], vk::Format::UNDEFINED),
    /* RGBA8_UI2F           */ FormatInfo::new(VERTEX_ONLY,          4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::R8G8B8A8_USCALED),
    /* RGBA8_I2F            */ FormatInfo::new(VERTEX_ONLY,          4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::R8G8B8A8_SSCALED),
    /* RGBA16_UI2F          */ FormatInfo::new(VERTEX_ONLY,          8, ( 1,  1), [ 16,  16,  16,  16], [ 0,  0], vk::Format::R16G16B16A16_USCALED),
    /* RGBA16_I2F           */ FormatInfo::new(VERTEX_ONLY,          8, ( 1,  1), [ 16,  16,  16,  16], [ 0,  0], vk::Format::R16G16B16A16_SSCALED),
    /* RGBA32_UI2F          */ FormatInfo::new(VERTEX_ONLY,         16, ( 1,  1), [ 32,  32,  32,  32], [ 0,  0], vk::Format::UNDEFINED),
    /* RGBA32_I2F           */ FormatInfo::new(VERTEX_ONLY,         16, ( 1,  1), [ 32,  32,  32,  32], [ 0,  0], vk::Format::UNDEFINED),
    /* RGB10A2SN            */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 10,  10,  10,   2], [ 0,  0], vk::Format::A2B10G10R10_SNORM_PACK32),
    /* RGB10A2I             */ FormatInfo::new(TEXTURE_AND_VERTEX,   4, ( 1,  1), [ 10,  10,  10,   2], [ 0,  0], vk::Format::A2B10G10R10_SINT_PACK32),
    /* RGB10A2_UI2F         */ FormatInfo::new(VERTEX_ONLY,          4, ( 1,  1), [ 10,  10,  10,   2], [ 0,  0], vk::Format::A2B10G10R10_USCALED_PACK32),
    /* RGB10A2_I2F          */ FormatInfo::new(VERTEX_ONLY,          4, ( 1,  1), [ 10,  10,  10,   2], [ 0,  0], vk::Format::A2B10G10R10_SSCALED_PACK32),
    /* RGBX8                */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8A8_UNORM),
    /* RGBX8SN              */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8A8_SNORM),
    /* RGBX8UI              */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8A8_UINT),
    /* RGBX8I               */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::R8G8B8A8_SINT),
    /* RGBX16F              */ FormatInfo::new(TEXTURE_ONLY,         8, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16A16_SFLOAT),
    /* RGBX16               */ FormatInfo::new(TEXTURE_ONLY,         8, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16A16_UNORM),
    /* RGBX16SN             */ FormatInfo::new(TEXTURE_ONLY,         8, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16A16_SNORM),
    /* RGBX16UI             */ FormatInfo::new(TEXTURE_ONLY,         8, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16A16_UINT),
    /* RGBX16I              */ FormatInfo::new(TEXTURE_ONLY,         8, ( 1,  1), [ 16,  16,  16,   0], [ 0,  0], vk::Format::R16G16B16A16_SINT),
    /* RGBX32F              */ FormatInfo::new(TEXTURE_ONLY,        16, ( 1,  1), [ 32,  32,  32,   0], [ 0,  0], vk::Format::R32G32B32A32_SFLOAT),
    /* RGBX32UI             */ FormatInfo::new(TEXTURE_ONLY,        16, ( 1,  1), [ 32,  32,  32,   0], [ 0,  0], vk::Format::R32G32B32A32_UINT),
    /* RGBX32I              */ FormatInfo::new(TEXTURE_ONLY,        16, ( 1,  1), [ 32,  32,  32,   0], [ 0,  0], vk::Format::R32G32B32A32_SINT),
    /* RGBA_ASTC_4x4        */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_4X4_UNORM_BLOCK),
    /* RGBA_ASTC_5x4        */ FormatInfo::new(TEXTURE_ONLY,        16, ( 5,  4), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_5X4_UNORM_BLOCK),
    /* RGBA_ASTC_5x5        */ FormatInfo::new(TEXTURE_ONLY,        16, ( 5,  5), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_5X5_UNORM_BLOCK),
    /* RGBA_ASTC_6x5        */ FormatInfo::new(TEXTURE_ONLY,        16, ( 6,  5), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_6X5_UNORM_BLOCK),
    /* RGBA_ASTC_6x6        */ FormatInfo::new(TEXTURE_ONLY,        16, ( 6,  6), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_6X6_UNORM_BLOCK),
    /* RGBA_ASTC_8x5        */ FormatInfo::new(TEXTURE_ONLY,        16, ( 8,  5), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_8X5_UNORM_BLOCK),
    /* RGBA_ASTC_8x6        */ FormatInfo::new(TEXTURE_ONLY,        16, ( 8,  6), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_8X6_UNORM_BLOCK),
    /* RGBA_ASTC_8x8        */ FormatInfo::new(TEXTURE_ONLY,        16, ( 8,  8), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_8X8_UNORM_BLOCK),
    /* RGBA_ASTC_10x5       */ FormatInfo::new(TEXTURE_ONLY,        16, (10,  5), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_10X5_UNORM_BLOCK),
    /* RGBA_ASTC_10x6       */ FormatInfo::new(TEXTURE_ONLY,        16, (10,  6), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_10X6_UNORM_BLOCK),
    /* RGBA_ASTC_10x8       */ FormatInfo::new(TEXTURE_ONLY,        16, (10,  8), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_10X8_UNORM_BLOCK),
    /* RGBA_ASTC_10x10      */ FormatInfo::new(TEXTURE_ONLY,        16, (10, 10), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_10X10_UNORM_BLOCK),
    /* RGBA_ASTC_12x10      */ FormatInfo::new(TEXTURE_ONLY,        16, (12, 10), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_12X10_UNORM_BLOCK),
    /* RGBA_ASTC_12x12      */ FormatInfo::new(TEXTURE_ONLY,        16, (12, 12), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_12X12_UNORM_BLOCK),
    /* RGBA_ASTC_4x4_SRGB   */ FormatInfo::new(TEXTURE_ONLY,        16, ( 4,  4), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_4X4_SRGB_BLOCK),
    /* RGBA_ASTC_5x4_SRGB   */ FormatInfo::new(TEXTURE_ONLY,        16, ( 5,  4), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_5X4_SRGB_BLOCK),
    /* RGBA_ASTC_5x5_SRGB   */ FormatInfo::new(TEXTURE_ONLY,        16, ( 5,  5), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_5X5_SRGB_BLOCK),
    /* RGBA_ASTC_6x5_SRGB   */ FormatInfo::new(TEXTURE_ONLY,        16, ( 6,  5), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_6X5_SRGB_BLOCK),
    /* RGBA_ASTC_6x6_SRGB   */ FormatInfo::new(TEXTURE_ONLY,        16, ( 6,  6), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_6X6_SRGB_BLOCK),
    /* RGBA_ASTC_8x5_SRGB   */ FormatInfo::new(TEXTURE_ONLY,        16, ( 8,  5), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_8X5_SRGB_BLOCK),
    /* RGBA_ASTC_8x6_SRGB   */ FormatInfo::new(TEXTURE_ONLY,        16, ( 8,  6), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_8X6_SRGB_BLOCK),
    /* RGBA_ASTC_8x8_SRGB   */ FormatInfo::new(TEXTURE_ONLY,        16, ( 8,  8), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_8X8_SRGB_BLOCK),
    /* RGBA_ASTC_10x5_SRGB  */ FormatInfo::new(TEXTURE_ONLY,        16, (10,  5), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_10X5_SRGB_BLOCK),
    /* RGBA_ASTC_10x6_SRGB  */ FormatInfo::new(TEXTURE_ONLY,        16, (10,  6), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_10X6_SRGB_BLOCK),
    /* RGBA_ASTC_10x8_SRGB  */ FormatInfo::new(TEXTURE_ONLY,        16, (10,  8), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_10X8_SRGB_BLOCK),
    /* RGBA_ASTC_10x10_SRGB */ FormatInfo::new(TEXTURE_ONLY,        16, (10, 10), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_10X10_SRGB_BLOCK),
    /* RGBA_ASTC_12x10_SRGB */ FormatInfo::new(TEXTURE_ONLY,        16, (12, 10), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_12X10_SRGB_BLOCK),
    /* RGBA_ASTC_12x12_SRGB */ FormatInfo::new(TEXTURE_ONLY,        16, (12, 12), [  8,   8,   8,   8], [ 0,  0], vk::Format::ASTC_12X12_SRGB_BLOCK),
    /* BGR565               */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  5,   6,   5,   0], [ 0,  0], vk::Format::B5G6R5_UNORM_PACK16),
    // Host format carries an alpha bit the guest lacks, alpha must be swizzled to one
    /* BGR5                 */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  5,   5,   5,   0], [ 0,  0], vk::Format::B5G5R5A1_UNORM_PACK16),
    /* BGR5A1               */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  5,   5,   5,   1], [ 0,  0], vk::Format::B5G5R5A1_UNORM_PACK16),
    // No A1B5G5R5 host format before maintenance5, red and blue must be swizzled
    /* A1BGR5               */ FormatInfo::new(TEXTURE_ONLY,         2, ( 1,  1), [  5,   5,   5,   1], [ 0,  0], vk::Format::A1R5G5B5_UNORM_PACK16),
    /* BGRX8                */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::B8G8R8A8_UNORM),
    /* BGRA8                */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::B8G8R8A8_UNORM),
    /* BGRX8_SRGB           */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   0], [ 0,  0], vk::Format::B8G8R8A8_SRGB),
    /* BGRA8_SRGB           */ FormatInfo::new(TEXTURE_ONLY,         4, ( 1,  1), [  8,   8,   8,   8], [ 0,  0], vk::Format::B8G8R8A8_SRGB),
];

/// `None` must be the only all-zero record, and every other record must be consistent
const fn is_table_consistent(table: &[FormatInfo; Format::COUNT]) -> bool {
    if !table[0].is_none_record() {
        return false;
    }

    let mut i = 1;
    while i < Format::COUNT {
        if table[i].is_none_record() || !table[i].is_consistent() {
            return false;
        }
        i += 1;
    }
    true
}

sa::const_assert!(is_table_consistent(&FORMAT_INFO));
sa::const_assert_eq!(Format::BGRA8_SRGB as usize, Format::COUNT - 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_excludes_sentinel() {
        assert_eq!(Format::COUNT, 157);
        assert_eq!(Format::iter().count(), Format::COUNT);
    }

    #[test]
    fn from_idx_follows_guest_order() {
        assert_eq!(Format::from_idx(0), Some(Format::None));
        assert_eq!(Format::from_idx(1), Some(Format::R8));
        assert_eq!(Format::from_idx(37), Some(Format::RGBA8));
        assert_eq!(Format::from_idx(Format::COUNT - 1), Some(Format::BGRA8_SRGB));
        assert_eq!(Format::from_idx(Format::COUNT), None);
        assert_eq!(Format::from_idx_or(Format::COUNT, Format::None), Format::None);
    }

    #[test]
    fn ordinals_match_discriminants() {
        let mut expected = 0;
        Format::for_each(|format| {
            assert_eq!(format.raw(), expected);
            expected += 1;
        });
        assert_eq!(expected as usize, Format::COUNT);
    }

    #[test]
    fn display_uses_guest_names() {
        assert_eq!(Format::RGBA8.to_string(), "RGBA8");
        assert_eq!(Format::RGBA_ASTC_4x4.to_string(), "RGBA_ASTC_4x4");
        assert_eq!(Format::Depth24_Stencil8.to_string(), "Depth24_Stencil8");
        assert_eq!(format!("{:>8}", Format::R8), "      R8");
    }

    #[test]
    fn parse_round_trips_names() {
        Format::for_each(|format| {
            assert_eq!(format.to_string().parse::<Format>(), Ok(format));
        });
        assert_eq!("rgba8".parse::<Format>(), Err(Error::UnknownFormatName("rgba8".to_string())));
        assert_eq!("FormatSize".parse::<Format>(), Err(Error::UnknownFormatName("FormatSize".to_string())));
    }

    #[test]
    fn family_predicates() {
        assert!(Format::RGBA8_SRGB.is_srgb());
        assert!(Format::RGBA_ASTC_12x12_SRGB.is_srgb());
        assert!(!Format::RGBA_ASTC_12x12.is_srgb());
        assert!(!Format::RGBA8.is_srgb());

        assert!(Format::R8_UI2F.is_integer_to_float());
        assert!(Format::RGBA32_I2F.is_integer_to_float());
        assert!(Format::RGB10A2_I2F.is_integer_to_float());
        assert!(!Format::RGB10A2I.is_integer_to_float());

        assert!(Format::RGBA_ASTC_4x4.is_astc());
        assert!(Format::RGBA_ASTC_12x12_SRGB.is_astc());
        assert!(!Format::BGR565.is_astc());
        assert!(!Format::BPTC_UFLOAT.is_astc());
    }

    #[test]
    fn none_record_is_zero() {
        assert!(FormatInfo::NONE.is_none_record());
        assert!(FormatInfo::NONE.is_consistent());
        assert!(!FormatInfo::NONE.is_compressed());
        assert!(!FormatInfo::NONE.is_depth_stencil());
        assert_eq!(FormatInfo::NONE.bits_per_block(), 0);
    }

    #[test]
    fn inconsistent_records_are_detected() {
        let both = FormatInfo::new(TEXTURE_ONLY, 4, (1, 1), [8, 0, 0, 0], [24, 0], vk::Format::UNDEFINED);
        assert!(!both.is_consistent());

        let zero_sized = FormatInfo::new(TEXTURE_ONLY, 0, (1, 1), [8, 0, 0, 0], [0, 0], vk::Format::R8_UNORM);
        assert!(!zero_sized.is_consistent());

        let no_block = FormatInfo::new(TEXTURE_ONLY, 8, (0, 4), [8, 0, 0, 0], [0, 0], vk::Format::BC4_UNORM_BLOCK);
        assert!(!no_block.is_consistent());

        let unusable = FormatInfo { texture: false, vertex: false, ..get_format_info(Format::R8) };
        assert!(!unusable.is_consistent());

        let mut table = FORMAT_INFO;
        assert!(is_table_consistent(&table));
        table[Format::R8 as usize] = FormatInfo::NONE;
        assert!(!is_table_consistent(&table));
    }
}
