use std::{
    io::{self, Write},
    sync::Arc,
    thread,
};

use ash::vk;
use nnvk_format::*;
use parking_lot::Mutex;

fn all_infos() -> impl Iterator<Item = (Format, FormatInfo)> {
    Format::iter().map(|format| (format, get_format_info(format)))
}

#[test]
fn table_is_complete() {
    let mut count = 0;
    Format::for_each(|format| {
        let raw = format.raw();
        assert_eq!(try_get_format_info(raw), Ok(get_format_info(format)), "{format}");
        count += 1;
    });
    assert_eq!(count, Format::COUNT);
}

#[test]
fn usable_formats_have_a_size() {
    for (format, info) in all_infos() {
        if format == Format::None {
            assert_eq!(info, FormatInfo::NONE);
            assert!(!info.texture && !info.vertex);
            continue;
        }

        assert!(info.bytes_per_block >= 1, "{format}");
        assert!(info.block_width >= 1, "{format}");
        assert!(info.block_height >= 1, "{format}");
        assert!(info.texture || info.vertex, "{format}");
    }
}

#[test]
fn channel_groups_are_exclusive() {
    for (format, info) in all_infos() {
        let groups = [info.is_depth_stencil(), info.is_color(), info == FormatInfo::NONE];
        assert_eq!(groups.iter().filter(|in_group| **in_group).count(), 1, "{format}");
        assert!(info.is_consistent(), "{format}");
    }
}

#[test]
fn compression_follows_block_size() {
    for (format, info) in all_infos() {
        assert_eq!(info.is_compressed(), info.block_width > 1 || info.block_height > 1, "{format}");

        let name = format.to_string();
        let compressed_family = ["DXT", "RGTC", "BPTC", "ASTC"].iter().any(|family| name.contains(family));
        assert_eq!(info.is_compressed(), compressed_family, "{format}");
    }
}

#[test]
fn depth_stencil_formats() {
    let depth_stencil: Vec<Format> = Format::iter().filter(|format| format.info().is_depth_stencil()).collect();
    assert_eq!(depth_stencil, [
        Format::Stencil8,
        Format::Depth16,
        Format::Depth24,
        Format::Depth32F,
        Format::Depth24_Stencil8,
        Format::Depth32F_Stencil8,
    ]);

    for format in depth_stencil {
        let info = format.info();
        assert!(info.texture && !info.vertex, "{format}");
        assert!(!info.is_compressed(), "{format}");
    }
}

#[test]
fn rgba8() {
    let info = get_format_info(Format::RGBA8);
    assert!(info.texture);
    assert!(info.vertex);
    assert_eq!(info.bytes_per_block, 4);
    assert_eq!((info.block_width, info.block_height), (1, 1));
    assert_eq!((info.red_bits, info.green_bits, info.blue_bits, info.alpha_bits), (8, 8, 8, 8));
    assert_eq!((info.depth_bits, info.stencil_bits), (0, 0));
    assert_eq!(info.host_format, vk::Format::R8G8B8A8_UNORM);
}

#[test]
fn rgba_astc_4x4() {
    let info = get_format_info(Format::RGBA_ASTC_4x4);
    assert!(info.texture);
    assert!(!info.vertex);
    assert_eq!((info.block_width, info.block_height), (4, 4));
    assert_eq!(info.bytes_per_block, 16);
    assert!(info.is_compressed());
    assert!(!info.is_depth_stencil());
}

#[test]
fn astc_block_footprints() {
    let footprints = [(4, 4), (5, 4), (5, 5), (6, 5), (6, 6), (8, 5), (8, 6), (8, 8), (10, 5), (10, 6), (10, 8), (10, 10), (12, 10), (12, 12)];

    let astc: Vec<Format> = Format::iter().filter(|format| format.is_astc()).collect();
    assert_eq!(astc.len(), footprints.len() * 2);

    for (format, (width, height)) in astc.iter().zip(footprints.iter().chain(footprints.iter())) {
        let info = format.info();
        assert_eq!((info.block_width, info.block_height), (*width, *height), "{format}");
        assert_eq!(info.bytes_per_block, 16, "{format}");
        assert!(format.to_string().contains(&format!("{width}x{height}")), "{format}");
    }
}

#[test]
fn depth24_stencil8() {
    let info = get_format_info(Format::Depth24_Stencil8);
    assert_eq!(info.depth_bits, 24);
    assert_eq!(info.stencil_bits, 8);
    assert!(info.is_depth_stencil());
    assert!(!info.is_compressed());
    assert!(!info.is_color());
}

#[test]
fn block_compressed_sizes() {
    for format in [Format::RGB_DXT1, Format::RGBA_DXT1, Format::RGB_DXT1_SRGB, Format::RGBA_DXT1_SRGB, Format::RGTC1_Unorm, Format::RGTC1_Snorm] {
        assert_eq!(format.info().bytes_per_block, 8, "{format}");
    }
    for format in [Format::RGBA_DXT3, Format::RGBA_DXT5, Format::RGTC2_Unorm, Format::RGTC2_Snorm, Format::BPTC_Unorm, Format::BPTC_SFLOAT] {
        assert_eq!(format.info().bytes_per_block, 16, "{format}");
    }
}

#[test]
fn element_sizes_match_channels() {
    // Plain formats are byte aligned per channel, so the element size is the sum of the channel widths
    for format in [Format::R8, Format::RG16F, Format::RGB32I, Format::RGBA16UI, Format::RGB10A2, Format::RGB565, Format::BGRA8] {
        let info = format.info();
        let bits = info.red_bits as u16 + info.green_bits as u16 + info.blue_bits as u16 + info.alpha_bits as u16;
        assert_eq!(info.bits_per_block(), bits, "{format}");
    }

    // Formats with an ignored component still take up space for it
    assert_eq!(Format::RGBX16.info().bytes_per_block, 8);
    assert_eq!(Format::RGBX16.info().alpha_bits, 0);
}

#[test]
fn vertex_only_formats() {
    for format in [Format::RGB8, Format::RGB16F, Format::R8_UI2F, Format::RGBA32_I2F, Format::RGB10A2_UI2F] {
        let info = format.info();
        assert!(info.vertex && !info.texture, "{format}");
    }
}

#[test]
fn missing_host_formats() {
    // Vulkan has no scaled 32-bit formats
    let missing: Vec<Format> = Format::iter().filter(|format| format.info() != FormatInfo::NONE && !format.info().has_host_format()).collect();
    assert_eq!(missing, [
        Format::R32_UI2F,
        Format::R32_I2F,
        Format::RG32_UI2F,
        Format::RG32_I2F,
        Format::RGB32_UI2F,
        Format::RGB32_I2F,
        Format::RGBA32_UI2F,
        Format::RGBA32_I2F,
    ]);
}

#[test]
fn srgb_host_formats() {
    for (format, info) in all_infos() {
        let host_name = format!("{:?}", info.host_format);
        assert_eq!(format.is_srgb(), host_name.contains("SRGB"), "{format}: {host_name}");
    }
}

#[test]
fn invalid_identifiers_are_rejected() {
    let count = Format::COUNT as i32;
    for raw in [-1, i32::MIN, count, count + 1, i32::MAX] {
        assert_eq!(try_get_format_info(raw), Err(Error::InvalidFormatIdentifier(raw)));
        assert_eq!(Format::from_raw(raw), Err(Error::InvalidFormatIdentifier(raw)));
        assert_eq!(Format::try_from(raw), Err(Error::InvalidFormatIdentifier(raw)));
    }

    assert_eq!(Format::from_raw(0), Ok(Format::None));
    assert_eq!(Format::from_raw(count - 1), Ok(Format::BGRA8_SRGB));
    assert_eq!(i32::from(Format::RGBA8), 37);
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "validation")]
#[test]
fn rejected_identifiers_are_logged() {
    let raw = Format::COUNT as i32 + 5;
    let buffer = SharedBuffer::default();
    let logger = nnvk_logging::get_logger();
    let idx = logger.add_writer(Box::new(buffer.clone()));
    assert!(idx.is_ok());

    let result = try_get_format_info(raw);
    if let Ok(idx) = idx {
        logger.remove_writer(idx);
    }
    assert_eq!(result, Err(Error::InvalidFormatIdentifier(raw)));

    let contents = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
    let line = contents.lines().find(|line| line.contains(&raw.to_string()));
    assert!(line.is_some_and(|line| line.contains("[Graphics nnvk(Format)]")), "{contents}");
}

#[test]
fn host_formats_needing_a_swizzle() {
    let rgb5 = get_format_info(Format::RGB5);
    assert_eq!(rgb5.host_format, vk::Format::R5G5B5A1_UNORM_PACK16);
    assert_eq!(rgb5.alpha_bits, 0);

    let bgr5 = get_format_info(Format::BGR5);
    assert_eq!(bgr5.host_format, vk::Format::B5G5R5A1_UNORM_PACK16);
    assert_eq!(bgr5.alpha_bits, 0);

    let a1bgr5 = get_format_info(Format::A1BGR5);
    assert_eq!(a1bgr5.host_format, vk::Format::A1R5G5B5_UNORM_PACK16);
    assert_eq!(a1bgr5.alpha_bits, 1);
}

#[test]
fn concurrent_lookups() {
    let expected: Vec<FormatInfo> = all_infos().map(|(_, info)| info).collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (raw, info) in expected.iter().enumerate() {
                    assert_eq!(try_get_format_info(raw as i32).as_ref(), Ok(info));
                }
            });
        }
    });
}
