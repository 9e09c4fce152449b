use holocard_assets::{ColorSpace, TextureAsset};
use wgpu::util::DeviceExt;

/// A texture uploaded to the GPU with its default view.
pub struct GpuTexture {
    texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

/// GPU format matching how the asset's texels are encoded.
pub fn texture_format(color_space: ColorSpace) -> wgpu::TextureFormat {
    match color_space {
        ColorSpace::Srgb => wgpu::TextureFormat::Rgba8UnormSrgb,
        ColorSpace::Linear => wgpu::TextureFormat::Rgba8Unorm,
    }
}

impl GpuTexture {
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, asset: &TextureAsset) -> Self {
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(asset.name.as_str()),
                size: wgpu::Extent3d {
                    width: asset.width,
                    height: asset.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: texture_format(asset.color_space),
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &asset.rgba,
        );
        let view = texture.create_view(&Default::default());
        tracing::debug!(
            name = %asset.name,
            width = asset.width,
            height = asset.height,
            "texture uploaded"
        );
        Self { texture, view }
    }

    /// Render attachment (color or depth) of the given size and sample count.
    pub fn attachment(
        device: &wgpu::Device,
        label: &str,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&Default::default());
        Self { texture, view }
    }

    pub fn destroy(&self) {
        self.texture.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_assets_decode_on_sample() {
        assert_eq!(texture_format(ColorSpace::Srgb), wgpu::TextureFormat::Rgba8UnormSrgb);
        assert!(!texture_format(ColorSpace::Linear).is_srgb());
    }
}
