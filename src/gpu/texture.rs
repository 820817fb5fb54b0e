//! Size-dependent render-target textures for the scene pass.

/// Depth format shared by every 3D pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A render-target texture, held through its default view.
pub struct RenderTarget {
    /// A default full-texture view; keeps the texture alive.
    pub view: wgpu::TextureView,
}

impl RenderTarget {
    /// Create a render attachment with the given dimensions, format and
    /// sample count.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        (width, height): (u32, u32),
        format: wgpu::TextureFormat,
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
        Self {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
        }
    }
}

/// Depth buffer plus the optional multisampled color buffer that resolves
/// into the swapchain image.
pub struct SceneTargets {
    /// Depth attachment matching the scene sample count.
    pub depth: RenderTarget,
    /// Multisampled color attachment; `None` when rendering at 1x.
    pub msaa: Option<RenderTarget>,
}

impl SceneTargets {
    /// Allocate targets for a surface of the given size.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        size: (u32, u32),
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let depth = RenderTarget::new(
            device,
            "Scene Depth",
            size,
            DEPTH_FORMAT,
            sample_count,
        );
        let msaa = (sample_count > 1).then(|| {
            RenderTarget::new(
                device,
                "Scene MSAA Color",
                size,
                color_format,
                sample_count,
            )
        });
        Self { depth, msaa }
    }

    /// Color attachment for the scene pass: draws into the MSAA buffer and
    /// resolves into `frame`, or draws into `frame` directly at 1x.
    pub fn color_attachment<'a>(
        &'a self,
        frame: &'a wgpu::TextureView,
        clear: wgpu::Color,
    ) -> wgpu::RenderPassColorAttachment<'a> {
        let ops = wgpu::Operations {
            load: wgpu::LoadOp::Clear(clear),
            store: wgpu::StoreOp::Store,
        };
        match &self.msaa {
            Some(msaa) => wgpu::RenderPassColorAttachment {
                view: &msaa.view,
                resolve_target: Some(frame),
                ops,
            },
            None => wgpu::RenderPassColorAttachment {
                view: frame,
                resolve_target: None,
                ops,
            },
        }
    }

    /// Depth attachment cleared to the far plane.
    pub fn depth_attachment(
        &self,
    ) -> wgpu::RenderPassDepthStencilAttachment<'_> {
        wgpu::RenderPassDepthStencilAttachment {
            view: &self.depth.view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }
    }
}
