/// One acquired swapchain image plus the encoder recording into it.
///
/// Hold it only for the duration of a frame: while it is alive the surface
/// cannot hand out the next texture.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
