/// Parameters for acquiring the adapter, device and surface.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when one is offered.
    pub prefer_srgb: bool,

    /// Swap behavior. FIFO is the only mode every platform must support.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features. Shapes need none.
    pub required_features: wgpu::Features,

    /// Limits requested from the device.
    ///
    /// The downlevel defaults are enough for two uniform bindings and a
    /// single vertex buffer, and keep GL/WebGL adapters eligible.
    pub required_limits: wgpu::Limits,

    /// Hint for the number of queued frames.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::default(),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
