use fieldconfig::FieldConfig;

/// Lifecycle of one particle field instance.
///
/// `Stopped` is terminal: once a field is torn down no further frame may
/// touch the GPU, even if a redraw was already queued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

/// Targeted configuration patch applied between frames.
///
/// Everything except [`FieldUpdate::Palette`] and
/// [`FieldUpdate::ParticleCount`] is a single uniform, camera, or flag write
/// that takes effect on the next scheduled frame. A palette change resamples
/// colors and uploads that one buffer; a particle-count change is the
/// documented heavy path that regenerates and rebinds every attribute buffer
/// (the shader pipeline itself is never recompiled).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Spread(f32),
    Speed(f32),
    BaseSize(f32),
    SizeRandomness(f32),
    AlphaParticles(bool),
    CameraDistance(f32),
    PointerFollow(bool),
    PointerFactor(f32),
    Palette(Vec<String>),
    ParticleCount(u32),
}

/// Mutable scalar parameters mirrored into the uniform block each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FieldParams {
    pub spread: f32,
    pub speed: f32,
    pub base_size: f32,
    pub size_randomness: f32,
    pub alpha_particles: bool,
    pub camera_distance: f32,
    pub pointer_factor: f32,
}

impl FieldParams {
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            spread: config.particle_spread,
            speed: config.speed,
            base_size: config.base_size,
            size_randomness: config.size_randomness,
            alpha_particles: config.alpha_particles,
            camera_distance: config.camera_distance,
            pointer_factor: config.pointer_factor,
        }
    }
}
