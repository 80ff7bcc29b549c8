/// Ray counters gathered while rendering. Each worker keeps its own and they are merged at the end.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // primary rays, one per sample
    pub shadow_rays: usize, // all rays used to test light visibility
    pub occluded: usize,    // shadow rays that were blocked
    pub env_hits: usize,    // primary rays that resolved to the background
}

impl Profile {
    pub fn new(camera_rays: usize, shadow_rays: usize, occluded: usize, env_hits: usize) -> Self {
        Profile {
            camera_rays,
            shadow_rays,
            occluded,
            env_hits,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.shadow_rays + other.shadow_rays,
            self.occluded + other.occluded,
            self.env_hits + other.env_hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            shadow_rays,
            occluded,
            env_hits,
        } = self;
        let sum = camera_rays + shadow_rays;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} total shadow rays at {} per second, {} of them occluded",
            shadow_rays,
            shadow_rays as f32 / elapsed,
            occluded
        );
        info!("{} camera rays hit the background", env_hits);
        info!(
            "{} total rays at {} per second and {} per second per thread",
            sum,
            sum as f32 / elapsed,
            sum as f32 / elapsed / (threads as f32)
        );
    }
}
