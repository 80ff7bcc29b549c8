mod pinhole_camera;

pub use pinhole_camera::{PinholeCamera, PrimaryRays};
