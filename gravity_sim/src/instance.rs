//! GPU-ready per-body records for a renderer

use crate::body::Body;

/// One instanced billboard per body, laid out for direct buffer upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
}

impl From<&Body> for BodyInstance {
    fn from(body: &Body) -> Self {
        Self {
            position: body.position.as_vec3().to_array(),
            radius: body.radius as f32,
            color: body.color.to_array(),
        }
    }
}

/// Build instances for every body, in simulation order
pub fn instances(bodies: &[Body]) -> Vec<BodyInstance> {
    bodies.iter().map(BodyInstance::from).collect()
}
