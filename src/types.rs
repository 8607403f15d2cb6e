/// Camera uniform buffer data for GPU
///
/// Layout matches a WGSL struct of three `vec3<f32>` + padding and a trailing
/// `vec3<f32>` + `f32`, 64 bytes total.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    pub time: f32, // Scene clock, for shaders that animate with the actor
}
