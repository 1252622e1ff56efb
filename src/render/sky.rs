use super::helpers::{make_pipeline, uniform_binding, PipelineSpec};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SkyUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) night_mix: f32,
    pub(crate) shake: f32,
    pub(crate) time: f32,
    pub(crate) _pad: [f32; 3],
}

pub(crate) struct SkyResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_sky_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> SkyResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sky_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SKY_WGSL.into()),
    });
    let (bgl, uniform_buffer, bind_group) = uniform_binding(
        device,
        "sky_uniforms",
        std::mem::size_of::<SkyUniforms>() as u64,
        wgpu::ShaderStages::FRAGMENT,
    );
    let pipeline = make_pipeline(
        device,
        &bgl,
        PipelineSpec {
            label: "sky_pipeline",
            shader: &shader,
            vs_entry: "vs_fullscreen",
            fs_entry: "fs_sky",
            buffers: &[],
            color_format,
            blend: None,
        },
    );
    SkyResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
