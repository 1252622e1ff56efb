use super::helpers::{make_pipeline, uniform_binding, PipelineSpec};
use crate::core::SpriteInstance;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) _pad: [f32; 2],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

pub(crate) struct SpriteResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    capacity: usize,
    count: u32,
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sprite_instances"),
        size: (capacity.max(1) * std::mem::size_of::<SpriteInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_sprite_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    capacity: usize,
) -> SpriteResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sprites_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SPRITES_WGSL.into()),
    });
    let (bgl, uniform_buffer, bind_group) = uniform_binding(
        device,
        "sprite_uniforms",
        std::mem::size_of::<SpriteUniforms>() as u64,
        wgpu::ShaderStages::VERTEX,
    );
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SpriteInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    };
    let pipeline = make_pipeline(
        device,
        &bgl,
        PipelineSpec {
            label: "sprites_pipeline",
            shader: &shader,
            vs_entry: "vs_sprite",
            fs_entry: "fs_sprite",
            buffers: &[instance_layout],
            color_format,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        },
    );
    SpriteResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer: create_instance_buffer(device, capacity),
        capacity,
        count: 0,
    }
}

impl SpriteResources {
    /// Copies this frame's sprites, growing the buffer when the field outgrew it.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[SpriteInstance],
    ) {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.capacity);
            log::debug!("[gpu] sprite buffer grown to {}", self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
        self.count = instances.len() as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
