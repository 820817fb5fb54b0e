//! Dynamic GPU buffer management with automatic resizing
//!
//! Provides vertex buffers that grow automatically when data exceeds
//! capacity, using a 2x growth strategy to minimize reallocations.

use wgpu::util::DeviceExt;

/// A GPU buffer that can grow dynamically
///
/// Uses a 2x growth strategy when capacity is exceeded.
/// Never shrinks (GPU buffers cannot be resized in place).
pub struct DynamicBuffer {
    buffer: wgpu::Buffer,
    capacity: usize, // Capacity in bytes
    len: usize,      // Current data length in bytes
    usage: wgpu::BufferUsages,
    label: String,
}

impl DynamicBuffer {
    /// Buffer with the given initial byte capacity.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        initial_capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = initial_capacity.max(64); // Minimum 64 bytes

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            capacity,
            len: 0,
            usage,
            label: label.to_owned(),
        }
    }

    /// Buffer initialized from existing data.
    pub fn new_with_data<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        if data_bytes.is_empty() {
            return Self::new(device, label, 0, usage);
        }

        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: data_bytes,
                usage: usage | wgpu::BufferUsages::COPY_DST,
            });

        Self {
            buffer,
            capacity: data_bytes.len(),
            len: data_bytes.len(),
            usage,
            label: label.to_owned(),
        }
    }

    /// Write data to buffer, growing if necessary
    ///
    /// Returns `true` if buffer was reallocated.
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        let needed = data_bytes.len();

        let reallocated = if needed > self.capacity {
            // 2x growth, minimum 1KB
            let new_capacity = grown_capacity(self.capacity, needed);

            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: new_capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            log::debug!(
                "{}: grew {} -> {} bytes",
                self.label,
                self.capacity,
                new_capacity
            );
            self.capacity = new_capacity;
            true
        } else {
            false
        };

        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, data_bytes);
        }
        self.len = needed;

        reallocated
    }

    /// The underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Bytes written by the last upload.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the last upload was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slice covering only the bytes written by the last upload.
    pub fn filled_slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..self.len as u64)
    }
}

fn grown_capacity(current: usize, needed: usize) -> usize {
    (needed * 2).max(current + 1024)
}

#[cfg(test)]
mod tests {
    use super::grown_capacity;

    #[test]
    fn growth_at_least_doubles_the_request() {
        assert_eq!(grown_capacity(64, 4000), 8000);
    }

    #[test]
    fn growth_adds_at_least_a_kilobyte() {
        assert_eq!(grown_capacity(4096, 4100), 8200);
        assert_eq!(grown_capacity(64, 100), 1088);
    }
}
