/// Smallest buffer the viewer ever allocates (64 KiB).
pub const MIN_RESOURCE_SIZE: wgpu::BufferAddress = 64 * 1024;

/**
 * Allocation size for a GPU buffer holding `size` bytes.
 *
 * Small buffers are padded up to [`MIN_RESOURCE_SIZE`] so they line up with the
 * allocator's placement granularity and can be recycled between meshes. Larger
 * requests are returned untouched.
 */
pub fn resource_size(size: wgpu::BufferAddress) -> wgpu::BufferAddress {
    size.max(MIN_RESOURCE_SIZE)
}
