//! Accessor layout to GPU buffer format mapping.

use gltf::accessor::{DataType, Dimensions};

use crate::error::UnsupportedFormat;

/// The accessor layouts the viewer can upload without conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComponentFormat {
    /// Three 32-bit floats, used for positions and normals.
    Vec3Float,
    /// A single 32-bit unsigned integer, used for indices.
    ScalarUInt32,
    /// A single 16-bit unsigned integer, used for indices.
    ScalarUInt16,
}

impl ComponentFormat {
    /// Read the layout of a glTF accessor.
    pub fn from_accessor(accessor: &gltf::Accessor) -> Result<Self, UnsupportedFormat> {
        determine_vertex_format(accessor.dimensions(), accessor.data_type())
    }

    pub fn vertex_format(self) -> wgpu::VertexFormat {
        match self {
            ComponentFormat::Vec3Float => wgpu::VertexFormat::Float32x3,
            ComponentFormat::ScalarUInt32 => wgpu::VertexFormat::Uint32,
            ComponentFormat::ScalarUInt16 => wgpu::VertexFormat::Uint16,
        }
    }

    /// `None` for layouts that cannot back an index buffer.
    pub fn index_format(self) -> Option<wgpu::IndexFormat> {
        match self {
            ComponentFormat::Vec3Float => None,
            ComponentFormat::ScalarUInt32 => Some(wgpu::IndexFormat::Uint32),
            ComponentFormat::ScalarUInt16 => Some(wgpu::IndexFormat::Uint16),
        }
    }

    /// Size of one element in bytes.
    pub fn size_in_bytes(self) -> wgpu::BufferAddress {
        match self {
            ComponentFormat::Vec3Float => 12,
            ComponentFormat::ScalarUInt32 => 4,
            ComponentFormat::ScalarUInt16 => 2,
        }
    }
}

/// Map an accessor's (dimensions, component type) pair to a [`ComponentFormat`].
///
/// Only `Vec3` of `F32`, `Scalar` of `U32` and `Scalar` of `U16` are known;
/// every other pair is rejected rather than coerced.
pub fn determine_vertex_format(
    dimensions: Dimensions,
    data_type: DataType,
) -> Result<ComponentFormat, UnsupportedFormat> {
    match (dimensions, data_type) {
        (Dimensions::Vec3, DataType::F32) => Ok(ComponentFormat::Vec3Float),
        (Dimensions::Scalar, DataType::U32) => Ok(ComponentFormat::ScalarUInt32),
        (Dimensions::Scalar, DataType::U16) => Ok(ComponentFormat::ScalarUInt16),
        _ => Err(UnsupportedFormat {
            dimensions,
            data_type,
        }),
    }
}
