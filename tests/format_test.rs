use flow_viewer_util::{ComponentFormat, UnsupportedFormat, determine_vertex_format};
use gltf::accessor::{DataType, Dimensions};

mod common;
use crate::common::test_utils::load_document;

const ALL_DIMENSIONS: [Dimensions; 7] = [
    Dimensions::Scalar,
    Dimensions::Vec2,
    Dimensions::Vec3,
    Dimensions::Vec4,
    Dimensions::Mat2,
    Dimensions::Mat3,
    Dimensions::Mat4,
];

const ALL_DATA_TYPES: [DataType; 6] = [
    DataType::I8,
    DataType::U8,
    DataType::I16,
    DataType::U16,
    DataType::U32,
    DataType::F32,
];

#[test]
fn should_map_supported_pairs() {
    assert_eq!(
        determine_vertex_format(Dimensions::Vec3, DataType::F32),
        Ok(ComponentFormat::Vec3Float)
    );
    assert_eq!(
        determine_vertex_format(Dimensions::Scalar, DataType::U32),
        Ok(ComponentFormat::ScalarUInt32)
    );
    assert_eq!(
        determine_vertex_format(Dimensions::Scalar, DataType::U16),
        Ok(ComponentFormat::ScalarUInt16)
    );
}

#[test]
fn should_reject_every_other_pair() {
    let supported = [
        (Dimensions::Vec3, DataType::F32),
        (Dimensions::Scalar, DataType::U32),
        (Dimensions::Scalar, DataType::U16),
    ];
    for dimensions in ALL_DIMENSIONS {
        for data_type in ALL_DATA_TYPES {
            if supported.contains(&(dimensions, data_type)) {
                continue;
            }
            assert_eq!(
                determine_vertex_format(dimensions, data_type),
                Err(UnsupportedFormat {
                    dimensions,
                    data_type
                }),
                "{:?} of {:?} should be unsupported",
                dimensions,
                data_type
            );
        }
    }
}

#[test]
fn should_project_to_wgpu_formats() {
    assert_eq!(
        ComponentFormat::Vec3Float.vertex_format(),
        wgpu::VertexFormat::Float32x3
    );
    assert_eq!(ComponentFormat::Vec3Float.index_format(), None);
    assert_eq!(
        ComponentFormat::ScalarUInt32.index_format(),
        Some(wgpu::IndexFormat::Uint32)
    );
    assert_eq!(
        ComponentFormat::ScalarUInt16.index_format(),
        Some(wgpu::IndexFormat::Uint16)
    );
    assert_eq!(
        ComponentFormat::Vec3Float.size_in_bytes(),
        ComponentFormat::Vec3Float.vertex_format().size()
    );
    assert_eq!(ComponentFormat::ScalarUInt16.size_in_bytes(), 2);
}

#[test]
fn should_read_formats_from_gltf_accessors() -> anyhow::Result<()> {
    let document = load_document("two_meshes.gltf")?;
    let formats: Vec<_> = document
        .accessors()
        .map(|accessor| ComponentFormat::from_accessor(&accessor))
        .collect();

    assert_eq!(formats[0], Ok(ComponentFormat::Vec3Float));
    assert_eq!(formats[1], Ok(ComponentFormat::Vec3Float));
    assert_eq!(formats[2], Ok(ComponentFormat::ScalarUInt16));
    let err = formats[3].expect_err("VEC2 texture coordinates have no mapping");
    assert_eq!(err.dimensions, Dimensions::Vec2);
    assert_eq!(err.data_type, DataType::F32);
    assert!(err.to_string().starts_with("Unknown accessor types"));
    Ok(())
}

#[test]
fn should_convert_into_crate_error() {
    fn load() -> Result<ComponentFormat, flow_viewer_util::Error> {
        Ok(determine_vertex_format(Dimensions::Mat4, DataType::F32)?)
    }
    assert!(matches!(
        load(),
        Err(flow_viewer_util::Error::UnsupportedFormat(_))
    ));
}
