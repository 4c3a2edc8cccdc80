#![allow(dead_code)]

use std::path::PathBuf;

use flow_viewer_util::DiagnosticSink;

pub(crate) const EPSILON: f32 = 1e-6;

pub(crate) fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub(crate) fn shader_fixture(name: &str) -> PathBuf {
    fixture("shaders").join(name)
}

pub(crate) fn load_document(name: &str) -> anyhow::Result<gltf::Document> {
    let gltf = gltf::Gltf::open(fixture(name))?;
    Ok(gltf.document)
}

pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Collects every diagnostic line written by the shader compiler.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) lines: Vec<String>,
}

impl DiagnosticSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
