//! Shader compilation.
//!
//! Shaders are written in WGSL and compiled with naga, the compiler wgpu itself
//! uses, to SPIR-V for a single entry point. Compilation runs synchronously on
//! the calling thread. Whatever the compiler has to say is written to a
//! [`DiagnosticSink`] before the outcome is checked, so warnings and errors
//! show up in the log even when the caller only sees the final status.

use std::path::Path;

use naga::{
    ShaderStage,
    back::spv,
    front::wgsl,
    valid::{Capabilities, ValidationFlags, Validator},
};

use crate::{error::GraphicsApiFailure, gfx::status::Status};

/// Receiver for compiler diagnostics, one line at a time.
pub trait DiagnosticSink {
    fn write_line(&mut self, line: &str);
}

impl<F: FnMut(&str)> DiagnosticSink for F {
    fn write_line(&mut self, line: &str) {
        self(line)
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn write_line(&mut self, line: &str) {
        log::warn!("{}", line);
    }
}

/// A named constant injected into the shader source before compilation.
///
/// WGSL has no preprocessor; each define becomes a module-scope
/// `const NAME = VALUE;` declaration, so `value` must be a WGSL expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDefine {
    pub name: String,
    pub value: String,
}

impl ShaderDefine {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Switches fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileFlags {
    /// Emit debug names and source information into the bytecode.
    pub debug: bool,
}

impl CompileFlags {
    pub const fn for_build() -> Self {
        Self {
            debug: cfg!(debug_assertions),
        }
    }

    fn writer_flags(self) -> spv::WriterFlags {
        let mut flags = spv::Options::default().flags;
        flags.set(spv::WriterFlags::DEBUG, self.debug);
        flags
    }
}

/// SPIR-V bytecode owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledShader {
    words: Vec<u32>,
}

impl CompiledShader {
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn len_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u32>()
    }
}

impl From<CompiledShader> for Vec<u32> {
    fn from(shader: CompiledShader) -> Self {
        shader.words
    }
}

/// Compile `entry_point` from the WGSL file at `path`, logging any diagnostics.
///
/// `target_profile` picks the stage (`vs_5_0`, `ps_5_0`, `cs_5_0`, or plain
/// `vertex`, `fragment`, `compute`). See [`compile_shader_with`].
pub fn compile_shader(
    path: impl AsRef<Path>,
    entry_point: &str,
    target_profile: &str,
    defines: &[ShaderDefine],
) -> Result<CompiledShader, GraphicsApiFailure> {
    compile_shader_with(path, entry_point, target_profile, defines, &mut LogSink)
}

/**
 * Compile `entry_point` from the WGSL file at `path`, sending diagnostics to `sink`.
 *
 * Diagnostics are forwarded line by line before the status is checked. On
 * failure no bytecode is returned; the error carries the status code:
 * I/O failures map through [`Status::from_io_error`], an unknown profile or a
 * missing entry point is `E_INVALIDARG`, anything the compiler rejects is
 * `E_FAIL`.
 */
pub fn compile_shader_with(
    path: impl AsRef<Path>,
    entry_point: &str,
    target_profile: &str,
    defines: &[ShaderDefine],
    sink: &mut dyn DiagnosticSink,
) -> Result<CompiledShader, GraphicsApiFailure> {
    let path = path.as_ref();
    log::debug!(
        "Compiling {} ({}, {})",
        path.display(),
        entry_point,
        target_profile
    );

    let compilation = compile(
        path,
        entry_point,
        target_profile,
        defines,
        CompileFlags::for_build(),
    );

    if let Some(errors) = &compilation.diagnostics {
        for line in errors.lines().filter(|l| !l.trim().is_empty()) {
            sink.write_line(line);
        }
    }

    compilation.status.check()?;
    Ok(CompiledShader {
        words: compilation.words,
    })
}

/// Raw outcome of one compiler run.
struct Compilation {
    status: Status,
    words: Vec<u32>,
    diagnostics: Option<String>,
}

impl Compilation {
    fn failed(status: Status, diagnostics: String) -> Self {
        Self {
            status,
            words: Vec::new(),
            diagnostics: Some(diagnostics),
        }
    }
}

fn compile(
    path: &Path,
    entry_point: &str,
    target_profile: &str,
    defines: &[ShaderDefine],
    flags: CompileFlags,
) -> Compilation {
    let Some(stage) = parse_profile(target_profile) else {
        return Compilation::failed(
            Status::E_INVALIDARG,
            format!("unknown target profile `{}`", target_profile),
        );
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => inject_defines(&source, defines),
        Err(e) => {
            return Compilation::failed(
                Status::from_io_error(&e),
                format!("{}: {}", path.display(), e),
            );
        }
    };

    let file = path.display().to_string();
    let module = match wgsl::parse_str(&source) {
        Ok(module) => module,
        Err(e) => {
            return Compilation::failed(
                Status::E_FAIL,
                e.emit_to_string_with_path(&source, file.as_str()),
            );
        }
    };

    let info = match Validator::new(ValidationFlags::all(), Capabilities::all()).validate(&module) {
        Ok(info) => info,
        Err(e) => {
            return Compilation::failed(
                Status::E_FAIL,
                e.emit_to_string_with_path(&source, file.as_str()),
            );
        }
    };

    let has_entry_point = module
        .entry_points
        .iter()
        .any(|ep| ep.name == entry_point && ep.stage == stage);
    if !has_entry_point {
        return Compilation::failed(
            Status::E_INVALIDARG,
            format!(
                "{}: no {:?} entry point named `{}`",
                path.display(),
                stage,
                entry_point
            ),
        );
    }

    let options = spv::Options {
        flags: flags.writer_flags(),
        ..Default::default()
    };
    let pipeline_options = spv::PipelineOptions {
        shader_stage: stage,
        entry_point: entry_point.to_string(),
    };

    match spv::write_vec(&module, &info, &options, Some(&pipeline_options)) {
        Ok(words) => Compilation {
            status: Status::OK,
            words,
            diagnostics: None,
        },
        Err(e) => Compilation::failed(Status::E_FAIL, format!("{}: {}", path.display(), e)),
    }
}

/// Stage named by a profile such as `vs_5_0` or `fragment`.
fn parse_profile(profile: &str) -> Option<ShaderStage> {
    let stage = profile.split('_').next().unwrap_or(profile);
    match stage.to_ascii_lowercase().as_str() {
        "vs" | "vertex" => Some(ShaderStage::Vertex),
        "ps" | "fs" | "fragment" => Some(ShaderStage::Fragment),
        "cs" | "compute" => Some(ShaderStage::Compute),
        _ => None,
    }
}

/// Splice each define into `source` as `const NAME = VALUE;`.
///
/// The declarations go after the leading global directives (`enable`,
/// `requires`, `diagnostic`), which must precede every declaration. They are
/// written on an existing line so diagnostics keep the file's line numbers.
fn inject_defines(source: &str, defines: &[ShaderDefine]) -> String {
    if defines.is_empty() {
        return source.to_string();
    }
    let decls = defines
        .iter()
        .map(|d| format!("const {} = {};", d.name, d.value))
        .collect::<Vec<_>>()
        .join(" ");

    let at = directives_end(source);
    let mut out = String::with_capacity(source.len() + decls.len() + 1);
    out.push_str(&source[..at]);
    if at > 0 {
        out.push(' ');
        out.push_str(&decls);
    } else {
        out.push_str(&decls);
        out.push(' ');
    }
    out.push_str(&source[at..]);
    out
}

/// Byte offset just past the `;` of the last leading global directive, or 0.
fn directives_end(source: &str) -> usize {
    let mut end = 0;
    let mut pos = 0;
    loop {
        let trimmed = source[pos..].trim_start();
        let start = source.len() - trimmed.len();
        if trimmed.starts_with("//") {
            pos = source[start..].find('\n').map_or(source.len(), |i| start + i + 1);
            continue;
        }
        if !is_directive(trimmed) {
            return end;
        }
        let Some(semi) = trimmed.find(';') else {
            return end;
        };
        end = start + semi + 1;
        pos = end;
    }
}

fn is_directive(statement: &str) -> bool {
    let keyword = statement
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .next()
        .unwrap_or_default();
    matches!(keyword, "enable" | "requires" | "diagnostic")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_request_debug_info_only_in_debug_mode() {
        let debug = CompileFlags { debug: true }.writer_flags();
        assert!(debug.contains(spv::WriterFlags::DEBUG));

        let release = CompileFlags { debug: false }.writer_flags();
        assert!(!release.contains(spv::WriterFlags::DEBUG));
        assert_eq!(
            release | spv::WriterFlags::DEBUG,
            debug,
            "only the debug bit differs"
        );
    }

    #[test]
    fn should_leave_source_untouched_without_defines() {
        let source = "enable f16;\nconst X = 1;\n";
        assert_eq!(inject_defines(source, &[]), source);
    }

    #[test]
    fn should_place_defines_after_directives_on_the_same_line() {
        let source = "// header\nenable f16; // half floats\ndiagnostic(off, derivative_uniformity);\n\nfn f() {}\n";
        let defines = [ShaderDefine::new("A", "1"), ShaderDefine::new("B", "2.0")];
        let out = inject_defines(source, &defines);

        assert_eq!(out.lines().count(), source.lines().count());
        assert_eq!(
            out.lines().nth(2),
            Some("diagnostic(off, derivative_uniformity); const A = 1; const B = 2.0;")
        );
        assert_eq!(out.lines().nth(1), Some("enable f16; // half floats"));
    }

    #[test]
    fn should_prefix_first_line_without_directives() {
        let source = "@fragment\nfn fs_main() {}\n";
        let out = inject_defines(source, &[ShaderDefine::new("A", "1")]);
        assert_eq!(out, "const A = 1; @fragment\nfn fs_main() {}\n");
    }

    #[test]
    fn should_not_mistake_identifiers_for_directives() {
        assert!(is_directive("enable f16;"));
        assert!(is_directive("diagnostic(off, derivative_uniformity);"));
        assert!(!is_directive("enabled_flag: bool"));
        assert!(!is_directive("@diagnostic(off, derivative_uniformity) fn f() {}"));
        assert_eq!(directives_end("requires readonly_and_readwrite_storage_textures; enable f16;\nfn f() {}"), 61);
    }
}
