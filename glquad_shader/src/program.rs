use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The marker that starts a new section.
const MARKER: &str = "#shader";

/// The source text of both stages of a shader program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    /// True when neither stage has any text, which usually means the file had no markers.
    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("shader file {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("error reading shader file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Vertex,
    Fragment,
}

/// Splits `text` into its vertex and fragment sections.
///
/// A line containing `#shader` selects the section that the following lines go to: `vertex`
/// or `fragment` if the line names one, otherwise whatever was selected before. Marker lines
/// themselves are dropped, and so is anything before the first marker. Every kept line is
/// terminated with `'\n'`.
pub fn parse(text: &str) -> ShaderProgramSource {
    let mut source = ShaderProgramSource::default();
    let mut section = Section::None;

    for line in text.lines() {
        if line.contains(MARKER) {
            if line.contains("vertex") {
                section = Section::Vertex;
            } else if line.contains("fragment") {
                section = Section::Fragment;
            }
            continue;
        }

        let target = match section {
            Section::None => continue,
            Section::Vertex => &mut source.vertex,
            Section::Fragment => &mut source.fragment,
        };
        target.push_str(line);
        target.push('\n');
    }

    source
}

/// Reads and splits the shader program file at `path`.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ShaderProgramSource, SourceError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(text) => Ok(parse(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SourceError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(SourceError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
