use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// A uniquely-named scratch file under the staging directory.
///
/// The file is unlinked when the guard drops, on every exit path — normal
/// return, early `?` return, or unwind. Release happens exactly once.
pub struct StagedFile {
    file: NamedTempFile,
}

impl StagedFile {
    pub fn create(dir: &Path, prefix: &str) -> io::Result<Self> {
        let file = tempfile::Builder::new().prefix(prefix).tempfile_in(dir)?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Staging for the OCR engine's output.
///
/// The guard owns the base file whose path is handed to the engine; the
/// engine writes its actual text next to it at `<base>.txt`. Drop removes
/// the companion first, then the base file.
pub struct OutputStage {
    base: NamedTempFile,
}

impl OutputStage {
    pub fn create(dir: &Path, prefix: &str) -> io::Result<Self> {
        let base = tempfile::Builder::new().prefix(prefix).tempfile_in(dir)?;
        Ok(Self { base })
    }

    /// Path passed to the engine as its output base name.
    pub fn base_path(&self) -> &Path {
        self.base.path()
    }

    /// Where the engine's text output lands.
    pub fn text_path(&self) -> PathBuf {
        let mut os = self.base.path().as_os_str().to_os_string();
        os.push(".txt");
        PathBuf::from(os)
    }
}

impl Drop for OutputStage {
    fn drop(&mut self) {
        // The companion may not exist if the engine never ran; that's fine.
        let _ = std::fs::remove_file(self.text_path());
    }
}
