//! Invocation settings and the embed pipeline

use std::ffi::OsString;
use std::path::PathBuf;

use crate::emit::emit_file;
use crate::error::EmbedResult;
use crate::guard::is_c_identifier;
use crate::slurp::slurp_file;
use crate::{log_debug, log_info, log_warn};

/// One embed job: read `input`, write a header for it to `output`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Binary file to embed
    pub input: PathBuf,
    /// Header file to generate
    pub output: PathBuf,
    /// Array identifier; also the include-guard base. Emitted as raw bytes.
    pub name: OsString,
}

impl EmbedConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, name: impl Into<OsString>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            name: name.into(),
        }
    }

    /// Run the job. Returns the number of bytes embedded.
    ///
    /// The input is fully read before the output is opened, so a failed
    /// read leaves any existing output untouched.
    pub fn run(&self) -> EmbedResult<usize> {
        log_debug!("config", "{:?}", self);
        let name = self.name.as_encoded_bytes();
        if !is_c_identifier(name) {
            log_warn!("config", "{:?} is not a valid C identifier; emitting it anyway", self.name);
        }

        let data = slurp_file(&self.input)?;
        emit_file(&self.output, name, data.bytes())?;

        log_info!(
            "config",
            "embedded {} bytes from {} into {} as {}",
            data.len(),
            self.input.display(),
            self.output.display(),
            self.name.to_string_lossy()
        );
        Ok(data.len())
    }
}
