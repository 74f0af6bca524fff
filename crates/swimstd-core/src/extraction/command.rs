use crate::error::SwimStdError;
use crate::extraction::dump::parse_table_dump;
use crate::extraction::{PageTables, TableExtractor};
use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Output};

/// Table extraction backend that delegates to an external program.
///
/// The program is invoked as `program [args...] <document-path>` and must
/// print a tables dump (see [`parse_table_dump`]) on stdout.
pub struct CommandExtractor {
    program: String,
    args: Vec<String>,
}

impl CommandExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    fn invocation(&self, document: &std::path::Path) -> Vec<OsString> {
        let mut argv: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        argv.push(document.as_os_str().to_os_string());
        argv
    }

    fn check_output(&self, output: Output) -> Result<Vec<u8>, SwimStdError> {
        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SwimStdError::ExtractorFailed {
                program: self.program.clone(),
                code,
                stderr,
            });
        }
        Ok(output.stdout)
    }
}

impl TableExtractor for CommandExtractor {
    fn extract_tables(&self, bytes: &[u8]) -> Result<Vec<PageTables>, SwimStdError> {
        // Write document bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| SwimStdError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| SwimStdError::Extraction(e.to_string()))?;

        tracing::debug!(program = %self.program, args = ?self.args, "running table extractor");

        let output = Command::new(&self.program)
            .args(self.invocation(tmpfile.path()))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SwimStdError::ExtractorNotFound {
                        program: self.program.clone(),
                    }
                } else {
                    SwimStdError::Extraction(format!("{} failed: {}", self.program, e))
                }
            })?;

        let stdout = self.check_output(output)?;
        parse_table_dump(&stdout)
    }

    fn backend_name(&self) -> &str {
        &self.program
    }
}
