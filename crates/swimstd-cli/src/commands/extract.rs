use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use swimstd_core::error::SwimStdError;
use swimstd_core::extraction::command::CommandExtractor;
use swimstd_core::extraction::dump::TableDumpExtractor;
use swimstd_core::extraction::xlsx::XlsxExtractor;
use swimstd_core::extraction::TableExtractor;
use swimstd_core::layout::{self, ColumnLayout};
use swimstd_core::model::DocumentMeta;
use swimstd_core::observer::TracingObserver;

use crate::output;

pub struct ExtractArgs {
    pub input_file: PathBuf,
    pub title: String,
    pub source_url: Option<String>,
    pub generated_on: Option<NaiveDate>,
    pub layout: Option<PathBuf>,
    pub extractor_cmd: Option<String>,
    pub extractor_args: Vec<String>,
    pub output_format: String,
    pub output_file: Option<PathBuf>,
}

pub fn run(args: ExtractArgs) -> Result<(), SwimStdError> {
    let layout = match &args.layout {
        Some(path) => layout::load_layout(path)?,
        None => ColumnLayout::default(),
    };
    let extractor = select_extractor(&args)?;

    let bytes = std::fs::read(&args.input_file)?;
    let meta = DocumentMeta {
        title: args.title,
        source_url: args
            .source_url
            .unwrap_or_else(|| args.input_file.display().to_string()),
        generated_on: args
            .generated_on
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    };

    tracing::info!(
        input = %args.input_file.display(),
        backend = extractor.backend_name(),
        "extracting time standards"
    );
    let doc = swimstd_core::extract_standards(
        &bytes,
        extractor.as_ref(),
        meta,
        &layout,
        &TracingObserver,
    )?;

    match args.output_file {
        Some(path) => {
            // Always write JSON when saving to file
            output::json::write(&doc, &path)?;
            eprintln!(
                "Extracted {} age group(s), written to {}",
                doc.age_groups.len(),
                path.display()
            );
        }
        None => match args.output_format.as_str() {
            "summary" => output::summary::print(&doc),
            _ => output::json::print(&doc)?,
        },
    }

    Ok(())
}

fn select_extractor(args: &ExtractArgs) -> Result<Box<dyn TableExtractor>, SwimStdError> {
    match InputKind::from_path(&args.input_file) {
        Some(InputKind::TableDump) => Ok(Box::new(TableDumpExtractor::new())),
        Some(InputKind::Spreadsheet) => Ok(Box::new(XlsxExtractor::new())),
        Some(InputKind::Pdf) => {
            let program = args
                .extractor_cmd
                .clone()
                .ok_or(SwimStdError::ExtractorNotConfigured)?;
            Ok(Box::new(
                CommandExtractor::new(program).with_args(args.extractor_args.clone()),
            ))
        }
        None => Err(SwimStdError::UnsupportedInput(format!(
            "cannot tell how to read {} (expected .pdf, .xlsx or .json)",
            args.input_file.display()
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Pdf,
    Spreadsheet,
    TableDump,
}

impl InputKind {
    fn from_path(path: &Path) -> Option<InputKind> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(InputKind::Pdf),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(InputKind::Spreadsheet),
            "json" => Some(InputKind::TableDump),
            _ => None,
        }
    }
}
