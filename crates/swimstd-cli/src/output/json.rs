use std::path::Path;
use swimstd_core::error::SwimStdError;
use swimstd_core::model::Document;

pub fn print(doc: &Document) -> Result<(), SwimStdError> {
    print!("{}", doc.to_pretty_json()?);
    Ok(())
}

pub fn write(doc: &Document, path: &Path) -> Result<(), SwimStdError> {
    std::fs::write(path, doc.to_pretty_json()?)?;
    Ok(())
}
