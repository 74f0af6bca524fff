use swimstd_core::error::SwimStdError;
use swimstd_core::layout::ColumnLayout;

pub fn print_default() -> Result<(), SwimStdError> {
    let json = serde_json::to_string_pretty(&ColumnLayout::default())?;
    println!("{json}");
    Ok(())
}
