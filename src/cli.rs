use std::path::PathBuf;

use clap::Parser;
use template_validator::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "validate-templates")]
#[command(about = "Validate workflow templates against their properties files")]
#[command(version)]
pub struct Args {
    /// Settings file (JSON, or YAML by extension)
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "github")]
    pub format: ReportFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
