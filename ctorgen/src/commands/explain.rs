use std::path::PathBuf;

use clap::Args;
use ctorgen_manifest::ManifestFile;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to the type snapshot (defaults to ./ctorgen.toml)
    #[arg(short, long, default_value = "ctorgen.toml")]
    pub config: PathBuf,

    /// Only explain this type (qualified name, simple name or unit name)
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub type_name: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();

        let report = ops::explain(file.manifest(), file.path(), self.type_name.as_deref())?;

        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .wrap_err("Failed to serialize explain report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
