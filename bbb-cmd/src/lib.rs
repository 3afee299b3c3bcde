//! Command implementations for the biodiversity dataset CLI.
//!
//! Provides subcommands for listing samples and printing the same
//! projections the dashboard renders, from a URL or a local JSON file.

use clap::Subcommand;

use bbb_data::projection::TOP_OTU_COUNT;
use bbb_data::SampleId;

pub mod show;
pub mod source;

#[derive(Subcommand)]
pub enum Command {
    /// List sample identifiers in dataset order
    Samples,

    /// Print the bar, bubble and metadata projections for one sample
    Show {
        /// Sample identifier (e.g. 940)
        sample: String,

        /// Number of leading OTUs in the bar projection
        #[arg(long, default_value_t = TOP_OTU_COUNT)]
        top: usize,

        /// Print Plotly figures as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(source: &str, command: Command) -> anyhow::Result<()> {
    let dataset = source::load(source).await?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Samples => show::write_samples(&dataset, &mut out),
        Command::Show { sample, top, json } => {
            let id = SampleId::from(sample);
            if json {
                show::write_json(&dataset, &id, top, &mut out)
            } else {
                show::write_text(&dataset, &id, top, &mut out)
            }
        }
    }
}
