use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{selectors::filter_jobs, spec::Criteria},
            seed,
        },
        server::listen,
    },
    prelude::Result,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(about = "job board web service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the job board over HTTP
    Listen,
    /// Filter the seeded job listing and print matches as JSON
    Search(SearchArgs),
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long, default_value = "")]
    text: String,
    #[arg(long, default_value = "all")]
    location: String,
    #[arg(long = "type", default_value = "all")]
    kind: String,
}

impl From<SearchArgs> for Criteria {
    fn from(args: SearchArgs) -> Self {
        Criteria {
            text: args.text,
            location: args.location,
            kind: args.kind,
        }
    }
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Search(search)) => {
            let jobs = seed::listing();
            let criteria = Criteria::from(search);
            let matches = filter_jobs(&jobs, &criteria);
            tracing::debug!("{} of {} jobs match {:?}", matches.len(), jobs.len(), &criteria);
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
