use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "wizard-cli", version, about = "Drive one request of the course selection wizard")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// List registered steps, their route names and the registry fingerprint
    Steps,
    /// Bind the current step and print its attributes
    Show(RequestArgs),
    /// Run validation on the current step (exit 4 when invalid)
    Validate(RequestArgs),
    /// Resolve the path of the next step
    Next(RequestArgs),
    /// Resolve the path of the previous step
    Previous {
        #[command(flatten)]
        request: RequestArgs,
        /// Returned as-is when the step has no previous step
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Persist the accumulated answers through the wizard store
    Save(RequestArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// Current step key
    #[arg(long)]
    pub step: Option<String>,
    /// Step params as JSON (`{"step": {"field": value}}`) or `@path/to/file.json`
    #[arg(long)]
    pub params: Option<String>,
    /// Recruitment cycle year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub provider: Option<String>,
    #[arg(long)]
    pub course: Option<String>,
    /// Disable wizard log output for this request
    #[arg(long)]
    pub quiet: bool,
}
