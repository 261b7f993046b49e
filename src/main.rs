mod args;
mod error;
mod executor;
mod stages;
mod workspace;

use stages::ExtractFrames;
use stages::ReconstructPoses;
use stages::BuildDataset;
use stages::TrainModel;
use stages::ExportSplat;
use args::Args;
use error::Error;
use workspace::RunWorkspace;

use std::path::PathBuf;
use std::process::ExitCode;

fn run_pipeline() -> Result<PathBuf, Error> {
    let args = Args::parse()?;
    args.print_options();
    let workspace = RunWorkspace::create(&args.runs_dir)?;
    ExtractFrames::execute(&args, &workspace)?;
    ReconstructPoses::execute(&workspace)?;
    BuildDataset::execute(&workspace)?;
    TrainModel::execute(&args, &workspace)?;
    ExportSplat::execute(&args, &workspace)?;
    Ok(workspace.exports)
}

fn main() -> ExitCode {
    match run_pipeline() {
        Ok(exports) => {
            println!();
            println!("Pipeline completed successfully");
            println!(".splat file is in: {}", exports.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!();
            eprintln!("Pipeline failed");
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
