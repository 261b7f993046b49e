use crate::args::Args;
use crate::error::Error;
use crate::executor;
use crate::workspace::RunWorkspace;

use std::process::Command;

pub struct TrainModel;

impl TrainModel {
    pub fn execute(args: &Args, workspace: &RunWorkspace) -> Result<(), Error> {
        let mut command = Command::new("python");
        command
            .args(["-m", "nerfstudio.scripts.train"])
            .arg(&args.model)
            .arg("--data")
            .arg(&workspace.dataset)
            .arg("--output-dir")
            .arg(&workspace.outputs);

        executor::run("gaussian splat training", command)
    }
}
