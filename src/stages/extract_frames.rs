use crate::args::Args;
use crate::error::Error;
use crate::executor;
use crate::workspace::RunWorkspace;

use std::process::Command;

pub struct ExtractFrames;

impl ExtractFrames {
    pub fn execute(args: &Args, workspace: &RunWorkspace) -> Result<(), Error> {
        let pattern = workspace.frames.join("frame_%04d.jpg");

        let mut command = Command::new("ffmpeg");
        command
            .arg("-i")
            .arg(&args.input)
            .arg("-qscale:v")
            .arg("2")
            .arg(&pattern);

        executor::run("ffmpeg frame extraction", command)
    }
}
