use crate::error::Error;
use crate::executor;
use crate::workspace::RunWorkspace;

use std::fs;
use std::path::Path;
use std::process::Command;

pub struct BuildDataset;

impl BuildDataset {
    pub fn execute(workspace: &RunWorkspace) -> Result<(), Error> {
        // nerfstudio expects the COLMAP model inside the dataset tree when
        // told to skip its own reconstruction.
        let source = workspace.reconstruction.join("sparse").join("0");
        let destination = workspace.dataset.join("colmap").join("sparse").join("0");
        copy_dir_recursive(&source, &destination)?;

        let mut command = Command::new("python");
        command
            .args(["-m", "nerfstudio.scripts.process_data", "images"])
            .arg("--data")
            .arg(&workspace.frames)
            .arg("--output-dir")
            .arg(&workspace.dataset)
            .arg("--skip-colmap")
            .arg("--colmap-model-path")
            .arg("colmap/sparse/0");

        executor::run("nerfstudio dataset conversion", command)
    }
}

fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<(), Error> {
    fs::create_dir_all(destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = destination.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
