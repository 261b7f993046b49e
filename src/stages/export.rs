use crate::args::Args;
use crate::error::Error;
use crate::executor;
use crate::workspace::RunWorkspace;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct ExportSplat;

impl ExportSplat {
    pub fn execute(args: &Args, workspace: &RunWorkspace) -> Result<(), Error> {
        let model_root = workspace.outputs.join(&args.model);
        let config = Self::latest_run_dir(&model_root)?.join("config.yml");

        let mut command = Command::new("python");
        command
            .args(["-m", "nerfstudio.scripts.export", "gaussian-splat"])
            .arg("--load-config")
            .arg(&config)
            .arg("--output-dir")
            .arg(&workspace.exports);

        executor::run("splat export", command)
    }

    // Run directories are named with %Y%m%d_%H%M%S timestamps, so the
    // lexicographic maximum is the most recent run.
    fn latest_run_dir(model_root: &Path) -> Result<PathBuf, Error> {
        let entries = match fs::read_dir(model_root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NoTrainingRunFound(model_root.to_path_buf()));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let mut runs = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                runs.push(entry.path());
            }
        }
        runs.sort();
        runs.pop()
            .ok_or_else(|| Error::NoTrainingRunFound(model_root.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_lexicographically_greatest_run() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("20240101_010101")).unwrap();
        fs::create_dir(dir.path().join("20240101_020202")).unwrap();

        let latest = ExportSplat::latest_run_dir(dir.path()).unwrap();
        assert_eq!(latest, dir.path().join("20240101_020202"));
    }

    #[test]
    fn ignores_stray_files_next_to_runs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("20240101_010101")).unwrap();
        fs::write(dir.path().join("99999999_999999.log"), b"").unwrap();

        let latest = ExportSplat::latest_run_dir(dir.path()).unwrap();
        assert_eq!(latest, dir.path().join("20240101_010101"));
    }

    #[test]
    fn empty_model_root_is_no_training_run() {
        let dir = tempfile::tempdir().unwrap();
        let result = ExportSplat::latest_run_dir(dir.path());
        assert!(matches!(result, Err(Error::NoTrainingRunFound(_))));
    }

    #[test]
    fn absent_model_root_is_no_training_run() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("splatfacto");
        let result = ExportSplat::latest_run_dir(&missing);
        assert!(matches!(result, Err(Error::NoTrainingRunFound(_))));
    }
}
