use crate::error::Error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;

pub struct RunWorkspace {
    pub run: PathBuf,
    pub frames: PathBuf,
    pub reconstruction: PathBuf,
    pub dataset: PathBuf,
    pub outputs: PathBuf,
    pub exports: PathBuf,
}

impl RunWorkspace {
    pub fn create(base: &Path) -> Result<Self, Error> {
        fs::create_dir_all(base)?;
        let base = base.canonicalize()?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let run = Self::claim_run_dir(&base, &timestamp)?;

        let workspace = Self {
            frames: run.join("frames").join("images"),
            reconstruction: run.join("reconstruction"),
            dataset: run.join("dataset"),
            outputs: run.join("outputs"),
            exports: run.join("exports"),
            run,
        };

        fs::create_dir_all(&workspace.frames)?;
        fs::create_dir_all(&workspace.reconstruction)?;
        fs::create_dir_all(&workspace.dataset)?;
        fs::create_dir_all(&workspace.outputs)?;
        fs::create_dir_all(&workspace.exports)?;

        Ok(workspace)
    }

    // Timestamps are only second-granular, so the directory itself is the
    // uniqueness claim: a same-second second call lands on AlreadyExists and
    // retries with a numeric suffix.
    fn claim_run_dir(base: &Path, timestamp: &str) -> Result<PathBuf, Error> {
        let mut candidate = base.join(format!("run_{}", timestamp));
        let mut attempt = 0usize;
        loop {
            match fs::create_dir(&candidate) {
                Ok(()) => return Ok(candidate),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    attempt += 1;
                    candidate = base.join(format!("run_{}_{}", timestamp, attempt));
                }
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }
}
