use crate::error::Error;
use crate::executor;
use crate::workspace::RunWorkspace;

use std::fs;
use std::process::Command;

pub struct ReconstructPoses;

impl ReconstructPoses {
    pub fn execute(workspace: &RunWorkspace) -> Result<(), Error> {
        let database = workspace.reconstruction.join("database.db");
        let sparse = workspace.reconstruction.join("sparse");
        fs::create_dir_all(&sparse)?;

        let mut feature_extractor = Command::new("colmap");
        feature_extractor
            .arg("feature_extractor")
            .arg("--database_path")
            .arg(&database)
            .arg("--image_path")
            .arg(&workspace.frames)
            .arg("--ImageReader.single_camera")
            .arg("1");
        executor::run("colmap feature extraction", feature_extractor)?;

        let mut matcher = Command::new("colmap");
        matcher
            .arg("exhaustive_matcher")
            .arg("--database_path")
            .arg(&database);
        executor::run("colmap matching", matcher)?;

        let mut mapper = Command::new("colmap");
        mapper
            .arg("mapper")
            .arg("--database_path")
            .arg(&database)
            .arg("--image_path")
            .arg(&workspace.frames)
            .arg("--output_path")
            .arg(&sparse);
        executor::run("colmap mapping", mapper)
    }
}
