use crate::error::Error;

use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub struct Args {
    pub input: PathBuf,
    pub runs_dir: PathBuf,
    pub model: String,
}

impl Args {
    pub fn parse() -> Result<Self, Error> {
        let argv: Vec<String> = env::args().collect();

        if argv.len() == 1 ||
            argv.contains(&"-h".to_string()) ||
            argv.contains(&"--help".to_string())
        {
            Self::print_help();
            std::process::exit(0);
        }

        let args = Self::from_argv(&argv[1..])?;
        // Input is checked before the toolchain probes so a bad path fails
        // with zero processes spawned.
        args.validate_input()?;
        args.validate_toolchain()?;

        Ok(args)
    }

    fn print_help() {
        println!("Usage: video_splat_pipeline [OPTIONS]");
        println!("Options:");
        println!("  -i, --input FILE    Input video file");
        println!("  -r, --runs-dir DIR  Base directory for run workspaces (default: runs)");
        println!("  -m, --model NAME    nerfstudio model type (default: splatfacto)");
        println!("  -h, --help          Show this help message");
    }

    pub fn print_options(&self) {
        println!("Input:    {}", self.input.display());
        println!("Runs dir: {}", self.runs_dir.display());
        println!("Model:    {}", self.model);
    }

    fn from_argv(argv: &[String]) -> Result<Self, Error> {
        let mut input = None;
        let mut runs_dir = PathBuf::from("runs");
        let mut model = String::from("splatfacto");

        let mut i = 0;
        while i < argv.len() {
            match argv[i].as_str() {
                "-i" | "--input" => {
                    i += 1;
                    if let Some(arg) = argv.get(i) {
                        input = Some(PathBuf::from(arg));
                    } else {
                        return Err(Error::EmptyArgument("input".to_string()));
                    }
                }
                "-r" | "--runs-dir" => {
                    i += 1;
                    if let Some(arg) = argv.get(i) {
                        runs_dir = PathBuf::from(arg);
                    } else {
                        return Err(Error::EmptyArgument("runs-dir".to_string()));
                    }
                }
                "-m" | "--model" => {
                    i += 1;
                    match argv.get(i) {
                        Some(arg) if !arg.is_empty() => model = arg.to_owned(),
                        _ => return Err(Error::EmptyArgument("model".to_string())),
                    }
                }
                _ => return Err(Error::UnknownArgument(argv[i].clone())),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| Error::MissingArgument("input".to_string()))?;
        Ok(Self { input, runs_dir, model })
    }

    fn validate_input(&self) -> Result<(), Error> {
        if !self.input.is_file() {
            return Err(Error::InputNotFound(self.input.clone()));
        }
        Ok(())
    }

    // Pre-flight replacement for ambient toolchain bootstrapping: each tool
    // either answers a version probe or the run dies before the workspace is
    // allocated. Children later inherit the environment unmodified.
    fn validate_toolchain(&self) -> Result<(), Error> {
        Self::probe("ffmpeg", &["-version"])?;
        Self::probe("colmap", &["--help"])?;
        Self::probe("python", &["--version"])?;
        Ok(())
    }

    fn probe(tool: &'static str, probe_args: &[&str]) -> Result<(), Error> {
        Command::new(tool)
            .args(probe_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|_| ())
            .map_err(|_| Error::ToolNotAvailable(tool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_input_with_defaults() {
        let args = Args::from_argv(&argv(&["-i", "clip.mp4"])).unwrap();
        assert_eq!(args.input, PathBuf::from("clip.mp4"));
        assert_eq!(args.runs_dir, PathBuf::from("runs"));
        assert_eq!(args.model, "splatfacto");
    }

    #[test]
    fn parses_long_flags() {
        let args = Args::from_argv(&argv(&[
            "--input", "clip.mp4",
            "--runs-dir", "out",
            "--model", "nerfacto",
        ]))
        .unwrap();
        assert_eq!(args.runs_dir, PathBuf::from("out"));
        assert_eq!(args.model, "nerfacto");
    }

    #[test]
    fn missing_input_is_an_error() {
        let result = Args::from_argv(&argv(&["-m", "splatfacto"]));
        assert!(matches!(result, Err(Error::MissingArgument(_))));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let result = Args::from_argv(&argv(&["-i", "clip.mp4", "--resume"]));
        match result {
            Err(Error::UnknownArgument(flag)) => assert_eq!(flag, "--resume"),
            other => panic!("expected UnknownArgument, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn dangling_flag_is_an_error() {
        let result = Args::from_argv(&argv(&["-i"]));
        assert!(matches!(result, Err(Error::EmptyArgument(_))));
    }

    #[test]
    fn nonexistent_input_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mp4");
        let args = Args::from_argv(&argv(&["-i", missing.to_str().unwrap()])).unwrap();
        assert!(matches!(args.validate_input(), Err(Error::InputNotFound(_))));
    }

    #[test]
    fn existing_input_passes_validation() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"not really a video").unwrap();
        let args = Args::from_argv(&argv(&["-i", video.to_str().unwrap()])).unwrap();
        assert!(args.validate_input().is_ok());
    }
}
