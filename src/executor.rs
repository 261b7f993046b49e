use crate::error::Error;

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Sender};
use indicatif::{ProgressBar, ProgressStyle};

pub fn run(step: &str, command: Command) -> Result<(), Error> {
    println!();
    println!("[{}]", step);
    println!("{}", render(&command));

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg} [{elapsed_precise}]")
        .unwrap();
    spinner.set_style(style);
    spinner.set_message(step.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = run_with(step, command, |line| spinner.println(line));
    spinner.finish_and_clear();
    result
}

// Blocks until the child exits. No retries, no timeout: a tool that hangs
// hangs the whole pipeline, and killing the process tree is the caller's
// problem.
pub fn run_with(
    step: &str,
    mut command: Command,
    mut on_line: impl FnMut(&str),
) -> Result<(), Error> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let (sender, receiver) = unbounded();
    let stdout_pump = spawn_pump(child.stdout.take().unwrap(), sender.clone());
    let stderr_pump = spawn_pump(child.stderr.take().unwrap(), sender);

    // Ends when both pumps hang up, which happens at stream EOF.
    for line in receiver {
        on_line(&line);
    }

    let _ = stdout_pump.join();
    let _ = stderr_pump.join();
    let status = child.wait()?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::StepFailed {
            step: step.to_string(),
            code: status.code(),
        })
    }
}

fn spawn_pump<R: Read + Send + 'static>(stream: R, sender: Sender<String>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    while matches!(buffer.last(), Some(b'\n' | b'\r')) {
                        buffer.pop();
                    }
                    let line = String::from_utf8_lossy(&buffer).into_owned();
                    if sender.send(line).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

fn render(command: &Command) -> String {
    let mut rendered = command.get_program().to_string_lossy().into_owned();
    for arg in command.get_args() {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}
