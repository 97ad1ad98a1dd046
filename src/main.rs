mod cli;

use anyhow::Context;
use backup_manager_fs::adapters::outbound::console::StderrProgressReporter;
use backup_manager_fs::adapters::outbound::filesystem::{
    FilesystemAdapter, LocalFilesystemProvider,
};
use backup_manager_fs::config::{self, StorageSettings};
use backup_manager_fs::ports::outbound::{BackupFilesystem, ProgressReporter, StreamResource};
use backup_manager_fs::shared::{ExitCode, FilesystemError, Result};
use cli::{Args, Command};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();
    let reporter = StderrProgressReporter::new();

    if let Err(e) = run(args, &reporter) {
        eprintln!("\n❌ An error occurred:\n");
        reporter.report_error(&e.to_string());

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        let exit_code = if e.downcast_ref::<FilesystemError>().is_some() {
            ExitCode::OperationFailed
        } else {
            ExitCode::ApplicationError
        };
        process::exit(exit_code.as_i32());
    }
}

fn run(args: Args, reporter: &impl ProgressReporter) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = StorageSettings::resolve(args.root, args.follow_symlinks, config.as_ref());

    // Create adapter (Dependency Injection)
    let provider = LocalFilesystemProvider::new(settings.root)
        .with_follow_symlinks(settings.follow_symlinks);
    let filesystem = FilesystemAdapter::new(provider);

    match args.command {
        Command::Read { path, output } => {
            read_file(&filesystem, &path, output.as_deref(), reporter)
        }
        Command::Write { path, input } => {
            write_file(&filesystem, &path, input.as_deref(), reporter)
        }
        Command::Delete { path } => {
            filesystem.delete(&path)?;
            reporter.report_completion(&format!("Deleted {}", path));
            Ok(())
        }
    }
}

fn read_file(
    filesystem: &impl BackupFilesystem,
    path: &str,
    output: Option<&Path>,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let mut resource = filesystem.read_stream(path)?;

    match output {
        Some(output_path) => {
            reporter.report(&format!("Reading {} into {}", path, output_path.display()));
            let mut file = File::create(output_path).with_context(|| {
                format!("Failed to create output file: {}", output_path.display())
            })?;
            let bytes = io::copy(&mut resource, &mut file)
                .with_context(|| format!("Failed to copy {} into {}", path, output_path.display()))?;
            reporter.report_completion(&format!(
                "Read {} ({} bytes) into {}",
                path,
                bytes,
                output_path.display()
            ));
        }
        None => {
            let mut stdout = io::stdout().lock();
            io::copy(&mut resource, &mut stdout)
                .with_context(|| format!("Failed to copy {} to stdout", path))?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn write_file(
    filesystem: &impl BackupFilesystem,
    path: &str,
    input: Option<&Path>,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let mut resource = match input {
        Some(input_path) => {
            let file = File::open(input_path).with_context(|| {
                format!(
                    "Failed to open input file: {}\n\n💡 Hint: Check that the file exists and is readable.",
                    input_path.display()
                )
            })?;
            reporter.report(&format!("Storing {} as {}", input_path.display(), path));
            StreamResource::from_reader(file)
        }
        None => StreamResource::from_reader(io::stdin()),
    };

    filesystem.write_stream(path, &mut resource)?;
    reporter.report_completion(&format!("Stored {}", path));
    Ok(())
}
