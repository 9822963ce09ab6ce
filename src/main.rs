use clap::Parser;
use rpmdag::commands::audit;
use rpmdag::query::RpmCli;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// rpmdag - dependency tree auditor for a directory of RPM archives
///
/// Builds a dependency graph from the requirements each archive declares,
/// prints it as a line-numbered tree, and warns about requirements whose
/// desired version is not satisfied by the copy present in the directory.
///
/// Needs the rpm command on PATH.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory containing the .rpm archives to audit
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Archive to root the tree at; omit to walk every package
    #[arg(value_name = "ROOT_RPM")]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::from(1),
            };
        }
    };

    let mut stdout = std::io::stdout().lock();
    match audit(&RpmCli, &cli.directory, cli.root.as_deref(), &mut stdout) {
        Ok(()) => {
            let _ = stdout.flush();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}
