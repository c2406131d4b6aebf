mod args;
mod build;
mod debug;
mod error;

use clap::Parser;
use proc_exit::WithCodeResultExt;

use crate::error::Result;

/// Site configuration and JSON Feed variants
#[derive(Clone, Debug, Parser)]
#[command(name = "lx", version, propagate_version = true)]
struct Cli {
    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Build(build::BuildArgs),
    Check(build::CheckArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Build(cmd) => cmd.run(),
            Self::Check(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    args::init_logging(&cli.verbose, colored_stderr);

    cli.command.run().with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
