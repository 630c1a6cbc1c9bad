//! avaget - gravatar-compatible avatar fetch CLI.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use avaget::cli::{Cli, INFO_EXIT_CODE};
use avaget::request::{DEFAULT_SIZE, GRAVATAR_URL};
use avaget::{
    auto_filename, parse_size, save, AvatarError, AvatarRequest, Destination, ExternalGenerator,
    Style,
};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help, version, and argument errors all exit with the
            // informational code, keeping 1 reserved for fetch/validation
            // failures. `print` routes help to stdout, errors to stderr.
            let _ = e.print();
            process::exit(INFO_EXIT_CODE);
        }
    };

    if let Some(text) = cli.informational() {
        println!("{text}");
        process::exit(INFO_EXIT_CODE);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AvatarError> {
    let style = match cli.format.as_deref() {
        Some(s) => s.parse()?,
        None => Style::default(),
    };
    let size = match cli.size.as_deref() {
        Some(s) => parse_size(s)?,
        None => DEFAULT_SIZE,
    };

    let mut request =
        AvatarRequest::new(cli.email.as_deref(), style, size, &ExternalGenerator::default())?;

    // Alternate gravatar-compatible endpoint, mainly for tests and mirrors.
    let base = std::env::var("AVAGET_BASE_URL").unwrap_or_else(|_| GRAVATAR_URL.to_string());

    match cli.destination() {
        Some(destination) => {
            // Explicitly named destinations are deliberate; write without an
            // existence check.
            save(request.fetch_from(&base)?, &destination, true)?;
            if let Destination::Path(path) = &destination {
                eprintln!("Saved: {}", path.display());
            }
        }
        None => {
            // Describe the resolved request before any binary data exists,
            // then fall back to an auto-generated filename. The uniqueness
            // token defaults to the process id; AVAGET_TOKEN overrides it so
            // the filename stays predictable in tests.
            println!("{request}");
            let token = std::env::var("AVAGET_TOKEN")
                .unwrap_or_else(|_| process::id().to_string());
            let filename = auto_filename(&token, request.identity());
            let bytes = request.fetch_from(&base)?;
            match save(bytes, &Destination::Path(PathBuf::from(&filename)), false) {
                Ok(()) => eprintln!("Saved: {filename}"),
                Err(AvatarError::DestinationExists(path)) => {
                    eprintln!("Skipping write: {} already exists", path.display());
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
