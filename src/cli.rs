//! CLI argument parsing with clap.

use clap::Parser;

use crate::output::Destination;

/// Exit code for informational displays (help, version, usage, license,
/// examples), distinct from success (0) and failure (1).
pub const INFO_EXIT_CODE: i32 = 2;

/// Fetch a gravatar-compatible avatar for an email address or random token.
#[derive(Parser, Debug)]
#[command(name = "avaget", version, about)]
pub struct Cli {
    /// Output file path; `-` writes raw image bytes to stdout.
    pub output_file: Option<String>,

    /// Email address (or any identity string) to fetch the avatar for.
    /// Auto-generated with `uuidgen` when omitted.
    #[arg(short, long)]
    pub email: Option<String>,

    /// Output file path (takes precedence over the positional argument).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generated-image style: identicon, monsterid, wavatar, retro.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Square image size in pixels (1-512).
    #[arg(short, long)]
    pub size: Option<String>,

    /// Print a short usage summary and exit.
    #[arg(long)]
    pub usage: bool,

    /// Print license information and exit.
    #[arg(long)]
    pub license: bool,

    /// Print example invocations and exit.
    #[arg(long)]
    pub examples: bool,
}

const USAGE_TEXT: &str = "\
Usage: avaget [OPTIONS] [OUTPUT]

Fetches an avatar image for an identity from gravatar. With no identity,
a random one is generated with uuidgen. With no OUTPUT, the resolved
request is printed and the image is saved to avatar-<pid>-<identity>.png.
Use `-` as OUTPUT to stream raw image bytes to stdout.";

const LICENSE_TEXT: &str = "\
avaget is distributed under the MIT License.
See https://opensource.org/licenses/MIT for the full text.";

const EXAMPLES_TEXT: &str = "\
Examples:
  avaget -e foo@example.com              # describe, fetch, save to auto name
  avaget -e foo@example.com out.png      # save to out.png
  avaget -e foo@example.com -o out.png   # same, flag form
  avaget -e foo@example.com -f retro -s 256 -
                                         # 256px retro avatar to stdout
  avaget                                 # random identity via uuidgen";

impl Cli {
    /// Resolve the destination: the `--output` flag wins over the
    /// positional argument; `None` means no destination was given.
    #[must_use]
    pub fn destination(&self) -> Option<Destination> {
        self.output
            .as_deref()
            .or(self.output_file.as_deref())
            .map(Destination::from_arg)
    }

    /// Text to print for an informational flag, if one was given.
    #[must_use]
    pub fn informational(&self) -> Option<&'static str> {
        if self.usage {
            Some(USAGE_TEXT)
        } else if self.license {
            Some(LICENSE_TEXT)
        } else if self.examples {
            Some(EXAMPLES_TEXT)
        } else {
            None
        }
    }
}
