use clap::Parser;
use office2text::{Document, Format};
use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Print the plain text of office documents.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Documents to extract (.docx, .pptx, .xlsx, .odt, .odp, .ods)
    #[arg(required_unless_present = "list_formats")]
    files: Vec<PathBuf>,

    /// Log extraction progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the supported file extensions and exit
    #[arg(long)]
    list_formats: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    if args.list_formats {
        for format in Format::ALL {
            println!("{}", format);
        }
        return ExitCode::SUCCESS;
    }

    let headers = args.files.len() > 1;
    let mut failed = false;
    for path in &args.files {
        match Document::open(path).and_then(|doc| doc.text()) {
            Ok(text) => {
                if headers {
                    println!("==> {} <==", path.display());
                }
                print!("{}", text);
            },
            Err(e) => {
                failed = true;
                eprintln!("{}: {}", path.display(), e);
                // The wrapper repeats its cause's message; print each distinct one once.
                let mut last = e.to_string();
                let mut source = e.source();
                while let Some(cause) = source {
                    let message = cause.to_string();
                    if message != last {
                        eprintln!("  caused by: {}", message);
                        last = message;
                    }
                    source = cause.source();
                }
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "office2text=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
