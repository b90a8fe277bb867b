//! Highlight Search Matches in an HTML File
//!
//! Runs the in-page search highlighter over a saved page and writes the
//! marked-up result. Handy for checking what a query will flag on a page.
//!
//! Usage:
//!   cargo run --bin highlight_html -- page.html Numerix
//!   cargo run --bin highlight_html -- page.html Numerix --output marked.html --root article

use numerix_site::dom::Document;
use numerix_site::highlight::Highlighter;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

struct HighlightArgs {
    input: PathBuf,
    query: String,
    output: Option<PathBuf>,
    root_tag: String,
}

impl HighlightArgs {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut positional = Vec::new();
        let mut output = None;
        let mut root_tag = "main".to_string();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    output = args.get(i).map(PathBuf::from);
                },
                "--root" => {
                    i += 1;
                    if let Some(tag) = args.get(i) {
                        root_tag = tag.clone();
                    }
                },
                other => positional.push(other.to_string()),
            }
            i += 1;
        }

        let mut positional = positional.into_iter();
        Some(Self {
            input: PathBuf::from(positional.next()?),
            query: positional.next()?,
            output,
            root_tag,
        })
    }
}

fn run(args: &HighlightArgs) -> Result<usize, Box<dyn std::error::Error>> {
    let file = fs::File::open(&args.input)?;
    let mut doc = Document::parse_html_reader(io::BufReader::new(file))?;

    let root = doc.find_first_element(doc.root(), &args.root_tag);
    if root.is_none() {
        log::warn!("No <{}> element in {}", args.root_tag, args.input.display());
    }

    let count = Highlighter::new().highlight(&mut doc, root, &args.query);
    let html = doc.to_html(doc.root());

    match &args.output {
        Some(path) => fs::write(path, html)?,
        None => println!("{}", html),
    }
    Ok(count)
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(args) = HighlightArgs::from_args() else {
        eprintln!("Usage: highlight_html <input.html> <query> [--output <file>] [--root <tag>]");
        return ExitCode::FAILURE;
    };

    match run(&args) {
        Ok(count) => {
            eprintln!("{} matches for {:?}", count, args.query);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
