use anyhow::Result;
use clap::Parser;
use docsearch_console::{exit_code, open_corpus, resolve_corpus_dir, Console, OutputFormat};
use docsearch_core::{SearchSession, DEFAULT_LIMIT};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

const STOP_WORDS_ENV: &str = "DOCSEARCH_STOP_WORDS";
const DEFAULT_STOP_WORDS: &str = "hrvatski_stoprijeci.txt";

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Interactive TF-IDF search over a directory of text files", long_about = None)]
struct Args {
    /// Directory with the documents to index
    dir: OsString,
    /// Stop word list, one word per line (falls back to $DOCSEARCH_STOP_WORDS)
    #[arg(long)]
    stop_words: Option<PathBuf>,
    /// Maximum number of results kept per query (1-100)
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,
    /// Print results as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(exit_code::USAGE);
        }
    };

    let stop_words = args
        .stop_words
        .or_else(|| std::env::var_os(STOP_WORDS_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STOP_WORDS));
    let corpus = match resolve_corpus_dir(&args.dir).and_then(|dir| open_corpus(&dir, &stop_words)) {
        Ok(corpus) => corpus,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    };

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let session = SearchSession::with_limit(&corpus, args.limit);
    let mut console = Console::new(session, io::stdout().lock(), format);
    console.print_banner()?;
    console.run(io::stdin().lock())?;
    Ok(())
}
