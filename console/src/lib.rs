use anyhow::{anyhow, bail, Context, Result};
use docsearch_core::{Corpus, CorpusError, SearchResult, SearchSession, StopWords};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PROMPT: &str = "Enter command > ";
pub const DELIMITER: &str = "----------------------------------------------------------------";

/// Exit statuses for errors that stop the program before the command loop.
pub mod exit_code {
    pub const USAGE: i32 = 1;
    pub const UNPARSABLE_PATH: i32 = 2;
    pub const NOT_A_DIRECTORY: i32 = 3;
    pub const STOP_WORDS: i32 = 4;
    pub const CORPUS: i32 = 5;
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("The path you provided cannot be resolved as a path. You provided: {0:?}.")]
    UnparsablePath(String),

    #[error("The path you provided isn't a directory or doesn't exist. You provided: {0}.")]
    NotADirectory(String),

    #[error(transparent)]
    StopWords(CorpusError),

    #[error(transparent)]
    Corpus(CorpusError),
}

impl StartupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::UnparsablePath(_) => exit_code::UNPARSABLE_PATH,
            StartupError::NotADirectory(_) => exit_code::NOT_A_DIRECTORY,
            StartupError::StopWords(_) => exit_code::STOP_WORDS,
            StartupError::Corpus(_) => exit_code::CORPUS,
        }
    }
}

/// Validate the corpus directory argument. An argument that is not valid
/// UTF-8, empty, or holds a NUL byte is unparsable.
pub fn resolve_corpus_dir<A: AsRef<OsStr>>(arg: A) -> Result<PathBuf, StartupError> {
    let arg = arg.as_ref();
    let Some(arg) = arg.to_str() else {
        return Err(StartupError::UnparsablePath(arg.to_string_lossy().into_owned()));
    };
    if arg.trim().is_empty() || arg.contains('\0') {
        return Err(StartupError::UnparsablePath(arg.to_string()));
    }
    let path = PathBuf::from(arg);
    if !path.is_dir() {
        return Err(StartupError::NotADirectory(arg.to_string()));
    }
    Ok(path)
}

/// Load the stop word list and index `dir`.
pub fn open_corpus(dir: &Path, stop_words: &Path) -> Result<Corpus, StartupError> {
    let stop_words = StopWords::load(stop_words).map_err(StartupError::StopWords)?;
    Corpus::build(dir, &stop_words).map_err(|e| match e {
        CorpusError::NotADirectory(p) => StartupError::NotADirectory(p.display().to_string()),
        e => StartupError::Corpus(e),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Serialize)]
struct Hit<'a> {
    rank: usize,
    #[serde(flatten)]
    result: &'a SearchResult,
}

/// Line-oriented command shell over a [`SearchSession`].
///
/// Commands: `query <term>+`, `results`, `type <index>`, `exit`. A failing
/// command prints its error and the loop goes on.
pub struct Console<'c, W: Write> {
    session: SearchSession<'c>,
    out: W,
    format: OutputFormat,
}

impl<'c, W: Write> Console<'c, W> {
    pub fn new(session: SearchSession<'c>, out: W, format: OutputFormat) -> Self {
        Self { session, out, format }
    }

    pub fn session(&self) -> &SearchSession<'c> { &self.session }

    pub fn into_output(self) -> W { self.out }

    /// Report the vocabulary size of the loaded corpus.
    pub fn print_banner(&mut self) -> Result<()> {
        let corpus = self.session.corpus();
        match self.format {
            OutputFormat::Text => writeln!(self.out, "\nDictionary size is {} words.\n", corpus.vocabulary_size())?,
            OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string(&corpus.stats())?)?,
        }
        Ok(())
    }

    /// Read commands until `exit` or end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line is just
    /// an unknown command.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            match self.execute(&line) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    tracing::debug!(command = %line.trim(), error = %e, "command failed");
                    writeln!(self.out, "{e}\n")?;
                }
            }
        }
        Ok(())
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = parts.collect();
        match cmd.as_str() {
            "query" => self.query(&args)?,
            "results" => self.results(&args)?,
            "type" => self.type_document(&args)?,
            "exit" => return Ok(Flow::Exit),
            _ => bail!("Unknown command."),
        }
        Ok(Flow::Continue)
    }

    fn query(&mut self, args: &[&str]) -> Result<()> {
        if args.is_empty() {
            bail!("You need to provide at least one argument for command 'query'.");
        }
        let hits = self.session.query(args)?;
        write_hits(&mut self.out, self.format, hits)
    }

    fn results(&mut self, args: &[&str]) -> Result<()> {
        let hits = self.session.list_results()?;
        if !args.is_empty() {
            bail!("You need to provide zero arguments for command 'results'.");
        }
        write_hits(&mut self.out, self.format, hits)
    }

    fn type_document(&mut self, args: &[&str]) -> Result<()> {
        self.session.list_results()?;
        let [arg] = args else {
            bail!("You need to provide one argument for command 'type'.");
        };
        let index: i64 = arg
            .parse()
            .map_err(|_| anyhow!("You need to provide one integer number as an argument."))?;
        let Ok(index) = usize::try_from(index) else {
            bail!("There is no search result with index {index}.");
        };
        let path = self.session.result_at(index)?.path();
        let text = fs::read_to_string(path).with_context(|| format!("Cannot read {}.", path.display()))?;

        writeln!(self.out, "{DELIMITER}")?;
        writeln!(self.out, "Document: {}", path.display())?;
        writeln!(self.out, "{DELIMITER}")?;
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{DELIMITER}")?;
        Ok(())
    }
}

fn write_hits<W: Write>(out: &mut W, format: OutputFormat, hits: &[SearchResult]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (rank, hit) in hits.iter().enumerate() {
                writeln!(out, "[{:2}] ({:.4}) {}", rank, hit.similarity(), hit.path().display())?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let hits: Vec<Hit> = hits.iter().enumerate().map(|(rank, result)| Hit { rank, result }).collect();
            writeln!(out, "{}", serde_json::to_string(&hits)?)?;
        }
    }
    Ok(())
}
