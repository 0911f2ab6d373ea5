use anyhow::Result;
use bm25_cli::{collect_corpus, EngineArgs, Hit};
use bm25_core::corpus::{random_corpus, RandomCorpus, TokenizeMode};
use bm25_core::{Bm25, DEFAULT_TOP_N};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "bm25")]
#[command(about = "Rank documents against keyword queries with BM25 Okapi, BM25L and BM25+", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one query and print the best documents as JSON lines
    Search {
        /// Corpus file or directory (.json, .jsonl, .txt)
        #[arg(long)]
        corpus: PathBuf,
        /// Query text
        #[arg(long)]
        query: String,
        /// Number of hits to print
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
        /// Lowercase word tokens instead of splitting on spaces
        #[arg(long, default_value_t = false)]
        words: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Read queries from stdin until `exit`
    Repl {
        /// Corpus file or directory; a random corpus is used when omitted
        #[arg(long)]
        corpus: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
        #[arg(long, default_value_t = false)]
        words: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Time index build and scoring over a random corpus
    Bench {
        #[arg(long, default_value_t = 10_000)]
        docs: usize,
        #[arg(long, default_value_t = 1000)]
        vocabulary: usize,
        #[arg(long, default_value_t = 100)]
        queries: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, query, top, words, engine } => {
            let mode = tokenize_mode(words);
            let docs = collect_corpus(&corpus, mode)?;
            let bm25 = Bm25::build(&docs, engine.params()?);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for (doc_id, score) in bm25.top_n_scored(&mode.apply(&query), top) {
                writeln!(out, "{}", serde_json::to_string(&Hit { doc_id, score })?)?;
            }
            Ok(())
        }
        Commands::Repl { corpus, top, words, engine } => {
            let mode = tokenize_mode(words);
            let docs = match corpus {
                Some(path) => collect_corpus(&path, mode)?,
                None => random_corpus(RandomCorpus::default()),
            };
            repl(&docs, mode, top, &engine)
        }
        Commands::Bench { docs, vocabulary, queries, seed, engine } => {
            bench(RandomCorpus { docs, vocabulary, seed, ..RandomCorpus::default() }, queries, &engine)
        }
    }
}

fn tokenize_mode(words: bool) -> TokenizeMode {
    if words { TokenizeMode::Words } else { TokenizeMode::Whitespace }
}

fn repl(docs: &[Vec<String>], mode: TokenizeMode, top: usize, engine: &EngineArgs) -> Result<()> {
    let start = Instant::now();
    let bm25 = Bm25::build(docs, engine.params()?);
    tracing::info!(corpus_size = bm25.corpus_size(), avgdl = bm25.avgdl(), took_s = start.elapsed().as_secs_f64(), "index built");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("query> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim() == "exit" { break; }

        let start = Instant::now();
        let hits = bm25.top_n_scored(&mode.apply(&line), top);
        let elapsed = start.elapsed();
        for (doc_id, score) in hits {
            println!("{doc_id}\t{score:.6}\t{}", docs[doc_id].join(" "));
        }
        println!("took {:.6} s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn bench(cfg: RandomCorpus, queries: usize, engine: &EngineArgs) -> Result<()> {
    let docs = random_corpus(cfg);
    let total: usize = docs.iter().map(Vec::len).sum();
    println!("corpus size: {}", docs.len());
    println!("document avg len: {:.3}", total as f64 / docs.len().max(1) as f64);

    let start = Instant::now();
    let bm25 = Bm25::build(&docs, engine.params()?);
    println!("build ({}): {:.6} s", bm25.params().variant.name(), start.elapsed().as_secs_f64());

    let queries: Vec<&[String]> = docs.iter().take(queries).map(|d| &d[..d.len().min(3)]).collect();
    if queries.is_empty() {
        return Ok(());
    }
    let start = Instant::now();
    for q in queries.iter().copied() {
        std::hint::black_box(bm25.scores(q));
    }
    let per_query = start.elapsed().as_secs_f64() / queries.len() as f64;
    println!("scores: {} queries, {:.6} s/query", queries.len(), per_query);
    Ok(())
}
