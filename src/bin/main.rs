use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use nomchar::config::{PipelineConfig, DEFAULT_PAIRS_FILE, DEFAULT_SNAPSHOT_PATH, DEFAULT_TEXT_COLUMN, DEFAULT_TRIPLES_FILE};
use nomchar::persistence::{load_from_disk, save_to_disk, CorpusSnapshot};
use nomchar::report::Summary;
use nomchar::{analyze, LexiconTagger, NomcharEngine, SlashTagger, Tagger};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nomchar", version, about = "Nominal Character scores for stacked adjectives")]
struct Cli {
    #[arg(long, global = true, help = "Print the summary as JSON")]
    json: bool,
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "More log output (-v, -vv)")]
    verbose: u8,
    #[arg(long, global = true, env = "NOMCHAR_LOG", help = "Log filter directive, e.g. nomchar=debug")]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tag a corpus and save counts and phrases to a snapshot.
    Extract {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[arg(long, env = "NOMCHAR_CACHE", default_value = DEFAULT_SNAPSHOT_PATH)]
        cache: PathBuf,
    },
    /// Rank the phrases of a saved snapshot and write the reports.
    Score {
        #[arg(long, env = "NOMCHAR_CACHE", default_value = DEFAULT_SNAPSHOT_PATH)]
        cache: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Tag, extract and score in one pass.
    Run {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[command(flatten)]
        output: OutputArgs,
        #[arg(long, help = "Also save the snapshot here")]
        cache: Option<PathBuf>,
    },
    /// Show counts and scores for individual words.
    Lookup {
        #[arg(long, env = "NOMCHAR_CACHE", default_value = DEFAULT_SNAPSHOT_PATH)]
        cache: PathBuf,
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct CorpusArgs {
    /// CSV file with one document per row.
    corpus: PathBuf,
    #[arg(long, default_value = DEFAULT_TEXT_COLUMN)]
    column: String,
    #[arg(long, value_enum, default_value_t = TaggerKind::Slash)]
    tagger: TaggerKind,
    #[arg(long, required_if_eq("tagger", "lexicon"), help = "JSON word -> tag map for the lexicon tagger")]
    lexicon: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct OutputArgs {
    #[arg(long, default_value = ".")]
    out: PathBuf,
    #[arg(long, default_value = DEFAULT_PAIRS_FILE)]
    pairs_file: String,
    #[arg(long, default_value = DEFAULT_TRIPLES_FILE)]
    triples_file: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TaggerKind {
    /// Pre-tagged `word/TAG` text.
    Slash,
    /// Dictionary lookup.
    Lexicon,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log.as_deref())?;

    match cli.command {
        Commands::Extract { corpus, cache } => {
            let snapshot = ingest(&corpus)?;
            save_to_disk(&snapshot, &cache)
                .with_context(|| format!("saving snapshot to {}", cache.display()))?;
            println!(
                "Saved {} pairs and {} triples to {}",
                snapshot.pairs.len(),
                snapshot.triples.len(),
                cache.display()
            );
        }
        Commands::Score { cache, output } => {
            let snapshot = load_from_disk(&cache)
                .with_context(|| format!("loading snapshot from {}", cache.display()))?;
            let summary = score(&snapshot, &output)?;
            print_summary(&summary, cli.json)?;
        }
        Commands::Run { corpus, output, cache } => {
            let snapshot = ingest(&corpus)?;
            if let Some(cache) = cache {
                save_to_disk(&snapshot, &cache)
                    .with_context(|| format!("saving snapshot to {}", cache.display()))?;
            }
            let summary = score(&snapshot, &output)?;
            print_summary(&summary, cli.json)?;
        }
        Commands::Lookup { cache, words } => {
            let snapshot = load_from_disk(&cache)
                .with_context(|| format!("loading snapshot from {}", cache.display()))?;
            lookup(&snapshot, &words, cli.json)?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8, directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d).with_context(|| format!("invalid log filter '{d}'"))?,
        None => EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_tagger(args: &CorpusArgs) -> Result<Box<dyn Tagger>> {
    Ok(match args.tagger {
        TaggerKind::Slash => Box::new(SlashTagger),
        TaggerKind::Lexicon => {
            let path = args.lexicon.as_deref().context("--lexicon is required with --tagger lexicon")?;
            let tagger = LexiconTagger::from_json_file(path)
                .with_context(|| format!("loading lexicon {}", path.display()))?;
            Box::new(tagger)
        }
    })
}

fn ingest(args: &CorpusArgs) -> Result<CorpusSnapshot> {
    let config = PipelineConfig::default().with_text_column(&args.column);
    let file = File::open(&args.corpus)
        .with_context(|| format!("opening corpus {}", args.corpus.display()))?;

    let mut engine = NomcharEngine::new(build_tagger(args)?);
    engine
        .ingest_csv(file, &config.text_column)
        .with_context(|| format!("reading corpus {}", args.corpus.display()))?;

    let stats = engine.stats();
    info!(documents = stats.documents, skipped = stats.skipped_rows, tokens = stats.tokens, "corpus tagged");
    Ok(engine.finish())
}

fn score(snapshot: &CorpusSnapshot, output: &OutputArgs) -> Result<Summary> {
    let config = PipelineConfig::default().with_report_files(&output.pairs_file, &output.triples_file);
    fs::create_dir_all(&output.out)
        .with_context(|| format!("creating output directory {}", output.out.display()))?;

    let pairs_path = config.pairs_path(&output.out);
    let triples_path = config.triples_path(&output.out);
    let summary = analyze(snapshot, create(&pairs_path)?, create(&triples_path)?)
        .context("ranking phrases")?;
    info!(pairs = %pairs_path.display(), triples = %triples_path.display(), "reports written");
    Ok(summary)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn print_summary(summary: &Summary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}

fn lookup(snapshot: &CorpusSnapshot, words: &[String], json: bool) -> Result<()> {
    let counts = &snapshot.counts;
    let mut rows = Vec::with_capacity(words.len());
    for word in words {
        let (adjective, noun) = counts.counts(word);
        let score = counts.score(word);
        if !json {
            match &score {
                Ok(score) => println!("{word}\tadj={adjective}\tnoun={noun}\tnomchar={score:?}"),
                Err(e) => println!("{word}\t{e}"),
            }
        }
        rows.push(serde_json::json!({
            "word": word,
            "adjective": adjective,
            "noun": noun,
            "nomchar": score.ok(),
        }));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }
    Ok(())
}
