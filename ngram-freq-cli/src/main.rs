use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use ngram_freq_core::io::{open_input, read_lines};
use ngram_freq_core::{
	CountOptions, LengthRange, RangeRanking, count_ngram_range, parse_top_n, top_ngrams_range,
};

mod output;

use output::{Format, rank_all, write_report};

/// Number of entries per length when no subcommand is given.
const DEFAULT_TOP: usize = 10;

/// Count the frequency of word tuples.
///
/// Output is one row per tuple: `length<TAB>freq<TAB>ngram`.
/// Without a subcommand, prints the top 10 tuples of lengths 2 to 4.
#[derive(Parser, Debug)]
#[command(name = "ngram-freq", version, about, subcommand_precedence_over_arg = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[command(flatten)]
	global: GlobalArgs,

	/// File to read; standard input when omitted
	#[arg(value_name = "INFILE")]
	infile: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Print the frequency of every tuple
	Freq {
		/// Tuple length: a single number, or an inclusive range such as 2:5
		#[arg(short, long, value_name = "L")]
		length: Option<LengthRange>,

		/// File to read; standard input when omitted
		#[arg(value_name = "INFILE")]
		infile: Option<PathBuf>,
	},

	/// Print the N most frequent tuples of each length
	Top {
		/// Number of tuples to keep per length
		#[arg(value_name = "N", value_parser = parse_top_n)]
		n: usize,

		/// Tuple length: a single number, or an inclusive range such as 2:5
		#[arg(short, long, value_name = "L")]
		length: Option<LengthRange>,

		/// File to read; standard input when omitted
		#[arg(value_name = "INFILE")]
		infile: Option<PathBuf>,
	},
}

/// Options accepted before or after the subcommand.
#[derive(Args, Debug)]
struct GlobalArgs {
	/// Put words into canonical form by lowercasing
	#[arg(long, global = true)]
	clean: bool,

	/// Replace each word by the most similar word already seen, if similar enough
	#[arg(long, global = true)]
	merge: bool,

	/// Similarity a word must exceed to be merged, between 0.0 and 1.0 [default: 0.5]
	#[arg(long, value_name = "T", global = true)]
	threshold: Option<f64>,

	/// Output format
	#[arg(long, value_enum, default_value_t = Format::Tsv, global = true)]
	format: Format,

	/// Log debug output to stderr
	#[arg(short, long, global = true)]
	verbose: bool,
}

impl GlobalArgs {
	/// Word-stream options for this run.
	///
	/// # Errors
	/// Returns an error if `--threshold` is outside `[0.0, 1.0]`.
	fn count_options(&self) -> ngram_freq_core::Result<CountOptions> {
		let options = CountOptions::default().with_clean(self.clean).with_merge(self.merge);
		match self.threshold {
			Some(threshold) => options.with_merge_threshold(threshold),
			None => Ok(options),
		}
	}
}

/// What to compute, resolved from the command line.
#[derive(Debug, PartialEq)]
enum Action {
	Freq(LengthRange),
	Top(usize, LengthRange),
}

/// A fully resolved invocation.
#[derive(Debug)]
struct Run {
	action: Action,
	global: GlobalArgs,
	infile: Option<PathBuf>,
}

impl Cli {
	fn resolve(self) -> Run {
		let (action, infile) = match self.command {
			None => (Action::Top(DEFAULT_TOP, LengthRange::DEFAULT), self.infile),
			Some(Commands::Freq { length, infile }) => {
				(Action::Freq(length.unwrap_or_default()), infile)
			}
			Some(Commands::Top { n, length, infile }) => {
				(Action::Top(n, length.unwrap_or_default()), infile)
			}
		};
		Run { action, global: self.global, infile }
	}
}

fn init_tracing(verbose: bool) {
	let default_filter = if verbose {
		"ngram_freq=debug,ngram_freq_core=debug"
	} else {
		"ngram_freq=warn,ngram_freq_core=warn"
	};
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
		)
		.init();
}

fn main() -> Result<()> {
	let Run { action, global, infile } = Cli::parse().resolve();
	init_tracing(global.verbose);

	let options = global.count_options()?;
	debug!(?action, ?options, infile = ?infile, "Resolved arguments");
	if options.merge {
		debug!(threshold = options.merge_threshold(), "Merging similar words");
	}

	let reader = open_input(infile.as_ref()).with_context(|| match &infile {
		Some(path) => format!("I/O error: cannot open {}", path.display()),
		None => "I/O error: cannot read standard input".to_owned(),
	})?;
	let (lines, status) = read_lines(reader);
	let words = options.words(lines);

	let ranking: RangeRanking = match action {
		Action::Freq(range) => rank_all(count_ngram_range(words, range.min(), range.max())),
		Action::Top(n, range) => top_ngrams_range(words, range.min(), range.max(), n),
	};
	status.finish().context("Failed while reading input")?;
	info!(lengths = ranking.len(), "Counting complete");

	let mut stdout = std::io::stdout().lock();
	write_report(&mut stdout, &ranking, global.format)
}
