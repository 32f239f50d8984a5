use std::fmt::Display;
use std::io::{self, Write};

use clap::ValueEnum;
use ngram_freq_core::{RangeRanking, RangeResult, RankedEntry, top_n};

/// How results are written to standard output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
	/// `length<TAB>freq<TAB>ngram` rows under a header
	Tsv,
	/// One JSON object keyed by length
	Json,
}

/// Ranks every entry of every length, most frequent first.
pub fn rank_all(result: RangeResult) -> RangeRanking {
	result
		.into_iter()
		.map(|(length, freq)| {
			let ranked = top_n(&freq, freq.len()).into_iter().map(RankedEntry::from).collect();
			(length, ranked)
		})
		.collect()
}

fn write_row<W, L, F, N>(out: &mut W, length: L, freq: F, ngram: N) -> io::Result<()>
where
	W: Write,
	L: Display,
	F: Display,
	N: Display,
{
	writeln!(out, "{length}\t{freq}\t{ngram}")
}

/// Writes the header row and one row per entry, lengths ascending.
pub fn write_tsv<W: Write>(out: &mut W, ranking: &RangeRanking) -> io::Result<()> {
	write_row(out, "length", "freq", "ngram")?;
	for (length, entries) in ranking {
		for entry in entries {
			write_row(out, length, entry.count, &entry.ngram)?;
		}
	}
	Ok(())
}

pub fn write_json<W: Write>(out: &mut W, ranking: &RangeRanking) -> anyhow::Result<()> {
	serde_json::to_writer_pretty(&mut *out, ranking)?;
	writeln!(out)?;
	Ok(())
}

/// Writes `ranking` in the requested format.
pub fn write_report<W: Write>(
	out: &mut W,
	ranking: &RangeRanking,
	format: Format,
) -> anyhow::Result<()> {
	match format {
		Format::Tsv => write_tsv(out, ranking)?,
		Format::Json => write_json(out, ranking)?,
	}
	out.flush()?;
	Ok(())
}
