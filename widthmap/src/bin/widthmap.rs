use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use widthmap::{
    generate_to, parse_code_point, CompilerConfig, OutputFormat, OverlapPolicy, RenderConfig,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "widthmap - Compile EastAsianWidth.txt into a verified wide-character bitmap table"
)]
struct Cli {
    /// Path to EastAsianWidth.txt
    path: PathBuf,

    /// Output artifact format
    #[arg(long, value_enum, default_value_t = OutputFormat::CppHeader)]
    format: OutputFormat,

    /// Characters per string segment in C++ bitset literals
    #[arg(long, default_value_t = RenderConfig::DEFAULT_CHUNK_WIDTH)]
    chunk_width: usize,

    /// C++ namespace wrapping the table
    #[arg(long, default_value = "east_asian_width")]
    namespace: String,

    /// Name of the table symbol
    #[arg(long, default_value = "TABLE")]
    symbol: String,

    /// Header included by --format cpp-source
    #[arg(long, default_value = "east_asian_width.hpp")]
    header_name: String,

    /// Treat Ambiguous (A) characters as wide, as in CJK contexts
    #[arg(long)]
    ambiguous_wide: bool,

    /// Fail if any two wide ranges share a code point
    #[arg(long)]
    reject_overlap: bool,

    /// Write the artifact to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Report whether a code point (hex, optionally U+ or 0x prefixed) is wide
    #[arg(long, value_parser = parse_code_point)]
    query: Vec<u32>,

    /// Print a summary of the compiled table to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> widthmap::Result<()> {
    let start_time = Instant::now();

    let overlap_policy = if cli.reject_overlap {
        OverlapPolicy::Reject
    } else {
        OverlapPolicy::Tolerate
    };
    let compiler = CompilerConfig::default()
        .with_ambiguous_wide(cli.ambiguous_wide)
        .with_overlap_policy(overlap_policy);
    let render = RenderConfig::with_format(cli.format)
        .with_chunk_width(cli.chunk_width)
        .with_namespace(cli.namespace.as_str())
        .with_symbol(cli.symbol.as_str())
        .with_header_name(cli.header_name.as_str());

    let table = generate_to(&cli.path, &compiler, &render, cli.output.as_deref())?;

    if cli.verbose {
        let categories: Vec<String> = compiler
            .wide_categories
            .iter()
            .map(|category| category.to_string())
            .collect();
        eprintln!("Source: {}", cli.path.display());
        eprintln!("  Wide categories: {}", categories.join(", "));
        eprintln!("  Wide ranges: {}", table.ranges().len());
        eprintln!("  Table length: {} bits", table.len());
        eprintln!("  Wide code points: {}", table.bitmap().count_wide());
        eprintln!("  Format: {:?}", cli.format);
    }

    for &code_point in &cli.query {
        let width = if table.is_wide(code_point) {
            "wide"
        } else {
            "narrow"
        };
        eprintln!("U+{code_point:04X} {width}");
    }

    if cli.verbose {
        let elapsed = start_time.elapsed();
        eprintln!("Generated in {elapsed:.2?}");
    }

    Ok(())
}
