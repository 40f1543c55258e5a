//! reportgen CLI - LinguaFlash documentation report generator

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use reportgen::render::{emit, RecordingSink};
use reportgen::render::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use reportgen::{
    generate_report_with_options, linguaflash_report, OutputFormat, RenderOptions,
    DEFAULT_OUTPUT_FILE,
};

#[derive(Parser)]
#[command(name = "reportgen")]
#[command(version)]
#[command(about = "Generate the LinguaFlash documentation report", long_about = None)]
struct Cli {
    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Output format (guessed from the file extension if omitted)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Include YAML frontmatter (Markdown only)
    #[arg(long)]
    frontmatter: bool,

    /// Default font family (DOCX only)
    #[arg(long, value_name = "NAME", env = "REPORTGEN_FONT")]
    font: Option<String>,

    /// Default body font size in points, 4 to 96 (DOCX only)
    #[arg(long, value_name = "PT", default_value = "11", value_parser = parse_font_size)]
    font_size: f32,

    /// Bullet marker character (Markdown only)
    #[arg(long, default_value = "-")]
    list_marker: char,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the report's section outline
    Outline,

    /// Print block counts for the report
    Stats,

    /// Print the sink call trace without writing a file
    Trace,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Word document
    Docx,
    /// Markdown text
    Markdown,
    /// JSON document model
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Docx => OutputFormat::Docx,
            Format::Markdown => OutputFormat::Markdown,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Outline) => cmd_outline(),
        Some(Commands::Stats) => cmd_stats(),
        Some(Commands::Trace) => cmd_trace(cli.output.as_deref()),
        None => {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
            let options = build_options(&cli, &output);
            cmd_generate(&output, &options)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_font_size(value: &str) -> Result<f32, String> {
    let points: f32 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&points) {
        return Err(format!(
            "font size must be between {} and {} points",
            MIN_FONT_SIZE, MAX_FONT_SIZE
        ));
    }
    Ok(points)
}

fn build_options(cli: &Cli, output: &Path) -> RenderOptions {
    let format = cli
        .format
        .map(OutputFormat::from)
        .or_else(|| OutputFormat::from_path(output))
        .unwrap_or_default();

    let mut options = RenderOptions::new()
        .with_format(format)
        .with_frontmatter(cli.frontmatter)
        .with_font_size(cli.font_size)
        .with_list_marker(cli.list_marker);
    if let Some(ref font) = cli.font {
        options = options.with_font_family(font.as_str());
    }
    options
}

fn cmd_generate(output: &Path, options: &RenderOptions) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Generating {:?} report at {}", options.format, output.display());
    let stats = generate_report_with_options(output, options)?;

    println!(
        "{} {}",
        "Documentation report saved to:".green(),
        output.display()
    );
    println!(
        "  {} headings, {} paragraphs, {} list items",
        stats.heading_count, stats.body_count, stats.bullet_count
    );
    Ok(())
}

fn cmd_outline() -> Result<(), Box<dyn std::error::Error>> {
    let doc = linguaflash_report()?;
    if let Some(ref title) = doc.metadata.title {
        println!("{}", title.bold());
    }
    print!("{}", doc.outline().to_text());
    Ok(())
}

fn cmd_stats() -> Result<(), Box<dyn std::error::Error>> {
    let stats = linguaflash_report()?.stats();

    println!("{}", "Report Statistics".cyan().bold());
    println!("  Titles:      {}", stats.title_count);
    println!("  Headings:    {}", stats.heading_count);
    println!("  Paragraphs:  {}", stats.paragraph_count);
    println!("  Spacers:     {}", stats.spacer_count);
    println!("  List items:  {}", stats.list_item_count);
    println!("  Words:       {}", stats.word_count);
    Ok(())
}

fn cmd_trace(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_FILE));
    let mut sink = RecordingSink::new();
    emit(linguaflash_report()?, &mut sink, output)?;

    for (index, call) in sink.calls().iter().enumerate() {
        println!("{:>4}  {}", index, call);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        let cli = Cli::parse_from(["reportgen", "out.md"]);
        let options = build_options(&cli, Path::new("out.md"));
        assert_eq!(options.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_explicit_format_wins() {
        let cli = Cli::parse_from(["reportgen", "out.md", "--format", "json"]);
        let options = build_options(&cli, Path::new("out.md"));
        assert_eq!(options.format, OutputFormat::Json);
    }

    #[test]
    fn test_defaults_to_docx() {
        let cli = Cli::parse_from(["reportgen"]);
        let options = build_options(&cli, Path::new(DEFAULT_OUTPUT_FILE));
        assert_eq!(options.format, OutputFormat::Docx);
        assert_eq!(options.base_font_size, 11.0);
    }

    #[test]
    fn test_font_size_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["reportgen", "--font-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["reportgen", "--font-size", "200"]).is_err());
        assert!(Cli::try_parse_from(["reportgen", "--font-size", "big"]).is_err());

        let cli = Cli::try_parse_from(["reportgen", "--font-size", "14"]).unwrap();
        assert_eq!(cli.font_size, 14.0);
    }

    #[test]
    fn test_generate_into_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        cmd_generate(&path, &RenderOptions::default()).unwrap();
        assert!(path.exists());
    }
}
