use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pdf_fixture::driver::{run_with_progress, DEFAULT_OUTPUT, DEFAULT_PAGES};
use pdf_fixture::{DocumentMetadata, GenerateOptions, GenerationReport, PageSize};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "generate-test-pdf",
    about = "Generate a large multi-page PDF for renderer benchmarks",
    version,
    author
)]
struct Cli {
    /// Number of pages to generate
    #[arg(long, default_value_t = DEFAULT_PAGES)]
    pages: u32,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Skip the rectangle and circle decorations
    #[arg(long)]
    no_images: bool,

    /// Page size
    #[arg(long, value_enum, default_value_t = PageSizeArg::Letter)]
    page_size: PageSizeArg,

    /// Compress page content streams
    #[arg(long)]
    compress: bool,

    /// Document title
    #[arg(long, default_value = "Large test PDF")]
    title: String,

    /// Print the final report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PageSizeArg {
    Letter,
    A4,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::Letter => PageSize::Letter,
            PageSizeArg::A4 => PageSize::A4,
        }
    }
}

impl Cli {
    fn generate_options(&self) -> GenerateOptions {
        GenerateOptions::new(&self.output, self.pages)
            .with_shapes(!self.no_images)
            .with_page_size(self.page_size.into())
            .with_compression(self.compress)
            .with_metadata(
                DocumentMetadata::default()
                    .with_title(&self.title)
                    .with_subject("Renderer benchmark fixture"),
            )
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generate_test_pdf=info,pdf_fixture=warn".into()),
        )
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_summary(report: &GenerationReport) {
    println!("✓ PDF generated: {}", report.output.display());
    println!("  Pages: {}", report.pages);
    println!("  Size: {:.2} MB", report.size_mb());
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = cli.generate_options();
    debug!(?options, "parsed options");

    if !cli.json {
        println!("Generating PDF with {} pages...", options.total_pages);
    }

    let report = run_with_progress(&options, |written| {
        if !cli.json {
            println!("  Generated {written} pages...");
        }
    })
    .with_context(|| format!("Failed to generate {}", options.output.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print_summary(&report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["generate-test-pdf"]);
        assert_eq!(cli.pages, 100);
        assert_eq!(cli.output, PathBuf::from("test-large.pdf"));
        assert!(!cli.no_images);
        assert!(!cli.compress);
        assert!(!cli.json);
        assert_eq!(cli.title, "Large test PDF");

        let options = cli.generate_options();
        assert!(options.include_shapes);
        assert_eq!(options.page_size, PageSize::Letter);
        assert_eq!(options.metadata.title.as_deref(), Some("Large test PDF"));
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = Cli::parse_from([
            "generate-test-pdf",
            "--pages",
            "5",
            "--output",
            "small.pdf",
            "--no-images",
            "--page-size",
            "a4",
            "--compress",
            "--title",
            "Fixture",
        ]);
        let options = cli.generate_options();
        assert_eq!(options.total_pages, 5);
        assert_eq!(options.output, PathBuf::from("small.pdf"));
        assert!(!options.include_shapes);
        assert_eq!(options.page_size, PageSize::A4);
        assert!(options.compress);
        assert_eq!(options.metadata.title.as_deref(), Some("Fixture"));
    }

    #[test]
    fn test_rejects_negative_pages() {
        assert!(Cli::try_parse_from(["generate-test-pdf", "--pages", "-1"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_page_size() {
        assert!(Cli::try_parse_from(["generate-test-pdf", "--page-size", "legal"]).is_err());
    }
}
