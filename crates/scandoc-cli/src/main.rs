//! scandoc CLI - OCR document processing and export tool.
//!
//! Processes scanned page images (or pre-extracted text) through the OCR
//! pipeline and writes the result in one of the four export formats.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use scandoc_core::export::{export_csv, export_html, export_json, export_txt};
use scandoc_core::ProcessedDocument;
use scandoc_correct::CorrectionClient;
use scandoc_ocr::{
    HttpOcrProvider, OcrError, OcrProvider, OcrProviderConfig, PageInput, PlainTextProvider,
    ProviderPage,
};
use scandoc_pipeline::{DocumentProcessor, InputDocument, PageSelection};

#[derive(Parser, Debug)]
#[command(
    name = "scandoc",
    about = "Process scanned documents through OCR and export the results",
    version
)]
struct Args {
    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process one or more documents
    #[command(long_about = "Process one or more documents through the OCR pipeline.\n\
                      \n\
                      Image files (PNG, JPEG, WebP, TIFF, BMP) are sent to the OCR\n\
                      provider; .txt files are treated as pre-extracted page text\n\
                      (pages separated by form-feed characters).\n\
                      \n\
                      With --merge all inputs form one multi-page document (the Nth\n\
                      file becomes page N), so --pages can select a subset of a\n\
                      scanned document supplied as one image per page.")]
    Process {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Pages to process: all, first:N or list:a,b,c
        #[arg(long, default_value = "all", value_name = "SELECTION")]
        pages: PageSelection,

        /// Combine all inputs into one multi-page document
        #[arg(long)]
        merge: bool,

        /// Export format
        #[arg(short, long, value_enum, default_value = "txt")]
        format: ExportFormat,

        /// Output directory (default: next to each input file)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Apply AI text correction (requires SCANDOC_AI_API_KEY)
        #[arg(long)]
        correct: bool,

        /// OCR provider
        #[arg(long, value_enum, default_value = "auto")]
        provider: ProviderKind,
    },

    /// List the supported export formats
    Formats,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Txt,
    Csv,
    Json,
    Html,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    fn render(self, document: &ProcessedDocument) -> Result<String> {
        let rendered = match self {
            Self::Txt => export_txt(document),
            Self::Csv => export_csv(document).context("CSV export failed")?,
            Self::Json => export_json(document).context("JSON export failed")?,
            Self::Html => export_html(document),
        };
        Ok(rendered)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ProviderKind {
    /// Pick per input: text files locally, images via HTTP
    Auto,
    /// Pre-extracted text only, no network calls
    Text,
    /// Remote OCR endpoint (requires SCANDOC_OCR_ENDPOINT)
    Http,
}

/// Provider selected at runtime from the CLI flags.
enum AnyProvider {
    Text(PlainTextProvider),
    Http(HttpOcrProvider),
}

impl OcrProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Text(provider) => provider.name(),
            Self::Http(provider) => provider.name(),
        }
    }

    async fn recognize_page(&self, input: &PageInput) -> Result<ProviderPage, OcrError> {
        match self {
            Self::Text(provider) => provider.recognize_page(input).await,
            Self::Http(provider) => provider.recognize_page(input).await,
        }
    }
}

/// Map a file extension to the mime type sent to the provider.
fn mime_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "tif" | "tiff" => Some("image/tiff"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Load a file into per-page inputs.
///
/// Text files split into pages on form-feed; images are a single page.
fn load_input(path: &Path) -> Result<InputDocument> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();

    if extension.eq_ignore_ascii_case("pdf") {
        bail!("'{file_name}': PDF inputs are not supported; render the pages to images first");
    }

    let pages = if extension.eq_ignore_ascii_case("txt") {
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read '{file_name}'"))?;
        let mut pages: Vec<PageInput> = content
            .split('\u{c}')
            .map(|page| PageInput::Text(page.trim_end().to_string()))
            .collect();
        // A trailing form-feed would otherwise produce a phantom empty page.
        while pages.len() > 1 && matches!(pages.last(), Some(PageInput::Text(text)) if text.is_empty())
        {
            pages.pop();
        }
        pages
    } else if let Some(mime) = mime_for_extension(&extension) {
        let bytes = fs::read(path).with_context(|| format!("failed to read '{file_name}'"))?;
        vec![PageInput::Image {
            bytes,
            mime_type: mime.to_string(),
        }]
    } else {
        bail!("'{file_name}': unsupported input type '.{extension}'");
    };

    Ok(InputDocument { file_name, pages })
}

/// Combine per-file documents into one multi-page document.
///
/// The Nth input becomes page N; the merged document keeps the first
/// file's name so exports land next to it.
fn merge_documents(documents: Vec<InputDocument>) -> Option<InputDocument> {
    let mut documents = documents.into_iter();
    let mut merged = documents.next()?;
    for document in documents {
        merged.pages.extend(document.pages);
    }
    Some(merged)
}

fn output_path(input: &Path, output_dir: Option<&Path>, format: ExportFormat) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let file = format!("{}.{}", stem.to_string_lossy(), format.extension());
    match output_dir {
        Some(dir) => dir.join(file),
        None => input.with_file_name(file),
    }
}

fn select_provider(kind: ProviderKind, input: &InputDocument) -> Result<AnyProvider> {
    let has_images = input
        .pages
        .iter()
        .any(|page| matches!(page, PageInput::Image { .. }));
    match kind {
        ProviderKind::Text => Ok(AnyProvider::Text(PlainTextProvider)),
        ProviderKind::Http => {
            let config = OcrProviderConfig::from_env().context("OCR provider not configured")?;
            Ok(AnyProvider::Http(HttpOcrProvider::new(config)?))
        }
        ProviderKind::Auto if has_images => {
            let config = OcrProviderConfig::from_env().context(
                "image inputs need the HTTP OCR provider (set SCANDOC_OCR_ENDPOINT)",
            )?;
            Ok(AnyProvider::Http(HttpOcrProvider::new(config)?))
        }
        ProviderKind::Auto => Ok(AnyProvider::Text(PlainTextProvider)),
    }
}

#[allow(clippy::too_many_arguments)]
async fn process_command(
    inputs: Vec<PathBuf>,
    pages: PageSelection,
    merge: bool,
    format: ExportFormat,
    output: Option<PathBuf>,
    correct: bool,
    provider: ProviderKind,
    quiet: bool,
) -> Result<()> {
    if let Some(dir) = &output {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    }

    let corrector = if correct {
        Some(CorrectionClient::from_env().context("correction requested but not configured")?)
    } else {
        None
    };

    // With --merge each file contributes its pages to a single document,
    // exported under the first file's name.
    let batches: Vec<(PathBuf, InputDocument)> = if merge {
        let documents = inputs
            .iter()
            .map(|path| load_input(path))
            .collect::<Result<Vec<_>>>()?;
        let first = inputs.first().cloned().context("no input files given")?;
        let merged = merge_documents(documents).context("no input files given")?;
        vec![(first, merged)]
    } else {
        inputs
            .iter()
            .map(|path| load_input(path).map(|input| (path.clone(), input)))
            .collect::<Result<Vec<_>>>()?
    };

    for (path, input) in &batches {
        let any_provider = select_provider(provider, input)?;
        let mut processor = DocumentProcessor::new(any_provider);
        if let Some(corrector) = corrector.clone() {
            processor = processor.with_corrector(corrector);
        }

        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(input.pages.len() as u64);
            bar.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{bar:30.cyan/blue}] página {pos}/{len} {msg}",
                )?
                .progress_chars("=>-"),
            );
            bar.set_message(input.file_name.clone());
            bar
        };

        let document = processor
            .process(input, &pages, |done, total| {
                bar.set_length(total as u64);
                bar.set_position(done as u64);
            })
            .await
            .with_context(|| format!("failed to process '{}'", input.file_name))?;
        bar.finish_and_clear();

        let rendered = format.render(&document)?;
        let destination = output_path(path, output.as_deref(), format);
        fs::write(&destination, rendered)
            .with_context(|| format!("failed to write '{}'", destination.display()))?;

        if !quiet {
            print_summary(&document, &destination);
        }
    }

    Ok(())
}

fn print_summary(document: &ProcessedDocument, destination: &Path) {
    println!(
        "{} {} ({} páginas, confiabilidade {}%)",
        "✓".green().bold(),
        document.file_name.bold(),
        document.total_pages,
        document.overall_confidence
    );
    if let Some(info) = &document.document_type {
        println!("  tipo: {} {} ({}%)", info.icon, info.label, info.confidence);
    }
    if let Some(language) = document.detected_language {
        println!("  idioma: {language}");
    }
    if let Some(summary) = &document.summary {
        println!(
            "  páginas ok: {}%, tabelas: {}, campos: {}",
            summary.page_success_rate, summary.tables_detected, summary.fields_detected
        );
    }
    println!("  exportado para {}", destination.display().to_string().cyan());
}

fn formats_command() {
    println!("{}", "Supported export formats:".bold());
    println!("  txt   - plain text with per-page confidence headers");
    println!("  csv   - detected tables, one section per page");
    println!("  json  - full document structure, lossless re-import");
    println!("  html  - styled report with confidence badges");
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Process {
            inputs,
            pages,
            merge,
            format,
            output,
            correct,
            provider,
        } => {
            process_command(inputs, pages, merge, format, output, correct, provider, args.quiet)
                .await
        }
        Commands::Formats => {
            formats_command();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("PNG"), Some("image/png"));
        assert_eq!(mime_for_extension("jpeg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("gif"), None);
    }

    #[test]
    fn test_output_path_next_to_input() {
        let path = output_path(Path::new("/docs/report.png"), None, ExportFormat::Json);
        assert_eq!(path, PathBuf::from("/docs/report.json"));
    }

    #[test]
    fn test_merge_documents_concatenates_pages_in_input_order() {
        let first = InputDocument {
            file_name: "frente.png".to_string(),
            pages: vec![PageInput::Text("página um".to_string())],
        };
        let second = InputDocument {
            file_name: "verso.png".to_string(),
            pages: vec![
                PageInput::Text("página dois".to_string()),
                PageInput::Text("página três".to_string()),
            ],
        };

        let merged = merge_documents(vec![first, second]).unwrap();
        assert_eq!(merged.file_name, "frente.png");
        assert_eq!(merged.pages.len(), 3);
        assert!(
            matches!(&merged.pages[2], PageInput::Text(text) if text == "página três")
        );
    }

    #[test]
    fn test_merge_documents_empty_input_is_none() {
        assert!(merge_documents(Vec::new()).is_none());
    }

    #[test]
    fn test_output_path_in_output_dir() {
        let path = output_path(
            Path::new("/docs/report.png"),
            Some(Path::new("/out")),
            ExportFormat::Html,
        );
        assert_eq!(path, PathBuf::from("/out/report.html"));
    }
}
