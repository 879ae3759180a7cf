//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use transmittal_ast::DocumentRecord;
use transmittal_core::{
    session_date, AssetBundle, Settings, TransmittalLayout, TransmittalRequest, SETTINGS_FILE,
};
use transmittal_ooxml::render_docx;
use transmittal_pdf::{html_preview, render_pdf_with, Compiler, PdfOutput, PdfTarget};

/// Output format for informational commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

/// What the preview command writes
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PreviewFormat {
    /// Self-contained HTML page framing the PDF
    #[default]
    Html,
    /// Bare `data:application/pdf;base64,...` URI
    Uri,
}

/// Inputs shared by every command that composes a sheet
#[derive(Debug, Clone, Args)]
pub struct ComposeArgs {
    /// Document record as JSON, in the shape the REST API returns
    pub input: PathBuf,

    /// Signatory key (defaults to the first configured signatory)
    #[arg(short, long)]
    pub signatory: Option<String>,

    /// Footer timestamp, e.g. 2024-01-25T14:30:00 (defaults to now)
    #[arg(long)]
    pub generated_at: Option<NaiveDateTime>,
}

#[derive(Parser)]
#[command(name = "transmittal")]
#[command(author, version, about = "Transmittal sheets for approved ordinances and resolutions", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./transmittal.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a transmittal sheet as PDF
    Pdf {
        #[command(flatten)]
        compose: ComposeArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Render a transmittal sheet as DOCX
    Docx {
        #[command(flatten)]
        compose: ComposeArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Render the PDF as an in-app preview
    Preview {
        #[command(flatten)]
        compose: ComposeArgs,

        /// Preview format (html or uri)
        #[arg(short, long, value_enum, default_value = "html")]
        format: PreviewFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how an approval date is printed
    SessionDate {
        /// Approval date as the API sends it (omit for the sentinel)
        date: Option<String>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the configured signatories
    Signatories {
        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (settings, base_dir) = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Pdf { compose, output } => {
            pdf_command(&compose, &output, &settings, &base_dir)?;
        }
        Commands::Docx { compose, output } => {
            docx_command(&compose, &output, &settings, &base_dir)?;
        }
        Commands::Preview {
            compose,
            format,
            output,
        } => {
            let preview =
                preview_command(&compose, format, output.as_deref(), &settings, &base_dir)?;
            if output.is_none() {
                println!("{}", preview);
            }
        }
        Commands::SessionDate { date, format } => {
            println!("{}", session_date_command(date.as_deref(), format)?);
        }
        Commands::Signatories { format } => {
            println!("{}", signatories_command(&settings, format)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Load settings and the directory asset paths are relative to
///
/// Without an explicit path, `./transmittal.toml` is used when present and
/// the built-in defaults otherwise.
pub fn load_settings(config: Option<&Path>) -> Result<(Settings, PathBuf)> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None if Path::new(SETTINGS_FILE).exists() => PathBuf::from(SETTINGS_FILE),
        None => {
            debug!("No {} found, using built-in settings", SETTINGS_FILE);
            return Ok((Settings::default(), PathBuf::from(".")));
        }
    };

    let settings = Settings::load(&path)
        .with_context(|| format!("Failed to load settings: {}", path.display()))?;
    let base_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    debug!("Loaded settings from {}", path.display());

    Ok((settings, base_dir))
}

/// Read a document record from a JSON file
pub fn load_record(path: &Path) -> Result<DocumentRecord> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse record JSON: {}", path.display()))
}

/// File name safe to create on disk
///
/// `Transmittal_Sheet_N/A.pdf` would otherwise name a directory.
pub fn disk_file_name(file_name: &str) -> String {
    file_name.replace(['/', '\\'], "-")
}

struct Composition {
    layout: TransmittalLayout,
    assets: AssetBundle,
}

fn compose(args: &ComposeArgs, settings: &Settings, base_dir: &Path) -> Result<Composition> {
    let record = load_record(&args.input)?;
    let signatory = match args.signatory.as_deref() {
        Some(key) => settings.signatory(key)?,
        None => settings
            .signatories
            .first()
            .context("No signatories configured")?,
    };
    let generated_at = args
        .generated_at
        .unwrap_or_else(|| Local::now().naive_local());

    let request = TransmittalRequest::new(&record, signatory, generated_at);
    let layout = TransmittalLayout::compose(&request, settings);

    let assets = AssetBundle::load(&settings.assets, base_dir).with_context(|| {
        format!(
            "Failed to load letterhead images from {}",
            base_dir.join(&settings.assets.dir).display()
        )
    })?;

    Ok(Composition { layout, assets })
}

fn pdf_compiler(settings: &Settings, base_dir: &Path) -> Result<Compiler> {
    let fonts: Vec<PathBuf> = settings
        .assets
        .fonts
        .iter()
        .map(|font| base_dir.join(font))
        .collect();
    Compiler::new()
        .with_font_files(&fonts)
        .context("Failed to load fonts")
}

fn write_output(output_dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let path = output_dir.join(disk_file_name(file_name));
    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    info!("Created {} ({} bytes)", path.display(), bytes.len());

    Ok(path)
}

/// Execute the pdf command, returning the written path
pub fn pdf_command(
    args: &ComposeArgs,
    output_dir: &Path,
    settings: &Settings,
    base_dir: &Path,
) -> Result<PathBuf> {
    let Composition { layout, assets } = compose(args, settings, base_dir)?;
    let compiler = pdf_compiler(settings, base_dir)?;

    let bytes = render_pdf_with(compiler, &layout, &assets, PdfTarget::Download)
        .context("Failed to render PDF")?
        .into_bytes()?;

    write_output(
        output_dir,
        &layout.file_name(transmittal_pdf::EXTENSION),
        &bytes,
    )
}

/// Execute the docx command, returning the written path
pub fn docx_command(
    args: &ComposeArgs,
    output_dir: &Path,
    settings: &Settings,
    base_dir: &Path,
) -> Result<PathBuf> {
    let Composition { layout, assets } = compose(args, settings, base_dir)?;
    let docx = render_docx(&layout, &assets).context("Failed to render DOCX")?;
    write_output(output_dir, &docx.file_name, &docx.bytes)
}

/// Execute the preview command
///
/// Returns the preview text; it is also written to `output` when given.
pub fn preview_command(
    args: &ComposeArgs,
    format: PreviewFormat,
    output: Option<&Path>,
    settings: &Settings,
    base_dir: &Path,
) -> Result<String> {
    let Composition { layout, assets } = compose(args, settings, base_dir)?;
    let compiler = pdf_compiler(settings, base_dir)?;

    let PdfOutput::Preview(uri) = render_pdf_with(compiler, &layout, &assets, PdfTarget::Preview)
        .context("Failed to render PDF preview")?
    else {
        anyhow::bail!("PDF renderer did not return a preview");
    };

    let preview = match format {
        PreviewFormat::Html => html_preview(
            &format!("Transmittal Sheet No. {}", layout.document_no),
            &uri,
        ),
        PreviewFormat::Uri => uri,
    };

    if let Some(path) = output {
        fs::write(path, &preview)
            .with_context(|| format!("Failed to write preview: {}", path.display()))?;
        info!("Created {}", path.display());
    }

    Ok(preview)
}

/// Execute the session-date command
pub fn session_date_command(raw: Option<&str>, format: OutputFormat) -> Result<String> {
    let date = session_date(raw);
    match format {
        OutputFormat::Text => {
            if !date.is_known() {
                return Ok(date.day_text());
            }
            Ok(format!(
                "{} day of {} {}",
                date.ordinal_text(),
                date.month_text(),
                date.year_text()
            ))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&date).context("Failed to serialize session date")
        }
    }
}

/// Execute the signatories command
pub fn signatories_command(settings: &Settings, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for profile in &settings.signatories {
                output.push_str(&format!("{:<12} {}\n", profile.key, profile.name));
                for title in profile.printed_titles() {
                    output.push_str(&format!("{:<12} {}\n", "", title));
                }
            }
            Ok(output.trim_end().to_string())
        }
        OutputFormat::Json => serde_json::to_string_pretty(&settings.signatories)
            .context("Failed to serialize signatories"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_file_name() {
        assert_eq!(
            disk_file_name("Transmittal_Sheet_N/A.pdf"),
            "Transmittal_Sheet_N-A.pdf"
        );
        assert_eq!(
            disk_file_name("Transmittal_Sheet_2024-017.docx"),
            "Transmittal_Sheet_2024-017.docx"
        );
    }

    #[test]
    fn test_session_date_text() {
        assert_eq!(
            session_date_command(Some("2024-03-12"), OutputFormat::Text).unwrap(),
            "12th day of March 2024"
        );
        assert_eq!(
            session_date_command(Some("2024-03-22"), OutputFormat::Text).unwrap(),
            "22nd day of March 2024"
        );
        assert_eq!(
            session_date_command(None, OutputFormat::Text).unwrap(),
            "N/A"
        );
    }

    #[test]
    fn test_session_date_json() {
        let json = session_date_command(Some("2024-01-21"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["day"], 21);
        assert_eq!(value["suffix"], "st");
        assert_eq!(value["month"], "January");
    }

    #[test]
    fn test_signatories_text_lists_every_key() {
        let text = signatories_command(&Settings::default(), OutputFormat::Text).unwrap();
        for key in ["secretary", "vice-mayor", "mayor"] {
            assert!(text.contains(key), "{}", key);
        }
        assert!(text.contains("Presiding Officer"));
    }

    #[test]
    fn test_cli_parses_compose_args() {
        let cli = Cli::try_parse_from([
            "transmittal",
            "docx",
            "record.json",
            "--signatory",
            "mayor",
            "--generated-at",
            "2024-01-25T14:30:00",
            "-o",
            "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Docx { compose, output } => {
                assert_eq!(compose.input, PathBuf::from("record.json"));
                assert_eq!(compose.signatory.as_deref(), Some("mayor"));
                assert_eq!(
                    compose.generated_at.unwrap().to_string(),
                    "2024-01-25 14:30:00"
                );
                assert_eq!(output, PathBuf::from("out"));
            }
            _ => panic!("expected docx command"),
        }
    }
}
