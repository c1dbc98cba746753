//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use steamdoc_core::{
    tokenize, Credentials, ExportFormat, Language, OutputType, RequestForm, Settings,
};

use crate::session::{Session, SessionError, ABOUT};
use crate::terminal::TerminalSurface;

#[derive(Parser)]
#[command(name = "steamdoc")]
#[command(author, version, about = "STEAM integration ideas and lesson plans", long_about = None)]
struct Cli {
    /// Configuration file (default: steamdoc.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Gemini API key (overrides GEMINI_API_KEY and the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Lesson request fields shared by `generate`
#[derive(clap::Args, Debug, Clone)]
struct LessonArgs {
    /// Lesson topic
    #[arg(short, long)]
    topic: String,

    /// Learning outcomes, comma separated
    #[arg(short = 'l', long)]
    outcomes: String,

    /// Learner age group
    #[arg(short, long)]
    age: String,

    /// Class time in minutes
    #[arg(long)]
    time: String,

    /// Location to draw examples from
    #[arg(long, default_value = "")]
    location: String,

    /// What to generate: ideas or lesson-plan
    #[arg(long = "type", default_value = "ideas")]
    output_type: OutputType,

    /// Output language: english or nepali
    #[arg(long, default_value = "english")]
    language: Language,
}

impl LessonArgs {
    fn into_form(self) -> RequestForm {
        RequestForm {
            topic: self.topic,
            outcomes: self.outcomes,
            age_group: self.age,
            output_type: self.output_type,
            time_minutes: self.time,
            location: self.location,
            language: self.language,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate STEAM ideas or a lesson plan and display them
    Generate {
        #[command(flatten)]
        lesson: LessonArgs,

        /// Export the result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (default: from the output extension)
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },

    /// Display a marked-up text file and optionally export it
    Render {
        /// Input text file
        input: PathBuf,

        /// Export to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (default: from the output extension)
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },

    /// Show how a text file is tokenized
    Tokenize {
        /// Input text file
        input: PathBuf,

        /// Print the styled document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session
    Interactive,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    debug!("settings loaded: model {}", settings.generation.model);

    match cli.command {
        Commands::Generate {
            lesson,
            output,
            format,
        } => {
            let credentials = resolve_credentials(cli.api_key.as_deref(), &settings)?;
            let mut session = Session::connect(settings, credentials)?;
            generate_command(&mut session, lesson.into_form(), output.as_deref(), format)?;
        }
        Commands::Render {
            input,
            output,
            format,
        } => {
            render_command(&input, output.as_deref(), format, settings)?;
        }
        Commands::Tokenize { input, json } => {
            let stdout = io::stdout();
            tokenize_command(&input, json, &mut stdout.lock())?;
        }
        Commands::Interactive => {
            // A missing key is not fatal here; `key set` can supply one.
            let credentials =
                resolve_credentials(cli.api_key.as_deref(), &settings).unwrap_or_default();
            let mut session = Session::connect(settings, credentials)?;
            let stdin = io::stdin();
            let styled = io::stdout().is_terminal();
            run_interactive(&mut session, stdin.lock(), io::stdout(), styled)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // Also captures `log` records from the library crates
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_credentials(explicit: Option<&str>, settings: &Settings) -> Result<Credentials> {
    Credentials::resolve(explicit, settings.generation.api_key.as_deref())
        .context("Failed to resolve the Gemini API key")
}

fn stdout_surface() -> TerminalSurface<io::Stdout> {
    let styled = io::stdout().is_terminal();
    TerminalSurface::new(io::stdout(), styled, false)
}

/// Execute the generate command
pub fn generate_command(
    session: &mut Session,
    form: RequestForm,
    output: Option<&Path>,
    format: Option<ExportFormat>,
) -> Result<()> {
    eprintln!("Generating, Please Wait...");
    session.generate(&form)?;

    let mut surface = stdout_surface();
    session.display(&mut surface);
    if let Some(e) = surface.take_error() {
        return Err(e).context("Failed to write output");
    }

    if let Some(path) = output {
        let written = session
            .export(path, format)
            .with_context(|| format!("Failed to export: {}", path.display()))?;
        eprintln!("STEAM ideas exported successfully to {}", written.display());
    }
    Ok(())
}

/// Execute the render command
pub fn render_command(
    input: &Path,
    output: Option<&Path>,
    format: Option<ExportFormat>,
    settings: Settings,
) -> Result<()> {
    info!("Rendering: {}", input.display());

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let topic = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut session = Session::connect(settings, Credentials::new())?;
    session.load_text(topic, text);

    match output {
        Some(path) => {
            let written = session
                .export(path, format)
                .with_context(|| format!("Failed to export: {}", path.display()))?;
            println!("Exported: {}", written.display());
        }
        None => {
            let mut surface = stdout_surface();
            session.display(&mut surface);
            if let Some(e) = surface.take_error() {
                return Err(e).context("Failed to write output");
            }
        }
    }
    Ok(())
}

/// Execute the tokenize command
pub fn tokenize_command<W: Write>(input: &Path, json: bool, out: &mut W) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let doc = tokenize(&text);

    if json {
        let rendered =
            serde_json::to_string_pretty(&doc).context("Failed to serialize document")?;
        writeln!(out, "{}", rendered)?;
        return Ok(());
    }

    for (i, paragraph) in doc.paragraphs.iter().enumerate() {
        writeln!(out, "paragraph {}", i + 1)?;
        for run in &paragraph.runs {
            writeln!(out, "  {:<10} {:?}", run.style.name(), run.text)?;
        }
    }
    Ok(())
}

const HELP: &str = "\
Commands:
  generate              fill in a lesson request and generate
  show                  display the last result
  export <file> [fmt]   export the last result (docx or pdf)
  format <docx|pdf>     select the default export format
  history               list the last 5 requests
  clear                 clear the current result
  key                   show the API key (masked unless shown)
  key set <key>         change the API key
  key show|hide         toggle showing the key
  about                 about this program
  quit                  leave";

/// Run the interactive session loop
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
    styled: bool,
) -> Result<()> {
    writeln!(out, "steamdoc v{} - type 'help' for commands", crate::VERSION)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        let result: Result<()> = match command {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{}", HELP).map_err(Into::into),
            "about" => writeln!(out, "{}", ABOUT).map_err(Into::into),
            "generate" => interactive_generate(session, &mut input, &mut out, styled),
            "show" => show(session, &mut out, styled),
            "history" => print_history(session, &mut out),
            "clear" => {
                session.clear();
                show(session, &mut out, styled)
            }
            "format" => match args.first().map(|f| f.parse::<ExportFormat>()) {
                Some(Ok(format)) => {
                    session.set_export_format(format);
                    writeln!(out, "Export format: {}", format).map_err(Into::into)
                }
                Some(Err(e)) => Err(e.into()),
                None => writeln!(out, "Export format: {}", session.export_format())
                    .map_err(Into::into),
            },
            "export" => interactive_export(session, &args, &mut out),
            "key" => interactive_key(session, &args, &mut out),
            other => writeln!(out, "Unknown command '{}', type 'help'", other).map_err(Into::into),
        };

        if let Err(e) = result {
            writeln!(out, "Error: {}", e)?;
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{}: ", label)?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

fn interactive_generate<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    styled: bool,
) -> Result<()> {
    let topic = ask(input, out, "Topic")?;
    let outcomes = ask(input, out, "Learning outcomes (comma separated)")?;
    let age_group = ask(input, out, "Age group")?;
    let output_type = ask(input, out, "Output type [ideas/lesson-plan]")?;
    let time_minutes = ask(input, out, "Class time (minutes)")?;
    let location = ask(input, out, "Location (optional)")?;
    let language = ask(input, out, "Language [english/nepali]")?;

    let form = RequestForm {
        topic,
        outcomes,
        age_group,
        output_type: parse_or_default(&output_type)?,
        time_minutes,
        location,
        language: parse_or_default(&language)?,
    };

    writeln!(out, "Generating, Please Wait...")?;
    session.start_generation(&form)?;
    session.wait_generation()?;
    show(session, out, styled)
}

fn parse_or_default<T>(value: &str) -> Result<T, SessionError>
where
    T: std::str::FromStr<Err = steamdoc_core::ValidationError> + Default,
{
    if value.trim().is_empty() {
        Ok(T::default())
    } else {
        Ok(value.parse()?)
    }
}

fn show<W: Write>(session: &Session, out: &mut W, styled: bool) -> Result<()> {
    // A styled interactive view redraws from the top of a cleared screen
    let mut surface = TerminalSurface::new(out, styled, styled);
    session.display(&mut surface);
    match surface.take_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn print_history<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    if session.history().is_empty() {
        writeln!(out, "No History Found")?;
        return Ok(());
    }
    writeln!(out, "History of Last 5 Uses")?;
    for line in session.history().summary() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

fn interactive_export<W: Write>(session: &Session, args: &[&str], out: &mut W) -> Result<()> {
    let Some(path) = args.first() else {
        anyhow::bail!("usage: export <file> [docx|pdf]");
    };
    let format = args.get(1).map(|f| f.parse::<ExportFormat>()).transpose()?;
    let written = session.export(Path::new(path), format)?;
    writeln!(out, "STEAM ideas exported successfully to {}", written.display())?;
    Ok(())
}

fn interactive_key<W: Write>(session: &mut Session, args: &[&str], out: &mut W) -> Result<()> {
    match args {
        [] => {}
        ["set", key] => {
            session.change_api_key(key)?;
            writeln!(out, "API key changed successfully.")?;
        }
        ["show"] => session.credentials_mut().set_show_key(true),
        ["hide"] => session.credentials_mut().set_show_key(false),
        _ => anyhow::bail!("usage: key [set <key> | show | hide]"),
    }
    writeln!(out, "API key: {}", session.credentials().display_key())?;
    Ok(())
}
