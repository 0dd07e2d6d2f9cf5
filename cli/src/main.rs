//! sortlines CLI - sort the lines of styled text layers

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use crossbeam_channel::Sender;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use sortlines::batch::{collect_text_nodes, format_count, required_fonts, ConfirmPrompt};
use sortlines::sort::sorted_characters;
use sortlines::{
    scene_fonts, BatchOptions, BatchOutcome, ChannelConfirmation, Error, Notifier, Scene, SortBatch,
    UiMessage, UiSurface, Viewport,
};

#[derive(Parser)]
#[command(name = "sortlines")]
#[command(version)]
#[command(about = "Sort the lines of styled text layers alphabetically", long_about = None)]
struct Cli {
    /// Input scene file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Sort without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort every selected text layer in a scene file
    Sort {
        /// Input scene file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (input is overwritten if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Sort without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Ask for confirmation from this many text layers on
        #[arg(
            long,
            env = "SORTLINES_THRESHOLD",
            default_value_t = sortlines::batch::DEFAULT_CONFIRM_THRESHOLD
        )]
        threshold: usize,

        /// Also sort hidden text layers
        #[arg(long)]
        include_hidden: bool,

        /// Write compact JSON
        #[arg(long)]
        json_compact: bool,
    },

    /// Print the sorted lines without writing anything
    Lines {
        /// Input scene file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Also show hidden text layers
        #[arg(long)]
        include_hidden: bool,
    },

    /// Show scene information
    Info {
        /// Input scene file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Confirmation prompt on the terminal; answers go back over the channel.
struct TerminalSurface {
    replies: Sender<UiMessage>,
}

impl TerminalSurface {
    fn new(replies: Sender<UiMessage>) -> Self {
        Self { replies }
    }
}

impl UiSurface for TerminalSurface {
    fn show(&mut self, prompt: &ConfirmPrompt) -> sortlines::Result<()> {
        println!("{}", prompt.message.bold());
        print!(
            "{} [y] {} / [n] {}: ",
            prompt.question,
            prompt.yes_label.green(),
            prompt.no_label.red()
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        let confirm = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");

        self.replies
            .send(UiMessage::decision(confirm))
            .map_err(|e| Error::Ui(e.to_string()))
    }

    fn resize(&mut self, width: u32, height: u32) -> sortlines::Result<()> {
        log::debug!("ignoring resize to {}x{}", width, height);
        Ok(())
    }

    fn close(&mut self) {
        log::debug!("confirmation prompt closed");
    }
}

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        println!("{}", message.green().bold());
    }
}

struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn focus(&mut self, ids: &[String]) {
        if !ids.is_empty() {
            println!("{} {}", "Sorted layers:".dimmed(), ids.join(", ").dimmed());
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Sort {
            input,
            output,
            yes,
            threshold,
            include_hidden,
            json_compact,
        }) => {
            let mut options = BatchOptions::new().with_confirm_threshold(threshold);
            if yes {
                options = options.without_confirmation();
            }
            if include_hidden {
                options = options.include_hidden();
            }
            cmd_sort(&input, output.as_deref(), options, json_compact)
        }
        Some(Commands::Lines {
            input,
            include_hidden,
        }) => cmd_lines(&input, !include_hidden),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: sort in place if input is provided
            if let Some(input) = cli.input {
                let mut options = BatchOptions::new();
                if cli.yes {
                    options = options.without_confirmation();
                }
                cmd_sort(&input, None, options, false)
            } else {
                println!("{}", "Usage: sortlines <FILE>".yellow());
                println!("       sortlines --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Progress bar for a sort batch.
///
/// Starts hidden so it stays clear of the confirmation prompt; the progress
/// callback attaches it to stderr once the first document is sorted.
fn sort_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::hidden());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

fn cmd_sort(
    input: &Path,
    output: Option<&Path>,
    options: BatchOptions,
    json_compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene::load(input)?;
    let fonts = scene_fonts(&scene);
    let mut nodes = collect_text_nodes(&mut scene.selection, options.only_visible);

    let pb = sort_progress_bar(nodes.len());
    let mut progress = |done: usize, _total: usize| {
        if pb.is_hidden() {
            pb.set_draw_target(ProgressDrawTarget::stderr());
        }
        pb.set_position(done as u64);
    };

    let mut gate = ChannelConfirmation::with_channel(TerminalSurface::new);
    let mut notifier = TerminalNotifier;
    let mut viewport = TerminalViewport;

    let outcome = SortBatch::new(&mut gate, &fonts, &mut notifier)
        .with_options(options)
        .with_viewport(&mut viewport)
        .with_progress(&mut progress)
        .run(&mut nodes)?;

    let stats = match outcome {
        BatchOutcome::Sorted(stats) => stats,
        BatchOutcome::Cancelled => {
            pb.finish_and_clear();
            println!("{}", "Cancelled, nothing was changed.".yellow());
            return Ok(());
        }
    };
    pb.finish_and_clear();

    let path = output.unwrap_or(input);
    scene.save(path, !json_compact)?;

    println!(
        "{} {} lines in {} layers",
        "Sorted".green(),
        format_count(stats.lines),
        format_count(stats.documents)
    );
    if stats.attributes_skipped > 0 {
        println!(
            "{} {} mixed attributes were left at the layer default",
            "Note:".yellow(),
            format_count(stats.attributes_skipped)
        );
    }
    println!("{} {}", "Saved to".green(), path.display());
    log::debug!("{}", serde_json::to_string(&stats)?);
    Ok(())
}

fn cmd_lines(input: &Path, only_visible: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene::load(input)?;
    let nodes = collect_text_nodes(&mut scene.selection, only_visible);

    if nodes.is_empty() {
        println!("{}", "No text layers selected".yellow());
        return Ok(());
    }

    for node in &nodes {
        let title = if node.name.is_empty() {
            node.id.clone()
        } else {
            format!("{} ({})", node.name, node.id)
        };
        println!("{}", title.cyan().bold());
        println!("{}", "─".repeat(40).dimmed());

        let sorted: String = sorted_characters(&**node)?
            .unwrap_or_default()
            .iter()
            .map(|c| c.character)
            .collect();
        for line in sorted.split(sortlines::sort::LINE_BREAK) {
            println!("  {}", line);
        }
        println!();
    }
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene::load(input)?;
    let catalog = scene_fonts(&scene);
    let node_count = scene.node_count();
    let page = scene.page.clone();

    let all = collect_text_nodes(&mut scene.selection, false);
    let visible = all.iter().filter(|n| n.visible).count();
    let characters: usize = all.iter().map(|n| n.len()).sum();
    let fonts = required_fonts(&all)?;

    println!("{}", "Scene Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    if !page.is_empty() {
        println!("{}: {}", "Page".bold(), page);
    }
    println!("{}: {}", "Nodes".bold(), format_count(node_count));
    println!("{}: {}", "Text layers".bold(), format_count(all.len()));
    println!("{}: {}", "Hidden".bold(), format_count(all.len() - visible));
    println!("{}: {}", "Characters".bold(), format_count(characters));

    println!();
    println!("{}", "Fonts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for font in &fonts {
        if catalog.is_available(font) {
            println!("  {} {}", "✓".green(), font);
        } else {
            println!("  {} {} {}", "✗".red(), font, "(unavailable)".dimmed());
        }
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "sortlines".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Alphabetical line sorting for styled text");
    println!();
    println!("License: MIT");
}
