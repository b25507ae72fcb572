use artisthub::loader::{self, CatalogSource, Origin};
use artisthub::report::{self, Page, Summary};
use artisthub::{rank_top, RankedTrack};
use chrono::Utc;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "artisthub")]
#[command(author, version, about = "Render a music artist showcase page with a top songs leaderboard")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Catalog location: a file path or an http(s) URL
    #[arg(long, global = true, default_value = loader::DEFAULT_SOURCE)]
    data: String,

    /// Output file (.html or .json)
    #[arg(short, long, default_value = "site/index.html")]
    output: PathBuf,

    /// Don't prompt to open the page
    #[arg(long)]
    no_open: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a local preview server for the page
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
    },

    /// Print the top songs leaderboard
    Top {
        /// Number of songs to show
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let source = CatalogSource::parse(&args.data);

    // Handle subcommands first
    if let Some(cmd) = args.command {
        match cmd {
            Command::Serve { port } => {
                if let Err(e) = artisthub::serve::start(port, source) {
                    eprintln!("Server error: {}", e);
                    std::process::exit(1);
                }
            }
            Command::Top { count, json } => {
                let loaded = load_with_spinner(&source, args.quiet);
                let ranked = rank_top(&loaded.catalog, count);
                if json {
                    match serde_json::to_string_pretty(&ranked) {
                        Ok(out) => println!("{}", out),
                        Err(e) => {
                            eprintln!("Error serializing leaderboard: {}", e);
                            std::process::exit(1);
                        }
                    }
                } else {
                    print_leaderboard(&ranked);
                }
            }
        }
        return;
    }

    let loaded = load_with_spinner(&source, args.quiet);
    let page = Page::build(&loaded.catalog, Utc::now());

    if !args.quiet {
        let summary = Summary::from_catalog(&loaded.catalog);
        eprintln!("\n\x1b[1mCatalog:\x1b[0m {}", source);
        if loaded.origin == Origin::Fallback {
            eprintln!("  \x1b[33m! Using built-in fallback catalog\x1b[0m");
        }
        eprintln!("  Artists: {}", summary.artists);
        eprintln!("  Tracks:  {}", summary.tracks);
        if summary.artists_without_tracks > 0 {
            eprintln!("  \x1b[90mArtists without tracks: {}\x1b[0m", summary.artists_without_tracks);
        }
        if let Some(ref text) = page.last_updated_text {
            eprintln!("  \x1b[90m{}\x1b[0m", text);
        }
        eprintln!();
        print_leaderboard(&page.top_songs);
    }

    if let Err(e) = report::generate(&args.output, &page) {
        eprintln!("Failed to write page: {}", e);
        std::process::exit(1);
    }
    if !args.quiet {
        eprintln!("\n\x1b[32mPage saved: {}\x1b[0m", args.output.display());
    }

    if !args.no_open && !args.quiet {
        eprint!("\nOpen page in browser? [Y/n] ");
        io::stderr().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_ok() {
            let input = input.trim().to_lowercase();
            if input.is_empty() || input == "y" || input == "yes" {
                if let Err(e) = open::that(&args.output) {
                    eprintln!("Failed to open page: {}", e);
                }
            }
        }
    }
}

fn load_with_spinner(source: &CatalogSource, quiet: bool) -> loader::Loaded {
    if quiet {
        return loader::load(source);
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Loading {}", source));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let loaded = loader::load(source);
    spinner.finish_and_clear();
    loaded
}

/// Leaderboard rows go to stdout so `artisthub top > board.txt` works.
fn print_leaderboard(ranked: &[RankedTrack]) {
    let stdout = io::stdout();
    if let Err(e) = write_leaderboard(&mut stdout.lock(), ranked) {
        log::debug!("failed to print leaderboard: {}", e);
    }
}

fn write_leaderboard<W: Write>(out: &mut W, ranked: &[RankedTrack]) -> io::Result<()> {
    if ranked.is_empty() {
        writeln!(out, "No tracks available yet")?;
        return Ok(());
    }

    writeln!(out, "\x1b[1m{:<4} {:>6}  {:<30} {}\x1b[0m", "#", "SCORE", "TITLE", "ARTIST")?;
    writeln!(out, "{}", "─".repeat(60))?;
    for (i, song) in ranked.iter().enumerate() {
        let color = match i {
            0 => "\x1b[33m",
            1 => "\x1b[37m",
            2 => "\x1b[31m",
            _ => "\x1b[90m",
        };
        writeln!(
            out,
            "{}#{:<3}\x1b[0m {:>6.1}  {:<30} {}",
            color,
            i + 1,
            song.composite_score,
            truncate(&song.track.title, 30),
            song.artist_name
        )?;
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
