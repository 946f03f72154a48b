
use anyhow::Result;
use chrono::{DateTime, Local};
use clap::CommandFactory;
use log::{debug, warn};

use crate::cli::{Cli, Command};
use crate::paths::StorePaths;
use crate::player::{self, PlayerError};
use crate::store::{self, AliasStore, HistoryEntry, HistoryStore};

pub fn run(cli: Cli) -> Result<()> {
    let paths = StorePaths::resolve()?;
    debug!("using alias store at {}", paths.aliases.display());

    if store::first_run(&paths) {
        print_first_run_hints();
    }

    match cli.command {
        Some(Command::Add { alias, url }) => run_add(&paths, &alias, &url)?,
        Some(Command::Play { alias, video }) => run_play(&paths, &alias, video)?,
        Some(Command::List) => run_list(&paths)?,
        Some(Command::Remove { alias }) => run_remove(&paths, &alias)?,
        None => run_bare(&paths)?,
    }

    Ok(())
}

fn run_add(paths: &StorePaths, alias: &str, url: &str) -> Result<()> {
    AliasStore::new(paths).add(alias, url)?;
    println!("Added alias '{alias}' for URL: {url}");
    Ok(())
}

fn run_play(paths: &StorePaths, alias: &str, video: bool) -> Result<()> {
    play_with(paths, alias, video, player::play)
}

/// Playback pipeline: resolve the alias, best-effort history record, then
/// block on the player. The player is injectable so the history-failure path
/// is testable without mpv.
fn play_with<P>(paths: &StorePaths, alias: &str, video: bool, player: P) -> Result<()>
where
    P: FnOnce(&str, bool) -> Result<(), PlayerError>,
{
    let url = AliasStore::new(paths).resolve(alias)?;

    // A broken history file must never block playback.
    if let Err(err) = HistoryStore::new(paths).record(alias, &url, video) {
        warn!("failed to save to history: {err}");
    }

    player(&url, video)?;
    Ok(())
}

fn run_list(paths: &StorePaths) -> Result<()> {
    let recent = HistoryStore::new(paths).recent()?;
    print_recent(&recent);

    let set = AliasStore::new(paths).list_all()?;
    if set.aliases.is_empty() {
        println!("No aliases saved yet.");
        println!("\nAdd one with: tubemark add <alias> <url>");
        return Ok(());
    }

    println!("Saved aliases:");
    for (alias, url) in &set.aliases {
        println!("  {alias} -> {url}");
    }
    Ok(())
}

fn run_remove(paths: &StorePaths, alias: &str) -> Result<()> {
    AliasStore::new(paths).remove(alias)?;
    println!("Removed alias '{alias}'");
    Ok(())
}

fn run_bare(paths: &StorePaths) -> Result<()> {
    let recent = HistoryStore::new(paths).recent()?;
    print_recent(&recent);
    Cli::command().print_help()?;
    Ok(())
}

fn print_recent(recent: &[HistoryEntry]) {
    if recent.is_empty() {
        return;
    }
    println!("Recently played:");
    for (i, entry) in recent.iter().enumerate() {
        println!(
            "  {}. {} ({}) - {}",
            i + 1,
            entry.alias,
            mode_label(entry.video_mode),
            format_played_at(&entry.played_at)
        );
    }
    println!();
}

fn print_first_run_hints() {
    println!("Welcome to tubemark! Quick start:");
    println!("  1. Add a stream:  tubemark add lofi \"https://www.youtube.com/watch?v=...\"");
    println!("  2. Play audio:    tubemark play lofi");
    println!("  3. Play video:    tubemark play -v lofi");
    println!();
    println!("Audio-only is the default (saves bandwidth).");
    println!("Your last 3 plays show up in `tubemark list`.");
    println!();
}

fn mode_label(video: bool) -> &'static str {
    if video { "video" } else { "audio" }
}

fn format_played_at(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
