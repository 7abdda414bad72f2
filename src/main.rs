//! Command-line front end: capture windows/monitors to PNG and drive
//! synthetic pointer input from scripts.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use royale_capture::{
    capture_monitor, capture_window, ensure_dpi_awareness, find_window, list_windows,
    MatchOptions, Mouse,
};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("royale_capture=info")),
        )
        .init();
}

fn build_cli() -> Command {
    Command::new("royale-capture")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Capture frames from a game window or monitor and inject pointer input")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List visible windows (handle + title)")
                .arg(
                    Arg::new("contains")
                        .long("contains")
                        .help("Only show titles containing this substring (case-insensitive)"),
                ),
        )
        .subcommand(
            Command::new("capture")
                .about("Capture a window or monitor to a PNG")
                .arg(
                    Arg::new("window-title")
                        .long("window-title")
                        .help("Capture the first window whose title contains this"),
                )
                .arg(
                    Arg::new("monitor")
                        .long("monitor")
                        .value_parser(clap::value_parser!(usize))
                        .help("Capture an entire monitor (0 = all monitors, 1..N = individual)"),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["window-title", "monitor"])
                        .required(true),
                )
                .arg(
                    Arg::new("exact")
                        .long("exact")
                        .action(ArgAction::SetTrue)
                        .help("Require the whole title to match, not a substring"),
                )
                .arg(
                    Arg::new("include-borders")
                        .long("include-borders")
                        .action(ArgAction::SetTrue)
                        .help("Capture the full window frame instead of the client area"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Output PNG path (default: capture_<timestamp>.png)"),
                ),
        )
        .subcommand(
            Command::new("move")
                .about("Move the pointer to screen pixel (x, y)")
                .allow_negative_numbers(true)
                .arg(Arg::new("x").required(true).value_parser(clap::value_parser!(i32)))
                .arg(Arg::new("y").required(true).value_parser(clap::value_parser!(i32))),
        )
        .subcommand(
            Command::new("click")
                .about("Move to (x, y) and left-click")
                .allow_negative_numbers(true)
                .arg(Arg::new("x").required(true).value_parser(clap::value_parser!(i32)))
                .arg(Arg::new("y").required(true).value_parser(clap::value_parser!(i32)))
                .arg(
                    Arg::new("hold-ms")
                        .long("hold-ms")
                        .default_value("50")
                        .value_parser(clap::value_parser!(u64))
                        .help("How long to hold the button down"),
                ),
        )
        .subcommand(
            Command::new("drag")
                .about("Drag from (x1, y1) to (x2, y2) with the left button")
                .allow_negative_numbers(true)
                .arg(Arg::new("x1").required(true).value_parser(clap::value_parser!(i32)))
                .arg(Arg::new("y1").required(true).value_parser(clap::value_parser!(i32)))
                .arg(Arg::new("x2").required(true).value_parser(clap::value_parser!(i32)))
                .arg(Arg::new("y2").required(true).value_parser(clap::value_parser!(i32)))
                .arg(
                    Arg::new("duration-ms")
                        .long("duration-ms")
                        .default_value("500")
                        .value_parser(clap::value_parser!(u64))
                        .help("Total drag duration"),
                ),
        )
}

/// If `path` exists, append an incrementing suffix before the extension
/// (`capture.png` -> `capture1.png` -> `capture2.png` ...).
fn resolve_unique_path(path: PathBuf) -> PathBuf {
    if !path.exists() {
        return path;
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let parent = path.parent().unwrap_or(Path::new("")).to_path_buf();

    let mut idx = 1;
    loop {
        let name = if extension.is_empty() {
            format!("{stem}{idx}")
        } else {
            format!("{stem}{idx}.{extension}")
        };
        let candidate = parent.join(name);
        if !candidate.exists() {
            return candidate;
        }
        idx += 1;
    }
}

fn default_output_name() -> PathBuf {
    PathBuf::from(format!(
        "capture_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn cmd_list(matches: &ArgMatches) -> Result<()> {
    let filter = matches
        .get_one::<String>("contains")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();

    for entry in list_windows()? {
        if !filter.is_empty() && !entry.title.to_lowercase().contains(&filter) {
            continue;
        }
        println!("{}\t{}", entry.handle, entry.title);
    }
    Ok(())
}

fn cmd_capture(matches: &ArgMatches) -> Result<()> {
    let out = matches
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(default_output_name);
    let out = resolve_unique_path(out);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    if let Some(title) = matches.get_one::<String>("window-title") {
        let options = MatchOptions {
            exact: matches.get_flag("exact"),
            ..Default::default()
        };
        let handle = find_window(title, options)?
            .ok_or_else(|| anyhow!("could not find a visible window matching {title:?}"))?;
        let client_area = !matches.get_flag("include-borders");
        let buffer = capture_window(handle, client_area)?;
        buffer
            .into_image()
            .save(&out)
            .with_context(|| format!("writing {}", out.display()))?;
        println!("Saved {} from window {handle}", out.display());
    } else {
        let index = *matches
            .get_one::<usize>("monitor")
            .expect("clap group guarantees one source");
        let buffer = capture_monitor(index)?;
        buffer
            .into_image()
            .save(&out)
            .with_context(|| format!("writing {}", out.display()))?;
        println!("Saved {} from monitor {index}", out.display());
    }
    Ok(())
}

fn cmd_move(matches: &ArgMatches) -> Result<()> {
    let (x, y) = coords(matches, "x", "y");
    Mouse::new()?.move_to(x, y)?;
    println!("Moved pointer to ({x}, {y})");
    Ok(())
}

fn cmd_click(matches: &ArgMatches) -> Result<()> {
    let (x, y) = coords(matches, "x", "y");
    let hold = Duration::from_millis(*matches.get_one::<u64>("hold-ms").expect("has default"));
    Mouse::new()?.click_at(x, y, hold)?;
    println!("Clicked at ({x}, {y})");
    Ok(())
}

fn cmd_drag(matches: &ArgMatches) -> Result<()> {
    let start = coords(matches, "x1", "y1");
    let end = coords(matches, "x2", "y2");
    let duration =
        Duration::from_millis(*matches.get_one::<u64>("duration-ms").expect("has default"));
    Mouse::new()?.drag(start, end, duration)?;
    println!(
        "Dragged ({}, {}) -> ({}, {})",
        start.0, start.1, end.0, end.1
    );
    Ok(())
}

fn coords(matches: &ArgMatches, x_name: &str, y_name: &str) -> (i32, i32) {
    (
        *matches.get_one::<i32>(x_name).expect("required"),
        *matches.get_one::<i32>(y_name).expect("required"),
    )
}

fn main() -> Result<()> {
    init_logging();

    // Must happen before the first geometry or capture query, or rects come
    // back in scaled logical coordinates under display scaling.
    ensure_dpi_awareness();

    let matches = build_cli().get_matches();
    match matches.subcommand() {
        Some(("list", m)) => cmd_list(m),
        Some(("capture", m)) => cmd_capture(m),
        Some(("move", m)) => cmd_move(m),
        Some(("click", m)) => cmd_click(m),
        Some(("drag", m)) => cmd_drag(m),
        _ => unreachable!("subcommand required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_unique_path_passes_through_when_free() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.png");
        assert_eq!(resolve_unique_path(path.clone()), path);
    }

    #[test]
    fn test_unique_path_appends_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.png");
        std::fs::write(&path, b"x").unwrap();
        assert_eq!(
            resolve_unique_path(path.clone()),
            dir.path().join("capture1.png")
        );

        std::fs::write(dir.path().join("capture1.png"), b"x").unwrap();
        assert_eq!(
            resolve_unique_path(path),
            dir.path().join("capture2.png")
        );
    }

    #[test]
    fn test_unique_path_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame");
        std::fs::write(&path, b"x").unwrap();
        assert_eq!(resolve_unique_path(path), dir.path().join("frame1"));
    }
}
