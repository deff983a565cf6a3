use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::BaseDirs;
use feces::api::{CmdMessage, FecesApi, FecesPaths, MessageLevel};
use feces::error::{FecesError, Result};
use feces::model::PloppedFile;
use feces::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    api: FecesApi<FileStore>,
    cwd: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Commands::Init => handle_init(&ctx),
        Commands::Plop { file } => handle_plop(&mut ctx, file),
        Commands::Plunge { id } => handle_plunge(&mut ctx, id),
        Commands::Pie => handle_pie(&ctx),
        Commands::Compost { duration, yes } => handle_compost(&mut ctx, duration, yes),
    }
}

fn init_context() -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let paths = FecesPaths::new(resolve_root()?);
    let store = FileStore::new(paths.index_file());
    let api = FecesApi::new(store, paths);

    Ok(AppContext { api, cwd })
}

fn resolve_root() -> Result<PathBuf> {
    if let Some(root) = std::env::var_os("FECES_HOME") {
        return Ok(PathBuf::from(root));
    }
    let dirs = BaseDirs::new().ok_or(FecesError::NoHomeDir)?;
    Ok(dirs.home_dir().join(".feces"))
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_plop(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.plop(&ctx.cwd, &file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_plunge(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.plunge(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_pie(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.pie()?;
    print_records(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_compost(ctx: &mut AppContext, duration: String, yes: bool) -> Result<()> {
    let result = ctx.api.compost(&duration, |eligible| {
        println!(
            "{}",
            format!("Composting files older than {}...", duration).yellow()
        );
        println!(
            "{}",
            format!(
                "The following files will be composted ({} files):",
                eligible.len()
            )
            .yellow()
        );
        print_records(eligible);
        if yes {
            return true;
        }
        confirm_prompt("Are you sure you want to continue? [y/N] ")
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm_prompt(prompt: &str) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim(), "y" | "Y")
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const ID_HEADER: &str = "ID";
const PATH_HEADER: &str = "Original Path";
const TIME_HEADER: &str = "Plopped";

fn print_records(records: &[PloppedFile]) {
    if records.is_empty() {
        println!("{}", "No plopped files.".yellow());
        return;
    }

    let rows: Vec<(String, String, String)> = records
        .iter()
        .map(|f| {
            (
                f.id.clone(),
                f.record.original_path.display().to_string(),
                format_time_ago(f.record.plopped_at()),
            )
        })
        .collect();

    let id_width = column_width(ID_HEADER, rows.iter().map(|r| r.0.as_str()));
    let path_width = column_width(PATH_HEADER, rows.iter().map(|r| r.1.as_str()));
    let time_width = column_width(TIME_HEADER, rows.iter().map(|r| r.2.as_str()));

    println!(
        "{}{}{}{}{}",
        pad_to_width(ID_HEADER, id_width).bold(),
        " | ".yellow(),
        pad_to_width(PATH_HEADER, path_width).bold(),
        " | ".yellow(),
        TIME_HEADER.bold()
    );
    println!(
        "{}",
        "-".repeat(id_width + path_width + time_width + 6).yellow()
    );

    for (id, path, time) in &rows {
        println!(
            "{}{}{}{}{}",
            pad_to_width(id, id_width).cyan(),
            " | ".yellow(),
            pad_to_width(path, path_width).blue(),
            " | ".yellow(),
            time.dimmed()
        );
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.width())
        .chain([header.width()])
        .max()
        .unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: Option<DateTime<Utc>>) -> String {
    let timestamp = match timestamp {
        Some(t) => t,
        None => return "?".to_string(),
    };
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
