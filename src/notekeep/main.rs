use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use notekeep::api::{CmdMessage, ConfigAction, MessageLevel, NotekeepPaths, NotesApi};
use notekeep::config::NotekeepConfig;
use notekeep::error::{NoteError, Result};
use notekeep::index::DisplayNote;
use notekeep::search::SearchField;
use notekeep::store::fs::FileBackend;
use notekeep::store::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "NOTEKEEP_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        if matches!(e, NoteError::CorruptStorage(_)) {
            eprintln!("Run `notekeep reset --yes` to start over with an empty collection.");
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct AppContext {
    api: NotesApi<FileBackend>,
    config: NotekeepConfig,
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    // Reset and config must work even when stored notes cannot be loaded.
    match cli.command {
        Some(Commands::Reset { yes }) => handle_reset(&ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        command => {
            ctx.api.load()?;
            dispatch(&ctx, command)
        }
    }
}

fn dispatch(ctx: &AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Add { title, content }) => handle_add(ctx, &title, &content),
        Some(Commands::List { search, fields }) => handle_list(ctx, search, &fields),
        Some(Commands::Search { term, fields }) => handle_list(ctx, Some(term), &fields),
        Some(Commands::View { selectors }) => handle_view(ctx, &selectors),
        Some(Commands::Edit {
            selector,
            title,
            content,
        }) => handle_edit(ctx, &selector, &title, &content),
        Some(Commands::Delete { selectors }) => handle_delete(ctx, &selectors),
        Some(Commands::Reset { yes }) => handle_reset(ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        None => handle_list(ctx, None, &[]),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "notekeep", "notekeep")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NoteError::Config("Could not determine a data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    let config = NotekeepConfig::load(&data_dir)?;
    let store = FileStore::open(&data_dir).with_config(&config)?;
    let api = NotesApi::new(store, NotekeepPaths { data_dir });
    Ok(AppContext { api, config })
}

fn handle_add(ctx: &AppContext, title: &str, content: &str) -> Result<()> {
    let result = ctx.api.create_note(title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, fields: &[String]) -> Result<()> {
    let fields = parse_fields(ctx, fields)?;
    let result = ctx.api.list_notes(search.as_deref(), &fields)?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.view_notes(selectors)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &AppContext, selector: &str, title: &str, content: &str) -> Result<()> {
    let result = ctx.api.update_note(selector, title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.delete_notes(selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &AppContext, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "{}",
            "This discards every stored note. Re-run with --yes to confirm.".yellow()
        );
        return Ok(());
    }
    let result = ctx.api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in NotekeepConfig::keys() {
                if let Ok(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_fields(ctx: &AppContext, fields: &[String]) -> Result<Vec<SearchField>> {
    if fields.is_empty() {
        return Ok(ctx.config.search_fields.clone());
    }
    fields.iter().map(|f| f.parse()).collect()
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

fn print_full_notes(notes: &[DisplayNote]) {
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", dn.index.to_string().yellow(), dn.note.title.bold());
        println!(
            "{}",
            format!("{} {}  ({})", dn.note.created_date, dn.note.created_time, dn.note.id)
                .dimmed()
        );
        println!("--------------------------------");
        println!("{}", dn.note.content);
    }
}

const LINE_WIDTH: usize = 100;
const STAMP_WIDTH: usize = 22;

fn print_notes(notes: &[DisplayNote]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for dn in notes {
        let idx_str = format!("{}. ", dn.index);
        let stamp = format!(
            "{:>width$}",
            format!("{} {}", dn.note.created_date, dn.note.created_time),
            width = STAMP_WIDTH
        );

        let preview: String = dn
            .note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = format!("{} {}", dn.note.title, preview);

        let fixed_width = 4 + idx_str.width() + 2 + STAMP_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let shown = truncate_to_width(&line, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "    {}{}{}  {}",
            idx_str.yellow(),
            shown,
            " ".repeat(padding),
            stamp.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
