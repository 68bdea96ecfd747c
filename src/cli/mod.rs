//! Terminal interface - the capture form, products table, summary, and export.
//!
//! The interface is a prompt loop over any `BufRead`/`Write` pair, so the whole
//! flow can be driven from tests with in-memory buffers. All state lives in
//! the `Session`; this layer only prompts, prints, and forwards actions.

/// Session command parsing
pub mod commands;
/// Prompting helpers
pub mod prompt;

use crate::{
    config::{AppConfig, database},
    core::{
        form::ProductForm,
        lookup::{KnownProduct, KnownProducts},
        report::{format_currency, render_summary, render_table},
        session::{Notice, NoticeLevel, Session},
    },
    errors::Result,
};
use commands::{Command, joined, parse_line};
use prompt::Prompter;
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};
use tracing::{debug, error, info};

/// Typed at any form prompt to abandon the form
pub const CANCEL_WORD: &str = ":cancel";

const BANNER: &str = "Inventory Buddy - manage your products, costs, and profits in one place.\n\
Type `help` for the list of commands.";

/// Loads known products from config.toml and, if a URL is given, from the external catalog.
///
/// Failures never abort startup: they are returned as error notices and the
/// affected source contributes nothing.
pub async fn load_known_products(
    config: &AppConfig,
    database_url: Option<&str>,
) -> (KnownProducts, Vec<Notice>) {
    let mut notices = Vec::new();
    let mut known = KnownProducts::from_config(&config.known_products).unwrap_or_else(|e| {
        error!("Invalid known product in config: {}", e);
        notices.push(Notice::error(format!("Ignoring known products from config: {e}")));
        KnownProducts::default()
    });

    if let Some(url) = database_url {
        let fetched = match database::create_connection(url).await {
            Ok(db) => KnownProducts::fetch(&db).await,
            Err(e) => Err(e),
        };
        match fetched {
            Ok(remote) => known.merge(remote),
            Err(e) => {
                error!("Failed to load known products: {}", e);
                notices.push(Notice::error(format!("Could not load known products: {e}")));
            }
        }
    }

    info!("{} known products available", known.len());
    (known, notices)
}

/// How a form-filling round ended.
enum FormOutcome {
    Submitted(ProductForm),
    Cancelled,
    EndOfInput,
}

fn write_notice<W: Write>(out: &mut W, notice: &Notice) -> Result<()> {
    writeln!(out, "{notice}")?;
    Ok(())
}

fn write_overview<W: Write>(out: &mut W, session: &Session, config: &AppConfig) -> Result<()> {
    write!(out, "{}", render_summary(&session.summary(), &config.currency))?;
    writeln!(out)?;
    write!(
        out,
        "{}",
        render_table(session.catalog(), session.quantity_mode(), &config.currency)
    )?;
    Ok(())
}

fn write_suggestions<W: Write>(
    out: &mut W,
    suggestions: &[KnownProduct],
    config: &AppConfig,
) -> Result<()> {
    if suggestions.is_empty() {
        writeln!(out, "No matching known products.")?;
        return Ok(());
    }
    for (i, known) in suggestions.iter().enumerate() {
        writeln!(
            out,
            "  #{} {} (cost {}, price {})",
            i + 1,
            known.name,
            format_currency(known.cost, &config.currency),
            format_currency(known.price, &config.currency)
        )?;
    }
    Ok(())
}

/// Prompts for the four form fields, starting from the session's current form.
fn fill_form<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
    config: &AppConfig,
) -> Result<FormOutcome> {
    let mut form = session.form().clone();
    let mut suggestions: Vec<KnownProduct> = Vec::new();

    loop {
        let Some(answer) = prompter.ask("Product name (?search, #pick)", &form.name)? else {
            return Ok(FormOutcome::EndOfInput);
        };
        if answer == CANCEL_WORD {
            return Ok(FormOutcome::Cancelled);
        }
        if let Some(partial) = answer.strip_prefix('?') {
            suggestions = session
                .known_products()
                .search(partial)
                .into_iter()
                .cloned()
                .collect();
            write_suggestions(prompter.out(), &suggestions, config)?;
            continue;
        }
        if let Some(pick) = answer.strip_prefix('#') {
            let chosen = pick
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| suggestions.get(i));
            let Some(known) = chosen.cloned() else {
                writeln!(prompter.out(), "Pick a number from the last `?` search.")?;
                continue;
            };
            let notice = session.prefill(&known);
            write_notice(prompter.out(), &notice)?;
            form.name.clone_from(&session.form().name);
            form.cost.clone_from(&session.form().cost);
            break;
        }
        form.name = answer;
        break;
    }

    if form.cost.trim().is_empty() {
        if let Some(cost) = session.suggest_cost(&form.name) {
            debug!("Suggesting cost {} for {}", cost, form.name);
            form.cost = cost.to_string();
        }
    }

    let quantity_label = session.quantity_mode().label();
    for (label, field) in [
        ("Unit cost", &mut form.cost),
        ("Unit price", &mut form.price),
        (quantity_label, &mut form.quantity),
    ] {
        let Some(answer) = prompter.ask(label, field)? else {
            return Ok(FormOutcome::EndOfInput);
        };
        if answer == CANCEL_WORD {
            return Ok(FormOutcome::Cancelled);
        }
        *field = answer;
    }

    Ok(FormOutcome::Submitted(form))
}

/// Runs the form and hands the result to the session.
fn run_form<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
    config: &AppConfig,
) -> Result<bool> {
    match fill_form(session, prompter, config)? {
        FormOutcome::Submitted(form) => {
            let notice = session.submit(form);
            write_notice(prompter.out(), &notice)?;
            if notice.level == NoticeLevel::Success {
                writeln!(prompter.out())?;
                write_overview(prompter.out(), session, config)?;
            }
            Ok(true)
        }
        FormOutcome::Cancelled => {
            let notice = if session.is_editing() {
                session.cancel_edit()
            } else {
                Notice::info("Form discarded")
            };
            write_notice(prompter.out(), &notice)?;
            Ok(true)
        }
        FormOutcome::EndOfInput => Ok(false),
    }
}

/// Runs the interactive session until `quit` or end of input.
///
/// # Errors
/// Returns an error only if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    config: &AppConfig,
    input: R,
    output: W,
) -> Result<()> {
    let mut prompter = Prompter::new(input, output);
    writeln!(prompter.out(), "{BANNER}")?;

    loop {
        let prompt = if session.is_editing() { "edit> " } else { "> " };
        write!(prompter.out(), "{prompt}")?;
        prompter.out().flush()?;

        let Some(line) = prompter.read_line()? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                write!(prompter.out(), "{e}")?;
                continue;
            }
        };
        debug!("Session command: {:?}", command);

        let keep_going = match command {
            Command::Add => {
                if session.is_editing() {
                    write_notice(
                        prompter.out(),
                        &Notice::info("Finish or `cancel` the current edit first"),
                    )?;
                    true
                } else {
                    run_form(session, &mut prompter, config)?
                }
            }
            Command::Edit { row } => {
                let notice = session.begin_edit(row);
                write_notice(prompter.out(), &notice)?;
                if notice.is_error() {
                    true
                } else {
                    run_form(session, &mut prompter, config)?
                }
            }
            Command::Cancel => {
                let notice = session.cancel_edit();
                write_notice(prompter.out(), &notice)?;
                true
            }
            Command::List => {
                write!(
                    prompter.out(),
                    "{}",
                    render_table(session.catalog(), session.quantity_mode(), &config.currency)
                )?;
                true
            }
            Command::Summary => {
                write!(
                    prompter.out(),
                    "{}",
                    render_summary(&session.summary(), &config.currency)
                )?;
                true
            }
            Command::Products { partial } => {
                let partial = joined(&partial).unwrap_or_default();
                let found: Vec<KnownProduct> = session
                    .known_products()
                    .search(&partial)
                    .into_iter()
                    .cloned()
                    .collect();
                write_suggestions(prompter.out(), &found, config)?;
                true
            }
            Command::Export { path } => {
                let path = joined(&path)
                    .map_or_else(|| config.export.default_path.clone(), PathBuf::from);
                let notice = session.export(&path, &config.export.sheet_name);
                write_notice(prompter.out(), &notice)?;
                true
            }
            Command::Quit => false,
        };

        if !keep_going {
            break;
        }
    }

    writeln!(prompter.out(), "Bye!")?;
    Ok(())
}
