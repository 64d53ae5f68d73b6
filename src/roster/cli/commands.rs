use super::print::{print_field_errors, print_form, print_messages, print_view};
use super::setup::{split_line, Cli, Commands, SessionCommand, SessionLine};
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use roster::api::RosterApi;
use roster::commands::{CmdMessage, CmdResult};
use roster::config::{resolve_config_dir, RosterConfig, KEYS};
use roster::error::{Result, RosterError};
use roster::store::memory::InMemoryStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

struct AppContext {
    api: RosterApi<InMemoryStore>,
    verbose: bool,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = resolve_config_dir(cli.config_dir.clone())?;

    match &cli.command {
        Some(Commands::Config { key, value }) => {
            handle_config(&config_dir, key.as_deref(), value.as_deref())
        }
        Some(Commands::Session) | None => {
            let mut ctx = init_context(&cli, &config_dir)?;
            run_session(&mut ctx)
        }
    }
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let mut config = RosterConfig::load(config_dir)?;
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size.get();
    }
    let api = RosterApi::from_config(InMemoryStore::new(), &config)?;
    Ok(AppContext {
        api,
        verbose: cli.verbose,
    })
}

fn run_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    print_view(&ctx.api.view());

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{} ", "roster>".bold());
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let words = match split_line(trimmed) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                print!("{}", e);
                continue;
            }
            Err(e) => {
                eprint!("{}", e);
                continue;
            }
        };

        if let Flow::Quit = dispatch(ctx, parsed.command)? {
            break;
        }
    }
    Ok(())
}

fn dispatch(ctx: &mut AppContext, command: SessionCommand) -> Result<Flow> {
    match command {
        SessionCommand::Submit(args) => handle_submit(ctx, args.into()),
        SessionCommand::Edit { id } => {
            let result = ctx.api.request_edit(id);
            finish(ctx, &result);
            if !result.listed.is_empty() {
                print_form(&ctx.api.view());
            }
        }
        SessionCommand::Cancel => {
            let result = ctx.api.cancel_edit();
            print_messages(&result.messages, ctx.verbose);
        }
        SessionCommand::Delete { id } => {
            let result = ctx.api.request_delete(id);
            finish(ctx, &result);
        }
        SessionCommand::Next => {
            let result = ctx.api.request_next_page();
            finish(ctx, &result);
        }
        SessionCommand::Prev => {
            let result = ctx.api.request_prev_page();
            finish(ctx, &result);
        }
        SessionCommand::Show { json } => {
            let view = ctx.api.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
        }
        SessionCommand::Form => print_form(&ctx.api.view()),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_submit(ctx: &mut AppContext, input: roster::form::FormInput) {
    match ctx.api.submit_form(input) {
        Ok(result) => finish(ctx, &result),
        Err(RosterError::Validation(errors)) => {
            let label = ctx.api.form().submit_label();
            print_messages(
                &[CmdMessage::error(format!("{} failed:", label))],
                ctx.verbose,
            );
            print_field_errors(errors.errors());
        }
        Err(e) => print_messages(&[CmdMessage::error(e.to_string())], ctx.verbose),
    }
}

/// Report what happened, then redraw the page.
fn finish(ctx: &AppContext, result: &CmdResult) {
    print_messages(&result.messages, ctx.verbose);
    print_view(&ctx.api.view());
}

fn handle_config(config_dir: &Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = RosterConfig::load(config_dir)?;

    match (key, value) {
        (None, _) => {
            for key in KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, config.get(key)?),
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(config_dir)?;
            print_messages(
                &[CmdMessage::success(format!("Set {} = {}", key, value.trim()))],
                false,
            );
        }
    }
    Ok(())
}
