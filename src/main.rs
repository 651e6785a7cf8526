// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serpkit::{
    highlight, highlight_suggestion, open_links_in_new_tab, HighlightableText, MatchSpan,
    MemoryUrlState, Pager, QueryParamSettingsStore, SearchSettings, StoreConfig, ValueCodec,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands, SettingsAction, StoreArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command, cli.json) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "serpkit=debug" } else { "serpkit=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Pager {
            total,
            current,
            window,
        } => {
            let pager = Pager::new(current, total, window).context("invalid pager position")?;
            if json {
                print_json(&pager)
            } else {
                println!("{}", display::pager_line(&pager));
                Ok(())
            }
        }

        Commands::Highlight {
            value,
            spans,
            new_tab,
        } => {
            let spans = spans
                .iter()
                .map(|s| s.parse::<MatchSpan>())
                .collect::<Result<Vec<_>, _>>()?;
            let mut markup = highlight(&HighlightableText::new(value, spans));
            if new_tab {
                markup = open_links_in_new_tab(&markup);
            }
            print_markup(&markup, json)
        }

        Commands::Suggest { value, input } => {
            let markup = highlight_suggestion(&value, &input)?;
            print_markup(&markup, json)
        }

        Commands::Settings { action } => run_settings(action, json),
    }
}

fn run_settings(action: SettingsAction, json: bool) -> Result<()> {
    match action {
        SettingsAction::Read(args) => {
            let store = open_store(&args)?;
            let settings = store.read()?;
            print_settings(&settings, json)
        }

        SettingsAction::Write { store, sets, reset } => {
            let store = open_store(&store)?;
            let mut settings = if reset {
                SearchSettings::defaults(store.config().default_limit)
            } else {
                store.read()?
            };
            for assignment in &sets {
                let (key, raw) = assignment
                    .split_once('=')
                    .with_context(|| format!("expected KEY=VALUE, got `{}`", assignment))?;
                settings.set(key.trim(), ValueCodec::Plain.decode(raw));
            }
            store.write(&settings)?;
            print_href(store.provider(), json)
        }

        SettingsAction::Sync(args) => {
            let store = open_store(&args)?;
            store.sync_in_store()?;
            print_href(store.provider(), json)
        }
    }
}

fn open_store(args: &StoreArgs) -> Result<QueryParamSettingsStore<MemoryUrlState>> {
    let url = MemoryUrlState::parse(&args.url)
        .with_context(|| format!("`{}` is not an absolute URL", args.url))?;
    let config = StoreConfig {
        namespace: args.namespace.clone(),
        codec: if args.tagged {
            ValueCodec::Tagged
        } else {
            ValueCodec::Plain
        },
        default_limit: args.limit,
    };
    Ok(QueryParamSettingsStore::with_config(url, config))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_markup(markup: &str, json: bool) -> Result<()> {
    if json {
        print_json(&markup)
    } else {
        println!("{}", display::emphasize(markup));
        Ok(())
    }
}

fn print_settings(settings: &SearchSettings, json: bool) -> Result<()> {
    if json {
        print_json(settings)
    } else {
        println!("{}", display::settings_table(settings));
        Ok(())
    }
}

fn print_href(url: &MemoryUrlState, json: bool) -> Result<()> {
    if json {
        print_json(&url.href())
    } else {
        println!("{}", url.href());
        Ok(())
    }
}
