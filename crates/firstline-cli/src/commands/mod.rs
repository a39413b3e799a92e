use std::io::{self, Write};

use anyhow::{Context, Result};

use firstline_core::KnowledgeBase;
use firstline_core::config::{SearchConfig, ServerConfig};

use crate::cli::{Commands, SearchArgs, WebArgs};

mod web;

pub(crate) fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search(args) => run_search(&args),
        Commands::Topics => print_json(&knowledge_base()?.topics()),
        Commands::Show(args) => {
            let kb = knowledge_base()?;
            let topic = kb
                .topic(&args.id)
                .with_context(|| format!("no first-aid topic with id '{}'", args.id))?;
            print_json(&topic)
        }
        Commands::Web(args) => run_web(&args),
    }
}

fn knowledge_base() -> Result<&'static KnowledgeBase> {
    KnowledgeBase::builtin().context("builtin knowledge base failed validation")
}

fn run_search(args: &SearchArgs) -> Result<()> {
    let kb = knowledge_base()?;
    let limit = SearchConfig::from_env()
        .context("invalid search configuration")?
        .effective_limit(args.limit);

    if args.detailed {
        let mut hits = kb.search_detailed(&args.query);
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        return print_json(&hits);
    }

    let mut topics = kb.search(&args.query);
    if let Some(limit) = limit {
        topics.truncate(limit);
    }
    print_json(&topics)
}

fn run_web(args: &WebArgs) -> Result<()> {
    let mut config = ServerConfig::from_env().context("invalid server configuration")?;
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    web::serve(&config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
