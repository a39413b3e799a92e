use clap::{Parser, Subcommand};

mod args;

pub use args::{SearchArgs, TopicIdArg, WebArgs};

#[derive(Debug, Parser)]
#[command(name = "firstline")]
#[command(about = "Emergency first-aid guidance search", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the knowledge base; an empty query lists every topic.
    Search(SearchArgs),
    /// List all first-aid topics in declaration order.
    Topics,
    /// Show one topic by id.
    Show(TopicIdArg),
    /// Serve the JSON API.
    Web(WebArgs),
}
