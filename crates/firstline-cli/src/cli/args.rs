use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true, default_value = "")]
    pub query: String,
    /// Keep at most this many ranked results.
    #[arg(long, value_parser = parse_limit)]
    pub limit: Option<usize>,
    /// Emit per-hit tier and exactness diagnostics.
    #[arg(long, default_value_t = false)]
    pub detailed: bool,
}

#[derive(Debug, Args)]
pub struct TopicIdArg {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct WebArgs {
    /// Bind host; falls back to FIRSTLINE_HOST, then 127.0.0.1.
    #[arg(long)]
    pub host: Option<String>,
    /// Bind port; falls back to FIRSTLINE_PORT, then 8093.
    #[arg(long)]
    pub port: Option<u16>,
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("invalid --limit value '{raw}': expected integer >= 1"))?;
    if value == 0 {
        return Err("--limit must be at least 1".to_string());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::parse_limit;

    #[test]
    fn limit_rejects_zero_and_non_numbers() {
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("many").is_err());
        assert_eq!(parse_limit("3"), Ok(3));
    }
}
