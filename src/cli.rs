use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "doi-metadata")]
#[command(about = "Format DOI registration metadata and check DOI registration status")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the repository identifier for each repository path (owner/name)
    Uuid(UuidArgs),

    /// Resolve prefixed reference identifiers (doi:, arxiv:, pmid:, url:) to URLs
    Resolve(ResolveArgs),

    /// Check whether DOIs are registered with the DOI resolver
    Check(CheckArgs),

    /// Print resource type, citation and authors of a JSON registration record
    Cite(CiteArgs),
}

#[derive(Parser, Clone)]
pub struct UuidArgs {
    /// Repository paths, e.g. "fabee/efish_locking"
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct ResolveArgs {
    /// Reference identifiers, e.g. "arXiv:2403.12345"
    #[arg(required = true)]
    pub references: Vec<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct CheckArgs {
    /// DOIs to check
    pub dois: Vec<String>,

    /// File with one DOI per line (blank lines and '#' comments are skipped)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Also write results as JSONL to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Concurrent HTTP requests
    #[arg(short, long, default_value = "10")]
    pub concurrency: usize,

    /// Timeout in seconds per request
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// DOI resolver to query
    #[arg(long, default_value = "https://doi.org")]
    pub base_url: String,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct CiteArgs {
    /// JSON registration record
    #[arg(short, long, required = true)]
    pub record: String,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_check(args: &[&str]) -> Result<CheckArgs, clap::Error> {
        let argv = ["doi-metadata", "check"].iter().chain(args.iter()).copied();
        match Cli::try_parse_from(argv)?.command {
            Commands::Check(check) => Ok(check),
            _ => unreachable!("parsed a check command"),
        }
    }

    #[test]
    fn test_check_defaults() {
        let args = parse_check(&["10.1234/x"]).unwrap();
        assert_eq!(args.timeout, 10);
        assert_eq!(args.concurrency, 10);
        assert_eq!(args.base_url, "https://doi.org");
    }

    #[test]
    fn test_check_rejects_zero_timeout() {
        assert!(parse_check(&["--timeout", "0", "10.1234/x"]).is_err());
        assert_eq!(parse_check(&["--timeout", "1", "10.1234/x"]).unwrap().timeout, 1);
    }
}
