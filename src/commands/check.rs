use anyhow::{bail, Context, Result};
use futures::stream::{self, StreamExt};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::time::{Duration, Instant};

use doi_metadata::common::{create_count_progress_bar, format_elapsed, setup_logging};
use doi_metadata::registry::create_doi_client;
use doi_metadata::{DoiOrgLookup, RegistrationStatus, RegistryChecker, RegistryLookup};

use crate::cli::CheckArgs;

/// One line of `check` output
#[derive(Debug, Clone, Serialize)]
pub struct CheckRecord {
    pub doi: String,
    pub status: &'static str,
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckRecord {
    fn new(doi: String, status: &RegistrationStatus) -> Self {
        Self {
            doi,
            status: status.label(),
            registered: status.is_registered(),
            error: status.error().map(|e| e.to_string()),
        }
    }
}

/// DOIs from the command line followed by those in the input file
fn collect_dois(args: &CheckArgs) -> Result<Vec<String>> {
    let mut dois = args.dois.clone();

    if let Some(path) = &args.input {
        let file = File::open(path).with_context(|| format!("Failed to open: {}", path))?;
        for line_result in BufReader::new(file).lines() {
            let line = line_result.with_context(|| format!("Failed to read: {}", path))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            dois.push(line.to_string());
        }
    }

    Ok(dois)
}

/// Check all DOIs with at most `concurrency` lookups in flight.
/// Results come back in input order.
pub async fn check_all<L: RegistryLookup>(
    checker: &RegistryChecker<L>,
    dois: Vec<String>,
    concurrency: usize,
) -> Vec<CheckRecord> {
    let progress = create_count_progress_bar(dois.len() as u64);

    let mut results: Vec<(usize, CheckRecord)> = stream::iter(dois.into_iter().enumerate())
        .map(|(index, doi)| {
            let progress = progress.clone();
            async move {
                let status = checker.status(&doi).await;
                progress.inc(1);
                (index, CheckRecord::new(doi, &status))
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    progress.finish_with_message("Registration check complete");

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, record)| record).collect()
}

async fn run_check_async(args: CheckArgs) -> Result<Vec<CheckRecord>> {
    setup_logging(&args.log_level)?;
    let start = Instant::now();

    let dois = collect_dois(&args)?;
    if dois.is_empty() {
        bail!("No DOIs to check; pass them as arguments or with --input");
    }
    info!("Checking {} DOIs against {}", dois.len(), args.base_url);

    let client = create_doi_client()?;
    let lookup = DoiOrgLookup::with_client(client, Duration::from_secs(args.timeout))
        .with_base_url(args.base_url.as_str());
    let checker = RegistryChecker::new(lookup);

    let results = check_all(&checker, dois, args.concurrency).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &results {
        writeln!(out, "{}", serde_json::to_string(record)?)?;
    }
    out.flush()?;

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))?;
        let mut writer = BufWriter::new(file);
        for record in &results {
            writeln!(writer, "{}", serde_json::to_string(record)?)?;
        }
        writer.flush()?;
        info!("Wrote {} results to: {}", results.len(), path);
    }

    let registered = results.iter().filter(|r| r.registered).count();
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    info!(
        "Registered: {} | not registered: {} | lookup failed: {} ({})",
        registered,
        results.len() - registered - failed,
        failed,
        format_elapsed(start.elapsed())
    );

    Ok(results)
}

pub fn run_check(args: CheckArgs) -> Result<Vec<CheckRecord>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_check_async(args))
}
