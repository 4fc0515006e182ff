use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::BufReader;

use doi_metadata::common::setup_logging;
use doi_metadata::RegistrationRecord;

use crate::cli::CiteArgs;

pub fn load_record(path: &str) -> Result<RegistrationRecord> {
    let file = File::open(path).with_context(|| format!("Failed to open record: {}", path))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse registration record: {}", path))
}

pub fn run_cite(args: CiteArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let record = load_record(&args.record)?;
    info!("Loaded record {} with {} authors", args.record, record.authors.len());

    if record.doi.is_empty() {
        warn!("Record has no DOI; citation will end without one");
    }

    println!("Type: {}", record.get_type());
    println!("Citation: {}", record.citation());
    println!("Authors:");
    for author in &record.authors {
        match author.valid_id() {
            Some(orcid) => println!("  {} [{}{}]", author.render_author(), orcid.uri, orcid.id),
            None => println!("  {}", author.render_author()),
        }
    }

    for reference in &record.references {
        let url = reference.get_url();
        if url.is_empty() {
            warn!("Skipping unresolvable reference {:?}", reference.id);
        } else {
            println!("Reference: {} {}", reference.reftype, url);
        }
    }

    Ok(())
}
