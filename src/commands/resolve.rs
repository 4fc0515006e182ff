use anyhow::{bail, Result};
use log::warn;

use doi_metadata::common::setup_logging;
use doi_metadata::Reference;

use crate::cli::ResolveArgs;

pub fn run_resolve(args: ResolveArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let mut unresolved = 0;
    for id in &args.references {
        let url = Reference::new(id.as_str()).get_url();
        if url.is_empty() {
            warn!("Cannot resolve reference {:?}: expected <doi|arxiv|pmid|url>:<value>", id);
            unresolved += 1;
            continue;
        }
        println!("{}", url);
    }

    if unresolved > 0 {
        bail!("{} of {} references could not be resolved", unresolved, args.references.len());
    }

    Ok(())
}
