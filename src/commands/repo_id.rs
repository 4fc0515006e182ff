use anyhow::Result;
use log::debug;

use doi_metadata::common::setup_logging;
use doi_metadata::repo_path_to_uuid;

use crate::cli::UuidArgs;

pub fn run_uuid(args: UuidArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    for path in &args.paths {
        let id = repo_path_to_uuid(path);
        debug!("Repository {} -> {}", path, id);
        println!("{}  {}", id, path);
    }

    Ok(())
}
