//! Implementation of the `hunkrev resolve` command.

use super::write_json;
use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::error::Result;
use crate::resolve::{GitCli, Request, ResolveResult, resolve};
use std::path::Path;

/// Execute the `hunkrev resolve` command.
///
/// Only argument and config problems fail the command; git failures end
/// up in the printed result's `error` field.
pub fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let result = resolve_in(&args.repo, &args.refs)?;
    write_json(std::io::stdout().lock(), &result, false)
}

/// Resolve `refs` in the repository at `repo`, honouring its config file.
pub fn resolve_in(repo: &Path, refs: &[String]) -> Result<ResolveResult> {
    let request = Request::from_refs(refs)?;
    let config = Config::discover(repo)?;
    Ok(resolve(&GitCli::new(repo), &request, &config))
}
