//! `doclink map`: the javadoc map.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::common::{CommandContext, CommandExecutor, GenerateArgs};
use crate::constants::JAVADOC_MAP_FILE_NAME;
use crate::links::collect_link_set;
use crate::output::{IndexReader, JavadocMap, plain_links};

/// Generate the javadoc map.
///
/// Offline artifacts are read from their javadoc jars; plain links are
/// fetched from `<url>/element-list` or `<url>/package-list`.
#[derive(Args, Debug)]
pub struct MapCommand {
    #[command(flatten)]
    args: GenerateArgs,

    /// Output file, relative to the output directory; `.xml` selects XML
    #[arg(long, default_value = JAVADOC_MAP_FILE_NAME)]
    output_file: PathBuf,
}

impl CommandExecutor for MapCommand {
    async fn execute_with_context(self, context: CommandContext) -> Result<()> {
        if self.args.should_skip(&context.manifest) {
            info!("Skipping javadoc map generation.");
            return Ok(());
        }

        let include_dm = self.args.include_dependency_management(&context.manifest);
        let links = collect_link_set(
            &context.manifest.link_rules(),
            &context.project.link_candidates(include_dm),
        )?;
        let resolution =
            context.resolve_offline(&context.manifest.offline_rules(), include_dm).await?;

        let reader = IndexReader::new()?;
        let mut map = JavadocMap::new();

        for (key, entry) in resolution.map.iter() {
            match reader.read_jar(&entry.artifact.file) {
                Ok(entries) => {
                    let added = map.add_index(&entries, &entry.url, Some(key));
                    debug!("{key}: {added} name(s) from {}", entry.artifact.file.display());
                }
                Err(e) => warn!("{e:#}"),
            }
        }

        let spinner = context.spinner("Fetching package lists...");
        for url in &plain_links(&links, &resolution.map) {
            spinner.set_message(format!("Fetching {url}"));
            match reader.read_url(url).await {
                Ok(entries) => {
                    let added = map.add_index(&entries, url, None);
                    debug!("{url}: {added} name(s)");
                }
                Err(e) => warn!("{e:#}"),
            }
        }
        spinner.finish_and_clear();

        let path = self.args.output_directory(&context.manifest).join(&self.output_file);
        map.write(&path)?;

        context.report(format!("Wrote {} ({} entries)", path.display(), map.len()));
        Ok(())
    }
}
