use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::core::report::write_renamed;
use crate::error::RenameError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, RenameRequest, RenameSummary, RenamedFolder};

/// Rename every directory named `request.old_name` under `request.root` to
/// `request.new_name`.
///
/// Traversal is depth-first pre-order. Each directory is listed once and its
/// subdirectories are visited in name order; a matching child is renamed
/// before the walk descends into it, so its contents are visited under the
/// new path. One report line is written to `out` per completed rename.
///
/// The first failing listing or rename aborts the walk. Renames that already
/// happened are kept.
pub async fn rename_folders<F: FileSystem, W: Write + Send>(
    fs: &F,
    request: &RenameRequest,
    out: &mut W,
) -> anyhow::Result<RenameSummary> {
    let root = &request.root;
    let root_kind = fs
        .metadata_kind(root)
        .await
        .with_context(|| format!("failed to inspect {}", root.display()))?;
    match root_kind {
        None => return Err(RenameError::RootNotFound { path: root.clone() }.into()),
        // Listing a symlinked root follows the link, like any other path argument.
        Some(EntryKind::Directory | EntryKind::Symlink) => {}
        Some(_) => return Err(RenameError::RootNotDirectory { path: root.clone() }.into()),
    }

    info!(
        root = %root.display(),
        old = %request.old_name,
        new = %request.new_name,
        "renaming folders"
    );

    let mut summary = RenameSummary::default();
    if request.old_name == request.new_name {
        info!("old and new names are identical, nothing to rename");
        return Ok(summary);
    }

    rename_in_dir(fs, root, request, out, &mut summary).await?;

    info!(
        renamed = summary.renamed.len(),
        dirs_visited = summary.dirs_visited,
        "finished renaming folders"
    );
    Ok(summary)
}

async fn rename_in_dir<F: FileSystem, W: Write + Send>(
    fs: &F,
    dir: &Path,
    request: &RenameRequest,
    out: &mut W,
    summary: &mut RenameSummary,
) -> anyhow::Result<()> {
    debug!(dir = %dir.display(), "visiting directory");

    // Snapshot the children before touching anything under `dir`.
    let entries = fs
        .read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    summary.dirs_visited += 1;

    let mut subdirs: Vec<FsEntry> = entries.into_iter().filter(FsEntry::is_dir).collect();
    subdirs.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in subdirs {
        let next = if entry.name.as_os_str() == request.old_name.as_os_str() {
            let to = dir.join(request.new_name.as_os_str());
            rename_one(fs, entry.path, to, out, summary).await?
        } else {
            entry.path
        };

        Box::pin(rename_in_dir(fs, &next, request, out, summary)).await?;
    }

    Ok(())
}

async fn rename_one<F: FileSystem, W: Write + Send>(
    fs: &F,
    from: PathBuf,
    to: PathBuf,
    out: &mut W,
    summary: &mut RenameSummary,
) -> anyhow::Result<PathBuf> {
    // Never replace or merge into an existing entry, even an empty directory.
    let existing = fs
        .metadata_kind(&to)
        .await
        .with_context(|| format!("failed to inspect {}", to.display()))?;
    if existing.is_some() {
        return Err(RenameError::DestinationExists { from, to }.into());
    }

    fs.rename(&from, &to)
        .await
        .with_context(|| format!("failed to rename {} -> {}", from.display(), to.display()))?;

    info!(from = %from.display(), to = %to.display(), "renamed folder");

    let renamed = RenamedFolder { from, to };
    write_renamed(out, &renamed).context("failed to write rename report")?;
    let next = renamed.to.clone();
    summary.renamed.push(renamed);
    Ok(next)
}
