use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::debug;

const MARKDOWN_EXTENSION: &str = "md";

/// Non-recursive `*.md` listing; a missing `dir` lists as empty.
pub(super) fn list_markdown_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{dir:?} does not exist. nothing to list.");
            return Ok(vec![]);
        }
        Err(e) => return Err(e).with_context(|| format!("while listing {:?}", dir)),
    };

    let mut files = vec![];
    for entry in entries {
        let path = entry.with_context(|| format!("while listing {:?}", dir))?.path();
        if is_markdown_file(&path) {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

fn is_markdown_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .map_or(true, |name| name.to_string_lossy().starts_with('.'));
    !hidden
        && path.extension().map_or(false, |ext| ext == MARKDOWN_EXTENSION)
        && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_only_visible_markdown_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("b.md"), "").unwrap();
        fs::write(root.join("a.md"), "").unwrap();
        fs::write(root.join(".hidden.md"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join("readme.markdown"), "").unwrap();
        fs::create_dir(root.join("drafts.md")).unwrap();
        fs::write(root.join("drafts.md").join("nested.md"), "").unwrap();

        let files = list_markdown_files(root).unwrap();
        assert_eq!(files, vec![root.join("a.md"), root.join("b.md")]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(list_markdown_files(&dir.path().join("nope"))
            .unwrap()
            .is_empty());
    }
}
