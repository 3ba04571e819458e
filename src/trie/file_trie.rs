use super::PrefixTrie;
use log::{debug, info, warn};
use std::{
    io,
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
};
use tokio::fs;

/// Names of the regular files in one directory, indexed for prefix lookup.
pub struct FileTrie {
    trie: PrefixTrie,
    directory: PathBuf,
    skipped: usize,
}

impl Deref for FileTrie {
    type Target = PrefixTrie;

    fn deref(&self) -> &Self::Target {
        &self.trie
    }
}

impl DerefMut for FileTrie {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.trie
    }
}

impl FileTrie {
    /// Indexes every regular file directly inside `directory`.
    ///
    /// Directories, symlinks and other special entries are ignored. Files whose names are
    /// not valid UTF-8 or fall outside the 7-bit alphabet are skipped and counted.
    pub async fn scan(directory: impl AsRef<Path>) -> io::Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        let mut entries = fs::read_dir(&directory).await?;

        let mut file_trie = Self::empty(directory);
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                warn!("skip {:?}: name is not valid UTF-8", entry.path());
                file_trie.skipped += 1;
                continue;
            };

            match file_trie.trie.insert(name) {
                Ok(_) => debug!("indexed {name:?}"),
                Err(e) => {
                    warn!("skip {name:?}: {e}");
                    file_trie.skipped += 1;
                }
            }
        }

        info!(
            "indexed {} files in {} ({} skipped)",
            file_trie.len(),
            file_trie.directory.display(),
            file_trie.skipped
        );

        Ok(file_trie)
    }

    pub fn empty(directory: impl Into<PathBuf>) -> Self {
        FileTrie {
            trie: PrefixTrie::new(),
            directory: directory.into(),
            skipped: 0,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Regular files left out of the index by the scan.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, File};

    #[tokio::test]
    async fn it_work_scan_regular_files_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["notes.md", "main.rs", "makefile"] {
            File::create(dir.path().join(name)).expect("create file");
        }
        create_dir(dir.path().join("manuals")).expect("create dir");

        let trie = FileTrie::scan(dir.path()).await.expect("scan");

        assert_eq!(trie.directory(), dir.path());
        assert_eq!(trie.find_with_prefix("ma"), ["main.rs", "makefile"]);
        assert_eq!(trie.find_with_prefix(""), ["main.rs", "makefile", "notes.md"]);
        assert_eq!(trie.skipped(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn it_work_scan_skips_symlinks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let real = dir.path().join("real");
        File::create(&real).expect("create file");
        std::os::unix::fs::symlink(&real, dir.path().join("link")).expect("symlink");

        let trie = FileTrie::scan(dir.path()).await.expect("scan");

        assert_eq!(trie.find_with_prefix(""), ["real"]);
        assert_eq!(trie.skipped(), 0);
    }

    #[tokio::test]
    async fn it_work_scan_skips_non_ascii_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        File::create(dir.path().join("résumé.txt")).expect("create file");
        File::create(dir.path().join("readme")).expect("create file");

        let trie = FileTrie::scan(dir.path()).await.expect("scan");

        assert_eq!(trie.find_with_prefix("r"), ["readme"]);
        assert_eq!(trie.skipped(), 1);
    }

    #[tokio::test]
    async fn it_work_scan_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing");

        let err = FileTrie::scan(&missing).await.err().expect("scan error");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
