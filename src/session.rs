//! Line-oriented prompt loop around a [`FileTrie`].

use crate::FileTrie;
use log::debug;
use std::{io, path::PathBuf};
use tokio::{
    fs,
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
};

/// Cuts `line` at its first carriage return or line feed.
pub fn scrub_line(line: &str) -> &str {
    match line.find(['\r', '\n']) {
        Some(end) => &line[..end],
        None => line,
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Asks for a directory until an existing one is named.
    pub async fn prompt_directory(&mut self) -> io::Result<PathBuf> {
        loop {
            self.prompt("\nEnter a valid directory path: ").await?;

            let Some(line) = self.read_line().await? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a directory was given",
                ));
            };

            let path = PathBuf::from(line);
            match fs::metadata(&path).await {
                Ok(meta) if meta.is_dir() => return Ok(path),
                Ok(_) => debug!("{} is not a directory", path.display()),
                Err(e) => debug!("{}: {e}", path.display()),
            }
        }
    }

    /// Answers queries until an empty line or end of input.
    pub async fn run(&mut self, trie: &FileTrie) -> io::Result<()> {
        loop {
            self.prompt("\n> ").await?;

            match self.read_line().await? {
                Some(query) if !query.is_empty() => self.answer(trie, &query).await?,
                _ => break,
            }
        }

        self.prompt("Goodbye!\n").await
    }

    /// Writes the files matching `query`, or a no-match notice.
    pub async fn answer(&mut self, trie: &FileTrie, query: &str) -> io::Result<()> {
        let directory = trie.directory().display().to_string();
        self.write(&format!(
            "\n\nFiles starting with \"{query}\" in \"{directory}\":\n"
        ))
        .await?;

        let mut found = 0;
        for name in trie.matches(query) {
            self.write(&format!("{name}\n")).await?;
            found += 1;
        }
        debug!("query {query:?}: {found} matches");

        if found == 0 {
            self.write(&format!(
                "No matches for \"{query}\" in directory \"{directory}\"\n"
            ))
            .await?;
        }

        self.output.flush().await
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its terminator; invalid UTF-8 becomes U+FFFD.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line).await? == 0 {
            return Ok(None);
        }

        Ok(Some(scrub_line(&String::from_utf8_lossy(&line)).to_owned()))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await
    }

    async fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.write(text).await?;
        self.output.flush().await
    }
}
