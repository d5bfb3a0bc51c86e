use crate::error::{Error, Result};
use crate::models::{ProgressEvent, StreamHandle};
use crate::progress::ProgressObserver;
use crate::resolver::{ChunkStream, MediaResolver};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Writes one selected stream into a destination directory.
pub struct Downloader {
    output_dir: PathBuf,
}

impl Downloader {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Transfer `stream` to `<output_dir>/<file_name>`, reporting every chunk to `observer`.
    ///
    /// Bytes land in a `.part` sibling first; the final name only appears once the
    /// transfer finished and matches the size the resolver reported.
    pub async fn download<R, O>(
        &self,
        resolver: &R,
        stream: &StreamHandle,
        file_name: &str,
        observer: &mut O,
    ) -> Result<PathBuf>
    where
        R: MediaResolver + ?Sized,
        O: ProgressObserver + ?Sized,
    {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| Error::fs(&self.output_dir, e))?;

        let output_path = self.output_dir.join(file_name);
        let partial_path = self.output_dir.join(format!("{file_name}.part"));

        let chunks = resolver.open_stream(stream).await?;

        let mut file = File::create(&partial_path)
            .await
            .map_err(|e| Error::fs(&partial_path, e))?;

        info!(itag = stream.itag, path = %output_path.display(), "download started");
        let written = write_chunks(
            chunks,
            &mut file,
            &partial_path,
            stream.file_size_bytes,
            observer,
        )
        .await?;
        drop(file);

        if stream.file_size_bytes > 0 && written != stream.file_size_bytes {
            return Err(Error::SizeMismatch {
                path: partial_path,
                expected: stream.file_size_bytes,
                actual: written,
            });
        }

        fs::rename(&partial_path, &output_path)
            .await
            .map_err(|e| Error::fs(&output_path, e))?;

        info!(bytes = written, path = %output_path.display(), "download finished");
        Ok(output_path)
    }
}

/// Drain `chunks` into `file`. Returns the number of bytes written.
async fn write_chunks<O>(
    mut chunks: ChunkStream,
    file: &mut File,
    path: &Path,
    expected_total: u64,
    observer: &mut O,
) -> Result<u64>
where
    O: ProgressObserver + ?Sized,
{
    let mut downloaded = 0u64;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        file.write_all(&chunk).await.map_err(|e| Error::fs(path, e))?;
        downloaded += chunk.len() as u64;

        observer.on_progress(ProgressEvent {
            bytes_downloaded: downloaded,
            total_bytes: expected_total.max(downloaded),
        });
    }

    // An empty stream still finishes at 100%.
    if downloaded == 0 {
        observer.on_progress(ProgressEvent {
            bytes_downloaded: 0,
            total_bytes: expected_total,
        });
    }

    file.flush().await.map_err(|e| Error::fs(path, e))?;
    Ok(downloaded)
}
