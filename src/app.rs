//! The download pipeline: metadata, stream listing, selection, naming, transfer.

use crate::downloader::Downloader;
use crate::error::{Error, Result};
use crate::models::DownloadRequest;
use crate::progress::ProgressObserver;
use crate::resolver::MediaResolver;
use crate::sanitize::output_filename;
use crate::selector::select_stream;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Run one download end to end. Status lines go to `out`, per-chunk progress to `observer`.
///
/// Returns the path of the written file.
pub async fn run<R, O, W>(
    request: &DownloadRequest,
    resolver: &R,
    observer: &mut O,
    out: &mut W,
) -> Result<PathBuf>
where
    R: MediaResolver + ?Sized,
    O: ProgressObserver + ?Sized,
    W: Write + ?Sized,
{
    let metadata = resolver.fetch_metadata(&request.url).await?;

    writeln!(out, "{}", metadata.title).map_err(Error::Output)?;
    writeln!(out, "Loaded video is {} seconds.", metadata.length_seconds).map_err(Error::Output)?;

    if request.has_clip_flags() {
        let window = request.clip_window(metadata.length_seconds);
        if !window.covers(metadata.length_seconds) {
            warn!(
                start = window.start,
                end = window.end,
                "clipping is not supported, downloading the full stream"
            );
        }
    }

    let streams = resolver.list_streams(&request.url).await?;
    let mut stream = select_stream(&streams, request.only_audio)?.clone();
    if stream.file_size_bytes == 0 {
        match resolver.stream_size(&stream).await {
            Some(size) => stream.file_size_bytes = size,
            None => debug!(itag = stream.itag, "stream size unknown"),
        }
    }

    writeln!(
        out,
        "Started download of video with size of {:.2}MB.",
        stream.file_size_mb()
    )
    .map_err(Error::Output)?;
    out.flush().map_err(Error::Output)?;

    let file_name = output_filename(&metadata.title, request.only_audio);
    Downloader::new(&request.destination_path)
        .download(resolver, &stream, &file_name, observer)
        .await
}
