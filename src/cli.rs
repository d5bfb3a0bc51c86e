use crate::models::DownloadRequest;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vidgrab")]
#[command(author, version, about = "Download a YouTube video", long_about = None)]
pub struct Args {
    /// The URL of the YouTube video to download
    pub url: String,

    /// Only download the audio
    #[arg(long)]
    pub only_audio: bool,

    /// The destination path for the downloaded file
    #[arg(long, default_value = "downloads")]
    pub destination_path: PathBuf,

    /// The start time of the section to download (in seconds), negative values count as 0
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// The end time of the section to download (in seconds), -1 for unset
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub end: i64,

    /// The maximum length of the video to download (in seconds), -1 for the full video
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub max_length: i64,

    /// HTTP proxy (e.g., http://127.0.0.1:7890)
    #[arg(long)]
    pub proxy: Option<String>,
}

fn unset_if_negative(value: i64) -> Option<u64> {
    u64::try_from(value).ok()
}

impl Args {
    /// Inconsistent clip flags are kept as given; `DownloadRequest::clip_window` clamps them.
    pub fn into_request(self) -> DownloadRequest {
        DownloadRequest {
            url: self.url,
            only_audio: self.only_audio,
            destination_path: self.destination_path,
            start_seconds: unset_if_negative(self.start).unwrap_or(0),
            end_seconds: unset_if_negative(self.end),
            max_length_seconds: unset_if_negative(self.max_length),
            proxy: self.proxy,
        }
    }
}
