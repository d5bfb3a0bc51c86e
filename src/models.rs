use std::path::PathBuf;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub(crate) fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Everything the pipeline needs from the command line. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub only_audio: bool,
    pub destination_path: PathBuf,
    pub start_seconds: u64,
    pub end_seconds: Option<u64>,
    pub max_length_seconds: Option<u64>,
    pub proxy: Option<String>,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            only_audio: false,
            destination_path: PathBuf::from("downloads"),
            start_seconds: 0,
            end_seconds: None,
            max_length_seconds: None,
            proxy: None,
        }
    }

    pub fn has_clip_flags(&self) -> bool {
        self.start_seconds > 0 || self.end_seconds.is_some() || self.max_length_seconds.is_some()
    }

    /// Resolve the requested section against the actual video length.
    pub fn clip_window(&self, length_seconds: u64) -> ClipWindow {
        let max_length = self.max_length_seconds.unwrap_or(length_seconds);
        let start = self.start_seconds.min(length_seconds);
        let end = self
            .end_seconds
            .unwrap_or_else(|| start.saturating_add(max_length))
            .min(length_seconds)
            .max(start);

        ClipWindow { start, end }
    }
}

/// Section of a video selected by `--start`, `--end` and `--max-length`, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    pub start: u64,
    pub end: u64,
}

impl ClipWindow {
    pub fn covers(&self, length_seconds: u64) -> bool {
        self.start == 0 && self.end >= length_seconds
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub length_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Video and audio in one container
    Muxed,
    VideoOnly,
    AudioOnly,
}

/// One downloadable media stream as listed by a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHandle {
    pub itag: u32,
    pub url: String,
    pub mime_type: String,
    pub kind: StreamKind,
    pub file_size_bytes: u64,
    pub height: Option<u32>,
    pub bitrate: Option<u64>,
}

impl StreamHandle {
    pub fn is_audio_only(&self) -> bool {
        self.kind == StreamKind::AudioOnly
    }

    pub fn file_size_mb(&self) -> f64 {
        bytes_to_mb(self.file_size_bytes)
    }
}

/// Emitted by the downloader after every chunk written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub bytes_downloaded: u64,
    pub total_bytes: u64,
}

impl ProgressEvent {
    pub fn percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 100.0;
        }
        100.0 * self.bytes_downloaded as f64 / self.total_bytes as f64
    }

    pub fn downloaded_mb(&self) -> f64 {
        bytes_to_mb(self.bytes_downloaded)
    }

    pub fn total_mb(&self) -> f64 {
        bytes_to_mb(self.total_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_window_defaults_to_full_video() {
        let request = DownloadRequest::new("https://youtu.be/jNQXAC9IVRw");
        let window = request.clip_window(19);

        assert_eq!(window, ClipWindow { start: 0, end: 19 });
        assert!(window.covers(19));
        assert!(!request.has_clip_flags());
    }

    #[test]
    fn clip_window_uses_max_length_from_start() {
        let mut request = DownloadRequest::new("https://youtu.be/jNQXAC9IVRw");
        request.start_seconds = 30;
        request.max_length_seconds = Some(60);

        assert_eq!(request.clip_window(600), ClipWindow { start: 30, end: 90 });
        assert_eq!(request.clip_window(45), ClipWindow { start: 30, end: 45 });
    }

    #[test]
    fn explicit_end_wins_over_max_length() {
        let mut request = DownloadRequest::new("https://youtu.be/jNQXAC9IVRw");
        request.start_seconds = 10;
        request.end_seconds = Some(20);
        request.max_length_seconds = Some(500);

        let window = request.clip_window(600);
        assert_eq!(window, ClipWindow { start: 10, end: 20 });
        assert!(!window.covers(600));
    }

    #[test]
    fn progress_event_math() {
        let event = ProgressEvent {
            bytes_downloaded: 512 * 1024,
            total_bytes: 2 * 1024 * 1024,
        };

        assert_eq!(event.percent(), 25.0);
        assert_eq!(event.downloaded_mb(), 0.5);
        assert_eq!(event.total_mb(), 2.0);
    }

    #[test]
    fn empty_stream_reports_complete() {
        let event = ProgressEvent {
            bytes_downloaded: 0,
            total_bytes: 0,
        };
        assert_eq!(event.percent(), 100.0);
    }
}
