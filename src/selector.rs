use crate::error::{Error, Result};
use crate::models::{StreamHandle, StreamKind};
use tracing::debug;

/// Pick the stream to download.
///
/// Audio-only requests take the first audio stream in resolver order. Otherwise the
/// combined video+audio stream with the greatest height wins, earliest on ties.
pub fn select_stream(streams: &[StreamHandle], only_audio: bool) -> Result<&StreamHandle> {
    let selected = if only_audio {
        streams.iter().find(|s| s.is_audio_only())
    } else {
        streams
            .iter()
            .filter(|s| s.kind == StreamKind::Muxed)
            .fold(None::<&StreamHandle>, |best, s| match best {
                Some(b) if b.height.unwrap_or(0) >= s.height.unwrap_or(0) => Some(b),
                _ => Some(s),
            })
    };

    let stream = selected.ok_or(Error::NoStreamAvailable { only_audio })?;
    debug!(
        itag = stream.itag,
        mime = %stream.mime_type,
        height = ?stream.height,
        candidates = streams.len(),
        "selected stream"
    );
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(itag: u32, kind: StreamKind, height: Option<u32>, size: u64) -> StreamHandle {
        StreamHandle {
            itag,
            url: format!("https://media.example/{itag}"),
            mime_type: match kind {
                StreamKind::AudioOnly => "audio/mp4".to_string(),
                _ => "video/mp4".to_string(),
            },
            kind,
            file_size_bytes: size,
            height,
            bitrate: None,
        }
    }

    #[test]
    fn audio_request_takes_first_audio_stream() {
        let streams = vec![
            stream(18, StreamKind::Muxed, Some(360), 10 << 20),
            stream(140, StreamKind::AudioOnly, None, 5 << 20),
            stream(251, StreamKind::AudioOnly, None, 4 << 20),
        ];

        let selected = select_stream(&streams, true).unwrap();
        assert_eq!(selected.itag, 140);
        assert_eq!(selected.file_size_mb(), 5.0);
    }

    #[test]
    fn video_request_takes_highest_muxed() {
        let streams = vec![
            stream(18, StreamKind::Muxed, Some(360), 1),
            stream(22, StreamKind::Muxed, Some(720), 2),
            stream(137, StreamKind::VideoOnly, Some(1080), 3),
            stream(140, StreamKind::AudioOnly, None, 4),
        ];

        assert_eq!(select_stream(&streams, false).unwrap().itag, 22);
    }

    #[test]
    fn ties_keep_resolver_order() {
        let streams = vec![
            stream(22, StreamKind::Muxed, Some(720), 1),
            stream(95, StreamKind::Muxed, Some(720), 2),
        ];

        assert_eq!(select_stream(&streams, false).unwrap().itag, 22);
    }

    #[test]
    fn video_request_never_falls_back_to_audio() {
        let streams = vec![stream(140, StreamKind::AudioOnly, None, 4)];

        assert!(matches!(
            select_stream(&streams, false),
            Err(Error::NoStreamAvailable { only_audio: false })
        ));
    }

    #[test]
    fn audio_request_without_audio_stream_fails() {
        let streams = vec![stream(18, StreamKind::Muxed, Some(360), 1)];

        assert!(matches!(
            select_stream(&streams, true),
            Err(Error::NoStreamAvailable { only_audio: true })
        ));
    }

    #[test]
    fn empty_input_fails_for_both_policies() {
        for only_audio in [true, false] {
            assert!(matches!(
                select_stream(&[], only_audio),
                Err(Error::NoStreamAvailable { .. })
            ));
        }
    }
}
