//! Resolves heterogeneous YouTube URL shapes to the fixed-length video id and
//! builds the embed/thumbnail addresses derived from it.

/// YouTube ids are exactly this long; anything else is not a playable
/// reference.
const ID_LEN: usize = 11;

/// Path/query fragments that precede a video id in the URL shapes we accept:
/// short links, bare `/v/` paths, embed links, watch links (either query
/// position) and shorts share links. Matching takes the rightmost occurrence.
const ID_MARKERS: &[&str] = &["youtu.be/", "embed/", "watch?v=", "shorts/", "&v=", "v/"];

/// Extracts the 11-character video id from `url`, or `None` when the string
/// holds no playable reference. Accepts anything: empty strings, the legacy
/// `"#"` placeholder and malformed URLs all resolve to `None` without
/// panicking.
pub fn video_id(url: &str) -> Option<&str> {
    if url.is_empty() || url == "#" {
        return None;
    }

    let mut start: Option<usize> = None;
    for marker in ID_MARKERS {
        if let Some(pos) = url.rfind(marker) {
            let candidate = pos + marker.len();
            if start.map_or(true, |s| candidate > s) {
                start = Some(candidate);
            }
        }
    }
    // Channel-scoped form: "u/<c>/<id>".
    let bytes = url.as_bytes();
    let mut from = 0;
    while let Some(rel) = url[from..].find("u/") {
        let pos = from + rel;
        from = pos + 1;
        if pos + 3 < bytes.len()
            && (bytes[pos + 2].is_ascii_alphanumeric() || bytes[pos + 2] == b'_')
            && bytes[pos + 3] == b'/'
        {
            let candidate = pos + 4;
            if start.map_or(true, |s| candidate > s) {
                start = Some(candidate);
            }
        }
    }

    let tail = &url[start?..];
    let end = tail.find(['#', '&', '?']).unwrap_or(tail.len());
    let id = &tail[..end];
    (id.len() == ID_LEN).then_some(id)
}

/// Playback options carried into the iframe address.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub muted: bool,
    pub looped: bool,
    pub playsinline: bool,
    /// Page address forwarded as `widget_referrer`, when known.
    pub referrer: Option<String>,
}

impl EmbedOptions {
    /// Inline slot playback: muted autoplay on a loop.
    pub fn inline(referrer: Option<String>) -> Self {
        Self {
            autoplay: true,
            muted: true,
            looped: true,
            playsinline: true,
            referrer,
        }
    }

    /// Lightbox playback: sound on, no loop.
    pub fn lightbox() -> Self {
        Self {
            autoplay: true,
            muted: false,
            looped: false,
            playsinline: false,
            referrer: None,
        }
    }
}

/// Full player address for an id. Looping goes through the single-item
/// `playlist` parameter, which is how the platform loops one video.
pub fn embed_url(id: &str, options: &EmbedOptions) -> String {
    let mut url = format!(
        "https://www.youtube.com/embed/{id}?autoplay={}&mute={}",
        options.autoplay as u8, options.muted as u8
    );
    if options.looped {
        url.push_str(&format!("&loop=1&playlist={id}"));
    }
    url.push_str("&controls=1&fs=1&rel=0");
    url.push_str(&format!("&playsinline={}", options.playsinline as u8));
    url.push_str("&modestbranding=1&enablejsapi=1");
    if let Some(href) = &options.referrer {
        url.push_str(&format!("&widget_referrer={}", urlencoding::encode(href)));
    }
    url
}

/// Static cover image for an id, shown until the slot loads a live player.
pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/mqdefault.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_same_id_across_url_shapes() {
        for url in [
            "https://youtu.be/abcdefghijk",
            "https://www.youtube.com/watch?v=abcdefghijk&t=5",
            "https://youtube.com/shorts/abcdefghijk",
            "https://www.youtube.com/v/abcdefghijk",
            "https://www.youtube.com/embed/abcdefghijk",
            "https://www.youtube.com/user?page=1&v=abcdefghijk",
            "https://www.youtube.com/u/w/abcdefghijk",
        ] {
            assert_eq!(video_id(url), Some("abcdefghijk"), "shape: {url}");
        }
    }

    #[test]
    fn resolves_already_parameterized_embed_links() {
        let url = "https://www.youtube.com/embed/k4kGRf6HhWs?autoplay=1&mute=1&loop=1&playlist=k4kGRf6HhWs&modestbranding=1&rel=0";
        assert_eq!(video_id(url), Some("k4kGRf6HhWs"));
    }

    #[test]
    fn real_shorts_ids_resolve() {
        assert_eq!(
            video_id("https://youtube.com/shorts/CrQaD25hJUM"),
            Some("CrQaD25hJUM")
        );
        assert_eq!(
            video_id("https://youtube.com/shorts/-6nk2lzfUiY"),
            Some("-6nk2lzfUiY")
        );
    }

    #[test]
    fn placeholder_and_garbage_are_unresolved() {
        assert_eq!(video_id(""), None);
        assert_eq!(video_id("#"), None);
        assert_eq!(video_id("not a url"), None);
        assert_eq!(video_id("https://example.com/video/short"), None);
    }

    #[test]
    fn wrong_length_segment_is_unresolved() {
        assert_eq!(video_id("https://youtu.be/short"), None);
        assert_eq!(video_id("https://youtu.be/waytoolongforanid"), None);
    }

    #[test]
    fn trailing_query_and_fragment_are_stripped() {
        assert_eq!(
            video_id("https://youtu.be/abcdefghijk?t=30"),
            Some("abcdefghijk")
        );
        assert_eq!(
            video_id("https://youtu.be/abcdefghijk#top"),
            Some("abcdefghijk")
        );
    }

    #[test]
    fn inline_embed_url_loops_and_mutes() {
        let url = embed_url("abcdefghijk", &EmbedOptions::inline(None));
        assert!(url.starts_with("https://www.youtube.com/embed/abcdefghijk?"));
        assert!(url.contains("autoplay=1"));
        assert!(url.contains("mute=1"));
        assert!(url.contains("loop=1&playlist=abcdefghijk"));
        assert!(url.contains("rel=0"));
        assert!(url.contains("modestbranding=1"));
        assert!(!url.contains("widget_referrer"));
    }

    #[test]
    fn lightbox_embed_url_plays_with_sound_once() {
        let url = embed_url("abcdefghijk", &EmbedOptions::lightbox());
        assert!(url.contains("mute=0"));
        assert!(!url.contains("loop=1"));
        assert!(url.contains("playsinline=0"));
    }

    #[test]
    fn referrer_is_url_encoded() {
        let options = EmbedOptions::inline(Some("https://studio.example/?a=b".into()));
        let url = embed_url("abcdefghijk", &options);
        assert!(url.contains("&widget_referrer=https%3A%2F%2Fstudio.example%2F%3Fa%3Db"));
    }

    #[test]
    fn thumbnail_is_keyed_by_id() {
        assert_eq!(
            thumbnail_url("abcdefghijk"),
            "https://img.youtube.com/vi/abcdefghijk/mqdefault.jpg"
        );
    }
}
