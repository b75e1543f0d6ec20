/// Video URL classification for embeds.
///
/// Two hosting providers get canonical embed URLs; everything else is used
/// verbatim, in which case the embed may simply not play. That is the
/// intended behavior: a bad video URL is an editorial problem, not a page
/// error.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedUrl {
    YouTube(String),
    Vimeo(String),
    Passthrough(String),
}

impl EmbedUrl {
    pub fn as_str(&self) -> &str {
        match self {
            EmbedUrl::YouTube(url) | EmbedUrl::Vimeo(url) | EmbedUrl::Passthrough(url) => url,
        }
    }
}

/// Classify a video URL. Checks are ordered: YouTube first, then Vimeo,
/// first match wins.
pub fn embed_url(url: &str) -> EmbedUrl {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        if let Some(id) = youtube_id(url) {
            return EmbedUrl::YouTube(format!("https://www.youtube.com/embed/{id}"));
        }
    } else if url.contains("vimeo.com") {
        if let Some(id) = vimeo_id(url) {
            return EmbedUrl::Vimeo(format!("https://player.vimeo.com/video/{id}"));
        }
    }
    EmbedUrl::Passthrough(url.to_string())
}

/// Pull the video id following `watch?v=` or `youtu.be/`, terminated by
/// `&`, `?` or `#`.
fn youtube_id(url: &str) -> Option<&str> {
    let rest = url
        .split_once("youtube.com/watch?v=")
        .or_else(|| url.split_once("youtu.be/"))
        .map(|(_, rest)| rest)?;
    let id = rest.split(['&', '?', '#']).next().unwrap_or("");
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Pull the numeric id following `vimeo.com/`.
fn vimeo_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("vimeo.com/")?;
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}
