//! Inline HTML rendering for the resolver front-end.
//!
//! One page, three states: empty form, form + playable video, form +
//! error box. Built with `format!` — the page is small enough that a
//! template engine would be pure overhead.

/// Render the index page. At most one of `video_url` / `error` is set.
pub fn render_index(video_url: Option<&str>, error: Option<&str>) -> String {
    let result_html = match (video_url, error) {
        (Some(url), _) => render_video(url),
        (None, Some(message)) => render_error(message),
        (None, None) => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Instagram Video Downloader</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<div class="card">
<h1>Instagram Video Downloader</h1>
<p class="tagline">Paste a Reel, Post, or IGTV link to get a direct video URL.</p>
<form method="post" action="/">
<input type="text" name="instagramUrl" placeholder="https://www.instagram.com/reel/..." autocomplete="off" autofocus>
<button type="submit">Download</button>
</form>
{result_html}
<p class="disclaimer">Content belongs to respective rights holders.<br>For personal use of public posts only.</p>
</div>
</body>
</html>"#,
        result_html = result_html,
    )
}

/// Player plus a plain download link for the resolved video.
fn render_video(url: &str) -> String {
    let escaped = html_escape(url);
    format!(
        r#"<div class="result">
<video controls playsinline src="{url}"></video>
<a class="btn" href="{url}" target="_blank" rel="noopener" download>Download Video</a>
</div>"#,
        url = escaped,
    )
}

/// Error box. Messages carry literal newlines for the bullet tips, so
/// escape first and convert to line breaks after.
fn render_error(message: &str) -> String {
    let escaped = html_escape(message).replace('\n', "<br>");
    format!(r#"<div class="error">{}</div>"#, escaped)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
