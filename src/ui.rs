use crate::models::TrackerResponse;

const RING_RADIUS: f64 = 80.0;

pub fn render_tracker(tracker: &TrackerResponse) -> String {
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let offset = circumference * (1.0 - tracker.progress);
    let body = TRACKER_HTML
        .replace("{{CIRCUMFERENCE}}", &format!("{circumference:.2}"))
        .replace("{{OFFSET}}", &format!("{offset:.2}"))
        .replace("{{COUNT}}", &tracker.total_count.to_string())
        .replace("{{RECORDS}}", &render_records(tracker));
    render_page("Anger Tracker", "tracker", &body)
}

pub fn render_meditation() -> String {
    render_page("Relax &amp; Breathe", "meditation", MEDITATION_HTML)
}

fn render_records(tracker: &TrackerResponse) -> String {
    if tracker.records.is_empty() {
        return r#"<p class="empty">No reasons logged yet.</p>"#.to_string();
    }

    let mut items = String::from(r#"<ul class="journal">"#);
    for record in &tracker.records {
        items.push_str(&format!(
            r#"<li><span class="reason">{}</span><time datetime="{}">{}</time></li>"#,
            escape_html(&record.reason),
            record.date.to_rfc3339(),
            record.date.format("%Y-%m-%d %H:%M UTC"),
        ));
    }
    items.push_str("</ul>");
    items
}

fn render_page(title: &str, active_tab: &str, body: &str) -> String {
    let (tracker_class, meditation_class) = if active_tab == "meditation" {
        ("tab", "tab active")
    } else {
        ("tab active", "tab")
    };
    PAGE_HTML
        .replace("{{TITLE}}", title)
        .replace("{{TRACKER_TAB}}", tracker_class)
        .replace("{{MEDITATION_TAB}}", meditation_class)
        .replace("{{BODY}}", body)
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #efe6f7;
      --ink: #3b2352;
      --accent: #8e44ad;
      --accent-soft: rgba(142, 68, 173, 0.5);
      --muted: rgba(142, 68, 173, 0.7);
      --card: #ffffff;
      --shadow: 0 6px 18px rgba(59, 35, 82, 0.15);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", "Helvetica Neue", sans-serif;
      display: flex;
      flex-direction: column;
    }

    main {
      flex: 1;
      width: min(560px, 100%);
      margin: 0 auto;
      padding: 28px 18px 96px;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 20px;
    }

    h1 {
      margin: 0;
      font-size: 2.1rem;
      color: var(--accent);
    }

    h2 {
      margin: 0 0 10px;
      font-size: 1.4rem;
      color: var(--accent);
    }

    .ring {
      position: relative;
      width: 180px;
      height: 180px;
      filter: drop-shadow(0 6px 10px rgba(59, 35, 82, 0.25));
    }

    .ring svg {
      width: 100%;
      height: 100%;
      transform: rotate(-90deg);
    }

    .ring .track {
      fill: none;
      stroke: var(--accent-soft);
      stroke-opacity: 0.3;
      stroke-width: 20;
    }

    .ring .bar {
      fill: none;
      stroke: var(--accent);
      stroke-width: 20;
      stroke-linecap: round;
      transition: stroke-dashoffset 400ms ease-in-out;
    }

    .ring .label {
      position: absolute;
      inset: 0;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
    }

    .ring .count {
      font-size: 2.1rem;
      font-weight: 700;
      color: var(--accent);
    }

    .ring .caption {
      font-size: 0.75rem;
      color: var(--muted);
    }

    form {
      width: 100%;
      display: grid;
      gap: 14px;
    }

    input[type="text"] {
      width: 100%;
      padding: 14px;
      border: 1px solid rgba(59, 35, 82, 0.15);
      border-radius: 10px;
      font-size: 1rem;
      box-shadow: var(--shadow);
    }

    button {
      padding: 14px;
      border: none;
      border-radius: 10px;
      background: var(--accent);
      color: white;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      box-shadow: var(--shadow);
    }

    section.journal-area {
      width: 100%;
    }

    .empty {
      color: var(--muted);
    }

    ul.journal {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    ul.journal li {
      background: var(--card);
      border-radius: 10px;
      padding: 14px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 4px;
    }

    ul.journal time {
      font-size: 0.75rem;
      color: var(--muted);
    }

    .breathing {
      position: relative;
      width: 200px;
      height: 200px;
      margin: auto 0;
      display: grid;
      place-items: center;
    }

    .breathing .outer {
      position: absolute;
      inset: 0;
      border-radius: 50%;
      background: rgba(142, 68, 173, 0.3);
    }

    .breathing .inner {
      width: 120px;
      height: 120px;
      border-radius: 50%;
      background: rgba(142, 68, 173, 0.5);
      animation: breathe 4s ease-in-out infinite alternate;
    }

    .prompt {
      font-size: 1.4rem;
      color: var(--muted);
    }

    nav.tabs {
      position: fixed;
      left: 0;
      right: 0;
      bottom: 0;
      display: flex;
      background: rgba(255, 255, 255, 0.92);
      border-top: 1px solid rgba(59, 35, 82, 0.1);
    }

    nav.tabs a {
      flex: 1;
      padding: 14px 0;
      text-align: center;
      text-decoration: none;
      color: #8a8190;
      font-weight: 600;
    }

    nav.tabs a.active {
      color: var(--accent);
    }

    @keyframes breathe {
      from {
        width: 120px;
        height: 120px;
      }
      to {
        width: 180px;
        height: 180px;
      }
    }
  </style>
</head>
<body>
  <main>
    <h1>{{TITLE}}</h1>
{{BODY}}
  </main>
  <nav class="tabs">
    <a class="{{TRACKER_TAB}}" href="/">Tracker</a>
    <a class="{{MEDITATION_TAB}}" href="/meditation">Meditation</a>
  </nav>
</body>
</html>
"#;

const TRACKER_HTML: &str = r#"    <div class="ring">
      <svg viewBox="0 0 200 200" aria-hidden="true">
        <circle class="track" cx="100" cy="100" r="80"></circle>
        <circle class="bar" cx="100" cy="100" r="80"
          stroke-dasharray="{{CIRCUMFERENCE}}" stroke-dashoffset="{{OFFSET}}"></circle>
      </svg>
      <div class="label">
        <span id="count" class="count">{{COUNT}}</span>
        <span class="caption">Total Anger Count</span>
      </div>
    </div>

    <form method="post" action="/records">
      <input type="text" name="reason" placeholder="Why did you get angry?" autocomplete="off" />
      <button type="submit">Log Anger</button>
    </form>

    <section class="journal-area">
      <h2>Journaled Reasons</h2>
      {{RECORDS}}
    </section>"#;

const MEDITATION_HTML: &str = r#"    <div class="breathing">
      <div class="outer"></div>
      <div class="inner"></div>
    </div>
    <p class="prompt">Breathe in... Breathe out...</p>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AngerRecord;
    use crate::progress::build_tracker_from;

    #[test]
    fn empty_tracker_shows_placeholder() {
        let html = render_tracker(&build_tracker_from(&[], 0));
        assert!(html.contains("No reasons logged yet."));
        assert!(html.contains(r#"<span id="count" class="count">0</span>"#));
    }

    #[test]
    fn tracker_escapes_reasons_and_lists_newest_first() {
        let records = vec![
            AngerRecord::new("slow wifi"),
            AngerRecord::new("<b>spam</b> & more"),
        ];
        let html = render_tracker(&build_tracker_from(&records, 2));

        assert!(html.contains("&lt;b&gt;spam&lt;/b&gt; &amp; more"));
        assert!(!html.contains("<b>spam</b>"));
        let newest = html.find("spam").unwrap();
        let oldest = html.find("slow wifi").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn full_ring_has_zero_offset() {
        let html = render_tracker(&build_tracker_from(&[], 75));
        assert!(html.contains(r#"stroke-dashoffset="0.00""#));
    }

    #[test]
    fn meditation_page_marks_its_tab() {
        let html = render_meditation();
        assert!(html.contains("Breathe in... Breathe out..."));
        assert!(html.contains(r#"<a class="tab active" href="/meditation">"#));
    }
}
