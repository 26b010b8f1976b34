use crate::calendar::{self, day_key};
use crate::history::{self, HistoryView};
use crate::models::ExerciseEntry;
use crate::tracker::TrackerView;

pub fn render_tracker(tracker: &TrackerView) -> String {
    let wizard = tracker.wizard();
    let mut cards = Vec::new();
    for day in tracker.days() {
        let key = day_key(day);
        let mut card = String::new();
        card.push_str(&format!(
            r#"<section class="day"><header><h2>{}</h2><span class="date">{}</span></header>"#,
            calendar::weekday_name(day),
            calendar::long_date(day)
        ));
        for entry in tracker.day(&key) {
            card.push_str(&render_entry(&key, entry));
        }

        match (wizard.active_date(), wizard.active_field()) {
            (Some(active), Some(field)) if active == key => {
                card.push_str(&format!(
                    r#"<form class="wizard" method="post" action="/tracker/wizard/submit" data-date="{key}">
  <input name="value" autofocus autocomplete="off" placeholder="{}" data-field="{}" />
</form>"#,
                    escape_html(field.placeholder()),
                    field.as_str()
                ));
                card.push_str(&start_form(&key, true));
            }
            _ => card.push_str(&start_form(&key, false)),
        }
        card.push_str("</section>");
        cards.push(card);
    }

    let (first_row, second_row) = cards.split_at(cards.len().min(4));
    TRACKER_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{WEEK_LABEL}}", &escape_html(&tracker.week_label()))
        .replace("{{FIRST_ROW}}", &first_row.concat())
        .replace("{{SECOND_ROW}}", &second_row.concat())
}

fn start_form(date: &str, hidden: bool) -> String {
    let hidden = if hidden { " hidden" } else { "" };
    format!(
        r#"<form class="start" method="post" action="/tracker/wizard/start"{hidden}>
  <input type="hidden" name="date" value="{date}" />
  <button class="add" type="submit">Add exercise</button>
</form>"#
    )
}

fn render_entry(date: &str, entry: &ExerciseEntry) -> String {
    let checked = if entry.completed { " checked" } else { "" };
    format!(
        r#"<form class="exercise" method="post" action="/tracker/toggle">
  <input type="hidden" name="date" value="{date}" />
  <input type="hidden" name="id" value="{id}" />
  <label><input type="checkbox" onchange="this.form.submit()"{checked} /> {summary}</label>
</form>"#,
        id = escape_html(&entry.id),
        summary = escape_html(&entry.summary()),
    )
}

pub fn render_history(view: &HistoryView, year: i32) -> String {
    let rows = view.rows(year);
    let mut columns = String::new();
    for column in history::columns(&rows) {
        columns.push_str(r#"<div class="column">"#);
        for week in column {
            columns.push_str(&format!(
                r#"<div class="week"><span class="number">{}</span>"#,
                week.number
            ));
            for cell in &week.days {
                let class = if cell.completed { "cell done" } else { "cell" };
                columns.push_str(&format!(
                    r#"<form method="post" action="/history/toggle"><input type="hidden" name="date" value="{date}" /><button class="{class}" type="submit" title="{date}">{initial}</button></form>"#,
                    date = cell.date,
                    initial = cell.initial,
                ));
            }
            columns.push_str("</div>");
        }
        columns.push_str("</div>");
    }

    HISTORY_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{YEAR}}", &year.to_string())
        .replace("{{COLUMNS}}", &columns)
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLE: &str = r#"
    :root {
      --accent: #ff6b35;
      --ink: #333;
      --muted: #666;
      --card: #fff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      padding: 2rem;
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
      background: linear-gradient(135deg, #ffffff 0%, #f0f0f0 40%, #d8d8d8 100%);
    }

    .content {
      max-width: 1400px;
      margin: 0 auto;
      padding: 0 1.5rem;
    }

    .top-bar {
      display: grid;
      grid-template-columns: 200px 1fr 200px;
      align-items: center;
      margin-bottom: 2rem;
    }

    .top-bar h1 {
      color: var(--accent);
      font-size: 1.2rem;
      font-weight: 600;
    }

    nav {
      display: flex;
      gap: 2.5rem;
      justify-content: center;
    }

    nav a {
      text-decoration: none;
      color: var(--muted);
      font-size: 1.1rem;
      font-weight: 500;
      padding: 0.5rem;
    }

    nav a.active {
      color: var(--ink);
      font-weight: 600;
    }

    .week-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 1.5rem;
    }

    .week-header form {
      display: inline;
    }

    .nav-button {
      background: var(--card);
      border: 1px solid #ddd;
      border-radius: 8px;
      padding: 0.4rem 0.8rem;
      cursor: pointer;
    }

    .row {
      display: grid;
      grid-template-columns: repeat(4, 1fr);
      gap: 1rem;
      margin-bottom: 1rem;
    }

    .day {
      background: var(--card);
      border-radius: 12px;
      padding: 1.25rem;
      box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05);
      min-height: 220px;
    }

    .day header {
      margin-bottom: 0.75rem;
    }

    .day h2 {
      font-size: 1.1rem;
      margin: 0;
    }

    .date {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .exercise label {
      display: flex;
      gap: 0.5rem;
      padding: 0.35rem 0;
      font-size: 0.9rem;
    }

    .exercise input[type="checkbox"] {
      accent-color: var(--accent);
    }

    .add {
      background: none;
      border: none;
      color: var(--accent);
      cursor: pointer;
      padding: 0.5rem 0;
      font-size: 0.9rem;
    }

    .wizard input {
      width: 100%;
      padding: 0.5rem;
      border: 1px solid var(--accent);
      border-radius: 6px;
      font-size: 0.9rem;
    }

    .history {
      background: var(--card);
      border-radius: 12px;
      padding: 1.5rem;
      box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05);
      display: grid;
      grid-template-columns: repeat(4, 1fr);
      gap: 0.25rem;
    }

    .history h2 {
      grid-column: 1 / -1;
      font-size: 1.5rem;
      margin: 0 0 1.5rem;
    }

    .week {
      display: flex;
      align-items: center;
      gap: 0.3rem;
      padding: 0.55rem 0;
      border-bottom: 1px solid #eee;
    }

    .week form {
      display: inline;
    }

    .number {
      width: 25px;
      color: var(--muted);
      font-size: 0.8rem;
    }

    .cell {
      width: 20px;
      height: 20px;
      border: none;
      border-radius: 4px;
      font-size: 0.7rem;
      cursor: pointer;
      background: #f5f5f5;
      color: var(--muted);
      padding: 0;
    }

    .cell.done {
      background: var(--accent);
      color: white;
    }

    @media (max-width: 768px) {
      .row,
      .history {
        grid-template-columns: 1fr;
      }
    }
"#;

const TRACKER_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Workout Tracker</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <div class="content">
    <div class="top-bar">
      <h1>Workout Tracker</h1>
      <nav>
        <a class="active" href="/">Tracker</a>
        <a href="/history">History</a>
      </nav>
    </div>

    <div class="week-header">
      <h2>{{WEEK_LABEL}}</h2>
      <div>
        <form method="post" action="/tracker/prev"><button class="nav-button" type="submit">&larr;</button></form>
        <form method="post" action="/tracker/next"><button class="nav-button" type="submit">&rarr;</button></form>
      </div>
    </div>

    <div class="row">{{FIRST_ROW}}</div>
    <div class="row">
      {{SECOND_ROW}}
      <section class="day">
        <header><h2>Notes</h2></header>
        <span class="date">Weekly notes and reminders</span>
        <button class="add" type="button">Add note</button>
      </section>
    </div>
  </div>

  <script>
    const wizard = document.querySelector('form.wizard');
    if (wizard) {
      const input = wizard.querySelector('input');
      let submitting = false;
      document.addEventListener('submit', () => {
        submitting = true;
      }, true);
      input.addEventListener('blur', () => {
        if (submitting) {
          return;
        }
        const body = new URLSearchParams({ date: wizard.dataset.date });
        navigator.sendBeacon('/tracker/wizard/abandon', body);
        const start = wizard.nextElementSibling;
        wizard.remove();
        if (start) {
          start.hidden = false;
        }
      });
    }
  </script>
</body>
</html>
"#;

const HISTORY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Workout History {{YEAR}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <div class="content">
    <div class="top-bar">
      <h1>Workout Tracker</h1>
      <nav>
        <a href="/">Tracker</a>
        <a class="active" href="/history">History</a>
      </nav>
    </div>

    <div class="history">
      <h2>Workout History (weeks)</h2>
      {{COLUMNS}}
    </div>
  </div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExerciseStore;
    use crate::storage::StorageArea;
    use chrono::NaiveDate;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn tracker_page_lists_week_and_entries() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut tracker = TrackerView::mount(&ExerciseStore::new(), today);
        let mut rng = StdRng::seed_from_u64(3);
        tracker.start_entry(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        for value in ["<Curl>", "30", "3", "12"] {
            tracker.submit_input(value, &mut rng);
        }
        tracker.start_entry(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());

        let html = render_tracker(&tracker);
        assert!(html.contains("Week 11 (Mar 11 — Mar 17)"));
        assert!(html.contains("Monday"));
        assert!(html.contains("Mar 17, 2024"));
        assert!(html.contains("&lt;Curl&gt; — 30 lbs — 3 sets of 12 reps"));
        assert!(html.contains("Type exercise name and press Enter"));
        assert!(html.contains(r#"data-date="2024-03-12""#));
        assert_eq!(html.matches("Add exercise").count(), 7);
        assert_eq!(html.matches(r#"class="start" method="post" action="/tracker/wizard/start" hidden"#).count(), 1);
        assert!(html.contains("Weekly notes and reminders"));
    }

    #[test]
    fn history_page_renders_every_cell() {
        let mut storage = StorageArea::default();
        let mut view = HistoryView::mount(&storage);
        view.toggle(&mut storage, "2024-03-11");

        let html = render_history(&view, 2024);
        assert_eq!(html.matches(r#"action="/history/toggle""#).count(), 364);
        assert_eq!(html.matches("cell done").count(), 1);
        assert!(html.contains("Workout History (weeks)"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
