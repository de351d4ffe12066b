use crate::models::CATEGORIES;

pub fn render_editor() -> String {
    let options: String = CATEGORIES
        .iter()
        .map(|category| format!(r#"<option value="{category}">{category}</option>"#))
        .collect();
    EDITOR_HTML
        .replace("{{STYLE}}", BASE_STYLE)
        .replace("{{CATEGORY_OPTIONS}}", &options)
}

pub fn render_dashboard() -> String {
    DASHBOARD_HTML.replace("{{STYLE}}", BASE_STYLE)
}

const BASE_STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: end;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    a.nav {
      color: var(--accent-2);
      font-weight: 600;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat, .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .stat {
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    button, input, select {
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button.ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      padding: 8px 12px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
"#;

const EDITOR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tasks</title>
  <style>
{{STYLE}}
    form.add {
      display: grid;
      grid-template-columns: 1fr auto auto;
      gap: 12px;
    }

    form.add input, form.add select {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 14px;
      padding: 12px 14px;
      background: white;
    }

    ul.tasks {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .task {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      animation: rise 300ms ease;
    }

    .task .done {
      text-decoration: line-through;
      color: #8b857d;
    }

    .task small {
      color: #8b857d;
    }

    .task .btns {
      display: flex;
      gap: 6px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Tasks</h1>
        <p class="subtitle">Add, edit and check off your to-dos.</p>
      </div>
      <a class="nav" href="/dashboard">Dashboard &rarr;</a>
    </header>

    <form class="add" id="add-form">
      <input id="task-text" type="text" placeholder="What needs doing?" autocomplete="off" />
      <select id="task-category">{{CATEGORY_OPTIONS}}</select>
      <button type="submit">Add</button>
    </form>

    <ul class="tasks" id="task-list"></ul>

    <div class="status" id="status"></div>
  </main>

  <script>
    const form = document.getElementById('add-form');
    const textEl = document.getElementById('task-text');
    const categoryEl = document.getElementById('task-category');
    const listEl = document.getElementById('task-list');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const button = (label, title, onClick) => {
      const el = document.createElement('button');
      el.type = 'button';
      el.className = 'ghost';
      el.textContent = label;
      el.title = title;
      el.addEventListener('click', () => onClick().catch((err) => setStatus(err.message, 'error')));
      return el;
    };

    const renderTasks = (tasks) => {
      listEl.innerHTML = '';
      tasks.forEach((task) => {
        const li = document.createElement('li');
        li.className = 'task card';

        const span = document.createElement('span');
        span.className = task.completed ? 'done' : '';
        span.textContent = task.text + ' ';
        const small = document.createElement('small');
        small.textContent = '(' + task.category + ')';
        span.appendChild(small);

        const btns = document.createElement('div');
        btns.className = 'btns';
        btns.appendChild(button('✔', 'Toggle complete', async () => {
          renderTasks(await request('POST', `/api/tasks/${task.id}/toggle`));
        }));
        btns.appendChild(button('✎', 'Edit', async () => {
          const text = prompt('Edit your task:', task.text);
          if (text === null || text === '') {
            return;
          }
          renderTasks(await request('PATCH', `/api/tasks/${task.id}`, { text }));
        }));
        btns.appendChild(button('✕', 'Delete', async () => {
          renderTasks(await request('DELETE', `/api/tasks/${task.id}`));
        }));

        li.appendChild(span);
        li.appendChild(btns);
        listEl.appendChild(li);
      });
    };

    const refresh = async () => {
      renderTasks(await request('GET', '/api/tasks'));
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      if (textEl.value.trim() === '') {
        alert('Enter a task!');
        return;
      }
      request('POST', '/api/tasks', { text: textEl.value, category: categoryEl.value })
        .then(() => {
          textEl.value = '';
          setStatus('', '');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Task Dashboard</title>
  <style>
{{STYLE}}
    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 16px;
    }

    svg {
      width: 100%;
      display: block;
    }

    svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      fill: #7a746d;
      font-size: 11px;
    }

    .ring-track {
      fill: none;
      stroke: rgba(47, 72, 88, 0.1);
      stroke-width: 14;
    }

    .ring-value {
      fill: none;
      stroke: var(--accent);
      stroke-width: 14;
      stroke-linecap: round;
      transition: stroke-dasharray 500ms ease;
    }

    .ring-label {
      font-size: 22px;
      font-weight: 600;
      fill: var(--ink);
    }

    .bar {
      fill: var(--accent-2);
    }

    .bar.cat-0 { fill: #7a82ef; }
    .bar.cat-1 { fill: #34c3a1; }
    .bar.cat-2 { fill: #ffb86b; }
    .bar.cat-3 { fill: #f45b69; }

    ul.recent {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .recent-item {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      animation: rise 400ms ease both;
    }

    .recent-item small {
      display: block;
      color: #8b857d;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Dashboard</h1>
        <p class="subtitle">How your to-do list is going.</p>
      </div>
      <div>
        <a class="nav" href="/">&larr; Tasks</a>
        <button type="button" id="refresh-btn">Refresh</button>
      </div>
    </header>

    <section class="panel">
      <div class="stat"><span class="label">Total</span><span class="value" id="total">0</span></div>
      <div class="stat"><span class="label">Completed</span><span class="value" id="completed">0</span></div>
      <div class="stat"><span class="label">Pending</span><span class="value" id="pending">0</span></div>
      <div class="stat"><span class="label">Added today</span><span class="value" id="today">0</span></div>
    </section>

    <section class="charts">
      <div class="card">
        <h2>Progress</h2>
        <svg id="progress" viewBox="0 0 160 160" role="img" aria-label="Completion"></svg>
      </div>
      <div class="card">
        <h2>Categories</h2>
        <svg id="categories" viewBox="0 0 300 180" role="img" aria-label="Tasks per category"></svg>
      </div>
      <div class="card">
        <h2>Completed, last 7 days</h2>
        <svg id="weekly" viewBox="0 0 300 180" role="img" aria-label="Completed per day"></svg>
      </div>
    </section>

    <section class="card">
      <h2>Recent</h2>
      <ul class="recent" id="recent"></ul>
    </section>

    <div class="status" id="status"></div>
    <p class="hint" id="basis-hint"></p>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);
    const statusEl = $('status');

    // Current chart handles, disposed and rebuilt on every refresh.
    let charts = {};

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const disposeCharts = () => {
      Object.values(charts).forEach((el) => { el.innerHTML = ''; });
      charts = {};
    };

    const renderRing = (el, pct) => {
      const r = 60;
      const circumference = 2 * Math.PI * r;
      const filled = (circumference * pct) / 100;
      el.innerHTML = `
        <circle class="ring-track" cx="80" cy="80" r="${r}" />
        <circle class="ring-value" cx="80" cy="80" r="${r}"
          stroke-dasharray="${filled} ${circumference}" transform="rotate(-90 80 80)" />
        <text class="ring-label" x="80" y="88" text-anchor="middle">${pct}%</text>`;
      return el;
    };

    const renderBars = (el, points, classFor) => {
      const width = 300;
      const height = 180;
      const bottom = 24;
      const top = 16;
      const max = Math.max(1, ...points.map((p) => p.value));
      const slot = width / points.length;
      const barWidth = Math.min(28, slot * 0.6);
      el.innerHTML = points
        .map((p, i) => {
          const h = ((height - top - bottom) * p.value) / max;
          const x = i * slot + (slot - barWidth) / 2;
          const y = height - bottom - h;
          return `
            <rect class="bar ${classFor(i)}" x="${x}" y="${y}" width="${barWidth}" height="${h}" rx="6" />
            <text x="${x + barWidth / 2}" y="${y - 4}" text-anchor="middle">${p.value}</text>
            <text x="${x + barWidth / 2}" y="${height - 6}" text-anchor="middle">${p.label}</text>`;
        })
        .join('');
      return el;
    };

    const renderRecent = (tasks) => {
      const list = $('recent');
      list.innerHTML = '';
      if (tasks.length === 0) {
        const li = document.createElement('li');
        li.className = 'recent-item';
        li.textContent = 'No tasks yet. Add tasks from the main page.';
        list.appendChild(li);
        return;
      }
      tasks.forEach((task, i) => {
        const li = document.createElement('li');
        li.className = 'recent-item';
        li.style.animationDelay = `${i * 60}ms`;
        const left = document.createElement('div');
        const title = document.createElement('strong');
        title.textContent = `${task.text} (${task.category})`;
        const created = document.createElement('small');
        created.textContent = 'Created: ' + new Date(task.id).toLocaleString();
        left.appendChild(title);
        left.appendChild(created);
        const right = document.createElement('small');
        right.textContent = task.completed ? 'Completed' : 'Pending';
        li.appendChild(left);
        li.appendChild(right);
        list.appendChild(li);
      });
    };

    const render = (stats) => {
      $('total').textContent = stats.total;
      $('completed').textContent = stats.completed;
      $('pending').textContent = stats.pending;
      $('today').textContent = stats.today;

      disposeCharts();
      charts.progress = renderRing($('progress'), stats.completion_pct);
      charts.categories = renderBars(
        $('categories'),
        stats.categories.map((c) => ({ label: c.category, value: c.count })),
        (i) => `cat-${i}`
      );
      charts.weekly = renderBars(
        $('weekly'),
        stats.last_7_days.map((d) => ({ label: d.label, value: d.completed })),
        () => ''
      );
      renderRecent(stats.recent);

      $('basis-hint').textContent = stats.weekly_basis === 'completion'
        ? 'Daily completions use the recorded completion time.'
        : 'No completion time is recorded, so completed tasks are counted on the day they were created.';
    };

    const refresh = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      render(await res.json());
      setStatus('', '');
    };

    $('refresh-btn').addEventListener('click', () => {
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_lists_every_category() {
        let html = render_editor();
        for category in CATEGORIES {
            assert!(html.contains(&format!(r#"<option value="{category}">"#)));
        }
        assert!(!html.contains("{{"));
    }

    #[test]
    fn dashboard_has_no_placeholders() {
        let html = render_dashboard();
        assert!(html.contains("/api/stats"));
        assert!(!html.contains("{{"));
    }
}
