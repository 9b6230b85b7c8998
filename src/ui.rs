pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>habitra</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f2f7ef;
      --bg-2: #cfe8c8;
      --ink: #27302a;
      --accent: #3a9b5c;
      --accent-soft: #bfe6c9;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 88, 60, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e9f5e3 60%, #f4f9ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
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
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c665d;
      font-size: 1rem;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 88, 60, 0.08);
      display: grid;
      gap: 14px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .today-head {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    .today-date {
      color: #6b756c;
      font-size: 0.95rem;
    }

    .progress-track {
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 88, 60, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      width: 0;
      border-radius: 999px;
      background: var(--accent);
      transition: width 250ms ease;
    }

    .progress-label {
      font-size: 0.85rem;
      color: #6b756c;
    }

    ul.tasks {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    ul.tasks li {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 8px 10px;
      border-radius: 12px;
      transition: background 120ms ease;
    }

    ul.tasks li:hover {
      background: rgba(58, 155, 92, 0.07);
    }

    ul.tasks input[type="checkbox"] {
      width: 20px;
      height: 20px;
      accent-color: var(--accent);
      cursor: pointer;
    }

    ul.tasks .title {
      flex: 1;
      font-size: 1rem;
    }

    ul.tasks .title.done {
      color: #8a948b;
      text-decoration: line-through;
    }

    .icon-btn {
      appearance: none;
      border: none;
      background: transparent;
      border-radius: 8px;
      padding: 4px 7px;
      font-size: 0.85rem;
      color: #6b756c;
      cursor: pointer;
    }

    .icon-btn:hover {
      background: rgba(47, 88, 60, 0.1);
      color: var(--ink);
    }

    .empty {
      color: #8a948b;
      font-size: 0.95rem;
      text-align: center;
      padding: 8px 0;
    }

    form.add {
      display: flex;
      gap: 10px;
    }

    form.add input {
      flex: 1;
      border: 1px solid rgba(47, 88, 60, 0.2);
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 1rem;
      font-family: inherit;
    }

    form.add button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(58, 155, 92, 0.3);
      transition: transform 150ms ease;
    }

    form.add button:active {
      transform: scale(0.98);
    }

    .cal-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .cal-nav {
      display: flex;
      align-items: center;
      gap: 6px;
    }

    .cal-nav .label {
      min-width: 9em;
      text-align: center;
      font-weight: 600;
      font-size: 0.95rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 88, 60, 0.08);
      border-radius: 999px;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 7px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #64705f;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 88, 60, 0.12);
    }

    .weekday-row {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      text-align: center;
      font-size: 0.75rem;
      color: #8a948b;
      margin-bottom: 4px;
    }

    .month-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .cell {
      aspect-ratio: 1 / 1;
      border-radius: 10px;
      background: rgba(47, 88, 60, 0.06);
      display: grid;
      place-items: center;
      font-size: 0.8rem;
      color: #6b756c;
      cursor: pointer;
      border: 2px solid transparent;
    }

    .cell.outside {
      opacity: 0.35;
    }

    .cell.achieved {
      background: var(--accent);
      color: white;
      font-weight: 600;
    }

    .cell.today {
      border-color: var(--accent-2);
    }

    .heat-grid {
      display: grid;
      grid-auto-flow: column;
      grid-template-rows: repeat(7, 12px);
      gap: 3px;
      justify-content: start;
      overflow-x: auto;
      padding-bottom: 4px;
    }

    .heat-cell {
      width: 12px;
      height: 12px;
      border-radius: 3px;
      background: rgba(47, 88, 60, 0.08);
      cursor: pointer;
    }

    .heat-cell.achieved {
      background: var(--accent);
    }

    .heat-cell.today {
      outline: 2px solid var(--accent-2);
      outline-offset: -1px;
    }

    .legend {
      display: flex;
      align-items: center;
      justify-content: flex-end;
      gap: 8px;
      font-size: 0.8rem;
      color: #8a948b;
    }

    .legend .swatch {
      width: 12px;
      height: 12px;
      border-radius: 3px;
    }

    .detail-summary {
      padding: 10px;
      border-radius: 12px;
      background: rgba(47, 88, 60, 0.08);
      text-align: center;
      font-size: 0.95rem;
    }

    .detail-summary.done {
      background: var(--accent-soft);
      color: #1f5c36;
      font-weight: 600;
    }

    .status {
      font-size: 0.95rem;
      color: #6b756c;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
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

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>habitra</h1>
      <p class="subtitle">Check off your habits each day and grow a calendar of fully achieved days.</p>
    </header>

    <section class="card">
      <div class="today-head">
        <h2>Today</h2>
        <span id="today-date" class="today-date">{{TODAY}}</span>
      </div>
      <div class="progress-track"><div id="progress-fill" class="progress-fill"></div></div>
      <span id="progress-label" class="progress-label">0 / 0 done</span>
      <ul id="task-list" class="tasks"></ul>
      <p id="task-empty" class="empty" hidden>No habits yet. Add your first one below.</p>
      <form id="add-form" class="add" autocomplete="off">
        <input id="add-title" type="text" placeholder="New habit, e.g. Read 10 pages" />
        <button type="submit">Add</button>
      </form>
    </section>

    <section class="card">
      <div class="cal-head">
        <h2>Achievement calendar</h2>
        <div class="cal-nav">
          <button class="icon-btn" id="cal-prev" type="button" aria-label="Previous">&#8592;</button>
          <span class="label" id="cal-label"></span>
          <button class="icon-btn" id="cal-next" type="button" aria-label="Next">&#8594;</button>
        </div>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-mode="monthly" role="tab" aria-selected="true">Month</button>
          <button class="tab" type="button" data-mode="half_year" role="tab" aria-selected="false">6 months</button>
        </div>
      </div>
      <div id="calendar"></div>
      <div class="legend">
        <span>missed</span>
        <div class="swatch" style="background: rgba(47, 88, 60, 0.08)"></div>
        <div class="swatch" style="background: var(--accent)"></div>
        <span>achieved</span>
      </div>
    </section>

    <section class="card" id="detail-card" hidden>
      <div class="today-head">
        <h2 id="detail-title"></h2>
        <button class="icon-btn" id="detail-close" type="button">close</button>
      </div>
      <div id="detail-summary" class="detail-summary"></div>
      <ul id="detail-list" class="tasks"></ul>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const todayStr = document.getElementById('today-date').textContent;
    const statusEl = document.getElementById('status');
    const taskListEl = document.getElementById('task-list');
    const taskEmptyEl = document.getElementById('task-empty');
    const progressFillEl = document.getElementById('progress-fill');
    const progressLabelEl = document.getElementById('progress-label');
    const calendarEl = document.getElementById('calendar');
    const calLabelEl = document.getElementById('cal-label');
    const detailCardEl = document.getElementById('detail-card');
    const detailTitleEl = document.getElementById('detail-title');
    const detailSummaryEl = document.getElementById('detail-summary');
    const detailListEl = document.getElementById('detail-list');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let tasks = [];
    let logs = [];
    let mode = 'monthly';
    let anchor = todayStr.slice(0, 8) + '01';
    let detailDate = null;
    let calendarData = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const post = (path, body) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const put = (path, body) => api(path, {
      method: 'PUT',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const isLogged = (date, taskId) =>
      logs.some((log) => log.date === date && log.taskId === taskId);

    const shiftAnchor = (months) => {
      const [year, month] = anchor.split('-').map(Number);
      const shifted = new Date(year, month - 1 + months, 1);
      const mm = String(shifted.getMonth() + 1).padStart(2, '0');
      anchor = shifted.getFullYear() + '-' + mm + '-01';
    };

    const monthLabel = () => {
      const [year, month] = anchor.split('-').map(Number);
      const name = new Date(year, month - 1, 1).toLocaleString('en-US', { month: 'long' });
      if (mode === 'monthly') {
        return name + ' ' + year;
      }
      const last = new Date(year, month - 1 + 5, 1);
      const lastName = last.toLocaleString('en-US', { month: 'short' });
      return name.slice(0, 3) + ' ' + year + ' – ' + lastName + ' ' + last.getFullYear();
    };

    const renderTasks = () => {
      taskListEl.innerHTML = '';
      taskEmptyEl.hidden = tasks.length > 0;

      tasks.forEach((task, index) => {
        const li = document.createElement('li');

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = isLogged(todayStr, task.id);
        checkbox.addEventListener('change', () =>
          toggle(todayStr, task.id, checkbox.checked));

        const title = document.createElement('span');
        title.className = 'title' + (checkbox.checked ? ' done' : '');
        title.textContent = task.title;

        li.append(checkbox, title,
          iconButton('↑', () => move(index, -1)),
          iconButton('↓', () => move(index, 1)),
          iconButton('✎', () => rename(task)),
          iconButton('✕', () => remove(task)));
        taskListEl.appendChild(li);
      });

      const done = tasks.filter((task) => isLogged(todayStr, task.id)).length;
      const total = tasks.length;
      const percent = total === 0 ? 0 : Math.round((done / total) * 100);
      progressFillEl.style.width = percent + '%';
      progressLabelEl.textContent = done + ' / ' + total + ' done' +
        (total > 0 && done === total ? ' — all achieved!' : '');
    };

    const iconButton = (label, onClick) => {
      const button = document.createElement('button');
      button.type = 'button';
      button.className = 'icon-btn';
      button.textContent = label;
      button.addEventListener('click', onClick);
      return button;
    };

    const renderCalendar = () => {
      calLabelEl.textContent = monthLabel();
      calendarEl.innerHTML = '';
      if (!calendarData) {
        return;
      }

      if (mode === 'monthly') {
        const weekdays = document.createElement('div');
        weekdays.className = 'weekday-row';
        ['S', 'M', 'T', 'W', 'T', 'F', 'S'].forEach((day) => {
          const cell = document.createElement('div');
          cell.textContent = day;
          weekdays.appendChild(cell);
        });

        const grid = document.createElement('div');
        grid.className = 'month-grid';
        const anchorMonth = anchor.slice(0, 7);
        calendarData.days.forEach((day) => {
          const cell = document.createElement('div');
          cell.className = 'cell'
            + (day.achieved ? ' achieved' : '')
            + (day.date.slice(0, 7) !== anchorMonth ? ' outside' : '')
            + (day.date === todayStr ? ' today' : '');
          cell.textContent = Number(day.date.slice(8));
          cell.addEventListener('click', () => openDetail(day.date));
          grid.appendChild(cell);
        });
        calendarEl.append(weekdays, grid);
      } else {
        const grid = document.createElement('div');
        grid.className = 'heat-grid';
        calendarData.days.forEach((day) => {
          const cell = document.createElement('div');
          cell.className = 'heat-cell'
            + (day.achieved ? ' achieved' : '')
            + (day.date === todayStr ? ' today' : '');
          cell.title = day.date;
          cell.addEventListener('click', () => openDetail(day.date));
          grid.appendChild(cell);
        });
        calendarEl.appendChild(grid);
      }
    };

    const renderDetail = async () => {
      if (!detailDate) {
        detailCardEl.hidden = true;
        return;
      }
      const summary = await api('/api/summary?date=' + detailDate);
      detailCardEl.hidden = false;
      detailTitleEl.textContent = detailDate;
      detailSummaryEl.className = 'detail-summary' + (summary.all_completed ? ' done' : '');
      detailSummaryEl.textContent = summary.all_completed
        ? '🌱 All habits achieved!'
        : summary.completed_count + ' / ' + summary.total_count + ' habits done';

      const completed = new Set(summary.completed_task_ids);
      detailListEl.innerHTML = '';
      tasks.forEach((task) => {
        const li = document.createElement('li');
        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = completed.has(task.id);
        checkbox.addEventListener('change', () =>
          toggle(detailDate, task.id, checkbox.checked));
        const title = document.createElement('span');
        title.className = 'title' + (checkbox.checked ? ' done' : '');
        title.textContent = task.title;
        li.append(checkbox, title);
        detailListEl.appendChild(li);
      });
    };

    const openDetail = (date) => {
      detailDate = date;
      renderDetail().catch((err) => setStatus(err.message, 'error'));
    };

    const loadInitial = async () => {
      const data = await api('/api/initial');
      tasks = data.tasks;
      logs = data.logs;
    };

    const loadCalendar = async () => {
      calendarData = await api('/api/calendar?anchor=' + anchor + '&mode=' + mode);
    };

    const refresh = async () => {
      await Promise.all([loadInitial(), loadCalendar()]);
      renderTasks();
      renderCalendar();
      await renderDetail();
    };

    const mutate = async (action) => {
      setStatus('Saving...', '');
      try {
        await action();
        await refresh();
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(err.message, 'error');
        refresh().catch(() => {});
      }
    };

    const toggle = (date, taskId, done) =>
      mutate(() => post('/api/logs/toggle', { date, taskId, done }));

    const rename = (task) => {
      const title = prompt('Rename habit', task.title);
      if (title === null) {
        return;
      }
      mutate(() => put('/api/tasks/' + task.id, { title }));
    };

    const remove = (task) => {
      if (!confirm('Delete "' + task.title + '" and all of its history?')) {
        return;
      }
      mutate(() => api('/api/tasks/' + task.id, { method: 'DELETE' }));
    };

    const move = (index, delta) => {
      const target = index + delta;
      if (target < 0 || target >= tasks.length) {
        return;
      }
      const order = tasks.map((task) => task.id);
      [order[index], order[target]] = [order[target], order[index]];
      mutate(() => put('/api/order', { order }));
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('add-title');
      const title = input.value;
      mutate(() => post('/api/tasks', { title }).then(() => {
        input.value = '';
      }));
    });

    document.getElementById('cal-prev').addEventListener('click', () => {
      shiftAnchor(mode === 'monthly' ? -1 : -6);
      loadCalendar().then(renderCalendar).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('cal-next').addEventListener('click', () => {
      shiftAnchor(mode === 'monthly' ? 1 : 6);
      loadCalendar().then(renderCalendar).catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        mode = button.dataset.mode;
        tabs.forEach((tab) => {
          const isActive = tab === button;
          tab.classList.toggle('active', isActive);
          tab.setAttribute('aria-selected', String(isActive));
        });
        loadCalendar().then(renderCalendar).catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('detail-close').addEventListener('click', () => {
      detailDate = null;
      detailCardEl.hidden = true;
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
