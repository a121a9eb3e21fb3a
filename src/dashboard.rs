// -------------------------
// Browser front end served at `/`
// -------------------------

pub const DASHBOARD_HTML: &str = r#"
<!doctype html>
<html lang="en" class="dark">
<head>
  <meta charset="utf-8" />
  <title>Amazon Scraper</title>

  <!-- Tailwind (CDN) -->
  <script>
    tailwind.config = { darkMode: 'class' };
  </script>
  <script src="https://cdn.tailwindcss.com"></script>

  <!-- Alpine.js (CDN) -->
  <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>

  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <style>
    [x-cloak]{display:none!important}
    .stars{position:relative;display:inline-block;font-size:1rem;line-height:1;color:#475569}
    .stars::before{content:"\2605\2605\2605\2605\2605"}
    .stars-inner{position:absolute;top:0;left:0;white-space:nowrap;overflow:hidden;color:#f59e0b}
    .stars-inner::before{content:"\2605\2605\2605\2605\2605"}
  </style>
</head>
<body class="bg-slate-900 text-slate-100 antialiased">
  <main class="max-w-6xl mx-auto p-6 flex flex-col gap-6 min-h-dvh"
        x-data="amzscrape()"
        x-init="init()">

    <h1 class="text-3xl font-bold tracking-tight">Amazon Scraper</h1>

    <!-- Controls -->
    <div class="bg-slate-800 shadow-sm ring-1 ring-slate-700 rounded-xl p-4 space-y-3">
      <div class="flex flex-col md:flex-row gap-3 md:items-center">
        <input x-model="keyword"
               @keydown.enter="scrape()"
               type="text"
               class="flex-1 rounded-lg border-slate-700 bg-slate-900 text-slate-100 focus:border-indigo-500 focus:ring-indigo-500 px-2 py-1.5 text-sm"
               placeholder="Search keyword, e.g. laptop">

        <label x-show="proxyAvailable" x-cloak class="inline-flex items-center gap-2 text-sm text-slate-300">
          <input type="checkbox" x-model="useProxy" class="rounded border-slate-600 bg-slate-900">
          Use Proxy
        </label>

        <button @click="scrape()"
                :disabled="isRunning"
                class="inline-flex items-center gap-2 px-3 py-1.5 text-sm rounded-md bg-indigo-600 text-white font-medium hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed">
          <svg x-show="isRunning" xmlns="http://www.w3.org/2000/svg" class="animate-spin h-3.5 w-3.5" viewBox="0 0 24 24" fill="none"><circle class="opacity-30" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"/><path class="opacity-80" fill="currentColor" d="M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z"/></svg>
          <span x-text="isRunning ? 'Scraping…' : 'Scrape'"></span>
        </button>
      </div>

      <div class="text-sm text-slate-300 flex flex-wrap gap-4">
        <span x-show="isRunning" x-cloak>Scraping… <span class="tabular-nums" x-text="timerText"></span></span>
        <span x-show="count > 0" x-cloak x-text="count === 1 ? 'Showing 1 item' : `Showing ${count} items`"></span>
        <span x-show="timeTaken" x-cloak x-text="`Scraping finished in ${timeTaken} seconds`"></span>
      </div>

      <div x-show="creditsMsg" x-cloak class="text-sm text-amber-300" x-text="creditsMsg"></div>
      <div x-show="error" x-cloak class="text-sm text-rose-400" x-text="error"></div>
    </div>

    <!-- Results -->
    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
      <template x-for="(p, i) in products" :key="i">
        <div class="bg-slate-800 ring-1 ring-slate-700 rounded-xl p-4 flex flex-col gap-3">
          <h3 class="text-sm font-semibold line-clamp-3" x-text="p.title"></h3>
          <div class="flex items-center gap-2 text-sm text-slate-300">
            <template x-if="starWidth(p.rating) !== null">
              <div class="stars"><div class="stars-inner" :style="`width: ${starWidth(p.rating)}%`"></div></div>
            </template>
            <span x-show="starWidth(p.rating) === null">N/A</span>
            <span x-text="`(${p.reviews} reviews)`"></span>
          </div>
          <div class="bg-white rounded-lg p-2 flex justify-center">
            <img :src="p.image" :alt="p.title" class="h-40 object-contain">
          </div>
        </div>
      </template>
    </div>
  </main>

  <script>
    function amzscrape() {
      return {
        keyword: '',
        useProxy: false,
        proxyAvailable: false,

        isRunning: false,
        products: [],
        count: 0,
        error: '',
        timeTaken: '',
        timerText: '(0.00s)',
        creditsMsg: '',

        _timer: null,

        async init() {
          try {
            const rsp = await fetch('/api/check-proxy');
            const data = await rsp.json();
            this.proxyAvailable = !!data.proxyAvailable;
          } catch (e) {
            console.error('Error checking proxy availability:', e.message);
          }
        },

        starWidth(rating) {
          const n = parseFloat(rating);
          return isNaN(n) ? null : n * 20;
        },

        startTimer() {
          if (this._timer) { clearInterval(this._timer); }
          let ms = 0;
          this.timerText = '(0.00s)';
          this._timer = setInterval(() => {
            ms += 100;
            this.timerText = `(${(ms / 1000).toFixed(2)}s)`;
          }, 100);
        },

        stopTimer() {
          if (this._timer) { clearInterval(this._timer); this._timer = null; }
        },

        async scrape() {
          const keyword = this.keyword.trim();
          const proxied = this.proxyAvailable && this.useProxy;
          this.error = '';
          this.creditsMsg = '';
          this.timeTaken = '';
          this.count = 0;

          if (!keyword) {
            this.products = [];
            this.error = 'Please enter a keyword.';
            return;
          }

          this.products = [];
          this.isRunning = true;
          this.startTimer();
          const started = performance.now();

          try {
            const qs = new URLSearchParams({ keyword, useProxy: String(proxied) });
            const rsp = await fetch(`/api/scrape?${qs.toString()}`);
            const data = await rsp.json();
            if (!rsp.ok || data.error) {
              throw new Error(data.error || `HTTP ${rsp.status}`);
            }
            if (data.length === 0) {
              this.error = 'No products found.';
            } else {
              this.products = data;
              this.count = data.length;
              this.timeTaken = ((performance.now() - started) / 1000).toFixed(2);
            }
          } catch (e) {
            this.error = proxied
              ? `${e.message}.`
              : `${e.message}. If Amazon is rate-limiting you, try again later or enable "Use Proxy".`;
          } finally {
            this.stopTimer();
            this.isRunning = false;
            if (proxied) {
              await this.refreshCredits();
            }
          }
        },

        async refreshCredits() {
          this.creditsMsg = 'Updating credits usage…';
          try {
            const rsp = await fetch('/api/scraperapi/credits');
            const data = await rsp.json();
            if (data.error) { throw new Error(data.error); }
            this.creditsMsg =
              `You have ${data.creditsLeft} credits left in this billing period. ` +
              `With those remaining credits, you can make ${data.requestsLeft} requests (scrapes) this month.`;
          } catch (e) {
            console.error('Error fetching account info:', e.message);
            this.creditsMsg = '';
          }
        },
      }
    }
  </script>
</body>
</html>
"#;
