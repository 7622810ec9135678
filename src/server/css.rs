pub(super) fn build_css() -> &'static str {
    r#"* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { min-height: 100%; }
body {
  background: linear-gradient(135deg, #eff6ff, #e0e7ff); color: #1f2937;
  font-family: Inter, system-ui, sans-serif; font-size: 16px; line-height: 1.5;
  display: flex; flex-direction: column; min-height: 100vh;
}
main { flex: 1; max-width: 1100px; width: 100%; margin: 0 auto; padding: 32px 24px; }

/* ── Header ──────────────────────────────────────── */
.site-header { text-align: center; margin-bottom: 40px; }
.site-header h1 {
  font-size: 36px; font-weight: 800; margin-bottom: 12px;
  background: linear-gradient(90deg, #4f46e5, #7c3aed);
  -webkit-background-clip: text; background-clip: text; color: transparent;
}
.site-header p { font-size: 20px; color: #4b5563; max-width: 640px; margin: 0 auto; }

/* ── Navigation ──────────────────────────────────── */
.nav { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; margin-bottom: 40px; }
.nav a {
  padding: 12px 24px; border-radius: 999px; text-decoration: none;
  background: rgba(255,255,255,0.8); color: #374151; font-weight: 500;
  box-shadow: 0 1px 2px rgba(0,0,0,0.06); transition: box-shadow 0.3s;
}
.nav a:hover { box-shadow: 0 4px 10px rgba(0,0,0,0.1); }
.nav a.active { background: linear-gradient(90deg, #4f46e5, #7c3aed); color: #fff; }

h2.panel-title { font-size: 30px; font-weight: 700; text-align: center; color: #3730a3; margin-bottom: 32px; }
.card {
  background: #fff; border-radius: 16px; padding: 32px;
  box-shadow: 0 8px 30px rgba(0,0,0,0.12); margin-bottom: 24px;
}

/* ── Code ────────────────────────────────────────── */
pre.code {
  background: #111827; color: #4ade80; padding: 16px; border-radius: 8px;
  overflow-x: auto; font-size: 14px; font-family: 'JetBrains Mono', monospace;
  text-align: left; margin-top: 16px;
}

/* ── Techniques ──────────────────────────────────── */
.techniques { max-width: 768px; margin: 0 auto; }
.technique { text-align: center; }
.technique h3 { font-size: 26px; margin-bottom: 12px; color: #1f2937; }
.technique p { color: #4b5563; font-size: 18px; }

/* ── Playground ──────────────────────────────────── */
.playground { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; }
@media (max-width: 800px) { .playground { grid-template-columns: 1fr; } }
.controls label { display: block; margin-bottom: 8px; font-weight: 500; }
.controls .field { margin-bottom: 16px; }
.controls select, .controls input[type=range] { width: 100%; }
.controls select { padding: 8px; border: 1px solid #d1d5db; border-radius: 4px; }
.visual { display: flex; justify-content: center; align-items: center; }
.preview-parent { background: #fff; border-radius: 8px; }

/* ── Tutorials ───────────────────────────────────── */
.tutorial-picker { display: flex; justify-content: center; gap: 16px; margin-bottom: 32px; flex-wrap: wrap; }
.tutorial-picker a, .section-head {
  text-decoration: none; color: #1f2937;
}
.tutorial-picker a { padding: 8px 16px; border-radius: 999px; background: #e5e7eb; }
.tutorial-picker a.active { background: #4f46e5; color: #fff; }
.section { margin-bottom: 24px; }
.section-head {
  display: flex; justify-content: space-between; align-items: center;
  background: #f3f4f6; padding: 16px; border-radius: 8px; font-size: 20px; font-weight: 600;
}
.section-body p { margin-top: 16px; color: #4b5563; }

/* ── Quiz ────────────────────────────────────────── */
.quiz h3 { font-size: 20px; margin-bottom: 16px; }
.quiz .prompt { font-size: 18px; margin-bottom: 24px; }
.options { display: flex; flex-direction: column; gap: 16px; }
.option {
  width: 100%; padding: 12px; text-align: left; border-radius: 8px; font-size: 16px;
  background: #fff; border: 2px solid #e5e7eb; cursor: pointer; font-family: inherit;
}
.option:hover:enabled { background: #f3f4f6; }
.option:disabled { cursor: default; }
.option.correct { background: #dcfce7; border-color: #22c55e; }
.option.wrong { background: #fee2e2; border-color: #ef4444; }
.option .mark { float: right; }
.option.correct .mark { color: #16a34a; }
.option.wrong .mark { color: #dc2626; }
.feedback { margin-top: 24px; padding: 16px; background: #eff6ff; border-radius: 8px; }
.feedback h4 { margin-bottom: 8px; }
.btn {
  margin-top: 16px; background: #4f46e5; color: #fff; border: none; cursor: pointer;
  padding: 8px 24px; border-radius: 999px; font-size: 16px; font-family: inherit;
}
.btn:hover { background: #4338ca; }
.dots { display: flex; justify-content: center; gap: 8px; margin-top: 16px; }
.dot { width: 16px; height: 16px; border-radius: 50%; background: #d1d5db; }
.dot.done { background: #22c55e; }
.dot.current { background: #4f46e5; }
.completed { text-align: center; }
.completed p { font-size: 20px; margin-bottom: 16px; }

/* ── Error ───────────────────────────────────────── */
.error-box {
  max-width: 640px; margin: 0 auto; padding: 24px; border-radius: 8px;
  background: #fef2f2; border-left: 4px solid #ef4444; color: #991b1b;
}
.error-box a { color: #4f46e5; }

/* ── Footer ──────────────────────────────────────── */
footer { background: #111827; color: #fff; text-align: center; padding: 24px 0; margin-top: 32px; }
"#
}
