use crate::core::layout::{PageLayout, RangeSlider};
use crate::utils::error::Result;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<script src="{{PLOTLY}}"></script>
<style>
  body { font-family: sans-serif; margin: 0 2em; }
  h1 { text-align: center; color: #503D36; font-size: 40px; }
  .slider { display: flex; gap: 1em; align-items: center; }
  .slider input[type=range] { flex: 1; }
  .marks { display: flex; justify-content: space-between; font-size: 12px; color: #555; }
</style>
</head>
<body>
<h1>{{TITLE}}</h1>
<input id="site-dropdown" list="site-options" autocomplete="off">
<datalist id="site-options"></datalist>
<br>
<div id="success-pie-chart"></div>
<br>
<p>Payload range (Kg): <span id="payload-label"></span></p>
<div class="slider">
  <input id="payload-min" type="range" min="{{MIN}}" max="{{MAX}}" step="{{STEP}}" list="payload-marks">
  <input id="payload-max" type="range" min="{{MIN}}" max="{{MAX}}" step="{{STEP}}" list="payload-marks">
</div>
<datalist id="payload-marks">{{MARK_OPTIONS}}</datalist>
<div class="marks">{{MARK_LABELS}}</div>
<div id="success-payload-scatter-chart"></div>
<script id="layout" type="application/json">{{LAYOUT}}</script>
<script>
const layout = JSON.parse(document.getElementById("layout").textContent);
const dropdown = document.getElementById("site-dropdown");
const options = document.getElementById("site-options");
const lo = document.getElementById("payload-min");
const hi = document.getElementById("payload-max");
const label = document.getElementById("payload-label");

dropdown.placeholder = layout.site_dropdown.placeholder;
for (const opt of layout.site_dropdown.options) {
  const el = document.createElement("option");
  el.value = opt.value;
  el.label = opt.label;
  options.appendChild(el);
}
const validSites = new Set(layout.site_dropdown.options.map((o) => o.value));
let lastSite = layout.site_dropdown.value;
dropdown.value = lastSite;

lo.value = layout.payload_slider.value[0];
hi.value = layout.payload_slider.value[1];

function state() {
  const a = Number(lo.value), b = Number(hi.value);
  return { site: lastSite, payload_range: [Math.min(a, b), Math.max(a, b)] };
}

async function changed(id) {
  const s = state();
  label.textContent = s.payload_range[0] + " - " + s.payload_range[1];
  const res = await fetch("/api/callback", {
    method: "POST",
    headers: { "content-type": "application/json" },
    body: JSON.stringify({ changed: id, state: s }),
  });
  if (!res.ok) { return; }
  const body = await res.json();
  for (const [output, figure] of Object.entries(body.outputs)) {
    Plotly.react(output, figure.data, figure.layout);
  }
}

dropdown.addEventListener("change", () => {
  // Only listed options are selectable; partial input restores the last choice.
  if (!validSites.has(dropdown.value)) {
    dropdown.value = lastSite;
    return;
  }
  lastSite = dropdown.value;
  changed("site-dropdown");
});
lo.addEventListener("change", () => changed("payload-slider"));
hi.addEventListener("change", () => changed("payload-slider"));
changed("site-dropdown");
</script>
</body>
</html>
"#;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn mark_options(slider: &RangeSlider) -> String {
    slider
        .marks
        .iter()
        .map(|m| format!(r#"<option value="{}" label="{}"></option>"#, m.value, escape_html(&m.label)))
        .collect()
}

fn mark_labels(slider: &RangeSlider) -> String {
    slider
        .marks
        .iter()
        .map(|m| format!("<span>{}</span>", escape_html(&m.label)))
        .collect()
}

/// Renders the dashboard page with the layout embedded as JSON. The page
/// script posts every control change to `/api/callback` and redraws the
/// returned figures.
pub fn render_index(layout: &PageLayout) -> Result<String> {
    let layout_json = serde_json::to_string(layout)?.replace("</", "<\\/");
    let slider = &layout.payload_slider;

    Ok(TEMPLATE
        .replace("{{TITLE}}", &escape_html(layout.title))
        .replace("{{PLOTLY}}", PLOTLY_CDN)
        .replace("{{MIN}}", &slider.min.to_string())
        .replace("{{MAX}}", &slider.max.to_string())
        .replace("{{STEP}}", &slider.step.to_string())
        .replace("{{MARK_OPTIONS}}", &mark_options(slider))
        .replace("{{MARK_LABELS}}", &mark_labels(slider))
        .replace("{{LAYOUT}}", &layout_json))
}
