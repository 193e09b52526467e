//! Full HTML document around the rendered page

use crate::components;
use crate::content::PROFILE;
use crate::motion::motion_css;
use crate::snapshot::RenderSnapshot;
use crate::components::{navbar, PAGE_ID};
use crate::config::Variant;
use crate::view::escape;
use folio_animation::MarqueeAnimator;
use folio_core::clock::REFRESH_INTERVAL;
use folio_theme::{variant_classes, ColorScheme, Palette, StyleContext, StyleRole, THEME_TOGGLE_ID};
use serde_json::{json, Map, Value};
use std::time::Duration;

/// Name of the marquee `@keyframes` rule
pub const MARQUEE_ANIMATION: &str = "marquee";

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const DOT_FONT: &str =
    "https://fonts.googleapis.com/css2?family=Bitcount+Prop+Single&display=swap";

const TAILWIND_CONFIG: &str = r#"tailwind.config = {
  theme: { extend: { fontFamily: { dot: ['"Bitcount Prop Single"', 'monospace'] } } }
};"#;

const HALFTONE_CSS: &str = ".halftone { background-size: 20px 20px; background-image: radial-gradient(var(--halftone) 2px, transparent 2px); }
.halftone-overlay { background-size: 4px 4px; background-image: radial-gradient(rgba(0,0,0,0.2) 1px, transparent 1px); }
body { background: var(--background); color: var(--foreground); }
";

const DEVTOOLS_GUARD_JS: &str = r#"document.addEventListener('contextmenu', (e) => e.preventDefault());
document.addEventListener('keydown', (e) => {
  const k = e.key.toUpperCase();
  const cmd = e.ctrlKey || e.metaKey;
  if (k === 'F12' || (cmd && e.shiftKey && ['I', 'J', 'C'].includes(k)) || (cmd && !e.shiftKey && k === 'U')) {
    e.preventDefault();
  }
});"#;

// Expects FOLIO_STYLES, FOLIO_IDS, FOLIO_THRESHOLD and FOLIO_REFRESH_MS
const LIVE_JS: &str = r#"(() => {
  const root = document.documentElement;
  const byId = (id) => document.getElementById(id);
  let dark = root.dataset.theme === 'dark';
  let scrolled = false;

  const apply = () => {
    const slot = (dark ? 2 : 0) + (scrolled ? 1 : 0);
    const scheme = dark ? 'dark' : 'light';
    root.dataset.theme = scheme;
    byId(FOLIO_IDS.page)?.setAttribute('data-theme', scheme);
    document.querySelectorAll('[data-role]').forEach((el) => {
      const sets = FOLIO_STYLES[el.dataset.role];
      if (!sets) return;
      sets.forEach((set) => set.split(' ').forEach((c) => c && el.classList.remove(c)));
      sets[slot].split(' ').forEach((c) => c && el.classList.add(c));
    });
    const nav = byId(FOLIO_IDS.navbar);
    if (nav) nav.dataset.scrolled = String(scrolled);
    const toggle = byId(FOLIO_IDS.toggle);
    if (toggle) toggle.dataset.icon = dark ? 'sun' : 'moon';
  };

  const onScroll = () => {
    const next = window.scrollY >= FOLIO_THRESHOLD;
    if (next !== scrolled) {
      scrolled = next;
      apply();
    }
  };

  const DAYS = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];
  const MONTHS = ['Jan', 'Feb', 'Mar', 'Apr', 'May', 'Jun', 'Jul', 'Aug', 'Sep', 'Oct', 'Nov', 'Dec'];
  const refreshDate = () => {
    const badge = byId(FOLIO_IDS.date);
    const d = new Date();
    if (badge) {
      badge.textContent = `${DAYS[d.getDay()]}, ${MONTHS[d.getMonth()]} ${d.getDate()} ${d.getFullYear()}`;
    }
  };

  byId(FOLIO_IDS.toggle)?.addEventListener('click', () => {
    dark = !dark;
    apply();
  });
  window.addEventListener('scroll', onScroll, { passive: true });
  onScroll();
  refreshDate();
  setInterval(refreshDate, FOLIO_REFRESH_MS);
})();"#;

/// Options that affect the document shell but not the page tree
#[derive(Clone, Copy, Debug)]
pub struct DocumentOptions {
    pub suppress_devtools: bool,
    /// Scroll offset at which the browser switches the navbar (inclusive)
    pub scroll_threshold: f32,
    /// How often the browser recomputes the date badge
    pub date_refresh: Duration,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            suppress_devtools: false,
            scroll_threshold: Variant::default().default_threshold(),
            date_refresh: REFRESH_INTERVAL,
        }
    }
}

/// Role name mapped to its variant classes under each [`StyleContext::ALL`]
/// context, in that order
pub fn style_table() -> Value {
    let mut table = Map::new();
    for role in StyleRole::ALL {
        let sets: Vec<Value> = StyleContext::ALL
            .iter()
            .map(|ctx| Value::String(variant_classes(*ctx, role).to_string()))
            .collect();
        table.insert(role.name().to_string(), Value::Array(sets));
    }
    Value::Object(table)
}

/// Browser-side counterpart of the page controllers: theme toggle, scroll
/// threshold and date refresh
pub fn live_script(options: &DocumentOptions) -> String {
    let ids = json!({
        "page": PAGE_ID,
        "navbar": navbar::NAVBAR_ID,
        "toggle": THEME_TOGGLE_ID,
        "date": navbar::DATE_BADGE_ID,
    });
    format!(
        "const FOLIO_STYLES = {};\nconst FOLIO_IDS = {};\nconst FOLIO_THRESHOLD = {};\nconst FOLIO_REFRESH_MS = {};\n{}",
        style_table(),
        ids,
        options.scroll_threshold,
        options.date_refresh.as_millis(),
        LIVE_JS
    )
}

/// Stylesheet shared by every render: palette variables, halftone decor,
/// entrance motions and the marquee loop
pub fn stylesheet(marquee: &MarqueeAnimator) -> String {
    let mut css = Palette::css_rules();
    css.push_str(HALFTONE_CSS);
    css.push_str(&motion_css());
    css.push_str(&marquee.css_keyframes(MARQUEE_ANIMATION));
    css.push('\n');
    css.push_str(&format!(
        ".marquee-track {{ animation: {}; }}\n",
        marquee.css_animation(MARQUEE_ANIMATION)
    ));
    css
}

pub fn render_document(
    snapshot: &RenderSnapshot,
    marquee: &MarqueeAnimator,
    options: DocumentOptions,
) -> String {
    let scheme = ColorScheme::from_dark(snapshot.dark);
    let title = format!("{} | {}", PROFILE.name_lines.join(" "), PROFILE.title);
    let body = components::render(snapshot).to_html();

    let mut html = String::with_capacity(body.len() + 4096);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"en\" data-theme=\"{scheme}\">\n"));
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&title)));
    html.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", escape(DOT_FONT)));
    html.push_str(&format!("<script src=\"{TAILWIND_CDN}\"></script>\n"));
    html.push_str(&format!("<script>{TAILWIND_CONFIG}</script>\n"));
    html.push_str(&format!("<style>\n{}</style>\n", stylesheet(marquee)));
    if options.suppress_devtools {
        html.push_str(&format!("<script>{DEVTOOLS_GUARD_JS}</script>\n"));
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&body);
    html.push_str(&format!("\n<script>\n{}\n</script>", live_script(&options)));
    html.push_str("\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::MarqueeConfig;

    fn marquee() -> MarqueeAnimator {
        MarqueeAnimator::new(MarqueeConfig::default()).unwrap()
    }

    #[test]
    fn document_shell() {
        let html = render_document(&RenderSnapshot::default(), &marquee(), DocumentOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\" data-theme=\"light\">"));
        assert!(html.contains("<title>Safal Narshing Shrestha | ML/AI Engineer</title>"));
        assert!(html.contains("cdn.tailwindcss.com"));
        assert!(!html.contains("contextmenu"));
    }

    #[test]
    fn stylesheet_includes_marquee_loop() {
        let css = stylesheet(&marquee());
        assert!(css.contains("@keyframes marquee"));
        assert!(css.contains("translateX(-50%)"));
        assert!(css.contains(".marquee-track { animation: marquee 20000ms linear infinite; }"));
        assert!(css.contains("--halftone"));
    }

    #[test]
    fn devtools_script_only_when_enabled() {
        let html = render_document(
            &RenderSnapshot::default(),
            &marquee(),
            DocumentOptions {
                suppress_devtools: true,
                ..DocumentOptions::default()
            },
        );
        assert!(html.contains("contextmenu"));
    }

    #[test]
    fn live_script_wires_controls() {
        let html = render_document(&RenderSnapshot::default(), &marquee(), DocumentOptions::default());
        let script_start = html.rfind("<script>").unwrap();
        let script = &html[script_start..];
        assert!(script.contains("\"toggle\":\"theme-toggle\""));
        assert!(script.contains("\"date\":\"date-badge\""));
        assert!(script.contains("const FOLIO_THRESHOLD = 50;"));
        assert!(script.contains("const FOLIO_REFRESH_MS = 60000;"));
        assert!(script.contains("addEventListener('click'"));
        assert!(script.contains("window.scrollY >= FOLIO_THRESHOLD"));
        assert!(html.contains("id=\"navbar\" class="));
        assert!(html.contains("data-role=\"nav-bar\""));
    }

    #[test]
    fn style_table_holds_every_context() {
        let table = style_table();
        let navbar = table["nav-bar"].as_array().unwrap();
        assert_eq!(navbar.len(), 4);
        assert_eq!(navbar[0], "bg-black text-white");
        assert!(navbar[1].as_str().unwrap().contains("backdrop-blur-xl"));
        assert_eq!(navbar[2], "bg-white text-black");
        assert_eq!(table["primary-button"][3], "bg-white text-black hover:bg-gray-200");
        assert_eq!(table.as_object().unwrap().len(), StyleRole::ALL.len());
    }
}
