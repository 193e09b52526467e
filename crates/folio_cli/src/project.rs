//! Project creation and scaffolding

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::{FolioConfig, CONFIG_FILE};

pub const SMOKE_SCENARIO: &str = "scenarios/smoke.json";

/// Create a new Folio project
pub fn create_project(path: &Path, name: &str) -> Result<()> {
    if path.join(CONFIG_FILE).exists() {
        anyhow::bail!("{} already contains a {CONFIG_FILE}", path.display());
    }

    fs::create_dir_all(path.join("scenarios"))?;

    let config = FolioConfig::new(name);
    fs::write(path.join(CONFIG_FILE), config.to_toml()?)?;

    fs::write(path.join(SMOKE_SCENARIO), smoke_scenario())?;

    fs::write(
        path.join(".gitignore"),
        r#"# Rendered output
/dist/
reports/

# IDE
.idea/
.vscode/

# OS
.DS_Store
Thumbs.db
"#,
    )?;

    fs::write(
        path.join("README.md"),
        format!(
            r#"# {name}

A Folio portfolio page.

## Render

```bash
folio render
```

## Live preview

```bash
folio dev
```

## Scenarios

```bash
folio scenario {SMOKE_SCENARIO}
```
"#
        ),
    )?;

    Ok(())
}

fn smoke_scenario() -> &'static str {
    r#"{
  "start": "2026-01-14T09:00:00",
  "steps": [
    { "type": "assert_exists", "id": "navbar" },
    { "type": "assert_date_label", "value": "Wed, Jan 14 2026" },
    { "type": "assert_scrolled", "value": false },
    { "type": "scroll", "y": 400 },
    { "type": "assert_scrolled", "value": true },
    { "type": "toggle_theme" },
    { "type": "assert_dark", "value": true },
    { "type": "wait", "ms": 1000 }
  ]
}
"#
}
