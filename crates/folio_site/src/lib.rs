//! Folio Site
//!
//! The portfolio page itself: static content, the component tree, page
//! composition over the core controllers, and a headless scenario runner.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use folio_core::{Event, ManualClock};
//! use folio_site::{Page, SiteConfig};
//! use std::rc::Rc;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 1, 14)
//!     .and_then(|d| d.and_hms_opt(9, 0, 0))
//!     .unwrap();
//! let page = Page::mount(SiteConfig::default(), Rc::new(ManualClock::at(now))).unwrap();
//!
//! page.dispatch(&mut Event::scroll(80.0));
//! let snapshot = page.snapshot();
//! assert!(snapshot.scrolled);
//! assert_eq!(snapshot.date_label, "Wed, Jan 14 2026");
//!
//! let tree = page.render();
//! assert!(tree.find_by_id("navbar").is_some());
//! ```

pub mod components;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_scenario;
pub mod motion;
pub mod page;
pub mod snapshot;
pub mod view;

pub use components::render;
pub use config::{SiteConfig, Variant};
pub use document::{render_document, DocumentOptions};
pub use error::{Result, SiteError};
pub use headless_report::{HeadlessReport, ReportStatus};
pub use headless_runner::{run_loaded_scenario, run_scenario, HeadlessRunConfig, RunOutcome};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use page::Page;
pub use snapshot::RenderSnapshot;
pub use view::{Element, Node};
