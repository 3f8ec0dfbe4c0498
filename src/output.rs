//! CLI output formatting.
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.
//!
//! # Check
//!
//! ```text
//! Accordion
//!     Open on load: first subcollection
//! Gallery
//!     Gap fallback: 16px
//!     Scroll: smooth
//! Keyboard
//!     Previous: ArrowLeft
//!     Next: ArrowRight
//! Anchors
//!     Scroll: smooth
//! Parallax
//!     Pan: 15% → 85% over one viewport height
//! ```
//!
//! Disabled features show `(disabled)` after their heading and no details.

use crate::config::{BehaviorConfig, OpenOnLoad, ScrollMotion};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn heading(title: &str, enabled: bool) -> String {
    if enabled {
        title.to_string()
    } else {
        format!("{title} (disabled)")
    }
}

fn detail(label: &str, value: impl std::fmt::Display) -> String {
    format!("{}{label}: {value}", indent(1))
}

fn motion(m: ScrollMotion) -> &'static str {
    match m {
        ScrollMotion::Smooth => "smooth",
        ScrollMotion::Instant => "instant",
    }
}

fn open_on_load(policy: OpenOnLoad) -> &'static str {
    match policy {
        OpenOnLoad::FirstSubcollection => "first subcollection",
        OpenOnLoad::FirstCollection => "first collection",
        OpenOnLoad::None => "nothing",
    }
}

pub fn format_config_summary(config: &BehaviorConfig) -> Vec<String> {
    let mut lines = vec![
        heading("Accordion", true),
        detail("Open on load", open_on_load(config.accordion.open_on_load)),
        heading("Gallery", true),
        detail("Gap fallback", format!("{}px", config.gallery.gap_fallback)),
        detail("Scroll", motion(config.gallery.scroll_behavior)),
    ];

    lines.push(heading("Keyboard", config.keyboard.enabled));
    if config.keyboard.enabled {
        lines.push(detail("Previous", &config.keyboard.previous));
        lines.push(detail("Next", &config.keyboard.next));
    }

    lines.push(heading("Anchors", config.anchors.enabled));
    if config.anchors.enabled {
        lines.push(detail("Scroll", motion(config.anchors.scroll_behavior)));
    }

    lines.push(heading("Parallax", config.parallax.enabled));
    if config.parallax.enabled {
        lines.push(detail(
            "Pan",
            format!(
                "{}% → {}% over one viewport height",
                config.parallax.start_percent, config.parallax.end_percent
            ),
        ));
    }
    lines
}

pub fn print_config_summary(config: &BehaviorConfig) {
    for line in format_config_summary(config) {
        println!("{line}");
    }
}
