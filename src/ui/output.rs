use crate::output::is_quiet;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::ROCKET, text.style(theme().header.clone()));
}

/// Title line plus a dimmed subtitle
pub fn banner(title: &str, subtitle: &str) {
    if is_quiet() {
        return;
    }
    println!();
    println!("  {}", title.style(theme().header.clone()));
    println!("  {}", subtitle.style(theme().dim.clone()));
    println!();
}

pub fn status(icon: &str, label: &str, value: &str) {
    println!("{} {}: {}", icon, label.style(theme().dim.clone()), value);
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted.clone()).to_string()
}

/// `CUSTOM` / `SYSTEM` tag shown next to a snippet
pub fn origin_badge(is_custom: bool) -> String {
    if is_custom {
        "CUSTOM".style(theme().custom.clone()).to_string()
    } else {
        "SYSTEM".style(theme().system.clone()).to_string()
    }
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}
