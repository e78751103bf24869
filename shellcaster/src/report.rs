//! Color-coded result rendering
//!
//! Stdout carries only the per-platform report. ANSI colors are applied
//! only when stdout is a terminal, so piped output stays plain.

use libshellcaster::dispatcher::PlatformResult;

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Red,
    Yellow,
}

const RESET: &str = "\x1b[0m";

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Green => "\x1b[92m",
            Color::Red => "\x1b[91m",
            Color::Yellow => "\x1b[93m",
        }
    }
}

/// Print one line, colored when stdout is a TTY.
pub fn print_colored(text: &str, color: Color) {
    if atty::is(atty::Stream::Stdout) {
        println!("{}{}{}", color.code(), text, RESET);
    } else {
        println!("{}", text);
    }
}

/// Render one line per platform result: green for success, red for failure,
/// yellow for platforms that were never attempted (unknown or unconfigured).
pub fn render_results(results: &[PlatformResult]) {
    for result in results {
        let line = format!("[{}] {}", capitalize(&result.platform), result.message);
        print_colored(&line, result_color(result));
    }
}

fn result_color(result: &PlatformResult) -> Color {
    if result.success {
        Color::Green
    } else if result.message.starts_with("Unsupported platform")
        || result.message.starts_with("Skipped:")
    {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
