//! Stderr messages for the command line.

use console::{style, StyledObject};

/// `NO_COLOR` disables styling for every CLI output.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

fn tagged(tag: StyledObject<&str>, plain: &str, text: &str) -> String {
    if is_color_disabled() {
        format!("{plain} {text}")
    } else {
        format!("{} {text}", tag.bold())
    }
}

pub fn print_error(text: &str) {
    eprintln!("{}", tagged(style("error:").red(), "error:", text));
}

pub fn print_warning(text: &str) {
    eprintln!("{}", tagged(style("warning:").yellow(), "warning:", text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_keeps_message() {
        let line = tagged(style("error:").red(), "error:", "bad pair");
        assert!(line.ends_with(" bad pair"));
        assert!(line.contains("error:"));
    }

    #[test]
    fn messages_do_not_panic() {
        print_error("price request failed");
        print_warning("");
        print_warning("\u{20bf} \u{2192} \u{20ae}");
    }
}
