use inksac::prelude::*;

/// Colors the prompt line inside the rustyline helper; falls back to plain
/// text when the terminal lacks color support.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn highlight_command(&self, input: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return input.to_string();
        }

        let mut parts: Vec<String> = input.split_whitespace().map(String::from).collect();
        if parts.is_empty() {
            return input.to_string();
        }

        let command_style = Style::builder()
            .foreground(Color::Cyan)
            .bold()
            .build();
        parts[0] = parts[0].clone().style(command_style).to_string();

        for part in parts.iter_mut().skip(1) {
            if part.starts_with('$') {
                let var_style = Style::builder().foreground(Color::Magenta).build();
                *part = part.clone().style(var_style).to_string();
            } else if part.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                *part = part.clone().style(flag_style).to_string();
            }
        }

        parts.join(" ")
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return hint.to_string();
        }

        let hint_style = Style::builder().foreground(Color::Green).build();
        hint.to_string().style(hint_style).to_string()
    }
}
