use super::Formatter;
use crate::inko::config::HtmlConfig;
use crate::inko::error::Result;
use crate::inko::token::Token;

/// Renders `<div class="highlight"><pre>...</pre></div>` with one span per
/// classified token. Tokens without a short class name are written bare.
pub struct HtmlFormatter {
    css_class: String,
    class_prefix: String,
}

impl HtmlFormatter {
    pub fn new(config: &HtmlConfig) -> Self {
        Self {
            css_class: config.css_class.clone(),
            class_prefix: config.class_prefix.clone(),
        }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String> {
        let mut out = format!("<div class=\"{}\"><pre>", escape(&self.css_class));
        for token in tokens {
            let class = token.kind.short_name();
            if class.is_empty() {
                out.push_str(&escape(token.text));
            } else {
                out.push_str(&format!(
                    "<span class=\"{}{}\">{}</span>",
                    escape(&self.class_prefix),
                    class,
                    escape(token.text)
                ));
            }
        }
        out.push_str("</pre></div>\n");
        Ok(out)
    }

    fn description(&self) -> &str {
        "HTML spans with short category class names"
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
