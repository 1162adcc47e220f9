//! Bundle card markup.
//!
//! Every piece of bundle text goes through [`escape_html`] before it is
//! placed in the fragment, so titles, names, symbols and prices can never
//! inject markup into the display region.

use crate::{Bundle, DisplayRegion, RegionError, Stock};

pub const CURRENCY_GLYPH: &str = "₹";

const TITLE_CLASS: &str = "text-2xl font-bold mb-4";
const DESCRIPTION_CLASS: &str = "text-gray-400 mb-4";
const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-3 gap-4";
const CARD_CLASS: &str = "glass-card p-4";
const NAME_CLASS: &str = "text-lg font-bold";
const SYMBOL_CLASS: &str = "text-gray-400";
const PRICE_CLASS: &str = "text-xl mt-2";

/// Build the HTML fragment for a bundle: title heading, optional
/// description, then one card per stock in bundle order.
pub fn render_bundle(bundle: &Bundle) -> String {
    let mut markup = Markup::default();

    markup.text_element(0, "h2", TITLE_CLASS, &bundle.title);
    if let Some(description) = bundle.description.as_deref().filter(|d| !d.is_empty()) {
        markup.text_element(0, "p", DESCRIPTION_CLASS, description);
    }

    markup.open(0, "div", GRID_CLASS);
    for stock in &bundle.stocks {
        render_card(&mut markup, stock);
    }
    markup.close(0, "div");

    markup.finish()
}

/// Render `bundle` and replace the region's content with the result in a
/// single write.
pub fn display_bundle(bundle: &Bundle, region: &dyn DisplayRegion) -> Result<(), RegionError> {
    let fragment = render_bundle(bundle);
    tracing::debug!(
        region = region.id(),
        stocks = bundle.stocks.len(),
        "replacing region content"
    );
    region.replace_content(&fragment)
}

fn render_card(markup: &mut Markup, stock: &Stock) {
    markup.open(1, "div", CARD_CLASS);
    markup.text_element(2, "h3", NAME_CLASS, &stock.name);
    markup.text_element(2, "p", SYMBOL_CLASS, &stock.symbol);
    let price = format!("{CURRENCY_GLYPH}{}", stock.price);
    markup.text_element(2, "p", PRICE_CLASS, &price);
    markup.close(1, "div");
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    push_escaped(&mut escaped, input);
    escaped
}

fn push_escaped(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Line-oriented fragment builder. Tag names and classes are static; only
/// text content is caller-supplied and it is always escaped.
#[derive(Debug, Default)]
struct Markup {
    buffer: String,
}

impl Markup {
    const INDENT: &'static str = "    ";

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buffer.push_str(Self::INDENT);
        }
    }

    fn open(&mut self, depth: usize, tag: &'static str, class: &'static str) {
        self.indent(depth);
        self.push_open_tag(tag, class);
        self.buffer.push('\n');
    }

    fn close(&mut self, depth: usize, tag: &'static str) {
        self.indent(depth);
        self.push_close_tag(tag);
        self.buffer.push('\n');
    }

    fn text_element(&mut self, depth: usize, tag: &'static str, class: &'static str, text: &str) {
        self.indent(depth);
        self.push_open_tag(tag, class);
        push_escaped(&mut self.buffer, text);
        self.push_close_tag(tag);
        self.buffer.push('\n');
    }

    fn push_open_tag(&mut self, tag: &'static str, class: &'static str) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.buffer.push_str(" class=\"");
        self.buffer.push_str(class);
        self.buffer.push_str("\">");
    }

    fn push_close_tag(&mut self, tag: &'static str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    fn finish(self) -> String {
        self.buffer
    }
}
