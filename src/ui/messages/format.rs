//! Message text with clickable links.

use eframe::egui::{self, Color32};
use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("URL regex pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TextSegment<'a> {
    Plain(&'a str),
    Link(&'a str),
}

/// Split message text into plain runs and URLs.
pub(crate) fn split_links(text: &str) -> Vec<TextSegment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for found in URL_RE.find_iter(text) {
        if found.start() > last {
            segments.push(TextSegment::Plain(&text[last..found.start()]));
        }
        segments.push(TextSegment::Link(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        segments.push(TextSegment::Plain(&text[last..]));
    }

    segments
}

/// Render message text, turning URLs into hyperlinks.
pub(crate) fn render_message_text(ui: &mut egui::Ui, text: &str, color: Color32, link_color: Color32) {
    let segments = split_links(text);

    // Common case: no links, let egui wrap a single label
    if let [TextSegment::Plain(plain)] = segments.as_slice() {
        ui.label(egui::RichText::new(*plain).size(15.0).color(color));
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for segment in segments {
            match segment {
                TextSegment::Plain(plain) => {
                    ui.label(egui::RichText::new(plain).size(15.0).color(color));
                }
                TextSegment::Link(url) => {
                    ui.hyperlink_to(
                        egui::RichText::new(url).size(15.0).color(link_color).underline(),
                        url,
                    );
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_links_plain() {
        assert_eq!(split_links("see you at T3"), vec![TextSegment::Plain("see you at T3")]);
        assert!(split_links("").is_empty());
    }

    #[test]
    fn test_split_links_mixed() {
        assert_eq!(
            split_links("route: https://maps.example.com/x?y=1 ok"),
            vec![
                TextSegment::Plain("route: "),
                TextSegment::Link("https://maps.example.com/x?y=1"),
                TextSegment::Plain(" ok"),
            ]
        );
        assert_eq!(
            split_links("http://a.b"),
            vec![TextSegment::Link("http://a.b")]
        );
    }
}
