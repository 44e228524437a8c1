//! Markup helpers shared by the page renderers.

use std::fmt::Write;

use super::assets::ImageSource;
use super::model::LanguageOption;
use crate::branding;
use crate::content::Language;

/// Escapes text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wraps a page body in the document shell.
///
/// `body_class` is emitted only when non-empty.
#[must_use]
pub fn document(lang: Language, title: &str, body_class: &str, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, "<html lang=\"{}\">", lang.html_lang());
    out.push_str("<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    let _ = writeln!(
        out,
        "<meta name=\"description\" content=\"{}\">",
        escape(branding::TAGLINE)
    );
    out.push_str("<link rel=\"icon\" href=\"/favicon.svg\" type=\"image/svg+xml\">\n");
    out.push_str("<link rel=\"stylesheet\" href=\"/style.css\">\n");
    out.push_str("<script src=\"/site.js\" defer></script>\n");
    out.push_str("</head>\n");
    if body_class.is_empty() {
        out.push_str("<body>\n");
    } else {
        let _ = writeln!(out, "<body class=\"{}\">", escape(body_class));
    }
    out.push_str(body);
    out.push_str("</body>\n</html>\n");
    out
}

/// Renders an image, or its placeholder text when unavailable.
///
/// Served images swap themselves for the placeholder text in the browser if
/// loading fails.
#[must_use]
pub fn image(source: &ImageSource, class: &str) -> String {
    const ON_ERROR: &str = "window.folioImageFallback&&folioImageFallback(this)";
    match source {
        ImageSource::Local { src, alt } | ImageSource::Remote { src, alt } => format!(
            "<img class=\"{class}\" src=\"{}\" alt=\"{1}\" data-placeholder=\"{1}\" loading=\"lazy\" onerror=\"{ON_ERROR}\">",
            escape(src),
            escape(alt)
        ),
        ImageSource::Placeholder { .. } => placeholder(class, source.fallback_text()),
    }
}

/// Text block standing in for a missing image.
#[must_use]
pub fn placeholder(class: &str, text: &str) -> String {
    format!(
        "<div class=\"{class} image-placeholder\" role=\"img\" aria-label=\"{0}\"><span>{0}</span></div>",
        escape(text)
    )
}

/// Renders the language selector.
#[must_use]
pub fn language_switcher(options: &[LanguageOption]) -> String {
    let mut out = String::from("<nav class=\"lang-switcher\" aria-label=\"Language\">\n");
    for option in options {
        let current = if option.selected {
            " class=\"active\" aria-current=\"true\""
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<a href=\"{}\" hreflang=\"{}\"{current}>{} {}</a>",
            escape(&option.href),
            option.code.html_lang(),
            option.flag,
            escape(option.label)
        );
    }
    out.push_str("</nav>\n");
    out
}

/// Renders a `<ul>` of escaped items with an item class.
#[must_use]
pub fn list(class: &str, items: &[String]) -> String {
    let mut out = format!("<ul class=\"{class}\">");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("日本語"), "日本語");
    }

    #[test]
    fn test_document_body_class() {
        let plain = document(Language::En, "Title", "", "");
        assert!(plain.contains("<body>\n"));
        assert!(plain.contains("<html lang=\"en\">"));

        let locked = document(Language::Jp, "Title", "scroll-locked", "");
        assert!(locked.contains("<body class=\"scroll-locked\">"));
        assert!(locked.contains("<html lang=\"ja\">"));
    }

    #[test]
    fn test_placeholder_image_has_no_img_tag() {
        let markup = image(
            &ImageSource::Placeholder {
                text: "VegWam".to_string(),
            },
            "thumb",
        );
        assert!(!markup.contains("<img"));
        assert!(markup.contains("<span>VegWam</span>"));
    }

    #[test]
    fn test_remote_image_carries_placeholder() {
        let markup = image(
            &ImageSource::Remote {
                src: "https://placehold.co/1x1".to_string(),
                alt: "A & B".to_string(),
            },
            "thumb",
        );
        assert!(markup.contains("data-placeholder=\"A &amp; B\""));
    }
}
