use crate::chapter::{Chapter, Node};

/// Class carried by every clickable unit
pub const UNIT_CLASS: &str = "word";

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escape text for use in HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn safe_tag(tag: &str) -> &str {
    if !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        tag
    } else {
        "span"
    }
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, out),
        Node::Unit(unit) => {
            out.push_str(&format!(
                "<span class=\"{UNIT_CLASS}\" data-unit=\"{}\">",
                unit.id
            ));
            escape_into(&unit.raw, out);
            out.push_str("</span>");
        }
        Node::Element { tag, children } => {
            let tag = safe_tag(tag);
            out.push_str(&format!("<{tag}>"));
            for child in children {
                render_node(child, out);
            }
            out.push_str(&format!("</{tag}>"));
        }
    }
}

/// Render the chapter container as HTML markup
pub fn render_html(chapter: &Chapter) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"chapter-content\" data-tokenized=\"{}\">",
        chapter.is_processed()
    ));
    for paragraph in chapter.paragraphs() {
        render_node(paragraph, &mut out);
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    #[test]
    fn renders_units_as_spans() {
        let mut chapter = Chapter::from_plain_text("1", "The <clocks> struck");
        tokenize(&mut chapter);

        let html = render_html(&chapter);
        assert_eq!(
            html,
            "<div class=\"chapter-content\" data-tokenized=\"true\"><p>\
             <span class=\"word\" data-unit=\"0\">The</span> \
             <span class=\"word\" data-unit=\"1\">&lt;clocks&gt;</span> \
             <span class=\"word\" data-unit=\"2\">struck</span></p></div>"
        );
    }

    #[test]
    fn rendering_twice_after_retokenize_is_stable() {
        let mut chapter = Chapter::from_plain_text("1", "Winston's  heart");
        tokenize(&mut chapter);
        let first = render_html(&chapter);
        tokenize(&mut chapter);
        assert_eq!(render_html(&chapter), first);
        assert_eq!(first.matches("class=\"word\"").count(), 2);
    }

    #[test]
    fn escapes_quotes_of_both_kinds() {
        assert_eq!(
            escape_html("Winston's \"big\" <brother> & co"),
            "Winston&#39;s &quot;big&quot; &lt;brother&gt; &amp; co"
        );
    }

    #[test]
    fn unknown_tags_fall_back_to_span() {
        let chapter = Chapter::new("1", vec![Node::element("p onclick=x", vec![Node::text("hi")])]);
        assert!(render_html(&chapter).contains("<span>hi</span>"));
    }
}
