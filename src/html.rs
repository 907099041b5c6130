/// A piece of a template. Only [`Segment::UntrustedText`] gets escaped.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment<'a> {
    RawMarkup(&'a str),
    UntrustedText(&'a str),
}

pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '>' => out.push_str("&gt;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn concat(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::RawMarkup(s) => out.push_str(s),
            Segment::UntrustedText(s) => out.push_str(&html_escape(s)),
        }
    }
    out
}
