use std::fmt::Write as _;

use crate::avatar::compose::AvatarDescriptor;

/// How the label is centered vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// `alignment-baseline="middle"`; exact in browsers.
    #[default]
    AlignmentBaseline,
    /// `dy="0.35em"`; for renderers that ignore `alignment-baseline`.
    DyShift,
}

/// Serialize `desc` as standalone SVG markup.
pub fn to_svg(desc: &AvatarDescriptor, baseline: TextBaseline) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    if let (Some(w), Some(h)) = (desc.width, desc.height) {
        let _ = write!(out, r#" width="{w}" height="{h}""#);
    }
    out.push('>');

    let _ = write!(
        out,
        r#"<rect fill="{}" x="0" y="0" width="100%" height="100%"></rect>"#,
        escape_xml(desc.background_color.as_str())
    );

    if let Some(text) = &desc.text {
        let _ = write!(
            out,
            r#"<text fill="{}" x="50%" y="50%" text-anchor="middle" font-size="{}" font-family="{}""#,
            escape_xml(desc.text_color.as_str()),
            text.font_size,
            escape_xml(&desc.font_family),
        );
        match baseline {
            TextBaseline::AlignmentBaseline => out.push_str(r#" alignment-baseline="middle""#),
            TextBaseline::DyShift => out.push_str(r#" dy="0.35em""#),
        }
        let _ = write!(out, ">{}</text>", escape_xml(&text.label));
    }

    out.push_str("</svg>");
    out
}

/// `data:` URI embedding the SVG, percent-encoded (everything outside the RFC 3986 unreserved set).
pub fn to_data_uri(desc: &AvatarDescriptor, baseline: TextBaseline) -> String {
    let svg = to_svg(desc, baseline);
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
