use orbit_core::{BlockKind, RichTextBlock};

/// Serialize body blocks to HTML. Consecutive list items collapse into a
/// single `<ul>`/`<ol>`.
///
/// The markup embeds CMS-supplied text as-is; the repository is a trusted
/// source. Sanitize at the rendering boundary if that ever stops holding.
pub fn as_html(blocks: &[RichTextBlock]) -> String {
    let mut html = String::new();
    let mut i = 0;
    while i < blocks.len() {
        match blocks[i].kind {
            BlockKind::Paragraph => {
                html.push_str("<p>");
                html.push_str(&blocks[i].text);
                html.push_str("</p>");
                i += 1;
            }
            BlockKind::Preformatted => {
                html.push_str("<pre>");
                html.push_str(&blocks[i].text);
                html.push_str("</pre>");
                i += 1;
            }
            kind @ (BlockKind::ListItem | BlockKind::OListItem) => {
                let tag = if kind == BlockKind::ListItem { "ul" } else { "ol" };
                html.push_str(&format!("<{}>", tag));
                while i < blocks.len() && blocks[i].kind == kind {
                    html.push_str("<li>");
                    html.push_str(&blocks[i].text);
                    html.push_str("</li>");
                    i += 1;
                }
                html.push_str(&format!("</{}>", tag));
            }
        }
    }
    html
}
