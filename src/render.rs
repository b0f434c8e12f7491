use crate::locales::Labels;
use crate::CardState;

/// Renders the card as an HTML fragment: visit link, preview image, themed
/// title heading, collapsible description and secondary logo. Styling tokens
/// come from the host design system.
pub fn render_card(state: &CardState, labels: &Labels) -> String {
    if state.loading {
        return r#"<div class="loader"></div>"#.to_string();
    }

    let model = &state.model;
    let theme = escape_html(&model.theme_color);
    // White heading text unless the theme itself is white.
    let heading_text = if model.theme_color == "#ffffff" {
        "black"
    } else {
        "white"
    };

    let mut html = String::new();
    html.push_str(&format!(
        r#"<div class="wrapper" style="border-color:{theme}">"#
    ));
    html.push_str(&format!(
        r#"<p class="link">{}: <a href="{link}" target="_blank">{link}</a></p>"#,
        escape_html(&labels.visit),
        link = escape_html(&state.web_link),
    ));
    html.push_str(&format!(
        r#"<img src="{}" alt="{}: {}" loading="lazy" />"#,
        escape_html(&model.image_link),
        escape_html(&labels.title),
        escape_html(&model.title),
    ));
    html.push_str(&format!(
        r#"<h2 class="mainTitle" style="background-color:{theme}; color: {heading_text};">{}</h2>"#,
        escape_html(&model.title),
    ));
    html.push_str(&format!(
        r#"<details><summary>{}</summary><p>{}</p></details>"#,
        escape_html(&labels.more_details),
        escape_html(&model.description),
    ));
    if let Some(logo) = &model.logo {
        html.push_str(&format!(
            r#"<img src="{}" class="logo" />"#,
            escape_html(logo)
        ));
    }
    if !state.error_message.is_empty() {
        html.push_str(&format!(
            r#"<p class="error">{}</p>"#,
            escape_html(&state.error_message)
        ));
    }
    html.push_str("</div>");
    html
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='y'>&"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt;&amp;"
        );
    }

    #[test]
    fn test_loader_while_loading() {
        let state = CardState {
            loading: true,
            ..CardState::default()
        };
        assert!(render_card(&state, &Labels::default()).contains("loader"));
    }
}
