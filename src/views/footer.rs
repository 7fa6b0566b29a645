use maud::{html, Markup, PreEscaped, Render};

const DEFAULT_NOTICE: &str = "© 2020";

/// Copyright content shown in the footer.
///
/// The constructor picks how much the content is trusted: `trusted_html` is
/// embedded verbatim, `text` is escaped. Both return `None` for an empty
/// string so the footer falls back to its default notice.
#[derive(Debug, Clone)]
pub struct Copyrights(Markup);

impl Copyrights {
    /// Markup the caller vouches for. It is not escaped or sanitized.
    pub fn trusted_html(html: impl Into<String>) -> Option<Self> {
        let html = html.into();
        if html.is_empty() {
            return None;
        }

        Some(Self(PreEscaped(html)))
    }

    pub fn text(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        Some(Self(html! { (text) }))
    }
}

impl Render for Copyrights {
    fn render(&self) -> Markup {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Footer {
    copyrights: Option<Copyrights>,
}

impl Footer {
    pub fn new(copyrights: Option<Copyrights>) -> Self {
        Self { copyrights }
    }

    pub fn from_html(copyrights: Option<&str>) -> Self {
        Self::new(copyrights.and_then(Copyrights::trusted_html))
    }
}

impl Render for Footer {
    fn render(&self) -> Markup {
        tracing::debug!(custom = self.copyrights.is_some(), "Rendering footer");

        html! {
            footer {
                @if let Some(copyrights) = &self.copyrights {
                    div { (copyrights) }
                } @else {
                    span class="footerCopyrights" { (DEFAULT_NOTICE) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(footer: &Footer) -> String {
        footer.render().into_string()
    }

    #[test]
    fn embeds_custom_markup_verbatim() {
        let html = rendered(&Footer::from_html(Some("<span>© 2023 Acme</span>")));

        assert_eq!(html, "<footer><div><span>© 2023 Acme</span></div></footer>");
        assert!(!html.contains(DEFAULT_NOTICE));
    }

    #[test]
    fn missing_copyrights_uses_default_notice() {
        let html = rendered(&Footer::from_html(None));

        assert_eq!(
            html,
            "<footer><span class=\"footerCopyrights\">© 2020</span></footer>"
        );
    }

    #[test]
    fn empty_copyrights_is_treated_as_missing() {
        assert_eq!(
            rendered(&Footer::from_html(Some(""))),
            rendered(&Footer::default())
        );
        assert!(Copyrights::trusted_html("").is_none());
        assert!(Copyrights::text("").is_none());
    }

    #[test]
    fn whitespace_copyrights_is_kept() {
        let html = rendered(&Footer::from_html(Some(" ")));

        assert_eq!(html, "<footer><div> </div></footer>");
    }

    #[test]
    fn always_renders_one_footer() {
        for input in [None, Some(""), Some("<b>Acme</b>")] {
            let html = rendered(&Footer::from_html(input));

            assert_eq!(html.matches("<footer").count(), 1, "{html}");
            assert_eq!(html.matches("</footer>").count(), 1, "{html}");
        }
    }

    #[test]
    fn text_copyrights_are_escaped() {
        let footer = Footer::new(Copyrights::text("<script>alert(1)</script> & Co"));
        let html = rendered(&footer);

        assert_eq!(
            html,
            "<footer><div>&lt;script&gt;alert(1)&lt;/script&gt; &amp; Co</div></footer>"
        );
    }
}
