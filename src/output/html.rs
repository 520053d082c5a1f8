//! Interactive HTML page assembly.
//!
//! Wraps an externally rendered SVG plot into a self-contained page carrying
//! the default stylesheet, any custom CSS/JavaScript, the tooltip data blob,
//! and the tooltip overlay element. The SVG text is embedded verbatim; this
//! module never parses it.

use std::fmt::Write as _;
use std::path::Path;

use crate::api::PlotData;
use crate::error::{PlotError, PlotResult};

use super::css::DEFAULT_STYLESHEET;

/// Self-contained interactive page around one rendered plot.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    svg_content: String,
    instance_ident: String,
    title: String,
    favicon: Option<String>,
    additional_css: String,
    additional_javascript: String,
    plot_data: PlotData,
}

impl HtmlDocument {
    #[must_use]
    pub fn new(
        svg_content: impl Into<String>,
        instance_ident: impl Into<String>,
        plot_data: PlotData,
    ) -> Self {
        Self {
            svg_content: svg_content.into(),
            instance_ident: instance_ident.into(),
            title: "Interactive plot".to_owned(),
            favicon: None,
            additional_css: String::new(),
            additional_javascript: String::new(),
            plot_data,
        }
    }

    /// Sets the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the favicon reference, remote or local.
    #[must_use]
    pub fn with_favicon(mut self, href: impl Into<String>) -> Self {
        self.favicon = Some(href.into());
        self
    }

    /// Appends stylesheet text after the default stylesheet.
    ///
    /// Later additions win under CSS cascade rules, so callers can override
    /// the stock styles rule by rule.
    #[must_use]
    pub fn add_css(mut self, content: &str) -> Self {
        self.additional_css.push_str(content);
        self
    }

    /// Appends script text run after the page's data blob is available.
    #[must_use]
    pub fn add_javascript(mut self, content: &str) -> Self {
        self.additional_javascript.push_str(content);
        self
    }

    /// Renders the full page.
    pub fn render(&self) -> PlotResult<String> {
        let plot_data_json = self.plot_data.to_json()?;
        let ident = &self.instance_ident;

        let mut page = String::new();
        let _ = writeln!(page, "<!DOCTYPE html>");
        let _ = writeln!(page, "<html lang=\"en\">");
        let _ = writeln!(page, "<head>");
        let _ = writeln!(page, "<meta charset=\"utf-8\"/>");
        let _ = writeln!(page, "<title>{}</title>", self.title);
        if let Some(favicon) = &self.favicon {
            let _ = writeln!(page, "<link rel=\"icon\" href=\"{favicon}\"/>");
        }
        let _ = writeln!(page, "<style>");
        page.push_str(DEFAULT_STYLESHEET);
        page.push_str(&self.additional_css);
        let _ = writeln!(page, "</style>");
        let _ = writeln!(page, "</head>");
        let _ = writeln!(page, "<body>");
        let _ = writeln!(page, "<div id=\"{ident}-container\" class=\"plot-container\">");
        page.push_str(&self.svg_content);
        if !self.svg_content.ends_with('\n') {
            page.push('\n');
        }
        let _ = writeln!(page, "<div id=\"{ident}-tooltip\" class=\"tooltip\"></div>");
        let _ = writeln!(page, "</div>");
        let _ = writeln!(
            page,
            "<script id=\"{ident}-data\" type=\"application/json\">{plot_data_json}</script>"
        );
        if !self.additional_javascript.is_empty() {
            let _ = writeln!(page, "<script>");
            page.push_str(&self.additional_javascript);
            if !self.additional_javascript.ends_with('\n') {
                page.push('\n');
            }
            let _ = writeln!(page, "</script>");
        }
        let _ = writeln!(page, "</body>");
        let _ = writeln!(page, "</html>");
        Ok(page)
    }

    /// Writes the rendered page to disk, appending an `.html` extension when
    /// the path carries none.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let page = self.render()?;
        let mut target = path.as_ref().to_path_buf();
        if target.extension().and_then(|ext| ext.to_str()) != Some("html") {
            let mut raw = target.into_os_string();
            raw.push(".html");
            target = raw.into();
        }
        std::fs::write(&target, page).map_err(|source| PlotError::DocumentWrite {
            path: target.display().to_string(),
            source,
        })
    }
}
