//! # Site Metadata
//!
//! Static `<head>` configuration for the public reading site: page title,
//! social-sharing tags and icons. Nothing here talks to the network.

use std::fmt::Write;

pub const SITE_NAME: &str = "Simplificando O Evangelho";
pub const SITE_URL: &str = "https://soe.texts.com.br";
pub const DEFAULT_TITLE: &str = "Simplificando O Evangelho - Bíblia Online";
pub const TITLE_TEMPLATE: &str = "%s - Simplificando O Evangelho";

const DESCRIPTION: &str = "Plataforma minimalista para leitura bíblica compartilhada durante \
    transmissões ao vivo. Interface clean e elegante para acompanhar a Palavra de Deus.";
const SHARE_DESCRIPTION: &str = "Plataforma minimalista para leitura bíblica durante \
    transmissões ao vivo. Acompanhe a Palavra de Deus com interface clean e elegante.";
const SHARE_IMAGE: &str = "https://soe.texts.com.br/whatsapp-image.png";

/// A `<meta>` tag. `Charset` has no content; the others are key/value pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaTag {
    Charset(&'static str),
    Name {
        name: &'static str,
        content: &'static str,
    },
    Property {
        property: &'static str,
        content: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkTag {
    pub rel: &'static str,
    pub href: &'static str,
    /// Extra attributes such as `type`, `sizes` or `crossorigin`.
    pub attrs: Vec<(&'static str, &'static str)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Head {
    pub title: &'static str,
    pub title_template: &'static str,
    pub meta: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
}

fn name(name: &'static str, content: &'static str) -> MetaTag {
    MetaTag::Name { name, content }
}

fn property(property: &'static str, content: &'static str) -> MetaTag {
    MetaTag::Property { property, content }
}

fn link(rel: &'static str, href: &'static str, attrs: &[(&'static str, &'static str)]) -> LinkTag {
    LinkTag {
        rel,
        href,
        attrs: attrs.to_vec(),
    }
}

/// Returns the site's head configuration.
pub fn head() -> Head {
    let meta = vec![
        MetaTag::Charset("utf-8"),
        name(
            "viewport",
            "width=device-width, initial-scale=1, maximum-scale=5, user-scalable=yes",
        ),
        name("format-detection", "telephone=no"),
        name("description", DESCRIPTION),
        name("theme-color", "#304E69"),
        name("author", SITE_NAME),
        name(
            "keywords",
            "bíblia, evangelho, transmissão, ao vivo, palavra de deus, leitura bíblica, acf, almeida corrigida fiel",
        ),
        // Open Graph
        property("og:type", "website"),
        property("og:site_name", SITE_NAME),
        property("og:title", DEFAULT_TITLE),
        property("og:description", SHARE_DESCRIPTION),
        property("og:image", SHARE_IMAGE),
        property("og:image:alt", DEFAULT_TITLE),
        property("og:image:width", "1200"),
        property("og:image:height", "630"),
        property("og:image:type", "image/png"),
        property("og:url", SITE_URL),
        property("og:locale", "pt_BR"),
        // Twitter card
        name("twitter:card", "summary_large_image"),
        name("twitter:site", "@simplificandoevangelho"),
        name("twitter:title", DEFAULT_TITLE),
        name("twitter:description", SHARE_DESCRIPTION),
        name("twitter:image", SHARE_IMAGE),
        // Mobile
        name("mobile-web-app-capable", "yes"),
        name("apple-mobile-web-app-capable", "yes"),
        name("apple-mobile-web-app-status-bar-style", "default"),
        name("apple-mobile-web-app-title", SITE_NAME),
        name("robots", "index, follow"),
        name("googlebot", "index, follow"),
        name("language", "pt-BR"),
    ];

    let links = vec![
        link("icon", "/favicon.ico", &[("type", "image/x-icon")]),
        link("apple-touch-icon", "/apple-touch-icon.png", &[("sizes", "180x180")]),
        link("icon", "/favicon-32x32.png", &[("type", "image/png"), ("sizes", "32x32")]),
        link("icon", "/favicon-16x16.png", &[("type", "image/png"), ("sizes", "16x16")]),
        link("manifest", "/site.webmanifest", &[]),
        link("canonical", SITE_URL, &[]),
        link("preconnect", "https://fonts.googleapis.com", &[]),
        link("preconnect", "https://fonts.gstatic.com", &[("crossorigin", "")]),
        link(
            "stylesheet",
            "https://fonts.googleapis.com/css2?family=Inter:wght@200;300;400;500&display=swap",
            &[],
        ),
    ];

    Head {
        title: DEFAULT_TITLE,
        title_template: TITLE_TEMPLATE,
        meta,
        links,
    }
}

impl Head {
    /// Title for a page: the template applied to `page`, or the default title.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page.map(str::trim).filter(|p| !p.is_empty()) {
            Some(page) => self.title_template.replace("%s", page),
            None => self.title.to_string(),
        }
    }

    /// Content of the first meta tag with the given name or property.
    pub fn meta_content(&self, key: &str) -> Option<&'static str> {
        self.meta.iter().find_map(|tag| match tag {
            MetaTag::Name { name, content } if *name == key => Some(*content),
            MetaTag::Property { property, content } if *property == key => Some(*content),
            _ => None,
        })
    }

    /// Renders the head as HTML, one tag per line.
    pub fn to_html(&self, page: Option<&str>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<title>{}</title>", escape(&self.page_title(page)));

        for tag in &self.meta {
            let _ = match tag {
                MetaTag::Charset(charset) => writeln!(out, "<meta charset=\"{}\">", escape(charset)),
                MetaTag::Name { name, content } => writeln!(
                    out,
                    "<meta name=\"{}\" content=\"{}\">",
                    escape(name),
                    escape(content)
                ),
                MetaTag::Property { property, content } => writeln!(
                    out,
                    "<meta property=\"{}\" content=\"{}\">",
                    escape(property),
                    escape(content)
                ),
            };
        }

        for tag in &self.links {
            let _ = write!(out, "<link rel=\"{}\" href=\"{}\"", escape(tag.rel), escape(tag.href));
            for (key, value) in &tag.attrs {
                let _ = write!(out, " {}=\"{}\"", key, escape(value));
            }
            let _ = writeln!(out, ">");
        }

        out
    }
}

/// Escapes text for use inside an HTML attribute or element.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
