//! Load a rendered HTML page into a [`MemoryPage`].
//!
//! Lets `fragroute check` and `fragroute route` run the router against the
//! exact markup the site serves, without a browser.

use thiserror::Error;

use super::Page;
use super::memory::{ElementData, ElementId, MemoryPage};

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

impl MemoryPage {
    /// Parse an HTML document. Text and comments are dropped; `<title>`
    /// becomes the page title.
    pub fn from_html(html: &str) -> Result<Self, HtmlError> {
        let dom = tl::parse(html, tl::ParserOptions::default())
            .map_err(|err| HtmlError::Parse(format!("{err:?}")))?;
        let parser = dom.parser();

        let mut page = MemoryPage::new();
        for handle in dom.children() {
            page.load_node(*handle, parser, None);
        }
        Ok(page)
    }

    /// Convert a tl node (and its subtree) into arena elements
    fn load_node(&mut self, handle: tl::NodeHandle, parser: &tl::Parser, parent: Option<ElementId>) {
        let Some(tl::Node::Tag(tag)) = handle.get(parser) else {
            return;
        };

        let tag_name = tag.name().as_utf8_str().to_lowercase();
        if tag_name == "title" {
            let title = tag.inner_text(parser).trim().to_string();
            self.set_title(&title);
        }

        let mut element = ElementData::new(&tag_name).with_html(tag.inner_html(parser).trim());
        for (key, value) in tag.attributes().iter() {
            let key_str: &str = key.as_ref();
            let value_str = value.map(|v| v.to_string()).unwrap_or_default();
            match key_str {
                "id" => element.id = Some(value_str),
                "class" => element = element.with_class_attr(&value_str),
                "href" => element.href = Some(value_str),
                _ => {}
            }
        }

        let id = self.push(element, parent);
        for child in tag.children().top().iter() {
            self.load_node(*child, parser, Some(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Selector;

    const SITE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Philip Trauner</title></head>
<body>
  <header>
    <ul>
      <li><a href="/about">About</a></li>
      <li><a href="/projects">Projects</a></li>
    </ul>
  </header>
  <!-- sections -->
  <div class="fragment" id="about"><p id="bio">Hi</p></div>
  <div class="hidden fragment" id="projects"></div>
</body>
</html>"#;

    #[test]
    fn test_from_html_structure() {
        let page = MemoryPage::from_html(SITE).unwrap();
        assert_eq!(page.title(), "Philip Trauner");

        let fragments = page.query_all(&Selector::fragments("fragment"));
        let ids: Vec<_> = fragments.iter().map(|f| page.id(f)).collect();
        assert_eq!(ids, ["about", "projects"]);
        assert!(page.has_class(fragments[1], "hidden"));

        let link = page.query(&Selector::nav_link(Some("li"), "/projects")).unwrap();
        assert_eq!(page.inner_html(&link), "Projects");

        let bio = page.element_by_id("bio").unwrap();
        assert!(page.contains(&fragments[0], &bio));
        assert!(!page.contains(&fragments[1], &bio));
    }
}
