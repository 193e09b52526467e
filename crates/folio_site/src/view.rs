//! View tree
//!
//! A small element/text tree the components build and the page serializes to
//! HTML. Builders follow the usual chain style:
//!
//! ```rust
//! use folio_site::view::{div, p};
//!
//! let node = div().id("about").child(p().text("Hello")).into_node();
//! assert_eq!(node.to_html(), "<div id=\"about\"><p>Hello</p></div>");
//! ```

use folio_theme::ClassSet;
use indexmap::IndexMap;

/// Elements that never carry children or a closing tag
const VOID_TAGS: &[&str] = &["br", "img", "meta", "link", "input"];

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    id: Option<String>,
    classes: Vec<&'static str>,
    attrs: IndexMap<&'static str, String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append theme-selected classes, tagging the element with their role
    pub fn style(mut self, classes: ClassSet) -> Self {
        if let Some(role) = classes.role() {
            self.attrs.insert("data-role", role.name().to_string());
        }
        for class in classes.iter() {
            self.push_class(class);
        }
        self
    }

    /// Append literal layout classes
    pub fn class(mut self, classes: &'static str) -> Self {
        for class in classes.split_whitespace() {
            self.push_class(class);
        }
        self
    }

    fn push_class(&mut self, class: &'static str) {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn class_list(&self) -> &[&'static str] {
        &self.classes
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of this element's subtree
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        collect_text(&self.children, &mut parts);
        parts.join(" ")
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }

    /// All text in document order, trimmed pieces joined by single spaces
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        collect_text(std::slice::from_ref(self), &mut parts);
        parts.join(" ")
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.id.as_deref() == Some(id) {
            return Some(element);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_by_id(id))
    }

    /// Every element (depth-first, pre-order) matching `predicate`
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        walk(self, &predicate, &mut found);
        found
    }

    /// A copy of the tree with every class list cleared
    pub fn without_classes(&self) -> Node {
        match self {
            Node::Text(text) => Node::Text(text.clone()),
            Node::Element(element) => Node::Element(Element {
                tag: element.tag,
                id: element.id.clone(),
                classes: Vec::new(),
                attrs: element.attrs.clone(),
                children: element.children.iter().map(Node::without_classes).collect(),
            }),
        }
    }
}

fn walk<'a, F>(node: &'a Node, predicate: &F, found: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if let Node::Element(element) = node {
        if predicate(element) {
            found.push(element);
        }
        for child in &element.children {
            walk(child, predicate, found);
        }
    }
}

fn collect_text(nodes: &[Node], parts: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    parts.push(text.to_string());
                }
            }
            Node::Element(element) => collect_text(&element.children, parts),
        }
    }
}

fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(element) => {
            out.push('<');
            out.push_str(element.tag);
            if let Some(id) = &element.id {
                push_attr(out, "id", id);
            }
            if !element.classes.is_empty() {
                push_attr(out, "class", &element.classes.join(" "));
            }
            for (name, value) in &element.attrs {
                push_attr(out, name, value);
            }
            out.push('>');

            if VOID_TAGS.contains(&element.tag) {
                return;
            }
            for child in &element.children {
                write_html(child, out);
            }
            out.push_str("</");
            out.push_str(element.tag);
            out.push('>');
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

macro_rules! element_fns {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` element")]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

element_fns!(div, span, p, a, h1, h2, h3, img, br, nav, section, footer, main, button);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_and_attributes() {
        let node = a()
            .attr("href", "/?a=1&b=\"2\"")
            .text("<Tom & Jerry>")
            .into_node();
        assert_eq!(
            node.to_html(),
            "<a href=\"/?a=1&amp;b=&quot;2&quot;\">&lt;Tom &amp; Jerry&gt;</a>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node = div().child(img().attr("src", "x.png")).child(br()).into_node();
        assert_eq!(node.to_html(), "<div><img src=\"x.png\"><br></div>");
    }

    #[test]
    fn classes_are_deduplicated() {
        let node = div().class("flex gap-2").class("flex px-4").into_node();
        assert_eq!(node.to_html(), "<div class=\"flex gap-2 px-4\"></div>");
    }

    #[test]
    fn text_content_joins_pieces() {
        let node = div()
            .child(h1().text("Safal").child(br()).text(" Narshing "))
            .child(p().text("ML/AI Engineer"))
            .into_node();
        assert_eq!(node.text_content(), "Safal Narshing ML/AI Engineer");
    }

    #[test]
    fn lookup_by_id_and_predicate() {
        let node = div()
            .child(span().id("one").class("tag"))
            .child(div().child(span().id("two").class("tag")))
            .into_node();
        assert_eq!(node.find_by_id("two").map(|e| e.tag()), Some("span"));
        assert!(node.find_by_id("three").is_none());
        assert_eq!(node.find_all(|e| e.has_class("tag")).len(), 2);
    }

    #[test]
    fn styled_elements_carry_their_role() {
        use folio_theme::{style_for, StyleContext, StyleRole};

        let node = div()
            .style(style_for(StyleContext::default(), StyleRole::Badge))
            .child(span().style(ClassSet::parse("px-2")))
            .into_node();
        let badge = node.as_element().unwrap();
        assert_eq!(badge.attr_value("data-role"), Some("badge"));
        assert!(badge.child_nodes()[0].as_element().unwrap().attr_value("data-role").is_none());
    }

    #[test]
    fn stripping_classes_keeps_structure() {
        let node = div().class("a").child(span().class("b").text("x")).into_node();
        assert_eq!(node.without_classes().to_html(), "<div><span>x</span></div>");
    }
}
