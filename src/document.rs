// Document loader: a thin query layer over a roxmltree document

use std::path::Path;

use tracing::debug;

use crate::error::ProcessingError;

// Per-document loader settings. `namespace_prefix` is only applied by the
// `*_qualified` lookups, so one extractor works with or without a prefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentOptions {
    pub namespace_prefix: Option<String>,
}

impl DocumentOptions {
    pub fn with_namespace(prefix: impl Into<String>) -> Self {
        Self {
            namespace_prefix: Some(prefix.into()),
        }
    }
}

// Read an XML file into memory; the parsed tree borrows from the returned text.
pub fn read_xml(path: impl AsRef<Path>) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path).map_err(|source| ProcessingError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = xml.len(), "loaded XML document");
    Ok(xml)
}

#[derive(Debug)]
pub struct Document<'input> {
    tree: roxmltree::Document<'input>,
    options: DocumentOptions,
}

impl<'input> Document<'input> {
    pub fn parse(xml: &'input str, options: DocumentOptions) -> Result<Self, ProcessingError> {
        let tree = roxmltree::Document::parse(xml)
            .map_err(|e| ProcessingError::XmlParseError(e.to_string()))?;
        debug!(nodes = tree.descendants().count(), "parsed XML document");
        Ok(Self { tree, options })
    }

    fn prefix(&self) -> Option<&str> {
        self.options.namespace_prefix.as_deref()
    }

    fn wrap<'a>(&'a self, node: roxmltree::Node<'a, 'input>) -> Node<'a, 'input> {
        Node {
            node,
            prefix: self.prefix(),
        }
    }

    // All elements matching the local name `tag`, root included, in document order
    pub fn find_all<'q>(&'q self, tag: &'q str) -> impl Iterator<Item = Node<'q, 'input>> + 'q {
        self.tree
            .descendants()
            .filter(move |node| matches_tag(*node, None, tag))
            .map(move |node| self.wrap(node))
    }

    pub fn find_all_qualified<'q>(
        &'q self,
        tag: &'q str,
    ) -> impl Iterator<Item = Node<'q, 'input>> + 'q {
        let prefix = self.prefix();
        self.tree
            .descendants()
            .filter(move |node| matches_tag(*node, prefix, tag))
            .map(move |node| self.wrap(node))
    }
}

// With a prefix, the element must sit in the namespace that prefix is bound
// to at that point of the document. Without one, only the local name counts.
fn matches_tag(node: roxmltree::Node<'_, '_>, prefix: Option<&str>, tag: &str) -> bool {
    if !node.is_element() || node.tag_name().name() != tag {
        return false;
    }
    match prefix {
        None => true,
        Some(prefix) => match node.lookup_namespace_uri(Some(prefix)) {
            Some(uri) => node.tag_name().namespace() == Some(uri),
            None => false,
        },
    }
}

// Borrowed handle to one element of a `Document`
#[derive(Debug, Clone, Copy)]
pub struct Node<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
    prefix: Option<&'a str>,
}

impl<'a, 'input> Node<'a, 'input> {
    // Local tag name, used in error messages
    pub fn name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    pub fn required_attribute(&self, name: &str) -> Result<&'a str, ProcessingError> {
        self.attribute(name)
            .ok_or_else(|| ProcessingError::missing_attribute(name, self.name()))
    }

    // Text directly inside this element; text of child elements is not included
    pub fn text(&self) -> String {
        self.node
            .children()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .collect()
    }

    fn descendants_matching<'q>(
        &self,
        prefix: Option<&'q str>,
        tag: &'q str,
    ) -> impl Iterator<Item = Node<'a, 'input>> + 'q
    where
        'a: 'q,
    {
        let own_prefix = self.prefix;
        self.node
            .descendants()
            .skip(1)
            .filter(move |node| matches_tag(*node, prefix, tag))
            .map(move |node| Node {
                node,
                prefix: own_prefix,
            })
    }

    // Descendants named `tag` at any depth, in document order
    pub fn find_all<'q>(&self, tag: &'q str) -> impl Iterator<Item = Node<'a, 'input>> + 'q
    where
        'a: 'q,
    {
        self.descendants_matching(None, tag)
    }

    pub fn find_all_qualified<'q>(
        &self,
        tag: &'q str,
    ) -> impl Iterator<Item = Node<'a, 'input>> + 'q
    where
        'a: 'q,
    {
        self.descendants_matching(self.prefix, tag)
    }

    pub fn find(&self, tag: &str) -> Option<Node<'a, 'input>> {
        self.find_all(tag).next()
    }

    pub fn find_qualified(&self, tag: &str) -> Option<Node<'a, 'input>> {
        self.find_all_qualified(tag).next()
    }

    // First descendant named `tag`, or a missing-field error naming this element
    pub fn require(&self, tag: &str) -> Result<Node<'a, 'input>, ProcessingError> {
        self.find(tag)
            .ok_or_else(|| ProcessingError::missing_field(tag, self.name()))
    }

    pub fn require_qualified(&self, tag: &str) -> Result<Node<'a, 'input>, ProcessingError> {
        self.find_qualified(tag)
            .ok_or_else(|| ProcessingError::missing_field(tag, self.name()))
    }
}
