use super::HtmlError;

/// Ordered HTML attributes.
///
/// Attributes render in insertion order. Inserting an existing key replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props(Vec<(String, String)>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders `key="value"` pairs separated by single spaces.
    ///
    /// Values are written verbatim; nothing is escaped.
    pub fn to_html(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// A node with text and no children.
///
/// Without a tag it renders as bare text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: String,
    pub props: Props,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.into(),
            props: Props::new(),
        }
    }

    /// A tagless leaf, rendered as its value alone.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn to_html(&self) -> String {
        match &self.tag {
            None => self.value.clone(),
            Some(tag) => format!("{}{}</{tag}>", open_tag(tag, &self.props), self.value),
        }
    }
}

/// A tagged node wrapping other nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub props: Props,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: tag.into(),
            children,
            props: Props::new(),
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Renders the node and all of its descendants.
    ///
    /// # Errors
    /// [`HtmlError::EmptyParent`] if this node or any nested parent has no
    /// children.
    pub fn to_html(&self) -> Result<String, HtmlError> {
        if self.children.is_empty() {
            return Err(HtmlError::EmptyParent {
                tag: self.tag.clone(),
            });
        }

        let mut out = open_tag(&self.tag, &self.props);
        for child in &self.children {
            out.push_str(&child.to_html()?);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(out)
    }
}

/// Any node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => Some(&parent.tag),
        }
    }

    pub fn props(&self) -> &Props {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.props,
            HtmlNode::Parent(parent) => &parent.props,
        }
    }

    pub fn to_html(&self) -> Result<String, HtmlError> {
        match self {
            HtmlNode::Leaf(leaf) => Ok(leaf.to_html()),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

fn open_tag(tag: &str, props: &Props) -> String {
    if props.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag} {}>", props.to_html())
    }
}
