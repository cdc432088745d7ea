//! Opening-tag model and serialization.
//!
//! Tags are rebuilt by string concatenation: prefix, name, namespace
//! declarations, then attributes, each attribute as ` name="value"`.
//! Attribute values are kept exactly as they appeared in the source (still
//! escaped), so re-emitting them never double-escapes.

/// One attribute of a start tag, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A namespace declared on an element. `prefix` is `None` for the default namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBinding {
    pub prefix: Option<String>,
    pub uri: String,
}

/// Everything the tokenizer reports for a start-element event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartTag {
    /// Local name, without prefix.
    pub name: String,
    pub prefix: Option<String>,
    pub attributes: Vec<Attribute>,
    /// Bindings declared on this element (not the inherited ones).
    pub namespaces: Vec<NamespaceBinding>,
}

impl StartTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_namespace(mut self, prefix: Option<&str>, uri: impl Into<String>) -> Self {
        self.namespaces.push(NamespaceBinding {
            prefix: prefix.map(str::to_string),
            uri: uri.into(),
        });
        self
    }

    /// Value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        attribute_value(&self.attributes, name)
    }

    /// Serialize this tag as `element`, minus `excluded` attributes, plus `extra` ones.
    ///
    /// `element` replaces the local name; the prefix and the namespace
    /// declarations are always kept.
    pub fn render_as(&self, element: &str, excluded: &[&str], extra: &[(&str, &str)]) -> String {
        let mut out = String::from("<");
        out.push_str(&qualified_name(self.prefix.as_deref(), element));
        out.push_str(&render_namespaces(&self.namespaces));
        out.push_str(&render_attributes(&self.attributes, excluded));
        for (name, value) in extra {
            push_attribute(&mut out, name, value);
        }
        out.push('>');
        out
    }

    /// Serialize unchanged.
    pub fn render(&self) -> String {
        self.render_as(&self.name, &[], &[])
    }
}

/// Value of the first attribute called `name`.
pub fn attribute_value<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.value.as_str())
}

/// `prefix:name`, or just `name` without a prefix.
pub fn qualified_name(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{p}:{name}"),
        _ => name.to_string(),
    }
}

/// ` xmlns="uri"` / ` xmlns:p="uri"` for every binding, in order.
pub fn render_namespaces(bindings: &[NamespaceBinding]) -> String {
    let mut out = String::new();
    for binding in bindings {
        let name = match binding.prefix.as_deref() {
            Some(p) if !p.is_empty() => format!("xmlns:{p}"),
            _ => "xmlns".to_string(),
        };
        push_attribute(&mut out, &name, &binding.uri);
    }
    out
}

/// ` name="value"` for every attribute not named in `excluded`, in order.
pub fn render_attributes(attributes: &[Attribute], excluded: &[&str]) -> String {
    let mut out = String::new();
    for attr in attributes
        .iter()
        .filter(|a| !excluded.contains(&a.name.as_str()))
    {
        push_attribute(&mut out, &attr.name, &attr.value);
    }
    out
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

/// Escape character data for output. Line breaks are dropped.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' | '\n' => {}
            other => out.push(other),
        }
    }
    out
}
