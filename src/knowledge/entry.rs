//! Knowledge entry values and their text rendering.

/// The value stored under one knowledge base key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeValue {
    /// Returned verbatim.
    Text(String),
    /// Sub-topics in declared order, rendered one `Label: value` line each.
    Sections(Vec<(String, KnowledgeValue)>),
    /// Ordered items, rendered comma-joined on one line.
    List(Vec<String>),
}

impl KnowledgeValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn sections<I, K>(sections: I) -> Self
    where
        I: IntoIterator<Item = (K, KnowledgeValue)>,
        K: Into<String>,
    {
        Self::Sections(
            sections
                .into_iter()
                .map(|(label, value)| (label.into(), value))
                .collect(),
        )
    }

    /// Render the value as the chat reply text.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
            Self::Sections(sections) => sections
                .iter()
                .map(|(label, value)| format!("{}: {}", title_case(label), value.render_inline()))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Render a nested value so it fits after a section label.
    fn render_inline(&self) -> String {
        match self {
            Self::Sections(sections) => sections
                .iter()
                .map(|(label, value)| format!("{}: {}", title_case(label), value.render_inline()))
                .collect::<Vec<_>>()
                .join("; "),
            other => other.render(),
        }
    }
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for ch in label.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
