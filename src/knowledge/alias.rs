//! Alias normalization for incoming chat messages.

/// Ordered informal phrase → canonical phrase rewrites.
///
/// Rewrites run once each in declared order, so a later alias sees the
/// output of earlier ones. There is no repeat-until-stable pass.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: Vec<(String, String)>,
}

impl AliasTable {
    /// Build a table. Alias keys are lower-cased since input is lower-cased first.
    pub fn new<I, A, C>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(alias, canonical)| (alias.into().to_lowercase(), canonical.into()))
                .filter(|(alias, _)| !alias.is_empty())
                .collect(),
        }
    }

    /// Lower-case `text` and apply every alias as a plain substring replacement.
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_lowercase();
        for (alias, canonical) in &self.aliases {
            if normalized.contains(alias.as_str()) {
                normalized = normalized.replace(alias.as_str(), canonical);
            }
        }
        normalized
    }
}
