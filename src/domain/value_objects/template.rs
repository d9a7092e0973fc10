//! Output template value object
//!
//! A template is parsed once at configuration load. Parsing rejects
//! anything the planner could not substitute deterministically, so
//! rendering itself cannot fail.

use crate::error::{ConfigurationError, PlanResult};

use super::output_path::{check_name, ResolvedOutputPath};
use super::OutputCategory;

/// Placeholder tokens recognized inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Placeholder {
    /// `[name]`
    Name,
    /// `[ext]`
    Ext,
}

impl Placeholder {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Placeholder::Name),
            "ext" => Some(Placeholder::Ext),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Placeholder),
}

/// Filename pattern for one output category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    category: OutputCategory,
    pattern: String,
    segments: Vec<Segment>,
}

impl OutputTemplate {
    /// Parse a pattern such as `assets/[name].[ext]`
    pub fn parse(category: OutputCategory, pattern: &str) -> PlanResult<Self> {
        if pattern.is_empty() {
            return Err(ConfigurationError::EmptyTemplate { category });
        }
        if let Some(reason) = unsafe_reason(pattern) {
            return Err(ConfigurationError::UnsafeTemplate {
                category,
                template: pattern.to_string(),
                reason: reason.to_string(),
            });
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;

        while let Some(open) = rest.find('[') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find(']')
                .ok_or_else(|| ConfigurationError::UnterminatedPlaceholder {
                    category,
                    template: pattern.to_string(),
                })?;
            let token = &after[..close];
            let placeholder = Placeholder::from_token(token).ok_or_else(|| {
                ConfigurationError::UnknownPlaceholder {
                    category,
                    template: pattern.to_string(),
                    placeholder: token.to_string(),
                }
            })?;
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Slot(placeholder));
            rest = &after[close + 1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            category,
            pattern: pattern.to_string(),
            segments,
        })
    }

    /// The category's built-in template
    pub fn default_for(category: OutputCategory) -> Self {
        let segments = match category {
            OutputCategory::Entry => vec![
                Segment::Literal("src/".to_string()),
                Segment::Slot(Placeholder::Name),
                Segment::Literal("/index.js".to_string()),
            ],
            OutputCategory::Chunk => vec![
                Segment::Literal("assets/".to_string()),
                Segment::Slot(Placeholder::Name),
                Segment::Literal(".js".to_string()),
            ],
            OutputCategory::Asset => vec![
                Segment::Literal("assets/".to_string()),
                Segment::Slot(Placeholder::Name),
                Segment::Literal(".".to_string()),
                Segment::Slot(Placeholder::Ext),
            ],
        };
        Self {
            category,
            pattern: category.default_pattern().to_string(),
            segments,
        }
    }

    pub fn category(&self) -> OutputCategory {
        self.category
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Substitute `name` and `ext` into the pattern
    pub fn render(&self, name: &str, ext: &str) -> String {
        let mut out = String::with_capacity(self.pattern.len() + name.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(Placeholder::Name) => out.push_str(name),
                Segment::Slot(Placeholder::Ext) => out.push_str(ext),
            }
        }
        out
    }

    /// Validate `name` and render it into a resolved path
    pub fn resolve(&self, name: &str, ext: &str) -> PlanResult<ResolvedOutputPath> {
        check_name(name).map_err(|reason| self.name_error(name, reason))?;
        let path = self.render(name, ext);
        // A valid name can still combine with the literals into an escape.
        if unsafe_reason(&path).is_some() {
            return Err(self.name_error(name, "resolved path leaves the output directory"));
        }
        Ok(ResolvedOutputPath::new(self.category, name, path))
    }

    fn name_error(&self, name: &str, reason: &str) -> ConfigurationError {
        match self.category {
            OutputCategory::Entry => ConfigurationError::InvalidEntryName {
                entry: name.to_string(),
                reason: reason.to_string(),
            },
            category => ConfigurationError::InvalidOutputName {
                category,
                name: name.to_string(),
                reason: reason.to_string(),
            },
        }
    }
}

impl std::fmt::Display for OutputTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Patterns must stay inside the output directory.
fn unsafe_reason(pattern: &str) -> Option<&'static str> {
    if pattern.starts_with('/') || pattern.starts_with('\\') {
        return Some("absolute paths are not allowed");
    }
    let bytes = pattern.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return Some("absolute paths are not allowed");
    }
    if pattern.starts_with("./") {
        return Some("leading './' is not allowed");
    }
    if pattern.split(['/', '\\']).any(|part| part == "..") {
        return Some("'..' segments are not allowed");
    }
    None
}

/// One template per output category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplates {
    entry: OutputTemplate,
    chunk: OutputTemplate,
    asset: OutputTemplate,
}

impl Default for OutputTemplates {
    fn default() -> Self {
        Self {
            entry: OutputTemplate::default_for(OutputCategory::Entry),
            chunk: OutputTemplate::default_for(OutputCategory::Chunk),
            asset: OutputTemplate::default_for(OutputCategory::Asset),
        }
    }
}

impl OutputTemplates {
    /// Parse all three patterns, failing on the first invalid one
    pub fn parse(entry: &str, chunk: &str, asset: &str) -> PlanResult<Self> {
        Ok(Self {
            entry: OutputTemplate::parse(OutputCategory::Entry, entry)?,
            chunk: OutputTemplate::parse(OutputCategory::Chunk, chunk)?,
            asset: OutputTemplate::parse(OutputCategory::Asset, asset)?,
        })
    }

    /// Parse all three patterns, reporting every invalid one
    pub fn parse_all(entry: &str, chunk: &str, asset: &str) -> Result<Self, Vec<ConfigurationError>> {
        match (
            OutputTemplate::parse(OutputCategory::Entry, entry),
            OutputTemplate::parse(OutputCategory::Chunk, chunk),
            OutputTemplate::parse(OutputCategory::Asset, asset),
        ) {
            (Ok(entry), Ok(chunk), Ok(asset)) => Ok(Self { entry, chunk, asset }),
            (entry, chunk, asset) => Err([entry.err(), chunk.err(), asset.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }

    pub fn entry(&self) -> &OutputTemplate {
        &self.entry
    }

    pub fn chunk(&self) -> &OutputTemplate {
        &self.chunk
    }

    pub fn asset(&self) -> &OutputTemplate {
        &self.asset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_patterns_matches_builtin_defaults() {
        for category in OutputCategory::ALL {
            let parsed = OutputTemplate::parse(category, category.default_pattern()).unwrap();
            assert_eq!(parsed, OutputTemplate::default_for(category));
        }
    }

    #[test]
    fn render_substitutes_name_and_ext() {
        let t = OutputTemplate::parse(OutputCategory::Asset, "assets/[name].[ext]").unwrap();
        assert_eq!(t.render("g", "png"), "assets/g.png");

        let t = OutputTemplate::parse(OutputCategory::Entry, "src/[name]/index.js").unwrap();
        assert_eq!(t.render("popup", "js"), "src/popup/index.js");
    }

    #[test]
    fn repeated_placeholders_are_all_substituted() {
        let t = OutputTemplate::parse(OutputCategory::Chunk, "[name]/[name].[ext]").unwrap();
        assert_eq!(t.render("shared", "js"), "shared/shared.js");
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        let err = OutputTemplate::parse(OutputCategory::Chunk, "assets/[name]-[hash].js")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnknownPlaceholder { ref placeholder, .. } if placeholder == "hash"
        ));
    }

    #[test]
    fn unterminated_placeholder_is_rejected() {
        let err = OutputTemplate::parse(OutputCategory::Asset, "assets/[name.[ext]").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownPlaceholder { .. }));

        let err = OutputTemplate::parse(OutputCategory::Asset, "assets/[name").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnterminatedPlaceholder { .. }));
    }

    #[test]
    fn empty_template_is_rejected() {
        let err = OutputTemplate::parse(OutputCategory::Entry, "").unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyTemplate { .. }));
    }

    #[test]
    fn escaping_templates_are_rejected() {
        for pattern in ["/abs/[name].js", "../[name].js", "./[name].js", "a/../[name].js", "C:/[name].js"] {
            let err = OutputTemplate::parse(OutputCategory::Entry, pattern).unwrap_err();
            assert!(
                matches!(err, ConfigurationError::UnsafeTemplate { .. }),
                "expected {pattern} to be rejected, got {err}"
            );
        }
    }

    #[test]
    fn stray_closing_bracket_is_literal() {
        let t = OutputTemplate::parse(OutputCategory::Chunk, "chunks]/[name].js").unwrap();
        assert_eq!(t.render("x", "js"), "chunks]/x.js");
    }

    #[test]
    fn resolve_rejects_escaping_names() {
        let t = OutputTemplate::default_for(OutputCategory::Chunk);
        let err = t.resolve("../evil", "js").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidOutputName { .. }));

        let t = OutputTemplate::default_for(OutputCategory::Entry);
        let err = t.resolve("", "js").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidEntryName { .. }));
    }

    #[test]
    fn resolve_rejects_names_that_combine_into_an_escape() {
        let t = OutputTemplate::parse(OutputCategory::Chunk, ".[name].js").unwrap();
        let err = t.resolve("./x", "js").unwrap_err();
        assert!(err.to_string().contains("leaves the output directory"));
        assert_eq!(t.resolve("x", "js").unwrap().as_str(), ".x.js");
    }

    #[test]
    fn parse_all_collects_every_error() {
        let errors = OutputTemplates::parse_all("[hash].js", "assets/[name].js", "").unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
