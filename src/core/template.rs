/// Story templates — slot parsing.

use serde::{Deserialize, Serialize};

use crate::core::rules::DataError;

/// Which tone lexicon a lexical slot draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexicalSlot {
    Verb,
    Noun,
    Closing,
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// The display name, first letter capitalized: `{name}`.
    Name,
    /// The meaning sentence without its final period: `{meaning}`.
    Meaning,
    /// Same, with the first letter lowered: `{meaning_lower}`.
    MeaningLower,
    /// A pick from the tone's lexical bank: `{verb}`, `{noun}`, `{closing}`.
    Lexeme(LexicalSlot),
    /// The blended thematic clauses: `{clauses}`.
    Clauses,
}

/// A parsed template — a sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{name}`, `{meaning}`, `{meaning_lower}`, `{clauses}`
    /// - `{verb}`, `{noun}`, `{closing}` → `Lexeme`
    /// - `{{` / `}}` → literal `{` / `}`
    /// - Everything else → `Literal`
    pub fn parse(input: &str) -> Result<Template, DataError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            if chars[i] == '{' {
                if i + 1 < len && chars[i + 1] == '{' {
                    literal_buf.push('{');
                    i += 2;
                    continue;
                }

                if !literal_buf.is_empty() {
                    segments.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                }

                let start = i + 1;
                let mut end = start;
                while end < len && chars[end] != '}' {
                    if chars[end] == '{' {
                        return Err(DataError::TemplateParse(
                            "nested braces are not allowed".to_string(),
                        ));
                    }
                    end += 1;
                }
                if end == len {
                    return Err(DataError::TemplateParse("unclosed brace".to_string()));
                }

                let content: String = chars[start..end].iter().collect();
                segments.push(Self::parse_segment(content.trim())?);
                i = end + 1;
            } else if chars[i] == '}' {
                if i + 1 < len && chars[i + 1] == '}' {
                    literal_buf.push('}');
                    i += 2;
                    continue;
                }
                return Err(DataError::TemplateParse(
                    "unmatched closing brace".to_string(),
                ));
            } else {
                literal_buf.push(chars[i]);
                i += 1;
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template { segments })
    }

    fn parse_segment(content: &str) -> Result<TemplateSegment, DataError> {
        let segment = match content {
            "" => return Err(DataError::TemplateParse("empty braces".to_string())),
            "name" => TemplateSegment::Name,
            "meaning" => TemplateSegment::Meaning,
            "meaning_lower" => TemplateSegment::MeaningLower,
            "clauses" => TemplateSegment::Clauses,
            "verb" => TemplateSegment::Lexeme(LexicalSlot::Verb),
            "noun" => TemplateSegment::Lexeme(LexicalSlot::Noun),
            "closing" => TemplateSegment::Lexeme(LexicalSlot::Closing),
            other => {
                return Err(DataError::TemplateParse(format!(
                    "unknown slot '{}'",
                    other
                )))
            }
        };
        Ok(segment)
    }

    /// Lexical slots used by this template, in order of appearance.
    pub fn lexical_slots(&self) -> impl Iterator<Item = LexicalSlot> + '_ {
        self.segments.iter().filter_map(|s| match s {
            TemplateSegment::Lexeme(slot) => Some(*slot),
            _ => None,
        })
    }

    pub fn has_clauses(&self) -> bool {
        self.segments.contains(&TemplateSegment::Clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_literal_only() {
        let t = Template::parse("Hello, world.").unwrap();
        assert_eq!(
            t.segments,
            vec![TemplateSegment::Literal("Hello, world.".to_string())]
        );
    }

    #[test]
    fn parse_name_and_meaning() {
        let t = Template::parse("{name} means {meaning_lower}.").unwrap();
        assert_eq!(
            t.segments,
            vec![
                TemplateSegment::Name,
                TemplateSegment::Literal(" means ".to_string()),
                TemplateSegment::MeaningLower,
                TemplateSegment::Literal(".".to_string()),
            ]
        );
    }

    #[test]
    fn parse_lexemes() {
        let t = Template::parse("{name} {verb} the {noun}, {closing}.").unwrap();
        let slots: Vec<LexicalSlot> = t.lexical_slots().collect();
        assert_eq!(
            slots,
            vec![LexicalSlot::Verb, LexicalSlot::Noun, LexicalSlot::Closing]
        );
        assert!(!t.has_clauses());
    }

    #[test]
    fn parse_clauses_with_padding() {
        let t = Template::parse("{ clauses }").unwrap();
        assert!(t.has_clauses());
    }

    #[test]
    fn parse_escaped_braces() {
        let t = Template::parse("Use {{braces}} here.").unwrap();
        assert_eq!(
            t.segments,
            vec![TemplateSegment::Literal("Use {braces} here.".to_string())]
        );
    }

    #[test]
    fn parse_unknown_slot_error() {
        let err = Template::parse("Hello {entity.name}").unwrap_err();
        assert!(err.to_string().contains("entity.name"));
    }

    #[test]
    fn parse_empty_braces_error() {
        assert!(Template::parse("Bad {} here").is_err());
    }

    #[test]
    fn parse_nested_braces_error() {
        assert!(Template::parse("Bad {outer{name}} here").is_err());
    }

    #[test]
    fn parse_unclosed_brace_error() {
        assert!(Template::parse("Bad {name here").is_err());
    }

    #[test]
    fn parse_unmatched_close_error() {
        assert!(Template::parse("Bad } here").is_err());
    }
}
