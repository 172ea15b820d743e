/// Response handling rules: which status codes swap content and which count as errors.
///
/// Rules are tried in order; the first whose pattern matches the decimal status wins.
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("invalid status pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// What to do with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Disposition {
    pub swap: bool,
    pub error: bool,
}

#[derive(Debug, Clone)]
pub struct ResponseRule {
    pattern: Regex,
    pub disposition: Disposition,
}

impl ResponseRule {
    pub fn new(code: &str, swap: bool, error: bool) -> Result<Self, ResponseError> {
        let pattern = Regex::new(code).map_err(|source| ResponseError::Pattern {
            pattern: code.to_string(),
            source,
        })?;
        Ok(Self {
            pattern,
            disposition: Disposition { swap, error },
        })
    }

    pub fn code(&self) -> &str {
        self.pattern.as_str()
    }

    /// Unanchored match against the decimal status, e.g. `[23]..` matches `201`.
    pub fn matches(&self, status: u16) -> bool {
        self.pattern.is_match(&status.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ResponseTable {
    rules: Vec<ResponseRule>,
}

impl ResponseTable {
    pub fn new(rules: Vec<ResponseRule>) -> Self {
        Self { rules }
    }

    /// The application's table:
    /// no content keeps the page, validation errors still swap in the error fragment,
    /// other client/server errors only raise an error event.
    pub fn standard() -> Result<Self, ResponseError> {
        Ok(Self::new(vec![
            ResponseRule::new("204", false, false)?,
            ResponseRule::new("[23]..", true, false)?,
            ResponseRule::new("422", true, true)?,
            ResponseRule::new("[45]..", false, true)?,
            ResponseRule::new("...", true, false)?,
        ]))
    }

    /// First rule whose pattern matches `status`.
    pub fn matching_rule(&self, status: u16) -> Option<&ResponseRule> {
        self.rules.iter().find(|rule| rule.matches(status))
    }

    pub fn resolve(&self, status: u16) -> Disposition {
        self.matching_rule(status)
            .map(|rule| rule.disposition)
            .unwrap_or(Disposition {
                swap: true,
                error: false,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disp(swap: bool, error: bool) -> Disposition {
        Disposition { swap, error }
    }

    #[test]
    fn test_standard_table() {
        let table = ResponseTable::standard().unwrap();
        assert_eq!(table.resolve(204), disp(false, false));
        assert_eq!(table.resolve(200), disp(true, false));
        assert_eq!(table.resolve(302), disp(true, false));
        assert_eq!(table.resolve(422), disp(true, true));
        assert_eq!(table.resolve(401), disp(false, true));
        assert_eq!(table.resolve(500), disp(false, true));
        assert_eq!(table.resolve(101), disp(true, false));
    }

    #[test]
    fn test_first_match_wins() {
        let table = ResponseTable::new(vec![
            ResponseRule::new("4..", false, true).unwrap(),
            ResponseRule::new("422", true, true).unwrap(),
        ]);
        assert_eq!(table.resolve(422), disp(false, true));
    }

    #[test]
    fn test_matching_rule_reports_pattern() {
        let table = ResponseTable::standard().unwrap();
        assert_eq!(table.matching_rule(204).map(ResponseRule::code), Some("204"));
        assert_eq!(table.matching_rule(404).map(ResponseRule::code), Some("[45].."));
        assert_eq!(table.matching_rule(101).map(ResponseRule::code), Some("..."));
    }

    #[test]
    fn test_no_match_defaults_to_swap() {
        let table = ResponseTable::new(vec![ResponseRule::new("5..", false, true).unwrap()]);
        assert!(table.matching_rule(200).is_none());
        assert_eq!(table.resolve(200), disp(true, false));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ResponseRule::new("[45", false, true).unwrap_err();
        assert!(err.to_string().contains("[45"));
    }
}
