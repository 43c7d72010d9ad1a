// Wire shapes of the Wordstream API and the table of credited operations.

use crate::error::{Result, WordstreamError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Code the service puts in `code` when a call succeeded.
pub const OK_CODE: &str = "OK";

pub const LOGIN_PATH: &str = "/authentication/login";
pub const LOGOUT_PATH: &str = "/authentication/logout";
pub const API_CREDITS_PATH: &str = "/authentication/get_api_credits";

/// The `{code, data}` wrapper every endpoint answers with.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiEnvelope<T = Value> {
    pub code: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.code == OK_CODE
    }
}

impl ApiEnvelope<Value> {
    /// Decode `data` into the shape an endpoint promises.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let data = self
            .data
            .ok_or_else(|| WordstreamError::MalformedResponse("envelope has no data".into()))?;
        serde_json::from_value(data).map_err(|e| WordstreamError::MalformedResponse(e.to_string()))
    }
}

/// Login form.
#[derive(Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl std::fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize, Debug)]
pub struct LoginData {
    pub session_id: String,
}

#[derive(Deserialize, Debug)]
pub struct CreditsData {
    pub remaining_monthly_credits: u64,
}

/// Opaque token issued by login. Must not be used after logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session(String);

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Session(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A keyword and its (relative) search volume. On the wire this is a
/// `[keyword, volume]` array; trailing elements are ignored. The service
/// sends `null` (or nothing) for keywords it has no volume for.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<Value>")]
pub struct KeywordVolume {
    pub keyword: String,
    pub volume: Option<f64>,
}

impl TryFrom<Vec<Value>> for KeywordVolume {
    type Error = String;

    fn try_from(row: Vec<Value>) -> std::result::Result<Self, Self::Error> {
        let keyword = row
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| format!("expected [keyword, volume], got {:?}", row))?;
        let volume = match row.get(1) {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                v.as_f64()
                    .ok_or_else(|| format!("volume is not a number in {:?}", row))?,
            ),
        };
        Ok(KeywordVolume {
            keyword: keyword.to_string(),
            volume,
        })
    }
}

/// A keyword row that is either a bare string or an array whose first
/// element is the keyword.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Value")]
pub struct KeywordRow(pub String);

impl TryFrom<Value> for KeywordRow {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(KeywordRow(s)),
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::String(s)) => Ok(KeywordRow(s)),
                other => Err(format!("keyword row starts with {:?}", other)),
            },
            other => Err(format!("unexpected keyword row {}", other)),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Grouping {
    #[serde(default)]
    pub matches: Vec<usize>,
}

/// `data` of `get_keyword_niches`: groupings reference keywords by index.
#[derive(Deserialize, Debug, Clone)]
pub struct NichePayload {
    pub groupings: Vec<Grouping>,
    pub keywords: Vec<KeywordVolume>,
}

impl NichePayload {
    /// Resolve every match of every grouping, in order, dropping the
    /// grouping boundaries.
    pub fn flatten(&self) -> Result<Vec<KeywordVolume>> {
        let total = self.groupings.iter().map(|g| g.matches.len()).sum();
        let mut out = Vec::with_capacity(total);
        for grouping in &self.groupings {
            for &idx in &grouping.matches {
                let kw = self.keywords.get(idx).ok_or_else(|| {
                    WordstreamError::MalformedResponse(format!(
                        "niche match {} out of range ({} keywords)",
                        idx,
                        self.keywords.len()
                    ))
                })?;
                out.push(kw.clone());
            }
        }
        Ok(out)
    }
}

/// The keyword operations that need credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Keywords,
    KeywordNiches,
    KeywordVolumes,
    QuestionKeywords,
    RelatedKeywords,
}

impl Operation {
    pub fn path(self) -> &'static str {
        match self {
            Operation::Keywords => "/keywordtool/get_keywords",
            Operation::KeywordNiches => "/keywordtool/get_keyword_niches",
            Operation::KeywordVolumes => "/keywordtool/get_keyword_volumes",
            Operation::QuestionKeywords => "/keywordtool/get_question_keywords",
            Operation::RelatedKeywords => "/keywordtool/get_related_keywords",
        }
    }

    /// Minimum balance needed before the request is sent.
    pub fn required_credits(self) -> u64 {
        match self {
            Operation::Keywords | Operation::KeywordVolumes => 1,
            Operation::QuestionKeywords => 10,
            Operation::KeywordNiches | Operation::RelatedKeywords => 25,
        }
    }

    /// `get_keywords` takes a single seed as-is; the others take a
    /// newline-delimited list.
    pub fn splits_seeds(self) -> bool {
        !matches!(self, Operation::Keywords)
    }

    pub fn sends_max_results(self) -> bool {
        !matches!(self, Operation::KeywordVolumes)
    }

    /// Build the form body for this operation.
    pub fn form(
        self,
        seeds: &str,
        max_results: usize,
        session: &Session,
    ) -> Vec<(&'static str, String)> {
        let seeds = if self.splits_seeds() {
            normalize_seeds(seeds)
        } else {
            seeds.to_string()
        };
        let mut form = vec![("seeds", seeds)];
        if self.sends_max_results() {
            form.push(("max_results", max_results.to_string()));
        }
        form.push(("session_id", session.as_str().to_string()));
        form
    }
}

/// The API delimits seeds with newlines; callers usually type spaces.
pub fn normalize_seeds(seeds: &str) -> String {
    seeds.replace(' ', "\n")
}
