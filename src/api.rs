// API client module: a small blocking HTTP client for the Wordstream
// keyword-research API. Every endpoint is a form-encoded POST answering
// with a `{code, data}` envelope; the keyword endpoints additionally run
// inside a login -> credit check -> request -> logout sequence.

use crate::config::ClientConfig;
use crate::error::{Result, WordstreamError};
use crate::models::{
    ApiEnvelope, CreditsData, Credentials, KeywordRow, KeywordVolume, LoginData, NichePayload,
    Operation, Session, API_CREDITS_PATH, LOGIN_PATH, LOGOUT_PATH,
};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result cap used by the service when the caller has no preference.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Stateless Wordstream client: holds a reqwest blocking client and the
/// base URL. Sessions are created and dropped per call.
#[derive(Clone)]
pub struct WordstreamClient {
    client: Client,
    base_url: String,
}

impl WordstreamClient {
    /// Client for the production API with reqwest's default timeout.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client configured from `WORDSTREAM_API_URL` / `WORDSTREAM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(WordstreamClient {
            client,
            base_url: config.base_url,
        })
    }

    /// POST a form to `path` and parse the envelope. Transport failures and
    /// undecodable bodies are kept apart.
    fn post<F: Serialize + ?Sized>(&self, path: &str, form: &F) -> Result<ApiEnvelope> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path, "sending wordstream request");
        let res = self.client.post(&url).form(form).send()?;
        let status = res.status();
        res.json::<ApiEnvelope>().map_err(|e| {
            if e.is_decode() {
                WordstreamError::MalformedResponse(format!("{} (HTTP {})", e, status))
            } else {
                WordstreamError::Transport(e)
            }
        })
    }

    /// Log in and return the session token. A non-`OK` code becomes
    /// `AuthenticationFailed` carrying that code.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        let envelope = self.post(LOGIN_PATH, &Credentials { username, password })?;
        if !envelope.is_ok() {
            warn!(code = %envelope.code, "wordstream login rejected");
            return Err(WordstreamError::AuthenticationFailed(envelope.code));
        }
        let data: LoginData = envelope.decode()?;
        Ok(Session::new(data.session_id))
    }

    /// Log out and hand back the raw envelope; `code` is `OK` when the
    /// session was closed.
    pub fn logout(&self, session: &Session) -> Result<ApiEnvelope> {
        self.post(LOGOUT_PATH, &[("session_id", session.as_str())])
    }

    fn logout_quietly(&self, session: &Session) {
        match self.logout(session) {
            Ok(envelope) if envelope.is_ok() => {}
            Ok(envelope) => debug!(code = %envelope.code, "wordstream logout not acknowledged"),
            Err(e) => debug!(error = %e, "wordstream logout failed"),
        }
    }

    /// Remaining monthly credits for an account. Opens and closes its own
    /// session.
    pub fn api_credits(&self, username: &str, password: &str) -> Result<u64> {
        let session = self.login(username, password)?;
        let credits = self.api_credits_for_session(&session);
        self.logout_quietly(&session);
        credits
    }

    /// Remaining monthly credits for an already open session.
    pub fn api_credits_for_session(&self, session: &Session) -> Result<u64> {
        let envelope = self.post(API_CREDITS_PATH, &[("session_id", session.as_str())])?;
        if !envelope.is_ok() {
            return Err(WordstreamError::Api(envelope.code));
        }
        let data: CreditsData = envelope.decode()?;
        Ok(data.remaining_monthly_credits)
    }

    /// Shared sequence of every keyword operation. Nothing is sent to the
    /// operation endpoint unless the balance covers `op.required_credits()`.
    fn credited<T: DeserializeOwned>(
        &self,
        op: Operation,
        username: &str,
        password: &str,
        seeds: &str,
        max_results: usize,
    ) -> Result<T> {
        let session = self.login(username, password)?;

        let required = op.required_credits();
        let available = match self.api_credits_for_session(&session) {
            Ok(credits) => Some(credits),
            Err(e) => {
                warn!(error = %e, "could not read wordstream credit balance");
                None
            }
        };
        if !matches!(available, Some(credits) if credits >= required) {
            info!(?op, required, ?available, "not enough wordstream credits");
            return Err(WordstreamError::InsufficientCredits {
                required,
                available,
            });
        }

        let envelope = self.post(op.path(), &op.form(seeds, max_results, &session))?;
        if !envelope.is_ok() {
            warn!(?op, code = %envelope.code, "wordstream request rejected");
            return Err(WordstreamError::Api(envelope.code));
        }
        self.logout_quietly(&session);
        envelope.decode()
    }

    /// Keyword suggestions for a single seed, at most `max_results` of them.
    pub fn get_keywords(
        &self,
        username: &str,
        password: &str,
        seed: &str,
        max_results: usize,
    ) -> Result<Vec<String>> {
        let rows: Vec<KeywordRow> =
            self.credited(Operation::Keywords, username, password, seed, max_results)?;
        Ok(rows.into_iter().take(max_results).map(|row| row.0).collect())
    }

    /// Niche groupings for space/newline separated seeds, flattened into
    /// keyword / relative volume pairs.
    pub fn get_keyword_niches(
        &self,
        username: &str,
        password: &str,
        seeds: &str,
        max_niches: usize,
    ) -> Result<Vec<KeywordVolume>> {
        let payload: NichePayload =
            self.credited(Operation::KeywordNiches, username, password, seeds, max_niches)?;
        payload.flatten()
    }

    pub fn get_keyword_volumes(
        &self,
        username: &str,
        password: &str,
        seeds: &str,
    ) -> Result<Vec<KeywordVolume>> {
        self.credited(
            Operation::KeywordVolumes,
            username,
            password,
            seeds,
            DEFAULT_MAX_RESULTS,
        )
    }

    /// Question-form keywords with their volumes.
    pub fn get_question_keywords(
        &self,
        username: &str,
        password: &str,
        seeds: &str,
        max_results: usize,
    ) -> Result<Vec<KeywordVolume>> {
        self.credited(
            Operation::QuestionKeywords,
            username,
            password,
            seeds,
            max_results,
        )
    }

    pub fn get_related_keywords(
        &self,
        username: &str,
        password: &str,
        seeds: &str,
        max_results: usize,
    ) -> Result<Vec<String>> {
        let rows: Vec<KeywordRow> = self.credited(
            Operation::RelatedKeywords,
            username,
            password,
            seeds,
            max_results,
        )?;
        Ok(rows.into_iter().map(|row| row.0).collect())
    }
}
