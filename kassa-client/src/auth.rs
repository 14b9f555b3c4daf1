//! Authorization header construction

use crate::credential::{CredentialStore, TokenKind};
use crate::{ClientError, ClientResult};
use reqwest::header::HeaderValue;
use std::fmt;
use std::str::FromStr;

/// Which stored token goes into `Authorization` when both are present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPrecedence {
    /// Access token; the refresh token only when no access token is stored
    #[default]
    AccessFirst,
    /// Refresh token whenever one is stored, overwriting the access token.
    /// Matches the legacy web client, which ran two header hooks in a row.
    RefreshOverwrites,
}

impl TokenPrecedence {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPrecedence::AccessFirst => "access_first",
            TokenPrecedence::RefreshOverwrites => "refresh_overwrites",
        }
    }

    fn order(&self) -> [TokenKind; 2] {
        match self {
            TokenPrecedence::AccessFirst => [TokenKind::Access, TokenKind::Refresh],
            TokenPrecedence::RefreshOverwrites => [TokenKind::Refresh, TokenKind::Access],
        }
    }
}

impl FromStr for TokenPrecedence {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "access_first" | "access" => Ok(TokenPrecedence::AccessFirst),
            "refresh_overwrites" | "refresh" | "legacy" => Ok(TokenPrecedence::RefreshOverwrites),
            other => Err(ClientError::Config(format!(
                "unknown token precedence '{other}'"
            ))),
        }
    }
}

impl fmt::Display for TokenPrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the `Authorization` value from the store.
///
/// Returns `None` when no token is stored. Store failures and tokens that
/// are not valid header text are errors; the request must not be sent.
pub fn authorization_header(
    store: &dyn CredentialStore,
    precedence: TokenPrecedence,
) -> ClientResult<Option<HeaderValue>> {
    for kind in precedence.order() {
        let Some(token) = store.get(kind)? else {
            continue;
        };
        if token.is_empty() {
            continue;
        }
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ClientError::Credential(format!("{kind} is not a valid header value"))
        })?;
        value.set_sensitive(true);
        return Ok(Some(value));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::MemoryCredentialStore;

    fn header(store: &MemoryCredentialStore, precedence: TokenPrecedence) -> Option<String> {
        authorization_header(store, precedence)
            .unwrap()
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[test]
    fn test_no_tokens_no_header() {
        let store = MemoryCredentialStore::new();
        assert_eq!(header(&store, TokenPrecedence::AccessFirst), None);
        assert_eq!(header(&store, TokenPrecedence::RefreshOverwrites), None);
    }

    #[test]
    fn test_access_first_prefers_access() {
        let store = MemoryCredentialStore::with_tokens(Some("acc"), Some("ref"));
        assert_eq!(
            header(&store, TokenPrecedence::AccessFirst).as_deref(),
            Some("Bearer acc")
        );
    }

    #[test]
    fn test_refresh_overwrites_when_both_present() {
        let store = MemoryCredentialStore::with_tokens(Some("acc"), Some("ref"));
        assert_eq!(
            header(&store, TokenPrecedence::RefreshOverwrites).as_deref(),
            Some("Bearer ref")
        );
    }

    #[test]
    fn test_single_token_used_by_both_policies() {
        let only_access = MemoryCredentialStore::with_tokens(Some("acc"), None);
        let only_refresh = MemoryCredentialStore::with_tokens(None, Some("ref"));
        for precedence in [TokenPrecedence::AccessFirst, TokenPrecedence::RefreshOverwrites] {
            assert_eq!(header(&only_access, precedence).as_deref(), Some("Bearer acc"));
            assert_eq!(header(&only_refresh, precedence).as_deref(), Some("Bearer ref"));
        }
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = MemoryCredentialStore::with_tokens(Some(""), Some("ref"));
        assert_eq!(
            header(&store, TokenPrecedence::AccessFirst).as_deref(),
            Some("Bearer ref")
        );
    }

    #[test]
    fn test_invalid_token_rejected() {
        let store = MemoryCredentialStore::with_tokens(Some("bad\ntoken"), None);
        let err = authorization_header(&store, TokenPrecedence::AccessFirst).unwrap_err();
        assert!(matches!(err, ClientError::Credential(_)));
    }

    #[test]
    fn test_precedence_parse() {
        assert_eq!(
            "refresh_overwrites".parse::<TokenPrecedence>().unwrap(),
            TokenPrecedence::RefreshOverwrites
        );
        assert_eq!(
            " Access_First ".parse::<TokenPrecedence>().unwrap(),
            TokenPrecedence::AccessFirst
        );
        assert!("sideways".parse::<TokenPrecedence>().is_err());
    }
}
