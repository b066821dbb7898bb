//! Round-tripping the active query and auxiliary choice through a
//! string-valued key-value cell, such as a page's query string.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use log::warn;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use verbiste_semantics::Auxiliary;

/// Key holding the active query.
pub const QUERY_KEY: &str = "q";

/// Key holding the chosen auxiliary ("etre" or "avoir").
pub const AUXILIARY_KEY: &str = "aux";

/// Characters left unescaped in query-string components.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A mutable string-valued key-value cell.
pub trait SelectionStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, or removes the key when `value` is `None`.
    fn set(&mut self, key: &str, value: Option<&str>);
}

/// A [`SelectionStore`] backed by a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.values.insert(key.to_string(), value.to_string());
            }
            None => {
                self.values.remove(key);
            }
        }
    }
}

/// A [`SelectionStore`] over a `k=v&k=v` query string.
///
/// Pair order is preserved, values are percent-encoded on output, and `+`
/// decodes to a space.
///
/// # Example
///
/// ```
/// use verbiste::{QueryStringStore, SelectionStore};
///
/// let mut store = QueryStringStore::parse("?q=%C3%AAtre");
/// assert_eq!(store.get("q").as_deref(), Some("être"));
///
/// store.set("aux", Some("avoir"));
/// assert_eq!(store.to_string(), "q=%C3%AAtre&aux=avoir");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStringStore {
    pairs: Vec<(String, String)>,
}

fn decode_component(s: &str) -> String {
    percent_decode_str(&s.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

impl QueryStringStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string, with or without a leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        QueryStringStore { pairs }
    }
}

impl SelectionStore for QueryStringStore {
    fn get(&self, key: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => match self.pairs.iter_mut().find(|(k, _)| k == key) {
                Some(pair) => pair.1 = value.to_string(),
                None => self.pairs.push((key.to_string(), value.to_string())),
            },
            None => self.pairs.retain(|(k, _)| k != key),
        }
    }
}

impl Display for QueryStringStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, "&")?;
            }
            write!(
                f,
                "{}={}",
                utf8_percent_encode(key, COMPONENT),
                utf8_percent_encode(value, COMPONENT)
            )?;
        }
        Ok(())
    }
}

/// The selection state that survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSelection {
    pub query: Option<String>,
    pub auxiliary: Option<Auxiliary>,
}

impl PersistedSelection {
    /// Reads the selection from `store`.
    ///
    /// Empty values read as absent, and an unrecognized auxiliary is dropped.
    pub fn load<S: SelectionStore + ?Sized>(store: &S) -> Self {
        let query = store.get(QUERY_KEY).filter(|q| !q.is_empty());
        let auxiliary = store
            .get(AUXILIARY_KEY)
            .filter(|a| !a.is_empty())
            .and_then(|a| match a.parse::<Auxiliary>() {
                Ok(auxiliary) => Some(auxiliary),
                Err(e) => {
                    warn!("ignoring persisted auxiliary: {e}");
                    None
                }
            });
        PersistedSelection { query, auxiliary }
    }

    /// Writes the selection to `store`, removing keys for absent values.
    pub fn save<S: SelectionStore + ?Sized>(&self, store: &mut S) {
        store.set(QUERY_KEY, self.query.as_deref());
        store.set(AUXILIARY_KEY, self.auxiliary.map(Auxiliary::as_key));
    }
}
