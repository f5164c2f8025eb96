//! Form body parsing for schema export requests.

use std::collections::HashMap;

use crate::identifier::DatabaseName;

/// Error type for undecodable form bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub message: String,
}

impl FormError {
    fn invalid_encoding(key: &str) -> Self {
        Self {
            message: format!("Invalid URL encoding in {}", key),
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FormError {}

/// Parsed `application/x-www-form-urlencoded` request body.
#[derive(Debug, Clone, Default)]
pub struct FormRequest {
    params: HashMap<String, String>,
}

impl FormRequest {
    /// Parse a urlencoded body. Repeated keys keep the last value.
    pub fn from_urlencoded(body: &str) -> Result<Self, FormError> {
        let mut params = HashMap::new();

        for pair in body.split('&') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.splitn(2, '=');
            let raw_key = parts.next().unwrap_or("");
            let raw_value = parts.next().unwrap_or("");

            let key = decode_component(raw_key)
                .ok_or_else(|| FormError::invalid_encoding(raw_key))?;
            let value = decode_component(raw_value)
                .ok_or_else(|| FormError::invalid_encoding(&key))?;
            params.insert(key, value);
        }

        Ok(Self { params })
    }

    /// Build a request from already-decoded pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a single body parameter.
    pub fn body_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|v| v.into_owned())
}

/// Typed view over the two parameters a schema export needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub database_name: Option<DatabaseName>,
    pub export_type: Option<String>,
}

impl ExportRequest {
    pub fn from_form(form: &FormRequest) -> Self {
        let database_name = DatabaseName::try_from_value(form.body_param("db"));
        let export_type = form
            .body_param("export_type")
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Self {
            database_name,
            export_type,
        }
    }

    /// Name of the first parameter that is missing, `db` before `export_type`.
    pub fn missing_parameter(&self) -> Option<&'static str> {
        if self.database_name.is_none() {
            Some("db")
        } else if self.export_type.is_none() {
            Some("export_type")
        } else {
            None
        }
    }
}
