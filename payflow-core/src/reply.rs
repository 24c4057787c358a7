//! Interactive replies.
//!
//! A [`Reply`] is how an action says "this flow cannot continue until the
//! payer does something out of band". It is not an error: the gateway hands it
//! back to the original caller, untouched, as [`Outcome::Suspended`].
//!
//! [`Outcome::Suspended`]: crate::Outcome::Suspended

use std::fmt;

/// Continuation data for a suspended flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Send the payer's browser to `url`.
    HttpRedirect {
        /// Redirect target.
        url: String,
    },

    /// Render a response as is.
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body.
        content: String,
        /// Response headers, in order.
        headers: Vec<(String, String)>,
    },

    /// Submit `fields` to `url` through an auto-posting form.
    HttpPostRedirect {
        /// Form action.
        url: String,
        /// Form fields, in order.
        fields: Vec<(String, String)>,
    },
}

impl Reply {
    /// A redirect to `url`.
    pub fn redirect(url: impl Into<String>) -> Self {
        Reply::HttpRedirect { url: url.into() }
    }

    /// A `200 OK` response with `content`.
    pub fn response(content: impl Into<String>) -> Self {
        Reply::HttpResponse {
            status: 200,
            content: content.into(),
            headers: Vec::new(),
        }
    }

    /// A POST redirect to `url` carrying `fields`.
    pub fn post_redirect<K, V>(url: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Reply::HttpPostRedirect {
            url: url.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The URL the payer is sent to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Reply::HttpRedirect { url } | Reply::HttpPostRedirect { url, .. } => Some(url),
            Reply::HttpResponse { .. } => None,
        }
    }

    /// The HTTP status a front controller should answer with.
    ///
    /// A POST redirect is rendered as a self-submitting page, hence `200`.
    pub fn status(&self) -> u16 {
        match self {
            Reply::HttpRedirect { .. } => 302,
            Reply::HttpResponse { status, .. } => *status,
            Reply::HttpPostRedirect { .. } => 200,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::HttpRedirect { url } => write!(f, "redirect to {url}"),
            Reply::HttpResponse { status, .. } => write!(f, "response with status {status}"),
            Reply::HttpPostRedirect { url, fields } => {
                write!(f, "post redirect to {url} with {} fields", fields.len())
            }
        }
    }
}
