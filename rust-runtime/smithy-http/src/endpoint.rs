/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::Uri;
use std::borrow::Cow;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InvalidEndpoint {
    #[error("endpoint must contain an authority: {0}")]
    EndpointMustHaveAuthority(Uri),
    #[error("endpoint must contain a scheme: {0}")]
    EndpointMustHaveScheme(Uri),
    #[error("failed to build endpoint URI: {0}")]
    Http(#[from] http::Error),
}

/// API Endpoint
///
/// The scheme, authority and base path of the service a request is sent to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    pub fn new(uri: Uri) -> Self {
        Endpoint { uri }
    }

    /// Create an endpoint from a static string.
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// let endpoint = Endpoint::from_static("http://localhost:8000");
    /// assert_eq!(endpoint.uri().host(), Some("localhost"));
    /// ```
    pub fn from_static(uri: &'static str) -> Self {
        Endpoint::new(Uri::from_static(uri))
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Replaces the scheme and authority of `uri` with this endpoint's and prepends the endpoint's
    /// path to the request path.
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        let authority = self
            .uri
            .authority()
            .ok_or_else(|| InvalidEndpoint::EndpointMustHaveAuthority(self.uri.clone()))?;
        let scheme = self
            .uri
            .scheme()
            .ok_or_else(|| InvalidEndpoint::EndpointMustHaveScheme(self.uri.clone()))?;
        let new_uri = Uri::builder()
            .authority(authority.clone())
            .scheme(scheme.clone())
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, InvalidEndpoint};
    use http::Uri;

    #[test]
    fn endpoint_replaces_authority() {
        let ep = Endpoint::from_static("https://kms.us-east-1.amazonaws.com");
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri).unwrap();
        assert_eq!(uri, Uri::from_static("https://kms.us-east-1.amazonaws.com/"));
    }

    #[test]
    fn endpoint_with_path() {
        for uri in &[
            // check that trailing slashes are properly normalized
            "https://localhost:8443/proxy",
            "https://localhost:8443/proxy/",
        ] {
            let ep = Endpoint::new(Uri::from_static(*uri));
            let mut uri = Uri::from_static("/?Action=ListTopics");
            ep.set_endpoint(&mut uri).unwrap();
            assert_eq!(
                uri,
                Uri::from_static("https://localhost:8443/proxy/?Action=ListTopics")
            );
        }
    }

    #[test]
    fn endpoint_without_authority() {
        let ep = Endpoint::from_static("/just/a/path");
        let mut uri = Uri::from_static("/");
        assert!(matches!(
            ep.set_endpoint(&mut uri),
            Err(InvalidEndpoint::EndpointMustHaveAuthority(_))
        ));
    }
}
