/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Resolution of a service endpoint from the configured [`Region`] and application of that
//! endpoint to an outgoing request.

use aws_types::region::Region;
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::operation::BuildError;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to send a request to, as resolved for a region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint) -> Self {
        AwsEndpoint { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri)
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// To provide a static endpoint, [`Endpoint`](smithy_http::endpoint::Endpoint) implements this trait.
/// Example usage:
/// ```rust
/// # fn wrapper() -> Result<(), aws_endpoint::BoxError> {
/// use smithy_http::endpoint::Endpoint;
/// use aws_endpoint::ResolveAwsEndpoint;
/// use aws_types::region::Region;
/// let endpoint = Endpoint::from_static("http://localhost:8000");
/// let resolved = endpoint.endpoint(&Region::new("us-east-1"))?;
/// assert_eq!(resolved.endpoint(), &endpoint);
/// # Ok(())
/// # }
/// ```
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::new(self.clone()))
    }
}

impl<T> ResolveAwsEndpoint for Arc<T>
where
    T: ResolveAwsEndpoint + ?Sized,
{
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        self.as_ref().endpoint(region)
    }
}

/// Resolves `https://{service}.{region}.amazonaws.com`, or `.amazonaws.com.cn` for the China
/// regions.
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    service: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(service: &'static str) -> Self {
        Self { service }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let dns_suffix = if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let uri = format!("https://{}.{}.{}", self.service, region, dns_suffix);
        Ok(AwsEndpoint::new(Endpoint::new(uri.parse::<http::Uri>()?)))
    }
}

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoRegion,
    EndpointResolutionError(BoxError),
    InvalidEndpoint(InvalidEndpoint),
}

impl Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::NoRegion => None,
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref()),
            AwsEndpointStageError::InvalidEndpoint(err) => Some(err),
        }
    }
}

impl From<AwsEndpointStageError> for BuildError {
    fn from(err: AwsEndpointStageError) -> Self {
        match err {
            AwsEndpointStageError::NoRegion => BuildError::MissingRegion,
            other => BuildError::Other(other.into()),
        }
    }
}

/// Resolves the endpoint for `region` and applies it to the URI of `request`.
pub fn set_endpoint<B>(
    request: &mut http::Request<B>,
    resolver: &dyn ResolveAwsEndpoint,
    region: Option<&Region>,
) -> Result<(), AwsEndpointStageError> {
    let region = region.ok_or(AwsEndpointStageError::NoRegion)?;
    let endpoint = resolver
        .endpoint(region)
        .map_err(AwsEndpointStageError::EndpointResolutionError)?;
    tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
    endpoint
        .set_endpoint(request.uri_mut())
        .map_err(AwsEndpointStageError::InvalidEndpoint)
}

#[cfg(test)]
mod test {
    use crate::{
        set_endpoint, AwsEndpointStageError, DefaultAwsEndpointResolver, ResolveAwsEndpoint,
    };
    use aws_types::region::Region;
    use http::Uri;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::operation::BuildError;
    use std::sync::Arc;

    #[test]
    fn default_endpoint_updates_request() {
        let resolver = DefaultAwsEndpointResolver::for_service("kms");
        let mut req = http::Request::builder()
            .uri("/")
            .body(())
            .expect("valid request");
        set_endpoint(&mut req, &resolver, Some(&Region::new("us-east-1"))).expect("should succeed");
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://kms.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn china_regions_use_cn_suffix() {
        let resolver = DefaultAwsEndpointResolver::for_service("sns");
        let endpoint = resolver
            .endpoint(&Region::from_static("cn-north-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://sns.cn-north-1.amazonaws.com.cn")
        );
    }

    #[test]
    fn static_endpoint_ignores_region() {
        let resolver: Arc<dyn ResolveAwsEndpoint> =
            Arc::new(Endpoint::from_static("http://localhost:4566"));
        let mut req = http::Request::builder()
            .uri("/")
            .body(())
            .expect("valid request");
        set_endpoint(&mut req, &resolver, Some(&Region::new("eu-west-1"))).expect("should succeed");
        assert_eq!(req.uri(), &Uri::from_static("http://localhost:4566/"));
    }

    #[test]
    fn missing_region_is_a_build_error() {
        let resolver = DefaultAwsEndpointResolver::for_service("translate");
        let mut req = http::Request::new(());
        let err = set_endpoint(&mut req, &resolver, None).expect_err("no region");
        assert!(matches!(err, AwsEndpointStageError::NoRegion));
        assert!(matches!(BuildError::from(err), BuildError::MissingRegion));
    }
}
