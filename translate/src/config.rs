/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
/// Service configuration for Amazon Translate: region and endpoint resolution.
#[derive(Clone)]
pub struct Config {
    pub(crate) endpoint_resolver: ::std::sync::Arc<dyn aws_endpoint::ResolveAwsEndpoint>,
    pub(crate) region: Option<aws_types::region::Region>,
}
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}
impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn region(&self) -> Option<&aws_types::region::Region> {
        self.region.as_ref()
    }
}

#[derive(Default)]
pub struct Builder {
    endpoint_resolver: Option<::std::sync::Arc<dyn aws_endpoint::ResolveAwsEndpoint>>,
    region: Option<aws_types::region::Region>,
}
impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how the endpoint is resolved from the region.
    ///
    /// ```rust
    /// use smithy_http::endpoint::Endpoint;
    /// let config = translate::Config::builder()
    ///     .endpoint_resolver(Endpoint::from_static("http://localhost:8000"))
    ///     .region(translate::Region::new("us-east-1"))
    ///     .build();
    /// ```
    pub fn endpoint_resolver(
        mut self,
        endpoint_resolver: impl aws_endpoint::ResolveAwsEndpoint + 'static,
    ) -> Self {
        self.endpoint_resolver = Some(::std::sync::Arc::new(endpoint_resolver));
        self
    }

    pub fn region(mut self, region_provider: impl aws_types::region::ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    /// Builds the [`Config`]. Without an explicit region, the region is loaded from the
    /// environment.
    pub fn build(self) -> Config {
        Config {
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                ::std::sync::Arc::new(aws_endpoint::DefaultAwsEndpointResolver::for_service(
                    "translate",
                ))
            }),
            region: {
                use aws_types::region::ProvideRegion;
                self.region
                    .or_else(|| aws_types::region::default_provider().region())
            },
        }
    }
}
