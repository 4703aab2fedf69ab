/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

fn assemble_request(
    config: &crate::config::Config,
    target: &'static str,
    body: smithy_http::body::SdkBody,
) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
    let content_length = body.content_length().unwrap_or_default();
    let mut request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .header(http::header::CONTENT_LENGTH, content_length)
        .body(body)?;
    aws_endpoint::set_endpoint(
        &mut request,
        config.endpoint_resolver.as_ref(),
        config.region.as_ref(),
    )?;
    aws_http::user_agent::AwsUserAgent::new_from_environment(
        aws_types::os_shim_internal::Env::real(),
        crate::API_METADATA.clone(),
    )
    .apply(&mut request)
    .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))?;
    Ok(request)
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DetectDominantLanguageInput {
    /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
    pub text: std::option::Option<std::string::String>,
}
impl DetectDominantLanguageInput {
    /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
    pub fn text(&self) -> std::option::Option<&str> {
        self.text.as_deref()
    }
}
impl std::fmt::Debug for DetectDominantLanguageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectDominantLanguageInput");
        if self.text.is_some() {
            formatter.field("text", &"*** Sensitive Data Redacted ***");
        }
        formatter.finish()
    }
}
impl DetectDominantLanguageInput {
    /// Consumes the builder and constructs an Operation<[`DetectDominantLanguage`](crate::operation::DetectDominantLanguage)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DetectDominantLanguage>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_detect_dominant_language(self)?;
        let request = assemble_request(config, "Comprehend_20171127.DetectDominantLanguage", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DetectDominantLanguage::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "DetectDominantLanguage",
            "comprehend",
        ));
        Ok(op)
    }
}
/// See [`DetectDominantLanguageInput`](crate::input::DetectDominantLanguageInput)
pub mod detect_dominant_language_input {
    /// A builder for [`DetectDominantLanguageInput`](crate::input::DetectDominantLanguageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        text: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
        pub fn text(mut self, input: impl Into<std::string::String>) -> Self {
            self.text = Some(input.into());
            self
        }
        pub fn set_text(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.text = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectDominantLanguageInput`](crate::input::DetectDominantLanguageInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DetectDominantLanguageInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DetectDominantLanguageInput {
                text: self.text,
            })
        }
    }
}
impl DetectDominantLanguageInput {
    /// Creates a new builder-style object to manufacture [`DetectDominantLanguageInput`](crate::input::DetectDominantLanguageInput)
    pub fn builder() -> crate::input::detect_dominant_language_input::Builder {
        crate::input::detect_dominant_language_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DetectSentimentInput {
    /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
    pub text: std::option::Option<std::string::String>,
    /// <p>The language of the input documents. You can specify any of the primary languages
    /// supported by Amazon Comprehend. All documents must be in the same language.</p>
    pub language_code: std::option::Option<crate::model::LanguageCode>,
}
impl DetectSentimentInput {
    /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
    pub fn text(&self) -> std::option::Option<&str> {
        self.text.as_deref()
    }

    /// <p>The language of the input documents. You can specify any of the primary languages
    /// supported by Amazon Comprehend. All documents must be in the same language.</p>
    pub fn language_code(&self) -> std::option::Option<&crate::model::LanguageCode> {
        self.language_code.as_ref()
    }
}
impl std::fmt::Debug for DetectSentimentInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectSentimentInput");
        if self.text.is_some() {
            formatter.field("text", &"*** Sensitive Data Redacted ***");
        }
        if let Some(language_code) = &self.language_code {
            formatter.field("language_code", language_code);
        }
        formatter.finish()
    }
}
impl DetectSentimentInput {
    /// Consumes the builder and constructs an Operation<[`DetectSentiment`](crate::operation::DetectSentiment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DetectSentiment>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_detect_sentiment(self)?;
        let request = assemble_request(config, "Comprehend_20171127.DetectSentiment", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DetectSentiment::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "DetectSentiment",
            "comprehend",
        ));
        Ok(op)
    }
}
/// See [`DetectSentimentInput`](crate::input::DetectSentimentInput)
pub mod detect_sentiment_input {
    /// A builder for [`DetectSentimentInput`](crate::input::DetectSentimentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        text: std::option::Option<std::string::String>,
        language_code: std::option::Option<crate::model::LanguageCode>,
    }
    impl Builder {
        /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
        pub fn text(mut self, input: impl Into<std::string::String>) -> Self {
            self.text = Some(input.into());
            self
        }
        pub fn set_text(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.text = input;
            self
        }
        /// <p>The language of the input documents. You can specify any of the primary languages
        /// supported by Amazon Comprehend. All documents must be in the same language.</p>
        pub fn language_code(mut self, input: crate::model::LanguageCode) -> Self {
            self.language_code = Some(input);
            self
        }
        pub fn set_language_code(mut self, input: std::option::Option<crate::model::LanguageCode>) -> Self {
            self.language_code = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectSentimentInput`](crate::input::DetectSentimentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DetectSentimentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DetectSentimentInput {
                text: self.text,
                language_code: self.language_code,
            })
        }
    }
}
impl DetectSentimentInput {
    /// Creates a new builder-style object to manufacture [`DetectSentimentInput`](crate::input::DetectSentimentInput)
    pub fn builder() -> crate::input::detect_sentiment_input::Builder {
        crate::input::detect_sentiment_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DetectEntitiesInput {
    /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
    pub text: std::option::Option<std::string::String>,
    /// <p>The language of the input documents. You can specify any of the primary languages
    /// supported by Amazon Comprehend. All documents must be in the same language.</p>
    pub language_code: std::option::Option<crate::model::LanguageCode>,
    /// <p>The Amazon Resource Name of an endpoint that is associated with a custom entity
    /// recognition model.</p>
    pub endpoint_arn: std::option::Option<std::string::String>,
}
impl DetectEntitiesInput {
    /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
    pub fn text(&self) -> std::option::Option<&str> {
        self.text.as_deref()
    }

    /// <p>The language of the input documents. You can specify any of the primary languages
    /// supported by Amazon Comprehend. All documents must be in the same language.</p>
    pub fn language_code(&self) -> std::option::Option<&crate::model::LanguageCode> {
        self.language_code.as_ref()
    }

    /// <p>The Amazon Resource Name of an endpoint that is associated with a custom entity
    /// recognition model.</p>
    pub fn endpoint_arn(&self) -> std::option::Option<&str> {
        self.endpoint_arn.as_deref()
    }
}
impl std::fmt::Debug for DetectEntitiesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectEntitiesInput");
        if self.text.is_some() {
            formatter.field("text", &"*** Sensitive Data Redacted ***");
        }
        if let Some(language_code) = &self.language_code {
            formatter.field("language_code", language_code);
        }
        if let Some(endpoint_arn) = &self.endpoint_arn {
            formatter.field("endpoint_arn", endpoint_arn);
        }
        formatter.finish()
    }
}
impl DetectEntitiesInput {
    /// Consumes the builder and constructs an Operation<[`DetectEntities`](crate::operation::DetectEntities)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DetectEntities>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_detect_entities(self)?;
        let request = assemble_request(config, "Comprehend_20171127.DetectEntities", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DetectEntities::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "DetectEntities",
            "comprehend",
        ));
        Ok(op)
    }
}
/// See [`DetectEntitiesInput`](crate::input::DetectEntitiesInput)
pub mod detect_entities_input {
    /// A builder for [`DetectEntitiesInput`](crate::input::DetectEntitiesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        text: std::option::Option<std::string::String>,
        language_code: std::option::Option<crate::model::LanguageCode>,
        endpoint_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
        pub fn text(mut self, input: impl Into<std::string::String>) -> Self {
            self.text = Some(input.into());
            self
        }
        pub fn set_text(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.text = input;
            self
        }
        /// <p>The language of the input documents. You can specify any of the primary languages
        /// supported by Amazon Comprehend. All documents must be in the same language.</p>
        pub fn language_code(mut self, input: crate::model::LanguageCode) -> Self {
            self.language_code = Some(input);
            self
        }
        pub fn set_language_code(mut self, input: std::option::Option<crate::model::LanguageCode>) -> Self {
            self.language_code = input;
            self
        }
        /// <p>The Amazon Resource Name of an endpoint that is associated with a custom entity
        /// recognition model.</p>
        pub fn endpoint_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectEntitiesInput`](crate::input::DetectEntitiesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DetectEntitiesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DetectEntitiesInput {
                text: self.text,
                language_code: self.language_code,
                endpoint_arn: self.endpoint_arn,
            })
        }
    }
}
impl DetectEntitiesInput {
    /// Creates a new builder-style object to manufacture [`DetectEntitiesInput`](crate::input::DetectEntitiesInput)
    pub fn builder() -> crate::input::detect_entities_input::Builder {
        crate::input::detect_entities_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DetectKeyPhrasesInput {
    /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
    pub text: std::option::Option<std::string::String>,
    /// <p>The language of the input documents. You can specify any of the primary languages
    /// supported by Amazon Comprehend. All documents must be in the same language.</p>
    pub language_code: std::option::Option<crate::model::LanguageCode>,
}
impl DetectKeyPhrasesInput {
    /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
    pub fn text(&self) -> std::option::Option<&str> {
        self.text.as_deref()
    }

    /// <p>The language of the input documents. You can specify any of the primary languages
    /// supported by Amazon Comprehend. All documents must be in the same language.</p>
    pub fn language_code(&self) -> std::option::Option<&crate::model::LanguageCode> {
        self.language_code.as_ref()
    }
}
impl std::fmt::Debug for DetectKeyPhrasesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectKeyPhrasesInput");
        if self.text.is_some() {
            formatter.field("text", &"*** Sensitive Data Redacted ***");
        }
        if let Some(language_code) = &self.language_code {
            formatter.field("language_code", language_code);
        }
        formatter.finish()
    }
}
impl DetectKeyPhrasesInput {
    /// Consumes the builder and constructs an Operation<[`DetectKeyPhrases`](crate::operation::DetectKeyPhrases)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DetectKeyPhrases>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_detect_key_phrases(self)?;
        let request = assemble_request(config, "Comprehend_20171127.DetectKeyPhrases", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DetectKeyPhrases::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "DetectKeyPhrases",
            "comprehend",
        ));
        Ok(op)
    }
}
/// See [`DetectKeyPhrasesInput`](crate::input::DetectKeyPhrasesInput)
pub mod detect_key_phrases_input {
    /// A builder for [`DetectKeyPhrasesInput`](crate::input::DetectKeyPhrasesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        text: std::option::Option<std::string::String>,
        language_code: std::option::Option<crate::model::LanguageCode>,
    }
    impl Builder {
        /// <p>A UTF-8 text string. The string must contain fewer than 5,000 bytes of UTF-8 encoded characters.</p>
        pub fn text(mut self, input: impl Into<std::string::String>) -> Self {
            self.text = Some(input.into());
            self
        }
        pub fn set_text(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.text = input;
            self
        }
        /// <p>The language of the input documents. You can specify any of the primary languages
        /// supported by Amazon Comprehend. All documents must be in the same language.</p>
        pub fn language_code(mut self, input: crate::model::LanguageCode) -> Self {
            self.language_code = Some(input);
            self
        }
        pub fn set_language_code(mut self, input: std::option::Option<crate::model::LanguageCode>) -> Self {
            self.language_code = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectKeyPhrasesInput`](crate::input::DetectKeyPhrasesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DetectKeyPhrasesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DetectKeyPhrasesInput {
                text: self.text,
                language_code: self.language_code,
            })
        }
    }
}
impl DetectKeyPhrasesInput {
    /// Creates a new builder-style object to manufacture [`DetectKeyPhrasesInput`](crate::input::DetectKeyPhrasesInput)
    pub fn builder() -> crate::input::detect_key_phrases_input::Builder {
        crate::input::detect_key_phrases_input::Builder::default()
    }
}
