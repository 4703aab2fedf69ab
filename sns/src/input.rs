/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

fn assemble_request(
    config: &crate::config::Config,
    body: smithy_http::body::SdkBody,
) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
    let content_length = body.content_length().unwrap_or_default();
    let mut request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
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
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq)]
pub struct CreateTopicInput {
    /// <p>The name of the topic you want to create.</p>
    pub name: std::option::Option<std::string::String>,
    /// <p>A map of attributes with their corresponding values.</p>
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    /// <p>The list of tags to add to a new topic.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateTopicInput {
    /// <p>The name of the topic you want to create.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>A map of attributes with their corresponding values.</p>
    pub fn attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.attributes.as_ref()
    }

    /// <p>The list of tags to add to a new topic.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for CreateTopicInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateTopicInput");
        if let Some(name) = &self.name {
            formatter.field("name", name);
        }
        if let Some(attributes) = &self.attributes {
            formatter.field("attributes", attributes);
        }
        if let Some(tags) = &self.tags {
            formatter.field("tags", tags);
        }
        formatter.finish()
    }
}
impl CreateTopicInput {
    /// Consumes the builder and constructs an Operation<[`CreateTopic`](crate::operation::CreateTopic)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateTopic>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::query_ser::serialize_operation_create_topic(self)?;
        let request = assemble_request(config, body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::CreateTopic::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "CreateTopic",
            "sns",
        ));
        Ok(op)
    }
}
/// See [`CreateTopicInput`](crate::input::CreateTopicInput)
pub mod create_topic_input {
    /// A builder for [`CreateTopicInput`](crate::input::CreateTopicInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        attributes: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The name of the topic you want to create.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.attributes = input;
            self
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateTopicInput`](crate::input::CreateTopicInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateTopicInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateTopicInput {
                name: self.name,
                attributes: self.attributes,
                tags: self.tags,
            })
        }
    }
}
impl CreateTopicInput {
    /// Creates a new builder-style object to manufacture [`CreateTopicInput`](crate::input::CreateTopicInput)
    pub fn builder() -> crate::input::create_topic_input::Builder {
        crate::input::create_topic_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DeleteTopicInput {
    /// <p>The ARN of the topic you want to delete.</p>
    pub topic_arn: std::option::Option<std::string::String>,
}
impl DeleteTopicInput {
    /// <p>The ARN of the topic you want to delete.</p>
    pub fn topic_arn(&self) -> std::option::Option<&str> {
        self.topic_arn.as_deref()
    }
}
impl std::fmt::Debug for DeleteTopicInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteTopicInput");
        if let Some(topic_arn) = &self.topic_arn {
            formatter.field("topic_arn", topic_arn);
        }
        formatter.finish()
    }
}
impl DeleteTopicInput {
    /// Consumes the builder and constructs an Operation<[`DeleteTopic`](crate::operation::DeleteTopic)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteTopic>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::query_ser::serialize_operation_delete_topic(self)?;
        let request = assemble_request(config, body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DeleteTopic::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "DeleteTopic",
            "sns",
        ));
        Ok(op)
    }
}
/// See [`DeleteTopicInput`](crate::input::DeleteTopicInput)
pub mod delete_topic_input {
    /// A builder for [`DeleteTopicInput`](crate::input::DeleteTopicInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        topic_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ARN of the topic you want to delete.</p>
        pub fn topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.topic_arn = Some(input.into());
            self
        }
        pub fn set_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.topic_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteTopicInput`](crate::input::DeleteTopicInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteTopicInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteTopicInput {
                topic_arn: self.topic_arn,
            })
        }
    }
}
impl DeleteTopicInput {
    /// Creates a new builder-style object to manufacture [`DeleteTopicInput`](crate::input::DeleteTopicInput)
    pub fn builder() -> crate::input::delete_topic_input::Builder {
        crate::input::delete_topic_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ListTopicsInput {
    /// <p>Token returned by the previous <code>ListTopics</code> request.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl ListTopicsInput {
    /// <p>Token returned by the previous <code>ListTopics</code> request.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for ListTopicsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListTopicsInput");
        if let Some(next_token) = &self.next_token {
            formatter.field("next_token", next_token);
        }
        formatter.finish()
    }
}
impl ListTopicsInput {
    /// Consumes the builder and constructs an Operation<[`ListTopics`](crate::operation::ListTopics)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTopics>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::query_ser::serialize_operation_list_topics(self)?;
        let request = assemble_request(config, body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::ListTopics::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "ListTopics",
            "sns",
        ));
        Ok(op)
    }
}
/// See [`ListTopicsInput`](crate::input::ListTopicsInput)
pub mod list_topics_input {
    /// A builder for [`ListTopicsInput`](crate::input::ListTopicsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Token returned by the previous <code>ListTopics</code> request.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTopicsInput`](crate::input::ListTopicsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTopicsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTopicsInput {
                next_token: self.next_token,
            })
        }
    }
}
impl ListTopicsInput {
    /// Creates a new builder-style object to manufacture [`ListTopicsInput`](crate::input::ListTopicsInput)
    pub fn builder() -> crate::input::list_topics_input::Builder {
        crate::input::list_topics_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq)]
pub struct PublishInput {
    /// <p>The topic you want to publish to.</p>
    pub topic_arn: std::option::Option<std::string::String>,
    /// <p>If you don't specify a value for the <code>TargetArn</code> parameter, you must specify a
    /// value for the <code>PhoneNumber</code> or <code>TopicArn</code> parameters.</p>
    pub target_arn: std::option::Option<std::string::String>,
    /// <p>The phone number to which you want to deliver an SMS message. Use E.164 format.</p>
    pub phone_number: std::option::Option<std::string::String>,
    /// <p>The message you want to send.</p>
    pub message: std::option::Option<std::string::String>,
    /// <p>Optional parameter to be used as the "Subject" line when the message is delivered to
    /// email endpoints.</p>
    pub subject: std::option::Option<std::string::String>,
    /// <p>Set <code>MessageStructure</code> to <code>json</code> if you want to send a different
    /// message for each protocol.</p>
    pub message_structure: std::option::Option<std::string::String>,
    /// <p>Message attributes for Publish action.</p>
    pub message_attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageAttributeValue>>,
    /// <p>This parameter applies only to FIFO (first-in-first-out) topics.</p>
    pub message_deduplication_id: std::option::Option<std::string::String>,
    /// <p>This parameter applies only to FIFO (first-in-first-out) topics.</p>
    pub message_group_id: std::option::Option<std::string::String>,
}
impl PublishInput {
    /// <p>The topic you want to publish to.</p>
    pub fn topic_arn(&self) -> std::option::Option<&str> {
        self.topic_arn.as_deref()
    }

    /// <p>If you don't specify a value for the <code>TargetArn</code> parameter, you must specify a
    /// value for the <code>PhoneNumber</code> or <code>TopicArn</code> parameters.</p>
    pub fn target_arn(&self) -> std::option::Option<&str> {
        self.target_arn.as_deref()
    }

    /// <p>The phone number to which you want to deliver an SMS message. Use E.164 format.</p>
    pub fn phone_number(&self) -> std::option::Option<&str> {
        self.phone_number.as_deref()
    }

    /// <p>The message you want to send.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }

    /// <p>Optional parameter to be used as the "Subject" line when the message is delivered to
    /// email endpoints.</p>
    pub fn subject(&self) -> std::option::Option<&str> {
        self.subject.as_deref()
    }

    /// <p>Set <code>MessageStructure</code> to <code>json</code> if you want to send a different
    /// message for each protocol.</p>
    pub fn message_structure(&self) -> std::option::Option<&str> {
        self.message_structure.as_deref()
    }

    /// <p>Message attributes for Publish action.</p>
    pub fn message_attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::MessageAttributeValue>> {
        self.message_attributes.as_ref()
    }

    /// <p>This parameter applies only to FIFO (first-in-first-out) topics.</p>
    pub fn message_deduplication_id(&self) -> std::option::Option<&str> {
        self.message_deduplication_id.as_deref()
    }

    /// <p>This parameter applies only to FIFO (first-in-first-out) topics.</p>
    pub fn message_group_id(&self) -> std::option::Option<&str> {
        self.message_group_id.as_deref()
    }
}
impl std::fmt::Debug for PublishInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PublishInput");
        if let Some(topic_arn) = &self.topic_arn {
            formatter.field("topic_arn", topic_arn);
        }
        if let Some(target_arn) = &self.target_arn {
            formatter.field("target_arn", target_arn);
        }
        if self.phone_number.is_some() {
            formatter.field("phone_number", &"*** Sensitive Data Redacted ***");
        }
        if let Some(message) = &self.message {
            formatter.field("message", message);
        }
        if let Some(subject) = &self.subject {
            formatter.field("subject", subject);
        }
        if let Some(message_structure) = &self.message_structure {
            formatter.field("message_structure", message_structure);
        }
        if let Some(message_attributes) = &self.message_attributes {
            formatter.field("message_attributes", message_attributes);
        }
        if let Some(message_deduplication_id) = &self.message_deduplication_id {
            formatter.field("message_deduplication_id", message_deduplication_id);
        }
        if let Some(message_group_id) = &self.message_group_id {
            formatter.field("message_group_id", message_group_id);
        }
        formatter.finish()
    }
}
impl PublishInput {
    /// Consumes the builder and constructs an Operation<[`Publish`](crate::operation::Publish)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::Publish>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::query_ser::serialize_operation_publish(self)?;
        let request = assemble_request(config, body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::Publish::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "Publish",
            "sns",
        ));
        Ok(op)
    }
}
/// See [`PublishInput`](crate::input::PublishInput)
pub mod publish_input {
    /// A builder for [`PublishInput`](crate::input::PublishInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        topic_arn: std::option::Option<std::string::String>,
        target_arn: std::option::Option<std::string::String>,
        phone_number: std::option::Option<std::string::String>,
        message: std::option::Option<std::string::String>,
        subject: std::option::Option<std::string::String>,
        message_structure: std::option::Option<std::string::String>,
        message_attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageAttributeValue>>,
        message_deduplication_id: std::option::Option<std::string::String>,
        message_group_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The topic you want to publish to.</p>
        pub fn topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.topic_arn = Some(input.into());
            self
        }
        pub fn set_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.topic_arn = input;
            self
        }
        /// <p>If you don't specify a value for the <code>TargetArn</code> parameter, you must specify a
        /// value for the <code>PhoneNumber</code> or <code>TopicArn</code> parameters.</p>
        pub fn target_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        pub fn set_target_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.target_arn = input;
            self
        }
        /// <p>The phone number to which you want to deliver an SMS message. Use E.164 format.</p>
        pub fn phone_number(mut self, input: impl Into<std::string::String>) -> Self {
            self.phone_number = Some(input.into());
            self
        }
        pub fn set_phone_number(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.phone_number = input;
            self
        }
        /// <p>The message you want to send.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>Optional parameter to be used as the "Subject" line when the message is delivered to
        /// email endpoints.</p>
        pub fn subject(mut self, input: impl Into<std::string::String>) -> Self {
            self.subject = Some(input.into());
            self
        }
        pub fn set_subject(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subject = input;
            self
        }
        /// <p>Set <code>MessageStructure</code> to <code>json</code> if you want to send a different
        /// message for each protocol.</p>
        pub fn message_structure(mut self, input: impl Into<std::string::String>) -> Self {
            self.message_structure = Some(input.into());
            self
        }
        pub fn set_message_structure(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message_structure = input;
            self
        }
        /// Adds a key-value pair to `message_attributes`.
        ///
        /// To override the contents of this collection use [`set_message_attributes`](Self::set_message_attributes).
        pub fn message_attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::MessageAttributeValue>,
        ) -> Self {
            let mut hash_map = self.message_attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.message_attributes = Some(hash_map);
            self
        }
        pub fn set_message_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageAttributeValue>>) -> Self {
            self.message_attributes = input;
            self
        }
        /// <p>This parameter applies only to FIFO (first-in-first-out) topics.</p>
        pub fn message_deduplication_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.message_deduplication_id = Some(input.into());
            self
        }
        pub fn set_message_deduplication_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message_deduplication_id = input;
            self
        }
        /// <p>This parameter applies only to FIFO (first-in-first-out) topics.</p>
        pub fn message_group_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.message_group_id = Some(input.into());
            self
        }
        pub fn set_message_group_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message_group_id = input;
            self
        }
        /// Consumes the builder and constructs a [`PublishInput`](crate::input::PublishInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PublishInput, smithy_http::operation::BuildError> {
            Ok(crate::input::PublishInput {
                topic_arn: self.topic_arn,
                target_arn: self.target_arn,
                phone_number: self.phone_number,
                message: self.message,
                subject: self.subject,
                message_structure: self.message_structure,
                message_attributes: self.message_attributes,
                message_deduplication_id: self.message_deduplication_id,
                message_group_id: self.message_group_id,
            })
        }
    }
}
impl PublishInput {
    /// Creates a new builder-style object to manufacture [`PublishInput`](crate::input::PublishInput)
    pub fn builder() -> crate::input::publish_input::Builder {
        crate::input::publish_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq)]
pub struct SubscribeInput {
    /// <p>The ARN of the topic you want to subscribe to.</p>
    pub topic_arn: std::option::Option<std::string::String>,
    /// <p>The protocol that you want to use.</p>
    pub protocol: std::option::Option<std::string::String>,
    /// <p>The endpoint that you want to receive notifications. Endpoints vary by
    /// protocol.</p>
    pub endpoint: std::option::Option<std::string::String>,
    /// <p>A map of attributes with their corresponding values.</p>
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    /// <p>Sets whether the response from the <code>Subscribe</code> request includes the
    /// subscription ARN, even if the subscription is not yet confirmed.</p>
    pub return_subscription_arn: std::option::Option<bool>,
}
impl SubscribeInput {
    /// <p>The ARN of the topic you want to subscribe to.</p>
    pub fn topic_arn(&self) -> std::option::Option<&str> {
        self.topic_arn.as_deref()
    }

    /// <p>The protocol that you want to use.</p>
    pub fn protocol(&self) -> std::option::Option<&str> {
        self.protocol.as_deref()
    }

    /// <p>The endpoint that you want to receive notifications. Endpoints vary by
    /// protocol.</p>
    pub fn endpoint(&self) -> std::option::Option<&str> {
        self.endpoint.as_deref()
    }

    /// <p>A map of attributes with their corresponding values.</p>
    pub fn attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.attributes.as_ref()
    }

    /// <p>Sets whether the response from the <code>Subscribe</code> request includes the
    /// subscription ARN, even if the subscription is not yet confirmed.</p>
    pub fn return_subscription_arn(&self) -> std::option::Option<bool> {
        self.return_subscription_arn
    }
}
impl std::fmt::Debug for SubscribeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SubscribeInput");
        if let Some(topic_arn) = &self.topic_arn {
            formatter.field("topic_arn", topic_arn);
        }
        if let Some(protocol) = &self.protocol {
            formatter.field("protocol", protocol);
        }
        if let Some(endpoint) = &self.endpoint {
            formatter.field("endpoint", endpoint);
        }
        if let Some(attributes) = &self.attributes {
            formatter.field("attributes", attributes);
        }
        if let Some(return_subscription_arn) = &self.return_subscription_arn {
            formatter.field("return_subscription_arn", return_subscription_arn);
        }
        formatter.finish()
    }
}
impl SubscribeInput {
    /// Consumes the builder and constructs an Operation<[`Subscribe`](crate::operation::Subscribe)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::Subscribe>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::query_ser::serialize_operation_subscribe(self)?;
        let request = assemble_request(config, body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::Subscribe::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "Subscribe",
            "sns",
        ));
        Ok(op)
    }
}
/// See [`SubscribeInput`](crate::input::SubscribeInput)
pub mod subscribe_input {
    /// A builder for [`SubscribeInput`](crate::input::SubscribeInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        topic_arn: std::option::Option<std::string::String>,
        protocol: std::option::Option<std::string::String>,
        endpoint: std::option::Option<std::string::String>,
        attributes: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        return_subscription_arn: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>The ARN of the topic you want to subscribe to.</p>
        pub fn topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.topic_arn = Some(input.into());
            self
        }
        pub fn set_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.topic_arn = input;
            self
        }
        /// <p>The protocol that you want to use.</p>
        pub fn protocol(mut self, input: impl Into<std::string::String>) -> Self {
            self.protocol = Some(input.into());
            self
        }
        pub fn set_protocol(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.protocol = input;
            self
        }
        /// <p>The endpoint that you want to receive notifications. Endpoints vary by
        /// protocol.</p>
        pub fn endpoint(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint = Some(input.into());
            self
        }
        pub fn set_endpoint(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint = input;
            self
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.attributes = input;
            self
        }
        /// <p>Sets whether the response from the <code>Subscribe</code> request includes the
        /// subscription ARN, even if the subscription is not yet confirmed.</p>
        pub fn return_subscription_arn(mut self, input: bool) -> Self {
            self.return_subscription_arn = Some(input);
            self
        }
        pub fn set_return_subscription_arn(mut self, input: std::option::Option<bool>) -> Self {
            self.return_subscription_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`SubscribeInput`](crate::input::SubscribeInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::SubscribeInput, smithy_http::operation::BuildError> {
            Ok(crate::input::SubscribeInput {
                topic_arn: self.topic_arn,
                protocol: self.protocol,
                endpoint: self.endpoint,
                attributes: self.attributes,
                return_subscription_arn: self.return_subscription_arn,
            })
        }
    }
}
impl SubscribeInput {
    /// Creates a new builder-style object to manufacture [`SubscribeInput`](crate::input::SubscribeInput)
    pub fn builder() -> crate::input::subscribe_input::Builder {
        crate::input::subscribe_input::Builder::default()
    }
}
