/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct CreateTopicOutput {
    /// <p>The Amazon Resource Name (ARN) assigned to the created topic.</p>
    pub topic_arn: std::option::Option<std::string::String>,
}
impl CreateTopicOutput {
    /// <p>The Amazon Resource Name (ARN) assigned to the created topic.</p>
    pub fn topic_arn(&self) -> std::option::Option<&str> {
        self.topic_arn.as_deref()
    }
}
impl std::fmt::Debug for CreateTopicOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateTopicOutput");
        if let Some(topic_arn) = &self.topic_arn {
            formatter.field("topic_arn", topic_arn);
        }
        formatter.finish()
    }
}
/// See [`CreateTopicOutput`](crate::output::CreateTopicOutput)
pub mod create_topic_output {
    /// A builder for [`CreateTopicOutput`](crate::output::CreateTopicOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        topic_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) assigned to the created topic.</p>
        pub fn topic_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.topic_arn = Some(input.into());
            self
        }
        pub fn set_topic_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.topic_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateTopicOutput`](crate::output::CreateTopicOutput)
        pub fn build(self) -> crate::output::CreateTopicOutput {
            crate::output::CreateTopicOutput {
                topic_arn: self.topic_arn,
            }
        }
    }
}
impl CreateTopicOutput {
    /// Creates a new builder-style object to manufacture [`CreateTopicOutput`](crate::output::CreateTopicOutput)
    pub fn builder() -> crate::output::create_topic_output::Builder {
        crate::output::create_topic_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DeleteTopicOutput {}
impl std::fmt::Debug for DeleteTopicOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeleteTopicOutput").finish()
    }
}
/// See [`DeleteTopicOutput`](crate::output::DeleteTopicOutput)
pub mod delete_topic_output {
    /// A builder for [`DeleteTopicOutput`](crate::output::DeleteTopicOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteTopicOutput`](crate::output::DeleteTopicOutput)
        pub fn build(self) -> crate::output::DeleteTopicOutput {
            crate::output::DeleteTopicOutput {}
        }
    }
}
impl DeleteTopicOutput {
    /// Creates a new builder-style object to manufacture [`DeleteTopicOutput`](crate::output::DeleteTopicOutput)
    pub fn builder() -> crate::output::delete_topic_output::Builder {
        crate::output::delete_topic_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ListTopicsOutput {
    /// <p>A list of topic ARNs.</p>
    pub topics: std::option::Option<std::vec::Vec<crate::model::Topic>>,
    /// <p>Token to pass along to the next <code>ListTopics</code> request.</p>
    pub next_token: std::option::Option<std::string::String>,
}
impl ListTopicsOutput {
    /// <p>A list of topic ARNs.</p>
    pub fn topics(&self) -> std::option::Option<&[crate::model::Topic]> {
        self.topics.as_deref()
    }

    /// <p>Token to pass along to the next <code>ListTopics</code> request.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Debug for ListTopicsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListTopicsOutput");
        if let Some(topics) = &self.topics {
            formatter.field("topics", topics);
        }
        if let Some(next_token) = &self.next_token {
            formatter.field("next_token", next_token);
        }
        formatter.finish()
    }
}
/// See [`ListTopicsOutput`](crate::output::ListTopicsOutput)
pub mod list_topics_output {
    /// A builder for [`ListTopicsOutput`](crate::output::ListTopicsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        topics: std::option::Option<std::vec::Vec<crate::model::Topic>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `topics`.
        ///
        /// To override the contents of this collection use [`set_topics`](Self::set_topics).
        pub fn topics(mut self, input: impl Into<crate::model::Topic>) -> Self {
            let mut v = self.topics.unwrap_or_default();
            v.push(input.into());
            self.topics = Some(v);
            self
        }
        pub fn set_topics(mut self, input: std::option::Option<std::vec::Vec<crate::model::Topic>>) -> Self {
            self.topics = input;
            self
        }
        /// <p>Token to pass along to the next <code>ListTopics</code> request.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTopicsOutput`](crate::output::ListTopicsOutput)
        pub fn build(self) -> crate::output::ListTopicsOutput {
            crate::output::ListTopicsOutput {
                topics: self.topics,
                next_token: self.next_token,
            }
        }
    }
}
impl ListTopicsOutput {
    /// Creates a new builder-style object to manufacture [`ListTopicsOutput`](crate::output::ListTopicsOutput)
    pub fn builder() -> crate::output::list_topics_output::Builder {
        crate::output::list_topics_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct PublishOutput {
    /// <p>Unique identifier assigned to the published message.</p>
    pub message_id: std::option::Option<std::string::String>,
    /// <p>This response element applies only to FIFO (first-in-first-out) topics. </p>
    pub sequence_number: std::option::Option<std::string::String>,
}
impl PublishOutput {
    /// <p>Unique identifier assigned to the published message.</p>
    pub fn message_id(&self) -> std::option::Option<&str> {
        self.message_id.as_deref()
    }

    /// <p>This response element applies only to FIFO (first-in-first-out) topics. </p>
    pub fn sequence_number(&self) -> std::option::Option<&str> {
        self.sequence_number.as_deref()
    }
}
impl std::fmt::Debug for PublishOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PublishOutput");
        if let Some(message_id) = &self.message_id {
            formatter.field("message_id", message_id);
        }
        if let Some(sequence_number) = &self.sequence_number {
            formatter.field("sequence_number", sequence_number);
        }
        formatter.finish()
    }
}
/// See [`PublishOutput`](crate::output::PublishOutput)
pub mod publish_output {
    /// A builder for [`PublishOutput`](crate::output::PublishOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message_id: std::option::Option<std::string::String>,
        sequence_number: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Unique identifier assigned to the published message.</p>
        pub fn message_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.message_id = Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message_id = input;
            self
        }
        /// <p>This response element applies only to FIFO (first-in-first-out) topics. </p>
        pub fn sequence_number(mut self, input: impl Into<std::string::String>) -> Self {
            self.sequence_number = Some(input.into());
            self
        }
        pub fn set_sequence_number(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sequence_number = input;
            self
        }
        /// Consumes the builder and constructs a [`PublishOutput`](crate::output::PublishOutput)
        pub fn build(self) -> crate::output::PublishOutput {
            crate::output::PublishOutput {
                message_id: self.message_id,
                sequence_number: self.sequence_number,
            }
        }
    }
}
impl PublishOutput {
    /// Creates a new builder-style object to manufacture [`PublishOutput`](crate::output::PublishOutput)
    pub fn builder() -> crate::output::publish_output::Builder {
        crate::output::publish_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct SubscribeOutput {
    /// <p>The ARN of the subscription if it is confirmed, or the string "pending confirmation" if the
    /// subscription requires confirmation.</p>
    pub subscription_arn: std::option::Option<std::string::String>,
}
impl SubscribeOutput {
    /// <p>The ARN of the subscription if it is confirmed, or the string "pending confirmation" if the
    /// subscription requires confirmation.</p>
    pub fn subscription_arn(&self) -> std::option::Option<&str> {
        self.subscription_arn.as_deref()
    }
}
impl std::fmt::Debug for SubscribeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SubscribeOutput");
        if let Some(subscription_arn) = &self.subscription_arn {
            formatter.field("subscription_arn", subscription_arn);
        }
        formatter.finish()
    }
}
/// See [`SubscribeOutput`](crate::output::SubscribeOutput)
pub mod subscribe_output {
    /// A builder for [`SubscribeOutput`](crate::output::SubscribeOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        subscription_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ARN of the subscription if it is confirmed, or the string "pending confirmation" if the
        /// subscription requires confirmation.</p>
        pub fn subscription_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.subscription_arn = Some(input.into());
            self
        }
        pub fn set_subscription_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subscription_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`SubscribeOutput`](crate::output::SubscribeOutput)
        pub fn build(self) -> crate::output::SubscribeOutput {
            crate::output::SubscribeOutput {
                subscription_arn: self.subscription_arn,
            }
        }
    }
}
impl SubscribeOutput {
    /// Creates a new builder-style object to manufacture [`SubscribeOutput`](crate::output::SubscribeOutput)
    pub fn builder() -> crate::output::subscribe_output::Builder {
        crate::output::subscribe_output::Builder::default()
    }
}
