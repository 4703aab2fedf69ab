/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DetectDominantLanguageOutput {
    /// <p>The languages that Amazon Comprehend detected in the input text. For each language, the
    /// response returns the RFC 5646 language code and the level of confidence that Amazon Comprehend
    /// has in the accuracy of its inference.</p>
    pub languages: std::option::Option<std::vec::Vec<crate::model::DominantLanguage>>,
}
impl DetectDominantLanguageOutput {
    /// <p>The languages that Amazon Comprehend detected in the input text. For each language, the
    /// response returns the RFC 5646 language code and the level of confidence that Amazon Comprehend
    /// has in the accuracy of its inference.</p>
    pub fn languages(&self) -> std::option::Option<&[crate::model::DominantLanguage]> {
        self.languages.as_deref()
    }
}
impl std::fmt::Debug for DetectDominantLanguageOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectDominantLanguageOutput");
        if let Some(languages) = &self.languages {
            formatter.field("languages", languages);
        }
        formatter.finish()
    }
}
/// See [`DetectDominantLanguageOutput`](crate::output::DetectDominantLanguageOutput)
pub mod detect_dominant_language_output {
    /// A builder for [`DetectDominantLanguageOutput`](crate::output::DetectDominantLanguageOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        languages: std::option::Option<std::vec::Vec<crate::model::DominantLanguage>>,
    }
    impl Builder {
        /// Appends an item to `languages`.
        ///
        /// To override the contents of this collection use [`set_languages`](Self::set_languages).
        pub fn languages(mut self, input: impl Into<crate::model::DominantLanguage>) -> Self {
            let mut v = self.languages.unwrap_or_default();
            v.push(input.into());
            self.languages = Some(v);
            self
        }
        pub fn set_languages(mut self, input: std::option::Option<std::vec::Vec<crate::model::DominantLanguage>>) -> Self {
            self.languages = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectDominantLanguageOutput`](crate::output::DetectDominantLanguageOutput)
        pub fn build(self) -> crate::output::DetectDominantLanguageOutput {
            crate::output::DetectDominantLanguageOutput {
                languages: self.languages,
            }
        }
    }
}
impl DetectDominantLanguageOutput {
    /// Creates a new builder-style object to manufacture [`DetectDominantLanguageOutput`](crate::output::DetectDominantLanguageOutput)
    pub fn builder() -> crate::output::detect_dominant_language_output::Builder {
        crate::output::detect_dominant_language_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DetectSentimentOutput {
    /// <p>The inferred sentiment that Amazon Comprehend has the highest level of confidence
    /// in.</p>
    pub sentiment: std::option::Option<crate::model::SentimentType>,
    /// <p>An object that lists the sentiments, and their corresponding confidence
    /// levels.</p>
    pub sentiment_score: std::option::Option<crate::model::SentimentScore>,
}
impl DetectSentimentOutput {
    /// <p>The inferred sentiment that Amazon Comprehend has the highest level of confidence
    /// in.</p>
    pub fn sentiment(&self) -> std::option::Option<&crate::model::SentimentType> {
        self.sentiment.as_ref()
    }

    /// <p>An object that lists the sentiments, and their corresponding confidence
    /// levels.</p>
    pub fn sentiment_score(&self) -> std::option::Option<&crate::model::SentimentScore> {
        self.sentiment_score.as_ref()
    }
}
impl std::fmt::Debug for DetectSentimentOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectSentimentOutput");
        if let Some(sentiment) = &self.sentiment {
            formatter.field("sentiment", sentiment);
        }
        if let Some(sentiment_score) = &self.sentiment_score {
            formatter.field("sentiment_score", sentiment_score);
        }
        formatter.finish()
    }
}
/// See [`DetectSentimentOutput`](crate::output::DetectSentimentOutput)
pub mod detect_sentiment_output {
    /// A builder for [`DetectSentimentOutput`](crate::output::DetectSentimentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        sentiment: std::option::Option<crate::model::SentimentType>,
        sentiment_score: std::option::Option<crate::model::SentimentScore>,
    }
    impl Builder {
        /// <p>The inferred sentiment that Amazon Comprehend has the highest level of confidence
        /// in.</p>
        pub fn sentiment(mut self, input: crate::model::SentimentType) -> Self {
            self.sentiment = Some(input);
            self
        }
        pub fn set_sentiment(mut self, input: std::option::Option<crate::model::SentimentType>) -> Self {
            self.sentiment = input;
            self
        }
        /// <p>An object that lists the sentiments, and their corresponding confidence
        /// levels.</p>
        pub fn sentiment_score(mut self, input: crate::model::SentimentScore) -> Self {
            self.sentiment_score = Some(input);
            self
        }
        pub fn set_sentiment_score(mut self, input: std::option::Option<crate::model::SentimentScore>) -> Self {
            self.sentiment_score = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectSentimentOutput`](crate::output::DetectSentimentOutput)
        pub fn build(self) -> crate::output::DetectSentimentOutput {
            crate::output::DetectSentimentOutput {
                sentiment: self.sentiment,
                sentiment_score: self.sentiment_score,
            }
        }
    }
}
impl DetectSentimentOutput {
    /// Creates a new builder-style object to manufacture [`DetectSentimentOutput`](crate::output::DetectSentimentOutput)
    pub fn builder() -> crate::output::detect_sentiment_output::Builder {
        crate::output::detect_sentiment_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DetectEntitiesOutput {
    /// <p>A collection of entities identified in the input text. For each entity, the response
    /// provides the entity text, entity type, where the entity text begins and ends, and the level of
    /// confidence that Amazon Comprehend has in the detection. </p>
    pub entities: std::option::Option<std::vec::Vec<crate::model::Entity>>,
}
impl DetectEntitiesOutput {
    /// <p>A collection of entities identified in the input text. For each entity, the response
    /// provides the entity text, entity type, where the entity text begins and ends, and the level of
    /// confidence that Amazon Comprehend has in the detection. </p>
    pub fn entities(&self) -> std::option::Option<&[crate::model::Entity]> {
        self.entities.as_deref()
    }
}
impl std::fmt::Debug for DetectEntitiesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectEntitiesOutput");
        if let Some(entities) = &self.entities {
            formatter.field("entities", entities);
        }
        formatter.finish()
    }
}
/// See [`DetectEntitiesOutput`](crate::output::DetectEntitiesOutput)
pub mod detect_entities_output {
    /// A builder for [`DetectEntitiesOutput`](crate::output::DetectEntitiesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        entities: std::option::Option<std::vec::Vec<crate::model::Entity>>,
    }
    impl Builder {
        /// Appends an item to `entities`.
        ///
        /// To override the contents of this collection use [`set_entities`](Self::set_entities).
        pub fn entities(mut self, input: impl Into<crate::model::Entity>) -> Self {
            let mut v = self.entities.unwrap_or_default();
            v.push(input.into());
            self.entities = Some(v);
            self
        }
        pub fn set_entities(mut self, input: std::option::Option<std::vec::Vec<crate::model::Entity>>) -> Self {
            self.entities = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectEntitiesOutput`](crate::output::DetectEntitiesOutput)
        pub fn build(self) -> crate::output::DetectEntitiesOutput {
            crate::output::DetectEntitiesOutput {
                entities: self.entities,
            }
        }
    }
}
impl DetectEntitiesOutput {
    /// Creates a new builder-style object to manufacture [`DetectEntitiesOutput`](crate::output::DetectEntitiesOutput)
    pub fn builder() -> crate::output::detect_entities_output::Builder {
        crate::output::detect_entities_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DetectKeyPhrasesOutput {
    /// <p>A collection of key phrases that Amazon Comprehend identified in the input text. For
    /// each key phrase, the response provides the text of the key phrase, where the key phrase begins
    /// and ends, and the level of confidence that Amazon Comprehend has in the accuracy of the
    /// detection. </p>
    pub key_phrases: std::option::Option<std::vec::Vec<crate::model::KeyPhrase>>,
}
impl DetectKeyPhrasesOutput {
    /// <p>A collection of key phrases that Amazon Comprehend identified in the input text. For
    /// each key phrase, the response provides the text of the key phrase, where the key phrase begins
    /// and ends, and the level of confidence that Amazon Comprehend has in the accuracy of the
    /// detection. </p>
    pub fn key_phrases(&self) -> std::option::Option<&[crate::model::KeyPhrase]> {
        self.key_phrases.as_deref()
    }
}
impl std::fmt::Debug for DetectKeyPhrasesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DetectKeyPhrasesOutput");
        if let Some(key_phrases) = &self.key_phrases {
            formatter.field("key_phrases", key_phrases);
        }
        formatter.finish()
    }
}
/// See [`DetectKeyPhrasesOutput`](crate::output::DetectKeyPhrasesOutput)
pub mod detect_key_phrases_output {
    /// A builder for [`DetectKeyPhrasesOutput`](crate::output::DetectKeyPhrasesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key_phrases: std::option::Option<std::vec::Vec<crate::model::KeyPhrase>>,
    }
    impl Builder {
        /// Appends an item to `key_phrases`.
        ///
        /// To override the contents of this collection use [`set_key_phrases`](Self::set_key_phrases).
        pub fn key_phrases(mut self, input: impl Into<crate::model::KeyPhrase>) -> Self {
            let mut v = self.key_phrases.unwrap_or_default();
            v.push(input.into());
            self.key_phrases = Some(v);
            self
        }
        pub fn set_key_phrases(mut self, input: std::option::Option<std::vec::Vec<crate::model::KeyPhrase>>) -> Self {
            self.key_phrases = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectKeyPhrasesOutput`](crate::output::DetectKeyPhrasesOutput)
        pub fn build(self) -> crate::output::DetectKeyPhrasesOutput {
            crate::output::DetectKeyPhrasesOutput {
                key_phrases: self.key_phrases,
            }
        }
    }
}
impl DetectKeyPhrasesOutput {
    /// Creates a new builder-style object to manufacture [`DetectKeyPhrasesOutput`](crate::output::DetectKeyPhrasesOutput)
    pub fn builder() -> crate::output::detect_key_phrases_output::Builder {
        crate::output::detect_key_phrases_output::Builder::default()
    }
}
