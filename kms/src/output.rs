/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct CreateKeyOutput {
    /// <p>Metadata associated with the KMS key.</p>
    pub key_metadata: std::option::Option<crate::model::KeyMetadata>,
}
impl CreateKeyOutput {
    /// <p>Metadata associated with the KMS key.</p>
    pub fn key_metadata(&self) -> std::option::Option<&crate::model::KeyMetadata> {
        self.key_metadata.as_ref()
    }
}
impl std::fmt::Debug for CreateKeyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateKeyOutput");
        if let Some(key_metadata) = &self.key_metadata {
            formatter.field("key_metadata", key_metadata);
        }
        formatter.finish()
    }
}
/// See [`CreateKeyOutput`](crate::output::CreateKeyOutput)
pub mod create_key_output {
    /// A builder for [`CreateKeyOutput`](crate::output::CreateKeyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key_metadata: std::option::Option<crate::model::KeyMetadata>,
    }
    impl Builder {
        /// <p>Metadata associated with the KMS key.</p>
        pub fn key_metadata(mut self, input: crate::model::KeyMetadata) -> Self {
            self.key_metadata = Some(input);
            self
        }
        pub fn set_key_metadata(mut self, input: std::option::Option<crate::model::KeyMetadata>) -> Self {
            self.key_metadata = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateKeyOutput`](crate::output::CreateKeyOutput)
        pub fn build(self) -> crate::output::CreateKeyOutput {
            crate::output::CreateKeyOutput {
                key_metadata: self.key_metadata,
            }
        }
    }
}
impl CreateKeyOutput {
    /// Creates a new builder-style object to manufacture [`CreateKeyOutput`](crate::output::CreateKeyOutput)
    pub fn builder() -> crate::output::create_key_output::Builder {
        crate::output::create_key_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DescribeKeyOutput {
    /// <p>Metadata associated with the key.</p>
    pub key_metadata: std::option::Option<crate::model::KeyMetadata>,
}
impl DescribeKeyOutput {
    /// <p>Metadata associated with the key.</p>
    pub fn key_metadata(&self) -> std::option::Option<&crate::model::KeyMetadata> {
        self.key_metadata.as_ref()
    }
}
impl std::fmt::Debug for DescribeKeyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeKeyOutput");
        if let Some(key_metadata) = &self.key_metadata {
            formatter.field("key_metadata", key_metadata);
        }
        formatter.finish()
    }
}
/// See [`DescribeKeyOutput`](crate::output::DescribeKeyOutput)
pub mod describe_key_output {
    /// A builder for [`DescribeKeyOutput`](crate::output::DescribeKeyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key_metadata: std::option::Option<crate::model::KeyMetadata>,
    }
    impl Builder {
        /// <p>Metadata associated with the key.</p>
        pub fn key_metadata(mut self, input: crate::model::KeyMetadata) -> Self {
            self.key_metadata = Some(input);
            self
        }
        pub fn set_key_metadata(mut self, input: std::option::Option<crate::model::KeyMetadata>) -> Self {
            self.key_metadata = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeKeyOutput`](crate::output::DescribeKeyOutput)
        pub fn build(self) -> crate::output::DescribeKeyOutput {
            crate::output::DescribeKeyOutput {
                key_metadata: self.key_metadata,
            }
        }
    }
}
impl DescribeKeyOutput {
    /// Creates a new builder-style object to manufacture [`DescribeKeyOutput`](crate::output::DescribeKeyOutput)
    pub fn builder() -> crate::output::describe_key_output::Builder {
        crate::output::describe_key_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct EncryptOutput {
    /// <p>The encrypted plaintext.</p>
    pub ciphertext_blob: std::option::Option<smithy_types::Blob>,
    /// <p>The Amazon Resource Name (key ARN) of the KMS key that was used to encrypt the plaintext.</p>
    pub key_id: std::option::Option<std::string::String>,
    /// <p>The encryption algorithm that was used to encrypt the plaintext.</p>
    pub encryption_algorithm: std::option::Option<crate::model::EncryptionAlgorithmSpec>,
}
impl EncryptOutput {
    /// <p>The encrypted plaintext.</p>
    pub fn ciphertext_blob(&self) -> std::option::Option<&smithy_types::Blob> {
        self.ciphertext_blob.as_ref()
    }

    /// <p>The Amazon Resource Name (key ARN) of the KMS key that was used to encrypt the plaintext.</p>
    pub fn key_id(&self) -> std::option::Option<&str> {
        self.key_id.as_deref()
    }

    /// <p>The encryption algorithm that was used to encrypt the plaintext.</p>
    pub fn encryption_algorithm(&self) -> std::option::Option<&crate::model::EncryptionAlgorithmSpec> {
        self.encryption_algorithm.as_ref()
    }
}
impl std::fmt::Debug for EncryptOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EncryptOutput");
        if let Some(ciphertext_blob) = &self.ciphertext_blob {
            formatter.field("ciphertext_blob", ciphertext_blob);
        }
        if let Some(key_id) = &self.key_id {
            formatter.field("key_id", key_id);
        }
        if let Some(encryption_algorithm) = &self.encryption_algorithm {
            formatter.field("encryption_algorithm", encryption_algorithm);
        }
        formatter.finish()
    }
}
/// See [`EncryptOutput`](crate::output::EncryptOutput)
pub mod encrypt_output {
    /// A builder for [`EncryptOutput`](crate::output::EncryptOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        ciphertext_blob: std::option::Option<smithy_types::Blob>,
        key_id: std::option::Option<std::string::String>,
        encryption_algorithm: std::option::Option<crate::model::EncryptionAlgorithmSpec>,
    }
    impl Builder {
        /// <p>The encrypted plaintext.</p>
        pub fn ciphertext_blob(mut self, input: smithy_types::Blob) -> Self {
            self.ciphertext_blob = Some(input);
            self
        }
        pub fn set_ciphertext_blob(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.ciphertext_blob = input;
            self
        }
        /// <p>The Amazon Resource Name (key ARN) of the KMS key that was used to encrypt the plaintext.</p>
        pub fn key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_id = Some(input.into());
            self
        }
        pub fn set_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_id = input;
            self
        }
        /// <p>The encryption algorithm that was used to encrypt the plaintext.</p>
        pub fn encryption_algorithm(mut self, input: crate::model::EncryptionAlgorithmSpec) -> Self {
            self.encryption_algorithm = Some(input);
            self
        }
        pub fn set_encryption_algorithm(mut self, input: std::option::Option<crate::model::EncryptionAlgorithmSpec>) -> Self {
            self.encryption_algorithm = input;
            self
        }
        /// Consumes the builder and constructs a [`EncryptOutput`](crate::output::EncryptOutput)
        pub fn build(self) -> crate::output::EncryptOutput {
            crate::output::EncryptOutput {
                ciphertext_blob: self.ciphertext_blob,
                key_id: self.key_id,
                encryption_algorithm: self.encryption_algorithm,
            }
        }
    }
}
impl EncryptOutput {
    /// Creates a new builder-style object to manufacture [`EncryptOutput`](crate::output::EncryptOutput)
    pub fn builder() -> crate::output::encrypt_output::Builder {
        crate::output::encrypt_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DecryptOutput {
    /// <p>The Amazon Resource Name (key ARN) of the KMS key that was used to decrypt the ciphertext.</p>
    pub key_id: std::option::Option<std::string::String>,
    /// <p>Decrypted plaintext data.</p>
    pub plaintext: std::option::Option<smithy_types::Blob>,
    /// <p>The encryption algorithm that was used to decrypt the ciphertext.</p>
    pub encryption_algorithm: std::option::Option<crate::model::EncryptionAlgorithmSpec>,
}
impl DecryptOutput {
    /// <p>The Amazon Resource Name (key ARN) of the KMS key that was used to decrypt the ciphertext.</p>
    pub fn key_id(&self) -> std::option::Option<&str> {
        self.key_id.as_deref()
    }

    /// <p>Decrypted plaintext data.</p>
    pub fn plaintext(&self) -> std::option::Option<&smithy_types::Blob> {
        self.plaintext.as_ref()
    }

    /// <p>The encryption algorithm that was used to decrypt the ciphertext.</p>
    pub fn encryption_algorithm(&self) -> std::option::Option<&crate::model::EncryptionAlgorithmSpec> {
        self.encryption_algorithm.as_ref()
    }
}
impl std::fmt::Debug for DecryptOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DecryptOutput");
        if let Some(key_id) = &self.key_id {
            formatter.field("key_id", key_id);
        }
        if self.plaintext.is_some() {
            formatter.field("plaintext", &"*** Sensitive Data Redacted ***");
        }
        if let Some(encryption_algorithm) = &self.encryption_algorithm {
            formatter.field("encryption_algorithm", encryption_algorithm);
        }
        formatter.finish()
    }
}
/// See [`DecryptOutput`](crate::output::DecryptOutput)
pub mod decrypt_output {
    /// A builder for [`DecryptOutput`](crate::output::DecryptOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key_id: std::option::Option<std::string::String>,
        plaintext: std::option::Option<smithy_types::Blob>,
        encryption_algorithm: std::option::Option<crate::model::EncryptionAlgorithmSpec>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (key ARN) of the KMS key that was used to decrypt the ciphertext.</p>
        pub fn key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_id = Some(input.into());
            self
        }
        pub fn set_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_id = input;
            self
        }
        /// <p>Decrypted plaintext data.</p>
        pub fn plaintext(mut self, input: smithy_types::Blob) -> Self {
            self.plaintext = Some(input);
            self
        }
        pub fn set_plaintext(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.plaintext = input;
            self
        }
        /// <p>The encryption algorithm that was used to decrypt the ciphertext.</p>
        pub fn encryption_algorithm(mut self, input: crate::model::EncryptionAlgorithmSpec) -> Self {
            self.encryption_algorithm = Some(input);
            self
        }
        pub fn set_encryption_algorithm(mut self, input: std::option::Option<crate::model::EncryptionAlgorithmSpec>) -> Self {
            self.encryption_algorithm = input;
            self
        }
        /// Consumes the builder and constructs a [`DecryptOutput`](crate::output::DecryptOutput)
        pub fn build(self) -> crate::output::DecryptOutput {
            crate::output::DecryptOutput {
                key_id: self.key_id,
                plaintext: self.plaintext,
                encryption_algorithm: self.encryption_algorithm,
            }
        }
    }
}
impl DecryptOutput {
    /// Creates a new builder-style object to manufacture [`DecryptOutput`](crate::output::DecryptOutput)
    pub fn builder() -> crate::output::decrypt_output::Builder {
        crate::output::decrypt_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct GenerateDataKeyOutput {
    /// <p>The encrypted copy of the data key.</p>
    pub ciphertext_blob: std::option::Option<smithy_types::Blob>,
    /// <p>The plaintext data key.</p>
    pub plaintext: std::option::Option<smithy_types::Blob>,
    /// <p>The Amazon Resource Name (key ARN) of the KMS key that encrypted the data key.</p>
    pub key_id: std::option::Option<std::string::String>,
}
impl GenerateDataKeyOutput {
    /// <p>The encrypted copy of the data key.</p>
    pub fn ciphertext_blob(&self) -> std::option::Option<&smithy_types::Blob> {
        self.ciphertext_blob.as_ref()
    }

    /// <p>The plaintext data key.</p>
    pub fn plaintext(&self) -> std::option::Option<&smithy_types::Blob> {
        self.plaintext.as_ref()
    }

    /// <p>The Amazon Resource Name (key ARN) of the KMS key that encrypted the data key.</p>
    pub fn key_id(&self) -> std::option::Option<&str> {
        self.key_id.as_deref()
    }
}
impl std::fmt::Debug for GenerateDataKeyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GenerateDataKeyOutput");
        if let Some(ciphertext_blob) = &self.ciphertext_blob {
            formatter.field("ciphertext_blob", ciphertext_blob);
        }
        if self.plaintext.is_some() {
            formatter.field("plaintext", &"*** Sensitive Data Redacted ***");
        }
        if let Some(key_id) = &self.key_id {
            formatter.field("key_id", key_id);
        }
        formatter.finish()
    }
}
/// See [`GenerateDataKeyOutput`](crate::output::GenerateDataKeyOutput)
pub mod generate_data_key_output {
    /// A builder for [`GenerateDataKeyOutput`](crate::output::GenerateDataKeyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        ciphertext_blob: std::option::Option<smithy_types::Blob>,
        plaintext: std::option::Option<smithy_types::Blob>,
        key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The encrypted copy of the data key.</p>
        pub fn ciphertext_blob(mut self, input: smithy_types::Blob) -> Self {
            self.ciphertext_blob = Some(input);
            self
        }
        pub fn set_ciphertext_blob(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.ciphertext_blob = input;
            self
        }
        /// <p>The plaintext data key.</p>
        pub fn plaintext(mut self, input: smithy_types::Blob) -> Self {
            self.plaintext = Some(input);
            self
        }
        pub fn set_plaintext(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.plaintext = input;
            self
        }
        /// <p>The Amazon Resource Name (key ARN) of the KMS key that encrypted the data key.</p>
        pub fn key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_id = Some(input.into());
            self
        }
        pub fn set_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GenerateDataKeyOutput`](crate::output::GenerateDataKeyOutput)
        pub fn build(self) -> crate::output::GenerateDataKeyOutput {
            crate::output::GenerateDataKeyOutput {
                ciphertext_blob: self.ciphertext_blob,
                plaintext: self.plaintext,
                key_id: self.key_id,
            }
        }
    }
}
impl GenerateDataKeyOutput {
    /// Creates a new builder-style object to manufacture [`GenerateDataKeyOutput`](crate::output::GenerateDataKeyOutput)
    pub fn builder() -> crate::output::generate_data_key_output::Builder {
        crate::output::generate_data_key_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ListKeysOutput {
    /// <p>A list of KMS keys.</p>
    pub keys: std::option::Option<std::vec::Vec<crate::model::KeyListEntry>>,
    /// <p>When <code>Truncated</code> is true, this element is present and contains the
    /// value to use for the <code>Marker</code> parameter in a subsequent request.</p>
    pub next_marker: std::option::Option<std::string::String>,
    /// <p>A flag that indicates whether there are more items in the list.</p>
    pub truncated: std::option::Option<bool>,
}
impl ListKeysOutput {
    /// <p>A list of KMS keys.</p>
    pub fn keys(&self) -> std::option::Option<&[crate::model::KeyListEntry]> {
        self.keys.as_deref()
    }

    /// <p>When <code>Truncated</code> is true, this element is present and contains the
    /// value to use for the <code>Marker</code> parameter in a subsequent request.</p>
    pub fn next_marker(&self) -> std::option::Option<&str> {
        self.next_marker.as_deref()
    }

    /// <p>A flag that indicates whether there are more items in the list.</p>
    pub fn truncated(&self) -> std::option::Option<bool> {
        self.truncated
    }
}
impl std::fmt::Debug for ListKeysOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListKeysOutput");
        if let Some(keys) = &self.keys {
            formatter.field("keys", keys);
        }
        if let Some(next_marker) = &self.next_marker {
            formatter.field("next_marker", next_marker);
        }
        if let Some(truncated) = &self.truncated {
            formatter.field("truncated", truncated);
        }
        formatter.finish()
    }
}
/// See [`ListKeysOutput`](crate::output::ListKeysOutput)
pub mod list_keys_output {
    /// A builder for [`ListKeysOutput`](crate::output::ListKeysOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        keys: std::option::Option<std::vec::Vec<crate::model::KeyListEntry>>,
        next_marker: std::option::Option<std::string::String>,
        truncated: std::option::Option<bool>,
    }
    impl Builder {
        /// Appends an item to `keys`.
        ///
        /// To override the contents of this collection use [`set_keys`](Self::set_keys).
        pub fn keys(mut self, input: impl Into<crate::model::KeyListEntry>) -> Self {
            let mut v = self.keys.unwrap_or_default();
            v.push(input.into());
            self.keys = Some(v);
            self
        }
        pub fn set_keys(mut self, input: std::option::Option<std::vec::Vec<crate::model::KeyListEntry>>) -> Self {
            self.keys = input;
            self
        }
        /// <p>When <code>Truncated</code> is true, this element is present and contains the
        /// value to use for the <code>Marker</code> parameter in a subsequent request.</p>
        pub fn next_marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_marker = Some(input.into());
            self
        }
        pub fn set_next_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_marker = input;
            self
        }
        /// <p>A flag that indicates whether there are more items in the list.</p>
        pub fn truncated(mut self, input: bool) -> Self {
            self.truncated = Some(input);
            self
        }
        pub fn set_truncated(mut self, input: std::option::Option<bool>) -> Self {
            self.truncated = input;
            self
        }
        /// Consumes the builder and constructs a [`ListKeysOutput`](crate::output::ListKeysOutput)
        pub fn build(self) -> crate::output::ListKeysOutput {
            crate::output::ListKeysOutput {
                keys: self.keys,
                next_marker: self.next_marker,
                truncated: self.truncated,
            }
        }
    }
}
impl ListKeysOutput {
    /// Creates a new builder-style object to manufacture [`ListKeysOutput`](crate::output::ListKeysOutput)
    pub fn builder() -> crate::output::list_keys_output::Builder {
        crate::output::list_keys_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ListResourceTagsOutput {
    /// <p>A list of tags. Each tag consists of a tag key and a tag value.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub next_marker: std::option::Option<std::string::String>,
    pub truncated: std::option::Option<bool>,
}
impl ListResourceTagsOutput {
    /// <p>A list of tags. Each tag consists of a tag key and a tag value.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }

    pub fn next_marker(&self) -> std::option::Option<&str> {
        self.next_marker.as_deref()
    }

    pub fn truncated(&self) -> std::option::Option<bool> {
        self.truncated
    }
}
impl std::fmt::Debug for ListResourceTagsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListResourceTagsOutput");
        if let Some(tags) = &self.tags {
            formatter.field("tags", tags);
        }
        if let Some(next_marker) = &self.next_marker {
            formatter.field("next_marker", next_marker);
        }
        if let Some(truncated) = &self.truncated {
            formatter.field("truncated", truncated);
        }
        formatter.finish()
    }
}
/// See [`ListResourceTagsOutput`](crate::output::ListResourceTagsOutput)
pub mod list_resource_tags_output {
    /// A builder for [`ListResourceTagsOutput`](crate::output::ListResourceTagsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        next_marker: std::option::Option<std::string::String>,
        truncated: std::option::Option<bool>,
    }
    impl Builder {
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
        pub fn next_marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_marker = Some(input.into());
            self
        }
        pub fn set_next_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_marker = input;
            self
        }
        pub fn truncated(mut self, input: bool) -> Self {
            self.truncated = Some(input);
            self
        }
        pub fn set_truncated(mut self, input: std::option::Option<bool>) -> Self {
            self.truncated = input;
            self
        }
        /// Consumes the builder and constructs a [`ListResourceTagsOutput`](crate::output::ListResourceTagsOutput)
        pub fn build(self) -> crate::output::ListResourceTagsOutput {
            crate::output::ListResourceTagsOutput {
                tags: self.tags,
                next_marker: self.next_marker,
                truncated: self.truncated,
            }
        }
    }
}
impl ListResourceTagsOutput {
    /// Creates a new builder-style object to manufacture [`ListResourceTagsOutput`](crate::output::ListResourceTagsOutput)
    pub fn builder() -> crate::output::list_resource_tags_output::Builder {
        crate::output::list_resource_tags_output::Builder::default()
    }
}
