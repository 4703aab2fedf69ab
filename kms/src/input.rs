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
pub struct CreateKeyInput {
    /// <p>The key policy to attach to the KMS key.</p>
    pub policy: std::option::Option<std::string::String>,
    /// <p>A description of the KMS key.</p>
    pub description: std::option::Option<std::string::String>,
    /// <p>Determines the cryptographic operations for which you can use the KMS key.</p>
    pub key_usage: std::option::Option<crate::model::KeyUsageType>,
    /// <p>Specifies the type of KMS key to create.</p>
    pub customer_master_key_spec: std::option::Option<crate::model::CustomerMasterKeySpec>,
    /// <p>The source of the key material for the KMS key.</p>
    pub origin: std::option::Option<crate::model::OriginType>,
    /// <p>A flag to indicate whether to bypass the key policy lockout safety check.</p>
    pub bypass_policy_lockout_safety_check: std::option::Option<bool>,
    /// <p>Assigns one or more tags to the KMS key.</p>
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>Creates a multi-Region primary key that you can replicate into other Amazon Web Services
    /// Regions.</p>
    pub multi_region: std::option::Option<bool>,
}
impl CreateKeyInput {
    /// <p>The key policy to attach to the KMS key.</p>
    pub fn policy(&self) -> std::option::Option<&str> {
        self.policy.as_deref()
    }

    /// <p>A description of the KMS key.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>Determines the cryptographic operations for which you can use the KMS key.</p>
    pub fn key_usage(&self) -> std::option::Option<&crate::model::KeyUsageType> {
        self.key_usage.as_ref()
    }

    /// <p>Specifies the type of KMS key to create.</p>
    pub fn customer_master_key_spec(&self) -> std::option::Option<&crate::model::CustomerMasterKeySpec> {
        self.customer_master_key_spec.as_ref()
    }

    /// <p>The source of the key material for the KMS key.</p>
    pub fn origin(&self) -> std::option::Option<&crate::model::OriginType> {
        self.origin.as_ref()
    }

    /// <p>A flag to indicate whether to bypass the key policy lockout safety check.</p>
    pub fn bypass_policy_lockout_safety_check(&self) -> std::option::Option<bool> {
        self.bypass_policy_lockout_safety_check
    }

    /// <p>Assigns one or more tags to the KMS key.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }

    /// <p>Creates a multi-Region primary key that you can replicate into other Amazon Web Services
    /// Regions.</p>
    pub fn multi_region(&self) -> std::option::Option<bool> {
        self.multi_region
    }
}
impl std::fmt::Debug for CreateKeyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateKeyInput");
        if let Some(policy) = &self.policy {
            formatter.field("policy", policy);
        }
        if let Some(description) = &self.description {
            formatter.field("description", description);
        }
        if let Some(key_usage) = &self.key_usage {
            formatter.field("key_usage", key_usage);
        }
        if let Some(customer_master_key_spec) = &self.customer_master_key_spec {
            formatter.field("customer_master_key_spec", customer_master_key_spec);
        }
        if let Some(origin) = &self.origin {
            formatter.field("origin", origin);
        }
        if let Some(bypass_policy_lockout_safety_check) = &self.bypass_policy_lockout_safety_check {
            formatter.field("bypass_policy_lockout_safety_check", bypass_policy_lockout_safety_check);
        }
        if let Some(tags) = &self.tags {
            formatter.field("tags", tags);
        }
        if let Some(multi_region) = &self.multi_region {
            formatter.field("multi_region", multi_region);
        }
        formatter.finish()
    }
}
impl CreateKeyInput {
    /// Consumes the builder and constructs an Operation<[`CreateKey`](crate::operation::CreateKey)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateKey>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_create_key(self)?;
        let request = assemble_request(config, "TrentService.CreateKey", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::CreateKey::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "CreateKey",
            "kms",
        ));
        Ok(op)
    }
}
/// See [`CreateKeyInput`](crate::input::CreateKeyInput)
pub mod create_key_input {
    /// A builder for [`CreateKeyInput`](crate::input::CreateKeyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        policy: std::option::Option<std::string::String>,
        description: std::option::Option<std::string::String>,
        key_usage: std::option::Option<crate::model::KeyUsageType>,
        customer_master_key_spec: std::option::Option<crate::model::CustomerMasterKeySpec>,
        origin: std::option::Option<crate::model::OriginType>,
        bypass_policy_lockout_safety_check: std::option::Option<bool>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        multi_region: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>The key policy to attach to the KMS key.</p>
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.policy = Some(input.into());
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.policy = input;
            self
        }
        /// <p>A description of the KMS key.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// <p>Determines the cryptographic operations for which you can use the KMS key.</p>
        pub fn key_usage(mut self, input: crate::model::KeyUsageType) -> Self {
            self.key_usage = Some(input);
            self
        }
        pub fn set_key_usage(mut self, input: std::option::Option<crate::model::KeyUsageType>) -> Self {
            self.key_usage = input;
            self
        }
        /// <p>Specifies the type of KMS key to create.</p>
        pub fn customer_master_key_spec(mut self, input: crate::model::CustomerMasterKeySpec) -> Self {
            self.customer_master_key_spec = Some(input);
            self
        }
        pub fn set_customer_master_key_spec(mut self, input: std::option::Option<crate::model::CustomerMasterKeySpec>) -> Self {
            self.customer_master_key_spec = input;
            self
        }
        /// <p>The source of the key material for the KMS key.</p>
        pub fn origin(mut self, input: crate::model::OriginType) -> Self {
            self.origin = Some(input);
            self
        }
        pub fn set_origin(mut self, input: std::option::Option<crate::model::OriginType>) -> Self {
            self.origin = input;
            self
        }
        /// <p>A flag to indicate whether to bypass the key policy lockout safety check.</p>
        pub fn bypass_policy_lockout_safety_check(mut self, input: bool) -> Self {
            self.bypass_policy_lockout_safety_check = Some(input);
            self
        }
        pub fn set_bypass_policy_lockout_safety_check(mut self, input: std::option::Option<bool>) -> Self {
            self.bypass_policy_lockout_safety_check = input;
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
        /// <p>Creates a multi-Region primary key that you can replicate into other Amazon Web Services
        /// Regions.</p>
        pub fn multi_region(mut self, input: bool) -> Self {
            self.multi_region = Some(input);
            self
        }
        pub fn set_multi_region(mut self, input: std::option::Option<bool>) -> Self {
            self.multi_region = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateKeyInput`](crate::input::CreateKeyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateKeyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateKeyInput {
                policy: self.policy,
                description: self.description,
                key_usage: self.key_usage,
                customer_master_key_spec: self.customer_master_key_spec,
                origin: self.origin,
                bypass_policy_lockout_safety_check: self.bypass_policy_lockout_safety_check,
                tags: self.tags,
                multi_region: self.multi_region,
            })
        }
    }
}
impl CreateKeyInput {
    /// Creates a new builder-style object to manufacture [`CreateKeyInput`](crate::input::CreateKeyInput)
    pub fn builder() -> crate::input::create_key_input::Builder {
        crate::input::create_key_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct DescribeKeyInput {
    /// <p>Describes the specified KMS key.</p>
    pub key_id: std::option::Option<std::string::String>,
    /// <p>A list of grant tokens.</p>
    pub grant_tokens: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl DescribeKeyInput {
    /// <p>Describes the specified KMS key.</p>
    pub fn key_id(&self) -> std::option::Option<&str> {
        self.key_id.as_deref()
    }

    /// <p>A list of grant tokens.</p>
    pub fn grant_tokens(&self) -> std::option::Option<&[std::string::String]> {
        self.grant_tokens.as_deref()
    }
}
impl std::fmt::Debug for DescribeKeyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeKeyInput");
        if let Some(key_id) = &self.key_id {
            formatter.field("key_id", key_id);
        }
        if let Some(grant_tokens) = &self.grant_tokens {
            formatter.field("grant_tokens", grant_tokens);
        }
        formatter.finish()
    }
}
impl DescribeKeyInput {
    /// Consumes the builder and constructs an Operation<[`DescribeKey`](crate::operation::DescribeKey)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeKey>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_describe_key(self)?;
        let request = assemble_request(config, "TrentService.DescribeKey", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DescribeKey::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "DescribeKey",
            "kms",
        ));
        Ok(op)
    }
}
/// See [`DescribeKeyInput`](crate::input::DescribeKeyInput)
pub mod describe_key_input {
    /// A builder for [`DescribeKeyInput`](crate::input::DescribeKeyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key_id: std::option::Option<std::string::String>,
        grant_tokens: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>Describes the specified KMS key.</p>
        pub fn key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_id = Some(input.into());
            self
        }
        pub fn set_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_id = input;
            self
        }
        /// Appends an item to `grant_tokens`.
        ///
        /// To override the contents of this collection use [`set_grant_tokens`](Self::set_grant_tokens).
        pub fn grant_tokens(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.grant_tokens.unwrap_or_default();
            v.push(input.into());
            self.grant_tokens = Some(v);
            self
        }
        pub fn set_grant_tokens(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.grant_tokens = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeKeyInput`](crate::input::DescribeKeyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeKeyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeKeyInput {
                key_id: self.key_id,
                grant_tokens: self.grant_tokens,
            })
        }
    }
}
impl DescribeKeyInput {
    /// Creates a new builder-style object to manufacture [`DescribeKeyInput`](crate::input::DescribeKeyInput)
    pub fn builder() -> crate::input::describe_key_input::Builder {
        crate::input::describe_key_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq)]
pub struct EncryptInput {
    /// <p>Identifies the KMS key to use in the encryption operation.</p>
    pub key_id: std::option::Option<std::string::String>,
    /// <p>Data to be encrypted.</p>
    pub plaintext: std::option::Option<smithy_types::Blob>,
    pub encryption_context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub grant_tokens: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Specifies the encryption algorithm that KMS will use to encrypt the plaintext message.</p>
    pub encryption_algorithm: std::option::Option<crate::model::EncryptionAlgorithmSpec>,
}
impl EncryptInput {
    /// <p>Identifies the KMS key to use in the encryption operation.</p>
    pub fn key_id(&self) -> std::option::Option<&str> {
        self.key_id.as_deref()
    }

    /// <p>Data to be encrypted.</p>
    pub fn plaintext(&self) -> std::option::Option<&smithy_types::Blob> {
        self.plaintext.as_ref()
    }

    pub fn encryption_context(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.encryption_context.as_ref()
    }

    pub fn grant_tokens(&self) -> std::option::Option<&[std::string::String]> {
        self.grant_tokens.as_deref()
    }

    /// <p>Specifies the encryption algorithm that KMS will use to encrypt the plaintext message.</p>
    pub fn encryption_algorithm(&self) -> std::option::Option<&crate::model::EncryptionAlgorithmSpec> {
        self.encryption_algorithm.as_ref()
    }
}
impl std::fmt::Debug for EncryptInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EncryptInput");
        if let Some(key_id) = &self.key_id {
            formatter.field("key_id", key_id);
        }
        if self.plaintext.is_some() {
            formatter.field("plaintext", &"*** Sensitive Data Redacted ***");
        }
        if let Some(encryption_context) = &self.encryption_context {
            formatter.field("encryption_context", encryption_context);
        }
        if let Some(grant_tokens) = &self.grant_tokens {
            formatter.field("grant_tokens", grant_tokens);
        }
        if let Some(encryption_algorithm) = &self.encryption_algorithm {
            formatter.field("encryption_algorithm", encryption_algorithm);
        }
        formatter.finish()
    }
}
impl EncryptInput {
    /// Consumes the builder and constructs an Operation<[`Encrypt`](crate::operation::Encrypt)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::Encrypt>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_encrypt(self)?;
        let request = assemble_request(config, "TrentService.Encrypt", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::Encrypt::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "Encrypt",
            "kms",
        ));
        Ok(op)
    }
}
/// See [`EncryptInput`](crate::input::EncryptInput)
pub mod encrypt_input {
    /// A builder for [`EncryptInput`](crate::input::EncryptInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key_id: std::option::Option<std::string::String>,
        plaintext: std::option::Option<smithy_types::Blob>,
        encryption_context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        grant_tokens: std::option::Option<std::vec::Vec<std::string::String>>,
        encryption_algorithm: std::option::Option<crate::model::EncryptionAlgorithmSpec>,
    }
    impl Builder {
        /// <p>Identifies the KMS key to use in the encryption operation.</p>
        pub fn key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_id = Some(input.into());
            self
        }
        pub fn set_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_id = input;
            self
        }
        /// <p>Data to be encrypted.</p>
        pub fn plaintext(mut self, input: smithy_types::Blob) -> Self {
            self.plaintext = Some(input);
            self
        }
        pub fn set_plaintext(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.plaintext = input;
            self
        }
        /// Adds a key-value pair to `encryption_context`.
        ///
        /// To override the contents of this collection use [`set_encryption_context`](Self::set_encryption_context).
        pub fn encryption_context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.encryption_context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.encryption_context = Some(hash_map);
            self
        }
        pub fn set_encryption_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.encryption_context = input;
            self
        }
        /// Appends an item to `grant_tokens`.
        ///
        /// To override the contents of this collection use [`set_grant_tokens`](Self::set_grant_tokens).
        pub fn grant_tokens(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.grant_tokens.unwrap_or_default();
            v.push(input.into());
            self.grant_tokens = Some(v);
            self
        }
        pub fn set_grant_tokens(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.grant_tokens = input;
            self
        }
        /// <p>Specifies the encryption algorithm that KMS will use to encrypt the plaintext message.</p>
        pub fn encryption_algorithm(mut self, input: crate::model::EncryptionAlgorithmSpec) -> Self {
            self.encryption_algorithm = Some(input);
            self
        }
        pub fn set_encryption_algorithm(mut self, input: std::option::Option<crate::model::EncryptionAlgorithmSpec>) -> Self {
            self.encryption_algorithm = input;
            self
        }
        /// Consumes the builder and constructs a [`EncryptInput`](crate::input::EncryptInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::EncryptInput, smithy_http::operation::BuildError> {
            Ok(crate::input::EncryptInput {
                key_id: self.key_id,
                plaintext: self.plaintext,
                encryption_context: self.encryption_context,
                grant_tokens: self.grant_tokens,
                encryption_algorithm: self.encryption_algorithm,
            })
        }
    }
}
impl EncryptInput {
    /// Creates a new builder-style object to manufacture [`EncryptInput`](crate::input::EncryptInput)
    pub fn builder() -> crate::input::encrypt_input::Builder {
        crate::input::encrypt_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq)]
pub struct DecryptInput {
    /// <p>Ciphertext to be decrypted.</p>
    pub ciphertext_blob: std::option::Option<smithy_types::Blob>,
    /// <p>Specifies the encryption context to use when decrypting the data.</p>
    pub encryption_context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub grant_tokens: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Specifies the KMS key that KMS uses to decrypt the ciphertext.</p>
    pub key_id: std::option::Option<std::string::String>,
    pub encryption_algorithm: std::option::Option<crate::model::EncryptionAlgorithmSpec>,
}
impl DecryptInput {
    /// <p>Ciphertext to be decrypted.</p>
    pub fn ciphertext_blob(&self) -> std::option::Option<&smithy_types::Blob> {
        self.ciphertext_blob.as_ref()
    }

    /// <p>Specifies the encryption context to use when decrypting the data.</p>
    pub fn encryption_context(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.encryption_context.as_ref()
    }

    pub fn grant_tokens(&self) -> std::option::Option<&[std::string::String]> {
        self.grant_tokens.as_deref()
    }

    /// <p>Specifies the KMS key that KMS uses to decrypt the ciphertext.</p>
    pub fn key_id(&self) -> std::option::Option<&str> {
        self.key_id.as_deref()
    }

    pub fn encryption_algorithm(&self) -> std::option::Option<&crate::model::EncryptionAlgorithmSpec> {
        self.encryption_algorithm.as_ref()
    }
}
impl std::fmt::Debug for DecryptInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DecryptInput");
        if let Some(ciphertext_blob) = &self.ciphertext_blob {
            formatter.field("ciphertext_blob", ciphertext_blob);
        }
        if let Some(encryption_context) = &self.encryption_context {
            formatter.field("encryption_context", encryption_context);
        }
        if let Some(grant_tokens) = &self.grant_tokens {
            formatter.field("grant_tokens", grant_tokens);
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
impl DecryptInput {
    /// Consumes the builder and constructs an Operation<[`Decrypt`](crate::operation::Decrypt)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::Decrypt>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_decrypt(self)?;
        let request = assemble_request(config, "TrentService.Decrypt", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::Decrypt::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "Decrypt",
            "kms",
        ));
        Ok(op)
    }
}
/// See [`DecryptInput`](crate::input::DecryptInput)
pub mod decrypt_input {
    /// A builder for [`DecryptInput`](crate::input::DecryptInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        ciphertext_blob: std::option::Option<smithy_types::Blob>,
        encryption_context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        grant_tokens: std::option::Option<std::vec::Vec<std::string::String>>,
        key_id: std::option::Option<std::string::String>,
        encryption_algorithm: std::option::Option<crate::model::EncryptionAlgorithmSpec>,
    }
    impl Builder {
        /// <p>Ciphertext to be decrypted.</p>
        pub fn ciphertext_blob(mut self, input: smithy_types::Blob) -> Self {
            self.ciphertext_blob = Some(input);
            self
        }
        pub fn set_ciphertext_blob(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.ciphertext_blob = input;
            self
        }
        /// Adds a key-value pair to `encryption_context`.
        ///
        /// To override the contents of this collection use [`set_encryption_context`](Self::set_encryption_context).
        pub fn encryption_context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.encryption_context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.encryption_context = Some(hash_map);
            self
        }
        pub fn set_encryption_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.encryption_context = input;
            self
        }
        /// Appends an item to `grant_tokens`.
        ///
        /// To override the contents of this collection use [`set_grant_tokens`](Self::set_grant_tokens).
        pub fn grant_tokens(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.grant_tokens.unwrap_or_default();
            v.push(input.into());
            self.grant_tokens = Some(v);
            self
        }
        pub fn set_grant_tokens(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.grant_tokens = input;
            self
        }
        /// <p>Specifies the KMS key that KMS uses to decrypt the ciphertext.</p>
        pub fn key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_id = Some(input.into());
            self
        }
        pub fn set_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_id = input;
            self
        }
        pub fn encryption_algorithm(mut self, input: crate::model::EncryptionAlgorithmSpec) -> Self {
            self.encryption_algorithm = Some(input);
            self
        }
        pub fn set_encryption_algorithm(mut self, input: std::option::Option<crate::model::EncryptionAlgorithmSpec>) -> Self {
            self.encryption_algorithm = input;
            self
        }
        /// Consumes the builder and constructs a [`DecryptInput`](crate::input::DecryptInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DecryptInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DecryptInput {
                ciphertext_blob: self.ciphertext_blob,
                encryption_context: self.encryption_context,
                grant_tokens: self.grant_tokens,
                key_id: self.key_id,
                encryption_algorithm: self.encryption_algorithm,
            })
        }
    }
}
impl DecryptInput {
    /// Creates a new builder-style object to manufacture [`DecryptInput`](crate::input::DecryptInput)
    pub fn builder() -> crate::input::decrypt_input::Builder {
        crate::input::decrypt_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq)]
pub struct GenerateDataKeyInput {
    /// <p>Specifies the symmetric KMS key that encrypts the data key.</p>
    pub key_id: std::option::Option<std::string::String>,
    pub encryption_context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    /// <p>Specifies the length of the data key in bytes.</p>
    pub number_of_bytes: std::option::Option<i32>,
    /// <p>Specifies the length of the data key.</p>
    pub key_spec: std::option::Option<crate::model::DataKeySpec>,
    pub grant_tokens: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl GenerateDataKeyInput {
    /// <p>Specifies the symmetric KMS key that encrypts the data key.</p>
    pub fn key_id(&self) -> std::option::Option<&str> {
        self.key_id.as_deref()
    }

    pub fn encryption_context(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.encryption_context.as_ref()
    }

    /// <p>Specifies the length of the data key in bytes.</p>
    pub fn number_of_bytes(&self) -> std::option::Option<i32> {
        self.number_of_bytes
    }

    /// <p>Specifies the length of the data key.</p>
    pub fn key_spec(&self) -> std::option::Option<&crate::model::DataKeySpec> {
        self.key_spec.as_ref()
    }

    pub fn grant_tokens(&self) -> std::option::Option<&[std::string::String]> {
        self.grant_tokens.as_deref()
    }
}
impl std::fmt::Debug for GenerateDataKeyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GenerateDataKeyInput");
        if let Some(key_id) = &self.key_id {
            formatter.field("key_id", key_id);
        }
        if let Some(encryption_context) = &self.encryption_context {
            formatter.field("encryption_context", encryption_context);
        }
        if let Some(number_of_bytes) = &self.number_of_bytes {
            formatter.field("number_of_bytes", number_of_bytes);
        }
        if let Some(key_spec) = &self.key_spec {
            formatter.field("key_spec", key_spec);
        }
        if let Some(grant_tokens) = &self.grant_tokens {
            formatter.field("grant_tokens", grant_tokens);
        }
        formatter.finish()
    }
}
impl GenerateDataKeyInput {
    /// Consumes the builder and constructs an Operation<[`GenerateDataKey`](crate::operation::GenerateDataKey)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GenerateDataKey>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_generate_data_key(self)?;
        let request = assemble_request(config, "TrentService.GenerateDataKey", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GenerateDataKey::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "GenerateDataKey",
            "kms",
        ));
        Ok(op)
    }
}
/// See [`GenerateDataKeyInput`](crate::input::GenerateDataKeyInput)
pub mod generate_data_key_input {
    /// A builder for [`GenerateDataKeyInput`](crate::input::GenerateDataKeyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key_id: std::option::Option<std::string::String>,
        encryption_context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        number_of_bytes: std::option::Option<i32>,
        key_spec: std::option::Option<crate::model::DataKeySpec>,
        grant_tokens: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>Specifies the symmetric KMS key that encrypts the data key.</p>
        pub fn key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_id = Some(input.into());
            self
        }
        pub fn set_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_id = input;
            self
        }
        /// Adds a key-value pair to `encryption_context`.
        ///
        /// To override the contents of this collection use [`set_encryption_context`](Self::set_encryption_context).
        pub fn encryption_context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.encryption_context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.encryption_context = Some(hash_map);
            self
        }
        pub fn set_encryption_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.encryption_context = input;
            self
        }
        /// <p>Specifies the length of the data key in bytes.</p>
        pub fn number_of_bytes(mut self, input: i32) -> Self {
            self.number_of_bytes = Some(input);
            self
        }
        pub fn set_number_of_bytes(mut self, input: std::option::Option<i32>) -> Self {
            self.number_of_bytes = input;
            self
        }
        /// <p>Specifies the length of the data key.</p>
        pub fn key_spec(mut self, input: crate::model::DataKeySpec) -> Self {
            self.key_spec = Some(input);
            self
        }
        pub fn set_key_spec(mut self, input: std::option::Option<crate::model::DataKeySpec>) -> Self {
            self.key_spec = input;
            self
        }
        /// Appends an item to `grant_tokens`.
        ///
        /// To override the contents of this collection use [`set_grant_tokens`](Self::set_grant_tokens).
        pub fn grant_tokens(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.grant_tokens.unwrap_or_default();
            v.push(input.into());
            self.grant_tokens = Some(v);
            self
        }
        pub fn set_grant_tokens(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.grant_tokens = input;
            self
        }
        /// Consumes the builder and constructs a [`GenerateDataKeyInput`](crate::input::GenerateDataKeyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GenerateDataKeyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GenerateDataKeyInput {
                key_id: self.key_id,
                encryption_context: self.encryption_context,
                number_of_bytes: self.number_of_bytes,
                key_spec: self.key_spec,
                grant_tokens: self.grant_tokens,
            })
        }
    }
}
impl GenerateDataKeyInput {
    /// Creates a new builder-style object to manufacture [`GenerateDataKeyInput`](crate::input::GenerateDataKeyInput)
    pub fn builder() -> crate::input::generate_data_key_input::Builder {
        crate::input::generate_data_key_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ListKeysInput {
    /// <p>Use this parameter to specify the maximum number of items to return.</p>
    pub limit: std::option::Option<i32>,
    /// <p>Use this parameter in a subsequent request after you receive a response with
    /// truncated results.</p>
    pub marker: std::option::Option<std::string::String>,
}
impl ListKeysInput {
    /// <p>Use this parameter to specify the maximum number of items to return.</p>
    pub fn limit(&self) -> std::option::Option<i32> {
        self.limit
    }

    /// <p>Use this parameter in a subsequent request after you receive a response with
    /// truncated results.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListKeysInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListKeysInput");
        if let Some(limit) = &self.limit {
            formatter.field("limit", limit);
        }
        if let Some(marker) = &self.marker {
            formatter.field("marker", marker);
        }
        formatter.finish()
    }
}
impl ListKeysInput {
    /// Consumes the builder and constructs an Operation<[`ListKeys`](crate::operation::ListKeys)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListKeys>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_list_keys(self)?;
        let request = assemble_request(config, "TrentService.ListKeys", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::ListKeys::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "ListKeys",
            "kms",
        ));
        Ok(op)
    }
}
/// See [`ListKeysInput`](crate::input::ListKeysInput)
pub mod list_keys_input {
    /// A builder for [`ListKeysInput`](crate::input::ListKeysInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        limit: std::option::Option<i32>,
        marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Use this parameter to specify the maximum number of items to return.</p>
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// <p>Use this parameter in a subsequent request after you receive a response with
        /// truncated results.</p>
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        /// Consumes the builder and constructs a [`ListKeysInput`](crate::input::ListKeysInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListKeysInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListKeysInput {
                limit: self.limit,
                marker: self.marker,
            })
        }
    }
}
impl ListKeysInput {
    /// Creates a new builder-style object to manufacture [`ListKeysInput`](crate::input::ListKeysInput)
    pub fn builder() -> crate::input::list_keys_input::Builder {
        crate::input::list_keys_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash)]
pub struct ListResourceTagsInput {
    /// <p>Gets tags on the specified KMS key.</p>
    pub key_id: std::option::Option<std::string::String>,
    pub limit: std::option::Option<i32>,
    pub marker: std::option::Option<std::string::String>,
}
impl ListResourceTagsInput {
    /// <p>Gets tags on the specified KMS key.</p>
    pub fn key_id(&self) -> std::option::Option<&str> {
        self.key_id.as_deref()
    }

    pub fn limit(&self) -> std::option::Option<i32> {
        self.limit
    }

    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListResourceTagsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListResourceTagsInput");
        if let Some(key_id) = &self.key_id {
            formatter.field("key_id", key_id);
        }
        if let Some(limit) = &self.limit {
            formatter.field("limit", limit);
        }
        if let Some(marker) = &self.marker {
            formatter.field("marker", marker);
        }
        formatter.finish()
    }
}
impl ListResourceTagsInput {
    /// Consumes the builder and constructs an Operation<[`ListResourceTags`](crate::operation::ListResourceTags)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListResourceTags>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::json_ser::serialize_operation_list_resource_tags(self)?;
        let request = assemble_request(config, "TrentService.ListResourceTags", body)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::ListResourceTags::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "ListResourceTags",
            "kms",
        ));
        Ok(op)
    }
}
/// See [`ListResourceTagsInput`](crate::input::ListResourceTagsInput)
pub mod list_resource_tags_input {
    /// A builder for [`ListResourceTagsInput`](crate::input::ListResourceTagsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key_id: std::option::Option<std::string::String>,
        limit: std::option::Option<i32>,
        marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Gets tags on the specified KMS key.</p>
        pub fn key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.key_id = Some(input.into());
            self
        }
        pub fn set_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key_id = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.limit = input;
            self
        }
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        /// Consumes the builder and constructs a [`ListResourceTagsInput`](crate::input::ListResourceTagsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListResourceTagsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListResourceTagsInput {
                key_id: self.key_id,
                limit: self.limit,
                marker: self.marker,
            })
        }
    }
}
impl ListResourceTagsInput {
    /// Creates a new builder-style object to manufacture [`ListResourceTagsInput`](crate::input::ListResourceTagsInput)
    pub fn builder() -> crate::input::list_resource_tags_input::Builder {
        crate::input::list_resource_tags_input::Builder::default()
    }
}
