/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::unescape::unescape;
use std::borrow::Cow;
use std::convert::TryFrom;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

pub type Depth = usize;

// in general, these errors are just for reporting what happened, there isn't
// much value in lots of different match variants

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML Parse Error")]
    InvalidXml(#[from] xmlparser::Error),

    #[error("Invalid XML Escape: {esc}")]
    InvalidEscape { esc: String },

    #[error("Input is not valid UTF-8")]
    InvalidUtf8,

    #[error("Error parsing XML: {0}")]
    Custom(Cow<'static, str>),
}

impl XmlError {
    pub fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlError::Custom(msg.into())
    }
}

#[derive(PartialEq, Debug)]
pub struct Name<'a> {
    pub prefix: &'a str,
    pub local: &'a str,
}

impl Name<'_> {
    /// Check if a given name matches a tag name composed of `prefix:local` or just `local`
    pub fn matches(&self, tag_name: &str) -> bool {
        match tag_name.split_once(':') {
            Some((prefix, local)) => self.prefix == prefix && self.local == local,
            None => self.local == tag_name,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Attr<'a> {
    name: Name<'a>,
    // attribute values can be escaped (eg. with double quotes, so we need a Cow)
    value: Cow<'a, str>,
}

#[derive(Debug, PartialEq)]
pub struct StartEl<'a> {
    name: Name<'a>,
    attributes: Vec<Attr<'a>>,
    closed: bool,
    depth: Depth,
}

/// Xml Start Element
///
/// ```xml
/// <a:b   c="d">
///  ^^^   ^^^^^
///  name  attributes
/// ```
impl<'a> StartEl<'a> {
    pub fn depth(&self) -> Depth {
        self.depth
    }

    fn new(local: &'a str, prefix: &'a str, depth: Depth) -> Self {
        Self {
            name: Name { prefix, local },
            attributes: vec![],
            closed: false,
            depth,
        }
    }

    /// Retrieve an attribute with a given key
    ///
    /// key `prefix:local` combined as a str, joined by a `:`. A key without a prefix only
    /// matches attributes that have no prefix either.
    pub fn attr<'b>(&'b self, key: &'b str) -> Option<&'b str> {
        let (prefix, local) = key.split_once(':').unwrap_or(("", key));
        self.attributes
            .iter()
            .find(|attr| attr.name.prefix == prefix && attr.name.local == local)
            .map(|attr| attr.value.as_ref())
    }

    /// Returns whether this `StartEl` matches a given name
    /// in `prefix:local` form.
    pub fn matches(&self, pat: &str) -> bool {
        self.name.matches(pat)
    }

    /// Local component of this element's name
    ///
    /// ```xml
    /// <foo:bar>
    ///      ^^^
    /// ```
    pub fn local(&self) -> &'a str {
        self.name.local
    }

    /// Prefix component of this elements name (or empty string)
    /// ```xml
    /// <foo:bar>
    ///  ^^^
    /// ```
    pub fn prefix(&self) -> &'a str {
        self.name.prefix
    }

    /// Returns true of `el` at `depth` is a match for this `start_el`
    fn end_el(&self, el: ElementEnd, depth: Depth) -> bool {
        if depth != self.depth {
            return false;
        }
        match el {
            ElementEnd::Open | ElementEnd::Empty => false,
            ElementEnd::Close(prefix, local) => {
                prefix.as_str() == self.name.prefix && local.as_str() == self.name.local
            }
        }
    }
}

/// Xml Document abstraction
///
/// This document wraps a lazy tokenizer with depth tracking.
/// Constructing a document is essentially free.
pub struct Document<'a> {
    tokenizer: Tokenizer<'a>,
    depth: Depth,
}

impl<'a> TryFrom<&'a [u8]> for Document<'a> {
    type Error = XmlError;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        Ok(Document::new(
            std::str::from_utf8(value).map_err(|_| XmlError::InvalidUtf8)?,
        ))
    }
}

impl<'inp> Document<'inp> {
    pub fn new(doc: &'inp str) -> Self {
        Document {
            tokenizer: Tokenizer::from(doc),
            depth: 0,
        }
    }

    /// "Depth first" iterator
    ///
    /// Unlike [`next_tag()`](ScopedDecoder::next_tag), this method returns the next
    /// start element regardless of depth. This is useful to give a pointer into the middle
    /// of a document to start reading.
    ///
    /// ```xml
    /// <Response> <-- first call returns this:
    ///    <A> <-- next call
    ///      <Nested /> <-- next call returns this
    ///      <MoreNested>hello</MoreNested> <-- then this:
    ///    </A>
    ///    <B/> <-- second call to next_tag returns this
    /// </Response>
    /// ```
    pub fn next_start_element<'a>(&'a mut self) -> Result<Option<StartEl<'inp>>, XmlError> {
        next_start_element(self)
    }

    /// A scoped reader for the entire document
    pub fn root_element<'a>(&'a mut self) -> Result<ScopedDecoder<'inp, 'a>, XmlError> {
        let start_el = self
            .next_start_element()?
            .ok_or_else(|| XmlError::custom("no root element"))?;
        Ok(ScopedDecoder {
            doc: self,
            start_el,
            terminated: false,
        })
    }

    /// A scoped reader for a specific tag
    ///
    /// This method is necessary for when you need to return a ScopedDecoder from a function
    /// since normally the stacked-ownership that `next_tag()` uses would prevent returning a reference
    /// to a field owned by the current function
    pub fn scoped_to<'a>(&'a mut self, start_el: StartEl<'inp>) -> ScopedDecoder<'inp, 'a> {
        ScopedDecoder {
            doc: self,
            start_el,
            terminated: false,
        }
    }
}

/// Depth tracking iterator
///
/// ```xml
/// <a> <- startel depth 0
///   <b> <- startel depth 1
///     <c> <- startel depth 2
///     </c> <- endel depth 2
///   </b> <- endel depth 1
/// </a> <- endel depth 0
/// ```
impl<'inp> Iterator for Document<'inp> {
    type Item = Result<(XmlToken<'inp>, Depth), XmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = match self.tokenizer.next()? {
            Ok(tok) => tok,
            Err(e) => return Some(Err(e.into())),
        };
        // depth bookkeeping
        match tok {
            Token::ElementEnd {
                end: ElementEnd::Close(_, _),
                ..
            }
            | Token::ElementEnd {
                end: ElementEnd::Empty,
                ..
            } => {
                self.depth = self.depth.saturating_sub(1);
            }
            t @ Token::ElementStart { .. } => {
                self.depth += 1;
                // the start and end elements share a depth, so report the depth
                // from before this element opened
                return Some(Ok((XmlToken(t), self.depth - 1)));
            }
            _ => {}
        }
        Some(Ok((XmlToken(tok), self.depth)))
    }
}

/// XmlToken newtype
///
/// XmlToken allows us to expose the XmlToken API outside this crate
/// while keeping the underlying tokenizer private.
#[derive(Debug)]
pub struct XmlToken<'inp>(Token<'inp>);

/// Scoped XML Decoder
///
/// Upon creation, `ScopedDecoder` *will not* read the scope's start element.
/// The decoder only yields tokens inside of its own element. On drop, it
/// consumes the rest of its scope so the parent decoder resumes after it.
pub struct ScopedDecoder<'inp, 'a> {
    doc: &'a mut Document<'inp>,
    start_el: StartEl<'inp>,
    terminated: bool,
}

/// When a scoped decoder is dropped, its entire scope is consumed so that the
/// next read begins at the next tag at the same depth.
impl Drop for ScopedDecoder<'_, '_> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

impl<'inp> ScopedDecoder<'inp, '_> {
    /// The start element for this scope
    pub fn start_el<'a>(&'a self) -> &'a StartEl<'inp> {
        &self.start_el
    }

    /// Returns the next top-level tag in this scope
    /// The returned reader will fully read the tag during its lifetime. If it is dropped without
    /// the data being read, the reader will be advanced until the matching close tag. If you read
    /// an element with `next_tag()` and you fail to fully read it (eg. due to error propagation),
    /// the document may be in an inconsistent state.
    ///
    /// ```xml
    /// <Response> <-- scoped reader on this tag
    ///    <A> <-- first call to next_tag returns this
    ///      <Nested /> <-- to get inner data, call `next_tag` on the returned decoder for `A`
    ///      <MoreNested>hello</MoreNested>
    ///    </A>
    ///    <B/> <-- second call to next_tag returns this
    /// </Response>
    /// ```
    pub fn next_tag<'a>(&'a mut self) -> Result<Option<ScopedDecoder<'inp, 'a>>, XmlError> {
        Ok(match next_start_element(self)? {
            Some(next_tag) => Some(self.nested_decoder(next_tag)),
            None => None,
        })
    }

    fn nested_decoder<'a>(&'a mut self, start_el: StartEl<'inp>) -> ScopedDecoder<'inp, 'a> {
        ScopedDecoder {
            doc: &mut *self.doc,
            start_el,
            terminated: false,
        }
    }
}

impl<'inp, 'a> Iterator for ScopedDecoder<'inp, 'a> {
    type Item = Result<(XmlToken<'inp>, Depth), XmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start_el.closed {
            self.terminated = true;
        }
        if self.terminated {
            return None;
        }
        let (tok, depth) = match self.doc.next() {
            Some(Ok((tok, depth))) => (tok, depth),
            other => return other,
        };

        match tok.0 {
            Token::ElementEnd { end, .. } if self.start_el.end_el(end, depth) => {
                self.terminated = true;
                return None;
            }
            _ => {}
        }
        Some(Ok((tok, depth)))
    }
}

/// Load the next start element out of a depth-tagged token iterator
///
/// Malformed XML and invalid escapes in attribute values are returned as errors.
fn next_start_element<'a, 'inp>(
    tokens: &'a mut impl Iterator<Item = Result<(XmlToken<'inp>, Depth), XmlError>>,
) -> Result<Option<StartEl<'inp>>, XmlError> {
    let mut out = StartEl::new("", "", 0);
    loop {
        let token = match tokens.next() {
            Some(token) => token?,
            None => return Ok(None),
        };
        match token {
            (XmlToken(Token::ElementStart { local, prefix, .. }), depth) => {
                out.name.local = local.as_str();
                out.name.prefix = prefix.as_str();
                out.depth = depth;
            }
            (
                XmlToken(Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                }),
                _,
            ) => out.attributes.push(Attr {
                name: Name {
                    local: local.as_str(),
                    prefix: prefix.as_str(),
                },
                value: unescape(value.as_str())?,
            }),
            (
                XmlToken(Token::ElementEnd {
                    end: ElementEnd::Open,
                    ..
                }),
                _,
            ) => break,
            (
                XmlToken(Token::ElementEnd {
                    end: ElementEnd::Empty,
                    ..
                }),
                _,
            ) => {
                out.closed = true;
                break;
            }
            _ => {}
        }
    }
    Ok(Some(out))
}

/// Returns the data element at the current position
///
/// If the current position is not a data element (and is instead a `<start-element>`) an error
/// will be returned. An empty element yields an empty string.
pub fn try_data<'a, 'inp>(
    tokens: &'a mut impl Iterator<Item = Result<(XmlToken<'inp>, Depth), XmlError>>,
) -> Result<Cow<'inp, str>, XmlError> {
    loop {
        match tokens.next().map(|opt| opt.map(|opt| opt.0)) {
            None => return Ok(Cow::Borrowed("")),
            Some(Ok(XmlToken(Token::Text { text }))) => return unescape(text.as_str()),
            Some(Ok(XmlToken(Token::Cdata { text, .. }))) => return Ok(Cow::Borrowed(text.as_str())),
            Some(Ok(e @ XmlToken(Token::ElementStart { .. }))) => {
                return Err(XmlError::custom(format!(
                    "looking for a data element, found: {:?}",
                    e
                )))
            }
            Some(Err(e)) => return Err(e),
            _ => {}
        }
    }
}

#[cfg(test)]
mod test {
    use crate::decode::{try_data, Attr, Depth, Document, Name, StartEl, XmlError};
    use std::convert::TryFrom;

    // test helper to create a closed startel
    fn closed<'a>(local: &'a str, prefix: &'a str, depth: Depth) -> StartEl<'a> {
        let mut s = StartEl::new(local, prefix, depth);
        s.closed = true;
        s
    }

    #[test]
    fn scoped_tokens() {
        let xml = r#"<Response><A></A></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().expect("valid document");
        assert_eq!(root.start_el().local(), "Response");
        assert_eq!(root.next_tag().unwrap().expect("tag exists").start_el().local(), "A");
        assert!(root.next_tag().unwrap().is_none());
    }

    #[test]
    fn handle_depth_properly() {
        let xml = r#"<Response><Response></Response><A/></Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().expect("valid document");
        assert_eq!(
            scoped.next_tag().unwrap().unwrap().start_el(),
            &StartEl::new("Response", "", 1)
        );
        let closed_a = closed("A", "", 1);
        assert_eq!(scoped.next_tag().unwrap().unwrap().start_el(), &closed_a);
        assert!(scoped.next_tag().unwrap().is_none())
    }

    #[test]
    fn self_closing() {
        let xml = r#"<Response/>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().expect("valid doc");
        assert!(scoped.start_el.closed);
        assert!(scoped.next_tag().unwrap().is_none())
    }

    #[test]
    fn terminate_scope() {
        let xml = r#"<Response><Struct><A></A><Also/></Struct><More/></Response>"#;
        let mut doc = Document::new(xml);
        let mut response_iter = doc.root_element().expect("valid doc");
        let mut struct_iter = response_iter.next_tag().unwrap().unwrap();
        assert_eq!(
            struct_iter.next_tag().unwrap().as_ref().map(|t| t.start_el()),
            Some(&StartEl::new("A", "", 2))
        );
        // When the inner iter is dropped, it will read to the end of its scope
        // prevent accidental behavior where we didn't read a full node
        drop(struct_iter);
        assert_eq!(
            response_iter.next_tag().unwrap().unwrap().start_el(),
            &closed("More", "", 1)
        );
    }

    #[test]
    fn read_data_invalid() {
        let xml = r#"<Response><A></A></Response>"#;
        let mut doc = Document::new(xml);
        let mut resp = doc.root_element().unwrap();
        try_data(&mut resp).expect_err("no data");
    }

    #[test]
    fn read_data() {
        let xml = r#"<Response><TopicArn>arn:aws:sns:us-east-2:123456789012:My&amp;Topic</TopicArn><Empty></Empty><Cdata><![CDATA[<raw>]]></Cdata></Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().expect("valid doc");
        let mut arn = scoped.next_tag().unwrap().expect("tag exists");
        assert_eq!(
            try_data(&mut arn).expect("valid"),
            "arn:aws:sns:us-east-2:123456789012:My&Topic"
        );
        drop(arn);
        let mut empty = scoped.next_tag().unwrap().expect("tag exists");
        assert_eq!(try_data(&mut empty).expect("valid"), "");
        drop(empty);
        let mut cdata = scoped.next_tag().unwrap().expect("tag exists");
        assert_eq!(try_data(&mut cdata).expect("valid"), "<raw>");
    }

    /// Whitespace within an element is preserved
    #[test]
    fn read_data_whitespace() {
        let xml = r#"<Response> hello </Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().unwrap();
        assert_eq!(try_data(&mut scoped).unwrap(), " hello ");
    }

    #[test]
    fn ignore_insignificant_whitespace() {
        let xml = r#"<Response>   <A>  </A>    <B></B></Response>"#;
        let mut doc = Document::new(xml);
        let mut resp = doc.root_element().unwrap();
        let mut a = resp.next_tag().unwrap().expect("should be a");
        let data = try_data(&mut a).expect("valid");
        assert_eq!(data, "  ");
        drop(a);
        let mut b = resp.next_tag().unwrap().expect("should be b");
        let data = try_data(&mut b).expect("valid");
        assert_eq!(data, "");
    }

    #[test]
    fn read_attributes() {
        let xml = r#"<Response xmlns="http://sns.amazonaws.com/doc/2010-03-31/" xsi:type="CanonicalUser">hello</Response>"#;
        let mut tokenizer = Document::new(xml);
        let root = tokenizer.root_element().unwrap();

        assert_eq!(
            root.start_el().attributes,
            vec![
                Attr {
                    name: Name {
                        prefix: "",
                        local: "xmlns"
                    },
                    value: "http://sns.amazonaws.com/doc/2010-03-31/".into()
                },
                Attr {
                    name: Name {
                        prefix: "xsi",
                        local: "type"
                    },
                    value: "CanonicalUser".into()
                }
            ]
        );
        assert_eq!(root.start_el().attr("xsi:type"), Some("CanonicalUser"));
        assert_eq!(root.start_el().attr("type"), None);
        assert_eq!(
            root.start_el().attr("xmlns"),
            Some("http://sns.amazonaws.com/doc/2010-03-31/")
        );
        assert_eq!(root.start_el().attr("xsi:xmlns"), None);
    }

    #[test]
    fn escape_data() {
        let xml = r#"<Response key="&quot;hey&quot;>">&gt;</Response>"#;
        let mut root = Document::new(xml);
        let mut root = root.root_element().unwrap();
        assert_eq!(try_data(&mut root).unwrap(), ">");
        assert_eq!(root.start_el().attr("key"), Some("\"hey\">"));
    }

    #[test]
    fn nested_self_closer() {
        let xml = r#"<XmlListsInputOutput>
                <stringList/>
                <stringSet></stringSet>
        </XmlListsInputOutput>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let mut string_list = root.next_tag().unwrap().unwrap();
        assert_eq!(string_list.start_el(), &closed("stringList", "", 1));
        assert!(string_list.next_tag().unwrap().is_none());
        drop(string_list);
        assert_eq!(
            root.next_tag().unwrap().unwrap().start_el(),
            &StartEl::new("stringSet", "", 1)
        );
    }

    #[test]
    fn confusing_nested_same_name_tag() {
        // an inner b which could be confused as closing the outer b if depth
        // is not properly tracked:
        let root_tags = &["a", "b", "c", "d"];
        let xml = r#"<XmlListsInputOutput>
                <a/>
                <b>
                  <c/>
                  <b></b>
                  <here/>
                </b>
                <c></c>
                <d>more</d>
        </XmlListsInputOutput>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let mut cmp = vec![];
        while let Some(tag) = root.next_tag().unwrap() {
            cmp.push(tag.start_el().local().to_owned());
        }
        assert_eq!(root_tags, cmp.as_slice());
    }

    #[test]
    fn scoped_to_error_element() {
        let xml = r#"<ErrorResponse><Error><Code>NotFound</Code></Error><RequestId>abc</RequestId></ErrorResponse>"#;
        let mut doc = Document::new(xml);
        let root = doc.next_start_element().unwrap().unwrap();
        assert!(root.matches("ErrorResponse"));
        let error = doc.next_start_element().unwrap().unwrap();
        assert_eq!(error.depth(), 1);
        let mut scoped = doc.scoped_to(error);
        let mut code = scoped.next_tag().unwrap().unwrap();
        assert!(code.start_el().matches("Code"));
        assert_eq!(try_data(&mut code).unwrap(), "NotFound");
    }

    #[test]
    fn invalid_attribute_escape_is_an_error() {
        let xml = r#"<Response><Topic name="&bogus;"><Arn>a</Arn></Topic><After/></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        match root.next_tag() {
            Err(XmlError::InvalidEscape { esc }) => assert_eq!(esc, "bogus"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("an invalid escape must not be skipped"),
        }

        let mut doc = Document::new(r#"<Response a="&lt"/>"#);
        assert!(doc.root_element().is_err());
    }

    #[test]
    fn malformed_markup_inside_scope_is_an_error() {
        let xml = r#"<Response><A></A><<B/></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        assert!(root.next_tag().unwrap().is_some());
        assert!(root.next_tag().is_err());
    }

    #[test]
    fn invalid_documents() {
        assert!(Document::try_from(&b"<a>\xff</a>"[..]).is_err());
        let mut doc = Document::new("");
        assert!(doc.root_element().is_err());
        let mut doc = Document::new("<a><<b/></a>");
        let mut root = doc.root_element().unwrap();
        assert!(try_data(&mut root).is_err());
    }
}
