/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Request bodies are always fully
/// materialized, so the body can be inspected and cloned before it is sent.
pub struct SdkBody {
    inner: Inner,
}

enum Inner {
    Once(Option<Bytes>),
    Taken,
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Once(Some(bytes)) => f.debug_tuple("SdkBody::Once").field(bytes).finish(),
            Inner::Once(None) => f.write_str("SdkBody::Empty"),
            Inner::Taken => f.write_str("SdkBody::Taken"),
        }
    }
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody {
            inner: Inner::Once(None),
        }
    }

    /// Returns the bytes of this body if it has not been polled yet.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            Inner::Once(Some(bytes)) => Some(&bytes[..]),
            Inner::Once(None) => Some(&[][..]),
            Inner::Taken => None,
        }
    }

    /// Clones this body if it has not been polled yet.
    pub fn try_clone(&self) -> Option<Self> {
        match &self.inner {
            Inner::Once(bytes) => Some(SdkBody {
                inner: Inner::Once(bytes.clone()),
            }),
            Inner::Taken => None,
        }
    }

    /// Length of the body in bytes, if it is still known.
    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|b| b.len() as u64)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match std::mem::replace(&mut self.inner, Inner::Taken) {
            Inner::Once(Some(bytes)) if !bytes.is_empty() => Poll::Ready(Some(Ok(bytes))),
            _ => Poll::Ready(None),
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(s.into_bytes())
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody {
            inner: Inner::Once(Some(bytes)),
        }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        !matches!(&self.inner, Inner::Once(Some(bytes)) if !bytes.is_empty())
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self.content_length() {
            Some(len) => http_body::SizeHint::with_exact(len),
            None => http_body::SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[test]
    fn bytes_and_clone() {
        let body = SdkBody::from("{}");
        assert_eq!(body.bytes(), Some("{}".as_bytes()));
        assert_eq!(body.content_length(), Some(2));
        let cloned = body.try_clone().expect("unpolled body is cloneable");
        assert_eq!(cloned.bytes(), body.bytes());
        assert!(!body.is_end_stream());
    }

    #[test]
    fn empty_body() {
        let body = SdkBody::empty();
        assert_eq!(body.bytes(), Some(&[][..]));
        assert!(body.is_end_stream());
        assert_eq!(format!("{:?}", body), "SdkBody::Empty");
    }

    #[tokio::test]
    async fn polled_body_is_taken() {
        let mut body = SdkBody::from(vec![1, 2, 3]);
        let data = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(&data[..], &[1, 2, 3]);
        assert!(body.data().await.is_none());
        assert!(body.try_clone().is_none());
        assert_eq!(body.bytes(), None);
    }
}
