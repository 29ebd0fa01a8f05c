// SPDX-License-Identifier: MPL-2.0
//! Preview image loading port.

use crate::error::Error;
use futures_util::future::BoxFuture;
use iced::widget::image::Handle;
use url::Url;

/// Fetches preview images by URL.
///
/// Callers show a transparent placeholder until the future resolves and keep
/// it on failure; caching, if any, is the loader's business.
pub trait ImageLoader: Send + Sync {
    fn load(&self, source: &Url) -> BoxFuture<'static, Result<Handle, Error>>;
}
