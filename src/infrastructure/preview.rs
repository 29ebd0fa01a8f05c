// SPDX-License-Identifier: MPL-2.0
//! Preview image loader backed by `reqwest`.

use crate::application::port::ImageLoader;
use crate::error::{Error, Result};
use futures_util::future::{self, BoxFuture, FutureExt};
use iced::widget::image::Handle;
use url::Url;

/// Loads `http`/`https` previews with a shared `reqwest` client and `file`
/// previews straight from disk.
#[derive(Debug, Clone, Default)]
pub struct HttpImageLoader {
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ImageLoader for HttpImageLoader {
    fn load(&self, source: &Url) -> BoxFuture<'static, Result<Handle>> {
        match source.scheme() {
            "http" | "https" => {
                let request = self.client.get(source.as_str());
                async move {
                    let response = request.send().await?.error_for_status()?;
                    let bytes = response.bytes().await?;
                    Ok::<_, Error>(Handle::from_bytes(bytes.to_vec()))
                }
                .boxed()
            }
            "file" => future::ready(local_handle(source)).boxed(),
            other => future::ready(Err(Error::Image(format!(
                "Unsupported preview scheme: {}",
                other
            ))))
            .boxed(),
        }
    }
}

fn local_handle(source: &Url) -> Result<Handle> {
    let path = source
        .to_file_path()
        .map_err(|()| Error::Image(format!("Not a local path: {}", source)))?;
    if !path.exists() {
        return Err(Error::Io(format!("No such file: {}", path.display())));
    }
    Ok(Handle::from_path(path))
}
