use crate::error::{Error, Result};
use crate::models::DownloadRequest;
use reqwest::Client;
use std::time::Duration;

pub const ANDROID_CLIENT_VERSION: &str = "18.11.34";
pub const ANDROID_USER_AGENT: &str = "com.google.android.youtube/18.11.34 (Linux; U; Android 12)";

/// HTTP client settings shared by metadata requests and media transfers.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: ANDROID_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(20),
            proxy: None,
        }
    }
}

impl ClientConfig {
    pub fn from_request(request: &DownloadRequest) -> Self {
        Self {
            proxy: request.proxy.clone(),
            ..Self::default()
        }
    }

    // No overall timeout: a long media transfer must not be cut off.
    pub fn build_client(&self) -> Result<Client> {
        let mut client_builder = Client::builder()
            .user_agent(self.user_agent.as_str())
            .connect_timeout(self.connect_timeout);

        if let Some(proxy_url) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::Argument(format!("invalid proxy {proxy_url}: {e}")))?;
            client_builder = client_builder.proxy(proxy);
        }

        client_builder
            .build()
            .map_err(|e| Error::NetworkOrParse(format!("failed to build HTTP client: {e}")))
    }
}
