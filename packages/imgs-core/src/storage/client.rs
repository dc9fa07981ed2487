use crate::constants::MAX_INPUT_SIZE;
use crate::errors::ProducerError;
use bytes::Bytes;

/// Access-client credentials sent as request headers
#[derive(Clone)]
pub struct AccessCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for AccessCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// HTTP object store client
///
/// Fetches objects with a plain GET on `<base_url>/<key>`.
#[derive(Debug, Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<AccessCredentials>,
}

impl StorageClient {
    pub fn new(base_url: String, credentials: Option<AccessCredentials>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Builds a client from the environment
    ///
    /// Required:
    /// - IMGS_STORE_URL
    ///
    /// Optional (both or neither):
    /// - IMGS_ACCESS_CLIENT_ID
    /// - IMGS_ACCESS_CLIENT_SECRET
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            std::env::var("IMGS_STORE_URL").map_err(|_| "IMGS_STORE_URL is not set".to_string())?;
        let credentials = credentials_from(
            std::env::var("IMGS_ACCESS_CLIENT_ID").ok(),
            std::env::var("IMGS_ACCESS_CLIENT_SECRET").ok(),
        )?;

        Ok(Self::new(base_url, credentials))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key.trim_start_matches('/'))
    }

    /// Fetches the object stored under `key`
    pub async fn get_object(&self, key: &str) -> Result<Bytes, ProducerError> {
        let url = self.object_url(key);

        let mut request = self.client.get(&url);
        if let Some(creds) = &self.credentials {
            request = request
                .header("CF-Access-Client-Id", &creds.client_id)
                .header("CF-Access-Client-Secret", &creds.client_secret);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProducerError::Internal(e.to_string()))?;

        check_status(key, response.status())?;

        if let Some(len) = response.content_length()
            && len > MAX_INPUT_SIZE
        {
            return Err(ProducerError::TooLarge {
                size: len,
                max: MAX_INPUT_SIZE,
            });
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| ProducerError::Internal(e.to_string()))?;

        // content-length may be absent or wrong
        let actual_size = data.len() as u64;
        if actual_size > MAX_INPUT_SIZE {
            return Err(ProducerError::TooLarge {
                size: actual_size,
                max: MAX_INPUT_SIZE,
            });
        }

        Ok(data)
    }
}

/// Pairs the optional credential halves
pub fn credentials_from(
    client_id: Option<String>,
    client_secret: Option<String>,
) -> Result<Option<AccessCredentials>, String> {
    match (client_id, client_secret) {
        (Some(client_id), Some(client_secret)) => Ok(Some(AccessCredentials {
            client_id,
            client_secret,
        })),
        (None, None) => Ok(None),
        (Some(_), None) => Err("access client secret is missing".to_string()),
        (None, Some(_)) => Err("access client id is missing".to_string()),
    }
}

fn check_status(key: &str, status: reqwest::StatusCode) -> Result<(), ProducerError> {
    match status {
        status if status.is_success() => Ok(()),
        reqwest::StatusCode::NOT_FOUND => Err(ProducerError::NotFound {
            key: key.to_string(),
        }),
        reqwest::StatusCode::FORBIDDEN | reqwest::StatusCode::UNAUTHORIZED => {
            tracing::error!(key = %key, status = %status, "access denied by object store");
            Err(ProducerError::Forbidden)
        }
        status => {
            tracing::error!(key = %key, status = %status, "unexpected response from object store");
            Err(ProducerError::Internal(format!("unexpected status: {status}")))
        }
    }
}
