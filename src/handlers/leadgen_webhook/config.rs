use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Bucket that receives one object per lead notification.
    #[serde(default = "default_bucket_name")]
    pub bucket_name: String,

    /// Downstream endpoint the `changes` payload is forwarded to.
    #[serde(default = "default_destination_url")]
    pub destination_url: String,

    /// Token for the platform's subscription verification handshake. Loaded
    /// so deployments can set it, not consulted by any processing logic yet.
    #[serde(default = "default_verify_token")]
    #[allow(dead_code)]
    pub verify_token: String,
}

fn default_bucket_name() -> String {
    "default_bucket_name".to_owned()
}

fn default_destination_url() -> String {
    "https://example.com/webhook".to_owned()
}

fn default_verify_token() -> String {
    "default_verify_token".to_owned()
}
