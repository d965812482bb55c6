use crate::config::aws_client_config::AwsClientConfig;
use crate::config::ConfigLoader;
use rusoto_s3::S3Client;

pub fn get_s3_client() -> S3Client {
    let config = ConfigLoader::load_default::<AwsClientConfig>();
    S3Client::new(config.region())
}
