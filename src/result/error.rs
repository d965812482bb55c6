//! LambdaError carries any internal failure the webhook cannot recover
//! from. It is logged with its full cause chain and surfaces to the caller
//! only as a generic server error.

#[derive(Debug, thiserror::Error)]
pub enum LambdaError {
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
}
