use docgen_core::chat::ResponseError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("API request failed. {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed. HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error(transparent)]
    Response(#[from] ResponseError),
}
