use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ThumbnailRequest {
    pub url: String,
}

#[derive(Deserialize, Debug)]
pub struct PromptRequest {
    pub text: String,
}
