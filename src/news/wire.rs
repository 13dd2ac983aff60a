use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) articles: Option<Vec<WireArticle>>,
}

#[derive(Deserialize)]
pub(crate) struct WireArticle {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) source: Option<WireSource>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct WireSource {
    pub(crate) name: Option<String>,
}
