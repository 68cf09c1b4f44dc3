use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::domain::language::{LanguageCatalog, LanguageCatalogRepository, LanguageCatalogs};

pub struct PagesController {
    catalog_repo: Arc<dyn LanguageCatalogRepository>,
}

impl PagesController {
    pub fn new(catalog_repo: Arc<dyn LanguageCatalogRepository>) -> Self {
        Self { catalog_repo }
    }

    fn catalogs(&self) -> LanguageCatalogs<'_> {
        LanguageCatalogs {
            source_languages: self.catalog_repo.source_languages(),
            target_languages: self.catalog_repo.target_languages(),
        }
    }

    /// GET / - Translator page with the language pickers
    pub async fn index(State(controller): State<Arc<PagesController>>) -> Html<String> {
        Html(render_index(&controller.catalogs()))
    }

    /// GET /api/languages - Sorted source and target catalogs
    pub async fn languages(State(controller): State<Arc<PagesController>>) -> Response {
        Json(controller.catalogs()).into_response()
    }
}

fn render_index(catalogs: &LanguageCatalogs<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Speech Translator</title>
</head>
<body>
<main>
<h1>Speech Translator</h1>
<label for="sourceLanguage">Speak in</label>
<select id="sourceLanguage">
{source}</select>
<button id="swapBtn" type="button">&#8646;</button>
<label for="targetLanguage">Translate to</label>
<select id="targetLanguage">
{target}</select>
<button id="recordBtn" type="button">Start Recording</button>
<div id="status" role="status">Click 'Start Recording' and speak.</div>
<textarea id="originalText" readonly></textarea>
<textarea id="translatedText" readonly></textarea>
<label><input id="autoPlayToggle" type="checkbox" checked> Auto-play translation</label>
<button id="playBtn" type="button" disabled>Play Translation</button>
</main>
<script src="https://aka.ms/csspeech/jsbrowserpackageraw"></script>
<script src="/static/js/app.js"></script>
</body>
</html>
"#,
        source = render_options(catalogs.source_languages),
        target = render_options(catalogs.target_languages),
    )
}

fn render_options(catalog: &LanguageCatalog) -> String {
    catalog
        .iter()
        .map(|(name, code)| {
            format!(
                "<option value=\"{}\">{}</option>\n",
                escape_html(code),
                escape_html(name)
            )
        })
        .collect()
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
