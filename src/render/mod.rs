//! HTML fragments for the display area and the suggestion list.
//!
//! All interpolated values go through askama's HTML escaping. Absent, empty
//! and zero-valued optional fields render as [`NOT_AVAILABLE`].

use askama::Template;

use crate::dropdown::SuggestionRow;
use crate::error::RenderError;
use crate::jikan::AnimeSummary;

/// Placeholder for absent optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown instead of an absent background.
pub const NO_RECAP_TEXT: &str = "Unfortunately there's no recap for this Anime yet.";

#[derive(Template)]
#[template(
    source = r#"<h1 class="text-2xl font-bold text-center">{{ title }} ({{ year }})</h1>
<h2 class="text-xl text-gray-600 text-center">{{ title_english }} / {{ title_japanese }}</h2>
<div class="outputContent">
  {%- match image_url %}
  {%- when Some with (url) %}
  <img src="{{ url }}" alt="{{ title }}" class="w-100 h-auto rounded-md" />
  {%- when None %}
  {%- endmatch %}
  <div class="quickInfo">
    <p class="text-sm"><strong>Episodes:</strong> {{ episodes }} / {{ duration }}</p>
    <p class="text-sm">
      {%- match background %}
      {%- when Some with (text) %}{{ text }}
      {%- when None %}Unfortunately there's no recap for this Anime yet.
      {%- endmatch -%}
    </p>
    <p class="text-xl">{{ score }}/10</p>
    <p class="text-l">voted by {{ scored_by }}</p>
    <div class="flex flex-wrap gap-2 mt-2">
      {%- for genre in genres %}<span class="bg-blue-200 text-blue-800 px-2 py-1 rounded-md text-xs">{{ genre }}</span>{% endfor -%}
    </div>
  </div>
</div>
<div class="mt-4">
  <h3 class="text-lg font-semibold">Synopsis</h3>
  <p class="synopsis">{{ synopsis }}</p>
</div>"#,
    ext = "html"
)]
struct AnimeTemplate<'a> {
    title: &'a str,
    year: String,
    title_english: &'a str,
    title_japanese: &'a str,
    image_url: Option<&'a str>,
    episodes: String,
    duration: &'a str,
    background: Option<&'a str>,
    score: String,
    scored_by: String,
    genres: Vec<&'a str>,
    synopsis: &'a str,
}

impl<'a> AnimeTemplate<'a> {
    fn new(anime: &'a AnimeSummary) -> Self {
        Self {
            title: &anime.title,
            year: number_or_na(anime.year.filter(|y| *y > 0)),
            title_english: text_or_na(anime.title_english.as_deref()),
            title_japanese: text_or_na(anime.title_japanese.as_deref()),
            image_url: anime.cover_url(),
            episodes: number_or_na(anime.episodes.filter(|e| *e > 0)),
            duration: text_or_na(anime.duration.as_deref()),
            background: present(anime.background.as_deref()),
            score: number_or_na(anime.score.filter(|s| *s > 0.0)),
            scored_by: number_or_na(anime.scored_by.filter(|n| *n > 0)),
            genres: anime.genres.iter().map(|g| g.name.as_str()).collect(),
            synopsis: text_or_na(anime.synopsis.as_deref()),
        }
    }
}

#[derive(Template)]
#[template(source = r#"<p class="text-red-500">{{ text }}</p>"#, ext = "html")]
struct MessageTemplate<'a> {
    text: &'a str,
}

struct SuggestionItem<'a> {
    index: usize,
    label: &'a str,
    selectable: bool,
    class: &'static str,
}

#[derive(Template)]
#[template(
    source = r#"{% for item in items -%}
{% if item.selectable -%}
<li class="{{ item.class }}" data-index="{{ item.index }}">{{ item.label }}</li>
{%- else -%}
<li class="{{ item.class }}">{{ item.label }}</li>
{%- endif %}
{% endfor %}"#,
    ext = "html"
)]
struct SuggestionsTemplate<'a> {
    items: Vec<SuggestionItem<'a>>,
}

const fn row_class(row: &SuggestionRow) -> &'static str {
    match row {
        SuggestionRow::Anime { .. } => "p-2 cursor-pointer hover:bg-gray-200",
        SuggestionRow::NoResults => "p-2 text-gray-500",
        SuggestionRow::Error => "p-2 text-red-500",
    }
}

/// Render the detail fragment for one record.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_anime(anime: &AnimeSummary) -> Result<String, RenderError> {
    let markup = AnimeTemplate::new(anime).render()?;
    Ok(markup)
}

/// Render an inline prompt or error paragraph.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_message(text: &str) -> Result<String, RenderError> {
    Ok(MessageTemplate { text }.render()?)
}

/// Render suggestion rows as `<li>` items, one per line.
///
/// Selectable rows carry `data-index` so an HTML host can map clicks back to
/// [`crate::dropdown::Dropdown::on_row_selected`].
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_suggestions(rows: &[SuggestionRow]) -> Result<String, RenderError> {
    let items = rows
        .iter()
        .enumerate()
        .map(|(index, row)| SuggestionItem {
            index,
            label: row.label(),
            selectable: row.is_selectable(),
            class: row_class(row),
        })
        .collect();
    Ok(SuggestionsTemplate { items }.render()?)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn text_or_na(value: Option<&str>) -> &str {
    present(value).unwrap_or(NOT_AVAILABLE)
}

fn number_or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}
