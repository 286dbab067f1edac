// src/fixtures.rs
//
// HTML shaped like the volby.cz ps32 / ps311 pages, plus an in-memory page source.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;

/// Serves canned bodies by exact URL and records every request.
#[derive(Default)]
pub struct MemorySource {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for MemorySource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Transport {
                url: url.to_string(),
                source: "404 Not Found".into(),
            })
    }
}

/// District listing page with one row per `(code, name)`.
pub fn listing_page(rows: &[(&str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(code, name)| {
            format!(
                r#"<tr>
  <td class="cislo" headers="t1sa1 t1sb1"><a href="ps311?xjazyk=CZ&amp;xkraj=2&amp;xobec={code}&amp;xvyber=2101">{code}</a></td>
  <td class="overflow_name" headers="t1sa1 t1sb2">{name}</td>
  <td class="center" headers="t1sa2"><a href="ps33?xjazyk=CZ&amp;xkraj=2&amp;xobec={code}">X</a></td>
</tr>
"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="publikace"><h3>Okres: Benešov</h3>
<table class="table"><tr><th id="t1sa1">Obec</th></tr>
{body}</table></div></body></html>"#
    )
}

/// Municipality result page. `votes` pairs with `parties`; the list is split
/// across the two ballot-part tables the way the site does it.
pub fn result_page(
    registered: &str,
    envelopes: &str,
    valid: &str,
    parties: &[&str],
    votes: &[&str],
) -> String {
    let split = parties.len().div_ceil(2);
    let row = |t: usize, i: usize| {
        let name = parties
            .get(i)
            .map(|p| format!(r#"<td class="overflow_name" headers="t{t}sa1 t{t}sb2">{p}</td>"#))
            .unwrap_or_default();
        let vote = votes
            .get(i)
            .map(|v| format!(r#"<td class="cislo" headers="t{t}sa2 t{t}sb3">{v}</td>"#))
            .unwrap_or_default();
        format!(
            r#"<tr>
  <td class="cislo" headers="t{t}sa1 t{t}sb1">{n}</td>
  {name}
  {vote}
  <td class="cislo" headers="t{t}sa2 t{t}sb4">1,00</td>
</tr>
"#,
            n = i + 1
        )
    };
    let rows_len = parties.len().max(votes.len());
    let first: String = (0..split.min(rows_len)).map(|i| row(1, i)).collect();
    let second: String = (split..rows_len).map(|i| row(2, i)).collect();
    format!(
        r#"<html><body>
<table id="ps311_t1" class="table">
<tr>
  <td class="cislo" headers="sa1 sb1">1</td>
  <td class="cislo" headers="sa2">{registered}</td>
  <td class="cislo" headers="sa3">{envelopes}</td>
  <td class="cislo" headers="sa4">64,89</td>
  <td class="cislo" headers="sa5">{envelopes}</td>
  <td class="cislo" headers="sa6">{valid}</td>
</tr>
</table>
<div class="t2_470"><table class="table">
<tr><th id="t1sa1">Strana</th><th id="t1sa2">Platné hlasy</th></tr>
{first}</table></div>
<div class="t2_470"><table class="table">
<tr><th id="t2sa1">Strana</th><th id="t2sa2">Platné hlasy</th></tr>
{second}</table></div>
</body></html>"#
    )
}
