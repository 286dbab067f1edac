// src/table/aggregate.rs

use futures::{stream, StreamExt, TryStreamExt};
use tracing::{info, instrument};

use super::Table;
use crate::config::ResultEndpoint;
use crate::error::Result;
use crate::extract::{fetch_result, Municipality, SelectorStrategy};
use crate::fetch::PageSource;

/// Fetch every municipality's result page and build the table.
///
/// Up to `concurrency` pages are in flight at once, but rows are appended in
/// `municipalities` order. The first failure aborts the whole run; requests
/// still in flight are dropped and no table is returned.
#[instrument(level = "info", skip_all, fields(municipalities = municipalities.len(), parties = parties.len()))]
pub async fn aggregate<S: PageSource + ?Sized>(
    source: &S,
    strategy: &dyn SelectorStrategy,
    endpoint: &ResultEndpoint,
    municipalities: &[Municipality],
    parties: &[String],
    concurrency: usize,
) -> Result<Table> {
    let mut table = Table::new(parties)?;
    let total = municipalities.len();

    let fetched = stream::iter(municipalities)
        .map(move |m| async move {
            let url = endpoint.url_for(&m.code);
            fetch_result(source, strategy, &url).await.map(|r| (m, r))
        })
        .buffered(concurrency.max(1));
    futures::pin_mut!(fetched);

    while let Some((municipality, result)) = fetched.try_next().await? {
        table.push_row(municipality, &result)?;
        info!(
            code = %municipality.code,
            name = %municipality.name,
            "fetched municipality {}/{}",
            table.row_count(),
            total
        );
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use crate::extract::Ps2017Selectors;
    use crate::fixtures::{result_page, MemorySource};

    const BASE: &str = "mem://ps311?xobec=";

    fn muni(code: &str, name: &str) -> Municipality {
        Municipality {
            code: code.into(),
            name: name.into(),
        }
    }

    fn district() -> (MemorySource, Vec<Municipality>) {
        let parties = ["Party A", "Party B"];
        let source = MemorySource::new()
            .with_page(
                format!("{BASE}500054"),
                result_page("4\u{a0}391", "2\u{a0}701", "2\u{a0}680", &parties, &["1\u{a0}002", "87"]),
            )
            .with_page(
                format!("{BASE}500062"),
                result_page("151", "101", "100", &parties, &["60", "40"]),
            )
            .with_page(
                format!("{BASE}500071"),
                result_page("90", "50", "49", &parties, &["9", "40"]),
            );
        let munis = vec![
            muni("500054", "Bechyně"),
            muni("500062", "Borkovice"),
            muni("500071", "Bradáčov"),
        ];
        (source, munis)
    }

    fn party_list() -> Vec<String> {
        vec!["Party A".to_string(), "Party B".to_string()]
    }

    #[tokio::test]
    async fn builds_one_row_per_municipality() {
        let (source, munis) = district();
        let table = aggregate(
            &source,
            &Ps2017Selectors::new().unwrap(),
            &ResultEndpoint::from_base(BASE),
            &munis,
            &party_list(),
            1,
        )
        .await
        .unwrap();

        assert_eq!(table.row_count(), 3);
        assert!(table.columns().iter().all(|c| c.values.len() == 3));
        assert_eq!(
            table.rows().next().unwrap(),
            vec!["500054", "Bechyně", "4391", "2701", "2680", "1002", "87"]
        );
        assert_eq!(table.column("Party B").unwrap().values, vec!["87", "40", "40"]);
        assert_eq!(
            source.requests(),
            vec![
                "mem://ps311?xobec=500054",
                "mem://ps311?xobec=500062",
                "mem://ps311?xobec=500071"
            ]
        );
    }

    #[tokio::test]
    async fn concurrent_fetching_keeps_listing_order() {
        let (source, munis) = district();
        let table = aggregate(
            &source,
            &Ps2017Selectors::new().unwrap(),
            &ResultEndpoint::from_base(BASE),
            &munis,
            &party_list(),
            8,
        )
        .await
        .unwrap();
        assert_eq!(
            table.column("Code").unwrap().values,
            vec!["500054", "500062", "500071"]
        );
    }

    #[tokio::test]
    async fn one_failed_page_aborts_the_run() {
        let (source, mut munis) = district();
        munis.insert(1, muni("999999", "Nowhere"));
        let res = aggregate(
            &source,
            &Ps2017Selectors::new().unwrap(),
            &ResultEndpoint::from_base(BASE),
            &munis,
            &party_list(),
            1,
        )
        .await;
        match res {
            Err(ScrapeError::Transport { url, .. }) => assert_eq!(url, "mem://ps311?xobec=999999"),
            other => panic!("expected transport error, got {:?}", other.map(|t| t.row_count())),
        }
        // Sequential mode stops at the failure.
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn municipality_with_fewer_parties_is_an_alignment_error() {
        let source = MemorySource::new().with_page(
            format!("{BASE}1"),
            result_page("1", "1", "1", &["Party A"], &["1"]),
        );
        let res = aggregate(
            &source,
            &Ps2017Selectors::new().unwrap(),
            &ResultEndpoint::from_base(BASE),
            &[muni("1", "x")],
            &party_list(),
            1,
        )
        .await;
        assert!(matches!(res, Err(ScrapeError::AlignmentMismatch { left: 1, right: 2, .. })));
    }

    #[tokio::test]
    async fn empty_district_gives_header_only_table() {
        let source = MemorySource::new();
        let table = aggregate(
            &source,
            &Ps2017Selectors::new().unwrap(),
            &ResultEndpoint::from_base(BASE),
            &[],
            &[],
            1,
        )
        .await
        .unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.columns().len(), 5);
        assert!(source.requests().is_empty());
    }
}
