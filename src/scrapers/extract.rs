//! HTML extraction for rendered store map snapshots.
//!
//! Everything here is side-effect free: the input is the full page source
//! captured after a region's result list has settled, the output is plain
//! data. Selector drift on the upstream page shows up as empty fields or
//! zero rows, never as a panic.

use anyhow::{Context, Result};
use regex::Regex;
use scraper::{Html, Selector};

use crate::models::StoreRecord;

/// Customer-service phone numbers embedded in the address block, e.g. `1522-3232`.
const PHONE_PATTERN: &str = r"\d{4}-\d{4}";

/// Everything pulled out of one region's rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPage {
    /// Store count shown in the result header; 0 when the element is absent.
    pub displayed_count: u32,
    /// Store entries in document order.
    pub stores: Vec<StoreRecord>,
}

/// Parses one region's rendered store map markup.
///
/// Missing per-store attributes become `None` rather than failing the
/// record. A present but non-numeric result counter is an error: that only
/// happens when the upstream DOM changed shape, and silently writing a zero
/// would mask it.
pub fn parse_region_page(html: &str) -> Result<RegionPage> {
    let document = Html::parse_document(html);

    let counter_selector = Selector::parse(".result_num_wrap .sidoSetResult").unwrap();
    let item_selector =
        Selector::parse(".quickSearchResultBoxSidoGugun li.quickResultLstCon").unwrap();
    let address_selector = Selector::parse(".result_details").unwrap();
    let phone = Regex::new(PHONE_PATTERN).expect("valid regex");

    let displayed_count = match document.select(&counter_selector).next() {
        Some(node) => {
            let text = node.text().collect::<String>();
            let trimmed = text.trim();
            trimmed
                .parse::<u32>()
                .with_context(|| format!("result counter is not a number: {trimmed:?}"))?
        }
        None => 0,
    };

    let stores = document
        .select(&item_selector)
        .map(|item| {
            let address = item.select(&address_selector).next().map(|node| {
                let text = node.text().collect::<String>();
                phone.replace_all(text.trim(), "").trim().to_string()
            });
            StoreRecord {
                name: item.value().attr("data-name").map(str::to_owned),
                address,
                latitude: item.value().attr("data-lat").map(str::to_owned),
                longitude: item.value().attr("data-long").map(str::to_owned),
            }
        })
        .collect();

    Ok(RegionPage {
        displayed_count,
        stores,
    })
}
