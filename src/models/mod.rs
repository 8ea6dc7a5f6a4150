use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// One store entry scraped from a region's result list.
///
/// Coordinates stay as the page's attribute strings; a missing source
/// attribute serializes as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreRecord {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Per-region output document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionResult {
    /// Korean region label, e.g. `서울`.
    pub location: String,
    pub count: usize,
    /// Run date, `YYYY-MM-DD`.
    pub date: String,
    pub item: Vec<StoreRecord>,
}

impl RegionResult {
    pub fn new(location: String, date: String, item: Vec<StoreRecord>) -> Self {
        Self {
            location,
            count: item.len(),
            date,
            item,
        }
    }
}

/// Nationwide output document: every region's stores concatenated in
/// processing order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TotalResult {
    pub kind: String,
    pub date: String,
    pub location: String,
    pub count: usize,
    pub item: Vec<StoreRecord>,
}

impl TotalResult {
    pub fn new(date: String, item: Vec<StoreRecord>) -> Self {
        Self {
            kind: "Korea Starbucks".to_string(),
            date,
            location: "전국(total)".to_string(),
            count: item.len(),
            item,
        }
    }
}

/// Per-region store counts as displayed by the page, plus their sum.
///
/// Serializes as a single JSON object: `날짜`, `전체`, then one key per
/// region in the order the regions were added. The key set and order are
/// part of the file format, which is why this carries a hand-written
/// `Serialize` instead of deriving one (serde_json's map would reorder
/// the keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSummary {
    pub date: String,
    pub total: u32,
    pub regions: Vec<(String, u32)>,
}

impl CountSummary {
    pub fn new(date: String) -> Self {
        Self {
            date,
            total: 0,
            regions: Vec::new(),
        }
    }

    /// Records one region's displayed count and folds it into `전체`.
    pub fn add_region(&mut self, label: &str, count: u32) {
        self.regions.push((label.to_string(), count));
        self.total += count;
    }
}

impl Serialize for CountSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.regions.len() + 2))?;
        map.serialize_entry("날짜", &self.date)?;
        map.serialize_entry("전체", &self.total)?;
        for (label, count) in &self.regions {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}
