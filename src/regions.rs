//! Fixed table of the store map's first-level region filters.
//!
//! Region buttons are located by 1-based `nth-child` position, so this
//! table must list the regions in the exact order they appear in the
//! on-page filter panel.

/// One selectable region filter on the store map page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Korean label as shown on the page and written into JSON payloads.
    pub korean: &'static str,
    /// Lowercase English name used in output paths.
    pub slug: &'static str,
}

/// All 17 first-level regions, in on-page button order.
pub const REGIONS: &[Region] = &[
    Region { korean: "서울", slug: "seoul" },
    Region { korean: "경기", slug: "gyeonggi" },
    Region { korean: "광주", slug: "gwangju" },
    Region { korean: "대구", slug: "daegu" },
    Region { korean: "대전", slug: "daejeon" },
    Region { korean: "부산", slug: "busan" },
    Region { korean: "울산", slug: "ulsan" },
    Region { korean: "인천", slug: "incheon" },
    Region { korean: "강원", slug: "gangwon" },
    Region { korean: "경남", slug: "gyeongnam" },
    Region { korean: "경북", slug: "gyeongbuk" },
    Region { korean: "전남", slug: "jeolnam" },
    Region { korean: "전북", slug: "jeolbuk" },
    Region { korean: "충남", slug: "chungnam" },
    Region { korean: "충북", slug: "chungbuk" },
    Region { korean: "제주", slug: "jeju" },
    // 세종 has no sub-region panel; the navigator skips its "전체" click.
    Region { korean: "세종", slug: "sejong" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_all_seventeen_regions() {
        assert_eq!(REGIONS.len(), 17);
    }

    #[test]
    fn table_matches_filter_panel_order() {
        let expected = [
            ("서울", "seoul"),
            ("경기", "gyeonggi"),
            ("광주", "gwangju"),
            ("대구", "daegu"),
            ("대전", "daejeon"),
            ("부산", "busan"),
            ("울산", "ulsan"),
            ("인천", "incheon"),
            ("강원", "gangwon"),
            ("경남", "gyeongnam"),
            ("경북", "gyeongbuk"),
            ("전남", "jeolnam"),
            ("전북", "jeolbuk"),
            ("충남", "chungnam"),
            ("충북", "chungbuk"),
            ("제주", "jeju"),
            ("세종", "sejong"),
        ];
        let actual: Vec<_> = REGIONS.iter().map(|r| (r.korean, r.slug)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn labels_and_slugs_are_unique() {
        let labels: HashSet<_> = REGIONS.iter().map(|r| r.korean).collect();
        let slugs: HashSet<_> = REGIONS.iter().map(|r| r.slug).collect();
        assert_eq!(labels.len(), REGIONS.len());
        assert_eq!(slugs.len(), REGIONS.len());
    }

    #[test]
    fn slugs_are_lowercase_ascii() {
        for region in REGIONS {
            assert!(
                region.slug.chars().all(|c| c.is_ascii_lowercase()),
                "slug {:?} is not plain lowercase ascii",
                region.slug
            );
        }
    }
}
