use std::ffi::OsStr;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use tracing::info;

use crate::regions::Region;

/// Store map page with the region ("지역") filter panel open.
const STORE_MAP_URL: &str = "https://www.starbucks.co.kr/store/store_map.do?disp=locale";

/// Container that only exists once the map layer has rendered.
const MAP_LAYER_SELECTOR: &str = ".store_map_layer_cont";

/// First entry of the sub-region panel, the "전체" (all districts) control.
const SUB_REGION_ALL_SELECTOR: &str = ".gugun_arae_box li:nth-child(1) a";

/// Pause after navigation, and again once the map layer is present.
const PAGE_SETTLE: Duration = Duration::from_secs(10);

/// Upper bound on the map-layer wait; the run's only explicit timeout.
const MAP_LAYER_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause after a region click while the sub-region panel refreshes.
const REGION_SETTLE: Duration = Duration::from_secs(30);

/// Pause after the "전체" click while the full result list populates.
const SUB_REGION_SETTLE: Duration = Duration::from_secs(60);

/// Browser-based scraper for the Starbucks Korea store map.
///
/// Owns the Chrome session; dropping it closes the browser, so cleanup
/// happens on every exit path.
pub struct StoreMapScraper {
    #[allow(dead_code)]
    browser: Browser,
    tab: Arc<Tab>,
}

impl StoreMapScraper {
    /// Launches headless Chrome and opens the tab used for the whole run.
    pub fn launch() -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .args(vec![
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-infobars"),
                OsStr::new("--disable-notifications"),
                OsStr::new("--deny-permission-prompts"),
            ])
            // The result list takes a minute to fill after a click; the CDP
            // connection must survive those silent stretches.
            .idle_browser_timeout(Duration::from_secs(300))
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;
        let tab = browser.new_tab()?;

        Ok(Self { browser, tab })
    }

    /// Navigates to the store map and blocks until it has rendered.
    ///
    /// Mirrors the page's slow client-side boot: a fixed pause, a bounded
    /// wait for the map layer, then another pause for the asynchronous
    /// widgets. Failing here is the run's one recoverable condition.
    pub fn open_store_map(&self) -> Result<()> {
        info!("Opening store map page...");
        self.tab
            .navigate_to(STORE_MAP_URL)
            .context("Failed to navigate to the store map")?;
        self.tab.wait_until_navigated()?;
        thread::sleep(PAGE_SETTLE);

        self.tab
            .wait_for_element_with_custom_timeout(MAP_LAYER_SELECTOR, MAP_LAYER_TIMEOUT)
            .context("Timed out waiting for the store map layer")?;
        info!("Store map page fully loaded");
        thread::sleep(PAGE_SETTLE);

        Ok(())
    }

    /// Selects one region and returns the settled page markup.
    ///
    /// `position` is the region's 1-based slot in the filter panel. Every
    /// region except 세종 gets a second click on the "전체" control to fold
    /// all of its districts into one result list.
    pub fn scrape_region(&self, position: usize, region: &Region) -> Result<String> {
        let button_selector = format!(".sido_arae_box li:nth-child({position}) a");
        let button = self
            .tab
            .find_element(&button_selector)
            .with_context(|| format!("Region button not found: {button_selector}"))?;
        Self::js_click(&button)?;
        info!("Clicked the {} region button", region.korean);
        thread::sleep(REGION_SETTLE);

        if region.korean != "세종" {
            let all_button = self
                .tab
                .find_element(SUB_REGION_ALL_SELECTOR)
                .context("Sub-region \"전체\" button not found")?;
            Self::js_click(&all_button)?;
            info!("Clicked the \"전체\" sub-region button");
            thread::sleep(SUB_REGION_SETTLE);
        }

        self.page_source()
    }

    /// Clicks from page JavaScript; the map overlay intercepts pointer clicks.
    fn js_click(element: &Element<'_>) -> Result<()> {
        element.call_js_fn("function() { this.click(); }", vec![], false)?;
        Ok(())
    }

    /// Snapshot of the current DOM, equivalent to the page source.
    fn page_source(&self) -> Result<String> {
        let result = self
            .tab
            .evaluate("document.documentElement.outerHTML", false)?;

        result
            .value
            .and_then(|value| value.as_str().map(str::to_owned))
            .context("Page source evaluation returned no value")
    }
}
