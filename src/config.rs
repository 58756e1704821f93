use std::path::PathBuf;
use std::time::Duration;

pub const BASE_URL: &str = "https://sclocal.kr/?pn=product.list&_event=type&typeuid=15";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7";

/// Pause after every page that yielded products.
pub const PAGE_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_PAGES: u32 = 5;
pub const DEFAULT_OUTPUT: &str = "sclocal_products.json";
pub const MAX_REDIRECTS: usize = 10;

pub const NAME_PLACEHOLDER: &str = "상품명 없음";
pub const PRICE_PLACEHOLDER: &str = "가격 정보 없음";

/// CSS selectors locating a product block and its two fields.
#[derive(Debug, Clone)]
pub struct Markers {
    pub item: String,
    pub name: String,
    pub price: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            item: ".item_box".into(),
            name: ".item_name".into(),
            price: ".won".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub base_url: String,
    pub user_agent: String,
    pub accept_language: String,
    pub delay: Duration,
    pub max_pages: u32,
    pub output: PathBuf,
    pub markers: Markers,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            user_agent: USER_AGENT.into(),
            accept_language: ACCEPT_LANGUAGE.into(),
            delay: PAGE_DELAY,
            max_pages: DEFAULT_MAX_PAGES,
            output: PathBuf::from(DEFAULT_OUTPUT),
            markers: Markers::default(),
        }
    }
}

impl CrawlConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// URL of a catalog page. The site serves page 1 without `listpg`.
    pub fn page_url(&self, page: u32) -> String {
        if page == 1 {
            self.base_url.clone()
        } else {
            format!("{}&listpg={}", self.base_url, page)
        }
    }
}
