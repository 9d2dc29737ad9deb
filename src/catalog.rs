use serde::Serialize;

mod filter;

pub use filter::filter;

/// One browsable wallpaper. The name doubles as its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallpaperRecord {
    pub name: String,
    pub url: String,
    pub tags: Vec<String>,
}

impl WallpaperRecord {
    pub fn new(name: &str, url: &str, tags: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Comma separated tag list for display.
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }
}

/// Fixed, ordered set of known wallpapers.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<WallpaperRecord>,
}

impl Catalog {
    pub fn new(records: Vec<WallpaperRecord>) -> Self {
        Self { records }
    }

    /// The wallpapers shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(vec![
            WallpaperRecord::new(
                "Black Headphone",
                "https://wallpaper.forfun.com/fetch/b1/b10c2b22fc83644699ec4822d102da6b.jpeg?h=900&r=0.5",
                &["Aesthetic Music", "Music", "Aesthetic"],
            ),
            WallpaperRecord::new(
                "Glass Guitar",
                "https://wallpaper.forfun.com/fetch/0e/0ec93d50b4a57269969034140b8fdbde.jpeg?h=900&r=0.5",
                &["guitar", "glass"],
            ),
            WallpaperRecord::new(
                "Moon Art",
                "https://wallpaper.forfun.com/fetch/f6/f639851874060b429f9049beb1cc6149.jpeg?h=900&r=0.5",
                &["aesthetic moon", "moon"],
            ),
            WallpaperRecord::new(
                "Flight Art",
                "https://wallpaper.forfun.com/fetch/5e/5e7a7bf446d1af63d6f94808f5b38374.jpeg?h=900&r=0.5",
                &["Flight", "Aeroplane", "Aesthetic", "Colour Art"],
            ),
            WallpaperRecord::new(
                "Moon View",
                "https://wallpaper.forfun.com/fetch/55/55a75bd94ac9b2cf880285e04f5a4b27.jpeg?h=900&r=0.5",
                &["Moon", "Sunset", "Aesthetic Moon", "Aesthetic"],
            ),
            WallpaperRecord::new(
                "Cloud House",
                "https://wallpaper.forfun.com/fetch/5d/5d3fc070d749acfeb8c707d4460653f5.jpeg?h=900&r=0.5",
                &["House", "Sunset House", "Aesthetic House", "Clouds"],
            ),
        ])
    }

    pub fn records(&self) -> &[WallpaperRecord] {
        &self.records
    }

    pub fn get(&self, idx: usize) -> Option<&WallpaperRecord> {
        self.records.get(idx)
    }

    /// Look up a record by name. Exact matches win over case-insensitive ones.
    pub fn find(&self, name: &str) -> Option<&WallpaperRecord> {
        let name = name.trim();
        self.records
            .iter()
            .find(|r| r.name == name)
            .or_else(|| self.records.iter().find(|r| r.name.eq_ignore_ascii_case(name)))
    }

    /// Records matching `query`, in catalog order.
    pub fn filter(&self, query: &str) -> Vec<&WallpaperRecord> {
        filter(self.records(), query)
    }

    /// Catalog indices of the records matching `query`, in catalog order.
    pub fn filter_indices(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| filter::matches(r, &needle))
            .map(|(i, _)| i)
            .collect()
    }
}
