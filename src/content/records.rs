//! Content Delivery API Wire Shapes
//!
//! Serde mirrors of the Contentful CDA response envelope. Entries arrive
//! with a nested `sys`/`fields` structure; linked assets are shipped
//! separately under `includes` and are resolved here into owned records.

use serde::Deserialize;

/// Response envelope for `GET .../entries`
#[derive(Debug, Clone, Deserialize)]
pub struct EntryCollection<F> {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default = "Vec::new")]
    pub items: Vec<RawEntry<F>>,
    pub includes: Option<Includes>,
}

/// One entry as stored: system metadata plus the typed field payload
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry<F> {
    pub sys: Sys,
    pub fields: F,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    pub id: String,
}

/// Linked resources delivered alongside the entries
#[derive(Debug, Clone, Deserialize)]
pub struct Includes {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Asset>,
}

/// Reference to an asset in `includes`
#[derive(Debug, Clone, Deserialize)]
pub struct AssetLink {
    pub sys: Sys,
}

/// A media asset (image) attached to an entry
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub sys: Sys,
    pub fields: AssetFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file: Option<AssetFile>,
}

/// File reference; `url` is scheme-relative as stored by the CDA
#[derive(Debug, Clone, Deserialize)]
pub struct AssetFile {
    pub url: String,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    pub details: Option<FileDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileDetails {
    /// Size in bytes
    pub size: Option<u64>,
    pub image: Option<ImageDimensions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Field payload of the `garden` content type. Field ids are stored in
/// the CMS partly in German; every field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct GardenFields {
    pub titel: Option<String>,
    pub description: Option<String>,
    pub bilder: Option<Vec<AssetLink>>,
    pub availability: Option<bool>,
    pub size: Option<u32>,
    pub ausstattungsmerkmale: Option<Vec<String>>,
}

/// Field payload of the `event` content type
#[derive(Debug, Clone, Deserialize)]
pub struct EventFields {
    pub title: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Field payloads that may reference assets expose their links here so
/// the collection can resolve them uniformly.
pub trait AssetLinks {
    fn asset_links(&self) -> &[AssetLink];
}

impl AssetLinks for GardenFields {
    fn asset_links(&self) -> &[AssetLink] {
        self.bilder.as_deref().unwrap_or(&[])
    }
}

impl AssetLinks for EventFields {
    fn asset_links(&self) -> &[AssetLink] {
        &[]
    }
}

/// An entry with its asset links resolved against `includes`. This is
/// the raw record shape the normalizer consumes.
#[derive(Debug, Clone)]
pub struct Record<F> {
    pub id: String,
    pub fields: F,
    /// Linked assets in link order; links without a matching include are skipped
    pub assets: Vec<Asset>,
}

pub type GardenRecord = Record<GardenFields>;
pub type EventRecord = Record<EventFields>;

impl<F: AssetLinks> EntryCollection<F> {
    /// Pair every entry with its linked assets, consuming the collection.
    pub fn into_records(self) -> Vec<Record<F>> {
        let assets = self.includes.map(|inc| inc.assets).unwrap_or_default();
        self.items
            .into_iter()
            .map(|entry| {
                let linked = entry
                    .fields
                    .asset_links()
                    .iter()
                    .filter_map(|link| assets.iter().find(|a| a.sys.id == link.sys.id).cloned())
                    .collect();
                Record {
                    id: entry.sys.id,
                    fields: entry.fields,
                    assets: linked,
                }
            })
            .collect()
    }
}
