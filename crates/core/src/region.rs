//! Region registry - maps region codes to display attributes
//!
//! Every lookup is total: codes that are not registered resolve to the
//! sentinel region ("Open Sea"), which always exists.

use arrayvec::ArrayVec;
use log::warn;

use crate::types::{RegionCode, Rgb, MAX_REGIONS};

/// Display attributes for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInfo {
    pub code: RegionCode,
    pub name: &'static str,
    pub color: Rgb,
    pub fact: &'static str,
}

/// Raw region table row: code, name, `#rrggbb` color, fact.
pub type RegionRow = (&'static str, &'static str, &'static str, &'static str);

/// Raw sentinel row: name, `#rrggbb` color, fact.
pub type SentinelRow = (&'static str, &'static str, &'static str);

/// Regions of the starter map.
pub const DEFAULT_REGIONS: [RegionRow; 5] = [
    ("EG", "Egypt", "#f1c40f", "Home to the Nile River and pyramids."),
    ("KE", "Kenya", "#16a085", "Famed for safaris and the Great Rift Valley."),
    ("TZ", "Tanzania", "#2980b9", "Mount Kilimanjaro touches the sky here."),
    ("MA", "Morocco", "#e67e22", "Spice markets and labyrinthine medinas."),
    ("ZA", "South Africa", "#9b59b6", "Table Mountain watches over Cape Town."),
];

/// Sentinel region of the starter map.
pub const DEFAULT_SENTINEL: SentinelRow = (
    "Open Sea",
    "#b2bec3",
    "Splash zone - upgrade to add islands!",
);

/// Used when a sentinel row carries an unparseable color.
const SENTINEL_FALLBACK_COLOR: Rgb = Rgb::new(0xb2, 0xbe, 0xc3);

/// Typed code -> region mapping with an explicit sentinel fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRegistry {
    sentinel: RegionInfo,
    entries: ArrayVec<RegionInfo, MAX_REGIONS>,
}

impl RegionRegistry {
    /// Create a registry holding only the sentinel region.
    pub fn new(
        sentinel_name: &'static str,
        sentinel_color: Rgb,
        sentinel_fact: &'static str,
    ) -> Self {
        Self {
            sentinel: RegionInfo {
                code: RegionCode::SENTINEL,
                name: sentinel_name,
                color: sentinel_color,
                fact: sentinel_fact,
            },
            entries: ArrayVec::new(),
        }
    }

    /// Build a registry from raw table rows.
    ///
    /// Rows with a malformed code or color, rows using the sentinel code, and
    /// rows beyond capacity are skipped with a warning.
    pub fn from_table(sentinel: SentinelRow, rows: &[RegionRow]) -> Self {
        let (name, color, fact) = sentinel;
        let color = Rgb::from_hex(color).unwrap_or_else(|| {
            warn!("sentinel color {color:?} is not #rrggbb; using fallback");
            SENTINEL_FALLBACK_COLOR
        });
        let mut registry = Self::new(name, color, fact);

        for &(code, name, color, fact) in rows {
            let Some(code) = RegionCode::parse(code) else {
                warn!("skipping region {name:?}: bad code {code:?}");
                continue;
            };
            let Some(color) = Rgb::from_hex(color) else {
                warn!("skipping region {code}: bad color {color:?}");
                continue;
            };
            registry.insert(RegionInfo {
                code,
                name,
                color,
                fact,
            });
        }
        registry
    }

    /// Register a region, replacing any entry with the same code.
    ///
    /// Returns false if the region was rejected.
    pub fn insert(&mut self, info: RegionInfo) -> bool {
        if info.code.is_sentinel() {
            warn!("region code {} is reserved for the sentinel", info.code);
            return false;
        }
        if let Some(existing) = self.entries.iter_mut().find(|e| e.code == info.code) {
            *existing = info;
            return true;
        }
        match self.entries.try_push(info) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "region registry full ({MAX_REGIONS}); dropping {}",
                    err.element().code
                );
                false
            }
        }
    }

    /// Look up a region; unknown codes resolve to the sentinel.
    pub fn lookup(&self, code: RegionCode) -> &RegionInfo {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .unwrap_or(&self.sentinel)
    }

    /// Look up a raw grid cell; empty cells resolve to the sentinel.
    pub fn lookup_cell(&self, cell: Option<RegionCode>) -> &RegionInfo {
        match cell {
            Some(code) => self.lookup(code),
            None => &self.sentinel,
        }
    }

    /// True if `code` has its own entry or is the sentinel code.
    pub fn contains(&self, code: RegionCode) -> bool {
        code.is_sentinel() || self.entries.iter().any(|e| e.code == code)
    }

    pub fn sentinel(&self) -> &RegionInfo {
        &self.sentinel
    }

    /// Registered regions in insertion order (sentinel excluded).
    pub fn iter(&self) -> impl Iterator<Item = &RegionInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::from_table(DEFAULT_SENTINEL, &DEFAULT_REGIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> RegionCode {
        RegionCode::parse(s).unwrap()
    }

    #[test]
    fn default_registry_has_all_starter_regions() {
        let reg = RegionRegistry::default();
        assert_eq!(reg.len(), 5);
        assert_eq!(reg.lookup(code("EG")).name, "Egypt");
        assert_eq!(reg.lookup(code("ZA")).color, Rgb::new(0x9b, 0x59, 0xb6));
        assert_eq!(reg.sentinel().name, "Open Sea");
        assert_eq!(reg.sentinel().code, RegionCode::SENTINEL);
    }

    #[test]
    fn unknown_code_falls_back_to_sentinel() {
        let reg = RegionRegistry::default();
        assert_eq!(reg.lookup(code("QQ")), reg.sentinel());
        assert_eq!(reg.lookup(RegionCode::SENTINEL), reg.sentinel());
        assert_eq!(reg.lookup_cell(None), reg.sentinel());
        assert!(!reg.contains(code("QQ")));
        assert!(reg.contains(RegionCode::SENTINEL));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let rows: [RegionRow; 3] = [
            ("EGY", "Egypt", "#f1c40f", "too long"),
            ("KE", "Kenya", "green", "bad color"),
            ("XX", "Fake Sea", "#000000", "reserved"),
        ];
        let reg = RegionRegistry::from_table(("Void", "nope", "nothing"), &rows);
        assert!(reg.is_empty());
        assert_eq!(reg.sentinel().color, SENTINEL_FALLBACK_COLOR);
        assert_eq!(reg.sentinel().name, "Void");
    }

    #[test]
    fn insert_replaces_existing_code() {
        let mut reg = RegionRegistry::default();
        let replaced = reg.insert(RegionInfo {
            code: code("EG"),
            name: "Kemet",
            color: Rgb::new(1, 2, 3),
            fact: "Old name.",
        });
        assert!(replaced);
        assert_eq!(reg.len(), 5);
        assert_eq!(reg.lookup(code("EG")).name, "Kemet");
    }
}
