//! Merges every region fragment into one flat, uniquely keyed color map.

use serde::{Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::{
    colors::Color,
    context::PolarityContext,
    error::{ThemeError, ThemeResult},
    palette::Palette,
    regions::{Fragment, Region},
};

/// Workbench colors in emission order. Serializes as a JSON object of hex strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeColorMap {
    entries: Vec<(&'static str, Color)>,
    owners: HashMap<&'static str, Region>,
}

impl ThemeColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region's entries, failing on the first key that is already owned
    /// or repeated within the fragment. A failed merge leaves the map untouched.
    pub fn merge(&mut self, region: Region, fragment: Fragment) -> ThemeResult<()> {
        let mut incoming = HashSet::with_capacity(fragment.len());
        for (key, _) in &fragment {
            if let Some(owner) = self.owners.get(key) {
                return Err(ThemeError::collision(*key, owner.name(), region.name()));
            }
            if !incoming.insert(*key) {
                return Err(ThemeError::collision(*key, region.name(), region.name()));
            }
        }

        self.entries.reserve(fragment.len());
        for (key, color) in fragment {
            self.owners.insert(key, region);
            self.entries.push((key, color));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, color)| *color)
    }

    /// The region that emitted `key`
    pub fn owner(&self, key: &str) -> Option<Region> {
        self.owners.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for ThemeColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(key, color)| (key, color)))
    }
}

/// Run every region builder against `ctx` and merge the results
pub fn compose(ctx: &PolarityContext) -> ThemeResult<ThemeColorMap> {
    compose_regions(ctx, Region::ALL)
}

pub(crate) fn compose_regions(
    ctx: &PolarityContext,
    regions: impl IntoIterator<Item = Region>,
) -> ThemeResult<ThemeColorMap> {
    let mut map = ThemeColorMap::new();
    for region in regions {
        let fragment = region.build(ctx);
        debug!(
            region = region.name(),
            keys = fragment.len(),
            "composed region"
        );
        map.merge(region, fragment)?;
    }
    Ok(map)
}

/// Derive the full workbench color map for a palette
pub fn build_workbench(palette: &Palette) -> ThemeResult<ThemeColorMap> {
    let ctx = PolarityContext::new(palette);
    let map = compose(&ctx)?;
    debug!(
        palette = %palette.name,
        is_dark = ctx.is_dark,
        keys = map.len(),
        "built workbench colors"
    );
    Ok(map)
}
