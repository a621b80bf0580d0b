//! Category to table resolution

use quakepush_config::TableNames;

use crate::matcher::Category;

/// Maps every [`Category`] to the storage table holding its tokens.
///
/// Total over the category set, so resolution cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMap {
    quake: String,
    foreign: String,
    tsunami: String,
    userquake: String,
    eew: String,
}

impl TableMap {
    pub fn from_config(names: &TableNames) -> Self {
        Self {
            quake: names.quake.clone(),
            foreign: names.foreign.clone(),
            tsunami: names.tsunami.clone(),
            userquake: names.userquake.clone(),
            eew: names.eew.clone(),
        }
    }

    pub fn resolve(&self, category: Category) -> &str {
        match category {
            Category::Quake => &self.quake,
            Category::Foreign => &self.foreign,
            Category::Tsunami => &self.tsunami,
            Category::UserQuake => &self.userquake,
            Category::Eew => &self.eew,
        }
    }

    /// Every table identifier, in [`Category::ALL`] order.
    pub fn table_names(&self) -> Vec<String> {
        Category::ALL
            .iter()
            .map(|category| self.resolve(*category).to_string())
            .collect()
    }
}

impl Default for TableMap {
    fn default() -> Self {
        Self::from_config(&TableNames::default())
    }
}
