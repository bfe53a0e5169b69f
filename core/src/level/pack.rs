use alloc::collections::BTreeMap;

use super::*;

#[derive(Serialize, Deserialize)]
struct PackFile {
    levels: Vec<LevelDescriptor>,
}

/// Curated levels loaded from a JSON dataset, indexed by [`LevelId`].
///
/// The on-disk form is `{"levels": [descriptor, ...]}` where every descriptor carries an `id`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelPack {
    levels: BTreeMap<LevelId, LevelDescriptor>,
}

impl LevelPack {
    pub fn from_levels(
        levels: impl IntoIterator<Item = LevelDescriptor>,
    ) -> core::result::Result<Self, LevelPackError> {
        let mut pack = Self::default();
        for (index, level) in levels.into_iter().enumerate() {
            let id = level.id.ok_or(LevelPackError::MissingId(index))?;
            level
                .validate()
                .map_err(|source| LevelPackError::InvalidLevel { id, source })?;
            if let Some(class) = SizeClass::from_size(level.size) {
                if class != id.class {
                    log::warn!(
                        "Level {} has size {} but is filed under {:?}",
                        id,
                        level.size,
                        id.class
                    );
                }
            }
            if level.adjacency != id.mode {
                log::warn!(
                    "Level {} plays as {} but is filed under {}",
                    id,
                    level.adjacency,
                    id.mode
                );
            }
            if pack.levels.insert(id, level).is_some() {
                return Err(LevelPackError::DuplicateLevel(id));
            }
        }
        log::debug!("Loaded level pack with {} levels", pack.levels.len());
        Ok(pack)
    }

    pub fn from_json(json: &str) -> core::result::Result<Self, LevelPackError> {
        let file: PackFile = serde_json::from_str(json)?;
        Self::from_levels(file.levels)
    }

    pub fn to_json(&self) -> core::result::Result<String, LevelPackError> {
        let file = PackFile {
            levels: self.levels.values().cloned().collect(),
        };
        Ok(serde_json::to_string(&file)?)
    }

    pub fn get(&self, id: LevelId) -> Option<&LevelDescriptor> {
        self.levels.get(&id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LevelId, &LevelDescriptor)> {
        self.levels.iter().map(|(&id, level)| (id, level))
    }

    /// Ids of one size class and mode, in level-number order.
    pub fn ids_for(&self, class: SizeClass, mode: AdjacencyMode) -> impl Iterator<Item = LevelId> {
        self.levels
            .keys()
            .copied()
            .filter(move |id| id.class == class && id.mode == mode)
    }
}
