use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use ron::de::from_reader;
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};
use crate::core::bolt_error::BoltError;
use crate::core::bolt_params::BoltParams;
use crate::core::seeded_or_not::SeededOrNot;
use crate::random::unit_source::GenRng;
use crate::spawning::burst::BurstParams;
use crate::spawning::trail::TrailParams;

pub const PRESET_EXTENSION: &str = "bolt.ron";

lazy_static! {
    static ref PRESET_CACHE: Mutex<HashMap<PathBuf, EffectPreset>> = Mutex::new(HashMap::new());
}

/// Everything needed to play one lightning effect.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct EffectPreset {
    // Presets are named by their file stem or library key, not by a field.
    pub bolt: BoltParams,
    pub trail: TrailParams,
    pub burst: Option<BurstParams>,
    pub seed: SeededOrNot,
}

impl EffectPreset {
    pub fn validate(&self) -> Result<(), BoltError> {
        self.bolt.validate()?;
        self.trail.validate()?;
        if let Some(burst) = &self.burst {
            burst.validate()?;
        }
        Ok(())
    }

    pub fn rng(&self) -> GenRng {
        GenRng::from_seed_choice(self.seed)
    }
}

pub fn preset_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, PRESET_EXTENSION))
}

/// Reads `<dir>/<name>.bolt.ron`, validating it. Successful loads are cached per path.
pub fn import_preset(dir: &Path, name: &str) -> Result<EffectPreset, BoltError> {
    let file_path = preset_path(dir, name);
    let mut cache = PRESET_CACHE.lock().map_err(|_| BoltError::from("preset cache poisoned"))?;

    if let Some(cached) = cache.get(&file_path) {
        debug!("Preset cache hit: {}", file_path.display());
        return Ok(cached.clone());
    }

    let file = File::open(&file_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BoltError::UnknownPreset(name.to_string())
        } else {
            BoltError::Io(e)
        }
    })?;
    let preset: EffectPreset = from_reader(file)?;
    if let Err(e) = preset.validate() {
        warn!("Rejected preset {}: {}", file_path.display(), e);
        return Err(e);
    }

    info!("Loaded preset {} from {}", name, file_path.display());
    cache.insert(file_path, preset.clone());
    Ok(preset)
}

/// Drops every cached preset so edited files are read again.
pub fn clear_preset_cache() {
    if let Ok(mut cache) = PRESET_CACHE.lock() {
        cache.clear();
    }
}

/// Named presets in the order they were defined.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct PresetLibrary(pub IndexMap<String, EffectPreset>);

impl PresetLibrary {
    pub fn new() -> Self {
        PresetLibrary(IndexMap::new())
    }

    /// Parses a RON map of name to preset and validates every entry.
    pub fn from_ron_str(source: &str) -> Result<Self, BoltError> {
        let library: PresetLibrary = ron::from_str(source)?;
        for (name, preset) in library.iter() {
            preset
                .validate()
                .map_err(|e| BoltError::InvalidParams(format!("preset '{}': {}", name, e)))?;
        }
        Ok(library)
    }

    /// Loads every `*.bolt.ron` file in `dir`, sorted by file name.
    pub fn load_dir(dir: &Path) -> Result<Self, BoltError> {
        let dir_str = dir.to_str().ok_or_else(|| BoltError::from("preset directory is not valid UTF-8"))?;
        // Brackets and wildcards in the directory name are literal.
        let pattern = format!("{}/*.{}", glob::Pattern::escape(dir_str), PRESET_EXTENSION);
        let entries = glob::glob(&pattern).map_err(|e| BoltError::Other(format!("bad preset pattern: {}", e)))?;

        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry.map_err(|e| BoltError::Io(e.into_error()))?);
        }
        paths.sort();

        let mut library = PresetLibrary::new();
        for path in paths {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(&format!(".{}", PRESET_EXTENSION)))
                .map(str::to_string);
            if let Some(name) = name {
                let preset = import_preset(dir, &name)?;
                library.insert(name, preset);
            }
        }

        info!("Loaded {} presets from {}", library.len(), dir.display());
        Ok(library)
    }

    pub fn insert(&mut self, name: impl Into<String>, preset: EffectPreset) {
        self.0.insert(name.into(), preset);
    }

    pub fn get(&self, name: &str) -> Result<&EffectPreset, BoltError> {
        self.0.get(name).ok_or_else(|| BoltError::UnknownPreset(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, EffectPreset> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
