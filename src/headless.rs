//! Headless stand-in for the host engine
//!
//! Levels are JSON documents holding only what the session needs: map width,
//! ladder/pickup/goal/hazard rectangles and a flat floor. Motion is plain
//! velocity integration with a constant pull downward; there are no walls.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::GRAVITY;
use crate::engine::{Collectible, Contacts, LevelEngine, LevelLayout, level_map_name};
use crate::error::LevelError;
use crate::renderer::Color;
use crate::sim::{Bounds, Player};

/// Directory holding the bundled level files
pub const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/levels");

/// Slack when deciding whether the player stands on the floor
const FLOOR_EPSILON: f32 = 0.5;

/// Rectangle given by its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            right: self.x + self.width,
            top: self.y + self.height,
            bottom: self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupSpec {
    pub id: u32,
    #[serde(flatten)]
    pub rect: Rect,
    pub point_value: u32,
}

/// On-disk level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelFile {
    /// Map width in tiles
    pub map_width: u32,
    pub tile_width: f32,
    #[serde(default)]
    pub background_color: Option<Color>,
    /// Lowest y the player's feet can reach
    #[serde(default)]
    pub floor: f32,
    #[serde(default)]
    pub ladders: Vec<Rect>,
    #[serde(default)]
    pub collectibles: Vec<PickupSpec>,
    #[serde(default)]
    pub goals: Vec<Rect>,
    #[serde(default)]
    pub hazards: Vec<Rect>,
}

impl LevelFile {
    fn validate(&self, level: u32) -> Result<(), LevelError> {
        if self.map_width == 0 {
            return Err(LevelError::Invalid {
                level,
                reason: "map_width must be at least one tile".to_string(),
            });
        }
        if self.tile_width.is_nan() || self.tile_width <= 0.0 {
            return Err(LevelError::Invalid {
                level,
                reason: format!("tile_width must be positive, got {}", self.tile_width),
            });
        }
        Ok(())
    }

    pub fn layout(&self) -> LevelLayout {
        LevelLayout::from_tiles(self.map_width, self.tile_width, self.background_color)
    }
}

#[derive(Debug, Clone)]
enum LevelSource {
    Dir(PathBuf),
    Memory(Vec<LevelFile>),
}

#[derive(Debug, Clone)]
struct LoadedLevel {
    file: LevelFile,
    removed: HashSet<u32>,
}

/// Engine that runs without a window
#[derive(Debug, Clone)]
pub struct HeadlessEngine {
    source: LevelSource,
    current: Option<LoadedLevel>,
}

impl HeadlessEngine {
    /// Read levels from `dir/platform_level_NN.json`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            source: LevelSource::Dir(dir.as_ref().to_path_buf()),
            current: None,
        }
    }

    /// Serve levels from memory; index 0 is level 1
    pub fn from_levels(levels: Vec<LevelFile>) -> Self {
        Self {
            source: LevelSource::Memory(levels),
            current: None,
        }
    }

    /// The currently loaded level, if any
    pub fn level(&self) -> Option<&LevelFile> {
        self.current.as_ref().map(|l| &l.file)
    }

    fn read_level(&self, level: u32) -> Result<LevelFile, LevelError> {
        match &self.source {
            LevelSource::Dir(dir) => {
                let path = dir.join(format!("{}.json", level_map_name(level)));
                if !path.exists() {
                    return Err(LevelError::NotFound { level, path });
                }
                let json = std::fs::read_to_string(&path).map_err(|source| LevelError::Io {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&json).map_err(|source| LevelError::Parse { path, source })
            }
            LevelSource::Memory(levels) => level
                .checked_sub(1)
                .and_then(|i| levels.get(i as usize))
                .cloned()
                .ok_or_else(|| LevelError::NotFound {
                    level,
                    path: PathBuf::from(level_map_name(level)),
                }),
        }
    }

    fn floor(&self) -> f32 {
        self.level().map_or(0.0, |l| l.floor)
    }
}

impl LevelEngine for HeadlessEngine {
    fn load_level(&mut self, level: u32) -> Result<LevelLayout, LevelError> {
        let file = self.read_level(level)?;
        file.validate(level)?;
        let layout = file.layout();
        log::debug!(
            "Loaded {} ({} pickups, {} goals, {} hazards)",
            level_map_name(level),
            file.collectibles.len(),
            file.goals.len(),
            file.hazards.len()
        );
        self.current = Some(LoadedLevel {
            file,
            removed: HashSet::new(),
        });
        Ok(layout)
    }

    fn step(&mut self, player: &mut Player, _dt: f32) {
        if !self.is_on_ladder(player) {
            player.change.y -= GRAVITY;
        }
        player.center += player.change;

        let floor = self.floor();
        let bottom = player.bounds().bottom;
        if bottom < floor {
            player.center.y += floor - bottom;
            player.change.y = 0.0;
        }
    }

    fn can_jump(&self, player: &Player) -> bool {
        player.bounds().bottom <= self.floor() + FLOOR_EPSILON
    }

    fn is_on_ladder(&self, player: &Player) -> bool {
        let bounds = player.bounds();
        self.level()
            .is_some_and(|l| l.ladders.iter().any(|r| r.bounds().overlaps(&bounds)))
    }

    fn contacts(&self, player: &Bounds) -> Contacts {
        let Some(loaded) = &self.current else {
            return Contacts::none();
        };
        let level = &loaded.file;
        Contacts {
            collectibles: level
                .collectibles
                .iter()
                .filter(|c| !loaded.removed.contains(&c.id) && c.rect.bounds().overlaps(player))
                .map(|c| Collectible {
                    id: c.id,
                    point_value: c.point_value,
                })
                .collect(),
            goal: level.goals.iter().any(|r| r.bounds().overlaps(player)),
            hazard: level.hazards.iter().any(|r| r.bounds().overlaps(player)),
        }
    }

    fn remove_collectible(&mut self, id: u32) {
        if let Some(loaded) = &mut self.current {
            loaded.removed.insert(id);
        }
    }
}
