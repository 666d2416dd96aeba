//! Per-cell terrain classification and walkable-set accumulation.

use glam::IVec3;
use hashbrown::HashSet;

use crate::noise_source::NoiseSource;

/// Discrete terrain category assigned to a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainType {
    /// Open water.
    Water,
    /// Default traversable ground.
    Grass,
    /// Shoreline sand.
    Sand,
    /// High terrain; currently the only walkable category.
    Mountain,
}

/// One classified grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    /// Cell position on the grid plane (y is always 0).
    pub position: IVec3,
    /// Assigned terrain category.
    pub terrain: TerrainType,
    /// Traversal cost for a pathfinding consumer.
    pub cost: u32,
}

/// The set of grid positions considered walkable. Unique, unordered.
pub type WalkableSet = HashSet<IVec3>;

/// A classified grid of [`Node`]s, row-major with z outer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    nodes: Vec<Node>,
}

impl Grid {
    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The node at cell `(x, z)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `z >= height`.
    pub fn get(&self, x: u32, z: u32) -> &Node {
        assert!(x < self.width && z < self.height, "cell ({x}, {z}) out of bounds");
        &self.nodes[z as usize * self.width as usize + x as usize]
    }

    /// Iterate over all nodes. Read-only; debug overlays draw from this.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Classify every cell of a `width x height` grid from a noise source.
///
/// Each cell samples the source at the flattened index `x * width + z`,
/// rounded to one decimal place, and is assigned a category by the first
/// matching rule. The source must cover that index for every cell.
///
/// The first rule captures every value above 0.5, so the Water and Sand
/// rules below it never match: only Mountain or Grass cells are produced,
/// and every Mountain cell lands in the walkable set.
pub fn classify(width: u32, height: u32, source: &impl NoiseSource) -> (Grid, WalkableSet) {
    let mut nodes = Vec::with_capacity(width as usize * height as usize);
    let mut walkable = WalkableSet::new();

    for z in 0..height {
        for x in 0..width {
            let index = (x * width + z) as usize;
            let value = (source.sample(index) * 10.0).round() / 10.0;
            let position = IVec3::new(x as i32, 0, z as i32);

            let terrain = if value > 0.5 {
                walkable.insert(position);
                TerrainType::Mountain
            } else if value >= 0.9 {
                TerrainType::Water
            } else if (0.8..0.9).contains(&value) {
                TerrainType::Sand
            } else {
                TerrainType::Grass
            };

            nodes.push(Node {
                position,
                terrain,
                cost: 1,
            });
        }
    }

    (
        Grid {
            width,
            height,
            nodes,
        },
        walkable,
    )
}
