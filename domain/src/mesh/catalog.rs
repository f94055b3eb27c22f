//! Mock Catalog — canned meshes keyed by subject keyword.
//!
//! Used whenever live mesh generation is disabled or fails. Lookup never
//! fails: an unmatched subject yields [`Mesh::quad`].

use super::entities::Mesh;

/// A named example shape and the keywords that select it.
pub struct CatalogEntry {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    build: fn() -> Mesh,
}

impl CatalogEntry {
    /// Build this entry's mesh.
    pub fn mesh(&self) -> Mesh {
        (self.build)()
    }

    fn matches(&self, haystack_lower: &str) -> bool {
        self.keywords.iter().any(|k| haystack_lower.contains(k))
    }
}

/// Entries in priority order; the first keyword match wins.
static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "camera",
        keywords: &["camera", "lens", "photograph"],
        build: camera,
    },
    CatalogEntry {
        name: "pyramid",
        keywords: &["pyramid", "tetrahedron"],
        build: pyramid,
    },
    CatalogEntry {
        name: "crystal",
        keywords: &["crystal", "octahedron", "diamond", "molecule"],
        build: octahedron,
    },
    CatalogEntry {
        name: "nut",
        keywords: &["gear", "nut", "bolt", "hexagon"],
        build: hex_prism,
    },
    CatalogEntry {
        name: "cube",
        keywords: &["cube", "box", "block"],
        build: cube,
    },
];

/// Static, read-only library of example meshes.
///
/// Safe to share across any number of concurrent queries.
pub struct MockCatalog;

impl MockCatalog {
    /// Case-insensitive keyword lookup against a directive or query.
    pub fn lookup(text: &str) -> Mesh {
        Self::find(text)
            .map(CatalogEntry::mesh)
            .unwrap_or_else(Mesh::quad)
    }

    /// The entry a lookup would select, if any keyword matches.
    pub fn find(text: &str) -> Option<&'static CatalogEntry> {
        let lower = text.to_lowercase();
        ENTRIES.iter().find(|entry| entry.matches(&lower))
    }

    /// All catalog entries in priority order.
    pub fn entries() -> &'static [CatalogEntry] {
        ENTRIES
    }
}

// ==================== Shapes ====================

fn or_quad(mesh: Result<Mesh, crate::core::error::DomainError>) -> Mesh {
    mesh.unwrap_or_else(|_| Mesh::quad())
}

/// Triangles of an axis-aligned box whose corners are numbered
/// `base..base+8` in the order produced by [`box_points`].
fn box_triangles(base: u32) -> [[u32; 3]; 12] {
    [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
    ]
    .map(|t| t.map(|i| i + base))
}

fn box_points(min: [f32; 3], max: [f32; 3]) -> [[f32; 3]; 8] {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;
    [
        [x0, y0, z0],
        [x1, y0, z0],
        [x1, y1, z0],
        [x0, y1, z0],
        [x0, y0, z1],
        [x1, y0, z1],
        [x1, y1, z1],
        [x0, y1, z1],
    ]
}

fn cube() -> Mesh {
    or_quad(Mesh::from_points(
        &box_points([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]),
        &box_triangles(0),
    ))
}

/// Camera body with a lens barrel protruding from the front face.
fn camera() -> Mesh {
    let mut points = box_points([-1.5, -1.0, -0.75], [1.5, 1.0, 0.75]).to_vec();
    points.extend(box_points([-0.5, -0.5, 0.75], [0.5, 0.5, 1.75]));
    let mut triangles = box_triangles(0).to_vec();
    triangles.extend(box_triangles(8));
    or_quad(Mesh::from_points(&points, &triangles))
}

fn pyramid() -> Mesh {
    let points = [
        [-1.0, 0.0, -1.0],
        [1.0, 0.0, -1.0],
        [1.0, 0.0, 1.0],
        [-1.0, 0.0, 1.0],
        [0.0, 1.5, 0.0],
    ];
    let triangles = [
        [0, 1, 2],
        [0, 2, 3],
        [0, 4, 1],
        [1, 4, 2],
        [2, 4, 3],
        [3, 4, 0],
    ];
    or_quad(Mesh::from_points(&points, &triangles))
}

fn octahedron() -> Mesh {
    let points = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    let triangles = [
        [0, 2, 4],
        [4, 2, 1],
        [1, 2, 5],
        [5, 2, 0],
        [0, 4, 3],
        [4, 1, 3],
        [1, 5, 3],
        [5, 0, 3],
    ];
    or_quad(Mesh::from_points(&points, &triangles))
}

/// Hexagonal prism: top ring 0..6, bottom ring 6..12, caps centred at 12 and 13.
fn hex_prism() -> Mesh {
    const SIDES: u32 = 6;
    let mut points = Vec::with_capacity(14);
    for y in [0.5_f32, -0.5] {
        for k in 0..SIDES {
            let angle = (k as f32) * std::f32::consts::TAU / SIDES as f32;
            points.push([angle.cos(), y, angle.sin()]);
        }
    }
    points.push([0.0, 0.5, 0.0]);
    points.push([0.0, -0.5, 0.0]);

    let (top, bottom) = (2 * SIDES, 2 * SIDES + 1);
    let mut triangles = Vec::with_capacity(4 * SIDES as usize);
    for i in 0..SIDES {
        let next = (i + 1) % SIDES;
        triangles.push([top, i, next]);
        triangles.push([bottom, SIDES + next, SIDES + i]);
        triangles.push([i, SIDES + i, SIDES + next]);
        triangles.push([i, SIDES + next, next]);
    }
    or_quad(Mesh::from_points(&points, &triangles))
}
