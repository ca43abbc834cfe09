//! Mesh primitive to material assignment
//!
//! The policy is chosen from the number of material indices supplied:
//! one index applies to every mesh, one index per mesh applies positionally,
//! and no indices either leave the converter's assignment alone or, when the
//! legacy split is enabled, treat the first two thirds of the meshes as faces
//! (material 0) and the rest as edges (material 1).

use gltf_json as json;

use crate::error::{BinderError, BinderResult};

/// Material used for face meshes under the legacy split
pub const FACE_MATERIAL: u32 = 0;
/// Material used for edge meshes under the legacy split
pub const EDGE_MATERIAL: u32 = 1;

/// How material indices map onto meshes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentPolicy {
    /// Every mesh gets the same material
    Uniform(u32),
    /// Mesh `i` gets entry `i`
    Positional(Vec<u32>),
    /// First `floor(n * 2 / 3)` meshes get material 0, the rest material 1
    FaceEdgeSplit,
    /// Leave primitives as the converter produced them
    Unchanged,
}

impl AssignmentPolicy {
    /// Choose a policy for `mesh_count` meshes
    pub fn select(indices: &[u32], mesh_count: usize, legacy_split: bool) -> BinderResult<Self> {
        match indices {
            [index] => Ok(Self::Uniform(*index)),
            [] if legacy_split => Ok(Self::FaceEdgeSplit),
            [] => Ok(Self::Unchanged),
            _ if indices.len() == mesh_count => Ok(Self::Positional(indices.to_vec())),
            _ => Err(BinderError::IndexCountMismatch {
                indices: indices.len(),
                meshes: mesh_count,
            }),
        }
    }

    /// Material index for every mesh, or `None` when nothing changes
    pub fn resolve(&self, mesh_count: usize) -> Option<Vec<u32>> {
        match self {
            Self::Uniform(index) => Some(vec![*index; mesh_count]),
            Self::Positional(indices) => Some(indices.clone()),
            Self::FaceEdgeSplit => {
                let faces = face_count(mesh_count);
                Some(
                    (0..mesh_count)
                        .map(|i| if i < faces { FACE_MATERIAL } else { EDGE_MATERIAL })
                        .collect(),
                )
            }
            Self::Unchanged => None,
        }
    }
}

/// Number of leading face meshes under the legacy split
pub const fn face_count(mesh_count: usize) -> usize {
    mesh_count * 2 / 3
}

/// Point every primitive of each mesh at its resolved material
///
/// `resolved` must hold one entry per mesh.
pub fn apply(meshes: &mut [json::Mesh], resolved: &[u32]) {
    for (mesh, &index) in meshes.iter_mut().zip(resolved) {
        if mesh.primitives.len() != 1 {
            log::debug!("Mesh has {} primitives, assigning material {} to all", mesh.primitives.len(), index);
        }
        for primitive in &mut mesh.primitives {
            primitive.material = Some(json::Index::new(index));
        }
    }
}

/// Material indices already set on primitives, in mesh order
///
/// Indices too large for `u32` saturate, which still fails any range check.
pub fn existing_indices(meshes: &[json::Mesh]) -> impl Iterator<Item = u32> + '_ {
    meshes
        .iter()
        .flat_map(|mesh| mesh.primitives.iter())
        .filter_map(|primitive| primitive.material)
        .map(|index| u32::try_from(index.value()).unwrap_or(u32::MAX))
}

/// Select a policy and assign materials in one step
///
/// Does not check indices against a material count; see
/// [`super::MaterialBinder::bind`] for the validated path.
pub fn assign_materials(
    meshes: &mut [json::Mesh],
    material_indices: &[u32],
    legacy_split: bool,
) -> BinderResult<AssignmentPolicy> {
    let policy = AssignmentPolicy::select(material_indices, meshes.len(), legacy_split)?;
    if let Some(resolved) = policy.resolve(meshes.len()) {
        apply(meshes, &resolved);
    }
    Ok(policy)
}
