use std::collections::HashMap;
use crate::bodies::{BodyDesc, BodyFlags};
use crate::core::{BodyHandle, ShapeHandle};
use crate::error::SandboxError;
use crate::shapes::ShapeDesc;
use crate::Result;

/// Everything the sandbox remembers about a body it created
#[derive(Debug, Clone)]
pub struct BodyRecord {
    /// How the body was described when it was created
    pub desc: BodyDesc,

    /// Role of the body in the sandbox
    pub flags: BodyFlags,

    /// Shapes attached to the body, in attach order
    pub shapes: Vec<ShapeHandle>,
}

/// Everything the sandbox remembers about a shape it created
#[derive(Debug, Clone, Copy)]
pub struct ShapeRecord {
    /// The body the shape is attached to
    pub body: BodyHandle,

    /// Geometry and material of the shape
    pub desc: ShapeDesc,
}

/// Book of every engine handle allocated by the sandbox.
///
/// Only the world adds to or removes from the registry; everyone else reads.
#[derive(Debug, Default)]
pub struct Registry {
    bodies: HashMap<BodyHandle, BodyRecord>,
    shapes: HashMap<ShapeHandle, ShapeRecord>,
}

impl Registry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_body(&mut self, handle: BodyHandle, desc: BodyDesc, flags: BodyFlags) {
        self.bodies.insert(handle, BodyRecord {
            desc,
            flags,
            shapes: Vec::new(),
        });
    }

    pub(crate) fn insert_shape(&mut self, handle: ShapeHandle, body: BodyHandle, desc: ShapeDesc) {
        if let Some(record) = self.bodies.get_mut(&body) {
            record.shapes.push(handle);
        }
        self.shapes.insert(handle, ShapeRecord { body, desc });
    }

    /// Removes a shape and detaches it from its body record
    pub(crate) fn remove_shape(&mut self, handle: ShapeHandle) -> Option<ShapeRecord> {
        let record = self.shapes.remove(&handle)?;
        if let Some(body) = self.bodies.get_mut(&record.body) {
            body.shapes.retain(|shape| *shape != handle);
        }
        Some(record)
    }

    /// Removes a body and every shape attached to it
    pub(crate) fn remove_body(&mut self, handle: BodyHandle) -> Option<BodyRecord> {
        let record = self.bodies.remove(&handle)?;
        for shape in &record.shapes {
            self.shapes.remove(shape);
        }
        Some(record)
    }

    /// Gets a body record by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&BodyRecord> {
        self.bodies
            .get(&handle)
            .ok_or_else(|| SandboxError::ResourceNotFound(format!("Body {} not registered", handle)))
    }

    /// Gets a shape record by its handle, returning an error if not found
    pub fn get_shape(&self, handle: ShapeHandle) -> Result<&ShapeRecord> {
        self.shapes
            .get(&handle)
            .ok_or_else(|| SandboxError::ResourceNotFound(format!("Shape {} not registered", handle)))
    }

    pub fn contains_body(&self, handle: BodyHandle) -> bool {
        self.bodies.contains_key(&handle)
    }

    pub fn contains_shape(&self, handle: ShapeHandle) -> bool {
        self.shapes.contains_key(&handle)
    }

    /// Returns every body whose flags contain all of `flags`
    pub fn bodies_with(&self, flags: BodyFlags) -> impl Iterator<Item = (BodyHandle, &BodyRecord)> + '_ {
        self.bodies
            .iter()
            .filter(move |(_, record)| record.flags.contains(flags))
            .map(|(handle, record)| (*handle, record))
    }

    /// Returns every shape attached to a body whose flags contain all of `flags`
    pub fn shapes_with(&self, flags: BodyFlags) -> impl Iterator<Item = (ShapeHandle, &ShapeRecord)> + '_ {
        self.shapes
            .iter()
            .filter(move |(_, record)| {
                self.bodies
                    .get(&record.body)
                    .map_or(false, |body| body.flags.contains(flags))
            })
            .map(|(handle, record)| (*handle, record))
    }

    /// Returns the number of registered bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the number of registered shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
